//! Core-Domänentypen: Geo-Punkte, kanonische Geometrie, Vereinfachung,
//! Normalisierung, Karten-Kamera und Geofence-Datensätze.

pub mod bounds;
pub mod camera;
pub mod geo_point;
pub mod geofence;
/// Kanonische Geometrie-Datenmodelle
///
/// - CanonicalGeometry: Polygon-Ring oder Kreis
/// - CaptureResult: Geometrie + Referenzpunkt einer Erfassung
/// - ShapeKind: Art des gezeichneten Primitivs
pub mod geometry;
pub mod normalize;
pub mod simplify;

pub use bounds::GeoBounds;
pub use camera::MapCamera;
pub use geo_point::{GeoPoint, EARTH_RADIUS_M};
pub use geofence::{
    load_geofences_from_file, parse_geofences, GeofenceCreatePayload, GeofenceDraft,
    GeofenceRecord, GeofenceStatus,
};
pub use geometry::{CanonicalGeometry, CaptureResult, ShapeKind};
pub use normalize::{normalize, DrawnPrimitive};
pub use simplify::simplify;
