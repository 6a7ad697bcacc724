//! Normalisierung gezeichneter Primitive in die kanonische Geometrie.

use super::{CanonicalGeometry, CaptureResult, GeoBounds, GeoPoint, ShapeKind};

/// Rohes Ergebnis eines Zeichenwerkzeugs bzw. der Lasso-Erfassung.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawnPrimitive {
    /// Offener Ring (noch ohne Schlusspunkt)
    Ring(Vec<GeoPoint>),
    /// Kreis mit Mittelpunkt und Radius in Metern
    Circle {
        /// Mittelpunkt
        center: GeoPoint,
        /// Radius in Metern
        radius_meters: f64,
    },
}

/// Mindestanzahl Punkte eines offenen Rings.
pub const MIN_RING_POINTS: usize = 3;

/// Wandelt ein Primitiv in ein `CaptureResult` um.
///
/// - Ring-Arten: Schlusspunkt anhängen, Referenzpunkt = Bounding-Box-Mitte.
/// - Kreis: Mittelpunkt/Radius übernehmen, Referenzpunkt = Mittelpunkt.
///
/// Gibt `None` zurück (stiller No-Op) bei weniger als 3 Ringpunkten
/// oder wenn Primitiv und Art nicht zusammenpassen.
pub fn normalize(primitive: &DrawnPrimitive, kind: ShapeKind) -> Option<CaptureResult> {
    match (primitive, kind.is_ring()) {
        (DrawnPrimitive::Ring(points), true) => normalize_ring(points),
        (
            DrawnPrimitive::Circle {
                center,
                radius_meters,
            },
            false,
        ) => Some(CaptureResult::captured(
            CanonicalGeometry::Circle {
                center: *center,
                radius_meters: radius_meters.max(0.0),
            },
            *center,
        )),
        _ => {
            log::warn!("Primitiv passt nicht zur Art {:?}, ignoriert", kind);
            None
        }
    }
}

fn normalize_ring(points: &[GeoPoint]) -> Option<CaptureResult> {
    if points.len() < MIN_RING_POINTS {
        return None;
    }

    let bounds = GeoBounds::from_points(points)?;

    let mut ring = Vec::with_capacity(points.len() + 1);
    ring.extend_from_slice(points);
    ring.push(points[0]);

    Some(CaptureResult::captured(
        CanonicalGeometry::Polygon { ring },
        bounds.center(),
    ))
}
