//! Geofence Draw Editor Library.
//! Zeichenkern (Vereinfachung, Normalisierung, Zeichen-Session) als Library
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CaptureState, DrawingMode, DrawingObserver,
    DrawingSession, UiState, ViewState,
};
pub use core::{
    normalize, simplify, CanonicalGeometry, CaptureResult, DrawnPrimitive, GeoPoint,
    GeofenceDraft, GeofenceRecord, MapCamera, ShapeKind,
};
pub use shared::EditorOptions;
