//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::EditorOptions;
pub use options::{LASSO_TOLERANCE_DEG, POLYGON_CLOSE_RADIUS_PX};
