//! Ausgehende Schnittstelle der Zeichen-Session.

use crate::core::{CanonicalGeometry, GeoPoint};

/// Empfänger der Ausgaben einer `DrawingSession`.
///
/// Alle Aufrufe erfolgen synchron innerhalb des auslösenden Events.
pub trait DrawingObserver {
    /// Zeigt die Lasso-Spur in voller Auflösung an (ersetzt die bisherige Spur).
    fn render_preview(&mut self, points: &[GeoPoint]);

    /// Entfernt die Lasso-Spur.
    fn clear_preview(&mut self);

    /// Eine Erfassung ist abgeschlossen (`None` = gelöscht, Referenzpunkt dann `(0, 0)`).
    ///
    /// Wird höchstens einmal pro abgeschlossener oder gelöschter Geste aufgerufen.
    fn geometry_captured(&mut self, geometry: Option<&CanonicalGeometry>, reference_point: GeoPoint);
}
