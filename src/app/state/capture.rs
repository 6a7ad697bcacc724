use crate::app::session::DrawingObserver;
use crate::core::{CanonicalGeometry, GeoPoint, GeofenceDraft};

/// Empfangsseite der Zeichen-Session: Lasso-Spur, zuletzt erfasste Form
/// und der Formular-Entwurf, der jede Erfassung übernimmt.
#[derive(Debug, Clone, Default)]
pub struct CaptureState {
    /// Aktuelle Lasso-Spur (leer = keine Vorschau)
    pub preview: Vec<GeoPoint>,
    /// Zuletzt erfasste Geometrie (bleibt sichtbar bis zur nächsten Erfassung oder Clear)
    pub geometry: Option<CanonicalGeometry>,
    /// Referenzpunkt der letzten Meldung
    pub reference_point: GeoPoint,
    /// Formular-Entwurf
    pub draft: GeofenceDraft,
    /// Anzahl empfangener Meldungen (Erfassungen + Clears)
    pub notifications: usize,
}

impl CaptureState {
    /// Ob eine Geometrie erfasst ist.
    pub fn has_geometry(&self) -> bool {
        self.geometry.is_some()
    }
}

impl DrawingObserver for CaptureState {
    fn render_preview(&mut self, points: &[GeoPoint]) {
        // Wachsende Lasso-Spur: nur den neuen Punkt anhängen
        match points.split_last() {
            Some((&last, head))
                if head.len() == self.preview.len()
                    && head.first() == self.preview.first()
                    && head.last() == self.preview.last() =>
            {
                self.preview.push(last);
            }
            _ => {
                self.preview.clear();
                self.preview.extend_from_slice(points);
            }
        }
    }

    fn clear_preview(&mut self) {
        self.preview.clear();
    }

    fn geometry_captured(&mut self, geometry: Option<&CanonicalGeometry>, reference_point: GeoPoint) {
        self.geometry = geometry.cloned();
        self.reference_point = reference_point;
        self.draft.apply_capture(geometry, reference_point);
        self.notifications += 1;
    }
}
