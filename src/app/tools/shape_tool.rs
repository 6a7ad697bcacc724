//! ShapeTool-Trait: Schnittstelle für alle klickgesteuerten Form-Werkzeuge.

use crate::core::{DrawnPrimitive, GeoPoint, ShapeKind};

use super::{ToolAction, ToolPreview};

/// Schnittstelle für Form-Werkzeuge (Polygon, Rechteck, Kreis).
///
/// Tools sind zustandsbehaftet (Klick-/Drag-Phasen) und erzeugen
/// Preview-Geometrie sowie am Ende genau ein `DrawnPrimitive`.
/// Die Normalisierung übernimmt die `DrawingSession`.
pub trait ShapeTool {
    /// Anzeigename für Toolbar
    fn name(&self) -> &str;

    /// Icon-Zeichen für die Toolbar
    fn icon(&self) -> &str {
        ""
    }

    /// Kurzbeschreibung / Tooltip
    fn description(&self) -> &str;

    /// Statustext für die Statusleiste (z.B. "Ersten Eckpunkt klicken")
    fn status_text(&self) -> &str;

    /// Art des erzeugten Primitivs
    fn kind(&self) -> ShapeKind;

    /// Maustaste gedrückt.
    fn on_press(&mut self, pos: GeoPoint) -> ToolAction;

    /// Zeiger bewegt (nur während gedrückter Taste relevant).
    fn on_move(&mut self, _pos: GeoPoint) {}

    /// Maustaste losgelassen.
    fn on_release(&mut self, _pos: GeoPoint) -> ToolAction {
        ToolAction::Continue
    }

    /// Doppelklick im Viewport.
    fn on_double_click(&mut self) -> ToolAction {
        ToolAction::Continue
    }

    /// Explizite Bestätigung (Enter).
    fn confirm(&mut self) -> ToolAction {
        if self.is_ready() {
            ToolAction::ReadyToExecute
        } else {
            ToolAction::Continue
        }
    }

    /// Preview-Geometrie für die aktuelle Mausposition berechnen.
    fn preview(&self, cursor_pos: Option<GeoPoint>) -> ToolPreview;

    /// Ergebnis erzeugen (reine Daten).
    fn execute(&self) -> Option<DrawnPrimitive>;

    /// Tool-Zustand zurücksetzen (Escape / Tool-Wechsel / nach Abschluss).
    fn reset(&mut self);

    /// Ist das Tool bereit zur Ausführung?
    fn is_ready(&self) -> bool;

    /// Hat das Tool angefangene Eingaben?
    fn has_pending_input(&self) -> bool {
        false
    }

    /// Ob das Tool Drag-Gesten selbst verarbeitet (sonst: Karte verschieben).
    fn captures_drag(&self) -> bool {
        false
    }

    /// Snap-Radius (Grad) vom Editor übernehmen.
    fn set_snap_radius(&mut self, _radius_deg: f64) {}
}
