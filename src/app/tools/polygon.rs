//! Polygon-Tool: Eckpunkte per Klick setzen, Schließen per Klick auf den
//! Startpunkt, Doppelklick oder Enter.

use super::{ShapeTool, ToolAction, ToolPreview};
use crate::core::normalize::MIN_RING_POINTS;
use crate::core::{DrawnPrimitive, GeoPoint, ShapeKind};

/// Standard-Snap-Radius in Grad, wird vom Handler aus der Zoomstufe überschrieben.
const DEFAULT_SNAP_RADIUS_DEG: f64 = 0.0005;

/// Polygon-Tool
pub struct PolygonTool {
    pub(crate) vertices: Vec<GeoPoint>,
    /// Ring wurde per Klick auf den Startpunkt geschlossen
    pub(crate) closed: bool,
    /// Klick-Radius (Grad) für Startpunkt-Treffer und Doppelklick-Erkennung
    pub(crate) snap_radius: f64,
}

impl PolygonTool {
    /// Erstellt ein neues Polygon-Tool ohne Eckpunkte.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            closed: false,
            snap_radius: DEFAULT_SNAP_RADIUS_DEG,
        }
    }

    /// Gesetzte Eckpunkte.
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    fn hits(&self, a: GeoPoint, b: GeoPoint) -> bool {
        a.as_planar().distance(b.as_planar()) <= self.snap_radius
    }

    fn finish_if_possible(&mut self) -> ToolAction {
        if self.vertices.len() >= MIN_RING_POINTS {
            self.closed = true;
            ToolAction::ReadyToExecute
        } else {
            ToolAction::Continue
        }
    }
}

impl Default for PolygonTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeTool for PolygonTool {
    fn name(&self) -> &str {
        "Polygon"
    }

    fn icon(&self) -> &str {
        "⬠"
    }

    fn description(&self) -> &str {
        "Eckpunkte nacheinander klicken"
    }

    fn status_text(&self) -> &str {
        match self.vertices.len() {
            0 => "Ersten Eckpunkt klicken",
            1 | 2 => "Weiteren Eckpunkt klicken",
            _ => "Startpunkt klicken, Doppelklick oder Enter zum Abschließen",
        }
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn on_press(&mut self, pos: GeoPoint) -> ToolAction {
        if self.closed {
            return ToolAction::ReadyToExecute;
        }
        if let Some(&first) = self.vertices.first() {
            if self.vertices.len() >= MIN_RING_POINTS && self.hits(pos, first) {
                return self.finish_if_possible();
            }
        }
        // Zweiter Klick eines Doppelklicks landet auf dem letzten Punkt
        if let Some(&last) = self.vertices.last() {
            if self.hits(pos, last) {
                return ToolAction::Continue;
            }
        }
        self.vertices.push(pos);
        ToolAction::Continue
    }

    fn on_double_click(&mut self) -> ToolAction {
        self.finish_if_possible()
    }

    fn confirm(&mut self) -> ToolAction {
        self.finish_if_possible()
    }

    fn preview(&self, cursor_pos: Option<GeoPoint>) -> ToolPreview {
        if self.vertices.is_empty() {
            return ToolPreview::Empty;
        }
        let mut points = self.vertices.clone();
        if !self.closed {
            if let Some(cursor) = cursor_pos {
                points.push(cursor);
            }
        }
        ToolPreview::Path {
            points,
            closed: self.closed,
        }
    }

    fn execute(&self) -> Option<DrawnPrimitive> {
        if self.vertices.len() < MIN_RING_POINTS {
            return None;
        }
        Some(DrawnPrimitive::Ring(self.vertices.clone()))
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.closed = false;
    }

    fn is_ready(&self) -> bool {
        self.vertices.len() >= MIN_RING_POINTS
    }

    fn has_pending_input(&self) -> bool {
        !self.vertices.is_empty()
    }

    fn set_snap_radius(&mut self, radius_deg: f64) {
        self.snap_radius = radius_deg.max(0.0);
    }
}
