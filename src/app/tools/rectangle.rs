//! Rechteck-Tool: Ecke drücken, Gegenecke aufziehen, loslassen.

use super::{ShapeTool, ToolAction, ToolPreview};
use crate::core::{DrawnPrimitive, GeoBounds, GeoPoint, ShapeKind};

/// Rechteck-Tool
#[derive(Default)]
pub struct RectangleTool {
    pub(crate) anchor: Option<GeoPoint>,
    pub(crate) corner: Option<GeoPoint>,
    pub(crate) finished: bool,
}

impl RectangleTool {
    /// Erstellt ein neues Rechteck-Tool.
    pub fn new() -> Self {
        Self::default()
    }

    fn bounds(&self) -> Option<GeoBounds> {
        let anchor = self.anchor?;
        let corner = self.corner?;
        let mut bounds = GeoBounds::from_point(anchor);
        bounds.extend(corner);
        Some(bounds)
    }
}

/// Eckpunkte im Uhrzeigersinn ab Südwest: SW, NW, NE, SE.
pub(crate) fn rectangle_corners(bounds: &GeoBounds) -> Vec<GeoPoint> {
    vec![
        bounds.south_west,
        bounds.north_west(),
        bounds.north_east,
        bounds.south_east(),
    ]
}

impl ShapeTool for RectangleTool {
    fn name(&self) -> &str {
        "Rechteck"
    }

    fn icon(&self) -> &str {
        "▭"
    }

    fn description(&self) -> &str {
        "Klicken und aufziehen"
    }

    fn status_text(&self) -> &str {
        if self.anchor.is_some() {
            "Gegenecke aufziehen und loslassen"
        } else {
            "Erste Ecke drücken"
        }
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn on_press(&mut self, pos: GeoPoint) -> ToolAction {
        self.anchor = Some(pos);
        self.corner = Some(pos);
        self.finished = false;
        ToolAction::Continue
    }

    fn on_move(&mut self, pos: GeoPoint) {
        if self.anchor.is_some() && !self.finished {
            self.corner = Some(pos);
        }
    }

    fn on_release(&mut self, pos: GeoPoint) -> ToolAction {
        if self.anchor.is_none() {
            return ToolAction::Continue;
        }
        self.corner = Some(pos);
        match self.bounds() {
            Some(bounds) if !bounds.is_degenerate() => {
                self.finished = true;
                ToolAction::ReadyToExecute
            }
            _ => {
                // Flächenloses Rechteck (reiner Klick) verwerfen
                self.reset();
                ToolAction::Continue
            }
        }
    }

    fn preview(&self, _cursor_pos: Option<GeoPoint>) -> ToolPreview {
        match self.bounds() {
            Some(bounds) => ToolPreview::Path {
                points: rectangle_corners(&bounds),
                closed: true,
            },
            None => ToolPreview::Empty,
        }
    }

    fn execute(&self) -> Option<DrawnPrimitive> {
        if !self.finished {
            return None;
        }
        let bounds = self.bounds()?;
        Some(DrawnPrimitive::Ring(rectangle_corners(&bounds)))
    }

    fn reset(&mut self) {
        self.anchor = None;
        self.corner = None;
        self.finished = false;
    }

    fn is_ready(&self) -> bool {
        self.finished
    }

    fn has_pending_input(&self) -> bool {
        self.anchor.is_some()
    }

    fn captures_drag(&self) -> bool {
        true
    }
}
