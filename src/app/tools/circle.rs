//! Kreis-Tool: Mittelpunkt drücken, Radius aufziehen, loslassen.
//!
//! Der Radius ist die Haversine-Distanz zwischen Mittelpunkt und Zeiger.

use super::{ShapeTool, ToolAction, ToolPreview};
use crate::core::{DrawnPrimitive, GeoPoint, ShapeKind};

/// Kreis-Tool
#[derive(Default)]
pub struct CircleTool {
    pub(crate) center: Option<GeoPoint>,
    pub(crate) rim: Option<GeoPoint>,
    pub(crate) finished: bool,
}

impl CircleTool {
    /// Erstellt ein neues Kreis-Tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Radius in Metern (0.0 ohne Mittelpunkt).
    pub fn radius_meters(&self) -> f64 {
        match (self.center, self.rim) {
            (Some(center), Some(rim)) => center.haversine_distance_m(rim),
            _ => 0.0,
        }
    }
}

impl ShapeTool for CircleTool {
    fn name(&self) -> &str {
        "Kreis"
    }

    fn icon(&self) -> &str {
        "◯"
    }

    fn description(&self) -> &str {
        "Mittelpunkt klicken, Radius aufziehen"
    }

    fn status_text(&self) -> &str {
        if self.center.is_some() {
            "Radius aufziehen und loslassen"
        } else {
            "Mittelpunkt drücken"
        }
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn on_press(&mut self, pos: GeoPoint) -> ToolAction {
        self.center = Some(pos);
        self.rim = Some(pos);
        self.finished = false;
        ToolAction::Continue
    }

    fn on_move(&mut self, pos: GeoPoint) {
        if self.center.is_some() && !self.finished {
            self.rim = Some(pos);
        }
    }

    fn on_release(&mut self, pos: GeoPoint) -> ToolAction {
        if self.center.is_none() {
            return ToolAction::Continue;
        }
        self.rim = Some(pos);
        if self.radius_meters() > 0.0 {
            self.finished = true;
            ToolAction::ReadyToExecute
        } else {
            self.reset();
            ToolAction::Continue
        }
    }

    fn preview(&self, _cursor_pos: Option<GeoPoint>) -> ToolPreview {
        match self.center {
            Some(center) => ToolPreview::Circle {
                center,
                radius_meters: self.radius_meters(),
            },
            None => ToolPreview::Empty,
        }
    }

    fn execute(&self) -> Option<DrawnPrimitive> {
        if !self.finished {
            return None;
        }
        Some(DrawnPrimitive::Circle {
            center: self.center?,
            radius_meters: self.radius_meters(),
        })
    }

    fn reset(&mut self) {
        self.center = None;
        self.rim = None;
        self.finished = false;
    }

    fn is_ready(&self) -> bool {
        self.finished
    }

    fn has_pending_input(&self) -> bool {
        self.center.is_some()
    }

    fn captures_drag(&self) -> bool {
        true
    }
}
