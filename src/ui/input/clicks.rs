//! Klick-Events: Einfach-/Doppel-Klick in Zeichenmodi.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::{AppIntent, DrawingMode};

impl InputState {
    /// Verarbeitet Einfach- und Doppelklick-Events im Viewport.
    ///
    /// Ein Klick wird als Press + Release an derselben Position gemeldet.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if ctx.mode == DrawingMode::None {
            return;
        }

        if ctx.response.double_clicked_by(egui::PointerButton::Primary) {
            events.push(AppIntent::PointerDoubleClicked);
            self.primary_drag_mode = PrimaryDragMode::None;
        } else if ctx.response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                let geo_pos = ctx.screen_to_geo(pointer_pos);
                events.push(AppIntent::PointerPressed { geo_pos });
                events.push(AppIntent::PointerReleased { geo_pos });
            }
            self.primary_drag_mode = PrimaryDragMode::None;
        }
    }
}
