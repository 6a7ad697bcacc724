//! Scroll-Zoom auf Mausposition.

use super::{local_px, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 || !ctx.response.hovered() {
            return;
        }

        let step = ctx.options.camera_scroll_zoom_step;
        let delta_levels = if scroll > 0.0 { step } else { -step };
        let focus_px = ctx
            .response
            .hover_pos()
            .map(|pos| local_px(pos, ctx.response));
        events.push(AppIntent::CameraZoom {
            delta_levels,
            focus_px,
        });
    }
}
