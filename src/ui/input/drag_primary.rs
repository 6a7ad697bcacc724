//! Drag-Start/-Update/-Ende: Zeichen-Drag oder Kamera-Pan.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;
use glam::DVec2;

impl InputState {
    /// Erkennt Drag-Beginn und bestimmt den Drag-Modus.
    pub(crate) fn handle_drag_start(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        if !ctx.captures_drag {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
            return;
        }

        // press_origin() liefert die exakte Druckposition vor der Drag-Schwelle
        let press_pos = ctx
            .ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| ctx.response.interact_pointer_pos());
        if let Some(pointer_pos) = press_pos {
            events.push(AppIntent::PointerPressed {
                geo_pos: ctx.screen_to_geo(pointer_pos),
            });
            self.primary_drag_mode = PrimaryDragMode::Drawing;
        }
    }

    /// Leitet Zeigerbewegungen während eines aktiven Drags weiter.
    pub(crate) fn handle_drag_update(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.dragged_by(egui::PointerButton::Primary) {
            return;
        }

        match self.primary_drag_mode {
            PrimaryDragMode::Drawing => {
                if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                    events.push(AppIntent::PointerDragged {
                        geo_pos: ctx.screen_to_geo(pointer_pos),
                    });
                }
            }
            PrimaryDragMode::CameraPan => {
                let delta = ctx.response.drag_delta();
                if delta != egui::Vec2::ZERO {
                    events.push(AppIntent::CameraPan {
                        delta_px: DVec2::new(delta.x as f64, delta.y as f64),
                    });
                }
            }
            PrimaryDragMode::None => {}
        }
    }

    /// Schließt einen Drag ab; Zeichen-Drags melden die Endposition.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if self.primary_drag_mode == PrimaryDragMode::Drawing {
            let release_pos = ctx
                .response
                .interact_pointer_pos()
                .or_else(|| ctx.ui.input(|i| i.pointer.latest_pos()));
            if let Some(pointer_pos) = release_pos {
                events.push(AppIntent::PointerReleased {
                    geo_pos: ctx.screen_to_geo(pointer_pos),
                });
            }
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }

    /// Mittel- und Rechts-Drag verschieben immer die Karte.
    pub(crate) fn handle_secondary_pan(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let panning = ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary);
        if !panning {
            return;
        }
        let delta = ctx.response.drag_delta();
        if delta != egui::Vec2::ZERO {
            events.push(AppIntent::CameraPan {
                delta_px: DVec2::new(delta.x as f64, delta.y as f64),
            });
        }
    }
}
