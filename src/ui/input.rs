//! Viewport-Input-Handling: Maus-Events, Zeichen-Drags, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks`: Klick-Events (Einfach-/Doppel-Klick in Zeichenmodi)
//! - `drag_primary`: Drag-Start/-Update/-Ende (Zeichnen oder Kamera-Pan)
//! - `zoom`: Scroll-Zoom auf Mausposition

mod clicks;
mod drag_primary;
mod zoom;

use super::keyboard;
use crate::app::{AppIntent, DrawingMode, ViewState};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    CameraPan,
    /// Drag wird als Zeichen-Eingabe an die Session geleitet
    Drawing,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub view: &'a ViewState,
    pub mode: DrawingMode,
    /// Ob der aktive Modus Links-Drags als Zeichen-Eingabe beansprucht
    pub captures_drag: bool,
    pub options: &'a EditorOptions,
}

impl ViewportContext<'_> {
    /// Rechnet eine Bildschirmposition in einen Geo-Punkt um.
    pub(crate) fn screen_to_geo(&self, pointer_pos: egui::Pos2) -> crate::core::GeoPoint {
        self.view.screen_to_geo(local_px(pointer_pos, self.response))
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Drag-Modus)
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus-, Scroll-, Drag- und
    /// Tastatur-Interaktionen im Kartenbereich.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        view: &ViewState,
        mode: DrawingMode,
        captures_drag: bool,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            view,
            mode,
            captures_drag,
            options,
        };

        let size = response.rect.size();
        let mut events = vec![AppIntent::ViewportResized {
            size: [size.x, size.y],
        }];

        events.push(AppIntent::CursorMoved {
            geo_pos: response.hover_pos().map(|pos| ctx.screen_to_geo(pos)),
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_drag_start(&ctx, &mut events);
        self.handle_drag_update(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_secondary_pan(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Bildschirmposition relativ zur linken oberen Ecke des Viewports.
pub(crate) fn local_px(pointer_pos: egui::Pos2, response: &egui::Response) -> DVec2 {
    let local = pointer_pos - response.rect.min;
    DVec2::new(local.x as f64, local.y as f64)
}
