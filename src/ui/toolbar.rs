//! Toolbar für die Wahl des Zeichenmodus.

use crate::app::{AppIntent, AppState, DrawingMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.session.mode();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Zeichnen:");
            ui.separator();

            for (index, mode) in DrawingMode::DRAWING.into_iter().enumerate() {
                let enabled = match mode.shape_kind() {
                    Some(kind) if mode.is_tool() => state.session.tools().is_enabled(kind),
                    _ => true,
                };
                let label = format!("{} ({})", mode.label(), index + 1);
                let button = egui::Button::new(label).selected(active == mode);
                if ui.add_enabled(enabled, button).clicked() {
                    // Erneuter Klick auf den aktiven Modus beendet ihn
                    let requested = if active == mode {
                        DrawingMode::None
                    } else {
                        mode
                    };
                    events.push(AppIntent::DrawingModeRequested { mode: requested });
                }
            }

            ui.separator();

            if active.is_tool()
                && ui
                    .button("Übernehmen (Enter)")
                    .on_hover_text("Offenes Polygon abschließen")
                    .clicked()
            {
                events.push(AppIntent::ConfirmRequested);
            }

            let has_shape = state.capture.has_geometry() || active != DrawingMode::None;
            if ui
                .add_enabled(has_shape, egui::Button::new("Zeichnung löschen (Entf)"))
                .clicked()
            {
                events.push(AppIntent::ClearDrawingRequested);
            }

            ui.separator();
            ui.label(state.session.status_text());
        });
    });

    events
}
