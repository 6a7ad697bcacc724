//! Top-Menü (Datei, Ansicht, Werkzeuge, Optionen).

use crate::app::{AppIntent, AppState};

/// Voreinstellungen der Lasso-Toleranz in Grad.
const TOLERANCE_PRESETS: [(&str, f64); 3] = [
    ("Fein (0.00005°)", 0.000_05),
    ("Standard (0.0001°)", 0.000_1),
    ("Grob (0.0005°)", 0.000_5),
];

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Geofences öffnen... (Ctrl+O)").clicked() {
                    events.push(AppIntent::OpenGeofencesRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        !state.geofences.is_empty(),
                        egui::Button::new("Geofences ausblenden"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ClearGeofencesRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(
                        state.capture.has_geometry(),
                        egui::Button::new("Payload speichern..."),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ExportPayloadRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden (Ctrl+Q)").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Startansicht (Pos1)").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }
                if ui.button("Hineinzoomen (+)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }
                if ui.button("Herauszoomen (-)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(
                        state.capture.has_geometry(),
                        egui::Button::new("Auf Form zentrieren"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::FocusCaptureRequested);
                    ui.close();
                }
            });

            ui.menu_button("Werkzeuge", |ui| {
                ui.label("Freigegebene Formen:");
                let tools = state.session.tools();
                for (kind, name, icon, enabled) in tools.tool_entries() {
                    let mut checked = enabled;
                    if ui
                        .checkbox(&mut checked, format!("{} {}", icon, name))
                        .on_hover_text(tools.description(kind).unwrap_or_default())
                        .changed()
                    {
                        events.push(AppIntent::ToolEnabledChanged {
                            kind,
                            enabled: checked,
                        });
                    }
                }

                ui.separator();
                ui.label("Lasso-Glättung:");
                let current = state.session.lasso_tolerance();
                for (label, tolerance) in TOLERANCE_PRESETS {
                    let selected = (current - tolerance).abs() < f64::EPSILON;
                    if ui.radio(selected, label).clicked() {
                        events.push(AppIntent::LassoToleranceChanged { tolerance });
                        ui.close();
                    }
                }
            });

            if ui.button("Optionen").clicked() {
                events.push(AppIntent::OpenOptionsDialogRequested);
            }
        });
    });

    events
}
