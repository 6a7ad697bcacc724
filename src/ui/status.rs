//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState, StatusSeverity};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Modus: {}", state.session.mode().label()));
            ui.separator();

            match &state.ui.geofence_file_path {
                Some(path) => {
                    let filename = std::path::Path::new(path)
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unbekannt");
                    ui.label(format!("{} ({} Geofences)", filename, state.geofence_count()));
                }
                None => {
                    ui.label("Keine Geofence-Datei geladen");
                }
            }
            ui.separator();

            let camera = &state.view.camera;
            ui.label(format!(
                "Zoom: {:.2} | Mitte: {:.5}, {:.5}",
                camera.zoom, camera.center.latitude, camera.center.longitude
            ));

            if let Some(cursor) = state.view.cursor_geo {
                ui.separator();
                ui.label(format!("Zeiger: {:.6}, {:.6}", cursor.latitude, cursor.longitude));
            }

            if let Some(message) = &state.ui.status_message {
                ui.separator();
                let color = match message.severity {
                    StatusSeverity::Info => ui.visuals().text_color(),
                    StatusSeverity::Error => ui.visuals().error_fg_color,
                };
                ui.colored_label(color, message.text.as_str());
                if ui.small_button("✕").clicked() {
                    events.push(AppIntent::DismissStatusRequested);
                }
            }
        });
    });

    events
}
