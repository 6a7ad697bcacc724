//! Datei-Dialoge (rfd): Geofences öffnen, Payload speichern.

use crate::app::{AppIntent, UiState};

const PAYLOAD_DEFAULT_NAME: &str = "geofence.json";

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Geofence-Datei öffnen
    if ui_state.show_open_dialog {
        ui_state.show_open_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Geofences (JSON)", &["json"])
            .pick_file()
        {
            events.push(AppIntent::GeofencesFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Payload speichern
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Geofence-Payload (JSON)", &["json"])
            .set_file_name(PAYLOAD_DEFAULT_NAME)
            .save_file()
        {
            events.push(AppIntent::PayloadFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
