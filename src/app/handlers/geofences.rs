//! Handler für die Anzeige bestehender Geofences.

use crate::app::{AppState, StatusMessage};
use crate::core::{load_geofences_from_file, GeoBounds, GeoPoint};

/// Öffnet den Geofence-Dateidialog über UI-State.
pub fn request_open(state: &mut AppState) {
    state.ui.show_open_dialog = true;
}

/// Lädt eine Geofence-Liste und zentriert die Kamera darauf.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let geofences = load_geofences_from_file(std::path::Path::new(&path))?;

    let centers: Vec<GeoPoint> = geofences.iter().map(|g| g.center_point).collect();
    if let Some(bounds) = GeoBounds::from_points(&centers) {
        state.view.camera.look_at(bounds.center());
    }

    state.ui.status_message = Some(StatusMessage::info(format!(
        "{} Geofences geladen",
        geofences.len()
    )));
    state.ui.geofence_file_path = Some(path);
    state.geofences = geofences;
    Ok(())
}

/// Entfernt alle angezeigten Geofences.
pub fn clear(state: &mut AppState) {
    state.geofences.clear();
    state.ui.geofence_file_path = None;
}
