//! Handler für den Formular-Entwurf eines neuen Geofence.

use crate::app::{AppState, StatusMessage};
use crate::core::GeofenceDraft;
use anyhow::Context;

/// Übernimmt die Formularfelder. Geometrie und Referenzpunkt stammen
/// ausschließlich aus der Zeichen-Session und bleiben unverändert.
pub fn update(state: &mut AppState, draft: GeofenceDraft) {
    let geometry = state.capture.draft.geometry.take();
    let center_point = state.capture.draft.center_point;
    state.capture.draft = GeofenceDraft {
        geometry,
        center_point,
        ..draft
    };
    state.ui.payload_json = None;
}

/// Validiert den Entwurf und legt das Payload-JSON ab.
///
/// Validierungsfehler landen in der Statusleiste und sind kein Fehler des Commands.
pub fn submit(state: &mut AppState) {
    match state.capture.draft.to_create_json() {
        Ok(json) => {
            log::info!("Geofence-Payload erzeugt ({} Bytes)", json.len());
            state.ui.payload_json = Some(json);
            state.ui.status_message = Some(StatusMessage::info("Payload erzeugt"));
        }
        Err(e) => {
            log::warn!("Entwurf ungültig: {:#}", e);
            state.ui.payload_json = None;
            state.ui.status_message = Some(StatusMessage::error(format!("{:#}", e)));
        }
    }
}

/// Öffnet den Speichern-Dialog, sofern ein gültiger Payload vorliegt.
pub fn request_export(state: &mut AppState) {
    if state.ui.payload_json.is_some() {
        state.ui.show_export_dialog = true;
    }
}

/// Schreibt den Payload als JSON-Datei.
pub fn export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let json = state
        .ui
        .payload_json
        .as_deref()
        .context("Kein gültiger Payload zum Speichern")?;
    std::fs::write(&path, json).with_context(|| format!("Payload nicht schreibbar: {}", path))?;
    log::info!("Payload gespeichert nach: {}", path);
    state.ui.status_message = Some(StatusMessage::info(format!("Gespeichert: {}", path)));
    Ok(())
}
