//! Handler für die Zeichen-Session.
//!
//! Alle Funktionen leiten an `DrawingSession` weiter; der `CaptureState`
//! ist dabei der Empfänger der Session-Ausgaben.

use crate::app::session::DrawingMode;
use crate::app::AppState;
use crate::core::{GeoPoint, ShapeKind};

/// Wechselt den Zeichenmodus (bricht laufende Eingaben ab).
pub fn start(state: &mut AppState, mode: DrawingMode) {
    sync_snap_radius(state);
    state.session.start_drawing(mode, &mut state.capture);
}

/// Maustaste gedrückt.
pub fn press(state: &mut AppState, geo_pos: GeoPoint) {
    sync_snap_radius(state);
    state.session.on_press(geo_pos, &mut state.capture);
}

/// Zeiger bewegt.
pub fn move_to(state: &mut AppState, geo_pos: GeoPoint) {
    state.session.on_move(geo_pos, &mut state.capture);
}

/// Maustaste losgelassen.
pub fn release(state: &mut AppState, geo_pos: GeoPoint) {
    state.session.on_release(geo_pos, &mut state.capture);
}

/// Doppelklick.
pub fn double_click(state: &mut AppState) {
    state.session.on_double_click(&mut state.capture);
}

/// Bestätigt das aktive Werkzeug.
pub fn confirm(state: &mut AppState) {
    state.session.confirm(&mut state.capture);
}

/// Löscht die Zeichnung und verwirft den erzeugten Payload.
pub fn clear(state: &mut AppState) {
    state.session.clear_drawing(&mut state.capture);
    state.ui.payload_json = None;
}

/// Gibt ein Werkzeug frei bzw. sperrt es. Ein gesperrtes aktives
/// Werkzeug beendet den Zeichenmodus.
pub fn set_tool_enabled(state: &mut AppState, kind: ShapeKind, enabled: bool) {
    state.session.tools_mut().set_enabled(kind, enabled);
    let active_disabled = state
        .session
        .mode()
        .shape_kind()
        .is_some_and(|k| k == kind && !enabled);
    if active_disabled {
        state
            .session
            .start_drawing(DrawingMode::None, &mut state.capture);
    }
    log::info!(
        "Werkzeug {:?} {}",
        kind,
        if enabled { "freigegeben" } else { "gesperrt" }
    );
}

/// Setzt die Lasso-Toleranz (Session und Optionen).
pub fn set_lasso_tolerance(state: &mut AppState, tolerance: f64) {
    state.session.set_lasso_tolerance(tolerance);
    state.options.lasso_tolerance_deg = state.session.lasso_tolerance();
}

/// Rechnet den Pixel-Klickradius der Optionen in Grad der aktuellen Zoomstufe um.
fn sync_snap_radius(state: &mut AppState) {
    let radius_deg = state.view.camera.degrees_per_pixel() * state.options.polygon_close_radius_px;
    state.session.tools_mut().set_snap_radius(radius_deg);
}
