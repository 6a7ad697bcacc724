//! Handler für Kamera und Viewport.

use crate::app::AppState;
use crate::core::GeoPoint;
use glam::DVec2;

/// Setzt die Kamera auf die Startansicht zurück.
pub fn reset_camera(state: &mut AppState) {
    let center = state.options.home_center();
    state.view.camera = crate::core::MapCamera::new(center, state.options.home_zoom);
}

/// Zoomt stufenweise hinein (Fokus: Viewport-Mitte).
pub fn zoom_in(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    zoom_towards(state, step, None);
}

/// Zoomt stufenweise heraus (Fokus: Viewport-Mitte).
pub fn zoom_out(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    zoom_towards(state, -step, None);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = DVec2::new(size[0] as f64, size[1] as f64);
}

/// Verschiebt die Kamera um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: DVec2) {
    state.view.camera.pan_pixels(delta_px);
}

/// Zoomt um `delta_levels` Stufen, optional auf einen Fokuspunkt in Viewport-Pixeln.
pub fn zoom_towards(state: &mut AppState, delta_levels: f64, focus_px: Option<DVec2>) {
    let viewport = state.view.viewport_size;
    let focus = focus_px.unwrap_or(viewport / 2.0);
    state.view.camera.zoom_towards(delta_levels, focus, viewport);
}

/// Merkt die Zeigerposition.
pub fn set_cursor(state: &mut AppState, geo_pos: Option<GeoPoint>) {
    state.view.cursor_geo = geo_pos;
}

/// Zentriert die Kamera auf einen Punkt.
pub fn focus_on(state: &mut AppState, point: GeoPoint) {
    state.view.camera.look_at(point);
}
