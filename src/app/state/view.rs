use crate::core::{GeoPoint, MapCamera};
use crate::shared::EditorOptions;
use glam::DVec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Karten-Kamera
    pub camera: MapCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: DVec2,
    /// Geo-Position unter dem Zeiger (None = außerhalb der Karte)
    pub cursor_geo: Option<GeoPoint>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&EditorOptions::default())
    }
}

impl ViewState {
    /// Erstellt den View-Zustand auf der Startansicht der Optionen.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            camera: MapCamera::new(options.home_center(), options.home_zoom),
            viewport_size: DVec2::ZERO,
            cursor_geo: None,
        }
    }

    /// Rechnet Viewport-Pixel in einen geographischen Punkt um.
    pub fn screen_to_geo(&self, screen_pos: DVec2) -> GeoPoint {
        self.camera.screen_to_geo(screen_pos, self.viewport_size)
    }

    /// Rechnet einen geographischen Punkt in Viewport-Pixel um.
    pub fn geo_to_screen(&self, point: GeoPoint) -> DVec2 {
        self.camera.geo_to_screen(point, self.viewport_size)
    }
}
