//! Karten-Kamera (Web-Mercator) für Pan und Zoom.

use super::geo_point::EARTH_RADIUS_M;
use super::GeoPoint;
use glam::DVec2;

/// Maximal darstellbare Breite in Web-Mercator.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_6;

/// Kachelgröße in Pixeln bei Zoomstufe 0.
pub const TILE_SIZE: f64 = 256.0;

/// Karten-Kamera mit Mittelpunkt und (stetiger) Zoomstufe.
#[derive(Debug, Clone)]
pub struct MapCamera {
    /// Geographischer Mittelpunkt des Viewports
    pub center: GeoPoint,
    /// Zoomstufe (0 = ganze Welt auf 256 px)
    pub zoom: f64,
}

impl MapCamera {
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: f64 = 1.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f64 = 19.0;

    /// Erstellt eine Kamera auf `center` mit Zoomstufe `zoom`.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Zentriert die Kamera auf einen Punkt.
    pub fn look_at(&mut self, target: GeoPoint) {
        self.center = clamp_latitude(target);
    }

    /// Weltgröße in Pixeln bei aktueller Zoomstufe.
    pub fn world_size_px(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.zoom)
    }

    /// Rechnet einen geographischen Punkt in Viewport-Pixel um (Ursprung oben links).
    pub fn geo_to_screen(&self, point: GeoPoint, viewport_size: DVec2) -> DVec2 {
        let scale = self.world_size_px();
        (project(point) - project(self.center)) * scale + viewport_size / 2.0
    }

    /// Rechnet Viewport-Pixel in einen geographischen Punkt um.
    pub fn screen_to_geo(&self, screen_pos: DVec2, viewport_size: DVec2) -> GeoPoint {
        let scale = self.world_size_px();
        unproject((screen_pos - viewport_size / 2.0) / scale + project(self.center))
    }

    /// Verschiebt die Kamera um ein Pixel-Delta (Inhalt folgt dem Zeiger).
    pub fn pan_pixels(&mut self, delta_px: DVec2) {
        let scale = self.world_size_px();
        let moved = project(self.center) - delta_px / scale;
        self.center = clamp_latitude(unproject(DVec2::new(moved.x.rem_euclid(1.0), moved.y)));
    }

    /// Ändert die Zoomstufe um `delta_levels`, der Punkt unter `focus_px` bleibt fix.
    pub fn zoom_towards(&mut self, delta_levels: f64, focus_px: DVec2, viewport_size: DVec2) {
        let focus_geo = self.screen_to_geo(focus_px, viewport_size);
        self.zoom = (self.zoom + delta_levels).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        let drift = self.geo_to_screen(focus_geo, viewport_size) - focus_px;
        self.pan_pixels(-drift);
    }

    /// Meter pro Pixel auf der Breite `latitude`.
    pub fn meters_per_pixel(&self, latitude: f64) -> f64 {
        let circumference = 2.0 * std::f64::consts::PI * EARTH_RADIUS_M;
        circumference * latitude.to_radians().cos() / self.world_size_px()
    }

    /// Längengrade pro Pixel (breitenunabhängig in Web-Mercator).
    pub fn degrees_per_pixel(&self) -> f64 {
        360.0 / self.world_size_px()
    }
}

/// Web-Mercator-Projektion auf das Einheitsquadrat [0, 1]².
pub fn project(point: GeoPoint) -> DVec2 {
    let lat = point
        .latitude
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
        .to_radians();
    let x = (point.longitude + 180.0) / 360.0;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0;
    DVec2::new(x, y)
}

/// Umkehrung von [`project`].
pub fn unproject(v: DVec2) -> GeoPoint {
    let longitude = v.x * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * v.y);
    let latitude = n.sinh().atan().to_degrees();
    GeoPoint::new(latitude, longitude)
}

fn clamp_latitude(point: GeoPoint) -> GeoPoint {
    GeoPoint::new(
        point
            .latitude
            .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE),
        point.longitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: DVec2 = DVec2::new(800.0, 600.0);

    #[test]
    fn test_project_roundtrip() {
        let p = GeoPoint::new(48.137, 11.575);
        let back = unproject(project(p));
        assert_relative_eq!(back.latitude, p.latitude, epsilon = 1e-9);
        assert_relative_eq!(back.longitude, p.longitude, epsilon = 1e-9);
    }

    #[test]
    fn test_center_maps_to_viewport_center() {
        let camera = MapCamera::new(GeoPoint::new(20.5937, 78.9629), 5.0);
        let screen = camera.geo_to_screen(camera.center, VIEWPORT);
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-6);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-6);

        let geo = camera.screen_to_geo(DVec2::new(400.0, 300.0), VIEWPORT);
        assert_relative_eq!(geo.latitude, 20.5937, epsilon = 1e-9);
        assert_relative_eq!(geo.longitude, 78.9629, epsilon = 1e-9);
    }

    #[test]
    fn test_screen_y_grows_southwards() {
        let camera = MapCamera::new(GeoPoint::new(0.0, 0.0), 3.0);
        let top = camera.screen_to_geo(DVec2::new(400.0, 0.0), VIEWPORT);
        let bottom = camera.screen_to_geo(DVec2::new(400.0, 600.0), VIEWPORT);
        assert!(top.latitude > bottom.latitude);
    }

    #[test]
    fn test_pan_moves_content_with_pointer() {
        let mut camera = MapCamera::new(GeoPoint::new(10.0, 10.0), 8.0);
        let anchor = camera.screen_to_geo(DVec2::new(100.0, 100.0), VIEWPORT);
        camera.pan_pixels(DVec2::new(50.0, -20.0));
        let moved = camera.geo_to_screen(anchor, VIEWPORT);
        assert_relative_eq!(moved.x, 150.0, epsilon = 1e-6);
        assert_relative_eq!(moved.y, 80.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zoom_towards_keeps_focus_fixed() {
        let mut camera = MapCamera::new(GeoPoint::new(20.0, 78.0), 5.0);
        let focus = DVec2::new(650.0, 120.0);
        let before = camera.screen_to_geo(focus, VIEWPORT);
        camera.zoom_towards(1.5, focus, VIEWPORT);
        let after = camera.screen_to_geo(focus, VIEWPORT);
        assert_relative_eq!(camera.zoom, 6.5);
        assert_relative_eq!(before.latitude, after.latitude, epsilon = 1e-9);
        assert_relative_eq!(before.longitude, after.longitude, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = MapCamera::new(GeoPoint::ZERO, 40.0);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MAX);
        camera.zoom_towards(-100.0, VIEWPORT / 2.0, VIEWPORT);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MIN);
    }

    #[test]
    fn test_scale_halves_per_zoom_level() {
        let mut camera = MapCamera::new(GeoPoint::ZERO, 4.0);
        let mpp1 = camera.meters_per_pixel(0.0);
        let dpp1 = camera.degrees_per_pixel();
        camera.zoom = 5.0;
        assert_relative_eq!(camera.meters_per_pixel(0.0), mpp1 / 2.0);
        assert_relative_eq!(camera.degrees_per_pixel(), dpp1 / 2.0);
    }
}
