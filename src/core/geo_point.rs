//! Geographische Punkte (WGS84, Dezimalgrad).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Mittlerer Erdradius in Metern (gleiches Maß wie die Kartenoberfläche für Kreisradien).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographischer Punkt in Dezimalgrad.
///
/// Die planare Sicht (`as_planar`) verwendet `x = Längengrad`, `y = Breitengrad`
/// und ist eine Näherung: Grad werden direkt als Distanzmaß benutzt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad (-90 … 90)
    pub latitude: f64,
    /// Längengrad (-180 … 180)
    pub longitude: f64,
}

impl GeoPoint {
    /// Nullpunkt (0°, 0°), wird beim Löschen als Referenzpunkt gemeldet.
    pub const ZERO: GeoPoint = GeoPoint {
        latitude: 0.0,
        longitude: 0.0,
    };

    /// Erstellt einen Punkt aus Breiten- und Längengrad.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Koordinaten in GeoJSON-Reihenfolge `[lng, lat]`.
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Erstellt einen Punkt aus GeoJSON-Reihenfolge `[lng, lat]`.
    pub fn from_lng_lat(coords: [f64; 2]) -> Self {
        Self::new(coords[1], coords[0])
    }

    /// Planare Sicht: `x = lng`, `y = lat`.
    pub fn as_planar(self) -> DVec2 {
        DVec2::new(self.longitude, self.latitude)
    }

    /// Gegenstück zu [`GeoPoint::as_planar`].
    pub fn from_planar(v: DVec2) -> Self {
        Self::new(v.y, v.x)
    }

    /// Großkreis-Distanz in Metern (Haversine).
    pub fn haversine_distance_m(self, other: GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lng = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
    }

    /// Prüft, ob beide Koordinaten im gültigen WGS84-Wertebereich liegen.
    pub fn is_valid(self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lng_lat_order() {
        let p = GeoPoint::new(10.0, 20.0);
        assert_eq!(p.to_lng_lat(), [20.0, 10.0]);
        assert_eq!(GeoPoint::from_lng_lat([20.0, 10.0]), p);
    }

    #[test]
    fn test_planar_roundtrip_keeps_axes() {
        let p = GeoPoint::new(-33.5, 151.2);
        let v = p.as_planar();
        assert_relative_eq!(v.x, 151.2);
        assert_relative_eq!(v.y, -33.5);
        assert_eq!(GeoPoint::from_planar(v), p);
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        // 1° Breite ≈ 111.195 km bei R = 6371 km
        assert_relative_eq!(a.haversine_distance_m(b), 111_194.93, epsilon = 1.0);
        assert_relative_eq!(a.haversine_distance_m(a), 0.0);
    }

    #[test]
    fn test_is_valid_rejects_out_of_range() {
        assert!(GeoPoint::new(89.9, 179.9).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}
