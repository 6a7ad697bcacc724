//! Achsenparallele Bounding-Box in Lat/Lng.

use super::GeoPoint;

/// Minimale Bounding-Box einer Punktmenge (Südwest/Nordost-Ecke).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Südwest-Ecke (minimale Breite/Länge)
    pub south_west: GeoPoint,
    /// Nordost-Ecke (maximale Breite/Länge)
    pub north_east: GeoPoint,
}

impl GeoBounds {
    /// Box aus genau einem Punkt.
    pub fn from_point(point: GeoPoint) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Box um alle Punkte. `None` bei leerer Eingabe.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut bounds = Self::from_point(first);
        for &point in rest {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Erweitert die Box um einen Punkt.
    pub fn extend(&mut self, point: GeoPoint) {
        self.south_west.latitude = self.south_west.latitude.min(point.latitude);
        self.south_west.longitude = self.south_west.longitude.min(point.longitude);
        self.north_east.latitude = self.north_east.latitude.max(point.latitude);
        self.north_east.longitude = self.north_east.longitude.max(point.longitude);
    }

    /// Mittelpunkt der Box (nicht der Vertex-Schwerpunkt).
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
        )
    }

    /// Nordwest-Ecke.
    pub fn north_west(&self) -> GeoPoint {
        GeoPoint::new(self.north_east.latitude, self.south_west.longitude)
    }

    /// Südost-Ecke.
    pub fn south_east(&self) -> GeoPoint {
        GeoPoint::new(self.south_west.latitude, self.north_east.longitude)
    }

    /// `true` wenn die Box keine Fläche hat (Breite oder Höhe 0).
    pub fn is_degenerate(&self) -> bool {
        self.south_west.latitude == self.north_east.latitude
            || self.south_west.longitude == self.north_east.longitude
    }
}
