//! Kanonische Geofence-Geometrie (Polygon-Ring oder Kreis) und Erfassungsergebnis.

use super::GeoPoint;
use serde::{Deserialize, Serialize};

/// Art des gezeichneten Primitivs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Per Klick gesetzte Eckpunkte
    Polygon,
    /// Aufgezogenes Rechteck
    Rectangle,
    /// Freihand-Lasso
    Lasso,
    /// Mittelpunkt + Radius
    Circle,
}

impl ShapeKind {
    /// Ring-basierte Arten (Polygon, Rechteck, Lasso).
    pub fn is_ring(self) -> bool {
        !matches!(self, ShapeKind::Circle)
    }
}

/// Kanonische Geometrie eines Geofence.
///
/// Serialisiert GeoJSON-artig:
/// `{"type":"Polygon","coordinates":[[[lng,lat],…]]}` bzw.
/// `{"type":"Circle","center":[lng,lat],"radius":r}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "GeometryJson", try_from = "GeometryJson")]
pub enum CanonicalGeometry {
    /// Geschlossener Ring (erster Punkt = letzter Punkt, mind. 4 Punkte)
    Polygon {
        /// Ringpunkte inkl. Schlusspunkt
        ring: Vec<GeoPoint>,
    },
    /// Kreis um einen Mittelpunkt
    Circle {
        /// Mittelpunkt
        center: GeoPoint,
        /// Radius in Metern (≥ 0)
        radius_meters: f64,
    },
}

impl CanonicalGeometry {
    /// GeoJSON-Typname.
    pub fn type_name(&self) -> &'static str {
        match self {
            CanonicalGeometry::Polygon { .. } => "Polygon",
            CanonicalGeometry::Circle { .. } => "Circle",
        }
    }

    /// Ring eines Polygons (`None` für Kreise).
    pub fn ring(&self) -> Option<&[GeoPoint]> {
        match self {
            CanonicalGeometry::Polygon { ring } => Some(ring),
            CanonicalGeometry::Circle { .. } => None,
        }
    }

    /// Prüft die Strukturinvarianten (Ring geschlossen, ≥ 4 Punkte; Radius ≥ 0).
    pub fn is_well_formed(&self) -> bool {
        match self {
            CanonicalGeometry::Polygon { ring } => {
                ring.len() >= 4 && ring.first() == ring.last()
            }
            CanonicalGeometry::Circle { radius_meters, .. } => {
                radius_meters.is_finite() && *radius_meters >= 0.0
            }
        }
    }
}

/// Ergebnis einer Erfassung: Geometrie + Referenzpunkt.
///
/// `geometry == None` signalisiert den gelöschten Zustand.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureResult {
    /// Erfasste Geometrie (None = gelöscht)
    pub geometry: Option<CanonicalGeometry>,
    /// Repräsentativer Punkt (Bounding-Box-Mitte bzw. Kreismittelpunkt)
    pub reference_point: GeoPoint,
}

impl CaptureResult {
    /// Ergebnis für den gelöschten Zustand: `(None, (0, 0))`.
    pub fn cleared() -> Self {
        Self {
            geometry: None,
            reference_point: GeoPoint::ZERO,
        }
    }

    /// Ergebnis mit Geometrie.
    pub fn captured(geometry: CanonicalGeometry, reference_point: GeoPoint) -> Self {
        Self {
            geometry: Some(geometry),
            reference_point,
        }
    }
}

// ── Serde-Zwischenform ──────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum GeometryJson {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    Circle { center: [f64; 2], radius: f64 },
}

impl From<CanonicalGeometry> for GeometryJson {
    fn from(geometry: CanonicalGeometry) -> Self {
        match geometry {
            CanonicalGeometry::Polygon { ring } => GeometryJson::Polygon {
                coordinates: vec![ring.into_iter().map(GeoPoint::to_lng_lat).collect()],
            },
            CanonicalGeometry::Circle {
                center,
                radius_meters,
            } => GeometryJson::Circle {
                center: center.to_lng_lat(),
                radius: radius_meters,
            },
        }
    }
}

impl TryFrom<GeometryJson> for CanonicalGeometry {
    type Error = anyhow::Error;

    fn try_from(json: GeometryJson) -> Result<Self, Self::Error> {
        let geometry = match json {
            GeometryJson::Polygon { coordinates } => {
                let outer = coordinates
                    .into_iter()
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("Polygon ohne Ring"))?;
                CanonicalGeometry::Polygon {
                    ring: outer.into_iter().map(GeoPoint::from_lng_lat).collect(),
                }
            }
            GeometryJson::Circle { center, radius } => CanonicalGeometry::Circle {
                center: GeoPoint::from_lng_lat(center),
                radius_meters: radius,
            },
        };

        if !geometry.is_well_formed() {
            anyhow::bail!(
                "{}-Geometrie verletzt Invarianten (offener Ring, < 4 Punkte oder negativer Radius)",
                geometry.type_name()
            );
        }
        Ok(geometry)
    }
}
