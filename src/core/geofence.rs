//! Geofence-Datensätze: bestehende Geofences (nur Anzeige) und der Entwurf
//! des Erstellungsformulars, der die erfassten Geometrien entgegennimmt.

use super::{CanonicalGeometry, GeoPoint};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Status eines Geofence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeofenceStatus {
    /// Aktiv überwacht
    #[default]
    Active,
    /// Deaktiviert
    Inactive,
    /// Nur Beobachtung
    Monitoring,
}

impl GeofenceStatus {
    /// Alle Varianten (für Auswahl-Widgets).
    pub const ALL: [GeofenceStatus; 3] = [
        GeofenceStatus::Active,
        GeofenceStatus::Inactive,
        GeofenceStatus::Monitoring,
    ];

    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            GeofenceStatus::Active => "active",
            GeofenceStatus::Inactive => "inactive",
            GeofenceStatus::Monitoring => "monitoring",
        }
    }
}

/// Bestehender Geofence (read-only, wird nur gezeichnet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceRecord {
    /// Eindeutige ID
    pub id: String,
    /// Name
    pub name: String,
    /// Optionale Beschreibung
    #[serde(default)]
    pub description: Option<String>,
    /// Gespeicherte Geometrie (fehlt bei Altdaten oder nicht darstellbaren Typen
    /// wie Point/MultiPolygon; dann Kreis um den Mittelpunkt)
    #[serde(default, deserialize_with = "deserialize_display_geometry")]
    pub geometry: Option<CanonicalGeometry>,
    /// Mittelpunkt
    pub center_point: GeoPoint,
    /// Radius für Kreis-Darstellung, falls keine Geometrie vorhanden
    #[serde(default)]
    pub radius_meters: Option<f64>,
    /// Status
    #[serde(default)]
    pub status: GeofenceStatus,
}

impl GeofenceRecord {
    /// Geometrie für die Anzeige: gespeicherte Geometrie oder Kreis um den
    /// Mittelpunkt mit `radius_meters` bzw. `fallback_radius_m`.
    pub fn display_geometry(&self, fallback_radius_m: f64) -> CanonicalGeometry {
        match &self.geometry {
            Some(geometry) => geometry.clone(),
            None => CanonicalGeometry::Circle {
                center: self.center_point,
                radius_meters: self.radius_meters.unwrap_or(fallback_radius_m),
            },
        }
    }

    /// Ob der Geofence als aktiv dargestellt wird.
    pub fn is_active(&self) -> bool {
        self.status == GeofenceStatus::Active
    }
}

/// Übernimmt nur Polygon- und Kreis-Geometrien. Andere GeoJSON-Typen oder
/// verletzte Invarianten ergeben `None`, damit der Datensatz erhalten bleibt.
fn deserialize_display_geometry<'de, D>(deserializer: D) -> Result<Option<CanonicalGeometry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match serde_json::from_value::<CanonicalGeometry>(value) {
        Ok(geometry) => Ok(Some(geometry)),
        Err(e) => {
            log::warn!("Geometrie nicht darstellbar, verwende Kreis um den Mittelpunkt: {}", e);
            Ok(None)
        }
    }
}

/// Liest eine Geofence-Liste aus JSON.
///
/// Akzeptiert ein nacktes Array oder eine paginierte Antwort mit `items`.
pub fn parse_geofences(json: &str) -> anyhow::Result<Vec<GeofenceRecord>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum GeofenceList {
        Plain(Vec<GeofenceRecord>),
        Paged { items: Vec<GeofenceRecord> },
    }

    let list: GeofenceList =
        serde_json::from_str(json).context("Geofence-Liste ist kein gültiges JSON")?;
    Ok(match list {
        GeofenceList::Plain(items) | GeofenceList::Paged { items } => items,
    })
}

/// Lädt eine Geofence-Liste aus einer JSON-Datei.
pub fn load_geofences_from_file(path: &std::path::Path) -> anyhow::Result<Vec<GeofenceRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Geofence-Datei nicht lesbar: {}", path.display()))?;
    let geofences = parse_geofences(&content)
        .with_context(|| format!("Geofence-Datei fehlerhaft: {}", path.display()))?;
    log::info!(
        "{} Geofences geladen aus: {}",
        geofences.len(),
        path.display()
    );
    Ok(geofences)
}

// ── Erstellungs-Entwurf ─────────────────────────────────────────────

/// Maximale Namenslänge.
pub const NAME_MAX_LEN: usize = 100;
/// Standard-Mindesthöhe in Metern.
pub const ALTITUDE_MIN_DEFAULT: f64 = 0.0;
/// Standard-Maximalhöhe in Metern.
pub const ALTITUDE_MAX_DEFAULT: f64 = 500.0;

/// Formular-Entwurf eines neuen Geofence.
///
/// Empfängt jede Erfassung über [`GeofenceDraft::apply_capture`] und
/// übernimmt die semantische Validierung, die der Zeichenkern nicht macht.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceDraft {
    /// Name (1–100 Zeichen)
    pub name: String,
    /// Beschreibung
    pub description: String,
    /// Zuletzt erfasste Geometrie
    pub geometry: Option<CanonicalGeometry>,
    /// Referenzpunkt der Erfassung
    pub center_point: GeoPoint,
    /// Mindesthöhe in Metern
    pub altitude_min_meters: f64,
    /// Maximalhöhe in Metern
    pub altitude_max_meters: f64,
    /// Status
    pub status: GeofenceStatus,
    /// Priorität 1–5
    pub priority: u8,
}

impl Default for GeofenceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            geometry: None,
            center_point: GeoPoint::ZERO,
            altitude_min_meters: ALTITUDE_MIN_DEFAULT,
            altitude_max_meters: ALTITUDE_MAX_DEFAULT,
            status: GeofenceStatus::Active,
            priority: 1,
        }
    }
}

/// Payload für das Anlegen eines Geofence.
#[derive(Debug, Clone, Serialize)]
pub struct GeofenceCreatePayload {
    /// Name
    pub name: String,
    /// Beschreibung (None wenn leer)
    pub description: Option<String>,
    /// Geometrie in GeoJSON-Form
    pub geometry: CanonicalGeometry,
    /// Referenzpunkt
    pub center_point: GeoPoint,
    /// Mindesthöhe
    pub altitude_min_meters: f64,
    /// Maximalhöhe
    pub altitude_max_meters: f64,
    /// Status
    pub status: GeofenceStatus,
    /// Priorität
    pub priority: u8,
}

impl GeofenceDraft {
    /// Übernimmt eine Erfassung (`None` = gelöscht).
    pub fn apply_capture(&mut self, geometry: Option<&CanonicalGeometry>, reference_point: GeoPoint) {
        self.geometry = geometry.cloned();
        self.center_point = reference_point;
    }

    /// Prüft alle Formularregeln.
    pub fn validate(&self) -> anyhow::Result<()> {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 || name_len > NAME_MAX_LEN {
            anyhow::bail!("Name muss 1–{} Zeichen lang sein", NAME_MAX_LEN);
        }
        let Some(geometry) = &self.geometry else {
            anyhow::bail!("Keine Geometrie gezeichnet");
        };
        if !geometry.is_well_formed() {
            anyhow::bail!("Geometrie ist unvollständig");
        }
        if !(1..=5).contains(&self.priority) {
            anyhow::bail!("Priorität muss zwischen 1 und 5 liegen");
        }
        if self.altitude_min_meters < 0.0 || self.altitude_max_meters < 0.0 {
            anyhow::bail!("Höhen dürfen nicht negativ sein");
        }
        if self.altitude_min_meters > self.altitude_max_meters {
            anyhow::bail!("Mindesthöhe liegt über der Maximalhöhe");
        }
        if !self.center_point.is_valid() {
            anyhow::bail!("Mittelpunkt liegt außerhalb des gültigen Koordinatenbereichs");
        }
        Ok(())
    }

    /// Baut den validierten Payload.
    pub fn to_create_payload(&self) -> anyhow::Result<GeofenceCreatePayload> {
        self.validate()?;
        let geometry = self
            .geometry
            .clone()
            .context("Keine Geometrie gezeichnet")?;
        let description = self.description.trim();
        Ok(GeofenceCreatePayload {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            geometry,
            center_point: self.center_point,
            altitude_min_meters: self.altitude_min_meters,
            altitude_max_meters: self.altitude_max_meters,
            status: self.status,
            priority: self.priority,
        })
    }

    /// Payload als formatiertes JSON.
    pub fn to_create_json(&self) -> anyhow::Result<String> {
        let payload = self.to_create_payload()?;
        Ok(serde_json::to_string_pretty(&payload)?)
    }
}
