//! Zentrale Konfiguration für den Geofence-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Start-Mittelpunkt (Breite).
pub const HOME_LATITUDE: f64 = 20.5937;
/// Start-Mittelpunkt (Länge).
pub const HOME_LONGITUDE: f64 = 78.9629;
/// Start-Zoomstufe.
pub const HOME_ZOOM: f64 = 5.0;
/// Zoom-Schritt (Stufen) bei Menü-Buttons / Shortcuts.
pub const CAMERA_ZOOM_STEP: f64 = 1.0;
/// Zoom-Schritt (Stufen) pro Mausrad-Raste.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 0.25;

// ── Zeichnen ────────────────────────────────────────────────────────

/// Douglas-Peucker-Toleranz für Lasso-Spuren in Grad.
pub const LASSO_TOLERANCE_DEG: f64 = 0.0001;
/// Pixel-Radius, in dem ein Klick den Polygon-Startpunkt trifft (schließt das Polygon).
pub const POLYGON_CLOSE_RADIUS_PX: f64 = 10.0;
/// Anzeige-Radius bestehender Geofences ohne Geometrie und ohne Radius.
pub const FALLBACK_GEOFENCE_RADIUS_M: f64 = 100.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Randfarbe gezeichneter Formen (RGBA: Indigo).
pub const SHAPE_STROKE_COLOR: [f32; 4] = [0.39, 0.40, 0.95, 1.0];
/// Füllfarbe gezeichneter Formen (RGBA: Indigo, 30 %).
pub const SHAPE_FILL_COLOR: [f32; 4] = [0.39, 0.40, 0.95, 0.3];
/// Farbe der Lasso-/Tool-Vorschau.
pub const PREVIEW_COLOR: [f32; 4] = [0.39, 0.40, 0.95, 0.9];
/// Farbe aktiver bestehender Geofences (RGBA: Grün).
pub const GEOFENCE_ACTIVE_COLOR: [f32; 4] = [0.13, 0.77, 0.37, 1.0];
/// Farbe inaktiver bestehender Geofences (RGBA: Grau).
pub const GEOFENCE_INACTIVE_COLOR: [f32; 4] = [0.61, 0.64, 0.69, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `geofence_draw_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Start-Mittelpunkt (Breite)
    pub home_latitude: f64,
    /// Start-Mittelpunkt (Länge)
    pub home_longitude: f64,
    /// Start-Zoomstufe
    pub home_zoom: f64,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Schritt pro Mausrad-Raste
    pub camera_scroll_zoom_step: f64,

    // ── Zeichnen ────────────────────────────────────────────────
    /// Douglas-Peucker-Toleranz für Lasso-Spuren (Grad)
    pub lasso_tolerance_deg: f64,
    /// Klick-Radius zum Schließen eines Polygons (Pixel)
    pub polygon_close_radius_px: f64,
    /// Anzeige-Radius bestehender Geofences ohne Radius
    #[serde(default = "default_fallback_geofence_radius_m")]
    pub fallback_geofence_radius_m: f64,

    // ── Farben ──────────────────────────────────────────────────
    /// Randfarbe gezeichneter Formen
    pub shape_stroke_color: [f32; 4],
    /// Füllfarbe gezeichneter Formen
    pub shape_fill_color: [f32; 4],
    /// Farbe der Vorschau
    pub preview_color: [f32; 4],
    /// Farbe aktiver Geofences
    #[serde(default = "default_geofence_active_color")]
    pub geofence_active_color: [f32; 4],
    /// Farbe inaktiver Geofences
    #[serde(default = "default_geofence_inactive_color")]
    pub geofence_inactive_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            home_latitude: HOME_LATITUDE,
            home_longitude: HOME_LONGITUDE,
            home_zoom: HOME_ZOOM,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            lasso_tolerance_deg: LASSO_TOLERANCE_DEG,
            polygon_close_radius_px: POLYGON_CLOSE_RADIUS_PX,
            fallback_geofence_radius_m: FALLBACK_GEOFENCE_RADIUS_M,

            shape_stroke_color: SHAPE_STROKE_COLOR,
            shape_fill_color: SHAPE_FILL_COLOR,
            preview_color: PREVIEW_COLOR,
            geofence_active_color: GEOFENCE_ACTIVE_COLOR,
            geofence_inactive_color: GEOFENCE_INACTIVE_COLOR,
        }
    }
}

/// Serde-Default für `fallback_geofence_radius_m` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_fallback_geofence_radius_m() -> f64 {
    FALLBACK_GEOFENCE_RADIUS_M
}

fn default_geofence_active_color() -> [f32; 4] {
    GEOFENCE_ACTIVE_COLOR
}

fn default_geofence_inactive_color() -> [f32; 4] {
    GEOFENCE_INACTIVE_COLOR
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("geofence_draw_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("geofence_draw_editor.toml")
    }

    /// Ersetzt unbrauchbare Werte (Toleranz ≤ 0, negative Radien) durch Standardwerte.
    ///
    /// Die Vereinfachung setzt eine positive Toleranz voraus.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.lasso_tolerance_deg.is_finite() && self.lasso_tolerance_deg > 0.0) {
            log::warn!(
                "Ungültige Lasso-Toleranz {}, verwende {}",
                self.lasso_tolerance_deg,
                defaults.lasso_tolerance_deg
            );
            self.lasso_tolerance_deg = defaults.lasso_tolerance_deg;
        }
        if !(self.polygon_close_radius_px.is_finite() && self.polygon_close_radius_px >= 0.0) {
            self.polygon_close_radius_px = defaults.polygon_close_radius_px;
        }
        if !(self.fallback_geofence_radius_m.is_finite() && self.fallback_geofence_radius_m >= 0.0)
        {
            self.fallback_geofence_radius_m = defaults.fallback_geofence_radius_m;
        }
        self
    }

    /// Start-Mittelpunkt als GeoPoint.
    pub fn home_center(&self) -> crate::core::GeoPoint {
        crate::core::GeoPoint::new(self.home_latitude, self.home_longitude)
    }
}
