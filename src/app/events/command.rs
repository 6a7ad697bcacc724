use crate::app::session::DrawingMode;
use crate::core::{GeoPoint, GeofenceDraft, ShapeKind};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Geofence-Öffnen-Dialog anfordern
    RequestOpenGeofencesDialog,
    /// Geofence-Liste aus Datei laden
    LoadGeofences { path: String },
    /// Angezeigte Geofences entfernen
    ClearGeofences,

    /// Kamera auf Startansicht zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Pixel-Delta verschieben
    PanCamera { delta_px: DVec2 },
    /// Kamera zoomen
    ZoomCamera {
        delta_levels: f64,
        focus_px: Option<DVec2>,
    },
    /// Zeigerposition merken (für Tool-Vorschau und Statusleiste)
    SetCursor { geo_pos: Option<GeoPoint> },
    /// Kamera auf einen Punkt zentrieren
    FocusOn { point: GeoPoint },

    /// Zeichenmodus starten (bricht laufende Eingaben ab)
    StartDrawing { mode: DrawingMode },
    /// Zeiger gedrückt an die Session weitergeben
    DrawingPress { geo_pos: GeoPoint },
    /// Zeigerbewegung an die Session weitergeben
    DrawingMove { geo_pos: GeoPoint },
    /// Zeiger losgelassen an die Session weitergeben
    DrawingRelease { geo_pos: GeoPoint },
    /// Doppelklick an die Session weitergeben
    DrawingDoubleClick,
    /// Aktives Werkzeug bestätigen
    ConfirmDrawing,
    /// Zeichnung löschen und `(None, (0, 0))` melden
    ClearDrawing,
    /// Werkzeug freigeben/sperren
    SetToolEnabled { kind: ShapeKind, enabled: bool },
    /// Lasso-Toleranz setzen
    SetLassoTolerance { tolerance: f64 },

    /// Formular-Entwurf ersetzen (Geometrie bleibt erhalten)
    UpdateDraft { draft: GeofenceDraft },
    /// Entwurf validieren und Payload-JSON erzeugen
    SubmitDraft,
    /// Payload-Speichern-Dialog anfordern
    RequestExportPayloadDialog,
    /// Payload-JSON in Datei schreiben
    ExportPayload { path: String },
    /// Statusmeldung schließen
    DismissStatus,

    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
}
