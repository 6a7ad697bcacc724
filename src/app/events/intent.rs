use crate::app::session::DrawingMode;
use crate::core::{GeoPoint, GeofenceDraft, ShapeKind};
use crate::shared::EditorOptions;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Geofence-Datei öffnen (zeigt Dateidialog)
    OpenGeofencesRequested,
    /// Geofence-Datei wurde im Dialog ausgewählt
    GeofencesFileSelected { path: String },
    /// Angezeigte Geofences entfernen
    ClearGeofencesRequested,

    /// Kamera auf Startansicht zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um ein Pixel-Delta verschieben
    CameraPan { delta_px: DVec2 },
    /// Kamera zoomen (Stufen, optional auf einen Fokuspunkt in Viewport-Pixeln)
    CameraZoom {
        delta_levels: f64,
        focus_px: Option<DVec2>,
    },
    /// Zeiger über der Karte (None = außerhalb)
    CursorMoved { geo_pos: Option<GeoPoint> },
    /// Kamera auf die aktuelle Erfassung zentrieren
    FocusCaptureRequested,
    /// Kamera auf einen bestehenden Geofence zentrieren
    FocusGeofenceRequested { id: String },

    /// Zeichenmodus wählen (Toolbar / Shortcut)
    DrawingModeRequested { mode: DrawingMode },
    /// Maustaste auf der Karte gedrückt (nur in Zeichenmodi)
    PointerPressed { geo_pos: GeoPoint },
    /// Zeiger bei gedrückter Taste bewegt
    PointerDragged { geo_pos: GeoPoint },
    /// Maustaste losgelassen
    PointerReleased { geo_pos: GeoPoint },
    /// Doppelklick auf der Karte
    PointerDoubleClicked,
    /// Form abschließen (Enter)
    ConfirmRequested,
    /// Stufenweises Abbrechen (Escape)
    CancelRequested,
    /// Gezeichnete Form löschen
    ClearDrawingRequested,
    /// Werkzeug freigeben/sperren
    ToolEnabledChanged { kind: ShapeKind, enabled: bool },
    /// Lasso-Toleranz (Grad) ändern
    LassoToleranceChanged { tolerance: f64 },

    /// Formularfelder des Entwurfs geändert
    DraftEdited { draft: GeofenceDraft },
    /// Entwurf prüfen und Payload erzeugen
    SubmitDraftRequested,
    /// Payload als JSON-Datei speichern (zeigt Dateidialog)
    ExportPayloadRequested,
    /// Speicherpfad für den Payload wurde gewählt
    PayloadFileSelected { path: String },
    /// Statusmeldung schließen
    DismissStatusRequested,

    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen übernehmen (sofort anwenden und speichern)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
