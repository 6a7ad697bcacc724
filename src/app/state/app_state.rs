use crate::app::session::DrawingSession;
use crate::app::CommandLog;
use crate::core::GeofenceRecord;
use crate::shared::EditorOptions;

use super::{CaptureState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Zeichen-Session der Kartenansicht
    pub session: DrawingSession,
    /// Empfangsseite der Session (Vorschau, Erfassung, Entwurf)
    pub capture: CaptureState,
    /// Bestehende Geofences (nur Anzeige)
    pub geofences: Vec<GeofenceRecord>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Toleranzen, Startansicht)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen neuen App-State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            session: DrawingSession::new(options.lasso_tolerance_deg),
            capture: CaptureState::default(),
            geofences: Vec::new(),
            view: ViewState::new(&options),
            ui: UiState::default(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl angezeigter Geofences zurück (für UI-Anzeige)
    pub fn geofence_count(&self) -> usize {
        self.geofences.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
