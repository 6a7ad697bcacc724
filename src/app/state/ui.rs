/// Schweregrad einer Statusmeldung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    /// Hinweis
    Info,
    /// Fehler (z.B. ungültige Datei, Validierung)
    Error,
}

/// Temporäre Statusmeldung für die Statusleiste.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    /// Schweregrad
    pub severity: StatusSeverity,
    /// Text
    pub text: String,
}

impl StatusMessage {
    /// Hinweis-Meldung.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: StatusSeverity::Info,
            text: text.into(),
        }
    }

    /// Fehler-Meldung.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: StatusSeverity::Error,
            text: text.into(),
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Geofence-Öffnen-Dialog geöffnet werden soll
    pub show_open_dialog: bool,
    /// Ob der Payload-Speichern-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Ob der Optionen-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Pfad der aktuell angezeigten Geofence-Datei
    pub geofence_file_path: Option<String>,
    /// Zuletzt erzeugter Payload (validiert, formatiertes JSON)
    pub payload_json: Option<String>,
    /// Temporäre Statusnachricht
    pub status_message: Option<StatusMessage>,
}
