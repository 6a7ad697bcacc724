//! Command-Log: Verlauf ausgeführter Commands (Diagnose und Tests).

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    /// Hochfrequente Zeiger-/Kamera-Commands werden nicht protokolliert.
    pub fn record(&mut self, command: &AppCommand) {
        if matches!(
            command,
            AppCommand::SetCursor { .. }
                | AppCommand::DrawingMove { .. }
                | AppCommand::PanCamera { .. }
                | AppCommand::SetViewportSize { .. }
        ) {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    #[test]
    fn test_high_frequency_commands_are_skipped() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::DrawingMove {
            geo_pos: GeoPoint::ZERO,
        });
        log.record(&AppCommand::SetCursor { geo_pos: None });
        assert!(log.is_empty());

        log.record(&AppCommand::ClearDrawing);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = CommandLog::new();
        for _ in 0..(CommandLog::MAX_ENTRIES + 10) {
            log.record(&AppCommand::ZoomIn);
        }
        assert!(log.len() <= CommandLog::MAX_ENTRIES);
    }
}
