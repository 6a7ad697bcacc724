//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, DrawingMode};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat, werden nur Escape und Ctrl-Kombinationen ausgewertet.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let text_focus = ui.ctx().wants_keyboard_input();

    let (modifiers, key_o, key_q, key_escape) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_o {
        events.push(AppIntent::OpenGeofencesRequested);
    }
    if modifiers.command && key_q {
        events.push(AppIntent::ExitRequested);
    }
    if key_escape {
        events.push(AppIntent::CancelRequested);
    }

    if text_focus || modifiers.command {
        return events;
    }

    // Moduswahl 1–4, Enter, Delete, Zoom
    let (key_1, key_2, key_3, key_4, key_enter, key_delete, key_plus, key_minus, key_home) =
        ui.input(|i| {
            (
                i.key_pressed(egui::Key::Num1),
                i.key_pressed(egui::Key::Num2),
                i.key_pressed(egui::Key::Num3),
                i.key_pressed(egui::Key::Num4),
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Home),
            )
        });

    let mode_keys = [key_1, key_2, key_3, key_4];
    for (pressed, mode) in mode_keys.into_iter().zip(DrawingMode::DRAWING) {
        if pressed {
            events.push(AppIntent::DrawingModeRequested { mode });
        }
    }

    if key_enter {
        events.push(AppIntent::ConfirmRequested);
    }
    if key_delete {
        events.push(AppIntent::ClearDrawingRequested);
    }
    if key_plus {
        events.push(AppIntent::ZoomInRequested);
    }
    if key_minus {
        events.push(AppIntent::ZoomOutRequested);
    }
    if key_home {
        events.push(AppIntent::ResetCameraRequested);
    }

    events
}
