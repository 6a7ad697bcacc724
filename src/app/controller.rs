//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Geofence-Daten ===
            AppCommand::RequestOpenGeofencesDialog => handlers::geofences::request_open(state),
            AppCommand::LoadGeofences { path } => handlers::geofences::load(state, path)?,
            AppCommand::ClearGeofences => handlers::geofences::clear(state),

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::ZoomCamera {
                delta_levels,
                focus_px,
            } => handlers::view::zoom_towards(state, delta_levels, focus_px),
            AppCommand::SetCursor { geo_pos } => handlers::view::set_cursor(state, geo_pos),
            AppCommand::FocusOn { point } => handlers::view::focus_on(state, point),

            // === Zeichnen ===
            AppCommand::StartDrawing { mode } => handlers::drawing::start(state, mode),
            AppCommand::DrawingPress { geo_pos } => handlers::drawing::press(state, geo_pos),
            AppCommand::DrawingMove { geo_pos } => handlers::drawing::move_to(state, geo_pos),
            AppCommand::DrawingRelease { geo_pos } => handlers::drawing::release(state, geo_pos),
            AppCommand::DrawingDoubleClick => handlers::drawing::double_click(state),
            AppCommand::ConfirmDrawing => handlers::drawing::confirm(state),
            AppCommand::ClearDrawing => handlers::drawing::clear(state),
            AppCommand::SetToolEnabled { kind, enabled } => {
                handlers::drawing::set_tool_enabled(state, kind, enabled)
            }
            AppCommand::SetLassoTolerance { tolerance } => {
                handlers::drawing::set_lasso_tolerance(state, tolerance)
            }

            // === Formular-Entwurf ===
            AppCommand::UpdateDraft { draft } => handlers::draft::update(state, draft),
            AppCommand::SubmitDraft => handlers::draft::submit(state),
            AppCommand::RequestExportPayloadDialog => handlers::draft::request_export(state),
            AppCommand::ExportPayload { path } => handlers::draft::export(state, path)?,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::DismissStatus => handlers::dialog::dismiss_status(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options)?,
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
