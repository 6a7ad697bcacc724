//! Mapping von UI-Intents auf mutierende App-Commands.

use super::session::DrawingMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenGeofencesRequested => vec![AppCommand::RequestOpenGeofencesDialog],
        AppIntent::GeofencesFileSelected { path } => vec![AppCommand::LoadGeofences { path }],
        AppIntent::ClearGeofencesRequested => vec![AppCommand::ClearGeofences],

        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta_px } => vec![AppCommand::PanCamera { delta_px }],
        AppIntent::CameraZoom {
            delta_levels,
            focus_px,
        } => vec![AppCommand::ZoomCamera {
            delta_levels,
            focus_px,
        }],
        AppIntent::CursorMoved { geo_pos } => vec![AppCommand::SetCursor { geo_pos }],
        AppIntent::FocusCaptureRequested => {
            if state.capture.has_geometry() {
                vec![AppCommand::FocusOn {
                    point: state.capture.reference_point,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::FocusGeofenceRequested { id } => state
            .geofences
            .iter()
            .find(|g| g.id == id)
            .map(|g| {
                vec![AppCommand::FocusOn {
                    point: g.center_point,
                }]
            })
            .unwrap_or_default(),

        AppIntent::DrawingModeRequested { mode } => vec![AppCommand::StartDrawing { mode }],
        AppIntent::PointerPressed { geo_pos } => vec![
            AppCommand::SetCursor {
                geo_pos: Some(geo_pos),
            },
            AppCommand::DrawingPress { geo_pos },
        ],
        AppIntent::PointerDragged { geo_pos } => vec![
            AppCommand::SetCursor {
                geo_pos: Some(geo_pos),
            },
            AppCommand::DrawingMove { geo_pos },
        ],
        AppIntent::PointerReleased { geo_pos } => vec![AppCommand::DrawingRelease { geo_pos }],
        AppIntent::PointerDoubleClicked => vec![AppCommand::DrawingDoubleClick],
        AppIntent::ConfirmRequested => {
            if state.session.mode().is_tool() {
                vec![AppCommand::ConfirmDrawing]
            } else {
                vec![]
            }
        }
        AppIntent::CancelRequested => {
            // Stufenweise: laufende Zeichnung → Leerlauf, Leerlauf → Dialog/Status schließen
            if state.session.mode() != DrawingMode::None {
                vec![AppCommand::StartDrawing {
                    mode: DrawingMode::None,
                }]
            } else if state.ui.show_options_dialog {
                vec![AppCommand::CloseOptionsDialog]
            } else if state.ui.status_message.is_some() {
                vec![AppCommand::DismissStatus]
            } else {
                vec![]
            }
        }
        AppIntent::ClearDrawingRequested => vec![AppCommand::ClearDrawing],
        AppIntent::ToolEnabledChanged { kind, enabled } => {
            vec![AppCommand::SetToolEnabled { kind, enabled }]
        }
        AppIntent::LassoToleranceChanged { tolerance } => {
            vec![AppCommand::SetLassoTolerance { tolerance }]
        }

        AppIntent::DraftEdited { draft } => vec![AppCommand::UpdateDraft { draft }],
        AppIntent::SubmitDraftRequested => vec![AppCommand::SubmitDraft],
        AppIntent::ExportPayloadRequested => {
            vec![AppCommand::SubmitDraft, AppCommand::RequestExportPayloadDialog]
        }
        AppIntent::PayloadFileSelected { path } => vec![AppCommand::ExportPayload { path }],
        AppIntent::DismissStatusRequested => vec![AppCommand::DismissStatus],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests;
