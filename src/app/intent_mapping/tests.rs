use crate::app::session::DrawingMode;
use crate::app::{AppCommand, AppIntent, AppState, CaptureState};
use crate::core::{GeoPoint, GeofenceRecord, GeofenceStatus};

use super::map_intent_to_commands;

#[test]
fn pointer_pressed_updates_cursor_then_forwards_to_session() {
    let state = AppState::new();
    let geo_pos = GeoPoint::new(10.0, 20.0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { geo_pos });

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::SetCursor { geo_pos: Some(p) } if p == geo_pos
    ));
    assert!(matches!(commands[1], AppCommand::DrawingPress { geo_pos: p } if p == geo_pos));
}

#[test]
fn cancel_in_drawing_mode_returns_to_idle() {
    let mut state = AppState::new();
    let mut capture = CaptureState::default();
    state.session.start_drawing(DrawingMode::Lasso, &mut capture);

    let commands = map_intent_to_commands(&state, AppIntent::CancelRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::StartDrawing {
            mode: DrawingMode::None
        }
    ));
}

#[test]
fn cancel_in_idle_closes_options_dialog_first() {
    let mut state = AppState::new();
    state.ui.show_options_dialog = true;

    let commands = map_intent_to_commands(&state, AppIntent::CancelRequested);
    assert!(matches!(commands[..], [AppCommand::CloseOptionsDialog]));

    state.ui.show_options_dialog = false;
    assert!(map_intent_to_commands(&state, AppIntent::CancelRequested).is_empty());
}

#[test]
fn confirm_only_maps_while_tool_active() {
    let mut state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::ConfirmRequested).is_empty());

    let mut capture = CaptureState::default();
    state
        .session
        .start_drawing(DrawingMode::Polygon, &mut capture);
    let commands = map_intent_to_commands(&state, AppIntent::ConfirmRequested);
    assert!(matches!(commands[..], [AppCommand::ConfirmDrawing]));
}

#[test]
fn focus_geofence_uses_center_point() {
    let mut state = AppState::new();
    state.geofences.push(GeofenceRecord {
        id: "depot".into(),
        name: "Depot".into(),
        description: None,
        geometry: None,
        center_point: GeoPoint::new(12.0, 77.0),
        radius_meters: Some(50.0),
        status: GeofenceStatus::Active,
    });

    let commands = map_intent_to_commands(
        &state,
        AppIntent::FocusGeofenceRequested { id: "depot".into() },
    );
    assert!(matches!(
        commands[..],
        [AppCommand::FocusOn { point }] if point == GeoPoint::new(12.0, 77.0)
    ));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::FocusGeofenceRequested {
            id: "unbekannt".into(),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn focus_capture_without_geometry_is_noop() {
    let state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::FocusCaptureRequested).is_empty());
}

#[test]
fn export_payload_submits_before_dialog() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ExportPayloadRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SubmitDraft));
    assert!(matches!(commands[1], AppCommand::RequestExportPayloadDialog));
}
