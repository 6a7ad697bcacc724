use approx::assert_relative_eq;
use geofence_draw_editor::{
    AppCommand, AppController, AppIntent, AppState, CanonicalGeometry, DrawingMode, GeoPoint,
    ShapeKind,
};

fn run(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}

fn lasso_intents() -> Vec<AppIntent> {
    vec![
        AppIntent::DrawingModeRequested {
            mode: DrawingMode::Lasso,
        },
        AppIntent::PointerPressed {
            geo_pos: GeoPoint::new(10.0, 20.0),
        },
        AppIntent::PointerDragged {
            geo_pos: GeoPoint::new(10.0, 20.001),
        },
        AppIntent::PointerDragged {
            geo_pos: GeoPoint::new(10.0002, 20.0019),
        },
        AppIntent::PointerDragged {
            geo_pos: GeoPoint::new(10.0005, 20.0025),
        },
        AppIntent::PointerReleased {
            geo_pos: GeoPoint::new(10.0005, 20.0025),
        },
    ]
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);
    run(&mut controller, &mut state, vec![AppIntent::ExitRequested]);
    assert!(state.should_exit);

    match state.command_log.entries().last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_lasso_flow_fills_draft_with_closed_polygon() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(&mut controller, &mut state, lasso_intents());

    assert_eq!(state.session.mode(), DrawingMode::None);
    assert!(state.capture.preview.is_empty());

    let geometry = state
        .capture
        .draft
        .geometry
        .as_ref()
        .expect("Entwurf sollte die Lasso-Geometrie enthalten");
    let ring = geometry.ring().expect("Polygon erwartet");
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.first(), ring.last());

    let center = state.capture.draft.center_point;
    assert_relative_eq!(center.latitude, 10.00025, epsilon = 1e-9);
    assert_relative_eq!(center.longitude, 20.00125, epsilon = 1e-9);
}

#[test]
fn test_lasso_preview_is_visible_while_dragging() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let mut intents = lasso_intents();
    intents.pop();
    run(&mut controller, &mut state, intents);

    assert!(state.session.is_capturing());
    assert_eq!(state.capture.preview.len(), 4);
    assert!(state.capture.geometry.is_none());
}

#[test]
fn test_click_in_lasso_mode_is_discarded() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let p = GeoPoint::new(1.0, 1.0);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::DrawingModeRequested {
                mode: DrawingMode::Lasso,
            },
            AppIntent::PointerPressed { geo_pos: p },
            AppIntent::PointerReleased { geo_pos: p },
        ],
    );

    assert_eq!(state.session.mode(), DrawingMode::None);
    assert_eq!(state.capture.notifications, 0);
    assert!(state.capture.draft.geometry.is_none());
}

#[test]
fn test_circle_drag_flow_reports_center_and_radius() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let center = GeoPoint::new(48.0, 11.0);
    let rim = GeoPoint::new(48.001, 11.0);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::DrawingModeRequested {
                mode: DrawingMode::Circle,
            },
            AppIntent::PointerPressed { geo_pos: center },
            AppIntent::PointerDragged { geo_pos: rim },
            AppIntent::PointerReleased { geo_pos: rim },
        ],
    );

    match &state.capture.geometry {
        Some(CanonicalGeometry::Circle {
            center: c,
            radius_meters,
        }) => {
            assert_eq!(*c, center);
            // 0.001° Breite ≈ 111 m
            assert_relative_eq!(*radius_meters, 111.19, epsilon = 0.5);
        }
        other => panic!("Kreis erwartet, erhalten: {other:?}"),
    }
    assert_eq!(state.capture.reference_point, center);
    assert_eq!(state.session.mode(), DrawingMode::None);
}

#[test]
fn test_polygon_flow_with_clicks_and_confirm() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.camera.zoom = 15.0;

    let vertices = [
        GeoPoint::new(50.0, 8.0),
        GeoPoint::new(50.0, 8.01),
        GeoPoint::new(50.01, 8.01),
    ];
    let mut intents = vec![AppIntent::DrawingModeRequested {
        mode: DrawingMode::Polygon,
    }];
    for geo_pos in vertices {
        intents.push(AppIntent::PointerPressed { geo_pos });
        intents.push(AppIntent::PointerReleased { geo_pos });
    }
    run(&mut controller, &mut state, intents);

    assert_eq!(state.session.mode(), DrawingMode::Polygon);
    assert!(state.capture.geometry.is_none());

    run(&mut controller, &mut state, vec![AppIntent::ConfirmRequested]);

    let ring = state
        .capture
        .geometry
        .as_ref()
        .and_then(|g| g.ring())
        .expect("Polygon erwartet");
    assert_eq!(ring.len(), 4);
    assert_eq!(ring[0], vertices[0]);
    assert_eq!(ring[3], vertices[0]);
    assert_eq!(state.session.mode(), DrawingMode::None);
}

#[test]
fn test_cancel_discards_open_polygon() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.camera.zoom = 15.0;

    let geo_pos = GeoPoint::new(50.0, 8.0);
    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::DrawingModeRequested {
                mode: DrawingMode::Polygon,
            },
            AppIntent::PointerPressed { geo_pos },
            AppIntent::PointerReleased { geo_pos },
            AppIntent::CancelRequested,
        ],
    );

    assert_eq!(state.session.mode(), DrawingMode::None);
    assert_eq!(state.capture.notifications, 0);
}

#[test]
fn test_clear_drawing_resets_draft_geometry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(&mut controller, &mut state, lasso_intents());
    assert!(state.capture.has_geometry());

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::ClearDrawingRequested],
    );

    assert!(!state.capture.has_geometry());
    assert!(state.capture.draft.geometry.is_none());
    assert_eq!(state.capture.reference_point, GeoPoint::ZERO);
    assert!(state.session.current().is_none());
}

#[test]
fn test_disabled_tool_cannot_be_started() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ToolEnabledChanged {
                kind: ShapeKind::Rectangle,
                enabled: false,
            },
            AppIntent::DrawingModeRequested {
                mode: DrawingMode::Rectangle,
            },
        ],
    );

    assert_eq!(state.session.mode(), DrawingMode::None);
}

#[test]
fn test_submit_without_name_reports_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(&mut controller, &mut state, lasso_intents());
    run(&mut controller, &mut state, vec![AppIntent::SubmitDraftRequested]);

    assert!(state.ui.payload_json.is_none());
    let status = state.ui.status_message.as_ref().expect("Fehlermeldung erwartet");
    assert_eq!(
        status.severity,
        geofence_draw_editor::app::StatusSeverity::Error
    );
}

#[test]
fn test_submit_with_name_produces_payload_json() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(&mut controller, &mut state, lasso_intents());

    let mut draft = state.capture.draft.clone();
    draft.name = "Lagerhalle".to_string();
    // Geometrie im Formular wird nicht übernommen
    draft.geometry = None;
    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::DraftEdited { draft },
            AppIntent::SubmitDraftRequested,
        ],
    );

    let json = state.ui.payload_json.as_ref().expect("Payload erwartet");
    let value: serde_json::Value = serde_json::from_str(json).expect("gültiges JSON");
    assert_eq!(value["name"], "Lagerhalle");
    assert_eq!(value["geometry"]["type"], "Polygon");
    assert_eq!(value["geometry"]["coordinates"][0][0][0], 20.0);
}

#[test]
fn test_lasso_tolerance_change_is_applied_to_session() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::LassoToleranceChanged { tolerance: 0.0005 }],
    );

    assert_relative_eq!(state.session.lasso_tolerance(), 0.0005);
    assert_relative_eq!(state.options.lasso_tolerance_deg, 0.0005);
}

#[test]
fn test_load_geofences_from_file_centers_camera() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let path = std::env::temp_dir().join(format!(
        "geofence_draw_editor_flow_{}.json",
        std::process::id()
    ));
    let json = r#"[
        {"id":"a","name":"Depot","center_point":{"latitude":52.0,"longitude":13.0}},
        {"id":"b","name":"Hof","status":"inactive","radius_meters":40.0,
         "center_point":{"latitude":52.2,"longitude":13.4}}
    ]"#;
    std::fs::write(&path, json).expect("Testdatei schreibbar");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::GeofencesFileSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );
    let _ = std::fs::remove_file(&path);
    result.expect("Laden sollte gelingen");

    assert_eq!(state.geofence_count(), 2);
    assert_relative_eq!(state.view.camera.center.latitude, 52.1, epsilon = 1e-9);
    assert_relative_eq!(state.view.camera.center.longitude, 13.2, epsilon = 1e-9);
    assert!(state.ui.geofence_file_path.is_some());
}

#[test]
fn test_load_missing_geofence_file_fails() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::GeofencesFileSelected {
            path: "/definitiv/nicht/vorhanden.json".to_string(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.geofence_count(), 0);
}
