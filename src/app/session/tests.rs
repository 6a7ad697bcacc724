use super::{DrawingMode, DrawingObserver, DrawingSession};
use crate::app::tools::ToolPreview;
use crate::core::{CanonicalGeometry, DrawnPrimitive, GeoPoint, ShapeKind};
use approx::assert_relative_eq;

/// Zeichnet alle Ausgaben der Session auf.
#[derive(Default)]
struct RecordingObserver {
    previews: Vec<Vec<GeoPoint>>,
    preview_clears: usize,
    captures: Vec<(Option<CanonicalGeometry>, GeoPoint)>,
}

impl DrawingObserver for RecordingObserver {
    fn render_preview(&mut self, points: &[GeoPoint]) {
        self.previews.push(points.to_vec());
    }

    fn clear_preview(&mut self) {
        self.preview_clears += 1;
    }

    fn geometry_captured(&mut self, geometry: Option<&CanonicalGeometry>, reference_point: GeoPoint) {
        self.captures.push((geometry.cloned(), reference_point));
    }
}

fn draw_lasso(session: &mut DrawingSession, obs: &mut RecordingObserver, points: &[GeoPoint]) {
    let (&first, rest) = points.split_first().expect("mindestens ein Punkt");
    session.on_press(first, obs);
    for &p in rest {
        session.on_move(p, obs);
    }
    session.on_release(*points.last().unwrap_or(&first), obs);
}

// ── Lasso ───────────────────────────────────────────────────────────

#[test]
fn test_lasso_trace_becomes_closed_polygon() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Lasso, &mut obs);

    session.on_press(GeoPoint::new(10.0, 20.0), &mut obs);
    assert!(session.is_capturing());
    session.on_move(GeoPoint::new(10.0, 20.001), &mut obs);
    session.on_move(GeoPoint::new(10.0002, 20.0019), &mut obs);
    session.on_move(GeoPoint::new(10.0005, 20.0025), &mut obs);
    assert_eq!(session.lasso_points().len(), 4);
    session.on_release(GeoPoint::new(10.0005, 20.0025), &mut obs);

    assert!(!session.is_capturing());
    assert_eq!(session.mode(), DrawingMode::None);
    assert!(session.lasso_points().is_empty());
    assert_eq!(obs.captures.len(), 1);

    let (geometry, reference) = &obs.captures[0];
    let geometry = geometry.as_ref().expect("Polygon erwartet");
    let ring = geometry.ring().expect("Polygon erwartet");
    assert_eq!(ring.first(), ring.last());
    assert_eq!(ring[0].to_lng_lat(), [20.0, 10.0]);
    // Der mittlere Punkt liegt innerhalb der Toleranz und entfällt
    assert_eq!(ring.len(), 4);

    assert_relative_eq!(reference.latitude, 10.00025, epsilon = 1e-9);
    assert_relative_eq!(reference.longitude, 20.00125, epsilon = 1e-9);
    assert_eq!(session.current().map(|c| c.reference_point), Some(*reference));
}

#[test]
fn test_lasso_preview_grows_and_is_cleared() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Lasso, &mut obs);

    draw_lasso(
        &mut session,
        &mut obs,
        &[
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ],
    );

    let lengths: Vec<usize> = obs.previews.iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![1, 2, 3]);
    assert_eq!(obs.preview_clears, 1);
}

#[test]
fn test_press_and_release_without_move_is_discarded() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Lasso, &mut obs);

    session.on_press(GeoPoint::new(10.0, 20.0), &mut obs);
    session.on_release(GeoPoint::new(10.0, 20.0), &mut obs);

    assert!(obs.captures.is_empty());
    assert_eq!(session.mode(), DrawingMode::None);
    assert!(!session.is_capturing());
    assert_eq!(obs.preview_clears, 1);
}

#[test]
fn test_two_point_lasso_is_discarded() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Lasso, &mut obs);
    draw_lasso(
        &mut session,
        &mut obs,
        &[GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)],
    );
    assert!(obs.captures.is_empty());
    assert_eq!(session.mode(), DrawingMode::None);
}

#[test]
fn test_straight_lasso_collapses_to_noop() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Lasso, &mut obs);

    // Kollineare Spur: Vereinfachung liefert zwei Punkte, kein Ring möglich
    draw_lasso(
        &mut session,
        &mut obs,
        &[
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.5),
            GeoPoint::new(0.0, 1.0),
        ],
    );
    assert!(obs.captures.is_empty());
    assert!(session.current().is_none());
    assert_eq!(session.mode(), DrawingMode::None);
}

#[test]
fn test_moves_without_press_are_ignored() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Lasso, &mut obs);

    session.on_move(GeoPoint::new(1.0, 1.0), &mut obs);
    session.on_release(GeoPoint::new(1.0, 1.0), &mut obs);

    assert!(session.lasso_points().is_empty());
    assert!(obs.previews.is_empty());
    assert_eq!(session.mode(), DrawingMode::Lasso);
}

#[test]
fn test_events_in_idle_mode_do_nothing() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.on_press(GeoPoint::new(1.0, 1.0), &mut obs);
    session.on_move(GeoPoint::new(2.0, 2.0), &mut obs);
    session.on_release(GeoPoint::new(2.0, 2.0), &mut obs);
    session.on_double_click(&mut obs);
    session.confirm(&mut obs);

    assert!(!session.is_capturing());
    assert!(obs.previews.is_empty());
    assert!(obs.captures.is_empty());
    assert!(!session.captures_drag());
}

// ── Moduswechsel ────────────────────────────────────────────────────

#[test]
fn test_start_drawing_discards_lasso_in_flight() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Lasso, &mut obs);
    session.on_press(GeoPoint::new(0.0, 0.0), &mut obs);
    session.on_move(GeoPoint::new(0.0, 1.0), &mut obs);

    session.start_drawing(DrawingMode::Polygon, &mut obs);

    assert_eq!(session.mode(), DrawingMode::Polygon);
    assert!(!session.is_capturing());
    assert!(session.lasso_points().is_empty());
    assert_eq!(obs.preview_clears, 1);
    assert!(obs.captures.is_empty());
}

#[test]
fn test_mode_exclusivity_over_start_sequence() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    let sequence = [
        DrawingMode::Lasso,
        DrawingMode::Circle,
        DrawingMode::Lasso,
        DrawingMode::Lasso,
        DrawingMode::Rectangle,
        DrawingMode::None,
        DrawingMode::Polygon,
    ];
    for mode in sequence {
        session.start_drawing(mode, &mut obs);
        assert_eq!(session.mode(), mode);
        assert!(!session.is_capturing());
        assert_eq!(
            session.tools().active_tool().map(|t| t.kind()),
            mode.shape_kind().filter(|_| mode.is_tool())
        );
    }
}

#[test]
fn test_restart_same_mode_rearms_tool() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Polygon, &mut obs);
    session.on_press(GeoPoint::new(0.0, 0.0), &mut obs);
    session.on_press(GeoPoint::new(0.0, 1.0), &mut obs);

    session.start_drawing(DrawingMode::Polygon, &mut obs);
    assert_eq!(session.mode(), DrawingMode::Polygon);
    assert_eq!(session.tool_preview(None), ToolPreview::Empty);
}

#[test]
fn test_start_drawing_invalidates_current() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Circle, &mut obs);
    session.on_tool_completed(
        ShapeKind::Circle,
        &DrawnPrimitive::Circle {
            center: GeoPoint::new(1.0, 1.0),
            radius_meters: 5.0,
        },
        &mut obs,
    );
    assert!(session.current().is_some());

    session.start_drawing(DrawingMode::Lasso, &mut obs);
    assert!(session.current().is_none());
    assert_eq!(obs.captures.len(), 1);
}

#[test]
fn test_disabled_tool_falls_back_to_idle() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.tools_mut().set_enabled(ShapeKind::Rectangle, false);
    session.start_drawing(DrawingMode::Rectangle, &mut obs);
    assert_eq!(session.mode(), DrawingMode::None);
    assert!(session.tools().active_tool().is_none());
}

// ── Werkzeuge ───────────────────────────────────────────────────────

#[test]
fn test_circle_tool_completion() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Circle, &mut obs);

    session.on_tool_completed(
        ShapeKind::Circle,
        &DrawnPrimitive::Circle {
            center: GeoPoint::new(12.0, 77.0),
            radius_meters: 250.0,
        },
        &mut obs,
    );

    assert_eq!(
        obs.captures,
        vec![(
            Some(CanonicalGeometry::Circle {
                center: GeoPoint::new(12.0, 77.0),
                radius_meters: 250.0,
            }),
            GeoPoint::new(12.0, 77.0),
        )]
    );
    assert_eq!(session.mode(), DrawingMode::None);
    assert!(session.tools().active_tool().is_none());
}

#[test]
fn test_circle_drag_through_session() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Circle, &mut obs);
    assert!(session.captures_drag());

    session.on_press(GeoPoint::new(0.0, 0.0), &mut obs);
    session.on_move(GeoPoint::new(0.0, 0.005), &mut obs);
    assert!(matches!(
        session.tool_preview(None),
        ToolPreview::Circle { .. }
    ));
    session.on_release(GeoPoint::new(0.0, 0.01), &mut obs);

    assert_eq!(obs.captures.len(), 1);
    match &obs.captures[0].0 {
        Some(CanonicalGeometry::Circle { radius_meters, .. }) => {
            assert_relative_eq!(*radius_meters, 1111.95, epsilon = 0.1);
        }
        other => panic!("Kreis erwartet, erhalten: {:?}", other),
    }
    assert_eq!(session.mode(), DrawingMode::None);
}

#[test]
fn test_rectangle_drag_through_session() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Rectangle, &mut obs);

    session.on_press(GeoPoint::new(10.0, 20.0), &mut obs);
    session.on_move(GeoPoint::new(10.5, 20.5), &mut obs);
    session.on_release(GeoPoint::new(11.0, 21.0), &mut obs);

    let (geometry, reference) = obs.captures.last().expect("Erfassung erwartet");
    let ring = geometry
        .as_ref()
        .and_then(CanonicalGeometry::ring)
        .expect("Polygon erwartet");
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.first(), ring.last());
    assert_eq!(*reference, GeoPoint::new(10.5, 20.5));
}

#[test]
fn test_polygon_clicks_and_confirm() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Polygon, &mut obs);
    assert!(!session.captures_drag());

    for p in [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 2.0),
        GeoPoint::new(2.0, 2.0),
    ] {
        session.on_press(p, &mut obs);
        session.on_release(p, &mut obs);
    }
    assert!(obs.captures.is_empty());

    session.confirm(&mut obs);
    assert_eq!(obs.captures.len(), 1);
    let (geometry, reference) = &obs.captures[0];
    assert_eq!(geometry.as_ref().and_then(|g| g.ring()).map(<[GeoPoint]>::len), Some(4));
    assert_eq!(*reference, GeoPoint::new(1.0, 1.0));
    assert_eq!(session.mode(), DrawingMode::None);
}

#[test]
fn test_polygon_double_click_finishes() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Polygon, &mut obs);
    for p in [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 2.0),
        GeoPoint::new(2.0, 2.0),
    ] {
        session.on_press(p, &mut obs);
    }
    session.on_double_click(&mut obs);
    assert_eq!(obs.captures.len(), 1);
}

#[test]
fn test_short_ring_completion_is_noop() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Polygon, &mut obs);
    session.on_tool_completed(
        ShapeKind::Polygon,
        &DrawnPrimitive::Ring(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]),
        &mut obs,
    );
    assert!(obs.captures.is_empty());
    assert_eq!(session.mode(), DrawingMode::None);
}

// ── Löschen ─────────────────────────────────────────────────────────

#[test]
fn test_clear_resets_fully() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.start_drawing(DrawingMode::Lasso, &mut obs);
    session.on_press(GeoPoint::new(0.0, 0.0), &mut obs);
    session.on_move(GeoPoint::new(0.0, 1.0), &mut obs);

    session.clear_drawing(&mut obs);

    assert!(session.lasso_points().is_empty());
    assert!(!session.is_capturing());
    assert_eq!(session.mode(), DrawingMode::None);
    assert!(session.current().is_none());
    assert_eq!(obs.captures, vec![(None, GeoPoint::ZERO)]);
}

#[test]
fn test_clear_in_idle_still_emits() {
    let mut session = DrawingSession::default();
    let mut obs = RecordingObserver::default();
    session.clear_drawing(&mut obs);
    session.clear_drawing(&mut obs);
    assert_eq!(obs.captures.len(), 2);
    assert!(obs.captures.iter().all(|(g, p)| g.is_none() && *p == GeoPoint::ZERO));
}

// ── Toleranz ────────────────────────────────────────────────────────

#[test]
fn test_invalid_tolerance_falls_back_to_default() {
    let mut session = DrawingSession::new(0.0);
    assert_relative_eq!(session.lasso_tolerance(), crate::shared::LASSO_TOLERANCE_DEG);
    session.set_lasso_tolerance(0.01);
    assert_relative_eq!(session.lasso_tolerance(), 0.01);
    session.set_lasso_tolerance(f64::NAN);
    assert_relative_eq!(session.lasso_tolerance(), crate::shared::LASSO_TOLERANCE_DEG);
}

#[test]
fn test_coarse_tolerance_drops_detail() {
    let trace = [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.00005, 0.5),
        GeoPoint::new(0.0, 1.0),
        GeoPoint::new(1.0, 1.0),
    ];

    let mut fine = DrawingSession::new(0.00001);
    let mut obs_fine = RecordingObserver::default();
    fine.start_drawing(DrawingMode::Lasso, &mut obs_fine);
    draw_lasso(&mut fine, &mut obs_fine, &trace);

    let mut coarse = DrawingSession::new(0.001);
    let mut obs_coarse = RecordingObserver::default();
    coarse.start_drawing(DrawingMode::Lasso, &mut obs_coarse);
    draw_lasso(&mut coarse, &mut obs_coarse, &trace);

    let ring_len = |obs: &RecordingObserver| {
        obs.captures[0]
            .0
            .as_ref()
            .and_then(|g| g.ring().map(<[GeoPoint]>::len))
    };
    assert_eq!(ring_len(&obs_fine), Some(5));
    assert_eq!(ring_len(&obs_coarse), Some(4));
}
