use super::*;
use crate::draw::{DrawStatus, VertexOutcome};
use crate::geometry::{Point, Transform};
use crate::input::Tool;

/// Surface laid out 50px below the window top, like the classic toolbar layout.
fn create_test_input_state() -> InputState {
    let mut state = InputState::default();
    state.on_window_resize(800, 650);
    state.on_layout(Some(Transform::translate(0.0, 50.0)));
    state
}

/// Clicks at drawing-space `(x, y)` by converting through the surface transform.
fn click(state: &mut InputState, x: f64, y: f64) -> Option<VertexOutcome> {
    state.on_pointer_click(Point::new(x, y + 50.0))
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_defaults() {
    let state = InputState::default();
    assert_eq!(state.active_tool(), Tool::DrawPolygon);
    assert_eq!(state.status(), DrawStatus::Idle);
    assert!(state.polygons().is_empty());
    assert!(state.current_polygon().is_empty());
    assert_eq!(state.pointer_position(), Point::ORIGIN);
}

#[test]
fn test_square_scenario_closes_on_fourth_click() {
    let mut state = create_test_input_state();
    click(&mut state, 0.0, 0.0);
    click(&mut state, 100.0, 0.0);
    click(&mut state, 100.0, 100.0);
    let outcome = click(&mut state, 5.0, 5.0);

    assert_eq!(outcome, Some(VertexOutcome::Closed { index: 0 }));
    assert_eq!(state.polygons().len(), 1);
    assert_eq!(
        state.polygons()[0].ring(),
        &[p(0.0, 0.0), p(100.0, 0.0), p(100.0, 100.0), p(0.0, 0.0)]
    );
    assert!(state.current_polygon().is_empty());
}

#[test]
fn test_click_length_tracks_click_count() {
    let mut state = create_test_input_state();
    for i in 1..=5 {
        click(&mut state, 40.0 * i as f64, 200.0);
        assert_eq!(state.current_polygon().len(), i);
    }
}

#[test]
fn test_two_vertex_guard() {
    let mut state = create_test_input_state();
    click(&mut state, 0.0, 0.0);
    click(&mut state, 100.0, 0.0);
    assert_eq!(click(&mut state, 2.0, 2.0), Some(VertexOutcome::Added));
    assert_eq!(state.current_polygon().len(), 3);
    assert!(state.polygons().is_empty());
}

#[test]
fn test_threshold_boundary() {
    let mut state = create_test_input_state();
    click(&mut state, 0.0, 0.0);
    click(&mut state, 100.0, 0.0);
    click(&mut state, 100.0, 100.0);

    assert_eq!(click(&mut state, 0.0, 10.0), Some(VertexOutcome::Added));
    assert!(state.polygons().is_empty());

    assert_eq!(
        click(&mut state, 0.0, 9.999),
        Some(VertexOutcome::Closed { index: 0 })
    );
    assert_eq!(state.polygons()[0].vertex_count(), 4);
}

#[test]
fn test_non_draw_tools_ignore_pointer_events() {
    let mut state = create_test_input_state();
    click(&mut state, 0.0, 0.0);
    state.on_pointer_move(p(20.0, 70.0));
    let pointer_before = state.pointer_position();

    for tool in [Tool::ZoomIn, Tool::ZoomOut, Tool::Pan] {
        state.select_tool(tool);
        assert_eq!(click(&mut state, 300.0, 300.0), None);
        assert!(!state.on_pointer_move(p(400.0, 400.0)));
        assert_eq!(state.current_polygon(), &[p(0.0, 0.0)]);
        assert!(state.polygons().is_empty());
        assert_eq!(state.pointer_position(), pointer_before);
    }
}

#[test]
fn test_sketch_resumes_after_returning_to_draw_tool() {
    let mut state = create_test_input_state();
    click(&mut state, 0.0, 0.0);
    click(&mut state, 100.0, 0.0);
    state.select_tool(Tool::Pan);
    click(&mut state, 50.0, 50.0);
    state.select_tool(Tool::DrawPolygon);
    click(&mut state, 100.0, 100.0);
    click(&mut state, 3.0, 0.0);
    assert_eq!(state.polygons().len(), 1);
    assert_eq!(state.polygons()[0].vertex_count(), 3);
}

#[test]
fn test_select_current_tool_is_noop() {
    let mut state = create_test_input_state();
    click(&mut state, 10.0, 10.0);
    state.on_pointer_move(p(30.0, 90.0));
    state.needs_redraw = false;

    assert!(!state.select_tool(Tool::DrawPolygon));
    assert_eq!(state.select_tool_by_name("draw-polygon"), Ok(false));
    assert!(!state.needs_redraw);
    assert_eq!(state.active_tool(), Tool::DrawPolygon);
    assert_eq!(state.current_polygon(), &[p(10.0, 10.0)]);
    assert_eq!(state.pointer_position(), p(30.0, 40.0));
}

#[test]
fn test_unknown_tool_name_keeps_active_tool() {
    let mut state = create_test_input_state();
    state.select_tool(Tool::Pan);
    assert!(state.select_tool_by_name("spray-can").is_err());
    assert_eq!(state.active_tool(), Tool::Pan);
}

#[test]
fn test_resize_mid_sketch_keeps_points() {
    let mut state = create_test_input_state();
    for (x, y) in [(0.0, 0.0), (60.0, 0.0), (60.0, 60.0), (1.0, 1.0)] {
        click(&mut state, x, y);
    }
    click(&mut state, 200.0, 200.0);
    click(&mut state, 260.0, 200.0);
    let polygons_before = state.polygons().to_vec();
    let current_before = state.current_polygon().to_vec();

    assert!(state.on_viewport_resize(320, 240));
    assert!(state.on_window_resize(1920, 1080));

    assert_eq!(state.polygons(), polygons_before.as_slice());
    assert_eq!(state.current_polygon(), current_before.as_slice());
    assert_eq!(state.viewport().height, 1030);
}

#[test]
fn test_events_before_layout_are_dropped() {
    let mut state = InputState::default();
    assert_eq!(state.on_pointer_click(p(10.0, 10.0)), None);
    assert!(!state.on_pointer_move(p(10.0, 10.0)));
    assert!(state.current_polygon().is_empty());

    state.on_layout(Some(Transform::IDENTITY));
    assert_eq!(
        state.on_pointer_click(p(10.0, 10.0)),
        Some(VertexOutcome::Started)
    );
}

#[test]
fn test_singular_layout_drops_events() {
    let mut state = create_test_input_state();
    state.on_layout(Some(Transform::scale_translate(0.0, 0.0, 0.0)));
    assert_eq!(state.on_pointer_click(p(10.0, 10.0)), None);
    assert!(state.current_polygon().is_empty());
}

#[test]
fn test_click_uses_its_own_position_not_cached_pointer() {
    let mut state = create_test_input_state();
    state.on_pointer_move(p(500.0, 500.0));
    click(&mut state, 7.0, 8.0);
    assert_eq!(state.current_polygon(), &[p(7.0, 8.0)]);
}

#[test]
fn test_scaled_layout_maps_clicks() {
    let mut state = InputState::default();
    state.on_layout(Some(Transform::scale_translate(2.0, 0.0, 50.0)));
    state.on_pointer_click(p(200.0, 250.0));
    assert_eq!(state.current_polygon(), &[p(100.0, 100.0)]);
}

#[test]
fn test_preview_follows_pointer() {
    let mut state = create_test_input_state();
    assert!(state.preview().is_empty());

    click(&mut state, 0.0, 0.0);
    click(&mut state, 40.0, 0.0);
    state.on_pointer_move(p(40.0, 80.0));

    let preview = state.preview();
    assert_eq!(preview.polyline, vec![p(0.0, 0.0), p(40.0, 0.0)]);
    let guide = preview.guide.unwrap();
    assert_eq!(guide.from, p(40.0, 0.0));
    assert_eq!(guide.to, p(40.0, 30.0));
}

#[test]
fn test_preview_cleared_after_close() {
    let mut state = create_test_input_state();
    for (x, y) in [(0.0, 0.0), (30.0, 0.0), (30.0, 30.0), (0.0, 1.0)] {
        click(&mut state, x, y);
    }
    assert!(state.preview().is_empty());
}

#[test]
fn test_overflowing_click_is_dropped() {
    let mut state = create_test_input_state();
    state.on_layout(Some(Transform::scale_translate(1e-3, 0.0, 0.0)));
    assert_eq!(state.on_pointer_click(p(1e308, 0.0)), None);
    assert!(!state.on_pointer_move(p(1e308, 0.0)));
    assert!(state.current_polygon().is_empty());
    assert_eq!(state.pointer_position(), Point::ORIGIN);
}

#[test]
fn test_tiny_scale_layout_accepts_clicks() {
    let mut state = create_test_input_state();
    state.on_layout(Some(Transform::scale_translate(1e-7, 0.0, 0.0)));
    assert_eq!(
        state.on_pointer_click(p(1e-6, 0.0)),
        Some(VertexOutcome::Started)
    );
    assert_eq!(state.current_polygon().len(), 1);
    assert!(state.current_polygon()[0].distance_to(p(10.0, 0.0)) < 1e-9);
}

#[test]
fn test_redraw_flag() {
    let mut state = create_test_input_state();
    assert!(state.take_redraw());
    assert!(!state.take_redraw());

    // Moving while idle does not require a redraw
    state.on_pointer_move(p(1.0, 51.0));
    assert!(!state.needs_redraw);

    click(&mut state, 0.0, 0.0);
    assert!(state.take_redraw());
    state.on_pointer_move(p(9.0, 59.0));
    assert!(state.take_redraw());
}

#[test]
fn test_custom_settings() {
    let mut state = InputState::new(InputSettings {
        close_threshold: 25.0,
        default_tool: Tool::Pan,
        toolbar_height: 0,
    });
    state.on_layout(Some(Transform::IDENTITY));
    assert_eq!(state.on_pointer_click(p(0.0, 0.0)), None);

    state.select_tool(Tool::DrawPolygon);
    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)] {
        state.on_pointer_click(p(x, y));
    }
    assert!(matches!(
        state.on_pointer_click(p(20.0, 0.0)),
        Some(VertexOutcome::Closed { .. })
    ));

    state.on_window_resize(640, 480);
    assert_eq!(state.viewport().height, 480);
}
