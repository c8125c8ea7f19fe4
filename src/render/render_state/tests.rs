use super::*;
use crate::render::recording::RecordingTarget;

const FILL: [f32; 4] = [0.2, 0.4, 0.8, 1.0];
const BORDER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

fn line(count: usize) -> Vec<Vec2> {
    (0..count).map(|i| Vec2::new(i as f32 * 2.5, 0.0)).collect()
}

#[test]
fn test_construction_reserves_but_uploads_nothing() {
    let mut target = RecordingTarget::new();
    let state = CurveRenderState::new(&mut target, 3, &line(10), 8.0, RenderVariant::Static);

    assert_eq!(state.object_id(), 3);
    assert_eq!(state.variant(), RenderVariant::Static);
    assert_eq!(state.point_count(), 10);
    assert_eq!(state.uploaded_point_count(), 0);
    assert_eq!(target.written_vertex_count(), 0);
    assert_eq!(target.live_geometries(), 1);
}

#[test]
fn test_draw_uploads_only_requested_range() {
    let mut target = RecordingTarget::new();
    let mut state = CurveRenderState::new(&mut target, 1, &line(10), 8.0, RenderVariant::Static);

    state.draw(&mut target, FILL, BORDER, 2, 5);

    assert_eq!(state.uploaded_point_count(), 3);
    assert_eq!(target.written_vertex_count(), 3 * 90);
    let draws = target.geometry_draws();
    assert_eq!(draws.len(), 1);
    assert_eq!(draws[0].vertices, 180..450);
}

#[test]
fn test_redraw_of_cached_range_writes_nothing() {
    let mut target = RecordingTarget::new();
    let mut state = CurveRenderState::new(&mut target, 1, &line(10), 8.0, RenderVariant::Static);

    state.draw(&mut target, FILL, BORDER, 0, 10);
    let written = target.written_vertex_count();

    target.begin_frame();
    state.draw(&mut target, FILL, BORDER, 0, 10);
    state.draw(&mut target, FILL, BORDER, 3, 7);

    assert_eq!(target.written_vertex_count(), written);
}

#[test]
fn test_splice_work_is_proportional_to_new_points() {
    let mut target = RecordingTarget::new();
    let mut state = CurveRenderState::new(&mut target, 1, &line(100), 8.0, RenderVariant::Static);

    state.splice(&mut target, 0, 40);
    let after_first = target.written_vertex_count();
    state.splice(&mut target, 40, 45);

    assert_eq!(after_first, 40 * 90);
    assert_eq!(target.written_vertex_count() - after_first, 5 * 90);
    // Überlappende Splices laden nur die Lücke
    state.splice(&mut target, 30, 50);
    assert_eq!(target.written_vertex_count(), 50 * 90);
}

#[test]
fn test_dynamic_variant_reuploads_every_time() {
    let mut target = RecordingTarget::new();
    let mut state = CurveRenderState::new(&mut target, 1, &line(10), 8.0, RenderVariant::Dynamic);

    state.draw(&mut target, FILL, BORDER, 0, 4);
    state.draw(&mut target, FILL, BORDER, 0, 4);

    assert_eq!(target.written_vertex_count(), 2 * 4 * 90);
}

#[test]
fn test_out_of_range_requests_are_clamped() {
    let mut target = RecordingTarget::new();
    let mut state = CurveRenderState::new(&mut target, 1, &line(4), 8.0, RenderVariant::Static);

    state.draw(&mut target, FILL, BORDER, 2, 99);
    state.splice(&mut target, 7, 3);

    assert_eq!(state.uploaded_point_count(), 2);
    assert_eq!(target.geometry_draws()[0].vertices, 180..360);
}

#[test]
fn test_dropping_state_releases_geometry() {
    let mut target = RecordingTarget::new();
    let state = CurveRenderState::new(&mut target, 1, &line(4), 8.0, RenderVariant::Static);
    assert_eq!(target.live_geometries(), 1);

    drop(state);
    assert_eq!(target.live_geometries(), 0);
}
