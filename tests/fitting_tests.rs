//! Integrationstests für die Kurven-Familien und die Spielfeld-Skalierung.

use approx::assert_relative_eq;
use glam::Vec2;
use playfield_curves::core::fitting::CircularArc;
use playfield_curves::shared::spline_geometry::polyline_length;
use playfield_curves::{
    fit_shape, ControlPointSet, CurveShape, CurveType, HitObject, PlayfieldScale,
};

const SEPARATION: f32 = playfield_curves::shared::CURVE_POINTS_SEPARATION;

fn assert_even_spacing(points: &[Vec2]) {
    for w in points.windows(2) {
        let d = w[0].distance(w[1]);
        assert!(
            d <= SEPARATION + 1e-3,
            "Punktabstand {} überschreitet {}",
            d,
            SEPARATION
        );
    }
}

#[test]
fn test_curve_type_from_beatmap_letter() {
    assert_eq!(CurveType::from_char('L'), CurveType::Linear);
    assert_eq!(CurveType::from_char('b'), CurveType::Bezier);
    assert_eq!(CurveType::from_char('P'), CurveType::PerfectCircle);
    assert_eq!(CurveType::from_char('C'), CurveType::Catmull);
    assert_eq!(CurveType::from_char('X'), CurveType::Bezier);
}

#[test]
fn test_every_family_samples_evenly_and_respects_length() {
    let control = [
        Vec2::new(0.0, 0.0),
        Vec2::new(60.0, 80.0),
        Vec2::new(140.0, 20.0),
    ];
    for curve_type in [
        CurveType::Linear,
        CurveType::Bezier,
        CurveType::Catmull,
        CurveType::PerfectCircle,
    ] {
        let shape = fit_shape(curve_type, &control, 120.0);
        let points = shape.points();

        assert!(points.len() > 2, "{:?}: Pfad zu kurz", curve_type);
        assert!(
            points[0].distance(control[0]) < 1e-2,
            "{:?}: Start verschoben",
            curve_type
        );
        assert_even_spacing(points);
        assert_relative_eq!(polyline_length(points), 120.0, epsilon = 1.0);
    }
}

#[test]
fn test_point_at_matches_path_ends_for_every_family() {
    let control = [
        Vec2::new(10.0, 10.0),
        Vec2::new(50.0, 90.0),
        Vec2::new(120.0, 40.0),
    ];
    for curve_type in [
        CurveType::Linear,
        CurveType::Bezier,
        CurveType::Catmull,
        CurveType::PerfectCircle,
    ] {
        let shape = fit_shape(curve_type, &control, 0.0);
        let points = shape.points();

        assert!(shape.point_at(0.0).distance(points[0]) < 1e-3);
        assert!(shape.point_at(1.0).distance(points[points.len() - 1]) < 1e-3);
    }
}

#[test]
fn test_collinear_perfect_circle_falls_back_to_bezier() {
    let control = [Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0), Vec2::new(100.0, 0.0)];
    assert!(CircularArc::through(&control, 0.0).is_none());

    let shape = fit_shape(CurveType::PerfectCircle, &control, 0.0);
    let end = shape.point_at(1.0);
    assert_relative_eq!(end.x, 100.0, epsilon = 1e-3);
    assert_relative_eq!(shape.start_angle(), 0.0, epsilon = 1e-4);
    assert_relative_eq!(shape.end_angle(), 0.0, epsilon = 1e-4);
}

#[test]
fn test_degenerate_perfect_circle_stays_small() {
    // Fast kollinear, Mittelpunkt außerhalb der Sehne, Länge unbegrenzt
    let control = [
        Vec2::new(0.0, 0.0),
        Vec2::new(-100.0, 0.01),
        Vec2::new(100.0, 0.0),
    ];
    let shape = fit_shape(CurveType::PerfectCircle, &control, 0.0);
    let points = shape.points();

    let polygon = polyline_length(&control);
    assert!(
        points.len() as f32 <= polygon / SEPARATION + 2.0,
        "{} Punkte für ein Kontrollpolygon der Länge {}",
        points.len(),
        polygon
    );
    assert!(shape.point_at(0.0).distance(control[0]) < 1e-3);
    assert_even_spacing(points);
}

#[test]
fn test_linear_end_angle_follows_last_segment() {
    let control = [Vec2::new(0.0, 0.0), Vec2::new(40.0, 0.0), Vec2::new(40.0, -40.0)];
    let shape = fit_shape(CurveType::Linear, &control, 0.0);

    assert_relative_eq!(shape.start_angle(), 0.0, epsilon = 1e-4);
    assert_relative_eq!(
        shape.end_angle(),
        -std::f32::consts::FRAC_PI_2,
        epsilon = 1e-4
    );
}

#[test]
fn test_viewport_scale_keeps_aspect_and_centers() {
    let scale = PlayfieldScale::for_viewport(1600.0, 900.0);

    assert_relative_eq!(scale.x_multiplier, scale.y_multiplier, epsilon = 1e-5);
    let left = scale.apply(Vec2::new(0.0, 0.0)).x;
    let right = scale.apply(Vec2::new(512.0, 0.0)).x;
    assert!(left > 0.0, "Spielfeld muss horizontal zentriert sein");
    assert!((1600.0 - right - left).abs() <= 1.0);
}

#[test]
fn test_scaled_and_raw_control_points() {
    let scale = PlayfieldScale::for_viewport(1280.0, 960.0);
    let hit = HitObject::new(
        9,
        CurveType::Bezier,
        Vec2::new(10.0, 20.0),
        vec![Vec2::new(30.0, 40.0)],
        100.0,
        &scale,
    );

    let raw = ControlPointSet::from_hit_object(&hit, false);
    let scaled = ControlPointSet::from_hit_object(&hit, true);

    assert_eq!(raw.len(), 2);
    assert_eq!(raw.get(1), Some(Vec2::new(30.0, 40.0)));
    assert_eq!(scaled.get(0), Some(scale.apply(Vec2::new(10.0, 20.0))));
    assert_eq!(scaled.get(2), None);
    assert_relative_eq!(hit.length_in(true), 100.0 * scale.length_factor());
    assert_relative_eq!(hit.length_in(false), 100.0);
}
