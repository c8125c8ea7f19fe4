//! Catmull-Rom-Slider.

use super::finish_polyline;
use crate::core::shape::PolylineShape;
use crate::shared::spline_geometry::catmull_rom_chain;
use crate::shared::CURVE_POINTS_SEPARATION;
use glam::Vec2;

/// Tastet einen Catmull-Rom-Slider durch alle Kontrollpunkte ab.
pub fn fit_catmull(control: &[Vec2], length: f32) -> PolylineShape {
    let longest = control
        .windows(2)
        .map(|w| w[0].distance(w[1]))
        .fold(0.0f32, f32::max);
    // Doppelt so dicht wie der Ziel-Abstand, Resampling glättet danach
    let samples = ((longest / CURVE_POINTS_SEPARATION).ceil() as usize * 2).max(1);

    finish_polyline(&catmull_rom_chain(control, samples), length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::CurveShape;

    #[test]
    fn test_catmull_passes_start_and_end() {
        let control = [
            Vec2::new(0.0, 0.0),
            Vec2::new(40.0, 30.0),
            Vec2::new(80.0, 0.0),
        ];
        let shape = fit_catmull(&control, 0.0);

        assert_eq!(shape.point_at(0.0), control[0]);
        assert_eq!(shape.point_at(1.0), control[2]);
        assert!(shape.points().len() > 10);
    }
}
