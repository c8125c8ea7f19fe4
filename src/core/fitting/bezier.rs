//! Bezier- und lineare Slider.

use super::finish_polyline;
use crate::core::shape::PolylineShape;
use crate::shared::spline_geometry::bezier_polyline;
use crate::shared::CURVE_POINTS_SEPARATION;
use glam::Vec2;

/// Tastet einen Bezier-Slider ab.
///
/// Doppelte aufeinanderfolgende Punkte (rote Anker) trennen Segmente.
/// Mit `linear = true` wird jedes Punktpaar zu einem eigenen Segment.
pub fn fit_bezier(control: &[Vec2], length: f32, linear: bool) -> PolylineShape {
    let mut dense: Vec<Vec2> = Vec::new();
    for segment in split_segments(control, linear) {
        let sampled = bezier_polyline(&segment, CURVE_POINTS_SEPARATION * 0.5);
        // Verbindungspunkt nicht doppelt aufnehmen
        let skip = usize::from(dense.last() == sampled.first());
        dense.extend(sampled.into_iter().skip(skip));
    }
    finish_polyline(&dense, length)
}

/// Zerlegt die Kontrollpunkte in Bezier-Segmente.
fn split_segments(control: &[Vec2], linear: bool) -> Vec<Vec<Vec2>> {
    if control.len() < 2 {
        return vec![control.to_vec()];
    }
    if linear {
        return control.windows(2).map(|w| w.to_vec()).collect();
    }

    let mut segments = Vec::new();
    let mut current = vec![control[0]];
    for pair in control.windows(2) {
        if pair[0] == pair[1] {
            if current.len() > 1 {
                segments.push(std::mem::replace(&mut current, vec![pair[1]]));
            }
        } else {
            current.push(pair[1]);
        }
    }
    if current.len() > 1 || segments.is_empty() {
        segments.push(current);
    }
    segments
}
