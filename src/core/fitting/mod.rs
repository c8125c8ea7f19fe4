//! Fitting-Strategien: erzeugen aus Kontrollpunkten einen abgetasteten Pfad.
//!
//! Aufgeteilt in:
//! - `bezier`: Bezier- und lineare Slider (Segmente an roten Ankern)
//! - `catmull`: Catmull-Rom-Slider
//! - `circle`: Kreisbogen durch drei Punkte

mod bezier;
mod catmull;
mod circle;

pub use bezier::fit_bezier;
pub use catmull::fit_catmull;
pub use circle::CircularArc;

use super::hit_object::CurveType;
use super::shape::{CurveShape, PolylineShape};
use crate::shared::spline_geometry::{resample_by_distance, truncate_polyline};
use crate::shared::CURVE_POINTS_SEPARATION;
use glam::Vec2;

/// Wählt die Kurven-Familie und tastet die Kontrollpunkte ab.
///
/// `length` ist die Slider-Länge im Raum der Kontrollpunkte (0 = unbegrenzt).
/// Kreisbögen mit ungültiger Eingabe fallen auf Bezier zurück.
pub fn fit_shape(curve_type: CurveType, control: &[Vec2], length: f32) -> Box<dyn CurveShape> {
    match curve_type {
        CurveType::Linear => Box::new(fit_bezier(control, length, true)),
        CurveType::Bezier => Box::new(fit_bezier(control, length, false)),
        CurveType::Catmull => Box::new(fit_catmull(control, length)),
        CurveType::PerfectCircle => match CircularArc::through(control, length) {
            Some(arc) => Box::new(arc),
            None => {
                log::debug!(
                    "Kreisbogen mit {} Punkten nicht konstruierbar, verwende Bezier",
                    control.len()
                );
                Box::new(fit_bezier(control, length, false))
            }
        },
    }
}

/// Kürzt einen dichten Pfad auf `length` und verteilt die Punkte gleichmäßig.
fn finish_polyline(dense: &[Vec2], length: f32) -> PolylineShape {
    let truncated = truncate_polyline(dense, length);
    PolylineShape::new(resample_by_distance(&truncated, CURVE_POINTS_SEPARATION))
}
