//! Kreisbogen durch drei Punkte (Perfect-Circle-Slider).

use crate::core::shape::CurveShape;
use crate::shared::CURVE_POINTS_SEPARATION;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Relative Schranke für kollineare Kontrollpunkte (Fläche zu Seitenlänge²).
const COLLINEAR_TOLERANCE: f32 = 1e-3;

/// Maximales Verhältnis von Bogenlänge zu Kontrollpolygon-Länge.
const MAX_ARC_TO_POLYGON_RATIO: f32 = 32.0;

/// Kreisbogen mit analytischer Punktabfrage.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularArc {
    center: Vec2,
    radius: f32,
    start: f32,
    sweep: f32,
    points: Vec<Vec2>,
}

impl CircularArc {
    /// Konstruiert den Bogen von `control[0]` über `control[1]` nach `control[2]`.
    ///
    /// Liefert `None` bei ungleich drei Punkten, bei (nahezu) kollinearen
    /// Punkten und bei Bögen, die im Verhältnis zu ihren Kontrollpunkten
    /// entarten. Beide Prüfungen sind skalierungsunabhängig.
    /// Mit `length > 0` wird der Bogen auf diese Länge gekürzt.
    pub fn through(control: &[Vec2], length: f32) -> Option<Self> {
        let &[a, b, c] = control else {
            return None;
        };

        let longest_side = a.distance(b).max(b.distance(c)).max(c.distance(a));
        let cross = (b - a).perp_dot(c - a);
        if longest_side <= f32::EPSILON
            || cross.abs() <= COLLINEAR_TOLERANCE * longest_side * longest_side
        {
            return None;
        }

        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        let (a2, b2, c2) = (a.length_squared(), b.length_squared(), c.length_squared());
        let center = Vec2::new(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        );
        let radius = a.distance(center);

        let start = (a - center).to_angle();
        let end = (c - center).to_angle();
        // Gegen den Uhrzeigersinn, wenn a → b → c eine Linksdrehung ist
        let counter_clockwise = (b - a).perp_dot(c - b) > 0.0;
        let mut sweep = if counter_clockwise {
            (end - start).rem_euclid(TAU)
        } else {
            -(start - end).rem_euclid(TAU)
        };

        let polygon_length = a.distance(b) + b.distance(c);
        if sweep.abs() * radius > MAX_ARC_TO_POLYGON_RATIO * polygon_length {
            return None;
        }

        if length > 0.0 && sweep.abs() * radius > length {
            sweep = sweep.signum() * length / radius;
        }

        let mut arc = Self {
            center,
            radius,
            start,
            sweep,
            points: Vec::new(),
        };
        let steps = ((sweep.abs() * radius / CURVE_POINTS_SEPARATION).ceil() as usize).max(1);
        arc.points = (0..=steps)
            .map(|i| arc.point_at(i as f32 / steps as f32))
            .collect();
        Some(arc)
    }

    /// Mittelpunkt des Kreises.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Radius des Kreises.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn tangent_angle(&self, angle: f32) -> f32 {
        let turn = if self.sweep >= 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
        Vec2::from_angle(angle + turn).to_angle()
    }
}

impl CurveShape for CircularArc {
    fn points(&self) -> &[Vec2] {
        &self.points
    }

    fn point_at(&self, t: f32) -> Vec2 {
        let angle = self.start + self.sweep * t.clamp(0.0, 1.0);
        self.center + Vec2::from_angle(angle) * self.radius
    }

    fn start_angle(&self) -> f32 {
        self.tangent_angle(self.start)
    }

    fn end_angle(&self) -> f32 {
        self.tangent_angle(self.start + self.sweep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn half_circle() -> CircularArc {
        // Oberer Halbkreis um (50, 0) von rechts nach links
        CircularArc::through(
            &[
                Vec2::new(100.0, 0.0),
                Vec2::new(50.0, 50.0),
                Vec2::new(0.0, 0.0),
            ],
            0.0,
        )
        .expect("Bogen muss konstruierbar sein")
    }

    #[test]
    fn test_circumcenter_and_radius() {
        let arc = half_circle();
        assert_relative_eq!(arc.center().x, 50.0, epsilon = 1e-3);
        assert_relative_eq!(arc.center().y, 0.0, epsilon = 1e-3);
        assert_relative_eq!(arc.radius(), 50.0, epsilon = 1e-3);
    }

    #[test]
    fn test_arc_passes_middle_point() {
        let arc = half_circle();
        let mid = arc.point_at(0.5);
        assert_relative_eq!(mid.x, 50.0, epsilon = 1e-2);
        assert_relative_eq!(mid.y, 50.0, epsilon = 1e-2);
    }

    #[test]
    fn test_endpoints_match_sampled_path() {
        let arc = half_circle();
        let points = arc.points();
        assert!(arc.point_at(0.0).distance(points[0]) < 1e-3);
        assert!(arc.point_at(1.0).distance(points[points.len() - 1]) < 1e-3);
    }

    #[test]
    fn test_tangent_angles() {
        let arc = half_circle();
        // Start bei (100, 0) läuft nach +y, Ende bei (0, 0) läuft nach -y
        assert_relative_eq!(arc.start_angle(), PI / 2.0, epsilon = 1e-3);
        assert_relative_eq!(arc.end_angle(), -PI / 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_collinear_points_are_rejected() {
        let control = [Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)];
        assert!(CircularArc::through(&control, 0.0).is_none());
        assert!(CircularArc::through(&control[..2], 0.0).is_none());
    }

    #[test]
    fn test_nearly_collinear_detour_is_rejected() {
        // Mittelpunkt außerhalb der Sehne: fast voller Kreis mit riesigem Radius
        let control = [
            Vec2::new(0.0, 0.0),
            Vec2::new(-100.0, 0.01),
            Vec2::new(100.0, 0.0),
        ];
        assert!(CircularArc::through(&control, 0.0).is_none());

        // Gleiche Form, tausendfach kleiner: gleiche Entscheidung
        let tiny: Vec<Vec2> = control.iter().map(|p| *p * 1e-3).collect();
        assert!(CircularArc::through(&tiny, 0.0).is_none());
    }

    #[test]
    fn test_small_arc_is_accepted_at_any_scale() {
        let control = [
            Vec2::new(1.0, 0.0),
            Vec2::new(0.5, 0.5),
            Vec2::new(0.0, 0.0),
        ];
        let arc = CircularArc::through(&control, 0.0).expect("Bogen muss konstruierbar sein");
        assert_relative_eq!(arc.radius(), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_length_truncates_sweep() {
        let arc = CircularArc::through(
            &[
                Vec2::new(100.0, 0.0),
                Vec2::new(50.0, 50.0),
                Vec2::new(0.0, 0.0),
            ],
            50.0 * PI / 2.0,
        )
        .expect("Bogen muss konstruierbar sein");
        let end = arc.point_at(1.0);
        assert_relative_eq!(end.x, 50.0, epsilon = 1e-2);
        assert_relative_eq!(end.y, 50.0, epsilon = 1e-2);
    }
}
