//! Vertrag der Kurven-Familien: abgetasteter Pfad, Punktabfrage, Endwinkel.

use glam::Vec2;

/// Eine abgetastete, parametrische Kurve.
///
/// `points()` liefert den dicht abgetasteten Pfad (nie leer). `point_at(0)`
/// und `point_at(1)` stimmen mit dem ersten bzw. letzten Pfadpunkt überein.
pub trait CurveShape: Send + Sync {
    /// Abgetasteter Pfad in Display-Einheiten.
    fn points(&self) -> &[Vec2];

    /// Punkt auf der Kurve für t ∈ [0, 1].
    fn point_at(&self, t: f32) -> Vec2;

    /// Tangentenwinkel (Radiant) bei t = 0, in Laufrichtung.
    fn start_angle(&self) -> f32;

    /// Tangentenwinkel (Radiant) bei t = 1, in Laufrichtung.
    fn end_angle(&self) -> f32;
}

/// Kurve, die vollständig durch ihren gleichabständigen Pfad beschrieben ist.
///
/// `point_at` interpoliert linear zwischen benachbarten Pfadpunkten.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineShape {
    points: Vec<Vec2>,
    start_angle: f32,
    end_angle: f32,
}

impl PolylineShape {
    /// Erstellt die Form aus einem Pfad. Ein leerer Pfad wird zu `[Vec2::ZERO]`.
    pub fn new(mut points: Vec<Vec2>) -> Self {
        if points.is_empty() {
            points.push(Vec2::ZERO);
        }
        let start_angle = segment_angle(&points, 0);
        let end_angle = segment_angle(&points, points.len().saturating_sub(2));
        Self {
            points,
            start_angle,
            end_angle,
        }
    }
}

/// Winkel des Segments `points[i] → points[i + 1]`, 0 bei zu kurzem Pfad.
///
/// Überspringt Nullsegmente, damit doppelte Punkte keinen Winkel von 0 erzeugen.
pub(crate) fn segment_angle(points: &[Vec2], i: usize) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    let a = points[i];
    let b = points[i + 1];
    let delta = b - a;
    if delta.length_squared() > f32::EPSILON {
        return delta.to_angle();
    }
    // Ersatz: Gesamtrichtung vom ersten zum letzten Punkt
    let whole = points[points.len() - 1] - points[0];
    if whole.length_squared() > f32::EPSILON {
        whole.to_angle()
    } else {
        0.0
    }
}

impl CurveShape for PolylineShape {
    fn points(&self) -> &[Vec2] {
        &self.points
    }

    fn point_at(&self, t: f32) -> Vec2 {
        let last = self.points.len() - 1;
        if last == 0 {
            return self.points[0];
        }
        let position = t.clamp(0.0, 1.0) * last as f32;
        if position >= last as f32 {
            return self.points[last];
        }
        let index = (position.floor() as usize).min(last - 1);
        let local = position - index as f32;
        self.points[index].lerp(self.points[index + 1], local)
    }

    fn start_angle(&self) -> f32 {
        self.start_angle
    }

    fn end_angle(&self) -> f32 {
        self.end_angle
    }
}
