//! Vertex-Generierung für Kurvenkegel.
//!
//! Jeder abgetastete Punkt wird zu einem flachen Kegel (Dreiecksfächer):
//! Zentrum vorne (`radial = 0`), Rand hinten (`radial = 1`). Überlappende
//! Kegel ergeben per Tiefentest die Vereinigung aller Kreise.

use super::super::types::CurveVertex;
use glam::Vec2;
use std::f32::consts::TAU;

/// Einheitsrichtungen des Kegelrands (`segments + 1` Einträge, geschlossen).
pub(super) fn cone_ring(segments: usize) -> Vec<Vec2> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            if i == segments {
                Vec2::X
            } else {
                Vec2::from_angle(i as f32 / segments as f32 * TAU)
            }
        })
        .collect()
}

/// Anzahl der Vertices pro Kegel für einen Ring aus `cone_ring`.
pub(super) fn vertices_per_cone(ring: &[Vec2]) -> usize {
    ring.len().saturating_sub(1) * 3
}

/// Erzeugt einen Kegel als Dreiecksliste.
pub(super) fn push_cone(vertices: &mut Vec<CurveVertex>, center: Vec2, radius: f32, ring: &[Vec2]) {
    for w in ring.windows(2) {
        let a = center + w[0] * radius;
        let b = center + w[1] * radius;
        vertices.push(CurveVertex::new([center.x, center.y], 0.0));
        vertices.push(CurveVertex::new([a.x, a.y], 1.0));
        vertices.push(CurveVertex::new([b.x, b.y], 1.0));
    }
}
