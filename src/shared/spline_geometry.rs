//! Reine Geometrie-Funktionen für die Kurven-Familien (Bezier, Catmull-Rom).
//!
//! Layer-neutral: wird von `core::fitting` und den Benchmarks genutzt, ohne
//! Abhängigkeiten zum Render-Layer.

use glam::Vec2;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Berechnet eine dichte Punktliste entlang einer Catmull-Rom-Spline durch `points`.
///
/// Für Rand-Segmente werden Phantom-Punkte gespiegelt, damit die Kurve
/// natürlich durch den ersten und letzten Punkt läuft.
///
/// `samples_per_segment`: Anzahl der Zwischenpunkte pro Segment (ohne Endpunkt).
pub fn catmull_rom_chain(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    let samples_per_segment = samples_per_segment.max(1);
    if points.len() < 2 {
        return points.to_vec();
    }

    let n = points.len();
    let mut result = Vec::with_capacity((n - 1) * samples_per_segment + 1);

    for seg in 0..(n - 1) {
        let p0 = if seg == 0 {
            2.0 * points[0] - points[1]
        } else {
            points[seg - 1]
        };
        let p1 = points[seg];
        let p2 = points[seg + 1];
        let p3 = if seg + 2 < n {
            points[seg + 2]
        } else {
            2.0 * points[n - 1] - points[n - 2]
        };

        for i in 0..samples_per_segment {
            let t = i as f32 / samples_per_segment as f32;
            result.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }

    // Endpunkt exakt übernehmen statt ihn über t = 1 zu berechnen
    result.push(points[n - 1]);
    result
}

/// Berechnet einen Punkt auf einer Bezier-Kurve beliebigen Grades (De-Casteljau).
pub fn bezier_point(control: &[Vec2], t: f32) -> Vec2 {
    match control.len() {
        0 => Vec2::ZERO,
        1 => control[0],
        _ => {
            let mut work = control.to_vec();
            for level in (1..work.len()).rev() {
                for i in 0..level {
                    work[i] = work[i].lerp(work[i + 1], t);
                }
            }
            work[0]
        }
    }
}

/// Tastet ein Bezier-Segment so dicht ab, dass benachbarte Punkte höchstens
/// etwa `max_step` auseinanderliegen (gemessen am Kontrollpolygon).
pub fn bezier_polyline(control: &[Vec2], max_step: f32) -> Vec<Vec2> {
    if control.len() < 2 {
        return control.to_vec();
    }
    if control.len() == 2 {
        return vec![control[0], control[1]];
    }

    // Das Kontrollpolygon ist immer mindestens so lang wie die Kurve
    let hull_length = polyline_length(control);
    let steps = (hull_length / max_step.max(f32::EPSILON)).ceil().max(1.0) as usize;

    let mut result = Vec::with_capacity(steps + 1);
    for i in 0..steps {
        result.push(bezier_point(control, i as f32 / steps as f32));
    }
    result.push(control[control.len() - 1]);
    result
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Kürzt eine Polyline auf die Bogenlänge `max_length`.
///
/// Der letzte Punkt wird auf dem Segment interpoliert, auf dem die Länge
/// erreicht wird. Ist die Polyline kürzer, bleibt sie unverändert.
pub fn truncate_polyline(points: &[Vec2], max_length: f32) -> Vec<Vec2> {
    if points.len() < 2 || max_length <= 0.0 {
        return points.to_vec();
    }

    let mut result = Vec::with_capacity(points.len());
    result.push(points[0]);
    let mut travelled = 0.0f32;

    for w in points.windows(2) {
        let seg_len = w[0].distance(w[1]);
        if travelled + seg_len >= max_length {
            let rest = max_length - travelled;
            let t = if seg_len > f32::EPSILON {
                rest / seg_len
            } else {
                1.0
            };
            result.push(w[0].lerp(w[1], t));
            return result;
        }
        travelled += seg_len;
        result.push(w[1]);
    }

    result
}

/// Verteilt Punkte gleichmäßig (Arc-Length) entlang einer Polyline.
pub fn resample_by_distance(polyline: &[Vec2], max_segment_length: f32) -> Vec<Vec2> {
    let (Some(&first), Some(&last)) = (polyline.first(), polyline.last()) else {
        return Vec::new();
    };
    if polyline.len() < 2 {
        return vec![first];
    }

    let total = polyline_length(polyline);
    if total < f32::EPSILON {
        return vec![first];
    }

    let segment_count = (total / max_segment_length).ceil().max(1.0) as usize;
    let spacing = total / segment_count as f32;

    let mut result = Vec::with_capacity(segment_count + 1);
    result.push(first);

    let mut poly_idx = 0;
    let mut remainder = 0.0f32; // Rest-Distanz im aktuellen Polyline-Segment

    for _ in 1..segment_count {
        let mut needed = spacing;

        loop {
            if poly_idx + 1 >= polyline.len() {
                break;
            }
            let seg_len = polyline[poly_idx].distance(polyline[poly_idx + 1]);
            let available = seg_len - remainder;

            if available >= needed {
                remainder += needed;
                let t = remainder / seg_len;
                result.push(polyline[poly_idx].lerp(polyline[poly_idx + 1], t));
                break;
            } else {
                needed -= available;
                remainder = 0.0;
                poly_idx += 1;
            }
        }
    }

    // Endpunkt immer exakt übernehmen
    result.push(last);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resample_keeps_endpoints_and_spacing() {
        let line = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        let points = resample_by_distance(&line, 2.5);

        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Vec2::new(0.0, 0.0));
        assert_eq!(points[4], Vec2::new(10.0, 0.0));
        for w in points.windows(2) {
            assert_relative_eq!(w[0].distance(w[1]), 2.5, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_resample_empty_and_degenerate() {
        assert!(resample_by_distance(&[], 2.5).is_empty());
        let same = [Vec2::ONE, Vec2::ONE];
        assert_eq!(resample_by_distance(&same, 2.5), vec![Vec2::ONE]);
    }

    #[test]
    fn test_truncate_polyline_interpolates_last_point() {
        let line = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        let cut = truncate_polyline(&line, 15.0);

        assert_eq!(cut.len(), 3);
        assert_relative_eq!(cut[2].x, 10.0);
        assert_relative_eq!(cut[2].y, 5.0);
    }

    #[test]
    fn test_truncate_polyline_shorter_than_limit_is_unchanged() {
        let line = [Vec2::ZERO, Vec2::new(3.0, 4.0)];
        assert_eq!(truncate_polyline(&line, 100.0), line.to_vec());
    }

    #[test]
    fn test_bezier_point_quadratic_midpoint() {
        let control = [Vec2::new(0.0, 0.0), Vec2::new(50.0, 100.0), Vec2::new(100.0, 0.0)];
        let mid = bezier_point(&control, 0.5);
        assert_relative_eq!(mid.x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(mid.y, 50.0, epsilon = 1e-4);
    }

    #[test]
    fn test_catmull_chain_passes_through_control_points() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(20.0, 0.0),
        ];
        let chain = catmull_rom_chain(&points, 4);

        assert_eq!(chain.len(), 9);
        assert_eq!(chain[0], points[0]);
        assert_eq!(chain[4], points[1]);
        assert_eq!(chain[8], points[2]);
    }
}
