//! Fallback-Renderer: stempelt Hit-Circle-Sprites an jedem Kurvenpunkt.

use super::target::{CurveTarget, SpriteKind};
use crate::shared::options::{FALLBACK_BODY_COLOR, FALLBACK_OVERLAY_TINT};
use glam::Vec2;

/// Zeichnet den Punktbereich `points` von Kurve `object_id` als gestempelte Sprites.
///
/// Erst alle Overlays, danach alle Körper. Das Ziel hält diese Schichtung
/// über mehrere Aufrufe derselben Kurve hinweg, so dass ein geteilter
/// Bereich genauso aussieht wie ein einzelner. Der Körper übernimmt das
/// Alpha von `color`, RGB bleibt das feste Dunkelgrau.
pub fn draw_fallback<T>(
    target: &mut T,
    object_id: u64,
    points: &[Vec2],
    color: [f32; 4],
    diameter: f32,
) where
    T: CurveTarget + ?Sized,
{
    for &point in points {
        target.draw_sprite(
            object_id,
            SpriteKind::HitCircleOverlay,
            point,
            diameter,
            FALLBACK_OVERLAY_TINT,
        );
    }

    let mut body = FALLBACK_BODY_COLOR;
    body[3] = color[3];
    for &point in points {
        target.draw_sprite(object_id, SpriteKind::HitCircle, point, diameter, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{RecordingTarget, SpriteStamp};

    #[test]
    fn test_overlays_first_then_bodies() {
        let mut target = RecordingTarget::new();
        let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];

        draw_fallback(&mut target, 1, &points, [1.0, 0.0, 0.0, 0.25], 32.0);

        let stamps = target.sprite_stamps();
        let kinds: Vec<_> = stamps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SpriteKind::HitCircleOverlay,
                SpriteKind::HitCircleOverlay,
                SpriteKind::HitCircle,
                SpriteKind::HitCircle,
            ]
        );
        assert_eq!(stamps[2].tint[3], 0.25);
        assert_eq!(stamps[2].tint[0], FALLBACK_BODY_COLOR[0]);
        assert_eq!(stamps[0].tint, FALLBACK_OVERLAY_TINT);
        assert!(stamps.iter().all(|s| s.size == 32.0));
    }

    #[test]
    fn test_split_range_keeps_overlays_below_bodies() {
        let points: Vec<Vec2> = (0..10).map(|i| Vec2::new(i as f32 * 2.5, 0.0)).collect();

        let mut whole = RecordingTarget::new();
        draw_fallback(&mut whole, 4, &points, [1.0; 4], 32.0);

        let mut split = RecordingTarget::new();
        draw_fallback(&mut split, 4, &points[..5], [1.0; 4], 32.0);
        draw_fallback(&mut split, 4, &points[5..], [1.0; 4], 32.0);

        let order = |stamps: Vec<SpriteStamp>| {
            stamps
                .into_iter()
                .map(|s| (s.kind, s.center))
                .collect::<Vec<_>>()
        };
        assert_eq!(order(whole.sprite_stamps()), order(split.sprite_stamps()));
        assert_eq!(whole.commands(), split.commands());
    }

    #[test]
    fn test_other_curve_starts_new_layering() {
        let mut target = RecordingTarget::new();
        let first = [Vec2::new(0.0, 0.0)];
        let second = [Vec2::new(50.0, 0.0)];

        draw_fallback(&mut target, 1, &first, [1.0; 4], 32.0);
        draw_fallback(&mut target, 2, &second, [1.0; 4], 32.0);

        // Kurve 2 liegt komplett über Kurve 1
        let stamps: Vec<_> = target
            .sprite_stamps()
            .into_iter()
            .map(|s| (s.kind, s.center.x))
            .collect();
        assert_eq!(
            stamps,
            vec![
                (SpriteKind::HitCircleOverlay, 0.0),
                (SpriteKind::HitCircle, 0.0),
                (SpriteKind::HitCircleOverlay, 50.0),
                (SpriteKind::HitCircle, 50.0),
            ]
        );
    }

    #[test]
    fn test_empty_range_draws_nothing() {
        let mut target = RecordingTarget::new();
        draw_fallback(&mut target, 1, &[], [1.0; 4], 32.0);
        assert!(target.commands().is_empty());
    }
}
