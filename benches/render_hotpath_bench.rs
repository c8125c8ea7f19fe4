//! Benchmark für den Render-Hotpath der Kurven.
//!
//! Misst die CPU-Kosten pro Frame ohne GPU (über `RecordingTarget`):
//! - Fallback: Sprite-Stempel pro Kurvenpunkt
//! - Erweiterter Pfad: Draw aus gecachter Geometrie
//! - Splice: fortlaufendes Aufdecken in kleinen Schritten

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use playfield_curves::render::recording::RecordedGeometry;
use playfield_curves::{
    Curve, CurveEnvironment, CurveOptions, CurveRenderContext, CurveType, HitObject,
    PlayfieldScale, RecordingTarget,
};
use std::hint::black_box;

const COLOR: [f32; 4] = [0.9, 0.4, 0.2, 0.8];

fn build_slider(pixel_length: f32) -> HitObject {
    HitObject::new(
        1,
        CurveType::Bezier,
        Vec2::new(32.0, 192.0),
        vec![
            Vec2::new(160.0, 32.0),
            Vec2::new(320.0, 352.0),
            Vec2::new(480.0, 192.0),
        ],
        pixel_length,
        &PlayfieldScale::IDENTITY,
    )
}

/// Misst: ganze Kurve pro Frame zeichnen (Fallback vs. gecachte Geometrie)
fn bench_draw_per_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_draw_frame");
    let environment = CurveEnvironment::new(64.0, [1.0; 4], true);

    for &length in &[100.0f32, 400.0, 1600.0] {
        for force_fallback in [true, false] {
            let options = CurveOptions {
                force_fallback_sliders: force_fallback,
                ..Default::default()
            };
            let ctx = CurveRenderContext {
                environment: &environment,
                options: &options,
            };
            let mut curve: Curve<RecordedGeometry> = Curve::fitted(&build_slider(length), false);
            let mut target = RecordingTarget::new();
            let label = if force_fallback { "fallback" } else { "advanced" };

            group.bench_function(BenchmarkId::new(label, length as u32), |b| {
                b.iter(|| {
                    target.begin_frame();
                    curve
                        .draw(&ctx, &mut target, black_box(COLOR))
                        .expect("Draw fehlgeschlagen");
                    black_box(target.commands().len())
                })
            });
        }
    }

    group.finish();
}

/// Misst: vollständiges Aufdecken per Splice inkl. Neuaufbau der Geometrie
fn bench_progressive_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_progressive_splice");
    let environment = CurveEnvironment::new(64.0, [1.0; 4], true);
    let options = CurveOptions::default();
    let ctx = CurveRenderContext {
        environment: &environment,
        options: &options,
    };

    for &step in &[1usize, 8, 32] {
        let mut curve: Curve<RecordedGeometry> = Curve::fitted(&build_slider(800.0), false);
        let len = curve.points().map(|p| p.len()).unwrap_or(0);
        let mut target = RecordingTarget::new();

        group.bench_function(BenchmarkId::new("points_per_frame", step), |b| {
            b.iter(|| {
                curve.discard_geometry();
                let mut revealed = 0;
                while revealed < len {
                    let next = (revealed + step).min(len);
                    target.begin_frame();
                    curve
                        .splice(&ctx, &mut target, revealed, next)
                        .expect("Splice fehlgeschlagen");
                    curve
                        .draw_range(&ctx, &mut target, COLOR, 0, next)
                        .expect("Draw fehlgeschlagen");
                    revealed = next;
                }
                black_box(target.written_vertex_count())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_draw_per_frame, bench_progressive_splice);
criterion_main!(benches);
