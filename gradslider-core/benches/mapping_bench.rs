//! Criterion benchmarks for gradslider hot paths.
//!
//! Benchmarks:
//! 1. Range mapping (location ↔ value)
//! 2. Geometry (thumb position, mask path, full layout)
//! 3. Color interpolation
//! 4. Drag gesture through the model (tracking + render pushes)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gradslider_core::geometry::FALLBACK_CENTER_MARK;
use gradslider_core::{
    color_for_value, location_for_value, mask_path, thumb_position, value_for_location,
    NullRenderer, Point, Rect, RecordingRenderer, SliderConfig, SliderLayout, SliderModel,
    ValueRange,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 320.0, 44.0)
}

fn config() -> SliderConfig {
    SliderConfig { minimum_value: -50.0, maximum_value: 50.0, ..SliderConfig::default() }
}

// ── 1. Range mapping ─────────────────────────────────────────────────

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_mapping");
    let range = ValueRange::new(-50.0, 50.0);

    group.bench_function("value_for_location_1000", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                acc += value_for_location(black_box(i as f64 * 0.4), 0.0, 320.0, range);
            }
            acc
        })
    });

    group.bench_function("location_for_value_1000", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                acc += location_for_value(black_box(i as f64 * 0.1 - 50.0), 0.0, 320.0, range);
            }
            acc
        })
    });

    group.finish();
}

// ── 2. Geometry ──────────────────────────────────────────────────────

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    let config = config();

    group.bench_function("layout", |b| {
        b.iter(|| SliderLayout::compute(black_box(bounds()), &config, FALLBACK_CENTER_MARK))
    });
    group.bench_function("thumb_position", |b| {
        b.iter(|| thumb_position(bounds(), &config, black_box(12.5)))
    });
    group.bench_function("mask_path", |b| b.iter(|| mask_path(bounds(), &config, black_box(-12.5))));

    group.finish();
}

// ── 3. Color interpolation ───────────────────────────────────────────

fn bench_color(c: &mut Criterion) {
    let config = config();
    c.bench_function("color_for_value_1000", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                acc += color_for_value(black_box(i as f64 * 0.1 - 50.0), &config).g;
            }
            acc
        })
    });
}

// ── 4. Drag gesture ──────────────────────────────────────────────────

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_gesture");

    for moves in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("null_renderer", moves), &moves, |b, &n| {
            b.iter(|| {
                let mut model = SliderModel::new(config(), NullRenderer).unwrap().with_bounds(bounds());
                model.add_listener(|e| {
                    black_box(e);
                });
                let thumb = model.thumb_position();
                model.pointer_down(thumb);
                for i in 0..n {
                    model.pointer_moved(Point::new((i % 320) as f64, 22.0));
                }
                model.pointer_up(None);
                model.value()
            })
        });
    }

    group.bench_function("recording_renderer_100", |b| {
        b.iter(|| {
            let mut model =
                SliderModel::new(config(), RecordingRenderer::new()).unwrap().with_bounds(bounds());
            let thumb = model.thumb_position();
            model.pointer_down(thumb);
            for i in 0..100 {
                model.pointer_moved(Point::new(i as f64 * 3.0, 22.0));
            }
            model.pointer_up(None);
            model.renderer().commands.len()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_range, bench_geometry, bench_color, bench_drag);
criterion_main!(benches);
