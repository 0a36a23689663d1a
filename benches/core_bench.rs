use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use transform_lab::render::build_draw_list;
use transform_lab::{AppOptions, CanvasSettings, RenderScene};
use transform_lab_engine::{
    apply, Enlargement, Point, Reflection, ReflectionAxis, Rotation, RotationDirection, Shape,
    TransformSpec, Translation,
};
use transform_lab_raster::rasterize;

fn build_synthetic_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.017;
            Point::new((t.cos() * 15.0).round(), (t.sin() * 15.0).round())
        })
        .collect()
}

fn bench_apply(c: &mut Criterion) {
    let specs = [
        (
            "translation",
            TransformSpec::Translation(Translation { dx: 3.0, dy: -2.0 }),
        ),
        (
            "reflection_custom",
            TransformSpec::Reflection(Reflection {
                axis: ReflectionAxis::Custom,
                m: 2.0,
                c: 1.0,
            }),
        ),
        (
            "rotation",
            TransformSpec::Rotation(Rotation {
                angle: 37.0,
                center: Some(Point::new(2.0, 1.0)),
                direction: RotationDirection::Clockwise,
            }),
        ),
        (
            "enlargement",
            TransformSpec::Enlargement(Enlargement {
                scale: 2.5,
                center: None,
            }),
        ),
    ];

    let mut group = c.benchmark_group("apply");
    for &count in &[1_000usize, 100_000usize] {
        let points = build_synthetic_points(count);
        for (name, spec) in &specs {
            group.bench_with_input(BenchmarkId::new(*name, count), &points, |b, pts| {
                b.iter(|| black_box(apply(black_box(pts), spec)).len())
            });
        }
    }
    group.finish();
}

fn bench_scene_rendering(c: &mut Criterion) {
    let original = Shape::new(build_synthetic_points(26), true);
    let transformed = original.transformed(&TransformSpec::Translation(Translation {
        dx: 4.0,
        dy: 4.0,
    }));

    let mut group = c.benchmark_group("scene");
    for &zoom in &[600u32, 2000u32] {
        let scene = RenderScene {
            canvas: CanvasSettings::new(20, zoom),
            original: Arc::new(original.clone()),
            transformed: Some(transformed.clone()),
            reflection_line: None,
            center_marker: None,
            options: AppOptions::default(),
        };

        group.bench_with_input(BenchmarkId::new("draw_list", zoom), &scene, |b, s| {
            b.iter(|| black_box(build_draw_list(black_box(s))).len())
        });

        let list = build_draw_list(&scene);
        group.bench_with_input(BenchmarkId::new("rasterize", zoom), &list, |b, l| {
            b.iter(|| black_box(rasterize(l.items(), zoom, zoom, [1.0; 4])).width())
        });
    }
    group.finish();
}

criterion_group!(core_benches, bench_apply, bench_scene_rendering);
criterion_main!(core_benches);
