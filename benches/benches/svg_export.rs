// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use floorsketch::{SceneComposer, SurfaceCategory, SurfaceRecord, Transform3, Vec3};
use floorsketch_svg::{SvgOptions, render_scene};

fn bench_render_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg/render_scene");
    let composer = SceneComposer::default();

    for count in [16usize, 256, 2_048] {
        let surfaces: Vec<SurfaceRecord> = (0..count)
            .map(|i| {
                let category = if i % 3 == 0 {
                    SurfaceCategory::Door
                } else {
                    SurfaceCategory::Wall
                };
                SurfaceRecord::new(
                    category,
                    Transform3::new(
                        Vec3::new(i as f64 * 0.25, 1.2, 0.0),
                        Vec3::new(0.0, i as f64 * 0.01, 0.0),
                    ),
                    Vec3::new(1.5, 2.4, 0.1),
                )
            })
            .collect();
        let scene = composer.compose(&surfaces, &[]);
        group.throughput(Throughput::Elements(scene.len() as u64));

        for fit_content in [false, true] {
            let options = SvgOptions {
                fit_content,
                ..SvgOptions::default()
            };
            let id = if fit_content { "fit" } else { "canvas" };
            group.bench_with_input(BenchmarkId::new(id, count), &scene, |b, scene| {
                b.iter(|| black_box(render_scene(black_box(scene), &options)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render_scene);
criterion_main!(benches);
