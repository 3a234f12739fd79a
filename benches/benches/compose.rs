// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use floorsketch::{
    CapturedRoom, ObjectRecord, SceneComposer, SurfaceCategory, SurfaceRecord, Transform3, Vec3,
    reference_orientation,
};

/// A ring of `walls` walls with a door, a window and an object every few walls.
fn synthetic_room(walls: usize) -> CapturedRoom {
    let step = core::f64::consts::TAU / walls as f64;
    let record = |category, i: usize, width: f64| {
        let angle = step * i as f64;
        SurfaceRecord::new(
            category,
            Transform3::new(
                Vec3::new(4.0 * angle.cos(), 1.2, 4.0 * angle.sin()),
                Vec3::new(0.0, angle, 0.0),
            ),
            Vec3::new(width, 2.4, 0.1),
        )
    };
    let mut surfaces = Vec::with_capacity(walls * 2);
    let mut objects = Vec::new();
    for i in 0..walls {
        surfaces.push(record(SurfaceCategory::Wall, i, 1.0 + (i % 7) as f64 * 0.5));
        match i % 4 {
            0 => surfaces.push(record(SurfaceCategory::Door, i, 0.9)),
            1 => surfaces.push(record(SurfaceCategory::Window, i, 1.2)),
            2 => surfaces.push(record(SurfaceCategory::Opening, i, 1.0)),
            _ => objects.push(ObjectRecord::new(
                "cabinet",
                Transform3::new(Vec3::new(0.0, 0.4, i as f64 * 0.1), Vec3::ZERO),
                Vec3::new(0.6, 0.8, 0.4),
            )),
        }
    }
    CapturedRoom::from_surfaces(surfaces, objects)
}

fn bench_compose_room(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose/room");
    let composer = SceneComposer::default();

    for walls in [8usize, 64, 512, 4_096] {
        let room = synthetic_room(walls);
        group.throughput(Throughput::Elements(room.surface_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(walls), &room, |b, room| {
            b.iter(|| black_box(composer.compose_room(black_box(room))));
        });
    }

    group.finish();
}

fn bench_reference_orientation(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose/reference_orientation");

    for walls in [64usize, 4_096] {
        let room = synthetic_room(walls);
        group.throughput(Throughput::Elements(walls as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(walls),
            &room.walls,
            |b, walls| {
                b.iter(|| black_box(reference_orientation(black_box(walls))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compose_room, bench_reference_orientation);
criterion_main!(benches);
