// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use meridian_view::{MapView, ResolutionConstraint, SnapDirection};

fn bench_snap(c: &mut Criterion) {
    let constraint = ResolutionConstraint::default();
    let resolutions: Vec<f64> = (0..64)
        .map(|i| constraint.max_resolution() / 1.37_f64.powi(i))
        .collect();

    let mut group = c.benchmark_group("view/snap");
    for (name, direction) in [
        ("nearest", SnapDirection::Nearest),
        ("coarser", SnapDirection::Coarser),
        ("finer", SnapDirection::Finer),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for &resolution in &resolutions {
                    black_box(constraint.snap(black_box(resolution), direction));
                }
            });
        });
    }
    group.finish();
}

fn bench_adjust(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/adjust");
    group.bench_function("rotate_and_zoom", |b| {
        let mut view = MapView::new(Size::new(1_024.0, 768.0));
        view.set_center(Point::new(1_000.0, -2_000.0));
        b.iter(|| {
            view.begin_interaction();
            for _ in 0..32 {
                view.adjust_rotation(black_box(0.01));
                view.adjust_resolution(black_box(0.99));
            }
            view.end_interaction(Duration::from_millis(400), SnapDirection::Finer);
            black_box(view.finish_animation());
        });
    });
    group.bench_function("coordinate_to_pixel", |b| {
        let mut view = MapView::new(Size::new(1_024.0, 768.0));
        view.set_rotation(0.3);
        b.iter(|| black_box(view.coordinate_to_pixel(black_box(Point::new(12.5, -7.25)))));
    });
    group.finish();
}

criterion_group!(benches, bench_snap, bench_adjust);
criterion_main!(benches);
