// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use meridian_interaction::{
    DragRotateAndZoom, DragSample, MapPointerEvent, PointerDispatcher, PointerInteraction,
};
use meridian_view::MapView;
use ui_events::keyboard::Modifiers;

const SIZE: Size = Size::new(800.0, 600.0);

/// Points on a spiral around the viewport center, so every sample changes
/// both bearing and distance.
fn spiral(len: usize) -> Vec<MapPointerEvent> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.05;
            let radius = 40.0 + (i % 200) as f64;
            let pixel = Point::new(400.0 + radius * t.cos(), 300.0 + radius * t.sin());
            MapPointerEvent::drag(pixel, SIZE)
        })
        .collect()
}

fn bench_sample(c: &mut Criterion) {
    let events = spiral(1_024);
    let mut group = c.benchmark_group("drag_rotate_and_zoom/sample");
    group.throughput(Throughput::Elements(events.len() as u64));
    group.bench_function("from_event", |b| {
        b.iter(|| {
            for event in &events {
                black_box(DragSample::from_event(black_box(event)));
            }
        });
    });
    group.finish();
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_rotate_and_zoom/gesture");
    let down = MapPointerEvent::down(Point::new(400.0, 100.0), SIZE).with_modifiers(Modifiers::SHIFT);
    let up = MapPointerEvent::up(Point::new(400.0, 100.0), SIZE);

    for len in [16usize, 256, 4_096] {
        let events = spiral(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("direct", len), &events, |b, events| {
            let mut view = MapView::new(SIZE);
            let mut interaction = DragRotateAndZoom::new();
            b.iter(|| {
                interaction.handle_down(&down, &mut view);
                for event in events {
                    interaction.handle_drag(event, &mut view);
                }
                interaction.handle_up(&up, &mut view);
                black_box(view.take_pending_animation());
            });
        });

        group.bench_with_input(BenchmarkId::new("dispatched", len), &events, |b, events| {
            let mut view = MapView::new(SIZE);
            let mut dispatcher = PointerDispatcher::<MapView>::new();
            dispatcher.add(DragRotateAndZoom::new());
            b.iter(|| {
                dispatcher.dispatch(&down, &mut view);
                for event in events {
                    dispatcher.dispatch(event, &mut view);
                }
                dispatcher.dispatch(&up, &mut view);
                black_box(view.take_pending_animation());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample, bench_gesture);
criterion_main!(benches);
