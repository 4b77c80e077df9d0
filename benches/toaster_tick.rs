// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_toaster::ui::notifications::{Message, Position, Store, StoreDefaults, ToastOptions, Toaster};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn populated_toaster(count: usize) -> (Toaster, Instant) {
    let t0 = Instant::now();
    let store = Store::with_clock(StoreDefaults::default(), t0);
    for index in 0..count {
        let position = Position::ALL[index % Position::ALL.len()];
        store.show(
            ToastOptions::new()
                .title(format!("Toast {index}"))
                .description("Benchmark payload")
                .position(position)
                .persistent(),
        );
    }
    let mut toaster = Toaster::new(store);
    toaster.update(Message::Tick(t0));
    (toaster, t0)
}

fn toaster_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("toaster_tick");

    for count in [4, 32] {
        group.bench_function(format!("idle_tick_{count}"), |b| {
            let (mut toaster, t0) = populated_toaster(count);
            let mut now = t0;
            b.iter(|| {
                now += Duration::from_millis(50);
                toaster.update(Message::Tick(black_box(now)));
            });
        });
    }

    group.bench_function("update_and_sync_32", |b| {
        let (mut toaster, t0) = populated_toaster(32);
        let store = toaster.store().clone();
        let ids: Vec<_> = store.records().iter().map(|record| record.id).collect();
        let mut now = t0;
        let mut step = 0usize;
        b.iter(|| {
            now += Duration::from_millis(50);
            store.update(ids[step % ids.len()], ToastOptions::new().title("Updated"));
            toaster.update(Message::Tick(black_box(now)));
            step += 1;
        });
    });

    group.bench_function("view_models_32", |b| {
        let (toaster, _) = populated_toaster(32);
        b.iter(|| black_box(toaster.view_models()));
    });

    group.finish();
}

criterion_group!(benches, toaster_tick_benchmark);
criterion_main!(benches);
