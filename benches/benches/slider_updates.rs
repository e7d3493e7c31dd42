// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_dispatch::EventManager;
use understory_slider::{HandleType, Model, Options, ScaleOptions, ScaleType, SliderEvent};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A model with one no-op observer per event, so dispatch cost is included.
fn model(options: &Options) -> Model {
    let events = Rc::new(EventManager::new());
    for ev in SliderEvent::ALL {
        events.register_event(ev);
        events.add_event_listener(&ev, || {
            black_box(());
        });
    }
    Model::with_options(events, options)
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    let mut rng = Rng::new(0x9e37_79b9_7f4a_7c15);
    let values: Vec<f64> = (0..1024).map(|_| rng.next_f64() * 1200.0 - 100.0).collect();
    for &range in &[false, true] {
        group.throughput(Throughput::Elements(values.len() as u64));
        group.bench_function(format!("update_handle_range_{range}"), |b| {
            b.iter_batched(
                || model(&Options::new().max(1000.0).step(0.5).range(range)),
                |model| {
                    let mut handle = HandleType::From;
                    for &v in &values {
                        handle = model.update_handle(v, handle);
                    }
                    black_box(model.state());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale");
    for &(max, step) in &[(100.0, 1.0), (10_000.0, 1.0), (1.0, 0.001)] {
        group.bench_function(format!("steps_max{max}_step{step}"), |b| {
            b.iter_batched(
                || model(&Options::new().max(max).step(step)),
                |model| {
                    let fired = model.update_options(
                        &Options::new().scale(Some(ScaleOptions::new().density(0.5))),
                    );
                    black_box(fired);
                },
                BatchSize::SmallInput,
            );
        });
    }
    let set: Vec<f64> = (0..=1000).map(|i| f64::from(i) / 10.0).collect();
    group.bench_function("set_thinned", |b| {
        b.iter_batched(
            || model(&Options::new().max(50.0).step(0.05)),
            |model| {
                let scale = ScaleOptions::new()
                    .kind(ScaleType::Set)
                    .set(set.clone())
                    .density(1.0);
                black_box(model.update_options(&Options::new().scale(Some(scale))));
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds");
    group.bench_function("min_max_with_scale", |b| {
        b.iter_batched(
            || {
                model(
                    &Options::new()
                        .max(500.0)
                        .range(true)
                        .scale(Some(ScaleOptions::new())),
                )
            },
            |model| {
                for i in 0..64 {
                    let lo = f64::from(i);
                    black_box(model.update_options(&Options::new().min(lo).max(lo * 10.0 + 100.0)));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_drag, bench_scale, bench_bounds);
criterion_main!(benches);
