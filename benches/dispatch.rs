// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for store dispatch.
//!
//! Measures the performance of:
//! - Adding a toast to a crowded store (reducer plus timer re-derivation)
//! - Pausing and resuming with many live toasts
//! - Firing a burst of due timers

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use iced_toaster::config::ToasterConfig;
use iced_toaster::timer::ManualClock;
use iced_toaster::toast::ToastOptions;
use iced_toaster::{ToastStore, Toaster};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

const SIZES: [usize; 3] = [10, 100, 1000];

/// Builds a store holding `count` live toasts.
fn crowded(count: usize) -> (Toaster, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let store = ToastStore::with_clock(ToasterConfig::default(), clock.clone());
    let toaster = Toaster::new(store);
    for i in 0..count {
        toaster.toast(format!("toast {i}"), ToastOptions::new());
    }
    (toaster, clock)
}

fn bench_upsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for size in SIZES {
        let (toaster, _clock) = crowded(size);
        group.bench_with_input(BenchmarkId::new("upsert", size), &size, |b, _| {
            b.iter(|| {
                black_box(toaster.toast("again", ToastOptions::new().with_id("bench")));
            });
        });
    }

    group.finish();
}

fn bench_pause_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for size in SIZES {
        let (toaster, clock) = crowded(size);
        group.bench_with_input(BenchmarkId::new("pause_resume", size), &size, |b, _| {
            b.iter(|| {
                toaster.store().pointer_entered();
                clock.advance(Duration::from_millis(1));
                toaster.store().pointer_left();
            });
        });
    }

    group.finish();
}

fn bench_fire_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("fire_due", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let (toaster, clock) = crowded(size);
                    clock.advance(Duration::from_secs(10));
                    toaster
                },
                |toaster| black_box(toaster.store().fire_due()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_upsert, bench_pause_cycle, bench_fire_burst);
criterion_main!(benches);
