#![allow(missing_docs)]
//! Benchmarks for the brightness stepping function

use brightness_tray::brightness::{CEILING_EXTENDED, CEILING_NORMAL, StepDirection, step};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_step_on_grid(c: &mut Criterion) {
    c.bench_function("step_on_grid", |b| {
        b.iter(|| {
            black_box(step(
                black_box(3.0),
                black_box(StepDirection::Up),
                black_box(CEILING_NORMAL),
            ));
        });
    });
}

fn bench_step_off_grid(c: &mut Criterion) {
    c.bench_function("step_off_grid", |b| {
        b.iter(|| {
            black_box(step(
                black_box(5.7),
                black_box(StepDirection::Up),
                black_box(CEILING_NORMAL),
            ));
        });
    });
}

fn bench_step_sweep(c: &mut Criterion) {
    // Walk the whole extended range down and back up
    c.bench_function("step_sweep", |b| {
        b.iter(|| {
            let mut level = CEILING_EXTENDED;
            while let Some(next) = step(level, StepDirection::Down, CEILING_EXTENDED) {
                level = next;
            }
            while let Some(next) = step(level, StepDirection::Up, CEILING_EXTENDED) {
                level = next;
            }
            black_box(level);
        });
    });
}

criterion_group!(
    benches,
    bench_step_on_grid,
    bench_step_off_grid,
    bench_step_sweep
);
criterion_main!(benches);
