use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nalgebra::Vector3;
use rand::prelude::*;
use rand_pcg::Pcg64;
use sailsense::{
    EnvironmentalMean, EnvironmentalSample, HEADING_WINDOW, HeadingAverager, SailSense, Settings, TickInput,
    estimate_orientation, field_for, gravity_for,
};
use std::f32::consts::PI;

// Pre-generated ticks to keep RNG cost out of the measurements
struct PreGeneratedTicks {
    ticks: Vec<TickInput>,
    index: usize,
}

impl PreGeneratedTicks {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut ticks = Vec::with_capacity(count);

        for i in 0..count {
            let time = i as f32 * 0.1; // 10Hz sample rate
            let phase = time * 0.2 * 2.0 * PI;

            // Boat rolling in a swell while slowly turning
            let roll = 15.0 * phase.sin() + rng.random_range(-0.5..0.5);
            let pitch = 4.0 * (phase * 0.7).cos() + rng.random_range(-0.5..0.5);
            let heading = (time * 2.0) % 360.0;

            let body_acc = gravity_for(roll, pitch);
            let body_mag = field_for(roll, pitch, heading, 20.0, -44.0);

            ticks.push(TickInput {
                // Board layout: sensor X = right, sensor Y = forward
                accelerometer: Vector3::new(body_acc.y, body_acc.x, body_acc.z),
                magnetometer: Vector3::new(body_mag.y, body_mag.x, body_mag.z),
                environment: EnvironmentalSample::new(
                    18.0 + rng.random_range(-0.1..0.1),
                    65.0 + rng.random_range(-0.5..0.5),
                    1012.0 + rng.random_range(-0.2..0.2),
                ),
                hour: Some(((i / 36_000) % 24) as u8),
                battery_voltage: Some(3.9),
            });
        }

        Self { ticks, index: 0 }
    }

    fn next(&mut self) -> &TickInput {
        let tick = &self.ticks[self.index];
        self.index = (self.index + 1) % self.ticks.len();
        tick
    }
}

/// Benchmark the orientation estimate for a tilted device
fn bench_estimate_orientation(c: &mut Criterion) {
    let accelerometer = gravity_for(12.0, -4.0);
    let magnetometer = field_for(12.0, -4.0, 215.0, 20.0, -44.0);

    c.bench_function("estimate_orientation", |b| {
        b.iter(|| estimate_orientation(black_box(accelerometer), black_box(magnetometer)))
    });
}

/// Benchmark one insert into a full heading window
fn bench_heading_average(c: &mut Criterion) {
    let mut compass = HeadingAverager::<HEADING_WINDOW>::new();
    for i in 0..HEADING_WINDOW {
        compass.insert_and_average(i as f32 * 5.0);
    }

    c.bench_function("heading_insert_and_average", |b| {
        b.iter(|| compass.insert_and_average(black_box(182.5)))
    });
}

/// Benchmark the circular heading read-out
fn bench_circular_heading(c: &mut Criterion) {
    let mut compass = HeadingAverager::<HEADING_WINDOW>::new();
    for i in 0..HEADING_WINDOW {
        compass.insert_and_average((350.0 + i as f32) % 360.0);
    }

    c.bench_function("heading_circular_average", |b| b.iter(|| black_box(&compass).circular_average()));
}

/// Benchmark the environmental running mean
fn bench_environment_fold(c: &mut Criterion) {
    let mut mean = EnvironmentalMean::new();
    let sample = EnvironmentalSample::new(18.5, 64.0, 1011.8);

    c.bench_function("environment_fold_and_average", |b| {
        b.iter(|| mean.fold_and_average(black_box(sample)))
    });
}

/// Benchmark a full pipeline tick over a realistic stream
fn bench_tick(c: &mut Criterion) {
    let mut sailsense = SailSense::new(Settings::default()).unwrap();
    let mut data = PreGeneratedTicks::new(10_000, 42);

    c.bench_function("sailsense_tick", |b| {
        b.iter(|| {
            let tick = *data.next();
            sailsense.tick(black_box(&tick))
        })
    });
}

criterion_group!(
    benches,
    bench_estimate_orientation,
    bench_heading_average,
    bench_circular_heading,
    bench_environment_fold,
    bench_tick
);
criterion_main!(benches);
