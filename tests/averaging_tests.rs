use rand::prelude::*;
use rand_pcg::Pcg64;
use sailsense::filter::MovingAverage;
use sailsense::{EnvironmentalMean, EnvironmentalSample, HEADING_WINDOW, HeadingAverager, PeriodTracker};

/// A single heading in a fresh window comes back exactly
#[test]
fn test_heading_startup() {
    for v in [0.0, 0.5, 123.456, 359.999] {
        let mut compass = HeadingAverager::<HEADING_WINDOW>::new();
        assert_eq!(compass.insert_and_average(v), v);
    }
}

/// The 20th insert averages all 20 values and the 21st evicts the first
#[test]
fn test_heading_full_cycle() {
    let mut rng = Pcg64::seed_from_u64(2024);
    let values: Vec<f32> = (0..HEADING_WINDOW).map(|_| rng.random_range(0.0..360.0)).collect();

    let mut compass = HeadingAverager::<HEADING_WINDOW>::new();
    let mut average = 0.0;
    for (i, value) in values.iter().enumerate() {
        average = compass.insert_and_average(*value);

        let expected = values[..=i].iter().sum::<f32>() / (i + 1) as f32;
        assert!((average - expected).abs() < 1e-3, "insert {}: {} vs {}", i, average, expected);
    }

    let mean = values.iter().sum::<f32>() / HEADING_WINDOW as f32;
    assert!((average - mean).abs() < 1e-3);

    let w = 42.0;
    let expected = (values[1..].iter().sum::<f32>() + w) / HEADING_WINDOW as f32;
    let average = compass.insert_and_average(w);
    assert!((average - expected).abs() < 1e-3, "{} vs {}", average, expected);
}

/// Long streams keep averaging exactly the latest window
#[test]
fn test_moving_average_matches_naive_window() {
    let mut rng = Pcg64::seed_from_u64(11);
    let mut average = MovingAverage::<7>::new();
    let mut history = Vec::new();

    for _ in 0..500 {
        let value: f32 = rng.random_range(-50.0..50.0);
        history.push(value);
        let result = average.insert_and_average(value);

        let window = &history[history.len().saturating_sub(7)..];
        let expected = window.iter().sum::<f32>() / window.len() as f32;
        assert!((result - expected).abs() < 1e-3);
    }
    assert!(average.is_full());
}

/// Folding one sample repeatedly keeps returning that sample
#[test]
fn test_running_mean_of_identical_samples() {
    let sample = EnvironmentalSample::new(17.25, 81.5, 1002.75);
    let mut mean = EnvironmentalMean::new();

    for k in 1..=100 {
        let result = mean.fold_and_average(sample);
        assert!((result.temperature - sample.temperature).abs() < 1e-3, "k={}", k);
        assert!((result.humidity - sample.humidity).abs() < 1e-3, "k={}", k);
        assert!((result.pressure - sample.pressure).abs() < 1e-2, "k={}", k);
    }
    assert_eq!(mean.count(), 100);
}

/// The first fold returns the sample unchanged, also after a reset
#[test]
fn test_running_mean_first_fold() {
    let mut mean = EnvironmentalMean::new();
    let first = EnvironmentalSample::new(-3.5, 95.0, 987.0);
    assert_eq!(mean.fold_and_average(first), first);

    mean.fold_and_average(EnvironmentalSample::new(10.0, 10.0, 1010.0));
    mean.reset();

    let again = EnvironmentalSample::new(25.0, 40.0, 1021.0);
    assert_eq!(mean.fold_and_average(again), again);
}

/// Hourly periods restart the running mean
#[test]
fn test_hourly_period_resets_mean() {
    let mut period = PeriodTracker::new();
    let mut mean = EnvironmentalMean::new();
    let mut closed = Vec::new();

    for (hour, pressure) in [(8, 1010.0), (8, 1012.0), (9, 1006.0), (9, 1004.0), (10, 1000.0)] {
        if period.observe(hour) {
            closed.push(mean.mean().map(|m| m.pressure));
            mean.reset();
        }
        mean.fold_and_average(EnvironmentalSample::new(20.0, 50.0, pressure));
    }

    assert_eq!(closed, vec![Some(1011.0), Some(1005.0)]);
    assert_eq!(mean.count(), 1);
}
