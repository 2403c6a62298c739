//! Environmental running mean and derived weather quantities

use nalgebra::ComplexField;

use crate::types::EnvironmentalSample;

/// Standard sea level pressure in hPa
pub const STANDARD_SEA_LEVEL_HPA: f32 = 1013.25;

/// Magnus coefficients for the dew point
const MAGNUS_A: f32 = 17.62;
const MAGNUS_B: f32 = 243.12; // °C

/// Number of hourly means kept by the SailSense history screen
pub const PERIOD_HISTORY: usize = 24;

/// Mean of all environmental samples since the last reset
///
/// The first fold after a reset replaces the accumulator instead of adding
/// to it, so stale sums never leak into a new period.
///
/// # Example
/// ```
/// use sailsense::{EnvironmentalMean, EnvironmentalSample};
///
/// let mut mean = EnvironmentalMean::new();
/// let first = mean.fold_and_average(EnvironmentalSample::new(20.0, 60.0, 1012.0));
/// assert_eq!(first, EnvironmentalSample::new(20.0, 60.0, 1012.0));
///
/// let second = mean.fold_and_average(EnvironmentalSample::new(22.0, 62.0, 1010.0));
/// assert_eq!(second, EnvironmentalSample::new(21.0, 61.0, 1011.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnvironmentalMean {
    sum: EnvironmentalSample,
    divisor: u32,
}

impl EnvironmentalMean {
    pub const fn new() -> Self {
        Self {
            sum: EnvironmentalSample::new(0.0, 0.0, 0.0),
            divisor: 0,
        }
    }

    /// Fold one sample in and return the mean to date
    ///
    /// # Arguments
    /// * `sample` - Environmental reading for this tick
    ///
    /// # Returns
    /// Component-wise mean of every sample folded since the last reset,
    /// including this one
    pub fn fold_and_average(&mut self, sample: EnvironmentalSample) -> EnvironmentalSample {
        if self.divisor == 0 {
            self.sum = sample;
        } else {
            self.sum += sample;
        }
        self.divisor = self.divisor.saturating_add(1);

        self.sum / self.divisor as f32
    }

    /// Current mean, `None` when nothing has been folded since the last reset
    pub fn mean(&self) -> Option<EnvironmentalSample> {
        (self.divisor > 0).then(|| self.sum / self.divisor as f32)
    }

    /// Start a new averaging period
    pub fn reset(&mut self) {
        self.divisor = 0;
    }

    /// Samples folded since the last reset
    pub fn count(&self) -> u32 {
        self.divisor
    }
}

/// Closing means of the last `N` averaging periods
///
/// Once full, each new period overwrites the oldest one.
///
/// # Example
/// ```
/// use sailsense::{EnvironmentalSample, PERIOD_HISTORY, PeriodHistory};
///
/// let mut history = PeriodHistory::<PERIOD_HISTORY>::new();
/// history.push(EnvironmentalSample::new(18.0, 70.0, 1012.0));
/// history.push(EnvironmentalSample::new(19.0, 68.0, 1011.0));
///
/// let pressures: Vec<f32> = history.iter().map(|m| m.pressure).collect();
/// assert_eq!(pressures, [1012.0, 1011.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodHistory<const N: usize> {
    buffer: [EnvironmentalSample; N],
    /// Slot written by the most recent push
    write_index: usize,
    filled: usize,
}

impl<const N: usize> PeriodHistory<N> {
    pub const fn new() -> Self {
        const { assert!(N > 0, "PeriodHistory capacity must be non-zero") };
        Self {
            buffer: [EnvironmentalSample::new(0.0, 0.0, 0.0); N],
            write_index: N - 1,
            filled: 0,
        }
    }

    /// Record the mean of a period that just ended
    pub fn push(&mut self, mean: EnvironmentalSample) {
        self.write_index = (self.write_index + 1) % N;
        self.buffer[self.write_index] = mean;
        if self.filled < N {
            self.filled += 1;
        }
    }

    /// Stored means, oldest first
    pub fn iter(&self) -> impl Iterator<Item = EnvironmentalSample> + '_ {
        let oldest = (self.write_index + 1 + N - self.filled) % N;
        (0..self.filled).map(move |i| self.buffer[(oldest + i) % N])
    }

    /// Mean of the most recently closed period
    pub fn latest(&self) -> Option<EnvironmentalSample> {
        (self.filled > 0).then(|| self.buffer[self.write_index])
    }

    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn is_full(&self) -> bool {
        self.filled == N
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<const N: usize> Default for PeriodHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Dew point in °C from temperature in °C and relative humidity in %
///
/// Magnus approximation, returns `NaN` for a humidity of 0 %.
pub fn dew_point(temperature: f32, humidity: f32) -> f32 {
    let gamma = (MAGNUS_A * temperature) / (MAGNUS_B + temperature) + (humidity / 100.0).ln();
    (MAGNUS_B * gamma) / (MAGNUS_A - gamma)
}

/// Altitude in metres from station pressure and a sea level reference, both in hPa
pub fn altitude(pressure: f32, sea_level: f32) -> f32 {
    44330.0 * (1.0 - (pressure / sea_level).powf(0.1903))
}

/// Sea level pressure in hPa from station pressure in hPa and altitude in metres
pub fn sea_level_pressure(pressure: f32, altitude: f32) -> f32 {
    pressure / (1.0 - altitude / 44330.0).powf(5.255)
}
