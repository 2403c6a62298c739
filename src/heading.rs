//! Smoothed compass heading over a window of recent ticks

use nalgebra::{ComplexField, RealField};

use crate::filter::MovingAverage;
use crate::math::{DEG_TO_RAD, RAD_TO_DEG, wrap_360};

/// Number of headings averaged by the SailSense compass screen
pub const HEADING_WINDOW: usize = 20;

/// Circular buffer of the last `N` headings
///
/// [`insert_and_average`](Self::insert_and_average) returns the plain
/// arithmetic mean of the stored headings. Before `N` headings have been
/// inserted only the inserted ones are averaged.
///
/// # Example
/// ```
/// use sailsense::{HEADING_WINDOW, HeadingAverager};
///
/// let mut compass = HeadingAverager::<HEADING_WINDOW>::new();
/// assert_eq!(compass.insert_and_average(92.0), 92.0);
/// assert_eq!(compass.insert_and_average(94.0), 93.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadingAverager<const N: usize> {
    window: MovingAverage<N>,
}

impl<const N: usize> HeadingAverager<N> {
    pub const fn new() -> Self {
        Self {
            window: MovingAverage::new(),
        }
    }

    /// Store the newest heading and return the mean of the window
    pub fn insert_and_average(&mut self, heading: f32) -> f32 {
        self.window.insert_and_average(heading)
    }

    /// Arithmetic mean of the window, `None` before the first heading
    pub fn average(&self) -> Option<f32> {
        self.window.average()
    }

    /// Vector mean of the window in `[0, 360)`
    ///
    /// Unlike the arithmetic mean this stays correct around North, where 359°
    /// and 1° average to 0° instead of 180°. Opposite headings that cancel out
    /// report 0°.
    pub fn circular_average(&self) -> Option<f32> {
        if self.window.is_empty() {
            return None;
        }

        let (sin_sum, cos_sum) = self
            .window
            .filled_slots()
            .iter()
            .fold((0.0f32, 0.0f32), |(s, c), heading| {
                let rad = heading * DEG_TO_RAD;
                (s + rad.sin(), c + rad.cos())
            });

        if sin_sum.abs() < 1e-6 && cos_sum.abs() < 1e-6 {
            return Some(0.0);
        }
        Some(wrap_360(sin_sum.atan2(cos_sum) * RAD_TO_DEG))
    }

    /// Number of headings in the window
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn clear(&mut self) {
        self.window.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_insert_is_exact() {
        let mut compass = HeadingAverager::<HEADING_WINDOW>::new();
        assert_eq!(compass.average(), None);
        assert_eq!(compass.insert_and_average(271.25), 271.25);
    }

    #[test]
    fn test_full_cycle_and_eviction() {
        let mut compass = HeadingAverager::<HEADING_WINDOW>::new();
        let values: [f32; HEADING_WINDOW] = core::array::from_fn(|i| 10.0 + i as f32 * 3.0);

        let mut last = 0.0;
        for value in values {
            last = compass.insert_and_average(value);
        }
        let mean = values.iter().sum::<f32>() / HEADING_WINDOW as f32;
        assert!((last - mean).abs() < 1e-4, "{} vs {}", last, mean);

        let w = 200.0;
        let evicted = (values[1..].iter().sum::<f32>() + w) / HEADING_WINDOW as f32;
        let next = compass.insert_and_average(w);
        assert!((next - evicted).abs() < 1e-4, "{} vs {}", next, evicted);
        assert_eq!(compass.len(), HEADING_WINDOW);
    }

    #[test]
    fn test_minus_one_is_not_a_sentinel() {
        let mut compass = HeadingAverager::<4>::new();
        compass.insert_and_average(-1.0);
        assert_eq!(compass.insert_and_average(3.0), 1.0);
    }

    #[test]
    fn test_circular_average_across_north() {
        let mut compass = HeadingAverager::<4>::new();
        compass.insert_and_average(350.0);
        compass.insert_and_average(10.0);

        // Arithmetic mean points south, vector mean points north
        assert_eq!(compass.average(), Some(180.0));
        let circular = compass.circular_average().unwrap();
        assert!(circular < 1e-3 || circular > 360.0 - 1e-3, "got {}", circular);
    }

    #[test]
    fn test_circular_average_cancelling() {
        let mut compass = HeadingAverager::<2>::new();
        assert_eq!(compass.circular_average(), None);
        compass.insert_and_average(90.0);
        compass.insert_and_average(270.0);
        assert_eq!(compass.circular_average(), Some(0.0));
    }
}
