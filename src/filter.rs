//! Reusable smoothing filters
//!
//! [`MovingAverage`] is a fixed-capacity ring that averages the most recent
//! `N` values. Occupancy is tracked with an explicit fill count, so every
//! finite value (including negative ones) is a legitimate sample.
//! [`ExponentialAverage`] is a first-order low-pass filter.

/// Fixed-capacity moving average over the last `N` inserted values
///
/// # Example
/// ```
/// use sailsense::filter::MovingAverage;
///
/// let mut average = MovingAverage::<3>::new();
/// assert_eq!(average.insert_and_average(1.0), 1.0);
/// assert_eq!(average.insert_and_average(2.0), 1.5);
/// assert_eq!(average.insert_and_average(3.0), 2.0);
/// assert_eq!(average.insert_and_average(4.0), 3.0); // 1.0 evicted
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingAverage<const N: usize> {
    buffer: [f32; N],
    /// Slot written by the most recent insert
    write_index: usize,
    /// Number of slots holding a value
    filled: usize,
}

impl<const N: usize> MovingAverage<N> {
    /// Create an empty filter
    pub const fn new() -> Self {
        const { assert!(N > 0, "MovingAverage capacity must be non-zero") };
        Self {
            buffer: [0.0; N],
            // First advance lands on slot 0
            write_index: N - 1,
            filled: 0,
        }
    }

    /// Store `value` in the next slot and return the mean of all filled slots
    pub fn insert_and_average(&mut self, value: f32) -> f32 {
        self.write_index = (self.write_index + 1) % N;
        self.buffer[self.write_index] = value;
        if self.filled < N {
            self.filled += 1;
        }

        self.filled_slots().iter().sum::<f32>() / self.filled as f32
    }

    /// Mean of the filled slots, `None` before the first insert
    pub fn average(&self) -> Option<f32> {
        if self.filled == 0 {
            return None;
        }
        Some(self.filled_slots().iter().sum::<f32>() / self.filled as f32)
    }

    /// Values currently held, in slot order
    ///
    /// Slots fill from index 0 upwards, so before the ring wraps the filled
    /// slots are exactly the first `len()` entries.
    pub fn filled_slots(&self) -> &[f32] {
        &self.buffer[..self.filled]
    }

    /// Most recently inserted value
    pub fn latest(&self) -> Option<f32> {
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

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Forget every stored value
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// First-order low-pass filter `y += α (x - y)`
///
/// The first sample initialises the output directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialAverage {
    alpha: f32,
    value: Option<f32>,
}

impl ExponentialAverage {
    /// Create a filter with smoothing factor `alpha`, clamped to `(0, 1]`
    pub fn new(alpha: f32) -> Self {
        let alpha = if alpha > 0.0 { alpha.min(1.0) } else { f32::EPSILON };
        Self { alpha, value: None }
    }

    /// Create a filter from a cutoff frequency and the sample rate, both in Hz
    ///
    /// `α = 2π × fc / fs`
    pub fn from_cutoff(cutoff_frequency: f32, sample_rate: f32) -> Self {
        Self::new(2.0 * core::f32::consts::PI * cutoff_frequency / sample_rate)
    }

    /// Feed one sample and return the filtered value
    pub fn update(&mut self, sample: f32) -> f32 {
        let value = match self.value {
            Some(previous) => previous + self.alpha * (sample - previous),
            None => sample,
        };
        self.value = Some(value);
        value
    }

    pub fn value(&self) -> Option<f32> {
        self.value
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn reset(&mut self) {
        self.value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_insert_returns_value() {
        let mut average = MovingAverage::<20>::new();
        assert_eq!(average.insert_and_average(123.5), 123.5);
        assert_eq!(average.len(), 1);
        assert_eq!(average.latest(), Some(123.5));
    }

    #[test]
    fn test_partial_and_full_windows() {
        let mut average = MovingAverage::<4>::new();
        assert!(average.is_empty());
        assert_eq!(average.average(), None);

        assert_eq!(average.insert_and_average(2.0), 2.0);
        assert_eq!(average.insert_and_average(4.0), 3.0);
        assert_eq!(average.insert_and_average(6.0), 4.0);
        assert_eq!(average.insert_and_average(8.0), 5.0);
        assert!(average.is_full());

        // 2.0 evicted
        assert_eq!(average.insert_and_average(10.0), 7.0);
        assert_eq!(average.average(), Some(7.0));
        assert_eq!(average.len(), 4);
    }

    #[test]
    fn test_negative_values_count_as_samples() {
        let mut average = MovingAverage::<3>::new();
        assert_eq!(average.insert_and_average(-1.0), -1.0);
        assert_eq!(average.insert_and_average(-1.0), -1.0);
        assert_eq!(average.insert_and_average(2.0), 0.0);
    }

    #[test]
    fn test_clear() {
        let mut average = MovingAverage::<3>::new();
        average.insert_and_average(5.0);
        average.insert_and_average(7.0);
        average.clear();

        assert!(average.is_empty());
        assert_eq!(average.insert_and_average(1.0), 1.0);
        assert_eq!(average.capacity(), 3);
    }

    #[test]
    fn test_exponential_first_sample() {
        let mut filter = ExponentialAverage::new(0.25);
        assert_eq!(filter.value(), None);
        assert_eq!(filter.update(8.0), 8.0);
        assert_eq!(filter.update(12.0), 9.0);
        assert_eq!(filter.update(12.0), 9.75);

        filter.reset();
        assert_eq!(filter.update(1.0), 1.0);
    }

    #[test]
    fn test_exponential_alpha_clamped() {
        assert_eq!(ExponentialAverage::new(3.0).alpha(), 1.0);
        assert!(ExponentialAverage::new(0.0).alpha() > 0.0);

        let filter = ExponentialAverage::from_cutoff(0.5, 100.0);
        let expected = 2.0 * core::f32::consts::PI * 0.5 / 100.0;
        assert!((filter.alpha() - expected).abs() < 1e-6);
    }
}
