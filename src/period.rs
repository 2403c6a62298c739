//! Detection of a new averaging period from the real-time clock

/// Tracks the RTC hour and reports when a new hour begins
///
/// The first observation only records the hour; a period boundary is
/// reported on every later change, including the wrap from 23 to 0 and
/// jumps after a clock adjustment.
///
/// # Example
/// ```
/// use sailsense::PeriodTracker;
///
/// let mut period = PeriodTracker::new();
/// assert!(!period.observe(14));
/// assert!(!period.observe(14));
/// assert!(period.observe(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodTracker {
    last_hour: Option<u8>,
}

impl PeriodTracker {
    pub const fn new() -> Self {
        Self { last_hour: None }
    }

    /// Record `hour` and return true when it differs from the previous one
    pub fn observe(&mut self, hour: u8) -> bool {
        let changed = matches!(self.last_hour, Some(previous) if previous != hour);
        self.last_hour = Some(hour);
        changed
    }

    pub fn last_hour(&self) -> Option<u8> {
        self.last_hour
    }
}
