//! Battery charge estimate from the cell voltage

use crate::types::BatterySettings;

/// Battery voltage and the charge derived from it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatteryStatus {
    /// Measured voltage in volts
    pub voltage: f32,
    /// Charge estimate in percent, `0..=100`
    pub percentage: f32,
}

impl BatteryStatus {
    /// Linear charge estimate between `settings.min_voltage` (0 %) and
    /// `settings.max_voltage` (100 %), clamped to that range
    ///
    /// # Example
    /// ```
    /// use sailsense::{BatterySettings, BatteryStatus};
    ///
    /// let status = BatteryStatus::from_voltage(3.6, &BatterySettings::default());
    /// assert!((status.percentage - 50.0).abs() < 1e-3);
    /// ```
    pub fn from_voltage(voltage: f32, settings: &BatterySettings) -> Self {
        let span = settings.max_voltage - settings.min_voltage;
        let percentage = if span > 0.0 {
            ((voltage - settings.min_voltage) / span * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self { voltage, percentage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_range() {
        let settings = BatterySettings::default();
        assert_eq!(BatteryStatus::from_voltage(3.0, &settings).percentage, 0.0);
        assert_eq!(BatteryStatus::from_voltage(4.2, &settings).percentage, 100.0);
        assert_eq!(BatteryStatus::from_voltage(2.5, &settings).percentage, 0.0);
        assert_eq!(BatteryStatus::from_voltage(4.5, &settings).percentage, 100.0);

        let quarter = BatteryStatus::from_voltage(3.3, &settings);
        assert!((quarter.percentage - 25.0).abs() < 1e-3);
        assert_eq!(quarter.voltage, 3.3);
    }

    #[test]
    fn test_empty_span() {
        let settings = BatterySettings {
            min_voltage: 3.7,
            max_voltage: 3.7,
        };
        assert_eq!(BatteryStatus::from_voltage(3.9, &settings).percentage, 0.0);
    }
}
