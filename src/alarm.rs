//! Alarm evaluation for heel, battery and falling pressure

use crate::battery::BatteryStatus;
use crate::types::{AlarmSettings, OrientationSample};

bitflags::bitflags! {
    /// Set of raised alarms
    ///
    /// # Example
    /// ```
    /// use sailsense::Alarms;
    ///
    /// let alarms = Alarms::HEEL | Alarms::LOW_BATTERY;
    /// assert!(alarms.contains(Alarms::HEEL));
    /// assert!(!alarms.contains(Alarms::PRESSURE_DROP));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Alarms: u8 {
        /// Absolute roll beyond the heel limit
        const HEEL          = 1 << 0;
        /// Battery charge below the limit
        const LOW_BATTERY   = 1 << 1;
        /// Period mean pressure fell faster than the limit
        const PRESSURE_DROP = 1 << 2;
    }
}

/// Evaluates alarm conditions once per tick
///
/// The pressure alarm compares the closing means of consecutive averaging
/// periods and stays raised for the whole period following the drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlarmMonitor {
    settings: AlarmSettings,
    previous_pressure: Option<f32>,
    pressure_falling: bool,
}

impl AlarmMonitor {
    pub fn new(settings: AlarmSettings) -> Self {
        Self {
            settings,
            previous_pressure: None,
            pressure_falling: false,
        }
    }

    pub fn settings(&self) -> &AlarmSettings {
        &self.settings
    }

    /// Record the mean pressure of a period that just ended
    ///
    /// Returns true when the drop from the previous period exceeds the limit.
    pub fn close_period(&mut self, mean_pressure: f32) -> bool {
        let limit = self.settings.pressure_drop;
        self.pressure_falling = match self.previous_pressure {
            Some(previous) if limit > 0.0 => previous - mean_pressure > limit,
            _ => false,
        };
        self.previous_pressure = Some(mean_pressure);

        if self.pressure_falling {
            log::warn!("pressure dropped to {:.1} hPa over one period", mean_pressure);
        }
        self.pressure_falling
    }

    /// Alarms raised for this tick
    pub fn evaluate(&self, orientation: &OrientationSample, battery: Option<&BatteryStatus>) -> Alarms {
        let mut alarms = Alarms::empty();

        if self.settings.max_heel > 0.0 && orientation.roll.abs() > self.settings.max_heel {
            alarms.insert(Alarms::HEEL);
        }
        if let Some(battery) = battery {
            if self.settings.low_battery > 0.0 && battery.percentage < self.settings.low_battery {
                alarms.insert(Alarms::LOW_BATTERY);
            }
        }
        if self.pressure_falling {
            alarms.insert(Alarms::PRESSURE_DROP);
        }

        alarms
    }
}
