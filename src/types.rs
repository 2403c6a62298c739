//! Core sample types and settings for the SailSense core

use core::ops::{Add, AddAssign, Div};

use serde::{Deserialize, Serialize};

use crate::axes::AxisMap;
use crate::calibration::{InertialCalibration, MagneticCalibration};
use crate::error::Error;

/// Orientation of the instrument for one sampling tick
///
/// All angles are in degrees. `roll` lies in `(-180, 180]`, `pitch` in
/// `[-90, 90]` and `heading` in `[0, 360)` with 0° = magnetic North and
/// 90° = East.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrientationSample {
    pub roll: f32,
    pub pitch: f32,
    pub heading: f32,
}

/// One BME280 reading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentalSample {
    /// Temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
    /// Pressure in hPa
    pub pressure: f32,
}

impl EnvironmentalSample {
    pub const fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

impl Add for EnvironmentalSample {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            temperature: self.temperature + rhs.temperature,
            humidity: self.humidity + rhs.humidity,
            pressure: self.pressure + rhs.pressure,
        }
    }
}

impl AddAssign for EnvironmentalSample {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Div<f32> for EnvironmentalSample {
    type Output = Self;

    fn div(self, divisor: f32) -> Self {
        Self {
            temperature: self.temperature / divisor,
            humidity: self.humidity / divisor,
            pressure: self.pressure / divisor,
        }
    }
}

/// Sign convention used for the final heading `atan2`
///
/// Magnetometers differ in chirality relative to the board axes. One
/// convention or the other has to be verified against a physical compass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeadingConvention {
    /// `heading = atan2(Yh, Xh)`
    #[default]
    EastPositive,
    /// `heading = atan2(-Yh, Xh)`
    Mirrored,
}

/// Battery voltage window used for the charge estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatterySettings {
    /// Voltage reported as 0 %
    pub min_voltage: f32,
    /// Voltage reported as 100 %
    pub max_voltage: f32,
}

impl Default for BatterySettings {
    fn default() -> Self {
        Self {
            min_voltage: 3.0,
            max_voltage: 4.2,
        }
    }
}

/// Alarm thresholds
///
/// A threshold of 0 disables the corresponding alarm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmSettings {
    /// Heel angle limit in degrees (absolute roll)
    pub max_heel: f32,
    /// Battery charge in percent below which the low battery alarm fires
    pub low_battery: f32,
    /// Pressure fall in hPa between two consecutive period means
    pub pressure_drop: f32,
}

impl Default for AlarmSettings {
    fn default() -> Self {
        Self {
            max_heel: 30.0,
            low_battery: 15.0,
            pressure_drop: 3.0,
        }
    }
}

/// SailSense core settings
///
/// Every field has a default matching the SailSense board, so a settings
/// file only needs to name what it changes.
///
/// # Example
/// ```
/// use sailsense::{HeadingConvention, Settings};
///
/// let settings = Settings {
///     heading_convention: HeadingConvention::Mirrored,
///     screen_count: 3,
///     ..Default::default()
/// };
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sign convention of the heading `atan2`
    pub heading_convention: HeadingConvention,
    /// Accelerometer mounting
    pub accelerometer_axes: AxisMap,
    /// Magnetometer mounting
    pub magnetometer_axes: AxisMap,
    /// Accelerometer correction, applied after remapping
    pub accelerometer_calibration: InertialCalibration,
    /// Magnetometer hard and soft iron correction, applied after remapping
    pub magnetometer_calibration: MagneticCalibration,
    /// Number of display screens cycled by the buttons
    pub screen_count: u8,
    /// Sea level reference pressure in hPa for altitude read-outs
    pub sea_level_pressure: f32,
    pub battery: BatterySettings,
    pub alarms: AlarmSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            heading_convention: HeadingConvention::default(),
            accelerometer_axes: AxisMap::default(),
            magnetometer_axes: AxisMap::default(),
            accelerometer_calibration: InertialCalibration::default(),
            magnetometer_calibration: MagneticCalibration::default(),
            screen_count: 5,
            sea_level_pressure: 1013.25,
            battery: BatterySettings::default(),
            alarms: AlarmSettings::default(),
        }
    }
}

impl Settings {
    /// Reject settings the core cannot run with
    pub fn validate(&self) -> Result<(), Error> {
        self.accelerometer_axes.validate()?;
        self.magnetometer_axes.validate()?;

        if self.screen_count == 0 {
            return Err(Error::InvalidSetting("screen_count"));
        }
        if !(self.sea_level_pressure > 0.0) {
            return Err(Error::InvalidSetting("sea_level_pressure"));
        }
        if !(self.battery.max_voltage > self.battery.min_voltage) {
            return Err(Error::InvalidSetting("battery"));
        }
        let alarms = &self.alarms;
        if alarms.max_heel < 0.0 || alarms.low_battery < 0.0 || alarms.pressure_drop < 0.0 {
            return Err(Error::InvalidSetting("alarms"));
        }

        Ok(())
    }
}
