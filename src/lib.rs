#![no_std]

//! SailSense - orientation, compass smoothing and environmental averaging
//! for a handheld marine instrument
//!
//! The crate is the numeric core of the SailSense firmware. Drivers for the
//! MPU9250, BME280 and DS3231 live in the firmware; they hand raw readings to
//! [`SailSense::tick`] once per sampling period and render the returned
//! [`Readout`].
//!
//! # Features
//!
//! - Roll, pitch and tilt-compensated magnetic heading from one accelerometer
//!   and magnetometer sample
//! - Heading smoothing over a 20 sample ring buffer
//! - Hourly running mean of temperature, humidity and pressure, with a 24 hour
//!   history of closed hours
//! - Sensor axis remapping and accelerometer/magnetometer calibration
//! - Heel, low battery and falling pressure alarms
//! - `#![no_std]` compatible, no allocation
//!
//! # Quick Start
//!
//! ```rust
//! use sailsense::{HEADING_WINDOW, HeadingAverager, body, estimate_orientation};
//!
//! let mut compass = HeadingAverager::<HEADING_WINDOW>::new();
//!
//! // Body frame readings: forward, right, up
//! let accelerometer = body(0.0, 0.0, 1.0); // g
//! let magnetometer = body(18.0, 6.0, -42.0); // µT
//!
//! let sample = estimate_orientation(accelerometer, magnetometer);
//! let smoothed = compass.insert_and_average(sample.heading);
//!
//! assert!((0.0..360.0).contains(&smoothed));
//! ```

pub mod alarm;
pub mod axes;
pub mod battery;
pub mod calibration;
pub mod display;
pub mod environment;
mod error;
pub mod filter;
mod heading;
mod math;
mod orientation;
mod period;
mod sailsense;
mod types;

// Re-export all public types and functions
pub use alarm::{AlarmMonitor, Alarms};
pub use axes::{Axis, AxisMap, SignedAxis};
pub use battery::BatteryStatus;
pub use calibration::{InertialCalibration, MagneticCalibration};
pub use display::{Button, CompassPoint, Screen, ScreenSelector, point_on_circle, weekday_name};
pub use environment::{
    EnvironmentalMean, PERIOD_HISTORY, PeriodHistory, STANDARD_SEA_LEVEL_HPA, altitude, dew_point, sea_level_pressure,
};
pub use error::Error;
pub use heading::{HEADING_WINDOW, HeadingAverager};
pub use math::{DEG_TO_RAD, RAD_TO_DEG, body, lerp, pa_to_hpa, wrap_180, wrap_360};
pub use orientation::{OrientationEstimator, estimate_orientation, field_for, gravity_for, tilt_compensate};
pub use period::PeriodTracker;
pub use sailsense::{Readout, SailSense, TickInput};
pub use types::*;
