//! Per-tick processing for the SailSense instrument

use nalgebra::Vector3;

use crate::alarm::{AlarmMonitor, Alarms};
use crate::battery::BatteryStatus;
use crate::display::{Button, ScreenSelector};
use crate::environment::{EnvironmentalMean, PERIOD_HISTORY, PeriodHistory, altitude, dew_point};
use crate::error::Error;
use crate::heading::{HEADING_WINDOW, HeadingAverager};
use crate::orientation::OrientationEstimator;
use crate::period::PeriodTracker;
use crate::types::{EnvironmentalSample, OrientationSample, Settings};

/// Raw readings acquired for one sampling tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Accelerometer in g, sensor frame
    pub accelerometer: Vector3<f32>,
    /// Magnetometer in µT, sensor frame
    pub magnetometer: Vector3<f32>,
    /// BME280 reading
    pub environment: EnvironmentalSample,
    /// RTC hour, `None` when the clock was not read this tick
    pub hour: Option<u8>,
    /// Battery voltage in volts, `None` when not sampled this tick
    pub battery_voltage: Option<f32>,
}

/// Values produced for one tick, ready for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    /// Instantaneous roll, pitch and heading
    pub orientation: OrientationSample,
    /// Mean heading over the last [`HEADING_WINDOW`] ticks
    pub smoothed_heading: f32,
    /// Mean environment since the start of the current period
    pub environment_mean: EnvironmentalSample,
    /// Altitude in metres derived from the mean pressure
    pub altitude: f32,
    /// Dew point in °C derived from the mean temperature and humidity
    pub dew_point: f32,
    /// Screen index selected by the buttons
    pub screen: u8,
    pub alarms: Alarms,
    pub battery: Option<BatteryStatus>,
}

/// SailSense processing core
///
/// Owns all averaging state. Construct once at start-up and call
/// [`tick`](Self::tick) from the sampling loop; buffers are only ever touched
/// from that call.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use sailsense::{EnvironmentalSample, SailSense, Settings, TickInput};
///
/// let mut sailsense = SailSense::new(Settings::default()).unwrap();
///
/// let readout = sailsense.tick(&TickInput {
///     // Sensor frame: the board's Y axis points forward
///     accelerometer: Vector3::new(0.0, 0.0, 1.0),
///     magnetometer: Vector3::new(0.0, 20.0, -40.0),
///     environment: EnvironmentalSample::new(19.5, 70.0, 1012.0),
///     hour: Some(9),
///     battery_voltage: Some(3.9),
/// });
///
/// assert!(readout.orientation.heading.abs() < 1e-3);
/// assert_eq!(readout.environment_mean.pressure, 1012.0);
/// ```
#[derive(Debug, Clone)]
pub struct SailSense {
    settings: Settings,
    estimator: OrientationEstimator,
    heading: HeadingAverager<HEADING_WINDOW>,
    environment: EnvironmentalMean,
    history: PeriodHistory<PERIOD_HISTORY>,
    period: PeriodTracker,
    screens: ScreenSelector,
    alarms: AlarmMonitor,
    ticks: u32,
}

impl SailSense {
    /// Create the core from validated settings
    pub fn new(settings: Settings) -> Result<Self, Error> {
        if let Err(error) = settings.validate() {
            log::warn!("rejected settings: {}", error);
            return Err(error);
        }

        Ok(Self {
            estimator: OrientationEstimator::new(settings.heading_convention),
            heading: HeadingAverager::new(),
            environment: EnvironmentalMean::new(),
            history: PeriodHistory::new(),
            period: PeriodTracker::new(),
            screens: ScreenSelector::new(settings.screen_count)?,
            alarms: AlarmMonitor::new(settings.alarms),
            ticks: 0,
            settings,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one sampling tick
    ///
    /// Remap and calibrate both IMU vectors, estimate the orientation, fold the
    /// heading into the compass window, start a new environmental period when
    /// the RTC hour changed, fold the environment sample and evaluate alarms.
    pub fn tick(&mut self, input: &TickInput) -> Readout {
        let settings = &self.settings;

        let accelerometer = settings
            .accelerometer_calibration
            .apply(settings.accelerometer_axes.apply(input.accelerometer));
        let magnetometer = settings
            .magnetometer_calibration
            .apply(settings.magnetometer_axes.apply(input.magnetometer));

        let orientation = self.estimator.estimate(accelerometer, magnetometer);
        let smoothed_heading = self.heading.insert_and_average(orientation.heading);

        if let Some(hour) = input.hour {
            if self.period.observe(hour) {
                self.start_period(hour);
            }
        }
        let environment_mean = self.environment.fold_and_average(input.environment);

        let battery = input
            .battery_voltage
            .map(|voltage| BatteryStatus::from_voltage(voltage, &self.settings.battery));
        let alarms = self.alarms.evaluate(&orientation, battery.as_ref());
        if !alarms.is_empty() {
            log::warn!("alarms raised: {:#05b}", alarms.bits());
        }

        self.ticks = self.ticks.wrapping_add(1);
        log::trace!(
            "tick {}: roll={:.1} pitch={:.1} heading={:.1} smoothed={:.1}",
            self.ticks,
            orientation.roll,
            orientation.pitch,
            orientation.heading,
            smoothed_heading
        );

        Readout {
            orientation,
            smoothed_heading,
            environment_mean,
            altitude: altitude(environment_mean.pressure, self.settings.sea_level_pressure),
            dew_point: dew_point(environment_mean.temperature, environment_mean.humidity),
            screen: self.screens.current(),
            alarms,
            battery,
        }
    }

    fn start_period(&mut self, hour: u8) {
        if let Some(mean) = self.environment.mean() {
            log::debug!(
                "period closed at hour {} after {} samples, mean pressure {:.1} hPa",
                hour,
                self.environment.count(),
                mean.pressure
            );
            self.alarms.close_period(mean.pressure);
            self.history.push(mean);
        }
        self.environment.reset();
    }

    /// Apply a button press and return the selected screen index
    pub fn press(&mut self, button: Button) -> u8 {
        let before = self.screens.current();
        let screen = self.screens.press(button);
        if screen != before {
            log::debug!("screen {} -> {}", before, screen);
        }
        screen
    }

    /// Jump straight to a screen
    pub fn select_screen(&mut self, index: u8) -> Result<u8, Error> {
        self.screens.select(index)
    }

    pub fn screen(&self) -> u8 {
        self.screens.current()
    }

    /// Mean heading of the compass window, `None` before the first tick
    pub fn smoothed_heading(&self) -> Option<f32> {
        self.heading.average()
    }

    /// Wrap-safe mean heading of the compass window
    pub fn circular_heading(&self) -> Option<f32> {
        self.heading.circular_average()
    }

    /// Mean environment of the current period
    pub fn environment_mean(&self) -> Option<EnvironmentalSample> {
        self.environment.mean()
    }

    /// Closing means of the last [`PERIOD_HISTORY`] periods, oldest first
    pub fn period_history(&self) -> &PeriodHistory<PERIOD_HISTORY> {
        &self.history
    }

    /// Forget all averaged state, keeping settings and the selected screen
    pub fn reset(&mut self) {
        self.heading.clear();
        self.environment.reset();
        self.history.clear();
        self.period = PeriodTracker::new();
        self.alarms = AlarmMonitor::new(self.settings.alarms);
        self.ticks = 0;
    }
}
