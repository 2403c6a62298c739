//! Roll, pitch and tilt-compensated heading from one accelerometer and
//! magnetometer sample
//!
//! Both inputs are body-frame vectors (`x` forward, `y` right, `z` up), the
//! accelerometer in g and the magnetometer in any consistent unit. The
//! estimator keeps no state between samples.
//!
//! Degenerate inputs are defined rather than rejected: `atan2(0, 0)` is 0, so
//! an accelerometer with zero right and up components reports a roll of 0°,
//! and a magnetometer with no horizontal component reports a heading of 0°.

use nalgebra::{ComplexField, RealField, Vector3};

use crate::math::{DEG_TO_RAD, RAD_TO_DEG, wrap_180, wrap_360};
use crate::types::{HeadingConvention, OrientationSample};

/// Compute roll, pitch and heading using the [`HeadingConvention::EastPositive`]
/// convention
///
/// # Arguments
/// * `accelerometer` - Body-frame accelerometer reading in g
/// * `magnetometer` - Body-frame magnetometer reading in any consistent unit
///
/// # Returns
/// Roll in `(-180, 180]`, pitch in `[-90, 90]` and heading in `[0, 360)`, all in degrees
///
/// # Example
/// ```
/// use sailsense::{body, estimate_orientation};
///
/// let level = body(0.0, 0.0, 1.0);
/// let east = body(0.0, 1.0, 0.0);
/// let sample = estimate_orientation(level, east);
/// assert!((sample.heading - 90.0).abs() < 1e-4);
/// ```
pub fn estimate_orientation(accelerometer: Vector3<f32>, magnetometer: Vector3<f32>) -> OrientationSample {
    OrientationEstimator::new(HeadingConvention::EastPositive).estimate(accelerometer, magnetometer)
}

/// Rotate a body-frame magnetometer reading into the horizontal plane
///
/// # Arguments
/// * `magnetometer` - Body-frame magnetometer reading
/// * `roll` - Roll in radians
/// * `pitch` - Pitch in radians
///
/// # Returns
/// `(xh, yh)`, the north-like and east-like horizontal components
#[inline]
pub fn tilt_compensate(magnetometer: Vector3<f32>, roll: f32, pitch: f32) -> (f32, f32) {
    let (forward, right, up) = (magnetometer.x, magnetometer.y, magnetometer.z);

    let cr = roll.cos();
    let sr = roll.sin();
    let cp = pitch.cos();
    let sp = pitch.sin();

    let xh = forward * cp + up * sp;
    let yh = forward * sr * sp + right * cr - up * sr * cp;

    (xh, yh)
}

/// Tilt-compensated compass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrientationEstimator {
    convention: HeadingConvention,
}

impl OrientationEstimator {
    pub fn new(convention: HeadingConvention) -> Self {
        Self { convention }
    }

    pub fn convention(&self) -> HeadingConvention {
        self.convention
    }

    /// Estimate the orientation for one tick
    ///
    /// 1. `roll = atan2(right, up)`
    /// 2. `pitch = atan2(-forward, sqrt(right² + up²))`
    /// 3. tilt-compensate the magnetometer with roll and pitch
    /// 4. `heading = atan2(yh, xh)` (or `atan2(-yh, xh)` when mirrored),
    ///    wrapped into `[0, 360)`
    pub fn estimate(&self, accelerometer: Vector3<f32>, magnetometer: Vector3<f32>) -> OrientationSample {
        let (forward, right, up) = (accelerometer.x, accelerometer.y, accelerometer.z);

        let roll = right.atan2(up);
        let pitch = (-forward).atan2((right * right + up * up).sqrt());

        let (xh, yh) = tilt_compensate(magnetometer, roll, pitch);
        let heading = match self.convention {
            HeadingConvention::EastPositive => yh.atan2(xh),
            HeadingConvention::Mirrored => (-yh).atan2(xh),
        };

        OrientationSample {
            // atan2(-0, -1) is -180, fold it onto +180
            roll: wrap_180(roll * RAD_TO_DEG),
            pitch: pitch * RAD_TO_DEG,
            heading: wrap_360(heading * RAD_TO_DEG),
        }
    }
}

/// Body-frame accelerometer reading for a device at rest with the given
/// roll and pitch in degrees
///
/// Inverse of the roll/pitch part of [`OrientationEstimator::estimate`].
pub fn gravity_for(roll: f32, pitch: f32) -> Vector3<f32> {
    let roll = roll * DEG_TO_RAD;
    let pitch = pitch * DEG_TO_RAD;
    Vector3::new(-pitch.sin(), pitch.cos() * roll.sin(), pitch.cos() * roll.cos())
}

/// Body-frame magnetometer reading for a device with the given roll, pitch
/// and heading in degrees, in a field of horizontal strength `horizontal`
/// and vertical component `vertical`
///
/// Inverse of [`tilt_compensate`] for the [`HeadingConvention::EastPositive`]
/// convention. Useful to synthesise test fixtures.
pub fn field_for(roll: f32, pitch: f32, heading: f32, horizontal: f32, vertical: f32) -> Vector3<f32> {
    let roll = roll * DEG_TO_RAD;
    let pitch = pitch * DEG_TO_RAD;
    let heading = heading * DEG_TO_RAD;

    let cr = roll.cos();
    let sr = roll.sin();
    let cp = pitch.cos();
    let sp = pitch.sin();

    let xh = horizontal * heading.cos();
    let yh = horizontal * heading.sin();
    let zh = vertical;

    // Transpose of the orthonormal tilt matrix used by tilt_compensate
    Vector3::new(
        cp * xh + sr * sp * yh - cr * sp * zh,
        cr * yh + sr * zh,
        sp * xh - sr * cp * yh + cr * cp * zh,
    )
}
