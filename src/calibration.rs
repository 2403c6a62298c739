//! Accelerometer and magnetometer correction applied before orientation estimation
//!
//! The estimator itself never calibrates. The pipeline runs each body-frame
//! reading through these corrections first.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Inertial sensor correction
///
/// Applied as `misalignment * ((raw - offset) ∘ sensitivity)`.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use sailsense::InertialCalibration;
///
/// let calibration = InertialCalibration {
///     offset: Vector3::new(0.02, -0.01, 0.0),
///     ..Default::default()
/// };
/// let corrected = calibration.apply(Vector3::new(0.02, -0.01, 1.0));
/// assert!((corrected - Vector3::new(0.0, 0.0, 1.0)).magnitude() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InertialCalibration {
    /// 3x3 misalignment correction matrix
    pub misalignment: Matrix3<f32>,
    /// Per-axis scale factors
    pub sensitivity: Vector3<f32>,
    /// Bias subtracted from each raw reading
    pub offset: Vector3<f32>,
}

impl Default for InertialCalibration {
    fn default() -> Self {
        Self {
            misalignment: Matrix3::identity(),
            sensitivity: Vector3::repeat(1.0),
            offset: Vector3::zeros(),
        }
    }
}

impl InertialCalibration {
    /// Apply the correction to a raw reading
    #[inline]
    pub fn apply(&self, uncalibrated: Vector3<f32>) -> Vector3<f32> {
        self.misalignment * (uncalibrated - self.offset).component_mul(&self.sensitivity)
    }

    /// Estimate the offset from readings taken while the device lies still
    ///
    /// The offset is the mean of `samples` minus `expected`, the reading an
    /// ideal sensor would produce in that pose (`(0, 0, 1)` g for a level
    /// accelerometer). Misalignment and sensitivity are left at identity.
    ///
    /// # Arguments
    /// * `samples` - Readings taken while stationary
    /// * `expected` - Reading an ideal sensor would report in the same pose
    ///
    /// # Returns
    /// A calibration with only the offset set, or [`Error::NoSamples`] when
    /// `samples` is empty
    pub fn auto_offset(samples: &[Vector3<f32>], expected: Vector3<f32>) -> Result<Self, Error> {
        if samples.is_empty() {
            return Err(Error::NoSamples);
        }

        let sum = samples
            .iter()
            .fold(Vector3::zeros(), |acc: Vector3<f32>, sample| acc + sample);
        let mean = sum / samples.len() as f32;

        log::debug!(
            "auto offset from {} samples: ({:.4}, {:.4}, {:.4})",
            samples.len(),
            mean.x - expected.x,
            mean.y - expected.y,
            mean.z - expected.z
        );

        Ok(Self {
            offset: mean - expected,
            ..Default::default()
        })
    }
}

/// Magnetometer hard and soft iron correction
///
/// Applied as `soft_iron * (raw - hard_iron)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagneticCalibration {
    pub soft_iron: Matrix3<f32>,
    pub hard_iron: Vector3<f32>,
}

impl Default for MagneticCalibration {
    fn default() -> Self {
        Self {
            soft_iron: Matrix3::identity(),
            hard_iron: Vector3::zeros(),
        }
    }
}

impl MagneticCalibration {
    /// Apply the correction to a raw reading
    #[inline]
    pub fn apply(&self, uncalibrated: Vector3<f32>) -> Vector3<f32> {
        self.soft_iron * (uncalibrated - self.hard_iron)
    }

    /// Hard iron offset from the per-axis extremes seen while the device is
    /// turned through all orientations
    pub fn from_extremes(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self {
            hard_iron: (min + max) * 0.5,
            ..Default::default()
        }
    }
}
