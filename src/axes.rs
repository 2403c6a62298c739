//! Sensor axes remapping into the instrument body frame
//!
//! The orientation formulas work in a body frame where `x` points forward
//! (towards the bow of the handheld), `y` points right and `z` points up.
//! [`AxisMap`] describes which signed sensor axis feeds each body axis.
//!
//! # Example
//! ```
//! use nalgebra::Vector3;
//! use sailsense::AxisMap;
//!
//! // MPU9250 mounted with its Y axis pointing forward
//! let map = AxisMap::default();
//! let body = map.apply(Vector3::new(1.0, 2.0, 3.0));
//!
//! assert_eq!(body.x, 2.0); // forward = sensor Y
//! assert_eq!(body.y, 1.0); // right   = sensor X
//! assert_eq!(body.z, 3.0); // up      = sensor Z
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A sensor axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    fn pick(self, sensor: &Vector3<f32>) -> f32 {
        match self {
            Axis::X => sensor.x,
            Axis::Y => sensor.y,
            Axis::Z => sensor.z,
        }
    }
}

/// A sensor axis with an optional sign inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedAxis {
    pub axis: Axis,
    #[serde(default)]
    pub negate: bool,
}

impl SignedAxis {
    /// Positive direction of `axis`
    pub const fn positive(axis: Axis) -> Self {
        Self { axis, negate: false }
    }

    /// Negative direction of `axis`
    pub const fn negative(axis: Axis) -> Self {
        Self { axis, negate: true }
    }

    #[inline]
    fn read(self, sensor: &Vector3<f32>) -> f32 {
        let value = self.axis.pick(sensor);
        if self.negate { -value } else { value }
    }
}

/// Mapping from sensor axes to body axes
///
/// The default is the SailSense board layout: forward = +Y, right = +X,
/// up = +Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisMap {
    pub forward: SignedAxis,
    pub right: SignedAxis,
    pub up: SignedAxis,
}

impl Default for AxisMap {
    fn default() -> Self {
        Self {
            forward: SignedAxis::positive(Axis::Y),
            right: SignedAxis::positive(Axis::X),
            up: SignedAxis::positive(Axis::Z),
        }
    }
}

impl AxisMap {
    /// Identity mapping: forward = +X, right = +Y, up = +Z
    pub const IDENTITY: AxisMap = AxisMap {
        forward: SignedAxis::positive(Axis::X),
        right: SignedAxis::positive(Axis::Y),
        up: SignedAxis::positive(Axis::Z),
    };

    /// Check that every sensor axis is used exactly once
    pub fn validate(&self) -> Result<(), Error> {
        let axes = [self.forward.axis, self.right.axis, self.up.axis];
        for (i, axis) in axes.iter().enumerate() {
            if axes[i + 1..].contains(axis) {
                return Err(Error::DuplicateAxis(*axis));
            }
        }
        Ok(())
    }

    /// Remap a sensor-frame reading into the body frame
    #[inline]
    pub fn apply(&self, sensor: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(
            self.forward.read(&sensor),
            self.right.read(&sensor),
            self.up.read(&sensor),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_map() {
        let sensor = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(AxisMap::IDENTITY.apply(sensor), sensor);
        assert!(AxisMap::IDENTITY.validate().is_ok());
    }

    #[test]
    fn test_default_board_layout() {
        let map = AxisMap::default();
        assert!(map.validate().is_ok());
        assert_eq!(map.apply(Vector3::new(1.0, 2.0, 3.0)), Vector3::new(2.0, 1.0, 3.0));
    }

    #[test]
    fn test_negated_axes() {
        let map = AxisMap {
            forward: SignedAxis::negative(Axis::Z),
            right: SignedAxis::positive(Axis::X),
            up: SignedAxis::negative(Axis::Y),
        };
        assert!(map.validate().is_ok());
        assert_eq!(map.apply(Vector3::new(1.0, 2.0, 3.0)), Vector3::new(-3.0, 1.0, -2.0));
    }

    #[test]
    fn test_remap_preserves_magnitude() {
        let sensor = Vector3::new(0.3, -1.2, 4.5);
        let map = AxisMap {
            forward: SignedAxis::negative(Axis::Y),
            right: SignedAxis::negative(Axis::Z),
            up: SignedAxis::positive(Axis::X),
        };
        assert!((map.apply(sensor).magnitude() - sensor.magnitude()).abs() < 1e-6);
    }

    #[test]
    fn test_duplicate_axis_rejected() {
        let map = AxisMap {
            forward: SignedAxis::positive(Axis::Y),
            right: SignedAxis::negative(Axis::Y),
            up: SignedAxis::positive(Axis::Z),
        };
        assert_eq!(map.validate(), Err(Error::DuplicateAxis(Axis::Y)));
    }
}
