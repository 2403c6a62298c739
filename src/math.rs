//! Angle and unit helpers shared by the SailSense modules

use nalgebra::Vector3;

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Build a body-frame vector from its forward, right and up components
///
/// The body frame stores forward in `x`, right in `y` and up in `z`.
///
/// # Example
/// ```
/// use sailsense::body;
///
/// let level = body(0.0, 0.0, 1.0);
/// assert_eq!(level.z, 1.0);
/// ```
#[inline]
pub fn body(forward: f32, right: f32, up: f32) -> Vector3<f32> {
    Vector3::new(forward, right, up)
}

/// Wrap an angle in degrees into `[0, 360)`
///
/// # Example
/// ```
/// use sailsense::wrap_360;
///
/// assert_eq!(wrap_360(-90.0), 270.0);
/// assert_eq!(wrap_360(360.0), 0.0);
/// ```
pub fn wrap_360(degrees: f32) -> f32 {
    let mut wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    // -tiny % 360 + 360 rounds up to exactly 360
    if wrapped >= 360.0 {
        wrapped -= 360.0;
    }
    wrapped
}

/// Wrap an angle in degrees into `(-180, 180]`
///
/// Angles already inside the range come back unchanged.
pub fn wrap_180(degrees: f32) -> f32 {
    if degrees > -180.0 && degrees <= 180.0 {
        return degrees;
    }
    let wrapped = wrap_360(degrees);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert a pressure in pascal to hectopascal
pub fn pa_to_hpa(pascal: f32) -> f32 {
    pascal / 100.0
}
