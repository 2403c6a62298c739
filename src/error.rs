//! Error type for the fallible parts of the SailSense core
//!
//! The numeric core (orientation, averaging) is total and never fails. Only
//! construction and configuration paths return [`Error`].

use core::fmt;

use crate::axes::Axis;

/// Errors raised while building or reconfiguring the SailSense core
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The same sensor axis feeds more than one body axis
    DuplicateAxis(Axis),
    /// A routine that averages samples was handed an empty slice
    NoSamples,
    /// A screen index outside `0..count` was requested
    ScreenOutOfRange {
        /// Requested index
        index: u8,
        /// Number of screens available
        count: u8,
    },
    /// A setting holds a value the core cannot work with
    InvalidSetting(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateAxis(axis) => {
                write!(f, "sensor axis {axis:?} is mapped to more than one body axis")
            }
            Error::NoSamples => f.write_str("no samples to average"),
            Error::ScreenOutOfRange { index, count } => {
                write!(f, "screen {index} out of range (0..{count})")
            }
            Error::InvalidSetting(name) => write!(f, "invalid setting: {name}"),
        }
    }
}

impl core::error::Error for Error {}
