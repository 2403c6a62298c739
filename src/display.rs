//! Display-side helpers: screen selection and compass rendering values
//!
//! Rendering itself happens in the firmware. This module only turns button
//! events into a flat screen index and headings into text and pixel
//! positions.

use nalgebra::ComplexField;

use crate::error::Error;
use crate::math::{DEG_TO_RAD, wrap_360};

/// Push-buttons on the SailSense case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Next,
    Previous,
    Select,
    Back,
}

/// Default screens, in button order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Environment,
    Navigation,
    Timer,
    Alarm,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Environment,
        Screen::Navigation,
        Screen::Timer,
        Screen::Alarm,
        Screen::Settings,
    ];

    /// Screen shown at `index`, when it is one of the default screens
    pub fn from_index(index: u8) -> Option<Screen> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Flat, wrapping screen index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSelector {
    current: u8,
    count: u8,
}

impl ScreenSelector {
    /// Create a selector over `count` screens, starting at screen 0
    pub fn new(count: u8) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidSetting("screen_count"));
        }
        Ok(Self { current: 0, count })
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn next(&mut self) -> u8 {
        self.current = if self.current + 1 >= self.count { 0 } else { self.current + 1 };
        self.current
    }

    pub fn previous(&mut self) -> u8 {
        self.current = if self.current == 0 { self.count - 1 } else { self.current - 1 };
        self.current
    }

    pub fn select(&mut self, index: u8) -> Result<u8, Error> {
        if index >= self.count {
            return Err(Error::ScreenOutOfRange {
                index,
                count: self.count,
            });
        }
        self.current = index;
        Ok(self.current)
    }

    /// Apply a button press and return the screen index afterwards
    ///
    /// `Select` leaves the index alone; the firmware acts on it per screen.
    pub fn press(&mut self, button: Button) -> u8 {
        match button {
            Button::Next => self.next(),
            Button::Previous => self.previous(),
            Button::Back => {
                self.current = 0;
                0
            }
            Button::Select => self.current,
        }
    }
}

/// End point of a compass needle of length `radius` drawn from `(cx, cy)`
///
/// 0° points up and angles grow clockwise. Screen `y` grows downward.
pub fn point_on_circle(cx: i32, cy: i32, radius: i32, heading: f32) -> (i32, i32) {
    let rad = heading * DEG_TO_RAD;
    let r = radius as f32;
    let x = cx as f32 + r * rad.sin();
    let y = cy as f32 - r * rad.cos();
    (x.round() as i32, y.round() as i32)
}

/// 16-point compass rose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassPoint {
    const ROSE: [CompassPoint; 16] = [
        CompassPoint::N,
        CompassPoint::NNE,
        CompassPoint::NE,
        CompassPoint::ENE,
        CompassPoint::E,
        CompassPoint::ESE,
        CompassPoint::SE,
        CompassPoint::SSE,
        CompassPoint::S,
        CompassPoint::SSW,
        CompassPoint::SW,
        CompassPoint::WSW,
        CompassPoint::W,
        CompassPoint::WNW,
        CompassPoint::NW,
        CompassPoint::NNW,
    ];

    /// Nearest rose point; each point covers 22.5° centred on its bearing
    pub fn from_heading(heading: f32) -> CompassPoint {
        let sector = ((wrap_360(heading) + 11.25) / 22.5) as usize % 16;
        Self::ROSE[sector]
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NNE => "NNE",
            CompassPoint::NE => "NE",
            CompassPoint::ENE => "ENE",
            CompassPoint::E => "E",
            CompassPoint::ESE => "ESE",
            CompassPoint::SE => "SE",
            CompassPoint::SSE => "SSE",
            CompassPoint::S => "S",
            CompassPoint::SSW => "SSW",
            CompassPoint::SW => "SW",
            CompassPoint::WSW => "WSW",
            CompassPoint::W => "W",
            CompassPoint::WNW => "WNW",
            CompassPoint::NW => "NW",
            CompassPoint::NNW => "NNW",
        }
    }
}

impl core::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Short weekday name for an RTC day-of-week (0 = Sunday)
pub fn weekday_name(day: u8) -> &'static str {
    const NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    NAMES.get(day as usize).copied().unwrap_or("??")
}
