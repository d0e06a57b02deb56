//! Wall-clock helpers for bubble timestamps and request ids.
//!
//! The browser's local time is used when hydrated; SSR and tests fall back to
//! UTC from the system clock.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::fmt;

/// An `HH:MM` time of day shown under chat bubbles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour: hour % 24, minute: minute % 60 }
    }

    /// UTC time of day for a Unix timestamp in milliseconds.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_epoch_millis(ms: u64) -> Self {
        let minutes = ms / 60_000;
        Self { hour: ((minutes / 60) % 24) as u8, minute: (minutes % 60) as u8 }
    }

    /// Current time of day.
    #[allow(clippy::cast_possible_truncation)]
    pub fn now() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let date = js_sys::Date::new_0();
            Self::new(date.get_hours() as u8, date.get_minutes() as u8)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::from_epoch_millis(now_millis())
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_millis() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}
