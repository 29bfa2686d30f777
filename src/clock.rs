//! Clock provider abstraction
//!
//! The one point where the calculator touches the environment is reading the
//! current local time. Keeping it behind a narrow trait lets tests inject a
//! fixed time instead of depending on the real wall clock.

use chrono::{Local, Timelike};

use crate::error::{Error, Result};
use crate::hours_minutes::HoursMinutes;

/// Source of the current local time, truncated to whole minutes.
pub trait Clock {
    /// Current local time as an (hours, minutes) pair.
    ///
    /// A failure here means the environment's clock is unreadable and the
    /// calling operation should abort rather than default to a wrong time.
    fn now(&self) -> Result<HoursMinutes>;
}

/// Reads the real local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<HoursMinutes> {
        let now = Local::now();
        HoursMinutes::new(now.hour() as u8, now.minute() as u8)
            .map_err(|e| Error::Clock(e.to_string()))
    }
}

/// Always reports the same time. Used by tests in place of [`SystemClock`].
pub struct FixedClock(pub HoursMinutes);

impl Clock for FixedClock {
    fn now(&self) -> Result<HoursMinutes> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_yields_a_valid_time() {
        let now = SystemClock.now().unwrap();
        assert!(now.hours() <= 23);
        assert!(now.minutes() <= 59);
    }

    #[test]
    fn fixed_clock_yields_its_time() {
        let noon = HoursMinutes::new(12, 0).unwrap();
        assert_eq!(FixedClock(noon).now().unwrap(), noon);
    }
}
