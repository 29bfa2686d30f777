//! # timecal
//!
//! A command-line time-of-day calculator: add a duration in hours and
//! minutes to a reference time (the current local time by default) and get
//! the resulting time of day, wrapping correctly across midnight.
//!
//! ## Usage
//!
//! ```bash
//! timecal [<HH>:<MM>] [[<HH>:]MM]
//! ```
//!
//! ## Modules
//!
//! - `hours_minutes` - The `HoursMinutes` value type: strict parsing,
//!   range-checked construction, wraparound addition, `HH:MM` rendering
//! - `clock` - Narrow clock-provider trait so tests can inject a fixed time
//! - `error` - Error types distinguishing malformed text from out-of-range
//!   values
//! - `app` - Argument dispatch and the interactive read-eval-print loop
pub mod app;
pub mod clock;
pub mod error;
pub mod hours_minutes;
