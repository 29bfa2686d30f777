//! The `HoursMinutes` value type
//!
//! A wall-clock time as an (hours, minutes) pair with strict parsing of the
//! compact `[HH:]MM` notation, range-checked construction and wraparound
//! addition. Instances are plain values: copied freely, owned by the caller,
//! never touching global state.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::{Error, Field, Result};

/// A time of day in 24-hour format, or a duration under 24 hours.
///
/// Both interpretations share the same representation and parsing rules; only
/// the call site decides whether a value is a reference time or an offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoursMinutes {
    /// Hours in 24-hour format, 0..=23.
    hours: u8,
    /// Minutes, 0..=59.
    minutes: u8,
}

impl HoursMinutes {
    /// The zero time, 00:00.
    pub const fn zero() -> Self {
        HoursMinutes {
            hours: 0,
            minutes: 0,
        }
    }

    /// Build a value from an (hours, minutes) pair, validating each bound
    /// independently. Nothing is constructed on failure.
    pub fn new(hours: u8, minutes: u8) -> Result<Self> {
        let mut hm = HoursMinutes::zero();
        hm.set_hours(hours)?;
        hm.set_minutes(minutes)?;
        Ok(hm)
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Set the hours, rejecting values past 23.
    pub fn set_hours(&mut self, hours: u8) -> Result<()> {
        if hours > Field::Hours.limit() {
            return Err(Error::out_of_range(Field::Hours, hours));
        }
        self.hours = hours;
        Ok(())
    }

    /// Set the minutes, rejecting values past 59.
    pub fn set_minutes(&mut self, minutes: u8) -> Result<()> {
        if minutes > Field::Minutes.limit() {
            return Err(Error::out_of_range(Field::Minutes, minutes));
        }
        self.minutes = minutes;
        Ok(())
    }

    /// True iff the time is 00:00.
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }

    /// Reset the time to 00:00.
    pub fn reset(&mut self) {
        self.hours = 0;
        self.minutes = 0;
    }

    /// Replace the value from a `[HH:]MM` token.
    ///
    /// The token splits once on the first `:`. Without a colon the whole
    /// token is the minutes field and the hours are 0. An empty field means
    /// 0, so `""`, `":"`, `":0"` and `"0:"` all set 00:00. Both fields are
    /// replaced atomically: on any error the value is left untouched.
    pub fn set(&mut self, text: &str) -> Result<()> {
        let (hours, minutes) = match text.split_once(':') {
            None => (0, parse_field(text, Field::Minutes)?),
            Some((h, m)) => (
                parse_field(h, Field::Hours)?,
                parse_field(m, Field::Minutes)?,
            ),
        };
        self.hours = hours;
        self.minutes = minutes;
        Ok(())
    }
}

/// Parse one field of a token: at most two decimal digits, range-checked.
///
/// An empty field counts as 0. A non-digit character or a field of three or
/// more characters is a syntax error; a well-formed number past the field's
/// limit is a range error. The two stay distinct so callers can tell
/// malformed text from a plausible number that is too big.
fn parse_field(text: &str, field: Field) -> Result<u8> {
    if text.is_empty() || text == "0" || text == "00" {
        return Ok(0);
    }

    let chars: Vec<char> = text.chars().collect();
    let value = match chars.as_slice() {
        [units] => parse_digit(*units, field)?,
        [tens, units] => parse_digit(*tens, field)? * 10 + parse_digit(*units, field)?,
        _ => return Err(Error::too_long(field, text)),
    };

    if value > field.limit() {
        return Err(Error::out_of_range(field, value));
    }

    Ok(value)
}

fn parse_digit(character: char, field: Field) -> Result<u8> {
    match character.to_digit(10) {
        Some(d) => Ok(d as u8),
        None => Err(Error::invalid_character(field, character)),
    }
}

impl FromStr for HoursMinutes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut hm = HoursMinutes::zero();
        hm.set(s)?;
        Ok(hm)
    }
}

impl AddAssign for HoursMinutes {
    /// Wraparound addition: minutes carry into hours, hours wrap past 23.
    /// Any day-count overflow is discarded, so a duration that crosses
    /// midnight lands on the next day's time without error.
    fn add_assign(&mut self, rhs: Self) {
        let minutes = self.minutes as u16 + rhs.minutes as u16;
        let carry = (minutes / 60) as u8;
        self.minutes = (minutes % 60) as u8;
        self.hours = (self.hours + rhs.hours + carry) % 24;
    }
}

impl Add for HoursMinutes {
    type Output = HoursMinutes;

    fn add(self, rhs: Self) -> HoursMinutes {
        let mut sum = self;
        sum += rhs;
        sum
    }
}

impl fmt::Display for HoursMinutes {
    /// Renders exactly five characters, `HH:MM`, both fields zero-padded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}
