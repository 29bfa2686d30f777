use std::fmt;
use thiserror::Error;

/// Which half of a time token an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hours,
    Minutes,
}

impl Field {
    /// Upper bound for a value in this field.
    pub fn limit(self) -> u8 {
        match self {
            Field::Hours => 23,
            Field::Minutes => 59,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Hours => write!(f, "hours"),
            Field::Minutes => write!(f, "minutes"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The field text is malformed: a non-digit character or more than two
    /// digits. Never raised for a well-formed number that is merely too big.
    #[error("invalid {field} field: {reason}")]
    InvalidSyntax { field: Field, reason: String },

    /// The field text is a valid number but exceeds the field's bound.
    #[error("{field} value {value} is larger than {limit}")]
    OutOfRange { field: Field, value: u8, limit: u8 },

    /// The local wall clock could not be read or broken into parts.
    #[error("unable to read the local clock: {0}")]
    Clock(String),
}

impl Error {
    pub(crate) fn invalid_character(field: Field, character: char) -> Self {
        Error::InvalidSyntax {
            field,
            reason: format!("invalid character {character:?} in time string"),
        }
    }

    pub(crate) fn too_long(field: Field, text: &str) -> Self {
        Error::InvalidSyntax {
            field,
            reason: format!("{text:?} is longer than two digits"),
        }
    }

    pub(crate) fn out_of_range(field: Field, value: u8) -> Self {
        Error::OutOfRange {
            field,
            value,
            limit: field.limit(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
