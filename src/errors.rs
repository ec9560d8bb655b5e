use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Names the validated fields of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Day,
    Month,
}

impl DateField {
    /// Inclusive range accepted by the field setter.
    pub fn bounds(self) -> (i32, i32) {
        match self {
            DateField::Day => (1, 31),
            DateField::Month => (1, 12),
        }
    }

    fn range_label(self) -> String {
        let (min, max) = self.bounds();
        format!("{min} and {max}")
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DateField::Day => "Day",
            DateField::Month => "Month",
        };
        f.write_str(label)
    }
}

/// Failures raised by calendar date construction and arithmetic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("{field} must be between {}, got {value}", .field.range_label())]
    OutOfRange { field: DateField, value: i32 },
    #[error("{day:02}.{month:02}.{year} is not a calendar date")]
    NotACalendarDate { day: i32, month: i32, year: i32 },
}

/// Persistence failures for the preferences file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Errors that abort an interactive task.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("`{input}` is not a valid integer: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("missing {field} in `{line}`")]
    MissingField { field: &'static str, line: String },
    #[error("input ended while a value was expected")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
