//! Error types for conversions and configuration.
//!
//! Text parsing errors live in [`crate::ParseError`]; everything here is produced
//! after the input has been read as numbers.

use crate::{
    Locale,
    consts::{MAX_JALALI_YEAR, MIN_JALALI_YEAR},
    gregorian::ParseError,
};

fn month_label(month: &i32) -> String {
    Locale::English.month_label(*month)
}

/// A (year, month, day) triple that is not a real Jalali calendar day.
///
/// Every variant keeps the offending triple so the caller can render
/// [`JalaliDateError::message`] in the user's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JalaliDateError {
    #[error(
        "date {day} {label} {year} is invalid: year must be {min}-{max}",
        label = month_label(.month),
        min = MIN_JALALI_YEAR,
        max = MAX_JALALI_YEAR
    )]
    YearOutOfRange { year: i32, month: i32, day: i32 },

    #[error("date {day} {month} {year} is invalid: month must be 1-12")]
    InvalidMonth { year: i32, month: i32, day: i32 },

    #[error(
        "date {day} {label} {year} is invalid: the month has {days_in_month} days",
        label = month_label(.month)
    )]
    InvalidDay {
        year:          i32,
        month:         i32,
        day:           i32,
        days_in_month: u8,
    },
}

impl JalaliDateError {
    /// The rejected `(year, month, day)`.
    pub const fn components(&self) -> (i32, i32, i32) {
        match *self {
            Self::YearOutOfRange { year, month, day }
            | Self::InvalidMonth { year, month, day }
            | Self::InvalidDay {
                year, month, day, ..
            } => (year, month, day),
        }
    }

    /// User-facing message naming the day, month and year, e.g.
    /// `"date 30 Esfand 1402 is invalid"`.
    pub fn message(&self, locale: Locale) -> String {
        let (year, month, day) = self.components();
        locale.invalid_date(year, month, day)
    }
}

/// Failure converting a Gregorian date to the Jalali calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error(
        "Gregorian date {0} is outside the supported Jalali years {min}-{max}",
        min = MIN_JALALI_YEAR,
        max = MAX_JALALI_YEAR
    )]
    OutOfRange(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Invalid [`crate::AgePolicy`] or [`crate::ConverterConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("age bounds are inverted: min_age {min_age} is greater than max_age {max_age}")]
    InvertedBounds { min_age: i32, max_age: i32 },

    #[error("age bound must not be negative, got {0}")]
    NegativeAge(i32),
}
