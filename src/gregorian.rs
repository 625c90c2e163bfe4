use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::{
    DATE_SEPARATOR, MAX_YEAR, calendar,
    digits::normalize_digits,
    error::{ConversionError, JalaliDateError},
    jalali::JalaliDate,
    prelude::*,
    types::{Day, Month, Year},
};

/// A proleptic Gregorian calendar date.
///
/// The canonical text form is `YYYY-MM-DD`, used for `Display`, `FromStr` and
/// serde. Fields are ordered so the derived `Ord` is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Julian Day Numbers of 0001-01-01 and 9999-12-31.
const FIRST_JULIAN_DAY: i64 = calendar::gregorian_to_jdn(1, 1, 1);
const LAST_JULIAN_DAY: i64 = calendar::gregorian_to_jdn(MAX_YEAR as i64, 12, 31);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Year out of range: {} (must be 1-{})", "_0", MAX_YEAR)]
    YearOutOfRange(i64),
    #[display(fmt = "Julian day {} is outside years 1-{}", "_0", MAX_YEAR)]
    JulianDayOutOfRange(i64),
    #[display(fmt = "Invalid month: {_0} (must be 1-12)")]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl GregorianDate {
    /// Creates a date from already validated components.
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// # Errors
    /// Returns `ParseError` naming the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Parses user input that may carry Persian or Arabic-Indic digits.
    ///
    /// # Errors
    /// Same as [`FromStr`], after digit normalization.
    pub fn parse_lenient(text: &str) -> Result<Self, ParseError> {
        normalize_digits(text).parse()
    }

    /// Julian Day Number of this date.
    pub const fn julian_day(&self) -> i64 {
        calendar::gregorian_to_jdn(self.year() as i64, self.month() as i64, self.day() as i64)
    }

    /// # Errors
    /// Returns `ParseError::JulianDayOutOfRange` when the day falls outside years 1-9999.
    pub fn from_julian_day(jdn: i64) -> Result<Self, ParseError> {
        if !(FIRST_JULIAN_DAY..=LAST_JULIAN_DAY).contains(&jdn) {
            return Err(ParseError::JulianDayOutOfRange(jdn));
        }
        let (y, m, d) = calendar::jdn_to_gregorian(jdn);
        let year = u16::try_from(y).map_err(|_| ParseError::YearOutOfRange(y))?;
        // month and day always come back in range from the epoch-day arithmetic
        Self::new(year, m as u8, d as u8)
    }

    /// Converts to the Jalali calendar.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` when the Jalali year falls outside the
    /// supported range.
    pub fn to_jalali(&self) -> Result<JalaliDate, ConversionError> {
        let out_of_range = || ConversionError::OutOfRange(self.to_string());
        let (jy, jm, jd) = calendar::jdn_to_jalali(self.julian_day()).ok_or_else(out_of_range)?;
        let narrow = |v: i64| i32::try_from(v).map_err(|_| out_of_range());
        JalaliDate::new(narrow(jy)?, narrow(jm)?, narrow(jd)?).map_err(|e| match e {
            JalaliDateError::YearOutOfRange { .. } => out_of_range(),
            other => {
                tracing::warn!(date = %self, error = %other, "epoch-day conversion produced an invalid Jalali date");
                out_of_range()
            },
        })
    }

    /// Today's date in the local time zone.
    ///
    /// # Errors
    /// Only fails if the system clock reports a year outside 1-9999.
    pub fn today() -> Result<Self, ParseError> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    /// The same day as a `chrono` date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(self.day()),
        )
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = ParseError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(value.year())
            .map_err(|_| ParseError::YearOutOfRange(i64::from(value.year())))?;
        // chrono guarantees month in 1..=12 and day in 1..=31
        Self::new(year, value.month() as u8, value.day() as u8)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`. A trailing time part (`2024-03-20T00:00:00Z`), as sent
    /// by JSON backends, is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let date_part = trimmed
            .split_once(['T', ' '])
            .map_or(trimmed, |(date, _time)| date);

        let parts: Vec<&str> = date_part.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {s}"
            )));
        }

        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;
        Self::new(year, month, day)
    }
}

impl GregorianDate {
    fn check_digits(s: &str) -> Result<(), ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        Ok(())
    }

    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        Self::check_digits(s)?;
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        Self::check_digits(s)?;
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
