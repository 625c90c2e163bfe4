//! Jalali (Persian solar Hijri) calendar dates.

use serde::{Deserialize, Serialize};

use crate::{
    Locale,
    calendar::{self, jalali_year_info},
    consts::{
        ESFAND, ESFAND_DAYS, ESFAND_DAYS_LEAP, JALALI_DAYS_IN_MONTH, JALALI_LONG_MONTHS_END,
        MAX_JALALI_YEAR, MAX_MONTH, MIN_DAY, MIN_JALALI_YEAR,
    },
    error::JalaliDateError,
    gregorian::GregorianDate,
    prelude::*,
};

/// A valid day of the Jalali calendar.
///
/// Months 1-6 have 31 days, months 7-11 have 30, and Esfand (12) has 29, or 30
/// in a leap year. Years are limited to `MIN_JALALI_YEAR..=MAX_JALALI_YEAR`.
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}/{:02}/{:02}", "year", "month", "day")]
#[serde(try_from = "RawJalaliDate", into = "RawJalaliDate")]
pub struct JalaliDate {
    year:  u16,
    month: u8,
    day:   u8,
}

/// Unchecked wire form of [`JalaliDate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawJalaliDate {
    year:  i32,
    month: i32,
    day:   i32,
}

impl TryFrom<RawJalaliDate> for JalaliDate {
    type Error = JalaliDateError;

    fn try_from(raw: RawJalaliDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl From<JalaliDate> for RawJalaliDate {
    fn from(date: JalaliDate) -> Self {
        Self {
            year:  i32::from(date.year),
            month: i32::from(date.month),
            day:   i32::from(date.day),
        }
    }
}

/// Whether `year` has a 30-day Esfand. Years outside the supported range are never leap.
pub fn is_jalali_leap_year(year: i32) -> bool {
    (MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year)
        && jalali_year_info(i64::from(year)).is_some_and(|info| info.is_leap())
}

/// Number of days in a Jalali month, `None` when the month is not in `1..=12`.
pub fn jalali_month_length(year: i32, month: i32) -> Option<u8> {
    let month = u8::try_from(month).ok().filter(|m| (1..=MAX_MONTH).contains(m))?;
    if month == ESFAND {
        return Some(if is_jalali_leap_year(year) {
            ESFAND_DAYS_LEAP
        } else {
            ESFAND_DAYS
        });
    }
    Some(JALALI_DAYS_IN_MONTH[usize::from(month)])
}

impl JalaliDate {
    /// Validates a Jalali (year, month, day) triple.
    ///
    /// Takes `i32` so that any integer a caller has in hand, including negative or
    /// oversized values, is reported as an error rather than truncated.
    ///
    /// # Errors
    /// `YearOutOfRange`, `InvalidMonth` or `InvalidDay`, checked in that order.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, JalaliDateError> {
        if !(MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) {
            return Err(JalaliDateError::YearOutOfRange { year, month, day });
        }
        let Some(days_in_month) = jalali_month_length(year, month) else {
            return Err(JalaliDateError::InvalidMonth { year, month, day });
        };
        if day < i32::from(MIN_DAY) || day > i32::from(days_in_month) {
            return Err(JalaliDateError::InvalidDay {
                year,
                month,
                day,
                days_in_month,
            });
        }

        // ranges checked above
        Ok(Self {
            year:  year as u16,
            month: month as u8,
            day:   day as u8,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// `(year, month, day)` as plain integers.
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year, self.month, self.day)
    }

    pub fn is_leap_year(&self) -> bool {
        is_jalali_leap_year(i32::from(self.year))
    }

    pub fn days_in_month(&self) -> u8 {
        jalali_month_length(i32::from(self.year), i32::from(self.month)).unwrap_or(ESFAND_DAYS)
    }

    /// 1-based position of this day within its year.
    pub const fn day_of_year(&self) -> u16 {
        let month = self.month as u16;
        let full_months = month - 1;
        let long = if full_months < JALALI_LONG_MONTHS_END as u16 {
            full_months
        } else {
            JALALI_LONG_MONTHS_END as u16
        };
        long * 31 + (full_months - long) * 30 + self.day as u16
    }

    /// `(month, day)` for comparing positions within a year regardless of the year.
    pub const fn month_day(&self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Month name in the given locale.
    pub fn month_name(&self, locale: Locale) -> &'static str {
        locale.month_name(self.month).unwrap_or_default()
    }

    /// Human-readable form, e.g. `"1 Farvardin 1403"`.
    pub fn format(&self, locale: Locale) -> String {
        locale.format_date(i32::from(self.year), i32::from(self.month), i32::from(self.day))
    }

    pub fn julian_day(&self) -> Option<i64> {
        calendar::jalali_to_jdn(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        )
    }

    /// Converts to the proleptic Gregorian calendar.
    ///
    /// # Errors
    /// `YearOutOfRange` if the epoch-day table does not cover this year; cannot
    /// happen for a date built through [`JalaliDate::new`].
    pub fn to_gregorian(&self) -> Result<GregorianDate, JalaliDateError> {
        let out_of_range = JalaliDateError::YearOutOfRange {
            year:  i32::from(self.year),
            month: i32::from(self.month),
            day:   i32::from(self.day),
        };
        let jdn = self.julian_day().ok_or(out_of_range)?;
        GregorianDate::from_julian_day(jdn).map_err(|_| out_of_range)
    }
}
