//! Conversion entry points.
//!
//! The free functions are locale-neutral and return typed errors.
//! [`JalaliDateConverter`] wraps them with a [`ConverterConfig`] and renders
//! failures as localized text for form fields.

use tracing::{debug, trace};

use crate::{
    AgePolicy, AgeVerdict, ConverterConfig, GregorianDate, JalaliDate, Locale,
    age::compute_age_in_jalali_years,
    digits::normalize_digits,
    error::{ConfigError, ConversionError, JalaliDateError},
};

/// Converts a Gregorian date to its Jalali equivalent.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` outside the supported Jalali years.
pub fn gregorian_to_jalali(date: &GregorianDate) -> Result<JalaliDate, ConversionError> {
    let jalali = date.to_jalali()?;
    trace!(%date, %jalali, "gregorian to jalali");
    Ok(jalali)
}

/// Parses a `YYYY-MM-DD` string (Persian digits allowed) and converts it.
///
/// Unparseable or unconvertible input yields `None`: an unset date, not a fault.
pub fn gregorian_str_to_jalali(text: &str) -> Option<JalaliDate> {
    let parsed = GregorianDate::parse_lenient(text).map_err(ConversionError::from);
    match parsed.and_then(|date| gregorian_to_jalali(&date)) {
        Ok(jalali) => Some(jalali),
        Err(error) => {
            debug!(input = text, %error, "no Jalali value for input");
            None
        },
    }
}

/// Converts a Jalali (year, month, day) selection to a Gregorian date.
///
/// # Errors
/// Returns `JalaliDateError` when the triple is not a real Jalali day; use
/// [`JalaliDateError::message`] for the user-facing text.
///
/// ```
/// let date = jalali_date::jalali_to_gregorian(1403, 1, 1).unwrap();
/// assert_eq!(date.to_string(), "2024-03-20");
/// assert!(jalali_date::jalali_to_gregorian(1402, 12, 30).is_err());
/// ```
pub fn jalali_to_gregorian(year: i32, month: i32, day: i32) -> Result<GregorianDate, JalaliDateError> {
    let result = JalaliDate::new(year, month, day).and_then(|jalali| jalali.to_gregorian());
    match &result {
        Ok(date) => trace!(year, month, day, %date, "jalali to gregorian"),
        Err(error) => debug!(year, month, day, %error, "rejected Jalali date"),
    }
    result
}

/// Date conversion and validation bound to a locale and an age policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JalaliDateConverter {
    config: ConverterConfig,
}

impl JalaliDateConverter {
    /// # Errors
    /// Returns `ConfigError` if the configuration does not validate.
    pub fn new(config: ConverterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub const fn locale(&self) -> Locale {
        self.config.locale()
    }

    pub const fn age_policy(&self) -> AgePolicy {
        self.config.age_policy()
    }

    #[allow(clippy::unused_self)]
    pub fn normalize_digits(&self, input: &str) -> String {
        normalize_digits(input)
    }

    /// See [`gregorian_to_jalali`].
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` outside the supported Jalali years.
    #[allow(clippy::unused_self)]
    pub fn gregorian_to_jalali(&self, date: &GregorianDate) -> Result<JalaliDate, ConversionError> {
        gregorian_to_jalali(date)
    }

    /// See [`gregorian_str_to_jalali`].
    #[allow(clippy::unused_self)]
    pub fn gregorian_str_to_jalali(&self, text: &str) -> Option<JalaliDate> {
        gregorian_str_to_jalali(text)
    }

    /// See [`jalali_to_gregorian`].
    ///
    /// # Errors
    /// Returns the localized message naming the invalid day, month and year.
    pub fn jalali_to_gregorian(&self, year: i32, month: i32, day: i32) -> Result<GregorianDate, String> {
        jalali_to_gregorian(year, month, day).map_err(|error| error.message(self.locale()))
    }

    /// Formats a Gregorian date as a localized Jalali date, e.g. `"1 Farvardin 1403"`.
    pub fn display_jalali(&self, date: &GregorianDate) -> Option<String> {
        gregorian_to_jalali(date)
            .ok()
            .map(|jalali| jalali.format(self.locale()))
    }

    /// See [`compute_age_in_jalali_years`].
    #[allow(clippy::unused_self)]
    pub fn compute_age_in_jalali_years(&self, birth_date: &str, as_of: &GregorianDate) -> Option<i32> {
        compute_age_in_jalali_years(birth_date, as_of)
    }

    /// Checks `birth_date` against the configured age policy as of `as_of`.
    #[tracing::instrument(level = "debug", skip(self), fields(locale = %self.locale()))]
    pub fn validate_age(&self, birth_date: &str, as_of: &GregorianDate) -> AgeVerdict {
        self.age_policy().check(birth_date, as_of, self.locale())
    }

    /// Same as [`Self::validate_age`] as of today's local date.
    ///
    /// # Errors
    /// Only if the system clock is outside the representable years.
    pub fn validate_age_today(&self, birth_date: &str) -> Result<AgeVerdict, ConversionError> {
        let today = GregorianDate::today()?;
        Ok(self.validate_age(birth_date, &today))
    }
}
