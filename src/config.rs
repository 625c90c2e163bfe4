//! Converter configuration.
//!
//! Both structs deserialize with defaults for missing fields, so an empty
//! document yields the stock registration policy:
//!
//! ```
//! use jalali_date::{ConverterConfig, Locale};
//!
//! let config: ConverterConfig = serde_json::from_str(r#"{"locale": "fa"}"#).unwrap();
//! assert_eq!(config.locale(), Locale::Persian);
//! assert_eq!(config.age_policy().min_age(), 10);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    Locale,
    consts::{DEFAULT_MAX_AGE, DEFAULT_MIN_AGE},
    error::ConfigError,
};

/// Inclusive age bounds, in Jalali years, accepted at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgePolicy {
    min_age: i32,
    max_age: i32,
}

impl AgePolicy {
    /// # Errors
    /// Returns `ConfigError` if a bound is negative or `min_age > max_age`.
    pub fn new(min_age: i32, max_age: i32) -> Result<Self, ConfigError> {
        let policy = Self { min_age, max_age };
        policy.validate()?;
        Ok(policy)
    }

    /// Bounds taken as given. An inverted policy rejects every age.
    pub(crate) const fn unchecked(min_age: i32, max_age: i32) -> Self {
        Self { min_age, max_age }
    }

    pub const fn min_age(&self) -> i32 {
        self.min_age
    }

    pub const fn max_age(&self) -> i32 {
        self.max_age
    }

    pub const fn contains(&self, age: i32) -> bool {
        self.min_age <= age && age <= self.max_age
    }

    /// # Errors
    /// Returns `ConfigError` if a bound is negative or `min_age > max_age`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for bound in [self.min_age, self.max_age] {
            if bound < 0 {
                return Err(ConfigError::NegativeAge(bound));
            }
        }
        if self.min_age > self.max_age {
            return Err(ConfigError::InvertedBounds {
                min_age: self.min_age,
                max_age: self.max_age,
            });
        }
        Ok(())
    }
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

/// Settings for a [`crate::JalaliDateConverter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    locale:     Locale,
    age_policy: AgePolicy,
}

impl ConverterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale used for month names and messages.
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the registration age bounds.
    pub const fn with_age_policy(mut self, age_policy: AgePolicy) -> Self {
        self.age_policy = age_policy;
        self
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub const fn age_policy(&self) -> AgePolicy {
        self.age_policy
    }

    /// # Errors
    /// Returns the age policy's `ConfigError`, if any.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.age_policy.validate()
    }
}
