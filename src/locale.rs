//! Display locale for month names and user-facing messages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    GregorianDate,
    consts::{JALALI_MONTH_NAMES_EN, JALALI_MONTH_NAMES_FA},
    digits::to_persian_digits,
    prelude::*,
};

/// Language used for month names and validation messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Locale {
    /// Transliterated month names, ASCII digits.
    #[default]
    #[display(fmt = "en")]
    #[serde(rename = "en")]
    English,
    /// Persian-script month names, Persian digits.
    #[display(fmt = "fa")]
    #[serde(rename = "fa")]
    Persian,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts a bare language tag or one with a region (`fa-IR`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s.trim().split(['-', '_']).next().unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::English),
            "fa" => Ok(Self::Persian),
            _ => Err(UnknownLocale(s.to_owned())),
        }
    }
}

impl Locale {
    /// Name of a Jalali month, `None` outside `1..=12`.
    pub fn month_name(self, month: u8) -> Option<&'static str> {
        let names = match self {
            Self::English => &JALALI_MONTH_NAMES_EN,
            Self::Persian => &JALALI_MONTH_NAMES_FA,
        };
        names.get(usize::from(month)).copied().filter(|name| !name.is_empty())
    }

    /// Human label for a possibly invalid month number: its name when there is one,
    /// the number itself otherwise.
    pub fn month_label(self, month: i32) -> String {
        u8::try_from(month)
            .ok()
            .and_then(|m| self.month_name(m))
            .map_or_else(|| self.number(month), str::to_owned)
    }

    /// Renders an integer with the locale's digit glyphs.
    pub fn number(self, value: i32) -> String {
        self.digits(&value.to_string())
    }

    pub fn digits(self, text: &str) -> String {
        match self {
            Self::English => text.to_owned(),
            Self::Persian => to_persian_digits(text),
        }
    }

    /// e.g. `"1 Farvardin 1403"` / `"۱ فروردین ۱۴۰۳"`.
    pub fn format_date(self, year: i32, month: i32, day: i32) -> String {
        format!(
            "{} {} {}",
            self.number(day),
            self.month_label(month),
            self.number(year)
        )
    }

    pub(crate) fn invalid_date(self, year: i32, month: i32, day: i32) -> String {
        let date = self.format_date(year, month, day);
        match self {
            Self::English => format!("date {date} is invalid"),
            Self::Persian => format!("تاریخ {date} معتبر نیست"),
        }
    }

    pub(crate) fn unparseable_birth_date(self) -> String {
        match self {
            Self::English => "birth date is missing or invalid".to_owned(),
            Self::Persian => "تاریخ تولد وارد نشده یا نامعتبر است".to_owned(),
        }
    }

    pub(crate) fn reference_date_out_of_range(self, date: &GregorianDate) -> String {
        let date = self.digits(&date.to_string());
        match self {
            Self::English => format!("date {date} is outside the supported Jalali calendar range"),
            Self::Persian => format!("تاریخ {date} خارج از بازه پشتیبانی‌شده تقویم شمسی است"),
        }
    }

    pub(crate) fn age_in_range(self, age: i32, min_age: i32, max_age: i32) -> String {
        let (age, min, max) = (self.number(age), self.number(min_age), self.number(max_age));
        match self {
            Self::English => format!("age {age} is within the allowed range {min}-{max}"),
            Self::Persian => format!("سن {age} سال در بازه مجاز {min} تا {max} سال است"),
        }
    }

    pub(crate) fn age_out_of_range(self, age: i32, min_age: i32, max_age: i32) -> String {
        let (age, min, max) = (self.number(age), self.number(min_age), self.number(max_age));
        match self {
            Self::English => format!("age {age} is outside the allowed range {min}-{max}"),
            Self::Persian => format!("سن {age} سال است؛ سن باید بین {min} تا {max} سال باشد"),
        }
    }
}
