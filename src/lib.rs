//! Conversion between the Jalali (Persian solar Hijri) and Gregorian calendars.
//!
//! Dates cross the API boundary as ISO `YYYY-MM-DD` Gregorian strings or as
//! Jalali `(year, month, day)` integer triples. Every operation is a pure
//! function; malformed input comes back as a typed error, `None`, or a
//! failed [`AgeVerdict`], never a panic.
//!
//! ```
//! use jalali_date::{GregorianDate, Locale, gregorian_to_jalali, jalali_to_gregorian};
//!
//! let nowruz: GregorianDate = "2024-03-20".parse().unwrap();
//! let jalali = gregorian_to_jalali(&nowruz).unwrap();
//! assert_eq!(jalali.to_tuple(), (1403, 1, 1));
//! assert_eq!(jalali.format(Locale::English), "1 Farvardin 1403");
//!
//! let err = jalali_to_gregorian(1402, 12, 30).unwrap_err();
//! assert_eq!(err.message(Locale::English), "date 30 Esfand 1402 is invalid");
//! ```

mod age;
mod calendar;
mod config;
mod consts;
mod converter;
mod digits;
mod error;
mod gregorian;
mod jalali;
mod locale;
mod picker;
mod prelude;
mod types;

pub use age::{AgeRejection, AgeVerdict, age_between, compute_age_in_jalali_years, validate_age};
pub use config::{AgePolicy, ConverterConfig};
pub use consts::*;
pub use converter::{
    JalaliDateConverter, gregorian_str_to_jalali, gregorian_to_jalali, jalali_to_gregorian,
};
pub use digits::{normalize_digits, to_persian_digits};
pub use error::{ConfigError, ConversionError, JalaliDateError};
pub use gregorian::{GregorianDate, ParseError};
pub use jalali::{JalaliDate, is_jalali_leap_year, jalali_month_length};
pub use locale::{Locale, UnknownLocale};
pub use picker::{DatePicker, PickerEvent};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

#[cfg(test)]
mod test_utils {
    use crate::{GregorianDate, JalaliDate};

    pub fn greg(year: u16, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).expect("valid Gregorian test date")
    }

    pub fn jalali(year: i32, month: i32, day: i32) -> JalaliDate {
        JalaliDate::new(year, month, day).expect("valid Jalali test date")
    }
}
