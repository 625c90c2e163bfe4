//! Calendar-aware age arithmetic.
//!
//! Ages are counted in Jalali years: a birthday is passed on the same Jalali
//! month and day, not after a fixed number of days. Near Nowruz this differs
//! from counting Gregorian years.

use serde::Serialize;
use tracing::debug;

use crate::{AgePolicy, GregorianDate, JalaliDate, Locale};

/// Why an age check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeRejection {
    /// Birth date missing, malformed, or outside the convertible range.
    Unparseable,
    /// The date the age is measured on has no Jalali equivalent.
    ReferenceOutOfRange,
    TooYoung,
    TooOld,
}

/// Outcome of an age check, ready to show next to a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeVerdict {
    pub valid:   bool,
    pub age:     Option<i32>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason:  Option<AgeRejection>,
}

/// Whole Jalali years between two Jalali dates. Negative when `birth` is after `as_of`.
pub fn age_between(birth: &JalaliDate, as_of: &JalaliDate) -> i32 {
    let years = i32::from(as_of.year()) - i32::from(birth.year());
    if as_of.month_day() < birth.month_day() {
        years - 1
    } else {
        years
    }
}

/// Age in Jalali years on `as_of` of someone born on `birth_date`.
///
/// `birth_date` is raw user text in `YYYY-MM-DD` form and may use Persian digits.
/// Returns `None` when it does not parse or either date cannot be converted.
pub fn compute_age_in_jalali_years(birth_date: &str, as_of: &GregorianDate) -> Option<i32> {
    let birth = match GregorianDate::parse_lenient(birth_date) {
        Ok(date) => date,
        Err(error) => {
            debug!(input = birth_date, %error, "birth date did not parse");
            return None;
        },
    };
    let birth = birth.to_jalali().ok()?;
    let as_of = as_of.to_jalali().ok()?;
    Some(age_between(&birth, &as_of))
}

impl AgePolicy {
    /// Checks `birth_date` against this policy as of `as_of`.
    ///
    /// Fails closed: an unparseable date is never valid.
    pub fn check(&self, birth_date: &str, as_of: &GregorianDate, locale: Locale) -> AgeVerdict {
        if let Err(error) = as_of.to_jalali() {
            debug!(%as_of, %error, "age reference date not convertible");
            return AgeVerdict {
                valid:   false,
                age:     None,
                message: locale.reference_date_out_of_range(as_of),
                reason:  Some(AgeRejection::ReferenceOutOfRange),
            };
        }

        let Some(age) = compute_age_in_jalali_years(birth_date, as_of) else {
            return AgeVerdict {
                valid:   false,
                age:     None,
                message: locale.unparseable_birth_date(),
                reason:  Some(AgeRejection::Unparseable),
            };
        };

        let (min_age, max_age) = (self.min_age(), self.max_age());
        let reason = if age < min_age {
            Some(AgeRejection::TooYoung)
        } else if age > max_age {
            Some(AgeRejection::TooOld)
        } else {
            None
        };

        let message = if reason.is_none() {
            locale.age_in_range(age, min_age, max_age)
        } else {
            debug!(age, min_age, max_age, ?reason, "age rejected");
            locale.age_out_of_range(age, min_age, max_age)
        };

        AgeVerdict {
            valid: reason.is_none(),
            age: Some(age),
            message,
            reason,
        }
    }
}

/// Checks that the age on `as_of` lies within `[min_age, max_age]`, with an
/// English message.
///
/// Bounds are taken as given; inverted bounds reject every age.
pub fn validate_age(
    birth_date: &str,
    min_age: i32,
    max_age: i32,
    as_of: &GregorianDate,
) -> AgeVerdict {
    let policy = AgePolicy::unchecked(min_age, max_age);
    policy.check(birth_date, as_of, Locale::English)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{greg, jalali};

    fn birth_for(year: i32, month: i32, day: i32) -> String {
        crate::jalali_to_gregorian(year, month, day).unwrap().to_string()
    }

    #[test]
    fn test_age_on_nowruz_plus_one() {
        // 2024-03-21 is 1403/01/02
        let as_of = greg(2024, 3, 21);
        assert_eq!(compute_age_in_jalali_years(&birth_for(1390, 1, 1), &as_of), Some(13));
        assert_eq!(compute_age_in_jalali_years(&birth_for(1390, 1, 2), &as_of), Some(13));
        assert_eq!(compute_age_in_jalali_years(&birth_for(1390, 1, 3), &as_of), Some(12));
    }

    #[test]
    fn test_age_uses_jalali_not_gregorian_years() {
        // Born 2011-03-21 (1390/01/01). On 2024-03-20 (1403/01/01) the Jalali
        // birthday is today while the Gregorian one is still a day away.
        let as_of = greg(2024, 3, 20);
        assert_eq!(compute_age_in_jalali_years("2011-03-21", &as_of), Some(13));
    }

    #[test]
    fn test_age_accepts_persian_digits() {
        let as_of = greg(2024, 3, 21);
        assert_eq!(compute_age_in_jalali_years("۲۰۱۱-۰۳-۲۱", &as_of), Some(13));
    }

    #[test]
    fn test_age_unparseable() {
        let as_of = greg(2024, 3, 21);
        assert_eq!(compute_age_in_jalali_years("", &as_of), None);
        assert_eq!(compute_age_in_jalali_years("not a date", &as_of), None);
        assert_eq!(compute_age_in_jalali_years("2011-02-30", &as_of), None);
        assert_eq!(compute_age_in_jalali_years("0500-01-01", &as_of), None);
    }

    #[test]
    fn test_age_between_negative_when_born_later() {
        assert_eq!(age_between(&jalali(1403, 5, 1), &jalali(1402, 5, 1)), -1);
    }

    #[test]
    fn test_validate_age_bounds() {
        let as_of = greg(2024, 3, 21);

        let nine = validate_age(&birth_for(1393, 1, 3), 10, 100, &as_of);
        assert_eq!(nine.age, Some(9));
        assert!(!nine.valid);
        assert_eq!(nine.reason, Some(AgeRejection::TooYoung));
        assert_eq!(nine.message, "age 9 is outside the allowed range 10-100");

        let ten = validate_age(&birth_for(1393, 1, 2), 10, 100, &as_of);
        assert_eq!(ten.age, Some(10));
        assert!(ten.valid);
        assert_eq!(ten.reason, None);
        assert_eq!(ten.message, "age 10 is within the allowed range 10-100");
    }

    #[test]
    fn test_validate_age_too_old() {
        let as_of = greg(2024, 3, 21);
        let verdict = validate_age(&birth_for(1302, 1, 1), 10, 100, &as_of);
        assert_eq!(verdict.age, Some(101));
        assert_eq!(verdict.reason, Some(AgeRejection::TooOld));
    }

    #[test]
    fn test_validate_age_fails_closed() {
        let verdict = validate_age("garbage", 10, 100, &greg(2024, 3, 21));
        assert!(!verdict.valid);
        assert_eq!(verdict.age, None);
        assert_eq!(verdict.reason, Some(AgeRejection::Unparseable));

        let inverted = validate_age(&birth_for(1390, 1, 1), 50, 10, &greg(2024, 3, 21));
        assert!(!inverted.valid);
    }

    #[test]
    fn test_unconvertible_reference_date_is_not_blamed_on_birth_date() {
        let verdict = validate_age("2011-03-21", 10, 100, &greg(9999, 12, 31));
        assert!(!verdict.valid);
        assert_eq!(verdict.age, None);
        assert_eq!(verdict.reason, Some(AgeRejection::ReferenceOutOfRange));
        assert_eq!(
            verdict.message,
            "date 9999-12-31 is outside the supported Jalali calendar range"
        );

        let garbage = validate_age("garbage", 10, 100, &greg(9999, 12, 31));
        assert_eq!(garbage.reason, Some(AgeRejection::ReferenceOutOfRange));
    }

    #[test]
    fn test_check_persian_message() {
        let policy = AgePolicy::default();
        let verdict = policy.check(&birth_for(1395, 1, 1), &greg(2024, 3, 21), Locale::Persian);
        assert!(!verdict.valid);
        assert!(verdict.message.contains("۸"));
        assert!(verdict.message.contains("۱۰۰"));
    }

    #[test]
    fn test_verdict_serializes_for_ui() {
        let verdict = validate_age("", 10, 100, &greg(2024, 3, 21));
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["age"], serde_json::Value::Null);
        assert_eq!(json["reason"], "unparseable");
    }
}
