//! Digit glyph normalization.
//!
//! User input from Persian keyboards arrives with Persian (`۰`–`۹`) or
//! Arabic-Indic (`٠`–`٩`) digits. Both are mapped to ASCII before any numeric
//! parsing. The mapping is total: nothing is ever rejected here.

use crate::consts::{ARABIC_INDIC_DIGITS, PERSIAN_DIGITS};

/// ASCII value of a Persian or Arabic-Indic digit glyph.
fn ascii_digit(c: char) -> Option<char> {
    PERSIAN_DIGITS
        .iter()
        .position(|&d| d == c)
        .or_else(|| ARABIC_INDIC_DIGITS.iter().position(|&d| d == c))
        .and_then(|value| char::from_digit(u32::try_from(value).ok()?, 10))
}

/// Replaces every Persian and Arabic-Indic digit with its ASCII equivalent.
/// All other characters pass through unchanged.
///
/// ```
/// assert_eq!(jalali_date::normalize_digits("۱۳۸۰/۰۱/۰۱"), "1380/01/01");
/// ```
pub fn normalize_digits(input: &str) -> String {
    input.chars().map(|c| ascii_digit(c).unwrap_or(c)).collect()
}

/// Replaces every ASCII digit with its Persian glyph.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|value| PERSIAN_DIGITS.get(value as usize).copied())
                .unwrap_or(c)
        })
        .collect()
}
