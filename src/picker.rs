//! Selection state behind a Jalali day/month/year dropdown picker.
//!
//! The picker is bound to a Gregorian value owned by the caller. Selections made
//! by the user emit a [`PickerEvent`]; values pushed in by the caller through
//! [`DatePicker::set_value`] only update the selection, so the picker's own output
//! is never echoed back as new input.

use std::ops::RangeInclusive;

use crate::{GregorianDate, JalaliDate, Locale, converter, jalali::jalali_month_length};

/// Days listed while the year or month is still unknown.
const MAX_DAYS_IN_MONTH: u8 = 31;

/// Result of a user selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// All three parts are chosen and form a real date.
    Changed(GregorianDate),
    /// All three parts are chosen but the date does not exist.
    Invalid(String),
    /// At least one part is still unselected; the bound value should be unset.
    Incomplete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePicker {
    locale: Locale,
    year:   Option<i32>,
    month:  Option<i32>,
    day:    Option<i32>,
}

impl DatePicker {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub const fn selection(&self) -> (Option<i32>, Option<i32>, Option<i32>) {
        (self.year, self.month, self.day)
    }

    /// Years offered for selection, most recent first.
    pub fn year_options(years: RangeInclusive<i32>) -> Vec<i32> {
        years.rev().collect()
    }

    /// `(number, name)` for every month, in the picker's locale.
    pub fn month_options(&self) -> Vec<(u8, &'static str)> {
        (1..=12)
            .filter_map(|m| self.locale.month_name(m).map(|name| (m, name)))
            .collect()
    }

    /// Days offered for the current year and month.
    pub fn day_options(&self) -> RangeInclusive<u8> {
        let last = match (self.year, self.month) {
            (Some(year), Some(month)) => jalali_month_length(year, month).unwrap_or(MAX_DAYS_IN_MONTH),
            _ => MAX_DAYS_IN_MONTH,
        };
        1..=last
    }

    pub fn select_year(&mut self, year: Option<i32>) -> PickerEvent {
        self.year = year;
        self.emit()
    }

    pub fn select_month(&mut self, month: Option<i32>) -> PickerEvent {
        self.month = month;
        self.emit()
    }

    pub fn select_day(&mut self, day: Option<i32>) -> PickerEvent {
        self.day = day;
        self.emit()
    }

    /// Mirrors the bound Gregorian value into the selection without emitting.
    ///
    /// Unset or unparseable values clear the selection.
    pub fn set_value(&mut self, value: Option<&str>) {
        match value.and_then(converter::gregorian_str_to_jalali) {
            Some(date) => self.set_jalali(date),
            None => self.clear(),
        }
    }

    fn set_jalali(&mut self, date: JalaliDate) {
        self.year = Some(i32::from(date.year()));
        self.month = Some(i32::from(date.month()));
        self.day = Some(i32::from(date.day()));
    }

    pub fn clear(&mut self) {
        self.year = None;
        self.month = None;
        self.day = None;
    }

    fn emit(&self) -> PickerEvent {
        let (Some(year), Some(month), Some(day)) = (self.year, self.month, self.day) else {
            return PickerEvent::Incomplete;
        };
        match converter::jalali_to_gregorian(year, month, day) {
            Ok(date) => PickerEvent::Changed(date),
            Err(error) => PickerEvent::Invalid(error.message(self.locale)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::greg;

    #[test]
    fn test_incomplete_until_all_parts_selected() {
        let mut picker = DatePicker::new(Locale::English);
        assert_eq!(picker.select_day(Some(1)), PickerEvent::Incomplete);
        assert_eq!(picker.select_month(Some(1)), PickerEvent::Incomplete);
        assert_eq!(
            picker.select_year(Some(1403)),
            PickerEvent::Changed(greg(2024, 3, 20))
        );
        assert_eq!(picker.select_month(None), PickerEvent::Incomplete);
    }

    #[test]
    fn test_invalid_selection_reports_message() {
        let mut picker = DatePicker::new(Locale::English);
        picker.select_year(Some(1402));
        picker.select_month(Some(12));
        assert_eq!(
            picker.select_day(Some(30)),
            PickerEvent::Invalid("date 30 Esfand 1402 is invalid".to_owned())
        );
    }

    #[test]
    fn test_set_value_is_silent_and_mirrors() {
        let mut picker = DatePicker::new(Locale::Persian);
        picker.set_value(Some("2025-03-20"));
        assert_eq!(picker.selection(), (Some(1403), Some(12), Some(30)));

        picker.set_value(Some("garbage"));
        assert_eq!(picker.selection(), (None, None, None));

        picker.set_value(Some("۲۰۲۴-۰۳-۲۰"));
        assert_eq!(picker.selection(), (Some(1403), Some(1), Some(1)));

        picker.set_value(None);
        assert_eq!(picker.selection(), (None, None, None));
    }

    #[test]
    fn test_day_options_follow_month_and_leap_year() {
        let mut picker = DatePicker::new(Locale::English);
        assert_eq!(picker.day_options(), 1..=31);

        picker.select_year(Some(1402));
        picker.select_month(Some(12));
        assert_eq!(picker.day_options(), 1..=29);

        picker.select_year(Some(1403));
        assert_eq!(picker.day_options(), 1..=30);

        picker.select_month(Some(8));
        assert_eq!(picker.day_options(), 1..=30);
    }

    #[test]
    fn test_options_lists() {
        let picker = DatePicker::new(Locale::Persian);
        let months = picker.month_options();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], (1, "فروردین"));
        assert_eq!(months[11], (12, "اسفند"));

        assert_eq!(DatePicker::year_options(1400..=1403), vec![1403, 1402, 1401, 1400]);
    }
}
