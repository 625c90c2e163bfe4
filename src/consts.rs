/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month, in either calendar
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Smallest supported Jalali year
pub const MIN_JALALI_YEAR: i32 = 1;
/// Largest supported Jalali year. The break table ends at 3178, so 3177 cannot be
/// reached from the Gregorian side.
pub const MAX_JALALI_YEAR: i32 = 3176;

/// Last month with 31 days (Shahrivar)
pub const JALALI_LONG_MONTHS_END: u8 = 6;
/// Month number for Esfand, the only month whose length depends on the leap rule
pub const ESFAND: u8 = 12;
/// Days in Esfand of a common year
pub const ESFAND_DAYS: u8 = 29;
/// Days in Esfand of a leap year
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each Jalali month (index 0 unused); Esfand shows its common-year length
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Jalali years at which the 33-year leap cycle is re-phased.
pub(crate) const JALALI_BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394,
    2456, 3178,
];

/// Offset between a Jalali year and the Gregorian year in which it starts
pub(crate) const JALALI_YEAR_OFFSET: i32 = 621;

/// Persian digit glyphs, indexed by value
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Arabic-Indic digit glyphs, indexed by value
pub const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// English transliterations of the Jalali month names (index 0 unused)
pub const JALALI_MONTH_NAMES_EN: [&str; 13] = [
    "",
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Persian-script Jalali month names (index 0 unused)
pub const JALALI_MONTH_NAMES_FA: [&str; 13] = [
    "", "فروردین", "اردیبهشت", "خرداد", "تیر", "مرداد", "شهریور", "مهر", "آبان", "آذر", "دی", "بهمن",
    "اسفند",
];

/// Default lower bound for registration age
pub const DEFAULT_MIN_AGE: i32 = 10;
/// Default upper bound for registration age
pub const DEFAULT_MAX_AGE: i32 = 100;
