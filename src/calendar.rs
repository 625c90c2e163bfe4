//! Epoch-day arithmetic shared by both calendars.
//!
//! Every date is mapped to its Julian Day Number (JDN), a linear day count, and
//! converted from there. The Jalali side uses the 33-year cycle re-phased at the
//! years listed in [`JALALI_BREAKS`]; it is exact for every year in that table's
//! range and agrees with the astronomical calendar for the years in current use.
//!
//! All arithmetic is done in `i64` with truncating division. Jalali functions
//! return `None` outside the break table. [`jdn_to_gregorian`] scales its input
//! and overflows for day numbers far outside the calendar, so callers bound it
//! to years 1-9999 first.

use crate::consts::{JALALI_BREAKS, JALALI_YEAR_OFFSET};

/// Per-year data derived from the break table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct JalaliYearInfo {
    /// Years since the last leap year; `0` means the year itself is leap.
    pub(crate) leap: i64,
    /// Gregorian year in which the Jalali year begins.
    pub(crate) gregorian_year: i64,
    /// Day of March on which Farvardin 1 falls.
    pub(crate) march: i64,
}

impl JalaliYearInfo {
    pub(crate) const fn is_leap(&self) -> bool {
        self.leap == 0
    }
}

pub(crate) fn jalali_year_info(jy: i64) -> Option<JalaliYearInfo> {
    let first = i64::from(JALALI_BREAKS[0]);
    let last = i64::from(JALALI_BREAKS[JALALI_BREAKS.len() - 1]);
    if jy < first || jy >= last {
        return None;
    }

    let gy = jy + i64::from(JALALI_YEAR_OFFSET);
    let mut leap_j = -14;
    let mut jp = first;
    let mut jump = 0;

    for &brk in &JALALI_BREAKS[1..] {
        let jm = i64::from(brk);
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Some(JalaliYearInfo {
        leap,
        gregorian_year: gy,
        march,
    })
}

/// Julian Day Number of a proleptic Gregorian date.
pub(crate) const fn gregorian_to_jdn(gy: i64, gm: i64, gd: i64) -> i64 {
    let shifted = gy + (gm - 8) / 6 + 100_100;
    let d = shifted * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd - 34_840_408;
    d - shifted / 100 * 3 / 4 + 752
}

/// Proleptic Gregorian (year, month, day) of a Julian Day Number.
pub(crate) const fn jdn_to_gregorian(jdn: i64) -> (i64, i64, i64) {
    let mut j = 4 * jdn + 139_361_631;
    j += (4 * jdn + 183_187_720) / 146_097 * 3 / 4 * 4 - 3908;
    let i = (j % 1461) / 4 * 5 + 308;
    let gd = (i % 153) / 5 + 1;
    let gm = (i / 153) % 12 + 1;
    let gy = j / 1461 - 100_100 + (8 - gm) / 6;
    (gy, gm, gd)
}

/// Julian Day Number of a Jalali date. Month and day are not range-checked.
pub(crate) fn jalali_to_jdn(jy: i64, jm: i64, jd: i64) -> Option<i64> {
    let info = jalali_year_info(jy)?;
    Some(
        gregorian_to_jdn(info.gregorian_year, 3, info.march) + (jm - 1) * 31 - jm / 7 * (jm - 7) + jd
            - 1,
    )
}

/// Jalali (year, month, day) of a Julian Day Number.
pub(crate) fn jdn_to_jalali(jdn: i64) -> Option<(i64, i64, i64)> {
    let (gy, _, _) = jdn_to_gregorian(jdn);
    let mut jy = gy - i64::from(JALALI_YEAR_OFFSET);
    let info = jalali_year_info(jy)?;
    let nowruz = gregorian_to_jdn(gy, 3, info.march);

    let mut k = jdn - nowruz;
    if k >= 0 {
        if k <= 185 {
            return Some((jy, 1 + k / 31, k % 31 + 1));
        }
        k -= 186;
    } else {
        // Before Nowruz: the tail of the previous Jalali year.
        jy -= 1;
        k += 179;
        if info.leap == 1 {
            k += 1;
        }
    }
    Some((jy, 7 + k / 30, k % 30 + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_epoch_jdn() {
        assert_eq!(gregorian_to_jdn(1970, 1, 1), 2_440_588);
        assert_eq!(jdn_to_gregorian(2_440_588), (1970, 1, 1));
    }

    #[test]
    fn test_gregorian_jdn_matches_chrono() {
        use chrono::{Datelike, NaiveDate};

        // 0001-01-01 is day 1 counted from the common era.
        let ce_offset = gregorian_to_jdn(1, 1, 1) - 1;
        let mut date = NaiveDate::from_ymd_opt(1899, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2201, 1, 1).unwrap();
        while date < end {
            let jdn = gregorian_to_jdn(
                i64::from(date.year()),
                i64::from(date.month()),
                i64::from(date.day()),
            );
            assert_eq!(jdn - ce_offset, i64::from(date.num_days_from_ce()), "{date}");
            assert_eq!(
                jdn_to_gregorian(jdn),
                (i64::from(date.year()), i64::from(date.month()), i64::from(date.day()))
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_leap_years_around_present() {
        let leaps: Vec<i64> = (1395..1412)
            .filter(|&y| jalali_year_info(y).unwrap().is_leap())
            .collect();
        assert_eq!(leaps, vec![1395, 1399, 1403, 1408]);
    }

    #[test]
    fn test_year_info_outside_break_table() {
        assert!(jalali_year_info(-62).is_none());
        assert!(jalali_year_info(3178).is_none());
        assert!(jalali_year_info(-61).is_some());
        assert!(jalali_year_info(3177).is_some());
    }

    #[test]
    fn test_nowruz_dates() {
        struct TestCase {
            jalali_year: i64,
            gregorian:   (i64, i64, i64),
        }

        let cases = [
            TestCase {
                jalali_year: 1300,
                gregorian:   (1921, 3, 21),
            },
            TestCase {
                jalali_year: 1390,
                gregorian:   (2011, 3, 21),
            },
            TestCase {
                jalali_year: 1403,
                gregorian:   (2024, 3, 20),
            },
            TestCase {
                jalali_year: 1404,
                gregorian:   (2025, 3, 21),
            },
        ];

        for case in &cases {
            let jdn = jalali_to_jdn(case.jalali_year, 1, 1).unwrap();
            assert_eq!(jdn_to_gregorian(jdn), case.gregorian, "Nowruz {}", case.jalali_year);
        }
    }

    #[test]
    fn test_last_day_of_leap_year() {
        let jdn = jalali_to_jdn(1403, 12, 30).unwrap();
        assert_eq!(jdn_to_gregorian(jdn), (2025, 3, 20));
        assert_eq!(jdn_to_jalali(jdn), Some((1403, 12, 30)));
        assert_eq!(jdn_to_jalali(jdn + 1), Some((1404, 1, 1)));
    }

    #[test]
    fn test_month_starts_of_second_half() {
        // Mehr 1 follows the six 31-day months.
        let farvardin = jalali_to_jdn(1402, 1, 1).unwrap();
        let mehr = jalali_to_jdn(1402, 7, 1).unwrap();
        assert_eq!(mehr - farvardin, 186);
        assert_eq!(jdn_to_jalali(mehr), Some((1402, 7, 1)));
        assert_eq!(jdn_to_jalali(mehr - 1), Some((1402, 6, 31)));
    }
}
