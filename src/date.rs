//! Proleptic Gregorian dates and ordinal day numbers.

use std::fmt;
use std::ops::{Add, Sub};

use crate::math::{cdivmod, pydivmod};

/// Days from 1970-01-01 to 2000-03-01, the origin of the block arithmetic.
const UDAY_2000_03_01: i64 = 11017;
const DAYS_400Y: i64 = 146_097;
const DAYS_100Y: i64 = 36_524;
const DAYS_4Y: i64 = 1461;
const DAYS_1Y: i64 = 365;

/// A date in the proleptic Gregorian calendar.
///
/// Supported range is every date whose ordinal day (see [`date_to_uday`])
/// fits in an `i32`, roughly ±5.8 million years around the epoch.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a `Date` from Gregorian calendar fields.
    ///
    /// `year` is an astronomical year number, i.e. 1 BC is `0`, 2 BC is `-1`,
    /// etc.
    ///
    /// Returns `None` if the fields do not name a real day, or if the date is
    /// out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// assert!(Date::new(2024, 2, 29).is_some());
    /// assert!(Date::new(2023, 2, 29).is_none());
    /// ```
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 {
            return None;
        }
        if day > YearType::from_gregorian(year).days_in_month(month) {
            return None;
        }
        i32::try_from(days_from_civil(year as i64, month as i64, day as i64)).ok()?;
        Some(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u8 {
        self.month
    }
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Creates a `Date` from an ordinal day, see [`uday_to_date`].
    pub fn from_uday(uday: i32) -> Self {
        uday_to_date(uday)
    }
    /// Returns the ordinal day of the date, see [`date_to_uday`].
    pub fn uday(&self) -> i32 {
        date_to_uday(*self)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::new(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u8 {
        // 1970-01-01 was a Thursday
        (self.uday() as i64 + 3).rem_euclid(7) as u8 + 1
    }
}

/// Formats the date in ISO 8601 format.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        uday_to_date(self.uday() + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.uday() - rhs.uday()
    }
}

/// Converts a date to its ordinal day, counted from 1970-01-01 as day `0`.
///
/// # Example
///
/// ```
/// use nongli::{Date, date_to_uday};
///
/// assert_eq!(0, date_to_uday(Date::new(1970, 1, 1).unwrap()));
/// assert_eq!(-1, date_to_uday(Date::new(1969, 12, 31).unwrap()));
/// ```
pub fn date_to_uday(date: Date) -> i32 {
    // range checked when the date was built
    days_from_civil(date.year as i64, date.month as i64, date.day as i64) as i32
}

/// Converts an ordinal day back to its date. Inverse of [`date_to_uday`].
///
/// # Example
///
/// ```
/// use nongli::{Date, uday_to_date};
///
/// assert_eq!(Date::new(2024, 2, 29).unwrap(), uday_to_date(19782));
/// ```
pub fn uday_to_date(uday: i32) -> Date {
    let days = uday as i64 - UDAY_2000_03_01;
    let cycle = pydivmod(days, DAYS_400Y);
    let mut year = 2000 + 400 * cycle.quot;
    // the last day of a 400-year cycle would otherwise spill into a fifth century
    if cycle.rem == DAYS_400Y - 1 {
        return civil(year + 400, 2, 29);
    }
    let century = cdivmod(cycle.rem, DAYS_100Y);
    let olympiad = cdivmod(century.rem, DAYS_4Y);
    year += 100 * century.quot + 4 * olympiad.quot;
    // same for the last day of a 4-year block
    if olympiad.rem == DAYS_4Y - 1 {
        return civil(year + 4, 2, 29);
    }
    let annual = cdivmod(olympiad.rem, DAYS_1Y);
    year += annual.quot;
    let mut month = (5 * annual.rem + 2) / 153;
    let day = annual.rem - (153 * month + 2) / 5 + 1;
    month += 3;
    if month > 12 {
        month -= 12;
        year += 1;
    }
    civil(year, month, day)
}

#[inline]
fn civil(year: i64, month: i64, day: i64) -> Date {
    Date {
        year: year as i32,
        month: month as u8,
        day: day as u8,
    }
}

/// Days from 1970-01-01, with years starting in March so that the leap day
/// falls last.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let (mut y, mut m) = (year, month - 3);
    if m < 0 {
        y -= 1;
        m += 12;
    }
    let mut days = (153 * m + 2) / 5 + day - 1;
    let cycle = pydivmod(y, 400);
    days += (cycle.quot - 5) * DAYS_400Y;
    let century = cdivmod(cycle.rem, 100);
    days += century.quot * DAYS_100Y;
    let olympiad = cdivmod(century.rem, 4);
    days += olympiad.quot * DAYS_4Y + olympiad.rem * DAYS_1Y;
    days + UDAY_2000_03_01
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in `month` (`1..=12`) of a year of this type.
    pub fn days_in_month(&self, month: u8) -> u8 {
        match month {
            2 => 28 + self.is_leap() as u8,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::new(y, m, d).unwrap()
    }

    #[test]
    fn epoch() {
        assert_eq!(0, date_to_uday(date(1970, 1, 1)));
        assert_eq!(date(1970, 1, 1), uday_to_date(0));
        assert_eq!(11017, date(2000, 3, 1).uday());
    }

    #[test]
    fn to_uday() {
        for ((y, m, d), uday) in [
            ((1931, 9, 18), -13985),
            ((1976, 7, 28), 2400),
            ((2001, 9, 11), 11576),
            ((2008, 5, 12), 14011),
            ((2014, 3, 8), 16137),
            ((2022, 3, 21), 19072),
            ((1912, 1, 1), -21185),
            ((2048, 10, 7), 28769),
        ] {
            assert_eq!(uday, date_to_uday(date(y, m, d)), "{y:04}-{m:02}-{d:02}");
            assert_eq!(date(y, m, d), uday_to_date(uday));
        }
    }

    #[test]
    fn leap_days() {
        for (y, m, d) in [
            (2000, 2, 29),
            (1600, 2, 29),
            (2004, 2, 29),
            (1996, 2, 29),
            (-4, 2, 29),
            (2100, 2, 28),
            (2100, 3, 1),
            (1999, 12, 31),
            (2399, 12, 31),
            (2400, 2, 29),
        ] {
            let uday = date_to_uday(date(y, m, d));
            assert_eq!(date(y, m, d), uday_to_date(uday), "{y:04}-{m:02}-{d:02}");
        }
        assert_eq!(1, date(2100, 3, 1) - date(2100, 2, 28));
        assert_eq!(2, date(2000, 3, 1) - date(2000, 2, 28));
    }

    #[test]
    fn round_trip() {
        for uday in (-1_000_000..1_000_000).step_by(7) {
            let date = uday_to_date(uday);
            assert_eq!(uday, date_to_uday(date), "{date}");
            assert!(Date::new(date.year(), date.month(), date.day()).is_some());
        }
        for uday in [i32::MIN, i32::MIN + 1, i32::MAX - 1, i32::MAX] {
            assert_eq!(uday, date_to_uday(uday_to_date(uday)));
        }
    }

    #[test]
    fn consecutive_days() {
        let mut prev = uday_to_date(-800);
        for uday in -799..800 {
            let next = uday_to_date(uday);
            assert!(next > prev, "{prev} -> {next}");
            prev = next;
        }
    }

    #[test]
    fn invalid_fields() {
        assert_eq!(None, Date::new(2021, 0, 1));
        assert_eq!(None, Date::new(2021, 13, 1));
        assert_eq!(None, Date::new(2021, 4, 31));
        assert_eq!(None, Date::new(2100, 2, 29));
        assert_eq!(None, Date::new(2021, 1, 0));
        assert_eq!(None, Date::new(i32::MAX, 1, 1));
    }

    #[test]
    fn to_day_of_week() {
        assert_eq!(4, date(1970, 1, 1).day_of_week());
        assert_eq!(3, date(2021, 9, 8).day_of_week());
        assert_eq!(3, date(1969, 12, 31).day_of_week());
        assert_eq!(7, date(1900, 1, 7).day_of_week());
    }

    #[test]
    fn arithmetic() {
        assert_eq!(date(2024, 3, 1), date(2024, 2, 28) + 2);
        assert_eq!(date(1969, 12, 31), date(1970, 1, 1) + -1);
        assert_eq!(366, date(2025, 1, 1) - date(2024, 1, 1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn arithmetic_overflow_panics() {
        let _ = uday_to_date(i32::MAX) + 1;
    }

    #[test]
    fn days_in_month() {
        use YearType::*;
        assert_eq!(29, Leap.days_in_month(2));
        assert_eq!(28, Common.days_in_month(2));
        assert_eq!(30, Common.days_in_month(9));
        assert_eq!(31, Leap.days_in_month(12));
    }

    #[test]
    fn iso_format() {
        assert_eq!("2021-09-08", date(2021, 9, 8).to_string());
    }
}
