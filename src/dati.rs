//! Zoned civil date-times and epoch seconds.
//!
//! Epoch seconds ("usec" throughout this crate, for historical reasons) are
//! whole seconds since 1970-01-01T00:00:00Z. Leap seconds are not counted.

use std::fmt;

use crate::date::{Date, date_to_uday, uday_to_date};
use crate::error::{Domain, Error, check_range};
use crate::math::{cdivmod, pydivmod};

const SECS_PER_DAY: i64 = 86400;
const SECS_PER_QUARTER: i64 = 900;

/// A fixed UTC offset in 15-minute steps, from UTC−12:00 to UTC+14:00.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone(i8);

impl Zone {
    pub const UTC: Zone = Zone(0);
    /// China Standard Time, UTC+08:00, which also fixes the lunisolar day.
    pub const CHINA: Zone = Zone(32);

    const MIN_QUARTERS: i8 = -48;
    const MAX_QUARTERS: i8 = 56;

    /// Creates a zone from a count of quarter hours east of UTC.
    ///
    /// Returns `None` outside `-48..=56`.
    pub fn from_quarters(quarters: i8) -> Option<Self> {
        (Self::MIN_QUARTERS..=Self::MAX_QUARTERS)
            .contains(&quarters)
            .then_some(Self(quarters))
    }
    /// Creates the zone `hours:minutes` east of UTC.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Zone;
    ///
    /// assert_eq!(Some(Zone::CHINA), Zone::east(8, 0));
    /// assert_eq!(None, Zone::east(5, 20));
    /// ```
    pub fn east(hours: u8, minutes: u8) -> Option<Self> {
        Self::from_quarters(Self::quarters_of(hours, minutes)?)
    }
    /// Creates the zone `hours:minutes` west of UTC.
    pub fn west(hours: u8, minutes: u8) -> Option<Self> {
        Self::from_quarters(-Self::quarters_of(hours, minutes)?)
    }
    fn quarters_of(hours: u8, minutes: u8) -> Option<i8> {
        if minutes % 15 != 0 || minutes >= 60 || hours > 14 {
            return None;
        }
        Some((hours * 4 + minutes / 15) as i8)
    }

    pub fn quarters(&self) -> i8 {
        self.0
    }
    /// Offset from UTC in seconds.
    pub fn offset(&self) -> i64 {
        SECS_PER_QUARTER * self.0 as i64
    }
}

/// Formats as `+hh:mm` / `-hh:mm`.
impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let q = self.0.unsigned_abs() as u32;
        write!(f, "{sign}{:02}:{:02}", q / 4, q % 4 * 15)
    }
}

/// A civil date and time of day in a fixed [`Zone`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dati {
    date: Date,
    hour: u8,
    minute: u8,
    second: u8,
    zone: Zone,
}

impl Dati {
    /// Returns `None` unless `hour < 24`, `minute < 60` and `second < 60`.
    pub fn new(date: Date, hour: u8, minute: u8, second: u8, zone: Zone) -> Option<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return None;
        }
        Some(Self {
            date,
            hour,
            minute,
            second,
            zone,
        })
    }
    /// Shorthand for [`Date::new`] followed by [`Dati::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::{Dati, Zone, dati_to_usec};
    ///
    /// let dati = Dati::from_fields(2022, 3, 21, 14, 23, 0, Zone::CHINA).unwrap();
    /// assert_eq!(1647843780, dati_to_usec(dati));
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn from_fields(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        zone: Zone,
    ) -> Option<Self> {
        Self::new(Date::new(year, month, day)?, hour, minute, second, zone)
    }

    pub fn date(&self) -> Date {
        self.date
    }
    pub fn hour(&self) -> u8 {
        self.hour
    }
    pub fn minute(&self) -> u8 {
        self.minute
    }
    pub fn second(&self) -> u8 {
        self.second
    }
    pub fn zone(&self) -> Zone {
        self.zone
    }
}

/// Formats in ISO 8601 extended format with offset.
impl fmt::Display for Dati {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}{}",
            self.date, self.hour, self.minute, self.second, self.zone
        )
    }
}

/// Converts a zoned date-time to epoch seconds.
pub fn dati_to_usec(dati: Dati) -> i64 {
    let uday = date_to_uday(dati.date) as i64;
    let dsec = 3600 * dati.hour as i64 + 60 * dati.minute as i64 + dati.second as i64;
    SECS_PER_DAY * uday + dsec - dati.zone.offset()
}

/// Converts epoch seconds to a date-time in `zone`.
///
/// Fails only when the resulting date is outside [`Date`]'s range.
///
/// # Example
///
/// ```
/// use nongli::{Dati, Zone, usec_to_dati};
///
/// let utc = usec_to_dati(1647843780, Zone::UTC).unwrap();
/// assert_eq!(Dati::from_fields(2022, 3, 21, 6, 23, 0, Zone::UTC), Some(utc));
/// ```
pub fn usec_to_dati(usec: i64, zone: Zone) -> Result<Dati, Error> {
    let offset = zone.offset();
    let min = i32::MIN as i64 * SECS_PER_DAY - offset;
    let max = (i32::MAX as i64 + 1) * SECS_PER_DAY - 1 - offset;
    check_range(Domain::Usec, usec, min, max)?;

    let local = pydivmod(usec + offset, SECS_PER_DAY);
    let date = uday_to_date(local.quot as i32);
    let hour = cdivmod(local.rem, 3600);
    let minute = cdivmod(hour.rem, 60);
    Ok(Dati {
        date,
        hour: hour.quot as u8,
        minute: minute.quot as u8,
        second: minute.rem as u8,
        zone,
    })
}

/// Re-expresses the same instant in another zone.
pub fn zone_cast(dati: Dati, zone: Zone) -> Result<Dati, Error> {
    usec_to_dati(dati_to_usec(dati), zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dati(fields: (i32, u8, u8, u8, u8, u8), zone: Zone) -> Dati {
        let (y, mo, d, h, mi, s) = fields;
        Dati::from_fields(y, mo, d, h, mi, s, zone).unwrap()
    }

    const CASES: [((i32, u8, u8, u8, u8, u8), (i32, u8, u8, u8, u8, u8), i64); 6] = [
        ((1931, 9, 18, 22, 20, 0), (1931, 9, 18, 14, 20, 0), -1208252400),
        ((1976, 7, 28, 3, 42, 53), (1976, 7, 27, 19, 42, 53), 207344573),
        ((2001, 9, 11, 8, 46, 40), (2001, 9, 11, 12, 46, 40), 1000212400),
        ((2008, 5, 12, 14, 28, 1), (2008, 5, 12, 6, 28, 1), 1210573681),
        ((2014, 3, 8, 1, 19, 29), (2014, 3, 7, 17, 19, 29), 1394212769),
        ((2022, 3, 21, 14, 23, 0), (2022, 3, 21, 6, 23, 0), 1647843780),
    ];

    fn local_zone(i: usize) -> Zone {
        if i == 2 {
            Zone::west(4, 0).unwrap()
        } else {
            Zone::CHINA
        }
    }

    #[test]
    fn to_usec() {
        for (i, (local, utc, usec)) in CASES.into_iter().enumerate() {
            assert_eq!(usec, dati_to_usec(dati(local, local_zone(i))));
            assert_eq!(usec, dati_to_usec(dati(utc, Zone::UTC)));
        }
    }

    #[test]
    fn from_usec() {
        for (i, (local, utc, usec)) in CASES.into_iter().enumerate() {
            assert_eq!(Ok(dati(utc, Zone::UTC)), usec_to_dati(usec, Zone::UTC));
            assert_eq!(
                Ok(dati(local, local_zone(i))),
                usec_to_dati(usec, local_zone(i))
            );
        }
    }

    #[test]
    fn cast_between_zones() {
        for (i, (local, utc, _)) in CASES.into_iter().enumerate() {
            let cast = zone_cast(dati(local, local_zone(i)), Zone::UTC);
            assert_eq!(Ok(dati(utc, Zone::UTC)), cast);
        }
    }

    #[test]
    fn negative_local_time() {
        let d = usec_to_dati(-1, Zone::UTC).unwrap();
        assert_eq!(dati((1969, 12, 31, 23, 59, 59), Zone::UTC), d);
        let d = usec_to_dati(-28800, Zone::CHINA).unwrap();
        assert_eq!(dati((1970, 1, 1, 0, 0, 0), Zone::CHINA), d);
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            usec_to_dati(i64::MAX, Zone::UTC),
            Err(Error::OutOfRange {
                domain: Domain::Usec,
                ..
            })
        ));
        assert!(usec_to_dati(i64::MIN, Zone::east(14, 0).unwrap()).is_err());
    }

    #[test]
    fn zones() {
        assert_eq!(Some(-48), Zone::west(12, 0).map(|z| z.quarters()));
        assert_eq!(Some(56), Zone::east(14, 0).map(|z| z.quarters()));
        assert_eq!(None, Zone::east(14, 15));
        assert_eq!(None, Zone::west(12, 15));
        assert_eq!(None, Zone::from_quarters(57));
        assert_eq!(-14400, Zone::west(4, 0).unwrap().offset());
        assert_eq!("+05:45", Zone::east(5, 45).unwrap().to_string());
        assert_eq!("-03:30", Zone::west(3, 30).unwrap().to_string());
    }

    #[test]
    fn invalid_time_of_day() {
        let date = Date::new(2020, 1, 1).unwrap();
        assert_eq!(None, Dati::new(date, 24, 0, 0, Zone::UTC));
        assert_eq!(None, Dati::new(date, 0, 60, 0, Zone::UTC));
        assert_eq!(None, Dati::new(date, 0, 0, 60, Zone::UTC));
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2022-03-21T14:23:00+08:00",
            dati((2022, 3, 21, 14, 23, 0), Zone::CHINA).to_string()
        );
    }
}
