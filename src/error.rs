//! Error types for table-backed conversions.

use std::fmt;

/// The quantity whose supported range was exceeded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain {
    /// Lunisolar year number (`nian`).
    Nian,
    /// Cumulative lunisolar month ordinal (`cyue`).
    Cyue,
    /// Solar year number (`sui`).
    Sui,
    /// Cumulative solar-term ordinal (`cjie`).
    Cjie,
    /// Ordinal day (`uday`).
    Uday,
    /// Epoch seconds (`usec`).
    Usec,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Domain::Nian => "nian",
            Domain::Cyue => "cyue",
            Domain::Sui => "sui",
            Domain::Cjie => "cjie",
            Domain::Uday => "uday",
            Domain::Usec => "usec",
        };
        f.write_str(name)
    }
}

/// Error type for all fallible operations in this crate.
///
/// Every static table covers a closed range of keys. Queries outside that
/// range are reported instead of being wrapped or clamped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// Returned when a key falls outside the range covered by the tables.
    #[error("{domain} {key} out of range {min}..={max}")]
    OutOfRange {
        /// Which quantity was out of range.
        domain: Domain,
        /// The offending key.
        key: i64,
        /// Lowest supported key.
        min: i64,
        /// Highest supported key.
        max: i64,
    },

    /// Returned by [`ganzhi_to_riqi`](crate::chinese::ganzhi_to_riqi) when no
    /// day of the month carries the requested sexagenary name.
    #[error("ganzhi {ganzhi} does not occur in month {ryue} of nian {nian}")]
    GanzhiNotInMonth {
        nian: i32,
        ryue: u8,
        ganzhi: u8,
    },
}

impl Error {
    pub(crate) fn out_of_range(domain: Domain, key: i64, min: i64, max: i64) -> Self {
        tracing::debug!(%domain, key, min, max, "key outside table range");
        Error::OutOfRange {
            domain,
            key,
            min,
            max,
        }
    }
}

/// Fails with [`Error::OutOfRange`] unless `min <= key <= max`.
pub(crate) fn check_range(domain: Domain, key: i64, min: i64, max: i64) -> Result<(), Error> {
    if (min..=max).contains(&key) {
        Ok(())
    } else {
        Err(Error::out_of_range(domain, key, min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message() {
        let err = Error::OutOfRange {
            domain: Domain::Nian,
            key: 2300,
            min: 1900,
            max: 2199,
        };
        assert_eq!("nian 2300 out of range 1900..=2199", err.to_string());
    }

    #[test]
    fn ganzhi_message() {
        let err = Error::GanzhiNotInMonth {
            nian: 2024,
            ryue: 2,
            ganzhi: 7,
        };
        assert_eq!(
            "ganzhi 7 does not occur in month 2 of nian 2024",
            err.to_string()
        );
    }

    #[test]
    fn check_range_bounds() {
        assert_eq!(Ok(()), check_range(Domain::Cjie, -5, -5, 5));
        assert_eq!(Ok(()), check_range(Domain::Cjie, 5, -5, 5));
        assert_eq!(
            Err(Error::OutOfRange {
                domain: Domain::Cjie,
                key: 6,
                min: -5,
                max: 5
            }),
            check_range(Domain::Cjie, 6, -5, 5)
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<Error>();
    }
}
