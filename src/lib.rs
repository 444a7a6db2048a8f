//! Bit-exact conversion between Gregorian dates, zoned date-times, the
//! Chinese lunisolar calendar, the 24 solar terms and the four pillars.
//!
//! Everything is computed with integer and 32.32 fixed-point arithmetic from
//! small fitted tables, so results are identical on every platform and no
//! floating-point math library is involved. Lunisolar dates and solar terms
//! are supported from 1900 to 2199.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::new(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(10957, date.uday());
//! ```
//!
//! Chinese lunisolar calendar:
//!
//! ```
//! use nongli::Date;
//! use nongli::chinese::{Month::*, date_to_riqi};
//!
//! let riqi = date_to_riqi(Date::new(2000, 1, 1).unwrap()).unwrap();
//!
//! assert_eq!((1999, Common(11), 25), (riqi.nian, riqi.month(), riqi.tian));
//! ```
//!
//! Solar terms and the four pillars:
//!
//! ```
//! use nongli::{Dati, Zone, dati_to_usec};
//! use nongli::chinese::{Ganzhi, Jieqi, dati_to_bazi, usec_to_shihou};
//!
//! let dati = Dati::from_fields(2024, 2, 29, 0, 11, 6, Zone::CHINA).unwrap();
//! let shihou = usec_to_shihou(dati_to_usec(dati)).unwrap();
//! assert_eq!((2024, Jieqi::Yushui), (shihou.sui, shihou.jie));
//!
//! let bazi = dati_to_bazi(dati, 119.0).unwrap();
//! assert_eq!(Ganzhi::RenXu, bazi.ri); // still the 28th in real solar time
//! ```
//!
//! Queries outside the range covered by the tables fail with
//! [`Error::OutOfRange`]; nothing is wrapped or clamped.

pub mod chinese;
pub mod date;
pub mod dati;
pub mod error;
pub mod fit;
pub mod fixed;
pub mod math;
pub mod trig;

pub use date::{Date, YearType, date_to_uday, uday_to_date};
pub use dati::{Dati, Zone, dati_to_usec, usec_to_dati, zone_cast};
pub use error::{Domain, Error};
