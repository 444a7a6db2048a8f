//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序不做天文推步，而以預製的擬合曆表（見 [`ephemeris`]）編算夏曆、節氣與八字，全程只用整數及定點運算，結果在各平臺上逐位一致。
//!
//! 術語：
//!
//! - 「年」（`nian`）：夏曆年，以正月為首。
//! - 「月」：以 `ryue` 編碼，平月為 `2 × 月數`，閏月為 `2 × 月數 + 1`。
//! - 「閏」（`run`）：該年閏月序，閏幾月即為幾，無閏為 13。
//! - 「天」（`tian`）：月內日數，1 至 29 或 30。
//! - `cyue`、`uday`：累計月序、累計日序，僅作內部換算。
//!
//! 支持年份見 [`NIAN_MIN`]、[`NIAN_MAX`]，超出範圍者回報 [`Error::OutOfRange`]，不作環繞。
//!
//! # 用例
//!
//! ```
//! use nongli::Date;
//! use nongli::chinese::{Month, date_to_riqi};
//!
//! let riqi = date_to_riqi(Date::new(2000, 1, 1).unwrap()).unwrap();
//!
//! assert_eq!((1999, Month::Common(11), 25), (riqi.nian, riqi.month(), riqi.tian));
//! ```

use crate::date::{Date, date_to_uday, uday_to_date};
use crate::error::{Domain, Error, check_range};
use crate::fit::{correct, invert};
use crate::math::pydiv;

pub mod bazi;
pub mod ephemeris;
pub mod ganzhi;
pub mod jieqi;

pub use bazi::{
    Bazi, bday_to_ganzhi, bias_eot, bias_lon, bshi_to_ganzhi, byue_to_ganzhi, dati_to_bazi,
    usec_to_bazi, usec_to_rsec,
};
pub use ephemeris::{
    CJIE_MAX, CJIE_MIN, CYUE_MAX, CYUE_MIN, NIAN_MAX, NIAN_MIN, SUI_MAX, SUI_MIN, UDAY_MAX,
    UDAY_MIN, USEC_MAX, USEC_MIN,
};
pub use ganzhi::{
    Dizhi, Ganzhi, Tiangan, ganzhi_to_riqi, nian_to_ganzhi, riqi_to_ganzhi, sui_to_sanfu,
    sui_to_toufu, uday_to_ganzhi,
};
pub use jieqi::{
    Jieqi, Shihou, Zodiac, cjie_to_dati, cjie_to_shihou, cjie_to_usec, dati_to_cjie,
    dati_to_shihou, dati_to_zodiac, jieqi_to_zodiac, shihou_to_cjie, shihou_to_dati,
    shihou_to_usec, usec_to_cjie, usec_to_shihou, usec_to_zodiac,
};

use ephemeris::{DY_PRED, NR_RUNS, NY_PRED, NY_RESS, YD_PRED, YD_RESS, YN_PRED};

/// 無閏之年的 `run` 值
pub const NO_RUN: u8 = 13;

/// 夏曆日界較 UTC 早八小時。
const CHINA_OFFSET: i64 = 8 * 3600;

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Month {
    Common(u8),
    Leap(u8),
}

impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u8 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 編為 `ryue`
    pub fn ryue(&self) -> u8 {
        self.num() * 2 + self.is_leap() as u8
    }
    /// 由 `ryue` 解碼，不檢查該年是否真有此閏月。
    pub fn from_ryue(ryue: u8) -> Self {
        if ryue & 1 == 1 {
            Month::Leap(ryue >> 1)
        } else {
            Month::Common(ryue >> 1)
        }
    }
}

/// 夏曆日期
///
/// 各轉換函數不檢查欄位是否合法；自不可信來源構造時，須另以 [`check_riqi`] 驗證。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Riqi {
    /// 年
    pub nian: i32,
    /// 月，平月 `2 × 月數`，閏月 `2 × 月數 + 1`
    pub ryue: u8,
    /// 日
    pub tian: u8,
}

impl Riqi {
    pub const fn new(nian: i32, ryue: u8, tian: u8) -> Self {
        Self { nian, ryue, tian }
    }
    /// 以月名構造。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{Month, Riqi};
    ///
    /// assert_eq!(Riqi::new(2017, 13, 1), Riqi::with_month(2017, Month::Leap(6), 1));
    /// ```
    pub fn with_month(nian: i32, month: Month, tian: u8) -> Self {
        Self::new(nian, month.ryue(), tian)
    }
    /// 取得月名。
    pub fn month(&self) -> Month {
        Month::from_ryue(self.ryue)
    }
}

/// 取得該年閏月序，無閏則為 [`NO_RUN`]。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{NO_RUN, nian_to_run};
///
/// assert_eq!(Ok(6), nian_to_run(2017));
/// assert_eq!(Ok(NO_RUN), nian_to_run(2024));
/// assert!(nian_to_run(1899).is_err());
/// ```
pub fn nian_to_run(nian: i32) -> Result<u8, Error> {
    Ok(NR_RUNS.get(nian)? as u8)
}

/// 由 `ryue` 求月在年內的序號，正月為 0。
pub fn ryue_to_nyue(ryue: u8, run: u8) -> i32 {
    (ryue >> 1) as i32 - (2 * run >= ryue) as i32
}

/// 由年內序號求 `ryue`，[`ryue_to_nyue`] 之逆。
pub fn nyue_to_ryue(nyue: i32, run: u8) -> u8 {
    let run = run as i32;
    ((nyue + (nyue < run) as i32) * 2 + (nyue == run) as i32) as u8
}

/// 取得該年正月的累計月序。
pub fn nian_to_cyue(nian: i32) -> Result<i32, Error> {
    Ok(correct(&NY_PRED, &NY_RESS, nian)? as i32)
}

/// 取得累計月序所在的年。
pub fn cyue_to_nian(cyue: i32) -> Result<i32, Error> {
    check_range(Domain::Cyue, cyue as i64, CYUE_MIN as i64, CYUE_MAX as i64)?;
    invert(YN_PRED.predict(cyue as i64), cyue as i64, |nian| {
        nian_to_cyue(nian).map(i64::from)
    })
}

/// 取得該月朔日。
pub fn cyue_to_uday(cyue: i32) -> Result<i32, Error> {
    Ok(correct(&YD_PRED, &YD_RESS, cyue)? as i32)
}

/// 取得該日所在月的累計月序。
pub fn uday_to_cyue(uday: i32) -> Result<i32, Error> {
    check_range(Domain::Uday, uday as i64, UDAY_MIN as i64, UDAY_MAX as i64)?;
    invert(DY_PRED.predict(uday as i64), uday as i64, |cyue| {
        cyue_to_uday(cyue).map(i64::from)
    })
}

/// 該月日數，大月 30，小月 29。
pub fn days_in_cyue(cyue: i32) -> Result<u8, Error> {
    let next = cyue_to_uday(cyue.saturating_add(1))?;
    Ok((next - cyue_to_uday(cyue)?) as u8)
}

/// 取得某日的夏曆日期。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{Riqi, uday_to_riqi};
///
/// assert_eq!(Ok(Riqi::new(2024, 2, 20)), uday_to_riqi(19782));
/// ```
pub fn uday_to_riqi(uday: i32) -> Result<Riqi, Error> {
    let cyue = uday_to_cyue(uday)?;
    let nian = cyue_to_nian(cyue)?;
    let nyue = cyue - nian_to_cyue(nian)?;
    let ryue = nyue_to_ryue(nyue, nian_to_run(nian)?);
    let tian = (uday - cyue_to_uday(cyue)? + 1) as u8;
    Ok(Riqi { nian, ryue, tian })
}

/// 取得夏曆日期的累計日序，[`uday_to_riqi`] 之逆。
pub fn riqi_to_uday(riqi: Riqi) -> Result<i32, Error> {
    let cyue = riqi_to_cyue(riqi)?;
    Ok(cyue_to_uday(cyue)? + riqi.tian as i32 - 1)
}

fn riqi_to_cyue(riqi: Riqi) -> Result<i32, Error> {
    let run = nian_to_run(riqi.nian)?;
    Ok(nian_to_cyue(riqi.nian)? + ryue_to_nyue(riqi.ryue, run))
}

/// 公曆日期轉夏曆。
pub fn date_to_riqi(date: Date) -> Result<Riqi, Error> {
    uday_to_riqi(date_to_uday(date))
}

/// 夏曆日期轉公曆。
pub fn riqi_to_date(riqi: Riqi) -> Result<Date, Error> {
    riqi_to_uday(riqi).map(uday_to_date)
}

/// 檢查夏曆日期是否合法：年在曆表範圍內，月在 `2..=25`，閏月確為該年所閏，日不超過該月日數。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{Riqi, check_riqi};
///
/// assert!(check_riqi(Riqi::new(2017, 13, 29)));  // 閏六月
/// assert!(!check_riqi(Riqi::new(2018, 13, 1)));  // 2018 年無閏
/// assert!(!check_riqi(Riqi::new(2024, 2, 31)));
/// ```
pub fn check_riqi(riqi: Riqi) -> bool {
    let Riqi { nian, ryue, tian } = riqi;
    if !(NIAN_MIN..=NIAN_MAX).contains(&nian) || !(2..=25).contains(&ryue) || tian == 0 {
        return false;
    }
    let Ok(run) = nian_to_run(nian) else {
        return false;
    };
    if ryue & 1 == 1 && ryue >> 1 != run {
        return false;
    }
    riqi_to_cyue(riqi)
        .and_then(days_in_cyue)
        .is_ok_and(|days| tian <= days)
}

/// 前後推移若干年，月日不變。
///
/// 若目標年無此閏月，則改為同數平月；若日數超出目標月，則取該月末日。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{Riqi, next_nian};
///
/// assert_eq!(Ok(Riqi::new(2025, 2, 20)), next_nian(Riqi::new(2024, 2, 20), 1));
/// // 2017 年閏六月，2018 年無閏
/// assert_eq!(Ok(Riqi::new(2018, 12, 1)), next_nian(Riqi::new(2017, 13, 1), 1));
/// ```
pub fn next_nian(riqi: Riqi, step: i32) -> Result<Riqi, Error> {
    if step == 0 {
        return Ok(riqi);
    }
    let Riqi { nian, mut ryue, mut tian } = riqi;
    let nian = nian.saturating_add(step);
    let run = nian_to_run(nian)?;
    if ryue & 1 == 1 && ryue >> 1 != run {
        ryue &= !1;
    }
    if tian >= 30 {
        let cyue = nian_to_cyue(nian)? + ryue_to_nyue(ryue, run);
        tian = days_in_cyue(cyue)?;
    }
    Ok(Riqi { nian, ryue, tian })
}

/// 前後推移若干月（閏月亦計一月），日不變，超出目標月則取月末日。
pub fn next_cyue(riqi: Riqi, step: i32) -> Result<Riqi, Error> {
    if step == 0 {
        return Ok(riqi);
    }
    let cyue = riqi_to_cyue(riqi)?.saturating_add(step);
    let nian = cyue_to_nian(cyue)?;
    let ryue = nyue_to_ryue(cyue - nian_to_cyue(nian)?, nian_to_run(nian)?);
    let mut tian = riqi.tian;
    if tian >= 30 {
        tian = days_in_cyue(cyue)?;
    }
    Ok(Riqi { nian, ryue, tian })
}

/// 前後推移若干日。
pub fn next_tian(riqi: Riqi, step: i32) -> Result<Riqi, Error> {
    if step == 0 {
        return Ok(riqi);
    }
    uday_to_riqi(riqi_to_uday(riqi)?.saturating_add(step))
}

/// 取得某時刻所在的夏曆日（以北京時間分日）。
pub fn usec_to_uday(usec: i64) -> Result<i32, Error> {
    let uday = pydiv(usec.saturating_add(CHINA_OFFSET), 86400);
    i32::try_from(uday).map_err(|_| {
        Error::out_of_range(
            Domain::Usec,
            usec,
            i32::MIN as i64 * 86400 - CHINA_OFFSET,
            (i32::MAX as i64 + 1) * 86400 - 1 - CHINA_OFFSET,
        )
    })
}

/// 該日北京時間零時的時刻。
pub fn uday_to_usec(uday: i32) -> i64 {
    86400 * uday as i64 - CHINA_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::new(y, m, d).unwrap()
    }

    // (日期, 公曆, 閏, 年內月序, 月日數, 正月序, 月序, 朔日, 日)
    const LUNAR: [((i32, u8, u8), (i32, u8, u8), u8, i32, u8, i32, i32, i32, i32); 6] = [
        ((1911, 22, 13), (1912, 1, 1), 6, 11, 30, -730, -719, -21197, -21185),
        ((1963, 9, 7), (1963, 5, 29), 4, 4, 29, -87, -83, -2415, -2409),
        ((1984, 24, 30), (1985, 2, 19), 10, 12, 30, 173, 185, 5499, 5528),
        ((2006, 15, 22), (2006, 9, 14), 7, 7, 29, 445, 452, 13384, 13405),
        ((2024, 16, 5), (2024, 9, 7), 13, 7, 30, 668, 675, 19969, 19973),
        ((2048, 16, 30), (2048, 10, 7), 13, 7, 30, 965, 972, 28740, 28769),
    ];

    fn riqi((n, r, t): (i32, u8, u8)) -> Riqi {
        Riqi::new(n, r, t)
    }

    #[test]
    fn lunar_components() {
        for (rq, (y, m, d), run, nyue, ndays, cy01, cyue, ud01, uday) in LUNAR {
            let rq = riqi(rq);
            assert_eq!(Ok(run), nian_to_run(rq.nian), "{rq:?}");
            assert_eq!(nyue, ryue_to_nyue(rq.ryue, run));
            assert_eq!(rq.ryue, nyue_to_ryue(nyue, run));
            assert_eq!(Ok(cy01), nian_to_cyue(rq.nian));
            assert_eq!(Ok(rq.nian), cyue_to_nian(cyue));
            assert_eq!(Ok(ud01), cyue_to_uday(cyue));
            assert_eq!(Ok(cyue), uday_to_cyue(uday));
            assert_eq!(Ok(ndays), days_in_cyue(cyue));
            assert_eq!(uday, date_to_uday(date(y, m, d)));
            assert_eq!(Ok(uday), riqi_to_uday(rq));
            assert_eq!(Ok(rq), uday_to_riqi(uday));
        }
    }

    #[test]
    fn calendar_arithmetic() {
        let nn19 = [
            (1930, 22, 13),
            (1982, 9, 7),
            (2003, 24, 30),
            (2025, 14, 22),
            (2043, 16, 5),
            (2067, 16, 29),
        ];
        let nc42 = [
            (1915, 8, 13),
            (1966, 18, 7),
            (1988, 10, 30),
            (2009, 24, 22),
            (2028, 2, 5),
            (2052, 2, 29),
        ];
        let nt83 = [
            (1912, 4, 6),
            (1963, 14, 2),
            (1985, 6, 24),
            (2006, 20, 16),
            (2024, 20, 29),
            (2048, 22, 25),
        ];
        for (i, case) in LUNAR.iter().enumerate() {
            let rq = riqi(case.0);
            assert_eq!(Ok(riqi(nn19[i])), next_nian(rq, 19), "{rq:?}");
            assert_eq!(Ok(riqi(nc42[i])), next_cyue(rq, 42), "{rq:?}");
            assert_eq!(Ok(riqi(nt83[i])), next_tian(rq, 83), "{rq:?}");
            assert_eq!(Ok(rq), next_tian(rq, 0));
        }
    }

    #[test]
    fn arithmetic_clamps_day() {
        // 2025 閏六月小，六月、七月大
        assert_eq!(Ok(Riqi::new(2025, 13, 29)), next_cyue(Riqi::new(2025, 12, 30), 1));
        assert_eq!(Ok(Riqi::new(2025, 14, 30)), next_cyue(Riqi::new(2025, 13, 30), 1));
        assert_eq!(Ok(Riqi::new(2025, 14, 29)), next_cyue(Riqi::new(2025, 13, 29), 1));
        assert_eq!(Ok(Riqi::new(2026, 12, 30)), next_nian(Riqi::new(2025, 13, 30), 1));
        assert_eq!(Ok(Riqi::new(2025, 13, 29)), next_nian(Riqi::new(2017, 13, 30), 8));
        assert_eq!(Ok(Riqi::new(2023, 24, 20)), next_tian(Riqi::new(2024, 2, 20), -30));
    }

    #[test]
    fn leap_months() {
        use Month::*;
        let data = [
            ((2016, 11, 29), (2016, Common(11), 1)),
            ((2017, 1, 27), (2016, Common(12), 30)),
            ((2017, 1, 28), (2017, Common(1), 1)),
            ((2017, 7, 22), (2017, Common(6), 29)),
            ((2017, 7, 23), (2017, Leap(6), 1)),
            ((2017, 12, 17), (2017, Common(10), 30)),
            ((2033, 12, 22), (2033, Leap(11), 1)),
        ];
        for ((y, m, d), (nian, month, tian)) in data {
            let rq = date_to_riqi(date(y, m, d)).unwrap();
            assert_eq!((nian, month, tian), (rq.nian, rq.month(), rq.tian));
            assert_eq!(Ok(date(y, m, d)), riqi_to_date(rq));
        }
        assert_eq!(Ok(11), nian_to_run(2033));
        assert_eq!(Ok(10), nian_to_run(1984));
    }

    #[test]
    fn new_year_days() {
        for (y, m, d, nian) in [
            (2000, 2, 5, 2000),
            (2017, 1, 28, 2017),
            (2024, 2, 10, 2024),
            (2025, 1, 29, 2025),
        ] {
            assert_eq!(Ok(Riqi::new(nian, 2, 1)), date_to_riqi(date(y, m, d)));
        }
    }

    #[test]
    fn round_trip_whole_range() {
        for uday in UDAY_MIN..=UDAY_MAX {
            let rq = uday_to_riqi(uday).unwrap();
            assert!(check_riqi(rq), "{uday} -> {rq:?}");
            assert_eq!(Ok(uday), riqi_to_uday(rq));
        }
        for cyue in CYUE_MIN..=CYUE_MAX {
            let days = days_in_cyue(cyue).unwrap();
            assert!(days == 29 || days == 30, "{cyue}");
        }
    }

    #[test]
    fn range_edges() {
        assert_eq!(Ok(Riqi::new(1900, 2, 1)), uday_to_riqi(UDAY_MIN));
        assert_eq!(Ok(Riqi::new(2199, 24, 30)), uday_to_riqi(UDAY_MAX));
        assert!(matches!(
            uday_to_riqi(UDAY_MIN - 1),
            Err(Error::OutOfRange {
                domain: Domain::Uday,
                ..
            })
        ));
        assert!(uday_to_riqi(UDAY_MAX + 1).is_err());
        assert!(cyue_to_nian(CYUE_MAX + 1).is_err());
        assert!(riqi_to_uday(Riqi::new(2200, 2, 1)).is_err());
        assert!(next_nian(Riqi::new(2199, 2, 1), 1).is_err());
        assert!(next_nian(Riqi::new(2000, 2, 1), i32::MAX).is_err());
    }

    #[test]
    fn invalid_riqi() {
        for rq in [
            Riqi::new(2024, 3, 1),
            Riqi::new(2024, 1, 1),
            Riqi::new(2024, 26, 1),
            Riqi::new(2024, 2, 0),
            Riqi::new(2024, 2, 31),
            Riqi::new(2025, 11, 1),
            Riqi::new(1899, 2, 1),
            Riqi::new(2200, 2, 1),
        ] {
            assert!(!check_riqi(rq), "{rq:?}");
        }
        assert!(check_riqi(Riqi::new(2025, 13, 1)));
        // 2025 閏六月只有 29 日
        assert!(!check_riqi(Riqi::new(2025, 13, 30)));
    }

    #[test]
    fn month_encoding() {
        for run in 1..=NO_RUN {
            let months = if run == NO_RUN { 12 } else { 13 };
            for nyue in 0..months {
                let ryue = nyue_to_ryue(nyue, run);
                assert!((2..=25).contains(&ryue));
                assert_eq!(nyue, ryue_to_nyue(ryue, run), "run {run}");
            }
        }
        assert_eq!(Month::Leap(6), Month::from_ryue(13));
        assert_eq!(24, Month::Common(12).ryue());
    }

    #[test]
    fn china_days() {
        for (usec, uday) in [
            (0, 0),
            (1079857804, 12498),
            (1709136666, 19782),
            (1738617617, 20123),
            (-28800, 0),
            (-28801, -1),
        ] {
            assert_eq!(Ok(uday), usec_to_uday(usec));
        }
        assert_eq!(-28800, uday_to_usec(0));
        assert!(usec_to_uday(i64::MAX).is_err());
    }
}
