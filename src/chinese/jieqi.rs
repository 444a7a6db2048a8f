//! 節氣
//!
//! 「歲」（`sui`）自冬至起算，故 1970 歲始於 1969 年 12 月 22 日冬至。節氣以 [`Jieqi`] 表示，冬至為首，與年份合為 [`Shihou`]。
//!
//! 交節時刻以多項式預測，再加殘差修正，精確至秒。

use crate::dati::{Dati, Zone, dati_to_usec, usec_to_dati};
use crate::error::{Domain, Error, check_range};
use crate::fit::invert;
use crate::math::{QuotRem, pydivmod};

use super::ephemeris::{
    CJIE_MAX, CJIE_MIN, JS_BITS, JS_COEFS, JS_LINEAR, JS_RESS, SJ_BITS, SJ_PRED, USEC_MAX,
    USEC_MIN,
};

/// 二十四節氣，以冬至為首。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Jieqi {
    Dongzhi,
    Xiaohan,
    Dahan,
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
}

impl Jieqi {
    /// 依序排列的全部節氣
    pub const ALL: [Jieqi; 24] = {
        use Jieqi::*;
        [
            Dongzhi, Xiaohan, Dahan, Lichun, Yushui, Jingzhe, Chunfen, Qingming, Guyu, Lixia,
            Xiaoman, Mangzhong, Xiazhi, Xiaoshu, Dashu, Liqiu, Chushu, Bailu, Qiufen, Hanlu,
            Shuangjiang, Lidong, Xiaoxue, Daxue,
        ]
    };

    /// 由序號（冬至為 0）取得節氣，超出 `0..24` 則為 `None`。
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
    /// 序號，冬至為 0
    pub fn index(self) -> u8 {
        self as u8
    }
    /// 是否為中氣（冬至、大寒、雨水……），即序號為偶數者。
    pub fn is_zhongqi(self) -> bool {
        self.index() % 2 == 0
    }
}

/// 黃道十二宮，白羊為首。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Zodiac {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Zodiac {
    pub const ALL: [Zodiac; 12] = {
        use Zodiac::*;
        [
            Aries, Taurus, Gemini, Cancer, Leo, Virgo, Libra, Scorpio, Sagittarius, Capricorn,
            Aquarius, Pisces,
        ]
    };

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// 「時候」，某歲的某一節氣。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shihou {
    /// 歲，自冬至起算
    pub sui: i32,
    /// 節氣
    pub jie: Jieqi,
}

impl Shihou {
    pub const fn new(sui: i32, jie: Jieqi) -> Self {
        Self { sui, jie }
    }
}

/// 時候轉為節序（1970 歲冬至為 0）。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{Jieqi, Shihou, shihou_to_cjie};
///
/// assert_eq!(636, shihou_to_cjie(Shihou::new(1996, Jieqi::Xiazhi)));
/// ```
pub fn shihou_to_cjie(shihou: Shihou) -> i32 {
    shihou
        .sui
        .saturating_sub(1970)
        .saturating_mul(24)
        .saturating_add(shihou.jie.index() as i32)
}

/// 節序轉為時候，[`shihou_to_cjie`] 之逆。
pub fn cjie_to_shihou(cjie: i32) -> Shihou {
    let QuotRem { quot, rem } = pydivmod(cjie, 24);
    Shihou {
        sui: quot + 1970,
        jie: Jieqi::ALL[rem as usize],
    }
}

/// 交節時刻的多項式預測。各節氣一組係數，每乘一次歲數即右移 [`JS_BITS`] 位。
fn predict_usec(cjie: i32) -> i64 {
    let QuotRem { quot, rem } = pydivmod(cjie, 24);
    let sui = 1970 + quot as i64;
    let coefs = &JS_COEFS[rem as usize];
    let fit = coefs[..6]
        .iter()
        .rev()
        .fold(coefs[6], |acc, &c| ((acc * sui) >> JS_BITS) + c);
    JS_LINEAR[0] * sui + JS_LINEAR[1] + fit
}

/// 交節時刻，以 Unix 秒計。
///
/// 曆表多存一節，故 `CJIE_MAX + 1` 亦可查，用以取得最末一節的終點。
///
/// # 用例
///
/// ```
/// use nongli::chinese::cjie_to_usec;
///
/// // 1969-12-22 08:43:41 +08:00
/// assert_eq!(Ok(-861379), cjie_to_usec(0));
/// ```
pub fn cjie_to_usec(cjie: i32) -> Result<i64, Error> {
    // 先查殘差，範圍外的節序不得進入預測
    let res = JS_RESS.get(cjie)?;
    Ok(predict_usec(cjie) + res as i64)
}

pub fn shihou_to_usec(shihou: Shihou) -> Result<i64, Error> {
    cjie_to_usec(shihou_to_cjie(shihou))
}

/// 取得某時刻所在的節序，即最後一個不晚於該時刻的交節。
///
/// # 用例
///
/// ```
/// use nongli::chinese::usec_to_cjie;
///
/// assert_eq!(Ok(636), usec_to_cjie(836683199));
/// assert_eq!(Ok(-1), usec_to_cjie(-861380));
/// ```
pub fn usec_to_cjie(usec: i64) -> Result<i32, Error> {
    check_range(Domain::Usec, usec, USEC_MIN, USEC_MAX)?;
    let [base, slope, offset] = SJ_PRED;
    let guess = ((((slope * usec) >> SJ_BITS) + offset) >> SJ_BITS) + base;
    let cjie = invert(guess, usec, cjie_to_usec)?;
    debug_assert!((CJIE_MIN..=CJIE_MAX).contains(&cjie));
    Ok(cjie)
}

pub fn usec_to_shihou(usec: i64) -> Result<Shihou, Error> {
    usec_to_cjie(usec).map(cjie_to_shihou)
}

/// 交節時刻，以 `zone` 時區表示。
pub fn cjie_to_dati(cjie: i32, zone: Zone) -> Result<Dati, Error> {
    usec_to_dati(cjie_to_usec(cjie)?, zone)
}

/// 交節時刻，以 `zone` 時區表示。
///
/// # 用例
///
/// ```
/// use nongli::{Dati, Zone};
/// use nongli::chinese::{Jieqi, Shihou, shihou_to_dati};
///
/// let dati = shihou_to_dati(Shihou::new(1996, Jieqi::Xiazhi), Zone::CHINA).unwrap();
/// assert_eq!(Dati::from_fields(1996, 6, 21, 10, 23, 44, Zone::CHINA), Some(dati));
/// ```
pub fn shihou_to_dati(shihou: Shihou, zone: Zone) -> Result<Dati, Error> {
    cjie_to_dati(shihou_to_cjie(shihou), zone)
}

pub fn dati_to_cjie(dati: Dati) -> Result<i32, Error> {
    usec_to_cjie(dati_to_usec(dati))
}

pub fn dati_to_shihou(dati: Dati) -> Result<Shihou, Error> {
    usec_to_shihou(dati_to_usec(dati))
}

/// 節氣所在的黃道宮。春分入白羊，每二節氣一宮。
pub fn jieqi_to_zodiac(jie: Jieqi) -> Zodiac {
    let ijie = jie.index();
    let chunfen = Jieqi::Chunfen.index();
    let izod = if ijie < chunfen {
        ijie + 24 - chunfen
    } else {
        ijie - chunfen
    } / 2;
    Zodiac::ALL[izod as usize]
}

/// 某時刻太陽所在的黃道宮。
pub fn usec_to_zodiac(usec: i64) -> Result<Zodiac, Error> {
    usec_to_shihou(usec).map(|shihou| jieqi_to_zodiac(shihou.jie))
}

pub fn dati_to_zodiac(dati: Dati) -> Result<Zodiac, Error> {
    usec_to_zodiac(dati_to_usec(dati))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Jieqi::*;

    fn dati(fields: (i32, u8, u8, u8, u8, u8), zone: Zone) -> Dati {
        let (y, mo, d, h, mi, s) = fields;
        Dati::from_fields(y, mo, d, h, mi, s, zone).unwrap()
    }

    // (時刻, 時區, Unix 秒, 時候, 交節時刻 +08:00, 交節 Unix 秒, 節序, 星座)
    #[allow(clippy::type_complexity)]
    const SOLAR: [(
        (i32, u8, u8, u8, u8, u8),
        i8,
        i64,
        (i32, Jieqi),
        (i32, u8, u8, u8, u8, u8),
        i64,
        i32,
        Zodiac,
    ); 4] = [
        (
            (1945, 8, 15, 12, 0, 0),
            36,
            -769381200,
            (1945, Liqiu),
            (1945, 8, 8, 6, 5, 3),
            -770003697,
            -585,
            Zodiac::Leo,
        ),
        (
            (1970, 1, 1, 0, 0, 0),
            0,
            0,
            (1970, Dongzhi),
            (1969, 12, 22, 8, 43, 41),
            -861379,
            0,
            Zodiac::Capricorn,
        ),
        (
            (1996, 7, 7, 3, 59, 59),
            32,
            836683199,
            (1996, Xiazhi),
            (1996, 6, 21, 10, 23, 44),
            835323824,
            636,
            Zodiac::Cancer,
        ),
        (
            (2024, 12, 7, 22, 56, 4),
            32,
            1733583364,
            (2024, Daxue),
            (2024, 12, 6, 23, 17, 0),
            1733498220,
            1319,
            Zodiac::Sagittarius,
        ),
    ];

    #[test]
    fn solar_terms() {
        for (local, zone, usec, (sui, jie), term, term_usec, cjie, zodiac) in SOLAR {
            let zone = Zone::from_quarters(zone).unwrap();
            let shihou = Shihou::new(sui, jie);
            let local = dati(local, zone);
            let term = dati(term, Zone::CHINA);

            assert_eq!(usec, dati_to_usec(local));
            assert_eq!(cjie, shihou_to_cjie(shihou));
            assert_eq!(shihou, cjie_to_shihou(cjie));
            assert_eq!(Ok(term_usec), cjie_to_usec(cjie));
            assert_eq!(Ok(term_usec), shihou_to_usec(shihou));
            assert_eq!(Ok(term), shihou_to_dati(shihou, Zone::CHINA));
            assert_eq!(Ok(term), cjie_to_dati(cjie, Zone::CHINA));
            assert_eq!(Ok(cjie), usec_to_cjie(usec));
            assert_eq!(Ok(cjie), dati_to_cjie(local));
            assert_eq!(Ok(shihou), usec_to_shihou(usec));
            assert_eq!(Ok(shihou), dati_to_shihou(local));
            assert_eq!(zodiac, jieqi_to_zodiac(jie));
            assert_eq!(Ok(zodiac), usec_to_zodiac(usec));
            assert_eq!(Ok(zodiac), dati_to_zodiac(local));
        }
    }

    #[test]
    fn term_boundaries() {
        for cjie in (CJIE_MIN..=CJIE_MAX).step_by(7) {
            let usec = cjie_to_usec(cjie).unwrap();
            assert_eq!(Ok(cjie), usec_to_cjie(usec), "{cjie}");
            if usec > USEC_MIN {
                assert_eq!(Ok(cjie - 1), usec_to_cjie(usec - 1), "{cjie}");
            }
        }
    }

    #[test]
    fn terms_are_spaced() {
        let mut prev = cjie_to_usec(CJIE_MIN).unwrap();
        for cjie in CJIE_MIN + 1..=CJIE_MAX + 1 {
            let next = cjie_to_usec(cjie).unwrap();
            // 14 至 16.5 日
            assert!((1_200_000..1_430_000).contains(&(next - prev)), "{cjie}");
            prev = next;
        }
    }

    #[test]
    fn range_edges() {
        assert_eq!(Ok(USEC_MIN), cjie_to_usec(CJIE_MIN));
        assert_eq!(Ok(USEC_MAX + 1), cjie_to_usec(CJIE_MAX + 1));
        assert_eq!(Ok(CJIE_MIN), usec_to_cjie(USEC_MIN));
        assert_eq!(Ok(CJIE_MAX), usec_to_cjie(USEC_MAX));
        assert!(matches!(
            usec_to_cjie(USEC_MAX + 1),
            Err(Error::OutOfRange {
                domain: Domain::Usec,
                ..
            })
        ));
        assert!(usec_to_cjie(USEC_MIN - 1).is_err());
        assert!(usec_to_cjie(i64::MAX).is_err());
        assert!(cjie_to_usec(CJIE_MIN - 1).is_err());
        assert!(cjie_to_usec(CJIE_MAX + 2).is_err());
        assert!(shihou_to_usec(Shihou::new(i32::MAX, Dongzhi)).is_err());
    }

    #[test]
    fn shihou_indexing() {
        assert_eq!(-1, shihou_to_cjie(Shihou::new(1969, Daxue)));
        assert_eq!(Shihou::new(1969, Daxue), cjie_to_shihou(-1));
        assert_eq!(Shihou::new(1900, Dongzhi), cjie_to_shihou(CJIE_MIN));
        assert_eq!(Shihou::new(2199, Daxue), cjie_to_shihou(CJIE_MAX));
        for cjie in -100..100 {
            assert_eq!(cjie, shihou_to_cjie(cjie_to_shihou(cjie)));
        }
    }

    #[test]
    fn jieqi_indices() {
        for (i, jie) in Jieqi::ALL.into_iter().enumerate() {
            assert_eq!(i as u8, jie.index());
            assert_eq!(Some(jie), Jieqi::from_index(i as u8));
        }
        assert_eq!(None, Jieqi::from_index(24));
        assert!(Dongzhi.is_zhongqi());
        assert!(!Lichun.is_zhongqi());
        assert!(Chunfen.is_zhongqi());
    }

    #[test]
    fn zodiac_signs() {
        let data = [
            (Chunfen, Zodiac::Aries),
            (Qingming, Zodiac::Aries),
            (Guyu, Zodiac::Taurus),
            (Dongzhi, Zodiac::Capricorn),
            (Dahan, Zodiac::Aquarius),
            (Jingzhe, Zodiac::Pisces),
        ];
        for (jie, zodiac) in data {
            assert_eq!(zodiac, jieqi_to_zodiac(jie), "{jie:?}");
        }
    }
}
