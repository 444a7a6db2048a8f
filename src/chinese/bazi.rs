//! 八字
//!
//! 年柱、月柱以節氣分界：年以立春、月以各「節」交替；日柱、時柱以出生地真太陽時分界。真太陽時由 UTC 加經度差（每度 240 秒）與均時差而得，均時差全以定點數計算，不依賴浮點三角函數。
//!
//! # 用例
//!
//! ```
//! use nongli::chinese::{Bazi, Ganzhi::*, usec_to_bazi};
//!
//! // 2024-02-29 00:11:06 +08:00，東經 119 度
//! let bazi = usec_to_bazi(1709136666, 119.0).unwrap();
//! assert_eq!(Bazi { nian: JiaChen, yue: BingYin, ri: RenXu, shi: RenZi }, bazi);
//! ```

use crate::dati::{Dati, dati_to_usec};
use crate::error::{Domain, Error, check_range};
use crate::fixed::Fix64;
use crate::math::{pydiv, pymod};
use crate::trig::{cosq, sinq};

use super::ganzhi::{Ganzhi, cycle, nian_to_ganzhi};
use super::jieqi::{Jieqi, cjie_to_usec, usec_to_cjie};

/// 四柱
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bazi {
    /// 年柱
    pub nian: Ganzhi,
    /// 月柱
    pub yue: Ganzhi,
    /// 日柱
    pub ri: Ganzhi,
    /// 時柱
    pub shi: Ganzhi,
}

impl Bazi {
    /// 依年、月、日、時之序
    pub fn pillars(&self) -> [Ganzhi; 4] {
        [self.nian, self.yue, self.ri, self.shi]
    }
}

/// J2000.0，2000-01-01 12:00 TT，約作 UTC
const USEC_J2000: i64 = 946_728_000;
/// 儒略世紀（36525 日）秒數
const SECS_CENTURY: i64 = 3_155_760_000;
/// 2000 年近日點
const USEC_PERIHELION: i64 = 946_876_650;
/// 兩近點年秒數
const SECS_TWO_YEARS: i64 = 63_116_865;

/// 地球軌道離心率，世紀數的多項式，常數項居首
const ECCO_COEFS: [Fix64; 3] = [
    Fix64::from_bits(0x0447_03cb),  // +1.67086e-2
    Fix64::from_bits(-0x0002_bf78), // -4.19300e-5
    Fix64::from_bits(-0x0000_021d), // -1.26000e-7
];
/// 黃赤交角，以四分之一圓周為單位
const OBLE_COEFS: [Fix64; 4] = [
    Fix64::from_bits(0x42ab_ffce),  // +2.60437e-1
    Fix64::from_bits(-0x0009_775e), // -1.44444e-4
    Fix64::from_bits(-0x0000_000a), // -2.22222e-9
    Fix64::from_bits(0x0000_0018),  // +5.55556e-9
];
/// 時角（四分之一圓周）化為秒：`86400 / 2π`
const HOUR_ANGLE_SECS: Fix64 = Fix64::from_bits(0x35b6_fcb1_7b0c);

fn horner(coefs: &[Fix64], x: Fix64) -> Fix64 {
    coefs
        .iter()
        .rev()
        .copied()
        .reduce(|acc, c| acc.fast_mul(x) + c)
        .unwrap_or(Fix64::ZERO)
}

/// 經度差，`lon` 為東經度數，西經為負。
pub fn bias_lon(lon: Fix64) -> Fix64 {
    lon * 240
}

/// 均時差，即真太陽時減平太陽時，以秒計。`cjie` 須為 `usec` 所在節序，否則回報 [`Error::OutOfRange`]。
///
/// 分兩項：軌道離心所致者取平近點角的一、二倍頻；黃赤交角所致者取太陽黃經，黃經由前後兩交節時刻線性內插。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{bias_eot, usec_to_cjie};
///
/// // 1970-01-01，真太陽時慢約三分半
/// let usec = 0;
/// let eot = bias_eot(usec, usec_to_cjie(usec).unwrap()).unwrap();
/// assert_eq!(-217, eot.safe_int());
/// ```
pub fn bias_eot(usec: i64, cjie: i32) -> Result<Fix64, Error> {
    let last = cjie_to_usec(cjie)?;
    let next = cjie_to_usec(cjie + 1)?;
    check_range(Domain::Usec, usec, last, next - 1)?;

    let ucen = Fix64::fair_div(usec - USEC_J2000, SECS_CENTURY);
    let mano = Fix64::fair_div(8 * (usec - USEC_PERIHELION), SECS_TWO_YEARS);

    // 離心項
    let ecco = horner(&ECCO_COEFS, ucen);
    let s1ma = sinq(mano);
    let s2ma = sinq(mano * 2);
    let hecc = (ecco * -5).fast_mul(s2ma);
    let hecc = ecco.fast_mul((hecc >> 2) - s1ma * 2);

    // 太陽黃經，自春分起算
    let jdur = next - last;
    let ljie = pymod(cjie - Jieqi::Chunfen.index() as i32, 24) as i64;
    let pscf = ljie * jdur + (usec - last);
    let qlon = Fix64::fast_div(2 * pscf, 3 * jdur);

    // 交角項
    let oble = horner(&OBLE_COEFS, ucen);
    let veso = Fix64::ONE - cosq(oble);
    let s4tl = sinq(qlon);
    let s2tl = sinq(qlon >> 1);
    let hobl = (s2tl - (s4tl >> 1)) >> 1;
    let hobl = hobl.fast_mul(veso) + (s2tl >> 1);
    let hobl = hobl.fast_mul(veso);

    Ok(HOUR_ANGLE_SECS.fair_mul(hecc + hobl))
}

/// 真太陽時，以 Unix 秒的形式表示，即在 UTC 上加經度差及均時差。
pub fn usec_to_rsec(usec: i64, lon: f64) -> Result<i64, Error> {
    let cjie = usec_to_cjie(usec)?;
    rsec_for(usec, cjie, lon)
}

fn rsec_for(usec: i64, cjie: i32, lon: f64) -> Result<i64, Error> {
    let lon_bias = bias_lon(Fix64::from_f64(lon));
    let eot_bias = bias_eot(usec, cjie)?;
    let bias = (lon_bias + eot_bias).safe_int();
    tracing::trace!(usec, cjie, lon, bias, "real solar time");
    Ok(usec + bias)
}

/// 月柱：`byue` 為自 1970 年寅月起的節月序。
pub fn byue_to_ganzhi(byue: i32) -> Ganzhi {
    cycle(byue as i64, 14)
}

/// 日柱：`bday` 為真太陽時的日序。
pub fn bday_to_ganzhi(bday: i64) -> Ganzhi {
    cycle(bday, 17)
}

/// 時柱：`bshi` 為真太陽時的時辰序，子時跨越午夜。
pub fn bshi_to_ganzhi(bshi: i64) -> Ganzhi {
    cycle(bshi, 24)
}

/// 由時刻及出生地經度（東經為正，度）排八字。`lon` 須為有限值。
pub fn usec_to_bazi(usec: i64, lon: f64) -> Result<Bazi, Error> {
    let cjie = usec_to_cjie(usec)?;
    let rsec = rsec_for(usec, cjie, lon)?;
    // 小寒為丑月之節，冬至仍屬子月
    let byue = (cjie - 3) >> 1;
    let bsui = 1970 + pydiv(byue, 12);
    let bazi = Bazi {
        nian: nian_to_ganzhi(bsui),
        yue: byue_to_ganzhi(byue),
        ri: bday_to_ganzhi(pydiv(rsec, 86400)),
        shi: bshi_to_ganzhi(pydiv(rsec + 3600, 7200)),
    };
    tracing::trace!(usec, rsec, ?bazi, "bazi");
    Ok(bazi)
}

pub fn dati_to_bazi(dati: Dati, lon: f64) -> Result<Bazi, Error> {
    usec_to_bazi(dati_to_usec(dati), lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dati::Zone;
    use Ganzhi::*;

    const USECS: [i64; 4] = [0, 1079857804, 1709136666, 1738617617];
    const DATIS: [(i32, u8, u8, u8, u8, u8); 4] = [
        (1970, 1, 1, 8, 0, 0),
        (2004, 3, 21, 16, 30, 4),
        (2024, 2, 29, 0, 11, 6),
        (2025, 2, 4, 5, 20, 17),
    ];
    const BAZIS: [[Ganzhi; 4]; 4] = [
        [JiYou, BingZi, XinSi, RenChen],
        [JiaShen, DingMao, JiHai, RenShen],
        [JiaChen, BingYin, RenXu, RenZi],
        [YiSi, WuYin, JiaChen, DingMao],
    ];
    // 均時差（定點原值）及加東經 119 度後的真太陽時
    const EOTS: [i64; 4] = [-932109133072, -1841605592944, -3270402730877, -3690057678597];
    const RSECS: [i64; 4] = [28343, 1079885935, 1709164465, 1738645318];

    #[test]
    fn four_pillars() {
        for i in 0..4 {
            let (y, mo, d, h, mi, s) = DATIS[i];
            let dati = Dati::from_fields(y, mo, d, h, mi, s, Zone::CHINA).unwrap();
            assert_eq!(USECS[i], dati_to_usec(dati));
            let bazi = usec_to_bazi(USECS[i], 119.0).unwrap();
            assert_eq!(BAZIS[i], bazi.pillars(), "{}", USECS[i]);
            assert_eq!(Ok(bazi), dati_to_bazi(dati, 119.0));
        }
    }

    #[test]
    fn real_solar_time() {
        for i in 0..4 {
            let cjie = usec_to_cjie(USECS[i]).unwrap();
            assert_eq!(Ok(Fix64::from_bits(EOTS[i])), bias_eot(USECS[i], cjie));
            assert_eq!(Ok(RSECS[i]), usec_to_rsec(USECS[i], 119.0));
        }
    }

    #[test]
    fn equation_of_time_stays_bounded() {
        // 全年在 -15 至 +17 分之間
        let mut usec = USEC_J2000;
        while usec < USEC_J2000 + 366 * 86400 {
            let cjie = usec_to_cjie(usec).unwrap();
            let eot = bias_eot(usec, cjie).unwrap().safe_int();
            assert!((-15 * 60..=17 * 60).contains(&eot), "{usec}: {eot}");
            usec += 86400 * 5;
        }
    }

    #[test]
    fn longitude() {
        assert_eq!(Fix64::from_int(28800), bias_lon(Fix64::from_int(120)));
        assert_eq!(Fix64::from_int(-240), bias_lon(Fix64::from_int(-1)));
        // 東移一度，時柱不變，仍為壬子時
        let bazi = usec_to_bazi(1709136666, 120.0).unwrap();
        assert_eq!(RenZi, bazi.shi);
        let bazi = usec_to_bazi(1709136666, 0.0).unwrap();
        assert_eq!(WuShen, bazi.shi);
    }

    #[test]
    fn term_must_contain_instant() {
        let usec = 1709136666;
        let cjie = usec_to_cjie(usec).unwrap();
        let (last, next) = (cjie_to_usec(cjie).unwrap(), cjie_to_usec(cjie + 1).unwrap());
        assert!(bias_eot(last, cjie).is_ok());
        assert!(bias_eot(next - 1, cjie).is_ok());
        for (usec, cjie) in [(next, cjie), (last - 1, cjie), (usec, cjie + 1), (usec, cjie - 1)] {
            assert!(
                matches!(bias_eot(usec, cjie), Err(Error::OutOfRange { domain: Domain::Usec, .. })),
                "{usec} {cjie}"
            );
        }
        // 遠離表域者回報錯誤，不溢出
        for usec in [i64::MAX / 4, i64::MAX, i64::MIN] {
            assert!(bias_eot(usec, 0).is_err(), "{usec}");
        }
        assert!(bias_eot(0, i32::MAX).is_err());
    }

    #[test]
    fn out_of_range() {
        assert!(usec_to_bazi(i64::MAX, 119.0).is_err());
        assert!(usec_to_rsec(i64::MIN, 0.0).is_err());
    }
}
