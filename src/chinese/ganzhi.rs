//! 干支
//!
//! 六十甲子以 `(6 × 干 − 5 × 支) mod 60` 編號，干支陰陽須相同，故只有六十種組合。
//!
//! # 用例
//!
//! ```
//! use nongli::chinese::{Dizhi, Ganzhi, Tiangan};
//!
//! let gz = Ganzhi::new(Tiangan::Jia, Dizhi::Chen).unwrap();
//! assert_eq!(Ganzhi::JiaChen, gz);
//! assert_eq!(40, gz.index());
//! assert_eq!(None, Ganzhi::new(Tiangan::Jia, Dizhi::Chou));
//! ```

use crate::error::Error;
use crate::math::pymod;

use super::jieqi::{Jieqi, Shihou, shihou_to_usec};
use super::{Riqi, days_in_cyue, riqi_to_cyue, riqi_to_uday, usec_to_uday};

/// 天干
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tiangan {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Tiangan {
    pub const ALL: [Tiangan; 10] = {
        use Tiangan::*;
        [Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui]
    };

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// 地支
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Dizhi {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Dizhi {
    pub const ALL: [Dizhi; 12] = {
        use Dizhi::*;
        [Zi, Chou, Yin, Mao, Chen, Si, Wu, Wei, Shen, You, Xu, Hai]
    };

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// 六十甲子
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Ganzhi {
    JiaZi,
    YiChou,
    BingYin,
    DingMao,
    WuChen,
    JiSi,
    GengWu,
    XinWei,
    RenShen,
    GuiYou,
    JiaXu,
    YiHai,
    BingZi,
    DingChou,
    WuYin,
    JiMao,
    GengChen,
    XinSi,
    RenWu,
    GuiWei,
    JiaShen,
    YiYou,
    BingXu,
    DingHai,
    WuZi,
    JiChou,
    GengYin,
    XinMao,
    RenChen,
    GuiSi,
    JiaWu,
    YiWei,
    BingShen,
    DingYou,
    WuXu,
    JiHai,
    GengZi,
    XinChou,
    RenYin,
    GuiMao,
    JiaChen,
    YiSi,
    BingWu,
    DingWei,
    WuShen,
    JiYou,
    GengXu,
    XinHai,
    RenZi,
    GuiChou,
    JiaYin,
    YiMao,
    BingChen,
    DingSi,
    WuWu,
    JiWei,
    GengShen,
    XinYou,
    RenXu,
    GuiHai,
}

impl Ganzhi {
    /// 甲子至癸亥，依序排列
    #[rustfmt::skip]
    pub const ALL: [Ganzhi; 60] = {
        use Ganzhi::*;
        [
            JiaZi,   YiChou,  BingYin,  DingMao,  WuChen,  JiSi,    GengWu,  XinWei,  RenShen,  GuiYou,
            JiaXu,   YiHai,   BingZi,   DingChou, WuYin,   JiMao,   GengChen, XinSi,  RenWu,    GuiWei,
            JiaShen, YiYou,   BingXu,   DingHai,  WuZi,    JiChou,  GengYin, XinMao,  RenChen,  GuiSi,
            JiaWu,   YiWei,   BingShen, DingYou,  WuXu,    JiHai,   GengZi,  XinChou, RenYin,   GuiMao,
            JiaChen, YiSi,    BingWu,   DingWei,  WuShen,  JiYou,   GengXu,  XinHai,  RenZi,    GuiChou,
            JiaYin,  YiMao,   BingChen, DingSi,   WuWu,    JiWei,   GengShen, XinYou, RenXu,    GuiHai,
        ]
    };

    /// 由干支組合，陰陽不同則為 `None`。
    pub fn new(gan: Tiangan, zhi: Dizhi) -> Option<Self> {
        if gan.index() % 2 != zhi.index() % 2 {
            return None;
        }
        let ord = 6 * gan.index() as i32 - 5 * zhi.index() as i32;
        Some(Self::ALL[pymod(ord, 60) as usize])
    }
    /// 由序號（甲子為 0）取得干支，超出 `0..60` 則為 `None`。
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
    pub fn index(self) -> u8 {
        self as u8
    }
    /// 天干
    pub fn tiangan(self) -> Tiangan {
        Tiangan::ALL[(self.index() % 10) as usize]
    }
    /// 地支
    pub fn dizhi(self) -> Dizhi {
        Dizhi::ALL[(self.index() % 12) as usize]
    }
}

/// 以 `offset` 為甲子之前的序數，將任意序數映至六十甲子。
#[inline]
pub(crate) fn cycle(ordinal: i64, offset: i64) -> Ganzhi {
    Ganzhi::ALL[pymod(ordinal + offset, 60) as usize]
}

/// 年干支（年柱）
///
/// # 用例
///
/// ```
/// use nongli::chinese::{Ganzhi, nian_to_ganzhi};
///
/// assert_eq!(Ganzhi::JiaZi, nian_to_ganzhi(1984));
/// ```
pub fn nian_to_ganzhi(nian: i32) -> Ganzhi {
    cycle(nian as i64, -4)
}

/// 日干支（日柱）
pub fn uday_to_ganzhi(uday: i32) -> Ganzhi {
    cycle(uday as i64, 17)
}

/// 夏曆日期的日干支。
pub fn riqi_to_ganzhi(riqi: Riqi) -> Result<Ganzhi, Error> {
    riqi_to_uday(riqi).map(uday_to_ganzhi)
}

/// 求 `nianyue` 所在月中日干支為 `ganzhi` 的一日，`nianyue.tian` 不計。
///
/// 一月至多三十日，不足一甲子，該月無此干支則回報 [`Error::GanzhiNotInMonth`]。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{Ganzhi, Riqi, ganzhi_to_riqi};
///
/// let riqi = ganzhi_to_riqi(Riqi::new(2024, 2, 1), Ganzhi::GuiHai).unwrap();
/// assert_eq!(Riqi::new(2024, 2, 20), riqi);
/// ```
pub fn ganzhi_to_riqi(nianyue: Riqi, ganzhi: Ganzhi) -> Result<Riqi, Error> {
    let cyue = riqi_to_cyue(nianyue)?;
    let day0 = riqi_to_uday(Riqi { tian: 1, ..nianyue })? - 1;
    let diff = pymod(ganzhi.index() as i32 - uday_to_ganzhi(day0).index() as i32, 60);
    if diff == 0 || diff > days_in_cyue(cyue)? as i32 {
        return Err(Error::GanzhiNotInMonth {
            nian: nianyue.nian,
            ryue: nianyue.ryue,
            ganzhi: ganzhi.index(),
        });
    }
    Ok(Riqi {
        tian: diff as u8,
        ..nianyue
    })
}

/// `jie` 當日或其後第一個庚日，再加 `skip` 日。
fn geng_after(jie: Jieqi, sui: i32, skip: i32) -> Result<i32, Error> {
    let uday = usec_to_uday(shihou_to_usec(Shihou::new(sui, jie))?)?;
    let gan = uday_to_ganzhi(uday).tiangan().index() as i32;
    Ok(uday + pymod(Tiangan::Geng.index() as i32 - gan, 10) + skip)
}

/// 該歲初伏首日：夏至日（北京時間）起第三個庚日，夏至當日若為庚日亦計。
///
/// # 用例
///
/// ```
/// use nongli::{Date, uday_to_date};
/// use nongli::chinese::sui_to_toufu;
///
/// let toufu = sui_to_toufu(2024).map(uday_to_date).unwrap();
/// assert_eq!(Date::new(2024, 7, 15).unwrap(), toufu);
/// ```
pub fn sui_to_toufu(sui: i32) -> Result<i32, Error> {
    geng_after(Jieqi::Xiazhi, sui, 20)
}

/// 該歲末伏首日：立秋日（北京時間）起第一個庚日。
pub fn sui_to_sanfu(sui: i32) -> Result<i32, Error> {
    geng_after(Jieqi::Liqiu, sui, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Domain;

    const UDAYS: [i32; 4] = [0, 12498, 19782, 20123];
    const RIQIS: [(i32, u8, u8); 4] = [(1969, 22, 24), (2004, 5, 1), (2024, 2, 20), (2025, 2, 7)];
    const NZHUS: [Ganzhi; 4] = [Ganzhi::JiYou, Ganzhi::JiaShen, Ganzhi::JiaChen, Ganzhi::YiSi];
    const RZHUS: [Ganzhi; 4] = [Ganzhi::XinSi, Ganzhi::JiHai, Ganzhi::GuiHai, Ganzhi::JiaChen];
    const RGANS: [Tiangan; 4] = [Tiangan::Xin, Tiangan::Ji, Tiangan::Gui, Tiangan::Jia];
    const RZHIS: [Dizhi; 4] = [Dizhi::Si, Dizhi::Hai, Dizhi::Hai, Dizhi::Chen];
    const SUIS: [i32; 4] = [1970, 2004, 2024, 2025];
    const TOUFUS: [i32; 4] = [199, 12619, 19919, 20289];
    const SANFUS: [i32; 4] = [219, 12639, 19949, 20309];

    #[test]
    fn day_pillars() {
        for i in 0..4 {
            let (nian, ryue, tian) = RIQIS[i];
            let riqi = Riqi::new(nian, ryue, tian);
            let rzhu = RZHUS[i];
            assert_eq!(RGANS[i], rzhu.tiangan());
            assert_eq!(RZHIS[i], rzhu.dizhi());
            assert_eq!(Some(rzhu), Ganzhi::new(RGANS[i], RZHIS[i]));
            assert_eq!(NZHUS[i], nian_to_ganzhi(nian));
            assert_eq!(rzhu, uday_to_ganzhi(UDAYS[i]));
            assert_eq!(Ok(rzhu), riqi_to_ganzhi(riqi));
            assert_eq!(Ok(riqi), ganzhi_to_riqi(riqi, rzhu));
        }
    }

    #[test]
    fn dog_days() {
        for i in 0..4 {
            assert_eq!(Ok(TOUFUS[i]), sui_to_toufu(SUIS[i]), "{}", SUIS[i]);
            assert_eq!(Ok(SANFUS[i]), sui_to_sanfu(SUIS[i]), "{}", SUIS[i]);
            let toufu = uday_to_ganzhi(TOUFUS[i]);
            assert_eq!(Tiangan::Geng, toufu.tiangan());
            assert_eq!(Tiangan::Geng, uday_to_ganzhi(SANFUS[i]).tiangan());
        }
        assert!(matches!(
            sui_to_toufu(2200),
            Err(Error::OutOfRange {
                domain: Domain::Cjie,
                ..
            })
        ));
    }

    #[test]
    fn ganzhi_missing_from_month() {
        // 2024 正月初一甲辰，前一日癸卯
        let nianyue = Riqi::new(2024, 2, 1);
        assert_eq!(Ok(Riqi::new(2024, 2, 1)), ganzhi_to_riqi(nianyue, Ganzhi::JiaChen));
        assert_eq!(
            Err(Error::GanzhiNotInMonth {
                nian: 2024,
                ryue: 2,
                ganzhi: Ganzhi::GuiMao.index(),
            }),
            ganzhi_to_riqi(nianyue, Ganzhi::GuiMao)
        );
        assert!(ganzhi_to_riqi(nianyue, Ganzhi::WuZi).is_err());
        assert!(ganzhi_to_riqi(Riqi::new(2300, 2, 1), Ganzhi::JiaZi).is_err());
    }

    #[test]
    fn all_combinations() {
        let mut seen = [false; 60];
        for gan in Tiangan::ALL {
            for zhi in Dizhi::ALL {
                match Ganzhi::new(gan, zhi) {
                    Some(gz) => {
                        assert_eq!((gan, zhi), (gz.tiangan(), gz.dizhi()));
                        assert!(!seen[gz.index() as usize]);
                        seen[gz.index() as usize] = true;
                    }
                    None => assert_ne!(gan.index() % 2, zhi.index() % 2),
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn indices() {
        for (i, gz) in Ganzhi::ALL.into_iter().enumerate() {
            assert_eq!(i as u8, gz.index());
            assert_eq!(Some(gz), Ganzhi::from_index(i as u8));
        }
        assert_eq!(None, Ganzhi::from_index(60));
        assert_eq!(None, Tiangan::from_index(10));
        assert_eq!(Some(Dizhi::Hai), Dizhi::from_index(11));
        assert_eq!(Ganzhi::GuiHai, nian_to_ganzhi(1983));
        assert_eq!(Ganzhi::JiaZi, nian_to_ganzhi(4));
        assert_eq!(Ganzhi::GuiHai, nian_to_ganzhi(3));
        assert_eq!(Ganzhi::XinSi, uday_to_ganzhi(-60));
    }
}
