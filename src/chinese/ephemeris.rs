//! 曆表數據
//!
//! 各表由離線擬合工具生成，只讀，本程序不作修改。覆蓋 1900 至 2199 年；欲擴展年份，須重新生成各表，而非改動代碼。
//!
//! 各殘差表按 [`PAGE_SIZE`](crate::fit::PAGE_SIZE) 分頁，逐位由低至高排列。
//!
//! 約定：
//!
//! - `uday` 以 1970-01-01 為 0；夏曆日界取北京時間（UTC+8）零時。
//! - `cyue` 以 1970 年正月為 0。
//! - `cjie` 以 1970 歲冬至（1969-12-22）為 0。

use crate::error::Domain;
use crate::fit::{Linear, Packed, Shifted};

pub const NIAN_MIN: i32 = 1900;
pub const NIAN_MAX: i32 = 2199;
pub const SUI_MIN: i32 = 1900;
pub const SUI_MAX: i32 = 2199;
pub const CYUE_MIN: i32 = -866;
pub const CYUE_MAX: i32 = 2844;
pub const CJIE_MIN: i32 = -1680;
pub const CJIE_MAX: i32 = 5519;
/// 首月朔日
pub const UDAY_MIN: i32 = -25_537;
/// 末月晦日
pub const UDAY_MAX: i32 = 84_050;
pub const USEC_MIN: i64 = -2_209_849_421;
pub const USEC_MAX: i64 = 7_257_241_875;

/// 年 → 正月序
pub(crate) const NY_PRED: Linear = Linear {
    slope: 12,
    intercept: -24_364,
    frac_slope: 47,
    frac_intercept: 44,
    bits: 7,
};

/// 月序 → 朔日
pub(crate) const YD_PRED: Linear = Linear {
    slope: 29,
    intercept: 35,
    frac_slope: 543,
    frac_intercept: 115,
    bits: 10,
};

/// 日 → 月序，僅預測
pub(crate) const DY_PRED: Shifted = Shifted {
    intercept: -1,
    slope: 2219,
    offset: 18160,
    bits: 16,
};

/// 月序 → 年，僅預測
pub(crate) const YN_PRED: Shifted = Shifted {
    intercept: 1970,
    slope: 331,
    offset: 2062,
    bits: 12,
};

/// 交節時刻多項式之移位
pub(crate) const JS_BITS: u32 = 12;
/// 交節時刻之線性部分，`[斜率, 截距]`
pub(crate) const JS_LINEAR: [i64; 2] = [45_120_763, -74_800_046_646];
/// 各節氣的六次多項式係數，由常數項至六次項，以冬至為首
#[rustfmt::skip]
pub(crate) const JS_COEFS: [[i64; 7]; 24] = [
    [4_580_906_555, 41_562_344_552, -487_880_015_835, 1_306_410_493_045, -1_966_665_847_158, 1_578_127_816_366, -527_357_392_892],
    [3_507_830_129, 54_388_461_165, -551_654_203_307, 1_475_456_423_411, -2_218_607_047_897, 1_778_300_859_811, -593_596_551_748],
    [2_738_286_392, 63_721_923_850, -598_719_485_797, 1_601_969_575_098, -2_409_800_270_489, 1_932_324_647_072, -645_270_524_518],
    [1_672_699_920, 76_494_149_531, -662_403_784_377, 1_771_254_419_899, -2_662_816_803_843, 2_133_929_828_664, -712_176_816_279],
    [1_278_304_988, 81_313_756_247, -686_848_794_180, 1_837_338_401_042, -2_763_245_620_387, 2_215_279_299_603, -739_616_353_938],
    [233_183_100, 93_850_857_933, -749_407_046_313, 2_003_748_341_589, -3_012_135_254_036, 2_413_725_981_799, -805_515_636_919],
    [529_855_448, 90_384_646_965, -732_475_407_578, 1_959_684_274_551, -2_947_701_010_752, 2_363_531_233_027, -789_241_973_035],
    [-979, 96_696_896_738, -763_712_018_096, 2_042_077_203_069, -3_069_877_987_433, 2_460_100_290_262, -821_027_199_336],
    [445_989_351, 91_447_879_860, -737_912_044_358, 1_974_491_302_028, -2_970_359_050_699, 2_382_001_881_877, -795_508_806_707],
    [864_839_709, 86_347_581_460, -711_969_916_229, 1_904_167_009_468, -2_863_202_706_224, 2_294_981_152_302, -766_084_039_569],
    [1_578_715_237, 77_847_404_097, -669_736_790_972, 1_792_304_321_341, -2_696_613_579_349, 2_162_725_382_468, -722_353_978_325],
    [2_214_574_317, 70_138_043_125, -630_727_310_166, 1_687_084_536_111, -2_537_054_153_992, 2_033_745_516_522, -678_934_361_829],
    [3_208_508_899, 58_290_533_222, -571_833_035_620, 1_531_017_457_485, -2_304_531_302_443, 1_849_068_383_811, -617_847_975_681],
    [4_439_578_580, 43_422_161_085, -496_962_555_230, 1_330_036_932_650, -2_001_200_026_200, 1_605_019_662_295, -536_072_709_948],
    [4_750_434_080, 39_769_098_162, -479_009_334_234, 1_283_012_473_507, -1_931_965_074_700, 1_550_691_855_567, -518_322_556_116],
    [5_922_171_505, 25_675_312_143, -408_324_121_911, 1_094_020_858_465, -1_647_849_973_979, 1_322_993_279_368, -442_319_578_952],
    [6_276_127_755, 21_495_237_672, -387_691_412_894, 1_039_742_464_794, -1_567_585_693_609, 1_259_735_075_243, -421_560_963_143],
    [7_259_750_132, 9_675_275_178, -328_453_721_189, 881_473_027_903, -1_329_825_899_960, 1_069_321_256_029, -358_047_298_102],
    [6_967_809_453, 13_248_527_419, -346_583_672_626, 930_502_809_132, -1_404_362_976_166, 1_129_717_697_764, -378_425_630_991],
    [8_066_655_515, 78_093_567, -280_761_023_458, 755_132_332_901, -1_141_657_406_356, 919_925_064_135, -308_649_054_000],
    [7_615_207_523, 5_515_342_455, -307_957_913_947, 827_656_318_341, -1_250_396_711_865, 1_006_843_262_333, -337_585_470_527],
    [8_077_126_320, 3_523, -280_453_585_031, 754_533_552_003, -1_141_088_016_296, 919_730_088_213, -308_669_982_828],
    [7_651_859_919, 5_109_644_881, -305_948_532_682, 822_354_726_896, -1_242_536_475_625, 1_000_634_435_263, -335_544_169_952],
    [7_815_696_802, 3_141_129_021, -296_020_282_727, 795_659_454_452, -1_202_176_491_389, 968_103_559_405, -324_623_310_893],
];

/// 秒 → 節序，僅預測：`((SJ[1] * usec >> SJ_BITS) + SJ[2] >> SJ_BITS) + SJ[0]`
pub(crate) const SJ_BITS: u32 = 17;
pub(crate) const SJ_PRED: [i64; 3] = [1, 13065, 23868];

/// 各年閏月序，每年 4 位，無閏為 13
pub(crate) static NR_RUNS: Packed = Packed {
    domain: Domain::Nian,
    min: NIAN_MIN,
    len: 300,
    width: 4,
    pages: &[&NR_RUNS_0],
};

static NR_RUNS_0: [u8; 150] = [
    0xd8, 0x5d, 0xdd, 0xd4, 0x2d, 0x6d, 0xdd, 0xd5, 0x2d, 0x7d, 0xdd, 0xd5,
    0x4d, 0xdd, 0xd2, 0xd6, 0x5d, 0xdd, 0xd3, 0xd7, 0x6d, 0xdd, 0xd4, 0x2d,
    0x7d, 0xdd, 0xd5, 0x3d, 0x8d, 0xdd, 0xd6, 0x4d, 0xdd, 0xd3, 0xd7, 0x5d,
    0xdd, 0xd4, 0xd8, 0x6d, 0xdd, 0xd4, 0xda, 0x6d, 0xdd, 0xd5, 0x3d, 0x8d,
    0xdd, 0xd5, 0x4d, 0xdd, 0xd2, 0xd7, 0x5d, 0xdd, 0xd4, 0xd9, 0x6d, 0xdd,
    0xd4, 0x2d, 0x6d, 0xdd, 0xd5, 0x3d, 0xbd, 0xdd, 0xd6, 0x5d, 0xdd, 0xd2,
    0xd7, 0x5d, 0xdd, 0xd3, 0xd8, 0x6d, 0xdd, 0xd4, 0x3d, 0x7d, 0xdd, 0xd5,
    0x4d, 0x8d, 0xdd, 0xd6, 0x4d, 0xdd, 0xd3, 0xd7, 0x5d, 0xdd, 0xd4, 0xd8,
    0x6d, 0xdd, 0xd4, 0x2d, 0x7d, 0xdd, 0xd5, 0x4d, 0x9d, 0xdd, 0xd6, 0x4d,
    0xdd, 0xd3, 0xd7, 0x5d, 0xdd, 0xd4, 0xdb, 0x6d, 0xdd, 0xd5, 0x2d, 0x7d,
    0xdd, 0xd5, 0x4d, 0xbd, 0xdd, 0xd6, 0x5d, 0xdd, 0xd3, 0xd7, 0x6d, 0xdd,
    0xd4, 0xda, 0x6d, 0xdd, 0xd5, 0x3d, 0x7d, 0xdd, 0xd6, 0x4d, 0xdd, 0xd2,
    0xd6, 0x5d, 0xdd, 0xd3, 0xd7, 0x6d,
];

/// 正月序殘差，每年 1 位，含次年
pub(crate) static NY_RESS: Packed = Packed {
    domain: Domain::Nian,
    min: NIAN_MIN,
    len: 301,
    width: 1,
    pages: &[&NY_RESS_0],
};

static NY_RESS_0: [u8; 38] = [
    0xb6, 0xb5, 0xbd, 0xad, 0xed, 0x6d, 0x6f, 0x6f, 0x7b, 0x7b, 0xfb, 0xdb,
    0xdf, 0xde, 0xfe, 0xf6, 0xf6, 0xb7, 0xbf, 0xbf, 0xfd, 0xfd, 0xef, 0xef,
    0x7f, 0x7f, 0xff, 0xfb, 0xff, 0xdf, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xbf,
    0xff, 0x1f,
];

/// 朔日殘差，每月 2 位，含次月
pub(crate) static YD_RESS: Packed = Packed {
    domain: Domain::Cyue,
    min: CYUE_MIN,
    len: 3712,
    width: 2,
    pages: &[&YD_RESS_0],
};

static YD_RESS_0: [u8; 928] = [
    0x66, 0x44, 0x95, 0x99, 0x55, 0x51, 0x66, 0x56, 0x55, 0x9a, 0x59, 0x45,
    0x95, 0x66, 0x15, 0x55, 0xa6, 0x56, 0x55, 0x99, 0x99, 0x59, 0x55, 0x65,
    0x66, 0x56, 0x55, 0x99, 0x59, 0x55, 0x65, 0x66, 0x55, 0xa5, 0x99, 0x55,
    0x54, 0xa9, 0x56, 0x51, 0xa5, 0x6a, 0x46, 0x94, 0x99, 0x99, 0x55, 0x65,
    0x66, 0x66, 0x56, 0x99, 0x99, 0x55, 0x59, 0x66, 0x56, 0x55, 0xa6, 0x59,
    0x45, 0x95, 0xaa, 0x15, 0x55, 0xaa, 0x66, 0x44, 0x99, 0x9a, 0x55, 0x55,
    0x66, 0x56, 0x55, 0x96, 0x99, 0x55, 0x95, 0x69, 0x66, 0x55, 0x65, 0x9a,
    0x55, 0x55, 0xa9, 0x5a, 0x11, 0xa5, 0x6a, 0x56, 0x94, 0xa9, 0x59, 0x95,
    0x65, 0x66, 0x55, 0xa5, 0x99, 0x55, 0x95, 0xa9, 0x66, 0x55, 0x65, 0xa6,
    0x5a, 0x55, 0x99, 0xaa, 0x19, 0x55, 0xaa, 0x66, 0x45, 0x99, 0x9a, 0x55,
    0x59, 0x6a, 0x56, 0x55, 0xaa, 0x59, 0x55, 0x99, 0xaa, 0x55, 0x55, 0x66,
    0x66, 0x55, 0x95, 0x99, 0x99, 0x55, 0x65, 0x6a, 0x56, 0x95, 0xa9, 0x59,
    0x95, 0xa9, 0x66, 0x55, 0xa5, 0xaa, 0x55, 0x95, 0xa9, 0x5a, 0x55, 0x65,
    0x6a, 0x66, 0x95, 0x99, 0x99, 0x99, 0x55, 0x66, 0x66, 0x65, 0x9a, 0x99,
    0x55, 0x99, 0x66, 0x56, 0x55, 0xaa, 0x5a, 0x55, 0xa9, 0xaa, 0x59, 0x55,
    0xaa, 0x66, 0x66, 0x99, 0x99, 0x99, 0x59, 0x66, 0x66, 0x66, 0xa6, 0x99,
    0x59, 0x95, 0xa9, 0x66, 0x55, 0xa5, 0xaa, 0x56, 0x95, 0xaa, 0x9a, 0x51,
    0xa5, 0x6a, 0x56, 0x96, 0xa9, 0x99, 0x99, 0x69, 0x66, 0x66, 0x66, 0xaa,
    0x99, 0x55, 0x99, 0x6a, 0x56, 0x55, 0xaa, 0x6a, 0x55, 0x99, 0xaa, 0x59,
    0x55, 0xaa, 0x66, 0x65, 0xaa, 0x9a, 0x55, 0xa9, 0x66, 0x56, 0x65, 0xaa,
    0x9a, 0x55, 0x99, 0xaa, 0x6a, 0x55, 0xa6, 0xaa, 0x66, 0x95, 0xa9, 0x9a,
    0x55, 0xa5, 0x6a, 0x56, 0xa5, 0xaa, 0x59, 0x95, 0xea, 0x66, 0x55, 0xa6,
    0xaa, 0x56, 0x95, 0xa9, 0xaa, 0x55, 0x65, 0xaa, 0x66, 0x56, 0x99, 0xaa,
    0x99, 0x59, 0xaa, 0x66, 0x55, 0xba, 0x9a, 0x55, 0xa9, 0xae, 0x56, 0x65,
    0xaa, 0x6a, 0x55, 0xa9, 0xaa, 0x99, 0x65, 0xa6, 0x66, 0x66, 0x9a, 0xa9,
    0x99, 0x99, 0xaa, 0x6a, 0x56, 0xa6, 0xaa, 0x59, 0x95, 0xea, 0x6a, 0x55,
    0xa6, 0xaa, 0x66, 0x95, 0xaa, 0x9a, 0x99, 0xa6, 0x6a, 0x66, 0xa6, 0x99,
    0x99, 0x99, 0xa9, 0x66, 0x66, 0x66, 0xaa, 0x9b, 0x55, 0xa9, 0xae, 0x5a,
    0x65, 0xba, 0x6a, 0x56, 0xa9, 0xaa, 0x99, 0x69, 0xaa, 0x66, 0x66, 0xaa,
    0x99, 0x99, 0x99, 0xaa, 0x66, 0x66, 0xa6, 0xaa, 0x59, 0x95, 0xaa, 0xaa,
    0x55, 0xa6, 0xaa, 0x66, 0x96, 0xaa, 0x9a, 0x99, 0xae, 0x6a, 0x56, 0xa6,
    0xab, 0x99, 0x99, 0xaa, 0x6a, 0x66, 0xa6, 0xaa, 0xaa, 0x95, 0xa9, 0xaa,
    0x9a, 0x65, 0xaa, 0x6a, 0x66, 0xa9, 0xaa, 0x59, 0xa9, 0xaa, 0x66, 0x65,
    0xba, 0x9b, 0x95, 0xa9, 0xaa, 0x5a, 0x66, 0xaa, 0xaa, 0xa6, 0x99, 0xaa,
    0xaa, 0x59, 0xa6, 0xaa, 0x66, 0xa6, 0xaa, 0x9a, 0x99, 0xea, 0x6a, 0x56,
    0xa6, 0xbb, 0x5a, 0x95, 0xee, 0xaa, 0x55, 0xaa, 0xaa, 0x66, 0x9a, 0xaa,
    0xaa, 0x99, 0x6a, 0xaa, 0x66, 0xa6, 0xba, 0xaa, 0x99, 0xa9, 0xae, 0x66,
    0x65, 0xba, 0xab, 0x55, 0xe9, 0xae, 0x9a, 0xa5, 0xaa, 0x6a, 0xa6, 0xaa,
    0xaa, 0x99, 0xa9, 0xaa, 0x66, 0x66, 0xaa, 0xab, 0x99, 0x99, 0xea, 0x6e,
    0x56, 0xa6, 0xbb, 0x6a, 0x95, 0xee, 0xaa, 0x59, 0xaa, 0xab, 0x66, 0xaa,
    0xaa, 0x9a, 0x99, 0xee, 0x6a, 0x66, 0xaa, 0xaa, 0x9a, 0x99, 0xa9, 0xae,
    0x66, 0x66, 0xba, 0xab, 0x56, 0xa9, 0xae, 0x9a, 0xa9, 0xba, 0x6a, 0xa6,
    0xba, 0xaa, 0x99, 0xe9, 0xae, 0x66, 0xa6, 0xba, 0xab, 0x99, 0xa9, 0xaa,
    0xaa, 0x66, 0xaa, 0xaa, 0x6a, 0x9a, 0xaa, 0xaa, 0x99, 0xaa, 0xaa, 0x66,
    0xaa, 0xab, 0x9a, 0x99, 0xee, 0x6e, 0x66, 0xaa, 0xbb, 0xaa, 0x99, 0xaa,
    0xaa, 0xaa, 0xa6, 0xaa, 0xaa, 0xaa, 0xa9, 0xaa, 0x9a, 0xe9, 0xaa, 0x6a,
    0xa6, 0xba, 0xab, 0x99, 0xe9, 0xee, 0x6a, 0xa5, 0xba, 0xab, 0x96, 0xe9,
    0xaa, 0x9a, 0xaa, 0xaa, 0xaa, 0xaa, 0xba, 0xaa, 0xaa, 0xa9, 0xee, 0xaa,
    0x66, 0xaa, 0xbb, 0x9a, 0x99, 0xee, 0xae, 0x56, 0xaa, 0xbb, 0x66, 0x9a,
    0xee, 0xaa, 0xa9, 0xae, 0xaa, 0x66, 0xaa, 0xab, 0xaa, 0xa9, 0xea, 0xae,
    0x66, 0xa6, 0xba, 0xbb, 0x99, 0xe9, 0xee, 0xaa, 0xa5, 0xba, 0x6b, 0xa6,
    0xe9, 0xae, 0x99, 0xe9, 0xba, 0x6a, 0xa6, 0xbb, 0xab, 0x99, 0xea, 0xee,
    0x6a, 0xa6, 0xaa, 0xbb, 0x9a, 0x99, 0xee, 0xae, 0x6a, 0xaa, 0xbb, 0x6a,
    0xaa, 0xee, 0xaa, 0x99, 0xfe, 0xab, 0x66, 0xba, 0xbb, 0x9a, 0xa9, 0xee,
    0xae, 0x66, 0xaa, 0xbb, 0xaa, 0x9a, 0xaa, 0xae, 0xaa, 0xaa, 0xba, 0xab,
    0xa6, 0xfa, 0xae, 0x9a, 0xe9, 0xbe, 0x6a, 0xa6, 0xbb, 0xbb, 0x99, 0xea,
    0xee, 0xaa, 0xa6, 0xba, 0xab, 0xaa, 0xab, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xab, 0xaa, 0x99, 0xee, 0xaf, 0x66, 0xba, 0xbb, 0xab, 0xa9,
    0xee, 0xae, 0x6a, 0xba, 0xbb, 0xaa, 0xba, 0xae, 0xaa, 0xaa, 0xee, 0xaa,
    0xaa, 0xaa, 0xbb, 0xab, 0x9a, 0xea, 0xee, 0x6a, 0xa6, 0xbb, 0xbb, 0x9a,
    0xea, 0xee, 0x9a, 0xaa, 0xbb, 0xab, 0xaa, 0xfb, 0xaa, 0xaa, 0xea, 0xae,
    0xaa, 0xaa, 0xba, 0xbb, 0xaa, 0xaa, 0xee, 0xee, 0x66, 0xba, 0xbb, 0xab,
    0xaa, 0xee, 0xae, 0xaa, 0xba, 0xbb, 0x66, 0xba, 0xef, 0x9a, 0xa9, 0xfe,
    0xae, 0xa6, 0xba, 0xbb, 0xbb, 0xa9, 0xea, 0xee, 0x6a, 0xaa, 0xbb, 0xbb,
    0xaa, 0xea, 0xee, 0xaa, 0xea, 0xbb, 0x6b, 0xa6, 0xfb, 0xaf, 0x99, 0xea,
    0xff, 0x66, 0xaa, 0xbb, 0xbb, 0x9a, 0xea, 0xee, 0xaa, 0xaa, 0xba, 0xbb,
    0xaa, 0xba, 0xee, 0xaa, 0xaa, 0xfe, 0xbb, 0x66, 0xba, 0xff, 0x9a, 0xa9,
    0xfe, 0xaf, 0x66, 0xba, 0xbb, 0xaa, 0xaa, 0xee, 0xae, 0xea, 0xae, 0xbb,
    0xaa, 0xba, 0xeb, 0xae, 0xaa, 0xea, 0xbe, 0xaa, 0xaa, 0xfb, 0xbf, 0x99,
    0xea, 0xff, 0xaa, 0xa6, 0xbb, 0xab, 0xaa, 0xee, 0xae, 0xaa, 0xee, 0xbb,
    0xaa, 0xaa, 0xbb, 0xab, 0xaa, 0xea, 0xee, 0xae, 0xaa, 0xba, 0xbf, 0x9b,
    0xa9, 0xfe, 0xaf, 0x6a, 0xba, 0xbf, 0xaa, 0xfa, 0xee, 0xaa, 0xea, 0xfe,
    0xab, 0xaa, 0xba, 0xbf, 0xaa, 0xaa, 0xee, 0xee, 0xaa, 0xaa, 0xbb, 0xbb,
    0x9b, 0xea, 0xee, 0xaa, 0xaa, 0xbb, 0xab, 0xaa, 0xef, 0xae, 0xaa, 0xee,
    0xbf, 0xaa, 0xaa, 0xff, 0xbb, 0xaa, 0xee, 0xee, 0xee, 0xaa, 0xbb, 0xbb,
    0xbb, 0xea, 0xee, 0xee, 0xea, 0xba, 0xbb, 0xaa, 0xfa, 0xef, 0xaa, 0xaa,
    0xfe, 0xaf, 0xa6, 0xfa, 0xbf, 0xab, 0xe9, 0xfe, 0xee, 0xaa, 0xba, 0xbb,
    0xbb, 0xbb, 0xee, 0xee,
];

/// 交節秒數殘差，每節 12 位，含次節
pub(crate) static JS_RESS: Packed = Packed {
    domain: Domain::Cjie,
    min: CJIE_MIN,
    len: 7201,
    width: 12,
    pages: &[&JS_RESS_0, &JS_RESS_1, &JS_RESS_2],
};

static JS_RESS_0: [u8; 3780] = [
    0x79, 0xc2, 0x0f, 0x14, 0x32, 0x17, 0xb4, 0x02, 0x19, 0x20, 0x63, 0x19,
    0x35, 0xd3, 0x13, 0x05, 0x93, 0x17, 0xb2, 0xf2, 0x1f, 0x6b, 0x43, 0x26,
    0x4e, 0xa3, 0x29, 0xef, 0xf2, 0x25, 0x9f, 0x72, 0x1d, 0x14, 0x22, 0x10,
    0x72, 0x61, 0x0e, 0xba, 0x10, 0x12, 0x50, 0x61, 0x17, 0x06, 0x42, 0x23,
    0xa2, 0xa2, 0x2c, 0xde, 0x82, 0x3a, 0xb0, 0x82, 0x43, 0x5d, 0x63, 0x42,
    0x2f, 0x53, 0x3d, 0xfa, 0x62, 0x37, 0x1b, 0xf3, 0x32, 0x0c, 0xb3, 0x2b,
    0xb7, 0xf2, 0x2d, 0x19, 0x52, 0x32, 0x89, 0x42, 0x32, 0xe5, 0x62, 0x32,
    0x15, 0xf3, 0x2b, 0xfd, 0x02, 0x28, 0x7f, 0x62, 0x20, 0xe2, 0x82, 0x15,
    0x8e, 0x92, 0x0f, 0x77, 0x82, 0x11, 0x35, 0xd3, 0x1c, 0x32, 0xf4, 0x27,
    0xe6, 0x34, 0x37, 0xe0, 0x34, 0x3f, 0x3f, 0x65, 0x39, 0x00, 0x05, 0x30,
    0x69, 0x64, 0x24, 0xba, 0x13, 0x25, 0xea, 0xd2, 0x28, 0x15, 0xc3, 0x29,
    0xa2, 0xf2, 0x2b, 0x6b, 0xe2, 0x2e, 0xd9, 0x32, 0x35, 0x68, 0xe3, 0x39,
    0xc7, 0x83, 0x44, 0x9c, 0x23, 0x4b, 0xf6, 0x23, 0x46, 0xbb, 0xc3, 0x3e,
    0x2a, 0xa3, 0x35, 0xad, 0xf2, 0x39, 0x87, 0x52, 0x43, 0xbe, 0x93, 0x47,
    0x2b, 0xe4, 0x46, 0x45, 0xc4, 0x41, 0x7a, 0x14, 0x3e, 0x9a, 0x24, 0x3c,
    0xb3, 0x34, 0x46, 0xa8, 0x14, 0x53, 0x85, 0x85, 0x57, 0x0e, 0x26, 0x58,
    0x38, 0xf6, 0x4f, 0xf8, 0x85, 0x4a, 0x54, 0x75, 0x44, 0xa0, 0x95, 0x3c,
    0x22, 0x55, 0x36, 0x95, 0x74, 0x30, 0x76, 0xb4, 0x2d, 0x82, 0xe4, 0x2c,
    0xb7, 0x84, 0x39, 0x09, 0x15, 0x4d, 0x73, 0x86, 0x5b, 0x79, 0x57, 0x66,
    0xc5, 0xf7, 0x65, 0x37, 0x47, 0x65, 0xe2, 0xb5, 0x5f, 0x61, 0x75, 0x55,
    0x61, 0x74, 0x4d, 0xc6, 0x83, 0x49, 0xfe, 0x43, 0x4c, 0x73, 0x54, 0x4f,
    0xb1, 0x44, 0x58, 0x88, 0x24, 0x61, 0x22, 0xf5, 0x61, 0x64, 0x15, 0x61,
    0x48, 0x55, 0x59, 0xdf, 0xd4, 0x55, 0x48, 0x74, 0x50, 0xcb, 0xe4, 0x47,
    0xca, 0x14, 0x44, 0x07, 0xc5, 0x45, 0xce, 0xd5, 0x4c, 0x85, 0x86, 0x51,
    0xb8, 0x36, 0x58, 0x4d, 0x56, 0x5c, 0x92, 0x76, 0x57, 0x9e, 0xd6, 0x52,
    0x90, 0xa6, 0x4b, 0x71, 0x86, 0x4e, 0x2d, 0xa6, 0x53, 0xaf, 0xd6, 0x51,
    0x0f, 0x76, 0x4b, 0x3a, 0xc5, 0x43, 0xf3, 0x34, 0x40, 0xf3, 0xf4, 0x3d,
    0xef, 0xc4, 0x43, 0xbb, 0x84, 0x4c, 0x65, 0x95, 0x4f, 0xd2, 0x95, 0x55,
    0x11, 0xe6, 0x5a, 0x1b, 0x26, 0x68, 0xd6, 0xd5, 0x71, 0x52, 0xc6, 0x6e,
    0xaa, 0xb5, 0x61, 0xb5, 0x94, 0x51, 0x3b, 0xd4, 0x47, 0x1a, 0x94, 0x44,
    0x2f, 0x54, 0x4f, 0x5c, 0x14, 0x60, 0x74, 0x15, 0x67, 0xfc, 0x55, 0x66,
    0xdf, 0x95, 0x5a, 0x60, 0x45, 0x52, 0xb0, 0xf4, 0x48, 0x08, 0xb5, 0x3c,
    0xa6, 0x14, 0x32, 0x2a, 0x34, 0x29, 0x28, 0x24, 0x27, 0x6d, 0x54, 0x29,
    0xc0, 0x34, 0x36, 0x05, 0x05, 0x47, 0x18, 0xf6, 0x4c, 0x89, 0xc6, 0x4a,
    0x3c, 0x86, 0x3e, 0x6d, 0xb5, 0x39, 0x68, 0x74, 0x39, 0x7b, 0x94, 0x39,
    0x0d, 0x24, 0x3c, 0xbc, 0xa3, 0x3b, 0xac, 0x33, 0x37, 0x64, 0x73, 0x2d,
    0xd0, 0x62, 0x2a, 0x35, 0xf2, 0x2e, 0xc2, 0xe2, 0x31, 0x38, 0x53, 0x37,
    0x5d, 0x43, 0x38, 0x2a, 0xc3, 0x3f, 0xdf, 0x22, 0x48, 0xce, 0x73, 0x4b,
    0x18, 0x84, 0x4b, 0x35, 0x84, 0x47, 0x5b, 0x94, 0x40, 0x13, 0x74, 0x34,
    0x43, 0x53, 0x2d, 0x4a, 0x42, 0x2d, 0x90, 0xe2, 0x2c, 0x1d, 0xa3, 0x32,
    0xcd, 0xd3, 0x34, 0x32, 0x24, 0x37, 0xee, 0x63, 0x32, 0x4a, 0x04, 0x28,
    0xc9, 0xe3, 0x1f, 0x51, 0x43, 0x1b, 0x66, 0xf3, 0x1a, 0x8d, 0x13, 0x19,
    0x65, 0xa3, 0x1b, 0x00, 0x03, 0x22, 0x8c, 0x83, 0x23, 0xf5, 0x83, 0x27,
    0x30, 0x84, 0x29, 0x15, 0x34, 0x31, 0x5b, 0xb3, 0x33, 0x30, 0x73, 0x2d,
    0x39, 0xc2, 0x26, 0x92, 0x71, 0x24, 0xdf, 0xc1, 0x2a, 0x92, 0xc2, 0x31,
    0xe8, 0xc2, 0x38, 0x90, 0xe2, 0x3a, 0x8d, 0x62, 0x2f, 0xf5, 0xe1, 0x21,
    0x1f, 0xd1, 0x13, 0x76, 0x80, 0x13, 0x2a, 0xf0, 0x17, 0x30, 0x61, 0x18,
    0x8f, 0x91, 0x18, 0xe7, 0x51, 0x1a, 0xab, 0x12, 0x21, 0x72, 0xd3, 0x27,
    0xca, 0xb3, 0x30, 0x97, 0x23, 0x37, 0xda, 0x03, 0x2f, 0x83, 0x13, 0x21,
    0xce, 0x92, 0x0e, 0x25, 0x12, 0x0a, 0xd4, 0x11, 0x10, 0xce, 0xb2, 0x15,
    0xd5, 0x42, 0x17, 0x78, 0xa2, 0x13, 0x54, 0x22, 0x10, 0x49, 0x22, 0x0d,
    0x38, 0x12, 0x13, 0x3b, 0xc2, 0x20, 0x3a, 0x33, 0x28, 0xcf, 0x23, 0x2d,
    0xca, 0xc3, 0x2a, 0x33, 0x53, 0x2d, 0x45, 0xc2, 0x30, 0x7b, 0x82, 0x30,
    0x1f, 0xf2, 0x2d, 0xc1, 0xb1, 0x28, 0xbf, 0x91, 0x24, 0xbe, 0xf1, 0x20,
    0xa0, 0x01, 0x27, 0xad, 0x41, 0x37, 0xde, 0xb2, 0x41, 0xa6, 0x53, 0x45,
    0xa8, 0x53, 0x3a, 0xea, 0x92, 0x2c, 0xab, 0x81, 0x1a, 0x7c, 0x51, 0x08,
    0x06, 0x01, 0x00, 0x0a, 0x31, 0x01, 0xce, 0x01, 0x0a, 0xa9, 0x42, 0x12,
    0x18, 0x43, 0x1d, 0x35, 0x23, 0x2b, 0x21, 0x34, 0x30, 0xb1, 0x44, 0x31,
    0xbb, 0xe4, 0x28, 0x2e, 0x44, 0x23, 0x0d, 0xd3, 0x1b, 0xa8, 0xd2, 0x11,
    0xb8, 0x31, 0x0e, 0x4b, 0xd1, 0x10, 0xaf, 0x21, 0x17, 0x2b, 0xb2, 0x19,
    0x2e, 0x72, 0x1c, 0xd3, 0x01, 0x22, 0x4a, 0x82, 0x22, 0xa0, 0xa2, 0x27,
    0xda, 0x92, 0x2c, 0xe3, 0x02, 0x39, 0xa9, 0x22, 0x42, 0x41, 0xa3, 0x3f,
    0xdc, 0x32, 0x36, 0x50, 0xd2, 0x2b, 0x43, 0x02, 0x27, 0x5f, 0xf2, 0x24,
    0x45, 0xd2, 0x28, 0x01, 0xb2, 0x31, 0xa8, 0x82, 0x34, 0x40, 0x23, 0x3a,
    0xe9, 0xb3, 0x3d, 0x7a, 0x54, 0x44, 0x88, 0xb4, 0x42, 0x03, 0x45, 0x35,
    0x36, 0xd4, 0x22, 0x0e, 0xb3, 0x10, 0x6e, 0x02, 0x07, 0x51, 0xb2, 0x05,
    0x77, 0xe2, 0x10, 0xde, 0x82, 0x25, 0x46, 0xc4, 0x32, 0x43, 0x15, 0x3c,
    0xb7, 0x65, 0x3e, 0xb6, 0x15, 0x47, 0x3f, 0xd5, 0x4d, 0x61, 0x15, 0x4b,
    0x70, 0x54, 0x42, 0x5b, 0x93, 0x36, 0xd3, 0xe2, 0x2e, 0xa5, 0x52, 0x2a,
    0x72, 0xe2, 0x2c, 0x3e, 0x22, 0x36, 0xeb, 0x32, 0x38, 0x31, 0x33, 0x38,
    0x00, 0x13, 0x33, 0x9d, 0x92, 0x37, 0x6d, 0x42, 0x41, 0xac, 0x23, 0x48,
    0x4d, 0xc4, 0x4b, 0xa4, 0x04, 0x4a, 0xed, 0x14, 0x45, 0xc7, 0x34, 0x3b,
    0x0c, 0x74, 0x34, 0x2e, 0x63, 0x35, 0x73, 0x13, 0x33, 0xc5, 0x03, 0x33,
    0x0b, 0x84, 0x2f, 0x43, 0xd4, 0x34, 0x79, 0xc4, 0x3e, 0xcd, 0x35, 0x47,
    0x30, 0x46, 0x4c, 0x1e, 0xb6, 0x4a, 0x05, 0x26, 0x44, 0x94, 0x25, 0x37,
    0xa5, 0xc4, 0x2c, 0xab, 0x23, 0x2c, 0xf5, 0x73, 0x2c, 0x70, 0x94, 0x34,
    0xf6, 0xb4, 0x3d, 0x45, 0x55, 0x4e, 0x1b, 0xb5, 0x5b, 0xb1, 0x55, 0x61,
    0x82, 0xa5, 0x63, 0x53, 0x35, 0x63, 0x81, 0xf5, 0x61, 0x88, 0x55, 0x5c,
    0x0b, 0x25, 0x58, 0x51, 0x54, 0x59, 0x7f, 0x44, 0x54, 0x70, 0x14, 0x4f,
    0x22, 0x04, 0x46, 0xbb, 0x03, 0x44, 0x43, 0xa3, 0x40, 0xd0, 0x33, 0x38,
    0xc8, 0x83, 0x34, 0x10, 0xb4, 0x38, 0x11, 0xf5, 0x44, 0x2e, 0xc6, 0x50,
    0xb9, 0xd6, 0x5a, 0xa1, 0xf6, 0x61, 0xe5, 0x96, 0x59, 0x86, 0x56, 0x4b,
    0xc6, 0x65, 0x38, 0xf5, 0xb4, 0x31, 0x42, 0x24, 0x33, 0xbe, 0x14, 0x35,
    0x8f, 0x34, 0x39, 0x7d, 0x84, 0x3e, 0xf8, 0xc4, 0x45, 0x86, 0x55, 0x4a,
    0xb2, 0x95, 0x4f, 0x83, 0x35, 0x56, 0xe0, 0x75, 0x51, 0xa3, 0x25, 0x4a,
    0xf3, 0x04, 0x40, 0x16, 0x14, 0x42, 0x64, 0x63, 0x4b, 0x35, 0xa4, 0x53,
    0x79, 0x74, 0x57, 0x83, 0x44, 0x55, 0xb4, 0xb4, 0x52, 0xcf, 0x24, 0x50,
    0xaf, 0x54, 0x54, 0x94, 0xa4, 0x60, 0x73, 0xf5, 0x65, 0x03, 0xe6, 0x67,
    0x22, 0x06, 0x60, 0xc1, 0x65, 0x57, 0xe1, 0xa4, 0x49, 0xee, 0x34, 0x3a,
    0x7b, 0x84, 0x30, 0x24, 0x44, 0x2a, 0x3e, 0x94, 0x28, 0x75, 0x34, 0x29,
    0x92, 0x54, 0x32, 0xdd, 0x44, 0x46, 0x4b, 0xa6, 0x54, 0x64, 0xd7, 0x5d,
    0xc1, 0x87, 0x59, 0x36, 0x37, 0x54, 0xdd, 0xf5, 0x49, 0x1b, 0x35, 0x3b,
    0xbf, 0xf3, 0x31, 0xfb, 0x92, 0x30, 0x39, 0x63, 0x36, 0xc6, 0xe3, 0x3a,
    0xe8, 0x33, 0x3f, 0xb0, 0x63, 0x46, 0x39, 0x04, 0x47, 0x79, 0x24, 0x48,
    0x54, 0xa4, 0x43, 0xbb, 0xa3, 0x43, 0xdf, 0x32, 0x42, 0x1b, 0xe3, 0x3a,
    0xc4, 0x32, 0x34, 0xb3, 0xb2, 0x32, 0x54, 0x03, 0x38, 0xfd, 0xf3, 0x3b,
    0x0c, 0xf4, 0x3e, 0x9f, 0x63, 0x43, 0xec, 0xb3, 0x3f, 0x14, 0x64, 0x3d,
    0x43, 0x44, 0x39, 0x72, 0x54, 0x3c, 0x6f, 0xa4, 0x3d, 0x24, 0x95, 0x36,
    0x98, 0xc4, 0x29, 0xa5, 0xf3, 0x1b, 0x2d, 0x83, 0x14, 0x0d, 0x23, 0x11,
    0xe4, 0x72, 0x14, 0xc2, 0x82, 0x1f, 0x94, 0xe3, 0x24, 0x32, 0x14, 0x2c,
    0xa8, 0xe4, 0x32, 0xf0, 0x84, 0x42, 0xc2, 0xd4, 0x4d, 0x0e, 0x55, 0x4c,
    0x22, 0x74, 0x41, 0xe3, 0x02, 0x31, 0x12, 0x42, 0x24, 0xa4, 0x41, 0x1d,
    0x6a, 0xf1, 0x21, 0x84, 0xe1, 0x31, 0xa3, 0x42, 0x3a, 0x37, 0x83, 0x3c,
    0x16, 0x03, 0x35, 0x90, 0x22, 0x33, 0xf6, 0x51, 0x30, 0x6e, 0x22, 0x27,
    0x26, 0x02, 0x1d, 0xd4, 0x31, 0x14, 0xe5, 0x11, 0x10, 0x0a, 0x82, 0x0e,
    0xfc, 0xf1, 0x13, 0xf4, 0x61, 0x21, 0xe1, 0x52, 0x26, 0x6a, 0x93, 0x25,
    0x6a, 0xc3, 0x1a, 0xfe, 0x02, 0x16, 0x73, 0xc2, 0x16, 0x16, 0xd3, 0x18,
    0x0b, 0x03, 0x1c, 0xe2, 0xb2, 0x1b, 0xd3, 0x62, 0x16, 0x6f, 0x02, 0x0a,
    0x8a, 0x01, 0x00, 0xa1, 0x00, 0x00, 0xef, 0x00, 0x00, 0x53, 0x31, 0x06,
    0xa5, 0x31, 0x0c, 0xb0, 0x21, 0x1a, 0x78, 0x21, 0x29, 0x61, 0x22, 0x34,
    0xa7, 0x92, 0x3a, 0xb8, 0xd2, 0x39, 0xd0, 0x32, 0x34, 0x7f, 0xb2, 0x27,
    0x89, 0x41, 0x1c, 0x6f, 0x60, 0x19, 0x8b, 0x00, 0x17, 0xee, 0x90, 0x1c,
    0x8b, 0xc1, 0x21, 0x0e, 0x92, 0x29, 0x0c, 0x32, 0x28, 0xa8, 0x82, 0x1e,
    0x79, 0x12, 0x17, 0x5b, 0x62, 0x13, 0xb2, 0x32, 0x14, 0x00, 0x73, 0x13,
    0xd2, 0x12, 0x14, 0x5b, 0x12, 0x19, 0xc3, 0x52, 0x17, 0x04, 0x53, 0x16,
    0x29, 0x33, 0x13, 0x2b, 0x23, 0x19, 0xdd, 0x72, 0x1e, 0x29, 0xe3, 0x1b,
    0x70, 0xc2, 0x18, 0xec, 0x41, 0x1a, 0x53, 0x12, 0x23, 0x10, 0xb3, 0x2a,
    0x55, 0xf3, 0x2e, 0xef, 0xd2, 0x2f, 0xdb, 0x92, 0x23, 0x2e, 0x52, 0x16,
    0x3f, 0x01, 0x0a, 0x6d, 0xe0, 0x0d, 0x08, 0x00, 0x1b, 0x34, 0x51, 0x26,
    0xc8, 0xa1, 0x2d, 0x3e, 0x62, 0x32, 0x09, 0x83, 0x39, 0xc9, 0x83, 0x3f,
    0x05, 0xd4, 0x45, 0xcc, 0xf3, 0x4b, 0x0a, 0xd4, 0x43, 0xaa, 0x03, 0x36,
    0xf5, 0x02, 0x24, 0x5f, 0xb2, 0x1e, 0x2e, 0xf2, 0x21, 0x72, 0xa3, 0x26,
    0xf6, 0x63, 0x29, 0x03, 0xd4, 0x26, 0x16, 0x44, 0x23, 0x10, 0x94, 0x1f,
    0xde, 0x43, 0x23, 0xd1, 0xe3, 0x30, 0xd2, 0x64, 0x38, 0x78, 0x45, 0x3c,
    0x8e, 0xf5, 0x37, 0x1d, 0xc5, 0x39, 0x48, 0xf4, 0x3c, 0x6b, 0x44, 0x3e,
    0xfd, 0xe3, 0x40, 0xb6, 0xd3, 0x41, 0xd7, 0xe3, 0x41, 0xf1, 0xf3, 0x3f,
    0xd8, 0x93, 0x44, 0xe8, 0xf3, 0x53, 0x0e, 0xe5, 0x5d, 0xbe, 0xf5, 0x61,
    0x91, 0x15, 0x58, 0x8d, 0x54, 0x4d, 0x1c, 0xe3, 0x3f, 0xdc, 0xc2, 0x30,
    0x64, 0x42, 0x2a, 0x96, 0x52, 0x2e, 0xa5, 0xa3, 0x3a, 0xbd, 0x74, 0x45,
    0x3b, 0xb5, 0x4f, 0x47, 0xd5, 0x5b, 0x0a, 0x26, 0x5e, 0x73, 0x86, 0x5c,
    0x73, 0x26, 0x51, 0xf4, 0x45, 0x47, 0x00, 0x65, 0x3c, 0x01, 0x95, 0x31,
    0x6e, 0xe4, 0x2c, 0x27, 0x34, 0x2e, 0x96, 0x94, 0x34, 0x22, 0x75, 0x38,
    0x37, 0x15, 0x3c, 0xf3, 0xc4, 0x42, 0x73, 0xd5, 0x42, 0xbe, 0x45, 0x46,
    0xef, 0x25, 0x4a, 0xf0, 0x55, 0x56, 0x82, 0x85, 0x5f, 0xcd, 0xb5, 0x5f,
    0x33, 0x55, 0x5a, 0x7d, 0xe4, 0x51, 0x4a, 0xa4, 0x4d, 0x5a, 0x54, 0x4c,
    0x52, 0x54, 0x51, 0x3e, 0x04, 0x5d, 0x12, 0x55, 0x62, 0xab, 0x65, 0x68,
    0x0f, 0xf6, 0x69, 0x39, 0x96, 0x6e, 0xf0, 0x45, 0x6a, 0x30, 0x16, 0x59,
    0x5b, 0xc5, 0x44, 0x67, 0xb4, 0x32, 0xf9, 0x93, 0x29, 0xf4, 0xc3, 0x28,
    0x1f, 0x14, 0x34, 0x92, 0x34, 0x4a, 0x15, 0x96, 0x58, 0x2c, 0x87, 0x60,
    0xa2, 0xc7, 0x5c, 0x81, 0x87, 0x5c, 0xf2, 0xc6, 0x5b, 0x12, 0xf7, 0x53,
    0x10, 0xa6, 0x48, 0xf4, 0xb4, 0x3d, 0x81, 0x24, 0x38, 0x62, 0x54, 0x34,
    0x2d, 0x04, 0x36, 0xf5, 0x13, 0x3f, 0xac, 0x94, 0x42, 0x11, 0xa5, 0x45,
    0xfc, 0x34, 0x43, 0x75, 0x04, 0x48, 0xcb, 0xe3, 0x50, 0x89, 0x74, 0x58,
    0xc2, 0x74, 0x5c, 0xd2, 0x84, 0x5a, 0xfd, 0x14, 0x56, 0xd7, 0xd4, 0x4c,
    0x27, 0x04, 0x46, 0x54, 0x23, 0x47, 0x9e, 0xb3, 0x45, 0xf1, 0x73, 0x47,
    0x44, 0xc4, 0x46, 0x92, 0xa4, 0x4c, 0xba, 0x74, 0x50, 0xd3, 0x25, 0x4f,
    0x09, 0x06, 0x4c, 0xe5, 0xf5, 0x44, 0xc0, 0x05, 0x3c, 0x4d, 0xf5, 0x2e,
    0x63, 0xb4, 0x25, 0x79, 0xd3, 0x26, 0xdb, 0x53, 0x28, 0x78, 0x44, 0x30,
    0x2a, 0xb5, 0x37, 0xb4, 0xb5, 0x46, 0xb6, 0x45, 0x51, 0x20, 0x86, 0x51,
    0x77, 0x45, 0x4f, 0xde, 0xb4, 0x4c, 0xd1, 0x44, 0x4b, 0xcd, 0xa4, 0x46,
    0x6a, 0xf4, 0x43, 0xd6, 0x53, 0x46, 0x17, 0x24, 0x42, 0x03, 0x14, 0x3e,
    0x99, 0xd3, 0x36, 0xfa, 0x62, 0x38, 0x49, 0x12, 0x3a, 0xaf, 0x72, 0x34,
    0x62, 0x62, 0x2e, 0x5a, 0x52, 0x2e, 0x23, 0xb3, 0x37, 0x20, 0x04, 0x42,
    0x9e, 0xa4, 0x4b, 0x84, 0x94, 0x52, 0xc3, 0xf4, 0x49, 0x5f, 0xb4, 0x3b,
    0xad, 0x93, 0x28, 0xfb, 0xf2, 0x1f, 0x78, 0x42, 0x1e, 0x52, 0x73, 0x1e,
    0x79, 0x73, 0x1f, 0x6e, 0xf3, 0x1e, 0xad, 0x33, 0x20, 0xf3, 0x03, 0x21,
    0xf7, 0x63, 0x25, 0xc5, 0x23, 0x2d, 0x3f, 0x34, 0x2a, 0x2c, 0x34, 0x24,
    0xb0, 0x53, 0x1b, 0x0f, 0x13, 0x1f, 0x6c, 0x42, 0x29, 0x12, 0x73, 0x33,
    0x28, 0xd3, 0x3a, 0x0c, 0x23, 0x3a, 0x00, 0xa3, 0x35, 0xd3, 0x32, 0x2f,
    0x76, 0xb2, 0x2f, 0x36, 0x32, 0x3a, 0x10, 0x93, 0x40, 0xa7, 0x53, 0x45,
    0xbb, 0x83, 0x40, 0x3e, 0x33, 0x3c, 0x4e, 0x42, 0x32, 0x51, 0x12, 0x23,
    0xd2, 0x61, 0x18, 0x9b, 0x61, 0x12, 0xde, 0x11, 0x11, 0x21, 0xd2, 0x10,
    0x26, 0xd2, 0x17, 0x42, 0xe2, 0x28, 0x84, 0x03, 0x35, 0x92, 0xf4, 0x3c,
    0x0d, 0x15, 0x37, 0xbd, 0xa4, 0x2f, 0xc1, 0xe3, 0x24, 0x7c, 0x53, 0x16,
    0x6f, 0x72, 0x0c, 0xcc, 0x81, 0x0b, 0x29, 0x12, 0x13, 0xca, 0x72, 0x18,
    0xee, 0xa2, 0x1b, 0x8e, 0x82, 0x1f, 0xda, 0x02, 0x1c, 0xe0, 0xb2, 0x1a,
    0xa9, 0x22, 0x17, 0x1b, 0x12, 0x1b, 0x3c, 0xb1, 0x1f, 0x7f, 0xf1, 0x20,
    0x37, 0x31, 0x21, 0x1a, 0x11, 0x22, 0x9c, 0x91, 0x27, 0x30, 0x02, 0x2b,
    0x3f, 0x02, 0x2e, 0xd5, 0xb1, 0x31, 0x0e, 0x72, 0x2c, 0x02, 0x92, 0x28,
    0xfb, 0x21, 0x25, 0x25, 0xe2, 0x2b, 0x4b, 0x92, 0x2f, 0x3b, 0xf3, 0x28,
    0x06, 0x13, 0x1d, 0x71, 0xa2, 0x0f, 0x2d, 0x02, 0x08, 0x1c, 0xd2, 0x04,
    0x05, 0x52, 0x0a, 0xfd, 0xd1, 0x17, 0xf1, 0x72, 0x1e, 0xa5, 0xc3, 0x23,
    0x1b, 0xe4, 0x24, 0x63, 0x24, 0x2f, 0x60, 0x84, 0x38, 0xe6, 0x94, 0x37,
    0x1d, 0xb4, 0x2f, 0x0a, 0xe3, 0x23, 0x66, 0xa2, 0x1a, 0x12, 0x32, 0x15,
    0xec, 0xb1, 0x1a, 0x10, 0xa2, 0x2a, 0x30, 0x13, 0x33, 0xb8, 0x83, 0x35,
    0x74, 0x03, 0x2e, 0x9d, 0xd2, 0x2c, 0xa8, 0x51, 0x2e, 0x02, 0x72, 0x2c,
    0xcd, 0xf1, 0x28, 0xa7, 0xe1, 0x24, 0xef, 0x61, 0x24, 0x3c, 0xb2, 0x24,
    0x46, 0xe2, 0x2a, 0x3e, 0xb2, 0x37, 0x20, 0x83, 0x3c, 0xa3, 0xa3, 0x3c,
    0xad, 0xb3, 0x32, 0x50, 0x63, 0x2c, 0xcf, 0xa2, 0x28, 0xa3, 0x33, 0x28,
    0x04, 0x94, 0x2b, 0x3f, 0x04, 0x2c, 0x73, 0x44, 0x28, 0x37, 0xe4, 0x1d,
    0x75, 0x83, 0x16, 0xa1, 0xf2, 0x17, 0xfe, 0x52, 0x18, 0x72, 0x93, 0x1d,
    0xdd, 0x93, 0x21, 0x0e, 0x14, 0x2e, 0xe1, 0x03, 0x3b, 0x98, 0xc4, 0x44,
    0xa7, 0x04, 0x4e, 0xb2, 0x14, 0x52, 0xe3, 0xc4, 0x50, 0xb7, 0x04, 0x47,
    0xef, 0xf3, 0x3d, 0xf6, 0x42, 0x3c, 0x29, 0x53, 0x3b, 0x8d, 0x43, 0x42,
    0x00, 0x44, 0x48, 0x30, 0x64, 0x51, 0xdb, 0xd3, 0x51, 0x31, 0x44, 0x47,
    0xbc, 0x63, 0x3d, 0x8d, 0xb3, 0x39, 0x16, 0xe4, 0x3d, 0xb4, 0x34, 0x42,
    0xdf, 0x54, 0x48, 0xa9, 0xb4, 0x50, 0x36, 0x45, 0x50, 0x84, 0xa5, 0x4e,
    0xa6, 0xb5, 0x47, 0x99, 0xc5, 0x46, 0x44, 0xd5, 0x44, 0xb1, 0xf5, 0x3c,
    0x14, 0x15, 0x35, 0x8c, 0x54, 0x33, 0xf5, 0x44, 0x3c, 0xd1, 0x95, 0x46,
    0x52, 0x96, 0x4f, 0x2d, 0x66, 0x54, 0x50, 0xb6, 0x4a, 0xc7, 0x35, 0x3e,
    0xe9, 0x84, 0x31, 0x0e, 0x54, 0x34, 0x62, 0xa3, 0x3f, 0x20, 0x04, 0x4b,
    0x59, 0x74, 0x53, 0x77, 0xf4, 0x56, 0xea, 0x54, 0x5b, 0x6a, 0x65, 0x5f,
    0xa5, 0x45, 0x67, 0x9b, 0x45, 0x71, 0x2a, 0x06, 0x6f, 0x10, 0x06, 0x67,
    0x7a, 0x85, 0x59, 0xdd, 0x14, 0x57, 0x81, 0x34, 0x58, 0x6e, 0x45, 0x55,
    0x9d, 0xe5, 0x50, 0x8b, 0x95, 0x49, 0x8d, 0xf5, 0x42, 0x6e, 0x55, 0x3d,
    0x32, 0xd5, 0x41, 0x31, 0xd5, 0x51, 0x6b, 0xb6, 0x5d, 0x71, 0xa7, 0x65,
    0xec, 0xf7, 0x61, 0xc5, 0x47, 0x60, 0x1a, 0xa7, 0x5d, 0x36, 0xf7, 0x56,
    0x70, 0x46, 0x51, 0xc1, 0x35, 0x4d, 0xa4, 0x45, 0x4b, 0xa3, 0x45, 0x48,
    0x7f, 0x65, 0x4c, 0x7b, 0x25, 0x5a, 0x8c, 0x26, 0x63, 0x3b, 0x27, 0x69,
    0x2e, 0xd7, 0x63, 0x41, 0x16, 0x5e, 0xb0, 0x14, 0x55, 0x2e, 0x24, 0x49,
    0x57, 0x83, 0x41, 0x10, 0x53, 0x41, 0xbd, 0x03, 0x4a, 0xa3, 0xf4, 0x52,
    0x17, 0xd5, 0x5c, 0x18, 0x85, 0x67, 0xc0, 0x65, 0x68, 0x09, 0x06, 0x67,
    0x06, 0xc6, 0x5e, 0xb8, 0xf5, 0x58, 0x08, 0xd5, 0x4e, 0x47, 0x55, 0x41,
    0xe4, 0xb4, 0x37, 0x91, 0x04, 0x31, 0xb2, 0x84, 0x2f, 0xe1, 0x54, 0x2e,
    0xc2, 0xe4, 0x30, 0x63, 0x14, 0x37, 0xda, 0x64, 0x36, 0x27, 0xe5, 0x37,
    0x6e, 0x65, 0x39, 0xaf, 0xa5, 0x45, 0xa2, 0xa5, 0x50, 0x20, 0x66, 0x51,
    0x6e, 0xe5, 0x4b, 0x7c, 0xe4, 0x41, 0xf1, 0x93, 0x39, 0xa0, 0x13, 0x33,
    0x53, 0xc3, 0x34, 0x1a, 0x83, 0x3e, 0xe6, 0x33, 0x44, 0x7d, 0x84, 0x4b,
    0xc3, 0x64, 0x4e, 0xad, 0x04, 0x56, 0x34, 0x44, 0x58, 0x77, 0x74, 0x4d,
    0xa5, 0xc3, 0x3b, 0xa9, 0xa2, 0x29, 0x32, 0xf2, 0x1e, 0x0a, 0xf2, 0x1a,
    0xfd, 0xf1, 0x22, 0x2c, 0x92, 0x34, 0x68, 0xf3, 0x3e, 0x47, 0xe4, 0x43,
    0x9f, 0x84, 0x3d, 0x7b, 0xb4, 0x39, 0x0f, 0x34, 0x36, 0x9d, 0x14, 0x2f,
    0x31, 0xc4, 0x25, 0x7d, 0x53, 0x1b, 0x2f, 0xa3, 0x14, 0xff, 0x02, 0x0e,
    0x94, 0x12, 0x0c, 0x08, 0x02, 0x10, 0x6e, 0x72, 0x0e, 0x98, 0x62, 0x0d,
    0x71, 0x12, 0x09, 0x05, 0xf2, 0x0e, 0x79, 0x81, 0x1a, 0x3f, 0xc2, 0x27,
    0x9a, 0xb2, 0x34, 0xe0, 0x02, 0x3a, 0x28, 0xb3, 0x38, 0xff, 0xf2, 0x2e,
    0x3a, 0x12, 0x26, 0x37, 0x51, 0x23, 0x3f, 0xd1, 0x1d, 0x3d, 0x81, 0x1c,
    0x30, 0xa1, 0x1a, 0x2d, 0x71, 0x22, 0x2f, 0x61, 0x29, 0x3c, 0x12, 0x29,
    0x83, 0xc2, 0x27, 0xb5, 0x22, 0x25, 0x02, 0xf3, 0x20, 0xde, 0x02, 0x17,
    0x1b, 0x52, 0x0f, 0x22, 0x81, 0x0e, 0x55, 0x11, 0x0c, 0xb6, 0x91, 0x0e,
    0x36, 0x12, 0x0f, 0xa1, 0xa2, 0x16, 0xb6, 0x82, 0x1c, 0x6d, 0x13, 0x1b,
    0x09, 0x73, 0x18, 0xa7, 0xa2, 0x18, 0xed, 0x22, 0x1d, 0x53, 0x53, 0x1f,
    0x5a, 0x93, 0x22, 0xfd, 0x82, 0x26, 0x38, 0xd3, 0x1f, 0xe9, 0x22, 0x17,
    0x2f, 0x92, 0x0b, 0x3a, 0x91, 0x0a, 0x26, 0xe0, 0x0c, 0x4d, 0x30, 0x0d,
    0x00, 0xa0, 0x0e, 0x0b, 0x20, 0x14, 0xf5, 0x00, 0x22, 0x30, 0x32, 0x31,
    0x0b, 0x83, 0x40, 0x3f, 0xf3, 0x4a, 0xa3, 0x83, 0x43, 0x26, 0xd3, 0x33,
    0x20, 0x12, 0x1e, 0x16, 0x01, 0x13, 0x58, 0x40, 0x0e, 0x29, 0x41, 0x0c,
    0x98, 0x21, 0x0e, 0xf6, 0x01, 0x0f, 0x7a, 0x22, 0x11, 0xe3, 0x62, 0x13,
    0x0c, 0xc3, 0x1b, 0x10, 0x33, 0x28, 0xd4, 0xd3, 0x29, 0x13, 0xa4, 0x25,
    0xd0, 0xf3, 0x19, 0x45, 0xa3, 0x17, 0xa6, 0xb2, 0x1b, 0x35, 0xd3, 0x20,
    0x22, 0x43, 0x27, 0x07, 0x13, 0x2a, 0x2c, 0x43, 0x2a, 0x34, 0x53, 0x27,
    0x0e, 0x33, 0x2b, 0x00, 0xb3, 0x38, 0x18, 0x64, 0x43, 0xf2, 0x14, 0x4d,
    0x27, 0x75, 0x4b, 0x75, 0x94, 0x47, 0x08, 0xc3, 0x3d, 0x8d, 0xe2, 0x2e,
    0xab, 0xe1, 0x23, 0x45, 0x71, 0x1f, 0xb0, 0x01, 0x23, 0x4c, 0x62, 0x28,
    0xad, 0x92, 0x34, 0xfe, 0xc2, 0x47, 0x59, 0x34, 0x55, 0x73, 0xa5, 0x5e,
    0x01, 0xc6, 0x5a, 0xce, 0x75, 0x52, 0xdb, 0x44, 0x42, 0x9c, 0x04, 0x2d,
    0xa5, 0xa3, 0x1d, 0x0f, 0xc3, 0x18, 0x78, 0xb3, 0x1f, 0x3e, 0xa4, 0x27,
    0x9f, 0x04, 0x30, 0x7d, 0x34, 0x38, 0x07, 0xe5, 0x37, 0x4c, 0x65, 0x38,
    0x5b, 0x35, 0x36, 0x25, 0xf5, 0x3b, 0x86, 0xe4, 0x40, 0xab, 0x54, 0x40,
    0x0d, 0x64, 0x3f, 0x9b, 0x43, 0x3f, 0xd4, 0x33, 0x43, 0x45, 0xb4, 0x46,
    0x70, 0xe4, 0x4c, 0x47, 0xf4, 0x54, 0xcf, 0xd4, 0x54, 0x01, 0x55, 0x56,
    0x12, 0x05, 0x58, 0x2f, 0xe5, 0x63, 0x3b, 0x05, 0x6c, 0xf9, 0x85, 0x64,
    0x68, 0x75, 0x53, 0x7c, 0xd4, 0x40, 0x00, 0x34, 0x35, 0xca, 0x13, 0x30,
    0xad, 0x03, 0x37, 0xc1, 0x73, 0x47, 0xf2, 0x74, 0x52, 0xf7, 0xd5, 0x5b,
    0xc1, 0xf6, 0x5e, 0x4e, 0xf7, 0x66, 0x81, 0x27, 0x6c, 0x45, 0xc8, 0x66,
    0x98, 0xd7, 0x58, 0x5b, 0xc6, 0x46, 0x7d, 0x55, 0x39, 0x03, 0x15, 0x32,
    0xd5, 0x74, 0x38, 0xfe, 0x64, 0x49, 0x34, 0x26, 0x53, 0xe2, 0x76, 0x57,
    0xd3, 0xe6, 0x52, 0x32, 0xb6, 0x54, 0x3c, 0x75, 0x58, 0x65, 0xf5, 0x59,
    0x00, 0x95, 0x59, 0x99, 0x34, 0x55, 0x8b, 0x54, 0x51, 0x89, 0x84, 0x4d,
    0x5c, 0xe4, 0x50, 0x2c, 0x54, 0x5b, 0xf8, 0xd4, 0x5f, 0x70, 0x05, 0x62,
    0x70, 0x25, 0x5c, 0x1a, 0x35, 0x5b, 0xb0, 0xd4, 0x5a, 0x8d, 0xf5, 0x58,
    0xf1, 0x35, 0x59, 0x31, 0xb6, 0x55, 0x4c, 0x26, 0x4d, 0xd8, 0x75, 0x3e,
    0xdb, 0xc4, 0x34, 0xd5, 0x43, 0x34, 0x1c, 0x04, 0x34, 0xa7, 0x84, 0x39,
    0x4b, 0x35, 0x3d, 0xcd, 0x05, 0x48, 0x01, 0x56, 0x53, 0x00, 0xf7, 0x59,
    0x03, 0xc7, 0x5e, 0xd6, 0xf6, 0x5f, 0xdc, 0xb6, 0x5c, 0x8c, 0x06, 0x51,
    0xa4, 0xe5, 0x45, 0x7e, 0x14, 0x41, 0x80, 0x24, 0x3d, 0xbc, 0x74, 0x42,
    0x10, 0xc5, 0x48, 0x1a, 0xf5, 0x53, 0x8f, 0x04, 0x59, 0xb8, 0xe4, 0x53,
    0x10, 0xe4, 0x4b, 0x93, 0xa3, 0x46, 0xdc, 0x03, 0x49, 0x61, 0x84, 0x4c,
    0x8a, 0x94, 0x52, 0x4a, 0x34, 0x59, 0xaf, 0xa4, 0x55, 0xb6, 0x74, 0x50,
    0x8a, 0x94, 0x47, 0x59, 0x44, 0x46, 0x13, 0x94, 0x43, 0xbb, 0x04, 0x3b,
    0x86, 0xa4, 0x32, 0x44, 0x64, 0x2e, 0xac, 0x24, 0x33, 0x5a, 0xb5, 0x39,
    0xaa, 0x05, 0x41, 0x5d, 0x85, 0x44, 0x68, 0xd5, 0x38, 0xca, 0x24, 0x28,
    0xcf, 0x83, 0x15, 0xec, 0xd2, 0x13, 0x63, 0x02, 0x1e, 0x40, 0x73, 0x2a,
    0x8b, 0xb3, 0x36, 0xbe, 0xb3, 0x3d, 0x22, 0x64, 0x41, 0x63, 0x24, 0x41,
    0x54, 0x84, 0x44, 0x0b, 0xe4, 0x4a, 0x71, 0x24, 0x47, 0x3f, 0x84, 0x3f,
    0x82, 0x03, 0x33, 0x97, 0x92, 0x31, 0xe1, 0x81, 0x35, 0x8f, 0x82, 0x35,
    0x9d, 0x32, 0x33, 0x97, 0xf2, 0x2e, 0xcb, 0x22, 0x2b, 0xd1, 0x42, 0x26,
    0x91, 0xd2, 0x29, 0x6b, 0x42, 0x37, 0x78, 0x63, 0x40, 0x5c, 0x94, 0x46,
    0xc9, 0xf4, 0x40, 0x9a, 0x24, 0x3a, 0xe2, 0x73, 0x30, 0x13, 0xf4, 0x24,
    0x8f, 0x23, 0x1d, 0x22, 0x43, 0x19, 0x4d, 0x43, 0x1a, 0x95, 0x03, 0x1b,
    0xa4, 0x43, 0x21, 0x95, 0xe3, 0x2c, 0x6b, 0xc4, 0x30, 0xce, 0x84, 0x30,
    0x87, 0xd4, 0x26, 0x8f, 0xa3, 0x1f, 0xf3, 0xa1, 0x16, 0x4a, 0x11, 0x0d,
    0x61, 0x00, 0x0b, 0x25, 0x40, 0x10, 0xe5, 0xf0, 0x1c, 0xec, 0xc1, 0x28,
    0x8b, 0xc2, 0x34, 0x9f, 0x32, 0x3f, 0x37, 0xa3, 0x3e, 0x4c, 0x83, 0x3b,
    0xf3, 0x82, 0x32, 0x51, 0x62, 0x2e, 0x77, 0x71, 0x27, 0xa8, 0xa1, 0x1a,
    0x46, 0xb1, 0x10, 0x15, 0xd1, 0x0a, 0x69, 0xc1, 0x0a, 0xca, 0x11, 0x0c,
    0xdc, 0x31, 0x12, 0xa6, 0x31, 0x1b, 0x3e, 0xb2, 0x1b, 0x9f, 0x22, 0x1c,
    0xee, 0xa2, 0x19, 0x2d, 0x33, 0x1f, 0x35, 0xd3, 0x24, 0xed, 0x43, 0x22,
    0x64, 0x73, 0x1a, 0x83, 0x92, 0x10, 0x18, 0x92, 0x0a, 0xf5, 0xf1, 0x06,
    0xd8, 0xf1, 0x0b, 0xcd, 0x91, 0x18, 0xc3, 0x22, 0x20, 0x73, 0x13, 0x28,
    0xbc, 0xd3, 0x2a, 0x7d, 0x53, 0x31, 0xa9, 0xb2, 0x33, 0x90, 0x52, 0x2c,
    0x8c, 0x01, 0x1f, 0x74, 0x00, 0x10, 0x00, 0x40, 0x08, 0x00, 0x90, 0x07,
    0x36, 0x50, 0x13, 0xa0, 0x70, 0x28, 0x12, 0x22, 0x36, 0x0d, 0xe3, 0x3d,
    0x5c, 0xb3, 0x39, 0x23, 0x03, 0x37, 0x9c, 0x32, 0x31, 0x14, 0x23, 0x26,
    0xc9, 0x22, 0x1b, 0x61, 0x32, 0x11, 0x55, 0x62, 0x0b, 0x48, 0xe2, 0x05,
    0xef, 0xf1, 0x05, 0x75, 0x41, 0x0c, 0x02, 0x92, 0x0d, 0x72, 0x02, 0x0f,
    0xa2, 0x32, 0x0b, 0x91, 0x02, 0x10, 0x5b, 0xd2, 0x19, 0x3f, 0xd3, 0x23,
    0x78, 0x73, 0x2e, 0x9f, 0x93, 0x34, 0xe1, 0x63, 0x34, 0xba, 0x23, 0x2b,
    0xfd, 0xf2, 0x22, 0x08, 0x02, 0x21, 0x29, 0xf2, 0x1d, 0x5c, 0xf2, 0x21,
    0x94, 0x82, 0x27, 0xbb, 0x82, 0x36, 0xae, 0x52, 0x43, 0x81, 0xc3, 0x45,
    0x6e, 0x03, 0x43, 0x46, 0xa3, 0x3e, 0x76, 0x23, 0x3b, 0x70, 0xe3, 0x33,
    0xe3, 0xc2, 0x2f, 0x1d, 0xb2, 0x31, 0x76, 0x72, 0x31, 0xf3, 0x62, 0x36,
    0x9b, 0xa3, 0x3a, 0x48, 0x84, 0x44, 0xa1, 0x14, 0x49, 0x93, 0x05, 0x44,
    0x61, 0x35, 0x3c, 0xf9, 0x24, 0x36, 0x1c, 0xc5, 0x36, 0x79, 0x05, 0x39,
    0x9c, 0x35, 0x3f, 0x64, 0xc5, 0x45, 0xbb, 0xb5, 0x3f, 0x7b, 0xb5, 0x35,
    0xd8, 0x04, 0x29, 0x1e, 0x64, 0x29, 0x5e, 0x03, 0x2f, 0xaf, 0xb3, 0x32,
    0x61, 0x33, 0x37, 0x4b, 0x23, 0x3d, 0xec, 0x33, 0x48, 0xdc, 0x24, 0x54,
    0x92, 0x85, 0x62, 0xce, 0x35, 0x6e, 0x5a, 0x26, 0x6a, 0x03, 0x86, 0x5e,
    0x01, 0x85, 0x4c, 0xd6, 0x23, 0x46, 0x07, 0xf3, 0x47, 0xe3, 0x83, 0x4a,
    0x53, 0xc4, 0x4c, 0xa5, 0xa4, 0x4b, 0x06, 0xa5, 0x49, 0x2d, 0xf5, 0x46,
    0x0f, 0xd5, 0x4b, 0xe4, 0x04, 0x57, 0xab, 0x25, 0x5a, 0x1d, 0x16, 0x59,
    0x29, 0x86, 0x4f, 0xe6, 0x75, 0x4b, 0x87, 0xe5, 0x4b, 0x60, 0xc6, 0x4d,
    0x84, 0x56, 0x50, 0x6d, 0xb6, 0x4f, 0x7a, 0x16, 0x4d, 0x5f, 0x16, 0x47,
    0x03, 0xe6, 0x47, 0xc0, 0x25, 0x53, 0xbe, 0xc6, 0x5c, 0xa0, 0xb7, 0x66,
    0xfa, 0x17, 0x67, 0x74, 0xe7, 0x65, 0x09, 0x76, 0x5e, 0x5e, 0x05, 0x53,
    0x4b, 0x94, 0x4b, 0xb4, 0xb3, 0x48, 0xf1, 0xe3, 0x4b, 0x6e, 0xc4, 0x4f,
    0xb3, 0x34, 0x59, 0xd9, 0xb4, 0x68, 0xf5, 0x65, 0x72, 0xc5, 0x66, 0x79,
    0x04, 0xa7, 0x75, 0x9f, 0xa6, 0x70, 0xaf, 0xa5, 0x63, 0x80, 0xb5, 0x4e,
    0xac, 0x54, 0x3e, 0x43, 0x14, 0x38, 0xb9, 0x34, 0x3c, 0x5f, 0x95, 0x40,
    0x81, 0x75, 0x45, 0x19, 0xf5, 0x49, 0x63, 0xf5, 0x45, 0x82, 0xc5, 0x42,
    0x8d, 0xd5, 0x3c, 0x7a, 0x55, 0x3f, 0x39, 0x95, 0x43, 0xc8, 0x35, 0x43,
    0x61, 0xb5, 0x41, 0xf3, 0x64, 0x41, 0x1d, 0x85, 0x44, 0x6f, 0xd5, 0x45,
    0x71, 0x65, 0x49, 0x1b, 0x85, 0x4e, 0x71, 0x05, 0x4b, 0x6e, 0xa5, 0x49,
    0x4c, 0x25, 0x4a, 0x28, 0x15, 0x56, 0xe0, 0xc4, 0x60, 0x5b, 0xa5, 0x5e,
    0xab, 0x04, 0x52, 0xa7, 0x63, 0x41, 0x19, 0x43, 0x36, 0xd9, 0x82, 0x30,
];

static JS_RESS_1: [u8; 3780] = [
    0xae, 0xd2, 0x35, 0xa7, 0x22, 0x44, 0xae, 0x03, 0x4c, 0x6f, 0xc4, 0x51,
    0xe2, 0x94, 0x51, 0x27, 0x45, 0x56, 0x31, 0x15, 0x57, 0xf7, 0xa5, 0x4e,
    0x9b, 0x95, 0x40, 0xc2, 0x24, 0x2f, 0x23, 0x04, 0x22, 0xc3, 0xf3, 0x1a,
    0x90, 0xc3, 0x20, 0x9b, 0xb3, 0x2f, 0xa7, 0x14, 0x36, 0x29, 0x25, 0x35,
    0xf1, 0xd4, 0x29, 0x34, 0xb4, 0x25, 0x40, 0x13, 0x26, 0x63, 0xc3, 0x26,
    0x05, 0x53, 0x2a, 0xd2, 0x02, 0x2d, 0x06, 0x73, 0x2e, 0x2d, 0x73, 0x2c,
    0x03, 0x73, 0x2e, 0xaf, 0x92, 0x35, 0x41, 0xa3, 0x36, 0x77, 0x53, 0x36,
    0x27, 0x03, 0x2f, 0x5e, 0x42, 0x2d, 0x83, 0xc1, 0x2e, 0x1d, 0xf2, 0x2f,
    0x5f, 0x52, 0x32, 0xad, 0x62, 0x32, 0x0b, 0xc3, 0x2e, 0xe7, 0x22, 0x24,
    0x19, 0xc2, 0x1b, 0x10, 0x21, 0x1a, 0x33, 0x11, 0x17, 0x8f, 0xc1, 0x19,
    0x17, 0xe2, 0x1a, 0x8d, 0xa2, 0x20, 0xb0, 0x72, 0x24, 0xb2, 0x93, 0x24,
    0xd3, 0xc3, 0x24, 0xc7, 0xc3, 0x24, 0x0a, 0x14, 0x25, 0x1e, 0xb4, 0x1f,
    0x9b, 0xb3, 0x1a, 0xc0, 0x92, 0x19, 0xe1, 0x72, 0x15, 0x0b, 0x73, 0x16,
    0x2f, 0x43, 0x17, 0x0b, 0x03, 0x1e, 0x45, 0x92, 0x1f, 0x09, 0x12, 0x19,
    0x0d, 0xb1, 0x12, 0x66, 0xb0, 0x10, 0xb5, 0x80, 0x17, 0x7c, 0x21, 0x21,
    0x11, 0xb2, 0x2d, 0x3c, 0xb2, 0x39, 0xe5, 0x02, 0x39, 0xea, 0xb2, 0x33,
    0x6a, 0xd2, 0x28, 0xbc, 0x51, 0x26, 0x13, 0x81, 0x23, 0x79, 0xf1, 0x18,
    0x1b, 0xe1, 0x0d, 0xde, 0x90, 0x08, 0x5a, 0x01, 0x0d, 0x1e, 0xe2, 0x14,
    0x91, 0xc2, 0x1f, 0x8a, 0x12, 0x29, 0xf9, 0xd2, 0x23, 0xc8, 0x12, 0x18,
    0x2c, 0x22, 0x06, 0x7f, 0x01, 0x00, 0x18, 0x11, 0x04, 0x19, 0x12, 0x0b,
    0x66, 0x42, 0x12, 0x7d, 0x62, 0x16, 0xcc, 0x12, 0x19, 0x0a, 0x33, 0x19,
    0x09, 0x83, 0x1e, 0xed, 0xe2, 0x28, 0xa7, 0xf3, 0x2a, 0xe3, 0x53, 0x2a,
    0x9c, 0xd3, 0x24, 0xf8, 0xe2, 0x27, 0x20, 0xc2, 0x2c, 0x5d, 0x52, 0x2d,
    0xf3, 0xa1, 0x2a, 0x83, 0xf1, 0x24, 0x73, 0xe1, 0x1f, 0x60, 0xd1, 0x1a,
    0x28, 0xe1, 0x1e, 0x20, 0x81, 0x2e, 0x62, 0x02, 0x3c, 0x85, 0x73, 0x48,
    0x37, 0xa4, 0x4a, 0x51, 0x14, 0x4b, 0xd3, 0x43, 0x43, 0x0c, 0xe4, 0x33,
    0x85, 0xa3, 0x26, 0x14, 0xc3, 0x1d, 0x2e, 0x73, 0x1b, 0x6b, 0x83, 0x1b,
    0x79, 0x73, 0x22, 0x72, 0x83, 0x2f, 0x5d, 0x14, 0x35, 0xf6, 0xf4, 0x36,
    0x10, 0xb5, 0x2f, 0x9e, 0x94, 0x2b, 0xa8, 0x33, 0x26, 0x74, 0x13, 0x1e,
    0xa1, 0x22, 0x1b, 0x40, 0x02, 0x1f, 0xca, 0x62, 0x29, 0x9a, 0x73, 0x32,
    0x0c, 0xe4, 0x3b, 0x07, 0x04, 0x45, 0x96, 0xc4, 0x44, 0xba, 0xb4, 0x44,
    0x89, 0xc4, 0x41, 0x0a, 0xf4, 0x45, 0x57, 0xb3, 0x49, 0xb5, 0xb3, 0x46,
    0x5a, 0xd3, 0x3f, 0xf1, 0xa2, 0x37, 0xf4, 0x82, 0x33, 0x10, 0x33, 0x31,
    0xf4, 0x32, 0x35, 0xb1, 0x02, 0x3e, 0x52, 0xf3, 0x3f, 0xcd, 0x33, 0x43,
    0x4f, 0x34, 0x45, 0xe1, 0xd4, 0x4e, 0x4e, 0xf5, 0x55, 0x7b, 0x56, 0x54,
    0x6c, 0xe6, 0x4b, 0xc5, 0x65, 0x3e, 0x43, 0x35, 0x33, 0xe2, 0xd4, 0x2a,
    0x80, 0x84, 0x2c, 0x4a, 0x14, 0x38, 0x3b, 0xa5, 0x3f, 0xff, 0x95, 0x46,
    0x60, 0x86, 0x47, 0x4d, 0x56, 0x4e, 0xbd, 0x45, 0x53, 0xd0, 0x65, 0x50,
    0xed, 0x14, 0x49, 0xee, 0x93, 0x3e, 0x6e, 0xe3, 0x36, 0x3c, 0xc3, 0x32,
    0x29, 0x63, 0x39, 0x51, 0x73, 0x4a, 0x95, 0xc4, 0x56, 0x77, 0x75, 0x5f,
    0xa7, 0xa5, 0x5d, 0x3b, 0xe5, 0x5e, 0x99, 0x74, 0x5f, 0x1e, 0x35, 0x5a,
    0xf9, 0x74, 0x53, 0xd5, 0x14, 0x4d, 0x02, 0x85, 0x48, 0xf6, 0x94, 0x40,
    0x5d, 0x84, 0x3b, 0x87, 0x63, 0x3c, 0xc3, 0xc3, 0x39, 0x0b, 0x44, 0x39,
    0x47, 0x94, 0x34, 0x5f, 0xc4, 0x36, 0x63, 0x04, 0x3d, 0x9e, 0x15, 0x45,
    0x34, 0xe6, 0x4e, 0x95, 0x36, 0x55, 0xfc, 0xe6, 0x55, 0xe3, 0x66, 0x4c,
    0x0a, 0x46, 0x41, 0xd5, 0xd4, 0x3a, 0xa4, 0x54, 0x32, 0x90, 0xb4, 0x31,
    0xac, 0xd4, 0x35, 0xda, 0xd4, 0x45, 0xbb, 0x94, 0x53, 0x48, 0x45, 0x58,
    0xf7, 0x54, 0x59, 0xad, 0x44, 0x58, 0xd6, 0xa4, 0x57, 0xeb, 0xc4, 0x52,
    0x80, 0x84, 0x4f, 0xce, 0x03, 0x51, 0x10, 0x74, 0x4e, 0x46, 0xf4, 0x4f,
    0x81, 0x74, 0x51, 0xc2, 0xd4, 0x5a, 0xdc, 0x04, 0x5f, 0xa7, 0x75, 0x57,
    0x6f, 0x15, 0x4d, 0x2a, 0x35, 0x46, 0x79, 0x55, 0x47, 0x01, 0xb6, 0x4b,
    0x41, 0x86, 0x53, 0x12, 0x36, 0x5a, 0x50, 0x86, 0x51, 0xe1, 0xe5, 0x41,
    0x04, 0x15, 0x2d, 0x1b, 0xf4, 0x24, 0x66, 0x93, 0x25, 0xf0, 0x73, 0x27,
    0xcc, 0x83, 0x2b, 0xc9, 0x63, 0x32, 0x75, 0x74, 0x3e, 0x66, 0x65, 0x4a,
    0x12, 0xc6, 0x57, 0x43, 0xb6, 0x62, 0xc1, 0x86, 0x5d, 0x57, 0xd6, 0x50,
    0x34, 0xc5, 0x3d, 0xbb, 0xa3, 0x35, 0x73, 0x52, 0x37, 0xe5, 0x12, 0x3d,
    0x1b, 0x53, 0x42, 0x42, 0xb3, 0x42, 0x8f, 0xd3, 0x41, 0xbb, 0xf3, 0x3f,
    0xa4, 0xc3, 0x44, 0x83, 0x53, 0x50, 0x4e, 0xb4, 0x53, 0xb3, 0xa4, 0x52,
    0xa4, 0xd4, 0x48, 0x3d, 0x94, 0x42, 0xa9, 0x53, 0x3c, 0x46, 0x84, 0x36,
    0x66, 0x74, 0x34, 0x76, 0x24, 0x32, 0xb3, 0xf4, 0x2f, 0xc1, 0xe4, 0x2b,
    0x78, 0x24, 0x2d, 0x3c, 0x24, 0x39, 0x3a, 0xc5, 0x41, 0x1c, 0xb6, 0x48,
    0x6b, 0xe6, 0x43, 0xdb, 0x85, 0x3d, 0x73, 0xa4, 0x31, 0x9e, 0x73, 0x21,
    0x3b, 0x92, 0x17, 0x74, 0x31, 0x16, 0xb7, 0xd1, 0x1c, 0x5d, 0x52, 0x24,
    0xd2, 0x02, 0x30, 0x1d, 0xc3, 0x40, 0x44, 0xd4, 0x4a, 0x05, 0x65, 0x52,
    0x1c, 0x55, 0x4f, 0x67, 0x44, 0x4b, 0x19, 0xb3, 0x40, 0x9b, 0x22, 0x2d,
    0x79, 0x51, 0x1b, 0xd5, 0xc0, 0x13, 0x42, 0x61, 0x18, 0x00, 0xd2, 0x1e,
    0x48, 0xf2, 0x25, 0x09, 0xd2, 0x2c, 0x70, 0x52, 0x2a, 0x9f, 0x12, 0x28,
    0xc4, 0xe2, 0x22, 0xd9, 0xc2, 0x23, 0xb9, 0x72, 0x23, 0x76, 0x23, 0x1e,
    0x34, 0xe3, 0x16, 0xb5, 0x42, 0x10, 0xaa, 0xb2, 0x0e, 0xd7, 0xc2, 0x0e,
    0xd5, 0x82, 0x13, 0xa2, 0xe2, 0x1b, 0x31, 0x83, 0x1b, 0x69, 0xd3, 0x1b,
    0x82, 0xa3, 0x1d, 0xa3, 0xc3, 0x2b, 0x7b, 0x93, 0x37, 0xcb, 0x33, 0x36,
    0xd5, 0x12, 0x2b, 0x8b, 0x61, 0x1a, 0xb1, 0x40, 0x0d, 0x3c, 0x80, 0x05,
    0x00, 0xa0, 0x0a, 0x1e, 0xb0, 0x1b, 0x69, 0xa1, 0x28, 0x6a, 0xe2, 0x33,
    0xf2, 0x52, 0x38, 0x21, 0xf3, 0x41, 0x19, 0x43, 0x47, 0xd8, 0xf3, 0x3f,
    0x75, 0xc3, 0x30, 0xa8, 0xb2, 0x1d, 0x0b, 0x52, 0x0e, 0x8f, 0x61, 0x04,
    0x29, 0x11, 0x07, 0x07, 0x71, 0x14, 0x02, 0x22, 0x1b, 0xa7, 0x82, 0x1c,
    0xc3, 0x52, 0x13, 0x6b, 0x02, 0x0f, 0xec, 0x41, 0x0f, 0x9c, 0x02, 0x11,
    0xa4, 0xf2, 0x14, 0x9c, 0x92, 0x17, 0xd8, 0x92, 0x18, 0xeb, 0x62, 0x14,
    0x8c, 0x82, 0x12, 0xfd, 0x51, 0x16, 0x66, 0xc2, 0x15, 0xa0, 0x32, 0x17,
    0x8e, 0x42, 0x15, 0x1a, 0xd2, 0x1a, 0x6c, 0xe1, 0x23, 0x12, 0x92, 0x2d,
    0x5b, 0xb2, 0x36, 0x98, 0x62, 0x39, 0xd9, 0xf2, 0x35, 0x9c, 0x12, 0x2a,
    0xaf, 0xd1, 0x1e, 0x84, 0x80, 0x1a, 0x81, 0xb0, 0x15, 0xba, 0xc0, 0x18,
    0x37, 0xc1, 0x1d, 0xd3, 0x71, 0x2a, 0x46, 0x42, 0x33, 0x90, 0x83, 0x34,
    0xfe, 0xc3, 0x34, 0x3f, 0x54, 0x34, 0xad, 0xd4, 0x33, 0xca, 0xe4, 0x2d,
    0x3a, 0xe4, 0x27, 0x4e, 0x43, 0x26, 0x60, 0xe3, 0x20, 0x83, 0x43, 0x1f,
    0xaa, 0x33, 0x1c, 0xad, 0x23, 0x21, 0x54, 0x13, 0x25, 0x9c, 0x23, 0x22,
    0xee, 0x42, 0x1f, 0x76, 0x32, 0x21, 0xe6, 0xe2, 0x2a, 0xbf, 0xa3, 0x35,
    0x55, 0x64, 0x41, 0x77, 0x14, 0x4c, 0x06, 0x75, 0x49, 0xdd, 0x64, 0x42,
    0x22, 0x44, 0x36, 0x1f, 0x63, 0x34, 0x2e, 0xf2, 0x36, 0x93, 0xe2, 0x35,
    0x63, 0x02, 0x33, 0x54, 0x62, 0x32, 0xeb, 0x72, 0x38, 0xac, 0x63, 0x3f,
    0x03, 0xf4, 0x47, 0xe3, 0xc3, 0x4f, 0x3f, 0xf4, 0x49, 0xff, 0x23, 0x3e,
    0x5f, 0xb3, 0x2c, 0xbe, 0xb2, 0x25, 0x67, 0x62, 0x26, 0x99, 0x83, 0x2b,
    0x56, 0xd4, 0x33, 0xe0, 0x54, 0x39, 0x75, 0xc5, 0x3c, 0xca, 0xd5, 0x3c,
    0xbb, 0x15, 0x41, 0x91, 0x35, 0x4b, 0x45, 0xf6, 0x4c, 0x90, 0x36, 0x4b,
    0x61, 0x86, 0x43, 0xda, 0x55, 0x44, 0x04, 0x45, 0x46, 0x06, 0x45, 0x44,
    0x5d, 0xb4, 0x43, 0xec, 0x33, 0x43, 0xff, 0x13, 0x43, 0x18, 0xb4, 0x40,
    0xf6, 0xa3, 0x44, 0xf2, 0x53, 0x53, 0x23, 0x05, 0x60, 0x2b, 0x76, 0x6c,
    0xa8, 0x36, 0x6f, 0x6a, 0xc6, 0x70, 0x92, 0xe5, 0x6a, 0x82, 0x65, 0x5b,
    0xb7, 0x14, 0x4c, 0x34, 0x34, 0x43, 0x77, 0xd4, 0x43, 0xf7, 0x84, 0x47,
    0x33, 0x25, 0x50, 0x36, 0xc5, 0x5c, 0x04, 0x16, 0x60, 0x7b, 0xc6, 0x5f,
    0x90, 0x36, 0x56, 0x2e, 0xe6, 0x4d, 0x53, 0x35, 0x43, 0x5c, 0xd5, 0x36,
    0xb8, 0xc4, 0x2f, 0x5e, 0xb4, 0x30, 0xe9, 0x14, 0x3b, 0xd2, 0x45, 0x46,
    0x65, 0xb6, 0x51, 0x7a, 0xe6, 0x5b, 0x06, 0x27, 0x5a, 0x0c, 0xb7, 0x56,
    0xbd, 0x06, 0x51, 0x2e, 0x86, 0x54, 0x54, 0x85, 0x58, 0x6c, 0xb5, 0x57,
    0xcd, 0x44, 0x53, 0x1b, 0x24, 0x4b, 0xd8, 0xe3, 0x45, 0xd3, 0x53, 0x43,
    0xbd, 0xd3, 0x47, 0xa0, 0x93, 0x52, 0x63, 0x54, 0x56, 0xdb, 0x24, 0x5a,
    0x23, 0xa5, 0x5b, 0x66, 0xc5, 0x65, 0x9a, 0x65, 0x6c, 0x92, 0xe6, 0x66,
    0x5b, 0x26, 0x5a, 0xb4, 0x65, 0x49, 0x34, 0xf5, 0x3b, 0xc9, 0x94, 0x32,
    0x61, 0xa4, 0x34, 0x3e, 0xb4, 0x42, 0x5b, 0xe5, 0x4c, 0x4c, 0xb6, 0x53,
    0xbb, 0x96, 0x4f, 0x91, 0x16, 0x4e, 0xf4, 0xf5, 0x4b, 0x14, 0xf6, 0x43,
    0x26, 0x15, 0x39, 0x17, 0x14, 0x2e, 0x9e, 0xd3, 0x27, 0x7c, 0xc3, 0x24,
    0x70, 0x43, 0x2b, 0x99, 0x03, 0x3c, 0xd9, 0x04, 0x48, 0xb4, 0xe5, 0x50,
    0xd9, 0x55, 0x4f, 0x33, 0xa5, 0x4f, 0x19, 0x64, 0x4f, 0x25, 0xd4, 0x4b,
    0xaf, 0xd3, 0x46, 0x4d, 0xf3, 0x40, 0x53, 0x23, 0x3c, 0x34, 0xe3, 0x33,
    0x91, 0xf2, 0x2d, 0xbe, 0xe1, 0x2e, 0xff, 0x01, 0x2d, 0x4b, 0x62, 0x2e,
    0x95, 0xe2, 0x2c, 0xca, 0x22, 0x31, 0xd5, 0xe2, 0x33, 0xf7, 0x33, 0x35,
    0x81, 0x34, 0x39, 0xe8, 0xf4, 0x3a, 0x4b, 0xf5, 0x38, 0x2e, 0xf5, 0x2e,
    0x57, 0xa4, 0x24, 0x33, 0xe3, 0x1f, 0x1d, 0xb3, 0x18, 0x2e, 0x03, 0x18,
    0x79, 0xb3, 0x1a, 0xe1, 0x33, 0x29, 0xf8, 0xd3, 0x34, 0x73, 0x14, 0x35,
    0xc3, 0xf3, 0x31, 0x20, 0xf3, 0x2e, 0x0f, 0xa3, 0x2d, 0x0f, 0xf3, 0x28,
    0xab, 0x42, 0x26, 0x16, 0x42, 0x29, 0x73, 0x92, 0x28, 0xb8, 0x62, 0x2c,
    0xe5, 0x02, 0x30, 0xee, 0x02, 0x3c, 0xc4, 0xc2, 0x44, 0x63, 0x63, 0x40,
    0xea, 0x92, 0x34, 0x57, 0x02, 0x2a, 0x70, 0xe2, 0x28, 0xe2, 0xb2, 0x2c,
    0x25, 0x13, 0x35, 0x0c, 0x33, 0x3d, 0x60, 0xf3, 0x35, 0x08, 0x33, 0x28,
    0x51, 0xf2, 0x14, 0x98, 0x21, 0x0c, 0x18, 0x31, 0x0a, 0x00, 0xe2, 0x0a,
    0x48, 0x72, 0x0d, 0x6d, 0x62, 0x10, 0xf7, 0x72, 0x17, 0xa4, 0x03, 0x1f,
    0x0e, 0x44, 0x29, 0x1e, 0xd4, 0x33, 0xa4, 0xd4, 0x2f, 0x64, 0x84, 0x24,
    0x83, 0x43, 0x13, 0x5c, 0x42, 0x0e, 0x4d, 0xe1, 0x12, 0xbf, 0x41, 0x1c,
    0xe1, 0x61, 0x26, 0xef, 0x11, 0x29, 0x08, 0x52, 0x26, 0xe9, 0x11, 0x20,
    0x88, 0xf1, 0x1f, 0x3b, 0x51, 0x29, 0x07, 0xa2, 0x2e, 0x92, 0xe2, 0x32,
    0xaa, 0x02, 0x30, 0x5f, 0xf2, 0x31, 0xe8, 0xa1, 0x32, 0x97, 0xf2, 0x2e,
    0xb7, 0x92, 0x2c, 0xe5, 0x72, 0x2a, 0x45, 0xd3, 0x27, 0x4d, 0x13, 0x21,
    0xcf, 0xb2, 0x1e, 0x4b, 0x92, 0x26, 0x11, 0x33, 0x2d, 0xe8, 0xa3, 0x33,
    0x5f, 0xb4, 0x2e, 0x1c, 0x94, 0x27, 0x28, 0x33, 0x1c, 0xe9, 0x82, 0x0d,
    0xf2, 0x11, 0x04, 0x5d, 0x71, 0x03, 0xc4, 0xc1, 0x0b, 0x81, 0xf2, 0x13,
    0xe9, 0x72, 0x1d, 0x02, 0x13, 0x2a, 0xdd, 0x43, 0x2f, 0x5e, 0xd4, 0x33,
    0x68, 0xe4, 0x31, 0xd1, 0xa3, 0x32, 0x9c, 0x42, 0x2f, 0x3b, 0xf2, 0x25,
    0x4a, 0xd1, 0x1d, 0xc8, 0xc0, 0x1b, 0x39, 0x81, 0x22, 0xf2, 0x11, 0x29,
    0x33, 0xf2, 0x2e, 0xe8, 0x21, 0x34, 0x2f, 0x52, 0x2f, 0x23, 0xf2, 0x2a,
    0x08, 0x22, 0x26, 0x0f, 0xe2, 0x2a, 0x19, 0x52, 0x2e, 0x18, 0x23, 0x2b,
    0x3e, 0x93, 0x26, 0x32, 0xc3, 0x21, 0x6c, 0x33, 0x20, 0xa6, 0x53, 0x1f,
    0x91, 0xe3, 0x22, 0x4b, 0x83, 0x2a, 0xcc, 0x03, 0x29, 0xff, 0xa3, 0x26,
    0x18, 0xc4, 0x23, 0x48, 0xd4, 0x2d, 0x5d, 0x84, 0x38, 0xfb, 0xe4, 0x37,
    0x37, 0x94, 0x2f, 0x22, 0xd3, 0x23, 0x83, 0x12, 0x1b, 0x37, 0xc2, 0x15,
    0x0f, 0x52, 0x1b, 0x3a, 0xa2, 0x2c, 0x8a, 0x23, 0x3a, 0x8a, 0x44, 0x46,
    0xf8, 0xe4, 0x4a, 0xd6, 0xf4, 0x53, 0x5c, 0x14, 0x5b, 0xd9, 0x04, 0x59,
    0x64, 0xf4, 0x4e, 0xa8, 0x73, 0x40, 0x44, 0x23, 0x36, 0x10, 0x53, 0x30,
    0xd8, 0x52, 0x34, 0xc0, 0xe2, 0x40, 0x9e, 0x83, 0x45, 0x18, 0x54, 0x45,
    0x18, 0x74, 0x3b, 0xbb, 0x63, 0x35, 0x3b, 0x33, 0x31, 0x0a, 0xe4, 0x2f,
    0x70, 0xb4, 0x33, 0xcd, 0x54, 0x37, 0x54, 0x25, 0x3a, 0x95, 0x15, 0x38,
    0x4c, 0x35, 0x37, 0xc1, 0x14, 0x3b, 0x1f, 0x35, 0x39, 0x4e, 0xf5, 0x37,
    0x40, 0xf5, 0x32, 0xec, 0xf4, 0x36, 0x5e, 0xf4, 0x3e, 0xe6, 0x14, 0x47,
    0xea, 0xd4, 0x50, 0xff, 0x34, 0x56, 0x40, 0x05, 0x56, 0x24, 0x75, 0x4d,
    0x68, 0xa4, 0x44, 0x73, 0x63, 0x42, 0x91, 0x23, 0x3f, 0xca, 0x53, 0x43,
    0x19, 0xb4, 0x48, 0x5c, 0x84, 0x56, 0x73, 0x44, 0x61, 0x6c, 0x75, 0x61,
    0x7c, 0xc5, 0x5d, 0x84, 0xf5, 0x5a, 0xf6, 0x55, 0x5b, 0x3f, 0xb6, 0x58,
    0xee, 0xa5, 0x56, 0x40, 0x85, 0x58, 0x79, 0x85, 0x54, 0xa0, 0x95, 0x51,
    0xb1, 0x05, 0x4a, 0x92, 0xa5, 0x47, 0x29, 0x45, 0x44, 0x92, 0xb5, 0x3b,
    0xff, 0x34, 0x33, 0x6f, 0xc4, 0x2f, 0xbf, 0x44, 0x37, 0x98, 0x55, 0x43,
    0x57, 0xc6, 0x52, 0xbd, 0xf6, 0x61, 0x8b, 0x47, 0x62, 0x85, 0x37, 0x5b,
    0xcf, 0x66, 0x4d, 0xb7, 0x15, 0x49, 0x79, 0x04, 0x49, 0x74, 0x54, 0x48,
    0xf6, 0x13, 0x48, 0xa5, 0x83, 0x47, 0xec, 0xf3, 0x4a, 0x64, 0x24, 0x4f,
    0xa0, 0x24, 0x57, 0xa1, 0xf4, 0x61, 0x43, 0x35, 0x61, 0x40, 0x85, 0x5a,
    0xae, 0x64, 0x4c, 0xf1, 0x93, 0x47, 0x63, 0x13, 0x47, 0x49, 0xb4, 0x46,
    0xc2, 0x44, 0x49, 0x33, 0x25, 0x4a, 0xab, 0xe5, 0x48, 0xc5, 0x35, 0x44,
    0x72, 0x15, 0x45, 0x21, 0xa5, 0x4e, 0xe8, 0xf5, 0x52, 0x7b, 0xc6, 0x54,
    0xb1, 0x66, 0x4e, 0x7b, 0x66, 0x4c, 0xd8, 0x65, 0x49, 0xe9, 0xe5, 0x40,
    0x0b, 0x55, 0x39, 0x51, 0xb4, 0x34, 0x39, 0x14, 0x33, 0x3b, 0xd4, 0x2f,
    0x06, 0x64, 0x32, 0xf0, 0xe3, 0x3f, 0x19, 0xc5, 0x4c, 0x2f, 0xa6, 0x5b,
    0xd0, 0x46, 0x62, 0x9c, 0x16, 0x67, 0x8b, 0x95, 0x63, 0x29, 0xd5, 0x56,
    0x06, 0x94, 0x47, 0x19, 0x13, 0x3c, 0x09, 0x63, 0x3a, 0x61, 0xd3, 0x3c,
    0x8c, 0xd3, 0x43, 0x77, 0xf3, 0x4d, 0x19, 0xd4, 0x4e, 0x5e, 0x94, 0x4d,
    0x5d, 0x44, 0x46, 0x1b, 0xb4, 0x41, 0x78, 0xe3, 0x37, 0xb7, 0xf3, 0x29,
    0x53, 0x73, 0x20, 0x1c, 0xe3, 0x1c, 0x8b, 0xc3, 0x21, 0x35, 0x94, 0x28,
    0x8f, 0x64, 0x31, 0x7d, 0x64, 0x3a, 0xfa, 0xa4, 0x37, 0x05, 0x85, 0x32,
    0xce, 0x94, 0x2a, 0x83, 0x54, 0x2e, 0x18, 0x04, 0x35, 0x7f, 0xf4, 0x35,
    0xe2, 0xa3, 0x32, 0x14, 0xd3, 0x2a, 0x9e, 0x52, 0x23, 0x50, 0x72, 0x1c,
    0xf3, 0x71, 0x1c, 0xa4, 0x81, 0x24, 0x51, 0xd2, 0x27, 0xc3, 0x32, 0x2d,
    0xfb, 0x02, 0x31, 0x12, 0xf3, 0x3e, 0x1a, 0x63, 0x4c, 0x10, 0xb4, 0x4d,
    0xd9, 0xf3, 0x43, 0x2c, 0xc3, 0x33, 0xa6, 0x42, 0x25, 0x20, 0x42, 0x19,
    0x81, 0x71, 0x17, 0x25, 0x31, 0x22, 0x14, 0x32, 0x2a, 0xe9, 0x42, 0x30,
    0x57, 0xe3, 0x2b, 0x46, 0xc3, 0x28, 0xd8, 0x82, 0x24, 0x67, 0x13, 0x1d,
    0x11, 0x93, 0x14, 0x7d, 0x72, 0x0b, 0x49, 0x82, 0x06, 0x3e, 0x52, 0x03,
    0x17, 0x42, 0x07, 0x03, 0xe2, 0x13, 0xf3, 0x72, 0x1a, 0x88, 0x03, 0x1e,
    0x8c, 0x13, 0x19, 0xf6, 0x02, 0x19, 0xef, 0x31, 0x1a, 0xfc, 0xa1, 0x1b,
    0xa8, 0x51, 0x20, 0x8e, 0x51, 0x23, 0xcc, 0x41, 0x23, 0xbc, 0x21, 0x1b,
    0x05, 0x31, 0x12, 0x00, 0xd0, 0x0e, 0x00, 0x00, 0x09, 0x00, 0x30, 0x08,
    0x00, 0x30, 0x07, 0x00, 0x90, 0x0f, 0x00, 0x00, 0x18, 0x2c, 0x51, 0x1c,
    0xce, 0xa1, 0x22, 0x86, 0xc2, 0x28, 0x5a, 0xd3, 0x2b, 0x98, 0xd3, 0x25,
    0xed, 0x02, 0x1d, 0xc9, 0x61, 0x17, 0x93, 0x71, 0x0d, 0x7b, 0x41, 0x09,
    0xaf, 0x71, 0x07, 0x15, 0x22, 0x10, 0x4c, 0x62, 0x17, 0x15, 0x63, 0x15,
    0xaa, 0x52, 0x11, 0x39, 0x62, 0x10, 0x7c, 0xe2, 0x14, 0xe9, 0x82, 0x17,
    0xf3, 0xb2, 0x1a, 0xa3, 0x32, 0x20, 0x0a, 0x13, 0x1e, 0x23, 0xb3, 0x1d,
    0x0a, 0x03, 0x1d, 0xc3, 0x12, 0x26, 0x38, 0xd2, 0x2e, 0x93, 0x62, 0x2f,
    0x09, 0x02, 0x2a, 0x74, 0x21, 0x24, 0x9c, 0x51, 0x27, 0x47, 0x72, 0x30,
    0xe5, 0x52, 0x3e, 0x26, 0xd3, 0x4a, 0xb1, 0xe3, 0x45, 0x53, 0x03, 0x38,
    0x61, 0x62, 0x23, 0x61, 0x91, 0x19, 0xad, 0x90, 0x15, 0x82, 0xf1, 0x13,
    0xfa, 0xd1, 0x16, 0x7e, 0x52, 0x1b, 0x53, 0x83, 0x23, 0x2b, 0xe4, 0x2c,
    0xbb, 0x64, 0x3a, 0x03, 0x75, 0x49, 0xd5, 0xb5, 0x49, 0xde, 0xd5, 0x3f,
    0x2a, 0x65, 0x2b, 0x12, 0x74, 0x20, 0x11, 0xf3, 0x1f, 0x86, 0xd3, 0x24,
    0x87, 0xe3, 0x2c, 0x89, 0x63, 0x31, 0xbf, 0x33, 0x32, 0xc9, 0xc3, 0x2e,
    0x8f, 0xf3, 0x30, 0x6d, 0x13, 0x3d, 0x72, 0x94, 0x46, 0x40, 0x15, 0x50,
    0x87, 0x75, 0x51, 0x24, 0x35, 0x55, 0x48, 0xc4, 0x56, 0x7d, 0x14, 0x53,
    0x22, 0x84, 0x4e, 0xec, 0x83, 0x4a, 0x30, 0x34, 0x49, 0x5e, 0x24, 0x46,
    0x28, 0x74, 0x48, 0xf4, 0xd3, 0x54, 0x00, 0x75, 0x5f, 0x06, 0x66, 0x69,
    0x9f, 0xe6, 0x66, 0x79, 0x66, 0x5f, 0x86, 0xc5, 0x4e, 0x41, 0xb5, 0x38,
    0x4c, 0xa4, 0x28, 0xaf, 0x43, 0x22, 0x04, 0x14, 0x28, 0xcc, 0x04, 0x32,
    0x65, 0x05, 0x40, 0xc1, 0x65, 0x51, 0xdf, 0xa6, 0x59, 0x93, 0xc7, 0x5e,
    0xc8, 0xd7, 0x5b, 0x69, 0xc7, 0x5b, 0x5a, 0x36, 0x57, 0xdb, 0xa5, 0x4b,
    0x97, 0x44, 0x42, 0xb9, 0x03, 0x3e, 0xc4, 0xa3, 0x40, 0x24, 0xa4, 0x43,
    0x42, 0xf4, 0x48, 0x1a, 0x14, 0x51, 0xad, 0xc4, 0x51, 0xee, 0xd4, 0x53,
    0x00, 0x05, 0x55, 0x06, 0xc5, 0x5f, 0xfa, 0xb4, 0x68, 0xd5, 0x75, 0x66,
    0xab, 0xd5, 0x5d, 0x44, 0xe5, 0x52, 0x2c, 0x65, 0x4b, 0x15, 0xc5, 0x45,
    0xca, 0x74, 0x47, 0x7b, 0x74, 0x50, 0x29, 0x05, 0x53, 0xb1, 0xf5, 0x55,
    0x2e, 0x96, 0x56, 0xaf, 0x36, 0x5f, 0xf6, 0x76, 0x65, 0xcf, 0x47, 0x60,
    0x2e, 0x37, 0x52, 0xf6, 0x75, 0x3f, 0x10, 0x95, 0x30, 0x74, 0x84, 0x26,
    0x0b, 0xd4, 0x28, 0x0b, 0xd4, 0x38, 0x57, 0xc5, 0x46, 0x74, 0x86, 0x54,
    0x18, 0x87, 0x5b, 0x2b, 0xa7, 0x66, 0xa8, 0xd6, 0x6e, 0xeb, 0x06, 0x6f,
    0x40, 0x36, 0x68, 0x4a, 0x25, 0x5a, 0x99, 0x34, 0x4d, 0x14, 0x34, 0x43,
    0x93, 0x63, 0x42, 0x3a, 0x03, 0x4b, 0xea, 0x03, 0x4e, 0x4c, 0x74, 0x4f,
    0x45, 0xd4, 0x49, 0xf3, 0xa3, 0x49, 0x8b, 0xd3, 0x49, 0x67, 0x84, 0x48,
    0xda, 0x54, 0x4b, 0x5b, 0xb5, 0x4d, 0xef, 0x85, 0x4d, 0x02, 0x76, 0x46,
    0x60, 0xa5, 0x3f, 0x6a, 0xa4, 0x3d, 0x75, 0x54, 0x37, 0x83, 0xa4, 0x33,
    0x8c, 0x04, 0x2d, 0x7d, 0xe4, 0x2f, 0x5b, 0xa4, 0x37, 0x4d, 0x95, 0x3e,
    0x6c, 0x75, 0x45, 0x6a, 0x25, 0x49, 0x9b, 0x75, 0x48, 0x70, 0x95, 0x3e,
    0x93, 0x04, 0x33, 0x63, 0x83, 0x2c, 0x3e, 0x23, 0x25, 0x3e, 0x23, 0x27,
    0x74, 0x93, 0x2d, 0xad, 0xb3, 0x3e, 0xa5, 0xa3, 0x4e, 0x7d, 0xe4, 0x54,
    0x67, 0x84, 0x54, 0x34, 0xa4, 0x51, 0x79, 0x84, 0x51, 0xb5, 0xf4, 0x4e,
    0x68, 0xc4, 0x4c, 0xb2, 0xb3, 0x4c, 0xbe, 0xc3, 0x44, 0x85, 0xa3, 0x3c,
    0x24, 0x23, 0x31, 0xc1, 0x62, 0x2d, 0x53, 0x02, 0x29, 0xee, 0x02, 0x20,
    0xc3, 0x32, 0x18, 0x93, 0x32, 0x14, 0x05, 0xf3, 0x19, 0xd3, 0x63, 0x24,
    0x7a, 0x04, 0x33, 0xc5, 0xf4, 0x40, 0x74, 0x85, 0x3e, 0x45, 0x15, 0x32,
    0x62, 0x14, 0x1d, 0x36, 0x23, 0x13, 0x16, 0x82, 0x11, 0x3b, 0x52, 0x12,
    0xe7, 0x71, 0x17, 0xd1, 0x31, 0x1d, 0x3f, 0x42, 0x23, 0xad, 0x22, 0x26,
    0xc6, 0x92, 0x2b, 0xa5, 0x22, 0x34, 0x32, 0x63, 0x32, 0x1d, 0xd3, 0x2b,
    0x64, 0x22, 0x1e, 0x53, 0xf1, 0x19, 0x62, 0x60, 0x1c, 0x07, 0xc1, 0x1f,
    0x63, 0x51, 0x25, 0xe2, 0xb1, 0x29, 0x95, 0x22, 0x2c, 0xdf, 0x22, 0x29,
    0x95, 0x22, 0x29, 0x22, 0xc2, 0x2f, 0xb2, 0xf2, 0x30, 0x1b, 0x23, 0x31,
    0x44, 0xe3, 0x29, 0x16, 0xc3, 0x24, 0x77, 0x02, 0x1c, 0xae, 0x22, 0x0f,
    0x19, 0x72, 0x05, 0xa1, 0xb1, 0x00, 0xce, 0xf1, 0x01, 0x1f, 0x52, 0x03,
    0x32, 0xd2, 0x09, 0x3c, 0x52, 0x18, 0x5a, 0x03, 0x23, 0x4d, 0xc4, 0x2d,
    0xcf, 0x64, 0x30, 0x97, 0x34, 0x33, 0x7d, 0xc3, 0x2e, 0xed, 0xe2, 0x22,
    0xa4, 0x31, 0x18, 0xb3, 0xe0, 0x11, 0xbc, 0x20, 0x15, 0x4b, 0x71, 0x1c,
    0xc1, 0x81, 0x27, 0xe1, 0x21, 0x33, 0x8a, 0x32, 0x33, 0xa0, 0x22, 0x30,
    0x48, 0x62, 0x27, 0xac, 0x81, 0x24, 0xe2, 0x40, 0x1f, 0x21, 0x11, 0x14,
    0xd0, 0x40, 0x0c, 0xcb, 0xa0, 0x0a, 0x79, 0x71, 0x11, 0x51, 0x32, 0x1a,
    0xcf, 0x92, 0x25, 0xdf, 0xd2, 0x30, 0x7a, 0x33, 0x2f, 0x96, 0x43, 0x29,
    0x68, 0x23, 0x1e, 0x27, 0xd3, 0x1c, 0xe9, 0x32, 0x20, 0xac, 0x83, 0x1f,
    0x55, 0x63, 0x1a, 0x9f, 0xc2, 0x11, 0x40, 0xb2, 0x0b, 0x19, 0xd2, 0x07,
    0xf5, 0x21, 0x0c, 0xeb, 0xc1, 0x18, 0xdf, 0xf2, 0x1f, 0x8a, 0x93, 0x27,
    0xdb, 0x03, 0x2c, 0xdd, 0x03, 0x39, 0x91, 0xf3, 0x45, 0x2b, 0x14, 0x4a,
    0xc1, 0xd3, 0x44, 0xf6, 0xa2, 0x37, 0x64, 0x62, 0x2b, 0xf1, 0xf1, 0x21,
    0x8a, 0x11, 0x24, 0x77, 0x41, 0x33, 0xae, 0x92, 0x3f, 0xaa, 0x93, 0x48,
    0x0a, 0x74, 0x45, 0xcc, 0x83, 0x42, 0x32, 0xd3, 0x3b, 0x9c, 0x73, 0x30,
    0x58, 0x53, 0x26, 0x05, 0x43, 0x1d, 0x09, 0xa3, 0x18, 0x1b, 0x53, 0x16,
    0x0e, 0xc3, 0x1c, 0x19, 0x73, 0x2c, 0x42, 0xc4, 0x36, 0x27, 0x25, 0x3d,
    0x7d, 0x15, 0x38, 0x2e, 0x35, 0x35, 0x61, 0x04, 0x33, 0x86, 0xc4, 0x30,
    0x1c, 0xa4, 0x33, 0xf4, 0xf3, 0x37, 0x3a, 0x94, 0x39, 0x33, 0x54, 0x32,
    0x89, 0x93, 0x2a, 0x9f, 0x02, 0x29, 0xcc, 0xb2, 0x26, 0x0f, 0x73, 0x2b,
    0x52, 0x03, 0x31, 0x6d, 0xb3, 0x3e, 0x43, 0x73, 0x4b, 0x20, 0xe4, 0x51,
    0x5d, 0x94, 0x56, 0xa9, 0x94, 0x59, 0x3f, 0x05, 0x5b, 0x6d, 0x05, 0x55,
    0xd3, 0x94, 0x4d, 0xc5, 0x53, 0x49, 0xa9, 0x83, 0x41, 0xb3, 0xd3, 0x40,
    0x19, 0x84, 0x43, 0xc3, 0xa4, 0x4e, 0x29, 0xa5, 0x53, 0x12, 0x86, 0x4c,
    0xc2, 0x25, 0x42, 0x43, 0x15, 0x3a, 0x55, 0xa5, 0x39, 0xa6, 0x65, 0x3b,
    0xbd, 0x55, 0x41, 0x97, 0x95, 0x4a, 0x36, 0x66, 0x4b, 0x84, 0xc6, 0x4b,
    0x96, 0xe6, 0x49, 0x83, 0x36, 0x52, 0x29, 0xd6, 0x5a, 0x81, 0x16, 0x5b,
    0xcc, 0x65, 0x56, 0xfa, 0x04, 0x50, 0xd2, 0x24, 0x50, 0x2c, 0x55, 0x55,
    0x95, 0xb5, 0x60, 0xc1, 0x65, 0x6c, 0x56, 0x16, 0x69, 0x10, 0xa6, 0x5e,
    0x23, 0xe5, 0x4d, 0x05, 0x44, 0x48, 0x31, 0x03, 0x4a, 0xf6, 0xf3, 0x4b,
    0x5a, 0x54, 0x4f, 0xc9, 0x44, 0x52, 0x84, 0xf5, 0x56, 0x1c, 0xc6, 0x5a,
    0x53, 0x36, 0x63, 0x4e, 0xb6, 0x6e, 0xfd, 0x86, 0x6e, 0x20, 0x17, 0x67,
    0xb1, 0x46, 0x55, 0xef, 0x35, 0x4a, 0x3b, 0x05, 0x47, 0x00, 0x96, 0x48,
    0x39, 0x76, 0x4c, 0x3d, 0xf6, 0x4c, 0x60, 0xd6, 0x4a, 0x49, 0x66, 0x44,
    0xd8, 0xe5, 0x42, 0x6c, 0xa5, 0x4a, 0x2e, 0x46, 0x50, 0xdb, 0xe6, 0x57,
    0x2e, 0x37, 0x5a, 0xf7, 0x76, 0x60, 0x27, 0xe6, 0x63, 0x28, 0x36, 0x62,
    0x8d, 0x25, 0x60, 0x19, 0xd5, 0x5c, 0x24, 0xf5, 0x5a, 0x2d, 0xa5, 0x56,
    0xdf, 0x04, 0x57, 0x86, 0x04, 0x60, 0x55, 0xb5, 0x66, 0x07, 0x46, 0x6d,
    0x41, 0xf6, 0x69, 0xde, 0x35, 0x65, 0xe6, 0x44, 0x58, 0xad, 0xd4, 0x42,
    0xd0, 0x13, 0x32, 0x60, 0x93, 0x2b, 0xdd, 0x13, 0x31, 0xb3, 0x94, 0x3a,
    0x44, 0xf5, 0x47, 0x7b, 0x75, 0x56, 0x57, 0xa6, 0x59, 0xbf, 0x06, 0x58,
    0xb3, 0x66, 0x4d, 0x39, 0x66, 0x46, 0x50, 0x85, 0x3e, 0x28, 0x55, 0x32,
    0x24, 0x04, 0x29, 0x5d, 0x83, 0x25, 0x73, 0xa3, 0x28, 0xcd, 0x03, 0x2b,
    0xdd, 0x63, 0x2f, 0x99, 0x53, 0x35, 0x01, 0x54, 0x32, 0x04, 0xa4, 0x30,
    0xd4, 0x43, 0x2f, 0x90, 0x33, 0x39, 0x2d, 0x83, 0x44, 0xc9, 0xd3, 0x47,
    0x7f, 0xc3, 0x43, 0xf9, 0xc2, 0x3a, 0xcb, 0xd2, 0x33, 0xb3, 0x92, 0x2e,
    0x7a, 0x42, 0x31, 0x3a, 0x82, 0x3a, 0xe9, 0xa2, 0x3c, 0x4f, 0x23, 0x3e,
    0x88, 0x73, 0x3c, 0xc0, 0xc3, 0x41, 0xc9, 0xb3, 0x42, 0x88, 0xd4, 0x38,
    0x1b, 0x74, 0x29, 0x3a, 0xd3, 0x16, 0x92, 0x92, 0x08, 0x1c, 0x02, 0x00,
    0xcf, 0xb1, 0x04, 0xdb, 0xd1, 0x15, 0x2a, 0x13, 0x23, 0x3e, 0x14, 0x2d,
    0xc3, 0x04, 0x2d, 0xb0, 0x54, 0x30, 0x1e, 0x34, 0x33, 0x4d, 0xd4, 0x30,
    0x91, 0x03, 0x2c, 0xb5, 0x92, 0x23, 0x38, 0xa2, 0x1b, 0xdf, 0x11, 0x14,
    0x77, 0xd1, 0x13, 0x1a, 0xf1, 0x1a, 0xb4, 0xb1, 0x1c, 0xff, 0x01, 0x1e,
    0xd1, 0xf1, 0x18, 0x31, 0xb1, 0x19, 0x6a, 0xa0, 0x1c, 0x03, 0xb1, 0x1e,
    0x4a, 0x71, 0x23, 0xc9, 0xd1, 0x28, 0x91, 0xe2, 0x2c, 0xec, 0x92, 0x29,
    0x80, 0x62, 0x25, 0x9e, 0xb1, 0x23, 0x9f, 0x51, 0x1c, 0x96, 0x41, 0x17,
    0x90, 0x91, 0x0f, 0x86, 0x81, 0x0f, 0x6f, 0x11, 0x12, 0x80, 0x02, 0x14,
    0xd3, 0xc2, 0x16, 0xf4, 0x52, 0x18, 0x50, 0x53, 0x19, 0x6d, 0x43, 0x14,
    0xec, 0x82, 0x0e, 0x03, 0x02, 0x0c, 0x06, 0xa2, 0x05, 0x10, 0x82, 0x05,
    0x3a, 0xb2, 0x08, 0x70, 0xa2, 0x17, 0x5c, 0xd2, 0x25, 0xf5, 0x42, 0x2b,
    0x98, 0x32, 0x2c, 0x2d, 0xe2, 0x2a, 0x50, 0x92, 0x2c, 0x9d, 0xb2, 0x2d,
    0xa3, 0x02, 0x32, 0x62, 0x02, 0x39, 0xd9, 0x02, 0x37, 0xd4, 0xc2, 0x31,
    0x4f, 0x62, 0x26, 0x8d, 0xb1, 0x22, 0xcd, 0xa0, 0x1f, 0x33, 0x71, 0x16,
    0xec, 0x90, 0x0d, 0xca, 0xa0, 0x09, 0x5c, 0xc1, 0x0f, 0x45, 0x92, 0x1b,
    0x17, 0x13, 0x2e, 0xa5, 0x73, 0x41, 0xb0, 0xc4, 0x44, 0xe5, 0x94, 0x3c,
    0x53, 0xb4, 0x27, 0x4b, 0x93, 0x18, 0x39, 0x72, 0x10, 0x85, 0xb2, 0x0c,
    0x55, 0x82, 0x0e, 0x47, 0x52, 0x12, 0xae, 0x12, 0x17, 0x09, 0xa3, 0x18,
    0x18, 0x73, 0x1e, 0x08, 0xc3, 0x29, 0xd7, 0x53, 0x2d, 0x30, 0xf4, 0x2d,
    0xf9, 0x33, 0x28, 0x47, 0x63, 0x29, 0x4f, 0xa2, 0x2d, 0x99, 0x42, 0x32,
    0x91, 0x72, 0x38, 0xb4, 0x22, 0x3c, 0x22, 0x73, 0x3d, 0x4d, 0xc3, 0x39,
    0x05, 0x43, 0x3a, 0xa9, 0xd2, 0x42, 0x6d, 0xb3, 0x48, 0x25, 0x54, 0x50,
    0xa4, 0x14, 0x52, 0xc3, 0x64, 0x54, 0x55, 0x54, 0x4d, 0x82, 0x14, 0x3c,
    0xd8, 0x73, 0x2c, 0x53, 0x93, 0x22, 0x6b, 0x23, 0x20, 0xa7, 0xd3, 0x1f,
    0xae, 0xc3, 0x26, 0xb3, 0x33, 0x36, 0xe1, 0xa4, 0x42, 0x0e, 0xc6, 0x4f,
    0xed, 0x36, 0x54, 0x2c, 0x17, 0x58, 0x98, 0xb6, 0x54, 0x5e, 0xb6, 0x47,
    0x0f, 0xf5, 0x39, 0xe8, 0x63, 0x31, 0xb9, 0xb3, 0x32, 0x1e, 0xe4, 0x37,
];

static JS_RESS_2: [u8; 3242] = [
    0x75, 0x34, 0x41, 0x7c, 0x64, 0x4b, 0x19, 0x75, 0x4b, 0x42, 0x85, 0x4b,
    0x1d, 0x85, 0x49, 0xb7, 0x44, 0x4f, 0x0f, 0xf4, 0x53, 0x68, 0xa4, 0x51,
    0x0e, 0xa4, 0x4c, 0xca, 0xe3, 0x48, 0x26, 0x64, 0x4b, 0xae, 0x54, 0x4f,
    0xe8, 0xe4, 0x56, 0xc2, 0x24, 0x5f, 0x38, 0x15, 0x5c, 0x43, 0xe5, 0x56,
    0x27, 0x65, 0x4f, 0x32, 0x15, 0x53, 0x63, 0x35, 0x59, 0x9e, 0x66, 0x59,
    0xb9, 0xa6, 0x52, 0x2d, 0x46, 0x45, 0xab, 0x25, 0x39, 0x39, 0xa5, 0x2f,
    0xc9, 0x34, 0x30, 0x7f, 0x74, 0x3a, 0x58, 0x85, 0x40, 0x08, 0xd6, 0x46,
    0x77, 0x66, 0x4a, 0xba, 0xa6, 0x58, 0xce, 0x86, 0x68, 0x9e, 0x17, 0x70,
    0x48, 0x17, 0x6f, 0x81, 0x46, 0x65, 0xd6, 0x75, 0x58, 0x29, 0x65, 0x4b,
    0x7e, 0xf4, 0x48, 0x23, 0x54, 0x53, 0x14, 0xe5, 0x5b, 0xc9, 0x65, 0x62,
    0xd6, 0x65, 0x5e, 0x3e, 0x15, 0x5d, 0x6e, 0xf4, 0x5b, 0xdb, 0x94, 0x56,
    0xb4, 0x94, 0x50, 0x96, 0x44, 0x4b, 0xd4, 0x84, 0x48, 0xf6, 0xf4, 0x44,
    0xbf, 0x64, 0x47, 0x6c, 0x84, 0x50, 0x1f, 0x75, 0x53, 0x9e, 0xd5, 0x53,
    0xbd, 0x95, 0x4a, 0x64, 0x15, 0x43, 0xb7, 0xd4, 0x3c, 0x33, 0xc5, 0x39,
    0x3f, 0x55, 0x3d, 0x73, 0x25, 0x43, 0xfa, 0xe5, 0x46, 0x1f, 0x26, 0x41,
    0x81, 0x55, 0x39, 0x77, 0xc4, 0x34, 0x5c, 0x94, 0x2c, 0x42, 0x44, 0x2a,
    0x38, 0xc4, 0x2a, 0x26, 0x44, 0x36, 0xcf, 0x43, 0x42, 0x60, 0x64, 0x4a,
    0x67, 0xf4, 0x52, 0x9a, 0xb4, 0x59, 0x2d, 0x75, 0x5e, 0x7b, 0x85, 0x5b,
    0x13, 0x75, 0x56, 0x1f, 0xf4, 0x51, 0xeb, 0x43, 0x47, 0x9e, 0xa3, 0x41,
    0x74, 0x13, 0x3f, 0x84, 0x33, 0x47, 0x85, 0xa3, 0x4a, 0x35, 0xe4, 0x40,
    0xd7, 0x33, 0x34, 0x75, 0x93, 0x2b, 0xb3, 0xf3, 0x2b, 0x36, 0x84, 0x30,
    0x89, 0xf4, 0x3a, 0x97, 0x74, 0x47, 0x54, 0xb5, 0x48, 0x99, 0xf5, 0x44,
    0x75, 0x25, 0x3a, 0x0d, 0x85, 0x36, 0x80, 0xd4, 0x35, 0xdd, 0x24, 0x31,
    0x34, 0x24, 0x2a, 0x6a, 0x83, 0x24, 0x5b, 0x03, 0x27, 0xd8, 0xa3, 0x2e,
    0x68, 0x84, 0x3c, 0xb5, 0xf4, 0x49, 0x60, 0x35, 0x47, 0x1b, 0x15, 0x3c,
    0x0f, 0x64, 0x29, 0x98, 0x62, 0x20, 0x32, 0x01, 0x20, 0x76, 0x51, 0x24,
    0x97, 0x51, 0x2b, 0xea, 0x11, 0x31, 0x9e, 0x42, 0x37, 0x3b, 0x93, 0x3b,
    0x7b, 0x33, 0x44, 0x7d, 0x33, 0x50, 0x39, 0xf4, 0x50, 0x5e, 0xa4, 0x4a,
    0xe3, 0x23, 0x3a, 0x0c, 0xd3, 0x2e, 0x38, 0xe2, 0x26, 0xca, 0x22, 0x21,
    0xf9, 0x72, 0x1f, 0x19, 0x23, 0x1d, 0x5c, 0xa3, 0x1a, 0x67, 0xa3, 0x15,
    0x16, 0xc3, 0x16, 0xc4, 0x12, 0x21, 0xab, 0x13, 0x29, 0x89, 0x44, 0x31,
    0x0a, 0x75, 0x31, 0xf7, 0x24, 0x34, 0x41, 0x24, 0x33, 0x22, 0xf4, 0x2b,
    0x35, 0x63, 0x26, 0x87, 0xe2, 0x23, 0x88, 0x62, 0x24, 0xad, 0x12, 0x23,
    0x92, 0xa2, 0x26, 0x69, 0xd2, 0x31, 0x56, 0xe3, 0x39, 0x0e, 0xc4, 0x41,
    0x32, 0xb4, 0x3f, 0x8c, 0x93, 0x3c, 0x43, 0xc2, 0x32, 0xc8, 0x21, 0x20,
    0xa8, 0x10, 0x0f, 0x00, 0xa0, 0x07, 0x6d, 0xa0, 0x0d, 0x57, 0xc1, 0x18,
    0x0e, 0xa2, 0x28, 0x68, 0x22, 0x39, 0x5c, 0x93, 0x3d, 0xd5, 0x53, 0x3d,
    0xeb, 0x83, 0x34, 0x9e, 0x33, 0x2d, 0xe4, 0x42, 0x22, 0xfc, 0x62, 0x13,
    0x49, 0x42, 0x07, 0xa8, 0x01, 0x00, 0xb3, 0x01, 0x00, 0xff, 0x81, 0x01,
    0x19, 0xe2, 0x07, 0xfb, 0x71, 0x11, 0x9f, 0x32, 0x12, 0xe5, 0xa2, 0x12,
    0xf9, 0xe2, 0x12, 0xff, 0x22, 0x1f, 0xce, 0xe2, 0x2b, 0x56, 0xa3, 0x30,
    0xe3, 0xf2, 0x2e, 0x2e, 0xe2, 0x26, 0xc2, 0x81, 0x1e, 0x71, 0x01, 0x17,
    0x17, 0x71, 0x18, 0xdb, 0xe0, 0x22, 0xb3, 0x21, 0x29, 0x57, 0x72, 0x30,
    0xb5, 0x42, 0x34, 0xe3, 0xb2, 0x3e, 0xdc, 0x32, 0x44, 0x8a, 0xe3, 0x3b,
    0x11, 0xc3, 0x2b, 0x3f, 0x02, 0x19, 0xae, 0x71, 0x0a, 0x3c, 0xf1, 0x00,
    0xe3, 0x00, 0x05, 0xe2, 0x40, 0x16, 0x3b, 0x52, 0x25, 0x89, 0xc3, 0x32,
    0x6c, 0x24, 0x35, 0xb4, 0x74, 0x37, 0x75, 0xc4, 0x37, 0x03, 0x65, 0x33,
    0x8e, 0xf4, 0x2c, 0xd3, 0x53, 0x24, 0x71, 0x63, 0x1d, 0x28, 0xe3, 0x15,
    0xb2, 0xf2, 0x13, 0x26, 0x02, 0x18, 0x92, 0xa2, 0x17, 0xd7, 0xc2, 0x19,
    0xe1, 0xc2, 0x19, 0x9a, 0x92, 0x21, 0x04, 0x02, 0x2b, 0x95, 0xb2, 0x33,
    0xca, 0xd2, 0x3d, 0x2b, 0x93, 0x45, 0xd5, 0x23, 0x4a, 0x1f, 0x34, 0x46,
    0xa6, 0x73, 0x40, 0xb0, 0xd2, 0x3c, 0x95, 0x42, 0x34, 0x72, 0x42, 0x30,
    0x69, 0x82, 0x2d, 0x92, 0xf2, 0x35, 0xdb, 0xf2, 0x3e, 0x34, 0xa4, 0x41,
    0xb5, 0x24, 0x42, 0xfc, 0x14, 0x41, 0x67, 0x35, 0x40, 0x87, 0x95, 0x3a,
    0x00, 0x25, 0x35, 0x0c, 0x64, 0x32, 0x00, 0xe4, 0x2a, 0x02, 0x54, 0x28,
    0x34, 0x44, 0x28, 0x9a, 0x74, 0x35, 0xf6, 0xe4, 0x44, 0x05, 0xc6, 0x4b,
    0xd4, 0xb5, 0x4c, 0x61, 0x45, 0x4b, 0x6b, 0xa5, 0x4c, 0xa5, 0x45, 0x4d,
    0xa6, 0x85, 0x51, 0x69, 0x65, 0x58, 0xd8, 0x45, 0x55, 0xb6, 0xa5, 0x4e,
    0x04, 0xa5, 0x42, 0xff, 0x63, 0x40, 0x05, 0x03, 0x43, 0x67, 0x23, 0x43,
    0x3e, 0x23, 0x41, 0x2a, 0x73, 0x40, 0xbc, 0x63, 0x47, 0xa1, 0xc4, 0x52,
    0x6a, 0x85, 0x64, 0xeb, 0xa5, 0x76, 0xdd, 0x46, 0x78, 0xe9, 0xf6, 0x6d,
    0x28, 0x56, 0x57, 0x02, 0xd5, 0x45, 0xe4, 0xa3, 0x39, 0x4f, 0x04, 0x34,
    0x8f, 0xb4, 0x36, 0xf3, 0x24, 0x3b, 0x8f, 0xf5, 0x3e, 0xea, 0xb5, 0x3e,
    0xd9, 0xb5, 0x42, 0xa5, 0x65, 0x4c, 0x59, 0x26, 0x4e, 0xa5, 0xe6, 0x4b,
    0x6a, 0x86, 0x42, 0xc3, 0x05, 0x41, 0xdf, 0x04, 0x43, 0x0e, 0xe5, 0x45,
    0xd4, 0x44, 0x4d, 0xe6, 0x44, 0x54, 0x56, 0x35, 0x58, 0x8d, 0xb5, 0x55,
    0x4b, 0x05, 0x56, 0xe9, 0xb4, 0x5d, 0xa1, 0x45, 0x63, 0x47, 0x76, 0x6b,
    0x96, 0x26, 0x6d, 0x52, 0x26, 0x6f, 0x74, 0xc5, 0x68, 0x45, 0x25, 0x57,
    0x4b, 0x44, 0x45, 0xa2, 0xf3, 0x3a, 0xd2, 0xb3, 0x3a, 0x47, 0xd4, 0x3d,
    0x86, 0x94, 0x47, 0xa4, 0x94, 0x57, 0xc7, 0x45, 0x62, 0xcd, 0x16, 0x6c,
    0x85, 0xf7, 0x6b, 0x9e, 0x77, 0x68, 0xee, 0xe6, 0x5c, 0xc5, 0x16, 0x4a,
    0x9a, 0x95, 0x37, 0x7c, 0xd4, 0x2b, 0x50, 0xb4, 0x2c, 0xcc, 0xb4, 0x33,
    0x44, 0x35, 0x3f, 0x60, 0x55, 0x4a, 0xfc, 0x45, 0x49, 0x10, 0x46, 0x46,
    0xd4, 0x75, 0x41, 0x5c, 0xc5, 0x45, 0x8d, 0x84, 0x49, 0x93, 0x04, 0x48,
    0xec, 0x03, 0x45, 0x63, 0xc3, 0x41, 0x7b, 0xe3, 0x42, 0xdb, 0xc3, 0x45,
    0x13, 0xc4, 0x4d, 0x0d, 0x24, 0x58, 0xae, 0xb4, 0x57, 0xc6, 0xf4, 0x53,
    0x7e, 0xd4, 0x4c, 0x36, 0x24, 0x51, 0x28, 0x14, 0x57, 0x27, 0x75, 0x53,
    0x12, 0x15, 0x48, 0x7c, 0x94, 0x37, 0xfc, 0x03, 0x29, 0x7c, 0xd3, 0x1d,
    0xf8, 0x12, 0x1e, 0xad, 0xd2, 0x29, 0xa3, 0x73, 0x32, 0x89, 0x64, 0x3a,
    0x29, 0xa5, 0x3b, 0x7b, 0x45, 0x43, 0x96, 0xf5, 0x4b, 0x72, 0x66, 0x4d,
    0x0a, 0x46, 0x47, 0x1d, 0xf5, 0x3a, 0x5a, 0x94, 0x2d, 0xa3, 0x33, 0x20,
    0xef, 0x52, 0x1d, 0x91, 0xd2, 0x27, 0x8b, 0x43, 0x31, 0x5a, 0xe4, 0x39,
    0x87, 0xc4, 0x38, 0xeb, 0x03, 0x39, 0xce, 0xa2, 0x38, 0xd3, 0xe2, 0x35,
    0x61, 0x72, 0x32, 0x0e, 0x82, 0x2e, 0x34, 0xe2, 0x2c, 0x58, 0xd2, 0x29,
    0x21, 0xa2, 0x2b, 0xc7, 0x91, 0x33, 0x65, 0x92, 0x35, 0xd0, 0xb2, 0x36,
    0xed, 0x72, 0x30, 0xae, 0x52, 0x2c, 0x19, 0x02, 0x25, 0x97, 0x92, 0x1d,
    0xbd, 0x82, 0x1d, 0x17, 0x43, 0x20, 0xa9, 0x53, 0x21, 0xc4, 0xd3, 0x19,
    0x10, 0xf3, 0x10, 0xed, 0xb1, 0x0b, 0xc7, 0xe1, 0x02, 0xb9, 0x01, 0x00,
    0xde, 0x01, 0x00, 0x22, 0x92, 0x0c, 0x3a, 0xc2, 0x19, 0x01, 0x73, 0x20,
    0xe1, 0x92, 0x26, 0xd9, 0xb2, 0x2c, 0x44, 0x83, 0x31, 0x86, 0x13, 0x2f,
    0x21, 0x33, 0x2a, 0x39, 0x12, 0x26, 0x10, 0x92, 0x1c, 0xd0, 0x81, 0x19,
    0xa9, 0x01, 0x1a, 0x98, 0xe1, 0x25, 0x6e, 0x21, 0x2f, 0x0a, 0xf2, 0x2a,
    0x8b, 0x31, 0x1f, 0xf5, 0x30, 0x15, 0x11, 0xa1, 0x14, 0x8e, 0x61, 0x19,
    0xea, 0x71, 0x24, 0x08, 0xc2, 0x31, 0xcb, 0x52, 0x33, 0x12, 0x03, 0x30,
    0xfb, 0xa2, 0x25, 0xaf, 0xd2, 0x20, 0x47, 0x62, 0x1d, 0xf2, 0x72, 0x17,
    0xb7, 0xc2, 0x0f, 0x35, 0x42, 0x08, 0x34, 0x92, 0x08, 0xa3, 0x72, 0x0e,
    0x16, 0xe3, 0x1a, 0x4f, 0x03, 0x28, 0xfd, 0x03, 0x26, 0xda, 0xe3, 0x1b,
    0x0b, 0x13, 0x0b, 0xf0, 0xb1, 0x05, 0xd9, 0xe0, 0x08, 0x2e, 0xf1, 0x10,
    0x4f, 0x51, 0x1d, 0xa5, 0x21, 0x27, 0x47, 0xd2, 0x2d, 0xb9, 0x62, 0x2f,
    0xbb, 0x92, 0x33, 0x8a, 0x62, 0x3c, 0x2a, 0x03, 0x3d, 0x4e, 0xc3, 0x39,
    0xdf, 0x12, 0x2f, 0x1c, 0x32, 0x2c, 0x72, 0xb1, 0x2c, 0x26, 0x62, 0x2a,
    0x53, 0x32, 0x28, 0x7e, 0x92, 0x25, 0xdf, 0x32, 0x23, 0xf4, 0x82, 0x1d,
    0x89, 0x42, 0x1c, 0x0a, 0x02, 0x24, 0xc9, 0x92, 0x2a, 0xa9, 0x53, 0x33,
    0x65, 0x34, 0x35, 0xb6, 0xd4, 0x38, 0x84, 0x94, 0x38, 0xfb, 0x34, 0x32,
    0x6f, 0x94, 0x2b, 0xdf, 0xe3, 0x27, 0xec, 0x03, 0x29, 0x27, 0x34, 0x29,
    0x1a, 0x04, 0x2d, 0xe8, 0x93, 0x36, 0xa8, 0xc4, 0x3a, 0x21, 0x95, 0x3e,
    0x23, 0xb5, 0x3b, 0x86, 0xc4, 0x3b, 0x4d, 0x33, 0x38, 0xe6, 0xf2, 0x2e,
    0xe8, 0xb1, 0x26, 0x4f, 0xb1, 0x23, 0xb1, 0xf1, 0x2a, 0x90, 0x12, 0x36,
    0x40, 0xd3, 0x44, 0x91, 0x83, 0x53, 0x61, 0x04, 0x55, 0x90, 0x94, 0x51,
    0x4f, 0xf4, 0x47, 0xda, 0x23, 0x44, 0x41, 0xe3, 0x3d, 0xa7, 0xb3, 0x32,
    0x6a, 0xf3, 0x29, 0x42, 0x53, 0x24, 0x89, 0x83, 0x23, 0xd2, 0x73, 0x23,
    0xd5, 0xf3, 0x28, 0xac, 0xe3, 0x32, 0x54, 0xb4, 0x33, 0xa2, 0x34, 0x32,
    0xb6, 0xb4, 0x2d, 0xc1, 0x04, 0x35, 0xc8, 0x44, 0x40, 0xa9, 0xb5, 0x45,
    0x72, 0x15, 0x46, 0xe8, 0x84, 0x41, 0xa0, 0xe4, 0x3b, 0x5c, 0xe4, 0x34,
    0xf8, 0xf3, 0x34, 0xab, 0x13, 0x3e, 0x75, 0xd4, 0x43, 0x0e, 0x45, 0x4b,
    0x4f, 0x65, 0x4e, 0x24, 0x55, 0x57, 0x9f, 0xb4, 0x5d, 0x05, 0xe5, 0x5a,
    0x7c, 0x74, 0x50, 0xb8, 0xf3, 0x41, 0x48, 0xf3, 0x36, 0x01, 0x03, 0x30,
    0xbd, 0x52, 0x34, 0xbe, 0xd2, 0x44, 0x04, 0x94, 0x52, 0x2f, 0x95, 0x5e,
    0xee, 0x65, 0x5f, 0x10, 0x46, 0x5e, 0xa3, 0xa5, 0x57, 0x1b, 0xf6, 0x4d,
    0xde, 0x15, 0x46, 0x83, 0x95, 0x3e, 0x79, 0x25, 0x3a, 0x71, 0x45, 0x35,
    0x17, 0x35, 0x34, 0x8b, 0xf4, 0x37, 0xe6, 0xa4, 0x35, 0x13, 0x25, 0x34,
    0x0d, 0x85, 0x2f, 0xc4, 0x84, 0x33, 0x31, 0xa4, 0x39, 0x95, 0x64, 0x3f,
    0x87, 0xf4, 0x49, 0xd3, 0x54, 0x55, 0x8f, 0xc5, 0x5d, 0xf9, 0x65, 0x5c,
    0x95, 0x05, 0x57, 0xac, 0x34, 0x53, 0x8d, 0x44, 0x4a, 0x4f, 0xf4, 0x45,
    0x0c, 0x24, 0x43, 0xda, 0x93, 0x4c, 0xc4, 0x43, 0x57, 0xc3, 0xb4, 0x58,
    0xd4, 0x74, 0x54, 0xca, 0x24, 0x50, 0x2a, 0xe5, 0x4f, 0x73, 0x75, 0x4d,
    0x27, 0xb5, 0x4b, 0x70, 0xa4, 0x4c, 0x93, 0x74, 0x47, 0xae, 0x84, 0x45,
    0xed, 0x44, 0x43, 0x46, 0x25, 0x4a, 0x86, 0x95, 0x50, 0x8e, 0x56, 0x4f,
    0x58, 0x86, 0x48, 0xbd, 0xd5, 0x40, 0x9c, 0x85, 0x3f, 0xd6, 0xa5, 0x41,
    0x01, 0xc6, 0x49, 0x0a, 0x56, 0x55, 0xba, 0x06, 0x55, 0xb8, 0xe6, 0x4d,
    0x09, 0xa6, 0x3f, 0xf1, 0x94, 0x3a, 0xad, 0xb3, 0x39, 0x98, 0x63, 0x38,
    0x08, 0xc3, 0x37, 0xa6, 0x02, 0x37, 0xe9, 0xb2, 0x3b, 0x8e, 0x73, 0x44,
    0x32, 0x34, 0x54, 0xbb, 0x44, 0x67, 0xd4, 0x25, 0x6c, 0x0b, 0x36, 0x66,
    0x59, 0xe5, 0x53, 0x1e, 0xf4, 0x45, 0xd9, 0x72, 0x3a, 0x09, 0xe3, 0x30,
    0x0e, 0xf3, 0x2e, 0x67, 0xc3, 0x2f, 0xfa, 0x23, 0x30, 0x30, 0x64, 0x2c,
    0xe5, 0x33, 0x2d, 0x89, 0x13, 0x36, 0x40, 0xc4, 0x39, 0xcc, 0x44, 0x3b,
    0xfa, 0x74, 0x34, 0xbc, 0x34, 0x32, 0x2f, 0x34, 0x31, 0x91, 0xa4, 0x2e,
    0x37, 0xc4, 0x2e, 0xfd, 0xb3, 0x30, 0x39, 0x84, 0x32, 0x51, 0x74, 0x2e,
    0xe7, 0xa3, 0x2b, 0x56, 0x43, 0x30, 0xe8, 0x53, 0x34, 0x89, 0x04, 0x3e,
    0x02, 0x35, 0x44, 0xe6, 0x14, 0x4b, 0xf5, 0xe3, 0x48, 0x8f, 0x73, 0x3b,
    0x4e, 0xf2, 0x2a, 0x46, 0xa1, 0x1e, 0x25, 0xc1, 0x1c, 0x7d, 0xd1, 0x1f,
    0xb8, 0x01, 0x29, 0xd6, 0x01, 0x38, 0xe1, 0x02, 0x41, 0xbe, 0xf3, 0x49,
    0x5c, 0xa4, 0x4b, 0x8c, 0x94, 0x4c, 0x14, 0xe4, 0x42, 0x20, 0xf4, 0x2e,
    0x34, 0xc3, 0x1a, 0x47, 0xf2, 0x0b, 0x1e, 0x22, 0x09, 0x7c, 0x12, 0x0d,
    0xc5, 0xd2, 0x15, 0xba, 0x12, 0x1f, 0x37, 0xd3, 0x1b, 0x3b, 0x13, 0x16,
    0x06, 0xb3, 0x0e, 0xcf, 0xa2, 0x13, 0x80, 0x42, 0x1b, 0xfb, 0x12, 0x1d,
    0x7e, 0xa2, 0x1c, 0xfa, 0xd1, 0x1a, 0xf7, 0xf1, 0x1a, 0x1d, 0x62, 0x1a,
    0x0e, 0xd2, 0x1d, 0xd7, 0x91, 0x25, 0x61, 0xb2, 0x24, 0x72, 0xa2, 0x22,
    0x25, 0xd2, 0x1e, 0xce, 0xa1, 0x28, 0xb9, 0x71, 0x37, 0xd8, 0xc2, 0x3c,
    0xd6, 0xd2, 0x35, 0x41, 0xb2, 0x26, 0xc2, 0x51, 0x18, 0x3a, 0x01, 0x0c,
    0x91, 0x30, 0x09, 0x1c, 0x20, 0x12, 0xea, 0xb0, 0x18, 0xb5, 0x11, 0x20,
    0x55, 0x92, 0x21, 0xc4, 0x72, 0x28, 0x0c, 0x43, 0x2f, 0x4b, 0xb4, 0x30,
    0x6e, 0x24, 0x2c, 0xee, 0x73, 0x20, 0x60, 0x33, 0x13, 0xb9, 0xc2, 0x05,
    0xf4, 0x81, 0x01, 0x76, 0xb1, 0x09, 0x41, 0x92, 0x0f, 0xe2, 0xf2, 0x13,
    0xfd, 0x12, 0x10, 0x82, 0xf2, 0x10, 0x97, 0x61, 0x13, 0xb7, 0xd1, 0x15,
    0x6a, 0x91, 0x1b, 0x60, 0x71, 0x20, 0xc5, 0x51, 0x24, 0x0d, 0x62, 0x23,
    0xdc, 0xc1, 0x23, 0x71, 0x21, 0x29, 0xe8, 0x71, 0x28, 0x16, 0xc2, 0x27,
    0xe6, 0x91, 0x21, 0x62, 0xc1, 0x20, 0xb0, 0x40, 0x1f, 0x3c, 0x21, 0x1c,
    0x86, 0x61, 0x1f, 0x31, 0x32, 0x26, 0x25, 0x43, 0x2b, 0x86, 0xc3, 0x26,
    0xea, 0x52, 0x1e, 0xc4, 0x51, 0x18, 0x81, 0x91, 0x0d, 0x57, 0x31, 0x08,
    0x70, 0xf1, 0x04, 0xc5, 0x61, 0x0d, 0x17, 0xe2, 0x17, 0x4c, 0xb3, 0x1d,
    0x84, 0xd3, 0x22, 0xa3, 0xb3, 0x28, 0x36, 0x14, 0x30, 0xb4, 0xd4, 0x31,
    0x8b, 0x84, 0x30, 0xd9, 0x33, 0x2f, 0xd2, 0xb3, 0x26, 0x99, 0xc3, 0x22,
    0x64, 0x83, 0x21, 0x2c, 0x83, 0x2b, 0xb3, 0xb2, 0x34, 0x07, 0xe3, 0x34,
    0x6f, 0x82, 0x2f, 0xd0, 0x71, 0x29, 0xe6, 0x91, 0x2b, 0x7c, 0xc2, 0x33,
    0x12, 0x83, 0x42, 0x81, 0x13, 0x54, 0x86, 0xd4, 0x58, 0xd9, 0x64, 0x56,
    0x8c, 0x94, 0x4a, 0xea, 0x33, 0x44, 0x38, 0x23, 0x3e, 0xb8, 0x43, 0x35,
    0x9b, 0xc3, 0x2d, 0x79, 0x43, 0x28, 0xcb, 0xa3, 0x29, 0x57, 0x74, 0x2f,
    0xc0, 0x54, 0x3b, 0xfb, 0xf4, 0x49, 0xcd, 0xb5, 0x4a, 0xea, 0xb5, 0x42,
    0x5b, 0x95, 0x30, 0x6b, 0x14, 0x27, 0x76, 0xc3, 0x25, 0xe0, 0x83, 0x29,
    0xeb, 0x73, 0x33, 0x3a, 0xa4, 0x3e, 0xf4, 0xe4, 0x47, 0x79, 0xa5, 0x4a,
    0x79, 0x15, 0x4e, 0x48, 0x15, 0x57, 0xfc, 0x05, 0x5a, 0x51, 0x66, 0x5b,
    0x15, 0xa6, 0x55, 0x56, 0xd5, 0x55, 0x5c, 0xb4, 0x57, 0x9e, 0xb4, 0x55,
    0x4e, 0xa4, 0x51, 0x12, 0x84, 0x4d, 0x53, 0x64, 0x4c, 0x84, 0x84, 0x49,
    0x40, 0x34, 0x4a, 0xe7, 0x83, 0x53, 0xbc, 0x64, 0x5b, 0xa9, 0x65, 0x66,
    0x7e, 0x16, 0x6b, 0xf3, 0x46, 0x6f, 0xc4, 0x26, 0x6a, 0x20, 0xa7, 0x5b,
    0x80, 0x26, 0x4d, 0xcf, 0x35, 0x42, 0xb7, 0x25, 0x3f, 0xe5, 0x85, 0x3f,
    0xf0, 0xe5, 0x45, 0xed, 0xd5, 0x52, 0xda, 0xe6, 0x58, 0x75, 0x77, 0x5c,
    0x99, 0x47, 0x58, 0x3a, 0x07, 0x58, 0x3b, 0xe6, 0x53, 0xc5, 0x45, 0x48,
    0x77, 0x24, 0x3e, 0x8a, 0xb3, 0x39, 0xa0, 0xb3, 0x3e, 0x44, 0xe4, 0x47,
    0xda, 0x94, 0x55, 0x3b, 0x55, 0x65, 0x2b, 0x46, 0x69, 0x78, 0x36, 0x69,
    0x3a, 0x26, 0x63, 0xa5, 0xc5, 0x63, 0xe3, 0x24, 0x63, 0x29, 0x65, 0x5a,
    0xad, 0x04, 0x4f, 0x34, 0x14, 0x44, 0x2b, 0x64, 0x3d, 0x22, 0x44, 0x38,
    0xd9, 0xb3, 0x39, 0x88, 0x93, 0x42, 0x32, 0xa4, 0x44, 0xa5, 0x24, 0x46,
    0xfc, 0x64, 0x44, 0x54, 0x75, 0x4b, 0xa0, 0xd5, 0x53, 0xd4, 0xa6, 0x55,
    0xd0, 0xa6, 0x50, 0x2c, 0x16, 0x45, 0x9e, 0x55, 0x39, 0x0d, 0xe5, 0x2d,
    0x61, 0x24, 0x2a, 0xe6, 0x93, 0x31, 0xa3, 0x54, 0x37, 0x54, 0xf5, 0x3f,
    0xc9, 0x15, 0x45, 0xd9, 0xe5, 0x4f, 0x5c, 0x95, 0x57, 0x92, 0x25, 0x57,
    0xda, 0x94, 0x50, 0xe0, 0x13, 0x43, 0x2b, 0x03, 0x36, 0x9a, 0x52, 0x2b,
    0x12, 0xc2, 0x2a, 0xd8, 0x01, 0x37, 0xe9, 0x12, 0x42, 0xe4, 0x83, 0x4d,
    0x75, 0x34, 0x50, 0x7b, 0x94, 0x53, 0x10, 0x64, 0x51, 0x8d, 0x24, 0x48,
    0x57, 0xd4, 0x3f, 0x29, 0x54, 0x38, 0x47, 0xd4, 0x32, 0x33, 0xe4, 0x2a,
    0x94, 0xa3, 0x24, 0xaa, 0xf2, 0x22, 0xb2, 0x32, 0x1c, 0xb5, 0xf2, 0x17,
    0xbc, 0xa2, 0x11, 0xb6, 0xd2, 0x14, 0x9a, 0xf2, 0x1b, 0x88, 0x63, 0x22,
    0xc2, 0x03, 0x2c, 0x1c, 0xf4, 0x36, 0xde, 0xa4, 0x3f, 0x41, 0x55, 0x3d,
    0xba, 0xa4, 0x34, 0x90, 0xd3, 0x2b, 0x1a, 0x03, 0x1d, 0x84, 0x52, 0x14,
    0x09, 0xb2, 0x10, 0xc3, 0xe1, 0x1c, 0x9d, 0xb1, 0x2d, 0x99, 0x12, 0x37,
    0xa8, 0x62, 0x38, 0x78, 0x92, 0x35, 0xb2, 0x72, 0x35, 0xed, 0x82, 0x33,
    0xa7, 0xc2, 0x31, 0xf7, 0xe1, 0x31, 0x01, 0x32, 0x2a, 0xd6, 0x91, 0x24,
    0xb8, 0x81, 0x1f, 0xd9, 0xf1, 0x25, 0x15, 0x52, 0x2c, 0x4d, 0xa3, 0x2b,
    0x86, 0xf3, 0x26, 0x5c, 0x03, 0x20, 0x72, 0xe3, 0x1d, 0xb7, 0xc3, 0x1f,
    0xe8, 0xb3, 0x28, 0xfe, 0x53, 0x35, 0xb0, 0x94, 0x33, 0x93, 0x44, 0x27,
    0xa8, 0x73, 0x10, 0x5c, 0xc2, 0x03, 0x1d, 0x01, 0x00, 0x33, 0x01, 0x00,
    0xdd, 0x60, 0x05, 0xd4, 0xa0, 0x0c, 0x64, 0x11, 0x16, 0x20, 0x32, 0x1f,
    0xaf, 0xb2, 0x2c, 0x17, 0x83, 0x3d, 0x14, 0xd4, 0x40, 0x2f, 0x84, 0x3a,
    0x4c, 0x93, 0x27, 0xb4, 0x51, 0x19, 0x04, 0xd0, 0x10, 0x00, 0xe0, 0x0c,
    0x07, 0x70, 0x10, 0x86, 0xa0, 0x16, 0x65, 0xe1, 0x1b, 0xde, 0x41, 0x1b,
    0xb2, 0xc1, 0x1c, 0x58, 0x41, 0x25, 0x08, 0x82, 0x28, 0x8b, 0x62, 0x2a,
    0xbf, 0xc2, 0x23, 0x8f, 0xe2, 0x1e, 0x02, 0x32, 0x18, 0x80, 0x02, 0x11,
    0x6d, 0x12, 0x0f, 0x79, 0xf2, 0x10, 0xfb, 0xa2, 0x15, 0x62, 0x23, 0x16,
    0x3e, 0x63, 0x17, 0xd8, 0x42, 0x1e, 0x7b, 0x33, 0x22, 0x1f, 0xc4, 0x29,
    0x93, 0x74, 0x2c, 0x78, 0x64, 0x30, 0x77, 0x33, 0x2c, 0xde, 0x02, 0x1f,
    0x77, 0xe1, 0x12, 0x6c, 0xd0, 0x0b, 0x61, 0x40, 0x0e, 0xe5, 0x80, 0x15,
    0x67, 0xb1, 0x22, 0xcd, 0xe1, 0x34, 0x08, 0xf3, 0x3f, 0xe8, 0xb3, 0x49,
    0x52, 0xa4, 0x4b, 0x2d, 0xa4, 0x4d, 0x6b, 0xa3, 0x46, 0x4b, 0x73, 0x33,
    0x47, 0x62, 0x1f, 0x7b, 0x71, 0x12, 0x99, 0x61, 0x12, 0x30, 0x22, 0x19,
    0xa7, 0xd2, 0x24, 0xc8, 0x52, 0x31, 0x78, 0x23, 0x31, 0xaa, 0x03, 0x2d,
    0x9b, 0x33, 0x24, 0x7c, 0x63, 0x24, 0x4f, 0x73, 0x27, 0x13, 0x64, 0x26,
    0xd9, 0xf3, 0x23, 0x73, 0x53, 0x21, 0x8a, 0x63, 0x22, 0xc9, 0x63, 0x23,
    0xd8, 0x13, 0x29, 0xc5, 0x93, 0x33, 0x7f, 0x94, 0x35, 0xc3, 0xf4, 0x35,
    0xa1, 0x04, 0x34, 0x5e, 0xa4, 0x3e, 0x15, 0x84, 0x4d, 0xd8, 0x84, 0x54,
    0x8f, 0xc4, 0x50, 0xc1, 0x83, 0x43, 0x1e, 0x33, 0x36, 0x93, 0x42, 0x2b,
    0x0e, 0x72, 0x2b, 0xd9, 0x91, 0x38, 0xf7, 0x82, 0x44, 0x06, 0x14, 0x51,
    0xc4, 0xb4, 0x56, 0x2e, 0xa5, 0x5f, 0x50, 0x55, 0x64, 0x4c, 0x26, 0x60,
    0x50, 0xc6, 0x57, 0xea, 0x85, 0x4a, 0x84, 0xf5, 0x3c, 0xf9, 0x94, 0x30,
    0x59, 0x34, 0x2f, 0x05, 0xa4, 0x3a, 0x03, 0x65, 0x43, 0xde, 0x45, 0x49,
    0x36, 0x36, 0x44, 0xef, 0x75, 0x41, 0x31, 0xa5, 0x3f, 0x62, 0x15, 0x3d,
    0xf1, 0x04, 0x3f, 0xc3, 0xa4, 0x43, 0x27, 0xd5, 0x48, 0x76, 0x95, 0x48,
    0x53, 0xb5, 0x49, 0xed, 0x34, 0x4f, 0x6b, 0x65, 0x4f, 0xae, 0x65, 0x51,
    0xa0, 0xa5, 0x4f, 0x24, 0xd5, 0x52, 0x42, 0x34, 0x55, 0x88, 0x04, 0x55,
    0x73, 0x64, 0x57, 0xaf, 0x24, 0x5b, 0x5a, 0xa5, 0x5e, 0xac, 0xd5, 0x5a,
    0x36, 0x45, 0x55, 0x40, 0xe4, 0x51, 0x26, 0x54, 0x49, 0x11, 0x24, 0x46,
    0x3e, 0xb4, 0x45, 0xb9, 0xb4, 0x4f, 0x2b, 0xb5, 0x57, 0x70, 0xd6, 0x57,
    0xae, 0x96, 0x55, 0xa6, 0xc6, 0x52, 0xed, 0x66, 0x53, 0x32, 0xa7, 0x52,
    0x0e, 0xd7, 0x53, 0x84, 0x76, 0x56, 0xb8, 0x16, 0x51, 0xb2, 0x26, 0x4d,
    0x98, 0xb6, 0x48, 0x72, 0x16, 0x4f, 0x0d, 0xd6, 0x55, 0x4d, 0x36, 0x54,
    0x78, 0x25, 0x4e, 0x8a, 0x74, 0x46, 0x41, 0xe4, 0x44, 0x7f, 0x34, 0x49,
    0xf9, 0xb4, 0x57, 0x7d, 0x65, 0x6b, 0xb9, 0xe6, 0x73, 0x3d, 0x07, 0x75,
    0xed, 0x56, 0x6b, 0x07, 0x26, 0x66, 0xf8, 0xa4, 0x62, 0x32, 0x45, 0x5b,
    0xdb, 0x04, 0x53, 0x93, 0xd4, 0x4b, 0xc8, 0x04, 0x4a, 0x18, 0xb5, 0x4a,
    0x3c, 0xa5, 0x52, 0x35, 0x85, 0x5e, 0xec, 0x15, 0x5f, 0x1e, 0xf6, 0x58,
    0xc4, 0x95, 0x48, 0x0c, 0x85, 0x3d, 0x4a, 0x24, 0x38, 0xf5, 0xf4, 0x37,
    0x3a, 0xa5, 0x3d, 0x8a, 0x15, 0x44, 0x23, 0x26, 0x49, 0x71, 0x86, 0x47,
    0x3a, 0x16, 0x48, 0xc9, 0xe5, 0x4d, 0x51, 0x86, 0x4e, 0x98, 0xe6, 0x4e,
    0x79, 0x56, 0x4a, 0xf5, 0x35, 0x4d, 0x1a, 0x05, 0x51, 0x34, 0xf5, 0x50,
    0xa7, 0xb4, 0x4f, 0x2b, 0x74, 0x4c, 0x2a, 0x64, 0x4a, 0x29, 0x94, 0x45,
    0xdb, 0xb3, 0x45, 0x6d, 0x23, 0x4d, 0x22, 0xc4, 0x52, 0xd4, 0x44, 0x5b,
    0x55, 0xb5, 0x5e, 0x7b, 0x25, 0x64, 0x26, 0x45, 0x61, 0x72, 0xe5, 0x52,
    0xd2, 0x94, 0x43, 0x40, 0xe4, 0x37, 0x3d, 0x64, 0x33, 0x65, 0x24, 0x32,
    0x72, 0x24, 0x39, 0x5f, 0xf4, 0x44, 0x26, 0x95, 0x47, 0x8b, 0x55, 0x45,
    0x78, 0xc5, 0x39, 0xf5, 0x34, 0x32, 0x12, 0xa4, 0x2a, 0xfc, 0x23, 0x1f,
    0x0a, 0x73, 0x16, 0x58, 0x62, 0x14, 0x96, 0x52, 0x1b, 0x4c, 0x13, 0x25,
    0xfb, 0x53, 0x34, 0x5b, 0xb4, 0x43, 0x39, 0x85, 0x45, 0x58, 0xd5, 0x41,
    0xd6, 0xe4, 0x37, 0xdf, 0x13, 0x35, 0xaa, 0x92, 0x34, 0xab, 0x02, 0x32,
    0x2f, 0x32, 0x2e, 0xc2, 0x21, 0x28, 0xbd, 0xc1, 0x23, 0xbd, 0x71, 0x1f,
    0x9b, 0xb1, 0x23, 0x66, 0xc1, 0x2d, 0x1c, 0x32, 0x30, 0x78, 0x42, 0x30,
    0x8b, 0xa2, 0x2b, 0x8c, 0xf2, 0x2e, 0x91, 0x22, 0x32, 0xa4, 0x33, 0x30,
    0xd7, 0x23, 0x2b, 0x99, 0x33, 0x21, 0x55, 0x83, 0x16, 0xeb, 0xe2, 0x0b,
    0x70, 0x62, 0x0c, 0x17, 0xf2, 0x16, 0x02, 0x33, 0x1f, 0xe0, 0x13, 0x27,
    0x60, 0x44, 0x26, 0x4c, 0x14, 0x28, 0xa5, 0xc3, 0x27, 0xae, 0xf3, 0x22,
    0xd7, 0x92, 0x1d, 0xfe, 0x81, 0x16, 0x95, 0x31, 0x10, 0x4f, 0x01, 0x0a,
    0x24, 0x11, 0x0f, 0x22, 0xf1, 0x1d, 0x56, 0x92, 0x2a, 0x5c, 0xb3, 0x36,
    0xc9, 0x93, 0x38, 0x61, 0x53, 0x39, 0x5a, 0xc2, 0x35, 0x51, 0x52, 0x2d,
    0xd1, 0xc1, 0x26, 0xa6, 0xf1, 0x23, 0x11, 0x02, 0x25, 0x61, 0x52, 0x22,
    0x2e, 0x42, 0x22, 0x7a, 0x21, 0x23, 0x9b, 0x71, 0x1d, 0xa5, 0x91, 0x19,
    0xb1, 0x31, 0x13, 0xb1, 0x51, 0x13, 0x90, 0xe1, 0x13, 0x83, 0xe2, 0x13,
    0xdb, 0x72, 0x18, 0x50, 0xf3, 0x20, 0x35, 0x04, 0x2b, 0xda, 0x44, 0x2d,
    0xd5, 0x34, 0x2e, 0x1a, 0x94, 0x2c, 0xff, 0x33, 0x22, 0xa5, 0xd3, 0x19,
    0x4a, 0x43, 0x14, 0x16, 0x13, 0x1e, 0xe9, 0x62, 0x2b, 0x91, 0xf3, 0x31,
    0x38, 0xe3, 0x32, 0xbd, 0x32, 0x31, 0xcc, 0xe2, 0x32, 0x19, 0x73, 0x34,
    0x51, 0x03,
];
