//! 32.32 signed fixed-point arithmetic.
//!
//! [`Fix64`] is only used on the real-solar-time path. Addition, subtraction
//! and scaling by an integer wrap around in two's complement instead of
//! trapping, so intermediate excursions beyond the representable range are
//! tolerated. Multiplication and division come in several variants that
//! trade overflow headroom for speed; pick the cheapest one whose operand
//! range is known to be safe.

use std::ops::{Add, Mul, Neg, Shl, Shr, Sub};

const FRAC_BITS: u32 = 32;
const HALF_LSB: i64 = 1 << (FRAC_BITS - 1);
const LOW_MASK: i64 = 0xffff_ffff;

/// A signed fixed-point number with 32 integer and 32 fractional bits.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Fix64(i64);

impl Fix64 {
    pub const ZERO: Fix64 = Fix64(0);
    pub const ONE: Fix64 = Fix64(1 << FRAC_BITS);

    /// Creates a value from its raw bit pattern.
    #[inline]
    pub const fn from_bits(bits: i64) -> Self {
        Self(bits)
    }
    /// Returns the raw bit pattern.
    #[inline]
    pub const fn to_bits(self) -> i64 {
        self.0
    }

    /// Converts an integer exactly. Bits shifted past the sign are lost, so
    /// `v` should lie within `i32` range.
    #[inline]
    pub const fn from_int(v: i64) -> Self {
        Self(v << FRAC_BITS)
    }

    /// Converts a float, rounding to the nearest representable value with
    /// ties toward positive infinity.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::fixed::Fix64;
    ///
    /// assert_eq!(Fix64::ONE, Fix64::from_f64(1.0));
    /// assert_eq!(-(1 << 31), Fix64::from_f64(-0.5).to_bits());
    /// ```
    #[inline]
    pub fn from_f64(v: f64) -> Self {
        Self((v * (1_u64 << FRAC_BITS) as f64 + 0.5).floor() as i64)
    }
    /// Converts to a float, exact up to the 53 bits of an `f64` mantissa.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1_u64 << FRAC_BITS) as f64
    }

    /// Integer part, rounding toward negative infinity.
    #[inline]
    pub const fn fast_int(self) -> i64 {
        self.0 >> FRAC_BITS
    }
    /// Nearest integer, with halves rounded up.
    #[inline]
    pub const fn safe_int(self) -> i64 {
        (self.0 >> FRAC_BITS) + ((self.0 >> (FRAC_BITS - 1)) & 1)
    }

    /// Product from the low 64 bits of the full product.
    ///
    /// Only correct while the true product of the raw values fits in an
    /// `i64`; the fraction below the last bit is truncated.
    #[inline]
    pub const fn fast_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0) >> FRAC_BITS)
    }
    /// Like [`fast_mul`](Self::fast_mul), rounded to nearest.
    #[inline]
    pub const fn tiny_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0).wrapping_add(HALF_LSB) >> FRAC_BITS)
    }
    /// Product recombined from 32-bit halves, so it stays correct whenever
    /// the result itself is representable. Truncates.
    #[inline]
    pub const fn fair_mul(self, rhs: Self) -> Self {
        let (high, low) = split_mul(self.0, rhs.0);
        Self(high.wrapping_add((low >> FRAC_BITS) as i64))
    }
    /// Like [`fair_mul`](Self::fair_mul), rounded to nearest.
    #[inline]
    pub const fn safe_mul(self, rhs: Self) -> Self {
        let (high, low) = split_mul(self.0, rhs.0);
        Self(high.wrapping_add(((low + HALF_LSB as u64) >> FRAC_BITS) as i64))
    }

    /// Quotient `num / den` of two integers.
    ///
    /// `num` must fit in 32 bits so that shifting it does not overflow. The
    /// quotient truncates toward zero. Panics if `den` is zero.
    #[inline]
    pub const fn fast_div(num: i64, den: i64) -> Self {
        Self((num << FRAC_BITS).wrapping_div(den))
    }
    /// Quotient `num / den` of two integers of any size.
    ///
    /// The integer part is divided first and only the remainder goes through
    /// [`fast_div`](Self::fast_div). Panics if `den` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::fixed::Fix64;
    ///
    /// let q = Fix64::fair_div(3_000_000_000_000, 4_000_000_000);
    /// assert_eq!(750.0, q.to_f64());
    /// ```
    #[inline]
    pub const fn fair_div(num: i64, den: i64) -> Self {
        let quot = num.wrapping_div(den);
        let rem = num.wrapping_rem(den);
        Self((quot << FRAC_BITS).wrapping_add(Self::fast_div(rem, den).0))
    }
}

/// Splits `a * b >> 32` into the part built from the high words and the
/// unsigned product of the low words, which still needs its shift.
#[inline]
const fn split_mul(a: i64, b: i64) -> (i64, u64) {
    let (a_hi, a_lo) = (a >> FRAC_BITS, a & LOW_MASK);
    let (b_hi, b_lo) = (b >> FRAC_BITS, b & LOW_MASK);
    let high = (a_hi.wrapping_mul(b_hi) << FRAC_BITS)
        .wrapping_add(a_hi.wrapping_mul(b_lo))
        .wrapping_add(a_lo.wrapping_mul(b_hi));
    (high, a_lo as u64 * b_lo as u64)
}

impl Add for Fix64 {
    type Output = Fix64;
    #[inline]
    fn add(self, rhs: Fix64) -> Fix64 {
        Fix64(self.0.wrapping_add(rhs.0))
    }
}
impl Sub for Fix64 {
    type Output = Fix64;
    #[inline]
    fn sub(self, rhs: Fix64) -> Fix64 {
        Fix64(self.0.wrapping_sub(rhs.0))
    }
}
impl Neg for Fix64 {
    type Output = Fix64;
    #[inline]
    fn neg(self) -> Fix64 {
        Fix64(self.0.wrapping_neg())
    }
}
impl Mul<i64> for Fix64 {
    type Output = Fix64;
    #[inline]
    fn mul(self, rhs: i64) -> Fix64 {
        Fix64(self.0.wrapping_mul(rhs))
    }
}
impl Mul<Fix64> for i64 {
    type Output = Fix64;
    #[inline]
    fn mul(self, rhs: Fix64) -> Fix64 {
        rhs * self
    }
}
impl Shr<u32> for Fix64 {
    type Output = Fix64;
    #[inline]
    fn shr(self, rhs: u32) -> Fix64 {
        Fix64(self.0 >> rhs)
    }
}
impl Shl<u32> for Fix64 {
    type Output = Fix64;
    #[inline]
    fn shl(self, rhs: u32) -> Fix64 {
        Fix64(self.0 << rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXS: [i64; 4] = [0x1a42, -0x2_18c3_e2f7, 0x7_b1d2_c46a, -0x5314_ac37];
    const RHSS: [i64; 4] = [0x1_82ac_2316, 0xd_4f8c_7125, -0x281_a93e, -0xb_1847_1b64];

    fn fix(bits: i64) -> Fix64 {
        Fix64::from_bits(bits)
    }

    #[test]
    fn from_f64() {
        // 8 extra fractional bits below the last fixed-point bit
        let scale = (1_u64 << 40) as f64;
        for (raw, expected) in [
            (0x1a_4260_i64, FIXS[0]),
            (-0x2_18c3_e2f7_80, FIXS[1]),
            (0x7_b1d2_c469_b0, FIXS[2]),
            (-0x53_14ac_3700, FIXS[3]),
        ] {
            assert_eq!(fix(expected), Fix64::from_f64(raw as f64 / scale));
        }
    }

    #[test]
    fn to_f64() {
        assert_eq!(1.5, fix(3 << 31).to_f64());
        let v = fix(FIXS[1]).to_f64();
        assert!((v - -2.096_738_992_026_075_7).abs() < 1e-9, "{v}");
    }

    #[test]
    fn to_int() {
        let fast: Vec<_> = FIXS.iter().map(|&v| fix(v).fast_int()).collect();
        let safe: Vec<_> = FIXS.iter().map(|&v| fix(v).safe_int()).collect();
        assert_eq!(vec![0, -3, 7, -1], fast);
        assert_eq!(vec![0, -2, 8, 0], safe);
        assert_eq!(-7, Fix64::from_int(-7).fast_int());
    }

    #[test]
    fn multiply() {
        let expected: [[i64; 4]; 4] = [
            [0x27a9, 0x1742_8e0e, -0x1349_5700, -0x663b_95df],
            [0x27a9, 0x1742_8e0f, -0x1349_56ff, -0x663b_95de],
            [0x27a9, -0x1b_e8bd_71f2, -0x1349_5700, 0x3_99c4_6a21],
            [0x27a9, -0x1b_e8bd_71f1, -0x1349_56ff, 0x3_99c4_6a22],
        ];
        for i in 0..4 {
            let (a, b) = (fix(FIXS[i]), fix(RHSS[i]));
            assert_eq!(fix(expected[0][i]), a.fast_mul(b), "fast_mul #{i}");
            assert_eq!(fix(expected[1][i]), a.tiny_mul(b), "tiny_mul #{i}");
            assert_eq!(fix(expected[2][i]), a.fair_mul(b), "fair_mul #{i}");
            assert_eq!(fix(expected[3][i]), a.safe_mul(b), "safe_mul #{i}");
        }
    }

    #[test]
    fn rounding_differs_by_one_unit() {
        for a in FIXS {
            for b in RHSS {
                let (a, b) = (fix(a), fix(b));
                let diff = a.safe_mul(b).to_bits() - a.fair_mul(b).to_bits();
                assert!(diff == 0 || diff == 1);
                let diff = a.tiny_mul(b).to_bits() - a.fast_mul(b).to_bits();
                assert!(diff == 0 || diff == 1);
            }
        }
    }

    #[test]
    fn divide() {
        let nums = [
            0x1ac3_479d_i64,
            -0x2ab2_6883_ac4f_50c4,
            0x1147_cfe1_0366_987b,
            -0x1de_74b8_2a70,
        ];
        let dens = [0x081c_4ab7_i64, 0x726e_fd39, -0x46b7_ecfd, -0x598a_0321];
        let fast = [0x3_4cbd_8ae5_i64, 0xbb39_4b0e, -0xc4f_8bc7, 0x1_4db5_f546];
        let fair = [
            0x3_4cbd_8ae5_i64,
            -0x5f84_7bbf_8def_1477,
            -0x3e8e_25df_5ca8_4cd5,
            0x557_f252_e4e4,
        ];
        for i in 0..4 {
            assert_eq!(fix(fast[i]), Fix64::fast_div(nums[i], dens[i]), "fast_div #{i}");
            assert_eq!(fix(fair[i]), Fix64::fair_div(nums[i], dens[i]), "fair_div #{i}");
        }
    }

    #[test]
    fn fair_div_recombines() {
        let (num, den) = (7_000_000_000_123_i64, 86_400_i64);
        let q = Fix64::fair_div(num, den);
        assert_eq!(num / den, q.fast_int());
        let frac = (num % den) as f64 / den as f64;
        let low = (q.to_bits() & 0xffff_ffff) as f64 / (1_u64 << 32) as f64;
        assert!((low - frac).abs() < 1e-9);
    }

    #[test]
    fn wrapping_ops() {
        let max = fix(i64::MAX);
        assert_eq!(fix(i64::MIN), max + fix(1));
        assert_eq!(max, fix(i64::MIN) - fix(1));
        assert_eq!(fix(-240 << 32), Fix64::from_int(-1) * 240);
        assert_eq!(fix(3 << 30), fix(3 << 32) >> 2);
    }
}
