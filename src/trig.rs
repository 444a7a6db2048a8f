//! Quarter-wave sine and cosine on [`Fix64`].
//!
//! Angles are measured in quarter turns: `1.0` is a right angle and `4.0` a
//! full turn. The input is reduced to an octant and a remainder in `[0, S)`,
//! where `S` is half a quarter turn, and evaluated with one of two 7-term
//! polynomials. No floating-point library call is involved, so results are
//! identical on every platform.

use crate::fixed::Fix64;

/// One eighth of a turn.
const S: i64 = 1 << 31;

/// `cos(πx/2)` as a polynomial in `x²`, constant term first.
const COS_COEFS: [i64; 7] = [
    0x1_0000_0000, // 1
    -5_298_703_516,
    1_089_502_240,
    -89_607_968,
    3_948_193,
    -108_242,
    2_023,
];

/// `sin(πx/2) / x − 1` as a polynomial in `x²`, constant term first.
const SIN_COEFS: [i64; 7] = [
    2_451_551_556, // π/2 − 1
    -2_774_394_673,
    342_277_223,
    -20_107_981,
    689_090,
    -15_457,
    244,
];

#[inline]
fn horner(coefs: &[i64; 7], x2: Fix64) -> Fix64 {
    coefs[..6]
        .iter()
        .rev()
        .fold(Fix64::from_bits(coefs[6]), |acc, &c| {
            acc.fast_mul(x2) + Fix64::from_bits(c)
        })
}

/// Cosine for `x` in `[0, S]`.
#[inline]
fn cos_octant(x: i64) -> Fix64 {
    let x = Fix64::from_bits(x);
    horner(&COS_COEFS, x.fast_mul(x))
}

/// Sine for `x` in `[0, S]`.
#[inline]
fn sin_octant(x: i64) -> Fix64 {
    let x = Fix64::from_bits(x);
    x + x.fast_mul(horner(&SIN_COEFS, x.fast_mul(x)))
}

/// Splits `x` into its octant (`0..8`) and the remainder within it.
#[inline]
fn reduce(x: Fix64) -> (i64, i64) {
    let bits = x.to_bits();
    ((bits >> 31) & 7, bits & (S - 1))
}

/// Cosine of `x` quarter turns.
///
/// # Example
///
/// ```
/// use nongli::fixed::Fix64;
/// use nongli::trig::cosq;
///
/// assert_eq!(Fix64::ONE, cosq(Fix64::ZERO));
/// assert!(cosq(Fix64::from_int(2)).to_f64() < -0.999_999);
/// ```
pub fn cosq(x: Fix64) -> Fix64 {
    let (octant, r) = reduce(x);
    match octant {
        0 => cos_octant(r),
        1 => sin_octant(S - r),
        2 => -sin_octant(r),
        3 => -cos_octant(S - r),
        4 => -cos_octant(r),
        5 => -sin_octant(S - r),
        6 => sin_octant(r),
        _ => cos_octant(S - r),
    }
}

/// Sine of `x` quarter turns.
///
/// # Example
///
/// ```
/// use nongli::fixed::Fix64;
/// use nongli::trig::sinq;
///
/// assert_eq!(Fix64::ZERO, sinq(Fix64::ZERO));
/// assert!(sinq(Fix64::ONE).to_f64() > 0.999_999);
/// ```
pub fn sinq(x: Fix64) -> Fix64 {
    let (octant, r) = reduce(x);
    match octant {
        0 => sin_octant(r),
        1 => cos_octant(S - r),
        2 => cos_octant(r),
        3 => sin_octant(S - r),
        4 => -sin_octant(r),
        5 => -cos_octant(S - r),
        6 => -cos_octant(r),
        _ => -sin_octant(S - r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: i64, actual: Fix64, tol: i64) {
        let diff = actual.to_bits().wrapping_sub(expected);
        assert!(
            (-tol..=tol).contains(&diff),
            "expected {expected:#x}, got {:#x}",
            actual.to_bits()
        );
    }

    #[test]
    fn known_values() {
        for (x, cos, sin) in [
            (0, 0x1_0000_0000, 0),
            (0x1_bb2c_a134, -0xe982_558a, 0x68ed_1699),
            (0x4_6dd9_81a1, 0xc804_27e1, 0x9fc7_90f2),
            (0xe_b0ff_6f30, -0x774b_0596, -0xe281_a60a),
        ] {
            let x = Fix64::from_bits(x);
            assert_close(cos, cosq(x), 2);
            assert_close(sin, sinq(x), 2);
        }
    }

    #[test]
    fn matches_float_reference() {
        let step = 1_i64 << 25;
        for i in -512..512 {
            let x = Fix64::from_bits(i * step + 12_345);
            let rad = x.to_f64() * std::f64::consts::FRAC_PI_2;
            let scale = (1_u64 << 32) as f64;
            assert_close((rad.cos() * scale).round() as i64, cosq(x), 3);
            assert_close((rad.sin() * scale).round() as i64, sinq(x), 3);
        }
    }

    #[test]
    fn octant_boundaries_agree() {
        let half = Fix64::from_bits(S);
        let diff = cosq(half).to_bits() - sinq(half).to_bits();
        assert!(diff.abs() <= 2, "{diff}");
        assert_eq!(cosq(Fix64::ONE), sinq(Fix64::ZERO));
        assert_eq!(cosq(Fix64::ZERO), sinq(Fix64::ONE));
    }

    #[test]
    fn full_turn_periodic() {
        let x = Fix64::from_bits(0x6789_abcd);
        let turn = Fix64::from_int(4);
        assert_eq!(sinq(x), sinq(x + turn));
        assert_eq!(cosq(x), cosq(x - turn));
    }
}
