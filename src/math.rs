//! Floor division kernel.
//!
//! Calendar arithmetic regularly divides negative quantities (days before
//! the epoch, seconds west of UTC), where the native truncating `/` and `%`
//! give the wrong day. [`pydiv`] and [`pymod`] round the quotient toward
//! negative infinity instead, so the remainder always takes the sign of the
//! divisor.

/// A quotient together with its remainder.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct QuotRem<T> {
    pub quot: T,
    pub rem: T,
}

/// Signed integers supporting both flavours of paired division.
///
/// Both methods panic when `d` is zero, like the native operators.
pub trait DivMod: Copy {
    /// Floor division: `quot` rounds toward negative infinity.
    fn pydivmod(self, d: Self) -> QuotRem<Self>;
    /// Truncating division, for operands known to be non-negative.
    fn cdivmod(self, d: Self) -> QuotRem<Self>;
}

macro_rules! impl_div_mod {
    ($($t:ty),*) => {
        $(
            impl DivMod for $t {
                #[inline]
                fn pydivmod(self, d: Self) -> QuotRem<Self> {
                    let (quot, rem) = (self / d, self % d);
                    if rem != 0 && (rem < 0) != (d < 0) {
                        QuotRem { quot: quot - 1, rem: rem + d }
                    } else {
                        QuotRem { quot, rem }
                    }
                }
                #[inline]
                fn cdivmod(self, d: Self) -> QuotRem<Self> {
                    QuotRem { quot: self / d, rem: self % d }
                }
            }
        )*
    };
}

impl_div_mod!(i8, i16, i32, i64);

/// Floor quotient and remainder of `n / d`.
#[inline]
pub fn pydivmod<T: DivMod>(n: T, d: T) -> QuotRem<T> {
    n.pydivmod(d)
}

/// Floor quotient of `n / d`.
///
/// # Example
///
/// ```
/// use nongli::math::pydiv;
///
/// assert_eq!(-1, pydiv(-1, 86400));
/// assert_eq!(-2, pydiv(7, -4));
/// ```
#[inline]
pub fn pydiv<T: DivMod>(n: T, d: T) -> T {
    n.pydivmod(d).quot
}

/// Remainder of the floor division `n / d`; zero or of the sign of `d`.
///
/// # Example
///
/// ```
/// use nongli::math::pymod;
///
/// assert_eq!(86399, pymod(-1, 86400));
/// assert_eq!(-1, pymod(7, -4));
/// ```
#[inline]
pub fn pymod<T: DivMod>(n: T, d: T) -> T {
    n.pydivmod(d).rem
}

/// Native truncating quotient and remainder of `n / d`.
#[inline]
pub fn cdivmod<T: DivMod>(n: T, d: T) -> QuotRem<T> {
    n.cdivmod(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_division() {
        for (n, d, q, r) in [
            (7, 2, 3, 1),
            (-7, 2, -4, 1),
            (7, -2, -4, -1),
            (-7, -2, 3, -1),
            (6, 3, 2, 0),
            (-6, 3, -2, 0),
            (0, 5, 0, 0),
        ] {
            assert_eq!(QuotRem { quot: q, rem: r }, pydivmod(n, d), "{n} / {d}");
        }
    }

    #[test]
    fn truncating_division() {
        assert_eq!(QuotRem { quot: -3, rem: -1 }, cdivmod(-7, 2));
        assert_eq!(QuotRem { quot: 3, rem: 100 }, cdivmod(4_483_i64, 1_461));
    }

    #[test]
    fn division_identity() {
        for n in -200_i64..=200 {
            for d in [-61_i64, -24, -7, -1, 1, 3, 12, 60] {
                let QuotRem { quot, rem } = pydivmod(n, d);
                assert_eq!(n, quot * d + rem);
                assert!(rem == 0 || (rem < 0) == (d < 0), "{n} mod {d} = {rem}");
                assert!(rem.abs() < d.abs());
            }
        }
    }

    #[test]
    fn narrow_types() {
        assert_eq!(7_i8, pymod(-3_i8, 10));
        assert_eq!(-1_i16, pydiv(-1_i16, 400));
        assert_eq!(59_i32, pymod(-1_i32, 60));
    }
}
