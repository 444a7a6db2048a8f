//! Prediction plus residual correction.
//!
//! Irregular astronomical sequences (month starts, solar-term instants) are
//! stored as a cheap fitted prediction plus a small unsigned correction per
//! key, bit-packed into static byte pages. The reverse lookup evaluates a
//! second prediction, fitted so that it is either exact or one too high,
//! and steps back once if the forward value overshoots.

use crate::error::{Domain, Error};

/// Bytes per page of a residual table: 315 lines of 12 bytes.
pub const PAGE_SIZE: usize = 12 * 315;

/// A bit-packed table of unsigned residuals, least significant bit first.
///
/// Entry `key - min` occupies `width` bits. Supported widths are 1, 2, 4
/// and 12, so an entry never straddles more than two bytes or a page.
#[derive(Debug)]
pub(crate) struct Packed {
    pub(crate) domain: Domain,
    pub(crate) min: i32,
    pub(crate) len: u32,
    pub(crate) width: u32,
    pub(crate) pages: &'static [&'static [u8]],
}

impl Packed {
    /// Highest key with an entry.
    pub(crate) fn max(&self) -> i32 {
        self.min + self.len as i32 - 1
    }

    /// Reads the entry for `key`.
    pub(crate) fn get(&self, key: i32) -> Result<u32, Error> {
        let idx = key as i64 - self.min as i64;
        if !(0..self.len as i64).contains(&idx) {
            return Err(Error::out_of_range(
                self.domain,
                key as i64,
                self.min as i64,
                self.max() as i64,
            ));
        }
        let width = self.width as usize;
        let per_page = PAGE_SIZE * 8 / width;
        let page = self.pages[idx as usize / per_page];
        let bit = idx as usize % per_page * width;
        let lo = page[bit / 8] as u32;
        let hi = page.get(bit / 8 + 1).copied().unwrap_or(0) as u32;
        Ok(((hi << 8 | lo) >> (bit % 8)) & ((1 << width) - 1))
    }
}

/// `slope·x + intercept + ((frac_slope·x + frac_intercept) >> bits)`
#[derive(Debug, Copy, Clone)]
pub(crate) struct Linear {
    pub(crate) slope: i64,
    pub(crate) intercept: i64,
    pub(crate) frac_slope: i64,
    pub(crate) frac_intercept: i64,
    pub(crate) bits: u32,
}

impl Linear {
    #[inline]
    pub(crate) fn predict(&self, x: i64) -> i64 {
        self.slope * x + self.intercept + ((self.frac_slope * x + self.frac_intercept) >> self.bits)
    }
}

/// `intercept + ((slope·x + offset) >> bits)`, for slopes below one.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Shifted {
    pub(crate) intercept: i64,
    pub(crate) slope: i64,
    pub(crate) offset: i64,
    pub(crate) bits: u32,
}

impl Shifted {
    #[inline]
    pub(crate) fn predict(&self, x: i64) -> i64 {
        self.intercept + ((self.slope * x + self.offset) >> self.bits)
    }
}

/// Forward value for `key`: the prediction corrected by its residual.
#[inline]
pub(crate) fn correct(pred: &Linear, table: &Packed, key: i32) -> Result<i64, Error> {
    let res = table.get(key)?;
    Ok(pred.predict(key as i64) + res as i64)
}

/// The key whose forward value is the last one not above `value`.
///
/// `guess` must be that key or the one after it.
#[inline]
pub(crate) fn invert<F>(guess: i64, value: i64, forward: F) -> Result<i32, Error>
where
    F: FnOnce(i32) -> Result<i64, Error>,
{
    let guess = guess as i32;
    Ok(guess - (value < forward(guess)?) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leak(bytes: Vec<u8>) -> &'static [u8] {
        Box::leak(bytes.into_boxed_slice())
    }

    fn pack(values: &[u32], width: u32) -> &'static [&'static [u8]] {
        let mut bytes = vec![0_u8; (values.len() * width as usize).div_ceil(8)];
        for (i, &v) in values.iter().enumerate() {
            for k in 0..width as usize {
                if v >> k & 1 == 1 {
                    let bit = i * width as usize + k;
                    bytes[bit / 8] |= 1 << (bit % 8);
                }
            }
        }
        let pages: Vec<&'static [u8]> = bytes.chunks(PAGE_SIZE).map(|c| leak(c.to_vec())).collect();
        Box::leak(pages.into_boxed_slice())
    }

    #[test]
    fn decode_widths() {
        for width in [1, 2, 4, 12] {
            let values: Vec<u32> = (0..6000_u32)
                .map(|i| i.wrapping_mul(2_654_435_761) >> (32 - width)).collect();
            let table = Packed {
                domain: Domain::Cjie,
                min: -100,
                len: values.len() as u32,
                width,
                pages: pack(&values, width),
            };
            for (i, &v) in values.iter().enumerate() {
                assert_eq!(Ok(v), table.get(i as i32 - 100), "width {width}, entry {i}");
            }
        }
    }

    #[test]
    fn spans_pages() {
        // 2520 entries of 12 bits fill one page exactly
        let values: Vec<u32> = (0..2600).map(|i| i % 4096).collect();
        let pages = pack(&values, 12);
        assert_eq!(2, pages.len());
        assert_eq!(PAGE_SIZE, pages[0].len());
        let table = Packed {
            domain: Domain::Cjie,
            min: 0,
            len: 2600,
            width: 12,
            pages,
        };
        assert_eq!(Ok(2519), table.get(2519));
        assert_eq!(Ok(2520), table.get(2520));
        assert_eq!(Ok(2599), table.get(2599));
    }

    #[test]
    fn rejects_keys_outside() {
        static BYTES: [u8; 2] = [0xff, 0xf0];
        static PAGES: [&[u8]; 1] = [&BYTES];
        let table = Packed {
            domain: Domain::Nian,
            min: 1900,
            len: 3,
            width: 4,
            pages: &PAGES,
        };
        assert_eq!(1902, table.max());
        assert_eq!(Ok(15), table.get(1900));
        assert_eq!(Ok(0), table.get(1902));
        assert_eq!(
            Err(Error::OutOfRange {
                domain: Domain::Nian,
                key: 1903,
                min: 1900,
                max: 1902
            }),
            table.get(1903)
        );
        assert!(table.get(1899).is_err());
    }

    #[test]
    fn predictions() {
        let lin = Linear {
            slope: 29,
            intercept: 35,
            frac_slope: 543,
            frac_intercept: 115,
            bits: 10,
        };
        // 29.53 days per month on average
        assert_eq!(35, lin.predict(0));
        assert_eq!(29 * 100 + 35 + ((543 * 100 + 115) >> 10), lin.predict(100));
        assert_eq!(-29 * 7 + 35 + ((543 * -7 + 115) >> 10), lin.predict(-7));

        let sh = Shifted {
            intercept: 1970,
            slope: 331,
            offset: 2062,
            bits: 12,
        };
        assert_eq!(1970, sh.predict(0));
        assert_eq!(1970 + ((331 * -13 + 2062) >> 12), sh.predict(-13));
    }

    #[test]
    fn invert_steps_back() {
        let starts = [0_i64, 30, 59, 89];
        let forward = |k: i32| Ok(starts[k as usize]);
        assert_eq!(Ok(1), invert(1, 45, forward));
        assert_eq!(Ok(1), invert(2, 45, forward));
        assert_eq!(Ok(2), invert(2, 59, forward));
    }
}
