//! Text input: `FromStr` (decimal or `0x` hex) and `from_str_radix`.
//!
//! Digits accumulate as `acc * radix + digit`, wrapping on overflow like the
//! arithmetic does. A leading `-` is accepted by signed types only; for
//! unsigned types it is reported as an invalid digit. Input with no digits
//! at all (`""`, `"-"`, `"0x"`) is `WideIntError::Empty`, never zero.

use std::str::FromStr;

use crate::arith::mul_limb;
use crate::error::WideIntError;
use crate::int::WideInt;
use crate::limbs;
use crate::sign::Signedness;

/// Accumulate `digits` in `radix`. `offset` is the byte position of `digits`
/// inside the caller's string, for error reporting.
fn accumulate<const N: usize>(
    digits: &str,
    radix: u32,
    offset: usize,
) -> Result<[u64; N], WideIntError> {
    if digits.is_empty() {
        return Err(WideIntError::Empty);
    }
    let mut acc = [0u64; N];
    for (i, ch) in digits.char_indices() {
        let digit = ch.to_digit(radix).ok_or(WideIntError::InvalidDigit {
            ch,
            index: offset + i,
        })?;
        acc = mul_limb(&acc, radix as u64);
        limbs::plus(&mut acc, &[digit as u64]);
    }
    Ok(acc)
}

impl<const N: usize, S: Signedness> WideInt<N, S> {
    /// Split off a leading `-` when the type is signed.
    fn split_sign(src: &str) -> (bool, &str, usize) {
        match src.strip_prefix('-') {
            Some(rest) if S::SIGNED => (true, rest, 1),
            _ => (false, src, 0),
        }
    }

    fn finish(negative: bool, magnitude: [u64; N]) -> Self {
        let value = Self::from_le_limbs(magnitude);
        if negative {
            value.wrapping_neg()
        } else {
            value
        }
    }

    /// Parse digits in `radix` (2..=36), with an optional leading `-` for
    /// signed types. No prefix is recognised.
    ///
    /// ```
    /// use wide::{Int256, UInt128};
    ///
    /// assert_eq!(UInt128::from_str_radix("ff", 16).unwrap(), UInt128::from(255u8));
    /// assert_eq!(Int256::from_str_radix("-101", 2).unwrap(), Int256::from(-5i8));
    /// ```
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, WideIntError> {
        if !(2..=36).contains(&radix) {
            return Err(WideIntError::InvalidRadix(radix));
        }
        let (negative, digits, offset) = Self::split_sign(src);
        Ok(Self::finish(negative, accumulate(digits, radix, offset)?))
    }
}

/// Decimal, or hexadecimal after a `0x` / `0X` prefix.
impl<const N: usize, S: Signedness> FromStr for WideInt<N, S> {
    type Err = WideIntError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let (negative, body, offset) = Self::split_sign(src);
        let magnitude = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
            Some(hex) => accumulate(hex, 16, offset + 2)?,
            None => accumulate(body, 10, offset)?,
        };
        Ok(Self::finish(negative, magnitude))
    }
}
