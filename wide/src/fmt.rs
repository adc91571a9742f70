//! Text output: decimal `Display`, `Debug`, and two's-complement hex.

use std::fmt::{self, Write as _};

use crate::div::div_rem_limb;
use crate::int::WideInt;
use crate::limbs;
use crate::sign::Signedness;

/// Largest power of ten that fits in a limb.
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

/// Decimal digits of an unsigned magnitude, no sign and no leading zeros.
fn decimal_digits<const N: usize>(mut limbs: [u64; N]) -> String {
    let mut chunks = Vec::with_capacity(N * 64 / 63 + 1);
    while !limbs::is_zero(&limbs) {
        let (q, r) = div_rem_limb(&limbs, DECIMAL_CHUNK);
        chunks.push(r);
        limbs = q;
    }
    let Some((first, rest)) = chunks.split_last() else {
        return String::from("0");
    };
    let mut out = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
    out.push_str(&first.to_string());
    for chunk in rest.iter().rev() {
        let _ = write!(out, "{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS);
    }
    out
}

fn hex_digits<const N: usize>(limbs: &[u64; N], upper: bool) -> String {
    let top = limbs::significant_limbs(limbs);
    if top == 0 {
        return String::from("0");
    }
    let mut out = String::with_capacity(top * 16);
    for (i, limb) in limbs[..top].iter().rev().enumerate() {
        let _ = match (i == 0, upper) {
            (true, false) => write!(out, "{limb:x}"),
            (true, true) => write!(out, "{limb:X}"),
            (false, false) => write!(out, "{limb:016x}"),
            (false, true) => write!(out, "{limb:016X}"),
        };
    }
    out
}

impl<const N: usize, S: Signedness> WideInt<N, S> {
    /// Digits of the value in `radix` (2..=36), lowercase, with a leading `-`
    /// for negative values.
    ///
    /// # Panics
    /// If `radix` is outside 2..=36.
    pub fn to_str_radix(self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix {radix} is not in 2..=36");
        if radix == 10 {
            return self.to_string();
        }
        let mut magnitude = self.magnitude();
        let mut digits = Vec::new();
        while !limbs::is_zero(&magnitude) {
            let (q, r) = div_rem_limb(&magnitude, radix as u64);
            digits.push(std::char::from_digit(r as u32, radix).unwrap_or('?'));
            magnitude = q;
        }
        if digits.is_empty() {
            digits.push('0');
        }
        if self.is_negative() {
            digits.push('-');
        }
        digits.iter().rev().collect()
    }
}

impl<const N: usize, S: Signedness> fmt::Display for WideInt<N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &decimal_digits(self.magnitude()))
    }
}

impl<const N: usize, S: Signedness> fmt::Debug for WideInt<N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}({})", S::NAME, Self::BITS, self)
    }
}

impl<const N: usize, S: Signedness> fmt::LowerHex for WideInt<N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &hex_digits(&self.to_le_limbs(), false))
    }
}

impl<const N: usize, S: Signedness> fmt::UpperHex for WideInt<N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &hex_digits(&self.to_le_limbs(), true))
    }
}
