//! Bitwise operations, shifts across limb boundaries and bit queries.

use crate::int::WideInt;
use crate::limbs::{self, any, LIMB_BITS};
use crate::sign::Signedness;

// ============================================================================
// Limb-array kernels
// ============================================================================

#[inline]
pub(crate) fn not<const N: usize>(a: &[u64; N]) -> [u64; N] {
    let mut out = *a;
    for limb in out.iter_mut() {
        *limb = !*limb;
    }
    out
}

/// `a << n` on a logical little-endian array. `n >= 64 N` gives zero.
pub(crate) fn shl<const N: usize>(a: &[u64; N], n: u32) -> [u64; N] {
    let mut out = [0u64; N];
    if n as usize >= N * LIMB_BITS as usize {
        return out;
    }
    let limb_shift = (n / LIMB_BITS) as usize;
    let bit_shift = n % LIMB_BITS;

    for i in limb_shift..N {
        let src = i - limb_shift;
        out[i] = a[src] << bit_shift;
        if bit_shift != 0 && src > 0 {
            out[i] |= a[src - 1] >> (LIMB_BITS - bit_shift);
        }
    }
    out
}

/// `a >> n` on a logical little-endian array. Vacated high bits are filled
/// with ones when `fill_ones` is set (arithmetic shift of a negative value),
/// zeros otherwise.
pub(crate) fn shr<const N: usize>(a: &[u64; N], n: u32, fill_ones: bool) -> [u64; N] {
    let fill = if fill_ones { u64::MAX } else { 0 };
    let mut out = [fill; N];
    if n as usize >= N * LIMB_BITS as usize {
        return out;
    }
    let limb_shift = (n / LIMB_BITS) as usize;
    let bit_shift = n % LIMB_BITS;

    for i in 0..N - limb_shift {
        let src = i + limb_shift;
        out[i] = a[src] >> bit_shift;
        if bit_shift != 0 {
            let next = if src + 1 < N { a[src + 1] } else { fill };
            out[i] |= next << (LIMB_BITS - bit_shift);
        }
    }
    out
}

// ============================================================================
// WideInt bitwise surface
// ============================================================================

impl<const N: usize, S: Signedness> WideInt<N, S> {
    #[inline]
    fn zip_limbs(mut self, rhs: Self, f: impl Fn(u64, u64) -> u64) -> Self {
        let rhs = rhs.raw();
        for (i, limb) in self.raw_mut().iter_mut().enumerate() {
            *limb = f(*limb, rhs[any(i)]);
        }
        self
    }

    #[inline]
    pub fn bit_and(self, rhs: Self) -> Self {
        self.zip_limbs(rhs, |a, b| a & b)
    }

    #[inline]
    pub fn bit_or(self, rhs: Self) -> Self {
        self.zip_limbs(rhs, |a, b| a | b)
    }

    #[inline]
    pub fn bit_xor(self, rhs: Self) -> Self {
        self.zip_limbs(rhs, |a, b| a ^ b)
    }

    #[inline]
    pub fn bit_not(mut self) -> Self {
        for limb in self.raw_mut().iter_mut() {
            *limb = !*limb;
        }
        self
    }

    /// `self << n`. Shifting by `BITS` or more yields zero.
    #[inline]
    pub fn shift_left(self, n: u32) -> Self {
        if n == 0 {
            return self;
        }
        Self::from_le_limbs(shl(&self.to_le_limbs(), n))
    }

    /// `self >> n`: arithmetic for negative signed values, logical otherwise.
    /// Shifting by `BITS` or more yields `0`, or `-1` for negative values.
    #[inline]
    pub fn shift_right(self, n: u32) -> Self {
        if n == 0 {
            return self;
        }
        Self::from_le_limbs(shr(&self.to_le_limbs(), n, self.is_negative()))
    }

    pub fn leading_zeros(self) -> u32 {
        limbs::leading_zeros(&self.to_le_limbs())
    }

    pub fn trailing_zeros(self) -> u32 {
        limbs::trailing_zeros(&self.to_le_limbs())
    }

    pub fn count_ones(self) -> u32 {
        self.raw().iter().map(|l| l.count_ones()).sum()
    }

    pub fn count_zeros(self) -> u32 {
        Self::BITS - self.count_ones()
    }

    /// Significant bit length of the raw bit pattern: `BITS - leading_zeros`.
    pub fn bits(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Test bit `idx` (0 = least significant). Out-of-range indices read as
    /// the sign fill.
    pub fn bit(self, idx: u32) -> bool {
        if idx >= Self::BITS {
            return self.is_negative();
        }
        (self.limb((idx / LIMB_BITS) as usize) >> (idx % LIMB_BITS)) & 1 == 1
    }

    /// Exactly one bit set and the value is positive.
    pub fn is_power_of_two(self) -> bool {
        !self.is_negative() && self.count_ones() == 1
    }
}
