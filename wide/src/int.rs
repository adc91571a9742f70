//! The fixed-width integer type, its constants and raw-limb accessors.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::limbs::{big, little, LIMB_BITS};
use crate::sign::{Signed, Signedness, Unsigned};

/// Fixed-width two's-complement integer of `LIMBS * 64` bits.
///
/// Limbs are kept in native order (see [`little`] / [`big`]), so the memory
/// image matches a machine integer of the same width. All arithmetic wraps
/// modulo `2^BITS` for both signednesses.
///
/// `LIMBS` should be one of the standard widths behind the aliases below (2,
/// 4, 8 or 16). Any other width still gets same-type operators and operators
/// against natives up to 64 bits, but has no [`CommonType`] entry against
/// `u128`/`i128` or other widths, so those mixed operators do not exist.
///
/// [`CommonType`]: crate::CommonType
///
/// ```
/// use wide::{Int256, UInt128};
///
/// let x = UInt128::ONE << 100u32;
/// assert_eq!(x.to_string(), "1267650600228229401496703205376");
///
/// let y = Int256::from(-5i32) + 2u8;
/// assert_eq!(y.to_string(), "-3");
/// ```
#[repr(transparent)]
pub struct WideInt<const LIMBS: usize, S: Signedness> {
    items: [u64; LIMBS],
    sign: PhantomData<S>,
}

pub type UInt128 = WideInt<2, Unsigned>;
pub type Int128 = WideInt<2, Signed>;
pub type UInt256 = WideInt<4, Unsigned>;
pub type Int256 = WideInt<4, Signed>;
pub type UInt512 = WideInt<8, Unsigned>;
pub type Int512 = WideInt<8, Signed>;
pub type UInt1024 = WideInt<16, Unsigned>;
pub type Int1024 = WideInt<16, Signed>;

// ============================================================================
// Constants
// ============================================================================

impl<const N: usize, S: Signedness> WideInt<N, S> {
    /// Number of limbs.
    pub const LIMBS: usize = N;
    /// Width in bits.
    pub const BITS: u32 = N as u32 * LIMB_BITS;
    pub const IS_SIGNED: bool = S::SIGNED;
    /// Value bits, excluding the sign bit.
    pub const DIGITS: u32 = if S::SIGNED { Self::BITS - 1 } else { Self::BITS };
    /// Decimal digits representable without change (`DIGITS * log10(2)`).
    pub const DIGITS10: u32 = (Self::DIGITS as u64 * 30_103 / 100_000) as u32;
    /// Arithmetic wraps modulo `2^BITS` for both signednesses.
    pub const IS_MODULO: bool = true;

    pub const ZERO: Self = Self::from_raw([0; N]);
    pub const ONE: Self = Self::from_u64(1);
    pub const MIN: Self = Self::min_value();
    pub const MAX: Self = Self::max_value();

    const fn min_value() -> Self {
        let mut items = [0u64; N];
        if S::SIGNED {
            items[big::<N>(0)] = 1 << 63;
        }
        Self::from_raw(items)
    }

    const fn max_value() -> Self {
        let mut items = [u64::MAX; N];
        if S::SIGNED {
            items[big::<N>(0)] = u64::MAX >> 1;
        }
        Self::from_raw(items)
    }
}

// ============================================================================
// Construction & raw access
// ============================================================================

impl<const N: usize, S: Signedness> WideInt<N, S> {
    /// Wrap physical (native-order) limbs.
    #[inline(always)]
    pub(crate) const fn from_raw(items: [u64; N]) -> Self {
        Self {
            items,
            sign: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) const fn raw(&self) -> &[u64; N] {
        &self.items
    }

    #[inline(always)]
    pub(crate) fn raw_mut(&mut self) -> &mut [u64; N] {
        &mut self.items
    }

    /// Build from limbs in little-endian order (`limbs[0]` least significant).
    pub const fn from_le_limbs(limbs: [u64; N]) -> Self {
        let mut items = [0u64; N];
        let mut i = 0;
        while i < N {
            items[little::<N>(i)] = limbs[i];
            i += 1;
        }
        Self::from_raw(items)
    }

    /// Limbs in little-endian order (`[0]` least significant).
    pub const fn to_le_limbs(self) -> [u64; N] {
        let mut out = [0u64; N];
        let mut i = 0;
        while i < N {
            out[i] = self.items[little::<N>(i)];
            i += 1;
        }
        out
    }

    /// Build from a little-endian limb list of any length: shorter lists are
    /// zero-extended, longer ones truncated.
    pub fn from_limbs_le(limbs: &[u64]) -> Self {
        let mut out = [0u64; N];
        for (slot, &limb) in out.iter_mut().zip(limbs) {
            *slot = limb;
        }
        Self::from_le_limbs(out)
    }

    /// The `idx`-th least significant limb.
    ///
    /// # Panics
    /// If `idx >= LIMBS`.
    #[inline]
    pub const fn limb(&self, idx: usize) -> u64 {
        self.items[little::<N>(idx)]
    }

    pub const fn from_u64(v: u64) -> Self {
        Self::from_u128(v as u128)
    }

    pub const fn from_i64(v: i64) -> Self {
        Self::from_i128(v as i128)
    }

    /// Zero-extend `v` into the high limbs (truncating if `LIMBS < 2`).
    pub const fn from_u128(v: u128) -> Self {
        let mut items = [0u64; N];
        items[little::<N>(0)] = v as u64;
        if N > 1 {
            items[little::<N>(1)] = (v >> 64) as u64;
        }
        Self::from_raw(items)
    }

    /// Sign-extend `v` into the high limbs (truncating if `LIMBS < 2`).
    pub const fn from_i128(v: i128) -> Self {
        let fill = if v < 0 { u64::MAX } else { 0 };
        let mut items = [fill; N];
        items[little::<N>(0)] = v as u64;
        if N > 1 {
            items[little::<N>(1)] = (v >> 64) as u64;
        }
        Self::from_raw(items)
    }

    /// Convert to another width and/or signedness: copy the low limbs, then
    /// sign- or zero-extend according to the *source* type.
    ///
    /// ```
    /// use wide::{Int128, Int256, UInt256};
    ///
    /// let minus_one = Int128::from(-1i8);
    /// assert_eq!(minus_one.cast::<4, wide::Signed>(), Int256::from(-1i8));
    /// assert_eq!(minus_one.cast::<4, wide::Unsigned>(), UInt256::MAX);
    /// ```
    pub const fn cast<const M: usize, S2: Signedness>(self) -> WideInt<M, S2> {
        let fill = if self.is_negative() { u64::MAX } else { 0 };
        let mut items = [fill; M];
        let shared = if N < M { N } else { M };
        let mut i = 0;
        while i < shared {
            items[little::<M>(i)] = self.items[little::<N>(i)];
            i += 1;
        }
        WideInt::from_raw(items)
    }

    /// Same bits, signed interpretation.
    #[inline]
    pub const fn as_signed(self) -> WideInt<N, Signed> {
        WideInt::from_raw(self.items)
    }

    /// Same bits, unsigned interpretation.
    #[inline]
    pub const fn as_unsigned(self) -> WideInt<N, Unsigned> {
        WideInt::from_raw(self.items)
    }

    /// True if the value is below zero (always false for unsigned types).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        S::SIGNED && (self.items[big::<N>(0)] >> 63) == 1
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < N {
            if self.items[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Non-zero test, the integer's truth value.
    #[inline]
    pub const fn as_bool(&self) -> bool {
        !self.is_zero()
    }
}

impl<const N: usize, S: Signedness> Clone for WideInt<N, S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<const N: usize, S: Signedness> Copy for WideInt<N, S> {}

impl<const N: usize, S: Signedness> Default for WideInt<N, S> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize, S: Signedness> Hash for WideInt<N, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_constants() {
        assert_eq!(UInt128::BITS, 128);
        assert_eq!(Int1024::BITS, 1024);
        assert_eq!(UInt512::LIMBS, 8);
        assert!(Int256::IS_SIGNED);
        assert!(!UInt256::IS_SIGNED);
        assert_eq!(Int128::DIGITS, 127);
        assert_eq!(UInt128::DIGITS, 128);
        // std: u128::MAX has 39 digits, 38 of them always representable
        assert_eq!(UInt128::DIGITS10, 38);
        assert_eq!(Int128::DIGITS10, 38);
        assert_eq!(UInt256::DIGITS10, 77);
        assert!(Int512::IS_MODULO);
    }

    #[test]
    fn test_min_max_limbs() {
        assert_eq!(UInt256::MIN.to_le_limbs(), [0; 4]);
        assert_eq!(UInt256::MAX.to_le_limbs(), [u64::MAX; 4]);
        assert_eq!(Int256::MIN.to_le_limbs(), [0, 0, 0, 1 << 63]);
        assert_eq!(
            Int256::MAX.to_le_limbs(),
            [u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 1]
        );
    }

    #[test]
    fn test_const_construction() {
        const FORTY_TWO: UInt512 = UInt512::from_u64(42);
        const MINUS_ONE: Int256 = Int256::from_i64(-1);
        assert_eq!(FORTY_TWO.limb(0), 42);
        assert_eq!(FORTY_TWO.limb(7), 0);
        assert_eq!(MINUS_ONE.to_le_limbs(), [u64::MAX; 4]);
    }

    #[test]
    fn test_from_i128_sign_extends() {
        let v = Int512::from_i128(-2);
        assert_eq!(v.limb(0), u64::MAX - 1);
        assert!((1..8).all(|i| v.limb(i) == u64::MAX));
        assert!(v.is_negative());

        let u = UInt512::from_i128(-2);
        assert!(!u.is_negative());
        assert_eq!(u.limb(7), u64::MAX);
    }

    #[test]
    fn test_from_u128_zero_extends() {
        let v = UInt256::from_u128(u128::MAX);
        assert_eq!(v.to_le_limbs(), [u64::MAX, u64::MAX, 0, 0]);
    }

    #[test]
    fn test_le_limbs_roundtrip() {
        let limbs = [1, 2, 3, 4];
        assert_eq!(UInt256::from_le_limbs(limbs).to_le_limbs(), limbs);
    }

    #[test]
    fn test_from_limbs_le_pads_and_truncates() {
        assert_eq!(UInt256::from_limbs_le(&[5]).to_le_limbs(), [5, 0, 0, 0]);
        assert_eq!(UInt128::from_limbs_le(&[1, 2, 3]).to_le_limbs(), [1, 2]);
    }

    #[test]
    fn test_cast_sign_extension_follows_source() {
        let neg = Int128::from_i64(-3);
        assert_eq!(neg.cast::<4, Signed>().to_le_limbs(), [u64::MAX - 2, u64::MAX, u64::MAX, u64::MAX]);

        let big_unsigned = UInt128::MAX;
        assert_eq!(big_unsigned.cast::<4, Signed>().to_le_limbs(), [u64::MAX, u64::MAX, 0, 0]);

        let narrowed = UInt256::from_le_limbs([1, 2, 3, 4]).cast::<2, Unsigned>();
        assert_eq!(narrowed.to_le_limbs(), [1, 2]);
    }

    #[test]
    fn test_zero_and_truth_value() {
        assert!(UInt1024::ZERO.is_zero());
        assert!(!UInt1024::ZERO.as_bool());
        assert!(Int1024::ONE.as_bool());
        assert_eq!(Int256::default(), Int256::ZERO);
    }

    #[test]
    fn test_signed_unsigned_views() {
        let x = Int128::from_i64(-1);
        assert_eq!(x.as_unsigned(), UInt128::MAX);
        assert_eq!(UInt128::MAX.as_signed(), x);
    }
}
