//! Conversions between wide integers, native integers and floats.

use crate::int::WideInt;
use crate::sign::Signedness;

/// 2^64 as a float; exact in both `f32` and `f64`.
const LIMB_RADIX: f64 = 18_446_744_073_709_551_616.0;

// ============================================================================
// From native integers
// ============================================================================

macro_rules! from_unsigned {
    ($($t:ty),+) => {
        $(
            impl<const N: usize, S: Signedness> From<$t> for WideInt<N, S> {
                #[inline]
                fn from(v: $t) -> Self {
                    Self::from_u128(v as u128)
                }
            }
        )+
    };
}

macro_rules! from_signed {
    ($($t:ty),+) => {
        $(
            impl<const N: usize, S: Signedness> From<$t> for WideInt<N, S> {
                #[inline]
                fn from(v: $t) -> Self {
                    Self::from_i128(v as i128)
                }
            }
        )+
    };
}

from_unsigned!(u8, u16, u32, u64, u128, usize);
from_signed!(i8, i16, i32, i64, i128, isize);

impl<const N: usize, S: Signedness> From<bool> for WideInt<N, S> {
    #[inline]
    fn from(v: bool) -> Self {
        Self::from_u64(v as u64)
    }
}

/// `(low, high)` limb pair, the shape 128-bit hash functions return.
impl<const N: usize, S: Signedness> From<(u64, u64)> for WideInt<N, S> {
    #[inline]
    fn from((lo, hi): (u64, u64)) -> Self {
        Self::from_limbs_le(&[lo, hi])
    }
}

/// Little-endian limbs.
impl<const N: usize, S: Signedness> From<[u64; N]> for WideInt<N, S> {
    #[inline]
    fn from(limbs: [u64; N]) -> Self {
        Self::from_le_limbs(limbs)
    }
}

// ============================================================================
// Floats
// ============================================================================

impl<const N: usize, S: Signedness> WideInt<N, S> {
    /// Truncate a float toward zero. NaN and infinities give zero; magnitudes
    /// beyond the type wrap modulo `2^BITS`.
    ///
    /// ```
    /// use wide::{Int256, UInt256};
    ///
    /// assert_eq!(Int256::from_f64(-2.9), Int256::from(-2i32));
    /// assert_eq!(UInt256::from_f64(2f64.powi(100)), UInt256::ONE << 100u32);
    /// assert_eq!(UInt256::from_f64(f64::NAN), UInt256::ZERO);
    /// ```
    pub fn from_f64(v: f64) -> Self {
        if !v.is_finite() {
            return Self::ZERO;
        }
        if v > i64::MIN as f64 && v < i64::MAX as f64 {
            return Self::from_i64(v as i64);
        }
        let magnitude = Self::set_multiplier(v.abs());
        if v < 0.0 {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }

    #[inline]
    pub fn from_f32(v: f32) -> Self {
        Self::from_f64(v as f64)
    }

    /// Rebuild an integral float `t >= 0` limb by limb from the top:
    /// `floor(t / 2^64) * 2^64 + (t mod 2^64)`, recursing while the quotient
    /// still exceeds one limb. Every step is exact for integral floats.
    fn set_multiplier(t: f64) -> Self {
        let alpha = (t / LIMB_RADIX).floor();
        let high = if alpha < LIMB_RADIX {
            Self::from_u64(alpha as u64)
        } else {
            Self::set_multiplier(alpha)
        };
        let low = (t - alpha * LIMB_RADIX) as u64;
        high.shift_left(64).wrapping_add_limbs(&[low])
    }

    /// Nearest `f64` to the value (Horner over the magnitude's limbs).
    pub fn to_f64(self) -> f64 {
        let negative = self.is_negative();
        let magnitude = self
            .magnitude()
            .iter()
            .rev()
            .fold(0.0, |acc, &limb| acc * LIMB_RADIX + limb as f64);
        if negative {
            -magnitude
        } else {
            magnitude
        }
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }
}

// ============================================================================
// To native integers (bit-for-bit truncation)
// ============================================================================

impl<const N: usize, S: Signedness> WideInt<N, S> {
    /// Low 128 bits. A single-limb signed value is sign-extended.
    #[inline]
    pub fn as_u128(self) -> u128 {
        if N == 1 {
            let low = self.limb(0);
            return if S::SIGNED { low as i64 as i128 as u128 } else { low as u128 };
        }
        ((self.limb(1) as u128) << 64) | self.limb(0) as u128
    }

    #[inline]
    pub fn as_i128(self) -> i128 {
        self.as_u128() as i128
    }

    #[inline]
    pub fn as_u64(self) -> u64 {
        self.limb(0)
    }

    #[inline]
    pub fn as_i64(self) -> i64 {
        self.limb(0) as i64
    }
}

#[cfg(test)]
mod tests {
    use crate::{Int128, Int1024, Int256, Int512, UInt1024, UInt128, UInt256, UInt512};

    #[test]
    fn test_native_roundtrip() {
        assert_eq!(UInt256::from(u64::MAX).as_u64(), u64::MAX);
        assert_eq!(Int256::from(i64::MIN).as_i64(), i64::MIN);
        assert_eq!(Int512::from(i128::MIN).as_i128(), i128::MIN);
        assert_eq!(UInt512::from(u128::MAX).as_u128(), u128::MAX);
        assert_eq!(Int128::from(-1i8).as_i128(), -1);
        assert_eq!(UInt128::from(true), UInt128::ONE);
    }

    #[test]
    fn test_native_sign_extension() {
        assert_eq!(Int1024::from(-1i16), Int1024::from_i64(-1));
        assert_eq!(UInt1024::from(-1i16), UInt1024::MAX);
        assert_eq!(UInt256::from(0xffu8).to_le_limbs(), [0xff, 0, 0, 0]);
    }

    #[test]
    fn test_truncating_casts() {
        let v = UInt256::from_le_limbs([1, 2, 3, 4]);
        assert_eq!(v.as_u64(), 1);
        assert_eq!(v.as_u128(), (2u128 << 64) | 1);
    }

    #[test]
    fn test_pair_and_array_construction() {
        let v = UInt128::from((5u64, 9u64));
        assert_eq!(v.to_le_limbs(), [5, 9]);
        let w = UInt256::from([1u64, 2, 3, 4]);
        assert_eq!(w.limb(3), 4);
        let z = UInt512::from((u64::MAX, 1u64));
        assert_eq!(z.to_le_limbs()[..3], [u64::MAX, 1, 0]);
    }

    #[test]
    fn test_from_f64_small_values() {
        assert_eq!(Int256::from_f64(0.0), Int256::ZERO);
        assert_eq!(Int256::from_f64(-0.99), Int256::ZERO);
        assert_eq!(Int256::from_f64(123.75), Int256::from_i64(123));
        assert_eq!(Int256::from_f64(-123.75), Int256::from_i64(-123));
    }

    #[test]
    fn test_from_f64_large_values() {
        assert_eq!(UInt256::from_f64(2f64.powi(63)), UInt256::ONE.shift_left(63));
        assert_eq!(UInt256::from_f64(2f64.powi(200)), UInt256::ONE.shift_left(200));
        assert_eq!(Int256::from_f64(-(2f64.powi(130))), Int256::ONE.shift_left(130).wrapping_neg());
        // 2^1000 + 2^948 exercises several levels of recursion
        let f = 2f64.powi(1000) + 2f64.powi(948);
        let expected = UInt1024::ONE.shift_left(1000).wrapping_add(UInt1024::ONE.shift_left(948));
        assert_eq!(UInt1024::from_f64(f), expected);
    }

    #[test]
    fn test_from_f64_non_finite() {
        assert_eq!(UInt128::from_f64(f64::NAN), UInt128::ZERO);
        assert_eq!(UInt128::from_f64(f64::INFINITY), UInt128::ZERO);
        assert_eq!(Int128::from_f64(f64::NEG_INFINITY), Int128::ZERO);
        assert_eq!(Int128::from_f32(f32::NAN), Int128::ZERO);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(UInt256::ZERO.to_f64(), 0.0);
        assert_eq!(Int256::from_i64(-42).to_f64(), -42.0);
        assert_eq!(UInt512::ONE.shift_left(400).to_f64(), 2f64.powi(400));
        assert_eq!(Int128::MIN.to_f64(), -(2f64.powi(127)));
        assert_eq!(UInt128::ONE.shift_left(100).to_f32(), 2f32.powi(100));
    }

    #[test]
    fn test_float_roundtrip_for_exact_values() {
        for f in [1.0, 3.0e18, 9.5e30, 2f64.powi(120) * 3.0] {
            assert_eq!(UInt256::from_f64(f).to_f64(), f.trunc());
        }
    }
}
