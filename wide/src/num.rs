//! `num-traits` integration.

use num_traits::{
    AsPrimitive, Bounded, CheckedAdd, CheckedDiv, CheckedNeg, CheckedRem, CheckedSub, FromPrimitive,
    Num, One, ToPrimitive, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub, Zero,
};

use crate::error::WideIntError;
use crate::int::WideInt;
use crate::sign::Signedness;

impl<const N: usize, S: Signedness> Zero for WideInt<N, S> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        WideInt::is_zero(self)
    }
}

impl<const N: usize, S: Signedness> One for WideInt<N, S> {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl<const N: usize, S: Signedness> Bounded for WideInt<N, S> {
    #[inline]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl<const N: usize, S: Signedness> Num for WideInt<N, S> {
    type FromStrRadixErr = WideIntError;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        WideInt::from_str_radix(src, radix)
    }
}

macro_rules! forward_wrapping {
    ($($Trait:ident, $method:ident);+ $(;)?) => {
        $(
            impl<const N: usize, S: Signedness> $Trait for WideInt<N, S> {
                #[inline]
                fn $method(&self, v: &Self) -> Self {
                    WideInt::$method(*self, *v)
                }
            }
        )+
    };
}

forward_wrapping! {
    WrappingAdd, wrapping_add;
    WrappingSub, wrapping_sub;
    WrappingMul, wrapping_mul;
}

impl<const N: usize, S: Signedness> WrappingNeg for WideInt<N, S> {
    #[inline]
    fn wrapping_neg(&self) -> Self {
        WideInt::wrapping_neg(*self)
    }
}

macro_rules! forward_checked {
    ($($Trait:ident, $method:ident);+ $(;)?) => {
        $(
            impl<const N: usize, S: Signedness> $Trait for WideInt<N, S> {
                #[inline]
                fn $method(&self, v: &Self) -> Option<Self> {
                    WideInt::$method(*self, *v)
                }
            }
        )+
    };
}

forward_checked! {
    CheckedAdd, checked_add;
    CheckedSub, checked_sub;
    CheckedDiv, checked_div;
    CheckedRem, checked_rem;
}

impl<const N: usize, S: Signedness> CheckedNeg for WideInt<N, S> {
    #[inline]
    fn checked_neg(&self) -> Option<Self> {
        WideInt::checked_neg(*self)
    }
}

// ============================================================================
// Primitive conversions
// ============================================================================

macro_rules! as_primitive_int {
    ($($t:ty),+) => {
        $(
            impl<const N: usize, S: Signedness> AsPrimitive<$t> for WideInt<N, S> {
                #[inline]
                fn as_(self) -> $t {
                    self.as_u128() as $t
                }
            }
        )+
    };
}

as_primitive_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<const N: usize, S: Signedness> AsPrimitive<f32> for WideInt<N, S> {
    #[inline]
    fn as_(self) -> f32 {
        self.to_f32()
    }
}

impl<const N: usize, S: Signedness> AsPrimitive<f64> for WideInt<N, S> {
    #[inline]
    fn as_(self) -> f64 {
        self.to_f64()
    }
}

impl<const N: usize, S: Signedness> ToPrimitive for WideInt<N, S> {
    /// `Some` only when the value survives the round trip unchanged.
    fn to_i64(&self) -> Option<i64> {
        let v = self.as_i64();
        (Self::from_i64(v).same_eq(self) && self.is_negative() == (v < 0)).then_some(v)
    }

    fn to_u64(&self) -> Option<u64> {
        let v = self.as_u64();
        Self::from_u64(v).same_eq(self).then_some(v)
    }

    fn to_i128(&self) -> Option<i128> {
        let v = self.as_i128();
        (Self::from_i128(v).same_eq(self) && self.is_negative() == (v < 0)).then_some(v)
    }

    fn to_u128(&self) -> Option<u128> {
        let v = self.as_u128();
        Self::from_u128(v).same_eq(self).then_some(v)
    }

    fn to_f32(&self) -> Option<f32> {
        Some(WideInt::to_f32(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(WideInt::to_f64(*self))
    }
}

impl<const N: usize, S: Signedness> FromPrimitive for WideInt<N, S> {
    fn from_i64(n: i64) -> Option<Self> {
        Self::from_i128(n as i128).fits_i128(n as i128)
    }

    fn from_u64(n: u64) -> Option<Self> {
        Self::from_u128(n as u128).fits_u128(n as u128)
    }

    fn from_i128(n: i128) -> Option<Self> {
        Self::from_i128(n).fits_i128(n)
    }

    fn from_u128(n: u128) -> Option<Self> {
        Self::from_u128(n).fits_u128(n)
    }

    /// Truncates toward zero; `None` for NaN, infinities and values outside the
    /// type's range.
    fn from_f64(n: f64) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }
        let v = Self::from_f64(n);
        let exact = v.to_f64() == n.trunc() && (n.trunc() == 0.0 || v.is_negative() == (n < 0.0));
        exact.then_some(v)
    }

    fn from_f32(n: f32) -> Option<Self> {
        <Self as FromPrimitive>::from_f64(n as f64)
    }
}

impl<const N: usize, S: Signedness> WideInt<N, S> {
    /// `Some(self)` if `self` represents `n` exactly (no truncation, no sign flip).
    fn fits_i128(self, n: i128) -> Option<Self> {
        (self.as_i128() == n && self.is_negative() == (n < 0)).then_some(self)
    }

    fn fits_u128(self, n: u128) -> Option<Self> {
        (self.as_u128() == n && !self.is_negative()).then_some(self)
    }
}
