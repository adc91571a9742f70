//! Type promotion for mixed-operand arithmetic and comparison.
//!
//! [`CommonType`] is a type-level table: for an operand pair it names the type
//! both sides are converted to before the operation runs. [`Promote`] performs
//! that conversion. Rules, first match wins:
//!
//! 1. Two wide integers of the same width: that width, signed only if both
//!    operands are signed.
//! 2. Two wide integers of different widths: the wider operand's type.
//! 3. A wide integer and `f32`/`f64`: the float.
//! 4. A wide integer and a native integer: the wide integer if the native is
//!    narrower. At equal width (`i128`/`u128` against 128-bit) the native wins
//!    when either side is signed, otherwise the wide integer.
//!
//! The table is symmetric, so natives on the left-hand side resolve the same
//! way. Rule 2 and the 128-bit half of rule 4 are spelled out for the
//! standard widths (2, 4, 8 and 16 limbs) only.

use crate::int::WideInt;
use crate::ops::ArithmeticOps;
use crate::sign::{Signed, Signedness, Unsigned};

/// Result type of combining `Self` with `Rhs`.
pub trait CommonType<Rhs> {
    type Output;
}

/// Value conversion into the common type `T`.
///
/// The arithmetic hooks combine an already-promoted operand with `self`.
/// Their defaults promote `self` and run the same-type operation; native
/// integers that fit in one limb override them to skip the widening.
pub trait Promote<T>: Sized {
    fn promote(self) -> T;

    /// `lhs + self`.
    #[inline]
    fn add_to(self, lhs: T) -> T
    where
        T: ArithmeticOps,
    {
        lhs.add_op(self.promote())
    }

    /// `lhs - self`.
    #[inline]
    fn sub_from(self, lhs: T) -> T
    where
        T: ArithmeticOps,
    {
        lhs.sub_op(self.promote())
    }

    /// `self - rhs`.
    #[inline]
    fn sub_by(self, rhs: T) -> T
    where
        T: ArithmeticOps,
    {
        self.promote().sub_op(rhs)
    }

    /// `lhs * self`.
    #[inline]
    fn mul_into(self, lhs: T) -> T
    where
        T: ArithmeticOps,
    {
        lhs.mul_op(self.promote())
    }
}

// ============================================================================
// Wide vs wide
// ============================================================================

impl<const N: usize, S: Signedness> CommonType<WideInt<N, S>> for WideInt<N, S> {
    type Output = Self;
}

impl<const N: usize> CommonType<WideInt<N, Unsigned>> for WideInt<N, Signed> {
    type Output = WideInt<N, Unsigned>;
}

impl<const N: usize> CommonType<WideInt<N, Signed>> for WideInt<N, Unsigned> {
    type Output = WideInt<N, Unsigned>;
}

macro_rules! wider_wins {
    ($narrow:literal => $($wide:literal),+) => {
        $(
            impl<S1: Signedness, S2: Signedness> CommonType<WideInt<$wide, S2>> for WideInt<$narrow, S1> {
                type Output = WideInt<$wide, S2>;
            }

            impl<S1: Signedness, S2: Signedness> CommonType<WideInt<$narrow, S2>> for WideInt<$wide, S1> {
                type Output = WideInt<$wide, S1>;
            }
        )+
    };
}

wider_wins!(2 => 4, 8, 16);
wider_wins!(4 => 8, 16);
wider_wins!(8 => 16);

impl<const N: usize, S: Signedness, const M: usize, S2: Signedness> Promote<WideInt<M, S2>>
    for WideInt<N, S>
{
    #[inline]
    fn promote(self) -> WideInt<M, S2> {
        self.cast()
    }
}

// ============================================================================
// Wide vs float
// ============================================================================

macro_rules! float_wins {
    ($($float:ty => $to:ident, $from:ident);+ $(;)?) => {
        $(
            impl<const N: usize, S: Signedness> CommonType<$float> for WideInt<N, S> {
                type Output = $float;
            }

            impl<const N: usize, S: Signedness> CommonType<WideInt<N, S>> for $float {
                type Output = $float;
            }

            impl<const N: usize, S: Signedness> Promote<$float> for WideInt<N, S> {
                #[inline]
                fn promote(self) -> $float {
                    self.$to()
                }
            }

            // Used by compound assignment when the expression produced a float.
            impl<const N: usize, S: Signedness> Promote<WideInt<N, S>> for $float {
                #[inline]
                fn promote(self) -> WideInt<N, S> {
                    WideInt::$from(self)
                }
            }

            impl Promote<$float> for $float {
                #[inline(always)]
                fn promote(self) -> $float {
                    self
                }
            }
        )+
    };
}

float_wins! {
    f32 => to_f32, from_f32;
    f64 => to_f64, from_f64;
}

// ============================================================================
// Wide vs native integer
// ============================================================================

/// A native operand of at most 64 bits as sign and magnitude, applied to a
/// wide value one limb at a time. Results match promoting the native first.
#[derive(Clone, Copy)]
struct NativeLimb {
    negative: bool,
    magnitude: u64,
}

impl NativeLimb {
    #[inline]
    fn unsigned(v: u64) -> Self {
        Self { negative: false, magnitude: v }
    }

    #[inline]
    fn signed(v: i64) -> Self {
        Self { negative: v < 0, magnitude: v.unsigned_abs() }
    }

    #[inline]
    fn add_to<const N: usize, S: Signedness>(self, lhs: WideInt<N, S>) -> WideInt<N, S> {
        if self.negative {
            lhs.wrapping_sub_limbs(&[self.magnitude])
        } else {
            lhs.wrapping_add_limbs(&[self.magnitude])
        }
    }

    #[inline]
    fn sub_from<const N: usize, S: Signedness>(self, lhs: WideInt<N, S>) -> WideInt<N, S> {
        if self.negative {
            lhs.wrapping_add_limbs(&[self.magnitude])
        } else {
            lhs.wrapping_sub_limbs(&[self.magnitude])
        }
    }

    #[inline]
    fn mul_into<const N: usize, S: Signedness>(self, lhs: WideInt<N, S>) -> WideInt<N, S> {
        let product = lhs.wrapping_mul_limb(self.magnitude);
        if self.negative {
            product.wrapping_neg()
        } else {
            product
        }
    }
}

macro_rules! wide_wins {
    ($limb:ident as $repr:ty; $($native:ty),+) => {
        $(
            impl<const N: usize, S: Signedness> CommonType<$native> for WideInt<N, S> {
                type Output = WideInt<N, S>;
            }

            impl<const N: usize, S: Signedness> CommonType<WideInt<N, S>> for $native {
                type Output = WideInt<N, S>;
            }

            impl<const N: usize, S: Signedness> Promote<WideInt<N, S>> for $native {
                #[inline]
                fn promote(self) -> WideInt<N, S> {
                    WideInt::from(self)
                }

                #[inline]
                fn add_to(self, lhs: WideInt<N, S>) -> WideInt<N, S> {
                    NativeLimb::$limb(self as $repr).add_to(lhs)
                }

                #[inline]
                fn sub_from(self, lhs: WideInt<N, S>) -> WideInt<N, S> {
                    NativeLimb::$limb(self as $repr).sub_from(lhs)
                }

                #[inline]
                fn sub_by(self, rhs: WideInt<N, S>) -> WideInt<N, S> {
                    NativeLimb::$limb(self as $repr).sub_from(rhs).wrapping_neg()
                }

                #[inline]
                fn mul_into(self, lhs: WideInt<N, S>) -> WideInt<N, S> {
                    NativeLimb::$limb(self as $repr).mul_into(lhs)
                }
            }
        )+
    };
}

wide_wins!(unsigned as u64; u8, u16, u32, u64, usize);
wide_wins!(signed as i64; i8, i16, i32, i64, isize);

macro_rules! wide_wins_over_128 {
    ($($limbs:literal),+) => {
        $(
            impl<S: Signedness> CommonType<u128> for WideInt<$limbs, S> {
                type Output = Self;
            }

            impl<S: Signedness> CommonType<WideInt<$limbs, S>> for u128 {
                type Output = WideInt<$limbs, S>;
            }

            impl<S: Signedness> CommonType<i128> for WideInt<$limbs, S> {
                type Output = Self;
            }

            impl<S: Signedness> CommonType<WideInt<$limbs, S>> for i128 {
                type Output = WideInt<$limbs, S>;
            }
        )+
    };
}

wide_wins_over_128!(4, 8, 16);

macro_rules! same_width_128 {
    ($($wide:ty, $native:ty => $out:ty);+ $(;)?) => {
        $(
            impl CommonType<$native> for $wide {
                type Output = $out;
            }

            impl CommonType<$wide> for $native {
                type Output = $out;
            }
        )+
    };
}

same_width_128! {
    WideInt<2, Signed>, i128 => i128;
    WideInt<2, Signed>, u128 => u128;
    WideInt<2, Unsigned>, i128 => i128;
    WideInt<2, Unsigned>, u128 => WideInt<2, Unsigned>;
}

impl<const N: usize, S: Signedness> Promote<WideInt<N, S>> for u128 {
    #[inline]
    fn promote(self) -> WideInt<N, S> {
        WideInt::from_u128(self)
    }
}

impl<const N: usize, S: Signedness> Promote<WideInt<N, S>> for i128 {
    #[inline]
    fn promote(self) -> WideInt<N, S> {
        WideInt::from_i128(self)
    }
}

impl<const N: usize, S: Signedness> Promote<u128> for WideInt<N, S> {
    #[inline]
    fn promote(self) -> u128 {
        self.as_u128()
    }
}

impl<const N: usize, S: Signedness> Promote<i128> for WideInt<N, S> {
    #[inline]
    fn promote(self) -> i128 {
        self.as_i128()
    }
}

impl Promote<u128> for u128 {
    #[inline(always)]
    fn promote(self) -> u128 {
        self
    }
}

impl Promote<i128> for i128 {
    #[inline(always)]
    fn promote(self) -> i128 {
        self
    }
}
