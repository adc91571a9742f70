//! Operator surface.
//!
//! Every binary operator resolves its result type through
//! [`CommonType`], promotes both operands into it and then runs the same-type
//! operation from [`ArithmeticOps`] / [`IntegralOps`]. The same path serves
//! wide integers on either side of a native operand, so `w op x` and
//! `W::from(x) op w` always agree. `+ - *` against natives of at most 64 bits
//! apply the native as a single limb instead of widening it first.

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::int::WideInt;
use crate::promote::{CommonType, Promote};
use crate::sign::Signedness;

/// Same-type arithmetic and comparison shared by integers and floats.
pub trait ArithmeticOps: Copy {
    fn add_op(self, rhs: Self) -> Self;
    fn sub_op(self, rhs: Self) -> Self;
    fn mul_op(self, rhs: Self) -> Self;
    fn div_op(self, rhs: Self) -> Self;
    fn eq_op(self, rhs: Self) -> bool;
    fn cmp_op(self, rhs: Self) -> Option<Ordering>;
}

/// Same-type operations that only make sense for integers.
pub trait IntegralOps: ArithmeticOps {
    fn rem_op(self, rhs: Self) -> Self;
    fn bitand_op(self, rhs: Self) -> Self;
    fn bitor_op(self, rhs: Self) -> Self;
    fn bitxor_op(self, rhs: Self) -> Self;
}

impl<const N: usize, S: Signedness> ArithmeticOps for WideInt<N, S> {
    #[inline]
    fn add_op(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline]
    fn sub_op(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline]
    fn mul_op(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }

    #[inline]
    #[track_caller]
    fn div_op(self, rhs: Self) -> Self {
        self.wrapping_div(rhs)
    }

    #[inline]
    fn eq_op(self, rhs: Self) -> bool {
        self.same_eq(&rhs)
    }

    #[inline]
    fn cmp_op(self, rhs: Self) -> Option<Ordering> {
        Some(Ord::cmp(&self, &rhs))
    }
}

impl<const N: usize, S: Signedness> IntegralOps for WideInt<N, S> {
    #[inline]
    #[track_caller]
    fn rem_op(self, rhs: Self) -> Self {
        self.wrapping_rem(rhs)
    }

    #[inline]
    fn bitand_op(self, rhs: Self) -> Self {
        self.bit_and(rhs)
    }

    #[inline]
    fn bitor_op(self, rhs: Self) -> Self {
        self.bit_or(rhs)
    }

    #[inline]
    fn bitxor_op(self, rhs: Self) -> Self {
        self.bit_xor(rhs)
    }
}

macro_rules! native_integral_ops {
    ($($t:ty),+) => {
        $(
            impl ArithmeticOps for $t {
                #[inline]
                fn add_op(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn sub_op(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn mul_op(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                #[track_caller]
                fn div_op(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }

                #[inline]
                fn eq_op(self, rhs: Self) -> bool {
                    self == rhs
                }

                #[inline]
                fn cmp_op(self, rhs: Self) -> Option<Ordering> {
                    Some(self.cmp(&rhs))
                }
            }

            impl IntegralOps for $t {
                #[inline]
                #[track_caller]
                fn rem_op(self, rhs: Self) -> Self {
                    self.wrapping_rem(rhs)
                }

                #[inline]
                fn bitand_op(self, rhs: Self) -> Self {
                    self & rhs
                }

                #[inline]
                fn bitor_op(self, rhs: Self) -> Self {
                    self | rhs
                }

                #[inline]
                fn bitxor_op(self, rhs: Self) -> Self {
                    self ^ rhs
                }
            }
        )+
    };
}

native_integral_ops!(u128, i128);

macro_rules! float_ops {
    ($($t:ty),+) => {
        $(
            impl ArithmeticOps for $t {
                #[inline]
                fn add_op(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub_op(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn mul_op(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn div_op(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn eq_op(self, rhs: Self) -> bool {
                    self == rhs
                }

                #[inline]
                fn cmp_op(self, rhs: Self) -> Option<Ordering> {
                    self.partial_cmp(&rhs)
                }
            }
        )+
    };
}

float_ops!(f32, f64);

// ============================================================================
// Binary operators
// ============================================================================

macro_rules! binary_op {
    ($Trait:ident, $method:ident, $Bound:ident, $op:ident; $($native:ty),+) => {
        impl<const N: usize, S: Signedness, Rhs> $Trait<Rhs> for WideInt<N, S>
        where
            Self: CommonType<Rhs> + Promote<<Self as CommonType<Rhs>>::Output>,
            Rhs: Promote<<Self as CommonType<Rhs>>::Output>,
            <Self as CommonType<Rhs>>::Output: $Bound,
        {
            type Output = <Self as CommonType<Rhs>>::Output;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: Rhs) -> Self::Output {
                let lhs: Self::Output = self.promote();
                let rhs: Self::Output = rhs.promote();
                lhs.$op(rhs)
            }
        }

        $(
            impl<const N: usize, S: Signedness> $Trait<WideInt<N, S>> for $native
            where
                $native: CommonType<WideInt<N, S>>
                    + Promote<<$native as CommonType<WideInt<N, S>>>::Output>,
                WideInt<N, S>: Promote<<$native as CommonType<WideInt<N, S>>>::Output>,
                <$native as CommonType<WideInt<N, S>>>::Output: $Bound,
            {
                type Output = <$native as CommonType<WideInt<N, S>>>::Output;

                #[inline]
                #[track_caller]
                fn $method(self, rhs: WideInt<N, S>) -> Self::Output {
                    let lhs: Self::Output = self.promote();
                    let rhs: Self::Output = rhs.promote();
                    lhs.$op(rhs)
                }
            }
        )+
    };
}

/// `+ - *` go through the [`Promote`] hooks so one-limb natives skip the
/// full-width promotion. `$rhs_hook` combines a promoted left side with the
/// right operand; `$lhs_hook` combines a native left operand with the
/// promoted wide right side.
macro_rules! arith_op {
    ($Trait:ident, $method:ident, $rhs_hook:ident, $lhs_hook:ident; $($native:ty),+) => {
        impl<const N: usize, S: Signedness, Rhs> $Trait<Rhs> for WideInt<N, S>
        where
            Self: CommonType<Rhs> + Promote<<Self as CommonType<Rhs>>::Output>,
            Rhs: Promote<<Self as CommonType<Rhs>>::Output>,
            <Self as CommonType<Rhs>>::Output: ArithmeticOps,
        {
            type Output = <Self as CommonType<Rhs>>::Output;

            #[inline]
            fn $method(self, rhs: Rhs) -> Self::Output {
                let lhs: Self::Output = self.promote();
                rhs.$rhs_hook(lhs)
            }
        }

        $(
            impl<const N: usize, S: Signedness> $Trait<WideInt<N, S>> for $native
            where
                $native: CommonType<WideInt<N, S>>
                    + Promote<<$native as CommonType<WideInt<N, S>>>::Output>,
                WideInt<N, S>: Promote<<$native as CommonType<WideInt<N, S>>>::Output>,
                <$native as CommonType<WideInt<N, S>>>::Output: ArithmeticOps,
            {
                type Output = <$native as CommonType<WideInt<N, S>>>::Output;

                #[inline]
                fn $method(self, rhs: WideInt<N, S>) -> Self::Output {
                    let rhs: Self::Output = rhs.promote();
                    self.$lhs_hook(rhs)
                }
            }
        )+
    };
}

macro_rules! all_binary_ops {
    ($($native:ty),+) => {
        arith_op!(Add, add, add_to, add_to; $($native),+);
        arith_op!(Sub, sub, sub_from, sub_by; $($native),+);
        arith_op!(Mul, mul, mul_into, mul_into; $($native),+);
        binary_op!(Div, div, ArithmeticOps, div_op; $($native),+);
        binary_op!(Rem, rem, IntegralOps, rem_op; $($native),+);
        binary_op!(BitAnd, bitand, IntegralOps, bitand_op; $($native),+);
        binary_op!(BitOr, bitor, IntegralOps, bitor_op; $($native),+);
        binary_op!(BitXor, bitxor, IntegralOps, bitxor_op; $($native),+);
    };
}

all_binary_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! assign_op {
    ($($Assign:ident, $assign:ident, $Trait:ident, $method:ident);+ $(;)?) => {
        $(
            impl<const N: usize, S: Signedness, Rhs> $Assign<Rhs> for WideInt<N, S>
            where
                Self: $Trait<Rhs>,
                <Self as $Trait<Rhs>>::Output: Promote<Self>,
            {
                /// Computes the full promoted result, then converts it back
                /// into `Self`.
                #[inline]
                #[track_caller]
                fn $assign(&mut self, rhs: Rhs) {
                    *self = $Trait::$method(*self, rhs).promote();
                }
            }
        )+
    };
}

assign_op! {
    AddAssign, add_assign, Add, add;
    SubAssign, sub_assign, Sub, sub;
    MulAssign, mul_assign, Mul, mul;
    DivAssign, div_assign, Div, div;
    RemAssign, rem_assign, Rem, rem;
    BitAndAssign, bitand_assign, BitAnd, bitand;
    BitOrAssign, bitor_assign, BitOr, bitor;
    BitXorAssign, bitxor_assign, BitXor, bitxor;
}

// ============================================================================
// Unary operators
// ============================================================================

impl<const N: usize, S: Signedness> Neg for WideInt<N, S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl<const N: usize, S: Signedness> Not for WideInt<N, S> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.bit_not()
    }
}

// ============================================================================
// Shifts
// ============================================================================

macro_rules! shift_ops {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<const N: usize, S: Signedness> Shl<$t> for WideInt<N, S> {
                type Output = Self;

                #[inline]
                fn shl(self, n: $t) -> Self {
                    self.shift_left(shift_amount(n))
                }
            }

            impl<const N: usize, S: Signedness> Shr<$t> for WideInt<N, S> {
                type Output = Self;

                #[inline]
                fn shr(self, n: $t) -> Self {
                    self.shift_right(shift_amount(n))
                }
            }

            impl<const N: usize, S: Signedness> ShlAssign<$t> for WideInt<N, S> {
                #[inline]
                fn shl_assign(&mut self, n: $t) {
                    *self = *self << n;
                }
            }

            impl<const N: usize, S: Signedness> ShrAssign<$t> for WideInt<N, S> {
                #[inline]
                fn shr_assign(&mut self, n: $t) {
                    *self = *self >> n;
                }
            }
        )+
    };
}

/// Shift count as `u32`. Negative counts and counts past `u32::MAX` saturate,
/// so they shift every bit out: `<<` gives 0, `>>` gives 0 or -1 by sign.
fn shift_amount<T: TryInto<u32>>(n: T) -> u32 {
    n.try_into().unwrap_or(u32::MAX)
}

shift_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// ============================================================================
// Comparisons
// ============================================================================

impl<const N: usize, S: Signedness, Rhs: Copy> PartialEq<Rhs> for WideInt<N, S>
where
    Self: CommonType<Rhs> + Promote<<Self as CommonType<Rhs>>::Output>,
    Rhs: Promote<<Self as CommonType<Rhs>>::Output>,
    <Self as CommonType<Rhs>>::Output: ArithmeticOps,
{
    #[inline]
    fn eq(&self, other: &Rhs) -> bool {
        let lhs: <Self as CommonType<Rhs>>::Output = (*self).promote();
        let rhs: <Self as CommonType<Rhs>>::Output = (*other).promote();
        lhs.eq_op(rhs)
    }
}

impl<const N: usize, S: Signedness, Rhs: Copy> PartialOrd<Rhs> for WideInt<N, S>
where
    Self: CommonType<Rhs> + Promote<<Self as CommonType<Rhs>>::Output>,
    Rhs: Promote<<Self as CommonType<Rhs>>::Output>,
    <Self as CommonType<Rhs>>::Output: ArithmeticOps,
{
    #[inline]
    fn partial_cmp(&self, other: &Rhs) -> Option<Ordering> {
        let lhs: <Self as CommonType<Rhs>>::Output = (*self).promote();
        let rhs: <Self as CommonType<Rhs>>::Output = (*other).promote();
        lhs.cmp_op(rhs)
    }
}

macro_rules! native_lhs_cmp {
    ($($native:ty),+) => {
        $(
            impl<const N: usize, S: Signedness> PartialEq<WideInt<N, S>> for $native
            where
                $native: CommonType<WideInt<N, S>>
                    + Promote<<$native as CommonType<WideInt<N, S>>>::Output>,
                WideInt<N, S>: Promote<<$native as CommonType<WideInt<N, S>>>::Output>,
                <$native as CommonType<WideInt<N, S>>>::Output: ArithmeticOps,
            {
                #[inline]
                fn eq(&self, other: &WideInt<N, S>) -> bool {
                    let lhs: <$native as CommonType<WideInt<N, S>>>::Output = (*self).promote();
                    let rhs: <$native as CommonType<WideInt<N, S>>>::Output = (*other).promote();
                    lhs.eq_op(rhs)
                }
            }

            impl<const N: usize, S: Signedness> PartialOrd<WideInt<N, S>> for $native
            where
                $native: CommonType<WideInt<N, S>>
                    + Promote<<$native as CommonType<WideInt<N, S>>>::Output>,
                WideInt<N, S>: Promote<<$native as CommonType<WideInt<N, S>>>::Output>,
                <$native as CommonType<WideInt<N, S>>>::Output: ArithmeticOps,
            {
                #[inline]
                fn partial_cmp(&self, other: &WideInt<N, S>) -> Option<Ordering> {
                    let lhs: <$native as CommonType<WideInt<N, S>>>::Output = (*self).promote();
                    let rhs: <$native as CommonType<WideInt<N, S>>>::Output = (*other).promote();
                    lhs.cmp_op(rhs)
                }
            }
        )+
    };
}

native_lhs_cmp!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// ============================================================================
// Iterator folds
// ============================================================================

impl<const N: usize, S: Signedness> Sum for WideInt<N, S> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::wrapping_add)
    }
}

impl<const N: usize, S: Signedness> Product for WideInt<N, S> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Self::wrapping_mul)
    }
}

impl<'a, const N: usize, S: Signedness> Sum<&'a WideInt<N, S>> for WideInt<N, S> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
