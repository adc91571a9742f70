//! Addition, subtraction, negation and multiplication.
//!
//! The free functions work on logical little-endian limb arrays and ignore
//! sign; the `WideInt` methods below layer two's-complement semantics on top.

use crate::bits;
use crate::int::WideInt;
use crate::limbs::{self, mac};
use crate::sign::{Signedness, Unsigned};

// ============================================================================
// Limb-array kernels
// ============================================================================

#[inline]
pub(crate) fn add<const N: usize>(a: &[u64; N], b: &[u64]) -> [u64; N] {
    let mut out = *a;
    limbs::plus(&mut out, b);
    out
}

#[inline]
pub(crate) fn sub<const N: usize>(a: &[u64; N], b: &[u64]) -> [u64; N] {
    let mut out = *a;
    limbs::minus(&mut out, b);
    out
}

/// Two's-complement negation: `!a + 1`.
#[inline]
pub(crate) fn neg<const N: usize>(a: &[u64; N]) -> [u64; N] {
    let mut out = bits::not(a);
    limbs::plus(&mut out, &[1]);
    out
}

/// `a * m` for a single-limb multiplier, truncated to `N` limbs.
pub(crate) fn mul_limb<const N: usize>(a: &[u64; N], m: u64) -> [u64; N] {
    let mut out = [0u64; N];
    let mut carry = 0;
    for i in 0..N {
        let (lo, hi) = mac(a[i], m, 0, carry);
        out[i] = lo;
        carry = hi;
    }
    out
}

/// Tiered `a * b mod 2^(64 N)`: one `u128` multiply at 128 bits, the closed
/// four-limb expansion at 256 bits, schoolbook otherwise.
#[inline]
pub(crate) fn mul<const N: usize>(a: &[u64; N], b: &[u64; N]) -> [u64; N] {
    match N {
        2 => mul_128(a, b),
        4 => mul_256(a, b),
        _ => mul_schoolbook(a, b),
    }
}

fn mul_128<const N: usize>(a: &[u64; N], b: &[u64; N]) -> [u64; N] {
    limbs::from_u128(limbs::low_u128(a).wrapping_mul(limbs::low_u128(b)))
}

fn mul_256<const N: usize>(a: &[u64; N], b: &[u64; N]) -> [u64; N] {
    let a0 = a[0] as u128;
    let a1 = a[1] as u128;
    let b0 = b[0] as u128;
    let b1 = b[1] as u128;
    let a01 = (a1 << 64) | a0;
    let a23 = ((a[3] as u128) << 64) | a[2] as u128;
    let b01 = (b1 << 64) | b0;
    let b23 = ((b[3] as u128) << 64) | b[2] as u128;

    // limb positions 2 and 3, mod 2^128
    let r23 = a23
        .wrapping_mul(b01)
        .wrapping_add(a01.wrapping_mul(b23))
        .wrapping_add(a1 * b1);
    let r01 = a0 * b0;

    let mut r12 = (r01 >> 64) | (r23 << 64);
    let mut top = (r23 >> 64) as u64;

    let r12_y = a0 * b1;
    let r12_x = (a1 * b0).wrapping_add(r12_y);
    if r12_x < r12_y {
        top = top.wrapping_add(1);
    }
    r12 = r12.wrapping_add(r12_x);
    if r12 < r12_x {
        top = top.wrapping_add(1);
    }

    let mut out = [0u64; N];
    out[0] = r01 as u64;
    out[1] = r12 as u64;
    out[2] = (r12 >> 64) as u64;
    out[3] = top;
    out
}

/// O(n²) multiply-accumulate, dropping partial products above limb `N`.
pub(crate) fn mul_schoolbook<const N: usize>(a: &[u64; N], b: &[u64; N]) -> [u64; N] {
    let mut out = [0u64; N];
    for i in 0..N {
        if a[i] == 0 {
            continue;
        }
        let mut carry = 0;
        for j in 0..N - i {
            let (lo, hi) = mac(a[i], b[j], out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
    }
    out
}

/// Bit-scan shift-and-add multiply. Runs of `111` and `11` in the multiplier
/// are consumed at once using precomputed `7a` and `3a`.
pub(crate) fn mul_shift_add<const N: usize>(a: &[u64; N], b: &[u64; N]) -> [u64; N] {
    let triple = add(a, &bits::shl(a, 1));
    let septuple = add(&triple, &bits::shl(a, 2));

    let mut out = [0u64; N];
    for (i, &limb) in b.iter().enumerate() {
        let mut item = limb;
        let mut pos = i as u32 * limbs::LIMB_BITS;
        while item != 0 {
            if item & 7 == 7 {
                limbs::plus(&mut out, &bits::shl(&septuple, pos));
                item >>= 3;
                pos += 3;
                continue;
            }
            if item & 3 == 3 {
                limbs::plus(&mut out, &bits::shl(&triple, pos));
                item >>= 2;
                pos += 2;
                continue;
            }
            if item & 1 == 1 {
                limbs::plus(&mut out, &bits::shl(a, pos));
            }
            item >>= 1;
            pos += 1;
        }
    }
    out
}

// ============================================================================
// WideInt arithmetic
// ============================================================================

impl<const N: usize, S: Signedness> WideInt<N, S> {
    /// `self + rhs`, wrapping at the type boundary.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self::from_le_limbs(add(&self.to_le_limbs(), &rhs.to_le_limbs()))
    }

    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self::from_le_limbs(sub(&self.to_le_limbs(), &rhs.to_le_limbs()))
    }

    /// Add a narrower little-endian limb slice without widening it first.
    /// The slice is read as an unsigned magnitude.
    #[inline]
    pub fn wrapping_add_limbs(self, rhs: &[u64]) -> Self {
        Self::from_le_limbs(add(&self.to_le_limbs(), rhs))
    }

    /// Subtract a narrower little-endian limb slice (unsigned magnitude).
    #[inline]
    pub fn wrapping_sub_limbs(self, rhs: &[u64]) -> Self {
        Self::from_le_limbs(sub(&self.to_le_limbs(), rhs))
    }

    /// `self + rhs` plus whether the mathematical result left the range of
    /// the type.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut out = self.to_le_limbs();
        let carry = limbs::plus(&mut out, &rhs.to_le_limbs());
        let out = Self::from_le_limbs(out);
        let overflow = if S::SIGNED {
            self.is_negative() == rhs.is_negative() && out.is_negative() != self.is_negative()
        } else {
            carry
        };
        (out, overflow)
    }

    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut out = self.to_le_limbs();
        let borrow = limbs::minus(&mut out, &rhs.to_le_limbs());
        let out = Self::from_le_limbs(out);
        let overflow = if S::SIGNED {
            self.is_negative() != rhs.is_negative() && out.is_negative() != self.is_negative()
        } else {
            borrow
        };
        (out, overflow)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (out, false) => Some(out),
            (_, true) => None,
        }
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (out, false) => Some(out),
            (_, true) => None,
        }
    }

    /// Two's-complement negation (`!self + 1`). Defined for unsigned types
    /// too, where it yields `2^BITS - self`.
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        Self::from_le_limbs(neg(&self.to_le_limbs()))
    }

    /// `None` for `MIN` of a signed type and for any non-zero unsigned value.
    pub fn checked_neg(self) -> Option<Self> {
        if S::SIGNED {
            (self != Self::MIN).then(|| self.wrapping_neg())
        } else {
            self.is_zero().then_some(self)
        }
    }

    /// `self * rhs`, wrapping. Signed operands are multiplied as magnitudes and
    /// the product negated when the signs differ.
    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        if cfg!(feature = "portable") {
            self.mul_with(rhs, mul_shift_add)
        } else {
            self.mul_with(rhs, mul)
        }
    }

    /// Multiply through the portable shift-and-add path, bypassing the
    /// `u128` and 256-bit fast paths. Same result as [`wrapping_mul`](Self::wrapping_mul).
    pub fn mul_generic(self, rhs: Self) -> Self {
        self.mul_with(rhs, mul_shift_add)
    }

    fn mul_with(self, rhs: Self, kernel: fn(&[u64; N], &[u64; N]) -> [u64; N]) -> Self {
        let negative = self.is_negative() != rhs.is_negative();
        let product = kernel(&self.magnitude(), &rhs.magnitude());
        if negative {
            Self::from_le_limbs(neg(&product))
        } else {
            Self::from_le_limbs(product)
        }
    }

    /// Multiply by a single limb without widening it first.
    #[inline]
    pub fn wrapping_mul_limb(self, rhs: u64) -> Self {
        Self::from_le_limbs(mul_limb(&self.to_le_limbs(), rhs))
    }

    /// Absolute value as little-endian limbs. `MIN` maps to `2^(BITS-1)`.
    #[inline]
    pub(crate) fn magnitude(self) -> [u64; N] {
        let limbs = self.to_le_limbs();
        if self.is_negative() {
            neg(&limbs)
        } else {
            limbs
        }
    }

    /// `|self|`, wrapping: `MIN.abs() == MIN`.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_le_limbs(self.magnitude())
    }

    /// `|self|` as the unsigned type of the same width. Exact for every value.
    #[inline]
    pub fn unsigned_abs(self) -> WideInt<N, Unsigned> {
        WideInt::from_le_limbs(self.magnitude())
    }

    /// `-1`, `0` or `1`.
    pub fn signum(self) -> Self {
        if self.is_negative() {
            Self::from_i64(-1)
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    /// `self^exp`, wrapping, by square-and-multiply.
    pub fn pow(self, mut exp: u32) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.wrapping_mul(base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.wrapping_mul(base);
            }
        }
        acc
    }

    /// Pre-increment: add one in place and return the new value.
    #[inline]
    pub fn inc(&mut self) -> Self {
        *self = self.wrapping_add_limbs(&[1]);
        *self
    }

    /// Pre-decrement.
    #[inline]
    pub fn dec(&mut self) -> Self {
        *self = self.wrapping_sub_limbs(&[1]);
        *self
    }

    /// Post-increment: add one in place and return the previous value.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.inc();
        prev
    }

    /// Post-decrement.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let prev = *self;
        self.dec();
        prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Int128, Int256, Int512, UInt1024, UInt128, UInt256, UInt512};

    // --- Limb kernels ---

    #[test]
    fn test_mul_tiers_agree_on_full_limbs() {
        let a = [0xdead_beef_0123_4567, 0x89ab_cdef_fedc_ba98, u64::MAX, 0x1234_5678_9abc_def0];
        let b = [u64::MAX, 0x0f0f_0f0f_0f0f_0f0f, 0x7777_7777_7777_7777, 3];
        let expected = mul_schoolbook(&a, &b);
        assert_eq!(mul_256(&a, &b), expected);
        assert_eq!(mul_shift_add(&a, &b), expected);

        let a2 = [a[0], a[1]];
        let b2 = [b[0], b[1]];
        assert_eq!(mul_128(&a2, &b2), mul_schoolbook(&a2, &b2));
        assert_eq!(mul_shift_add(&a2, &b2), mul_schoolbook(&a2, &b2));
    }

    #[test]
    fn test_mul_256_carries_into_top_limb() {
        let max = [u64::MAX; 4];
        // (2^256 - 1)^2 mod 2^256 == 1
        assert_eq!(mul_256(&max, &max), [1, 0, 0, 0]);
        let half = [0, u64::MAX, u64::MAX, 0];
        assert_eq!(mul_256(&half, &half), mul_schoolbook(&half, &half));
    }

    #[test]
    fn test_mul_limb() {
        let a = [u64::MAX, 1, 0];
        assert_eq!(mul_limb(&a, 2), [u64::MAX - 1, 3, 0]);
    }

    #[test]
    fn test_neg_of_zero_is_zero() {
        assert_eq!(neg(&[0u64; 4]), [0; 4]);
        assert_eq!(neg(&[1u64, 0]), [u64::MAX; 2]);
    }

    // --- Add / Sub ---

    #[test]
    fn test_add_wraps_at_boundary() {
        let top = UInt256::ONE.shift_left(255);
        assert_eq!(top.wrapping_add(top), UInt256::ZERO);
        assert_eq!(UInt128::MAX.wrapping_add(UInt128::ONE), UInt128::ZERO);
        assert_eq!(Int128::MAX.wrapping_add(Int128::ONE), Int128::MIN);
    }

    #[test]
    fn test_signed_add_sub() {
        let a = Int256::from_i64(-5);
        assert_eq!(a.wrapping_add(Int256::from_i64(2)), Int256::from_i64(-3));
        assert_eq!(a.wrapping_sub(Int256::from_i64(2)), Int256::from_i64(-7));
        assert_eq!(a.wrapping_add(a.wrapping_neg()), Int256::ZERO);
    }

    #[test]
    fn test_add_limbs_fast_path() {
        let a = UInt512::from_u64(u64::MAX);
        assert_eq!(a.wrapping_add_limbs(&[1]).to_le_limbs()[..2], [0, 1]);
        assert_eq!(UInt512::ZERO.wrapping_sub_limbs(&[1]), UInt512::MAX);
    }

    #[test]
    fn test_overflowing_add_sub() {
        assert_eq!(UInt128::MAX.overflowing_add(UInt128::ONE), (UInt128::ZERO, true));
        assert_eq!(UInt128::ZERO.overflowing_sub(UInt128::ONE), (UInt128::MAX, true));
        assert_eq!(Int128::MIN.overflowing_sub(Int128::ONE), (Int128::MAX, true));
        assert_eq!(Int128::from_i64(-1).overflowing_add(Int128::ONE), (Int128::ZERO, false));
        assert_eq!(Int128::MAX.checked_add(Int128::ONE), None);
        assert_eq!(Int128::from_i64(7).checked_sub(Int128::from_i64(9)), Some(Int128::from_i64(-2)));
    }

    // --- Neg / Abs ---

    #[test]
    fn test_neg_and_abs() {
        let x = Int512::from_i64(-42);
        assert_eq!(x.wrapping_neg(), Int512::from_i64(42));
        assert_eq!(x.abs(), Int512::from_i64(42));
        assert_eq!(Int512::MIN.abs(), Int512::MIN);
        assert_eq!(Int512::MIN.unsigned_abs(), UInt512::ONE.shift_left(511));
        assert_eq!(Int512::MIN.checked_neg(), None);
        assert_eq!(UInt512::ONE.checked_neg(), None);
        assert_eq!(UInt512::ZERO.checked_neg(), Some(UInt512::ZERO));
    }

    #[test]
    fn test_unsigned_neg_is_complement_plus_one() {
        assert_eq!(UInt256::ONE.wrapping_neg(), UInt256::MAX);
    }

    #[test]
    fn test_signum() {
        assert_eq!(Int256::from_i64(-9).signum(), Int256::from_i64(-1));
        assert_eq!(Int256::ZERO.signum(), Int256::ZERO);
        assert_eq!(UInt256::MAX.signum(), UInt256::ONE);
    }

    // --- Mul ---

    #[test]
    fn test_signed_mul_sign_rules() {
        let a = Int256::from_i64(-6);
        let b = Int256::from_i64(7);
        assert_eq!(a.wrapping_mul(b), Int256::from_i64(-42));
        assert_eq!(a.wrapping_mul(a), Int256::from_i64(36));
        assert_eq!(b.wrapping_mul(Int256::ZERO), Int256::ZERO);
    }

    #[test]
    fn test_mul_wraps() {
        let half = UInt128::ONE.shift_left(64);
        assert_eq!(half.wrapping_mul(half), UInt128::ZERO);
        assert_eq!(UInt128::MAX.wrapping_mul(UInt128::MAX), UInt128::ONE);
    }

    #[test]
    fn test_mul_generic_matches_fast_path() {
        let a = UInt1024::MAX.shift_right(3);
        let b = UInt1024::from_u64(0xfff1);
        assert_eq!(a.mul_generic(b), a.wrapping_mul(b));
        let c = Int512::from_i64(-123_456_789);
        let d = Int512::ONE.shift_left(300);
        assert_eq!(c.mul_generic(d), c.wrapping_mul(d));
    }

    #[test]
    fn test_pow() {
        assert_eq!(UInt256::from_u64(2).pow(200), UInt256::ONE.shift_left(200));
        assert_eq!(UInt256::from_u64(10).pow(0), UInt256::ONE);
        assert_eq!(Int256::from_i64(-3).pow(3), Int256::from_i64(-27));
        assert_eq!(UInt128::from_u64(2).pow(128), UInt128::ZERO);
    }

    #[test]
    fn test_inc_dec() {
        let mut x = UInt128::MAX;
        assert_eq!(x.inc(), UInt128::ZERO);
        assert_eq!(x.post_dec(), UInt128::ZERO);
        assert_eq!(x, UInt128::MAX);
        let mut y = Int128::ZERO;
        assert_eq!(y.dec(), Int128::from_i64(-1));
        assert_eq!(y.post_inc(), Int128::from_i64(-1));
        assert_eq!(y, Int128::ZERO);
    }
}
