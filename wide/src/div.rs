//! Truncating division and remainder.
//!
//! Magnitudes are divided as unsigned limb arrays by the first applicable
//! tier: native `u128`, single-limb divisor, power-of-two divisor, then Knuth
//! Algorithm D. Binary long division is the portable reference path and is
//! what the `portable` feature routes the operators through.

use std::cmp::Ordering;

use crate::arith::{neg, sub};
use crate::bits::{shl, shr};
use crate::cmp::cmp_unsigned;
use crate::error::WideIntError;
use crate::int::WideInt;
use crate::limbs::{self, adc, mac, sbb, LIMB_BITS};
use crate::sign::Signedness;

type Kernel<const N: usize> = fn(&[u64; N], &[u64; N]) -> ([u64; N], [u64; N]);

// ============================================================================
// Unsigned kernels
// ============================================================================

/// Divide by a single non-zero limb, most significant limb first.
pub(crate) fn div_rem_limb<const N: usize>(u: &[u64; N], v: u64) -> ([u64; N], u64) {
    let mut q = [0u64; N];
    let mut rem: u128 = 0;
    for i in (0..N).rev() {
        let cur = (rem << 64) | u[i] as u128;
        q[i] = (cur / v as u128) as u64;
        rem = cur % v as u128;
    }
    (q, rem as u64)
}

/// Tiered unsigned division. `v` must be non-zero.
pub(crate) fn div_rem_fast<const N: usize>(u: &[u64; N], v: &[u64; N]) -> ([u64; N], [u64; N]) {
    if cmp_unsigned(u, v) == Ordering::Less {
        return ([0; N], *u);
    }

    let m = limbs::significant_limbs(u);
    let n = limbs::significant_limbs(v);

    if m <= 2 {
        let (a, b) = (limbs::low_u128(u), limbs::low_u128(v));
        return (limbs::from_u128(a / b), limbs::from_u128(a % b));
    }

    if n == 1 {
        let (q, r) = div_rem_limb(u, v[0]);
        let mut rem = [0u64; N];
        rem[0] = r;
        return (q, rem);
    }

    if v.iter().map(|l| l.count_ones()).sum::<u32>() == 1 {
        let shift = limbs::trailing_zeros(v);
        let mask = sub(v, &[1]);
        let mut rem = *u;
        for (r, m) in rem.iter_mut().zip(mask.iter()) {
            *r &= *m;
        }
        return (shr(u, shift, false), rem);
    }

    knuth(u, v, m, n)
}

/// Dividend scratch space for Algorithm D: `N` limbs plus the one extra limb
/// that normalization can spill into.
struct Scratch<const N: usize> {
    lo: [u64; N],
    hi: u64,
}

impl<const N: usize> Scratch<N> {
    #[inline]
    fn get(&self, i: usize) -> u64 {
        if i < N {
            self.lo[i]
        } else {
            self.hi
        }
    }

    #[inline]
    fn set(&mut self, i: usize, value: u64) {
        if i < N {
            self.lo[i] = value;
        } else {
            self.hi = value;
        }
    }
}

/// Knuth, TAOCP vol. 2, 4.3.1, Algorithm D. `m` and `n` are the significant
/// limb counts of `u` and `v`, with `m >= n >= 2`.
fn knuth<const N: usize>(u: &[u64; N], v: &[u64; N], m: usize, n: usize) -> ([u64; N], [u64; N]) {
    const B: u128 = 1 << 64;

    // D1: normalize so the top divisor limb has its high bit set
    let s = v[n - 1].leading_zeros();
    let spill = |x: u64| if s == 0 { 0 } else { x >> (LIMB_BITS - s) };

    let mut vn = [0u64; N];
    for i in (1..n).rev() {
        vn[i] = (v[i] << s) | spill(v[i - 1]);
    }
    vn[0] = v[0] << s;

    let mut un = Scratch { lo: [0u64; N], hi: 0 };
    un.set(m, spill(u[m - 1]));
    for i in (1..m).rev() {
        un.set(i, (u[i] << s) | spill(u[i - 1]));
    }
    un.set(0, u[0] << s);

    let mut q = [0u64; N];
    let v_top = vn[n - 1] as u128;
    let v_next = vn[n - 2] as u128;

    for j in (0..=m - n).rev() {
        // D3: estimate qhat from the top two dividend limbs
        let num = ((un.get(j + n) as u128) << 64) | un.get(j + n - 1) as u128;
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;
        while qhat >= B || qhat * v_next > ((rhat << 64) | un.get(j + n - 2) as u128) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= B {
                break;
            }
        }
        let mut qhat = qhat as u64;

        // D4: multiply and subtract
        let mut carry = 0;
        let mut borrow = 0;
        for i in 0..n {
            let (lo, hi) = mac(qhat, vn[i], 0, carry);
            let (diff, b) = sbb(un.get(i + j), lo, borrow);
            un.set(i + j, diff);
            carry = hi;
            borrow = b;
        }
        let (diff, b) = sbb(un.get(j + n), carry, borrow);
        un.set(j + n, diff);

        // D6: add back when qhat was one too large
        if b != 0 {
            qhat -= 1;
            let mut c = 0;
            for i in 0..n {
                let (sum, cc) = adc(un.get(i + j), vn[i], c);
                un.set(i + j, sum);
                c = cc;
            }
            un.set(j + n, un.get(j + n).wrapping_add(c));
        }
        q[j] = qhat;
    }

    // D8: unnormalize the remainder
    let mut r = [0u64; N];
    for (i, slot) in r.iter_mut().enumerate().take(n) {
        let carry_in = if s == 0 { 0 } else { un.get(i + 1) << (LIMB_BITS - s) };
        *slot = (un.get(i) >> s) | carry_in;
    }
    (q, r)
}

/// Bit-by-bit long division. The mask starts at the highest power of two for
/// which `v << k <= u`, then each step test-subtracts and halves.
pub(crate) fn div_rem_binary<const N: usize>(u: &[u64; N], v: &[u64; N]) -> ([u64; N], [u64; N]) {
    let mut num = *u;
    let mut den = *v;
    let mut quotient = [0u64; N];
    let mut x = [0u64; N];
    x[0] = 1;

    let top_bit = |a: &[u64; N]| a[N - 1] >> 63 == 1;
    while cmp_unsigned(&den, &num) != Ordering::Greater && !top_bit(&den) {
        x = shl(&x, 1);
        den = shl(&den, 1);
    }

    while !limbs::is_zero(&x) {
        if cmp_unsigned(&den, &num) != Ordering::Greater {
            limbs::minus(&mut num, &den);
            for (q, m) in quotient.iter_mut().zip(x.iter()) {
                *q |= *m;
            }
        }
        x = shr(&x, 1, false);
        den = shr(&den, 1, false);
    }
    (quotient, num)
}

// ============================================================================
// WideInt division
// ============================================================================

impl<const N: usize, S: Signedness> WideInt<N, S> {
    fn div_rem_with(self, rhs: Self, kernel: Kernel<N>) -> Result<(Self, Self), WideIntError> {
        if rhs.is_zero() {
            return Err(WideIntError::DivisionByZero);
        }
        let (lneg, rneg) = (self.is_negative(), rhs.is_negative());
        let (mut q, mut r) = kernel(&self.magnitude(), &rhs.magnitude());
        if lneg != rneg {
            q = neg(&q);
        }
        if lneg {
            r = neg(&r);
        }
        Ok((Self::from_le_limbs(q), Self::from_le_limbs(r)))
    }

    /// Quotient and remainder, truncating toward zero. The remainder takes the
    /// sign of the dividend; `MIN / -1` wraps to `MIN`.
    ///
    /// ```
    /// use wide::{Int256, WideIntError};
    ///
    /// let (q, r) = Int256::from(-7i32).try_div_rem(Int256::from(2i32)).unwrap();
    /// assert_eq!((q, r), (Int256::from(-3i32), Int256::from(-1i32)));
    /// assert_eq!(Int256::ONE.try_div_rem(Int256::ZERO), Err(WideIntError::DivisionByZero));
    /// ```
    pub fn try_div_rem(self, rhs: Self) -> Result<(Self, Self), WideIntError> {
        if cfg!(feature = "portable") {
            self.div_rem_with(rhs, div_rem_binary)
        } else {
            self.div_rem_with(rhs, div_rem_fast)
        }
    }

    /// Division through binary long division only, bypassing every fast path.
    pub fn div_rem_generic(self, rhs: Self) -> Result<(Self, Self), WideIntError> {
        self.div_rem_with(rhs, div_rem_binary)
    }

    /// # Panics
    /// If `rhs` is zero.
    #[track_caller]
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        match self.try_div_rem(rhs) {
            Ok(qr) => qr,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Panics
    /// If `rhs` is zero.
    #[track_caller]
    pub fn wrapping_div(self, rhs: Self) -> Self {
        self.div_rem(rhs).0
    }

    /// # Panics
    /// If `rhs` is zero.
    #[track_caller]
    pub fn wrapping_rem(self, rhs: Self) -> Self {
        self.div_rem(rhs).1
    }

    /// `None` on division by zero. `MIN / -1` wraps.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.try_div_rem(rhs).ok().map(|(q, _)| q)
    }

    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.try_div_rem(rhs).ok().map(|(_, r)| r)
    }
}
