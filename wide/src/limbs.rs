//! Limb storage: mapping between logical limb positions and physical slots,
//! and the carry/borrow primitives the arithmetic cores build on.
//!
//! Every algorithm in this crate works on *logical* little-endian limb arrays
//! (`[0]` is the least significant limb). [`WideInt`](crate::WideInt) keeps its
//! limbs in native order so that its memory image matches a machine integer of
//! the same width; the index helpers below translate between the two.

/// Bits per limb.
pub const LIMB_BITS: u32 = 64;

/// Physical slot of the `idx`-th least significant limb of an `N`-limb value.
#[inline(always)]
pub const fn little<const N: usize>(idx: usize) -> usize {
    if cfg!(target_endian = "little") {
        idx
    } else {
        N - 1 - idx
    }
}

/// Physical slot of the `idx`-th most significant limb of an `N`-limb value.
#[inline(always)]
pub const fn big<const N: usize>(idx: usize) -> usize {
    if cfg!(target_endian = "little") {
        N - 1 - idx
    } else {
        idx
    }
}

/// Raw slot, for work that does not care about significance (bitwise ops).
#[inline(always)]
pub const fn any(idx: usize) -> usize {
    idx
}

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let tmp = a as u128 + b as u128 + carry as u128;
    (tmp as u64, (tmp >> 64) as u64)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let tmp = (a as u128)
        .wrapping_sub(b as u128)
        .wrapping_sub(borrow as u128);
    (tmp as u64, (tmp >> 127) as u64)
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let tmp = a as u128 * b as u128 + c as u128 + carry as u128;
    (tmp as u64, (tmp >> 64) as u64)
}

/// `lhs += rhs`, where `rhs` may hold fewer limbs than `lhs` (missing limbs
/// read as zero; extra limbs are ignored). Returns the carry out of the top
/// limb.
///
/// Carries are recorded per limb in a fixed array during the first pass and
/// rippled upward in the second.
pub(crate) fn plus<const N: usize>(lhs: &mut [u64; N], rhs: &[u64]) -> bool {
    let op_items = N.min(rhs.len());
    let mut overflows = [false; N];

    for i in 0..op_items {
        let (sum, carry) = lhs[i].overflowing_add(rhs[i]);
        lhs[i] = sum;
        overflows[i] = carry;
    }

    for i in 1..N {
        if overflows[i - 1] {
            let (sum, carry) = lhs[i].overflowing_add(1);
            lhs[i] = sum;
            overflows[i] |= carry;
        }
    }

    N > 0 && overflows[N - 1]
}

/// `lhs -= rhs` with the same operand rules as [`plus`]. Returns the borrow
/// out of the top limb.
pub(crate) fn minus<const N: usize>(lhs: &mut [u64; N], rhs: &[u64]) -> bool {
    let op_items = N.min(rhs.len());
    let mut underflows = [false; N];

    for i in 0..op_items {
        let (diff, borrow) = lhs[i].overflowing_sub(rhs[i]);
        lhs[i] = diff;
        underflows[i] = borrow;
    }

    for i in 1..N {
        if underflows[i - 1] {
            let (diff, borrow) = lhs[i].overflowing_sub(1);
            lhs[i] = diff;
            underflows[i] |= borrow;
        }
    }

    N > 0 && underflows[N - 1]
}

/// True if every limb is zero.
#[inline]
pub(crate) fn is_zero(limbs: &[u64]) -> bool {
    limbs.iter().all(|&l| l == 0)
}

/// Number of limbs up to and including the most significant non-zero one.
#[inline]
pub(crate) fn significant_limbs(limbs: &[u64]) -> usize {
    limbs.iter().rposition(|&l| l != 0).map_or(0, |i| i + 1)
}

/// Leading zero bits of a logical little-endian limb array.
pub(crate) fn leading_zeros(limbs: &[u64]) -> u32 {
    let mut count = 0;
    for &limb in limbs.iter().rev() {
        if limb != 0 {
            return count + limb.leading_zeros();
        }
        count += LIMB_BITS;
    }
    count
}

/// Trailing zero bits of a logical little-endian limb array.
pub(crate) fn trailing_zeros(limbs: &[u64]) -> u32 {
    let mut count = 0;
    for &limb in limbs {
        if limb != 0 {
            return count + limb.trailing_zeros();
        }
        count += LIMB_BITS;
    }
    count
}

/// Low 128 bits of a logical little-endian limb array.
#[inline]
pub(crate) fn low_u128(limbs: &[u64]) -> u128 {
    let lo = limbs.first().copied().unwrap_or(0) as u128;
    let hi = limbs.get(1).copied().unwrap_or(0) as u128;
    (hi << 64) | lo
}

/// Logical little-endian array holding `v` in its low two limbs.
#[inline]
pub(crate) fn from_u128<const N: usize>(v: u128) -> [u64; N] {
    let mut out = [0u64; N];
    if N > 0 {
        out[0] = v as u64;
    }
    if N > 1 {
        out[1] = (v >> 64) as u64;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping_is_a_permutation() {
        let mut seen = [false; 8];
        for i in 0..8 {
            seen[little::<8>(i)] = true;
            assert_eq!(little::<8>(i), big::<8>(7 - i));
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(any(3), 3);
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_little_endian_layout() {
        assert_eq!(little::<4>(0), 0);
        assert_eq!(big::<4>(0), 3);
    }

    #[test]
    fn test_adc_sbb_mac() {
        assert_eq!(adc(u64::MAX, 1, 0), (0, 1));
        assert_eq!(adc(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
        assert_eq!(sbb(0, 1, 0), (u64::MAX, 1));
        assert_eq!(sbb(5, 3, 1), (1, 0));
        assert_eq!(mac(u64::MAX, u64::MAX, u64::MAX, u64::MAX), (u64::MAX, u64::MAX));
    }

    #[test]
    fn test_plus_ripples_through_limbs() {
        let mut a = [u64::MAX, u64::MAX, 0, 0];
        let carry = plus(&mut a, &[1]);
        assert_eq!(a, [0, 0, 1, 0]);
        assert!(!carry);
    }

    #[test]
    fn test_plus_carry_out() {
        let mut a = [u64::MAX; 4];
        assert!(plus(&mut a, &[1]));
        assert_eq!(a, [0; 4]);
    }

    #[test]
    fn test_plus_double_carry_into_same_limb() {
        // limb 1 overflows on its own and also receives the carry from limb 0
        let mut a = [u64::MAX, u64::MAX, 7];
        plus(&mut a, &[u64::MAX, u64::MAX]);
        assert_eq!(a, [u64::MAX - 1, u64::MAX, 8]);
    }

    #[test]
    fn test_minus_borrow_chain() {
        let mut a = [0, 0, 1, 0];
        let borrow = minus(&mut a, &[1]);
        assert_eq!(a, [u64::MAX, u64::MAX, 0, 0]);
        assert!(!borrow);

        let mut z = [0u64; 2];
        assert!(minus(&mut z, &[1, 0]));
        assert_eq!(z, [u64::MAX; 2]);
    }

    #[test]
    fn test_significant_limbs_and_zero() {
        assert_eq!(significant_limbs(&[0, 0, 0]), 0);
        assert_eq!(significant_limbs(&[1, 0, 0]), 1);
        assert_eq!(significant_limbs(&[0, 0, 5]), 3);
        assert!(is_zero(&[0, 0]));
        assert!(!is_zero(&[0, 1]));
    }

    #[test]
    fn test_leading_and_trailing_zeros() {
        assert_eq!(leading_zeros(&[0u64; 4]), 256);
        assert_eq!(leading_zeros(&[1, 0]), 127);
        assert_eq!(leading_zeros(&[0, 1 << 63]), 0);
        assert_eq!(trailing_zeros(&[0, 2]), 65);
        assert_eq!(trailing_zeros(&[0u64; 2]), 128);
    }

    #[test]
    fn test_u128_helpers() {
        let v = (7u128 << 64) | 9;
        let limbs: [u64; 4] = from_u128(v);
        assert_eq!(limbs, [9, 7, 0, 0]);
        assert_eq!(low_u128(&limbs), v);
    }
}
