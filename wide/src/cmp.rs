//! Ordering of equal-width values. Cross-type comparisons are routed through
//! the promotion layer by the operator surface in `ops`.

use std::cmp::Ordering;

use crate::int::WideInt;
use crate::limbs::big;
use crate::sign::Signedness;

/// Unsigned order of two logical little-endian arrays: most significant limb
/// first, first mismatch decides.
pub(crate) fn cmp_unsigned<const N: usize>(a: &[u64; N], b: &[u64; N]) -> Ordering {
    for i in (0..N).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

impl<const N: usize, S: Signedness> WideInt<N, S> {
    /// Two's-complement aware order on the native limb layout. Values whose
    /// sign bits differ are decided without scanning the limbs.
    fn compare(&self, other: &Self) -> Ordering {
        let (lneg, rneg) = (self.is_negative(), other.is_negative());
        if lneg != rneg {
            return if lneg { Ordering::Less } else { Ordering::Greater };
        }
        let (a, b) = (self.raw(), other.raw());
        for i in 0..N {
            match a[big::<N>(i)].cmp(&b[big::<N>(i)]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    #[inline]
    pub(crate) fn same_eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl<const N: usize, S: Signedness> Eq for WideInt<N, S> {}

impl<const N: usize, S: Signedness> Ord for WideInt<N, S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Int256, Int512, UInt256};

    #[test]
    fn test_cmp_unsigned_scans_from_top() {
        assert_eq!(cmp_unsigned(&[u64::MAX, 0], &[0, 1]), Ordering::Less);
        assert_eq!(cmp_unsigned(&[2, 7], &[1, 7]), Ordering::Greater);
        assert_eq!(cmp_unsigned(&[3, 3], &[3, 3]), Ordering::Equal);
    }

    #[test]
    fn test_signed_order() {
        let minus_one = Int256::from_i64(-1);
        let one = Int256::ONE;
        assert_eq!(minus_one.cmp(&one), Ordering::Less);
        assert_eq!(Int256::MIN.cmp(&minus_one), Ordering::Less);
        assert_eq!(Int256::MAX.cmp(&Int256::MIN), Ordering::Greater);
        assert_eq!(Int256::from_i64(-7).cmp(&Int256::from_i64(-3)), Ordering::Less);
    }

    #[test]
    fn test_unsigned_order_ignores_top_bit() {
        let top = UInt256::ONE.shift_left(255);
        assert_eq!(top.cmp(&UInt256::ONE), Ordering::Greater);
        assert_eq!(UInt256::MAX.cmp(&UInt256::MAX), Ordering::Equal);
    }

    #[test]
    fn test_sort_and_max() {
        let mut v = vec![
            Int512::from_i64(5),
            Int512::MIN,
            Int512::from_i64(-5),
            Int512::MAX,
            Int512::ZERO,
        ];
        v.sort();
        assert_eq!(
            v,
            vec![Int512::MIN, Int512::from_i64(-5), Int512::ZERO, Int512::from_i64(5), Int512::MAX]
        );
        assert_eq!(v.iter().max(), Some(&Int512::MAX));
    }

    #[test]
    fn test_same_eq() {
        assert!(UInt256::from_u64(9).same_eq(&UInt256::from_u64(9)));
        assert!(!UInt256::from_u64(9).same_eq(&UInt256::from_u64(8)));
    }
}
