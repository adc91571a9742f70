//! Conversions between wide integers, natives and floats, across widths.

use proptest::prelude::*;
use wide::{Int1024, Int128, Int256, Int512, Signed, UInt1024, UInt128, UInt256, UInt512, Unsigned};

// ============================================================================
// Native round-trips
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_signed_natives_round_trip(x in any::<i64>(), y in any::<i128>()) {
        prop_assert_eq!(Int256::from(x).as_i64(), x);
        prop_assert_eq!(Int1024::from(y).as_i128(), y);
        prop_assert_eq!(Int128::from(y).as_i128(), y);
        prop_assert_eq!(Int512::from(x as i32).as_i64() as i32, x as i32);
    }

    #[test]
    fn prop_unsigned_natives_round_trip(x in any::<u64>(), y in any::<u128>()) {
        prop_assert_eq!(UInt256::from(x).as_u64(), x);
        prop_assert_eq!(UInt512::from(y).as_u128(), y);
        prop_assert_eq!(UInt128::from(y).as_u128(), y);
    }

    #[test]
    fn prop_negative_natives_sign_extend(x in i64::MIN..0) {
        let v = Int512::from(x);
        prop_assert!(v.is_negative());
        prop_assert_eq!(v.limb(7), u64::MAX);
        prop_assert_eq!(v.cast::<16, Signed>(), Int1024::from(x));
        prop_assert_eq!(v.to_string(), x.to_string());
    }

    #[test]
    fn prop_widen_then_narrow_is_identity(x in any::<i128>()) {
        let narrow = Int128::from(x);
        let back: Int128 = narrow.cast::<16, Signed>().cast::<2, Signed>();
        prop_assert_eq!(back, narrow);
    }

    #[test]
    fn prop_exact_floats_round_trip(m in any::<u32>(), e in 0i32..900) {
        let f = m as f64 * 2f64.powi(e);
        let v = UInt1024::from_f64(f);
        prop_assert_eq!(v.to_f64(), f);
        prop_assert_eq!(Int1024::from_f64(-f).to_f64(), -f);
    }
}

// ============================================================================
// Casts between widths and signedness
// ============================================================================

#[test]
fn test_unsigned_source_zero_extends() {
    let v = UInt128::MAX.cast::<4, Signed>();
    assert!(!v.is_negative());
    assert_eq!(v, Int256::from(u128::MAX));
}

#[test]
fn test_signed_source_sign_extends() {
    let v = Int128::from(-1i8).cast::<8, Unsigned>();
    assert_eq!(v, UInt512::MAX);
}

#[test]
fn test_narrowing_truncates() {
    let v = (UInt512::ONE << 300u32) + 5u8;
    assert_eq!(v.cast::<2, Unsigned>(), UInt128::from(5u8));
}

#[test]
fn test_bool_and_pair() {
    assert_eq!(UInt256::from(true), UInt256::ONE);
    assert!(!Int256::from(false).as_bool());
    assert_eq!(UInt128::from((1u64, 1u64)), (UInt128::ONE << 64u32) + 1u8);
}

#[test]
fn test_float_edges() {
    assert_eq!(Int256::from_f64(f64::INFINITY), Int256::ZERO);
    assert_eq!(Int256::from_f64(-0.99), Int256::ZERO);
    assert_eq!(Int256::from_f32(-3.5), Int256::from(-3i8));
    assert_eq!(Int512::MIN.to_f64(), -(2f64.powi(511)));
}
