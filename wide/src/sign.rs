//! Signedness tags for [`WideInt`](crate::WideInt).

use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Signed {}
    impl Sealed for super::Unsigned {}
}

/// Compile-time signedness of a [`WideInt`](crate::WideInt). Implemented only
/// by [`Signed`] and [`Unsigned`].
pub trait Signedness:
    sealed::Sealed + Copy + Debug + Default + Eq + Ord + Hash + Send + Sync + 'static
{
    /// Whether the top bit is a sign bit.
    const SIGNED: bool;
    /// Type-name prefix used by `Debug` (`Int` / `UInt`).
    const NAME: &'static str;
}

/// Two's-complement signed interpretation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signed;

/// Unsigned interpretation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unsigned;

impl Signedness for Signed {
    const SIGNED: bool = true;
    const NAME: &'static str = "Int";
}

impl Signedness for Unsigned {
    const SIGNED: bool = false;
    const NAME: &'static str = "UInt";
}
