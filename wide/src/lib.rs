//! Fixed-width wide integers: 128, 256, 512 and 1024 bits, signed and unsigned.
//!
//! [`WideInt`] behaves like a native machine integer of its width: wrapping
//! two's-complement arithmetic, the full operator set, and implicit promotion
//! against native integers, floats and other widths (see [`promote`]).
//!
//! ```
//! use wide::{Int256, UInt128, UInt512};
//!
//! let a = UInt512::from(7u8) << 300u32;
//! let b = a / 7u8;
//! assert_eq!(b, UInt512::ONE << 300u32);
//!
//! let c = Int256::from(-5i32) + 2u8;
//! assert_eq!(c.to_string(), "-3");
//!
//! let d: UInt128 = "0xffffffff".parse().unwrap();
//! assert_eq!(d, u32::MAX);
//! ```

mod arith;
mod bits;
mod cmp;
mod convert;
mod div;
mod error;
mod fmt;
mod int;
pub mod limbs;
mod num;
mod ops;
mod parse;
pub mod promote;
#[cfg(feature = "serde")]
mod serde;
mod sign;

pub use error::WideIntError;
pub use int::{Int1024, Int128, Int256, Int512, UInt1024, UInt128, UInt256, UInt512, WideInt};
pub use ops::{ArithmeticOps, IntegralOps};
pub use promote::{CommonType, Promote};
pub use sign::{Signed, Signedness, Unsigned};
