use thiserror::Error;

/// Errors from wide-integer division and parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WideIntError {
    /// Division or remainder with a zero divisor. The `/` and `%` operators
    /// panic with this message instead of returning it.
    #[error("attempt to divide by zero")]
    DivisionByZero,

    #[error("cannot parse integer from empty string")]
    Empty,

    /// A character that is not a digit of the radix (or a misplaced sign).
    #[error("invalid digit {ch:?} at byte {index}")]
    InvalidDigit { ch: char, index: usize },

    #[error("radix {0} is not in 2..=36")]
    InvalidRadix(u32),
}
