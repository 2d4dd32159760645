//! Error type shared by every fallible kernel of [`BigInt`](crate::BigInt).

use thiserror::Error;

/// The three ways an operation on a [`BigInt`](crate::BigInt) can be misused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BigIntError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("value does not fit in an i64")]
    ConversionOverflow,

    #[error("cannot shift by a negative amount ({amount})")]
    NegativeShift { amount: i64 },
}

pub type Result<T> = std::result::Result<T, BigIntError>;
