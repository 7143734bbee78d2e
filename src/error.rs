//! Error taxonomy for fallible operations across all three numeric domains.
//!
//! Every failure here has a locally-detectable precondition; none are
//! recovered internally.

/// The complete set of ways a `Natural`/`Integer`/`Rational` operation can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BignumError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("divide by zero")]
    DivideByZero,

    #[error("not a number")]
    NotANumber,

    #[error("overflow")]
    Overflow,

    #[error("underflow")]
    Underflow,

    #[error("range error: {0}")]
    RangeError(String),
}

pub type Result<T> = std::result::Result<T, BignumError>;
