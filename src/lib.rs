//! Arbitrary-precision `Natural`/`Integer`/`Rational` arithmetic built on a
//! schoolbook digit-array core.
//!
//! No Karatsuba or FFT multiplication, no modular/Montgomery arithmetic, no
//! thread-safe shared mutation, no persistent on-disk representation, no
//! locale-aware parsing - a straightforward, correct kernel rather than a
//! performance-tuned one.

mod digit;
mod error;
mod format;
mod integer;
mod natural;
mod rational;

pub use error::{BignumError, Result};
pub use format::{render_integer as format_integer, render_natural as format_natural,
    render_rational as format_rational, FormatSpec};
pub use integer::Integer;
pub use natural::Natural;
pub use rational::Rational;
