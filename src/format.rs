//! Radix-aware rendering, the Rust re-expression of the original C++
//! library's stream-flag-configured formatting (`std::ios::hex`,
//! `std::ios::uppercase`, `std::ios::showbase`). `Display` can't carry that
//! ambient state itself, so callers who need a non-default base go through
//! [`FormatSpec`] and [`render_natural`] explicitly.

use crate::digit;
use crate::integer::Integer;
use crate::natural::Natural;
use crate::rational::Rational;

/// Rendering options: base, digit case, and whether to emit a `0x`/`0`
/// prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatSpec {
    pub base: u32,
    pub uppercase: bool,
    pub show_base: bool,
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec {
            base: 10,
            uppercase: false,
            show_base: false,
        }
    }
}

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Render a `Natural` per `spec`, peeling off least-significant output
/// digits via repeated single-digit division.
pub fn render_natural(n: &Natural, spec: &FormatSpec) -> String {
    let table = if spec.uppercase {
        DIGITS_UPPER
    } else {
        DIGITS_LOWER
    };

    let prefix = if spec.show_base {
        match spec.base {
            16 if spec.uppercase => "0X",
            16 => "0x",
            8 => "0",
            _ => "",
        }
    } else {
        ""
    };

    if n.is_zero() {
        return format!("{prefix}0");
    }

    let mut digits_out = Vec::new();
    let mut cur = n.as_slice().to_vec();
    while digit::canonical_len(&cur) > 0 {
        let mut r = vec![0u32; cur.len()];
        let (len, rem) = digit::divmod1(&mut r, &cur, spec.base);
        r.truncate(len);
        digits_out.push(table[rem as usize]);
        cur = r;
    }
    digits_out.reverse();

    let mut out = String::with_capacity(prefix.len() + digits_out.len());
    out.push_str(prefix);
    out.push_str(std::str::from_utf8(&digits_out).expect("digit table is ASCII"));
    out
}

/// Render an `Integer` per `spec`: an optional `-` sign ahead of the
/// magnitude's rendering.
pub fn render_integer(v: &Integer, spec: &FormatSpec) -> String {
    if v.is_negative() {
        format!("-{}", render_natural(v.magnitude(), spec))
    } else {
        render_natural(v.magnitude(), spec)
    }
}

/// Render a `Rational` per `spec`: `num/denom`, with the sign carried on
/// the numerator only, and `spec` applied to both parts.
pub fn render_rational(v: &Rational, spec: &FormatSpec) -> String {
    let (num, denom) = v.to_parts();
    format!(
        "{}/{}",
        render_integer(&num, spec),
        render_natural(&denom, spec)
    )
}
