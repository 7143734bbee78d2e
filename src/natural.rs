//! Arbitrary-precision unsigned integer.
//!
//! Small values (up to `S` digits) live inline; larger values fall back to a
//! heap-allocated `Vec<Digit>`. This mirrors the original C++ library's
//! `small_digits_`/`large_digits_` split (see `natural.cpp`'s `reserve` and
//! `expand` methods) but as a safe Rust enum instead of a raw-pointer union.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::digit::{self, Digit};
use crate::error::{BignumError, Result};

/// Inline capacity before a `Natural` spills to the heap.
const S: usize = 16;

#[derive(Clone, Debug)]
enum Store {
    Inline { buf: [Digit; S], len: u8 },
    Heap(Vec<Digit>),
}

/// An arbitrary-precision unsigned integer.
#[derive(Clone, Debug)]
pub struct Natural {
    store: Store,
}

impl Natural {
    pub fn zero() -> Self {
        Natural {
            store: Store::Inline {
                buf: [0; S],
                len: 0,
            },
        }
    }

    /// Build a `Natural` from a canonical-or-not digit vector, choosing
    /// inline or heap storage based on the canonical length.
    fn from_raw(mut digits: Vec<Digit>) -> Self {
        let len = digit::canonical_len(&digits);
        digits.truncate(len);
        if len <= S {
            let mut buf = [0 as Digit; S];
            buf[..len].copy_from_slice(&digits);
            Natural {
                store: Store::Inline {
                    buf,
                    len: len as u8,
                },
            }
        } else {
            Natural {
                store: Store::Heap(digits),
            }
        }
    }

    pub fn as_slice(&self) -> &[Digit] {
        match &self.store {
            Store::Inline { buf, len } => &buf[..*len as usize],
            Store::Heap(v) => v.as_slice(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_even(&self) -> bool {
        match self.as_slice().first() {
            Some(d) => d & 1 == 0,
            None => true,
        }
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    pub fn bit_length(&self) -> u64 {
        digit::bit_length(self.as_slice())
    }

    pub fn from_u64(v: u64) -> Self {
        if v == 0 {
            return Self::zero();
        }
        let lo = v as Digit;
        let hi = (v >> digit::DIGIT_BITS) as Digit;
        if hi == 0 {
            Self::from_raw(vec![lo])
        } else {
            Self::from_raw(vec![lo, hi])
        }
    }

    pub fn from_u128(v: u128) -> Self {
        let mut digits = Vec::with_capacity(4);
        let mut v = v;
        while v != 0 {
            digits.push(v as Digit);
            v >>= digit::DIGIT_BITS;
        }
        Self::from_raw(digits)
    }

    pub fn to_u32(&self) -> Result<u32> {
        if self.bit_length() > 32 {
            return Err(BignumError::Overflow);
        }
        Ok(*self.as_slice().first().unwrap_or(&0))
    }

    pub fn to_u64(&self) -> Result<u64> {
        if self.bit_length() > 64 {
            return Err(BignumError::Overflow);
        }
        let d = self.as_slice();
        let lo = *d.first().unwrap_or(&0) as u64;
        let hi = *d.get(1).unwrap_or(&0) as u64;
        Ok(lo | (hi << digit::DIGIT_BITS))
    }

    pub fn to_u128(&self) -> Result<u128> {
        if self.bit_length() > 128 {
            return Err(BignumError::Overflow);
        }
        let d = self.as_slice();
        let mut acc: u128 = 0;
        for (i, &digit) in d.iter().enumerate() {
            acc |= (digit as u128) << (digit::DIGIT_BITS as usize * i);
        }
        Ok(acc)
    }

    pub fn cmp_to(&self, other: &Natural) -> Ordering {
        digit::cmp(self.as_slice(), other.as_slice())
    }

    pub fn add(&self, other: &Natural) -> Natural {
        let a = self.as_slice();
        let b = other.as_slice();
        let mut r = vec![0 as Digit; a.len().max(b.len()) + 1];
        let len = digit::add(&mut r, a, b);
        r.truncate(len);
        Natural::from_raw(r)
    }

    /// `self - other`; fails with `RangeError` if `other > self`, matching
    /// spec.md §7's mapping of natural-number underflow.
    pub fn checked_sub(&self, other: &Natural) -> Result<Natural> {
        let a = self.as_slice();
        let b = other.as_slice();
        if digit::cmp(a, b) == Ordering::Less {
            return Err(BignumError::RangeError(
                "subtraction would underflow a Natural".into(),
            ));
        }
        let mut r = vec![0 as Digit; a.len()];
        let len = digit::sub(&mut r, a, b);
        r.truncate(len);
        Ok(Natural::from_raw(r))
    }

    pub fn mul(&self, other: &Natural) -> Natural {
        let a = self.as_slice();
        let b = other.as_slice();
        if a.is_empty() || b.is_empty() {
            return Natural::zero();
        }
        let mut r = vec![0 as Digit; a.len() + b.len()];
        let len = digit::mul(&mut r, a, b);
        r.truncate(len);
        Natural::from_raw(r)
    }

    /// Multiply by a single digit; used internally by parsing/formatting.
    fn mul_small(&self, v: Digit) -> Natural {
        let a = self.as_slice();
        let mut r = vec![0 as Digit; a.len() + 1];
        let len = digit::mul1(&mut r, a, v);
        r.truncate(len);
        Natural::from_raw(r)
    }

    /// Add a single digit; used internally by parsing.
    fn add_small(&self, v: Digit) -> Natural {
        self.add(&Natural::from_raw(vec![v]))
    }

    pub fn shl(&self, bits: u64) -> Natural {
        if self.is_zero() || bits == 0 {
            return self.clone();
        }
        let k_digits = (bits / digit::DIGIT_BITS as u64) as usize;
        let k_bits = (bits % digit::DIGIT_BITS as u64) as u32;
        let a = self.as_slice();
        let mut r = vec![0 as Digit; a.len() + k_digits + 1];
        let len = digit::shl(&mut r, a, k_digits, k_bits);
        r.truncate(len);
        Natural::from_raw(r)
    }

    pub fn shr(&self, bits: u64) -> Natural {
        if self.is_zero() || bits == 0 {
            return self.clone();
        }
        let k_digits = (bits / digit::DIGIT_BITS as u64) as usize;
        let k_bits = (bits % digit::DIGIT_BITS as u64) as u32;
        let a = self.as_slice();
        if k_digits >= a.len() {
            return Natural::zero();
        }
        let mut r = vec![0 as Digit; a.len() - k_digits];
        let len = digit::shr(&mut r, a, k_digits, k_bits);
        r.truncate(len);
        Natural::from_raw(r)
    }

    /// Combined division, the original library's primary entry point;
    /// `/` and `%` are derived from this to avoid a second division.
    pub fn div_rem(&self, other: &Natural) -> Result<(Natural, Natural)> {
        if other.is_zero() {
            return Err(BignumError::DivideByZero);
        }
        let (q, r) = digit::divmod(self.as_slice(), other.as_slice());
        Ok((Natural::from_raw(q), Natural::from_raw(r)))
    }

    /// Greatest common divisor via Euclid's algorithm, exactly the loop in
    /// the original `natural::gcd` (two fused in-place modulus operations).
    pub fn gcd(&self, other: &Natural) -> Natural {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let (_, r) = digit::divmod(a.as_slice(), b.as_slice());
            a = b;
            b = Natural::from_raw(r);
        }
        a
    }
}

impl PartialEq for Natural {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_to(other) == Ordering::Equal
    }
}
impl Eq for Natural {}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_to(other))
    }
}
impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_to(other)
    }
}

impl std::ops::Add for &Natural {
    type Output = Natural;
    fn add(self, rhs: &Natural) -> Natural {
        Natural::add(self, rhs)
    }
}

impl std::ops::Mul for &Natural {
    type Output = Natural;
    fn mul(self, rhs: &Natural) -> Natural {
        Natural::mul(self, rhs)
    }
}

impl Default for Natural {
    fn default() -> Self {
        Natural::zero()
    }
}

/// Hex/octal/decimal digit value, case-insensitive; `None` if out of range
/// for the given base.
fn digit_value(c: char, base: u32) -> Option<Digit> {
    let v = c.to_digit(base)?;
    Some(v as Digit)
}

impl FromStr for Natural {
    type Err = BignumError;

    /// Parses the grammar from spec.md §6: an optional `0x`/`0X` (base 16)
    /// or leading `0` (base 8) prefix, else base 10.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(BignumError::InvalidArgument("empty string".into()));
        }

        let (body, base) = if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            (rest, 16)
        } else if s.len() > 1 && s.starts_with('0') {
            (&s[1..], 8)
        } else {
            (s, 10)
        };

        if body.is_empty() {
            return Err(BignumError::InvalidArgument(format!(
                "no digits in {s:?}"
            )));
        }

        let mut acc = Natural::zero();
        for c in body.chars() {
            let d = digit_value(c, base)
                .ok_or_else(|| BignumError::InvalidArgument(format!("invalid digit {c:?} in {s:?}")))?;
            acc = acc.mul_small(base as Digit).add_small(d);
        }
        Ok(acc)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::render_natural(self, &crate::format::FormatSpec::default()))
    }
}
