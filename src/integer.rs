//! Arbitrary-precision signed integer: a sign bit over a `Natural` magnitude.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{BignumError, Result};
use crate::natural::Natural;

/// A signed arbitrary-precision integer, stored as sign + magnitude. Zero
/// always has `negative == false` (single zero representation).
#[derive(Clone, Debug)]
pub struct Integer {
    negative: bool,
    magnitude: Natural,
}

/// Forces the canonical zero sign.
fn normalize(negative: bool, magnitude: Natural) -> Integer {
    let negative = negative && !magnitude.is_zero();
    Integer { negative, magnitude }
}

impl Integer {
    pub fn zero() -> Self {
        Integer {
            negative: false,
            magnitude: Natural::zero(),
        }
    }

    pub fn from_parts(negative: bool, magnitude: Natural) -> Self {
        normalize(negative, magnitude)
    }

    pub fn from_u64(v: u64) -> Self {
        Integer {
            negative: false,
            magnitude: Natural::from_u64(v),
        }
    }

    pub fn from_i64(v: i64) -> Self {
        if v >= 0 {
            Integer {
                negative: false,
                magnitude: Natural::from_u64(v as u64),
            }
        } else {
            Integer {
                negative: true,
                magnitude: Natural::from_u64(v.unsigned_abs()),
            }
        }
    }

    pub fn magnitude(&self) -> &Natural {
        &self.magnitude
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_positive(&self) -> bool {
        !self.negative && !self.magnitude.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn signum(&self) -> i32 {
        if self.magnitude.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    pub fn abs(&self) -> Integer {
        Integer {
            negative: false,
            magnitude: self.magnitude.clone(),
        }
    }

    pub fn neg(&self) -> Integer {
        normalize(!self.negative, self.magnitude.clone())
    }

    pub fn add(&self, other: &Integer) -> Integer {
        if self.negative == other.negative {
            normalize(self.negative, self.magnitude.add(&other.magnitude))
        } else {
            match self.magnitude.cmp_to(&other.magnitude) {
                Ordering::Equal => Integer::zero(),
                Ordering::Greater => normalize(
                    self.negative,
                    self.magnitude
                        .checked_sub(&other.magnitude)
                        .expect("magnitude comparison guarantees no underflow"),
                ),
                Ordering::Less => normalize(
                    other.negative,
                    other
                        .magnitude
                        .checked_sub(&self.magnitude)
                        .expect("magnitude comparison guarantees no underflow"),
                ),
            }
        }
    }

    pub fn sub(&self, other: &Integer) -> Integer {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &Integer) -> Integer {
        normalize(
            self.negative != other.negative,
            self.magnitude.mul(&other.magnitude),
        )
    }

    /// Truncating division + remainder; the remainder takes the dividend's
    /// sign (matching spec.md §4.3's C-style truncation rule).
    pub fn div_rem(&self, other: &Integer) -> Result<(Integer, Integer)> {
        let (q, r) = self.magnitude.div_rem(&other.magnitude)?;
        let q = normalize(self.negative != other.negative, q);
        let r = normalize(self.negative, r);
        Ok((q, r))
    }

    pub fn shl(&self, bits: u64) -> Integer {
        normalize(self.negative, self.magnitude.shl(bits))
    }

    pub fn shr(&self, bits: u64) -> Integer {
        normalize(self.negative, self.magnitude.shr(bits))
    }

    pub fn cmp_to(&self, other: &Integer) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.magnitude.cmp_to(&other.magnitude),
            (true, true) => other.magnitude.cmp_to(&self.magnitude),
            (false, true) => {
                if self.magnitude.is_zero() && other.magnitude.is_zero() {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
            (true, false) => {
                if self.magnitude.is_zero() && other.magnitude.is_zero() {
                    Ordering::Equal
                } else {
                    Ordering::Less
                }
            }
        }
    }

    /// Narrows to `i64`. Fails with `Overflow` once the magnitude needs the
    /// sign bit - i.e. `i64::MIN`'s magnitude (`2^63`) is rejected, not
    /// accepted as a special case.
    pub fn to_i64(&self) -> Result<i64> {
        if self.magnitude.bit_length() > 63 {
            return Err(BignumError::Overflow);
        }
        let m = self.magnitude.to_u64()? as i64;
        Ok(if self.negative { -m } else { m })
    }

    pub fn to_i32(&self) -> Result<i32> {
        if self.magnitude.bit_length() > 31 {
            return Err(BignumError::Overflow);
        }
        let m = self.magnitude.to_u32()? as i32;
        Ok(if self.negative { -m } else { m })
    }

    pub fn to_i128(&self) -> Result<i128> {
        if self.magnitude.bit_length() > 127 {
            return Err(BignumError::Overflow);
        }
        let m = self.magnitude.to_u128()? as i128;
        Ok(if self.negative { -m } else { m })
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_to(other) == Ordering::Equal
    }
}
impl Eq for Integer {}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_to(other))
    }
}
impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_to(other)
    }
}

impl std::ops::Add for &Integer {
    type Output = Integer;
    fn add(self, rhs: &Integer) -> Integer {
        Integer::add(self, rhs)
    }
}

impl std::ops::Sub for &Integer {
    type Output = Integer;
    fn sub(self, rhs: &Integer) -> Integer {
        Integer::sub(self, rhs)
    }
}

impl std::ops::Mul for &Integer {
    type Output = Integer;
    fn mul(self, rhs: &Integer) -> Integer {
        Integer::mul(self, rhs)
    }
}

impl std::ops::Neg for &Integer {
    type Output = Integer;
    fn neg(self) -> Integer {
        Integer::neg(self)
    }
}

impl Default for Integer {
    fn default() -> Self {
        Integer::zero()
    }
}

impl FromStr for Integer {
    type Err = BignumError;

    fn from_str(s: &str) -> Result<Self> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let magnitude: Natural = rest.parse()?;
        Ok(normalize(negative, magnitude))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            crate::format::render_integer(self, &crate::format::FormatSpec::default())
        )
    }
}
