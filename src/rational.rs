//! Arbitrary-precision exact fraction over [`Integer`].
//!
//! Always stored reduced, with a positive denominator - the original C++
//! library's `rational` keeps the same invariant (see `rational.cpp`'s
//! constructor, which normalizes sign and divides through by the gcd on
//! every construction rather than lazily).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{BignumError, Result};
use crate::integer::Integer;
use crate::natural::Natural;

/// A reduced fraction `num / denom`, `denom > 0`, `gcd(|num|, denom) == 1`.
#[derive(Clone, Debug)]
pub struct Rational {
    num: Integer,
    denom: Integer,
}

impl Rational {
    pub fn zero() -> Self {
        Rational {
            num: Integer::zero(),
            denom: Integer::from_u64(1),
        }
    }

    /// Build a reduced `Rational` from a raw numerator/denominator pair.
    /// Fails with `DivideByZero` if `denom` is zero.
    pub fn normalize(num: Integer, denom: Integer) -> Result<Self> {
        if denom.is_zero() {
            return Err(BignumError::DivideByZero);
        }
        let (num, denom) = if denom.is_negative() {
            (num.neg(), denom.neg())
        } else {
            (num, denom)
        };
        if num.is_zero() {
            return Ok(Rational {
                num,
                denom: Integer::from_u64(1),
            });
        }
        let g = num.magnitude().gcd(denom.magnitude());
        if g == Natural::from_u64(1) {
            return Ok(Rational { num, denom });
        }
        let num_mag = num
            .magnitude()
            .div_rem(&g)
            .expect("gcd of nonzero denom is nonzero")
            .0;
        let denom_mag = denom
            .magnitude()
            .div_rem(&g)
            .expect("gcd of nonzero denom is nonzero")
            .0;
        Ok(Rational {
            num: Integer::from_parts(num.is_negative(), num_mag),
            denom: Integer::from_parts(false, denom_mag),
        })
    }

    pub fn from_integer(v: Integer) -> Self {
        Rational {
            num: v,
            denom: Integer::from_u64(1),
        }
    }

    pub fn to_parts(&self) -> (Integer, Natural) {
        (self.num.clone(), self.denom.magnitude().clone())
    }

    pub fn numer(&self) -> &Integer {
        &self.num
    }

    pub fn denom(&self) -> &Integer {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn add(&self, other: &Rational) -> Result<Rational> {
        let num = self.num.mul(&other.denom).add(&other.num.mul(&self.denom));
        let denom = self.denom.mul(&other.denom);
        Rational::normalize(num, denom)
    }

    pub fn sub(&self, other: &Rational) -> Result<Rational> {
        let num = self.num.mul(&other.denom).sub(&other.num.mul(&self.denom));
        let denom = self.denom.mul(&other.denom);
        Rational::normalize(num, denom)
    }

    pub fn mul(&self, other: &Rational) -> Result<Rational> {
        let num = self.num.mul(&other.num);
        let denom = self.denom.mul(&other.denom);
        Rational::normalize(num, denom)
    }

    pub fn div(&self, other: &Rational) -> Result<Rational> {
        if other.num.is_zero() {
            return Err(BignumError::DivideByZero);
        }
        let num = self.num.mul(&other.denom);
        let denom = self.denom.mul(&other.num);
        Rational::normalize(num, denom)
    }

    pub fn neg(&self) -> Rational {
        Rational {
            num: self.num.neg(),
            denom: self.denom.clone(),
        }
    }

    pub fn cmp_to(&self, other: &Rational) -> Ordering {
        let lhs = self.num.mul(&other.denom);
        let rhs = other.num.mul(&self.denom);
        lhs.cmp_to(&rhs)
    }

    /// Exact conversion from an `f64`, per the IEEE-754 bit layout: sign,
    /// 11-bit biased exponent, 52-bit fraction. NaN/Inf (exponent field
    /// `0x7FF`) is rejected as `NotANumber`.
    pub fn from_f64(v: f64) -> Result<Rational> {
        let bits = v.to_bits();
        let sign = (bits >> 63) & 1 == 1;
        let exp_field = ((bits >> 52) & 0x7FF) as i64;
        let frac = bits & ((1u64 << 52) - 1);

        if exp_field == 0x7FF {
            return Err(BignumError::NotANumber);
        }

        if exp_field == 0 && frac == 0 {
            return Ok(Rational::zero());
        }

        let (mantissa, exp): (u64, i64) = if exp_field == 0 {
            // Denormal: implicit leading bit is 0, unbiased exponent is -1022.
            (frac, -1022 - 52)
        } else {
            (frac | (1u64 << 52), exp_field - 1023 - 52)
        };

        let mantissa_nat = Natural::from_u64(mantissa);
        let (num_mag, denom_mag) = if exp >= 0 {
            (mantissa_nat.shl(exp as u64), Natural::from_u64(1))
        } else {
            (mantissa_nat, Natural::from_u64(1).shl((-exp) as u64))
        };

        let num = Integer::from_parts(sign, num_mag);
        let denom = Integer::from_parts(false, denom_mag);
        Rational::normalize(num, denom)
    }

    /// Inverse of [`from_f64`]: scales `num`/`denom` until the significand
    /// occupies exactly 53 bits, then assembles the IEEE-754 bit pattern.
    pub fn to_f64(&self) -> Result<f64> {
        if self.is_zero() {
            return Ok(0.0);
        }

        let num_mag = self.num.magnitude();
        let denom_mag = self.denom.magnitude();
        let mut exp: i64 = 0;

        // Bring the quotient's bit length down to 54 bits (one guard bit
        // above the 53-bit significand) before doing integer division, and
        // back up if it's too small, tracking the net shift as `exp`.
        let n_bits = num_mag.bit_length() as i64;
        let d_bits = denom_mag.bit_length() as i64;
        let diff = n_bits - d_bits;

        let (mut n, d) = (num_mag.clone(), denom_mag.clone());
        // Scaling n by 2^k shifts the quotient by the same factor, so
        // bringing n's relative bit count to 54 via a right shift by s
        // raises the tracked exponent by s (the quotient shrank), and via a
        // left shift lowers it by s (the quotient grew) - same convention
        // as the sig-normalization shifts just below.
        let n = if diff > 54 {
            let s1 = (diff - 54) as u64;
            exp += s1 as i64;
            n.shr(s1)
        } else if diff < 54 {
            let s2 = (54 - diff) as u64;
            exp -= s2 as i64;
            n.shl(s2)
        } else {
            std::mem::take(&mut n)
        };

        let (mut sig, _) = n.div_rem(&d)?;
        // sig now has bit length 53 or 54; normalize to exactly 54 bits so
        // we can round at the bottom bit.
        let sig_bits = sig.bit_length() as i64;
        if sig_bits > 54 {
            let s = (sig_bits - 54) as u64;
            sig = sig.shr(s);
            exp += s as i64;
        } else if sig_bits < 54 && sig_bits > 0 {
            let s = (54 - sig_bits) as u64;
            sig = sig.shl(s);
            exp -= s as i64;
        }

        // Round to 53 bits (shift out the guard bit), then renormalize if
        // rounding carried into bit 54.
        let round_up = sig.is_odd();
        sig = sig.shr(1);
        exp += 1;
        if round_up {
            sig = sig.add(&Natural::from_u64(1));
        }
        if sig.bit_length() > 53 {
            sig = sig.shr(1);
            exp += 1;
        }

        let biased_exp = 52 + exp + 1023;
        if biased_exp >= 2047 {
            return Err(BignumError::Overflow);
        }
        if biased_exp <= 0 {
            return Err(BignumError::Underflow);
        }

        let mantissa = sig.to_u64()? & ((1u64 << 52) - 1);
        let mut bits = (biased_exp as u64) << 52 | mantissa;
        if self.num.is_negative() {
            bits |= 1u64 << 63;
        }
        Ok(f64::from_bits(bits))
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_to(other) == Ordering::Equal
    }
}
impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_to(other))
    }
}
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_to(other)
    }
}

impl FromStr for Rational {
    type Err = BignumError;

    /// Parses `"num/denom"` or a bare integer (denominator defaults to 1).
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((n, d)) => {
                let num: Integer = n.parse()?;
                let denom: Integer = d.parse()?;
                Rational::normalize(num, denom)
            }
            None => {
                let num: Integer = s.parse()?;
                Ok(Rational::from_integer(num))
            }
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            crate::format::render_rational(self, &crate::format::FormatSpec::default())
        )
    }
}
