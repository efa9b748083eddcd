//! Prime-field elements used by constrained arithmetic backends.
//!
//! Coordinates computed on such a backend arrive as residues modulo
//! [`PRIME_DECIMAL`]. Residues above half the modulus stand for negative
//! integers, so `0 - 1` arrives as `P - 1` and reads back as `-1`.

use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
    sync::OnceLock,
};

use num_bigint::BigUint;
use num_traits::{Num, One, ToPrimitive, Zero};

use crate::TransformError;

/// Decimal rendering of the field modulus `2^251 + 17 * 2^192 + 1`.
pub const PRIME_DECIMAL: &str =
    "3618502788666131213697322783095070105623107215331596699973092056135872020481";

/// Field modulus.
pub fn prime() -> &'static BigUint {
    static PRIME: OnceLock<BigUint> = OnceLock::new();
    PRIME.get_or_init(|| {
        (BigUint::one() << 251u32) + (BigUint::from(17u32) << 192u32) + BigUint::one()
    })
}

/// Largest residue that still reads as a non-negative integer.
pub fn prime_half() -> &'static BigUint {
    static PRIME_HALF: OnceLock<BigUint> = OnceLock::new();
    PRIME_HALF.get_or_init(|| prime() >> 1u32)
}

/// Integer modulo the field prime, always stored in canonical `[0, P)` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Felt(BigUint);

impl Felt {
    /// Additive identity.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Reduces an arbitrary unsigned integer into the field.
    #[must_use]
    pub fn from_biguint(value: BigUint) -> Self {
        if &value < prime() {
            Self(value)
        } else {
            Self(value % prime())
        }
    }

    /// Embeds a signed integer, mapping negatives to the upper half of the field.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        let magnitude = Self(BigUint::from(value.unsigned_abs()));
        if value < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Canonical residue in `[0, P)`.
    #[must_use]
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Reports whether the residue reads as a negative integer.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        &self.0 > prime_half()
    }

    /// Signed reading of the residue, if it fits in `i64`.
    #[must_use]
    pub fn to_signed(&self) -> Option<i64> {
        if self.is_negative() {
            let magnitude = (prime() - &self.0).to_i128()?;
            i64::try_from(-magnitude).ok()
        } else {
            self.0.to_i64()
        }
    }

    /// Signed reading clamped to the `i64` range.
    #[must_use]
    pub fn to_signed_saturating(&self) -> i64 {
        match self.to_signed() {
            Some(value) => value,
            None if self.is_negative() => i64::MIN,
            None => i64::MAX,
        }
    }
}

impl Default for Felt {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Felt {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Felt {
    type Err = TransformError;

    /// Parses a decimal or `0x`-prefixed hexadecimal literal, optionally negated.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || TransformError::InvalidFieldElement(value.to_owned());
        let trimmed = value.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (radix, digits) = match unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
        {
            Some(hex) => (16, hex),
            None => (10, unsigned),
        };
        if digits.is_empty() {
            return Err(invalid());
        }

        let parsed = BigUint::from_str_radix(digits, radix).map_err(|_| invalid())?;
        let magnitude = Self::from_biguint(parsed);
        Ok(if negative { -magnitude } else { magnitude })
    }
}

impl Add<&Felt> for &Felt {
    type Output = Felt;

    fn add(self, rhs: &Felt) -> Felt {
        Felt::from_biguint(&self.0 + &rhs.0)
    }
}

impl Sub<&Felt> for &Felt {
    type Output = Felt;

    fn sub(self, rhs: &Felt) -> Felt {
        if self.0 >= rhs.0 {
            Felt(&self.0 - &rhs.0)
        } else {
            Felt(prime() - &rhs.0 + &self.0)
        }
    }
}

impl Mul<&Felt> for &Felt {
    type Output = Felt;

    fn mul(self, rhs: &Felt) -> Felt {
        Felt::from_biguint(&self.0 * &rhs.0)
    }
}

impl Neg for &Felt {
    type Output = Felt;

    fn neg(self) -> Felt {
        if self.0.is_zero() {
            Felt::zero()
        } else {
            Felt(prime() - &self.0)
        }
    }
}

impl Add for Felt {
    type Output = Felt;

    fn add(self, rhs: Felt) -> Felt {
        &self + &rhs
    }
}

impl Sub for Felt {
    type Output = Felt;

    fn sub(self, rhs: Felt) -> Felt {
        &self - &rhs
    }
}

impl Mul for Felt {
    type Output = Felt;

    fn mul(self, rhs: Felt) -> Felt {
        &self * &rhs
    }
}

impl Neg for Felt {
    type Output = Felt;

    fn neg(self) -> Felt {
        -&self
    }
}
