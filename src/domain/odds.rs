//! Fractional odds backed by exact rational probabilities.
//!
//! Odds of `at:to` imply a win probability of `to / (at + to)`. The pair is
//! always stored in lowest terms, re-derived from the reduced probability, so
//! `2:4` and `1:2` are the same value.
//!
//! ```
//! use luckybet::domain::odds::Odds;
//!
//! let odds: Odds = "2:4".parse().unwrap();
//! assert_eq!(odds.to_string(), "1:2");
//! ```

use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::error::DomainError;

/// Fractional `at:to` odds with their implied probability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Odds {
    at: BigInt,
    to: BigInt,
    probability: BigRational,
}

impl Odds {
    /// Create odds from an `at:to` pair.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidOdds`] if `at < 0` or `to <= 0`.
    pub fn try_new(at: impl Into<BigInt>, to: impl Into<BigInt>) -> Result<Self, DomainError> {
        let (at, to) = (at.into(), to.into());
        if at.is_negative() || !to.is_positive() {
            return Err(DomainError::InvalidOdds { at, to });
        }

        let probability = BigRational::new(to.clone(), at + to);
        Ok(Self::from_reduced(probability))
    }

    /// Create odds from an exact implied probability.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidProbability`] unless `0 < probability <= 1`.
    pub fn from_probability(probability: BigRational) -> Result<Self, DomainError> {
        if !probability.is_positive() || probability > BigRational::one() {
            return Err(DomainError::InvalidProbability { probability });
        }
        Ok(Self::from_reduced(probability))
    }

    /// `probability` is already reduced and within (0, 1].
    fn from_reduced(probability: BigRational) -> Self {
        let to = probability.numer().clone();
        let at = probability.denom() - &to;
        Self {
            at,
            to,
            probability,
        }
    }

    /// The `at` side in lowest terms.
    #[must_use]
    pub fn at(&self) -> &BigInt {
        &self.at
    }

    /// The `to` side in lowest terms.
    #[must_use]
    pub fn to(&self) -> &BigInt {
        &self.to
    }

    /// Implied probability `to / (at + to)`.
    #[must_use]
    pub fn probability(&self) -> &BigRational {
        &self.probability
    }

    /// Return per unit staked when the selection wins (decimal odds).
    #[must_use]
    pub fn payout_multiplier(&self) -> BigRational {
        self.probability.recip()
    }

    /// Odds of two independent outcomes both happening.
    #[must_use]
    pub fn combine(&self, other: &Odds) -> Odds {
        Self::from_reduced(&self.probability * &other.probability)
    }

    /// Same `at` against `to * factor`. `factor` is at least 1.
    pub(crate) fn scale_to(&self, factor: u32) -> Odds {
        let to = &self.to * BigInt::from(factor);
        let total = &self.at + &to;
        Self::from_reduced(BigRational::new(to, total))
    }

    /// True for odds-on-certain `0:1`.
    #[must_use]
    pub fn is_certain(&self) -> bool {
        self.at.is_zero()
    }
}

impl Mul for Odds {
    type Output = Odds;

    fn mul(self, rhs: Odds) -> Odds {
        self.combine(&rhs)
    }
}

impl Mul<&Odds> for &Odds {
    type Output = Odds;

    fn mul(self, rhs: &Odds) -> Odds {
        self.combine(rhs)
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.at, self.to)
    }
}

impl FromStr for Odds {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DomainError::MalformedOdds {
            input: s.to_string(),
        };

        let (at, to) = s.split_once(':').ok_or_else(malformed)?;
        let at: BigInt = at.trim().parse().map_err(|_| malformed())?;
        let to: BigInt = to.trim().parse().map_err(|_| malformed())?;
        Self::try_new(at, to)
    }
}
