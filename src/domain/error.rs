//! Domain validation errors for the settlement engine.
//!
//! These errors are returned by `try_new` constructors when an input breaks a
//! domain rule, and by settlement when the results card is incomplete.
//!
//! # Examples
//!
//! ```
//! use luckybet::domain::error::DomainError;
//! use luckybet::domain::odds::Odds;
//!
//! // A zero `to` side has no implied probability
//! let result = Odds::try_new(5, 0);
//!
//! assert!(matches!(result, Err(DomainError::InvalidOdds { .. })));
//! ```

use num_bigint::BigInt;
use num_rational::BigRational;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Fractional odds need `at >= 0` and `to > 0`.
    #[error("invalid odds {at}:{to}: `at` must be >= 0 and `to` must be > 0")]
    InvalidOdds {
        /// The `at` side that was provided.
        at: BigInt,
        /// The `to` side that was provided.
        to: BigInt,
    },

    /// Odds text that is not of the form `at:to`.
    #[error("malformed odds '{input}': expected `at:to`, e.g. 5:1")]
    MalformedOdds {
        /// The text that failed to parse.
        input: String,
    },

    /// An implied probability must lie in (0, 1].
    #[error("probability {probability} is outside (0, 1]")]
    InvalidProbability {
        /// The out-of-range probability.
        probability: BigRational,
    },

    /// Each-way terms need a divisor and a place count of at least 1.
    #[error("invalid each-way terms 1/{odds_divisor} to place {max_place}: both must be >= 1")]
    InvalidEachWay {
        /// The odds divisor that was provided.
        odds_divisor: u32,
        /// The number of paying places that was provided.
        max_place: u32,
    },

    /// Finishing positions start at 1.
    #[error("invalid finishing place {place} for '{name}': places start at 1")]
    InvalidPlace {
        /// Selection name.
        name: String,
        /// The invalid place.
        place: u32,
    },

    /// A selection has no entry on the results card.
    #[error("no finishing place recorded for '{name}'")]
    MissingPlace {
        /// Selection name.
        name: String,
    },

    /// Stakes cannot be negative.
    #[error("stake must be >= 0, got {stake}")]
    NegativeStake {
        /// The negative stake.
        stake: BigRational,
    },

    /// An exact amount too large to express as a currency value.
    #[error("amount {amount} is too large to express in currency")]
    AmountOutOfRange {
        /// The amount that could not be converted.
        amount: BigRational,
    },
}
