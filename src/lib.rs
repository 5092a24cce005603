//! Luckybet - exact settlement of each-way Lucky bets.
//!
//! A Lucky bet covers every combination of its selections, singles up to the
//! full accumulator, each staked each-way. This crate settles such bets from
//! fractional odds, each-way terms and a results card, using exact rational
//! arithmetic throughout.
//!
//! # Modules
//!
//! - [`domain`] - The settlement engine: odds, each-way terms, combination
//!   enumeration, payout evaluation and Lucky settlement
//! - [`config`] - Results card loading from TOML files
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use luckybet::domain::{money, EachWay, FinishingPlaces, Horse, Lucky, Odds};
//! use rust_decimal::Decimal;
//!
//! let lucky = Lucky::new(vec![
//!     Horse::new("A", Odds::try_new(1, 1)?, Some(EachWay::try_new(2, 2)?)),
//!     Horse::new("B", Odds::try_new(3, 1)?, Some(EachWay::try_new(4, 2)?)),
//! ]);
//! let places = FinishingPlaces::try_from_pairs([("A", 1), ("B", 2)])?;
//!
//! let payout = lucky.winnings(&money::to_rational(Decimal::TEN), &places)?;
//! assert_eq!(payout.to_string(), "105/8");
//! assert_eq!(money::to_currency(&payout)?.to_string(), "13.13");
//! # Ok::<(), luckybet::domain::DomainError>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
