//! Settlement engine for each-way Lucky bets.
//!
//! All arithmetic is exact: odds, probabilities and payouts are rationals
//! over arbitrary-precision integers, and only [`money::to_currency`] rounds.

pub mod each_way;
pub mod error;
pub mod horse;
pub mod lucky;
pub mod money;
pub mod odds;
pub mod payout;
pub mod place;
pub mod subset;

pub use each_way::EachWay;
pub use error::DomainError;
pub use horse::Horse;
pub use lucky::{Lucky, Settlement};
pub use money::Money;
pub use odds::Odds;
pub use payout::{evaluate, Leg};
pub use place::{ordinal, FinishingPlaces};
pub use subset::{subset_count, subsets};
