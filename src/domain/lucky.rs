//! Lucky bet settlement.
//!
//! A Lucky bet on `n` selections is every accumulator that can be made from
//! them, singles upwards: `2^n - 1` combinations, each staked each-way. The
//! total stake is split evenly across the combinations and then between the
//! win and place half of each.
//!
//! ```
//! use luckybet::domain::{FinishingPlaces, Horse, Lucky, Odds};
//! use num_bigint::BigInt;
//! use num_rational::BigRational;
//!
//! let lucky = Lucky::new(vec![Horse::new("Evens", Odds::try_new(1, 1)?, None)]);
//! let places = FinishingPlaces::try_from_pairs([("Evens", 1)])?;
//! let stake = BigRational::from_integer(BigInt::from(10));
//!
//! assert_eq!(lucky.winnings(&stake, &places)?, stake);
//! # Ok::<(), luckybet::domain::error::DomainError>(())
//! ```

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use tracing::{debug, trace};

use super::error::DomainError;
use super::horse::Horse;
use super::payout::{evaluate, Leg};
use super::place::FinishingPlaces;
use super::subset::{subset_count, subsets};

/// A full-cover each-way bet over a fixed list of selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lucky {
    horses: Vec<Horse>,
}

/// Breakdown of a settled Lucky bet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Number of combinations the stake was split across.
    pub combinations: usize,
    /// Sum of every combination's payout multiplier.
    pub multiplier: BigRational,
    /// Stake on each half of each combination.
    pub unit_stake: BigRational,
    /// Total returned to the bettor.
    pub payout: BigRational,
}

impl Lucky {
    /// Create a bet over the given selections, in slip order.
    #[must_use]
    pub fn new(horses: Vec<Horse>) -> Self {
        Self { horses }
    }

    #[must_use]
    pub fn horses(&self) -> &[Horse] {
        &self.horses
    }

    /// Number of combinations covered, `2^n - 1`.
    #[must_use]
    pub fn bet_count(&self) -> u128 {
        subset_count(self.horses.len(), 1)
    }

    /// Trade name of the bet, e.g. "Lucky 15" for four selections.
    #[must_use]
    pub fn name(&self) -> String {
        format!("Lucky {}", self.bet_count())
    }

    /// Settle the bet against a results card.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeStake`] for a stake below zero, and
    /// [`DomainError::MissingPlace`] if any selection is not on the card.
    pub fn settle(
        &self,
        total_stake: &BigRational,
        places: &FinishingPlaces,
    ) -> Result<Settlement, DomainError> {
        if total_stake.is_negative() {
            return Err(DomainError::NegativeStake {
                stake: total_stake.clone(),
            });
        }

        let legs = self
            .horses
            .iter()
            .map(|horse| {
                let place = places.place_of(horse.name())?;
                Ok(Leg::new(horse.win_odds(), horse.each_way(), place))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        let mut combinations = 0usize;
        let mut multiplier = BigRational::zero();
        for combination in subsets(&legs, 1) {
            let combination: Vec<Leg<'_>> = combination.into_iter().copied().collect();
            let value = evaluate(&combination);
            trace!(size = combination.len(), multiplier = %value, "evaluated combination");
            multiplier += value;
            combinations += 1;
        }

        // Nothing to stake on without selections
        let unit_stake = if combinations == 0 {
            BigRational::zero()
        } else {
            total_stake / BigRational::from_integer(BigInt::from(2 * combinations))
        };
        let payout = &unit_stake * &multiplier;

        debug!(
            selections = self.horses.len(),
            combinations,
            stake = %total_stake,
            multiplier = %multiplier,
            payout = %payout,
            "settled lucky bet"
        );

        Ok(Settlement {
            combinations,
            multiplier,
            unit_stake,
            payout,
        })
    }

    /// Total payout of the bet against a results card.
    ///
    /// # Errors
    ///
    /// See [`Lucky::settle`].
    pub fn winnings(
        &self,
        total_stake: &BigRational,
        places: &FinishingPlaces,
    ) -> Result<BigRational, DomainError> {
        self.settle(total_stake, places).map(|s| s.payout)
    }
}
