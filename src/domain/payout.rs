//! Payout multiplier of a single accumulator combination.
//!
//! A combination pays its win half only if every leg won, and its place half
//! only if every leg was backed each-way and finished within its paying
//! places. A leg that wins also places, so an all-winning each-way
//! combination collects both halves.

use num_rational::BigRational;
use num_traits::{One, Zero};

use super::each_way::EachWay;
use super::odds::Odds;

/// One selection of a combination with its result.
#[derive(Debug, Clone, Copy)]
pub struct Leg<'a> {
    pub win_odds: &'a Odds,
    pub each_way: Option<&'a EachWay>,
    pub place: u32,
}

impl<'a> Leg<'a> {
    pub fn new(win_odds: &'a Odds, each_way: Option<&'a EachWay>, place: u32) -> Self {
        Self {
            win_odds,
            each_way,
            place,
        }
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        self.place == 1
    }

    /// Placed under each-way terms. Always false without them.
    #[must_use]
    pub fn placed(&self) -> bool {
        self.each_way.is_some_and(|terms| terms.pays(self.place))
    }

    fn win_multiplier(&self) -> BigRational {
        self.win_odds.payout_multiplier()
    }

    fn place_multiplier(&self) -> Option<BigRational> {
        self.each_way
            .map(|terms| terms.place_odds(self.win_odds).payout_multiplier())
    }
}

/// Combined payout multiplier for one combination, per unit of each half.
///
/// Returns zero when the combination neither won nor placed, and for an
/// empty combination.
#[must_use]
pub fn evaluate(legs: &[Leg<'_>]) -> BigRational {
    let mut total = BigRational::zero();
    if legs.is_empty() {
        return total;
    }

    if legs.iter().all(Leg::won) {
        total += legs
            .iter()
            .map(Leg::win_multiplier)
            .fold(BigRational::one(), |acc, m| acc * m);
    }

    if legs.iter().all(Leg::placed) {
        total += legs
            .iter()
            .filter_map(Leg::place_multiplier)
            .fold(BigRational::one(), |acc, m| acc * m);
    }

    total
}
