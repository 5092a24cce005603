//! Each-way place terms.

use std::fmt;

use super::error::DomainError;
use super::odds::Odds;
use super::place::ordinal;

/// Place terms of an each-way bet, e.g. "1st to 3rd at 1/5 odds".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EachWay {
    odds_divisor: u32,
    max_place: u32,
}

impl EachWay {
    /// Create each-way terms.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEachWay`] if either value is 0.
    pub fn try_new(odds_divisor: u32, max_place: u32) -> Result<Self, DomainError> {
        if odds_divisor < 1 || max_place < 1 {
            return Err(DomainError::InvalidEachWay {
                odds_divisor,
                max_place,
            });
        }
        Ok(Self {
            odds_divisor,
            max_place,
        })
    }

    /// Fraction of the win odds paid on a place, as `1/odds_divisor`.
    #[must_use]
    pub const fn odds_divisor(&self) -> u32 {
        self.odds_divisor
    }

    /// Last finishing position that counts as placed.
    #[must_use]
    pub const fn max_place(&self) -> u32 {
        self.max_place
    }

    /// Whether a finishing position is within the paying places.
    #[must_use]
    pub const fn pays(&self, place: u32) -> bool {
        place >= 1 && place <= self.max_place
    }

    /// Place odds: the same `at` against `to * odds_divisor`.
    #[must_use]
    pub fn place_odds(&self, win_odds: &Odds) -> Odds {
        win_odds.scale_to(self.odds_divisor)
    }
}

impl fmt::Display for EachWay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "1st to {} at 1/{} odds",
            ordinal(self.max_place),
            self.odds_divisor
        )
    }
}
