//! A selection on a betting slip.

use std::fmt;

use super::each_way::EachWay;
use super::odds::Odds;

/// A runner at its taken win odds, optionally backed each-way.
///
/// Names identify runners on the results card, so they must be unique
/// within one slip. Callers building slips are responsible for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Horse {
    name: String,
    win_odds: Odds,
    each_way: Option<EachWay>,
}

impl Horse {
    /// Create a new selection.
    pub fn new(name: impl Into<String>, win_odds: Odds, each_way: Option<EachWay>) -> Self {
        Self {
            name: name.into(),
            win_odds,
            each_way,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn win_odds(&self) -> &Odds {
        &self.win_odds
    }

    #[must_use]
    pub const fn each_way(&self) -> Option<&EachWay> {
        self.each_way.as_ref()
    }
}

impl fmt::Display for Horse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.each_way {
            Some(terms) => write!(f, "{} ({}, E/W {})", self.name, self.win_odds, terms),
            None => write!(f, "{} ({}, no E/W)", self.name, self.win_odds),
        }
    }
}
