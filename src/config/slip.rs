//! Betting slip definitions.

use std::collections::HashSet;

use num_rational::BigRational;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{money, EachWay, FinishingPlaces, Horse, Lucky, Money, Odds};
use crate::error::{ConfigError, Result};

/// Most selections a slip may carry. A Lucky bet on 20 selections already
/// covers over a million combinations.
pub const MAX_SELECTIONS: usize = 20;

/// Each-way terms as written on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EachWayConfig {
    /// Fraction of the win odds paid on a place, as `1/odds_divisor`.
    pub odds_divisor: u32,
    /// Number of paying places.
    pub max_place: u32,
}

/// One selection on a slip.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    pub name: String,
    /// Fractional odds taken, written `at:to`.
    pub odds: String,
    #[serde(default)]
    pub each_way: Option<EachWayConfig>,
}

impl SelectionConfig {
    /// Build the domain selection, validating odds and each-way terms.
    pub fn to_horse(&self) -> Result<Horse> {
        let odds: Odds = self.odds.parse()?;
        let each_way = self
            .each_way
            .map(|terms| EachWay::try_new(terms.odds_divisor, terms.max_place))
            .transpose()?;
        Ok(Horse::new(self.name.clone(), odds, each_way))
    }
}

/// A bettor's Lucky slip.
#[derive(Debug, Clone, Deserialize)]
pub struct SlipConfig {
    pub bettor: String,
    /// Total stake across every combination.
    pub stake: Money,
    #[serde(default)]
    pub selections: Vec<SelectionConfig>,
}

impl SlipConfig {
    /// Check the slip and build its Lucky bet.
    pub fn to_lucky(&self) -> Result<Lucky> {
        self.validate()?;
        let horses = self
            .selections
            .iter()
            .map(SelectionConfig::to_horse)
            .collect::<Result<Vec<_>>>()?;
        Ok(Lucky::new(horses))
    }

    /// Exact total stake.
    #[must_use]
    pub fn stake(&self) -> BigRational {
        money::to_rational(self.stake)
    }

    /// Selections with no entry on the results card, in slip order.
    #[must_use]
    pub fn unplaced<'a>(&'a self, places: &FinishingPlaces) -> Vec<&'a str> {
        self.selections
            .iter()
            .map(|selection| selection.name.as_str())
            .filter(|name| !places.contains(name))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.bettor.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "bettor" }.into());
        }
        if self.stake < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "stake",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        if self.selections.len() > MAX_SELECTIONS {
            return Err(ConfigError::InvalidValue {
                field: "selections",
                reason: format!("at most {MAX_SELECTIONS} selections per slip"),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for selection in &self.selections {
            if selection.name.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "name" }.into());
            }
            if !seen.insert(selection.name.as_str()) {
                return Err(ConfigError::DuplicateSelection {
                    bettor: self.bettor.clone(),
                    name: selection.name.clone(),
                }
                .into());
            }
        }

        Ok(())
    }
}
