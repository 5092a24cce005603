//! Card loading and validation.
//!
//! Provides the main [`Config`] struct: logging and currency settings, the
//! results of the meeting, and the slips to settle.
//!
//! # Example
//!
//! ```no_run
//! use luckybet::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("card.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::slip::SlipConfig;
use crate::domain::{FinishingPlaces, Money};
use crate::error::{ConfigError, Result};

/// How payouts are rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

fn default_symbol() -> String {
    "£".into()
}

impl CurrencyConfig {
    /// Render an amount, e.g. `£14.60`.
    #[must_use]
    pub fn format(&self, amount: Money) -> String {
        format!("{}{:.2}", self.symbol, amount)
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
        }
    }
}

/// A results card: finishing places plus the slips to settle.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Currency display settings.
    #[serde(default)]
    pub currency: CurrencyConfig,

    /// Finishing position of each runner, by name.
    ///
    /// Runners need not all be listed; settling a slip with an unlisted
    /// selection fails.
    #[serde(default)]
    pub places: BTreeMap<String, u32>,

    /// Slips to settle, in card order.
    #[serde(default)]
    pub slips: Vec<SlipConfig>,
}

impl Config {
    /// Parse a card from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a card from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// The results card as a domain value.
    ///
    /// # Errors
    ///
    /// Returns an error if any recorded place is 0.
    pub fn finishing_places(&self) -> Result<FinishingPlaces> {
        let places = FinishingPlaces::try_from_pairs(
            self.places
                .iter()
                .map(|(name, place)| (name.as_str(), *place)),
        )?;
        Ok(places)
    }

    /// Find a bettor's slip.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownBettor`] if no slip matches.
    pub fn slip(&self, bettor: &str) -> Result<&SlipConfig> {
        self.slips
            .iter()
            .find(|slip| slip.bettor == bettor)
            .ok_or_else(|| {
                ConfigError::UnknownBettor {
                    bettor: bettor.to_string(),
                }
                .into()
            })
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {LOG_FORMATS:?}"),
            }
            .into());
        }

        self.finishing_places()?;
        for slip in &self.slips {
            slip.to_lucky()?;
        }

        Ok(())
    }
}
