use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("selection '{name}' appears more than once on {bettor}'s slip")]
    DuplicateSelection { bettor: String, name: String },

    #[error("no slip on the card for bettor '{bettor}'")]
    UnknownBettor { bettor: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{failed} of {total} slips could not be settled")]
    Settlement { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
