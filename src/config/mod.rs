//! Results card configuration.
//!
//! A card is a TOML file holding the finishing places of a meeting and the
//! Lucky slips to settle against them.

pub mod logging;
pub mod settings;
pub mod slip;

pub use logging::LoggingConfig;
pub use settings::{Config, CurrencyConfig};
pub use slip::{EachWayConfig, SelectionConfig, SlipConfig, MAX_SELECTIONS};
