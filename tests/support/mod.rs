#![allow(dead_code)]

pub mod domain;

/// The sample results card shipped at the crate root.
pub const REFERENCE_CARD: &str = include_str!("../../card.toml");
