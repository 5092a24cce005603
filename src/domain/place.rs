//! Finishing positions and the results card.

use std::collections::HashMap;

use super::error::DomainError;

/// English ordinal for a finishing position: 1st, 2nd, 3rd, 4th, 11th, 21st.
#[must_use]
pub fn ordinal(place: u32) -> String {
    let suffix = match (place % 10, place % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{place}{suffix}")
}

/// Finishing position of every runner, keyed by name.
///
/// Read-only to settlement; a runner missing from the card is an error
/// rather than an unplaced finish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinishingPlaces {
    places: HashMap<String, u32>,
}

impl FinishingPlaces {
    /// Create an empty results card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a results card from `(name, place)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPlace`] for a place of 0.
    pub fn try_from_pairs<I, S>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut card = Self::new();
        for (name, place) in pairs {
            card.insert(name, place)?;
        }
        Ok(card)
    }

    /// Record a runner's finishing place, replacing any earlier entry.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPlace`] for a place of 0.
    pub fn insert(&mut self, name: impl Into<String>, place: u32) -> Result<(), DomainError> {
        let name = name.into();
        if place == 0 {
            return Err(DomainError::InvalidPlace { name, place });
        }
        self.places.insert(name, place);
        Ok(())
    }

    /// Look up a runner's finishing place.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingPlace`] if the runner is not on the card.
    pub fn place_of(&self, name: &str) -> Result<u32, DomainError> {
        self.places
            .get(name)
            .copied()
            .ok_or_else(|| DomainError::MissingPlace {
                name: name.to_string(),
            })
    }

    /// Whether the runner has a recorded place.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.places.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
