use thiserror::Error;

use crate::{Family, Scope};

/// Configuration for the searcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    max_candidates: usize,
    check_held_out: bool,
    families: Vec<Family>,
}

/// Errors that can occur when validating a searcher config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_candidates must be positive")]
    ZeroBudget,

    #[error("at least one family must be enabled")]
    NoFamilies,

    #[error("family {0} is listed more than once")]
    DuplicateFamily(Family),
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(10_000, true).unwrap()
    }
}

impl Config {
    /// Creates a config that searches every family in priority order.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_candidates` is zero.
    pub fn new(max_candidates: usize, check_held_out: bool) -> Result<Self, ConfigError> {
        if max_candidates == 0 {
            return Err(ConfigError::ZeroBudget);
        }

        Ok(Self {
            max_candidates,
            check_held_out,
            families: Family::ALL.to_vec(),
        })
    }

    /// Restricts the search to `families`, visited in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if `families` is empty or lists a family twice.
    pub fn with_families(mut self, families: &[Family]) -> Result<Self, ConfigError> {
        if families.is_empty() {
            return Err(ConfigError::NoFamilies);
        }
        for (i, family) in families.iter().enumerate() {
            if families[..i].contains(family) {
                return Err(ConfigError::DuplicateFamily(*family));
            }
        }

        self.families = families.to_vec();
        Ok(self)
    }

    /// Returns the maximum number of candidates validated per task.
    #[must_use]
    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Returns true if held-out examples take part in validation.
    #[must_use]
    pub fn check_held_out(&self) -> bool {
        self.check_held_out
    }

    /// Returns the families to search, in order.
    #[must_use]
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// Returns the validation scope implied by [`Config::check_held_out`].
    #[must_use]
    pub fn scope(&self) -> Scope {
        if self.check_held_out {
            Scope::All
        } else {
            Scope::Train
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_searches_every_family() {
        let config = Config::default();
        assert_eq!(config.families(), &Family::ALL);
        assert_eq!(config.scope(), Scope::All);
    }

    #[test]
    fn rejects_zero_budget() {
        assert_eq!(Config::new(0, true), Err(ConfigError::ZeroBudget));
    }

    #[test]
    fn with_families_validates_the_list() {
        let config = Config::default();
        assert_eq!(
            config.clone().with_families(&[]),
            Err(ConfigError::NoFamilies)
        );
        assert_eq!(
            config
                .clone()
                .with_families(&[Family::Scale, Family::Tile, Family::Scale]),
            Err(ConfigError::DuplicateFamily(Family::Scale))
        );

        let narrowed = config.with_families(&[Family::Tile, Family::Scale]).unwrap();
        assert_eq!(narrowed.families(), &[Family::Tile, Family::Scale]);
    }
}
