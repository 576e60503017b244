//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CrapsError, Result};

/// Configuration for a `Game` and its fast-forward driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Dice seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Rounds between tally updates during a fast-forward drive.
    pub tally_interval: u64,

    /// Rounds between full snapshot updates during a fast-forward drive.
    /// Snapshots copy the roll log, so these are sent less often.
    pub rolls_interval: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tally_interval: 2_000,
            rolls_interval: 10_000,
        }
    }
}

impl EngineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set rounds between tally updates.
    #[must_use]
    pub fn with_tally_interval(mut self, rounds: u64) -> Self {
        self.tally_interval = rounds;
        self
    }

    /// Set rounds between snapshot updates.
    #[must_use]
    pub fn with_rolls_interval(mut self, rounds: u64) -> Self {
        self.rolls_interval = rounds;
        self
    }

    /// Reject intervals the driver cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.tally_interval == 0 {
            return Err(CrapsError::Config("tally_interval must be positive".into()));
        }
        if self.rolls_interval == 0 {
            return Err(CrapsError::Config("rolls_interval must be positive".into()));
        }
        Ok(())
    }
}
