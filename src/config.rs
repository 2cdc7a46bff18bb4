//! Run configuration.
//!
//! The binary ships with [`TrainerConfig::default`]; there are no flags or
//! config files. Tests build their own configs for seeded, shortened runs.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Maximum questions in one timed drill.
    pub question_limit: usize,
    /// Time budget, checked between questions only.
    pub time_limit_secs: u64,
}

impl Default for DrillConfig {
    fn default() -> Self {
        DrillConfig {
            question_limit: 80,
            time_limit_secs: 480,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// `Some` makes every session reproducible; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
    pub drill: DrillConfig,
}

impl TrainerConfig {
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        }
    }
}
