use crate::config::constants::{DEFAULT_TRIALS, parallel::CHUNK_SIZE};
use crate::error::{Error, Result};

/// Runtime settings for one Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of trials per strategy. Always >= 1.
    trials: u64,
    /// Fixed seed for a reproducible run. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Spread the trials over the rayon pool.
    pub parallel: bool,
    pub chunk_size: u64,
}

impl SimulationConfig {
    pub fn new(trials: u64) -> Result<Self> {
        if trials == 0 {
            return Err(Error::InvalidTrialCount(trials.to_string()));
        }
        Ok(Self {
            trials,
            seed: None,
            parallel: false,
            chunk_size: CHUNK_SIZE,
        })
    }

    /// Parses a caller-supplied count. Empty input yields the default.
    pub fn parse_trials(text: &str) -> Result<u64> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(DEFAULT_TRIALS);
        }
        match text.replace('_', "").parse::<u64>() {
            Ok(0) | Err(_) => Err(Error::InvalidTrialCount(text.to_string())),
            Ok(n) => Ok(n),
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            parallel: false,
            chunk_size: CHUNK_SIZE,
        }
    }
}
