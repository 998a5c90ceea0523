use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Configuration for the PHC optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PHCConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of swap trials per trial stream. The search always exhausts this budget.
    pub n_iterations: usize,
    /// Number of independent trial streams, run in parallel. The best one is kept.
    /// If undefined, a single sequential stream is run, drawing directly from the optimizer's PRNG.
    #[serde(default)]
    pub n_restarts: Option<usize>,
}

impl PHCConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.n_restarts != Some(0),
            "n_restarts should be at least 1 when defined"
        );
        Ok(())
    }
}

impl Default for PHCConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            n_iterations: 10_000,
            n_restarts: None,
        }
    }
}
