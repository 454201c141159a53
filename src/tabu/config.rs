//! Tabu search configuration.

use crate::grasp::Construction;
use crate::localsearch::{Neighborhood, SearchPolicy};

/// Configuration for the tabu search trajectory.
///
/// # Defaults
///
/// ```
/// use subsetopt::tabu::TabuConfig;
///
/// let config = TabuConfig::default();
/// assert_eq!(config.iterations, 1000);
/// assert_eq!(config.tenure, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use subsetopt::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_iterations(5000)
///     .with_tenure(7)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of trajectory iterations to run.
    pub iterations: usize,

    /// Tabu tenure. Each applied move books two list slots, so a variable
    /// stays tabu for `tenure` iterations after it moves.
    pub tenure: usize,

    /// Whether a tabu move may still be taken when it would yield a new
    /// incumbent (aspiration by objective).
    pub aspiration: bool,

    /// Constructive heuristic for the starting solution. Defaults to pure
    /// greedy (`alpha = 0`).
    pub construction: Construction,

    /// Scan discipline for the per-iteration move search.
    pub policy: SearchPolicy,

    /// Candidate neighborhood scanned at each iteration.
    pub neighborhood: Neighborhood,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            tenure: 20,
            aspiration: true,
            construction: Construction::Greedy { alpha: 0.0 },
            policy: SearchPolicy::default(),
            neighborhood: Neighborhood::default(),
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tenure(mut self, tenure: usize) -> Self {
        self.tenure = tenure;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets the constructive heuristic for the starting solution.
    pub fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    /// Sets the move-scan policy.
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the scanned neighborhood.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if self.tenure == 0 {
            return Err("tenure must be at least 1".into());
        }
        match self.construction {
            Construction::Greedy { alpha }
            | Construction::RandomPlusGreedy { alpha, .. } => {
                if !(0.0..=1.0).contains(&alpha) {
                    return Err("alpha must be within 0.0..=1.0".into());
                }
            }
            Construction::SampledGreedy { pool_size } => {
                if pool_size == 0 {
                    return Err("pool_size must be at least 1".into());
                }
            }
        }
        if let Neighborhood::Sampled { fraction } = self.neighborhood {
            if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
                return Err("fraction must be positive and at most 1.0".into());
            }
        }
        Ok(())
    }
}
