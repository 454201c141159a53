//! GRASP configuration.

use super::construction::Construction;
use crate::localsearch::{Neighborhood, SearchPolicy};

/// Configuration for the GRASP restart loop.
///
/// # Defaults
///
/// ```
/// use subsetopt::grasp::GraspConfig;
///
/// let config = GraspConfig::default();
/// assert_eq!(config.iterations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use subsetopt::grasp::{Construction, GraspConfig};
/// use subsetopt::localsearch::SearchPolicy;
///
/// let config = GraspConfig::default()
///     .with_iterations(200)
///     .with_construction(Construction::Greedy { alpha: 0.3 })
///     .with_policy(SearchPolicy::FirstImproving)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Number of construct-then-search iterations to run.
    pub iterations: usize,

    /// Constructive heuristic variant used to seed each iteration.
    pub construction: Construction,

    /// Move acceptance policy for the local-search phase.
    pub policy: SearchPolicy,

    /// Candidate neighborhood scanned by the local-search phase.
    pub neighborhood: Neighborhood,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            construction: Construction::default(),
            policy: SearchPolicy::default(),
            neighborhood: Neighborhood::default(),
            seed: None,
        }
    }
}

impl GraspConfig {
    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the constructive heuristic variant.
    pub fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    /// Sets the local-search acceptance policy.
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the local-search neighborhood.
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
