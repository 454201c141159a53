//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the evolutionary loop.
///
/// # Defaults
///
/// ```
/// use subsetopt::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use subsetopt::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Must be even: crossover consumes parents in adjacent pairs.
    /// Typical range: 50–500.
    pub population_size: usize,

    /// Number of generations to run. The loop always runs to completion;
    /// there is no convergence-based early exit.
    pub generations: usize,

    /// Probability that an offspring is touched by mutation at all (0.0–1.0).
    ///
    /// A touched offspring then mutates each locus independently with
    /// probability `mutation_rate / 10`.
    pub mutation_rate: f64,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Effective only with the `parallel` cargo feature. Evaluation draws no
    /// random numbers, so this never changes the search trajectory.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            mutation_rate: 0.1,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate (clamped to 0.0–1.0).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
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
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.population_size % 2 != 0 {
            return Err("population_size must be even for pairwise crossover".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within 0.0..=1.0".into());
        }
        Ok(())
    }
}
