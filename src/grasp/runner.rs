//! GRASP restart loop execution.
//!
//! [`GraspRunner`] repeats construct-then-descend for a fixed number of
//! iterations and keeps the best local optimum seen across all restarts.

use super::config::GraspConfig;
use super::construction::construct;
use crate::localsearch::LocalSearch;
use crate::objective::Evaluator;
use crate::random::create_rng;
use crate::solution::Solution;

/// Result of a GRASP optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspResult {
    /// The best solution found during the entire run.
    pub best: Solution,

    /// Best cost value (same as `best.cost`, lower is better).
    pub best_cost: f64,

    /// Total number of iterations executed.
    pub iterations: usize,

    /// Iteration at which the incumbent was last improved.
    pub best_iteration: usize,

    /// Best-known cost after each iteration.
    pub cost_history: Vec<f64>,
}

/// Executes the GRASP restart loop.
///
/// # Examples
///
/// ```no_run
/// use subsetopt::grasp::{GraspConfig, GraspRunner};
/// use subsetopt::problems::QbfInverse;
///
/// let evaluator = QbfInverse::from_file("instances/qbf040")?;
/// let config = GraspConfig::default().with_iterations(500).with_seed(42);
/// let result = GraspRunner::run(&evaluator, &config);
/// println!("Best cost: {}", result.best_cost);
/// # Ok::<(), subsetopt::error::InstanceError>(())
/// ```
pub struct GraspRunner;

impl GraspRunner {
    /// Runs GRASP for exactly `config.iterations` iterations.
    ///
    /// The incumbent starts as the evaluated empty solution and is replaced
    /// only on strict cost improvement.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GraspConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<E: Evaluator>(evaluator: &E, config: &GraspConfig) -> GraspResult {
        config.validate().expect("invalid GraspConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let search = LocalSearch::new(evaluator)
            .with_policy(config.policy)
            .with_neighborhood(config.neighborhood);

        let mut best = Solution::new();
        evaluator.evaluate(&mut best);
        let mut best_iteration = 0;
        let mut cost_history = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            // 1. Construct a greedy-randomized starting solution
            let (mut solution, mut candidates) =
                construct(evaluator, &config.construction, &mut rng);

            // 2. Descend to a local optimum
            search.run(&mut solution, &mut candidates, &mut rng);

            // 3. Keep the incumbent on strict improvement
            if solution.cost < best.cost {
                best = solution;
                best_iteration = iteration;
            }
            cost_history.push(best.cost);
        }

        GraspResult {
            best_cost: best.cost,
            best,
            iterations: config.iterations,
            best_iteration,
            cost_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grasp::Construction;
    use crate::localsearch::{Neighborhood, SearchPolicy};

    // Separable objective: cost is the sum of the selected weights. Its only
    // local optimum selects exactly the negative weights, so every GRASP
    // iteration must land there.
    struct LinearObjective {
        weights: Vec<f64>,
    }

    impl Evaluator for LinearObjective {
        fn domain_size(&self) -> usize {
            self.weights.len()
        }

        fn evaluate(&self, solution: &mut Solution) -> f64 {
            let cost: f64 = solution.elements.iter().map(|&e| self.weights[e]).sum();
            solution.cost = cost;
            cost
        }

        fn insertion_cost(&self, candidate: usize, solution: &Solution) -> f64 {
            if solution.contains(candidate) {
                0.0
            } else {
                self.weights[candidate]
            }
        }

        fn removal_cost(&self, candidate: usize, solution: &Solution) -> f64 {
            if solution.contains(candidate) {
                -self.weights[candidate]
            } else {
                0.0
            }
        }

        fn exchange_cost(&self, cand_in: usize, cand_out: usize, solution: &Solution) -> f64 {
            if cand_in == cand_out {
                return 0.0;
            }
            if solution.contains(cand_in) {
                return self.removal_cost(cand_out, solution);
            }
            if !solution.contains(cand_out) {
                return self.insertion_cost(cand_in, solution);
            }
            self.weights[cand_in] - self.weights[cand_out]
        }
    }

    fn toy() -> LinearObjective {
        LinearObjective {
            weights: vec![3.0, -2.0, -7.0, 1.0, -1.0],
        }
    }

    #[test]
    fn test_finds_linear_optimum() {
        let evaluator = toy();
        let config = GraspConfig::default()
            .with_iterations(20)
            .with_construction(Construction::Greedy { alpha: 0.3 })
            .with_seed(42);

        let result = GraspRunner::run(&evaluator, &config);

        assert!((result.best_cost - (-10.0)).abs() < 1e-10);
        let mut elements = result.best.elements.clone();
        elements.sort_unstable();
        assert_eq!(elements, vec![1, 2, 4]);
    }

    #[test]
    fn test_first_improving_reaches_same_optimum() {
        let evaluator = toy();
        let config = GraspConfig::default()
            .with_iterations(10)
            .with_policy(SearchPolicy::FirstImproving)
            .with_seed(11);

        let result = GraspRunner::run(&evaluator, &config);

        assert!((result.best_cost - (-10.0)).abs() < 1e-10);
    }

    #[test]
    fn test_sampled_neighborhood_still_cleans_up() {
        let evaluator = toy();
        let config = GraspConfig::default()
            .with_iterations(30)
            .with_neighborhood(Neighborhood::Sampled { fraction: 0.5 })
            .with_seed(5);

        let result = GraspRunner::run(&evaluator, &config);

        // Construction already inserts every improving candidate; the
        // cleanup removals scan the solution side, which sampling does not
        // restrict, so the optimum is reached regardless of the fraction.
        assert!((result.best_cost - (-10.0)).abs() < 1e-10);
    }

    #[test]
    fn test_reproducible_with_seed() {
        let evaluator = toy();
        let config = GraspConfig::default()
            .with_iterations(15)
            .with_construction(Construction::Greedy { alpha: 0.5 })
            .with_seed(99);

        let first = GraspRunner::run(&evaluator, &config);
        let second = GraspRunner::run(&evaluator, &config);

        assert_eq!(first.cost_history, second.cost_history);
        assert_eq!(first.best.elements, second.best.elements);
        assert_eq!(first.best_iteration, second.best_iteration);
    }

    #[test]
    fn test_history_is_monotone_and_sized() {
        let evaluator = toy();
        let config = GraspConfig::default().with_iterations(12).with_seed(4);

        let result = GraspRunner::run(&evaluator, &config);

        assert_eq!(result.cost_history.len(), 12);
        assert_eq!(result.iterations, 12);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "incumbent cost must be monotone: {} then {}",
                window[0],
                window[1]
            );
        }
        assert!((result.cost_history[result.best_iteration] - result.best_cost).abs() < 1e-10);
    }

    #[test]
    fn test_empty_domain_keeps_empty_incumbent() {
        let evaluator = LinearObjective { weights: vec![] };
        let config = GraspConfig::default().with_iterations(3).with_seed(1);

        let result = GraspRunner::run(&evaluator, &config);

        assert!(result.best.is_empty());
        assert!((result.best_cost - 0.0).abs() < 1e-10);
    }

    #[test]
    #[should_panic(expected = "invalid GraspConfig")]
    fn test_invalid_config_panics() {
        let evaluator = toy();
        let config = GraspConfig::default().with_iterations(0);
        GraspRunner::run(&evaluator, &config);
    }
}
