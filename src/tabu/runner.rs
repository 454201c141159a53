//! Tabu search execution engine.
//!
//! # Algorithm
//!
//! 1. Build a starting solution with the configured constructive heuristic
//!    (pure greedy by default)
//! 2. At each iteration:
//!    a. Scan the removal, exchange, and insertion moves
//!    b. Select the best admissible move (non-tabu, or tabu with aspiration)
//!    c. Apply it unconditionally, then book its variables as tabu
//!    d. Update the incumbent on strict improvement
//! 3. Stop after the configured number of iterations
//!
//! Unlike plain descent, step (c) accepts worsening moves. The tabu list is
//! what keeps the trajectory from immediately undoing them.
//!
//! # References
//!
//! - Glover (1989), *Tabu Search, Part I*, ORSA Journal on Computing 1(3)
//! - Glover (1990), *Tabu Search, Part II*, ORSA Journal on Computing 2(1)

use std::collections::VecDeque;

use rand::seq::SliceRandom;

use super::config::TabuConfig;
use crate::grasp::construct;
use crate::localsearch::{apply_move, scan_moves, Move};
use crate::objective::Evaluator;
use crate::random::create_rng;
use crate::solution::Solution;

/// Result of a tabu search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
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

/// Executes the tabu search trajectory.
///
/// # Examples
///
/// ```no_run
/// use subsetopt::problems::KqbfInverse;
/// use subsetopt::tabu::{TabuConfig, TabuRunner};
///
/// let evaluator = KqbfInverse::from_file("instances/kqbf080")?;
/// let config = TabuConfig::default().with_tenure(7).with_seed(42);
/// let result = TabuRunner::run(&evaluator, &config);
/// println!("Best cost: {}", result.best_cost);
/// # Ok::<(), subsetopt::error::InstanceError>(())
/// ```
pub struct TabuRunner;

impl TabuRunner {
    /// Runs tabu search for exactly `config.iterations` iterations.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`TabuConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<E: Evaluator>(evaluator: &E, config: &TabuConfig) -> TabuResult {
        config.validate().expect("invalid TabuConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // 1. Construct the starting solution
        let (mut current, mut candidates) =
            construct(evaluator, &config.construction, &mut rng);
        let mut best = current.clone();
        let mut best_iteration = 0;

        // 2. Tabu list: one slot per moved variable, two slots per move.
        //    Null entries keep the length fixed at 2 * tenure.
        let mut tabu: VecDeque<Option<usize>> = VecDeque::with_capacity(2 * config.tenure);
        for _ in 0..2 * config.tenure {
            tabu.push_back(None);
        }

        let mut cost_history = Vec::with_capacity(config.iterations);

        // 3. Trajectory loop
        for iteration in 0..config.iterations {
            candidates.shuffle(&mut rng);
            let view = config.neighborhood.view_len(candidates.len());

            let aspiration = config.aspiration;
            let current_cost = current.cost;
            let best_cost = best.cost;
            let chosen = scan_moves(
                evaluator,
                &current,
                &candidates[..view],
                config.policy,
                |mv: &Move| {
                    let free = mv.cand_in.map_or(true, |c| !tabu.contains(&Some(c)))
                        && mv.cand_out.map_or(true, |c| !tabu.contains(&Some(c)));
                    free || (aspiration && current_cost + mv.delta < best_cost)
                },
            );

            match chosen {
                Some(mv) => {
                    tabu.pop_front();
                    tabu.push_back(mv.cand_out);
                    tabu.pop_front();
                    tabu.push_back(mv.cand_in);
                    apply_move(evaluator, &mut current, &mut candidates, &mv);
                }
                None => {
                    // Null move: the list still ages so tabu status decays
                    tabu.pop_front();
                    tabu.push_back(None);
                    tabu.pop_front();
                    tabu.push_back(None);
                }
            }

            if current.cost < best.cost {
                best = current.clone();
                best_iteration = iteration;
            }
            cost_history.push(best.cost);
        }

        TabuResult {
            best_cost: best.cost,
            best,
            iterations: config.iterations,
            best_iteration,
            cost_history,
        }
    }
}
