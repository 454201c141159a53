//! Greedy-randomized construction.
//!
//! Builds a solution one variable at a time. Each step scores the remaining
//! candidates by their insertion deltas and picks one according to the
//! configured [`Construction`] variant. Construction stops once an insertion
//! fails to lower the running cost (that final insertion stays in place) or
//! once no candidate has a finite insertion delta.

use crate::objective::Evaluator;
use crate::solution::Solution;
use rand::seq::SliceRandom;
use rand::Rng;

/// Constructive heuristic variants.
///
/// All variants skip candidates whose insertion delta is non-finite; an
/// infinite delta marks the insertion as ineligible in the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Construction {
    /// Classic alpha-greedy construction.
    ///
    /// Keeps every candidate whose delta is within `alpha` of the span
    /// between the best and worst eligible delta, then draws uniformly from
    /// that restricted list. `alpha = 0.0` is pure greedy, `alpha = 1.0` is
    /// uniform random.
    Greedy {
        /// Restricted-list width within `0.0..=1.0`.
        alpha: f64,
    },

    /// Uniform random insertions for a fixed number of steps, then
    /// alpha-greedy for the rest of the construction.
    RandomPlusGreedy {
        /// Number of leading insertions drawn uniformly at random.
        random_steps: usize,
        /// Restricted-list width used after the random phase.
        alpha: f64,
    },

    /// Best insertion out of a random sample of the candidate list.
    ///
    /// Each step samples `min(pool_size, remaining)` candidates without
    /// replacement and inserts the one with the lowest finite delta.
    SampledGreedy {
        /// Number of candidates sampled per step.
        pool_size: usize,
    },
}

impl Default for Construction {
    fn default() -> Self {
        Construction::Greedy { alpha: 0.1 }
    }
}

/// Builds a starting solution for one metaheuristic iteration.
///
/// Returns the constructed solution together with the candidates left over,
/// which is exactly the candidate list the local-search phase expects.
pub fn construct<E: Evaluator, R: Rng>(
    evaluator: &E,
    variant: &Construction,
    rng: &mut R,
) -> (Solution, Vec<usize>) {
    let mut solution = Solution::new();
    evaluator.evaluate(&mut solution);
    let mut candidates: Vec<usize> = (0..evaluator.domain_size()).collect();

    let mut steps = 0;
    loop {
        let prev = solution.cost;
        let Some(cand) =
            pick_candidate(evaluator, variant, &solution, &mut candidates, steps, rng)
        else {
            break;
        };
        let position = candidates
            .iter()
            .position(|&c| c == cand)
            .expect("construction picked a variable outside the candidate list");
        candidates.remove(position);
        solution.insert(cand);
        evaluator.evaluate(&mut solution);
        steps += 1;
        if solution.cost >= prev {
            break;
        }
    }

    (solution, candidates)
}

fn pick_candidate<E: Evaluator, R: Rng>(
    evaluator: &E,
    variant: &Construction,
    solution: &Solution,
    candidates: &mut [usize],
    steps: usize,
    rng: &mut R,
) -> Option<usize> {
    match *variant {
        Construction::Greedy { alpha } => {
            greedy_pick(evaluator, solution, candidates, alpha, rng)
        }
        Construction::RandomPlusGreedy {
            random_steps,
            alpha,
        } => {
            if steps < random_steps {
                random_pick(evaluator, solution, candidates, rng)
            } else {
                greedy_pick(evaluator, solution, candidates, alpha, rng)
            }
        }
        Construction::SampledGreedy { pool_size } => {
            sampled_pick(evaluator, solution, candidates, pool_size, rng)
        }
    }
}

fn greedy_pick<E: Evaluator, R: Rng>(
    evaluator: &E,
    solution: &Solution,
    candidates: &[usize],
    alpha: f64,
    rng: &mut R,
) -> Option<usize> {
    let deltas: Vec<f64> = candidates
        .iter()
        .map(|&c| evaluator.insertion_cost(c, solution))
        .collect();

    let mut min_delta = f64::INFINITY;
    let mut max_delta = f64::NEG_INFINITY;
    for &delta in &deltas {
        if !delta.is_finite() {
            continue;
        }
        if delta < min_delta {
            min_delta = delta;
        }
        if delta > max_delta {
            max_delta = delta;
        }
    }
    if !min_delta.is_finite() {
        return None;
    }

    let threshold = min_delta + alpha * (max_delta - min_delta);
    let restricted: Vec<usize> = candidates
        .iter()
        .copied()
        .zip(deltas)
        .filter(|&(_, delta)| delta.is_finite() && delta <= threshold)
        .map(|(c, _)| c)
        .collect();
    // The argmin always qualifies, so the restricted list is never empty.
    Some(restricted[rng.random_range(0..restricted.len())])
}

fn random_pick<E: Evaluator, R: Rng>(
    evaluator: &E,
    solution: &Solution,
    candidates: &[usize],
    rng: &mut R,
) -> Option<usize> {
    let eligible: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&c| evaluator.insertion_cost(c, solution).is_finite())
        .collect();
    if eligible.is_empty() {
        return None;
    }
    Some(eligible[rng.random_range(0..eligible.len())])
}

fn sampled_pick<E: Evaluator, R: Rng>(
    evaluator: &E,
    solution: &Solution,
    candidates: &mut [usize],
    pool_size: usize,
    rng: &mut R,
) -> Option<usize> {
    let pool = pool_size.min(candidates.len());
    let (sampled, _) = candidates.partial_shuffle(rng, pool);

    let mut choice = None;
    let mut best_delta = f64::INFINITY;
    for &cand in sampled.iter() {
        let delta = evaluator.insertion_cost(cand, solution);
        if delta.is_finite() && delta < best_delta {
            best_delta = delta;
            choice = Some(cand);
        }
    }
    choice
}
