//! Descent to a local optimum.
//!
//! [`LocalSearch`] drives the shared move scan until no strictly improving
//! move remains: refresh the candidate list, scan removals, exchanges and
//! insertions, apply the single cheapest move, re-evaluate, repeat.

use rand::seq::SliceRandom;
use rand::Rng;

use super::moves::{apply_move, scan_moves, SearchPolicy};
use crate::objective::Evaluator;
use crate::solution::Solution;

/// Threshold a delta must clear (below `-MIN_IMPROVEMENT`) to count as a
/// strict improvement. Rejects exact-zero deltas and sign noise, so the
/// descent cannot cycle through cost-neutral moves.
pub const MIN_IMPROVEMENT: f64 = f64::MIN_POSITIVE;

/// Which part of the candidate list a scan iteration sees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// Scan the whole candidate list.
    Full,
    /// Shuffle the candidate list and scan only the first
    /// `round(len * fraction)` entries, re-sampled fresh every iteration.
    ///
    /// Only the scan view shrinks: membership updates still apply to the full
    /// list. The customary fraction is one half.
    Sampled {
        /// Fraction of the candidate list to scan, in `(0, 1]`.
        fraction: f64,
    },
}

impl Neighborhood {
    /// Length of the scan view over a candidate list of `candidates` entries.
    pub fn view_len(&self, candidates: usize) -> usize {
        match self {
            Neighborhood::Full => candidates,
            Neighborhood::Sampled { fraction } => (candidates as f64 * fraction).round() as usize,
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Neighborhood::Full
    }
}

/// Local-search engine over a working solution and its candidate list.
///
/// The engine owns both exclusively for the duration of [`run`](Self::run)
/// and keeps them disjoint: every applied move swaps membership between the
/// two sides and finishes with a full re-evaluation.
///
/// # Examples
///
/// ```no_run
/// use subsetopt::localsearch::{LocalSearch, SearchPolicy};
/// use subsetopt::objective::Evaluator;
/// use subsetopt::problems::QbfInverse;
/// use subsetopt::random::create_rng;
/// use subsetopt::solution::Solution;
///
/// let evaluator = QbfInverse::from_file("instances/qbf040")?;
/// let mut solution = Solution::new();
/// evaluator.evaluate(&mut solution);
/// let mut candidates: Vec<usize> = (0..evaluator.domain_size()).collect();
/// let mut rng = create_rng(42);
///
/// let search = LocalSearch::new(&evaluator)
///     .with_policy(SearchPolicy::FirstImproving);
/// let applied = search.run(&mut solution, &mut candidates, &mut rng);
/// println!("{applied} moves: {solution}");
/// # Ok::<(), subsetopt::error::InstanceError>(())
/// ```
pub struct LocalSearch<'a, E: Evaluator> {
    evaluator: &'a E,
    policy: SearchPolicy,
    neighborhood: Neighborhood,
}

impl<'a, E: Evaluator> LocalSearch<'a, E> {
    /// Creates a best-improving engine over the full neighborhood.
    pub fn new(evaluator: &'a E) -> Self {
        Self {
            evaluator,
            policy: SearchPolicy::default(),
            neighborhood: Neighborhood::default(),
        }
    }

    /// Sets the scan policy.
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the neighborhood view.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Improves `solution` in place until no strictly improving move exists
    /// under the configured neighborhood. Returns the number of applied
    /// moves; zero means the solution was already locally optimal.
    ///
    /// The solution's element order is shuffled once at entry and the
    /// candidate list is re-shuffled every iteration, randomizing tie-breaks
    /// among equal-cost moves.
    pub fn run<R: Rng>(
        &self,
        solution: &mut Solution,
        candidates: &mut Vec<usize>,
        rng: &mut R,
    ) -> usize {
        solution.elements.shuffle(rng);
        let mut applied = 0;
        loop {
            candidates.shuffle(rng);
            let view = self.neighborhood.view_len(candidates.len());
            let best = scan_moves(
                self.evaluator,
                solution,
                &candidates[..view],
                self.policy,
                |_| true,
            );
            match best {
                Some(mv) if mv.delta < -MIN_IMPROVEMENT => {
                    apply_move(self.evaluator, solution, candidates, &mv);
                    applied += 1;
                }
                _ => break,
            }
        }
        applied
    }
}
