//! The objective capability consumed by the search engines.
//!
//! [`Evaluator`] is the single seam between the generic engines (construction,
//! local search, tabu search) and a concrete problem. It fixes the domain
//! size, recomputes full solution costs, and prices the three elementary
//! moves (insertion, removal, exchange) incrementally so the engines never
//! pay for a full re-evaluation while scanning a neighborhood.

use crate::solution::Solution;

/// Delta-evaluated objective over a fixed set of decision variables.
///
/// Cost convention is **minimization**: the engines apply a move only when
/// its delta is strictly negative. Maximization objectives plug in through an
/// inverting wrapper (see [`crate::problems::QbfInverse`]).
///
/// Delta methods are side-effect-free and priced against the solution as it
/// currently stands. A non-finite delta (`f64::INFINITY`) marks the move as
/// ineligible; this is how constrained adapters keep feasibility inside the
/// cost model instead of repairing solutions.
///
/// Implementations must be `Send + Sync`: batch evaluation may be distributed
/// across threads behind the `parallel` feature.
pub trait Evaluator: Send + Sync {
    /// Number of decision variables. Fixes the candidate index range
    /// `0..domain_size()` and the chromosome length on the GA side.
    fn domain_size(&self) -> usize;

    /// Recomputes the cost of `solution` from scratch, stores it in
    /// `solution.cost`, and returns it.
    ///
    /// Engines call this after every applied move; an implementation never
    /// needs to trust the incoming cached cost.
    fn evaluate(&self, solution: &mut Solution) -> f64;

    /// Cost change from inserting `candidate` into `solution`.
    ///
    /// Inserting an already-selected variable must be a zero-delta no-op.
    fn insertion_cost(&self, candidate: usize, solution: &Solution) -> f64;

    /// Cost change from removing `candidate` from `solution`.
    ///
    /// Removing an unselected variable must be a zero-delta no-op.
    fn removal_cost(&self, candidate: usize, solution: &Solution) -> f64;

    /// Cost change from simultaneously inserting `cand_in` and removing
    /// `cand_out`.
    ///
    /// Exchanging a variable with itself must be a zero-delta no-op; when one
    /// side is already in the requested state the delta degenerates to the
    /// single remaining move.
    fn exchange_cost(&self, cand_in: usize, cand_out: usize, solution: &Solution) -> f64;
}
