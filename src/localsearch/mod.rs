//! Local search over insertion, removal, and exchange moves.
//!
//! The engines in [`crate::grasp`] and [`crate::tabu`] share one neighborhood
//! model: a working [`Solution`](crate::solution::Solution) plus a disjoint
//! candidate list of insertable variables, priced through the
//! [`Evaluator`](crate::objective::Evaluator) delta methods. This module
//! holds that shared machinery:
//!
//! - [`scan_moves`]: one pass over removals, exchanges, and insertions (in
//!   that order) returning the minimum-delta admissible move, with
//!   first-improving and best-improving disciplines ([`SearchPolicy`]).
//! - [`apply_move`]: membership swap plus full re-evaluation.
//! - [`LocalSearch`]: the descent driver, terminating at a local optimum.
//! - [`Neighborhood`]: full scans or a shuffled fractional sample of the
//!   candidate list, re-drawn every iteration.
//!
//! # References
//!
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures",
//!   *Journal of Global Optimization* 6, 109-133
//! - Resende & Ribeiro (2016), *Optimization by GRASP*, Springer

mod engine;
mod moves;

pub use engine::{LocalSearch, Neighborhood, MIN_IMPROVEMENT};
pub use moves::{apply_move, scan_moves, Move, SearchPolicy};
