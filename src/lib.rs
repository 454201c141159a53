//! Metaheuristic search for subset-selection problems.
//!
//! Optimizes objectives defined over subsets of `{0, .., n-1}` with three
//! complementary strategies:
//!
//! - **GRASP (Greedy Randomized Adaptive Search Procedure)**: Repeated
//!   randomized greedy construction, each start polished by local-search
//!   descent over insertion, removal, and exchange moves.
//! - **Tabu Search (TS)**: Single-solution trajectory that always takes the
//!   best admissible move, using short-term memory (tabu list) with
//!   aspiration to escape local optima.
//! - **Genetic Algorithm (GA)**: Population-based evolution with binary
//!   tournament selection, two-point crossover, per-locus mutation, and
//!   elitism.
//!
//! GRASP and tabu search minimize a cost through the [`objective::Evaluator`]
//! trait; the GA maximizes a fitness through [`ga::GaProblem`]. Both seams
//! accept any problem that can price its own moves. [`problems`] ships
//! quadratic binary function (QBF) adapters, with and without a knapsack
//! constraint, as ready-made instances.
//!
//! # Architecture
//!
//! The move scan, descent engine, and neighborhood sampling live in
//! [`localsearch`] and are shared by the GRASP and tabu runners; each
//! strategy adds only its own acceptance rule on top. [`solution`] holds the
//! working subset representation and [`random`] the seedable RNG every runner
//! draws from, so any run can be replayed from its seed.

pub mod error;
pub mod ga;
pub mod grasp;
pub mod localsearch;
pub mod objective;
pub mod problems;
pub mod random;
pub mod solution;
pub mod tabu;
