//! GRASP metaheuristic.
//!
//! Greedy Randomized Adaptive Search Procedure: each iteration constructs a
//! solution with a randomized greedy heuristic, then descends to a local
//! optimum with the shared [`LocalSearch`](crate::localsearch::LocalSearch)
//! machinery. The best local optimum across all iterations wins.
//!
//! Construction variants trade greediness against diversification:
//!
//! - [`Construction::Greedy`]: restricted candidate list of width `alpha`
//! - [`Construction::RandomPlusGreedy`]: random prefix, greedy remainder
//! - [`Construction::SampledGreedy`]: best of a random candidate sample
//!
//! # References
//!
//! - Feo & Resende (1995), *Greedy Randomized Adaptive Search Procedures*
//! - Resende & Ribeiro (2016), *Optimization by GRASP*

mod config;
mod construction;
mod runner;

pub use config::GraspConfig;
pub use construction::{construct, Construction};
pub use runner::{GraspResult, GraspRunner};
