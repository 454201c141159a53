//! Tabu search (TS).
//!
//! A single-trajectory metaheuristic that always applies the best admissible
//! move, uphill or not, and uses a short-term memory (the tabu list) to keep
//! recently moved variables from flipping straight back. Aspiration lets a
//! tabu move through when it would produce a new incumbent.
//!
//! The move scan is shared with the descent engine in
//! [`localsearch`](crate::localsearch); only the acceptance rule differs.
//!
//! # References
//!
//! - Glover (1989), *Tabu Search, Part I*, ORSA Journal on Computing 1(3)
//! - Glover (1990), *Tabu Search, Part II*, ORSA Journal on Computing 2(1)

mod config;
mod runner;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner};
