//! Genetic Algorithm framework.
//!
//! A generic, domain-agnostic GA built on trait-based abstractions. Users
//! define their problem by implementing [`GaProblem`], which specifies how
//! to create, evaluate, mutate, and decode chromosomes; the framework owns
//! selection, crossover, elitism, and the generational loop itself.
//!
//! The GA maximizes fitness. Minimization problems wrap their objective in
//! a sign flip inside [`GaProblem::fitness`].
//!
//! # Key Types
//!
//! - [`Chromosome`]: A gene vector with a cached fitness value
//! - [`GaProblem`]: Problem definition, including the gene alphabet
//! - [`GaConfig`]: Algorithm parameters (population size, generations, rates)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::{draw_crosspoints, two_point_crossover};
pub use runner::{GaResult, GaRunner};
pub use selection::{binary_tournament, select_parents};
pub use types::{Chromosome, GaProblem};
