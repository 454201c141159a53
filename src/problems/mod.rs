//! Benchmark problem adapters.
//!
//! Binary quadratic objectives wired into the solver families: [`Qbf`] is
//! the raw maximization function, [`QbfInverse`] presents it to the
//! minimizing evaluators used by GRASP and tabu search, and [`QbfGa`] maps
//! it onto binary chromosomes for the GA. The knapsack-constrained
//! counterparts ([`Kqbf`], [`KqbfInverse`], [`KqbfGa`]) add per-variable
//! weights and a capacity.
//!
//! Instance files are whitespace-separated token streams; see the
//! `from_reader` constructors for the exact layouts.

mod kqbf;
mod qbf;

pub use kqbf::{Kqbf, KqbfGa, KqbfInverse};
pub use qbf::{Qbf, QbfGa, QbfInverse};

use std::fmt;
use std::str::FromStr;

use crate::error::InstanceError;

/// Pulls the next whitespace token and parses it, naming the field in any
/// error message.
pub(crate) fn parse_token<'a, T, I>(tokens: &mut I, what: &str) -> Result<T, InstanceError>
where
    T: FromStr,
    T::Err: fmt::Display,
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| InstanceError::Parse(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|err| InstanceError::Parse(format!("invalid {what} '{token}': {err}")))
}

/// Indices of the genes set to 1.
pub(crate) fn selected_indices(genes: &[u8]) -> Vec<usize> {
    genes
        .iter()
        .enumerate()
        .filter(|&(_, &gene)| gene == 1)
        .map(|(var, _)| var)
        .collect()
}
