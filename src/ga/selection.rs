//! Parent selection.
//!
//! The evolutionary loop selects parents by binary tournament with
//! replacement: two uniform index draws, keep the fitter. Self-matches are
//! possible and return the drawn individual; ties favor the second draw
//! (strict `>` on the first).
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

use super::types::Chromosome;

/// Runs one binary tournament over the population and returns the winning
/// index.
///
/// # Panics
/// Panics if `population` is empty or any participant has unset fitness.
pub fn binary_tournament<G, R: Rng>(population: &[Chromosome<G>], rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let first = rng.random_range(0..population.len());
    let second = rng.random_range(0..population.len());
    if population[first].fitness() > population[second].fitness() {
        first
    } else {
        second
    }
}

/// Draws `count` parents with replacement, one tournament each.
///
/// The returned indices identify population members: a pair holding the same
/// index twice is the same individual, which the crossover stage passes
/// through unchanged.
pub fn select_parents<G, R: Rng>(
    population: &[Chromosome<G>],
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    (0..count)
        .map(|_| binary_tournament(population, rng))
        .collect()
}
