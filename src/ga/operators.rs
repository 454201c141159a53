//! Recombination operators.
//!
//! Two-point crossover over fixed-length gene vectors: both crosspoints are
//! drawn over the locus range (`p1` uniform on `[0, size]`, `p2` uniform on
//! `[p1, size]`), genes inside the half-open interval `[p1, p2)` swap
//! parents, genes outside stay with the same-index parent. Degenerate
//! intervals reproduce the parents unchanged.
//!
//! # References
//!
//! - De Jong (1975), *An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems*

use rand::Rng;

use super::types::Chromosome;

/// Produces two offspring by swapping the genes in `[point1, point2)`.
///
/// Offspring fitness is left unset; the caller evaluates.
///
/// # Panics
/// Panics when the parents differ in length or the crosspoints are out of
/// range (`point1 <= point2 <= len` must hold).
pub fn two_point_crossover<G: Copy>(
    parent1: &Chromosome<G>,
    parent2: &Chromosome<G>,
    point1: usize,
    point2: usize,
) -> (Chromosome<G>, Chromosome<G>) {
    let size = parent1.len();
    assert_eq!(size, parent2.len(), "parents must have equal length");
    assert!(
        point1 <= point2 && point2 <= size,
        "crosspoints ({point1}, {point2}) out of range for {size} loci"
    );

    let mut genes1 = parent1.genes().to_vec();
    let mut genes2 = parent2.genes().to_vec();
    for locus in point1..point2 {
        genes1[locus] = parent2.genes()[locus];
        genes2[locus] = parent1.genes()[locus];
    }
    (Chromosome::new(genes1), Chromosome::new(genes2))
}

/// Draws a crosspoint pair for a chromosome of `size` loci:
/// `p1` uniform over `[0, size]`, then `p2` uniform over `[p1, size]`.
pub fn draw_crosspoints<R: Rng>(size: usize, rng: &mut R) -> (usize, usize) {
    let point1 = rng.random_range(0..=size);
    let point2 = rng.random_range(point1..=size);
    (point1, point2)
}
