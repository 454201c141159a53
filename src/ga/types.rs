//! Core types for the evolutionary loop.
//!
//! [`Chromosome`] is the engine-owned genotype: a fixed-length numeric gene
//! sequence with a cached fitness. [`GaProblem`] is the capability a problem
//! implements to plug into [`GaRunner`](super::GaRunner): random-chromosome
//! generation, fitness, per-locus mutation, and decoding to the
//! problem-level [`Solution`].

use rand::Rng;

use crate::solution::Solution;

/// Fixed-length gene sequence with cached fitness.
///
/// The cache starts unset and every mutating accessor clears it, so a stale
/// fitness can never be observed: reading an unset fitness is a contract
/// violation and panics.
#[derive(Debug, Clone)]
pub struct Chromosome<G> {
    genes: Vec<G>,
    fitness: Option<f64>,
}

impl<G> Chromosome<G> {
    /// Creates a chromosome with unset fitness.
    pub fn new(genes: Vec<G>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Number of loci.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True for a zero-locus chromosome.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Read-only view of the genes.
    pub fn genes(&self) -> &[G] {
        &self.genes
    }

    /// Mutable view of the genes. Invalidates the cached fitness.
    pub fn genes_mut(&mut self) -> &mut [G] {
        self.fitness = None;
        &mut self.genes
    }

    /// Overwrites a single locus. Invalidates the cached fitness.
    ///
    /// # Panics
    /// Panics when `locus` is out of range.
    pub fn set_gene(&mut self, locus: usize, gene: G) {
        self.fitness = None;
        self.genes[locus] = gene;
    }

    /// The cached fitness.
    ///
    /// # Panics
    /// Panics when no fitness has been stored since the last gene change.
    pub fn fitness(&self) -> f64 {
        self.fitness.expect("fitness read before evaluation")
    }

    /// True when a fitness is currently cached.
    pub fn has_fitness(&self) -> bool {
        self.fitness.is_some()
    }

    /// Stores the evaluated fitness for the current genes.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }
}

/// Defines a problem for the evolutionary loop.
///
/// The runner never looks inside genes. Everything problem-specific comes
/// through this capability: what a random chromosome looks like, what
/// fitness means, how a single locus mutates, and how the genotype maps to
/// a [`Solution`].
///
/// Fitness convention is **maximization**: the runner compares with strict
/// `>` throughout.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync`: batch fitness evaluation may be
/// distributed with rayon behind the `parallel` feature. Fitness draws no
/// random numbers, so parallel evaluation never changes the search
/// trajectory.
pub trait GaProblem: Send + Sync {
    /// Gene value type.
    type Gene: Copy + PartialEq + Send + Sync + std::fmt::Debug;

    /// Number of loci per chromosome (the number of decision variables).
    fn domain_size(&self) -> usize;

    /// Creates a uniformly random chromosome of [`domain_size`](Self::domain_size)
    /// loci, fitness unset.
    fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome<Self::Gene>;

    /// Computes the fitness of a chromosome (higher is better).
    fn fitness(&self, chromosome: &Chromosome<Self::Gene>) -> f64;

    /// Perturbs a single locus in place.
    fn mutate_gene<R: Rng>(
        &self,
        chromosome: &mut Chromosome<Self::Gene>,
        locus: usize,
        rng: &mut R,
    );

    /// Decodes the genotype into the problem-level solution, with its cost
    /// already evaluated.
    fn decode(&self, chromosome: &Chromosome<Self::Gene>) -> Solution;

    /// Called once after initialization (generation 0) and at the end of
    /// each generation with the best-known fitness.
    ///
    /// Useful for logging or external progress reporting. The default
    /// implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chromosome_has_no_fitness() {
        let c = Chromosome::new(vec![0u8, 1, 1]);
        assert!(!c.has_fitness());
        assert_eq!(c.len(), 3);
        assert_eq!(c.genes(), &[0, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "fitness read before evaluation")]
    fn test_unset_fitness_read_panics() {
        let c = Chromosome::new(vec![1u8]);
        c.fitness();
    }

    #[test]
    fn test_set_gene_invalidates_fitness() {
        let mut c = Chromosome::new(vec![0u8, 0]);
        c.set_fitness(2.0);
        assert!((c.fitness() - 2.0).abs() < 1e-12);

        c.set_gene(1, 1);
        assert!(!c.has_fitness());
        assert_eq!(c.genes(), &[0, 1]);
    }

    #[test]
    fn test_genes_mut_invalidates_fitness() {
        let mut c = Chromosome::new(vec![5i32, 6]);
        c.set_fitness(11.0);
        c.genes_mut()[0] = 7;
        assert!(!c.has_fitness());
    }

    #[test]
    fn test_clone_carries_genes_and_fitness() {
        let mut c = Chromosome::new(vec![1u8, 0, 1]);
        c.set_fitness(2.0);
        let copy = c.clone();
        assert_eq!(copy.genes(), c.genes());
        assert!((copy.fitness() - 2.0).abs() < 1e-12);

        // The copy is independent of the original.
        c.set_gene(0, 0);
        assert_eq!(copy.genes(), &[1, 0, 1]);
        assert!(copy.has_fitness());
    }
}
