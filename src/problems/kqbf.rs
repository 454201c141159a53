//! Knapsack-constrained quadratic binary function (KQBF).
//!
//! The QBF objective with one weight per variable and a capacity on the
//! total selected weight. The minimizing adapter reports infeasible
//! insertions and exchanges as infinite deltas, so the search machinery
//! never steps outside the knapsack; the GA adapter instead repairs
//! chromosomes while decoding.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rand::Rng;

use super::parse_token;
use super::qbf::Qbf;
use crate::error::InstanceError;
use crate::ga::{Chromosome, GaProblem};
use crate::objective::Evaluator;
use crate::solution::Solution;

/// QBF with a knapsack constraint over per-variable weights.
#[derive(Debug, Clone)]
pub struct Kqbf {
    qbf: Qbf,
    weights: Vec<f64>,
    capacity: f64,
}

impl Kqbf {
    /// Wraps an objective with weights and a capacity.
    ///
    /// # Panics
    /// Panics if the number of weights differs from the number of variables.
    pub fn new(qbf: Qbf, weights: Vec<f64>, capacity: f64) -> Self {
        assert_eq!(
            weights.len(),
            qbf.size(),
            "one weight per variable required"
        );
        Self {
            qbf,
            weights,
            capacity,
        }
    }

    /// Reads an instance from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InstanceError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Reads an instance from any byte source.
    ///
    /// The format extends the QBF layout: the size `n`, the knapsack
    /// capacity, the `n` weights, then the upper-triangular coefficients.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, InstanceError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let mut tokens = text.split_whitespace();

        let size: usize = parse_token(&mut tokens, "domain size")?;
        let capacity: f64 = parse_token(&mut tokens, "knapsack capacity")?;
        let mut weights = Vec::with_capacity(size);
        for _ in 0..size {
            weights.push(parse_token(&mut tokens, "item weight")?);
        }
        let mut matrix = vec![vec![0.0; size]; size];
        for i in 0..size {
            for j in i..size {
                matrix[i][j] = parse_token(&mut tokens, "matrix entry")?;
            }
        }
        Ok(Self {
            qbf: Qbf::new(matrix),
            weights,
            capacity,
        })
    }

    /// Number of binary variables.
    pub fn size(&self) -> usize {
        self.qbf.size()
    }

    /// The unconstrained objective.
    pub fn qbf(&self) -> &Qbf {
        &self.qbf
    }

    /// Per-variable knapsack weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Knapsack capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Total weight of the selected subset.
    pub fn weight(&self, elements: &[usize]) -> f64 {
        elements.iter().map(|&e| self.weights[e]).sum()
    }

    /// Whether the selected subset fits the knapsack.
    pub fn is_feasible(&self, elements: &[usize]) -> bool {
        self.weight(elements) <= self.capacity
    }

    fn fits(&self, candidate: usize, solution: &Solution) -> bool {
        self.weight(&solution.elements) + self.weights[candidate] <= self.capacity
    }

    fn fits_exchange(&self, cand_in: usize, cand_out: usize, solution: &Solution) -> bool {
        self.weight(&solution.elements) + self.weights[cand_in] - self.weights[cand_out]
            <= self.capacity
    }
}

/// Sign-flipped KQBF for the minimizing solvers.
///
/// Moves that would overload the knapsack get an infinite cost delta, which
/// both the construction phase and the move scan treat as ineligible.
#[derive(Debug, Clone)]
pub struct KqbfInverse {
    kqbf: Kqbf,
}

impl KqbfInverse {
    pub fn new(kqbf: Kqbf) -> Self {
        Self { kqbf }
    }

    /// Reads an instance from a file; see [`Kqbf::from_reader`] for the format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InstanceError> {
        Ok(Self::new(Kqbf::from_file(path)?))
    }

    /// The underlying constrained objective.
    pub fn kqbf(&self) -> &Kqbf {
        &self.kqbf
    }
}

impl Evaluator for KqbfInverse {
    fn domain_size(&self) -> usize {
        self.kqbf.size()
    }

    fn evaluate(&self, solution: &mut Solution) -> f64 {
        let cost = -self.kqbf.qbf().value(&solution.elements);
        solution.cost = cost;
        cost
    }

    fn insertion_cost(&self, candidate: usize, solution: &Solution) -> f64 {
        if !solution.contains(candidate) && !self.kqbf.fits(candidate, solution) {
            return f64::INFINITY;
        }
        -self.kqbf.qbf().insertion_value(candidate, solution)
    }

    fn removal_cost(&self, candidate: usize, solution: &Solution) -> f64 {
        -self.kqbf.qbf().removal_value(candidate, solution)
    }

    fn exchange_cost(&self, cand_in: usize, cand_out: usize, solution: &Solution) -> f64 {
        if cand_in == cand_out {
            return 0.0;
        }
        if solution.contains(cand_in) {
            return self.removal_cost(cand_out, solution);
        }
        if !solution.contains(cand_out) {
            return self.insertion_cost(cand_in, solution);
        }
        if !self.kqbf.fits_exchange(cand_in, cand_out, solution) {
            return f64::INFINITY;
        }
        -self.kqbf.qbf().exchange_value(cand_in, cand_out, solution)
    }
}

/// GA adapter for the knapsack-constrained objective.
///
/// Chromosomes are unconstrained bit vectors; decoding walks the loci in
/// order and keeps a set gene only while it still fits, so every decoded
/// solution is feasible. Fitness is the value of the decoded solution.
#[derive(Debug, Clone)]
pub struct KqbfGa {
    kqbf: Kqbf,
}

impl KqbfGa {
    pub fn new(kqbf: Kqbf) -> Self {
        Self { kqbf }
    }

    /// Reads an instance from a file; see [`Kqbf::from_reader`] for the format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InstanceError> {
        Ok(Self::new(Kqbf::from_file(path)?))
    }

    /// The underlying constrained objective.
    pub fn kqbf(&self) -> &Kqbf {
        &self.kqbf
    }
}

impl GaProblem for KqbfGa {
    type Gene = u8;

    fn domain_size(&self) -> usize {
        self.kqbf.size()
    }

    fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome<u8> {
        Chromosome::new(
            (0..self.kqbf.size())
                .map(|_| rng.random_range(0..2))
                .collect(),
        )
    }

    fn fitness(&self, chromosome: &Chromosome<u8>) -> f64 {
        self.decode(chromosome).cost
    }

    fn mutate_gene<R: Rng>(&self, chromosome: &mut Chromosome<u8>, locus: usize, _rng: &mut R) {
        let flipped = 1 - chromosome.genes()[locus];
        chromosome.set_gene(locus, flipped);
    }

    fn decode(&self, chromosome: &Chromosome<u8>) -> Solution {
        let mut elements = Vec::new();
        let mut load = 0.0;
        for (var, &gene) in chromosome.genes().iter().enumerate() {
            if gene == 1 && load + self.kqbf.weights[var] <= self.kqbf.capacity {
                load += self.kqbf.weights[var];
                elements.push(var);
            }
        }
        let mut solution = Solution::from_elements(elements);
        solution.cost = self.kqbf.qbf().value(&solution.elements);
        solution
    }
}
