//! Quadratic binary function (QBF).
//!
//! `f(x) = x' A x` over binary variables, with `A` stored upper-triangular.
//! [`Qbf`] is the raw maximization objective together with its delta forms;
//! [`QbfInverse`] flips the sign to fit the minimizing
//! [`Evaluator`](crate::objective::Evaluator) contract, and [`QbfGa`] adapts
//! the function to the GA's binary chromosomes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rand::Rng;

use super::{parse_token, selected_indices};
use crate::error::InstanceError;
use crate::ga::{Chromosome, GaProblem};
use crate::objective::Evaluator;
use crate::solution::Solution;

/// Quadratic binary function with an upper-triangular coefficient matrix.
///
/// The value of a subset is the sum of `a[i][j]` over all selected pairs
/// `(i, j)`; entries below the diagonal are zero.
#[derive(Debug, Clone)]
pub struct Qbf {
    size: usize,
    matrix: Vec<Vec<f64>>,
}

impl Qbf {
    /// Wraps a coefficient matrix.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn new(matrix: Vec<Vec<f64>>) -> Self {
        let size = matrix.len();
        assert!(
            matrix.iter().all(|row| row.len() == size),
            "coefficient matrix must be square"
        );
        Self { size, matrix }
    }

    /// Reads an instance from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InstanceError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Reads an instance from any byte source.
    ///
    /// The format is a whitespace-separated token stream: the matrix size
    /// `n`, then the `n * (n + 1) / 2` upper-triangular coefficients row by
    /// row (row `i` holds columns `i..n`).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, InstanceError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let mut tokens = text.split_whitespace();

        let size: usize = parse_token(&mut tokens, "matrix size")?;
        let mut matrix = vec![vec![0.0; size]; size];
        for i in 0..size {
            for j in i..size {
                matrix[i][j] = parse_token(&mut tokens, "matrix entry")?;
            }
        }
        Ok(Self { size, matrix })
    }

    /// Number of binary variables.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value of the selected subset.
    pub fn value(&self, elements: &[usize]) -> f64 {
        let mut sum = 0.0;
        for &i in elements {
            for &j in elements {
                sum += self.matrix[i][j];
            }
        }
        sum
    }

    /// Marginal value of `var` against the current selection: its diagonal
    /// term plus both cross terms with every selected variable.
    pub fn contribution(&self, var: usize, solution: &Solution) -> f64 {
        let mut sum = self.matrix[var][var];
        for &other in &solution.elements {
            if other != var {
                sum += self.matrix[var][other] + self.matrix[other][var];
            }
        }
        sum
    }

    /// Value delta for inserting `candidate`; zero if already selected.
    pub fn insertion_value(&self, candidate: usize, solution: &Solution) -> f64 {
        if solution.contains(candidate) {
            0.0
        } else {
            self.contribution(candidate, solution)
        }
    }

    /// Value delta for removing `candidate`; zero if not selected.
    pub fn removal_value(&self, candidate: usize, solution: &Solution) -> f64 {
        if solution.contains(candidate) {
            -self.contribution(candidate, solution)
        } else {
            0.0
        }
    }

    /// Value delta for swapping `cand_in` in and `cand_out` out.
    ///
    /// Degenerate cases collapse to the simpler move: a no-op when the two
    /// candidates coincide, a removal when `cand_in` is already selected,
    /// an insertion when `cand_out` is not.
    pub fn exchange_value(&self, cand_in: usize, cand_out: usize, solution: &Solution) -> f64 {
        if cand_in == cand_out {
            return 0.0;
        }
        if solution.contains(cand_in) {
            return self.removal_value(cand_out, solution);
        }
        if !solution.contains(cand_out) {
            return self.insertion_value(cand_in, solution);
        }
        self.contribution(cand_in, solution) - self.contribution(cand_out, solution)
            - (self.matrix[cand_in][cand_out] + self.matrix[cand_out][cand_in])
    }
}

/// Sign-flipped QBF for the minimizing solvers.
#[derive(Debug, Clone)]
pub struct QbfInverse {
    qbf: Qbf,
}

impl QbfInverse {
    pub fn new(qbf: Qbf) -> Self {
        Self { qbf }
    }

    /// Reads an instance from a file; see [`Qbf::from_reader`] for the format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InstanceError> {
        Ok(Self::new(Qbf::from_file(path)?))
    }

    /// The underlying maximization objective.
    pub fn qbf(&self) -> &Qbf {
        &self.qbf
    }
}

impl Evaluator for QbfInverse {
    fn domain_size(&self) -> usize {
        self.qbf.size()
    }

    fn evaluate(&self, solution: &mut Solution) -> f64 {
        let cost = -self.qbf.value(&solution.elements);
        solution.cost = cost;
        cost
    }

    fn insertion_cost(&self, candidate: usize, solution: &Solution) -> f64 {
        -self.qbf.insertion_value(candidate, solution)
    }

    fn removal_cost(&self, candidate: usize, solution: &Solution) -> f64 {
        -self.qbf.removal_value(candidate, solution)
    }

    fn exchange_cost(&self, cand_in: usize, cand_out: usize, solution: &Solution) -> f64 {
        -self.qbf.exchange_value(cand_in, cand_out, solution)
    }
}

/// GA adapter: binary chromosomes decoded as variable subsets, fitness is
/// the raw (maximized) QBF value.
#[derive(Debug, Clone)]
pub struct QbfGa {
    qbf: Qbf,
}

impl QbfGa {
    pub fn new(qbf: Qbf) -> Self {
        Self { qbf }
    }

    /// Reads an instance from a file; see [`Qbf::from_reader`] for the format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InstanceError> {
        Ok(Self::new(Qbf::from_file(path)?))
    }

    /// The underlying maximization objective.
    pub fn qbf(&self) -> &Qbf {
        &self.qbf
    }
}

impl GaProblem for QbfGa {
    type Gene = u8;

    fn domain_size(&self) -> usize {
        self.qbf.size()
    }

    fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome<u8> {
        Chromosome::new((0..self.qbf.size()).map(|_| rng.random_range(0..2)).collect())
    }

    fn fitness(&self, chromosome: &Chromosome<u8>) -> f64 {
        self.qbf.value(&selected_indices(chromosome.genes()))
    }

    fn mutate_gene<R: Rng>(&self, chromosome: &mut Chromosome<u8>, locus: usize, _rng: &mut R) {
        let flipped = 1 - chromosome.genes()[locus];
        chromosome.set_gene(locus, flipped);
    }

    fn decode(&self, chromosome: &Chromosome<u8>) -> Solution {
        let mut solution = Solution::from_elements(selected_indices(chromosome.genes()));
        solution.cost = self.qbf.value(&solution.elements);
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{GaConfig, GaRunner};
    use crate::grasp::{Construction, GraspConfig, GraspRunner};
    use crate::tabu::{TabuConfig, TabuRunner};
    use proptest::prelude::*;

    fn two_by_two() -> Qbf {
        Qbf::new(vec![vec![1.0, -2.0], vec![0.0, 3.0]])
    }

    // Diagonal [5, 4, -2, -3, -4], every off-diagonal pair -1. The unique
    // maximum is {0, 1} with value 8.
    fn five_vars() -> Qbf {
        let mut matrix = vec![vec![0.0; 5]; 5];
        let diag = [5.0, 4.0, -2.0, -3.0, -4.0];
        for i in 0..5 {
            matrix[i][i] = diag[i];
            for j in (i + 1)..5 {
                matrix[i][j] = -1.0;
            }
        }
        Qbf::new(matrix)
    }

    fn evaluated(qbf: &Qbf, elements: Vec<usize>) -> Solution {
        let mut solution = Solution::from_elements(elements);
        solution.cost = qbf.value(&solution.elements);
        solution
    }

    #[test]
    fn test_value_over_subsets() {
        let qbf = two_by_two();
        assert!((qbf.value(&[]) - 0.0).abs() < 1e-10);
        assert!((qbf.value(&[0]) - 1.0).abs() < 1e-10);
        assert!((qbf.value(&[1]) - 3.0).abs() < 1e-10);
        assert!((qbf.value(&[0, 1]) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_contribution_counts_both_triangles() {
        let qbf = two_by_two();
        let solution = evaluated(&qbf, vec![1]);
        // Diagonal 1.0 plus the cross terms -2.0 and 0.0
        assert!((qbf.contribution(0, &solution) - (-1.0)).abs() < 1e-10);
    }

    #[test]
    fn test_degenerate_deltas_are_zero_or_collapse() {
        let qbf = two_by_two();
        let solution = evaluated(&qbf, vec![0]);

        assert!((qbf.insertion_value(0, &solution) - 0.0).abs() < 1e-10);
        assert!((qbf.removal_value(1, &solution) - 0.0).abs() < 1e-10);
        assert!((qbf.exchange_value(0, 0, &solution) - 0.0).abs() < 1e-10);
        // cand_in already selected: collapses to removing cand_out, which
        // here is not selected either, so the delta is zero
        assert!((qbf.exchange_value(0, 1, &solution) - 0.0).abs() < 1e-10);
        // proper swap: value({1}) - value({0}) = 3 - 1
        assert!((qbf.exchange_value(1, 0, &solution) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_inverse_negates_everything() {
        let inverse = QbfInverse::new(two_by_two());
        let mut solution = Solution::from_elements(vec![1]);

        assert!((inverse.evaluate(&mut solution) - (-3.0)).abs() < 1e-10);
        assert!((solution.cost - (-3.0)).abs() < 1e-10);
        // contribution(0, {1}) = 1 - 2 = -1, flipped to +1
        assert!((inverse.insertion_cost(0, &solution) - 1.0).abs() < 1e-10);
        assert!((inverse.removal_cost(1, &solution) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_reader_parses_triangle() {
        let input = "2\n1 -2\n3\n";
        let qbf = Qbf::from_reader(input.as_bytes()).unwrap();

        assert_eq!(qbf.size(), 2);
        assert!((qbf.value(&[0, 1]) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_reader_rejects_truncated_input() {
        let err = Qbf::from_reader("3\n1 2\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing matrix entry"));
    }

    #[test]
    fn test_reader_rejects_garbage_size() {
        let err = Qbf::from_reader("x\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("matrix size"));
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = Qbf::from_file("/nonexistent/qbf_instance.txt").unwrap_err();
        assert!(matches!(err, InstanceError::Io(_)));
    }

    #[test]
    fn test_ga_adapter_decodes_selection() {
        let ga = QbfGa::new(two_by_two());
        let chromosome = Chromosome::new(vec![1u8, 0]);

        let solution = ga.decode(&chromosome);
        assert_eq!(solution.elements, vec![0]);
        assert!((solution.cost - 1.0).abs() < 1e-10);
        assert!((ga.fitness(&Chromosome::new(vec![1u8, 1])) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_grasp_solves_five_vars() {
        let evaluator = QbfInverse::new(five_vars());
        let config = GraspConfig::default()
            .with_iterations(30)
            .with_construction(Construction::Greedy { alpha: 0.2 })
            .with_seed(42);

        let result = GraspRunner::run(&evaluator, &config);

        assert!((result.best_cost - (-8.0)).abs() < 1e-10);
        let mut elements = result.best.elements.clone();
        elements.sort_unstable();
        assert_eq!(elements, vec![0, 1]);
    }

    #[test]
    fn test_tabu_solves_five_vars() {
        let evaluator = QbfInverse::new(five_vars());
        let config = TabuConfig::default()
            .with_iterations(60)
            .with_tenure(3)
            .with_seed(42);

        let result = TabuRunner::run(&evaluator, &config);

        assert!((result.best_cost - (-8.0)).abs() < 1e-10);
    }

    #[test]
    fn test_ga_solves_five_vars() {
        let problem = QbfGa::new(five_vars());
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(60)
            .with_mutation_rate(0.4)
            .with_seed(42)
            .with_parallel(false);

        let result = GaRunner::run(&problem, &config);

        assert!((result.best_fitness - 8.0).abs() < 1e-10);
        let mut elements = result.best.elements.clone();
        elements.sort_unstable();
        assert_eq!(elements, vec![0, 1]);
    }

    proptest! {
        // Every delta form must agree with a full re-evaluation of the
        // modified subset.
        #[test]
        fn prop_deltas_match_full_reevaluation(
            entries in proptest::collection::vec(-10.0f64..10.0, 16),
            mask in 0u16..16,
            cand_in in 0usize..4,
            cand_out in 0usize..4,
        ) {
            let mut matrix = vec![vec![0.0; 4]; 4];
            for i in 0..4 {
                for j in i..4 {
                    matrix[i][j] = entries[i * 4 + j];
                }
            }
            let qbf = Qbf::new(matrix);

            let elements: Vec<usize> = (0..4).filter(|i| mask & (1 << i) != 0).collect();
            let solution = evaluated(&qbf, elements.clone());

            if !solution.contains(cand_in) {
                let mut extended = elements.clone();
                extended.push(cand_in);
                let expected = qbf.value(&extended) - qbf.value(&elements);
                prop_assert!((qbf.insertion_value(cand_in, &solution) - expected).abs() < 1e-9);
            }

            if solution.contains(cand_out) {
                let reduced: Vec<usize> =
                    elements.iter().copied().filter(|&e| e != cand_out).collect();
                let expected = qbf.value(&reduced) - qbf.value(&elements);
                prop_assert!((qbf.removal_value(cand_out, &solution) - expected).abs() < 1e-9);
            }

            if !solution.contains(cand_in) && solution.contains(cand_out) {
                let mut swapped: Vec<usize> =
                    elements.iter().copied().filter(|&e| e != cand_out).collect();
                swapped.push(cand_in);
                let expected = qbf.value(&swapped) - qbf.value(&elements);
                prop_assert!(
                    (qbf.exchange_value(cand_in, cand_out, &solution) - expected).abs() < 1e-9
                );
            }
        }
    }
}
