//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process: selection →
//! crossover → mutation → elitist replacement, repeated for a fixed number
//! of generations.

use super::config::GaConfig;
use super::operators::{draw_crosspoints, two_point_crossover};
use super::selection::select_parents;
use super::types::{Chromosome, GaProblem};
use crate::random::create_rng;
use crate::solution::Solution;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA optimization run.
///
/// Contains the decoded best solution found, along with statistics about
/// the evolutionary process.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Decoded form of the best chromosome found during the entire run.
    pub best: Solution,

    /// Best fitness value observed (the GA maximizes fitness).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best-known fitness after initialization and after each generation.
    /// Always has `generations + 1` entries.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Examples
///
/// ```no_run
/// use subsetopt::ga::{GaConfig, GaRunner};
/// use subsetopt::problems::QbfGa;
///
/// let problem = QbfGa::from_file("instances/qbf040")?;
/// let config = GaConfig::default().with_generations(1000).with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// println!("Best fitness: {}", result.best_fitness);
/// # Ok::<(), subsetopt::error::InstanceError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA for exactly `config.generations` generations.
    ///
    /// There is no convergence-based early exit. The best-known chromosome
    /// can only improve over time: elitist replacement reinserts it whenever
    /// an entire offspring generation falls below it.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // 1. Initialize and evaluate population
        let mut population: Vec<Chromosome<P::Gene>> = (0..config.population_size)
            .map(|_| problem.random_chromosome(&mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        // 2. Track best
        let mut best = population[find_best(&population)].clone();
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(best.fitness());
        problem.on_generation(0, best.fitness());

        // 3. Generational loop
        for generation in 1..=config.generations {
            // Selection: one tournament per offspring slot
            let parents = select_parents(&population, config.population_size, &mut rng);

            // Crossover in adjacent pairs
            let mut offspring: Vec<Chromosome<P::Gene>> =
                Vec::with_capacity(config.population_size);
            for pair in parents.chunks_exact(2) {
                if pair[0] == pair[1] {
                    // Same parent won both tournaments: crossing it with
                    // itself is a no-op, so pass copies through unchanged.
                    offspring.push(population[pair[0]].clone());
                    offspring.push(population[pair[1]].clone());
                    continue;
                }
                let (point1, point2) =
                    draw_crosspoints(population[pair[0]].len(), &mut rng);
                let (child1, child2) = two_point_crossover(
                    &population[pair[0]],
                    &population[pair[1]],
                    point1,
                    point2,
                );
                offspring.push(child1);
                offspring.push(child2);
            }
            debug_assert_eq!(
                offspring.len(),
                config.population_size,
                "crossover must preserve population cardinality"
            );
            evaluate_population(problem, &mut offspring, config.parallel);

            // Mutation: outer coin per offspring, then per-locus coin at a
            // tenth of the rate
            let locus_rate = config.mutation_rate / 10.0;
            for chromosome in offspring.iter_mut() {
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    for locus in 0..chromosome.len() {
                        if rng.random_range(0.0..1.0) < locus_rate {
                            problem.mutate_gene(chromosome, locus, &mut rng);
                        }
                    }
                }
            }
            evaluate_population(problem, &mut offspring, config.parallel);

            elitist_replacement(&mut offspring, &best);

            population = offspring;

            // Update best
            let gen_best = find_best(&population);
            if population[gen_best].fitness() > best.fitness() {
                best = population[gen_best].clone();
            }

            fitness_history.push(best.fitness());
            problem.on_generation(generation, best.fitness());
        }

        GaResult {
            best_fitness: best.fitness(),
            best: problem.decode(&best),
            generations: config.generations,
            fitness_history,
        }
    }
}

/// Evaluate every chromosome whose fitness is not yet cached.
///
/// Fitness evaluation draws no random numbers, so running it in parallel
/// never changes the search trajectory.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [Chromosome<P::Gene>],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    if parallel {
        population.par_iter_mut().for_each(|chromosome| {
            if !chromosome.has_fitness() {
                let f = problem.fitness(chromosome);
                chromosome.set_fitness(f);
            }
        });
        return;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for chromosome in population.iter_mut() {
        if !chromosome.has_fitness() {
            let f = problem.fitness(chromosome);
            chromosome.set_fitness(f);
        }
    }
}

/// Index of the chromosome with the highest fitness (first wins on ties).
fn find_best<G>(population: &[Chromosome<G>]) -> usize {
    assert!(!population.is_empty(), "population must not be empty");
    let mut best = 0;
    for i in 1..population.len() {
        if population[i].fitness() > population[best].fitness() {
            best = i;
        }
    }
    best
}

/// Index of the chromosome with the lowest fitness (first wins on ties).
fn find_worst<G>(population: &[Chromosome<G>]) -> usize {
    assert!(!population.is_empty(), "population must not be empty");
    let mut worst = 0;
    for i in 1..population.len() {
        if population[i].fitness() < population[worst].fitness() {
            worst = i;
        }
    }
    worst
}

/// Elitist population update: when the worst offspring falls strictly below
/// the elite's fitness, that slot is overwritten with a copy of the elite.
/// Exactly one slot can change; a tie leaves the generation untouched.
fn elitist_replacement<G: Clone>(offspring: &mut [Chromosome<G>], elite: &Chromosome<G>) {
    let worst = find_worst(offspring);
    if offspring[worst].fitness() < elite.fitness() {
        offspring[worst] = elite.clone();
    }
}

// ============================================================================
// Tests
// ============================================================================
