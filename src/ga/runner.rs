//! GA generational loop execution.
//!
//! [`GeneticAlgo`] orchestrates the evolutionary process:
//! evaluation → selection → crossover → mutation → replacement → repeat.
//!
//! # State machine
//!
//! ```text
//! INITIALIZED ──run──▶ RUNNING(g) ──best == target──▶ CONVERGED
//!                          │
//!                          └──g == budget──────────▶ EXHAUSTED
//! ```
//!
//! Each generation breeds `⌊N/2⌋` offspring pairs from a frozen snapshot of
//! the current population and its fitnesses, then replaces the population
//! wholesale (no elitism). For odd `N` one slot is dropped every generation,
//! so the population settles at `2·⌊N/2⌋`.

use super::config::GaConfig;
use super::crossover::Crossover;
use super::mutation::Mutator;
use super::population::Population;
use super::selection::ParentSelector;
use super::types::{Fitness, Gene, Individual};
use crate::error::{GaError, Result};
use crate::random::rng_from;
use log::{debug, info};
use rand::Rng;
use std::marker::PhantomData;

#[cfg(feature = "parallel")]
use crate::random::create_rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Terminal state of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// A generation's best fitness reached the target.
    Converged,
    /// The generation budget ran out first.
    Exhausted,
}

/// Best individual of one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord<G> {
    /// 1-indexed generation number.
    pub generation: usize,

    /// Highest-fitness individual of the generation (latest wins on ties).
    pub best: Individual<G>,

    /// Fitness of `best`.
    pub fitness: f64,

    /// Population size after the generation.
    pub population_size: usize,
}

/// Result of a GA run: one record per completed generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult<G> {
    /// Per-generation bests, in order.
    pub records: Vec<GenerationRecord<G>>,

    /// How the search ended.
    pub state: SearchState,
}

impl<G> GaResult<G> {
    /// Best record of the final generation.
    pub fn best(&self) -> Option<&GenerationRecord<G>> {
        self.records.last()
    }

    /// Highest-fitness record across all generations (latest wins on ties).
    ///
    /// Without elitism the final generation is not necessarily the best one.
    pub fn best_overall(&self) -> Option<&GenerationRecord<G>> {
        self.records
            .iter()
            .max_by(|a, b| {
                a.fitness
                    .partial_cmp(&b.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Number of generations executed.
    pub fn generations(&self) -> usize {
        self.records.len()
    }

    /// Whether the search reached the target fitness.
    pub fn converged(&self) -> bool {
        self.state == SearchState::Converged
    }

    /// Best individual of every generation, in order.
    pub fn into_individuals(self) -> Vec<Individual<G>> {
        self.records.into_iter().map(|r| r.best).collect()
    }
}

/// Executes the generational loop with injected strategy components.
///
/// # Usage
///
/// ```
/// use genealgo::ga::{
///     GaConfig, GeneticAlgo, Population, RandomResettingMutator, RouletteWheelSelector,
///     SinglePointCrossover,
/// };
///
/// let alphabet = vec![0u8, 1];
/// let fitness = |ind: &[u8]| {
///     ind.iter().filter(|&&g| g == 1).count() as f64 / ind.len().max(1) as f64
/// };
/// let ga = GeneticAlgo::new(
///     fitness,
///     RouletteWheelSelector::default(),
///     SinglePointCrossover::default(),
///     RandomResettingMutator::new(0.2, alphabet).unwrap(),
///     GaConfig::default().with_generations(100).with_seed(7),
/// )
/// .unwrap();
///
/// let population = Population::new((0..10).map(|i| vec![0, i % 2, 0, 1]).collect()).unwrap();
/// let result = ga.run(population).unwrap();
/// assert!(result.generations() <= 100);
/// ```
pub struct GeneticAlgo<G, F, S, C, M> {
    fitness: F,
    selector: S,
    crossover: C,
    mutator: M,
    config: GaConfig,
    _gene: PhantomData<fn() -> G>,
}

impl<G, F, S, C, M> GeneticAlgo<G, F, S, C, M>
where
    G: Gene,
    F: Fitness<G>,
    S: ParentSelector<G>,
    C: Crossover<G>,
    M: Mutator<G>,
{
    /// Assembles a runner.
    ///
    /// # Errors
    /// Any error from [`GaConfig::validate`].
    pub fn new(fitness: F, selector: S, crossover: C, mutator: M, config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fitness,
            selector,
            crossover,
            mutator,
            config,
            _gene: PhantomData,
        })
    }

    /// Run configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Fitness evaluator.
    pub fn fitness(&self) -> &F {
        &self.fitness
    }

    /// Mutation operator.
    pub fn mutator(&self) -> &M {
        &self.mutator
    }

    /// Mutable mutation operator, e.g. to retune its rate between runs.
    pub fn mutator_mut(&mut self) -> &mut M {
        &mut self.mutator
    }

    /// Runs the search, seeding the RNG from the configuration.
    ///
    /// # Errors
    /// - [`GaError::PopulationTooSmall`] if `population` has fewer than 2
    ///   individuals
    /// - any domain error raised by the selector
    pub fn run(&self, population: Population<G>) -> Result<GaResult<G>> {
        let mut rng = rng_from(self.config.seed);
        self.run_with_rng(population, &mut rng)
    }

    /// Runs the search with a caller-supplied RNG.
    ///
    /// # Errors
    /// See [`run`](Self::run).
    pub fn run_with_rng<R: Rng>(
        &self,
        population: Population<G>,
        rng: &mut R,
    ) -> Result<GaResult<G>> {
        if population.len() < 2 {
            return Err(GaError::PopulationTooSmall {
                size: population.len(),
            });
        }

        let budget = self.config.generations;
        let mut individuals = population.into_individuals();
        let mut fitnesses = self.compute_fitness(&individuals);
        let mut records = Vec::with_capacity(budget);

        for generation in 1..=budget {
            individuals = self.next_generation(&individuals, &fitnesses, rng)?;
            fitnesses = self.compute_fitness(&individuals);

            let idx = best_index(&fitnesses).ok_or(GaError::PopulationTooSmall {
                size: individuals.len(),
            })?;
            let record = GenerationRecord {
                generation,
                best: individuals[idx].clone(),
                fitness: fitnesses[idx],
                population_size: individuals.len(),
            };
            debug!(
                "generation {}: best fitness {:.6}, population {}",
                generation, record.fitness, record.population_size
            );

            let converged = record.fitness == self.config.target_fitness;
            records.push(record);

            if converged {
                info!("converged at generation {generation}");
                return Ok(GaResult {
                    records,
                    state: SearchState::Converged,
                });
            }
        }

        info!("generation budget of {budget} exhausted without convergence");
        Ok(GaResult {
            records,
            state: SearchState::Exhausted,
        })
    }

    /// Evaluates every individual, in order.
    pub fn compute_fitness(&self, individuals: &[Individual<G>]) -> Vec<f64> {
        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return individuals
                    .par_iter()
                    .map(|ind| self.fitness.evaluate(ind))
                    .collect();
            }
        }

        individuals
            .iter()
            .map(|ind| self.fitness.evaluate(ind))
            .collect()
    }

    /// Breeds `⌊N/2⌋` offspring pairs from a frozen snapshot.
    fn next_generation<R: Rng>(
        &self,
        individuals: &[Individual<G>],
        fitnesses: &[f64],
        rng: &mut R,
    ) -> Result<Vec<Individual<G>>> {
        let pairs = individuals.len() / 2;

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                // One seed per pair, drawn sequentially so the run stays reproducible
                let seeds: Vec<u64> = (0..pairs).map(|_| rng.random()).collect();
                let children = seeds
                    .into_par_iter()
                    .map(|seed| {
                        let mut local = create_rng(seed);
                        self.breed(individuals, fitnesses, &mut local)
                    })
                    .collect::<Result<Vec<_>>>()?;
                return Ok(children.into_iter().flat_map(|(a, b)| [a, b]).collect());
            }
        }

        let mut next = Vec::with_capacity(pairs * 2);
        for _ in 0..pairs {
            let (a, b) = self.breed(individuals, fitnesses, rng)?;
            next.push(a);
            next.push(b);
        }
        Ok(next)
    }

    /// Select → crossover → mutate each offspring.
    fn breed<R: Rng>(
        &self,
        individuals: &[Individual<G>],
        fitnesses: &[f64],
        rng: &mut R,
    ) -> Result<(Individual<G>, Individual<G>)> {
        let (x, y) = self.selector.select(individuals, fitnesses, rng)?;
        let (mut a, mut b) = self.crossover.crossover(x, y, rng);
        self.mutator.mutate(&mut a, rng);
        self.mutator.mutate(&mut b, rng);
        Ok((a, b))
    }
}

/// Index of the highest fitness; the latest one wins on ties.
pub fn best_index(fitnesses: &[f64]) -> Option<usize> {
    fitnesses
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}

// ============================================================================
// Tests
// ============================================================================
