//! Genetic Algorithm framework.
//!
//! A generic GA engine assembled from four injected strategy components.
//! Genes are any value-comparable type; an individual is a variable-length
//! `Vec` of genes.
//!
//! # Core Traits
//!
//! - [`Fitness`]: Maps an individual to a score (higher is better)
//! - [`ParentSelector`]: Draws a distinct parent pair
//! - [`Crossover`]: Recombines two parents into two offspring
//! - [`Mutator`]: Perturbs a single offspring
//! - [`GenomeFactory`]: Produces the initial population
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (generation budget, target fitness, seed)
//! - [`GeneticAlgo`]: Executes the generational loop
//! - [`GaResult`]: Per-generation best records and the terminal state
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, ch. 4

mod config;
mod crossover;
mod mutation;
mod population;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, PERFECT_FITNESS};
pub use crossover::{Crossover, SinglePointCrossover, SplitPolicy};
pub use mutation::{
    MutationStrategy, Mutator, RandomAdderMutator, RandomResettingMutator, SwapMutator,
};
pub use population::{AlphabetFactory, GenomeFactory, Population, SizeBounds};
pub use runner::{best_index, GaResult, GenerationRecord, GeneticAlgo, SearchState};
pub use selection::{PairFallback, ParentSelector, RouletteWheelSelector};
pub use types::{Fitness, Gene, Individual};
