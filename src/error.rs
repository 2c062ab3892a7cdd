//! Error types for the GA engine.
//!
//! Errors fall into two classes. Configuration errors are raised eagerly by
//! constructors and `validate()` calls, so a caller can check a setup without
//! running a search. Domain errors arise from the data flowing through the
//! generational loop (fitness values, degenerate populations).

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;

/// Error type for GA construction and execution.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// Population size is zero.
    #[error("population size must be greater than 0")]
    InvalidPopulationSize,

    /// Individual size range is empty or non-positive.
    #[error("invalid size range: ({lb}, {up})")]
    InvalidSizeBounds { lb: usize, up: usize },

    /// Crossover split policy key is not recognised.
    #[error("unknown crossover split policy: {0:?} (expected \"min\" or \"balance\")")]
    UnknownSplitPolicy(String),

    /// Mutation rate outside `[0, 1]`.
    #[error("mutation rate must be in [0, 1], got {0}")]
    InvalidMutationRate(f64),

    /// Mutator alphabet has no values to draw from.
    #[error("mutation alphabet must not be empty")]
    EmptyAlphabet,

    /// `max_genes` of the adder mutator is zero.
    #[error("max_genes must be at least 1")]
    InvalidMaxGenes,

    /// Generation budget is zero.
    #[error("generation budget must be at least 1")]
    InvalidGenerationBudget,

    /// Selector retry limit is zero.
    #[error("selector retry limit must be at least 1")]
    InvalidRetryLimit,

    /// The search needs at least one parent pair per generation.
    ///
    /// A precondition on the initial population rather than on the data of a
    /// generation, so it counts as a configuration error even though it is
    /// raised by `GeneticAlgo::run` before the first generation starts.
    #[error("population of size {size} cannot produce a parent pair (need at least 2)")]
    PopulationTooSmall { size: usize },

    /// Roulette selection over a population whose fitnesses sum to zero.
    #[error("total fitness is zero; selection probabilities are undefined")]
    ZeroTotalFitness,

    /// A fitness value that cannot act as a selection weight.
    #[error("fitness at index {index} is not a finite non-negative number: {value}")]
    InvalidFitness { index: usize, value: f64 },

    /// Population and fitness slices disagree in length.
    #[error("fitness count mismatch: {population} individuals, {fitnesses} fitness values")]
    FitnessCountMismatch { population: usize, fitnesses: usize },

    /// No distinct parent pair was drawn within the retry limit.
    #[error("no distinct parent pair found after {retries} draws")]
    DegeneratePopulation { retries: usize },
}

impl GaError {
    /// Returns `true` for errors raised while validating a configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GaError::InvalidPopulationSize
                | GaError::InvalidSizeBounds { .. }
                | GaError::UnknownSplitPolicy(_)
                | GaError::InvalidMutationRate(_)
                | GaError::EmptyAlphabet
                | GaError::InvalidMaxGenes
                | GaError::InvalidGenerationBudget
                | GaError::InvalidRetryLimit
                | GaError::PopulationTooSmall { .. }
        )
    }

    /// Returns `true` for errors raised by the data inside a running search.
    pub fn is_domain(&self) -> bool {
        !self.is_configuration()
    }
}
