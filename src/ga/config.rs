//! GA configuration.
//!
//! [`GaConfig`] holds the run-level parameters of the generational loop.
//! Operator parameters (mutation rate, split policy, size bounds) live on the
//! operators themselves and are validated by their constructors.

use crate::error::{GaError, Result};

/// Default convergence sentinel: a fitness of exactly `1.0`.
pub const PERFECT_FITNESS: f64 = 1.0;

/// Configuration for the genetic algorithm runner.
///
/// Fields are public and may also be deserialized directly; neither path
/// checks them. [`GeneticAlgo::new`](super::GeneticAlgo::new) calls
/// [`validate`](Self::validate), so an invalid configuration never reaches a
/// run.
///
/// # Defaults
///
/// ```
/// use genealgo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.generations, 10);
/// assert_eq!(config.target_fitness, 1.0);
/// assert!(!config.parallel);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use genealgo::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_generations(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Generation budget. The search stops after this many generations if
    /// it has not converged.
    pub generations: usize,

    /// Fitness value that ends the search early.
    ///
    /// Compared with exact equality against each generation's best fitness.
    pub target_fitness: f64,

    /// Whether to evaluate fitness and breed offspring pairs in parallel.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    /// Parallel runs remain reproducible for a given seed, but draw a
    /// different random stream than sequential ones.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 10,
            target_fitness: PERFECT_FITNESS,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the convergence sentinel.
    pub fn with_target_fitness(mut self, target: f64) -> Self {
        self.target_fitness = target;
        self
    }

    /// Enables or disables parallel evaluation and breeding.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`GaError::InvalidGenerationBudget`] if `generations` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.generations == 0 {
            return Err(GaError::InvalidGenerationBudget);
        }
        Ok(())
    }
}
