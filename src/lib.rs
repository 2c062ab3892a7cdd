//! Pluggable evolutionary optimization engine.
//!
//! Searches for an individual maximizing a user-supplied fitness function by
//! iterating roulette-wheel selection, single-point crossover, and mutation
//! over a fixed-size population of variable-length gene sequences.
//!
//! - [`ga`]: The engine: strategy traits, built-in operators, and the
//!   generational runner
//! - [`strings`]: Character genomes scored by edit distance to a target
//! - [`random`]: Seeded RNG construction for reproducible runs
//!
//! # Example
//!
//! ```
//! use genealgo::ga::{
//!     GaConfig, GenomeFactory, GeneticAlgo, RandomResettingMutator, RouletteWheelSelector,
//!     SinglePointCrossover,
//! };
//! use genealgo::random::create_rng;
//! use genealgo::strings::{lowercase_alphabet, string_factory, StringFitness};
//!
//! let population = string_factory(20, (1, 10))?.generate(&mut create_rng(1))?;
//! let ga = GeneticAlgo::new(
//!     StringFitness::new("hello"),
//!     RouletteWheelSelector::default(),
//!     SinglePointCrossover::from_key("balance")?,
//!     RandomResettingMutator::new(0.1, lowercase_alphabet())?,
//!     GaConfig::default().with_generations(50).with_seed(1),
//! )?;
//!
//! let result = ga.run(population)?;
//! let last = result.best().expect("at least one generation ran");
//! assert!(last.fitness > 0.0 && last.fitness <= 1.0);
//! # Ok::<(), genealgo::GaError>(())
//! ```

pub mod error;
pub mod ga;
pub mod random;
pub mod strings;

pub use error::{GaError, Result};
