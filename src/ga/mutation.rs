//! Mutation operators.
//!
//! All mutators share a rate `p ∈ [0, 1]`, but the granularity at which it
//! is applied differs per strategy:
//!
//! | Mutator                     | `p` is drawn           | Length effect     |
//! |-----------------------------|------------------------|-------------------|
//! | [`RandomResettingMutator`]  | once per gene          | unchanged         |
//! | [`RandomAdderMutator`]      | once per append attempt| grows by 0..=max  |
//! | [`SwapMutator`]             | once per individual    | unchanged         |
//!
//! The rate can be adjusted between runs through
//! [`Mutator::set_mutation_rate`].

use super::types::{Gene, Individual};
use crate::error::{GaError, Result};
use rand::Rng;

/// Stochastically perturbs a single individual in place.
pub trait Mutator<G: Gene>: Send + Sync {
    /// Applies the mutation.
    fn mutate<R: Rng>(&self, individual: &mut Individual<G>, rng: &mut R);

    /// Current mutation rate.
    fn mutation_rate(&self) -> f64;

    /// Replaces the mutation rate.
    ///
    /// # Errors
    /// [`GaError::InvalidMutationRate`] if `rate` is outside `[0, 1]`.
    fn set_mutation_rate(&mut self, rate: f64) -> Result<()>;
}

fn check_rate(rate: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(GaError::InvalidMutationRate(rate))
    }
}

fn check_alphabet<G>(alphabet: &[G]) -> Result<()> {
    if alphabet.is_empty() {
        return Err(GaError::EmptyAlphabet);
    }
    Ok(())
}

fn pick<'a, G, R: Rng>(alphabet: &'a [G], rng: &mut R) -> &'a G {
    &alphabet[rng.random_range(0..alphabet.len())]
}

// ============================================================================
// Random resetting
// ============================================================================

/// Replaces each gene, independently with probability `p`, by a value drawn
/// uniformly from the alphabet.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomResettingMutator<G> {
    rate: f64,
    alphabet: Vec<G>,
}

impl<G: Gene> RandomResettingMutator<G> {
    /// Creates the mutator.
    ///
    /// # Errors
    /// - [`GaError::InvalidMutationRate`] if `rate` is outside `[0, 1]`
    /// - [`GaError::EmptyAlphabet`] if `alphabet` is empty
    pub fn new(rate: f64, alphabet: Vec<G>) -> Result<Self> {
        let rate = check_rate(rate)?;
        check_alphabet(&alphabet)?;
        Ok(Self { rate, alphabet })
    }

    /// Values genes are reset to.
    pub fn alphabet(&self) -> &[G] {
        &self.alphabet
    }
}

impl<G: Gene> Mutator<G> for RandomResettingMutator<G> {
    fn mutate<R: Rng>(&self, individual: &mut Individual<G>, rng: &mut R) {
        for gene in individual.iter_mut() {
            if rng.random::<f64>() < self.rate {
                *gene = pick(&self.alphabet, rng).clone();
            }
        }
    }

    fn mutation_rate(&self) -> f64 {
        self.rate
    }

    fn set_mutation_rate(&mut self, rate: f64) -> Result<()> {
        self.rate = check_rate(rate)?;
        Ok(())
    }
}

// ============================================================================
// Random adder
// ============================================================================

/// Grows an individual by appending random alphabet values.
///
/// Draws `k` uniformly from `[1, max_genes]`, then makes `k` append attempts,
/// each succeeding independently with probability `p`.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomAdderMutator<G> {
    rate: f64,
    alphabet: Vec<G>,
    max_genes: usize,
}

impl<G: Gene> RandomAdderMutator<G> {
    /// Default upper bound on appended genes per call.
    pub const DEFAULT_MAX_GENES: usize = 5;

    /// Creates the mutator with `max_genes` = [`DEFAULT_MAX_GENES`](Self::DEFAULT_MAX_GENES).
    ///
    /// # Errors
    /// - [`GaError::InvalidMutationRate`] if `rate` is outside `[0, 1]`
    /// - [`GaError::EmptyAlphabet`] if `alphabet` is empty
    pub fn new(rate: f64, alphabet: Vec<G>) -> Result<Self> {
        Self::with_max_genes(rate, alphabet, Self::DEFAULT_MAX_GENES)
    }

    /// Creates the mutator with an explicit `max_genes`.
    ///
    /// # Errors
    /// As [`new`](Self::new), plus [`GaError::InvalidMaxGenes`] if
    /// `max_genes` is zero.
    pub fn with_max_genes(rate: f64, alphabet: Vec<G>, max_genes: usize) -> Result<Self> {
        let rate = check_rate(rate)?;
        check_alphabet(&alphabet)?;
        if max_genes == 0 {
            return Err(GaError::InvalidMaxGenes);
        }
        Ok(Self {
            rate,
            alphabet,
            max_genes,
        })
    }

    /// Upper bound on genes appended per call.
    pub fn max_genes(&self) -> usize {
        self.max_genes
    }

    /// Values appended genes are drawn from.
    pub fn alphabet(&self) -> &[G] {
        &self.alphabet
    }
}

impl<G: Gene> Mutator<G> for RandomAdderMutator<G> {
    fn mutate<R: Rng>(&self, individual: &mut Individual<G>, rng: &mut R) {
        let attempts = rng.random_range(1..=self.max_genes);
        for _ in 0..attempts {
            if rng.random::<f64>() < self.rate {
                individual.push(pick(&self.alphabet, rng).clone());
            }
        }
    }

    fn mutation_rate(&self) -> f64 {
        self.rate
    }

    fn set_mutation_rate(&mut self, rate: f64) -> Result<()> {
        self.rate = check_rate(rate)?;
        Ok(())
    }
}

// ============================================================================
// Swap
// ============================================================================

/// With probability `p`, evaluated once per call, exchanges two distinct
/// random positions.
///
/// Individuals with fewer than two genes are returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapMutator {
    rate: f64,
}

impl SwapMutator {
    /// Creates the mutator.
    ///
    /// # Errors
    /// [`GaError::InvalidMutationRate`] if `rate` is outside `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self> {
        Ok(Self {
            rate: check_rate(rate)?,
        })
    }
}

impl<G: Gene> Mutator<G> for SwapMutator {
    fn mutate<R: Rng>(&self, individual: &mut Individual<G>, rng: &mut R) {
        if rng.random::<f64>() >= self.rate {
            return;
        }
        let n = individual.len();
        if n < 2 {
            return;
        }
        let i = rng.random_range(0..n);
        // Draw from the n - 1 other positions
        let mut j = rng.random_range(0..n - 1);
        if j >= i {
            j += 1;
        }
        individual.swap(i, j);
    }

    fn mutation_rate(&self) -> f64 {
        self.rate
    }

    fn set_mutation_rate(&mut self, rate: f64) -> Result<()> {
        self.rate = check_rate(rate)?;
        Ok(())
    }
}

// ============================================================================
// Runtime-selected strategy
// ============================================================================

/// One of the built-in mutators, chosen at runtime.
///
/// ```
/// use genealgo::ga::{MutationStrategy, Mutator, SwapMutator};
///
/// let mut m: MutationStrategy<char> = SwapMutator::new(0.2).unwrap().into();
/// m.set_mutation_rate(0.4).unwrap();
/// assert_eq!(m.mutation_rate(), 0.4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MutationStrategy<G> {
    /// See [`RandomResettingMutator`].
    RandomResetting(RandomResettingMutator<G>),
    /// See [`RandomAdderMutator`].
    RandomAdder(RandomAdderMutator<G>),
    /// See [`SwapMutator`].
    Swap(SwapMutator),
}

impl<G: Gene> Mutator<G> for MutationStrategy<G> {
    fn mutate<R: Rng>(&self, individual: &mut Individual<G>, rng: &mut R) {
        match self {
            MutationStrategy::RandomResetting(m) => m.mutate(individual, rng),
            MutationStrategy::RandomAdder(m) => m.mutate(individual, rng),
            MutationStrategy::Swap(m) => m.mutate(individual, rng),
        }
    }

    fn mutation_rate(&self) -> f64 {
        match self {
            MutationStrategy::RandomResetting(m) => m.mutation_rate(),
            MutationStrategy::RandomAdder(m) => m.mutation_rate(),
            MutationStrategy::Swap(m) => <SwapMutator as Mutator<G>>::mutation_rate(m),
        }
    }

    fn set_mutation_rate(&mut self, rate: f64) -> Result<()> {
        match self {
            MutationStrategy::RandomResetting(m) => m.set_mutation_rate(rate),
            MutationStrategy::RandomAdder(m) => m.set_mutation_rate(rate),
            MutationStrategy::Swap(m) => <SwapMutator as Mutator<G>>::set_mutation_rate(m, rate),
        }
    }
}

impl<G> From<RandomResettingMutator<G>> for MutationStrategy<G> {
    fn from(m: RandomResettingMutator<G>) -> Self {
        MutationStrategy::RandomResetting(m)
    }
}

impl<G> From<RandomAdderMutator<G>> for MutationStrategy<G> {
    fn from(m: RandomAdderMutator<G>) -> Self {
        MutationStrategy::RandomAdder(m)
    }
}

impl<G> From<SwapMutator> for MutationStrategy<G> {
    fn from(m: SwapMutator) -> Self {
        MutationStrategy::Swap(m)
    }
}
