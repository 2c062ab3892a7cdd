//! Parent selection strategies.
//!
//! A selector draws a pair of value-distinct parents from the current
//! population, biased by fitness. The population and fitness slices are a
//! frozen snapshot for the whole generation.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Gene, Individual};
use crate::error::{GaError, Result};
use log::{debug, warn};
use rand::Rng;
use std::borrow::Cow;

/// Chooses two parents from a population.
pub trait ParentSelector<G: Gene>: Send + Sync {
    /// Selects a parent pair.
    ///
    /// `fitnesses[i]` is the fitness of `population[i]`.
    fn select<'a, R: Rng>(
        &self,
        population: &'a [Individual<G>],
        fitnesses: &[f64],
        rng: &mut R,
    ) -> Result<(&'a Individual<G>, &'a Individual<G>)>;
}

/// What the roulette selector does when it cannot draw two distinct parents
/// within its retry limit.
///
/// This happens when every individual that carries non-zero fitness is
/// value-equal: a single-individual population, a fully converged one, or
/// one where only a single individual has positive fitness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PairFallback {
    /// Return the last draw as an equal pair `(X, X)` and log a warning.
    #[default]
    Duplicate,
    /// Fail with [`GaError::DegeneratePopulation`].
    Fail,
}

/// Fitness-proportionate (roulette wheel) selection of a distinct pair.
///
/// Each draw picks individual `i` with probability `fitness[i] / Σfitness`,
/// with replacement. Both parents are redrawn together until they differ by
/// value, for at most `max_retries` rounds.
///
/// # Examples
///
/// ```
/// use genealgo::ga::{ParentSelector, RouletteWheelSelector};
/// use genealgo::random::create_rng;
///
/// let population = vec![vec!['a'], vec!['b'], vec!['c']];
/// let fitnesses = [0.2, 0.5, 0.3];
/// let mut rng = create_rng(42);
///
/// let (x, y) = RouletteWheelSelector::default()
///     .select(&population, &fitnesses, &mut rng)
///     .unwrap();
/// assert_ne!(x, y);
/// ```
///
/// # Complexity
/// O(n) per draw (linear scan of the cumulative weights)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouletteWheelSelector {
    max_retries: usize,
    fallback: PairFallback,
}

impl Default for RouletteWheelSelector {
    fn default() -> Self {
        Self {
            max_retries: 1000,
            fallback: PairFallback::Duplicate,
        }
    }
}

impl RouletteWheelSelector {
    /// Creates a selector with the default retry limit (1000) and the
    /// [`PairFallback::Duplicate`] policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of pair draws before the fallback applies.
    ///
    /// # Errors
    /// [`GaError::InvalidRetryLimit`] if `max_retries` is zero.
    pub fn with_max_retries(mut self, max_retries: usize) -> Result<Self> {
        if max_retries == 0 {
            return Err(GaError::InvalidRetryLimit);
        }
        self.max_retries = max_retries;
        Ok(self)
    }

    /// Sets the degenerate-population policy.
    pub fn with_fallback(mut self, fallback: PairFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Retry limit.
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Degenerate-population policy.
    pub fn fallback(&self) -> PairFallback {
        self.fallback
    }
}

impl<G: Gene> ParentSelector<G> for RouletteWheelSelector {
    fn select<'a, R: Rng>(
        &self,
        population: &'a [Individual<G>],
        fitnesses: &[f64],
        rng: &mut R,
    ) -> Result<(&'a Individual<G>, &'a Individual<G>)> {
        let (weights, total) = selection_weights(population.len(), fitnesses)?;

        if let Some(only) = sole_candidate(population, &weights) {
            return match self.fallback {
                PairFallback::Duplicate => {
                    debug!("every selectable individual is equal; returning an equal pair");
                    Ok((&population[only], &population[only]))
                }
                PairFallback::Fail => Err(GaError::DegeneratePopulation { retries: 0 }),
            };
        }

        let mut x = spin(&weights, total, rng);
        let mut y = spin(&weights, total, rng);
        let mut draws = 1;
        while population[x] == population[y] {
            if draws >= self.max_retries {
                return match self.fallback {
                    PairFallback::Duplicate => {
                        warn!(
                            "no distinct parent pair after {draws} draws; returning an equal pair"
                        );
                        Ok((&population[x], &population[x]))
                    }
                    PairFallback::Fail => Err(GaError::DegeneratePopulation { retries: draws }),
                };
            }
            x = spin(&weights, total, rng);
            y = spin(&weights, total, rng);
            draws += 1;
        }

        Ok((&population[x], &population[y]))
    }
}

/// Validates the fitness vector and returns the selection weights with their
/// sum.
///
/// Weights are the fitnesses themselves unless their sum overflows, in which
/// case they are divided by the largest one. Relative proportions are kept.
fn selection_weights(
    population_len: usize,
    fitnesses: &[f64],
) -> Result<(Cow<'_, [f64]>, f64)> {
    if population_len != fitnesses.len() {
        return Err(GaError::FitnessCountMismatch {
            population: population_len,
            fitnesses: fitnesses.len(),
        });
    }

    for (index, &value) in fitnesses.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(GaError::InvalidFitness { index, value });
        }
    }

    let total: f64 = fitnesses.iter().sum();
    if total <= 0.0 {
        return Err(GaError::ZeroTotalFitness);
    }
    if total.is_finite() {
        return Ok((Cow::Borrowed(fitnesses), total));
    }

    let max = fitnesses.iter().copied().fold(0.0_f64, f64::max);
    let scaled: Vec<f64> = fitnesses.iter().map(|&w| w / max).collect();
    let total = scaled.iter().sum();
    Ok((Cow::Owned(scaled), total))
}

/// Index of the only selectable individual, if every positive-weight
/// individual is value-equal to it.
fn sole_candidate<G: Gene>(population: &[Individual<G>], weights: &[f64]) -> Option<usize> {
    let mut selectable = weights
        .iter()
        .enumerate()
        .filter(|&(_, &w)| w > 0.0)
        .map(|(i, _)| i);
    let first = selectable.next()?;
    if selectable.all(|i| population[i] == population[first]) {
        Some(first)
    } else {
        None
    }
}

/// One spin of the wheel: index `i` with probability `fitnesses[i] / total`.
fn spin<R: Rng>(fitnesses: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, &w) in fitnesses.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = i;
        if cumulative > threshold {
            return i;
        }
    }

    last_positive // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn letters(n: usize) -> Vec<Individual<char>> {
        (0..n).map(|i| vec![(b'a' + i as u8) as char]).collect()
    }

    fn index_of(population: &[Individual<char>], ind: &Individual<char>) -> usize {
        population.iter().position(|p| p == ind).unwrap()
    }

    #[test]
    fn test_pair_is_distinct() {
        let pop = letters(5);
        let fit = [0.1, 0.2, 0.3, 0.2, 0.2];
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (x, y) = RouletteWheelSelector::new()
                .select(&pop, &fit, &mut rng)
                .unwrap();
            assert_ne!(x, y);
        }
    }

    #[test]
    fn test_roulette_favors_fittest() {
        let pop = letters(4);
        let fit = [1.0, 2.0, 10.0, 1.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..5000 {
            let (x, y) = RouletteWheelSelector::new()
                .select(&pop, &fit, &mut rng)
                .unwrap();
            counts[index_of(&pop, x)] += 1;
            counts[index_of(&pop, y)] += 1;
        }
        let best = counts[2];
        assert!(
            counts.iter().enumerate().all(|(i, &c)| i == 2 || c < best),
            "fittest should be drawn most often, got {counts:?}"
        );
    }

    #[test]
    fn test_spin_is_proportional() {
        let fit = [1.0, 3.0];
        let mut rng = create_rng(7);
        let n = 20_000;
        let hits = (0..n).filter(|_| spin(&fit, 4.0, &mut rng) == 1).count();
        let ratio = hits as f64 / n as f64;
        assert!((ratio - 0.75).abs() < 0.02, "expected ~0.75, got {ratio}");
    }

    #[test]
    fn test_spin_skips_zero_weights() {
        let fit = [0.0, 0.0, 2.0, 0.0];
        let mut rng = create_rng(3);
        for _ in 0..200 {
            assert_eq!(spin(&fit, 2.0, &mut rng), 2);
        }
    }

    #[test]
    fn test_zero_total_fitness() {
        let pop = letters(3);
        let mut rng = create_rng(1);
        let err = RouletteWheelSelector::new()
            .select(&pop, &[0.0, 0.0, 0.0], &mut rng)
            .unwrap_err();
        assert_eq!(err, GaError::ZeroTotalFitness);
        assert!(err.is_domain());
    }

    #[test]
    fn test_invalid_fitness_values() {
        let pop = letters(2);
        let mut rng = create_rng(1);
        let sel = RouletteWheelSelector::new();

        let err = sel.select(&pop, &[1.0, -0.5], &mut rng).unwrap_err();
        assert!(matches!(err, GaError::InvalidFitness { index: 1, .. }));

        let err = sel.select(&pop, &[f64::NAN, 1.0], &mut rng).unwrap_err();
        assert!(matches!(err, GaError::InvalidFitness { index: 0, .. }));
    }

    #[test]
    fn test_count_mismatch() {
        let pop = letters(3);
        let mut rng = create_rng(1);
        let err = RouletteWheelSelector::new()
            .select(&pop, &[1.0], &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            GaError::FitnessCountMismatch {
                population: 3,
                fitnesses: 1
            }
        );
    }

    #[test]
    fn test_single_individual_duplicate_fallback() {
        let pop = letters(1);
        let mut rng = create_rng(1);
        let sel = RouletteWheelSelector::new().with_max_retries(10).unwrap();
        let (x, y) = sel.select(&pop, &[0.5], &mut rng).unwrap();
        assert_eq!(x, y);
        assert_eq!(x, &pop[0]);
    }

    #[test]
    fn test_converged_population_fail_fallback() {
        let pop = vec![vec!['z', 'z']; 6];
        let fit = [0.5; 6];
        let mut rng = create_rng(1);
        let sel = RouletteWheelSelector::new()
            .with_max_retries(25)
            .unwrap()
            .with_fallback(PairFallback::Fail);
        let err = sel.select(&pop, &fit, &mut rng).unwrap_err();
        assert_eq!(err, GaError::DegeneratePopulation { retries: 0 });
    }

    #[test]
    fn test_only_one_positive_individual() {
        // The zero-fitness individuals are never drawn, so no distinct pair exists
        let pop = letters(3);
        let fit = [0.0, 1.0, 0.0];
        let mut rng = create_rng(9);
        let sel = RouletteWheelSelector::new().with_max_retries(5).unwrap();
        let (x, y) = sel.select(&pop, &fit, &mut rng).unwrap();
        assert_eq!(x, &pop[1]);
        assert_eq!(y, &pop[1]);
    }

    #[test]
    fn test_distinctness_is_by_value() {
        // Two separate vectors with equal contents count as the same parent
        let pop = vec![vec![1u8, 2], vec![1u8, 2], vec![3u8]];
        let fit = [1.0, 1.0, 1.0];
        let mut rng = create_rng(5);
        for _ in 0..200 {
            let (x, y) = RouletteWheelSelector::new()
                .select(&pop, &fit, &mut rng)
                .unwrap();
            assert_ne!(x, y);
        }
    }

    #[test]
    fn test_overflowing_total_is_rescaled() {
        let pop = vec![vec![1u8], vec![2u8]];
        let fit = [f64::MAX, f64::MAX];
        let mut rng = create_rng(11);
        for _ in 0..100 {
            let (x, y) = RouletteWheelSelector::new()
                .select(&pop, &fit, &mut rng)
                .unwrap();
            assert_ne!(x, y);
        }
    }

    #[test]
    fn test_rescaled_weights_keep_proportions() {
        let fit = [f64::MAX, f64::MAX / 2.0];
        let (weights, total) = selection_weights(2, &fit).unwrap();
        assert_eq!(&*weights, &[1.0, 0.5][..]);
        assert_eq!(total, 1.5);

        let fit = [1.0, 3.0];
        let (weights, total) = selection_weights(2, &fit).unwrap();
        assert!(matches!(weights, Cow::Borrowed(_)));
        assert_eq!(total, 4.0);
    }

    #[test]
    fn test_converged_population_skips_retries() {
        // Without the upfront check this would spin usize::MAX times
        let pop = vec![vec!['z', 'z']; 6];
        let fit = [0.5; 6];
        let mut rng = create_rng(1);
        let sel = RouletteWheelSelector::new()
            .with_max_retries(usize::MAX)
            .unwrap();
        let (x, y) = sel.select(&pop, &fit, &mut rng).unwrap();
        assert_eq!(x, &pop[0]);
        assert_eq!(y, &pop[0]);
    }

    #[test]
    fn test_sole_candidate() {
        let pop = vec![vec![1u8], vec![2u8], vec![1u8]];
        assert_eq!(sole_candidate(&pop, &[1.0, 0.0, 2.0]), Some(0));
        assert_eq!(sole_candidate(&pop, &[0.0, 1.0, 0.0]), Some(1));
        assert_eq!(sole_candidate(&pop, &[1.0, 1.0, 0.0]), None);
    }

    #[test]
    fn test_zero_retry_limit_rejected() {
        assert_eq!(
            RouletteWheelSelector::new().with_max_retries(0),
            Err(GaError::InvalidRetryLimit)
        );
    }

    #[test]
    fn test_defaults() {
        let sel = RouletteWheelSelector::default();
        assert_eq!(sel.max_retries(), 1000);
        assert_eq!(sel.fallback(), PairFallback::Duplicate);
    }
}
