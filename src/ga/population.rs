//! Population container and individual generators.
//!
//! A [`Population`] is created once by a [`GenomeFactory`] and then replaced
//! wholesale by the runner every generation.

use super::types::{Gene, Individual};
use crate::error::{GaError, Result};
use rand::Rng;

/// An ordered, non-empty collection of individuals.
#[derive(Debug, Clone, PartialEq)]
pub struct Population<G> {
    individuals: Vec<Individual<G>>,
}

impl<G: Gene> Population<G> {
    /// Wraps a vector of individuals.
    ///
    /// # Errors
    /// [`GaError::InvalidPopulationSize`] if `individuals` is empty.
    pub fn new(individuals: Vec<Individual<G>>) -> Result<Self> {
        if individuals.is_empty() {
            return Err(GaError::InvalidPopulationSize);
        }
        Ok(Self { individuals })
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false`: construction rejects empty populations.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The individuals in order.
    pub fn individuals(&self) -> &[Individual<G>] {
        &self.individuals
    }

    /// Iterates over the individuals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual<G>> {
        self.individuals.iter()
    }

    /// Consumes the population, returning the individuals.
    pub fn into_individuals(self) -> Vec<Individual<G>> {
        self.individuals
    }
}

impl<'a, G> IntoIterator for &'a Population<G> {
    type Item = &'a Individual<G>;
    type IntoIter = std::slice::Iter<'a, Individual<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

/// Inclusive length range `[lb, up]` for generated individuals.
///
/// Serializes as an `(lb, up)` pair; deserialization goes through
/// [`SizeBounds::new`], so an invalid range is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct SizeBounds {
    lb: usize,
    up: usize,
}

impl SizeBounds {
    /// Creates a size range.
    ///
    /// # Errors
    /// [`GaError::InvalidSizeBounds`] unless `0 < lb <= up`.
    ///
    /// ```
    /// use genealgo::ga::SizeBounds;
    ///
    /// assert!(SizeBounds::new(1, 10).is_ok());
    /// assert!(SizeBounds::new(5, 2).unwrap_err().is_configuration());
    /// ```
    pub fn new(lb: usize, up: usize) -> Result<Self> {
        if lb == 0 || up == 0 || lb > up {
            return Err(GaError::InvalidSizeBounds { lb, up });
        }
        Ok(Self { lb, up })
    }

    /// Lower bound.
    pub fn lb(&self) -> usize {
        self.lb
    }

    /// Upper bound (inclusive).
    pub fn up(&self) -> usize {
        self.up
    }

    /// Draws a length uniformly from `[lb, up]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(self.lb..=self.up)
    }
}

impl TryFrom<(usize, usize)> for SizeBounds {
    type Error = GaError;

    fn try_from((lb, up): (usize, usize)) -> Result<Self> {
        Self::new(lb, up)
    }
}

impl From<SizeBounds> for (usize, usize) {
    fn from(bounds: SizeBounds) -> Self {
        (bounds.lb, bounds.up)
    }
}

/// Produces the initial population.
///
/// Implementors supply [`generate_individual`](GenomeFactory::generate_individual);
/// [`generate`](GenomeFactory::generate) drives it `pop_size` times.
pub trait GenomeFactory<G: Gene> {
    /// Number of individuals [`generate`](GenomeFactory::generate) produces.
    fn pop_size(&self) -> usize;

    /// Creates one random individual.
    fn generate_individual<R: Rng>(&self, rng: &mut R) -> Individual<G>;

    /// Creates a full population.
    ///
    /// # Errors
    /// [`GaError::InvalidPopulationSize`] if `pop_size()` is zero.
    fn generate<R: Rng>(&self, rng: &mut R) -> Result<Population<G>> {
        let size = self.pop_size();
        if size == 0 {
            return Err(GaError::InvalidPopulationSize);
        }
        let individuals = (0..size).map(|_| self.generate_individual(rng)).collect();
        Population::new(individuals)
    }
}

/// Generates individuals of random length with genes drawn uniformly from
/// an alphabet.
#[derive(Debug, Clone)]
pub struct AlphabetFactory<G> {
    pop_size: usize,
    bounds: SizeBounds,
    alphabet: Vec<G>,
}

impl<G: Gene> AlphabetFactory<G> {
    /// Creates a factory.
    ///
    /// # Errors
    /// - [`GaError::InvalidPopulationSize`] if `pop_size` is zero
    /// - [`GaError::EmptyAlphabet`] if `alphabet` is empty
    pub fn new(pop_size: usize, bounds: SizeBounds, alphabet: Vec<G>) -> Result<Self> {
        if pop_size == 0 {
            return Err(GaError::InvalidPopulationSize);
        }
        if alphabet.is_empty() {
            return Err(GaError::EmptyAlphabet);
        }
        Ok(Self {
            pop_size,
            bounds,
            alphabet,
        })
    }

    /// Length bounds of generated individuals.
    pub fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    /// Gene alphabet.
    pub fn alphabet(&self) -> &[G] {
        &self.alphabet
    }
}

impl<G: Gene> GenomeFactory<G> for AlphabetFactory<G> {
    fn pop_size(&self) -> usize {
        self.pop_size
    }

    fn generate_individual<R: Rng>(&self, rng: &mut R) -> Individual<G> {
        let len = self.bounds.sample(rng);
        (0..len)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::cell::Cell;

    #[test]
    fn test_population_rejects_empty() {
        let err = Population::<u8>::new(vec![]).unwrap_err();
        assert_eq!(err, GaError::InvalidPopulationSize);
        assert!(err.is_configuration());
    }

    #[test]
    fn test_population_accessors() {
        let pop = Population::new(vec![vec![1u8], vec![2, 3]]).unwrap();
        assert_eq!(pop.len(), 2);
        assert!(!pop.is_empty());
        assert_eq!(pop.individuals()[1], vec![2, 3]);
        assert_eq!(pop.iter().count(), 2);
        assert_eq!((&pop).into_iter().map(Vec::len).sum::<usize>(), 3);
        assert_eq!(pop.into_individuals(), vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn test_size_bounds_validation() {
        assert!(SizeBounds::new(1, 1).is_ok());
        assert_eq!(
            SizeBounds::new(5, 2),
            Err(GaError::InvalidSizeBounds { lb: 5, up: 2 })
        );
        assert!(SizeBounds::new(0, 3).is_err());
        assert!(SizeBounds::new(3, 0).is_err());
    }

    #[test]
    fn test_size_bounds_sample_in_range() {
        let bounds = SizeBounds::new(2, 6).unwrap();
        let mut rng = create_rng(42);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let n = bounds.sample(&mut rng);
            assert!((2..=6).contains(&n));
            seen[n] = true;
        }
        // Both ends of the inclusive range are reachable
        assert!(seen[2] && seen[6]);
    }

    #[test]
    fn test_size_bounds_from_pair() {
        let bounds = SizeBounds::try_from((1, 10)).unwrap();
        assert_eq!((bounds.lb(), bounds.up()), (1, 10));
        assert_eq!(<(usize, usize)>::from(bounds), (1, 10));
        assert_eq!(
            SizeBounds::try_from((5, 2)),
            Err(GaError::InvalidSizeBounds { lb: 5, up: 2 })
        );
    }

    struct CountingFactory {
        size: usize,
        calls: Cell<usize>,
    }

    impl GenomeFactory<u8> for CountingFactory {
        fn pop_size(&self) -> usize {
            self.size
        }

        fn generate_individual<R: Rng>(&self, _rng: &mut R) -> Individual<u8> {
            self.calls.set(self.calls.get() + 1);
            vec![self.calls.get() as u8]
        }
    }

    #[test]
    fn test_generate_calls_individual_pop_size_times() {
        let factory = CountingFactory {
            size: 7,
            calls: Cell::new(0),
        };
        let mut rng = create_rng(1);
        let pop = factory.generate(&mut rng).unwrap();
        assert_eq!(pop.len(), 7);
        assert_eq!(factory.calls.get(), 7);
    }

    #[test]
    fn test_generate_zero_size_fails() {
        let factory = CountingFactory {
            size: 0,
            calls: Cell::new(0),
        };
        let mut rng = create_rng(1);
        assert_eq!(
            factory.generate(&mut rng),
            Err(GaError::InvalidPopulationSize)
        );
        assert_eq!(factory.calls.get(), 0);
    }

    #[test]
    fn test_alphabet_factory() {
        let bounds = SizeBounds::new(3, 5).unwrap();
        let factory = AlphabetFactory::new(20, bounds, vec!['x', 'y']).unwrap();
        let mut rng = create_rng(42);
        let pop = factory.generate(&mut rng).unwrap();

        assert_eq!(pop.len(), 20);
        for ind in &pop {
            assert!((3..=5).contains(&ind.len()));
            assert!(ind.iter().all(|g| *g == 'x' || *g == 'y'));
        }
    }

    #[test]
    fn test_alphabet_factory_validation() {
        let bounds = SizeBounds::new(1, 2).unwrap();
        assert_eq!(
            AlphabetFactory::new(0, bounds, vec![1u8]).unwrap_err(),
            GaError::InvalidPopulationSize
        );
        assert_eq!(
            AlphabetFactory::<u8>::new(4, bounds, vec![]).unwrap_err(),
            GaError::EmptyAlphabet
        );
    }
}
