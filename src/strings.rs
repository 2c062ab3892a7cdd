//! String genomes: individuals are character sequences evolved toward a
//! target word.
//!
//! This is one concrete instantiation of the generic [`Fitness`] and
//! [`GenomeFactory`](crate::ga::GenomeFactory) contracts. Fitness is
//! `1 / (levenshtein(target, individual) + 1)`, which is exactly `1.0` on a
//! perfect match.

use crate::error::Result;
use crate::ga::{AlphabetFactory, Fitness, SizeBounds};

/// The lowercase ASCII alphabet `a..=z`.
pub fn lowercase_alphabet() -> Vec<char> {
    ('a'..='z').collect()
}

/// Levenshtein edit distance (insertions, deletions, substitutions).
///
/// ```
/// use genealgo::strings::edit_distance;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(edit_distance(&a, &b), 3);
/// ```
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row DP over b
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Fitness of a character sequence against a fixed target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringFitness {
    target: Vec<char>,
}

impl StringFitness {
    /// Creates a fitness function for `target`.
    pub fn new(target: &str) -> Self {
        Self {
            target: target.chars().collect(),
        }
    }

    /// The target sequence.
    pub fn target(&self) -> &[char] {
        &self.target
    }
}

impl Fitness<char> for StringFitness {
    fn evaluate(&self, individual: &[char]) -> f64 {
        1.0 / (edit_distance(&self.target, individual) as f64 + 1.0)
    }
}

/// Factory of random lowercase strings with lengths in `[lb, up]`.
///
/// # Errors
/// - [`GaError::InvalidPopulationSize`](crate::GaError::InvalidPopulationSize)
///   if `pop_size` is zero
/// - [`GaError::InvalidSizeBounds`](crate::GaError::InvalidSizeBounds) unless
///   `0 < lb <= up`
pub fn string_factory(pop_size: usize, (lb, up): (usize, usize)) -> Result<AlphabetFactory<char>> {
    AlphabetFactory::new(pop_size, SizeBounds::new(lb, up)?, lowercase_alphabet())
}

/// Collects a character individual into a `String`.
pub fn to_string(individual: &[char]) -> String {
    individual.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::GenomeFactory;
    use crate::random::create_rng;
    use crate::GaError;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance(&chars(""), &chars("")), 0);
        assert_eq!(edit_distance(&chars("abc"), &chars("")), 3);
        assert_eq!(edit_distance(&chars(""), &chars("hello")), 5);
        assert_eq!(edit_distance(&chars("hello"), &chars("hello")), 0);
        assert_eq!(edit_distance(&chars("hello"), &chars("hallo")), 1);
        assert_eq!(edit_distance(&chars("hello"), &chars("hell")), 1);
        assert_eq!(edit_distance(&chars("flaw"), &chars("lawn")), 2);
        assert_eq!(edit_distance(&chars("ab"), &chars("ba")), 2);
    }

    #[test]
    fn test_edit_distance_symmetric() {
        let pairs = [("saturday", "sunday"), ("abc", "yabd"), ("a", "xyz")];
        for (a, b) in pairs {
            assert_eq!(
                edit_distance(&chars(a), &chars(b)),
                edit_distance(&chars(b), &chars(a))
            );
        }
    }

    #[test]
    fn test_fitness_values() {
        let f = StringFitness::new("hello");
        assert_eq!(f.evaluate(&chars("hello")), 1.0);
        assert_eq!(f.evaluate(&chars("hallo")), 0.5);
        assert_eq!(f.evaluate(&chars("")), 1.0 / 6.0);
        assert_eq!(f.target(), chars("hello").as_slice());
    }

    #[test]
    fn test_fitness_in_unit_interval() {
        let f = StringFitness::new("target");
        for s in ["", "t", "tar", "targets", "zzzzzzzzzzzz"] {
            let v = f.evaluate(&chars(s));
            assert!(v > 0.0 && v <= 1.0, "{s}: {v}");
        }
    }

    #[test]
    fn test_string_factory() {
        let factory = string_factory(15, (1, 10)).unwrap();
        let pop = factory.generate(&mut create_rng(42)).unwrap();
        assert_eq!(pop.len(), 15);
        for ind in &pop {
            assert!((1..=10).contains(&ind.len()));
            assert!(ind.iter().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_string_factory_rejects_inverted_bounds() {
        let err = string_factory(10, (5, 2)).unwrap_err();
        assert_eq!(err, GaError::InvalidSizeBounds { lb: 5, up: 2 });
        assert!(err.is_configuration());
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&['h', 'i']), "hi");
        assert_eq!(lowercase_alphabet().len(), 26);
    }
}
