//! Core type definitions for the GA framework.
//!
//! Genes are opaque to the engine: the only requirement is value equality,
//! which roulette selection uses to tell parents apart. An individual is an
//! ordered, variable-length gene sequence.

use std::fmt::Debug;

/// Marker trait for gene values.
///
/// Blanket-implemented for every type that is cloneable, comparable by
/// value, and shareable across threads. Characters, integers, floats and
/// user-defined token enums all qualify.
pub trait Gene: Clone + PartialEq + Debug + Send + Sync + 'static {}

impl<T> Gene for T where T: Clone + PartialEq + Debug + Send + Sync + 'static {}

/// A candidate solution: an ordered sequence of genes.
///
/// Operators build new vectors rather than aliasing parents, and mutation
/// may change the length.
pub type Individual<G> = Vec<G>;

/// Maps an individual to a scalar fitness score. Higher is better.
///
/// Implementations must be pure and deterministic. The engine calls
/// `evaluate` once per individual per generation and never retries; a panic
/// inside `evaluate` propagates to the caller.
///
/// Roulette selection treats the scores as weights, so a fitness used with
/// [`RouletteWheelSelector`](super::RouletteWheelSelector) must be finite
/// and non-negative.
///
/// # Implementing
///
/// ```
/// use genealgo::ga::Fitness;
///
/// struct CountOnes;
///
/// impl Fitness<u8> for CountOnes {
///     fn evaluate(&self, individual: &[u8]) -> f64 {
///         let ones = individual.iter().filter(|&&g| g == 1).count();
///         ones as f64 / individual.len().max(1) as f64
///     }
/// }
///
/// assert_eq!(CountOnes.evaluate(&[1, 1, 0, 1]), 0.75);
/// ```
///
/// Closures work too:
///
/// ```
/// use genealgo::ga::Fitness;
///
/// let f = |ind: &[i32]| 1.0 / (1.0 + ind.iter().map(|g| g.abs()).sum::<i32>() as f64);
/// assert_eq!(f.evaluate(&[0, 0]), 1.0);
/// ```
pub trait Fitness<G>: Send + Sync {
    /// Evaluates an individual and returns its fitness.
    fn evaluate(&self, individual: &[G]) -> f64;
}

impl<G, F> Fitness<G> for F
where
    F: Fn(&[G]) -> f64 + Send + Sync,
{
    fn evaluate(&self, individual: &[G]) -> f64 {
        self(individual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_gene<G: Gene>() {}

    #[test]
    fn test_gene_blanket_impl() {
        assert_gene::<char>();
        assert_gene::<u8>();
        assert_gene::<f64>();
        assert_gene::<String>();
    }

    struct LengthFitness;

    impl Fitness<char> for LengthFitness {
        fn evaluate(&self, individual: &[char]) -> f64 {
            individual.len() as f64
        }
    }

    #[test]
    fn test_struct_fitness() {
        assert_eq!(LengthFitness.evaluate(&['a', 'b']), 2.0);
        assert_eq!(LengthFitness.evaluate(&[]), 0.0);
    }

    #[test]
    fn test_closure_fitness() {
        let f = |ind: &[u8]| ind.iter().map(|&g| g as f64).sum::<f64>();
        assert_eq!(f.evaluate(&[1, 2, 3]), 6.0);
    }

    #[test]
    fn test_fitness_is_deterministic() {
        let f = |ind: &[u8]| 1.0 / (ind.len() as f64 + 1.0);
        let ind: Individual<u8> = vec![4, 2];
        assert_eq!(f.evaluate(&ind), f.evaluate(&ind));
    }
}
