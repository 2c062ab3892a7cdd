//! Crossover operators for variable-length gene sequences.
//!
//! # Single-point crossover
//!
//! Both parents are cut at the same index and their tails are exchanged:
//!
//! ```text
//! X = x0 x1 | x2 x3 x4        child1 = x0 x1 y2 y3
//! Y = y0 y1 | y2 y3      =>   child2 = y0 y1 x2 x3 x4
//! ```
//!
//! The cut index comes from a [`SplitPolicy`]. Because the cut never exceeds
//! the shorter parent, no slicing can go out of range, and the offspring
//! lengths always sum to the parent lengths.

use super::types::{Gene, Individual};
use crate::error::{GaError, Result};
use rand::Rng;
use std::str::FromStr;

/// Combines two parents into two offspring.
///
/// Parents are borrowed and left untouched; offspring are new vectors.
pub trait Crossover<G: Gene>: Send + Sync {
    /// Produces two offspring from `x` and `y`.
    fn crossover<R: Rng>(
        &self,
        x: &[G],
        y: &[G],
        rng: &mut R,
    ) -> (Individual<G>, Individual<G>);
}

/// How the single-point crossover picks its cut index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SplitPolicy {
    /// Cut at `min(len(X), len(Y))`: the shorter parent's genes stay whole
    /// and only the longer parent's surplus tail moves.
    Min,
    /// Cut at `min(len(X) / 2, len(Y) / 2)`: offspring lengths stay close
    /// to the parents'.
    #[default]
    Balance,
}

impl SplitPolicy {
    /// Cut index for parents of lengths `lx` and `ly`.
    ///
    /// ```
    /// use genealgo::ga::SplitPolicy;
    ///
    /// assert_eq!(SplitPolicy::Min.split_point(3, 8), 3);
    /// assert_eq!(SplitPolicy::Balance.split_point(5, 8), 2);
    /// ```
    pub fn split_point(self, lx: usize, ly: usize) -> usize {
        match self {
            SplitPolicy::Min => lx.min(ly),
            SplitPolicy::Balance => (lx / 2).min(ly / 2),
        }
    }

    /// Configuration key of this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            SplitPolicy::Min => "min",
            SplitPolicy::Balance => "balance",
        }
    }
}

impl FromStr for SplitPolicy {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "min" => Ok(SplitPolicy::Min),
            "balance" => Ok(SplitPolicy::Balance),
            other => Err(GaError::UnknownSplitPolicy(other.to_string())),
        }
    }
}

impl std::fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-point crossover with a configurable cut policy.
///
/// ```
/// use genealgo::ga::{Crossover, SinglePointCrossover};
/// use genealgo::random::create_rng;
///
/// let cx = SinglePointCrossover::from_key("balance").unwrap();
/// let mut rng = create_rng(0);
/// let (a, b) = cx.crossover(&[1, 2, 3, 4], &[5, 6, 7, 8, 9, 10], &mut rng);
/// assert_eq!(a, vec![1, 2, 7, 8, 9, 10]);
/// assert_eq!(b, vec![5, 6, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SinglePointCrossover {
    policy: SplitPolicy,
}

impl SinglePointCrossover {
    /// Creates a crossover with the given policy.
    pub fn new(policy: SplitPolicy) -> Self {
        Self { policy }
    }

    /// Creates a crossover from a policy key (`"min"` or `"balance"`).
    ///
    /// # Errors
    /// [`GaError::UnknownSplitPolicy`] for any other key.
    pub fn from_key(key: &str) -> Result<Self> {
        Ok(Self::new(key.parse()?))
    }

    /// The configured policy.
    pub fn policy(&self) -> SplitPolicy {
        self.policy
    }
}

impl<G: Gene> Crossover<G> for SinglePointCrossover {
    fn crossover<R: Rng>(
        &self,
        x: &[G],
        y: &[G],
        _rng: &mut R,
    ) -> (Individual<G>, Individual<G>) {
        let point = self.policy.split_point(x.len(), y.len());

        let mut child1 = Vec::with_capacity(y.len());
        child1.extend_from_slice(&x[..point]);
        child1.extend_from_slice(&y[point..]);

        let mut child2 = Vec::with_capacity(x.len());
        child2.extend_from_slice(&y[..point]);
        child2.extend_from_slice(&x[point..]);

        (child1, child2)
    }
}
