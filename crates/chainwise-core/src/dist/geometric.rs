use rand::{Rng, RngCore};

use crate::dist::{distribution::Distribution, error::DistributionError};

/// Number of failures before the first success of a repeated Bernoulli trial.
///
/// The support is the unbounded sequence `0, 1, 2, ..`, so consumers must
/// `take` from `support` rather than collect it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Build the distribution with success probability `p` in `(0, 1]`.
    pub fn new(p: f64) -> Result<Self, DistributionError> {
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(DistributionError::InvalidParameter {
                family: "geometric",
                name: "p",
                value: p,
            });
        }
        Ok(Self { p })
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution for Geometric {
    type Value = u64;

    /// Inversion of the CDF from a single uniform draw in `[0, 1)`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        if self.p >= 1.0 {
            return 0;
        }
        let draw = (rng.next_u64() as f64) / ((u64::MAX as f64) + 1.0);
        ((1.0 - draw).ln() / (1.0 - self.p).ln()).floor() as u64
    }

    fn pdf(&self, x: &u64) -> f64 {
        self.p * (1.0 - self.p).powf(*x as f64)
    }

    fn mean(&self) -> Result<f64, DistributionError> {
        Ok((1.0 - self.p) / self.p)
    }

    fn mode(&self) -> Result<u64, DistributionError> {
        Ok(0)
    }

    fn support(&self) -> Box<dyn Iterator<Item = u64> + '_> {
        if self.p >= 1.0 {
            // Only zero failures is possible when every trial succeeds.
            return Box::new(std::iter::once(0));
        }
        Box::new(0u64..)
    }
}
