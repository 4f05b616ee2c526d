use rand::Rng;

use crate::dist::{distribution::Distribution, error::DistributionError};

/// Uniform distribution over the integers in an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteUniform {
    lo: i64,
    hi: i64,
}

impl DiscreteUniform {
    /// Build the distribution on `[lo, hi]`. The range must be non-empty.
    pub fn new(lo: i64, hi: i64) -> Result<Self, DistributionError> {
        if lo > hi {
            return Err(DistributionError::EmptySupport {
                family: "discrete uniform",
            });
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> i64 {
        self.lo
    }

    pub fn hi(&self) -> i64 {
        self.hi
    }

    fn count(&self) -> f64 {
        (self.hi - self.lo) as f64 + 1.0
    }
}

impl Distribution for DiscreteUniform {
    type Value = i64;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(self.lo..=self.hi)
    }

    fn pdf(&self, x: &i64) -> f64 {
        if *x < self.lo || *x > self.hi {
            0.0
        } else {
            1.0 / self.count()
        }
    }

    fn mean(&self) -> Result<f64, DistributionError> {
        Ok((self.lo as f64 + self.hi as f64) / 2.0)
    }

    /// Every value is equally likely; the smallest is reported so repeated
    /// calls agree.
    fn mode(&self) -> Result<i64, DistributionError> {
        Ok(self.lo)
    }

    fn support(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        Box::new(self.lo..=self.hi)
    }
}
