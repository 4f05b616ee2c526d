use rand::Rng;

use crate::dist::{distribution::Distribution, error::DistributionError};

/// Point mass: all probability on one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dirac<T> {
    value: T,
}

impl<T> Dirac<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrow the carried value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Distribution for Dirac<T>
where
    T: Clone + PartialEq,
{
    type Value = T;

    fn sample<R: Rng + ?Sized>(&self, _rng: &mut R) -> T {
        self.value.clone()
    }

    fn pdf(&self, x: &T) -> f64 {
        if *x == self.value { 1.0 } else { 0.0 }
    }

    /// The value type is opaque, so no expectation is defined.
    fn mean(&self) -> Result<f64, DistributionError> {
        Err(DistributionError::UndefinedMean { family: "dirac" })
    }

    fn mode(&self) -> Result<T, DistributionError> {
        Ok(self.value.clone())
    }

    fn support(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(std::iter::once(self.value.clone()))
    }
}
