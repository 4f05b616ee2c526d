use rand::{Rng, RngCore};

use crate::dist::{distribution::Distribution, error::DistributionError};

/// Floating point tolerance used when validating weight sums.
pub(crate) const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Finite distribution over explicit values with one weight per value.
///
/// Zero-weight entries are dropped at construction so `support` only yields
/// values that can actually be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Categorical<T> {
    values: Vec<T>,
    probs: Vec<f64>,
    cdf: Vec<f64>,
}

impl<T> Categorical<T>
where
    T: Clone + PartialEq,
{
    /// Validate the weights and precompute the sampling CDF.
    pub fn new(values: Vec<T>, weights: Vec<f64>) -> Result<Self, DistributionError> {
        if values.len() != weights.len() {
            return Err(DistributionError::WeightCount {
                values: values.len(),
                weights: weights.len(),
            });
        }

        let mut sum = 0.0_f64;
        for (index, weight) in weights.iter().enumerate() {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(DistributionError::InvalidWeight {
                    index,
                    value: *weight,
                });
            }
            sum += *weight;
        }

        // Weights must describe a full law before zero entries are dropped.
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(DistributionError::WeightSum {
                sum,
                tolerance: WEIGHT_TOLERANCE,
            });
        }

        let mut kept = Vec::with_capacity(values.len());
        let mut probs = Vec::with_capacity(values.len());
        let mut cdf = Vec::with_capacity(values.len());
        let mut cumulative = 0.0_f64;

        for (value, weight) in values.into_iter().zip(weights) {
            if weight == 0.0 {
                continue;
            }
            cumulative += weight;
            kept.push(value);
            probs.push(weight);
            cdf.push(cumulative);
        }

        if kept.is_empty() {
            return Err(DistributionError::EmptySupport {
                family: "categorical",
            });
        }

        Ok(Self {
            values: kept,
            probs,
            cdf,
        })
    }

    /// Point mass on a single value. Cannot fail.
    pub fn point(value: T) -> Self {
        Self {
            values: vec![value],
            probs: vec![1.0],
            cdf: vec![1.0],
        }
    }

    /// Equal weight on every value.
    pub fn uniform_over(values: Vec<T>) -> Result<Self, DistributionError> {
        if values.is_empty() {
            return Err(DistributionError::EmptySupport {
                family: "categorical",
            });
        }

        let weight = 1.0 / values.len() as f64;
        let weights = vec![weight; values.len()];
        Self::new(values, weights)
    }

    /// Number of values with non-zero probability.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The retained values, in construction order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The retained weights, aligned with `values`.
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }
}

impl<T> Distribution for Categorical<T>
where
    T: Clone + PartialEq,
{
    type Value = T;

    /// Inverse-CDF sampling from a single uniform draw in `[0, 1)`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let draw = (rng.next_u64() as f64) / ((u64::MAX as f64) + 1.0);
        let mut chosen = self.cdf.partition_point(|p| *p < draw);
        if chosen >= self.values.len() {
            chosen = self.values.len() - 1;
        }
        self.values[chosen].clone()
    }

    fn pdf(&self, x: &T) -> f64 {
        self.values
            .iter()
            .zip(&self.probs)
            .filter(|(value, _)| *value == x)
            .map(|(_, prob)| *prob)
            .sum()
    }

    /// Values are opaque to this family, so no expectation is defined.
    fn mean(&self) -> Result<f64, DistributionError> {
        Err(DistributionError::UndefinedMean {
            family: "categorical",
        })
    }

    fn mode(&self) -> Result<T, DistributionError> {
        let mut best = 0;
        for (index, prob) in self.probs.iter().enumerate() {
            if *prob > self.probs[best] {
                best = index;
            }
        }
        Ok(self.values[best].clone())
    }

    fn support(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(self.values.iter().cloned())
    }
}
