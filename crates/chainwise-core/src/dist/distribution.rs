use rand::Rng;

use crate::dist::error::DistributionError;

/// Probability law over values of an associated type.
///
/// Concrete families decide what `mean` and `mode` look like for their value
/// type; everything except `sample` is a pure query, and `sample` only
/// advances the random source the caller hands in.
pub trait Distribution {
    type Value;

    /// Draw one value according to the law.
    /// Each call is an independent draw from the supplied random source.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Value;

    /// Probability mass (or density) at `x`.
    /// Returns `0.0` for values outside the support, never an error.
    fn pdf(&self, x: &Self::Value) -> f64;

    /// Expectation of the law.
    /// Families over non-numeric values report [`DistributionError::UndefinedMean`].
    fn mean(&self) -> Result<f64, DistributionError>;

    /// A most likely value.
    /// Must be stable for fixed parameters; ties break toward the first maximum.
    fn mode(&self) -> Result<Self::Value, DistributionError>;

    /// Lazily produce the values with non-zero probability.
    /// The iterator restarts on every call and may be unbounded.
    fn support(&self) -> Box<dyn Iterator<Item = Self::Value> + '_>;
}
