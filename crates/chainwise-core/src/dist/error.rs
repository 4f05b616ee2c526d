use std::fmt;

/// Error type for distribution construction and capability queries.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Construction left no value with positive probability.
    EmptySupport { family: &'static str },
    /// One weight was provided per value, but the counts differ.
    WeightCount { values: usize, weights: usize },
    /// A weight was negative, NaN, or infinite.
    InvalidWeight { index: usize, value: f64 },
    /// Weights must sum to 1 within tolerance.
    WeightSum { sum: f64, tolerance: f64 },
    /// A family parameter was outside its valid range.
    InvalidParameter {
        family: &'static str,
        name: &'static str,
        value: f64,
    },
    /// The family has no defined expectation for its value type.
    UndefinedMean { family: &'static str },
    /// The family has no defined mode.
    UndefinedMode { family: &'static str },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionError::EmptySupport { family } => {
                write!(f, "{family} distribution has an empty support")
            }
            DistributionError::WeightCount { values, weights } => write!(
                f,
                "expected one weight per value, got {values} values and {weights} weights"
            ),
            DistributionError::InvalidWeight { index, value } => {
                write!(f, "invalid weight {value} at position {index}")
            }
            DistributionError::WeightSum { sum, tolerance } => write!(
                f,
                "weights must sum to 1.0 within {tolerance}, got {sum}"
            ),
            DistributionError::InvalidParameter {
                family,
                name,
                value,
            } => write!(f, "invalid parameter {name} = {value} for {family} distribution"),
            DistributionError::UndefinedMean { family } => {
                write!(f, "{family} distribution has no defined mean")
            }
            DistributionError::UndefinedMode { family } => {
                write!(f, "{family} distribution has no defined mode")
            }
        }
    }
}

impl std::error::Error for DistributionError {}
