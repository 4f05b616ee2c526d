use chainwise_core::DistributionError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for schema loading, validation, compilation, and builder operations.
pub enum TabularError {
    #[error("failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing discount factor")]
    MissingDiscount,

    #[error("invalid discount {value}: must be finite and within [0, 1]")]
    InvalidDiscount { value: f64 },

    #[error("schema must declare either a start state or an initial distribution")]
    MissingInitial,

    #[error("schema declares both a start state and an initial distribution")]
    ConflictingInitial,

    #[error("start state '{start}' does not exist")]
    UnknownStartState { start: String },

    #[error("initial distribution references unknown state '{state}'")]
    UnknownInitialState { state: String },

    #[error("invalid probability for initial state '{state}': {value}")]
    InvalidInitialProbability { state: String, value: f64 },

    #[error("initial probabilities must sum to within {tolerance} of 1.0, got {sum}")]
    InitialProbabilitySum { sum: f64, tolerance: f64 },

    #[error("duplicate state id '{id}'")]
    DuplicateStateId { id: String },

    #[error("duplicate action id '{action}' in state '{state}'")]
    DuplicateActionId { state: String, action: String },

    #[error("state '{state}' is terminal and cannot declare actions")]
    TerminalStateHasActions { state: String },

    #[error("outcome in state '{state}', action '{action}' references unknown next state '{next}'")]
    UnknownNextState {
        state: String,
        action: String,
        next: String,
    },

    #[error(
        "invalid probability in state '{state}', action '{action}', outcome {outcome_index}: {value}"
    )]
    InvalidProbability {
        state: String,
        action: String,
        outcome_index: usize,
        value: f64,
    },

    #[error(
        "invalid reward in state '{state}', action '{action}', outcome {outcome_index}: {value}"
    )]
    InvalidReward {
        state: String,
        action: String,
        outcome_index: usize,
        value: f64,
    },

    #[error(
        "probability sum for state '{state}', action '{action}' must be within {tolerance} of 1.0, got {sum}"
    )]
    ProbabilitySum {
        state: String,
        action: String,
        sum: f64,
        tolerance: f64,
    },

    #[error("state '{state}' action '{action}' must contain at least one outcome")]
    EmptyOutcomes { state: String, action: String },

    #[error("transition distribution for state '{state}', action '{action}' is invalid: {source}")]
    Distribution {
        state: String,
        action: String,
        source: DistributionError,
    },

    #[error("initial distribution is invalid: {source}")]
    InitialDistribution { source: DistributionError },

    #[error("builder referenced unknown state '{state}'")]
    BuilderUnknownState { state: String },

    #[error("builder referenced unknown action '{action}' in state '{state}'")]
    BuilderUnknownAction { state: String, action: String },
}
