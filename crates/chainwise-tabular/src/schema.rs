use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{TabularError, TabularMdp, compiled::PROB_TOLERANCE};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Serializable schema for a finite decision process, used for YAML/JSON IO
/// and validation.
pub struct TabularSchema {
    /// Schema version for future compatibility checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Discount factor in `[0, 1]`.
    pub discount: f64,
    /// String id of the fixed start state. Mutually exclusive with `initial`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Weighted start states. Mutually exclusive with `start`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<Vec<InitialEntry>>,
    /// All state declarations in the model.
    pub states: Vec<StateSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One weighted entry of the initial distribution.
pub struct InitialEntry {
    pub state: String,
    pub prob: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A single state declaration in the schema.
pub struct StateSchema {
    /// Unique state id.
    pub id: String,
    /// Whether this state is terminal (defaults to `false` if omitted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<bool>,
    /// Available actions from this state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionSchema>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A named action and its stochastic outcomes.
pub struct ActionSchema {
    pub id: String,
    pub outcomes: Vec<OutcomeSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One probabilistic transition for an action.
pub struct OutcomeSchema {
    pub next: String,
    pub prob: f64,
    pub reward: f64,
}

impl TabularSchema {
    /// Validate schema invariants using the crate default tolerance.
    pub fn validate(&self) -> Result<(), TabularError> {
        self.validate_with_tolerance(PROB_TOLERANCE)
    }

    /// Validate the discount, ids, start declaration, transitions, and
    /// probability constraints.
    pub fn validate_with_tolerance(&self, tolerance: f64) -> Result<(), TabularError> {
        if !self.discount.is_finite() || !(0.0..=1.0).contains(&self.discount) {
            return Err(TabularError::InvalidDiscount {
                value: self.discount,
            });
        }

        // State ids must be unique.
        let mut ids = HashSet::with_capacity(self.states.len());
        for state in &self.states {
            if !ids.insert(state.id.clone()) {
                return Err(TabularError::DuplicateStateId {
                    id: state.id.clone(),
                });
            }
        }

        self.validate_initial(&ids, tolerance)?;

        // Fast membership map for outcome target validation.
        let known_state_ids: HashMap<_, _> = self.states.iter().map(|s| (&s.id, true)).collect();

        for state in &self.states {
            let terminal = state.terminal.unwrap_or(false);
            let actions = state.actions.as_deref().unwrap_or(&[]);

            if terminal && !actions.is_empty() {
                return Err(TabularError::TerminalStateHasActions {
                    state: state.id.clone(),
                });
            }

            let mut action_ids = HashSet::with_capacity(actions.len());
            for action in actions {
                if !action_ids.insert(action.id.clone()) {
                    return Err(TabularError::DuplicateActionId {
                        state: state.id.clone(),
                        action: action.id.clone(),
                    });
                }

                if action.outcomes.is_empty() {
                    return Err(TabularError::EmptyOutcomes {
                        state: state.id.clone(),
                        action: action.id.clone(),
                    });
                }

                let mut sum = 0.0_f64;
                for (i, outcome) in action.outcomes.iter().enumerate() {
                    if !outcome.prob.is_finite() || outcome.prob < 0.0 {
                        return Err(TabularError::InvalidProbability {
                            state: state.id.clone(),
                            action: action.id.clone(),
                            outcome_index: i,
                            value: outcome.prob,
                        });
                    }

                    if !outcome.reward.is_finite() {
                        return Err(TabularError::InvalidReward {
                            state: state.id.clone(),
                            action: action.id.clone(),
                            outcome_index: i,
                            value: outcome.reward,
                        });
                    }

                    if !known_state_ids.contains_key(&outcome.next) {
                        return Err(TabularError::UnknownNextState {
                            state: state.id.clone(),
                            action: action.id.clone(),
                            next: outcome.next.clone(),
                        });
                    }

                    sum += outcome.prob;
                }

                // Outcome probabilities for an action must sum to 1 within tolerance.
                if (sum - 1.0).abs() > tolerance {
                    return Err(TabularError::ProbabilitySum {
                        state: state.id.clone(),
                        action: action.id.clone(),
                        sum,
                        tolerance,
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_initial(
        &self,
        ids: &HashSet<String>,
        tolerance: f64,
    ) -> Result<(), TabularError> {
        match (&self.start, &self.initial) {
            (None, None) => Err(TabularError::MissingInitial),
            (Some(_), Some(_)) => Err(TabularError::ConflictingInitial),
            (Some(start), None) => {
                if start.trim().is_empty() || !ids.contains(start) {
                    return Err(TabularError::UnknownStartState {
                        start: start.clone(),
                    });
                }
                Ok(())
            }
            (None, Some(entries)) => {
                if entries.is_empty() {
                    return Err(TabularError::MissingInitial);
                }

                let mut sum = 0.0_f64;
                for entry in entries {
                    if !entry.prob.is_finite() || entry.prob < 0.0 {
                        return Err(TabularError::InvalidInitialProbability {
                            state: entry.state.clone(),
                            value: entry.prob,
                        });
                    }

                    if !ids.contains(&entry.state) {
                        return Err(TabularError::UnknownInitialState {
                            state: entry.state.clone(),
                        });
                    }

                    sum += entry.prob;
                }

                if (sum - 1.0).abs() > tolerance {
                    return Err(TabularError::InitialProbabilitySum { sum, tolerance });
                }

                Ok(())
            }
        }
    }

    /// Compile this schema into the runtime representation.
    pub fn compile(&self) -> Result<TabularMdp, TabularError> {
        TabularMdp::from_schema(self)
    }
}
