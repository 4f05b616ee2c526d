use crate::{
    ActionSchema, InitialEntry, OutcomeSchema, StateSchema, TabularError, TabularMdp,
    TabularSchema,
};

#[derive(Debug, Clone, Default)]
/// Struct to build process schemas programmatically.
pub struct TabularBuilder {
    discount: Option<f64>,
    start: Option<String>,
    initial: Vec<InitialEntry>,
    states: Vec<StateSchema>,
}

impl TabularBuilder {
    /// Create a new TabularBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the discount factor of the process
    pub fn set_discount(&mut self, discount: f64) -> &mut Self {
        self.discount = Some(discount);
        self
    }

    /// Define a fixed start state
    pub fn set_start(&mut self, state: impl Into<String>) -> &mut Self {
        self.start = Some(state.into());
        self
    }

    /// Add one weighted entry to the initial distribution
    pub fn add_initial(&mut self, state: impl Into<String>, prob: f64) -> &mut Self {
        self.initial.push(InitialEntry {
            state: state.into(),
            prob,
        });
        self
    }

    /// Add a new state
    /// Terminal flag if this state ends the process
    pub fn add_state(&mut self, id: impl Into<String>, terminal: bool) -> &mut Self {
        self.states.push(StateSchema {
            id: id.into(),
            terminal: Some(terminal),
            actions: Some(Vec::new()),
        });
        self
    }

    /// Add an action to a state
    pub fn add_action(
        &mut self,
        state_id: impl AsRef<str>,
        action_id: impl Into<String>,
    ) -> Result<&mut Self, TabularError> {
        let state_id = state_id.as_ref();
        let action_id = action_id.into();

        let state = self
            .states
            .iter_mut()
            .find(|s| s.id == state_id)
            .ok_or_else(|| TabularError::BuilderUnknownState {
                state: state_id.to_string(),
            })?;

        let actions = state.actions.get_or_insert_with(Vec::new);
        actions.push(ActionSchema {
            id: action_id,
            outcomes: Vec::new(),
        });

        Ok(self)
    }

    /// Add an outcome to an action
    /// Actions can be stochastic so outcomes accumulate per action
    pub fn add_outcome(
        &mut self,
        state_id: impl AsRef<str>,
        action_id: impl AsRef<str>,
        next: impl Into<String>,
        prob: f64,
        reward: f64,
    ) -> Result<&mut Self, TabularError> {
        let state_id = state_id.as_ref();
        let action_id = action_id.as_ref();

        let state = self
            .states
            .iter_mut()
            .find(|s| s.id == state_id)
            .ok_or_else(|| TabularError::BuilderUnknownState {
                state: state_id.to_string(),
            })?;

        let actions = state.actions.get_or_insert_with(Vec::new);
        let action = actions
            .iter_mut()
            .find(|a| a.id == action_id)
            .ok_or_else(|| TabularError::BuilderUnknownAction {
                state: state_id.to_string(),
                action: action_id.to_string(),
            })?;

        action.outcomes.push(OutcomeSchema {
            next: next.into(),
            prob,
            reward,
        });

        Ok(self)
    }

    pub fn build_schema(self) -> Result<TabularSchema, TabularError> {
        let discount = self.discount.ok_or(TabularError::MissingDiscount)?;
        let initial = if self.initial.is_empty() {
            None
        } else {
            Some(self.initial)
        };

        let schema = TabularSchema {
            version: Some(1),
            discount,
            start: self.start,
            initial,
            states: self.states,
        };
        schema.validate()?;
        Ok(schema)
    }

    pub fn compile(self) -> Result<TabularMdp, TabularError> {
        let schema = self.build_schema()?;
        schema.compile()
    }
}
