use std::collections::HashMap;

use chainwise_core::{Categorical, IndexError, InitialState, Mdp};

use crate::{TabularError, TabularSchema, interner::Interner};

/// Floating point tolerance used when validating probability sums.
pub(crate) const PROB_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Dense index for states in a compiled process.
pub struct StateKey(usize);

impl StateKey {
    /// Return the underlying state index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for StateKey {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Dense index for actions in a compiled process.
/// Actions with the same id in different states share one key.
pub struct ActionKey(usize);

impl ActionKey {
    /// Return the underlying action index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ActionKey {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone)]
/// Runtime form of a finite decision process with resolved state references
/// and prebuilt transition distributions.
pub struct TabularMdp {
    discount: f64,
    initial: InitialKind,
    states: Vec<StateRec>,
    state_ids: Vec<String>,
    state_id_to_key: HashMap<String, StateKey>,
    actions: Interner<String>,
}

#[derive(Debug, Clone)]
enum InitialKind {
    Fixed(StateKey),
    Weighted(Categorical<StateKey>),
}

#[derive(Debug, Clone)]
struct StateRec {
    terminal: bool,
    actions: Vec<ActionRec>,
}

#[derive(Debug, Clone)]
struct ActionRec {
    key: ActionKey,
    dist: Categorical<StateKey>,
    outcomes: Vec<OutcomeRec>,
}

#[derive(Debug, Clone)]
struct OutcomeRec {
    next: StateKey,
    reward: f64,
}

impl TabularMdp {
    /// Compile and validate a schema into the runtime representation.
    pub(crate) fn from_schema(schema: &TabularSchema) -> Result<Self, TabularError> {
        schema.validate_with_tolerance(PROB_TOLERANCE)?;

        let mut state_id_to_key = HashMap::with_capacity(schema.states.len());
        let mut state_ids = Vec::with_capacity(schema.states.len());

        for (idx, state) in schema.states.iter().enumerate() {
            let key = StateKey::from(idx);
            state_id_to_key.insert(state.id.clone(), key);
            state_ids.push(state.id.clone());
        }

        let initial = build_initial(schema, &state_id_to_key)?;

        let mut actions = Interner::new();
        let mut states = Vec::with_capacity(schema.states.len());

        for state in &schema.states {
            let terminal = state.terminal.unwrap_or(false);
            let mut records = Vec::new();

            for action in state.actions.as_deref().unwrap_or(&[]) {
                let key = ActionKey::from(actions.intern(action.id.clone()));

                let mut outcomes = Vec::with_capacity(action.outcomes.len());
                let mut nexts = Vec::with_capacity(action.outcomes.len());
                let mut probs = Vec::with_capacity(action.outcomes.len());

                for outcome in &action.outcomes {
                    let next = state_id_to_key.get(&outcome.next).copied().ok_or_else(|| {
                        TabularError::UnknownNextState {
                            state: state.id.clone(),
                            action: action.id.clone(),
                            next: outcome.next.clone(),
                        }
                    })?;

                    outcomes.push(OutcomeRec {
                        next,
                        reward: outcome.reward,
                    });
                    nexts.push(next);
                    probs.push(outcome.prob);
                }

                let dist = Categorical::new(nexts, probs).map_err(|source| {
                    TabularError::Distribution {
                        state: state.id.clone(),
                        action: action.id.clone(),
                        source,
                    }
                })?;

                records.push(ActionRec {
                    key,
                    dist,
                    outcomes,
                });
            }

            states.push(StateRec {
                terminal,
                actions: records,
            });
        }

        Ok(Self {
            discount: schema.discount,
            initial,
            states,
            state_ids,
            state_id_to_key,
            actions,
        })
    }

    /// Return the number of compiled states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Return the number of distinct action ids across all states.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Convert a state key back to its original string id.
    pub fn state_id(&self, key: StateKey) -> Option<&str> {
        self.state_ids.get(key.index()).map(String::as_str)
    }

    /// Convert a string id into a compiled state key.
    pub fn state_key(&self, id: &str) -> Option<StateKey> {
        self.state_id_to_key.get(id).copied()
    }

    /// Convert an action key back to its original string id.
    pub fn action_id(&self, key: ActionKey) -> Option<&str> {
        self.actions.get(key.index()).map(String::as_str)
    }

    /// Convert a string id into a compiled action key.
    pub fn action_key(&self, id: &str) -> Option<ActionKey> {
        self.actions.key_of(id).map(ActionKey::from)
    }

    /// Iterate all state keys in dense index order.
    pub fn states(&self) -> impl Iterator<Item = StateKey> + '_ {
        (0..self.states.len()).map(StateKey::from)
    }

    /// Iterate all action keys in dense index order.
    pub fn actions(&self) -> impl Iterator<Item = ActionKey> + '_ {
        (0..self.actions.len()).map(ActionKey::from)
    }

    /// Actions declared by a state, in declaration order.
    pub fn actions_at(&self, key: StateKey) -> impl Iterator<Item = ActionKey> + '_ {
        self.states
            .get(key.index())
            .into_iter()
            .flat_map(|state| state.actions.iter().map(|action| action.key))
    }

    /// Check whether a state is terminal.
    pub fn terminal(&self, key: StateKey) -> Option<bool> {
        self.states.get(key.index()).map(|state| state.terminal)
    }

    fn action_rec(&self, state: StateKey, action: ActionKey) -> Option<&ActionRec> {
        self.states
            .get(state.index())?
            .actions
            .iter()
            .find(|rec| rec.key == action)
    }
}

fn build_initial(
    schema: &TabularSchema,
    keys: &HashMap<String, StateKey>,
) -> Result<InitialKind, TabularError> {
    if let Some(start) = &schema.start {
        let key = keys
            .get(start)
            .copied()
            .ok_or_else(|| TabularError::UnknownStartState {
                start: start.clone(),
            })?;
        return Ok(InitialKind::Fixed(key));
    }

    let entries = schema.initial.as_deref().unwrap_or(&[]);
    let mut states = Vec::with_capacity(entries.len());
    let mut probs = Vec::with_capacity(entries.len());

    for entry in entries {
        let key = keys
            .get(&entry.state)
            .copied()
            .ok_or_else(|| TabularError::UnknownInitialState {
                state: entry.state.clone(),
            })?;
        states.push(key);
        probs.push(entry.prob);
    }

    let dist = Categorical::new(states, probs)
        .map_err(|source| TabularError::InitialDistribution { source })?;

    Ok(InitialKind::Weighted(dist))
}

impl Mdp for TabularMdp {
    type State = StateKey;
    type Action = ActionKey;
    type Transition = Categorical<StateKey>;
    type Initial = Categorical<StateKey>;

    fn discount(&self) -> f64 {
        self.discount
    }

    /// Terminal, unknown, and actionless queries self-absorb: a point mass on
    /// the queried state, with no reward recorded for the self-loop.
    fn transition(&self, state: &StateKey, action: &ActionKey) -> Categorical<StateKey> {
        let Some(rec) = self.states.get(state.index()) else {
            return Categorical::point(*state);
        };
        if rec.terminal {
            return Categorical::point(*state);
        }

        match self.action_rec(*state, *action) {
            Some(rec) => rec.dist.clone(),
            None => Categorical::point(*state),
        }
    }

    /// Reward declared for the `(state, action, next)` outcome, `0.0` for any
    /// triple the schema never mentions.
    fn reward(&self, state: &StateKey, action: &ActionKey, next: &StateKey) -> f64 {
        self.action_rec(*state, *action)
            .and_then(|rec| {
                rec.outcomes
                    .iter()
                    .find(|outcome| outcome.next == *next)
                    .map(|outcome| outcome.reward)
            })
            .unwrap_or(0.0)
    }

    fn is_terminal(&self, state: &StateKey) -> bool {
        self.states
            .get(state.index())
            .map(|rec| rec.terminal)
            .unwrap_or(false)
    }

    fn initial_state(&self) -> InitialState<StateKey, Categorical<StateKey>> {
        match &self.initial {
            InitialKind::Fixed(key) => InitialState::Fixed(*key),
            InitialKind::Weighted(dist) => InitialState::Random(dist.clone()),
        }
    }

    fn state_index(&self, state: &StateKey) -> Result<usize, IndexError> {
        if state.index() < self.states.len() {
            Ok(state.index())
        } else {
            Err(IndexError::UnknownState)
        }
    }

    fn action_index(&self, action: &ActionKey) -> Result<usize, IndexError> {
        if action.index() < self.actions.len() {
            Ok(action.index())
        } else {
            Err(IndexError::UnknownAction)
        }
    }
}
