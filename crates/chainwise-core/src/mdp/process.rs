use crate::dist::distribution::Distribution;
use crate::mdp::{error::IndexError, initial::InitialState};

/// Markov decision process over associated state and action types.
///
/// An implementation fully describes one decision process at construction and
/// is read-only afterwards: every operation is a pure query and any
/// trajectory state lives with the caller. Discrete and continuous spaces
/// share this one trait; only discrete models can honor the index operations.
pub trait Mdp {
    type State;
    type Action;
    /// Distribution family produced by `transition`.
    type Transition: Distribution<Value = Self::State>;
    /// Distribution family a random `initial_state` draws from.
    type Initial: Distribution<Value = Self::State>;

    /// Discount factor in `[0, 1]`, fixed for the lifetime of the process.
    ///
    /// The range is not enforced here; a value outside it is a bug in the
    /// concrete model, visible to its callers.
    fn discount(&self) -> f64;

    /// Distribution over next states for `(state, action)`.
    ///
    /// Must depend only on its arguments: repeated calls with the same pair
    /// return distributions with the same law, though not necessarily the
    /// same object. Behavior on terminal states is implementation-defined
    /// and must be documented by the model.
    fn transition(&self, state: &Self::State, action: &Self::Action) -> Self::Transition;

    /// Immediate reward for the `(state, action, next)` transition.
    ///
    /// Callable for any triple, including ones the transition distribution
    /// would never produce.
    fn reward(&self, state: &Self::State, action: &Self::Action, next: &Self::State) -> f64;

    /// Whether `state` ends the process.
    /// Must answer the same for the same state over the process lifetime.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Fixed start state, or a distribution to draw one from.
    fn initial_state(&self) -> InitialState<Self::State, Self::Initial>;

    /// Dense index of `state`, when the state space is discrete.
    ///
    /// Indices are injective within one process instance and cover `0..N`
    /// for an N-state model. Continuous models fail with
    /// [`IndexError::StateSpaceNotDiscrete`] instead of inventing an index.
    fn state_index(&self, state: &Self::State) -> Result<usize, IndexError>;

    /// Dense index of `action`, when the action space is discrete.
    fn action_index(&self, action: &Self::Action) -> Result<usize, IndexError>;
}
