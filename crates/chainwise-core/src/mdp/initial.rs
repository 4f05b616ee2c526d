use rand::Rng;

use crate::dist::distribution::Distribution;

/// Start-state declaration of a decision process: either one known state, or
/// a distribution over states. Consumers must handle both shapes explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialState<S, D>
where
    D: Distribution<Value = S>,
{
    /// The process always starts in this state.
    Fixed(S),
    /// The start state is drawn fresh per episode.
    Random(D),
}

impl<S, D> InitialState<S, D>
where
    S: Clone,
    D: Distribution<Value = S>,
{
    /// Collapse either shape into a concrete start state.
    pub fn realize<R: Rng + ?Sized>(&self, rng: &mut R) -> S {
        match self {
            InitialState::Fixed(state) => state.clone(),
            InitialState::Random(dist) => dist.sample(rng),
        }
    }

    /// The fixed start state, if this is the fixed shape.
    pub fn fixed(&self) -> Option<&S> {
        match self {
            InitialState::Fixed(state) => Some(state),
            InitialState::Random(_) => None,
        }
    }
}
