use std::fmt;

/// Error type for discrete index lookups on a decision process.
///
/// "Not discrete" is a property of the model, "unknown" a property of the
/// argument; both are explicit failures so no integer doubles as a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// The state space is not discretely enumerable.
    StateSpaceNotDiscrete,
    /// The action space is not discretely enumerable.
    ActionSpaceNotDiscrete,
    /// The state is not part of the process's state space.
    UnknownState,
    /// The action is not part of the process's action space.
    UnknownAction,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::StateSpaceNotDiscrete => {
                write!(f, "state space is not discretely indexable")
            }
            IndexError::ActionSpaceNotDiscrete => {
                write!(f, "action space is not discretely indexable")
            }
            IndexError::UnknownState => write!(f, "state is not part of the process"),
            IndexError::UnknownAction => write!(f, "action is not part of the process"),
        }
    }
}

impl std::error::Error for IndexError {}
