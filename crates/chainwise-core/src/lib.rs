mod dist;
mod mdp;

pub use dist::categorical::Categorical;
pub use dist::dirac::Dirac;
pub use dist::distribution::Distribution;
pub use dist::error::DistributionError;
pub use dist::geometric::Geometric;
pub use dist::uniform::DiscreteUniform;
pub use mdp::error::IndexError;
pub use mdp::initial::InitialState;
pub use mdp::process::Mdp;
