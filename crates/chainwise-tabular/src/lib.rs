mod builder;
mod compiled;
mod error;
mod interner;
mod io;
mod schema;

pub use builder::TabularBuilder;
pub use compiled::{ActionKey, StateKey, TabularMdp};
pub use error::TabularError;
pub use interner::Interner;
pub use io::{compile_yaml, load_json, load_yaml, save_json, save_yaml};
pub use schema::{ActionSchema, InitialEntry, OutcomeSchema, StateSchema, TabularSchema};
