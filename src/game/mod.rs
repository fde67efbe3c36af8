//! Game rules and round state
//!
//! `Game` is the rules engine; `Session` is the state of one round.

mod engine;
mod policy;
mod session;

pub use engine::{Game, Submission};
pub use policy::Policy;
pub use session::Session;
