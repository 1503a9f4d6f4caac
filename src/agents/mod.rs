//! The closed set of agent implementations built on top of [`crate::agent::Agent`].

mod qlearning;
mod random;
mod shapley;

pub use qlearning::QLearningAgent;
pub use random::{BiasedRandomAgent, RandomAgent};
pub use shapley::ShapleyAgent;
