//! Johnny Bang-bang: a two-player, simultaneous-move, zero-sum duel game kernel,
//! a Shapley (stochastic-game) solver, and a tabular Q-learning agent.
//!
//! This crate is the game kernel and the agents that play it; a tournament driver,
//! pretty-printer, CLI and any stable ABI boundary are external consumers built on
//! top of the public items re-exported here.

pub mod action;
pub mod agent;
pub mod agents;
pub mod arena;
pub mod game_state;
pub mod graph;
pub mod matrix3;
pub mod player_state;
pub mod recording;
pub mod rng;
pub mod rules;

pub use action::Action;
pub use agent::Agent;
pub use agents::{BiasedRandomAgent, QLearningAgent, RandomAgent, ShapleyAgent};
pub use arena::Arena;
pub use game_state::{GameSnapshot, GameState, Side};
pub use graph::GameGraph;
pub use matrix3::{Matrix3, Matrix3Solver, StrategyPoint};
pub use player_state::PlayerState;
pub use recording::GameRecording;
pub use rng::Rng;
pub use rules::Rules;
