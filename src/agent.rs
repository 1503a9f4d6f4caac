use crate::{action::Action, game_state::Side, player_state::PlayerState, recording::GameRecording, rules::Rules};

/// Uniform contract every agent kind implements: pick a next action, and optionally
/// learn from a finished game's recording.
///
/// A fixed variant set (`RandomAgent`, `BiasedRandomAgent`, `QLearningAgent`,
/// `ShapleyAgent`) sits behind this one trait object, so the arena and any
/// tournament code built on top of this crate can mix agent kinds without a generic
/// parameter per game — the same shape as the teacher's own `Agent`/`Player`
/// abstraction consumed through `&(impl Agent<State> + ?Sized)`.
pub trait Agent {
    /// Immutable snapshot of the rules this agent was built for.
    fn rules(&self) -> Rules;

    /// Chooses the next action given both sides' current state. Not required to
    /// return a legal action: the engine kills a side that proposes an illegal one
    /// on the next `resolve` (see the distilled spec's §7).
    fn next_action(&mut self, my_state: PlayerState, opp_state: PlayerState) -> Action;

    /// Called once after a game ends, with the side this agent played. May be a
    /// no-op; agents that don't learn (random, biased random) leave the default.
    fn learn_from_game(&mut self, _recording: &GameRecording, _my_side: Side) {}
}
