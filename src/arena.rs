use log::{debug, info};

use crate::{
    agent::Agent,
    game_state::{GameState, Side},
    recording::GameRecording,
};

/// Drives a single game turn-by-turn, consulting both agents simultaneously and
/// recording the sequence of actions played.
pub struct Arena;

impl Arena {
    pub fn new() -> Self {
        Arena
    }

    /// Plays one game between `a` (side A) and `b` (side B). Fails (returns `None`,
    /// leaving `recording` untouched) if the two agents' rules disagree. If
    /// `recording` is supplied it is cleared first and filled turn by turn; both
    /// agents are given a chance to learn from it once the game ends, regardless of
    /// whether a recording slot was provided.
    pub fn play(
        &mut self,
        a: &mut dyn Agent,
        b: &mut dyn Agent,
        mut recording: Option<&mut GameRecording>,
    ) -> Option<Side> {
        if a.rules() != b.rules() {
            debug!("arena: rules mismatch between players, refusing to play");
            return None;
        }
        let rules = a.rules();
        let mut state = GameState::new(&rules);

        let mut local_recording = GameRecording::new(rules);
        if let Some(r) = recording.as_deref_mut() {
            r.clear();
        }

        for _turn in 0..rules.max_turns {
            let action_a = a.next_action(state.state_a(), state.state_b());
            let action_b = b.next_action(state.state_b(), state.state_a());

            if let Some(r) = recording.as_deref_mut() {
                r.record(action_a, action_b);
            } else {
                local_recording.record(action_a, action_b);
            }

            state.resolve(action_a, action_b, &rules);
            if state.game_over() {
                break;
            }
        }

        let winner = state.winner();
        if let Some(r) = recording.as_deref_mut() {
            r.record_winner(winner);
        }
        local_recording.record_winner(winner);

        let recording_ref = recording.as_deref().unwrap_or(&local_recording);
        a.learn_from_game(recording_ref, Side::A);
        b.learn_from_game(recording_ref, Side::B);

        info!("arena: game finished after {} turns, winner={:?}", recording_ref.len(), winner);
        winner
    }
}

impl Default for Arena {
    fn default() -> Self {
        Arena::new()
    }
}
