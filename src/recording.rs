use crate::{
    action::Action,
    game_state::{GameSnapshot, GameState, Side},
    rules::Rules,
};

/// The ordered `(actionA, actionB)` sequence and outcome of one played game.
///
/// Unlike the source this is distilled from, which identifies "my side" by
/// comparing player object addresses, a recording carries its own `Rules` and lets
/// [`GameRecording::replay`] reconstruct the exact sequence of snapshots the live
/// game produced — agents ask for their own side explicitly (see
/// [`crate::agent::Agent::learn_from_game`]) instead of relying on pointer identity.
#[derive(Debug, Clone)]
pub struct GameRecording {
    rules: Rules,
    actions_a: Vec<Action>,
    actions_b: Vec<Action>,
    winner: Option<Side>,
}

impl GameRecording {
    pub fn new(rules: Rules) -> Self {
        GameRecording {
            rules,
            actions_a: Vec::new(),
            actions_b: Vec::new(),
            winner: None,
        }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn clear(&mut self) {
        self.actions_a.clear();
        self.actions_b.clear();
        self.winner = None;
    }

    pub fn record(&mut self, action_a: Action, action_b: Action) {
        self.actions_a.push(action_a);
        self.actions_b.push(action_b);
    }

    pub fn record_winner(&mut self, winner: Option<Side>) {
        self.winner = winner;
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn len(&self) -> usize {
        self.actions_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions_a.is_empty()
    }

    /// Replays a fresh `GameState` under the stored `Rules`, invoking `callback`
    /// with `(before, after, action_a, action_b)` for each turn in order, stopping
    /// at game-over or once the stored sequence is exhausted.
    pub fn replay<F: FnMut(GameSnapshot, GameSnapshot, Action, Action)>(&self, mut callback: F) {
        let mut state = GameState::new(&self.rules);
        let mut turn = 0;
        while !state.game_over() && turn < self.actions_a.len() {
            let action_a = self.actions_a[turn];
            let action_b = self.actions_b[turn];
            turn += 1;
            let before = state.snapshot();
            state.resolve(action_a, action_b, &self.rules);
            let after = state.snapshot();
            callback(before, after, action_a, action_b);
        }
    }
}
