use crate::{action::Action, player_state::PlayerState, rules::Rules};

/// Which side of a duel an agent or an observation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// A pair of `PlayerState`s frozen at one point in time, as yielded by
/// [`crate::recording::GameRecording::replay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub state_a: PlayerState,
    pub state_b: PlayerState,
}

/// The pair `(A, B)` of `PlayerState`s that make up one game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    state_a: PlayerState,
    state_b: PlayerState,
}

impl GameState {
    pub fn new(rules: &Rules) -> Self {
        GameState {
            state_a: PlayerState::new(rules),
            state_b: PlayerState::new(rules),
        }
    }

    pub fn from_states(state_a: PlayerState, state_b: PlayerState) -> Self {
        GameState { state_a, state_b }
    }

    pub fn state_a(&self) -> PlayerState {
        self.state_a
    }

    pub fn state_b(&self) -> PlayerState {
        self.state_b
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state_a: self.state_a,
            state_b: self.state_b,
        }
    }

    pub fn game_over(&self) -> bool {
        self.state_a.is_terminal() || self.state_b.is_terminal()
    }

    /// The simultaneous-resolution protocol (see the distilled spec's §4.3):
    /// illegal choices kill their own side first, then own-effects and
    /// opponent-effects are applied reading the pre-resolve values, so a mutual
    /// Shoot with one bullet each damages both sides at once.
    pub fn resolve(&mut self, action_a: Action, action_b: Action, rules: &Rules) {
        if !self.state_a.is_legal(action_a, rules) {
            self.state_a.die();
        }
        if !self.state_b.is_legal(action_b, rules) {
            self.state_b.die();
        }
        if self.game_over() {
            return;
        }

        self.state_a.apply_own(action_a, rules);
        self.state_b.apply_own(action_b, rules);

        self.state_a.apply_opponent(action_a, action_b);
        self.state_b.apply_opponent(action_b, action_a);
    }

    /// Winner of a terminal state, or the tie-break of a non-terminal one. Returns
    /// `None` on an exact tie (including simultaneous mutual death).
    pub fn winner(&self) -> Option<Side> {
        if !self.game_over() {
            return self.break_tie();
        }
        if self.state_a.lives() > 0 {
            return Some(Side::A);
        }
        if self.state_b.lives() > 0 {
            return Some(Side::B);
        }
        None
    }

    /// Lexicographic comparison of `(lives, bullets, remaining_shields)`; `None` on
    /// full equality.
    pub fn break_tie(&self) -> Option<Side> {
        let a = (self.state_a.lives(), self.state_a.bullets(), self.state_a.remaining_shields());
        let b = (self.state_b.lives(), self.state_b.bullets(), self.state_b.remaining_shields());
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}
