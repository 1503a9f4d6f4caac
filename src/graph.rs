use std::collections::{BTreeMap, VecDeque};

use log::info;

use crate::{action::Action, game_state::GameState, player_state::PlayerState, rules::Rules};

/// Sentinel edge targets that leave the non-terminal state space.
pub const AWIN: isize = -1;
pub const BWIN: isize = -2;
pub const TIE: isize = -3;

/// The 6-tuple lexicographic key used to sort and look up states:
/// `(livesA, bulletsA, shieldsA, livesB, bulletsB, shieldsB)`.
type StateKey = (i32, i32, i32, i32, i32, i32);

fn key_of(state: &GameState) -> StateKey {
    let a = state.state_a();
    let b = state.state_b();
    (a.lives(), a.bullets(), a.remaining_shields(), b.lives(), b.bullets(), b.remaining_shields())
}

fn key_of_states(a: PlayerState, b: PlayerState) -> StateKey {
    (a.lives(), a.bullets(), a.remaining_shields(), b.lives(), b.bullets(), b.remaining_shields())
}

/// `v(p) = (max_shields+1) * ((max_bullets+1)*lives + bullets) + remaining_shields`.
fn player_value(p: PlayerState, rules: &Rules) -> f64 {
    let v = (rules.max_shields + 1) * ((rules.max_bullets + 1) * p.lives() + p.bullets()) + p.remaining_shields();
    v as f64
}

/// The quantity row player A minimises: `v(B) - v(A)`.
fn heuristic(state: &GameState, rules: &Rules) -> f64 {
    player_value(state.state_b(), rules) - player_value(state.state_a(), rules)
}

/// The full reachable non-terminal state graph for a given set of `Rules`: a
/// sorted state index, 3x3 (action, action)-indexed transition tables (either a
/// non-negative state index or one of the `AWIN`/`BWIN`/`TIE` sentinels), and a
/// parallel cost table carrying the heuristic step delta (`±inf` on a terminal
/// edge).
pub struct GameGraph {
    states: Vec<GameState>,
    next: Vec<[[isize; 3]; 3]>,
    cost: Vec<[[f64; 3]; 3]>,
    start: usize,
}

impl GameGraph {
    /// Builds the graph for `rules`. Returns `None` if rules exceed the 5-cap the
    /// tabular encoding depends on, or if a sanity check on the built transition
    /// table ever fails to resolve to a reachable state (a construction invariant
    /// violation that should not occur).
    pub fn build(rules: &Rules) -> Option<Self> {
        if !rules.fits_tabular_encoding() {
            return None;
        }

        let start_state = GameState::new(rules);
        let mut visited: BTreeMap<StateKey, ()> = BTreeMap::new();
        let mut queue: VecDeque<GameState> = VecDeque::new();
        queue.push_back(start_state);
        visited.insert(key_of(&start_state), ());

        while let Some(s) = queue.pop_front() {
            for &a in &Action::ALL {
                for &b in &Action::ALL {
                    let mut t = s;
                    t.resolve(a, b, rules);
                    if t.game_over() {
                        continue;
                    }
                    let k = key_of(&t);
                    if !visited.contains_key(&k) {
                        visited.insert(k, ());
                        queue.push_back(t);
                    }
                }
            }
        }

        let mut states: Vec<GameState> = Vec::with_capacity(visited.len());
        for &(la, ba, sa, lb, bb, sb) in visited.keys() {
            states.push(GameState::from_states(
                PlayerState::try_from_raw(la, ba, sa, rules).expect("key came from a state built under these rules"),
                PlayerState::try_from_raw(lb, bb, sb, rules).expect("key came from a state built under these rules"),
            ));
        }
        // `BTreeMap` keys already iterate in sorted order; `states` matches the
        // 6-tuple lexicographic key required for `lower_bound`-style lookup.

        info!("game graph has {} non-terminal states", states.len());

        let index_of = |k: &StateKey| states.binary_search_by_key(k, key_of_by_ref);

        let mut next = Vec::with_capacity(states.len());
        let mut cost = Vec::with_capacity(states.len());

        for s in &states {
            let mut next_row = [[0isize; 3]; 3];
            let mut cost_row = [[0.0f64; 3]; 3];
            for (ai, &a) in Action::ALL.iter().enumerate() {
                for (bi, &b) in Action::ALL.iter().enumerate() {
                    let mut t = *s;
                    t.resolve(a, b, rules);
                    if t.game_over() {
                        match t.winner() {
                            Some(crate::game_state::Side::A) => {
                                next_row[ai][bi] = AWIN;
                                cost_row[ai][bi] = f64::NEG_INFINITY;
                            }
                            Some(crate::game_state::Side::B) => {
                                next_row[ai][bi] = BWIN;
                                cost_row[ai][bi] = f64::INFINITY;
                            }
                            None => {
                                next_row[ai][bi] = TIE;
                                cost_row[ai][bi] = 0.0;
                            }
                        }
                    } else {
                        let tk = key_of(&t);
                        match index_of(&tk) {
                            Ok(idx) => {
                                next_row[ai][bi] = idx as isize;
                                cost_row[ai][bi] = heuristic(&t, rules) - heuristic(s, rules);
                            }
                            Err(_) => return None,
                        }
                    }
                }
            }
            next.push(next_row);
            cost.push(cost_row);
        }

        let start = match index_of(&key_of(&start_state)) {
            Ok(idx) => idx,
            Err(_) => return None,
        };

        Some(GameGraph { states, next, cost, start })
    }

    pub fn states(&self) -> &[GameState] {
        &self.states
    }

    pub fn next_table(&self) -> &[[[isize; 3]; 3]] {
        &self.next
    }

    pub fn cost_table(&self) -> &[[[f64; 3]; 3]] {
        &self.cost
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Index of `(my, opp)` in the sorted state array, if it is a reachable,
    /// non-terminal state.
    pub fn index_of(&self, my: PlayerState, opp: PlayerState) -> Option<usize> {
        let k = key_of_states(my, opp);
        self.states.binary_search_by_key(&k, key_of_by_ref).ok()
    }
}

fn key_of_by_ref(s: &GameState) -> StateKey {
    key_of(s)
}
