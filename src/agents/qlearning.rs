use crate::{
    action::Action,
    agent::Agent,
    game_state::Side,
    player_state::PlayerState,
    recording::GameRecording,
    rng::Rng,
    rules::Rules,
};

const PER_SIDE: usize = 216;
const JOINT_SIZE: usize = PER_SIDE * PER_SIDE;

const LEARNING_RATE: f64 = 0.1;
const DISCOUNT: f64 = 0.1;
const CONFIDENCE_THRESHOLD: u32 = 5;
const SCORE_MARGIN: f64 = 1.0;

const REWARD_WIN: f64 = 10.0;
const REWARD_DRAW: f64 = -1.0;
const REWARD_LOSS: f64 = -10.0;

#[derive(Debug, Clone, Copy, Default)]
struct QCell {
    score: f64,
    confidence: u32,
}

fn joint_index(my: PlayerState, opp: PlayerState) -> usize {
    my.tabular_index() + PER_SIDE * opp.tabular_index()
}

/// Tabular Q-learner over the joint `(me, opponent)` state index, with a
/// confidence-gated ε-greedy policy and post-game backup from a recording.
pub struct QLearningAgent {
    rules: Rules,
    rng: Rng,
    q: [Vec<QCell>; 3],
}

impl QLearningAgent {
    /// Refuses construction when any resource exceeds the 5-cap the joint index
    /// depends on.
    pub fn try_create(rules: Rules, seed: u64) -> Option<Self> {
        if !rules.fits_tabular_encoding() {
            return None;
        }
        Some(QLearningAgent {
            rules,
            rng: Rng::new(seed),
            q: std::array::from_fn(|_| vec![QCell::default(); JOINT_SIZE]),
        })
    }

    /// Fraction of table entries, across all three actions, whose confidence has
    /// reached the exploration threshold, as a percentage.
    pub fn confidence_percentage(&self) -> f64 {
        let high = self
            .q
            .iter()
            .flat_map(|table| table.iter())
            .filter(|cell| cell.confidence >= CONFIDENCE_THRESHOLD)
            .count();
        100.0 * high as f64 / (3 * JOINT_SIZE) as f64
    }

    fn reward_for(recording: &GameRecording, my_side: Side) -> f64 {
        match recording.winner() {
            Some(side) if side == my_side => REWARD_WIN,
            Some(_) => REWARD_LOSS,
            None => REWARD_DRAW,
        }
    }
}

impl Agent for QLearningAgent {
    fn rules(&self) -> Rules {
        self.rules
    }

    fn next_action(&mut self, my_state: PlayerState, opp_state: PlayerState) -> Action {
        let idx = joint_index(my_state, opp_state);
        let scores: [f64; 3] = std::array::from_fn(|a| self.q[a][idx].score);
        let confidences: [u32; 3] = std::array::from_fn(|a| self.q[a][idx].confidence);

        let best = (0..3).max_by(|&x, &y| scores[x].total_cmp(&scores[y])).expect("three actions always exist");
        let worst = (0..3).min_by(|&x, &y| scores[x].total_cmp(&scores[y])).expect("three actions always exist");

        if confidences[best] < CONFIDENCE_THRESHOLD
            || confidences[worst] < CONFIDENCE_THRESHOLD
            || scores[best] - scores[worst] < SCORE_MARGIN
        {
            return my_state.random_allowed_action(&mut self.rng, &self.rules);
        }

        let best_action = Action::from_index(best);
        if my_state.is_legal(best_action, &self.rules) {
            best_action
        } else {
            my_state.random_allowed_action(&mut self.rng, &self.rules)
        }
    }

    fn learn_from_game(&mut self, recording: &GameRecording, my_side: Side) {
        let reward = Self::reward_for(recording, my_side);
        let q = &mut self.q;

        recording.replay(|before, after, action_a, action_b| {
            let (my_action, my_before, opp_before, my_after, opp_after) = match my_side {
                Side::A => (action_a, before.state_a, before.state_b, after.state_a, after.state_b),
                Side::B => (action_b, before.state_b, before.state_a, after.state_b, after.state_a),
            };

            let before_idx = joint_index(my_before, opp_before);
            let after_idx = joint_index(my_after, opp_after);
            let est = (0..3).map(|a| q[a][after_idx].score).fold(f64::NEG_INFINITY, f64::max);

            let cell = &mut q[my_action.index()][before_idx];
            cell.score += LEARNING_RATE * (reward + DISCOUNT * est - cell.score);
            cell.confidence += 1;
        });
    }
}
