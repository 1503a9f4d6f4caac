use crate::{action::Action, agent::Agent, player_state::PlayerState, rng::Rng, rules::Rules};

/// Picks uniformly among its own legal actions every turn. Never learns.
pub struct RandomAgent {
    rules: Rules,
    rng: Rng,
}

impl RandomAgent {
    pub fn new(rules: Rules, seed: u64) -> Self {
        RandomAgent { rules, rng: Rng::new(seed) }
    }
}

impl Agent for RandomAgent {
    fn rules(&self) -> Rules {
        self.rules
    }

    fn next_action(&mut self, my_state: PlayerState, _opp_state: PlayerState) -> Action {
        my_state.random_allowed_action(&mut self.rng, &self.rules)
    }
}

/// Picks among its own legal actions with fixed per-action weights. Never learns.
pub struct BiasedRandomAgent {
    rules: Rules,
    rng: Rng,
    weight_reload: f64,
    weight_shield: f64,
    weight_shoot: f64,
}

impl BiasedRandomAgent {
    /// Weights are clamped to at least 1 at construction, so a caller cannot hand
    /// this agent an all-zero (or negative) weight vector that would make
    /// `pick_weighted`'s behavior unspecified once the illegal actions are zeroed
    /// out at play time.
    pub fn new(rules: Rules, seed: u64, weight_reload: f64, weight_shield: f64, weight_shoot: f64) -> Self {
        BiasedRandomAgent {
            rules,
            rng: Rng::new(seed),
            weight_reload: weight_reload.max(1.0),
            weight_shield: weight_shield.max(1.0),
            weight_shoot: weight_shoot.max(1.0),
        }
    }
}

impl Agent for BiasedRandomAgent {
    fn rules(&self) -> Rules {
        self.rules
    }

    fn next_action(&mut self, my_state: PlayerState, _opp_state: PlayerState) -> Action {
        my_state.random_allowed_action_biased(
            &mut self.rng,
            &self.rules,
            self.weight_reload,
            self.weight_shield,
            self.weight_shoot,
        )
    }
}
