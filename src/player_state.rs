use crate::{action::Action, rng::Rng, rules::Rules};

/// One side's resources: remaining lives, loaded bullets and remaining shields.
///
/// Constructed fresh from [`Rules`] at the start of every game; mutated in place by
/// [`crate::game_state::GameState::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    lives: i32,
    bullets: i32,
    remaining_shields: i32,
}

impl PlayerState {
    pub fn new(rules: &Rules) -> Self {
        PlayerState {
            lives: rules.start_lives,
            bullets: 0,
            remaining_shields: rules.max_shields,
        }
    }

    /// Builds a `PlayerState` directly from raw fields, validating them against
    /// `rules`. Mirrors the external handle layer's `create_state`, which must
    /// reject state fields outside `[0, rules.limit]` rather than trust them.
    pub fn try_from_raw(lives: i32, bullets: i32, remaining_shields: i32, rules: &Rules) -> Option<Self> {
        if !(0..=rules.start_lives).contains(&lives) {
            return None;
        }
        if !(0..=rules.max_bullets).contains(&bullets) {
            return None;
        }
        if !(0..=rules.max_shields).contains(&remaining_shields) {
            return None;
        }
        Some(PlayerState {
            lives,
            bullets,
            remaining_shields,
        })
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn bullets(&self) -> i32 {
        self.bullets
    }

    pub fn remaining_shields(&self) -> i32 {
        self.remaining_shields
    }

    pub fn is_terminal(&self) -> bool {
        self.lives == 0
    }

    pub fn die(&mut self) {
        self.lives = 0;
    }

    pub fn is_legal(&self, action: Action, rules: &Rules) -> bool {
        match action {
            Action::Reload => self.bullets < rules.max_bullets,
            Action::Shield => self.remaining_shields > 0,
            Action::Shoot => self.bullets > 0,
        }
    }

    fn legal_actions(&self, rules: &Rules) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&a| self.is_legal(a, rules))
            .collect()
    }

    /// Uniformly samples one of the currently legal actions. At least one action is
    /// always legal as long as `max_bullets > 0` or `max_shields > 0`.
    pub fn random_allowed_action(&self, rng: &mut Rng, rules: &Rules) -> Action {
        let legal = self.legal_actions(rules);
        legal[rng.pick(legal.len())]
    }

    /// Samples among the legal actions with probability proportional to the given
    /// per-action weights; illegal actions get weight zero before delegating to
    /// [`Rng::pick_weighted`].
    pub fn random_allowed_action_biased(
        &self,
        rng: &mut Rng,
        rules: &Rules,
        w_reload: f64,
        w_shield: f64,
        w_shoot: f64,
    ) -> Action {
        let w_reload = if self.is_legal(Action::Reload, rules) { w_reload } else { 0.0 };
        let w_shield = if self.is_legal(Action::Shield, rules) { w_shield } else { 0.0 };
        let w_shoot = if self.is_legal(Action::Shoot, rules) { w_shoot } else { 0.0 };
        Action::from_index(rng.pick_weighted(w_reload, w_shield, w_shoot))
    }

    /// Applies the effects of one's own action. Precondition: `is_legal(action,
    /// rules)`; violating it is a caller bug, not a recoverable error, so it is only
    /// checked in debug builds.
    pub fn apply_own(&mut self, action: Action, rules: &Rules) {
        debug_assert!(self.is_legal(action, rules), "apply_own called with an illegal action");
        match action {
            Action::Reload => {
                self.bullets += 1;
                self.remaining_shields = rules.max_shields;
            }
            Action::Shield => {
                self.remaining_shields -= 1;
            }
            Action::Shoot => {
                self.bullets -= 1;
                self.remaining_shields = rules.max_shields;
            }
        }
    }

    /// Applies the effect of the opponent's action on this side: a hit lands unless
    /// this side shielded.
    pub fn apply_opponent(&mut self, my_action: Action, opponent_action: Action) {
        if opponent_action == Action::Shoot && my_action != Action::Shield {
            self.lives = (self.lives - 1).max(0);
        }
    }

    /// Index in `[0, 216)` used by the Q-table and the Shapley `GameGraph` heuristic.
    pub fn tabular_index(&self) -> usize {
        self.lives as usize + 6 * self.bullets as usize + 36 * self.remaining_shields as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_matches_rules() {
        let rules = Rules::default();
        let s = PlayerState::new(&rules);
        assert_eq!(s.lives(), 5);
        assert_eq!(s.bullets(), 0);
        assert_eq!(s.remaining_shields(), 5);
    }

    #[test]
    fn legality_table() {
        let rules = Rules::default();
        let full_bullets = PlayerState::try_from_raw(5, 5, 5, &rules).unwrap();
        assert!(!full_bullets.is_legal(Action::Reload, &rules));
        assert!(full_bullets.is_legal(Action::Shoot, &rules));
        assert!(full_bullets.is_legal(Action::Shield, &rules));

        let empty = PlayerState::try_from_raw(5, 0, 0, &rules).unwrap();
        assert!(!empty.is_legal(Action::Shoot, &rules));
        assert!(!empty.is_legal(Action::Shield, &rules));
        assert!(empty.is_legal(Action::Reload, &rules));
    }

    #[test]
    fn reload_refills_shields() {
        let rules = Rules::default();
        let mut s = PlayerState::try_from_raw(5, 2, 1, &rules).unwrap();
        s.apply_own(Action::Reload, &rules);
        assert_eq!(s.bullets(), 3);
        assert_eq!(s.remaining_shields(), 5);
    }

    #[test]
    fn shield_consumes_without_refill() {
        let rules = Rules::default();
        let mut s = PlayerState::try_from_raw(5, 2, 3, &rules).unwrap();
        s.apply_own(Action::Shield, &rules);
        assert_eq!(s.bullets(), 2);
        assert_eq!(s.remaining_shields(), 2);
    }

    #[test]
    fn shoot_refills_shields() {
        let rules = Rules::default();
        let mut s = PlayerState::try_from_raw(5, 2, 1, &rules).unwrap();
        s.apply_own(Action::Shoot, &rules);
        assert_eq!(s.bullets(), 1);
        assert_eq!(s.remaining_shields(), 5);
    }

    #[test]
    fn shield_absorbs_opponent_shoot() {
        let mut s = PlayerState::try_from_raw(5, 1, 1, &Rules::default()).unwrap();
        s.apply_opponent(Action::Shield, Action::Shoot);
        assert_eq!(s.lives(), 5);
    }

    #[test]
    fn unshielded_shoot_costs_a_life() {
        let mut s = PlayerState::try_from_raw(5, 1, 1, &Rules::default()).unwrap();
        s.apply_opponent(Action::Reload, Action::Shoot);
        assert_eq!(s.lives(), 4);
    }

    #[test]
    fn lives_cannot_go_negative() {
        let mut s = PlayerState::try_from_raw(0, 1, 1, &Rules::default()).unwrap();
        s.apply_opponent(Action::Reload, Action::Shoot);
        assert_eq!(s.lives(), 0);
    }

    #[test]
    fn tabular_index_is_within_216() {
        let rules = Rules::default();
        let s = PlayerState::try_from_raw(5, 5, 5, &rules).unwrap();
        assert!(s.tabular_index() < 216);
    }
}
