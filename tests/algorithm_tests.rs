use johnny_bangbang::{
    Action, Agent, Arena, GameGraph, GameState, PlayerState, QLearningAgent, RandomAgent, Rules,
    ShapleyAgent, Side,
};

fn default_rules() -> Rules {
    Rules::default()
}

fn state(lives: i32, bullets: i32, shields: i32, rules: &Rules) -> PlayerState {
    PlayerState::try_from_raw(lives, bullets, shields, rules).unwrap()
}

/// The end-to-end scenario table (E1-E6), driven through the public `GameState` API
/// rather than `PlayerState` directly.
#[test]
fn end_to_end_scenarios() {
    let rules = default_rules();

    // E1
    let mut g = GameState::from_states(state(5, 0, 5, &rules), state(5, 0, 5, &rules));
    g.resolve(Action::Reload, Action::Reload, &rules);
    assert_eq!(g.state_a(), state(5, 1, 5, &rules));
    assert_eq!(g.state_b(), state(5, 1, 5, &rules));

    // E2
    let mut g = GameState::from_states(state(5, 1, 5, &rules), state(5, 1, 5, &rules));
    g.resolve(Action::Shoot, Action::Shoot, &rules);
    assert_eq!(g.state_a(), state(4, 0, 5, &rules));
    assert_eq!(g.state_b(), state(4, 0, 5, &rules));

    // E3
    let mut g = GameState::from_states(state(5, 1, 5, &rules), state(5, 0, 5, &rules));
    g.resolve(Action::Shoot, Action::Shield, &rules);
    assert_eq!(g.state_a(), state(5, 0, 5, &rules));
    assert_eq!(g.state_b(), state(5, 0, 4, &rules));

    // E4
    let mut g = GameState::from_states(state(5, 1, 5, &rules), state(5, 0, 0, &rules));
    g.resolve(Action::Shoot, Action::Shield, &rules);
    assert_eq!(g.state_a(), state(5, 0, 5, &rules));
    assert_eq!(g.state_b().lives(), 0);

    // E5
    let mut g = GameState::from_states(state(5, 5, 5, &rules), state(5, 5, 5, &rules));
    g.resolve(Action::Reload, Action::Reload, &rules);
    assert_eq!(g.state_a().lives(), 0);
    assert_eq!(g.state_b().lives(), 0);

    // E6
    let mut g = GameState::from_states(state(1, 1, 5, &rules), state(1, 1, 5, &rules));
    g.resolve(Action::Shoot, Action::Shoot, &rules);
    assert_eq!(g.state_a().lives(), 0);
    assert_eq!(g.state_b().lives(), 0);
    assert_eq!(g.winner(), None);
}

/// Property 2: after any non-terminal resolve, both sides have at least one legal
/// action (max_bullets and max_shields are both positive for every tested rule set).
#[test]
fn non_terminal_states_always_have_a_legal_action() {
    let rules = default_rules();
    let mut rng_state = GameState::new(&rules);
    let mut a = RandomAgent::new(rules, 10);
    let mut b = RandomAgent::new(rules, 11);

    for _ in 0..rules.max_turns {
        let action_a = a.next_action(rng_state.state_a(), rng_state.state_b());
        let action_b = b.next_action(rng_state.state_b(), rng_state.state_a());
        rng_state.resolve(action_a, action_b, &rules);
        if rng_state.game_over() {
            break;
        }
        assert!(Action::ALL.iter().any(|&act| rng_state.state_a().is_legal(act, &rules)));
        assert!(Action::ALL.iter().any(|&act| rng_state.state_b().is_legal(act, &rules)));
    }
}

/// Property 1: resources stay within their documented bounds across a full random
/// game.
#[test]
fn resources_stay_in_bounds_across_a_random_game() {
    let rules = default_rules();
    let mut s = GameState::new(&rules);
    let mut a = RandomAgent::new(rules, 20);
    let mut b = RandomAgent::new(rules, 21);

    for _ in 0..rules.max_turns {
        let action_a = a.next_action(s.state_a(), s.state_b());
        let action_b = b.next_action(s.state_b(), s.state_a());
        s.resolve(action_a, action_b, &rules);

        for side in [s.state_a(), s.state_b()] {
            assert!((0..=rules.start_lives).contains(&side.lives()));
            assert!((0..=rules.max_bullets).contains(&side.bullets()));
            assert!((0..=rules.max_shields).contains(&side.remaining_shields()));
        }
        if s.game_over() {
            break;
        }
    }
}

/// Property 13: state count for the default rules is deterministic, and small
/// enough to bound.
#[test]
fn default_graph_state_count_is_stable_and_bounded() {
    let rules = default_rules();
    let graph = GameGraph::build(&rules).unwrap();
    assert!(graph.states().len() > 0);
    assert!(graph.states().len() <= 216 * 216);
}

/// Property 15: Shapley beats uniform random by a margin greater than its loss
/// count over a large number of games. Small rules keep this fast while still
/// exercising a non-trivial graph.
#[test]
fn shapley_beats_random_over_many_games() {
    let rules = Rules::try_new(3, 3, 3, 200).unwrap();
    let mut shapley = ShapleyAgent::try_create(rules, 5).unwrap();
    let mut random = RandomAgent::new(rules, 6);
    let mut arena = Arena::new();

    let mut wins = 0;
    let mut losses = 0;
    for _ in 0..5000 {
        match arena.play(&mut shapley, &mut random, None) {
            Some(Side::A) => wins += 1,
            Some(Side::B) => losses += 1,
            None => {}
        }
    }
    assert!(wins - losses > losses, "wins={wins} losses={losses}");
}

/// Property 17: after 100,000 training games against a random opponent on the
/// default rules, the Q-table has at least 10% high-confidence cells. Only the
/// default rules exercise enough of the fixed 216x216x3 table for this bound to
/// be reachable; smaller rules leave most of the table permanently at confidence
/// zero no matter how many games are played.
#[test]
fn qlearning_reaches_high_confidence_with_enough_training() {
    let rules = default_rules();
    let mut learner = QLearningAgent::try_create(rules, 7).unwrap();
    let mut random = RandomAgent::new(rules, 8);
    let mut arena = Arena::new();

    for _ in 0..100_000 {
        arena.play(&mut learner, &mut random, None);
    }

    assert!(learner.confidence_percentage() >= 10.0, "confidence={}", learner.confidence_percentage());
}
