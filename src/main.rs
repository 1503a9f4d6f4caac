use johnny_bangbang::{Agent, Arena, RandomAgent, Rules, ShapleyAgent, Side};
use log::info;

fn main() {
    stderrlog::new()
        .verbosity(2)
        .init()
        .expect("logger should only be initialized once");

    let rules = Rules::default();
    let mut shapley: Box<dyn Agent> = match ShapleyAgent::try_create(rules, 0) {
        Some(agent) => Box::new(agent),
        None => {
            info!("rules exceed the tabular cap, falling back to a random agent");
            Box::new(RandomAgent::new(rules, 0))
        }
    };
    let mut random = RandomAgent::new(rules, 1);
    let mut arena = Arena::new();

    let mut shapley_wins = 0;
    let mut random_wins = 0;
    let mut ties = 0;
    let rounds = 1000;
    for _ in 0..rounds {
        match arena.play(shapley.as_mut(), &mut random, None) {
            Some(Side::A) => shapley_wins += 1,
            Some(Side::B) => random_wins += 1,
            None => ties += 1,
        }
    }

    println!("Shapley vs Random over {rounds} games: shapley={shapley_wins} random={random_wins} ties={ties}");
}
