use crate::{
    action::Action,
    agent::Agent,
    graph::{GameGraph, AWIN, BWIN},
    matrix3::{Matrix3, Matrix3Solver, StrategyPoint},
    player_state::PlayerState,
    rng::Rng,
    rules::Rules,
};

const MAX_ITERATIONS: u32 = 200;
const BIG: f64 = 500.0;

/// Approximates the mean-payoff value and a per-state mixed strategy by value
/// iteration over the reachable [`GameGraph`], using [`Matrix3Solver`] as the
/// per-state Bellman step (Shapley's 1953 stochastic-game procedure).
pub struct ShapleyAgent {
    rules: Rules,
    graph: GameGraph,
    mean_payoff: Vec<StrategyPoint>,
    rng: Rng,
}

impl ShapleyAgent {
    /// Fails when `rules` exceed the 5-cap the graph's tabular encoding depends on.
    pub fn try_create(rules: Rules, seed: u64) -> Option<Self> {
        let graph = GameGraph::build(&rules)?;
        let mean_payoff = Self::value_iterate(&graph);
        Some(ShapleyAgent {
            rules,
            graph,
            mean_payoff,
            rng: Rng::new(seed),
        })
    }

    fn value_iterate(graph: &GameGraph) -> Vec<StrategyPoint> {
        let n = graph.states().len();
        let mut v: Vec<StrategyPoint> = vec![StrategyPoint { value: 0.0, p: [0.0; 3] }; n];

        for _ in 0..MAX_ITERATIONS {
            let mut v_next = Vec::with_capacity(n);
            for i in 0..n {
                let cost = &graph.cost_table()[i];
                let next = &graph.next_table()[i];
                let mut m: Matrix3 = [[0.0; 3]; 3];
                for a in 0..3 {
                    for b in 0..3 {
                        let base = if cost[a][b] == f64::NEG_INFINITY {
                            -BIG
                        } else if cost[a][b] == f64::INFINITY {
                            BIG
                        } else {
                            cost[a][b]
                        };
                        let continuation = match next[a][b] {
                            AWIN => -BIG,
                            BWIN => BIG,
                            dst if dst >= 0 => v[dst as usize].value,
                            _ => 0.0, // TIE
                        };
                        m[a][b] = base + continuation;
                    }
                }
                v_next.push(Matrix3Solver::solve(&m));
            }
            v = v_next;
        }

        for sp in &mut v {
            sp.value /= MAX_ITERATIONS as f64;
        }
        v
    }
}

impl Agent for ShapleyAgent {
    fn rules(&self) -> Rules {
        self.rules
    }

    fn next_action(&mut self, my_state: PlayerState, opp_state: PlayerState) -> Action {
        let Some(idx) = self.graph.index_of(my_state, opp_state) else {
            return my_state.random_allowed_action(&mut self.rng, &self.rules);
        };
        let p = self.mean_payoff[idx].p;
        let sampled = Action::from_index(self.rng.pick_weighted(p[0], p[1], p[2]));
        if my_state.is_legal(sampled, &self.rules) {
            sampled
        } else {
            my_state.random_allowed_action(&mut self.rng, &self.rules)
        }
    }
}
