use itertools::Itertools;

const EPS: f64 = 1e-7;

/// A 3x3 zero-sum payoff matrix: row player minimises, column player maximises
/// `sum A[i][j] * p[i] * q[j]`.
pub type Matrix3 = [[f64; 3]; 3];

/// Value and row-mixed strategy returned by [`Matrix3Solver::solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyPoint {
    pub value: f64,
    pub p: [f64; 3],
}

impl StrategyPoint {
    pub fn pure(row: usize, value: f64) -> Self {
        let mut p = [0.0; 3];
        p[row] = 1.0;
        StrategyPoint { value, p }
    }
}

/// Pure/mixed 3x3 zero-sum min-max solver, analytic and LP-free (see the distilled
/// spec's §4.7 and §9: the source kept a process-wide LP solver handle alive for
/// this; here it is a stateless, per-call routine since the 3x3 problem is small
/// enough to enumerate candidates directly).
pub struct Matrix3Solver;

impl Matrix3Solver {
    /// Solves `a` for the row-minimising player, returning the value and the
    /// row-player's mixed strategy.
    pub fn solve(a: &Matrix3) -> StrategyPoint {
        let row_max: [f64; 3] = std::array::from_fn(|i| a[i].iter().cloned().fold(f64::NEG_INFINITY, f64::max));
        let col_min: [f64; 3] = std::array::from_fn(|j| (0..3).map(|i| a[i][j]).fold(f64::INFINITY, f64::min));

        let lower = col_min.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let upper = row_max.iter().cloned().fold(f64::INFINITY, f64::min);

        // Pure-strategy shortcut. This equality test is intentional (see the
        // distilled spec's Design Notes): loosening it to an epsilon test would
        // change which states take the mixed path and perturb the mean-payoff
        // vector computed by value iteration.
        if upper == lower {
            let row = row_max.iter().position(|&v| v == upper).expect("upper is one of row_max's own values");
            return StrategyPoint::pure(row, upper);
        }

        let mut best: Option<StrategyPoint> = None;
        for candidate in Self::candidates(a) {
            let evaluated = Self::evaluate(a, candidate);
            if best.map_or(true, |b| evaluated.value < b.value) {
                best = Some(evaluated);
            }
        }
        best.unwrap_or_else(|| {
            // Cannot happen for finite inputs (the pure-strategy shortcut always
            // provides at least one feasible candidate), but fall back to it
            // explicitly rather than panic.
            let row = row_max.iter().position(|&v| v == upper).expect("upper is one of row_max's own values");
            StrategyPoint::pure(row, upper)
        })
    }

    /// Enumerates the up-to-10 stationary-point candidates: nine two-row/two-column
    /// corner solutions with one zero component, plus one fully interior candidate
    /// from the 3x3 linear system.
    fn candidates(a: &Matrix3) -> Vec<[f64; 3]> {
        let mut out = Vec::with_capacity(10);

        for (j1, j2) in (0..3).tuple_combinations() {
            for k in 0..3 {
                let rows: Vec<usize> = (0..3).filter(|&r| r != k).collect();
                let (r0, r1) = (rows[0], rows[1]);
                // Classical 2x2 mixed solution against columns j1, j2 using rows r0, r1.
                let d0 = a[r1][j2] - a[r1][j1];
                let d1 = a[r0][j1] - a[r0][j2];
                let total = d0 + d1;
                if total.abs() < EPS {
                    continue;
                }
                let mut p = [0.0; 3];
                p[r0] = d0 / total;
                p[r1] = d1 / total;
                p[k] = 0.0;
                out.push(p);
            }
        }

        if let Some(interior) = Self::interior_candidate(a) {
            out.push(interior);
        }

        out
    }

    /// Solves the 3x3 linear system (indifference between all three columns, plus
    /// the simplex constraint) via Cramer's rule. Returns `None` if the system is
    /// singular.
    fn interior_candidate(a: &Matrix3) -> Option<[f64; 3]> {
        let m = [
            [a[0][0] - a[0][1], a[1][0] - a[1][1], a[2][0] - a[2][1]],
            [a[0][1] - a[0][2], a[1][1] - a[1][2], a[2][1] - a[2][2]],
            [1.0, 1.0, 1.0],
        ];
        let rhs = [0.0, 0.0, 1.0];

        let det = Self::det3(&m);
        if det.abs() < EPS {
            return None;
        }

        let mut p = [0.0; 3];
        for col in 0..3 {
            let mut mc = m;
            for row in 0..3 {
                mc[row][col] = rhs[row];
            }
            p[col] = Self::det3(&mc) / det;
        }
        Some(p)
    }

    fn det3(m: &[[f64; 3]; 3]) -> f64 {
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Evaluates a candidate row strategy: `+inf` if it falls outside the simplex
    /// (within `EPS` slack), otherwise `max_j sum_i A[i][j] p[i]`.
    fn evaluate(a: &Matrix3, p: [f64; 3]) -> StrategyPoint {
        let sum: f64 = p.iter().sum();
        let feasible = p.iter().all(|&pi| pi >= -EPS && pi <= 1.0 + EPS) && (1.0 - EPS..=1.0 + EPS).contains(&sum);
        if !feasible {
            return StrategyPoint { value: f64::INFINITY, p };
        }
        let value = (0..3)
            .map(|j| (0..3).map(|i| a[i][j] * p[i]).sum::<f64>())
            .fold(f64::NEG_INFINITY, f64::max);
        StrategyPoint { value, p }
    }
}
