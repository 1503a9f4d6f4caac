use rand::{rngs::StdRng, Rng as _, SeedableRng};

/// Deterministic, seeded 3-way picker shared by every agent that samples actions.
///
/// Wraps `rand`'s `StdRng` the same way the teacher's `QAgent` seeds its own RNG
/// (`SeedableRng::seed_from_u64`): identical seeds reproduce identical streams across
/// runs, without hand-rolling a generator.
#[derive(Clone)]
pub struct Rng {
    inner: StdRng,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            inner: SeedableRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[0, n)`. `n` must be at least 1.
    pub fn pick(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "pick requires a positive upper bound");
        self.inner.gen_range(0..n)
    }

    /// Returns 0, 1 or 2 with probability proportional to `w0`, `w1`, `w2`.
    ///
    /// Samples a uniform real in `[0, w0+w1+w2)` and walks the cumulative sum, per
    /// the algorithm the distilled spec mandates. The caller must not pass all-zero
    /// weights; behavior in that case is unspecified.
    pub fn pick_weighted(&mut self, w0: f64, w1: f64, w2: f64) -> usize {
        let total = w0 + w1 + w2;
        debug_assert!(total > 0.0, "pick_weighted requires a positive total weight");
        let r = self.inner.gen_range(0.0..total);
        let cumulative = [w0, w0 + w1, w0 + w1 + w2];
        for (i, &c) in cumulative.iter().enumerate() {
            if r < c {
                return i;
            }
        }
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        let seq_a: Vec<usize> = (0..50).map(|_| a.pick(3)).collect();
        let seq_b: Vec<usize> = (0..50).map(|_| b.pick(3)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn pick_stays_in_bounds() {
        let mut r = Rng::new(7);
        for _ in 0..1000 {
            assert!(r.pick(3) < 3);
        }
    }

    #[test]
    fn pick_weighted_respects_zero_weight() {
        let mut r = Rng::new(1);
        for _ in 0..500 {
            let i = r.pick_weighted(1.0, 0.0, 1.0);
            assert_ne!(i, 1);
        }
    }
}
