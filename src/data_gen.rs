use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound of generated values.
pub const VALUE_BOUND: i32 = 100;

pub struct DataGenerator {
    rng: StdRng,
}

impl DataGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `count` integers uniformly distributed in `[0, VALUE_BOUND)`.
    pub fn uniform_i32(&mut self, count: usize) -> Vec<i32> {
        (0..count).map(|_| self.rng.gen_range(0..VALUE_BOUND)).collect()
    }
}
