//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic and dependency-free, so game tests can pin a seed.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound). Returns 0 for an empty range.
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Random multiple of `step` offset from `min`, within `[min, max]`.
    pub fn aligned(&mut self, min: f32, max: f32, step: f32) -> f32 {
        let cells = ((max - min) / step).floor().max(0.0) as u32 + 1;
        min + self.next_int(cells) as f32 * step
    }
}
