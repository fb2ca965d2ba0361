use chrono::Utc;
use pushid_core::{Clock, RandomSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Wall clock in UTC milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // Clocks set before 1970 read as the epoch.
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Entropy-seeded RNG producing uniform symbols in `[0, 64)`.
///
/// Not suitable where push ids must be unguessable.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn next_symbol(&mut self) -> u8 {
        self.rng.gen_range(0..64)
    }
}
