use std::sync::{Mutex, PoisonError};

use pushid_core::{
    Clock, ClockRegressionPolicy, ExhaustionPolicy, GeneratorConfig, PushId, PushIdError,
    PushIdResult, RandomSource, Suffix, encode_timestamp,
};

use crate::sources::{StdRandom, SystemClock};

/// Push id generator.
///
/// Produces 20-character identifiers: an 8-symbol millisecond timestamp
/// followed by a 12-symbol random suffix. Ids from one generator sort in
/// generation order; within a single millisecond the previous suffix is
/// incremented instead of drawing a new one.
pub struct PushIdGenerator {
    clock: Box<dyn Clock>,
    config: GeneratorConfig,
    state: Mutex<GeneratorState>,
}

struct GeneratorState {
    last_timestamp: Option<u64>,
    last_suffix: Suffix,
    clock_behind: bool,
    random: Box<dyn RandomSource>,
}

impl PushIdGenerator {
    /// System clock, entropy-seeded RNG, default config.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::with_sources(SystemClock, StdRandom::new(), config)
    }

    /// Build a generator around explicit time and randomness sources.
    pub fn with_sources<C, R>(clock: C, random: R, config: GeneratorConfig) -> Self
    where
        C: Clock,
        R: RandomSource,
    {
        Self {
            clock: Box::new(clock),
            config,
            state: Mutex::new(GeneratorState {
                last_timestamp: None,
                last_suffix: Suffix::default(),
                clock_behind: false,
                random: Box::new(random),
            }),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the next push id.
    ///
    /// The clock is read inside the lock so that concurrent callers observe
    /// timestamps in the same order they update the state.
    pub fn generate(&self) -> PushIdResult<PushId> {
        // State is plain data and consistent between statements, so a
        // panic in another caller leaves nothing to repair.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let now = self.clock.now_millis();
        let timestamp = state.observe(now, self.config.clock_regression);
        let duplicate = state.last_timestamp == Some(timestamp);
        state.last_timestamp = Some(timestamp);

        let prefix = encode_timestamp(timestamp)
            .inspect_err(|e| tracing::error!(error = %e, "push id timestamp encoding failed"))?;

        let suffix = if duplicate {
            state.increment_suffix(timestamp, self.config.exhaustion)?
        } else {
            state.fresh_suffix()
        };

        PushId::assemble(&prefix, &suffix)
            .inspect_err(|e| tracing::error!(error = %e, "push id assembly failed"))
    }
}

impl Default for PushIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorState {
    /// Apply the clock regression policy to a raw clock reading.
    fn observe(&mut self, now: u64, policy: ClockRegressionPolicy) -> u64 {
        let last = match self.last_timestamp {
            Some(last) if now < last => last,
            _ => {
                self.clock_behind = false;
                return now;
            }
        };

        if !self.clock_behind {
            self.clock_behind = true;
            tracing::warn!(now, last, ?policy, "clock moved backwards");
        }

        match policy {
            ClockRegressionPolicy::Accept => now,
            ClockRegressionPolicy::Hold => last,
        }
    }

    fn fresh_suffix(&mut self) -> Suffix {
        self.last_suffix = Suffix::draw(self.random.as_mut());
        self.last_suffix
    }

    fn increment_suffix(
        &mut self,
        timestamp: u64,
        policy: ExhaustionPolicy,
    ) -> PushIdResult<Suffix> {
        if let Some(next) = self.last_suffix.increment() {
            tracing::debug!(timestamp, "same-millisecond push id, incrementing suffix");
            self.last_suffix = next;
            return Ok(next);
        }

        match policy {
            ExhaustionPolicy::Fail => {
                tracing::warn!(timestamp, "push id suffix exhausted");
                Err(PushIdError::SuffixExhausted { timestamp })
            }
            ExhaustionPolicy::Reseed => {
                tracing::warn!(timestamp, "push id suffix exhausted, reseeding");
                Ok(self.fresh_suffix())
            }
        }
    }
}
