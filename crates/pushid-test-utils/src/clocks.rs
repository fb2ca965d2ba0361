use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use pushid_core::Clock;

/// Clock that only moves when told to. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(now: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(now)),
        }
    }

    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Clock that replays a fixed list of readings, repeating the last one.
#[derive(Debug)]
pub struct SequenceClock {
    readings: Vec<u64>,
    next: AtomicUsize,
}

impl SequenceClock {
    /// Panics if `readings` is empty.
    pub fn new(readings: Vec<u64>) -> Self {
        assert!(!readings.is_empty(), "SequenceClock needs at least one reading");
        Self {
            readings,
            next: AtomicUsize::new(0),
        }
    }
}

impl Clock for SequenceClock {
    fn now_millis(&self) -> u64 {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.readings[i.min(self.readings.len() - 1)]
    }
}
