pub mod assertions;
pub mod clocks;
pub mod random;

use std::sync::Once;

pub use assertions::{assert_push_id_shape, assert_strictly_increasing};
pub use clocks::{ManualClock, SequenceClock};
pub use random::{ConstantRandom, ScriptedRandom};

/// Install a test-writer tracing subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `debug` for the push id crates.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pushid=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
