pub mod generator;
pub mod sources;

use std::sync::OnceLock;

pub use generator::PushIdGenerator;
pub use pushid_core::{
    ClockRegressionPolicy, ExhaustionPolicy, GeneratorConfig, PushId, PushIdError, PushIdResult,
};
pub use sources::{StdRandom, SystemClock};

/// Generate a push id from the process-wide default generator.
///
/// The generator is created on first use with the system clock, an
/// entropy-seeded RNG and the default configuration.
pub fn generate() -> PushIdResult<PushId> {
    static DEFAULT: OnceLock<PushIdGenerator> = OnceLock::new();
    DEFAULT.get_or_init(PushIdGenerator::new).generate()
}
