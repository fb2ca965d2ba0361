pub mod alphabet;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use alphabet::{PUSH_CHARS, decode_timestamp, encode_timestamp, index_of, symbol};
pub use config::{ClockRegressionPolicy, ExhaustionPolicy, GeneratorConfig};
pub use error::{PushIdError, PushIdResult};
pub use traits::{Clock, RandomSource};
pub use types::{PushId, Suffix};
