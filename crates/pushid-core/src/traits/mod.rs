pub mod clock;
pub mod random_source;

pub use clock::Clock;
pub use random_source::RandomSource;
