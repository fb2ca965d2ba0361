use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;

use crate::error::{PushIdError, PushIdResult};

/// What the generator does when a same-millisecond increment would carry
/// past the first suffix symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Return `PushIdError::SuffixExhausted`.
    #[default]
    Fail,
    /// Draw a fresh random suffix. Ordering within that millisecond is lost.
    Reseed,
}

/// What the generator does when the clock reads earlier than the last
/// recorded timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockRegressionPolicy {
    /// Treat the earlier reading as a new millisecond.
    #[default]
    Accept,
    /// Keep the last recorded timestamp until the clock catches up.
    Hold,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub exhaustion: ExhaustionPolicy,
    #[serde(default)]
    pub clock_regression: ClockRegressionPolicy,
}

impl GeneratorConfig {
    /// Load from a TOML file, overridden by `PUSHID_*` environment variables.
    ///
    /// A missing file is not an error; every field has a default.
    pub fn load(path: &str) -> PushIdResult<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(path))
                .merge(Env::prefixed("PUSHID_").split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> PushIdResult<Self> {
        figment
            .extract()
            .map_err(|e| PushIdError::Config(e.to_string()))
    }
}
