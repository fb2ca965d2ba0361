use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushIdError {
    #[error("timestamp {timestamp} does not fit in 8 push id symbols")]
    TimestampOverflow { timestamp: u64 },

    #[error("push id length should be 20, got {len}")]
    LengthInvariant { len: usize },

    #[error("random suffix exhausted within millisecond {timestamp}")]
    SuffixExhausted { timestamp: u64 },

    #[error("invalid push id length: {0}")]
    InvalidLength(usize),

    #[error("invalid push id symbol {ch:?} at position {position}")]
    InvalidSymbol { ch: char, position: usize },

    #[error("config error: {0}")]
    Config(String),
}

pub type PushIdResult<T> = Result<T, PushIdError>;
