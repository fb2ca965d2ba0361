use crate::error::{PushIdError, PushIdResult};

/// Push id alphabet: base64 web-safe characters, ordered by ASCII value so
/// that symbol index order and byte-wise string order agree.
pub const PUSH_CHARS: &[u8; 64] =
    b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

pub const ALPHABET_LEN: u64 = 64;
pub const MAX_SYMBOL: u8 = 63;

pub const TIMESTAMP_LEN: usize = 8;
pub const SUFFIX_LEN: usize = 12;
pub const PUSH_ID_LEN: usize = TIMESTAMP_LEN + SUFFIX_LEN;

/// Largest timestamp (milliseconds) that fits in the 48-bit prefix.
pub const MAX_TIMESTAMP: u64 = (1 << 48) - 1;

/// Character for a symbol index. Indices are reduced modulo 64.
pub fn symbol(index: u8) -> char {
    PUSH_CHARS[usize::from(index) % PUSH_CHARS.len()] as char
}

/// Symbol index of a character, or `None` if it is not in the alphabet.
pub fn index_of(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    PUSH_CHARS
        .binary_search(&(ch as u8))
        .ok()
        .map(|i| i as u8)
}

/// Encode a millisecond timestamp as 8 alphabet characters, most significant first.
pub fn encode_timestamp(timestamp: u64) -> PushIdResult<[u8; TIMESTAMP_LEN]> {
    let mut buf = [0u8; TIMESTAMP_LEN];
    let mut rest = timestamp;
    for i in (0..TIMESTAMP_LEN).rev() {
        buf[i] = PUSH_CHARS[(rest % ALPHABET_LEN) as usize];
        rest /= ALPHABET_LEN;
    }
    if rest != 0 {
        return Err(PushIdError::TimestampOverflow { timestamp });
    }
    Ok(buf)
}

/// Decode an 8-character timestamp prefix back to milliseconds.
pub fn decode_timestamp(prefix: &str) -> PushIdResult<u64> {
    if prefix.len() != TIMESTAMP_LEN {
        return Err(PushIdError::InvalidLength(prefix.len()));
    }
    prefix
        .chars()
        .enumerate()
        .try_fold(0u64, |acc, (position, ch)| {
            let digit = index_of(ch).ok_or(PushIdError::InvalidSymbol { ch, position })?;
            Ok::<_, PushIdError>(acc * ALPHABET_LEN + u64::from(digit))
        })
}
