use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::alphabet::{
    MAX_SYMBOL, PUSH_ID_LEN, SUFFIX_LEN, TIMESTAMP_LEN, decode_timestamp, index_of, symbol,
};
use crate::error::{PushIdError, PushIdResult};
use crate::traits::RandomSource;

/// The 12-symbol random tail of a push id, index 0 most significant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Suffix([u8; SUFFIX_LEN]);

impl Suffix {
    /// Build a suffix from raw symbol indices, each reduced modulo 64.
    pub fn new(symbols: [u8; SUFFIX_LEN]) -> Self {
        Self(symbols.map(|s| s % (MAX_SYMBOL + 1)))
    }

    /// Draw 12 fresh symbols from `source`.
    pub fn draw(source: &mut dyn RandomSource) -> Self {
        let mut symbols = [0u8; SUFFIX_LEN];
        for s in symbols.iter_mut() {
            *s = source.next_symbol();
        }
        Self::new(symbols)
    }

    pub fn symbols(&self) -> &[u8; SUFFIX_LEN] {
        &self.0
    }

    /// True when every symbol is at its maximum and no increment is possible.
    pub fn is_exhausted(&self) -> bool {
        self.0.iter().all(|&s| s == MAX_SYMBOL)
    }

    /// Add one to the suffix as a base-64 number, carrying leftward.
    ///
    /// Returns `None` instead of wrapping when the carry would run past
    /// index 0.
    pub fn increment(&self) -> Option<Self> {
        let mut next = self.0;
        for i in (0..SUFFIX_LEN).rev() {
            if next[i] < MAX_SYMBOL {
                next[i] += 1;
                return Some(Self(next));
            }
            next[i] = 0;
        }
        None
    }
}

/// A validated 20-character push id.
///
/// Ordering is plain string ordering, which matches generation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PushId(String);

impl PushId {
    /// Concatenate an encoded timestamp prefix and a suffix.
    ///
    /// Fails if the result is not 20 bytes or the prefix holds a character
    /// outside the alphabet.
    pub fn assemble(timestamp: &[u8; TIMESTAMP_LEN], suffix: &Suffix) -> PushIdResult<Self> {
        let mut id = String::with_capacity(PUSH_ID_LEN);
        id.extend(timestamp.iter().map(|&b| char::from(b)));
        id.extend(suffix.symbols().iter().map(|&s| symbol(s)));
        if id.len() != PUSH_ID_LEN {
            return Err(PushIdError::LengthInvariant { len: id.len() });
        }
        if let Some((position, ch)) = id
            .chars()
            .take(TIMESTAMP_LEN)
            .enumerate()
            .find(|(_, c)| index_of(*c).is_none())
        {
            return Err(PushIdError::InvalidSymbol { ch, position });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Milliseconds since the Unix epoch encoded in the first 8 characters.
    pub fn timestamp_millis(&self) -> u64 {
        decode_timestamp(&self.0[..TIMESTAMP_LEN])
            .expect("push id prefix is validated on construction")
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(i64::try_from(self.timestamp_millis()).ok()?)
    }

    pub fn suffix(&self) -> Suffix {
        let mut symbols = [0u8; SUFFIX_LEN];
        for (slot, ch) in symbols.iter_mut().zip(self.0[TIMESTAMP_LEN..].chars()) {
            *slot = index_of(ch).unwrap_or_default();
        }
        Suffix(symbols)
    }
}

impl FromStr for PushId {
    type Err = PushIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != PUSH_ID_LEN {
            return Err(PushIdError::InvalidLength(s.len()));
        }
        if let Some((position, ch)) = s.chars().enumerate().find(|(_, c)| index_of(*c).is_none()) {
            return Err(PushIdError::InvalidSymbol { ch, position });
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for PushId {
    type Error = PushIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PushId> for String {
    fn from(id: PushId) -> Self {
        id.0
    }
}

impl AsRef<str> for PushId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PushId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::encode_timestamp;

    fn suffix_with_tail(tail: u8) -> Suffix {
        let mut symbols = [MAX_SYMBOL; SUFFIX_LEN];
        symbols[SUFFIX_LEN - 1] = tail;
        Suffix::new(symbols)
    }

    #[test]
    fn increment_bumps_last_symbol() {
        let next = suffix_with_tail(5).increment().unwrap();
        assert_eq!(next, suffix_with_tail(6));
    }

    #[test]
    fn increment_from_zero() {
        let next = Suffix::default().increment().unwrap();
        let mut expected = [0u8; SUFFIX_LEN];
        expected[SUFFIX_LEN - 1] = 1;
        assert_eq!(next.symbols(), &expected);
    }

    #[test]
    fn increment_carries_across_max_symbols() {
        let mut symbols = [0u8; SUFFIX_LEN];
        symbols[8] = 7;
        symbols[9] = MAX_SYMBOL;
        symbols[10] = MAX_SYMBOL;
        symbols[11] = MAX_SYMBOL;
        let next = Suffix::new(symbols).increment().unwrap();

        let mut expected = [0u8; SUFFIX_LEN];
        expected[8] = 8;
        assert_eq!(next.symbols(), &expected);
    }

    #[test]
    fn increment_of_exhausted_suffix_is_none() {
        let full = Suffix::new([MAX_SYMBOL; SUFFIX_LEN]);
        assert!(full.is_exhausted());
        assert_eq!(full.increment(), None);
    }

    #[test]
    fn increment_is_strictly_greater() {
        let s = Suffix::new([3, 63, 0, 12, 63, 63, 1, 2, 3, 4, 63, 63]);
        let next = s.increment().unwrap();
        assert!(next > s);
    }

    #[test]
    fn new_reduces_out_of_range_symbols() {
        let s = Suffix::new([64; SUFFIX_LEN]);
        assert_eq!(s, Suffix::default());
    }

    #[test]
    fn all_zero_id_is_twenty_dashes() {
        let ts = encode_timestamp(0).unwrap();
        let id = PushId::assemble(&ts, &Suffix::default()).unwrap();
        assert_eq!(id.as_str(), "-".repeat(20));
    }

    #[test]
    fn incremented_zero_suffix_ends_in_zero_char() {
        let ts = encode_timestamp(0).unwrap();
        let suffix = Suffix::default().increment().unwrap();
        let id = PushId::assemble(&ts, &suffix).unwrap();
        assert_eq!(id.as_str(), format!("{}0", "-".repeat(19)));
    }

    #[test]
    fn assemble_rejects_prefix_outside_alphabet() {
        let err = PushId::assemble(b"---+----", &Suffix::default()).unwrap_err();
        assert_eq!(err, PushIdError::InvalidSymbol { ch: '+', position: 3 });

        let err = PushId::assemble(b"++++++++", &Suffix::default()).unwrap_err();
        assert_eq!(err, PushIdError::InvalidSymbol { ch: '+', position: 0 });
    }

    #[test]
    fn assemble_rejects_multibyte_prefix_by_length() {
        // Each 0xFF byte becomes 'ÿ', two bytes in UTF-8.
        let err = PushId::assemble(&[0xFF; TIMESTAMP_LEN], &Suffix::default()).unwrap_err();
        assert_eq!(err, PushIdError::LengthInvariant { len: 28 });
    }

    #[test]
    fn assembled_ids_always_parse() {
        let ts = encode_timestamp(1_234_567).unwrap();
        let id = PushId::assemble(&ts, &Suffix::new([63; SUFFIX_LEN])).unwrap();
        assert_eq!(id.as_str().parse::<PushId>().unwrap(), id);
        assert_eq!(id.timestamp_millis(), 1_234_567);
    }

    #[test]
    fn accessors_decode_parts() {
        let ts = encode_timestamp(1_700_000_000_123).unwrap();
        let suffix = Suffix::new([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        let id = PushId::assemble(&ts, &suffix).unwrap();

        assert_eq!(id.timestamp_millis(), 1_700_000_000_123);
        assert_eq!(id.suffix(), suffix);
        assert_eq!(
            id.created_at().unwrap().timestamp_millis(),
            1_700_000_000_123
        );
    }

    #[test]
    fn parse_accepts_valid_id() {
        let id: PushId = "-NxYz0123456789abcde".parse().unwrap();
        assert_eq!(id.to_string(), "-NxYz0123456789abcde");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = "-NxYz".parse::<PushId>().unwrap_err();
        assert_eq!(err, PushIdError::InvalidLength(5));
    }

    #[test]
    fn parse_rejects_foreign_symbol() {
        let err = "-NxYz01234+6789abcde".parse::<PushId>().unwrap_err();
        assert_eq!(err, PushIdError::InvalidSymbol { ch: '+', position: 10 });
    }

    #[test]
    fn serde_uses_plain_string() {
        let id: PushId = "-NxYz0123456789abcde".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"-NxYz0123456789abcde\"");

        let back: PushId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<PushId>("\"not a push id\"").is_err());
    }
}
