use pushid_core::alphabet::PUSH_ID_LEN;
use pushid_core::{PushId, index_of};

/// Assert the id is 20 characters, all from the push id alphabet.
pub fn assert_push_id_shape(id: &str) {
    assert_eq!(
        id.len(),
        PUSH_ID_LEN,
        "Expected {PUSH_ID_LEN} characters, got {}: {id}",
        id.len()
    );
    for (position, ch) in id.chars().enumerate() {
        assert!(
            index_of(ch).is_some(),
            "Invalid character {ch:?} at position {position} in {id}"
        );
    }
}

/// Assert every id sorts strictly after the one before it.
pub fn assert_strictly_increasing(ids: &[PushId]) {
    for pair in ids.windows(2) {
        assert!(
            pair[0] < pair[1],
            "Push id not increasing: {} >= {}",
            pair[0],
            pair[1]
        );
    }
}
