//! Chronologically sortable topic ids.
//!
//! Ids are 20 characters: 8 characters encoding the creation time in
//! milliseconds followed by 12 random characters, all drawn from a 64-symbol
//! alphabet whose ASCII order matches its numeric order. Sorting ids as
//! strings therefore sorts topics by creation time, which is the order the
//! document tree returns children in.

use rand::Rng;
use std::sync::Mutex;

use crate::types::{current_timestamp_millis, TopicId};

/// Alphabet in ascending ASCII order.
const PUSH_CHARS: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const TIMESTAMP_LEN: usize = 8;
const RANDOM_LEN: usize = 12;

/// Total length of a generated id.
pub const PUSH_ID_LEN: usize = TIMESTAMP_LEN + RANDOM_LEN;

#[derive(Default)]
struct GeneratorState {
    last_millis: i64,
    last_random: [u8; RANDOM_LEN],
}

/// Generates unique, strictly increasing topic ids.
///
/// Ids generated within the same millisecond (or after the clock moved
/// backwards) reuse the previous timestamp and increment the random suffix,
/// so every id sorts after the one before it.
#[derive(Default)]
pub struct PushIdGenerator {
    state: Mutex<GeneratorState>,
}

impl PushIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates an id stamped with the current time.
    pub fn generate(&self) -> TopicId {
        self.generate_at(current_timestamp_millis())
    }

    /// Generates an id stamped with `now_millis`.
    pub fn generate_at(&self, now_millis: i64) -> TopicId {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if now_millis <= state.last_millis {
            increment(&mut state.last_random);
        } else {
            state.last_millis = now_millis;
            let mut rng = rand::thread_rng();
            for slot in state.last_random.iter_mut() {
                *slot = rng.gen_range(0..64);
            }
        }

        let mut id = String::with_capacity(PUSH_ID_LEN);
        id.push_str(&encode_timestamp(state.last_millis));
        id.extend(
            state
                .last_random
                .iter()
                .map(|&digit| PUSH_CHARS[digit as usize] as char),
        );
        TopicId::new(id)
    }
}

fn encode_timestamp(millis: i64) -> String {
    let mut remaining = millis.max(0) as u64;
    let mut chars = [0u8; TIMESTAMP_LEN];
    for slot in chars.iter_mut().rev() {
        *slot = PUSH_CHARS[(remaining % 64) as usize];
        remaining /= 64;
    }
    chars.iter().map(|&c| c as char).collect()
}

/// Adds one to a base-64 digit string, carrying leftwards.
fn increment(digits: &mut [u8; RANDOM_LEN]) {
    for digit in digits.iter_mut().rev() {
        if *digit == 63 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        let id = PushIdGenerator::new().generate();
        assert_eq!(id.as_str().len(), PUSH_ID_LEN);
        assert!(id.as_str().bytes().all(|b| PUSH_CHARS.contains(&b)));
    }

    #[test]
    fn test_same_millisecond_ids_are_strictly_increasing() {
        let generator = PushIdGenerator::new();
        let ids: Vec<TopicId> = (0..500).map(|_| generator.generate_at(42)).collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_later_timestamp_sorts_later() {
        let generator = PushIdGenerator::new();
        let early = generator.generate_at(1_000);
        let late = generator.generate_at(64_000_000);
        assert!(early < late);
    }

    #[test]
    fn test_clock_going_backwards_keeps_order() {
        let generator = PushIdGenerator::new();
        let first = generator.generate_at(10_000);
        let second = generator.generate_at(5_000);
        assert!(first < second);
    }

    #[test]
    fn test_increment_carries() {
        let mut digits = [0u8; RANDOM_LEN];
        digits[RANDOM_LEN - 1] = 63;
        increment(&mut digits);
        assert_eq!(digits[RANDOM_LEN - 1], 0);
        assert_eq!(digits[RANDOM_LEN - 2], 1);
    }

    #[test]
    fn test_timestamp_encoding_is_order_preserving() {
        assert!(encode_timestamp(63) < encode_timestamp(64));
        assert_eq!(encode_timestamp(0), "--------");
    }
}
