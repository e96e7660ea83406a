//! Crate-level shortcuts over a [`DefaultGenerator`].
//!
//! The default generator is stateless ([`SystemClock`] and [`OsRandom`] are
//! zero-sized), so these functions build one per call and are safe to use from
//! any number of threads.

use crate::{
    DefaultGenerator, EncodedId, OsRandom, RawId, Result, SystemClock, decode_base36,
    encode_base36,
};

const GENERATOR: DefaultGenerator = DefaultGenerator::new(SystemClock, OsRandom);

/// Returns a new 23-digit [`RawId`] for the current time.
///
/// # Errors
///
/// Returns [`crate::Error::RandomnessUnavailable`] if the OS CSPRNG fails.
///
/// # Example
/// ```
/// let id = uniqid::new_id().unwrap();
/// assert_eq!(id.as_str().len(), 23);
/// ```
pub fn new_id() -> Result<RawId> {
    GENERATOR.next_id()
}

/// Returns a new [`RawId`] for an explicit millisecond timestamp.
///
/// # Errors
///
/// Returns [`crate::Error::RandomnessUnavailable`] if the OS CSPRNG fails.
///
/// # Example
/// ```
/// let id = uniqid::new_id_at(1_731_504_230_254).unwrap();
/// assert!(id.as_str().starts_with("1731504230254"));
/// ```
pub fn new_id_at(timestamp: u64) -> Result<RawId> {
    GENERATOR.next_id_at(timestamp)
}

/// Returns a new base-36 [`EncodedId`] for the current time.
///
/// # Errors
///
/// Returns [`crate::Error::RandomnessUnavailable`] if the OS CSPRNG fails.
pub fn encoded_id() -> Result<EncodedId> {
    GENERATOR.next_encoded_id()
}

/// Returns a new base-36 [`EncodedId`] for an explicit millisecond timestamp.
///
/// # Errors
///
/// Returns [`crate::Error::RandomnessUnavailable`] if the OS CSPRNG fails.
///
/// # Example
/// ```
/// let id = uniqid::encoded_id_at(1_731_504_230_254).unwrap();
/// assert_eq!(id.len(), 15);
/// ```
pub fn encoded_id_at(timestamp: u64) -> Result<EncodedId> {
    GENERATOR.next_encoded_id_at(timestamp)
}

/// Encodes any decimal digit string (typically a [`RawId`]) in base 36.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] for empty input or non-digits.
pub fn encode_id(decimal: &str) -> Result<String> {
    encode_base36(decimal)
}

/// Decodes a base-36 string back to its decimal value.
///
/// Leading zeros of the original are not restored; see
/// [`RawId::from_decimal`].
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] for empty input or characters
/// outside `0-9a-zA-Z`.
///
/// # Example
/// ```
/// assert_eq!(
///     uniqid::decode_id("2ti7knstydhbwxc").unwrap(),
///     "17315042302540352577648"
/// );
/// assert!(uniqid::decode_id("invalid_characters!").is_err());
/// ```
pub fn decode_id(encoded: &str) -> Result<String> {
    decode_base36(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RAW_ID_LEN, TimeSource};
    use std::collections::HashSet;

    #[test]
    fn new_id_has_expected_length() {
        let id = new_id().unwrap();
        assert_eq!(id.as_str().len(), RAW_ID_LEN);
        assert!(id.as_str().bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn new_id_is_stamped_with_now() {
        let before = SystemClock.current_millis();
        let id = new_id().unwrap();
        let after = SystemClock.current_millis();
        assert!((before..=after).contains(&id.timestamp()));
    }

    #[test]
    fn new_ids_are_unique() {
        // Kept small: ids sharing a millisecond only differ by 32 random bits.
        let ids: HashSet<RawId> = (0..1_000).map(|_| new_id().unwrap()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn encoded_id_has_expected_length() {
        assert_eq!(encoded_id_at(1_731_504_230_254).unwrap().len(), 15);
        assert_eq!(encoded_id().unwrap().len(), 15);
    }

    #[test]
    fn decodes_known_value() {
        assert_eq!(
            decode_id("2ti7knstydhbwxc").unwrap(),
            "17315042302540352577648"
        );
    }

    #[test]
    fn encode_then_decode_matches_raw_id() {
        let raw = new_id_at(1_731_504_230_254).unwrap();
        let encoded = encode_id(raw.as_str()).unwrap();
        assert_eq!(decode_id(&encoded).unwrap(), raw.as_str());
    }

    #[test]
    fn decode_keeps_prefix_of_max_timestamp() {
        let max_safe_integer: u64 = 9_007_199_254_740_991;
        let decoded = decode_id(encoded_id_at(max_safe_integer).unwrap().as_str()).unwrap();
        assert!(decoded.starts_with(&max_safe_integer.to_string()[..13]));
    }

    #[test]
    fn decode_rejects_invalid_input() {
        assert!(decode_id("invalid_characters!").unwrap_err().is_invalid_input());
        assert!(decode_id("").unwrap_err().is_invalid_input());
    }
}
