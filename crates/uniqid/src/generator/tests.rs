use crate::{
    Error, InputError, RAW_ID_LEN, RandSource, RawId, Result, TimeSource, UniqueIdGenerator,
    decode_base36,
};
use core::cell::Cell;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::scope;

struct MockTime {
    millis: u64,
}

impl TimeSource<u64> for MockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

/// Advances by one millisecond on every read.
struct StepTime {
    next: AtomicU64,
}

impl StepTime {
    fn starting_at(millis: u64) -> Self {
        Self {
            next: AtomicU64::new(millis),
        }
    }
}

impl TimeSource<u64> for StepTime {
    fn current_millis(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

struct MockRand {
    rand: u32,
}

impl RandSource<u32> for MockRand {
    fn rand(&self) -> Result<u32> {
        Ok(self.rand)
    }
}

/// Hands out 0, 1, 2, ...
struct CountingRand {
    next: Cell<u32>,
}

impl RandSource<u32> for CountingRand {
    fn rand(&self) -> Result<u32> {
        let n = self.next.get();
        self.next.set(n + 1);
        Ok(n)
    }
}

struct BrokenRand;

impl RandSource<u32> for BrokenRand {
    fn rand(&self) -> Result<u32> {
        Err(Error::RandomnessUnavailable {
            reason: "no entropy source".into(),
        })
    }
}

const SAMPLE_TIMESTAMP: u64 = 1_731_504_230_254;

#[test]
fn raw_id_has_expected_shape() {
    let generator = UniqueIdGenerator::new(MockTime { millis: 0 }, MockRand { rand: 7 });
    for t in [0, 1, 999, SAMPLE_TIMESTAMP, 9_999_999_999_999, u64::MAX] {
        let id = generator.next_id_at(t).unwrap();
        assert_eq!(id.as_str().len(), RAW_ID_LEN);
        assert!(id.as_str().bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn next_id_uses_time_source() {
    let generator = UniqueIdGenerator::new(
        MockTime {
            millis: SAMPLE_TIMESTAMP,
        },
        MockRand { rand: 352_577_648 },
    );
    let id = generator.next_id().unwrap();
    assert_eq!(id, "17315042302540352577648");
    assert_eq!(id.timestamp(), SAMPLE_TIMESTAMP);
}

#[test]
fn encoded_id_has_stable_length() {
    for rand in [0, 1, 352_577_648, u32::MAX] {
        let generator = UniqueIdGenerator::new(MockTime { millis: 0 }, MockRand { rand });
        let encoded = generator.next_encoded_id_at(SAMPLE_TIMESTAMP).unwrap();
        assert_eq!(encoded.len(), 15, "rand={rand}, encoded={encoded}");
    }
}

#[test]
fn decode_of_encoded_matches_raw() {
    let generator = UniqueIdGenerator::new(MockTime { millis: 0 }, MockRand { rand: 42 });
    for t in [1, 123, SAMPLE_TIMESTAMP, 9_999_999_999_999] {
        let raw = generator.next_id_at(t).unwrap();
        let encoded = generator.next_encoded_id_at(t).unwrap();
        let decoded = decode_base36(encoded.as_str()).unwrap();
        assert_eq!(decoded, raw.as_str().trim_start_matches('0'));
        assert_eq!(RawId::from_decimal(&decoded).unwrap(), raw);
    }
}

#[test]
fn decode_keeps_prefix_of_largest_timestamps() {
    let generator = UniqueIdGenerator::new(MockTime { millis: 0 }, MockRand { rand: u32::MAX });
    for t in [u64::MAX, 9_007_199_254_740_991] {
        let encoded = generator.next_encoded_id_at(t).unwrap();
        let decoded = decode_base36(encoded.as_str()).unwrap();
        assert!(decoded.starts_with(&t.to_string()[..13]), "t={t}");
    }
}

#[test]
fn randomness_failure_is_surfaced() {
    let generator = UniqueIdGenerator::new(MockTime { millis: 1 }, BrokenRand);
    let err = generator.next_id().unwrap_err();
    assert!(err.is_randomness_unavailable());
    assert!(generator.next_encoded_id_at(1).is_err());
}

#[test]
fn ids_within_a_millisecond_differ_by_random_suffix() {
    let generator = UniqueIdGenerator::new(
        MockTime {
            millis: SAMPLE_TIMESTAMP,
        },
        CountingRand { next: Cell::new(0) },
    );
    let a = generator.next_id().unwrap();
    let b = generator.next_id().unwrap();
    assert_eq!(a.timestamp_digits(), b.timestamp_digits());
    assert_ne!(a, b);
    assert!(a < b);
}

#[test]
fn ids_over_distinct_milliseconds_are_unique() {
    const ATTEMPTS: usize = 250_000;
    let generator = UniqueIdGenerator::new(
        StepTime::starting_at(SAMPLE_TIMESTAMP),
        crate::ThreadRandom,
    );
    let mut seen = HashSet::with_capacity(ATTEMPTS);
    for _ in 0..ATTEMPTS {
        assert!(seen.insert(generator.next_encoded_id().unwrap()));
    }
    assert_eq!(seen.len(), ATTEMPTS);
}

#[test]
fn random_suffixes_rarely_collide_within_a_millisecond() {
    // 2_000 draws against 2^32 values: collision odds are about 1 in 2_000.
    const ATTEMPTS: usize = 2_000;
    let generator = UniqueIdGenerator::new(
        MockTime {
            millis: SAMPLE_TIMESTAMP,
        },
        crate::OsRandom,
    );
    let ids: HashSet<RawId> = (0..ATTEMPTS)
        .map(|_| generator.next_id().unwrap())
        .collect();
    assert!(ids.len() >= ATTEMPTS - 1);
}

#[test]
fn shared_generator_across_threads() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 10_000;
    let generator =
        UniqueIdGenerator::new(StepTime::starting_at(SAMPLE_TIMESTAMP), crate::OsRandom);

    let ids: Vec<RawId> = scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| generator.next_id().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
}

#[test]
fn invalid_encoded_input_is_rejected() {
    assert_eq!(
        decode_base36("invalid_characters!").unwrap_err(),
        Error::InvalidInput(InputError::InvalidChar {
            byte: b'_',
            index: 7
        })
    );
}
