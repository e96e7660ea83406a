#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{EncodedId, RandSource, RawId, Result, TimeSource};

/// A generator of timestamp + random IDs.
///
/// Composes a [`TimeSource`] for the 13-digit millisecond prefix and a
/// [`RandSource`] for the 10-digit random suffix.
///
/// ## Features
/// - ✅ Thread-safe when its sources are (no interior state of its own)
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered across milliseconds
/// - ❌ Not monotonic within a millisecond: IDs sharing a timestamp are
///   ordered by their random suffix
///
/// Failures of the random source are returned as-is; the generator never
/// substitutes another source.
#[derive(Clone, Debug, Default)]
pub struct UniqueIdGenerator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u32>,
{
    time: T,
    rng: R,
}

impl<T, R> UniqueIdGenerator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u32>,
{
    /// Creates a new [`UniqueIdGenerator`] with the provided time source and
    /// RNG.
    ///
    /// # Example
    /// ```
    /// use uniqid::{OsRandom, SystemClock, UniqueIdGenerator};
    ///
    /// let generator = UniqueIdGenerator::new(SystemClock, OsRandom);
    /// let id = generator.next_id().unwrap();
    /// assert_eq!(id.as_str().len(), 23);
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates a [`RawId`] stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomnessUnavailable`] if the random source
    /// fails.
    pub fn next_id(&self) -> Result<RawId> {
        self.next_id_at(self.time.current_millis())
    }

    /// Generates a [`RawId`] for an explicit millisecond timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomnessUnavailable`] if the random source
    /// fails.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id_at(&self, timestamp: u64) -> Result<RawId> {
        let random = self.rng.rand()?;
        Ok(RawId::from_parts(timestamp, random))
    }

    /// Generates an [`EncodedId`] stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomnessUnavailable`] if the random source
    /// fails.
    pub fn next_encoded_id(&self) -> Result<EncodedId> {
        self.next_id().map(|id| id.encode())
    }

    /// Generates an [`EncodedId`] for an explicit millisecond timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomnessUnavailable`] if the random source
    /// fails.
    pub fn next_encoded_id_at(&self, timestamp: u64) -> Result<EncodedId> {
        self.next_id_at(timestamp).map(|id| id.encode())
    }

    /// Returns a reference to the time source.
    pub const fn time_source(&self) -> &T {
        &self.time
    }

    /// Returns a reference to the random source.
    pub const fn rand_source(&self) -> &R {
        &self.rng
    }
}

/// The generator behind the crate-level functions: system clock plus the OS
/// CSPRNG.
#[cfg(feature = "std")]
pub type DefaultGenerator = UniqueIdGenerator<crate::SystemClock, crate::OsRandom>;
