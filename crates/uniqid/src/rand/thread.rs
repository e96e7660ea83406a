use crate::{RandSource, Result};
use rand::{Rng, rng};

/// A `RandSource` backed by `rand::rng()`, the thread-local ChaCha CSPRNG.
///
/// Faster than [`crate::OsRandom`] since it only goes to the OS to reseed.
/// Zero-sized: the RNG lives in thread-local storage and is looked up on
/// every call, so one value can be shared by any number of threads.
///
/// ⚠️ NOTE: `rand` panics if the OS cannot provide the initial seed. Use
/// [`crate::OsRandom`] when that failure must surface as an error.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u32> for ThreadRandom {
    fn rand(&self) -> Result<u32> {
        Ok(rng().random())
    }
}

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> Result<u64> {
        Ok(rng().random())
    }
}
