use crate::{Error, RandSource, Result};
use alloc::string::ToString;
use rand::{TryRngCore, rngs::OsRng};

/// A [`RandSource`] that reads directly from the operating system's CSPRNG.
///
/// Every call is a request to the OS (`getrandom`, `BCryptGenRandom`, ...).
/// When the OS refuses, the failure is reported as
/// [`Error::RandomnessUnavailable`]. This is the source used by the default
/// generator.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl RandSource<u32> for OsRandom {
    fn rand(&self) -> Result<u32> {
        OsRng
            .try_next_u32()
            .map_err(|e| Error::RandomnessUnavailable {
                reason: e.to_string(),
            })
    }
}

impl RandSource<u64> for OsRandom {
    fn rand(&self) -> Result<u64> {
        OsRng
            .try_next_u64()
            .map_err(|e| Error::RandomnessUnavailable {
                reason: e.to_string(),
            })
    }
}
