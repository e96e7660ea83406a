use crate::TimeSource;
#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
use std::time::{SystemTime, UNIX_EPOCH};
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use web_time::{SystemTime, UNIX_EPOCH};

/// A [`TimeSource`] backed by the system wall clock.
///
/// Reads `SystemTime::now()` on every call (`web_time` in the browser). IDs
/// only need millisecond resolution and no monotonicity, so there is no
/// background ticker. A clock set before 1970 reads as `0`.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource<u64> for SystemClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_thirteen_digit_timestamp() {
        // Holds from 2001-09-09 until the year 2286.
        let now = SystemClock.current_millis();
        assert_eq!(now.to_string().len(), 13);
    }

    #[test]
    fn does_not_go_far_backwards() {
        let a = SystemClock.current_millis();
        let b = SystemClock.current_millis();
        assert!(b + 1_000 >= a);
    }
}
