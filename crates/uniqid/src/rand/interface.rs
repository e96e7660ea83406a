use crate::Result;

/// A trait for sources of cryptographically secure random values.
///
/// This abstraction lets the host plug in whatever secure source its platform
/// offers, or a fixed value in tests. A source that cannot reach secure
/// randomness must return [`crate::Error::RandomnessUnavailable`] rather than
/// fall back to something weaker.
///
/// # Example
/// ```
/// use uniqid::{RandSource, Result};
///
/// struct FixedRand;
/// impl RandSource<u32> for FixedRand {
///     fn rand(&self) -> Result<u32> {
///         Ok(1234)
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand().unwrap(), 1234);
/// ```
pub trait RandSource<T> {
    /// Returns a random value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomnessUnavailable`] if no secure source is
    /// reachable.
    fn rand(&self) -> Result<T>;
}

impl<T, R: RandSource<T> + ?Sized> RandSource<T> for &R {
    fn rand(&self) -> Result<T> {
        (**self).rand()
    }
}
