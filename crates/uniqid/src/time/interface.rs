/// A trait for time sources that return a wall-clock timestamp.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests.
///
/// The timestamp type `T` is generic (typically `u64`), and the unit is
/// **milliseconds since the Unix epoch**.
///
/// # Example
///
/// ```
/// use uniqid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> T;
}

impl<T, S: TimeSource<T> + ?Sized> TimeSource<T> for &S {
    fn current_millis(&self) -> T {
        (**self).current_millis()
    }
}
