use alloc::string::String;
use core::fmt;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `uniqid` can produce.
///
/// Neither kind is recovered from internally: the codec never skips a bad
/// character and the generator never swaps in a weaker random source. The
/// caller decides whether to retry or abort.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The input text was rejected.
    ///
    /// Produced by the base-36 codec for empty input or characters outside its
    /// alphabet, and by [`crate::RawId`] / [`crate::EncodedId`] parsing.
    InvalidInput(InputError),

    /// No secure randomness source could be reached.
    ///
    /// Carries the platform's description of the failure.
    RandomnessUnavailable {
        /// Why the source failed, as reported by the platform.
        reason: String,
    },
}

impl Error {
    /// Returns `true` if this is an [`Error::InvalidInput`].
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Returns `true` if this is an [`Error::RandomnessUnavailable`].
    pub const fn is_randomness_unavailable(&self) -> bool {
        matches!(self, Self::RandomnessUnavailable { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "invalid input: {err}"),
            Self::RandomnessUnavailable { reason } => {
                write!(f, "secure randomness unavailable: {reason}")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Describes why a piece of input text was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum InputError {
    /// The input was empty.
    Empty,
    /// `byte` at `index` is outside the accepted alphabet.
    InvalidChar { byte: u8, index: usize },
    /// The input is `len` characters long but exactly `expected` are required.
    InvalidLen { len: usize, expected: usize },
    /// The value needs `len` decimal digits but at most `max` fit.
    Overflow { len: usize, max: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("input is empty"),
            Self::InvalidChar { byte, index } if byte.is_ascii_graphic() => {
                write!(f, "invalid character '{}' at index {index}", *byte as char)
            }
            Self::InvalidChar { byte, index } => {
                write!(f, "invalid byte {byte:#04x} at index {index}")
            }
            Self::InvalidLen { len, expected } => {
                write!(f, "invalid length: {len} (expected {expected})")
            }
            Self::Overflow { len, max } => {
                write!(f, "value needs {len} digits, at most {max} fit")
            }
        }
    }
}

impl core::error::Error for InputError {}

impl From<InputError> for Error {
    fn from(err: InputError) -> Self {
        Self::InvalidInput(err)
    }
}
