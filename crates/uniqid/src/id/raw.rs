use crate::{
    EncodedId, InputError, Result,
    base36::{convert_radix, parse_digits, render},
};
use alloc::string::String;
use core::{fmt, str::FromStr};

/// Number of leading digits holding the millisecond timestamp.
pub const TIMESTAMP_DIGITS: usize = 13;
/// Number of trailing digits holding the random suffix.
pub const RANDOM_DIGITS: usize = 10;
/// Total width of a [`RawId`].
pub const RAW_ID_LEN: usize = TIMESTAMP_DIGITS + RANDOM_DIGITS;

/// A 23-digit decimal identifier: a 13-digit millisecond timestamp followed by
/// a 10-digit random suffix.
///
/// The width is fixed, so byte-wise ordering (and the derived [`Ord`]) is the
/// same as numeric ordering: IDs sort by timestamp first.
///
/// # Example
///
/// ```
/// use uniqid::RawId;
///
/// let id = RawId::from_parts(1_731_504_230_254, 352_577_648);
/// assert_eq!(id.as_str(), "17315042302540352577648");
/// assert_eq!(id.timestamp_digits(), "1731504230254");
/// assert_eq!(id.random_digits(), "0352577648");
/// assert_eq!(id.encode().as_str(), "2ti7knstydhbwxc");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawId([u8; RAW_ID_LEN]);

impl RawId {
    /// Formats a timestamp and a random value into a [`RawId`].
    ///
    /// - A timestamp with fewer than 13 digits is padded on the **right** with
    ///   `'0'`. This pads the text, it does not scale the number.
    /// - A timestamp with more than 13 digits keeps its 13 most significant
    ///   digits, so the leading digits always survive as a prefix.
    /// - The random value is padded on the left to 10 digits. A `u32` never
    ///   needs more than 10.
    pub fn from_parts(timestamp: u64, random: u32) -> Self {
        let mut buf = [b'0'; RAW_ID_LEN];

        // u64::MAX has 20 digits.
        let mut ts = [0_u8; 20];
        let mut n = timestamp;
        let mut start = ts.len();
        loop {
            start -= 1;
            ts[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let ts = &ts[start..];
        if ts.len() > TIMESTAMP_DIGITS {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                timestamp,
                "timestamp has more than {TIMESTAMP_DIGITS} digits, keeping the leading ones"
            );
        }
        let keep = ts.len().min(TIMESTAMP_DIGITS);
        buf[..keep].copy_from_slice(&ts[..keep]);

        let mut r = random;
        for slot in buf[TIMESTAMP_DIGITS..].iter_mut().rev() {
            *slot = b'0' + (r % 10) as u8;
            r /= 10;
        }
        debug_assert_eq!(r, 0);

        Self(buf)
    }

    /// Rebuilds a [`RawId`] from the numeric value of one, left-padding with
    /// zeros to 23 digits.
    ///
    /// Use this on the output of [`crate::decode_base36`]: base-36 encoding
    /// keeps the value but not the leading zeros.
    ///
    /// # Errors
    ///
    /// - [`InputError::Empty`] / [`InputError::InvalidChar`] if `decimal` is
    ///   not a decimal digit string.
    /// - [`InputError::Overflow`] if the value needs more than 23 digits.
    pub fn from_decimal(decimal: &str) -> Result<Self> {
        let digits = parse_digits(decimal, 10)?;
        let significant = digits
            .iter()
            .position(|&d| d != 0)
            .map_or(&[][..], |i| &digits[i..]);
        if significant.len() > RAW_ID_LEN {
            return Err(InputError::Overflow {
                len: significant.len(),
                max: RAW_ID_LEN,
            }
            .into());
        }

        let mut buf = [b'0'; RAW_ID_LEN];
        let offset = RAW_ID_LEN - significant.len();
        for (slot, &d) in buf[offset..].iter_mut().zip(significant) {
            *slot = b'0' + d;
        }
        Ok(Self(buf))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: every byte is an ASCII digit, enforced by all constructors.
        unsafe { core::str::from_utf8_unchecked(&self.0) }
    }

    /// Returns the raw ASCII bytes.
    pub const fn as_bytes(&self) -> &[u8; RAW_ID_LEN] {
        &self.0
    }

    /// The 13-digit timestamp field, as stored (after any padding or
    /// truncation).
    pub fn timestamp_digits(&self) -> &str {
        &self.as_str()[..TIMESTAMP_DIGITS]
    }

    /// The 10-digit random field.
    pub fn random_digits(&self) -> &str {
        &self.as_str()[TIMESTAMP_DIGITS..]
    }

    /// The numeric value of the timestamp field.
    ///
    /// This equals the original timestamp only when it had exactly 13 digits.
    pub fn timestamp(&self) -> u64 {
        fold_decimal(&self.0[..TIMESTAMP_DIGITS])
    }

    /// The numeric value of the random field.
    pub fn random(&self) -> u64 {
        fold_decimal(&self.0[TIMESTAMP_DIGITS..])
    }

    /// Encodes this ID in base 36.
    pub fn encode(&self) -> EncodedId {
        let digits = self.0.map(|b| b - b'0');
        EncodedId::from_canonical(render(&convert_radix(&digits, 10, 36)))
    }
}

fn fold_decimal(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0, |acc, &b| acc * 10 + u64::from(b - b'0'))
}

impl FromStr for RawId {
    type Err = crate::Error;

    /// Parses exactly 23 ASCII digits.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() != RAW_ID_LEN {
            return Err(InputError::InvalidLen {
                len: s.len(),
                expected: RAW_ID_LEN,
            }
            .into());
        }
        let mut buf = [0_u8; RAW_ID_LEN];
        for (index, (slot, byte)) in buf.iter_mut().zip(s.bytes()).enumerate() {
            if !byte.is_ascii_digit() {
                return Err(InputError::InvalidChar { byte, index }.into());
            }
            *slot = byte;
        }
        Ok(Self(buf))
    }
}

impl TryFrom<&str> for RawId {
    type Error = crate::Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl AsRef<str> for RawId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        Self::from(id.as_str())
    }
}

impl PartialEq<str> for RawId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for RawId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawId").field(&self.as_str()).finish()
    }
}
