use crate::{
    RawId, Result,
    base36::{convert_radix, digit_value, parse_digits, render},
};
use alloc::{string::String, vec::Vec};
use core::{cmp::Ordering, fmt, str::FromStr};

/// Upper bound on the length of an [`EncodedId`] produced from a [`RawId`]:
/// `36^15 > 10^23`.
pub const ENCODED_ID_MAX_LEN: usize = 15;

/// The base-36 form of a [`RawId`] (alphabet `0-9a-z`, lowercase).
///
/// Holds any non-empty base-36 string in canonical form: lowercase, without
/// leading zeros. Parsing is case-insensitive and canonicalises, so equality
/// is numeric equality. Ordering is numeric too, so IDs of different lengths
/// compare by value.
///
/// # Example
///
/// ```
/// use uniqid::{EncodedId, RawId};
///
/// let id: EncodedId = "2TI7KNSTYDHBWXC".parse().unwrap();
/// assert_eq!(id.as_str(), "2ti7knstydhbwxc");
/// assert_eq!(id.decode(), "17315042302540352577648");
/// assert_eq!(id.to_raw_id().unwrap(), RawId::from_parts(1_731_504_230_254, 352_577_648));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EncodedId(String);

impl EncodedId {
    /// Wraps codec output, which is already lowercase and validated.
    pub(crate) const fn from_canonical(s: String) -> Self {
        Self(s)
    }

    /// Returns the encoded string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of base-36 characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; an [`EncodedId`] holds at least one character.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the ID and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Decodes back to the decimal value, without leading zeros.
    pub fn decode(&self) -> String {
        render(&convert_radix(&self.digit_values(), 36, 10))
    }

    /// Decodes back to a [`RawId`], restoring the leading zeros that base-36
    /// encoding drops.
    ///
    /// # Errors
    ///
    /// Returns [`crate::InputError::Overflow`] if the value needs more than 23
    /// decimal digits, i.e. it was not produced from a [`RawId`].
    pub fn to_raw_id(&self) -> Result<RawId> {
        RawId::from_decimal(&self.decode())
    }

    fn digit_values(&self) -> Vec<u8> {
        self.0.bytes().filter_map(digit_value).collect()
    }
}

impl From<RawId> for EncodedId {
    fn from(id: RawId) -> Self {
        id.encode()
    }
}

impl From<&RawId> for EncodedId {
    fn from(id: &RawId) -> Self {
        id.encode()
    }
}

impl FromStr for EncodedId {
    type Err = crate::Error;

    /// Accepts any non-empty string over `0-9a-zA-Z`.
    fn from_str(s: &str) -> Result<Self> {
        parse_digits(s, 36)?;
        let trimmed = s.trim_start_matches('0');
        if trimmed.is_empty() {
            return Ok(Self(String::from("0")));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }
}

impl TryFrom<&str> for EncodedId {
    type Error = crate::Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<&EncodedId> for RawId {
    type Error = crate::Error;

    fn try_from(id: &EncodedId) -> Result<Self> {
        id.to_raw_id()
    }
}

impl Ord for EncodedId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for EncodedId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<str> for EncodedId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<EncodedId> for String {
    fn from(id: EncodedId) -> Self {
        id.0
    }
}

impl PartialEq<str> for EncodedId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EncodedId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for EncodedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for EncodedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncodedId").field(&self.as_str()).finish()
    }
}
