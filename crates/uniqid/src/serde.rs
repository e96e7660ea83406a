use crate::{EncodedId, RawId};
use core::{fmt, marker::PhantomData, str::FromStr};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Deserializes any `FromStr` ID type from a string, reporting parse failures
/// through serde.
struct IdVisitor<ID> {
    expecting: &'static str,
    _id: PhantomData<ID>,
}

impl<ID> IdVisitor<ID> {
    const fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            _id: PhantomData,
        }
    }
}

impl<ID> de::Visitor<'_> for IdVisitor<ID>
where
    ID: FromStr<Err = crate::Error>,
{
    type Value = ID;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(de::Error::custom)
    }
}

impl Serialize for RawId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RawId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_str(IdVisitor::new("a 23-digit decimal string"))
    }
}

impl Serialize for EncodedId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EncodedId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_str(IdVisitor::new("a base-36 string"))
    }
}

/// Stores a [`RawId`] field in its base-36 form.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use uniqid::{RawId, as_encoded_id};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "as_encoded_id")]
///     id: RawId,
/// }
/// ```
pub mod as_encoded_id {
    use super::*;

    pub fn serialize<S>(id: &RawId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<RawId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = EncodedId::deserialize(d)?;
        encoded.to_raw_id().map_err(de::Error::custom)
    }
}
