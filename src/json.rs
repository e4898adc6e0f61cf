//! JSON representation of [`Optional`].
//!
//! An absent container is written as `null`; a present one is written
//! exactly as its value would be, without any envelope. The `serde` impls
//! make `Optional<T>` usable as a field of any serializable struct, where a
//! missing field decodes as absent.

use core::{fmt, marker::PhantomData};

use log::trace;
use serde::{
    de::{self, Deserializer, Visitor},
    Deserialize, Serialize, Serializer,
};

use crate::{error::Result, optional::Optional};

/// Canonical token for an absent value.
pub const NULL_TOKEN: &[u8] = b"null";

#[inline(always)]
const fn is_insignificant(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Indicates whether `bytes` is the `null` token, ignoring leading and
/// trailing spaces, tabs, carriage returns and newlines.
pub fn is_null_token(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|&byte| !is_insignificant(byte))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&byte| !is_insignificant(byte))
        .map_or(start, |index| index + 1);

    bytes.get(start..end) == Some(NULL_TOKEN)
}

impl<T: Serialize> Optional<T> {
    /// Encodes the container as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
    }

    /// Encodes the container as JSON bytes.
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl<T: Default> Optional<T> {
    /// Decodes a container from a JSON string.
    ///
    /// A (whitespace-padded) `null` gives an absent container. Anything else
    /// is decoded by `T`, and its error is returned unchanged on failure.
    pub fn from_json<'a>(text: &'a str) -> Result<Self>
    where
        T: Deserialize<'a>,
    {
        Self::from_json_slice(text.as_bytes())
    }

    /// Decodes a container from JSON bytes.
    pub fn from_json_slice<'a>(bytes: &'a [u8]) -> Result<Self>
    where
        T: Deserialize<'a>,
    {
        if is_null_token(bytes) {
            trace!("decoded null token as absent value");
            return Ok(Self::empty());
        }

        serde_json::from_slice::<T>(bytes)
            .map(Self::new)
            .inspect_err(|error| trace!("failed to decode present value: {error}"))
    }

    /// Decodes JSON into this container.
    ///
    /// On success the container is replaced by the decoded state; on
    /// failure it is left untouched.
    pub fn decode_json<'a>(&mut self, text: &'a str) -> Result<()>
    where
        T: Deserialize<'a>,
    {
        *self = Self::from_json(text)?;
        Ok(())
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self.as_ref() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        deserializer.deserialize_option(OptionalVisitor(PhantomData))
    }
}

struct OptionalVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de> + Default> Visitor<'de> for OptionalVisitor<T> {
    type Value = Optional<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null or a value")
    }

    fn visit_none<E: de::Error>(self) -> core::result::Result<Self::Value, E> {
        Ok(Optional::empty())
    }

    fn visit_unit<E: de::Error>(self) -> core::result::Result<Self::Value, E> {
        Ok(Optional::empty())
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> core::result::Result<Self::Value, D::Error> {
        T::deserialize(deserializer).map(Optional::new)
    }
}
