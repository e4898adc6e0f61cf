/// Error raised when decoding an [`Optional`](crate::Optional) from JSON.
///
/// This is exactly the error the value type's own deserializer reports.
/// The adapter adds no variant of its own, so [`DecodeError::classify`]
/// gives the same category as decoding the value type standalone.
pub type DecodeError = serde_json::Error;

pub type Result<T> = core::result::Result<T, DecodeError>;
