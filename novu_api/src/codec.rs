//! Body encoding.
//!
//! A [`Codec`] turns JSON values into wire bytes and back. Typed conversion
//! stays with serde: request and response DTOs describe their own wire names
//! through `#[serde(rename)]`, and the client moves between those types and
//! [`serde_json::Value`] on either side of the codec.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Failure to encode or decode a body.
#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct CodecError(pub String);

/// Pluggable body format.
pub trait Codec: Send + Sync {
    /// Value sent in both the `Content-Type` and `Accept` headers.
    fn content_type(&self) -> &'static str;

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError>;
}

/// JSON codec backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|e| CodecError(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError(e.to_string()))
    }
}

/// Serializes a typed value and encodes it with `codec`.
pub fn encode_typed<T: Serialize + ?Sized>(
    codec: &dyn Codec,
    value: &T,
) -> Result<Vec<u8>, CodecError> {
    let value = serde_json::to_value(value).map_err(|e| CodecError(e.to_string()))?;
    codec.encode(&value)
}

/// Decodes `bytes` with `codec` into a typed value.
pub fn decode_typed<T: DeserializeOwned>(codec: &dyn Codec, bytes: &[u8]) -> Result<T, CodecError> {
    let value = codec.decode(bytes)?;
    serde_json::from_value(value).map_err(|e| CodecError(e.to_string()))
}
