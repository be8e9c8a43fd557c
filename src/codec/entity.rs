//! Registry-driven entity decode/encode.
//!
//! Entities are plain data holders; their wire conversions go through the
//! dispatch registry field by field. `from_wire`/`to_wire` play the role
//! the per-domain `convert.rs` files play elsewhere in this crate family —
//! the difference is that field handling is picked at runtime by shape.

use serde_json::{Map as JsonMap, Value};

use crate::codec::CodecRegistry;
use crate::error::CodecError;

/// Decode an entity from a wire token using the given registry.
pub trait FromWire: Sized {
    fn from_wire(token: &Value, codecs: &CodecRegistry) -> Result<Self, CodecError>;
}

/// Encode an entity back into a wire token using the given registry.
pub trait ToWire {
    fn to_wire(&self, codecs: &CodecRegistry) -> Result<Value, CodecError>;
}

/// Borrow a field token from an object body.
///
/// An absent key and an explicit `null` are the same wire statement — both
/// come back as the null token, which every codec reads as empty.
pub fn field<'a>(body: &'a JsonMap<String, Value>, name: &str) -> &'a Value {
    body.get(name).unwrap_or(&Value::Null)
}

/// View a wire token as an object body, or fail with a shape mismatch.
pub fn object(token: &Value) -> Result<&JsonMap<String, Value>, CodecError> {
    token.as_object().ok_or_else(|| CodecError::Mismatch {
        expected: "object",
        found: match token {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
        .to_string(),
    })
}
