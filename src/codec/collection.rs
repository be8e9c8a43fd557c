//! Codecs for the wrapped collection shapes (list/set/map).
//!
//! Element (de)serialization is the base serializer's job — these codecs
//! only move between "native collection token" and "wrapped collection".
//! Wire `null` reads as a present, zero-element collection: callers always
//! get something they can iterate.

use serde_json::Value;

use crate::codec::{Codec, Decoded, Wrapped};
use crate::error::CodecError;

fn mismatch(expected: &'static str, found: &str) -> CodecError {
    CodecError::Mismatch {
        expected,
        found: found.to_string(),
    }
}

/// Codec for wrapped lists.
#[derive(Debug)]
pub struct ListCodec;

impl Codec for ListCodec {
    fn read(&self, token: &Value) -> Result<Decoded, CodecError> {
        match token {
            Value::Null => Ok(self.empty()),
            Value::Array(elements) => Ok(Decoded::List(Wrapped::present(elements.clone()))),
            other => Err(mismatch("array", type_name(other))),
        }
    }

    fn write(&self, value: &Decoded) -> Result<Value, CodecError> {
        match value {
            Decoded::List(w) => Ok(w
                .get()
                .map_or(Value::Null, |elements| Value::Array(elements.clone()))),
            other => Err(mismatch("list", other.kind())),
        }
    }

    fn empty(&self) -> Decoded {
        Decoded::List(Wrapped::present(Vec::new()))
    }
}

/// Codec for wrapped sets.
///
/// JSON has no set literal; duplicates are dropped keeping the first
/// occurrence. Element counts on this wire are small, so a linear scan is
/// the whole story.
#[derive(Debug)]
pub struct SetCodec;

impl Codec for SetCodec {
    fn read(&self, token: &Value) -> Result<Decoded, CodecError> {
        match token {
            Value::Null => Ok(self.empty()),
            Value::Array(elements) => {
                let mut unique: Vec<Value> = Vec::with_capacity(elements.len());
                for element in elements {
                    if !unique.contains(element) {
                        unique.push(element.clone());
                    }
                }
                Ok(Decoded::Set(Wrapped::present(unique)))
            }
            other => Err(mismatch("array", type_name(other))),
        }
    }

    fn write(&self, value: &Decoded) -> Result<Value, CodecError> {
        match value {
            Decoded::Set(w) => Ok(w
                .get()
                .map_or(Value::Null, |elements| Value::Array(elements.clone()))),
            other => Err(mismatch("set", other.kind())),
        }
    }

    fn empty(&self) -> Decoded {
        Decoded::Set(Wrapped::present(Vec::new()))
    }
}

/// Codec for wrapped string-keyed maps.
#[derive(Debug)]
pub struct MapCodec;

impl Codec for MapCodec {
    fn read(&self, token: &Value) -> Result<Decoded, CodecError> {
        match token {
            Value::Null => Ok(self.empty()),
            Value::Object(entries) => Ok(Decoded::Map(Wrapped::present(entries.clone()))),
            other => Err(mismatch("object", type_name(other))),
        }
    }

    fn write(&self, value: &Decoded) -> Result<Value, CodecError> {
        match value {
            Decoded::Map(w) => Ok(w
                .get()
                .map_or(Value::Null, |entries| Value::Object(entries.clone()))),
            other => Err(mismatch("map", other.kind())),
        }
    }

    fn empty(&self) -> Decoded {
        Decoded::Map(Wrapped::present(serde_json::Map::new()))
    }
}

fn type_name(token: &Value) -> &'static str {
    match token {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
