//! `Decoded` — the dynamically typed result a codec produces.
//!
//! The dispatch registry hands out type-erased codecs, so their output
//! carries its own shape: one arm per wrapper family, each holding the
//! matching `Wrapped`. Typed extractors move values from this layer into
//! entity fields; the `*_from` builders feed the encode direction.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map as JsonMap, Value};

use crate::codec::Wrapped;
use crate::error::CodecError;

/// A decoded wrapped value of runtime-determined shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Bool(Wrapped<bool>),
    Int(Wrapped<i32>),
    Long(Wrapped<i64>),
    Float(Wrapped<f32>),
    Double(Wrapped<f64>),
    Text(Wrapped<String>),
    /// Elements stay raw tokens; the base serializer types them on demand.
    List(Wrapped<Vec<Value>>),
    Set(Wrapped<Vec<Value>>),
    Map(Wrapped<JsonMap<String, Value>>),
    /// A token passed through untouched for the base serializer.
    Raw(Wrapped<Value>),
}

impl Decoded {
    /// Shape name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Raw(_) => "raw",
        }
    }

    /// Whether the held wrapped value is in the empty state.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bool(w) => w.is_empty(),
            Self::Int(w) => w.is_empty(),
            Self::Long(w) => w.is_empty(),
            Self::Float(w) => w.is_empty(),
            Self::Double(w) => w.is_empty(),
            Self::Text(w) => w.is_empty(),
            Self::List(w) => w.is_empty(),
            Self::Set(w) => w.is_empty(),
            Self::Map(w) => w.is_empty(),
            Self::Raw(w) => w.is_empty(),
        }
    }

    fn mismatch(&self, expected: &'static str) -> CodecError {
        CodecError::Mismatch {
            expected,
            found: self.kind().to_string(),
        }
    }

    // ── Typed extractors ─────────────────────────────────────────────────

    pub fn into_bool(self) -> Result<Wrapped<bool>, CodecError> {
        match self {
            Self::Bool(w) => Ok(w),
            other => Err(other.mismatch("bool")),
        }
    }

    pub fn into_int(self) -> Result<Wrapped<i32>, CodecError> {
        match self {
            Self::Int(w) => Ok(w),
            other => Err(other.mismatch("int")),
        }
    }

    pub fn into_long(self) -> Result<Wrapped<i64>, CodecError> {
        match self {
            Self::Long(w) => Ok(w),
            other => Err(other.mismatch("long")),
        }
    }

    pub fn into_float(self) -> Result<Wrapped<f32>, CodecError> {
        match self {
            Self::Float(w) => Ok(w),
            other => Err(other.mismatch("float")),
        }
    }

    pub fn into_double(self) -> Result<Wrapped<f64>, CodecError> {
        match self {
            Self::Double(w) => Ok(w),
            other => Err(other.mismatch("double")),
        }
    }

    pub fn into_text(self) -> Result<Wrapped<String>, CodecError> {
        match self {
            Self::Text(w) => Ok(w),
            other => Err(other.mismatch("text")),
        }
    }

    pub fn into_list(self) -> Result<Wrapped<Vec<Value>>, CodecError> {
        match self {
            Self::List(w) => Ok(w),
            other => Err(other.mismatch("list")),
        }
    }

    pub fn into_set(self) -> Result<Wrapped<Vec<Value>>, CodecError> {
        match self {
            Self::Set(w) => Ok(w),
            other => Err(other.mismatch("set")),
        }
    }

    pub fn into_map(self) -> Result<Wrapped<JsonMap<String, Value>>, CodecError> {
        match self {
            Self::Map(w) => Ok(w),
            other => Err(other.mismatch("map")),
        }
    }

    pub fn into_raw(self) -> Result<Wrapped<Value>, CodecError> {
        match self {
            Self::Raw(w) => Ok(w),
            other => Err(other.mismatch("raw")),
        }
    }

    /// Type a passed-through token with the base serializer.
    pub fn into_entity<T: DeserializeOwned>(self) -> Result<Wrapped<T>, CodecError> {
        match self.into_raw()?.into_inner() {
            None => Ok(Wrapped::empty()),
            Some(token) => Ok(Wrapped::present(serde_json::from_value(token)?)),
        }
    }

    /// Type the elements of a decoded list with the base serializer.
    pub fn into_list_of<T: DeserializeOwned>(self) -> Result<Wrapped<Vec<T>>, CodecError> {
        Self::typed_elements(self.into_list()?)
    }

    /// Type the elements of a decoded set with the base serializer.
    pub fn into_set_of<T: DeserializeOwned>(self) -> Result<Wrapped<Vec<T>>, CodecError> {
        Self::typed_elements(self.into_set()?)
    }

    fn typed_elements<T: DeserializeOwned>(
        tokens: Wrapped<Vec<Value>>,
    ) -> Result<Wrapped<Vec<T>>, CodecError> {
        match tokens.into_inner() {
            None => Ok(Wrapped::empty()),
            Some(values) => {
                let mut typed = Vec::with_capacity(values.len());
                for value in values {
                    typed.push(serde_json::from_value(value)?);
                }
                Ok(Wrapped::present(typed))
            }
        }
    }

    // ── Builders for the encode direction ────────────────────────────────

    /// Wrap a serde-native value for the passthrough codec.
    pub fn raw_from<T: Serialize>(value: &Wrapped<T>) -> Result<Self, CodecError> {
        Ok(Self::Raw(match value.get() {
            None => Wrapped::empty(),
            Some(v) => Wrapped::present(serde_json::to_value(v)?),
        }))
    }

    /// Wrap serde-native elements for the list codec.
    pub fn list_from<T: Serialize>(values: &Wrapped<Vec<T>>) -> Result<Self, CodecError> {
        Ok(Self::List(match values.get() {
            None => Wrapped::empty(),
            Some(vs) => {
                let mut tokens = Vec::with_capacity(vs.len());
                for v in vs {
                    tokens.push(serde_json::to_value(v)?);
                }
                Wrapped::present(tokens)
            }
        }))
    }
}
