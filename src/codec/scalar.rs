//! Leaf codecs for the six scalar wrapper shapes.
//!
//! Each codec reads a single wire token: `null` becomes the empty wrapped
//! state of the right static type, a matching primitive becomes a present
//! value, anything else is a shape mismatch. The fractional codecs accept
//! integral literals — the backend emits `3` and `3.5` interchangeably for
//! double-typed fields.

use serde_json::{Number, Value};

use crate::codec::{Codec, Decoded, Wrapped};
use crate::error::CodecError;

fn mismatch(expected: &'static str, token: &Value) -> CodecError {
    let found = match token {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    CodecError::Mismatch {
        expected,
        found: found.to_string(),
    }
}

fn write_mismatch(expected: &'static str, value: &Decoded) -> CodecError {
    CodecError::Mismatch {
        expected,
        found: value.kind().to_string(),
    }
}

/// Codec for wrapped booleans.
#[derive(Debug)]
pub struct BoolCodec;

impl Codec for BoolCodec {
    fn read(&self, token: &Value) -> Result<Decoded, CodecError> {
        match token {
            Value::Null => Ok(self.empty()),
            Value::Bool(b) => Ok(Decoded::Bool(Wrapped::present(*b))),
            other => Err(mismatch("bool", other)),
        }
    }

    fn write(&self, value: &Decoded) -> Result<Value, CodecError> {
        match value {
            Decoded::Bool(w) => Ok(w.get().map_or(Value::Null, |b| Value::Bool(*b))),
            other => Err(write_mismatch("bool", other)),
        }
    }

    fn empty(&self) -> Decoded {
        Decoded::Bool(Wrapped::empty())
    }
}

/// Codec for wrapped 32-bit integers.
#[derive(Debug)]
pub struct IntCodec;

impl Codec for IntCodec {
    fn read(&self, token: &Value) -> Result<Decoded, CodecError> {
        match token {
            Value::Null => Ok(self.empty()),
            Value::Number(n) => {
                let wide = n.as_i64().ok_or_else(|| mismatch("int", token))?;
                let narrow = i32::try_from(wide).map_err(|_| CodecError::OutOfRange {
                    target: "int",
                    value: wide.to_string(),
                })?;
                Ok(Decoded::Int(Wrapped::present(narrow)))
            }
            other => Err(mismatch("int", other)),
        }
    }

    fn write(&self, value: &Decoded) -> Result<Value, CodecError> {
        match value {
            Decoded::Int(w) => Ok(w.get().map_or(Value::Null, |n| Value::from(*n))),
            other => Err(write_mismatch("int", other)),
        }
    }

    fn empty(&self) -> Decoded {
        Decoded::Int(Wrapped::empty())
    }
}

/// Codec for wrapped 64-bit integers (also the timestamp wire shape).
#[derive(Debug)]
pub struct LongCodec;

impl Codec for LongCodec {
    fn read(&self, token: &Value) -> Result<Decoded, CodecError> {
        match token {
            Value::Null => Ok(self.empty()),
            Value::Number(n) => {
                let v = n.as_i64().ok_or_else(|| mismatch("long", token))?;
                Ok(Decoded::Long(Wrapped::present(v)))
            }
            other => Err(mismatch("long", other)),
        }
    }

    fn write(&self, value: &Decoded) -> Result<Value, CodecError> {
        match value {
            Decoded::Long(w) => Ok(w.get().map_or(Value::Null, |n| Value::from(*n))),
            other => Err(write_mismatch("long", other)),
        }
    }

    fn empty(&self) -> Decoded {
        Decoded::Long(Wrapped::empty())
    }
}

/// Codec for wrapped single-precision floats.
#[derive(Debug)]
pub struct FloatCodec;

impl Codec for FloatCodec {
    fn read(&self, token: &Value) -> Result<Decoded, CodecError> {
        match token {
            Value::Null => Ok(self.empty()),
            // Integral and fractional literals both parse.
            Value::Number(n) => {
                let v = n.as_f64().ok_or_else(|| mismatch("float", token))?;
                Ok(Decoded::Float(Wrapped::present(v as f32)))
            }
            other => Err(mismatch("float", other)),
        }
    }

    fn write(&self, value: &Decoded) -> Result<Value, CodecError> {
        match value {
            Decoded::Float(w) => Ok(match w.get() {
                None => Value::Null,
                Some(f) => Number::from_f64(f64::from(*f))
                    .map(Value::Number)
                    .ok_or(CodecError::OutOfRange {
                        target: "float",
                        value: f.to_string(),
                    })?,
            }),
            other => Err(write_mismatch("float", other)),
        }
    }

    fn empty(&self) -> Decoded {
        Decoded::Float(Wrapped::empty())
    }
}

/// Codec for wrapped double-precision floats.
#[derive(Debug)]
pub struct DoubleCodec;

impl Codec for DoubleCodec {
    fn read(&self, token: &Value) -> Result<Decoded, CodecError> {
        match token {
            Value::Null => Ok(self.empty()),
            // Integral and fractional literals both parse.
            Value::Number(n) => {
                let v = n.as_f64().ok_or_else(|| mismatch("double", token))?;
                Ok(Decoded::Double(Wrapped::present(v)))
            }
            other => Err(mismatch("double", other)),
        }
    }

    fn write(&self, value: &Decoded) -> Result<Value, CodecError> {
        match value {
            Decoded::Double(w) => Ok(match w.get() {
                None => Value::Null,
                Some(f) => Number::from_f64(*f).map(Value::Number).ok_or(
                    CodecError::OutOfRange {
                        target: "double",
                        value: f.to_string(),
                    },
                )?,
            }),
            other => Err(write_mismatch("double", other)),
        }
    }

    fn empty(&self) -> Decoded {
        Decoded::Double(Wrapped::empty())
    }
}

/// Codec for wrapped strings.
#[derive(Debug)]
pub struct TextCodec;

impl Codec for TextCodec {
    fn read(&self, token: &Value) -> Result<Decoded, CodecError> {
        match token {
            Value::Null => Ok(self.empty()),
            Value::String(s) => Ok(Decoded::Text(Wrapped::present(s.clone()))),
            other => Err(mismatch("text", other)),
        }
    }

    fn write(&self, value: &Decoded) -> Result<Value, CodecError> {
        match value {
            Decoded::Text(w) => Ok(w
                .get()
                .map_or(Value::Null, |s| Value::String(s.clone()))),
            other => Err(write_mismatch("text", other)),
        }
    }

    fn empty(&self) -> Decoded {
        Decoded::Text(Wrapped::empty())
    }
}
