//! The generic delegating codec and the native passthrough.
//!
//! `DelegateCodec` handles "wrapped object of T" for any `T` the leaf and
//! collection codecs do not cover. Its inner codec is captured once at
//! registry-build time; wire `null` short-circuits to the inner codec's
//! empty form without invoking it.

use std::sync::Arc;

use serde_json::Value;

use crate::codec::{Codec, Decoded, Wrapped};
use crate::error::CodecError;

/// Codec for a wrapped object of `T`, forwarding non-null tokens to the
/// codec resolved for `T`.
#[derive(Debug)]
pub struct DelegateCodec {
    inner: Arc<dyn Codec>,
}

impl DelegateCodec {
    /// Capture the inner codec. Resolution happens at registry-build time,
    /// never per read — repeated registry traversal on hot paths and
    /// re-entrant resolution of nested wrapper shapes both end here.
    pub fn new(inner: Arc<dyn Codec>) -> Self {
        Self { inner }
    }
}

impl Codec for DelegateCodec {
    fn read(&self, token: &Value) -> Result<Decoded, CodecError> {
        if token.is_null() {
            // Never descend into a tree of nulls.
            return Ok(self.inner.empty());
        }
        self.inner.read(token)
    }

    fn write(&self, value: &Decoded) -> Result<Value, CodecError> {
        if value.is_empty() {
            return Ok(Value::Null);
        }
        self.inner.write(value)
    }

    fn empty(&self) -> Decoded {
        self.inner.empty()
    }
}

/// Passthrough codec for types the base serializer handles natively.
///
/// Nested entities and enums ride through the dispatch layer as raw tokens;
/// typing happens at the `Decoded::into_entity` boundary.
#[derive(Debug)]
pub struct NativeCodec;

impl Codec for NativeCodec {
    fn read(&self, token: &Value) -> Result<Decoded, CodecError> {
        match token {
            Value::Null => Ok(self.empty()),
            other => Ok(Decoded::Raw(Wrapped::present(other.clone()))),
        }
    }

    fn write(&self, value: &Decoded) -> Result<Value, CodecError> {
        match value {
            Decoded::Raw(w) => Ok(w.get().cloned().unwrap_or(Value::Null)),
            other => Err(CodecError::Mismatch {
                expected: "raw",
                found: other.kind().to_string(),
            }),
        }
    }

    fn empty(&self) -> Decoded {
        Decoded::Raw(Wrapped::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Inner codec that panics on read — proves null never reaches it.
    #[derive(Debug)]
    struct Tripwire;

    impl Codec for Tripwire {
        fn read(&self, _token: &Value) -> Result<Decoded, CodecError> {
            panic!("inner codec invoked for a null token");
        }

        fn write(&self, _value: &Decoded) -> Result<Value, CodecError> {
            panic!("inner codec invoked for an empty value");
        }

        fn empty(&self) -> Decoded {
            Decoded::Raw(Wrapped::empty())
        }
    }

    #[test]
    fn test_null_never_reaches_inner_codec() {
        let codec = DelegateCodec::new(Arc::new(Tripwire));
        let decoded = codec.read(&Value::Null).unwrap();
        assert!(decoded.is_empty());
        assert_eq!(codec.write(&decoded).unwrap(), Value::Null);
    }

    #[test]
    fn test_non_null_delegates() {
        let codec = DelegateCodec::new(Arc::new(NativeCodec));
        let token = json!({"id": "lic-1"});
        let decoded = codec.read(&token).unwrap();
        assert_eq!(decoded.clone().into_raw().unwrap(), Wrapped::present(token.clone()));
        assert_eq!(codec.write(&decoded).unwrap(), token);
    }

    #[test]
    fn test_native_round_trip() {
        let token = json!(["x", 1, null]);
        let decoded = NativeCodec.read(&token).unwrap();
        assert_eq!(NativeCodec.write(&decoded).unwrap(), token);
    }
}
