//! Property-aware codec layer.
//!
//! The Bourse backend models every entity field as a wrapped value: a
//! container that either holds a primitive/object or is explicitly empty
//! (wire `null`). This module is the machinery that decides, per field
//! shape, how to move between wire tokens and [`Wrapped`] values:
//!
//! - [`descriptor`] — the shape model ([`TypeDescriptor`]) used to pick a codec
//! - [`scalar`] — leaf codecs for bool/int/long/float/double/text
//! - [`collection`] — list/set/map codecs delegating elements to serde
//! - [`delegate`] — the generic "wrapped object of T" codec
//! - [`registry`] — the ordered dispatch chain composing all of the above
//! - [`entity`] — registry-driven entity decode/encode traits
//!
//! Null handling is uniform: wire `null` (or an absent key) is never an
//! error anywhere in this layer.

pub mod collection;
pub mod delegate;
pub mod descriptor;
pub mod entity;
pub mod registry;
pub mod scalar;
pub mod value;
mod wrapped;

pub use descriptor::{descriptor_of, Describe, RawKind, TypeDescriptor};
pub use entity::{field, object, FromWire, ToWire};
pub use registry::{CodecFactory, CodecRegistry, CodecRegistryBuilder, Resolver};
pub use value::Decoded;
pub use wrapped::Wrapped;

use serde_json::Value;

use crate::error::CodecError;

/// A read/write pair translating between wire tokens and wrapped values.
///
/// Codecs are stateless apart from captured delegates, are built once at
/// registry construction, and are shared read-only (`Arc`) thereafter.
pub trait Codec: Send + Sync + std::fmt::Debug {
    /// Decode one wire token. Wire `null` yields this codec's empty form.
    fn read(&self, token: &Value) -> Result<Decoded, CodecError>;

    /// Encode one decoded value. The empty state emits wire `null`.
    fn write(&self, value: &Decoded) -> Result<Value, CodecError>;

    /// The decoded form of wire `null`, producible without a read.
    ///
    /// Delegating codecs use this to stop at the first null instead of
    /// descending into the inner codec.
    fn empty(&self) -> Decoded;
}
