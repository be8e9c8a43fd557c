//! The codec dispatch registry.
//!
//! An ordered chain of codec factories, consulted shape by shape: the six
//! scalar matchers first, then the collection matchers, then the generic
//! delegating matcher. The first factory that matches wins; a shape no
//! factory matches is declined (`None`), never an error — the base
//! serializer keeps its own handling for non-wrapper types.
//!
//! The registry is built once, resolves its expected shapes eagerly (a
//! wrapper shape that cannot resolve is a construction error, not a
//! request-time one), and is shared read-only thereafter.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use serde_json::Value;

use crate::codec::collection::{ListCodec, MapCodec, SetCodec};
use crate::codec::delegate::{DelegateCodec, NativeCodec};
use crate::codec::scalar::{BoolCodec, DoubleCodec, FloatCodec, IntCodec, LongCodec, TextCodec};
use crate::codec::{Codec, Decoded, RawKind, TypeDescriptor};
use crate::error::CodecError;

/// Examines a descriptor and produces a codec, or declines.
pub trait CodecFactory: Send + Sync {
    /// Factory name, for dispatch logs.
    fn name(&self) -> &'static str;

    /// Return a codec for `descriptor`, or `None` if this factory does not
    /// apply. Nested shapes are resolved through `resolver`, which carries
    /// the in-progress resolution chain.
    fn create(&self, descriptor: &TypeDescriptor, resolver: &Resolver<'_>)
        -> Option<Arc<dyn Codec>>;
}

// ── Resolution chain ─────────────────────────────────────────────────────

/// One link of the in-progress resolution chain, stack-allocated.
struct ChainLink<'a> {
    descriptor: &'a TypeDescriptor,
    parent: Option<&'a ChainLink<'a>>,
}

impl ChainLink<'_> {
    fn contains(&self, descriptor: &TypeDescriptor) -> bool {
        let mut link = Some(self);
        while let Some(l) = link {
            if l.descriptor == descriptor {
                return true;
            }
            link = l.parent;
        }
        false
    }
}

/// Re-entrant view of the registry handed to factories during resolution.
///
/// Refuses to resolve a descriptor that is already being resolved higher up
/// the same chain, so a self-referential wrapper shape terminates instead of
/// looping through the delegating matcher.
pub struct Resolver<'a> {
    registry: &'a CodecRegistry,
    chain: Option<&'a ChainLink<'a>>,
}

impl Resolver<'_> {
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Option<Arc<dyn Codec>> {
        if self.chain.is_some_and(|chain| chain.contains(descriptor)) {
            tracing::debug!(shape = %descriptor, "Refusing re-entrant resolution");
            return None;
        }
        let link = ChainLink {
            descriptor,
            parent: self.chain,
        };
        let next = Resolver {
            registry: self.registry,
            chain: Some(&link),
        };
        self.registry
            .factories
            .iter()
            .find_map(|factory| factory.create(descriptor, &next))
    }
}

// ── Registry ─────────────────────────────────────────────────────────────

/// The ordered codec factory chain plus a memo table of resolved codecs.
pub struct CodecRegistry {
    factories: Vec<Box<dyn CodecFactory>>,
    resolved: RwLock<HashMap<TypeDescriptor, Arc<dyn Codec>>>,
}

impl CodecRegistry {
    pub fn builder() -> CodecRegistryBuilder {
        CodecRegistryBuilder::default()
    }

    /// The full factory chain in its fixed priority order.
    pub fn standard() -> Self {
        Self::builder()
            .factory(Box::new(BoolFactory))
            .factory(Box::new(IntFactory))
            .factory(Box::new(LongFactory))
            .factory(Box::new(FloatFactory))
            .factory(Box::new(DoubleFactory))
            .factory(Box::new(TextFactory))
            .factory(Box::new(ListFactory))
            .factory(Box::new(SetFactory))
            .factory(Box::new(MapFactory))
            .factory(Box::new(DelegateFactory))
            .expect_shapes(standard_shapes())
            .build()
            .expect("standard codec chain failed to resolve its own shapes")
    }

    /// Resolve a codec for `descriptor`, or decline for non-wrapper shapes.
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Option<Arc<dyn Codec>> {
        if let Some(codec) = self.resolved.read().expect("codec memo table poisoned").get(descriptor)
        {
            return Some(codec.clone());
        }

        let resolver = Resolver {
            registry: self,
            chain: None,
        };
        let codec = resolver.resolve(descriptor)?;

        self.resolved
            .write()
            .expect("codec memo table poisoned")
            .insert(descriptor.clone(), codec.clone());
        Some(codec)
    }

    /// Resolve and read in one step, for callers that know `descriptor` is a
    /// wrapper shape.
    pub fn read(&self, descriptor: &TypeDescriptor, token: &Value) -> Result<Decoded, CodecError> {
        self.resolve(descriptor)
            .ok_or_else(|| CodecError::Unresolvable(descriptor.to_string()))?
            .read(token)
    }

    /// Resolve and write in one step, for callers that know `descriptor` is
    /// a wrapper shape.
    pub fn write(
        &self,
        descriptor: &TypeDescriptor,
        value: &Decoded,
    ) -> Result<Value, CodecError> {
        self.resolve(descriptor)
            .ok_or_else(|| CodecError::Unresolvable(descriptor.to_string()))?
            .write(value)
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.factories.iter().map(|fa| fa.name()).collect();
        f.debug_struct("CodecRegistry").field("factories", &names).finish()
    }
}

lazy_static! {
    static ref GLOBAL: CodecRegistry = CodecRegistry::standard();
}

/// The process-wide registry instance. Built on first use, immutable after.
pub fn global() -> &'static CodecRegistry {
    &GLOBAL
}

/// The wrapper shapes every standard registry must resolve at build time.
fn standard_shapes() -> Vec<TypeDescriptor> {
    let opaque = || TypeDescriptor::opaque("entity");
    vec![
        TypeDescriptor::Bool,
        TypeDescriptor::Int,
        TypeDescriptor::Long,
        TypeDescriptor::Float,
        TypeDescriptor::Double,
        TypeDescriptor::Text,
        TypeDescriptor::list_of(opaque()),
        TypeDescriptor::set_of(opaque()),
        TypeDescriptor::map_of(opaque()),
        TypeDescriptor::object_of(opaque()),
        TypeDescriptor::object_of(TypeDescriptor::Bool),
    ]
}

// ── Builder ──────────────────────────────────────────────────────────────

/// Assembles a registry: factories in registration order, plus the shapes
/// that must resolve for `build` to succeed.
#[derive(Default)]
pub struct CodecRegistryBuilder {
    factories: Vec<Box<dyn CodecFactory>>,
    expected: Vec<TypeDescriptor>,
}

impl CodecRegistryBuilder {
    /// Append a factory. Registration order is priority order.
    pub fn factory(mut self, factory: Box<dyn CodecFactory>) -> Self {
        self.factories.push(factory);
        self
    }

    /// Require `shape` to resolve at build time.
    pub fn expect_shape(mut self, shape: TypeDescriptor) -> Self {
        self.expected.push(shape);
        self
    }

    pub fn expect_shapes(mut self, shapes: Vec<TypeDescriptor>) -> Self {
        self.expected.extend(shapes);
        self
    }

    /// Build the registry, resolving every expected shape eagerly.
    ///
    /// A wrapper shape the chain cannot resolve is a configuration error and
    /// fails here, at startup, rather than on the first request that needs it.
    pub fn build(self) -> Result<CodecRegistry, CodecError> {
        let registry = CodecRegistry {
            factories: self.factories,
            resolved: RwLock::new(HashMap::new()),
        };
        for shape in &self.expected {
            if registry.resolve(shape).is_none() {
                return Err(CodecError::Unresolvable(shape.to_string()));
            }
            tracing::debug!(shape = %shape, "Resolved codec");
        }
        Ok(registry)
    }
}

// ── Factories, in priority order ─────────────────────────────────────────

macro_rules! scalar_factory {
    ($factory:ident, $kind:ident, $codec:expr) => {
        /// Matches the scalar shape and its object-wrapped form.
        pub struct $factory;

        impl CodecFactory for $factory {
            fn name(&self) -> &'static str {
                stringify!($factory)
            }

            fn create(
                &self,
                descriptor: &TypeDescriptor,
                _resolver: &Resolver<'_>,
            ) -> Option<Arc<dyn Codec>> {
                (descriptor.scalar_kind() == Some(RawKind::$kind))
                    .then(|| Arc::new($codec) as Arc<dyn Codec>)
            }
        }
    };
}

scalar_factory!(BoolFactory, Bool, BoolCodec);
scalar_factory!(IntFactory, Int, IntCodec);
scalar_factory!(LongFactory, Long, LongCodec);
scalar_factory!(FloatFactory, Float, FloatCodec);
scalar_factory!(DoubleFactory, Double, DoubleCodec);
scalar_factory!(TextFactory, Text, TextCodec);

pub struct ListFactory;

impl CodecFactory for ListFactory {
    fn name(&self) -> &'static str {
        "ListFactory"
    }

    fn create(
        &self,
        descriptor: &TypeDescriptor,
        _resolver: &Resolver<'_>,
    ) -> Option<Arc<dyn Codec>> {
        matches!(descriptor, TypeDescriptor::List(_)).then(|| Arc::new(ListCodec) as Arc<dyn Codec>)
    }
}

pub struct SetFactory;

impl CodecFactory for SetFactory {
    fn name(&self) -> &'static str {
        "SetFactory"
    }

    fn create(
        &self,
        descriptor: &TypeDescriptor,
        _resolver: &Resolver<'_>,
    ) -> Option<Arc<dyn Codec>> {
        matches!(descriptor, TypeDescriptor::Set(_)).then(|| Arc::new(SetCodec) as Arc<dyn Codec>)
    }
}

pub struct MapFactory;

impl CodecFactory for MapFactory {
    fn name(&self) -> &'static str {
        "MapFactory"
    }

    fn create(
        &self,
        descriptor: &TypeDescriptor,
        _resolver: &Resolver<'_>,
    ) -> Option<Arc<dyn Codec>> {
        matches!(descriptor, TypeDescriptor::Map(_)).then(|| Arc::new(MapCodec) as Arc<dyn Codec>)
    }
}

/// The generic fallback: any object wrapper the scalar matchers passed over.
///
/// Resolves the inner shape through the chain-guarded resolver; an inner
/// shape nothing matches (an entity, an enum, or a guarded re-entry) falls
/// back to the native passthrough — the base serializer's own handling.
pub struct DelegateFactory;

impl CodecFactory for DelegateFactory {
    fn name(&self) -> &'static str {
        "DelegateFactory"
    }

    fn create(
        &self,
        descriptor: &TypeDescriptor,
        resolver: &Resolver<'_>,
    ) -> Option<Arc<dyn Codec>> {
        let TypeDescriptor::Object(inner) = descriptor else {
            return None;
        };
        let inner_codec = resolver
            .resolve(inner)
            .unwrap_or_else(|| Arc::new(NativeCodec));
        Some(Arc::new(DelegateCodec::new(inner_codec)))
    }
}
