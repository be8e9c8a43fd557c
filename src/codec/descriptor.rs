//! Type descriptors — the resolved shape of a wrapped field.
//!
//! A `TypeDescriptor` is derived once per requested shape and used only to
//! pick a codec from the dispatch registry. Scalar shapes are leaves; the
//! generic shapes (list/set/map/object) carry exactly one inner descriptor.

use std::fmt;

/// The payload-free kind of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKind {
    Bool,
    Int,
    Long,
    Float,
    Double,
    Text,
    List,
    Set,
    Map,
    Object,
    /// A type the base serializer handles on its own (entities, enums).
    Opaque,
}

/// The resolved shape of a wrapped field.
///
/// The generic variants carry their single inner type parameter; `Opaque`
/// names a type outside the wrapper family, usable only as an inner shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Bool,
    Int,
    Long,
    Float,
    Double,
    Text,
    List(Box<TypeDescriptor>),
    Set(Box<TypeDescriptor>),
    Map(Box<TypeDescriptor>),
    Object(Box<TypeDescriptor>),
    Opaque(&'static str),
}

impl TypeDescriptor {
    pub fn list_of(inner: TypeDescriptor) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn set_of(inner: TypeDescriptor) -> Self {
        Self::Set(Box::new(inner))
    }

    pub fn map_of(inner: TypeDescriptor) -> Self {
        Self::Map(Box::new(inner))
    }

    /// A generic object wrapper of `inner`.
    pub fn object_of(inner: TypeDescriptor) -> Self {
        Self::Object(Box::new(inner))
    }

    /// A type outside the wrapper family, named for diagnostics.
    pub fn opaque(name: &'static str) -> Self {
        Self::Opaque(name)
    }

    pub fn raw_kind(&self) -> RawKind {
        match self {
            Self::Bool => RawKind::Bool,
            Self::Int => RawKind::Int,
            Self::Long => RawKind::Long,
            Self::Float => RawKind::Float,
            Self::Double => RawKind::Double,
            Self::Text => RawKind::Text,
            Self::List(_) => RawKind::List,
            Self::Set(_) => RawKind::Set,
            Self::Map(_) => RawKind::Map,
            Self::Object(_) => RawKind::Object,
            Self::Opaque(_) => RawKind::Opaque,
        }
    }

    /// The inner type parameter, present exactly for the generic shapes.
    pub fn inner(&self) -> Option<&TypeDescriptor> {
        match self {
            Self::List(inner) | Self::Set(inner) | Self::Map(inner) | Self::Object(inner) => {
                Some(inner)
            }
            _ => None,
        }
    }

    /// Whether this shape belongs to the wrapper family at all.
    ///
    /// `Opaque` shapes are the registry's "not applicable" case: the base
    /// serializer handles them with its own machinery.
    pub fn is_wrapper(&self) -> bool {
        !matches!(self, Self::Opaque(_))
    }

    fn as_scalar(&self) -> Option<RawKind> {
        match self {
            Self::Bool => Some(RawKind::Bool),
            Self::Int => Some(RawKind::Int),
            Self::Long => Some(RawKind::Long),
            Self::Float => Some(RawKind::Float),
            Self::Double => Some(RawKind::Double),
            Self::Text => Some(RawKind::Text),
            _ => None,
        }
    }

    /// The scalar kind this shape decodes as, seeing through one level of
    /// object wrapping.
    ///
    /// An object wrapper of a scalar is handled by the scalar codecs, not
    /// the delegating codec — the scalar factories sit earlier in the
    /// dispatch chain and match through this accessor.
    pub fn scalar_kind(&self) -> Option<RawKind> {
        match self {
            Self::Object(inner) => inner.as_scalar(),
            other => other.as_scalar(),
        }
    }

    /// Nesting depth of the descriptor tree, for diagnostics.
    pub fn depth(&self) -> usize {
        1 + self.inner().map_or(0, TypeDescriptor::depth)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Long => write!(f, "long"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
            Self::Text => write!(f, "text"),
            Self::List(inner) => write!(f, "list<{inner}>"),
            Self::Set(inner) => write!(f, "set<{inner}>"),
            Self::Map(inner) => write!(f, "map<{inner}>"),
            Self::Object(inner) => write!(f, "object<{inner}>"),
            Self::Opaque(name) => write!(f, "{name}"),
        }
    }
}

/// Static descriptor resolution for types with a known wrapper shape.
///
/// Implemented for the scalar targets and `Vec<T>`; anything else is outside
/// the wrapper family and is described explicitly as
/// [`TypeDescriptor::opaque`] where needed.
pub trait Describe {
    fn descriptor() -> TypeDescriptor;
}

impl Describe for bool {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Bool
    }
}

impl Describe for i32 {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Int
    }
}

impl Describe for i64 {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Long
    }
}

impl Describe for f32 {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Float
    }
}

impl Describe for f64 {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Double
    }
}

impl Describe for String {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Text
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::list_of(T::descriptor())
    }
}

/// Shorthand for `T::descriptor()`.
pub fn descriptor_of<T: Describe>() -> TypeDescriptor {
    T::descriptor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_present_iff_generic() {
        assert!(TypeDescriptor::Long.inner().is_none());
        assert!(TypeDescriptor::opaque("Order").inner().is_none());
        assert!(TypeDescriptor::list_of(TypeDescriptor::Long).inner().is_some());
        assert!(TypeDescriptor::object_of(TypeDescriptor::Bool).inner().is_some());
    }

    #[test]
    fn test_scalar_kind_sees_through_object_wrapper() {
        let wrapped_bool = TypeDescriptor::object_of(TypeDescriptor::Bool);
        assert_eq!(wrapped_bool.scalar_kind(), Some(RawKind::Bool));
        assert_eq!(wrapped_bool.raw_kind(), RawKind::Object);

        let wrapped_entity = TypeDescriptor::object_of(TypeDescriptor::opaque("License"));
        assert_eq!(wrapped_entity.scalar_kind(), None);
    }

    #[test]
    fn test_describe_resolution() {
        assert_eq!(descriptor_of::<i64>(), TypeDescriptor::Long);
        assert_eq!(
            descriptor_of::<Vec<f64>>(),
            TypeDescriptor::list_of(TypeDescriptor::Double)
        );
    }

    #[test]
    fn test_display() {
        let desc = TypeDescriptor::list_of(TypeDescriptor::object_of(TypeDescriptor::opaque(
            "Position",
        )));
        assert_eq!(desc.to_string(), "list<object<Position>>");
        assert_eq!(desc.depth(), 3);
    }
}
