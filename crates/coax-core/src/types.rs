//! Type descriptors: the scalar catalog and the [`TypeDesc`] tree.

use std::fmt;

use crate::value::Value;

/// Classification of a non-container value type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// A boolean.
    Bool,
    /// A 16-bit signed integer.
    Int16,
    /// A 32-bit signed integer.
    Int32,
    /// A 64-bit signed integer.
    Int64,
    /// A 32-bit float.
    Float32,
    /// A 64-bit float.
    Float64,
    /// UTF-8 text.
    Text,
    /// An opaque byte string.
    Bytes,
}

impl ScalarType {
    /// Lower-case name used in type displays and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Text => "text",
            Self::Bytes => "bytes",
        }
    }

    /// Returns `true` if `value` is a non-null value of this scalar type.
    pub fn admits(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Bool, Value::Bool(_))
                | (Self::Int16, Value::Int16(_))
                | (Self::Int32, Value::Int32(_))
                | (Self::Int64, Value::Int64(_))
                | (Self::Float32, Value::Float32(_))
                | (Self::Float64, Value::Float64(_))
                | (Self::Text, Value::Text(_))
                | (Self::Bytes, Value::Bytes(_))
        )
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Descriptor of a model or provider type, as supplied by the host.
///
/// Descriptors are plain immutable trees. Two descriptors describe the
/// same type exactly when they compare equal.
///
/// # Examples
///
/// ```
/// use coax_core::{ScalarType, TypeDesc};
///
/// let ty = TypeDesc::list(TypeDesc::optional(TypeDesc::Scalar(ScalarType::Int32)));
/// assert_eq!(ty.to_string(), "list<int32?>");
/// assert_eq!(ty.element().unwrap().strip_optional(), &TypeDesc::Scalar(ScalarType::Int32));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDesc {
    /// A non-container value type.
    Scalar(ScalarType),
    /// A nullable wrapper around another type.
    Optional(Box<TypeDesc>),
    /// A fixed-size indexed container. The length belongs to each value,
    /// not to the type, and never changes once allocated.
    Array(Box<TypeDesc>),
    /// A dynamically-sized ordered sequence.
    List(Box<TypeDesc>),
}

impl TypeDesc {
    /// Shorthand for `TypeDesc::Scalar(ScalarType::Int32)`.
    pub const INT32: Self = Self::Scalar(ScalarType::Int32);

    /// Shorthand for `TypeDesc::Scalar(ScalarType::Text)`.
    pub const TEXT: Self = Self::Scalar(ScalarType::Text);

    /// Wrap `inner` as optional. An already-optional type is returned as is.
    pub fn optional(inner: TypeDesc) -> Self {
        match inner {
            Self::Optional(_) => inner,
            other => Self::Optional(Box::new(other)),
        }
    }

    /// A fixed-size array of `element`.
    pub fn array(element: TypeDesc) -> Self {
        Self::Array(Box::new(element))
    }

    /// A dynamic list of `element`.
    pub fn list(element: TypeDesc) -> Self {
        Self::List(Box::new(element))
    }

    /// Returns `true` if this is an optional wrapper.
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// The type with its outer optional wrapper removed, if any.
    ///
    /// Only the outermost wrapper is stripped; element types of containers
    /// are untouched.
    pub fn strip_optional(&self) -> &TypeDesc {
        match self {
            Self::Optional(inner) => inner,
            other => other,
        }
    }

    /// The element type of an array or list, or `None` for anything else.
    pub fn element(&self) -> Option<&TypeDesc> {
        match self {
            Self::Array(element) | Self::List(element) => Some(element),
            _ => None,
        }
    }

    /// Returns `true` if `value` is a valid value of this type.
    ///
    /// The check is shallow: container values are matched on their variant
    /// only, elements are not inspected.
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            Self::Optional(inner) => value.is_null() || inner.admits(value),
            Self::Scalar(scalar) => scalar.admits(value),
            Self::Array(_) => matches!(value, Value::Array(_)),
            Self::List(_) => matches!(value, Value::List(_)),
        }
    }
}

impl From<ScalarType> for TypeDesc {
    fn from(scalar: ScalarType) -> Self {
        Self::Scalar(scalar)
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "{scalar}"),
            Self::Optional(inner) => write!(f, "{inner}?"),
            Self::Array(element) => write!(f, "{element}[]"),
            Self::List(element) => write!(f, "list<{element}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_scalar() -> impl Strategy<Value = ScalarType> {
        prop_oneof![
            Just(ScalarType::Bool),
            Just(ScalarType::Int16),
            Just(ScalarType::Int32),
            Just(ScalarType::Int64),
            Just(ScalarType::Float32),
            Just(ScalarType::Float64),
            Just(ScalarType::Text),
            Just(ScalarType::Bytes),
        ]
    }

    fn arb_type() -> impl Strategy<Value = TypeDesc> {
        arb_scalar()
            .prop_map(TypeDesc::Scalar)
            .prop_recursive(4, 16, 1, |inner| {
                prop_oneof![
                    inner.clone().prop_map(TypeDesc::optional),
                    inner.clone().prop_map(TypeDesc::array),
                    inner.prop_map(TypeDesc::list),
                ]
            })
    }

    proptest! {
        #[test]
        fn optional_is_idempotent(t in arb_type()) {
            let once = TypeDesc::optional(t);
            prop_assert_eq!(TypeDesc::optional(once.clone()), once);
        }

        #[test]
        fn strip_undoes_optional(t in arb_type()) {
            let wrapped = TypeDesc::optional(t.clone());
            prop_assert!(wrapped.is_optional());
            prop_assert_eq!(wrapped.strip_optional(), t.strip_optional());
            prop_assert!(!wrapped.strip_optional().is_optional());
        }

        #[test]
        fn only_optional_types_admit_null(t in arb_type()) {
            let wrapped = TypeDesc::optional(t.clone());
            prop_assert!(wrapped.admits(&Value::Null));
            prop_assert_eq!(t.admits(&Value::Null), t.is_optional());
        }
    }

    #[test]
    fn optional_does_not_double_wrap() {
        let once = TypeDesc::optional(TypeDesc::INT32);
        let twice = TypeDesc::optional(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn strip_optional_removes_outer_wrapper_only() {
        let inner = TypeDesc::array(TypeDesc::optional(TypeDesc::INT32));
        let ty = TypeDesc::optional(inner.clone());
        assert_eq!(ty.strip_optional(), &inner);
        assert_eq!(inner.strip_optional(), &inner);
    }

    #[test]
    fn element_of_non_container_is_none() {
        assert!(TypeDesc::INT32.element().is_none());
        assert!(TypeDesc::optional(TypeDesc::TEXT).element().is_none());
        assert_eq!(
            TypeDesc::list(TypeDesc::TEXT).element(),
            Some(&TypeDesc::TEXT)
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(TypeDesc::array(TypeDesc::INT32).to_string(), "int32[]");
        assert_eq!(
            TypeDesc::list(TypeDesc::optional(TypeDesc::TEXT)).to_string(),
            "list<text?>"
        );
        assert_eq!(
            TypeDesc::optional(TypeDesc::array(TypeDesc::Scalar(ScalarType::Bytes))).to_string(),
            "bytes[]?"
        );
    }

    #[test]
    fn admits_null_only_when_optional() {
        assert!(!TypeDesc::INT32.admits(&Value::Null));
        assert!(TypeDesc::optional(TypeDesc::INT32).admits(&Value::Null));
        assert!(TypeDesc::optional(TypeDesc::INT32).admits(&Value::Int32(4)));
        assert!(!TypeDesc::INT32.admits(&Value::Int64(4)));
    }

    #[test]
    fn admits_containers_by_variant() {
        let list = Value::List(vec![Value::Text("x".into())]);
        assert!(TypeDesc::list(TypeDesc::INT32).admits(&list));
        assert!(!TypeDesc::array(TypeDesc::INT32).admits(&list));
    }
}
