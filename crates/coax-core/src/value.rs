//! The dynamic [`Value`] model passed between the host and converters.

use std::fmt;

/// A runtime value in either model or provider representation.
///
/// Optional values are not boxed: a present optional value is stored as
/// the bare inner value and an absent one as [`Value::Null`]. `Null` is
/// therefore the absent representation of every type.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An absent value or a null container.
    Null,
    /// A boolean.
    Bool(bool),
    /// A 16-bit signed integer.
    Int16(i16),
    /// A 32-bit signed integer.
    Int32(i32),
    /// A 64-bit signed integer.
    Int64(i64),
    /// A 32-bit float.
    Float32(f32),
    /// A 64-bit float.
    Float64(f64),
    /// UTF-8 text.
    Text(String),
    /// An opaque byte string.
    Bytes(Vec<u8>),
    /// A fixed-size indexed container.
    Array(Box<[Value]>),
    /// A dynamically-sized ordered sequence.
    List(Vec<Value>),
}

/// Variant tag of a [`Value`], used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`].
    Null,
    /// [`Value::Bool`].
    Bool,
    /// [`Value::Int16`].
    Int16,
    /// [`Value::Int32`].
    Int32,
    /// [`Value::Int64`].
    Int64,
    /// [`Value::Float32`].
    Float32,
    /// [`Value::Float64`].
    Float64,
    /// [`Value::Text`].
    Text,
    /// [`Value::Bytes`].
    Bytes,
    /// [`Value::Array`].
    Array,
    /// [`Value::List`].
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Array => "array",
            Self::List => "list",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Build a fixed-size array from an iterator of values.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build a dynamic list from an iterator of values.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// The variant tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int16(_) => ValueKind::Int16,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
            Self::Text(_) => ValueKind::Text,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Array(_) => ValueKind::Array,
            Self::List(_) => ValueKind::List,
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The elements of an array or list, in index order.
    ///
    /// Returns `None` for null and scalar values.
    pub fn elements(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(&items[..]),
            Self::List(items) => Some(&items[..]),
            _ => None,
        }
    }

    /// Number of elements of an array or list.
    pub fn len(&self) -> Option<usize> {
        self.elements().map(<[Value]>::len)
    }

    /// Returns `true` if this is a container with no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// The integer payload of an [`Value::Int32`].
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// The text payload of a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    String => Text,
    Vec<u8> => Bytes,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
