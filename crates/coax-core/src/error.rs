//! Error types for the Coax conversion framework.
//!
//! Split by phase: [`ConverterError`] is raised once, while an array
//! converter is being constructed; [`ConversionError`] is raised per call,
//! by element converters and by the synthesized container functions.

use std::error::Error;
use std::fmt;

use crate::types::TypeDesc;
use crate::value::ValueKind;

/// Which of the two container types an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerRole {
    /// The application-facing container type.
    Model,
    /// The storage-facing container type.
    Provider,
}

impl fmt::Display for ContainerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => write!(f, "model"),
            Self::Provider => write!(f, "provider"),
        }
    }
}

/// Errors from constructing an array converter.
///
/// Construction fails on the first violated invariant; no conversion
/// function is built when an error is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConverterError {
    /// A supplied type is neither a fixed-size array nor a dynamic list.
    InvalidShape {
        /// Which of the two supplied types failed.
        role: ContainerRole,
        /// The offending type.
        ty: TypeDesc,
    },
    /// A container's element type (outer optional stripped) differs from
    /// the element converter's declared type on that side.
    ElementTypeMismatch {
        /// Which side disagrees.
        role: ContainerRole,
        /// The container's element type as supplied.
        element: TypeDesc,
        /// The type declared by the element converter.
        expected: TypeDesc,
    },
}

impl fmt::Display for ConverterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { role, ty } => {
                write!(f, "{role} type '{ty}' is not an array or list type")
            }
            Self::ElementTypeMismatch {
                role,
                element,
                expected,
            } => {
                write!(
                    f,
                    "{role} element type '{element}' does not match element converter type '{expected}'"
                )
            }
        }
    }
}

impl Error for ConverterError {}

/// Errors from converting a single value.
///
/// Returned by element converters and propagated unchanged by the
/// container functions, which abort on the first failing element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionError {
    /// The value is not of the type the converter was declared over.
    UnexpectedValue {
        /// The declared input type.
        expected: TypeDesc,
        /// The variant actually received.
        found: ValueKind,
    },
    /// The value has the right type but cannot be represented on the
    /// other side (overflow, unparsable text, ...).
    InvalidValue {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedValue { expected, found } => {
                write!(f, "expected a value of type '{expected}', found {found}")
            }
            Self::InvalidValue { reason } => write!(f, "invalid value: {reason}"),
        }
    }
}

impl Error for ConversionError {}
