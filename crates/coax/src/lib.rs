//! Coax: container converters synthesized from element converters.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Coax sub-crates. For most users, adding `coax` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use coax::prelude::*;
//!
//! // Element converter: int32 model values stored as int64.
//! let widen = FnConverter::new(
//!     TypeDesc::INT32,
//!     TypeDesc::Scalar(ScalarType::Int64),
//!     |v| Ok(Value::Int64(i64::from(v.as_i32().unwrap_or_default()))),
//!     |v| match v {
//!         Value::Int64(n) => i32::try_from(*n)
//!             .map(Value::Int32)
//!             .map_err(|_| ConversionError::InvalidValue { reason: format!("{n} overflows int32") }),
//!         other => Err(ConversionError::UnexpectedValue {
//!             expected: TypeDesc::Scalar(ScalarType::Int64),
//!             found: other.kind(),
//!         }),
//!     },
//! );
//!
//! // Optional int32 elements in a fixed array, stored as a list.
//! let conv = ArrayConverter::new(
//!     TypeDesc::array(TypeDesc::optional(TypeDesc::INT32)),
//!     TypeDesc::list(TypeDesc::optional(TypeDesc::Scalar(ScalarType::Int64))),
//!     Arc::new(widen),
//! )
//! .unwrap();
//!
//! let stored = conv.to_provider(&Value::array([Some(1), None, Some(3)])).unwrap();
//! assert_eq!(stored, Value::list([Some(1i64), None, Some(3i64)]));
//! assert_eq!(conv.from_provider(&stored).unwrap(), Value::array([Some(1), None, Some(3)]));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `coax-core` | Type descriptors, values, the converter trait, errors |
//! | [`array`] | `coax-array` | Shape classification, null passthrough, function builder, `ArrayConverter` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`coax-core`).
///
/// Contains [`types::TypeDesc`], [`types::Value`], the
/// [`types::ValueConverter`] trait, and the error enums.
pub use coax_core as types;

/// Container conversion (`coax-array`).
///
/// Build [`array::ArrayConverter`]s from an element converter, or use the
/// lower-level [`array::build`] and [`array::normalize`] directly.
pub use coax_array as array;

/// Common imports for typical Coax usage.
///
/// ```rust
/// use coax::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use coax_core::{FnConverter, ScalarType, TypeDesc, Value, ValueConverter, ValueKind};

    // Errors
    pub use coax_core::{ContainerRole, ConversionError, ConverterError};

    // Array conversion
    pub use coax_array::{
        ArrayConverter, ContainerShape, ConversionFn, ConverterConfig, InputShapePolicy,
        ShapeKind,
    };
}
