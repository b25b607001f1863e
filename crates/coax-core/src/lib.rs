//! Core types and traits for the Coax value-conversion framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Coax workspace:
//! type descriptors, the dynamic value model, the converter trait,
//! and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod converter;
pub mod error;
pub mod types;
pub mod value;

pub use converter::{FnConverter, ValueConverter};
pub use error::{ContainerRole, ConversionError, ConverterError};
pub use types::{ScalarType, TypeDesc};
pub use value::{Value, ValueKind};
