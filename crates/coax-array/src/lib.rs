//! Array and list converters synthesized from element converters.
//!
//! Given a model container type, a provider container type, and a
//! [`ValueConverter`](coax_core::ValueConverter) between their element
//! types, [`ArrayConverter`] validates the pairing once and builds two
//! reusable functions that convert whole containers element by element.
//!
//! # Architecture
//!
//! ```text
//! ArrayConverter (validation, facade)
//! ├── ContainerShape::describe  (type → Array | List + element type)
//! ├── nullable::normalize       (null passthrough for optional elements)
//! └── builder::build            (shape pair + element fn → ConversionFn)
//! ```
//!
//! Every supported pairing (array↔array, array↔list, list↔array,
//! list↔list) goes through the same builder; only the output allocation
//! differs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod converter;
pub mod nullable;
pub mod shape;

pub use builder::{build, ConversionFn, ElementFn};
pub use config::{ConverterConfig, InputShapePolicy};
pub use converter::ArrayConverter;
pub use nullable::normalize;
pub use shape::{ContainerShape, ShapeKind};
