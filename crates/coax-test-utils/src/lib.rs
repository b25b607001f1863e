//! Test utilities and element-converter fixtures for Coax development.
//!
//! Provides concrete [`ValueConverter`] implementations for tests and
//! benchmarks: [`IntTextConverter`] (integer ↔ decimal text) plus the
//! instrumented wrappers in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use coax_core::{ConversionError, TypeDesc, Value, ValueConverter};

pub mod fixtures;

pub use fixtures::{CountingConverter, FailingConverter};

/// Converts `int32` model values to their decimal `text` representation.
///
/// `from_provider` parses the text back and fails with
/// [`ConversionError::InvalidValue`] on anything that is not a valid
/// `i32` literal.
#[derive(Debug)]
pub struct IntTextConverter {
    model: TypeDesc,
    provider: TypeDesc,
}

impl IntTextConverter {
    pub fn new() -> Self {
        Self {
            model: TypeDesc::INT32,
            provider: TypeDesc::TEXT,
        }
    }
}

impl Default for IntTextConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueConverter for IntTextConverter {
    fn model_type(&self) -> &TypeDesc {
        &self.model
    }

    fn provider_type(&self) -> &TypeDesc {
        &self.provider
    }

    fn to_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        match value {
            Value::Int32(n) => Ok(Value::Text(n.to_string())),
            other => Err(ConversionError::UnexpectedValue {
                expected: self.model.clone(),
                found: other.kind(),
            }),
        }
    }

    fn from_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        match value {
            Value::Text(s) => s
                .parse::<i32>()
                .map(Value::Int32)
                .map_err(|e| ConversionError::InvalidValue {
                    reason: format!("'{s}' is not an int32: {e}"),
                }),
            other => Err(ConversionError::UnexpectedValue {
                expected: self.provider.clone(),
                found: other.kind(),
            }),
        }
    }
}

/// Shorthand for `Value::Text(s.to_owned())`.
pub fn text(s: &str) -> Value {
    Value::Text(s.to_owned())
}
