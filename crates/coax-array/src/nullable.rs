//! Null passthrough for element functions over optional element types.

use std::sync::Arc;

use coax_core::{TypeDesc, Value};

use crate::builder::ElementFn;

/// Adapt `element_fn` to the nullability of the element types on either side.
///
/// When `input_element` or `output_element` is optional, the returned
/// function maps `Null` to `Null` without calling `element_fn` and forwards
/// every other value. Checking both sides keeps the two directions of a
/// converter in agreement: nulls written by one direction are read back by
/// the other. When neither side is optional, `element_fn` is returned
/// unchanged.
///
/// Optional values are stored unwrapped, so the result of `element_fn` is
/// already a valid value of the output type.
pub fn normalize(
    element_fn: ElementFn,
    input_element: &TypeDesc,
    output_element: &TypeDesc,
) -> ElementFn {
    if !input_element.is_optional() && !output_element.is_optional() {
        return element_fn;
    }
    Arc::new(move |value: &Value| {
        if value.is_null() {
            Ok(Value::Null)
        } else {
            element_fn(value)
        }
    })
}
