//! Benchmark profiles and utilities for the Coax conversion framework.
//!
//! Provides deterministic input containers for benchmarking:
//!
//! - [`int_array`]: a fixed-size array of `n` consecutive integers
//! - [`sparse_int_list`]: a list of `n` optional integers with periodic nulls
//! - [`int_text_pair`]: model/provider container types for int32 ↔ text

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use coax_array::ShapeKind;
use coax_core::{TypeDesc, Value};

/// Build a fixed-size array holding `0..n` as `int32`.
///
/// Element values are the indices themselves, so `n` is an `i32`; a
/// non-positive `n` yields an empty array.
pub fn int_array(n: i32) -> Value {
    Value::Array((0..n).map(Value::Int32).collect())
}

/// Build a list of `n` optional integers where every `null_every`-th
/// element is null.
///
/// A non-positive `null_every` produces no nulls.
pub fn sparse_int_list(n: i32, null_every: i32) -> Value {
    Value::List(
        (0..n)
            .map(|i| {
                if null_every > 0 && i % null_every == 0 {
                    Value::Null
                } else {
                    Value::Int32(i)
                }
            })
            .collect(),
    )
}

/// Model and provider container types for an int32 ↔ text converter.
///
/// `optional` wraps both element types as optional.
pub fn int_text_pair(
    model: ShapeKind,
    provider: ShapeKind,
    optional: bool,
) -> (TypeDesc, TypeDesc) {
    let wrap = |ty: TypeDesc| if optional { TypeDesc::optional(ty) } else { ty };
    let container = |kind: ShapeKind, element: TypeDesc| match kind {
        ShapeKind::Array => TypeDesc::array(element),
        ShapeKind::List => TypeDesc::list(element),
    };
    (
        container(model, wrap(TypeDesc::INT32)),
        container(provider, wrap(TypeDesc::TEXT)),
    )
}
