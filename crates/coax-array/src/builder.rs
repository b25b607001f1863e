//! Container conversion function synthesis.
//!
//! [`build`] turns an input shape, an output shape, and an element function
//! into a [`ConversionFn`]: a reusable, stateless function mapping a whole
//! container value to a freshly allocated container of the other shape.
//! Shape decisions are made once at build time; each call is a single
//! ascending pass over the input elements.

use std::fmt;
use std::sync::Arc;

use coax_core::{ConversionError, Value};

use crate::config::InputShapePolicy;
use crate::shape::{ContainerShape, ShapeKind};

/// A per-element conversion, shared between every call of a [`ConversionFn`].
pub type ElementFn = Arc<dyn Fn(&Value) -> Result<Value, ConversionError> + Send + Sync>;

/// Synthesized container-to-container conversion.
///
/// Cloning is cheap (the element function is reference-counted) and the
/// function is `Send + Sync`, so it can be handed to any number of threads.
#[derive(Clone)]
pub struct ConversionFn {
    input: ContainerShape,
    output: ShapeKind,
    policy: InputShapePolicy,
    element: ElementFn,
}

/// Build the conversion from `input`-shaped containers to `output`-shaped
/// containers, applying `element_fn` to every element.
///
/// `element_fn` is used as given; wrap it with
/// [`normalize`](crate::nullable::normalize) first when either element
/// type is optional.
pub fn build(
    input: &ContainerShape,
    output: &ContainerShape,
    element_fn: ElementFn,
    policy: InputShapePolicy,
) -> ConversionFn {
    ConversionFn {
        input: input.clone(),
        output: output.kind,
        policy,
        element: element_fn,
    }
}

impl ConversionFn {
    /// Convert one container value.
    ///
    /// `Null` maps to `Null` without allocating. Otherwise the output has
    /// exactly the input's length and element `i` of the output is the
    /// converted element `i` of the input. The first element failure is
    /// returned as is and no partial output is produced.
    pub fn call(&self, value: &Value) -> Result<Value, ConversionError> {
        let Some(elements) = self.input_elements(value)? else {
            return Ok(Value::Null);
        };

        // Sized once from the input; `into_boxed_slice` on a full Vec does not reallocate.
        let mut converted = Vec::with_capacity(elements.len());
        for element in elements {
            converted.push((self.element)(element)?);
        }

        Ok(match self.output {
            ShapeKind::Array => Value::Array(converted.into_boxed_slice()),
            ShapeKind::List => Value::List(converted),
        })
    }

    /// The declared input shape.
    pub fn input_shape(&self) -> &ContainerShape {
        &self.input
    }

    /// The layout of every produced container.
    pub fn output_kind(&self) -> ShapeKind {
        self.output
    }

    /// Resolve the input to its element slice, or `None` for a null container.
    fn input_elements<'v>(
        &self,
        value: &'v Value,
    ) -> Result<Option<&'v [Value]>, ConversionError> {
        if value.is_null() {
            return Ok(None);
        }
        let accepted = match (self.policy, value) {
            (InputShapePolicy::AnySequence, _) => true,
            (InputShapePolicy::Declared, Value::Array(_)) => self.input.kind == ShapeKind::Array,
            (InputShapePolicy::Declared, Value::List(_)) => self.input.kind == ShapeKind::List,
            (InputShapePolicy::Declared, _) => false,
        };
        match value.elements() {
            Some(elements) if accepted => Ok(Some(elements)),
            _ => Err(ConversionError::UnexpectedValue {
                expected: self.input.to_type(),
                found: value.kind(),
            }),
        }
    }
}

impl fmt::Debug for ConversionFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionFn")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
