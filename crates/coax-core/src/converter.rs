//! The [`ValueConverter`] trait and a closure-backed implementation.

use std::fmt;

use crate::error::ConversionError;
use crate::types::TypeDesc;
use crate::value::Value;

/// A bidirectional conversion between one model type and one provider type.
///
/// Used as the element converter of an array converter. Implementations
/// only need to handle non-null values of their declared types; null
/// elements of optional containers are passed through before the
/// converter is reached.
///
/// Implementations must be pure: the same input always yields the same
/// output, and calls may happen concurrently from several threads.
pub trait ValueConverter: Send + Sync {
    /// The model-side type this converter accepts in
    /// [`to_provider`](Self::to_provider).
    fn model_type(&self) -> &TypeDesc;

    /// The provider-side type this converter produces.
    fn provider_type(&self) -> &TypeDesc;

    /// Convert a model value to its provider representation.
    fn to_provider(&self, value: &Value) -> Result<Value, ConversionError>;

    /// Convert a provider value back to its model representation.
    fn from_provider(&self, value: &Value) -> Result<Value, ConversionError>;
}

type ConvertFn = Box<dyn Fn(&Value) -> Result<Value, ConversionError> + Send + Sync>;

/// A [`ValueConverter`] assembled from two closures.
///
/// Inputs the declared type does not admit (including `Null` for a
/// non-optional type) are rejected with
/// [`ConversionError::UnexpectedValue`] before the closure runs.
///
/// # Examples
///
/// ```
/// use coax_core::{ConversionError, FnConverter, TypeDesc, Value, ValueConverter};
///
/// let negate = FnConverter::new(
///     TypeDesc::INT32,
///     TypeDesc::INT32,
///     |v| Ok(Value::Int32(-v.as_i32().unwrap_or_default())),
///     |v| Ok(Value::Int32(-v.as_i32().unwrap_or_default())),
/// );
/// assert_eq!(negate.to_provider(&Value::Int32(4)), Ok(Value::Int32(-4)));
/// assert!(matches!(
///     negate.to_provider(&Value::Null),
///     Err(ConversionError::UnexpectedValue { .. })
/// ));
/// ```
pub struct FnConverter {
    model: TypeDesc,
    provider: TypeDesc,
    forward: ConvertFn,
    backward: ConvertFn,
}

impl FnConverter {
    /// Create a converter from its declared types and the two directions.
    pub fn new<F, B>(model: TypeDesc, provider: TypeDesc, forward: F, backward: B) -> Self
    where
        F: Fn(&Value) -> Result<Value, ConversionError> + Send + Sync + 'static,
        B: Fn(&Value) -> Result<Value, ConversionError> + Send + Sync + 'static,
    {
        Self {
            model,
            provider,
            forward: Box::new(forward),
            backward: Box::new(backward),
        }
    }
}

fn check_admits(ty: &TypeDesc, value: &Value) -> Result<(), ConversionError> {
    if ty.admits(value) {
        Ok(())
    } else {
        Err(ConversionError::UnexpectedValue {
            expected: ty.clone(),
            found: value.kind(),
        })
    }
}

impl ValueConverter for FnConverter {
    fn model_type(&self) -> &TypeDesc {
        &self.model
    }

    fn provider_type(&self) -> &TypeDesc {
        &self.provider
    }

    fn to_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        check_admits(&self.model, value)?;
        (self.forward)(value)
    }

    fn from_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        check_admits(&self.provider, value)?;
        (self.backward)(value)
    }
}

impl fmt::Debug for FnConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConverter")
            .field("model", &self.model)
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    fn widen() -> FnConverter {
        FnConverter::new(
            TypeDesc::INT32,
            TypeDesc::Scalar(crate::ScalarType::Int64),
            |v| Ok(Value::Int64(i64::from(v.as_i32().unwrap_or_default()))),
            |v| match v {
                Value::Int64(n) => i32::try_from(*n)
                    .map(Value::Int32)
                    .map_err(|_| ConversionError::InvalidValue {
                        reason: format!("{n} does not fit in int32"),
                    }),
                _ => unreachable!("admission checked before the closure"),
            },
        )
    }

    #[test]
    fn forward_and_backward() {
        let c = widen();
        assert_eq!(c.to_provider(&Value::Int32(5)), Ok(Value::Int64(5)));
        assert_eq!(c.from_provider(&Value::Int64(-9)), Ok(Value::Int32(-9)));
    }

    #[test]
    fn rejects_wrong_variant() {
        let c = widen();
        assert_eq!(
            c.to_provider(&Value::Text("5".into())),
            Err(ConversionError::UnexpectedValue {
                expected: TypeDesc::INT32,
                found: ValueKind::Text,
            })
        );
    }

    #[test]
    fn closure_errors_propagate() {
        let c = widen();
        assert!(matches!(
            c.from_provider(&Value::Int64(i64::MAX)),
            Err(ConversionError::InvalidValue { .. })
        ));
    }
}
