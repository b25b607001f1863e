//! The [`ArrayConverter`] facade: validation plus the two built functions.

use std::fmt;
use std::sync::Arc;

use coax_core::{
    ContainerRole, ConversionError, ConverterError, TypeDesc, Value, ValueConverter,
};

use crate::builder::{build, ConversionFn, ElementFn};
use crate::config::ConverterConfig;
use crate::nullable::normalize;
use crate::shape::ContainerShape;

/// Converts whole containers by applying an element converter pointwise.
///
/// Validation and function synthesis happen once, in
/// [`new`](Self::new) / [`with_config`](Self::with_config); afterwards
/// [`to_provider`](Self::to_provider) and
/// [`from_provider`](Self::from_provider) can be called any number of
/// times, from any number of threads, without re-validation.
///
/// `ArrayConverter` is itself a [`ValueConverter`] over its container
/// types, so it can be the element converter of another `ArrayConverter`
/// for nested containers. As a `ValueConverter` it reports the plain
/// container types, without any outer optional wrapper given at
/// construction, so it matches element types the same way any scalar
/// converter does.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use coax_array::ArrayConverter;
/// use coax_core::{FnConverter, ConversionError, TypeDesc, Value};
///
/// let int_text = Arc::new(FnConverter::new(
///     TypeDesc::INT32,
///     TypeDesc::TEXT,
///     |v| Ok(Value::Text(v.as_i32().unwrap_or_default().to_string())),
///     |v| {
///         let s = v.as_text().unwrap_or_default();
///         s.parse::<i32>().map(Value::Int32).map_err(|e| ConversionError::InvalidValue {
///             reason: format!("'{s}': {e}"),
///         })
///     },
/// ));
///
/// let conv = ArrayConverter::new(
///     TypeDesc::array(TypeDesc::INT32),
///     TypeDesc::list(TypeDesc::TEXT),
///     int_text,
/// )
/// .unwrap();
///
/// assert_eq!(
///     conv.to_provider(&Value::array([1, 2, 3])),
///     Ok(Value::list(["1", "2", "3"]))
/// );
/// assert_eq!(conv.to_provider(&Value::Null), Ok(Value::Null));
/// ```
#[derive(Clone)]
pub struct ArrayConverter {
    model_type: TypeDesc,
    provider_type: TypeDesc,
    model_container: TypeDesc,
    provider_container: TypeDesc,
    element: Arc<dyn ValueConverter>,
    to_provider: ConversionFn,
    from_provider: ConversionFn,
}

impl ArrayConverter {
    /// Build a converter with the default [`ConverterConfig`].
    pub fn new(
        model_type: TypeDesc,
        provider_type: TypeDesc,
        element: Arc<dyn ValueConverter>,
    ) -> Result<Self, ConverterError> {
        Self::with_config(model_type, provider_type, element, &ConverterConfig::default())
    }

    /// Validate the container types against `element` and build both
    /// conversion functions.
    ///
    /// Checks run in order and the first failure is returned:
    /// 1. both types are containers ([`ConverterError::InvalidShape`]);
    /// 2. the model element type, outer optional stripped, equals
    ///    `element.model_type()`;
    /// 3. the provider element type, outer optional stripped, equals
    ///    `element.provider_type()`.
    pub fn with_config(
        model_type: TypeDesc,
        provider_type: TypeDesc,
        element: Arc<dyn ValueConverter>,
        config: &ConverterConfig,
    ) -> Result<Self, ConverterError> {
        let (model_shape, provider_shape) =
            validate(&model_type, &provider_type, element.as_ref()).inspect_err(|err| {
                tracing::debug!(%model_type, %provider_type, %err, "array converter rejected");
            })?;

        let forward: ElementFn = {
            let element = Arc::clone(&element);
            Arc::new(move |value: &Value| element.to_provider(value))
        };
        let backward: ElementFn = {
            let element = Arc::clone(&element);
            Arc::new(move |value: &Value| element.from_provider(value))
        };

        let to_provider = build(
            &model_shape,
            &provider_shape,
            normalize(forward, &model_shape.element, &provider_shape.element),
            config.input_shape,
        );
        let from_provider = build(
            &provider_shape,
            &model_shape,
            normalize(backward, &provider_shape.element, &model_shape.element),
            config.input_shape,
        );

        tracing::debug!(
            %model_type,
            %provider_type,
            model_shape = ?model_shape.kind,
            provider_shape = ?provider_shape.kind,
            "built array converter"
        );

        Ok(Self {
            model_type,
            provider_type,
            model_container: model_shape.to_type(),
            provider_container: provider_shape.to_type(),
            element,
            to_provider,
            from_provider,
        })
    }

    /// Convert a model container (or `Null`) to its provider representation.
    pub fn to_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        self.to_provider.call(value)
    }

    /// Convert a provider container (or `Null`) back to the model representation.
    pub fn from_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        self.from_provider.call(value)
    }

    /// The built model-to-provider function.
    pub fn to_provider_fn(&self) -> &ConversionFn {
        &self.to_provider
    }

    /// The built provider-to-model function.
    pub fn from_provider_fn(&self) -> &ConversionFn {
        &self.from_provider
    }

    /// The model container type, as given at construction.
    pub fn model_type(&self) -> &TypeDesc {
        &self.model_type
    }

    /// The provider container type, as given at construction.
    pub fn provider_type(&self) -> &TypeDesc {
        &self.provider_type
    }

    /// The element converter applied to every element.
    pub fn element_converter(&self) -> &Arc<dyn ValueConverter> {
        &self.element
    }
}

/// Resolve both shapes and check their element types against `element`.
fn validate(
    model_type: &TypeDesc,
    provider_type: &TypeDesc,
    element: &dyn ValueConverter,
) -> Result<(ContainerShape, ContainerShape), ConverterError> {
    let model_shape = resolve(ContainerRole::Model, model_type)?;
    let provider_shape = resolve(ContainerRole::Provider, provider_type)?;
    check_element(ContainerRole::Model, &model_shape, element.model_type())?;
    check_element(ContainerRole::Provider, &provider_shape, element.provider_type())?;
    Ok((model_shape, provider_shape))
}

fn resolve(role: ContainerRole, ty: &TypeDesc) -> Result<ContainerShape, ConverterError> {
    ContainerShape::describe(ty).ok_or_else(|| ConverterError::InvalidShape {
        role,
        ty: ty.clone(),
    })
}

fn check_element(
    role: ContainerRole,
    shape: &ContainerShape,
    expected: &TypeDesc,
) -> Result<(), ConverterError> {
    if shape.element.strip_optional() == expected {
        Ok(())
    } else {
        Err(ConverterError::ElementTypeMismatch {
            role,
            element: shape.element.clone(),
            expected: expected.clone(),
        })
    }
}

impl ValueConverter for ArrayConverter {
    fn model_type(&self) -> &TypeDesc {
        &self.model_container
    }

    fn provider_type(&self) -> &TypeDesc {
        &self.provider_container
    }

    fn to_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        self.to_provider.call(value)
    }

    fn from_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        self.from_provider.call(value)
    }
}

impl fmt::Debug for ArrayConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayConverter")
            .field("model_type", &self.model_type)
            .field("provider_type", &self.provider_type)
            .field("to_provider", &self.to_provider)
            .field("from_provider", &self.from_provider)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coax_core::{FnConverter, ScalarType};

    fn identity(ty: TypeDesc) -> Arc<dyn ValueConverter> {
        Arc::new(FnConverter::new(
            ty.clone(),
            ty,
            |v| Ok(v.clone()),
            |v| Ok(v.clone()),
        ))
    }

    #[test]
    fn model_shape_checked_first() {
        let err = ArrayConverter::new(TypeDesc::INT32, TypeDesc::TEXT, identity(TypeDesc::TEXT))
            .unwrap_err();
        assert_eq!(
            err,
            ConverterError::InvalidShape {
                role: ContainerRole::Model,
                ty: TypeDesc::INT32,
            }
        );
    }

    #[test]
    fn provider_shape_checked_before_element_types() {
        let err = ArrayConverter::new(
            TypeDesc::list(TypeDesc::TEXT),
            TypeDesc::optional(TypeDesc::INT32),
            identity(TypeDesc::INT32),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConverterError::InvalidShape {
                role: ContainerRole::Provider,
                ..
            }
        ));
    }

    #[test]
    fn provider_element_mismatch() {
        let bytes = TypeDesc::Scalar(ScalarType::Bytes);
        let err = ArrayConverter::new(
            TypeDesc::array(TypeDesc::INT32),
            TypeDesc::array(bytes.clone()),
            identity(TypeDesc::INT32),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConverterError::ElementTypeMismatch {
                role: ContainerRole::Provider,
                element: bytes,
                expected: TypeDesc::INT32,
            }
        );
    }

    #[test]
    fn optional_elements_on_both_sides_accepted() {
        let opt = TypeDesc::optional(TypeDesc::INT32);
        let conv = ArrayConverter::new(
            TypeDesc::list(opt.clone()),
            TypeDesc::array(opt),
            identity(TypeDesc::INT32),
        )
        .unwrap();
        let input = Value::list([Some(1), None]);
        let out = conv.to_provider(&input).unwrap();
        assert_eq!(out, Value::array([Some(1), None]));
        assert_eq!(conv.from_provider(&out), Ok(input));
    }

    #[test]
    fn accessors_expose_construction_inputs() {
        let model = TypeDesc::array(TypeDesc::TEXT);
        let provider = TypeDesc::list(TypeDesc::TEXT);
        let conv =
            ArrayConverter::new(model.clone(), provider.clone(), identity(TypeDesc::TEXT)).unwrap();
        assert_eq!(conv.model_type(), &model);
        assert_eq!(conv.provider_type(), &provider);
        assert_eq!(conv.element_converter().model_type(), &TypeDesc::TEXT);
        assert_eq!(
            conv.to_provider_fn().output_kind(),
            crate::shape::ShapeKind::List
        );
        assert_eq!(
            conv.from_provider_fn().output_kind(),
            crate::shape::ShapeKind::Array
        );
    }

    #[test]
    fn element_view_drops_outer_optional() {
        let model = TypeDesc::optional(TypeDesc::array(TypeDesc::INT32));
        let provider = TypeDesc::optional(TypeDesc::list(TypeDesc::INT32));
        let conv = ArrayConverter::new(model.clone(), provider.clone(), identity(TypeDesc::INT32))
            .unwrap();
        assert_eq!(conv.model_type(), &model);
        assert_eq!(conv.provider_type(), &provider);

        let as_element: &dyn ValueConverter = &conv;
        assert_eq!(as_element.model_type(), &TypeDesc::array(TypeDesc::INT32));
        assert_eq!(as_element.provider_type(), &TypeDesc::list(TypeDesc::INT32));
    }

    #[test]
    fn built_functions_report_declared_input_shape() {
        let conv = ArrayConverter::new(
            TypeDesc::optional(TypeDesc::list(TypeDesc::optional(TypeDesc::INT32))),
            TypeDesc::array(TypeDesc::INT32),
            identity(TypeDesc::INT32),
        )
        .unwrap();
        let forward = conv.to_provider_fn().input_shape();
        assert_eq!(forward.kind, crate::shape::ShapeKind::List);
        assert_eq!(forward.element, TypeDesc::optional(TypeDesc::INT32));
        let backward = conv.from_provider_fn().input_shape();
        assert_eq!(backward.kind, crate::shape::ShapeKind::Array);
        assert_eq!(backward.element, TypeDesc::INT32);
    }

    #[test]
    fn converter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArrayConverter>();
        assert_send_sync::<ConversionFn>();
    }
}
