//! Property tests for synthesized container conversions.

use std::sync::Arc;

use coax_array::ArrayConverter;
use coax_core::{TypeDesc, Value};
use coax_test_utils::IntTextConverter;
use proptest::prelude::*;

fn arb_container_type(element: TypeDesc) -> impl Strategy<Value = TypeDesc> {
    any::<bool>().prop_map(move |fixed| {
        if fixed {
            TypeDesc::array(element.clone())
        } else {
            TypeDesc::list(element.clone())
        }
    })
}

fn wrap(ty: &TypeDesc, items: Vec<Value>) -> Value {
    match ty {
        TypeDesc::Array(_) => Value::Array(items.into_boxed_slice()),
        _ => Value::List(items),
    }
}

proptest! {
    #[test]
    fn forward_is_pointwise_and_round_trips(
        items in prop::collection::vec(any::<i32>(), 0..48),
        model in arb_container_type(TypeDesc::INT32),
        provider in arb_container_type(TypeDesc::TEXT),
    ) {
        let conv = ArrayConverter::new(model.clone(), provider, Arc::new(IntTextConverter::new()))
            .unwrap();
        let input = wrap(&model, items.iter().copied().map(Value::Int32).collect());

        let stored = conv.to_provider(&input).unwrap();
        let stored_elements = stored.elements().unwrap();
        prop_assert_eq!(stored_elements.len(), items.len());
        for (i, n) in items.iter().enumerate() {
            prop_assert_eq!(&stored_elements[i], &Value::Text(n.to_string()));
        }

        prop_assert_eq!(conv.from_provider(&stored).unwrap(), input);
    }

    #[test]
    fn optional_elements_keep_their_nulls_in_place(
        items in prop::collection::vec(proptest::option::of(any::<i32>()), 0..48),
        model in arb_container_type(TypeDesc::optional(TypeDesc::INT32)),
        provider in arb_container_type(TypeDesc::optional(TypeDesc::TEXT)),
    ) {
        let conv = ArrayConverter::new(model.clone(), provider, Arc::new(IntTextConverter::new()))
            .unwrap();
        let input = wrap(&model, items.iter().copied().map(Value::from).collect());

        let stored = conv.to_provider(&input).unwrap();
        let stored_elements = stored.elements().unwrap();
        prop_assert_eq!(stored_elements.len(), items.len());
        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(stored_elements[i].is_null(), item.is_none());
        }

        prop_assert_eq!(conv.from_provider(&stored).unwrap(), input);
    }

    #[test]
    fn optional_on_one_side_still_round_trips(
        items in prop::collection::vec(proptest::option::of(any::<i32>()), 0..48),
        optional_model in any::<bool>(),
        model_kind in arb_container_type(TypeDesc::INT32),
        provider_kind in arb_container_type(TypeDesc::TEXT),
    ) {
        let (model, provider) = if optional_model {
            (rewrap(&model_kind, TypeDesc::optional(TypeDesc::INT32)), provider_kind)
        } else {
            (model_kind, rewrap(&provider_kind, TypeDesc::optional(TypeDesc::TEXT)))
        };
        let conv = ArrayConverter::new(model.clone(), provider, Arc::new(IntTextConverter::new()))
            .unwrap();
        let input = wrap(&model, items.iter().copied().map(Value::from).collect());

        let stored = conv.to_provider(&input).unwrap();
        prop_assert_eq!(conv.from_provider(&stored).unwrap(), input);
    }
}

/// Same container kind as `ty`, with `element` as its element type.
fn rewrap(ty: &TypeDesc, element: TypeDesc) -> TypeDesc {
    match ty {
        TypeDesc::Array(_) => TypeDesc::array(element),
        _ => TypeDesc::list(element),
    }
}
