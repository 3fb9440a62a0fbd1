//! One-of and mixin lowering (§4.4.5). Grounded on `MsonOneofToRefract`/
//! `MsonMixinToRefract` in
//! `examples/original_source/src/RefractDataStructure.cc`.

use mson_ast::{BaseTypeName, Mixin, OneOf, OneOfAlternativeKind};
use refract_element::{Element, Registry, Value, Variant, Warning};

use crate::element_lower::lower_element;
use crate::error::LoweringError;

/// `OneOf` → a `select` of one `option` per alternative (§4.4.5). A
/// group-class alternative contributes its children directly into the
/// option's value; any other alternative contributes one lowered element.
/// `default_nested_type` is the enclosing member's declared nested type,
/// carried through unchanged to every alternative (§4.4.1's disambiguation
/// fallback).
pub fn lower_one_of(
    one_of: &OneOf,
    registry: &Registry,
    warnings: &mut Vec<Warning>,
    default_nested_type: BaseTypeName,
) -> Result<Element, LoweringError> {
    let mut options = Vec::with_capacity(one_of.alternatives.len());

    for alternative in &one_of.alternatives {
        let children = match &alternative.kind {
            OneOfAlternativeKind::Group(elements) => {
                let mut lowered = Vec::with_capacity(elements.len());
                for element in elements {
                    lowered.push(lower_element(element, registry, warnings, default_nested_type)?);
                }
                lowered
            }
            OneOfAlternativeKind::Element(element) => {
                vec![lower_element(element, registry, warnings, default_nested_type)?]
            }
        };

        options.push(Element::with_value(Variant::Option, Value::Option(children)));
    }

    Ok(Element::with_value(Variant::Select, Value::Select(options)))
}

/// `Mixin` → a `ref` with `path = "content"` (§4.4.5).
pub fn lower_mixin(mixin: &Mixin) -> Element {
    let mut ref_element = Element::with_value(Variant::Ref, Value::Ref(mixin.symbol.clone()));
    ref_element
        .attributes_mut()
        .insert("path".to_string(), Element::with_value(Variant::String, Value::String("content".to_string())));
    ref_element.attach_source_map(&mixin.source_map);
    ref_element
}
