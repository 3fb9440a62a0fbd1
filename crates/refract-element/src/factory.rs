//! The element factory (C3, §4.3): build a fresh element of a requested
//! base type and creation mode from a literal string. Grounded on
//! `examples/original_source/src/RefractElementFactory.cc`, whose
//! `RefractElementFactoryImpl<E, IsPrimitive>` split this module mirrors as
//! the `is_primitive` branch inside `create`.

use mson_ast::{BaseTypeName, SourceMap};

use crate::element::Element;
use crate::literal::{parse_bool, parse_number, parse_string};
use crate::value::Value;
use crate::variant::Variant;
use crate::warning::Warning;

/// Which of the three ways a literal can populate an element (§4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateMode {
    /// Parse the literal and set it as the element's own value.
    Value,
    /// Parse the literal and record it in the `samples` attribute.
    Sample,
    /// Record the literal verbatim as the element's element-name.
    Element,
}

fn variant_for(base: BaseTypeName) -> Variant {
    match base {
        BaseTypeName::Boolean => Variant::Bool,
        BaseTypeName::Number => Variant::Number,
        BaseTypeName::String => Variant::String,
        BaseTypeName::Array => Variant::Array,
        BaseTypeName::Enum => Variant::Enum,
        BaseTypeName::Object | BaseTypeName::Undefined => Variant::Object,
    }
}

fn is_primitive(variant: Variant) -> bool {
    matches!(variant, Variant::Bool | Variant::Number | Variant::String)
}

/// Build a fresh element of `base`'s target variant from `literal`
/// according to `mode` (§4.3). Any literal-parse failure for a primitive
/// target is pushed onto `warnings` rather than aborting.
pub fn create(
    base: BaseTypeName,
    literal: &str,
    mode: CreateMode,
    source_map: SourceMap,
    warnings: &mut Vec<Warning>,
) -> Element {
    let variant = variant_for(base);

    if is_primitive(variant) {
        return create_primitive(variant, literal, mode, source_map, warnings);
    }

    create_compound(variant, literal, mode)
}

fn create_primitive(
    variant: Variant,
    literal: &str,
    mode: CreateMode,
    source_map: SourceMap,
    warnings: &mut Vec<Warning>,
) -> Element {
    let mut element = Element::empty(variant);

    if literal.is_empty() {
        return element;
    }

    match mode {
        CreateMode::Sample => {
            let mut samples = Vec::new();
            if let Some(value) = parse_primitive(variant, literal) {
                samples.push(Element::with_value(variant, value));
            } else {
                warnings.push(Warning::invalid_literal(variant.reserved_name(), source_map));
            }
            element
                .attributes_mut()
                .insert("samples".to_string(), Element::with_value(Variant::Array, Value::Array(samples)));
        }
        CreateMode::Value => {
            if let Some(value) = parse_primitive(variant, literal) {
                element.set_value(value);
            } else {
                warnings.push(Warning::invalid_literal(variant.reserved_name(), source_map));
            }
        }
        CreateMode::Element => {
            element.set_element_name(literal);
        }
    }

    element
}

fn create_compound(variant: Variant, literal: &str, mode: CreateMode) -> Element {
    if mode == CreateMode::Sample {
        let mut element = Element::empty(Variant::String);
        element.set_element_name("generic");
        element.set_value(Value::String(parse_string(literal)));
        return element;
    }

    let mut element = Element::empty(variant);
    if !literal.is_empty() {
        element.set_element_name(literal);
    }
    element
}

fn parse_primitive(variant: Variant, literal: &str) -> Option<Value> {
    match variant {
        Variant::Bool => parse_bool(literal).map(Value::Bool),
        Variant::Number => parse_number(literal).map(Value::Number),
        Variant::String => Some(Value::String(parse_string(literal))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mson_ast::SourceMap;

    fn sm() -> SourceMap {
        SourceMap::empty()
    }

    #[test]
    fn primitive_value_mode_sets_value_on_success() {
        let mut warnings = Vec::new();
        let e = create(BaseTypeName::Boolean, "true", CreateMode::Value, sm(), &mut warnings);
        assert_eq!(e.value().and_then(Value::as_bool), Some(true));
        assert!(warnings.is_empty());
    }

    #[test]
    fn primitive_value_mode_leaves_empty_on_parse_failure() {
        let mut warnings = Vec::new();
        let e = create(BaseTypeName::Boolean, "maybe", CreateMode::Value, sm(), &mut warnings);
        assert!(e.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn primitive_sample_mode_sets_samples_attribute_even_on_failure() {
        let mut warnings = Vec::new();
        let e = create(BaseTypeName::Number, "nope", CreateMode::Sample, sm(), &mut warnings);
        let samples = e.attributes().get("samples").unwrap();
        assert_eq!(samples.value().and_then(Value::as_array), Some(&[][..]));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn primitive_element_mode_sets_name_regardless_of_parse() {
        let mut warnings = Vec::new();
        let e = create(BaseTypeName::Number, "MyNumber", CreateMode::Element, sm(), &mut warnings);
        assert_eq!(e.element_name(), "MyNumber");
        assert!(e.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn compound_sample_mode_returns_generic_string() {
        let mut warnings = Vec::new();
        let e = create(BaseTypeName::Object, "anything at all", CreateMode::Sample, sm(), &mut warnings);
        assert_eq!(e.variant(), Variant::String);
        assert_eq!(e.element_name(), "generic");
        assert_eq!(e.value().and_then(Value::as_string), Some("anything at all"));
    }

    #[test]
    fn compound_value_mode_sets_name_when_literal_present() {
        let mut warnings = Vec::new();
        let e = create(BaseTypeName::Array, "Ingredients", CreateMode::Value, sm(), &mut warnings);
        assert_eq!(e.variant(), Variant::Array);
        assert_eq!(e.element_name(), "Ingredients");
        assert!(e.is_empty());
    }

    #[test]
    fn undefined_base_type_maps_to_object() {
        let mut warnings = Vec::new();
        let e = create(BaseTypeName::Undefined, "", CreateMode::Value, sm(), &mut warnings);
        assert_eq!(e.variant(), Variant::Object);
    }
}
