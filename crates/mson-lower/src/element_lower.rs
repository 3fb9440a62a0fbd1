//! Per-element dispatch (§4.4): the lowering entry point for a single MSON
//! node, whatever its kind. Grounded on `MsonElementToRefract` in
//! `examples/original_source/src/RefractDataStructure.cc`.

use mson_ast::{BaseTypeName, ElementKind, PropertyMember, SourceMap, ValueMember};
use refract_element::{Element, Registry, Value, Variant, Warning};

use crate::attrs::{check_clashes, lower_type_attributes};
use crate::collector::{self, Collector};
use crate::error::LoweringError;
use crate::oneof_mixin::{lower_mixin, lower_one_of};
use crate::property::lower_property_key;
use crate::type_section::fill_type_section;
use crate::type_resolve::{resolve_member_variant, variant_for};
use crate::value_member::{fill_nested_type_definitions, fill_values};

/// Lower one MSON node. `default_nested_type` is the enclosing collection's
/// declared nested type (§4.4.1's disambiguation fallback); top-level
/// callers pass `BaseTypeName::String`, the grammar's own default.
pub fn lower_element(
    element: &mson_ast::Element,
    registry: &Registry,
    warnings: &mut Vec<Warning>,
    default_nested_type: BaseTypeName,
) -> Result<Element, LoweringError> {
    match &element.kind {
        ElementKind::Mixin(mixin) => Ok(lower_mixin(mixin)),
        ElementKind::OneOf(one_of) => lower_one_of(one_of, registry, warnings, default_nested_type),
        ElementKind::Value(value_member) => {
            lower_value_member(value_member, &element.source_map, registry, warnings, default_nested_type)
        }
        ElementKind::Property(property_member) => {
            lower_property_member(property_member, &element.source_map, registry, warnings, default_nested_type)
        }
    }
}

/// `RefractElementFromValue<T>`: resolve the target variant, run the three
/// fill rules into a fresh `Collector`, finalize it, then attach the
/// member's own name/type-attributes/source map.
pub fn lower_value_member(
    vm: &ValueMember,
    source_map: &SourceMap,
    registry: &Registry,
    warnings: &mut Vec<Warning>,
    default_nested_type: BaseTypeName,
) -> Result<Element, LoweringError> {
    check_clashes(vm.type_definition.attributes, source_map, warnings);

    let base = resolve_member_variant(
        &vm.type_definition,
        vm.value_definition.as_ref(),
        &vm.sections,
        registry,
        default_nested_type,
    );
    let variant = variant_for(base);

    let mut collector = Collector::default();
    fill_values(&vm.type_definition, vm.value_definition.as_ref(), variant, registry, &mut collector, warnings)?;
    fill_nested_type_definitions(
        &vm.type_definition,
        vm.value_definition.as_ref(),
        registry,
        &mut collector,
        warnings,
    );
    for section in &vm.sections {
        fill_type_section(section, &vm.type_definition, variant, registry, &mut collector, warnings)?;
    }

    let mut element = collector::finalize(variant, collector, warnings);

    if let Some(symbol) = &vm.type_definition.specification.symbol {
        element.set_element_name(symbol.clone());
    }

    if let Some(attrs_element) = lower_type_attributes(vm.type_definition.attributes) {
        element.attributes_mut().insert("typeAttributes".to_string(), attrs_element);
    }

    element.attach_source_map(source_map);

    Ok(element)
}

/// `RefractElementFromProperty`: build the property's key, lower its value
/// member, and wrap both in a `member` element.
pub fn lower_property_member(
    pm: &PropertyMember,
    source_map: &SourceMap,
    registry: &Registry,
    warnings: &mut Vec<Warning>,
    default_nested_type: BaseTypeName,
) -> Result<Element, LoweringError> {
    let key = lower_property_key(&pm.keys, registry, warnings)?;
    let value = lower_value_member(&pm.value, source_map, registry, warnings, default_nested_type)?;

    let mut member = Element::with_value(Variant::Member, Value::Member { key: Box::new(key), value: Box::new(value) });
    member.attach_source_map(source_map);

    Ok(member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mson_ast::{
        Identifier, PropertyKey, PropertyKeys, TypeAttributes, TypeDefinition, TypeSpecification, ValueDefinition,
    };
    use refract_element::Value;

    fn ident(literal: &str) -> Identifier {
        Identifier { literal: literal.to_string(), source_map: SourceMap::empty() }
    }

    fn string_value_member(literal: &str) -> ValueMember {
        ValueMember {
            type_definition: TypeDefinition {
                specification: TypeSpecification {
                    base_name: BaseTypeName::String,
                    symbol: None,
                    nested_types: vec![],
                },
                attributes: TypeAttributes::empty(),
            },
            value_definition: Some(ValueDefinition {
                values: vec![mson_ast::MsonValue {
                    literal: literal.to_string(),
                    variable: false,
                    nested_type: None,
                    source_map: SourceMap::empty(),
                }],
            }),
            sections: vec![],
        }
    }

    #[test]
    fn bare_value_member_lowers_to_string_element() {
        let vm = string_value_member("Praha");
        let registry = Registry::new();
        let mut warnings = Vec::new();
        let element =
            lower_value_member(&vm, &SourceMap::empty(), &registry, &mut warnings, BaseTypeName::String).unwrap();
        assert_eq!(element.variant(), Variant::String);
        assert_eq!(element.value().and_then(Value::as_string), Some("Praha"));
    }

    #[test]
    fn property_member_wraps_key_and_value() {
        let pm = PropertyMember {
            keys: PropertyKeys(vec![PropertyKey { identifier: ident("city"), variable: false, variable_type: None }]),
            value: string_value_member("Praha"),
        };
        let registry = Registry::new();
        let mut warnings = Vec::new();
        let member =
            lower_property_member(&pm, &SourceMap::empty(), &registry, &mut warnings, BaseTypeName::String).unwrap();
        assert_eq!(member.variant(), Variant::Member);
        let (key, value) = member.value().and_then(Value::as_member).unwrap();
        assert_eq!(key.value().and_then(Value::as_string), Some("city"));
        assert_eq!(value.value().and_then(Value::as_string), Some("Praha"));
    }

    #[test]
    fn symbol_on_type_specification_sets_element_name() {
        let mut vm = string_value_member("Praha");
        vm.type_definition.specification.symbol = Some("City".to_string());
        let registry = Registry::new();
        let mut warnings = Vec::new();
        let element =
            lower_value_member(&vm, &SourceMap::empty(), &registry, &mut warnings, BaseTypeName::String).unwrap();
        assert_eq!(element.element_name(), "City");
    }
}
