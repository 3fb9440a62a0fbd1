//! Value-member fill rules 1–2 (§4.4.2 steps 1–2). Grounded on
//! `ExtractValueMember`/`ExtractTypeDefinition` in
//! `examples/original_source/src/RefractDataStructure.cc`.

use mson_ast::{MsonValue, SourceMap, TypeAttributes, TypeDefinition, ValueDefinition};
use refract_element::{create, CreateMode, Element, Registry, Variant, Warning};

use crate::collector::{is_primitive, Collector, ElementInfo};
use crate::error::LoweringError;
use crate::type_resolve::{is_named_type, nested_type_base, select_nested_type};

/// Fill rule 1 (§4.4.2 step 1): literal values attached directly to the
/// member. A primitive target takes at most one literal, deferred to
/// `Collector::finalize` for parsing; a compound/enum target converts each
/// literal through the factory using the member's single declared nested
/// type (default `string`) right away.
pub fn fill_values(
    type_definition: &TypeDefinition,
    value_definition: Option<&ValueDefinition>,
    variant: Variant,
    registry: &Registry,
    collector: &mut Collector,
    warnings: &mut Vec<Warning>,
) -> Result<(), LoweringError> {
    let Some(vd) = value_definition else {
        return Ok(());
    };
    if vd.values.is_empty() {
        return Ok(());
    }

    if is_primitive(variant) {
        if vd.values.len() > 1 {
            return Err(LoweringError::TooManyValues { source_map: vd.values[0].source_map.clone() });
        }
        let value = &vd.values[0];
        let info = ElementInfo::literal(value.literal.clone(), value.source_map.clone());
        push_by_attrs(collector, type_definition.attributes, info);
        return Ok(());
    }

    let nested_base = select_nested_type(&type_definition.specification.nested_types, registry);
    let children: Vec<Element> = vd
        .values
        .iter()
        .map(|value| lower_inline_value(nested_base, value, warnings))
        .collect();
    let source_map = join_source_maps(&vd.values);
    push_by_attrs(collector, type_definition.attributes, ElementInfo::children(children, source_map));

    Ok(())
}

pub(crate) fn lower_inline_value(base: mson_ast::BaseTypeName, value: &MsonValue, warnings: &mut Vec<Warning>) -> Element {
    let mode = if value.variable { CreateMode::Sample } else { CreateMode::Value };
    create(base, &value.literal, mode, value.source_map.clone(), warnings)
}

fn push_by_attrs(collector: &mut Collector, attrs: TypeAttributes, info: ElementInfo) {
    if attrs.contains(TypeAttributes::DEFAULT) {
        collector.defaults.push(info);
    } else if attrs.contains(TypeAttributes::SAMPLE) {
        collector.samples.push(info);
    } else {
        collector.values.push(info);
    }
}

fn join_source_maps(values: &[MsonValue]) -> SourceMap {
    values.iter().fold(SourceMap::empty(), |acc, v| acc.join(&v.source_map))
}

/// Fill rule 2 (§4.4.2 step 2): nested type-parameter names (`enum[T1,
/// T2]`, `array[Ingredient]`) materialized as placeholder elements, run
/// only when `value_definition` contributed nothing or named more than one
/// type — matching `values.empty() || nestedTypes.size() > 1` in the
/// reference visitor.
pub fn fill_nested_type_definitions(
    type_definition: &TypeDefinition,
    value_definition: Option<&ValueDefinition>,
    registry: &Registry,
    collector: &mut Collector,
    warnings: &mut Vec<Warning>,
) {
    let nested_types = &type_definition.specification.nested_types;
    if nested_types.is_empty() {
        return;
    }

    let values_present = value_definition.map(|vd| !vd.values.is_empty()).unwrap_or(false);
    if values_present && nested_types.len() <= 1 {
        return;
    }

    let children = nested_types.iter().map(|name| lower_nested_type_name(name, registry, warnings)).collect();

    collector.values.push(ElementInfo::children(children, SourceMap::empty()));
}

fn lower_nested_type_name(name: &str, registry: &Registry, warnings: &mut Vec<Warning>) -> Element {
    let base = nested_type_base(name, registry);
    if is_named_type(name) {
        create(base, name, CreateMode::Element, SourceMap::empty(), warnings)
    } else {
        create(base, "", CreateMode::Value, SourceMap::empty(), warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mson_ast::{BaseTypeName, TypeSpecification};
    use refract_element::Value;

    fn type_def(base: BaseTypeName, nested: Vec<&str>) -> TypeDefinition {
        TypeDefinition {
            specification: TypeSpecification {
                base_name: base,
                symbol: None,
                nested_types: nested.into_iter().map(String::from).collect(),
            },
            attributes: TypeAttributes::empty(),
        }
    }

    fn mv(literal: &str) -> MsonValue {
        MsonValue { literal: literal.to_string(), variable: false, nested_type: None, source_map: SourceMap::empty() }
    }

    #[test]
    fn single_primitive_value_goes_to_values_bucket() {
        let td = type_def(BaseTypeName::String, vec![]);
        let vd = ValueDefinition { values: vec![mv("Praha")] };
        let registry = Registry::new();
        let mut collector = Collector::default();
        let mut warnings = Vec::new();
        fill_values(&td, Some(&vd), Variant::String, &registry, &mut collector, &mut warnings).unwrap();
        assert_eq!(collector.values.len(), 1);
    }

    #[test]
    fn multiple_primitive_values_is_an_error() {
        let td = type_def(BaseTypeName::String, vec![]);
        let vd = ValueDefinition { values: vec![mv("a"), mv("b")] };
        let registry = Registry::new();
        let mut collector = Collector::default();
        let mut warnings = Vec::new();
        let result = fill_values(&td, Some(&vd), Variant::String, &registry, &mut collector, &mut warnings);
        assert!(matches!(result, Err(LoweringError::TooManyValues { .. })));
    }

    #[test]
    fn compound_values_convert_through_factory_with_nested_type() {
        let td = type_def(BaseTypeName::Array, vec!["number"]);
        let vd = ValueDefinition { values: vec![mv("1"), mv("2")] };
        let registry = Registry::new();
        let mut collector = Collector::default();
        let mut warnings = Vec::new();
        fill_values(&td, Some(&vd), Variant::Array, &registry, &mut collector, &mut warnings).unwrap();
        let info = &collector.values[0];
        let crate::collector::BucketValue::Children(children) = &info.value else { panic!() };
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].value().and_then(Value::as_number), Some(1.0));
    }

    #[test]
    fn nested_type_definitions_skipped_when_single_value_given() {
        let td = type_def(BaseTypeName::Enum, vec!["string"]);
        let vd = ValueDefinition { values: vec![mv("a")] };
        let registry = Registry::new();
        let mut collector = Collector::default();
        let mut warnings = Vec::new();
        fill_nested_type_definitions(&td, Some(&vd), &registry, &mut collector, &mut warnings);
        assert!(collector.values.is_empty());
    }

    #[test]
    fn nested_type_definitions_run_when_no_values_given() {
        let td = type_def(BaseTypeName::Enum, vec!["string", "number"]);
        let registry = Registry::new();
        let mut collector = Collector::default();
        let mut warnings = Vec::new();
        fill_nested_type_definitions(&td, None, &registry, &mut collector, &mut warnings);
        assert_eq!(collector.values.len(), 1);
        let crate::collector::BucketValue::Children(children) = &collector.values[0].value else { panic!() };
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn named_nested_type_creates_element_mode() {
        let mut registry = Registry::new();
        let mut named = Element::empty(Variant::Object);
        named.set_meta_id("Ingredient");
        registry.add(named).unwrap();

        let child = lower_nested_type_name("Ingredient", &registry, &mut Vec::new());
        assert_eq!(child.element_name(), "Ingredient");
        assert_eq!(child.variant(), Variant::Object);
        assert!(child.is_empty());
    }
}
