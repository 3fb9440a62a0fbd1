//! Type-section fill rule 3 (§4.4.2 step 3): nested blocks under a value
//! member, classified by `TypeSectionClass`. Grounded on `ExtractTypeSection`
//! in `examples/original_source/src/RefractDataStructure.cc`.

use mson_ast::{MsonValue, SourceMap, TypeDefinition, TypeSection, TypeSectionClass};
use refract_element::{Element, Registry, Variant, Warning};

use crate::collector::{is_primitive, Collector, ElementInfo};
use crate::element_lower::lower_element;
use crate::error::LoweringError;
use crate::type_resolve::select_nested_type;
use crate::value_member::lower_inline_value;

/// Run one nested section against `collector`. Member-class sections
/// recurse into `element_lower::lower_element` for each nested node;
/// sample/default-class sections convert their literals the same way a
/// member's own inline value would; block descriptions accumulate text;
/// an unrecognized class is a hard `UnknownSection` error (§7).
pub fn fill_type_section(
    section: &TypeSection,
    type_definition: &TypeDefinition,
    variant: Variant,
    registry: &Registry,
    collector: &mut Collector,
    warnings: &mut Vec<Warning>,
) -> Result<(), LoweringError> {
    match &section.class {
        TypeSectionClass::Member(elements) => {
            let default_nested_type = select_nested_type(&type_definition.specification.nested_types, registry);
            let mut children = Vec::with_capacity(elements.len());
            for element in elements {
                children.push(lower_element(element, registry, warnings, default_nested_type)?);
            }
            let info = ElementInfo::children(children, section.source_map.clone());
            if variant == Variant::Enum {
                collector.enumerations.push(info);
            } else {
                collector.values.push(info);
            }
        }
        TypeSectionClass::Sample(values) => {
            push_literal_section(values, type_definition, variant, registry, &mut collector.samples, warnings);
        }
        TypeSectionClass::Default(values) => {
            push_literal_section(values, type_definition, variant, registry, &mut collector.defaults, warnings);
        }
        TypeSectionClass::BlockDescription(text) => {
            collector.descriptions.push((text.clone(), section.source_map.clone()));
        }
        TypeSectionClass::Unknown(class) => {
            return Err(LoweringError::UnknownSection { class: class.clone(), source_map: section.source_map.clone() });
        }
    }

    Ok(())
}

fn push_literal_section(
    values: &[MsonValue],
    type_definition: &TypeDefinition,
    variant: Variant,
    registry: &Registry,
    bucket: &mut Vec<ElementInfo>,
    warnings: &mut Vec<Warning>,
) {
    if values.is_empty() {
        return;
    }

    if is_primitive(variant) {
        for value in values {
            bucket.push(ElementInfo::literal(value.literal.clone(), value.source_map.clone()));
        }
        return;
    }

    let nested_base = select_nested_type(&type_definition.specification.nested_types, registry);
    let children: Vec<Element> = values.iter().map(|value| lower_inline_value(nested_base, value, warnings)).collect();
    let source_map = values.iter().fold(SourceMap::empty(), |acc, v| acc.join(&v.source_map));
    bucket.push(ElementInfo::children(children, source_map));
}
