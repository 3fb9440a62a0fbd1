//! Top-level data structure lowering (§4.4.6). Grounded on `MSONToRefract`/
//! `GetType` in `examples/original_source/src/RefractDataStructure.cc`: a
//! data structure's own type resolves through steps 1–2 only, falling back
//! straight to `object` on `Undefined` rather than running the full
//! member-level disambiguation (there is no enclosing member to borrow a
//! value count or default nested type from).

use mson_ast::{BaseTypeName, DataStructure, ElementKind};
use refract_element::{Element, Registry, Warning};

use crate::attrs::{check_clashes, lower_type_attributes};
use crate::collector::{self, Collector};
use crate::error::LoweringError;
use crate::type_resolve::{resolve_type_specification, variant_for};
use crate::type_section::fill_type_section;
use crate::value_member::{fill_nested_type_definitions, fill_values};

/// Lower one data structure. Returns `None` for the documented empty-data-
/// structure boundary case: no name, no attached value, no sections.
pub fn lower_data_structure(
    ds: &DataStructure,
    registry: &Registry,
    warnings: &mut Vec<Warning>,
) -> Result<Option<Element>, LoweringError> {
    let ElementKind::Value(vm) = &ds.element.kind else {
        return Err(LoweringError::UnknownElement { source_map: ds.element.source_map.clone() });
    };

    if ds.name.literal.is_empty() && vm.value_definition.is_none() && vm.sections.is_empty() {
        return Ok(None);
    }

    check_clashes(vm.type_definition.attributes, &ds.element.source_map, warnings);

    let base = resolve_type_specification(&vm.type_definition.specification, registry);
    let base = if base == BaseTypeName::Undefined { BaseTypeName::Object } else { base };
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

    if !ds.name.literal.is_empty() {
        element.set_meta_id(ds.name.literal.clone());
    }

    if let Some(attrs_element) = lower_type_attributes(vm.type_definition.attributes) {
        element.attributes_mut().insert("typeAttributes".to_string(), attrs_element);
    }

    element.attach_source_map(&ds.element.source_map);

    Ok(Some(element))
}

/// Lower every data structure in the batch, registering each named result
/// as it is produced so later entries in the same batch can resolve
/// symbols introduced by earlier ones (forward references fall through to
/// `object` per the registry's own unknown-name handling — see `DESIGN.md`).
pub fn lower_data_structures(
    structures: &[DataStructure],
    registry: &mut Registry,
    warnings: &mut Vec<Warning>,
) -> Result<Vec<Element>, LoweringError> {
    let mut elements = Vec::with_capacity(structures.len());

    for ds in structures.iter() {
        let Some(element) = lower_data_structure(ds, registry, warnings)? else {
            continue;
        };
        if element.meta_id().is_some() {
            let _ = registry.add(element.clone());
        }
        elements.push(element);
    }

    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mson_ast::{Identifier, SourceMap};
    use refract_element::Variant;

    fn named_ds(name: &str, literal: &str) -> DataStructure {
        DataStructure {
            name: Identifier { literal: name.to_string(), source_map: SourceMap::empty() },
            element: mson_ast::Element {
                kind: ElementKind::Value(Box::new(crate::test_support::string_value_member(literal))),
                source_map: SourceMap::empty(),
            },
        }
    }

    #[test]
    fn named_data_structure_gets_meta_id() {
        let ds = named_ds("City", "Praha");
        let registry = Registry::new();
        let mut warnings = Vec::new();
        let element = lower_data_structure(&ds, &registry, &mut warnings).unwrap().unwrap();
        assert_eq!(element.meta_id(), Some("City"));
        assert_eq!(element.variant(), Variant::String);
    }

    #[test]
    fn empty_unnamed_data_structure_is_none() {
        let ds = DataStructure {
            name: Identifier { literal: String::new(), source_map: SourceMap::empty() },
            element: mson_ast::Element {
                kind: ElementKind::Value(Box::new(mson_ast::ValueMember {
                    type_definition: mson_ast::TypeDefinition {
                        specification: mson_ast::TypeSpecification {
                            base_name: BaseTypeName::Undefined,
                            symbol: None,
                            nested_types: vec![],
                        },
                        attributes: mson_ast::TypeAttributes::empty(),
                    },
                    value_definition: None,
                    sections: vec![],
                })),
                source_map: SourceMap::empty(),
            },
        };
        let registry = Registry::new();
        let mut warnings = Vec::new();
        assert!(lower_data_structure(&ds, &registry, &mut warnings).unwrap().is_none());
    }

    #[test]
    fn named_supertype_symbol_is_carried_onto_element_name() {
        let ds = DataStructure {
            name: Identifier { literal: "Employee".to_string(), source_map: SourceMap::empty() },
            element: mson_ast::Element {
                kind: ElementKind::Value(Box::new(mson_ast::ValueMember {
                    type_definition: mson_ast::TypeDefinition {
                        specification: mson_ast::TypeSpecification {
                            base_name: BaseTypeName::Undefined,
                            symbol: Some("Person".to_string()),
                            nested_types: vec![],
                        },
                        attributes: mson_ast::TypeAttributes::empty(),
                    },
                    value_definition: None,
                    sections: vec![],
                })),
                source_map: SourceMap::empty(),
            },
        };
        let mut registry = Registry::new();
        let mut person = Element::empty(Variant::Object);
        person.set_meta_id("Person");
        person.set_value(refract_element::Value::Object(Vec::new()));
        registry.add(person).unwrap();

        let mut warnings = Vec::new();
        let element = lower_data_structure(&ds, &registry, &mut warnings).unwrap().unwrap();
        assert_eq!(element.meta_id(), Some("Employee"));
        assert_eq!(element.element_name(), "Person");
    }

    #[test]
    fn batch_registers_each_named_structure_for_later_lookups() {
        let structures = vec![named_ds("City", "Praha")];
        let mut registry = Registry::new();
        let mut warnings = Vec::new();
        let elements = lower_data_structures(&structures, &mut registry, &mut warnings).unwrap();
        assert_eq!(elements.len(), 1);
        assert!(registry.find("City").is_some());
    }
}
