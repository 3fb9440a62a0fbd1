//! Small MSON AST builders shared by this crate's unit tests.

use mson_ast::{
    BaseTypeName, Element, ElementKind, MsonValue, OneOfAlternative, OneOfAlternativeKind, SourceMap, TypeAttributes,
    TypeDefinition, TypeSpecification, ValueDefinition, ValueMember,
};

pub fn string_value_member(literal: &str) -> ValueMember {
    ValueMember {
        type_definition: TypeDefinition {
            specification: TypeSpecification { base_name: BaseTypeName::String, symbol: None, nested_types: vec![] },
            attributes: TypeAttributes::empty(),
        },
        value_definition: Some(ValueDefinition {
            values: vec![MsonValue {
                literal: literal.to_string(),
                variable: false,
                nested_type: None,
                source_map: SourceMap::empty(),
            }],
        }),
        sections: vec![],
    }
}

pub fn string_value_element(literal: &str) -> Element {
    Element {
        kind: ElementKind::Value(Box::new(string_value_member(literal))),
        source_map: SourceMap::empty(),
    }
}

pub fn group_alternative() -> OneOfAlternative {
    OneOfAlternative { kind: OneOfAlternativeKind::Group(vec![string_value_element("a")]) }
}

pub fn element_alternative() -> OneOfAlternative {
    OneOfAlternative { kind: OneOfAlternativeKind::Element(Box::new(string_value_element("b"))) }
}
