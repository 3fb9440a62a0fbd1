//! Property member key construction (§4.4.3). Grounded on `GetPropertyKey`
//! in `examples/original_source/src/RefractDataStructure.cc`.

use mson_ast::{BaseTypeName, PropertyKeys, SourceMap};
use refract_element::{Element, Registry, Value, Variant, Warning};

use crate::error::LoweringError;

/// Build the `string` key element for a property member, handling the
/// `variable` modifier (§4.4.3). `keys` holds every key candidate parsed
/// off the property's name; a variable property yields more than one only
/// when the source text genuinely declares alternatives.
pub fn lower_property_key(
    keys: &PropertyKeys,
    registry: &Registry,
    warnings: &mut Vec<Warning>,
) -> Result<Element, LoweringError> {
    let candidates = &keys.0;

    let variable_keys: Vec<_> = candidates.iter().filter(|k| k.variable).collect();

    let mut key = Element::empty(Variant::String);
    let mut source_map = SourceMap::empty();

    if let Some(first_variable) = variable_keys.first() {
        if variable_keys.len() > 1 {
            warnings.push(Warning {
                text: "multiple variables in property definition is not implemented".to_string(),
                kind: refract_element::WarningKind::Mson,
                source_map: first_variable.identifier.source_map.clone(),
            });
        }

        if let Some(spec) = &first_variable.variable_type {
            if !variable_is_string_subtype(spec, registry) {
                return Err(LoweringError::BadVariableKey {
                    source_map: first_variable.identifier.source_map.clone(),
                });
            }
            if let Some(symbol) = &spec.symbol {
                key.set_element_name(symbol.clone());
            }
        }

        key.attributes_mut().insert("variable".to_string(), Element::with_value(Variant::Bool, Value::Bool(true)));
        key.set_value(Value::String(first_variable.identifier.literal.clone()));
        source_map = source_map.join(&first_variable.identifier.source_map);
    }

    if let Some(literal_key) = candidates.iter().find(|k| !k.variable) {
        key.set_value(Value::String(literal_key.identifier.literal.clone()));
        source_map = source_map.join(&literal_key.identifier.source_map);
    }

    key.attach_source_map(&source_map);

    Ok(key)
}

fn variable_is_string_subtype(spec: &mson_ast::TypeSpecification, registry: &Registry) -> bool {
    if spec.base_name == BaseTypeName::String {
        return true;
    }

    if spec.base_name != BaseTypeName::Undefined {
        return false;
    }

    match &spec.symbol {
        None => true,
        Some(symbol) => registry
            .root_ancestor(symbol)
            .map(|ancestor| ancestor.variant() == Variant::String)
            .unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mson_ast::{Identifier, PropertyKey, TypeSpecification};

    fn ident(literal: &str) -> Identifier {
        Identifier { literal: literal.to_string(), source_map: SourceMap::empty() }
    }

    #[test]
    fn plain_key_becomes_string_value() {
        let keys = PropertyKeys(vec![PropertyKey { identifier: ident("city"), variable: false, variable_type: None }]);
        let registry = Registry::new();
        let mut warnings = Vec::new();
        let key = lower_property_key(&keys, &registry, &mut warnings).unwrap();
        assert_eq!(key.value().and_then(Value::as_string), Some("city"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn variable_key_sets_variable_attribute() {
        let keys =
            PropertyKeys(vec![PropertyKey { identifier: ident("id"), variable: true, variable_type: None }]);
        let registry = Registry::new();
        let mut warnings = Vec::new();
        let key = lower_property_key(&keys, &registry, &mut warnings).unwrap();
        assert_eq!(key.attributes().get("variable").and_then(|e| e.value()).and_then(Value::as_bool), Some(true));
    }

    #[test]
    fn non_string_variable_type_fails() {
        let keys = PropertyKeys(vec![PropertyKey {
            identifier: ident("id"),
            variable: true,
            variable_type: Some(TypeSpecification {
                base_name: BaseTypeName::Number,
                symbol: None,
                nested_types: vec![],
            }),
        }]);
        let registry = Registry::new();
        let mut warnings = Vec::new();
        assert!(matches!(
            lower_property_key(&keys, &registry, &mut warnings),
            Err(LoweringError::BadVariableKey { .. })
        ));
    }

    #[test]
    fn multiple_variables_warns_and_uses_first() {
        let keys = PropertyKeys(vec![
            PropertyKey { identifier: ident("a"), variable: true, variable_type: None },
            PropertyKey { identifier: ident("b"), variable: true, variable_type: None },
        ]);
        let registry = Registry::new();
        let mut warnings = Vec::new();
        let key = lower_property_key(&keys, &registry, &mut warnings).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(key.value().and_then(Value::as_string), Some("a"));
    }
}
