//! Type resolution (§4.4.1): deciding which Refract variant a value member
//! lowers into.

use mson_ast::{BaseTypeName, TypeDefinition, TypeSectionClass, TypeSpecification, ValueDefinition};
use refract_element::{Registry, Variant};

/// The Refract variant a resolved base type name lowers into (mirrors the
/// factory's own mapping; duplicated here since it is not exported from
/// `refract-element` and disambiguation needs it before a value is built).
pub fn variant_for(base: BaseTypeName) -> Variant {
    match base {
        BaseTypeName::Boolean => Variant::Bool,
        BaseTypeName::Number => Variant::Number,
        BaseTypeName::String => Variant::String,
        BaseTypeName::Array => Variant::Array,
        BaseTypeName::Enum => Variant::Enum,
        BaseTypeName::Object | BaseTypeName::Undefined => Variant::Object,
    }
}

/// Full member-level type resolution (§4.4.1 steps 1–3 plus disambiguation):
/// an explicit or registry-resolved base type wins outright; otherwise fall
/// back to `disambiguate_member` using the member's own value count, symbol,
/// and member-class sections.
pub fn resolve_member_variant(
    type_definition: &TypeDefinition,
    value_definition: Option<&ValueDefinition>,
    sections: &[mson_ast::TypeSection],
    registry: &Registry,
    default_nested_type: BaseTypeName,
) -> BaseTypeName {
    let base = resolve_type_specification(&type_definition.specification, registry);
    if base != BaseTypeName::Undefined {
        return base;
    }

    let has_multiple_values = value_definition.map(|vd| vd.values.len() > 1).unwrap_or(false);
    let has_symbol_or_nested_members = type_definition.specification.symbol.is_some()
        || sections.iter().any(|s| matches!(s.class, TypeSectionClass::Member(_)));

    disambiguate_member(has_multiple_values, has_symbol_or_nested_members, Some(default_nested_type))
}

/// Steps 1–3 of §4.4.1: resolve a type specification to a base type name,
/// falling back to the registry when only a symbol is given. Returns
/// `BaseTypeName::Undefined` if nothing resolves it, leaving member-level
/// disambiguation (`disambiguate_member`) to decide.
pub fn resolve_type_specification(spec: &TypeSpecification, registry: &Registry) -> BaseTypeName {
    if spec.base_name != BaseTypeName::Undefined {
        return spec.base_name;
    }

    if let Some(symbol) = &spec.symbol {
        if let Some(ancestor) = registry.root_ancestor(symbol) {
            return base_type_name_of(ancestor.variant());
        }
    }

    BaseTypeName::Undefined
}

fn base_type_name_of(variant: Variant) -> BaseTypeName {
    match variant {
        Variant::Bool => BaseTypeName::Boolean,
        Variant::Number => BaseTypeName::Number,
        Variant::String => BaseTypeName::String,
        Variant::Array => BaseTypeName::Array,
        Variant::Enum => BaseTypeName::Enum,
        // Any other reserved/named root ancestor (object, or a named type
        // whose own chain bottoms out somewhere non-primitive) is treated
        // as object, matching the factory's own Object/Undefined merge.
        _ => BaseTypeName::Object,
    }
}

/// Member-level disambiguation, run only when `resolve_type_specification`
/// returned `Undefined` (§4.4.1, the four bullet points below its numbered
/// steps).
pub fn disambiguate_member(
    has_multiple_values: bool,
    has_symbol_or_nested_members: bool,
    parent_default: Option<BaseTypeName>,
) -> BaseTypeName {
    if has_multiple_values {
        return BaseTypeName::Array;
    }
    if has_symbol_or_nested_members {
        return BaseTypeName::Object;
    }
    if let Some(default) = parent_default {
        if default != BaseTypeName::Undefined {
            return default;
        }
    }
    BaseTypeName::String
}

fn base_type_name_by_keyword(name: &str) -> Option<BaseTypeName> {
    match name {
        "boolean" => Some(BaseTypeName::Boolean),
        "number" => Some(BaseTypeName::Number),
        "string" => Some(BaseTypeName::String),
        "array" => Some(BaseTypeName::Array),
        "enum" => Some(BaseTypeName::Enum),
        "object" => Some(BaseTypeName::Object),
        _ => None,
    }
}

/// `SelectNestedTypeSpecification`: the single nested-type name's base
/// type, used when converting literal values attached directly to a
/// compound/enum value member (§4.4.2 step 1's "Compound target" bullet).
/// Falls back to `String` when zero or more than one nested type is named.
pub fn select_nested_type(nested_types: &[String], registry: &Registry) -> BaseTypeName {
    if nested_types.len() != 1 {
        return BaseTypeName::String;
    }

    base_type_name_of_name(&nested_types[0], registry)
}

fn base_type_name_of_name(name: &str, registry: &Registry) -> BaseTypeName {
    if let Some(base) = base_type_name_by_keyword(name) {
        return base;
    }

    registry.root_ancestor(name).map(base_type_name_of).unwrap_or(BaseTypeName::Object)
}

/// Whether `name` is itself a registered named type (as opposed to a
/// reserved base-type keyword) — decides the factory mode (§4.4.2 step 2).
pub fn is_named_type(name: &str) -> bool {
    base_type_name_by_keyword(name).is_none()
}

/// The base type a nested-type-definition name resolves to, whether it
/// names a reserved keyword or a registered type (§4.4.2 step 2).
pub fn nested_type_base(name: &str, registry: &Registry) -> BaseTypeName {
    base_type_name_of_name(name, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use refract_element::Element;

    #[test]
    fn explicit_base_name_wins() {
        let registry = Registry::new();
        let spec = TypeSpecification { base_name: BaseTypeName::Number, symbol: None, nested_types: vec![] };
        assert_eq!(resolve_type_specification(&spec, &registry), BaseTypeName::Number);
    }

    #[test]
    fn symbol_resolves_through_registry() {
        let mut registry = Registry::new();
        let mut e = Element::empty(Variant::String);
        e.set_meta_id("Name");
        registry.add(e).unwrap();

        let spec = TypeSpecification {
            base_name: BaseTypeName::Undefined,
            symbol: Some("Name".to_string()),
            nested_types: vec![],
        };
        assert_eq!(resolve_type_specification(&spec, &registry), BaseTypeName::String);
    }

    #[test]
    fn unresolvable_symbol_stays_undefined() {
        let registry = Registry::new();
        let spec = TypeSpecification {
            base_name: BaseTypeName::Undefined,
            symbol: Some("Missing".to_string()),
            nested_types: vec![],
        };
        assert_eq!(resolve_type_specification(&spec, &registry), BaseTypeName::Undefined);
    }

    #[test]
    fn disambiguation_prefers_multiple_values_over_everything() {
        assert_eq!(
            disambiguate_member(true, true, Some(BaseTypeName::String)),
            BaseTypeName::Array
        );
    }

    #[test]
    fn disambiguation_falls_back_to_string() {
        assert_eq!(disambiguate_member(false, false, None), BaseTypeName::String);
    }
}
