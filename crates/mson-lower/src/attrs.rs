//! Type-attribute bitset lowering (§4.4.4) and its clash warnings.
//! Grounded on `MsonTypeAttributesToRefract`/`CheckTypeAttributesClash` in
//! `examples/original_source/src/RefractDataStructure.cc`.

use mson_ast::{SourceMap, TypeAttributes};
use refract_element::{Element, Value, Variant, Warning};

/// `ta` lowered to an array element naming its set bits, in the fixed order
/// `required, optional, fixed, fixedType, nullable` — `None` if no bit is
/// set. `default`/`sample` are handled by the value-fill rules, not here.
pub fn lower_type_attributes(ta: TypeAttributes) -> Option<Element> {
    if ta.is_empty() {
        return None;
    }

    let mut names = Vec::new();
    if ta.contains(TypeAttributes::REQUIRED) {
        names.push("required");
    }
    if ta.contains(TypeAttributes::OPTIONAL) {
        names.push("optional");
    }
    if ta.contains(TypeAttributes::FIXED) {
        names.push("fixed");
    }
    if ta.contains(TypeAttributes::FIXED_TYPE) {
        names.push("fixedType");
    }
    if ta.contains(TypeAttributes::NULLABLE) {
        names.push("nullable");
    }

    if names.is_empty() {
        return None;
    }

    let items = names
        .into_iter()
        .map(|name| Element::with_value(Variant::String, Value::String(name.to_string())))
        .collect();

    Some(Element::with_value(Variant::Array, Value::Array(items)))
}

/// Warn on each conflicting pair present in `ta`; both bits are kept
/// (§7 `AttrClash`: warn, keep both).
pub fn check_clashes(ta: TypeAttributes, source_map: &SourceMap, warnings: &mut Vec<Warning>) {
    let pairs: &[(TypeAttributes, &str, TypeAttributes, &str)] = &[
        (TypeAttributes::FIXED, "fixed", TypeAttributes::OPTIONAL, "optional"),
        (TypeAttributes::REQUIRED, "required", TypeAttributes::OPTIONAL, "optional"),
        (TypeAttributes::DEFAULT, "default", TypeAttributes::SAMPLE, "sample"),
        (TypeAttributes::FIXED, "fixed", TypeAttributes::FIXED_TYPE, "fixedType"),
    ];

    for (a, a_name, b, b_name) in pairs {
        if ta.contains(*a) && ta.contains(*b) {
            warnings.push(Warning::attr_clash(a_name, b_name, source_map.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refract_element::Value;

    #[test]
    fn empty_attrs_lower_to_none() {
        assert!(lower_type_attributes(TypeAttributes::empty()).is_none());
    }

    #[test]
    fn attrs_lower_in_fixed_order() {
        let ta = TypeAttributes::NULLABLE | TypeAttributes::REQUIRED | TypeAttributes::FIXED;
        let element = lower_type_attributes(ta).unwrap();
        let names: Vec<_> = element
            .value()
            .and_then(Value::as_array)
            .unwrap()
            .iter()
            .map(|e| e.value().and_then(Value::as_string).unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["required", "fixed", "nullable"]);
    }

    #[test]
    fn clash_pairs_warn_but_keep_both_bits() {
        let ta = TypeAttributes::FIXED | TypeAttributes::OPTIONAL;
        let mut warnings = Vec::new();
        check_clashes(ta, &SourceMap::empty(), &mut warnings);
        assert_eq!(warnings.len(), 1);
        assert!(ta.contains(TypeAttributes::FIXED) && ta.contains(TypeAttributes::OPTIONAL));
    }
}
