use refract_element::{Element, Value, Variant};

/// Conservatively flags any subtree that contains at least one named-type
/// element or non-empty `ref` (§4.5). Only `original_source`'s
/// `IsExpandableVisitor.h` header survived retrieval — no body — so this is
/// authored directly from that predicate's stated behavior rather than
/// transliterated: an element is expandable if it is itself a named type,
/// a populated reference, or recursively contains one.
pub fn is_expandable(element: &Element) -> bool {
    if !element.is_reserved_name() {
        return true;
    }

    if element.variant() == Variant::Ref {
        return matches!(element.value(), Some(Value::Ref(symbol)) if !symbol.is_empty());
    }

    match element.value() {
        None => false,
        Some(
            Value::Array(items) | Value::Object(items) | Value::Extend(items)
            | Value::Option(items) | Value::Select(items),
        ) => items.iter().any(is_expandable),
        Some(Value::Member { key, value }) => is_expandable(key) || is_expandable(value),
        Some(Value::Enum(inner)) => is_expandable(inner),
        Some(Value::Holder(_) | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)) => {
            false
        }
        Some(Value::Ref(_)) => false,
    }
}
