use refract_element::{Element, Variant};

use crate::attrs::FixedCtx;
use crate::builder::{array_elem, literal_json, null_elem, string_elem, Builder};

/// Primitive conversion (`Null`, `Bool`, `Number`, `String`): `"type"` is
/// always emitted regardless of whether the element carries a value;
/// `"enum"` with the element's own literal value is added only when
/// `fctx.fixed` is set. Unlike array conversion, emptiness never
/// suppresses `"type"` here — matching the reference visitor's
/// `primitiveType<T>`, which gates only the enum candidate on `fixed`.
/// `Null`'s `"type"` is the literal JSON value `null`, not the string
/// `"null"`.
pub fn convert(element: &Element, fctx: FixedCtx) -> Element {
    let mut builder = Builder::new();

    if element.variant() == Variant::Null {
        builder.insert("type", null_elem());
    } else {
        builder.insert("type", string_elem(type_name(element.variant())));
    }

    if fctx.fixed && !element.is_empty() {
        builder.insert("enum", array_elem(vec![literal_json(element)]));
    }

    builder.build()
}

fn type_name(variant: Variant) -> &'static str {
    match variant {
        Variant::Bool => "boolean",
        Variant::Number => "number",
        Variant::String => "string",
        other => unreachable!("primitive::convert called with non-primitive variant {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refract_element::Value;

    #[test]
    fn empty_string_still_gets_type() {
        let e = Element::empty(Variant::String);
        let schema = convert(&e, FixedCtx::NONE);
        let members = schema.value().and_then(Value::as_object).unwrap();
        assert_eq!(members.len(), 1);
    }

    #[test]
    fn fixed_primitive_gets_enum() {
        let e = Element::with_value(Variant::String, Value::String("red".into()));
        let schema = convert(&e, FixedCtx { fixed: true, fixed_type: false });
        let members = schema.value().and_then(Value::as_object).unwrap();
        assert_eq!(members.len(), 2);
    }

    #[test]
    fn null_type_is_a_literal_null_value() {
        let e = Element::with_value(Variant::Null, Value::Null);
        let schema = convert(&e, FixedCtx::NONE);
        let members = schema.value().and_then(Value::as_object).unwrap();
        let (_, type_value) = members[0].value().and_then(Value::as_member).unwrap();
        assert_eq!(type_value.value(), Some(&Value::Null));
    }
}
