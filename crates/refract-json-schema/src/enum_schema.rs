use indexmap::IndexMap;
use refract_element::{Element, Value, Variant};

use crate::attrs::FixedCtx;
use crate::builder::{array_elem, literal_json, Builder};
use crate::context::Context;
use crate::dispatch;
use crate::error::SchemaError;

/// Enum conversion (§4.6). Candidates are the `enumerations` attribute's
/// array plus the element's own chosen value, if any; an element with no
/// candidates at all returns an empty schema fragment before even
/// considering `default`. Candidates are grouped by `element_name`, in
/// first-seen order: a single group becomes a plain `"type"`/`"enum"`
/// pair; more than one becomes `"anyOf"`, one entry per group, built from
/// that group's first member — an object representative contributes just
/// its own recursive schema with no `"enum"` key, an enum representative
/// contributes its own literal-ified clone, anything else contributes the
/// whole group as a literal `"enum"` array.
pub fn convert(ctx: &mut Context, element: &Element, _fctx: FixedCtx) -> Result<Element, SchemaError> {
    let mut candidates: Vec<&Element> = Vec::new();
    if let Some(items) =
        element.attributes().get("enumerations").and_then(|e| e.value()).and_then(Value::as_array)
    {
        candidates.extend(items.iter());
    }
    if let Some(Value::Enum(inner)) = element.value() {
        candidates.push(inner);
    }

    if candidates.is_empty() {
        return Ok(Builder::new().build());
    }

    let mut groups: IndexMap<String, Vec<&Element>> = IndexMap::new();
    for candidate in &candidates {
        groups.entry(candidate.element_name().to_string()).or_default().push(candidate);
    }

    let mut builder = Builder::new();

    if groups.len() == 1 {
        let (name, group) = groups.iter().next().expect("checked len == 1");
        builder.add_schema_type(name);
        builder.insert("enum", array_elem(group.iter().map(|c| literal_json(c)).collect()));
    } else {
        let mut alternatives = Vec::with_capacity(groups.len());
        for group in groups.values() {
            let representative = group[0];
            let schema = dispatch::convert(ctx, representative, FixedCtx::NONE)?;
            let mut schema_builder = Builder::from_element(schema);
            match representative.value() {
                Some(Value::Enum(_)) => {
                    schema_builder.insert("enum", array_elem(vec![literal_json(representative)]));
                }
                Some(Value::Object(_)) => {}
                _ => {
                    schema_builder
                        .insert("enum", array_elem(group.iter().map(|c| literal_json(c)).collect()));
                }
            }
            alternatives.push(schema_builder.build());
        }
        builder.insert("anyOf", array_elem(alternatives));
    }

    if let Some(default) = element.attributes().get("default") {
        if let Some(Value::Enum(inner)) = default.value() {
            builder.insert("default", literal_json(inner));
        }
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SchemaOptions;

    fn string_candidate(s: &str) -> Element {
        Element::with_value(Variant::String, Value::String(s.to_string()))
    }

    #[test]
    fn no_candidates_is_empty() {
        let e = Element::empty(Variant::Enum);
        let mut ctx = Context::new(SchemaOptions::default());
        let schema = convert(&mut ctx, &e, FixedCtx::NONE).unwrap();
        assert!(schema.value().and_then(Value::as_object).unwrap().is_empty());
    }

    #[test]
    fn single_group_uses_enum_array() {
        let mut e = Element::empty(Variant::Enum);
        e.attributes_mut().insert(
            "enumerations".to_string(),
            Element::with_value(
                Variant::Array,
                Value::Array(vec![string_candidate("red"), string_candidate("blue")]),
            ),
        );
        let mut ctx = Context::new(SchemaOptions::default());
        let schema = convert(&mut ctx, &e, FixedCtx::NONE).unwrap();
        let members = schema.value().and_then(Value::as_object).unwrap();
        assert_eq!(members.len(), 2);
    }

    #[test]
    fn mixed_groups_use_any_of() {
        let mut e = Element::empty(Variant::Enum);
        e.attributes_mut().insert(
            "enumerations".to_string(),
            Element::with_value(
                Variant::Array,
                Value::Array(vec![
                    string_candidate("red"),
                    Element::with_value(Variant::Number, Value::Number(1.0)),
                ]),
            ),
        );
        let mut ctx = Context::new(SchemaOptions::default());
        let schema = convert(&mut ctx, &e, FixedCtx::NONE).unwrap();
        let members = schema.value().and_then(Value::as_object).unwrap();
        let has_any_of = members.iter().any(|m| {
            m.value()
                .and_then(Value::as_member)
                .map(|(k, _)| k.value().and_then(Value::as_string) == Some("anyOf"))
                .unwrap_or(false)
        });
        assert!(has_any_of);
    }
}
