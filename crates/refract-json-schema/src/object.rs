use refract_element::{merge_extend, Element, Value, Variant};

use crate::attrs::{FixedCtx, TypeAttrs};
use crate::builder::{array_elem, bool_elem, literal_json, member_elem, object_elem, string_elem, Builder};
use crate::context::Context;
use crate::dispatch;
use crate::error::SchemaError;

struct ProcessedMembers {
    fixed_properties: Vec<Element>,
    variable_defs: Vec<(String, Element)>,
    required: Vec<String>,
    one_of: Option<Element>,
}

/// Object conversion (§4.6), the most involved of the shapes here. Mixins
/// and named-type members are flattened first (they were left as `ref`
/// elements by expansion, never inlined structurally); required keys are
/// collected into a sorted, deduplicated set, matching the reference
/// implementation's `std::set<std::string>` rather than insertion order.
/// `"type":"object"` and an (always present, possibly empty) `"properties"`
/// are emitted only when there are no variable properties at all; as soon
/// as one exists, neither key is emitted here — instead a bare `"$ref"`
/// (exactly one variable property and no fixed ones) or an `"allOf"` of
/// `$ref`s plus one trailing `{"properties": {...}}` (anything else). Only
/// the *first* `Select` child's alternatives become `"oneOf"` — later
/// sibling selects are dropped, matching the reference implementation's own
/// documented limitation for multiple selects in one object.
pub fn convert(ctx: &mut Context, element: &Element, fctx: FixedCtx) -> Result<Element, SchemaError> {
    let raw_children = element.value().and_then(Value::as_object).unwrap_or(&[]);
    let children = flatten_object_children(raw_children)?;

    let ta = TypeAttrs::from_element(element);
    let self_ctx = fctx.combine(&ta);

    let processed = process_members(ctx, &children, self_ctx)?;

    let mut builder = Builder::new();

    if processed.variable_defs.is_empty() {
        builder.insert("type", string_elem("object"));
        builder.insert("properties", object_elem(processed.fixed_properties));
    } else if processed.variable_defs.len() == 1 && processed.fixed_properties.is_empty() {
        let (name, _) = &processed.variable_defs[0];
        builder.insert("$ref", string_elem(definition_pointer(name)));
    } else {
        let mut all_of: Vec<Element> = processed
            .variable_defs
            .iter()
            .map(|(name, _)| ref_schema(name))
            .collect();
        all_of.push(object_elem(vec![member_elem(
            "properties",
            object_elem(processed.fixed_properties),
        )]));
        builder.insert("allOf", array_elem(all_of));
    }

    if !processed.required.is_empty() {
        builder.insert(
            "required",
            array_elem(processed.required.iter().map(|k| string_elem(k.clone())).collect()),
        );
    }

    if let Some(one_of) = processed.one_of {
        builder.insert("oneOf", one_of);
    }

    if self_ctx.is_fixed_ish() {
        builder.insert("additionalProperties", bool_elem(false));
    }

    Ok(builder.build())
}

/// Like `convert`, but for a `select`'s `option` alternative (§4.6): a
/// fresh, reset context throughout (never the enclosing object's
/// fixed/fixedType, never its own), no `"type"`, no
/// `"additionalProperties"`, and variable properties are silently dropped
/// from the output rather than contributing a `$ref`/`allOf`.
fn convert_option(ctx: &mut Context, children: &[Element]) -> Result<Element, SchemaError> {
    let flattened = flatten_object_children(children)?;
    let processed = process_members(ctx, &flattened, FixedCtx::NONE)?;

    let mut builder = Builder::new();
    builder.insert("properties", object_elem(processed.fixed_properties));

    if !processed.required.is_empty() {
        builder.insert(
            "required",
            array_elem(processed.required.iter().map(|k| string_elem(k.clone())).collect()),
        );
    }

    if let Some(one_of) = processed.one_of {
        builder.insert("oneOf", one_of);
    }

    Ok(builder.build())
}

fn collect_one_of(ctx: &mut Context, options: &[Element]) -> Result<Element, SchemaError> {
    let mut alternatives = Vec::with_capacity(options.len());
    for option in options {
        let children = match option.value() {
            Some(Value::Option(items)) => items.as_slice(),
            _ => &[],
        };
        alternatives.push(convert_option(ctx, children)?);
    }
    Ok(array_elem(alternatives))
}

fn process_members(
    ctx: &mut Context,
    children: &[Element],
    self_ctx: FixedCtx,
) -> Result<ProcessedMembers, SchemaError> {
    let mut fixed_properties = Vec::new();
    let mut variable_defs = Vec::new();
    let mut required = Vec::new();
    let mut one_of = None;

    for child in children {
        if child.variant() == Variant::Select {
            // TODO: a second sibling `select` in the same object is dropped here;
            // draft-04's single `oneOf` key has no shape for more than one group.
            if one_of.is_none() {
                let options = child.value().and_then(Value::as_select).unwrap_or(&[]);
                one_of = Some(collect_one_of(ctx, options)?);
            }
            continue;
        }

        let Some((key, value)) = child.value().and_then(Value::as_member) else {
            continue;
        };

        let ta = TypeAttrs::from_element(value);
        let value_ctx = self_ctx.for_member_value(&ta);
        let key_name = key.value().and_then(Value::as_string).unwrap_or_default().to_string();
        let is_variable = key
            .attributes()
            .get("variable")
            .and_then(|e| e.value())
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if is_variable {
            let schema = dispatch::convert(ctx, value, value_ctx)?;
            ctx.definitions.insert(key_name.clone(), schema.clone());
            variable_defs.push((key_name, schema));
            continue;
        }

        let is_required = ta.required || ta.fixed || (self_ctx.is_fixed_ish() && !ta.optional);
        if is_required && !key_name.is_empty() {
            required.push(key_name.clone());
        }

        let schema = member_value_schema(ctx, value, &ta, value_ctx)?;
        fixed_properties.push(member_elem(&key_name, schema));
    }

    required.sort();
    required.dedup();

    Ok(ProcessedMembers { fixed_properties, variable_defs, required, one_of })
}

/// The Member-wrapper-exclusive additions (§4.6): `description` from the
/// value's own meta, `nullable` widening `"type"`/`"enum"`, and — for
/// primitives only — a `"default"` sourced from the value's own `default`
/// attribute. None of this applies when a value is visited any other way
/// (array items, enum group representatives, `extend` merges, variable
/// property values) — only a named, non-variable property goes through
/// this path.
fn member_value_schema(
    ctx: &mut Context,
    value: &Element,
    ta: &TypeAttrs,
    value_ctx: FixedCtx,
) -> Result<Element, SchemaError> {
    let schema = dispatch::convert(ctx, value, value_ctx)?;
    let mut builder = Builder::from_element(schema);

    if let Some(description) = value.description() {
        builder.insert("description", string_elem(description));
    }

    if ta.nullable {
        builder.add_schema_type("null");
        builder.add_null_to_enum();
    }

    if matches!(value.variant(), Variant::Null | Variant::Bool | Variant::Number | Variant::String) {
        if let Some(default) = value.attributes().get("default") {
            builder.insert("default", literal_json(default));
        }
    }

    Ok(builder.build())
}

/// Resolve mixins and named-type occurrences left behind by expansion as
/// bare `ref` elements directly among an object's children (never inlined
/// structurally — see `refract-expand`'s `resolved` attribute mechanism).
/// A normal named property stays as a `Member` and is handled by
/// `process_members`; only a `ref` sitting directly in the children list
/// (a mixin) gets flattened in place, contributing its resolved target's
/// own members.
fn flatten_object_children(children: &[Element]) -> Result<Vec<Element>, SchemaError> {
    let mut out = Vec::new();
    for child in children {
        if child.variant() == Variant::Ref {
            if let Some(resolved) = child.attributes().get("resolved") {
                out.extend(members_of_resolved(resolved)?);
            }
            continue;
        }
        out.push(child.clone());
    }
    Ok(out)
}

fn members_of_resolved(resolved: &Element) -> Result<Vec<Element>, SchemaError> {
    match resolved.value() {
        Some(Value::Extend(items)) => match merge_extend(items)? {
            Some(merged) => members_of_resolved(&merged),
            None => Ok(Vec::new()),
        },
        Some(Value::Object(members)) => flatten_object_children(members),
        _ => Ok(Vec::new()),
    }
}

fn ref_schema(name: &str) -> Element {
    object_elem(vec![member_elem("$ref", string_elem(definition_pointer(name)))])
}

fn definition_pointer(name: &str) -> String {
    format!("#/definitions/{name}")
}
