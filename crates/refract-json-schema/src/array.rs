use refract_element::{Element, Value};

use crate::attrs::{FixedCtx, TypeAttrs};
use crate::builder::{array_elem, literal_json, string_elem, Builder};
use crate::context::Context;
use crate::dispatch;
use crate::error::SchemaError;

/// Array conversion (§4.6). An absent value, or a value that's an
/// explicitly empty array, produces a totally empty schema fragment — no
/// `"type"` key at all — unlike primitives, which always get `"type"`.
/// Past that guard, `fixed`/`fixedType` self-combine with the element's
/// own attributes; an `"items"` schema is only built when the result is
/// fixed-ish, as a single schema for exactly one surviving item or a
/// tuple-array form otherwise. `"default"` is read unconditionally,
/// independent of fixed-ness.
pub fn convert(ctx: &mut Context, element: &Element, fctx: FixedCtx) -> Result<Element, SchemaError> {
    let items: &[Element] = match element.value().and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items,
        _ => return Ok(Builder::new().build()),
    };

    let ta = TypeAttrs::from_element(element);
    let self_ctx = fctx.combine(&ta);

    let mut builder = Builder::new();
    builder.insert("type", string_elem("array"));

    if self_ctx.is_fixed_ish() {
        let item_ctx = self_ctx.for_array_item();
        let mut schemas = Vec::with_capacity(items.len());
        for item in items {
            schemas.push(dispatch::convert(ctx, item, item_ctx)?);
        }
        if schemas.len() == 1 {
            builder.insert("items", schemas.into_iter().next().expect("checked len == 1"));
        } else {
            builder.insert("items", array_elem(schemas));
        }
    }

    if let Some(default) = element.attributes().get("default") {
        builder.insert("default", literal_json(default));
    }

    Ok(builder.build())
}
