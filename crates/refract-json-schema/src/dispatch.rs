use refract_element::{Element, Variant};

use crate::array;
use crate::attrs::FixedCtx;
use crate::builder::Builder;
use crate::context::Context;
use crate::enum_schema;
use crate::error::SchemaError;
use crate::extend;
use crate::object;
use crate::primitive;

/// The single recursive entry point every conversion goes through (§4.6).
/// A `ref` with no `resolved` attribute (unresolved or dangling) produces
/// an empty fragment; a resolved one is transparent, re-entering here on
/// the resolved target with the same context — the same shape as
/// `extend`'s merge-then-recurse. `option`/`select` are never dispatched
/// here directly; they're only ever reached through `object::convert`'s
/// own handling of a `select` child.
pub(crate) fn convert(ctx: &mut Context, element: &Element, fctx: FixedCtx) -> Result<Element, SchemaError> {
    let schema = match element.variant() {
        Variant::Null | Variant::Bool | Variant::Number | Variant::String => {
            primitive::convert(element, fctx)
        }
        Variant::Array => array::convert(ctx, element, fctx)?,
        Variant::Object => object::convert(ctx, element, fctx)?,
        Variant::Enum => enum_schema::convert(ctx, element, fctx)?,
        Variant::Extend => extend::convert(ctx, element, fctx)?,
        Variant::Ref => match element.attributes().get("resolved") {
            Some(resolved) => convert(ctx, &resolved.clone(), fctx)?,
            None => Builder::new().build(),
        },
        Variant::Option | Variant::Select | Variant::Member | Variant::Holder => Builder::new().build(),
    };

    Ok(attach_source_map(ctx, element, schema))
}

/// Embed the element's own `sourceMap` attribute into the schema fragment
/// it produced, when `SchemaOptions::emit_source_map` is set (§6.4). This
/// is an addition of our own, not present in the reference visitor, so it
/// is applied uniformly at this single dispatch point rather than
/// replicating any particular call site's placement.
fn attach_source_map(ctx: &Context, element: &Element, schema: Element) -> Element {
    if !ctx.options.emit_source_map {
        return schema;
    }
    let Some(source_map) = element.attributes().get("sourceMap") else {
        return schema;
    };
    let mut builder = Builder::from_element(schema);
    builder.insert("sourceMap", source_map.clone());
    builder.build()
}
