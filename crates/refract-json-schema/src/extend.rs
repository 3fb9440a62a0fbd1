use refract_element::{merge_extend, Element, Value};

use crate::attrs::FixedCtx;
use crate::builder::Builder;
use crate::context::Context;
use crate::dispatch;
use crate::error::SchemaError;

/// Extend conversion: merge the children (§4.1) then dispatch the merged
/// element through the generic converter with the same, unchanged
/// context — `extend` is never its own schema shape, just a deferred
/// merge.
pub fn convert(ctx: &mut Context, element: &Element, fctx: FixedCtx) -> Result<Element, SchemaError> {
    let children = element.value().and_then(Value::as_extend).unwrap_or(&[]);
    match merge_extend(children)? {
        Some(merged) => dispatch::convert(ctx, &merged, fctx),
        None => Ok(Builder::new().build()),
    }
}
