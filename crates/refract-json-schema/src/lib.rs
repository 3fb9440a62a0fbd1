//! Draft-04 JSON Schema generation from an already-expanded Refract element
//! tree (§4.6). The schema itself is represented using the same
//! `refract_element::Element`/`Value` model every other pass uses rather
//! than a parallel schema-specific ADT — `to_json_value` is the one place
//! that leaves that model for `serde_json::Value`.

mod array;
mod attrs;
mod builder;
mod context;
mod dispatch;
mod enum_schema;
mod error;
mod extend;
mod object;
mod options;
mod primitive;
mod value;

pub use attrs::{FixedCtx, TypeAttrs};
pub use context::Context;
pub use error::SchemaError;
pub use options::SchemaOptions;
pub use value::to_json_value;

use refract_element::{Element, Value};

use crate::builder::{member_elem, object_elem, string_elem};

/// Convert an already-expanded Refract tree into a draft-04 JSON Schema
/// (§6.2). The root is visited with no inherited `fixed`/`fixedType`
/// context; `"$schema"`/`"type":"object"` are then written unconditionally
/// in front of whatever the body produced. The body's own `"type"` member,
/// if any, is dropped rather than kept alongside the forced one — an MSON
/// data structure's root is conventionally an object (§4.6), so this only
/// discards information for a root that isn't one, which the reference
/// implementation's own `renderJsonSchema` papers over by simply writing
/// `"type"` twice into the same object.
pub fn to_json_schema(root: &Element, options: SchemaOptions) -> Result<Element, SchemaError> {
    let mut ctx = Context::new(options);
    let body = dispatch::convert(&mut ctx, root, FixedCtx::NONE)?;

    let mut members = vec![
        member_elem("$schema", string_elem("http://json-schema.org/draft-04/schema#")),
        member_elem("type", string_elem("object")),
    ];

    if let Some(Value::Object(body_members)) = body.value() {
        for member in body_members {
            let is_type_key = member
                .value()
                .and_then(Value::as_member)
                .map(|(key, _)| key.value().and_then(Value::as_string) == Some("type"))
                .unwrap_or(false);
            if !is_type_key {
                members.push(member.clone());
            }
        }
    }

    if !ctx.definitions.is_empty() {
        let definitions =
            object_elem(ctx.definitions.iter().map(|(name, schema)| member_elem(name, schema.clone())).collect());
        members.push(member_elem("definitions", definitions));
    }

    Ok(object_elem(members))
}
