use refract_element::{CloneFlags, Element, Value, Variant};

use crate::context::Context;
use crate::dispatch::expand_or_clone;
use crate::error::ExpandError;

/// Rewrite a resolved target's `meta.id` to `meta.ref`, so the copy
/// attached to a `ref` element exposes the symbol it came from instead of
/// re-declaring the named type's own identity (`MetaIdToRef` in
/// `ExpandVisitor.cc`).
fn meta_id_to_ref(mut element: Element) -> Element {
    if let Some(id) = element.meta_mut().shift_remove("id") {
        if let Some(id) = id.value().and_then(Value::as_string) {
            element
                .meta_mut()
                .insert("ref".to_string(), Element::with_value(Variant::String, Value::String(id.to_string())));
        }
    }
    element
}

/// `ExpandReference` (§4.5): leave an empty `ref` untouched, hard-error on a
/// mixin that circularly references itself, and otherwise attach the
/// resolved, expanded target as a `resolved` attribute on a clone of the
/// `ref` element — the `ref` value itself is preserved so later passes still
/// know which symbol was pointed at.
pub(crate) fn expand_reference(ctx: &mut Context, element: &Element) -> Result<Element, ExpandError> {
    let mut clone = element.clone_with_flags(CloneFlags::ALL);

    let Some(Value::Ref(symbol)) = element.value() else {
        return Ok(clone);
    };
    if symbol.is_empty() {
        return Ok(clone);
    }
    let symbol = symbol.clone();

    if ctx.is_visiting(&symbol) {
        return Err(ExpandError::CircularMixin(symbol));
    }

    let Some(target) = ctx.registry.find(&symbol).cloned() else {
        return Ok(clone);
    };

    ctx.visiting.push(symbol.clone());
    let result = expand_or_clone(ctx, &target);
    ctx.visiting.pop();

    let expanded_target = meta_id_to_ref(result?);
    clone.attributes_mut().insert("resolved".to_string(), expanded_target);
    Ok(clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use refract_element::Registry;

    #[test]
    fn empty_ref_passes_through() {
        let e = Element::with_value(Variant::Ref, Value::Ref(String::new()));
        let registry = Registry::new();
        let mut ctx = Context::new(&registry);
        let out = expand_reference(&mut ctx, &e).unwrap();
        assert_eq!(out, e);
    }

    #[test]
    fn unresolved_symbol_passes_through() {
        let e = Element::with_value(Variant::Ref, Value::Ref("Missing".into()));
        let registry = Registry::new();
        let mut ctx = Context::new(&registry);
        let out = expand_reference(&mut ctx, &e).unwrap();
        assert_eq!(out.value(), e.value());
        assert!(out.attributes().get("resolved").is_none());
    }

    #[test]
    fn circular_mixin_is_a_hard_error() {
        let e = Element::with_value(Variant::Ref, Value::Ref("Self".into()));
        let registry = Registry::new();
        let mut ctx = Context::new(&registry);
        ctx.visiting.push("Self".to_string());
        assert_eq!(expand_reference(&mut ctx, &e), Err(ExpandError::CircularMixin("Self".to_string())));
    }

    #[test]
    fn resolved_symbol_attaches_expanded_target() {
        let mut target = Element::empty(Variant::String);
        target.set_meta_id("Name");
        target.set_value(Value::String("default".into()));

        let mut registry = Registry::new();
        registry.add(target).unwrap();

        let e = Element::with_value(Variant::Ref, Value::Ref("Name".into()));
        let mut ctx = Context::new(&registry);
        let out = expand_reference(&mut ctx, &e).unwrap();

        let resolved = out.attributes().get("resolved").unwrap();
        assert_eq!(resolved.meta().get("ref").and_then(|e| e.value()).and_then(Value::as_string), Some("Name"));
        assert!(resolved.meta_id().is_none());
    }
}
