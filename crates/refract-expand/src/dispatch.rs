use refract_element::{CloneFlags, Element, Value, Variant};

use crate::context::Context;
use crate::error::ExpandError;
use crate::expandable::is_expandable;
use crate::named_type::expand_named_type;
use crate::reference::expand_reference;

/// `ExpandOrClone` (§4.5): expand a subtree if it is expandable, otherwise
/// clone it unchanged. Every recursive descent in this crate goes through
/// this function rather than calling `expand_value` directly, matching the
/// original's blanket entry point.
pub fn expand_or_clone(ctx: &mut Context, element: &Element) -> Result<Element, ExpandError> {
    if is_expandable(element) {
        expand_dispatch(ctx, element)
    } else {
        Ok(element.clone_with_flags(CloneFlags::ALL))
    }
}

/// Routes an expandable element to the handler for its situation: a `ref`
/// always goes through mixin resolution, a non-reserved element name is a
/// named type needing inheritance-chain construction, everything else is
/// structural recursion into its children.
pub(crate) fn expand_dispatch(ctx: &mut Context, element: &Element) -> Result<Element, ExpandError> {
    if element.variant() == Variant::Ref {
        return expand_reference(ctx, element);
    }
    if !element.is_reserved_name() {
        return expand_named_type(ctx, element);
    }
    expand_value(ctx, element)
}

/// Clone `source`'s meta and attributes (never its element name — a fresh
/// structural clone reverts to the variant's reserved tag, matching
/// `ExpandMembers`'s "clone meta+attrs verbatim") and attach `value` as the
/// expanded content.
fn rebuild(source: &Element, value: Value) -> Element {
    let mut out = source.clone_with_flags(CloneFlags::META | CloneFlags::ATTRIBUTES);
    out.set_value(value);
    out
}

/// Per-variant structural recursion (§4.5), assuming `element`'s own name
/// has already been resolved (it is either reserved, or its caller stripped
/// it deliberately — see `expand_named_type`'s handling of its own origin).
pub(crate) fn expand_value(ctx: &mut Context, element: &Element) -> Result<Element, ExpandError> {
    let Some(value) = element.value() else {
        return Ok(element.clone_with_flags(CloneFlags::ALL));
    };

    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Holder(_) => {
            Ok(element.clone_with_flags(CloneFlags::ALL))
        }
        Value::Ref(_) => expand_reference(ctx, element),
        Value::Array(items) => {
            let expanded = expand_each(ctx, items)?;
            Ok(rebuild(element, Value::Array(expanded)))
        }
        Value::Object(members) => {
            let expanded = expand_each(ctx, members)?;
            Ok(rebuild(element, Value::Object(expanded)))
        }
        Value::Extend(children) => {
            let expanded = expand_each(ctx, children)?;
            Ok(rebuild(element, Value::Extend(expanded)))
        }
        Value::Option(children) => {
            let expanded = expand_each(ctx, children)?;
            Ok(rebuild(element, Value::Option(expanded)))
        }
        Value::Select(options) => {
            let expanded = expand_each(ctx, options)?;
            Ok(rebuild(element, Value::Select(expanded)))
        }
        Value::Enum(inner) => {
            let expanded_inner = expand_or_clone(ctx, inner)?;
            Ok(rebuild(element, Value::Enum(Box::new(expanded_inner))))
        }
        Value::Member { key, value } => {
            let expanded_key = key.clone_with_flags(CloneFlags::ALL);
            let expanded_value =
                if value.is_empty() { value.clone_with_flags(CloneFlags::ALL) } else { expand_or_clone(ctx, value)? };
            Ok(rebuild(
                element,
                Value::Member { key: Box::new(expanded_key), value: Box::new(expanded_value) },
            ))
        }
    }
}

fn expand_each(ctx: &mut Context, items: &[Element]) -> Result<Vec<Element>, ExpandError> {
    items.iter().map(|item| expand_or_clone(ctx, item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use refract_element::Registry;

    #[test]
    fn unexpandable_subtree_clones_identically() {
        let e = Element::with_value(Variant::Number, Value::Number(4.0));
        let registry = Registry::new();
        let mut ctx = Context::new(&registry);
        let out = expand_or_clone(&mut ctx, &e).unwrap();
        assert_eq!(out, e);
    }

    #[test]
    fn array_expands_each_item() {
        let items = vec![
            Element::with_value(Variant::Number, Value::Number(1.0)),
            Element::with_value(Variant::Number, Value::Number(2.0)),
        ];
        let array = Element::with_value(Variant::Array, Value::Array(items.clone()));
        let registry = Registry::new();
        let mut ctx = Context::new(&registry);
        let out = expand_or_clone(&mut ctx, &array).unwrap();
        assert_eq!(out.value().and_then(Value::as_array).unwrap(), items.as_slice());
    }
}
