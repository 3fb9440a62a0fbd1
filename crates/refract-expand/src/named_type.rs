use refract_element::{CloneFlags, Element, Value, Variant};

use crate::context::Context;
use crate::dispatch::{expand_dispatch, expand_value};
use crate::error::ExpandError;
use crate::inheritance::inheritance_tree;

fn ref_element(name: &str) -> Element {
    Element::with_value(Variant::String, Value::String(name.to_string()))
}

/// `ExpandNamedType` (§4.5): turn an occurrence of a named type into its
/// fully-inlined `extend` tree — ancestors first, the type's own members
/// last — or, if the name is already on the expansion stack, a bare
/// `meta.ref` stub so the recursion terminates instead of looping forever
/// on circular inheritance (§8).
pub(crate) fn expand_named_type(ctx: &mut Context, element: &Element) -> Result<Element, ExpandError> {
    let name = element.element_name().to_string();

    if ctx.is_visiting(&name) {
        let mut clone = match ctx.registry.root_ancestor(&name) {
            Some(root) => root.clone_with_flags(CloneFlags::META | CloneFlags::ATTRIBUTES),
            None => element.clone_with_flags(CloneFlags::META | CloneFlags::ATTRIBUTES),
        };
        clone.meta_mut().shift_remove("id");
        clone.meta_mut().insert("ref".to_string(), ref_element(&name));
        return Ok(clone);
    }

    let origin = ctx.registry.find(&name).cloned().unwrap_or_else(|| element.clone());
    let id = origin.meta().get("id").cloned();

    ctx.visiting.push(name.clone());
    let raw_tree = inheritance_tree(ctx, &name);
    let tree_result = expand_dispatch(ctx, &raw_tree);
    ctx.visiting.pop();
    let mut extend_element = tree_result?;

    if let Some(id) = id {
        extend_element.meta_mut().insert("id".to_string(), id);
    }

    // `origin` has already had the inheritance chain accounted for above;
    // expand only its own members, with its element name stripped back to
    // the reserved tag so `expand_value` recurses structurally instead of
    // re-entering this function.
    let origin_members = origin.clone_with_flags(CloneFlags::META | CloneFlags::ATTRIBUTES | CloneFlags::VALUE);
    let expanded_origin = expand_value(ctx, &origin_members)?;

    if let Some(Value::Extend(children)) = extend_element.value_mut() {
        children.push(expanded_origin);
    }

    Ok(extend_element)
}
