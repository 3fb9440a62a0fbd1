use std::collections::HashSet;

use refract_element::{is_reserved, CloneFlags, Element, Value, Variant};

use crate::context::Context;

fn ref_element(name: &str) -> Element {
    Element::with_value(Variant::String, Value::String(name.to_string()))
}

/// Builds the unexpanded `extend` chain of `name`'s ancestors, root-first
/// (§4.5). Grounded on `ExpandVisitor.cc`'s `GetInheritanceTree`: walk the
/// registry's `element-name` chain starting at `name`, stop at the first
/// reserved tag or repeated name, clone each ancestor with everything but
/// its own element name and `meta.id` (so the clone carries the ancestor's
/// own shape, not its identity), and stamp `meta.ref` with the name used to
/// look it up. The chain does not include `name` itself — that is the
/// caller's own definition, expanded and appended separately.
///
/// A mutual cycle (`A:B; B:A`) never re-enters `A` directly — `current`
/// alternates `A`→`B`→`A`→… — so a bare self-cycle check does not terminate
/// it; `seen` tracks every name visited in this walk and stops the chain as
/// soon as one repeats (§8).
pub fn inheritance_tree(ctx: &Context, name: &str) -> Element {
    let mut chain = Vec::new();
    let mut current = name.to_string();
    let mut seen = HashSet::new();
    seen.insert(current.clone());

    while let Some(element) = ctx.registry.find(&current) {
        let parent_name = element.element_name().to_string();
        if is_reserved(&parent_name) || !seen.insert(parent_name.clone()) {
            break;
        }

        let Some(parent) = ctx.registry.find(&parent_name) else { break };
        let mut clone = parent.clone_with_flags(CloneFlags::META | CloneFlags::ATTRIBUTES | CloneFlags::VALUE);
        clone.meta_mut().insert("ref".to_string(), ref_element(&parent_name));
        chain.push(clone);

        current = parent_name;
    }

    chain.reverse();
    Element::with_value(Variant::Extend, Value::Extend(chain))
}
