//! The expansion pass (§4.5): walks a Refract element tree produced by
//! `mson-lower`, inlining named types into their full inheritance chain and
//! attaching resolved mixin/reference targets, so `refract-json-schema`
//! never has to consult the registry itself.
//!
//! Grounded on `examples/original_source/src/refract/ExpandVisitor.cc`.

mod context;
mod dispatch;
mod error;
mod expandable;
mod inheritance;
mod named_type;
mod reference;

pub use context::Context;
pub use error::ExpandError;
pub use expandable::is_expandable;

use refract_element::{Element, Registry};

/// Expand `element` against `registry`. This is the crate's sole public
/// entry point; everything else is reached through it.
pub fn expand(element: &Element, registry: &Registry) -> Result<Element, ExpandError> {
    let mut ctx = Context::new(registry);
    dispatch::expand_or_clone(&mut ctx, element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use refract_element::{CloneFlags, Value, Variant};

    fn object_named(id: &str, parent_name: &str) -> Element {
        let mut e = Element::empty(Variant::Object);
        e.set_element_name(parent_name);
        e.set_meta_id(id);
        e.set_value(Value::Object(Vec::new()));
        e
    }

    #[test]
    fn idempotent_on_an_already_expanded_tree() {
        let mut registry = Registry::new();
        registry.add(object_named("A", "object")).unwrap();

        let mut occurrence = Element::empty(Variant::Object);
        occurrence.set_element_name("A");

        let once = expand(&occurrence, &registry).unwrap();
        let twice = expand(&once, &registry).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unexpandable_tree_is_returned_unchanged() {
        let e = Element::with_value(Variant::Bool, Value::Bool(true));
        let registry = Registry::new();
        let out = expand(&e, &registry).unwrap();
        assert_eq!(out, e.clone_with_flags(CloneFlags::ALL));
    }
}
