use std::collections::HashSet;

use indexmap::IndexMap;
use thiserror::Error;

use crate::element::Element;
use crate::variant::is_reserved;

/// Failure to register an element (§4.2, §7's `RegistryKind`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("element has no meta.id, or meta.id is not a string element")]
    NoId,
    #[error("cannot register an element under a reserved name")]
    ReservedId,
}

/// Name → owned element map, populated before lowering and read-only
/// afterward (§3.4, §5). Grounded on `refract::Registry` in
/// `examples/original_source/src/refract/Registry.cc`.
#[derive(Debug, Default)]
pub struct Registry {
    registered: IndexMap<String, Element>,
}

impl Registry {
    pub fn new() -> Self {
        Registry { registered: IndexMap::new() }
    }

    /// Register `element` under its own `meta.id`. Returns `Ok(false)`
    /// without modifying the registry if that id is already registered
    /// (first definition wins, per §3.4.1); fails only on the two
    /// structural misuses the reference implementation treats as logic
    /// errors rather than recoverable outcomes.
    pub fn add(&mut self, element: Element) -> Result<bool, RegistryError> {
        let id = element.meta_id().ok_or(RegistryError::NoId)?.to_string();

        if is_reserved(&id) {
            return Err(RegistryError::ReservedId);
        }

        if self.registered.contains_key(&id) {
            return Ok(false);
        }

        self.registered.insert(id, element);
        Ok(true)
    }

    pub fn find(&self, name: &str) -> Option<&Element> {
        self.registered.get(name)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.registered.shift_remove(name).is_some()
    }

    pub fn clear(&mut self) {
        self.registered.clear();
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Follow `element-name` through the registry starting at `name`,
    /// stopping at the first reserved tag, unknown name, or cycle (§3.3,
    /// §4.2). Returns `None` if `name` itself is not registered.
    ///
    /// A mutual cycle (`A:B; B:A`) revisits `name` every other step rather
    /// than immediately, so a same-pointer check on consecutive steps alone
    /// does not terminate it; `seen` records every name reached so far and
    /// stops the walk as soon as one repeats (§8).
    pub fn root_ancestor(&self, name: &str) -> Option<&Element> {
        let mut parent = self.find(name)?;
        let mut seen = HashSet::new();
        seen.insert(name.to_string());

        while !is_reserved(parent.element_name()) {
            let Some(next) = self.find(parent.element_name()) else {
                return Some(parent);
            };

            if !seen.insert(parent.element_name().to_string()) {
                return Some(parent);
            }

            parent = next;
        }

        Some(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    fn named(id: &str, parent_name: &str) -> Element {
        let mut e = Element::empty(Variant::Object);
        e.set_element_name(parent_name);
        e.set_meta_id(id);
        e
    }

    #[test]
    fn add_rejects_missing_id() {
        let mut registry = Registry::new();
        let e = Element::empty(Variant::String);
        assert_eq!(registry.add(e), Err(RegistryError::NoId));
    }

    #[test]
    fn add_rejects_reserved_id() {
        let mut registry = Registry::new();
        let mut e = Element::empty(Variant::String);
        e.set_meta_id("string");
        assert_eq!(registry.add(e), Err(RegistryError::ReservedId));
    }

    #[test]
    fn add_first_definition_wins() {
        let mut registry = Registry::new();
        assert_eq!(registry.add(named("A", "object")), Ok(true));
        assert_eq!(registry.add(named("A", "string")), Ok(false));
        assert_eq!(registry.find("A").unwrap().element_name(), "object");
    }

    #[test]
    fn root_ancestor_follows_chain_to_reserved() {
        let mut registry = Registry::new();
        registry.add(named("B", "object")).unwrap();
        registry.add(named("C", "B")).unwrap();

        let ancestor = registry.root_ancestor("C").unwrap();
        assert_eq!(ancestor.element_name(), "object");
    }

    #[test]
    fn root_ancestor_stops_on_self_cycle() {
        let mut registry = Registry::new();
        registry.add(named("A", "A")).unwrap();

        let ancestor = registry.root_ancestor("A").unwrap();
        assert_eq!(ancestor.meta_id(), Some("A"));
    }

    #[test]
    fn root_ancestor_stops_on_unknown_parent() {
        let mut registry = Registry::new();
        registry.add(named("A", "Unregistered")).unwrap();

        let ancestor = registry.root_ancestor("A").unwrap();
        assert_eq!(ancestor.meta_id(), Some("A"));
    }

    #[test]
    fn root_ancestor_unknown_name_is_none() {
        let registry = Registry::new();
        assert!(registry.root_ancestor("Nope").is_none());
    }

    #[test]
    fn root_ancestor_terminates_on_mutual_cycle() {
        let mut registry = Registry::new();
        registry.add(named("A", "B")).unwrap();
        registry.add(named("B", "A")).unwrap();

        let ancestor = registry.root_ancestor("A").unwrap();
        assert!(matches!(ancestor.meta_id(), Some("A") | Some("B")));
    }
}
