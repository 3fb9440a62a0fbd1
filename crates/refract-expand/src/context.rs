use refract_element::Registry;

/// Expansion state threaded through every call (§4.5). `visiting` is the
/// stack of named-type and mixin symbols currently being expanded, checked
/// on entry and popped on exit; it is what turns `GetInheritanceTree`'s
/// recursion and `ExpandReference`'s mixin-following into termination
/// instead of infinite recursion. Grounded on the same shape as
/// `eure-json-schema`'s `ConversionContext { visiting: Vec<SchemaNodeId> }`.
pub struct Context<'a> {
    pub(crate) registry: &'a Registry,
    pub(crate) visiting: Vec<String>,
}

impl<'a> Context<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Context { registry, visiting: Vec::new() }
    }

    pub(crate) fn is_visiting(&self, name: &str) -> bool {
        self.visiting.iter().any(|n| n == name)
    }
}
