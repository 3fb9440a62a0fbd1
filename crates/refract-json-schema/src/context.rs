use indexmap::IndexMap;
use refract_element::Element;

use crate::options::SchemaOptions;

/// State threaded through a single schema-generation call (§4.6): the
/// pass's one option, and the shared `definitions` accumulator that
/// variable-property pattern definitions are written into as they're
/// discovered, wherever in the tree they occur.
pub struct Context {
    pub options: SchemaOptions,
    pub definitions: IndexMap<String, Element>,
}

impl Context {
    pub fn new(options: SchemaOptions) -> Self {
        Context { options, definitions: IndexMap::new() }
    }
}
