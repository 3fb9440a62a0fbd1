use indexmap::IndexMap;
use mson_ast::SourceMap;

use crate::clone_flags::CloneFlags;
use crate::value::Value;
use crate::variant::Variant;

/// An ordered `meta`/`attributes` map (§3.1). Backed by `IndexMap`, whose
/// "insert on an existing key updates the value in place, preserving
/// position" behavior is exactly the "duplicate keys replace in place"
/// invariant the element model requires.
pub type AttrMap = IndexMap<String, Element>;

/// One node of the Refract tree (§3.1). `value` is `None` exactly when the
/// element is "empty" — a state distinct from e.g. an explicitly-set empty
/// array, and one several passes branch on (factory parse failures,
/// expansion's reference placeholders, schema generation's early returns).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    variant: Variant,
    element_name: String,
    meta: AttrMap,
    attributes: AttrMap,
    value: Option<Value>,
}

impl Element {
    /// A fresh, empty element of `variant`, named after its own reserved
    /// tag until something (a named type, a factory call with mode
    /// `element`) overrides it.
    pub fn empty(variant: Variant) -> Self {
        Element {
            variant,
            element_name: variant.reserved_name().to_string(),
            meta: AttrMap::new(),
            attributes: AttrMap::new(),
            value: None,
        }
    }

    pub fn with_value(variant: Variant, value: Value) -> Self {
        let mut element = Element::empty(variant);
        element.value = Some(value);
        element
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    pub fn set_element_name(&mut self, name: impl Into<String>) {
        self.element_name = name.into();
    }

    pub fn is_reserved_name(&self) -> bool {
        crate::variant::is_reserved(&self.element_name)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut Value> {
        self.value.as_mut()
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = Some(value);
    }

    pub fn clear_value(&mut self) {
        self.value = None;
    }

    pub fn meta(&self) -> &AttrMap {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut AttrMap {
        &mut self.meta
    }

    pub fn attributes(&self) -> &AttrMap {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttrMap {
        &mut self.attributes
    }

    /// `meta.id`'s string value, if `meta.id` is present and is a string
    /// element (§3.4, `Registry::getElementId`).
    pub fn meta_id(&self) -> Option<&str> {
        self.meta.get("id").and_then(|e| e.value()).and_then(Value::as_string)
    }

    pub fn set_meta_id(&mut self, id: impl Into<String>) {
        self.meta.insert(
            "id".to_string(),
            Element::with_value(Variant::String, Value::String(id.into())),
        );
    }

    pub fn description(&self) -> Option<&str> {
        self.meta
            .get("description")
            .and_then(|e| e.value())
            .and_then(Value::as_string)
    }

    /// Deep copy restricted to the parts named by `flags` (§4.1.1). Parts
    /// left out are reset to their default: empty maps, an unset value, and
    /// the variant's reserved name.
    pub fn clone_with_flags(&self, flags: CloneFlags) -> Element {
        let mut out = Element::empty(self.variant);

        if flags.contains(CloneFlags::ELEMENT_NAME) {
            out.element_name = self.element_name.clone();
        }

        if flags.contains(CloneFlags::META) {
            out.meta = self.meta.clone();
            if !flags.contains(CloneFlags::META_ID) {
                out.meta.shift_remove("id");
            }
        } else if flags.contains(CloneFlags::META_ID) {
            if let Some(id) = self.meta.get("id") {
                out.meta.insert("id".to_string(), id.clone());
            }
        }

        if flags.contains(CloneFlags::ATTRIBUTES) {
            out.attributes = self.attributes.clone();
        }

        if flags.contains(CloneFlags::VALUE) {
            out.value = self.value.clone();
        }

        out
    }

    /// Record `source_map` as the opaque `sourceMap` attribute (§6.4); a
    /// no-op for an empty source map, so callers can call this
    /// unconditionally after building a value. The JSON Schema pass only
    /// serializes this attribute when `SchemaOptions::emit_source_map` is
    /// set.
    pub fn attach_source_map(&mut self, source_map: &SourceMap) {
        if source_map.is_empty() {
            return;
        }

        let ranges = source_map
            .ranges()
            .iter()
            .map(|range| {
                Element::with_value(
                    Variant::Array,
                    Value::Array(vec![
                        Element::with_value(Variant::Number, Value::Number(range.start as f64)),
                        Element::with_value(Variant::Number, Value::Number(range.end as f64)),
                    ]),
                )
            })
            .collect();

        self.attributes.insert(
            "sourceMap".to_string(),
            Element::with_value(Variant::Array, Value::Array(ranges)),
        );
    }
}
