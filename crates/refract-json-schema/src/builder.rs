//! A thin ordered key/value builder over `refract_element::Element`'s own
//! object shape (`Value::Object` of `Variant::Member` children). The JSON
//! Schema visitor reuses the Refract element model itself as its output
//! representation (§4.6: "the visitor emits an object element that
//! serializes to the schema") rather than introducing a parallel schema
//! ADT, so this builder is just insertion-ordered member bookkeeping on top
//! of the same `Element`/`Value` types every other pass already uses.

use refract_element::{Element, Value, Variant};

pub fn string_elem(s: impl Into<String>) -> Element {
    Element::with_value(Variant::String, Value::String(s.into()))
}

pub fn bool_elem(b: bool) -> Element {
    Element::with_value(Variant::Bool, Value::Bool(b))
}

pub fn null_elem() -> Element {
    Element::with_value(Variant::Null, Value::Null)
}

pub fn array_elem(items: Vec<Element>) -> Element {
    Element::with_value(Variant::Array, Value::Array(items))
}

pub fn member_elem(key: &str, value: Element) -> Element {
    Element::with_value(
        Variant::Member,
        Value::Member { key: Box::new(string_elem(key)), value: Box::new(value) },
    )
}

pub fn object_elem(members: Vec<Element>) -> Element {
    Element::with_value(Variant::Object, Value::Object(members))
}

/// An ordered `key -> schema fragment` map under construction. Keys are
/// kept unique (a later `insert` of an existing key overwrites in place,
/// matching §3.1's "duplicate keys replace in place" rule for `meta`/
/// `attributes`), with the single deliberate exception of `add_schema_type`
/// below, which the reference visitor special-cases.
#[derive(Debug, Default)]
pub struct Builder {
    members: Vec<(String, Element)>,
}

impl Builder {
    pub fn new() -> Self {
        Builder { members: Vec::new() }
    }

    /// Rebuild a builder from an already-materialized object element, so a
    /// schema fragment produced by `convert` can still have more keys
    /// appended to it (`description`, `nullable`, `default`) the way the
    /// reference visitor keeps writing into the same `pObj` after `Visit`
    /// returns.
    pub fn from_element(element: Element) -> Self {
        let mut members = Vec::new();
        if let Some(Value::Object(children)) = element.value() {
            for child in children {
                if let Some((key, value)) = child.value().and_then(Value::as_member) {
                    if let Some(key_str) = key.value().and_then(Value::as_string) {
                        members.push((key_str.to_string(), value.clone()));
                    }
                }
            }
        }
        Builder { members }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Element) -> &mut Self {
        let key = key.into();
        if let Some(existing) = self.members.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.members.push((key, value));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Element> {
        self.members.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// `JSONSchemaVisitor::addSchemaType`: if `type` is already a single
    /// string, widen it to a two-element array instead of overwriting it;
    /// otherwise just set it. Used exclusively by nullable handling.
    pub fn add_schema_type(&mut self, type_name: &str) {
        if let Some((_, existing)) = self.members.iter_mut().find(|(k, _)| k == "type") {
            let previous = existing.clone();
            *existing = array_elem(vec![previous, string_elem(type_name)]);
        } else {
            self.insert("type", string_elem(type_name));
        }
    }

    /// `JSONSchemaVisitor::addNullToEnum`: append a `null` to an existing
    /// `enum` array; a no-op if there is no `enum` member yet.
    pub fn add_null_to_enum(&mut self) {
        if let Some((_, existing)) = self.members.iter_mut().find(|(k, _)| k == "enum") {
            if let Some(Value::Array(items)) = existing.value_mut() {
                items.push(null_elem());
            }
        }
    }

    pub fn build(self) -> Element {
        object_elem(self.members.into_iter().map(|(k, v)| member_elem(&k, v)).collect())
    }

    pub fn into_members(self) -> Vec<(String, Element)> {
        self.members
    }
}

/// Clone `element`'s own value as a bare literal, dropping its meta and
/// attributes — used wherever a raw instance value (an enum candidate, a
/// `default`, a nullable representative value) is embedded directly into a
/// schema fragment instead of being converted into a type schema.
pub fn literal_json(element: &Element) -> Element {
    match element.value() {
        None => null_elem(),
        Some(Value::Null) => null_elem(),
        Some(Value::Bool(b)) => bool_elem(*b),
        Some(Value::Number(n)) => Element::with_value(Variant::Number, Value::Number(*n)),
        Some(Value::String(s)) => string_elem(s.clone()),
        Some(Value::Array(items)) => array_elem(items.iter().map(literal_json).collect()),
        Some(Value::Object(members)) => {
            let mapped = members
                .iter()
                .filter_map(|m| {
                    let (key, value) = m.value().and_then(Value::as_member)?;
                    let key_str = key.value().and_then(Value::as_string)?;
                    Some(member_elem(key_str, literal_json(value)))
                })
                .collect();
            object_elem(mapped)
        }
        Some(Value::Enum(inner)) => literal_json(inner),
        Some(Value::Member { value, .. }) => literal_json(value),
        Some(Value::Ref(_) | Value::Extend(_) | Value::Option(_) | Value::Select(_) | Value::Holder(_)) => {
            null_elem()
        }
    }
}
