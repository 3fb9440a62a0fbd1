//! `ElementData<T>` (§4.4.2): four typed buckets plus a descriptions list,
//! folded into a fresh element once every fill rule has run. Grounded on
//! `examples/original_source/src/RefractDataStructure.cc`'s
//! `ElementData`/`ElementInfo`/`Merge`/`SaveValue`/`ElementInfoToElement`
//! template family, collapsed into runtime dispatch over `Variant` since
//! Rust has no partial template specialization to lean on.

use mson_ast::SourceMap;
use refract_element::{Element, Value, Variant, Warning};

/// A target is either a primitive (raw literal, parsed lazily) or a
/// compound/enum (already-built child elements, parsed eagerly by the
/// factory at the point they were created).
#[derive(Debug, Clone)]
pub enum BucketValue {
    Literal(String),
    Children(Vec<Element>),
}

#[derive(Debug, Clone)]
pub struct ElementInfo {
    pub value: BucketValue,
    pub source_map: SourceMap,
}

impl ElementInfo {
    pub fn literal(literal: impl Into<String>, source_map: SourceMap) -> Self {
        ElementInfo { value: BucketValue::Literal(literal.into()), source_map }
    }

    pub fn children(children: Vec<Element>, source_map: SourceMap) -> Self {
        ElementInfo { value: BucketValue::Children(children), source_map }
    }
}

/// The collector itself (§4.4.2's `ElementData<T>`).
#[derive(Debug, Clone, Default)]
pub struct Collector {
    pub values: Vec<ElementInfo>,
    pub samples: Vec<ElementInfo>,
    pub defaults: Vec<ElementInfo>,
    pub enumerations: Vec<ElementInfo>,
    pub descriptions: Vec<(String, SourceMap)>,
}

pub fn is_primitive(variant: Variant) -> bool {
    matches!(variant, Variant::Bool | Variant::Number | Variant::String)
}

fn parse_primitive_literal(variant: Variant, literal: &str) -> Option<Value> {
    match variant {
        Variant::Bool => refract_element::parse_bool(literal).map(Value::Bool),
        Variant::Number => refract_element::parse_number(literal).map(Value::Number),
        Variant::String => Some(Value::String(refract_element::parse_string(literal))),
        _ => None,
    }
}

/// Fold a finished collector into a fresh element of `variant` (§4.4.2 step
/// 5). This is the only place that interprets bucket contents; everything
/// upstream only ever pushes into buckets.
pub fn finalize(variant: Variant, mut collector: Collector, warnings: &mut Vec<Warning>) -> Element {
    let descriptions = core::mem::take(&mut collector.descriptions);

    let mut element = match variant {
        Variant::Enum => finalize_enum(collector, warnings),
        v if is_primitive(v) => finalize_primitive(v, collector, warnings),
        _ => finalize_compound(variant, collector, warnings),
    };

    attach_descriptions(&mut element, descriptions);
    element
}

fn finalize_primitive(variant: Variant, collector: Collector, warnings: &mut Vec<Warning>) -> Element {
    let mut element = Element::empty(variant);

    if let Some(first) = collector.values.into_iter().next() {
        if let BucketValue::Literal(literal) = first.value {
            match parse_primitive_literal(variant, &literal) {
                Some(value) => element.set_value(value),
                None => warnings.push(Warning::invalid_literal(variant.reserved_name(), first.source_map)),
            }
        }
    }

    if !collector.samples.is_empty() {
        let mut samples = Vec::with_capacity(collector.samples.len());
        for info in collector.samples {
            let BucketValue::Literal(literal) = info.value else { continue };
            match parse_primitive_literal(variant, &literal) {
                Some(value) => samples.push(Element::with_value(variant, value)),
                None => {
                    warnings.push(Warning::invalid_literal(variant.reserved_name(), info.source_map));
                    samples.push(Element::empty(variant));
                }
            }
        }
        element
            .attributes_mut()
            .insert("samples".to_string(), Element::with_value(Variant::Array, Value::Array(samples)));
    }

    if let Some(last) = collector.defaults.into_iter().last() {
        let BucketValue::Literal(literal) = last.value else {
            return element;
        };
        let default_element = match parse_primitive_literal(variant, &literal) {
            Some(value) => Element::with_value(variant, value),
            None => {
                warnings.push(Warning::invalid_literal(variant.reserved_name(), last.source_map));
                Element::empty(variant)
            }
        };
        element.attributes_mut().insert("default".to_string(), default_element);
    }

    element
}

fn wrap_compound(variant: Variant, children: Vec<Element>) -> Element {
    let value = match variant {
        Variant::Object => Value::Object(children),
        _ => Value::Array(children),
    };
    Element::with_value(variant, value)
}

fn finalize_compound(variant: Variant, collector: Collector, _warnings: &mut Vec<Warning>) -> Element {
    let mut element = Element::empty(variant);

    let mut children = Vec::new();
    for info in collector.values {
        if let BucketValue::Children(mut kids) = info.value {
            children.append(&mut kids);
        }
    }
    if !children.is_empty() {
        element.set_value(match variant {
            Variant::Object => Value::Object(children),
            _ => Value::Array(children),
        });
    }

    if !collector.samples.is_empty() {
        let samples = collector
            .samples
            .into_iter()
            .map(|info| match info.value {
                BucketValue::Children(kids) => wrap_compound(variant, kids),
                BucketValue::Literal(_) => Element::empty(variant),
            })
            .collect();
        element
            .attributes_mut()
            .insert("samples".to_string(), Element::with_value(Variant::Array, Value::Array(samples)));
    }

    if let Some(last) = collector.defaults.into_iter().last() {
        let default_element = match last.value {
            BucketValue::Children(kids) => wrap_compound(variant, kids),
            BucketValue::Literal(_) => Element::empty(variant),
        };
        element.attributes_mut().insert("default".to_string(), default_element);
    }

    element
}

fn finalize_enum(collector: Collector, _warnings: &mut Vec<Warning>) -> Element {
    let mut element = Element::empty(Variant::Enum);

    let mut enumerations = Vec::new();
    let mut chosen = None;

    if collector.values.len() == 1 {
        if let BucketValue::Children(mut kids) = collector.values.into_iter().next().unwrap().value {
            if kids.len() == 1 {
                chosen = kids.pop();
            } else {
                enumerations.append(&mut kids);
            }
        }
    } else {
        for info in collector.values {
            if let BucketValue::Children(mut kids) = info.value {
                enumerations.append(&mut kids);
            }
        }
    }

    for info in collector.enumerations {
        if let BucketValue::Children(mut kids) = info.value {
            enumerations.append(&mut kids);
        }
    }

    if let Some(value_element) = chosen {
        element.set_value(Value::Enum(Box::new(value_element)));
    }

    if !enumerations.is_empty() {
        element.attributes_mut().insert(
            "enumerations".to_string(),
            Element::with_value(Variant::Array, Value::Array(enumerations)),
        );
    }

    if !collector.samples.is_empty() {
        let samples = collector
            .samples
            .into_iter()
            .map(|info| match info.value {
                BucketValue::Children(kids) if kids.len() == 1 => {
                    Element::with_value(Variant::Enum, Value::Enum(Box::new(kids.into_iter().next().unwrap())))
                }
                _ => Element::empty(Variant::Enum),
            })
            .collect();
        element
            .attributes_mut()
            .insert("samples".to_string(), Element::with_value(Variant::Array, Value::Array(samples)));
    }

    if let Some(last) = collector.defaults.into_iter().last() {
        let default_element = match last.value {
            BucketValue::Children(kids) if kids.len() == 1 => {
                Element::with_value(Variant::Enum, Value::Enum(Box::new(kids.into_iter().next().unwrap())))
            }
            _ => Element::empty(Variant::Enum),
        };
        element.attributes_mut().insert("default".to_string(), default_element);
    }

    element
}

fn attach_descriptions(element: &mut Element, descriptions: Vec<(String, SourceMap)>) {
    if descriptions.is_empty() {
        return;
    }

    let mut text = String::new();
    let mut source_map = SourceMap::empty();

    for (description, sm) in descriptions {
        if description.is_empty() {
            continue;
        }
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&description);
        source_map = source_map.join(&sm);
    }

    if text.is_empty() {
        return;
    }

    let mut description_element = Element::with_value(Variant::String, Value::String(text));
    description_element.attach_source_map(&source_map);
    element.meta_mut().insert("description".to_string(), description_element);
}
