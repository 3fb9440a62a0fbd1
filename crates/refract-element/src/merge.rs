use thiserror::Error;

use crate::element::Element;
use crate::value::Value;
use crate::variant::Variant;

/// Failure folding an `extend`'s children together (§4.1).
#[derive(Debug, Error, PartialEq)]
pub enum MergeError {
    #[error("cannot merge elements of incompatible variants {0:?} and {1:?}")]
    IncompatibleVariants(Variant, Variant),
}

/// Fold an `extend`'s children left-to-right into a single owned element,
/// or `None` if the sequence is empty or every child is empty (§4.1,
/// mirroring the reference implementation's `ExtendElement::merge`).
///
/// `meta`/`attributes` combine last-write-wins; `value` combines per
/// variant: primitives keep the last non-empty value, the sequence variants
/// concatenate their children, objects concatenate member lists without
/// deduplicating keys.
pub fn merge_extend(children: &[Element]) -> Result<Option<Element>, MergeError> {
    let mut children = children.iter().filter(|e| !e.is_empty() || has_meta_or_attrs(e));
    let Some(first) = children.next() else {
        return Ok(None);
    };

    let mut acc = first.clone();
    for next in children {
        merge_into(&mut acc, next)?;
    }

    Ok(Some(acc))
}

fn has_meta_or_attrs(e: &Element) -> bool {
    !e.meta().is_empty() || !e.attributes().is_empty()
}

fn merge_into(acc: &mut Element, next: &Element) -> Result<(), MergeError> {
    for (key, value) in next.meta() {
        acc.meta_mut().insert(key.clone(), value.clone());
    }
    for (key, value) in next.attributes() {
        acc.attributes_mut().insert(key.clone(), value.clone());
    }

    match (acc.value_mut(), next.value()) {
        (_, None) => {}
        (None, Some(v)) => acc.set_value(v.clone()),
        (Some(a), Some(b)) => merge_values(acc.variant(), a, b)?,
    }

    Ok(())
}

fn merge_values(variant: Variant, a: &mut Value, b: &Value) -> Result<(), MergeError> {
    match (a, b) {
        (Value::Array(items), Value::Array(more)) => items.extend(more.iter().cloned()),
        (Value::Object(members), Value::Object(more)) => members.extend(more.iter().cloned()),
        (Value::Extend(items), Value::Extend(more)) => items.extend(more.iter().cloned()),
        (Value::Option(items), Value::Option(more)) => items.extend(more.iter().cloned()),
        (Value::Select(items), Value::Select(more)) => items.extend(more.iter().cloned()),
        (a @ Value::Bool(_), Value::Bool(_))
        | (a @ Value::Number(_), Value::Number(_))
        | (a @ Value::String(_), Value::String(_))
        | (a @ Value::Null, Value::Null)
        | (a @ Value::Enum(_), Value::Enum(_))
        | (a @ Value::Ref(_), Value::Ref(_))
        | (a @ Value::Holder(_), Value::Holder(_)) => *a = b.clone(),
        (a @ Value::Member { .. }, Value::Member { .. }) => *a = b.clone(),
        (existing, incoming) => {
            return Err(MergeError::IncompatibleVariants(
                variant_of(existing),
                variant_of(incoming),
            ));
        }
    }
    Ok(())
}

fn variant_of(value: &Value) -> Variant {
    match value {
        Value::Null => Variant::Null,
        Value::Bool(_) => Variant::Bool,
        Value::Number(_) => Variant::Number,
        Value::String(_) => Variant::String,
        Value::Array(_) => Variant::Array,
        Value::Object(_) => Variant::Object,
        Value::Enum(_) => Variant::Enum,
        Value::Member { .. } => Variant::Member,
        Value::Ref(_) => Variant::Ref,
        Value::Extend(_) => Variant::Extend,
        Value::Option(_) => Variant::Option,
        Value::Select(_) => Variant::Select,
        Value::Holder(_) => Variant::Holder,
    }
}
