use num_traits::ToPrimitive;
use refract_element::{Element, Value};
use serde_json::{Map, Number, Value as Json};

/// Serialize a schema (or any generic Refract object/array/literal tree)
/// to `serde_json::Value`, 1:1, preserving member order (§6.2). This is
/// the crate's only materialization boundary; everything upstream stays
/// inside the `Element`/`Value` model, which doubles as the schema's own
/// representation rather than a parallel ADT.
pub fn to_json_value(element: &Element) -> Json {
    match element.value() {
        None => Json::Null,
        Some(Value::Null) => Json::Null,
        Some(Value::Bool(b)) => Json::Bool(*b),
        Some(Value::Number(n)) => number_to_json(*n),
        Some(Value::String(s)) => Json::String(s.clone()),
        Some(Value::Array(items)) => Json::Array(items.iter().map(to_json_value).collect()),
        Some(Value::Object(members)) => {
            let mut map = Map::new();
            for member in members {
                if let Some((key, value)) = member.value().and_then(Value::as_member) {
                    if let Some(key_str) = key.value().and_then(Value::as_string) {
                        map.insert(key_str.to_string(), to_json_value(value));
                    }
                }
            }
            Json::Object(map)
        }
        Some(Value::Member { value, .. }) => to_json_value(value),
        Some(Value::Enum(inner)) => to_json_value(inner),
        Some(Value::Ref(symbol)) => Json::String(symbol.clone()),
        Some(Value::Extend(items) | Value::Option(items) | Value::Select(items)) => {
            Json::Array(items.iter().map(to_json_value).collect())
        }
        Some(Value::Holder(inner)) => to_json_value(inner),
    }
}

/// Whole-number values serialize as JSON integers rather than `4.0`.
fn number_to_json(n: f64) -> Json {
    if let Some(i) = n.to_i64() {
        if i as f64 == n {
            return Json::Number(Number::from(i));
        }
    }
    Number::from_f64(n).map(Json::Number).unwrap_or(Json::Null)
}
