//! Discriminated decode of REST response envelopes
//!
//! The admin API wraps payloads inconsistently: some endpoints return
//! `{"data": {"data": [...]}}`, some `{"data": [...]}`, some a bare payload.
//! Decoding branches on the actual shape and fails loudly on anything else
//! instead of silently defaulting to an empty list.

use crate::shared::error::DataError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Декодировать тело ответа со списком записей
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, DataError> {
    let value: Value = serde_json::from_str(body)?;
    let items = extract_array(value)?;
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(DataError::from))
        .collect()
}

/// Декодировать тело ответа с одной записью.
/// Один уровень конверта `data` снимается, если его значение — объект.
pub fn decode_one<T: DeserializeOwned>(body: &str) -> Result<T, DataError> {
    let mut value: Value = serde_json::from_str(body)?;
    if let Value::Object(map) = &mut value {
        if matches!(map.get("data"), Some(Value::Object(_))) {
            if let Some(inner) = map.remove("data") {
                value = inner;
            }
        }
    }
    serde_json::from_value(value).map_err(DataError::from)
}

/// Найти массив записей: сам payload, `data` или `data.data`
fn extract_array(value: Value) -> Result<Vec<Value>, DataError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            Some(Value::Object(mut inner)) => match inner.remove("data") {
                Some(Value::Array(items)) => Ok(items),
                Some(other) => Err(unexpected_shape("data.data", &other)),
                None => Err(DataError::decode(
                    "response `data` object carries no list payload",
                )),
            },
            Some(other) => Err(unexpected_shape("data", &other)),
            None => Err(DataError::decode("response object has no `data` field")),
        },
        other => Err(unexpected_shape("payload", &other)),
    }
}

fn unexpected_shape(at: &str, value: &Value) -> DataError {
    DataError::decode(format!("unexpected response shape at `{}`", at))
        .with_details(json_kind(value).to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
        name: String,
    }

    #[test]
    fn test_bare_array() {
        let items: Vec<Item> = decode_list(r#"[{"id": 1, "name": "a"}]"#).unwrap();
        assert_eq!(items, vec![Item { id: 1, name: "a".into() }]);
    }

    #[test]
    fn test_single_envelope() {
        let items: Vec<Item> =
            decode_list(r#"{"data": [{"id": 1, "name": "a"}], "total": 1}"#).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_double_envelope() {
        let items: Vec<Item> =
            decode_list(r#"{"data": {"data": [{"id": 1, "name": "a"}], "page": 1}}"#).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_unexpected_shape_fails_loudly() {
        let err = decode_list::<Item>(r#"{"data": "oops"}"#).unwrap_err();
        assert_eq!(err.code, "DECODE_ERROR");
        assert_eq!(err.details.as_deref(), Some("string"));

        let err = decode_list::<Item>(r#"42"#).unwrap_err();
        assert_eq!(err.code, "DECODE_ERROR");
    }

    #[test]
    fn test_decode_one_with_and_without_envelope() {
        let bare: Item = decode_one(r#"{"id": 2, "name": "b"}"#).unwrap();
        assert_eq!(bare.id, 2);

        let wrapped: Item = decode_one(r#"{"data": {"id": 3, "name": "c"}}"#).unwrap();
        assert_eq!(wrapped.id, 3);
    }
}
