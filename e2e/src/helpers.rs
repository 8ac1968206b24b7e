use std::collections::HashMap;

use log::*;
use serde_json::Value;

/// True if every field of `part` is present, with the same value, in `complete`. Arrays must match element by
/// element; `null` in `part` matches anything.
pub fn json_is_subset_of(part: &str, complete: &str) -> bool {
    match (serde_json::from_str::<Value>(part), serde_json::from_str::<Value>(complete)) {
        (Ok(part), Ok(complete)) => value_is_subset_of(&part, &complete),
        (Err(e), _) | (_, Err(e)) => {
            error!("Cannot compare invalid JSON. {e}");
            false
        },
    }
}

pub fn value_is_subset_of(part: &Value, complete: &Value) -> bool {
    match (part, complete) {
        (Value::Null, _) => true,
        (Value::Object(fields), Value::Object(other)) => fields.iter().all(|(key, value)| match other.get(key) {
            Some(v) if value_is_subset_of(value, v) => true,
            Some(v) => {
                error!("Value mismatch for {key}: {value} != {v}");
                false
            },
            None => {
                error!("Key not found: {key}");
                false
            },
        }),
        (Value::Array(items), Value::Array(other)) => {
            if items.len() != other.len() {
                error!("Array length mismatch: {} != {}", items.len(), other.len());
                return false;
            }
            items.iter().zip(other).all(|(p, c)| value_is_subset_of(p, c))
        },
        (Value::Object(_) | Value::Array(_), _) => {
            error!("Shape mismatch. Expected {part}, got {complete}");
            false
        },
        _ => part == complete,
    }
}

/// Replaces every `{name}` in `path` with the remembered value for `name`. Unknown placeholders are left alone.
pub fn expand_placeholders(path: &str, values: &HashMap<String, String>) -> String {
    values.iter().fold(path.to_string(), |acc, (name, value)| acc.replace(&format!("{{{name}}}"), value))
}

/// A top-level field of a JSON body, as a string. Numbers are rendered without quotes.
pub fn json_field(body: &str, field: &str) -> Option<String> {
    let json = serde_json::from_str::<Value>(body).ok()?;
    match json.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scalars() {
        assert!(json_is_subset_of("1", "1"));
        assert!(!json_is_subset_of("1", "2"));
        assert!(json_is_subset_of("null", "true"));
        assert!(!json_is_subset_of("{nope", "{}"));
    }

    #[test]
    fn arrays_must_match_in_length() {
        assert!(json_is_subset_of("[1, 2, 3]", "[1, 2, 3]"));
        assert!(!json_is_subset_of("[1, 2, 3]", "[1, 2, 3, 4]"));
        assert!(!json_is_subset_of("[1]", r#"{"a": 1}"#));
    }

    #[test]
    fn listing_subset() {
        let complete = r#"{
            "listing_id": 7001,
            "state": "active",
            "price": {"amount": 4500, "divisor": 100, "currency_code": "USD"},
            "tags": ["silver", "necklace"]
        }"#;
        assert!(json_is_subset_of(r#"{"state": "active", "price": {"amount": 4500}}"#, complete));
        assert!(!json_is_subset_of(r#"{"state": "draft"}"#, complete));
        assert!(!json_is_subset_of(r#"{"shop_id": 5001}"#, complete));
        assert!(!json_is_subset_of(r#"{"tags": ["silver"]}"#, complete));
        assert!(!json_is_subset_of(complete, r#"{"listing_id": 7001}"#));
    }

    #[test]
    fn placeholders() {
        let values = HashMap::from([("listing_id".to_string(), "123".to_string())]);
        let path = expand_placeholders("/v3/application/shops/5001/listings/{listing_id}/images/{image}", &values);
        assert_eq!(path, "/v3/application/shops/5001/listings/123/images/{image}");
    }

    #[test]
    fn fields() {
        let body = r#"{"listing_id": 123, "state": "draft", "alt_text": null}"#;
        assert_eq!(json_field(body, "listing_id").as_deref(), Some("123"));
        assert_eq!(json_field(body, "state").as_deref(), Some("draft"));
        assert_eq!(json_field(body, "alt_text"), None);
        assert_eq!(json_field("not json", "state"), None);
    }
}
