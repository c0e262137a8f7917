//! Lenient JSON helpers.
//!
//! The backend is not consistent about how it encodes select lists, ids and
//! decimals. These functions normalise raw `serde_json::Value`s before they
//! reach the typed models.

use serde_json::Value;
use tracing::warn;

use crate::models::OptionPair;

/// Keys that may hold an option's submitted value.
const VALUE_KEYS: [&str; 3] = ["value", "id", "pk"];

/// Keys that may hold an option's display text.
const LABEL_KEYS: [&str; 5] = ["label", "name", "nama", "judul", "title"];

/// Render a scalar as a string; null and containers become empty.
pub fn as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Read a non-negative integer from a number or numeric string.
pub fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| *f >= 0.0).map(|f| f as u64),
        _ => None,
    }
}

/// Read a decimal from a number or numeric string.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a list of names from an array or a comma-separated string.
pub fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(_) => first_string(item, &LABEL_KEYS).unwrap_or_default(),
                other => as_string(other),
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Convert one select-list entry.
///
/// Accepts `[value, label]` pairs and objects using any of the usual
/// value/label keys. A lone scalar is its own label.
pub fn option_pair(value: &Value) -> Option<OptionPair> {
    match value {
        Value::Array(items) if items.len() == 2 => {
            Some(OptionPair::new(as_string(&items[0]), as_string(&items[1])))
        }
        Value::Object(_) => {
            let val = first_string(value, &VALUE_KEYS)?;
            let label = first_string(value, &LABEL_KEYS).unwrap_or_else(|| val.clone());
            Some(OptionPair::new(val, label))
        }
        Value::String(_) | Value::Number(_) => {
            let s = as_string(value);
            Some(OptionPair::new(s.clone(), s))
        }
        _ => None,
    }
}

/// Convert a whole select list, skipping entries that make no sense.
///
/// The list may be bare or wrapped in an object; see [`list_payload`] for
/// how the array is found.
pub fn parse_options(value: &Value, key: &str) -> Vec<OptionPair> {
    match list_payload(value.clone(), key) {
        Value::Array(items) => items.iter().filter_map(option_pair).collect(),
        _ => Vec::new(),
    }
}

/// Keys tried after the endpoint's own key when a list arrives wrapped.
const GENERIC_LIST_KEYS: [&str; 2] = ["data", "results"];

/// Unwrap a list response.
///
/// List endpoints answer either with a bare array or with an object holding
/// it. The array is taken from `key`, then from `data` or `results`, then
/// from the object's only array field. Anything else is an empty list.
pub fn list_payload(value: Value, key: &str) -> Value {
    let mut map = match value {
        Value::Array(_) => return value,
        Value::Object(map) => map,
        _ => return Value::Array(Vec::new()),
    };

    for k in std::iter::once(key).chain(GENERIC_LIST_KEYS) {
        if map.get(k).is_some_and(Value::is_array) {
            if let Some(items) = map.remove(k) {
                return items;
            }
        }
    }

    let mut arrays = map.into_iter().map(|(_, v)| v).filter(Value::is_array);
    match (arrays.next(), arrays.next()) {
        (Some(items), None) => items,
        (Some(_), Some(_)) => {
            warn!("Ambiguous list response: no {:?} field and several arrays", key);
            Value::Array(Vec::new())
        }
        _ => Value::Array(Vec::new()),
    }
}

/// Take the object under `key` when the backend wrapped the payload,
/// otherwise return the body unchanged.
pub fn unwrap_key(mut body: Value, key: &str) -> Value {
    if body.get(key).is_some_and(Value::is_object) {
        body[key].take()
    } else {
        body
    }
}

/// Text of the first key in `keys` holding a non-empty scalar.
///
/// Used where the backend may send a field under several names at once,
/// which serde aliases reject as a duplicate field.
pub fn string_field(value: &Value, keys: &[&str]) -> String {
    first_string(value, keys).unwrap_or_default()
}

/// First key in `keys` holding a non-negative number, or 0.
pub fn u64_field(value: &Value, keys: &[&str]) -> u64 {
    keys.iter()
        .filter_map(|k| value.get(k))
        .find_map(as_u64)
        .unwrap_or(0)
}

fn first_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| value.get(k))
        .map(as_string)
        .find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_pair_shapes() {
        assert_eq!(option_pair(&json!([3, "Indie"])), Some(OptionPair::new("3", "Indie")));
        assert_eq!(
            option_pair(&json!({"id": "ab-12", "nama": "Sony"})),
            Some(OptionPair::new("ab-12", "Sony"))
        );
        assert_eq!(
            option_pair(&json!({"value": 1, "label": "Pop"})),
            Some(OptionPair::new("1", "Pop"))
        );
        assert_eq!(option_pair(&json!("Rock")), Some(OptionPair::new("Rock", "Rock")));
        assert_eq!(option_pair(&json!({"label": "no value"})), None);
        assert_eq!(option_pair(&json!(null)), None);
    }

    #[test]
    fn test_parse_options_wrapped() {
        let options = parse_options(&json!({"genres": [["1", "Pop"], ["2", "Jazz"], null]}), "genres");
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].label, "Jazz");
        assert!(parse_options(&json!({"count": 0}), "genres").is_empty());
    }

    #[test]
    fn test_list_payload() {
        assert_eq!(list_payload(json!([1, 2]), "albums"), json!([1, 2]));
        assert_eq!(list_payload(json!({"status": "ok", "albums": [3]}), "albums"), json!([3]));
        assert_eq!(list_payload(json!({"status": "ok", "items": [4]}), "albums"), json!([4]));
        assert_eq!(list_payload(json!("nothing"), "albums"), json!([]));
    }

    #[test]
    fn test_list_payload_prefers_named_key_over_other_arrays() {
        let body = json!({"songs": [{"id": 1}], "album_genres": ["Jazz"]});
        assert_eq!(list_payload(body, "songs"), json!([{"id": 1}]));

        let body = json!({"album_genres": ["Jazz"], "data": [5]});
        assert_eq!(list_payload(body, "songs"), json!([5]));

        let body = json!({"a": [1], "b": [2]});
        assert_eq!(list_payload(body, "songs"), json!([]));
    }

    #[test]
    fn test_parse_options_picks_named_key() {
        let body = json!({"artists": [["a1", "Miles"]], "genres": [["g1", "Jazz"]]});
        assert_eq!(parse_options(&body, "genres"), vec![OptionPair::new("g1", "Jazz")]);
    }

    #[test]
    fn test_unwrap_key() {
        assert_eq!(unwrap_key(json!({"user": {"a": 1}}), "user"), json!({"a": 1}));
        assert_eq!(unwrap_key(json!({"user": "x", "b": 2}), "user"), json!({"user": "x", "b": 2}));
    }

    #[test]
    fn test_numeric_helpers() {
        assert_eq!(as_u64(&json!(12)), Some(12));
        assert_eq!(as_u64(&json!("240")), Some(240));
        assert_eq!(as_u64(&json!(-1)), None);
        assert_eq!(as_f64(&json!("49900.00")), Some(49900.0));
        assert_eq!(as_f64(&json!(null)), None);
    }

    #[test]
    fn test_field_lookup_prefers_earlier_keys() {
        let body = json!({"id": 7, "id_user_playlist": "c0ffee", "judul": "", "title": "Mix"});
        assert_eq!(string_field(&body, &["id", "id_user_playlist"]), "7");
        assert_eq!(string_field(&body, &["judul", "title"]), "Mix");
        assert_eq!(string_field(&body, &["missing"]), "");

        let body = json!({"jumlah_lagu": "3", "song_count": null});
        assert_eq!(u64_field(&body, &["song_count", "jumlah_lagu"]), 3);
        assert_eq!(u64_field(&body, &["nope"]), 0);
    }

    #[test]
    fn test_string_list() {
        assert_eq!(string_list(&json!("Pop, Jazz ,")), vec!["Pop", "Jazz"]);
        assert_eq!(
            string_list(&json!([{"name": "Ann"}, "Bob", ""])),
            vec!["Ann", "Bob"]
        );
        assert!(string_list(&json!(null)).is_empty());
    }
}
