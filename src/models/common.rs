//! Common types shared across all models.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::ApiResponse;
use crate::converters;
use crate::error::{ApiError, Result};

/// One entry of a select list: the value submitted and the text shown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Value")]
pub struct OptionPair {
    /// Value sent back to the backend (usually an id).
    pub value: String,
    /// Human-readable label.
    pub label: String,
}

impl OptionPair {
    /// Create a new option pair.
    pub fn new<S1: Into<String>, S2: Into<String>>(value: S1, label: S2) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl TryFrom<Value> for OptionPair {
    type Error = String;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        converters::option_pair(&value).ok_or_else(|| format!("not an option pair: {}", value))
    }
}

/// Outcome of a mutating call: the backend's message plus whatever it sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ack {
    /// Message suitable for a notification.
    pub message: Option<String>,
    /// Raw response body.
    pub data: Value,
}

impl From<ApiResponse> for Ack {
    fn from(response: ApiResponse) -> Self {
        let message = response.message();
        let data = match response {
            ApiResponse::Json(value) => value,
            ApiResponse::Text(text) => Value::String(text),
        };
        Self { message, data }
    }
}

/// Calendar date as the backend sends it.
///
/// Not all fields may be available; year is always present when known,
/// but month and day may be unknown.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    /// Year.
    pub year: i32,

    /// Month (1-12), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    /// Day (1-31), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl CalendarDate {
    /// Parse "YYYY-MM-DD", ignoring any time part after it.
    pub fn parse(date_str: &str) -> Self {
        let date_part = date_str
            .trim()
            .split(|c: char| c == 'T' || c == ' ')
            .next()
            .unwrap_or("");

        if date_part.is_empty() {
            return Self::default();
        }

        let parts: Vec<&str> = date_part.split('-').collect();

        Self {
            year: parts.first().and_then(|s| s.parse().ok()).unwrap_or(0),
            month: parts.get(1).and_then(|s| s.parse().ok()),
            day: parts.get(2).and_then(|s| s.parse().ok()),
        }
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.month, self.day) {
            (Some(m), Some(d)) => write!(f, "{:04}-{:02}-{:02}", self.year, m, d),
            (Some(m), None) => write!(f, "{:04}-{:02}", self.year, m),
            _ => write!(f, "{:04}", self.year),
        }
    }
}

/// Format a duration in seconds as `MM:SS`, or `H:MM:SS` past an hour.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Reject blank required form fields before anything is sent.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(field));
    }
    Ok(())
}

/// Ids arrive as numbers from some endpoints and strings (UUIDs) from others.
pub(crate) fn id_string<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!("invalid id: {}", other))),
    }
}

/// Counters and durations; tolerates numeric strings and null.
pub(crate) fn lenient_u64<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<u64, D::Error> {
    Ok(converters::as_u64(&Value::deserialize(d)?).unwrap_or(0))
}

/// Prices and royalty amounts; decimal fields arrive as strings.
pub(crate) fn lenient_f64<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<f64, D::Error> {
    Ok(converters::as_f64(&Value::deserialize(d)?).unwrap_or(0.0))
}

/// Free-text fields that may be null.
pub(crate) fn lenient_string<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<String, D::Error> {
    Ok(converters::as_string(&Value::deserialize(d)?))
}

/// Name lists that may arrive as an array or a comma-separated string.
pub(crate) fn string_list<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<Vec<String>, D::Error> {
    Ok(converters::string_list(&Value::deserialize(d)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_date_full() {
        let date = CalendarDate::parse("2023-05-15");
        assert_eq!(date.year, 2023);
        assert_eq!(date.month, Some(5));
        assert_eq!(date.day, Some(15));
    }

    #[test]
    fn test_parse_datetime_drops_time() {
        let date = CalendarDate::parse("2024-01-31T10:15:00Z");
        assert_eq!(date.to_string(), "2024-01-31");
    }

    #[test]
    fn test_parse_date_empty() {
        assert_eq!(CalendarDate::parse("").year, 0);
        assert_eq!(CalendarDate::parse("2020").to_string(), "2020");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(245), "04:05");
        assert_eq!(format_duration(3725), "1:02:05");
    }

    #[test]
    fn test_require() {
        assert!(require("title", "Kind of Blue").is_ok());
        assert!(matches!(require("title", "   "), Err(ApiError::Validation("title"))));
    }

    #[test]
    fn test_option_pair_from_json() {
        let pair: OptionPair = serde_json::from_value(json!(["7", "Jazz"])).unwrap();
        assert_eq!(pair, OptionPair::new("7", "Jazz"));
        assert!(serde_json::from_value::<OptionPair>(json!(true)).is_err());
    }

    #[test]
    fn test_ack_from_response() {
        let ack = Ack::from(ApiResponse::Json(json!({"message": "Deleted", "id": 3})));
        assert_eq!(ack.message.as_deref(), Some("Deleted"));
        assert_eq!(ack.data["id"], 3);
    }
}
