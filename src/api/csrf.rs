//! Anti-forgery token retrieval.
//!
//! The backend hands out a CSRF token per session. Mutating requests echo
//! it back in the `X-CSRFToken` header. Fetching it is best-effort: any
//! failure yields `None` and the request goes ahead without the header.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Body fields that may carry the token, in lookup order.
const TOKEN_FIELDS: [&str; 3] = ["csrfToken", "csrf_token", "token"];

/// Fetch a fresh token from `url`. Never fails; problems are logged.
pub(crate) async fn fetch_csrf_token(client: &Client, url: &str) -> Option<String> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Error fetching CSRF token: {}", e);
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!("Failed to fetch CSRF token: status {}", status);
        return None;
    }

    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(e) => {
            warn!("CSRF token response was not JSON: {}", e);
            return None;
        }
    };

    let token = parse_token(&body);
    if token.is_none() {
        warn!("CSRF token response had no token field");
    } else {
        debug!("Fetched CSRF token");
    }
    token
}

/// Pull the token string out of the token endpoint's JSON body.
pub(crate) fn parse_token(body: &Value) -> Option<String> {
    TOKEN_FIELDS
        .iter()
        .find_map(|field| body.get(field).and_then(|t| t.as_str()))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_token_fields() {
        assert_eq!(parse_token(&json!({"csrfToken": "a"})).as_deref(), Some("a"));
        assert_eq!(parse_token(&json!({"csrf_token": "b"})).as_deref(), Some("b"));
        assert_eq!(parse_token(&json!({"token": "c"})).as_deref(), Some("c"));
    }

    #[test]
    fn test_parse_token_missing_or_empty() {
        assert_eq!(parse_token(&json!({})), None);
        assert_eq!(parse_token(&json!({"csrfToken": ""})), None);
        assert_eq!(parse_token(&json!({"csrfToken": 5})), None);
        assert_eq!(parse_token(&json!("plain")), None);
    }
}
