//! Resource clients: one group of calls per backend area.
//!
//! Each group borrows the [`ApiClient`](crate::ApiClient) and maps its
//! arguments onto a single dispatcher call (album form options excepted,
//! which fans out to four).

mod albums;
mod auth;
mod charts;
mod playlists;
mod podcasts;
mod royalties;
pub mod search;
mod songs;
mod subscriptions;

pub use albums::Albums;
pub use auth::Auth;
pub use charts::Charts;
pub use playlists::Playlists;
pub use podcasts::Podcasts;
pub use royalties::Royalties;
pub use search::Search;
pub use songs::Songs;
pub use subscriptions::Subscriptions;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::ApiClient;
use crate::converters;
use crate::error::{ApiError, Result};
use crate::models::common::require;
use crate::models::OptionPair;

/// GET a list endpoint and decode its items. `key` names the array when
/// the backend wraps the list in an object.
async fn fetch_list<T: DeserializeOwned>(api: &ApiClient, path: &str, key: &str) -> Result<Vec<T>> {
    let body: Value = api.get_json(path).await?;
    Ok(serde_json::from_value(converters::list_payload(body, key))?)
}

/// GET a select-list endpoint.
async fn fetch_options(api: &ApiClient, path: &str, key: &str) -> Result<Vec<OptionPair>> {
    let body: Value = api.get_json(path).await?;
    Ok(converters::parse_options(&body, key))
}

/// Percent-encode one path parameter so it stays a single segment.
///
/// Blank values fail as missing; `.` and `..` fail outright since no
/// encoding stops a URL parser from resolving them.
pub(crate) fn segment(field: &'static str, value: &str) -> Result<String> {
    require(field, value)?;
    let value = value.trim();
    if value == "." || value == ".." {
        return Err(ApiError::InvalidPathSegment {
            field,
            value: value.to_string(),
        });
    }
    Ok(urlencoding::encode(value).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encodes_reserved_characters() {
        assert_eq!(segment("chart type", "Top?10").unwrap(), "Top%3F10");
        assert_eq!(segment("chart type", " R&B / Soul ").unwrap(), "R%26B%20%2F%20Soul");
        assert_eq!(segment("song", "../user").unwrap(), "..%2Fuser");
        assert_eq!(segment("song", "a#b").unwrap(), "a%23b");
        assert_eq!(segment("song", "%2e%2e").unwrap(), "%252e%252e");
        assert_eq!(segment("song", "42").unwrap(), "42");
    }

    #[test]
    fn test_segment_rejects_blank_and_dot_segments() {
        assert!(matches!(segment("song", "  "), Err(ApiError::Validation("song"))));
        for value in [".", " .. "] {
            assert!(matches!(
                segment("song", value),
                Err(ApiError::InvalidPathSegment { field: "song", .. })
            ));
        }
    }
}
