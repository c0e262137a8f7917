//! Search result model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::converters::string_field;

/// One hit from the catalogue search: a song, podcast or user playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Value")]
pub struct SearchResult {
    /// Kind of item ("SONG", "PODCAST", "USER PLAYLIST").
    pub kind: String,
    pub title: String,
    /// Artist, podcaster or playlist owner.
    pub creator: String,
    /// Id used to open the item.
    pub id: String,
}

impl From<Value> for SearchResult {
    fn from(value: Value) -> Self {
        Self {
            kind: string_field(&value, &["kind", "type", "tipe"]),
            title: string_field(&value, &["title", "judul"]),
            creator: string_field(&value, &["creator", "by", "oleh"]),
            id: string_field(&value, &["id"]),
        }
    }
}

impl SearchResult {
    /// Whether any text field contains `needle`, which must be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.creator, &self.kind]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
