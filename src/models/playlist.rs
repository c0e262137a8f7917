//! Playlist-related models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{format_duration, require};
use super::song::Song;
use crate::api::FormBody;
use crate::converters::{string_field, u64_field};
use crate::error::Result;

/// A user playlist.
///
/// Decoded by hand because the backend sends the id both as `id` and as
/// `id_user_playlist` on some pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Value")]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Number of songs.
    pub song_count: u64,
    /// Total running time in seconds.
    pub total_duration: u64,
    pub created_at: String,
    /// Owner's display name.
    pub owner: String,
}

impl From<Value> for Playlist {
    fn from(value: Value) -> Self {
        Self {
            id: string_field(&value, &["id", "id_user_playlist"]),
            title: string_field(&value, &["title", "judul"]),
            description: string_field(&value, &["description", "deskripsi"]),
            song_count: u64_field(&value, &["song_count", "jumlah_lagu"]),
            total_duration: u64_field(&value, &["total_duration", "total_durasi"]),
            created_at: string_field(&value, &["created_at", "tanggal_dibuat"]),
            owner: string_field(&value, &["owner", "pembuat"]),
        }
    }
}

impl Playlist {
    /// Get total duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        format_duration(self.total_duration)
    }
}

/// A playlist with its songs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistDetail {
    #[serde(flatten)]
    pub playlist: Playlist,

    #[serde(default, alias = "lagu")]
    pub songs: Vec<Song>,
}

/// Create/edit form for a playlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistForm {
    pub title: String,
    pub description: String,
}

impl PlaylistForm {
    /// Create a new playlist form.
    pub fn new<S1: Into<String>, S2: Into<String>>(title: S1, description: S2) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        require("description", &self.description)
    }

    pub(crate) fn to_form(&self) -> FormBody {
        FormBody::new()
            .text("title", self.title.trim())
            .text("description", self.description.trim())
    }
}
