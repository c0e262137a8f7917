//! Song models.

use serde::{Deserialize, Serialize};

use super::common::{
    format_duration, id_string, lenient_string, lenient_u64, string_list, CalendarDate,
};

/// A song row in album, playlist and download lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Song {
    /// Song id.
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,

    /// Song title.
    #[serde(default, alias = "judul", deserialize_with = "lenient_string")]
    pub title: String,

    /// Performing artist name.
    #[serde(default, alias = "artist_name", deserialize_with = "lenient_string")]
    pub artist: String,

    /// Duration in seconds.
    #[serde(default, alias = "durasi", deserialize_with = "lenient_u64")]
    pub duration: u64,

    /// Times played.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_plays: u64,

    /// Times downloaded.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_downloads: u64,

    /// Download date, for the downloaded-songs list.
    #[serde(default, alias = "tanggal_download", deserialize_with = "lenient_string")]
    pub downloaded_at: String,
}

impl Song {
    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        format_duration(self.duration)
    }
}

/// Full song page data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SongDetail {
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,

    #[serde(default, alias = "judul", deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, alias = "artist_name", deserialize_with = "lenient_string")]
    pub artist: String,

    #[serde(default, deserialize_with = "string_list")]
    pub genres: Vec<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub songwriters: Vec<String>,

    /// Duration in seconds.
    #[serde(default, alias = "durasi", deserialize_with = "lenient_u64")]
    pub duration: u64,

    /// Release date, `YYYY-MM-DD`.
    #[serde(default, alias = "tanggal_rilis", deserialize_with = "lenient_string")]
    pub release_date: String,

    #[serde(default, alias = "tahun", deserialize_with = "lenient_u64")]
    pub year: u64,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_plays: u64,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_downloads: u64,

    /// Album title.
    #[serde(default, alias = "album_title", deserialize_with = "lenient_string")]
    pub album: String,
}

impl SongDetail {
    /// Parsed release date.
    pub fn release(&self) -> CalendarDate {
        CalendarDate::parse(&self.release_date)
    }

    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        format_duration(self.duration)
    }
}
