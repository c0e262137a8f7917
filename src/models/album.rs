//! Album-related models.
//!
//! Albums belong to a label and hold songs. Creating an album also creates
//! its first song, so [`NewAlbum`] embeds a [`NewSong`].

use serde::{Deserialize, Serialize};

use super::common::{format_duration, id_string, lenient_string, lenient_u64, require, OptionPair};
use crate::api::FormBody;
use crate::error::{ApiError, Result};

/// An album as listed on the album pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Album id.
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,

    /// Album title.
    #[serde(default, alias = "judul", deserialize_with = "lenient_string")]
    pub title: String,

    /// Name of the releasing label.
    #[serde(default, alias = "label_name", deserialize_with = "lenient_string")]
    pub label: String,

    /// Number of songs on the album.
    #[serde(default, alias = "jumlah_lagu", deserialize_with = "lenient_u64")]
    pub song_count: u64,

    /// Total running time in seconds.
    #[serde(default, alias = "total_durasi", deserialize_with = "lenient_u64")]
    pub total_duration: u64,
}

impl Album {
    /// Get total duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        format_duration(self.total_duration)
    }
}

/// Select lists needed by the album and song forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumFormOptions {
    pub labels: Vec<OptionPair>,
    pub artists: Vec<OptionPair>,
    pub songwriters: Vec<OptionPair>,
    pub genres: Vec<OptionPair>,
}

/// Song form, used on its own or as the first song of a new album.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSong {
    /// Song title.
    pub title: String,
    /// Performing artist id. Artists adding to their own album may leave it
    /// empty and the backend fills it in.
    pub artist: Option<String>,
    /// Songwriter ids.
    pub songwriters: Vec<String>,
    /// Genre ids.
    pub genres: Vec<String>,
    /// Duration in seconds.
    pub duration: u64,
}

impl NewSong {
    pub(crate) fn validate(&self) -> Result<()> {
        require("song title", &self.title)?;
        if self.songwriters.is_empty() {
            return Err(ApiError::Validation("songwriter"));
        }
        if self.genres.is_empty() {
            return Err(ApiError::Validation("genre"));
        }
        if self.duration == 0 {
            return Err(ApiError::Validation("duration"));
        }
        Ok(())
    }

    /// Append the song fields to a form. Multi-selects repeat their name.
    pub(crate) fn append_to(&self, form: FormBody, title_field: &str) -> FormBody {
        form.text(title_field, self.title.trim())
            .text_opt("artist", self.artist.as_deref().filter(|a| !a.is_empty()))
            .texts("songwriter", self.songwriters.iter().map(String::as_str))
            .texts("genre", self.genres.iter().map(String::as_str))
            .text("duration", self.duration.to_string())
    }
}

/// Album form: album fields plus its first song.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAlbum {
    /// Album title.
    pub title: String,
    /// Label id.
    pub label: String,
    /// First song.
    pub song: NewSong,
}

impl NewAlbum {
    pub(crate) fn validate(&self) -> Result<()> {
        require("album title", &self.title)?;
        require("label", &self.label)?;
        self.song.validate()
    }

    pub(crate) fn to_form(&self) -> FormBody {
        let form = FormBody::new()
            .text("title", self.title.trim())
            .text("label", self.label.as_str());
        self.song.append_to(form, "song_title")
    }
}
