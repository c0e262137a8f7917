//! Podcast and episode models.

use serde::{Deserialize, Serialize};

use super::common::{
    format_duration, id_string, lenient_string, lenient_u64, require, string_list, CalendarDate,
};
use crate::api::FormBody;
use crate::error::{ApiError, Result};

/// A podcast show.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Podcast {
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,

    #[serde(default, alias = "judul", deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, alias = "genre", deserialize_with = "string_list")]
    pub genres: Vec<String>,

    /// Podcaster display name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub podcaster: String,

    #[serde(default, alias = "jumlah_episode", deserialize_with = "lenient_u64")]
    pub episode_count: u64,

    /// Total running time in seconds.
    #[serde(default, alias = "total_durasi", deserialize_with = "lenient_u64")]
    pub total_duration: u64,

    #[serde(default, alias = "tanggal_rilis", deserialize_with = "lenient_string")]
    pub release_date: String,
}

impl Podcast {
    /// Get total duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        format_duration(self.total_duration)
    }
}

/// One podcast episode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    #[serde(default, alias = "id_episode", deserialize_with = "id_string")]
    pub id: String,

    #[serde(default, alias = "judul", deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, alias = "deskripsi", deserialize_with = "lenient_string")]
    pub description: String,

    /// Duration in seconds.
    #[serde(default, alias = "durasi", deserialize_with = "lenient_u64")]
    pub duration: u64,

    #[serde(default, alias = "tanggal_rilis", deserialize_with = "lenient_string")]
    pub release_date: String,
}

impl Episode {
    /// Parsed release date.
    pub fn release(&self) -> CalendarDate {
        CalendarDate::parse(&self.release_date)
    }

    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        format_duration(self.duration)
    }
}

/// A podcast with its episodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PodcastDetail {
    #[serde(flatten)]
    pub podcast: Podcast,

    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// Form for a new podcast.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPodcast {
    pub title: String,
    /// Genre ids.
    pub genres: Vec<String>,
}

impl NewPodcast {
    pub(crate) fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        if self.genres.is_empty() {
            return Err(ApiError::Validation("genre"));
        }
        Ok(())
    }

    pub(crate) fn to_form(&self) -> FormBody {
        FormBody::new()
            .text("title", self.title.trim())
            .texts("genre", self.genres.iter().map(String::as_str))
    }
}

/// Form for a new episode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEpisode {
    pub title: String,
    pub description: String,
    /// Duration in seconds.
    pub duration: u64,
}

impl NewEpisode {
    pub(crate) fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        if self.duration == 0 {
            return Err(ApiError::Validation("duration"));
        }
        Ok(())
    }

    pub(crate) fn to_form(&self) -> FormBody {
        FormBody::new()
            .text("title", self.title.trim())
            .text("description", self.description.trim())
            .text("duration", self.duration.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_podcast_detail_from_backend_json() {
        let detail: PodcastDetail = serde_json::from_value(json!({
            "id": 4,
            "judul": "Rust in Production",
            "genre": "Tech, Talk",
            "podcaster": "Ann",
            "total_durasi": "3600",
            "episodes": [
                {"id_episode": "e1", "judul": "Pilot", "durasi": 1800, "tanggal_rilis": "2024-03-02"}
            ]
        }))
        .unwrap();

        assert_eq!(detail.podcast.genres, vec!["Tech", "Talk"]);
        assert_eq!(detail.podcast.duration_formatted(), "1:00:00");
        assert_eq!(detail.episodes[0].id, "e1");
        assert_eq!(detail.episodes[0].release().month, Some(3));
    }

    #[test]
    fn test_new_episode_validation() {
        let episode = NewEpisode {
            title: "Pilot".into(),
            description: "first".into(),
            duration: 0,
        };
        assert_eq!(episode.validate().unwrap_err().to_string(), "duration is required");
    }

    #[test]
    fn test_new_podcast_form() {
        let podcast = NewPodcast {
            title: "Show".into(),
            genres: vec!["1".into(), "2".into()],
        };
        assert!(podcast.validate().is_ok());
        assert_eq!(podcast.to_form().values("genre"), vec!["1", "2"]);
    }
}
