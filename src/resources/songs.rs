//! Song page actions: play, download, add to playlist.

use serde_json::{json, Value};

use super::{fetch_list, segment};
use crate::api::ApiClient;
use crate::converters::unwrap_key;
use crate::error::Result;
use crate::models::common::require;
use crate::models::{Ack, Song, SongDetail};

#[derive(Debug, Clone, Copy)]
pub struct Songs<'a> {
    api: &'a ApiClient,
}

impl<'a> Songs<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Full details for one song.
    pub async fn detail(&self, song_id: &str) -> Result<SongDetail> {
        let song_id = segment("song", song_id)?;
        let body: Value = self.api.get_json(&format!("/play-song/{}/", song_id)).await?;
        Ok(serde_json::from_value(unwrap_key(body, "song"))?)
    }

    /// Record a play.
    pub async fn play(&self, song_id: &str) -> Result<Ack> {
        let song_id = segment("song", song_id)?;
        let path = format!("/play-song/{}/play/", song_id);
        Ok(self.api.post_empty(&path).await?.into())
    }

    /// Download for offline listening (premium only; the backend decides).
    pub async fn download(&self, song_id: &str) -> Result<Ack> {
        let song_id = segment("song", song_id)?;
        let path = format!("/play-song/{}/download/", song_id);
        Ok(self.api.post_empty(&path).await?.into())
    }

    /// Add the song to one of the user's playlists.
    pub async fn add_to_playlist(&self, song_id: &str, playlist_id: &str) -> Result<Ack> {
        let song_id = segment("song", song_id)?;
        require("playlist", playlist_id)?;
        let path = format!("/play-song/{}/add-to-playlist/", song_id);
        let body = json!({ "playlist_id": playlist_id });
        Ok(self.api.post_json(&path, body).await?.into())
    }

    /// Songs the user has downloaded.
    pub async fn downloaded(&self) -> Result<Vec<Song>> {
        fetch_list(self.api, "/downloaded-songs/", "songs").await
    }

    /// Remove a downloaded song.
    pub async fn delete_download(&self, song_id: &str) -> Result<Ack> {
        let song_id = segment("song", song_id)?;
        let path = format!("/downloaded-songs/{}/delete/", song_id);
        Ok(self.api.post_empty(&path).await?.into())
    }
}
