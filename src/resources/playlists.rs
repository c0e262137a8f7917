//! User playlists.

use serde_json::{json, Value};

use super::{fetch_list, segment};
use crate::api::ApiClient;
use crate::converters::unwrap_key;
use crate::error::Result;
use crate::models::common::require;
use crate::models::{Ack, Playlist, PlaylistDetail, PlaylistForm};

const BASE: &str = "/user-playlist";

/// Playlist management for the logged-in user.
#[derive(Debug, Clone, Copy)]
pub struct Playlists<'a> {
    api: &'a ApiClient,
}

impl<'a> Playlists<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// The user's playlists.
    pub async fn list(&self) -> Result<Vec<Playlist>> {
        fetch_list(self.api, &format!("{}/", BASE), "playlists").await
    }

    /// One playlist with its songs.
    pub async fn detail(&self, playlist_id: &str) -> Result<PlaylistDetail> {
        let playlist_id = segment("playlist", playlist_id)?;
        let body: Value = self
            .api
            .get_json(&format!("{}/{}/", BASE, playlist_id))
            .await?;
        Ok(serde_json::from_value(unwrap_key(body, "playlist"))?)
    }

    /// Create a playlist.
    pub async fn create(&self, form: &PlaylistForm) -> Result<Ack> {
        form.validate()?;
        let path = format!("{}/create/", BASE);
        Ok(self.api.post_form(&path, form.to_form()).await?.into())
    }

    /// Change a playlist's title and description.
    pub async fn update(&self, playlist_id: &str, form: &PlaylistForm) -> Result<Ack> {
        let playlist_id = segment("playlist", playlist_id)?;
        form.validate()?;
        let path = format!("{}/{}/edit/", BASE, playlist_id);
        Ok(self.api.post_form(&path, form.to_form()).await?.into())
    }

    /// Delete a playlist.
    pub async fn delete(&self, playlist_id: &str) -> Result<Ack> {
        let playlist_id = segment("playlist", playlist_id)?;
        let path = format!("{}/{}/delete/", BASE, playlist_id);
        Ok(self.api.post_empty(&path).await?.into())
    }

    /// Add a song to a playlist.
    pub async fn add_song(&self, playlist_id: &str, song_id: &str) -> Result<Ack> {
        let playlist_id = segment("playlist", playlist_id)?;
        require("song", song_id)?;
        let path = format!("{}/{}/add-song/", BASE, playlist_id);
        let body = json!({ "song_id": song_id });
        Ok(self.api.post_json(&path, body).await?.into())
    }

    /// Remove a song from a playlist.
    pub async fn remove_song(&self, playlist_id: &str, song_id: &str) -> Result<Ack> {
        let playlist_id = segment("playlist", playlist_id)?;
        let song_id = segment("song", song_id)?;
        let path = format!("{}/{}/remove-song/{}/", BASE, playlist_id, song_id);
        Ok(self.api.post_empty(&path).await?.into())
    }

    /// Play every song of the playlist in shuffled order.
    pub async fn shuffle_play(&self, playlist_id: &str) -> Result<Ack> {
        let playlist_id = segment("playlist", playlist_id)?;
        let path = format!("{}/{}/shuffle/", BASE, playlist_id);
        Ok(self.api.post_empty(&path).await?.into())
    }
}
