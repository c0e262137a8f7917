//! Albums and their songs.

use tracing::debug;

use super::{fetch_list, fetch_options, segment};
use crate::api::{ApiClient, FormBody};
use crate::error::Result;
use crate::models::{Ack, Album, AlbumFormOptions, NewAlbum, NewSong, Song};

const BASE: &str = "/daftar-album-song";

/// Album management for artists, songwriters and labels.
#[derive(Debug, Clone, Copy)]
pub struct Albums<'a> {
    api: &'a ApiClient,
}

impl<'a> Albums<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Albums the current user worked on.
    pub async fn list_albums(&self) -> Result<Vec<Album>> {
        fetch_list(self.api, &format!("{}/list-album/", BASE), "albums").await
    }

    /// Albums released by the current label.
    pub async fn list_label_albums(&self) -> Result<Vec<Album>> {
        fetch_list(self.api, &format!("{}/label-albums/", BASE), "albums").await
    }

    /// Songs on one album.
    pub async fn list_songs(&self, album_id: &str) -> Result<Vec<Song>> {
        let album_id = segment("album", album_id)?;
        fetch_list(self.api, &format!("{}/list-song/{}/", BASE, album_id), "songs").await
    }

    /// Select lists for the album and song forms, fetched concurrently.
    pub async fn form_options(&self) -> Result<AlbumFormOptions> {
        let labels_path = format!("{}/labels/", BASE);
        let artists_path = format!("{}/artists/", BASE);
        let songwriters_path = format!("{}/songwriters/", BASE);
        let genres_path = format!("{}/genres/", BASE);

        let (labels, artists, songwriters, genres) = tokio::try_join!(
            fetch_options(self.api, &labels_path, "labels"),
            fetch_options(self.api, &artists_path, "artists"),
            fetch_options(self.api, &songwriters_path, "songwriters"),
            fetch_options(self.api, &genres_path, "genres"),
        )?;

        debug!(
            "Loaded album form options: {} labels, {} artists, {} songwriters, {} genres",
            labels.len(),
            artists.len(),
            songwriters.len(),
            genres.len()
        );

        Ok(AlbumFormOptions {
            labels,
            artists,
            songwriters,
            genres,
        })
    }

    /// Create an album together with its first song.
    pub async fn create_album(&self, album: &NewAlbum) -> Result<Ack> {
        album.validate()?;
        let path = format!("{}/create-album/", BASE);
        Ok(self.api.post_form(&path, album.to_form()).await?.into())
    }

    /// Add a song to an existing album.
    pub async fn create_song(&self, album_id: &str, song: &NewSong) -> Result<Ack> {
        let album_id = segment("album", album_id)?;
        song.validate()?;
        let path = format!("{}/create-song/{}/", BASE, album_id);
        let form = song.append_to(FormBody::new(), "title");
        Ok(self.api.post_form(&path, form).await?.into())
    }

    /// Delete an album and its songs.
    pub async fn delete_album(&self, album_id: &str) -> Result<Ack> {
        let album_id = segment("album", album_id)?;
        let path = format!("{}/delete-album/{}/", BASE, album_id);
        Ok(self.api.post_empty(&path).await?.into())
    }

    /// Delete one song.
    pub async fn delete_song(&self, song_id: &str) -> Result<Ack> {
        let song_id = segment("song", song_id)?;
        let path = format!("{}/delete-song/{}/", BASE, song_id);
        Ok(self.api.post_empty(&path).await?.into())
    }
}
