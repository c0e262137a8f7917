//! Podcasts and episodes.

use serde_json::Value;

use super::{fetch_list, fetch_options, segment};
use crate::api::ApiClient;
use crate::converters::unwrap_key;
use crate::error::Result;
use crate::models::{Ack, NewEpisode, NewPodcast, OptionPair, Podcast, PodcastDetail};

const BASE: &str = "/podcast";

#[derive(Debug, Clone, Copy)]
pub struct Podcasts<'a> {
    api: &'a ApiClient,
}

impl<'a> Podcasts<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Podcasts visible to the user (a podcaster sees their own).
    pub async fn list(&self) -> Result<Vec<Podcast>> {
        fetch_list(self.api, &format!("{}/", BASE), "podcasts").await
    }

    /// One podcast with its episodes.
    pub async fn detail(&self, podcast_id: &str) -> Result<PodcastDetail> {
        let podcast_id = segment("podcast", podcast_id)?;
        let body: Value = self
            .api
            .get_json(&format!("{}/{}/", BASE, podcast_id))
            .await?;
        Ok(serde_json::from_value(unwrap_key(body, "podcast"))?)
    }

    /// Genre select list for the podcast form.
    pub async fn genres(&self) -> Result<Vec<OptionPair>> {
        fetch_options(self.api, &format!("{}/genres/", BASE), "genres").await
    }

    /// Create a podcast.
    pub async fn create(&self, podcast: &NewPodcast) -> Result<Ack> {
        podcast.validate()?;
        let path = format!("{}/create/", BASE);
        Ok(self.api.post_form(&path, podcast.to_form()).await?.into())
    }

    /// Delete a podcast and its episodes.
    pub async fn delete(&self, podcast_id: &str) -> Result<Ack> {
        let podcast_id = segment("podcast", podcast_id)?;
        let path = format!("{}/{}/delete/", BASE, podcast_id);
        Ok(self.api.post_empty(&path).await?.into())
    }

    /// Publish an episode.
    pub async fn create_episode(&self, podcast_id: &str, episode: &NewEpisode) -> Result<Ack> {
        let podcast_id = segment("podcast", podcast_id)?;
        episode.validate()?;
        let path = format!("{}/{}/episode/create/", BASE, podcast_id);
        Ok(self.api.post_form(&path, episode.to_form()).await?.into())
    }

    /// Delete an episode.
    pub async fn delete_episode(&self, episode_id: &str) -> Result<Ack> {
        let episode_id = segment("episode", episode_id)?;
        let path = format!("{}/episode/{}/delete/", BASE, episode_id);
        Ok(self.api.post_empty(&path).await?.into())
    }
}
