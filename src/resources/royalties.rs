use super::fetch_list;
use crate::api::ApiClient;
use crate::error::Result;
use crate::models::Royalty;

/// Royalty statements for artists, songwriters and labels.
#[derive(Debug, Clone, Copy)]
pub struct Royalties<'a> {
    api: &'a ApiClient,
}

impl<'a> Royalties<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Per-song royalties for the current user or label.
    pub async fn list(&self) -> Result<Vec<Royalty>> {
        fetch_list(self.api, "/royalti/", "royalties").await
    }

    /// Sum of all royalty amounts.
    pub async fn total(&self) -> Result<f64> {
        Ok(Royalty::sum(&self.list().await?))
    }
}
