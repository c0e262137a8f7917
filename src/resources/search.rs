//! Catalogue search and client-side narrowing of its results.

use serde_json::Value;
use tracing::debug;

use crate::api::{ApiClient, RequestOptions};
use crate::converters;
use crate::error::Result;
use crate::models::SearchResult;

#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    api: &'a ApiClient,
}

impl<'a> Search<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Search songs, podcasts and playlists. A blank query returns nothing
    /// without contacting the backend.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let body: Value = self
            .api
            .request("/search/", RequestOptions::get().query("q", query))
            .await?
            .into_json()?;
        let results: Vec<SearchResult> =
            serde_json::from_value(converters::list_payload(body, "results"))?;

        debug!("Search {:?} returned {} results", query, results.len());
        Ok(results)
    }

    /// Search, then keep only the results matching `filter_text`.
    pub async fn search_filtered(
        &self,
        query: &str,
        filter_text: &str,
    ) -> Result<Vec<SearchResult>> {
        Ok(filter(self.search(query).await?, filter_text))
    }
}

/// Keep the results whose title, creator or kind contains `filter_text`,
/// ignoring case and surrounding whitespace. Order is preserved; an empty
/// filter keeps everything.
pub fn filter(results: Vec<SearchResult>, filter_text: &str) -> Vec<SearchResult> {
    let needle = filter_text.trim().to_lowercase();
    if needle.is_empty() {
        return results;
    }
    results.into_iter().filter(|r| r.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: &str, title: &str, creator: &str) -> SearchResult {
        SearchResult {
            kind: kind.into(),
            title: title.into(),
            creator: creator.into(),
            id: String::new(),
        }
    }

    fn sample() -> Vec<SearchResult> {
        vec![
            result("SONG", "Blue in Green", "Miles Davis"),
            result("PODCAST", "Jazz Hour", "Ann"),
            result("USER PLAYLIST", "Blue Monday", "bob"),
        ]
    }

    #[test]
    fn test_filter_case_insensitive_keeps_order() {
        let titles: Vec<String> = filter(sample(), "  BLUE ")
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Blue in Green", "Blue Monday"]);
    }

    #[test]
    fn test_filter_matches_creator_and_kind() {
        assert_eq!(filter(sample(), "miles").len(), 1);
        assert_eq!(filter(sample(), "podcast")[0].title, "Jazz Hour");
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(filter(sample(), "").len(), 3);
        assert_eq!(filter(sample(), "   ").len(), 3);
        assert!(filter(sample(), "zzz").is_empty());
    }
}
