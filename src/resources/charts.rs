use serde_json::Value;

use super::{fetch_list, segment};
use crate::api::ApiClient;
use crate::converters::unwrap_key;
use crate::error::Result;
use crate::models::{Chart, ChartDetail};

#[derive(Debug, Clone, Copy)]
pub struct Charts<'a> {
    api: &'a ApiClient,
}

impl<'a> Charts<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Available charts.
    pub async fn list(&self) -> Result<Vec<Chart>> {
        fetch_list(self.api, "/chart/", "charts").await
    }

    /// Ranked songs of one chart. The type is percent-encoded into a
    /// single path segment.
    pub async fn detail(&self, chart_type: &str) -> Result<ChartDetail> {
        let encoded = segment("chart type", chart_type)?;
        let body: Value = self.api.get_json(&format!("/chart/{}/", encoded)).await?;

        let mut detail: ChartDetail = serde_json::from_value(unwrap_key(body, "chart"))?;
        if detail.chart_type.is_empty() {
            detail.chart_type = chart_type.trim().to_string();
        }
        Ok(detail)
    }
}
