//! Top chart models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{id_string, lenient_string, lenient_u64};
use crate::converters::string_field;

/// A chart listed on the charts page (daily, weekly, monthly, yearly).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Value")]
pub struct Chart {
    /// Chart type, used as the detail path segment.
    pub chart_type: String,

    /// Display title; falls back to the type when the backend sends none.
    pub title: String,
}

impl From<Value> for Chart {
    fn from(value: Value) -> Self {
        Self {
            chart_type: string_field(&value, CHART_TYPE_KEYS),
            title: string_field(&value, &["title", "judul"]),
        }
    }
}

/// Names the backend uses for the chart type, sometimes several at once.
const CHART_TYPE_KEYS: &[&str] = &["chart_type", "tipe", "type"];

impl Chart {
    /// Title to show.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.chart_type
        } else {
            &self.title
        }
    }
}

/// One ranked song in a chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartEntry {
    #[serde(default, alias = "id_song", deserialize_with = "id_string")]
    pub song_id: String,

    #[serde(default, alias = "judul", deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, alias = "artist_name", deserialize_with = "lenient_string")]
    pub artist: String,

    #[serde(default, alias = "tanggal_rilis", deserialize_with = "lenient_string")]
    pub release_date: String,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_plays: u64,
}

/// A chart with its ranked songs, best first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Value")]
pub struct ChartDetail {
    pub chart_type: String,
    pub entries: Vec<ChartEntry>,
}

impl TryFrom<Value> for ChartDetail {
    type Error = serde_json::Error;

    fn try_from(mut value: Value) -> std::result::Result<Self, Self::Error> {
        let entries: Vec<ChartEntry> = ["entries", "songs", "lagu"]
            .iter()
            .find(|k| value.get(**k).is_some_and(Value::is_array))
            .map(|k| value[*k].take())
            .map(serde_json::from_value::<Vec<ChartEntry>>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            chart_type: string_field(&value, CHART_TYPE_KEYS),
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chart_detail_from_backend_json() {
        let detail: ChartDetail = serde_json::from_value(json!({
            "tipe": "Weekly Top 20",
            "songs": [
                {"id_song": 1, "judul": "A", "artist": "X", "total_plays": 90},
                {"id_song": 2, "judul": "B", "artist": "Y", "total_plays": "75"}
            ]
        }))
        .unwrap();

        assert_eq!(detail.chart_type, "Weekly Top 20");
        assert_eq!(detail.entries.len(), 2);
        assert_eq!(detail.entries[1].total_plays, 75);
    }

    #[test]
    fn test_chart_with_several_type_names() {
        let chart: Chart =
            serde_json::from_value(json!({"tipe": "Daily Top 20", "type": "daily"})).unwrap();
        assert_eq!(chart.chart_type, "Daily Top 20");

        let detail: ChartDetail = serde_json::from_value(json!({
            "chart_type": "weekly",
            "tipe": "Weekly Top 20",
            "songs": [{"id_song": 3, "judul": "C"}]
        }))
        .unwrap();
        assert_eq!(detail.chart_type, "weekly");
        assert_eq!(detail.entries[0].song_id, "3");
    }

    #[test]
    fn test_display_title_fallback() {
        let chart: Chart = serde_json::from_value(json!({"type": "daily"})).unwrap();
        assert_eq!(chart.display_title(), "daily");
    }
}
