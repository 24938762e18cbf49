//! Producer and studio lookup.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MalError;
use crate::jikan::request::LIMIT_RANGE;
use crate::jikan::{extract, FromRecord, Query, Record};

/// Parameters for `get_producer_details`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProducerParams {
    /// Studio or producer name, e.g. "Madhouse", "Kyoto Animation". Default: "Toei Animation"
    #[serde(default = "default_query")]
    pub query: Option<String>,
    /// Number of results, 1-25. Default: 5
    #[serde(default = "default_limit")]
    pub limit: Option<u32>,
}

fn default_query() -> Option<String> {
    Some("Toei Animation".to_string())
}

fn default_limit() -> Option<u32> {
    Some(5)
}

impl Default for ProducerParams {
    fn default() -> Self {
        Self {
            query: default_query(),
            limit: default_limit(),
        }
    }
}

impl ProducerParams {
    pub fn to_query(&self) -> Result<Query, MalError> {
        Query::new()
            .text("q", self.query.as_deref())
            .bounded("limit", self.limit, LIMIT_RANGE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProducerDetails {
    pub mal_id: i64,
    /// Primary name (first listed title)
    pub name: String,
    /// Every name MAL lists for this company
    pub titles: Vec<String>,
    pub about: String,
    /// Founding date as reported by MAL
    pub established: String,
    pub favorites: i64,
    /// Number of anime credited to this company
    pub count: i64,
}

impl FromRecord for ProducerDetails {
    const KIND: &'static str = "producer";

    fn from_record(record: &Record) -> Self {
        let titles = extract::string_list(record, "titles", "title");
        Self {
            mal_id: extract::integer(record, "mal_id"),
            name: titles.first().cloned().unwrap_or_default(),
            titles,
            about: extract::string(record, "about"),
            established: extract::string(record, "established"),
            favorites: extract::integer(record, "favorites"),
            count: extract::integer(record, "count"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_titles_skip_malformed_entries() {
        let record = json!({
            "mal_id": 18,
            "titles": [
                { "type": "Default", "title": "Toei Animation" },
                "Toei Doga",
                { "type": "Japanese", "title": "東映アニメーション" }
            ],
            "about": null,
            "count": 1105
        });
        let producer = ProducerDetails::from_record(record.as_object().unwrap());
        assert_eq!(producer.name, "Toei Animation");
        assert_eq!(producer.titles, vec!["Toei Animation", "東映アニメーション"]);
        assert_eq!(producer.about, "");
        assert_eq!(producer.count, 1105);
    }

    #[test]
    fn test_default_query_targets_toei() {
        let query = ProducerParams::default().to_query().unwrap();
        assert_eq!(query.get("q"), Some("Toei Animation"));
        assert_eq!(query.get("limit"), Some("5"));
    }
}
