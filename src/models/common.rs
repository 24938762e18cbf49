//! Shapes shared by the anime and manga tools: ID-keyed inputs, reviews,
//! recommendations and news.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MalError;
use crate::jikan::{extract, request, FromRecord, Query, Record};

/// Ordered list result. MCP structured output must be an object, so list
/// tools wrap their records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Listing<T> {
    /// Number of records in `results`
    pub count: usize,
    /// Records in upstream order
    pub results: Vec<T>,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

/// Input for tools keyed only by a MyAnimeList ID.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MalIdInput {
    /// MyAnimeList ID (e.g. 16498 for Attack on Titan)
    pub id: u32,
}

impl MalIdInput {
    pub fn validated_id(&self) -> Result<u32, MalError> {
        request::mal_id(self.id)
    }
}

/// Review filters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReviewParams {
    /// Include preliminary reviews. Must be true for titles still airing or publishing. Default: true
    #[serde(default = "default_preliminary")]
    pub preliminary: Option<bool>,
    /// Include reviews flagged as containing spoilers. Default: false
    #[serde(default = "default_spoilers")]
    pub spoilers: Option<bool>,
}

fn default_preliminary() -> Option<bool> {
    Some(true)
}

fn default_spoilers() -> Option<bool> {
    Some(false)
}

impl Default for ReviewParams {
    fn default() -> Self {
        Self {
            preliminary: default_preliminary(),
            spoilers: default_spoilers(),
        }
    }
}

impl ReviewParams {
    pub fn to_query(&self) -> Query {
        Query::new()
            .opt("preliminary", self.preliminary)
            .opt("spoilers", self.spoilers)
    }
}

/// Input for the review tools: an ID plus optional filters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReviewsInput {
    /// MyAnimeList ID of the anime or manga
    pub id: u32,
    #[serde(default)]
    pub params: ReviewParams,
}

/// One user review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Review {
    pub mal_id: i64,
    pub username: String,
    /// Reviewer's score, 1-10 (0 when absent)
    pub score: i64,
    pub date: String,
    pub review: String,
    pub is_spoiler: bool,
    pub is_preliminary: bool,
}

impl FromRecord for Review {
    const KIND: &'static str = "review";

    fn from_record(record: &Record) -> Self {
        Self {
            mal_id: extract::integer(record, "mal_id"),
            username: extract::nested_string(record, "user", "username"),
            score: extract::integer(record, "score"),
            date: extract::string(record, "date"),
            review: extract::string(record, "review"),
            is_spoiler: extract::boolean(record, "is_spoiler"),
            is_preliminary: extract::boolean(record, "is_preliminary"),
        }
    }
}

/// A title users recommend alongside the requested one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub mal_id: i64,
    pub title: String,
    /// Number of users backing this recommendation
    pub votes: i64,
}

impl FromRecord for Recommendation {
    const KIND: &'static str = "recommendation";

    fn from_record(record: &Record) -> Self {
        let (mal_id, title) = extract::entry(record);
        Self {
            mal_id,
            title,
            votes: extract::integer(record, "votes"),
        }
    }
}

/// A news article about a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NewsArticle {
    pub mal_id: i64,
    pub title: String,
    pub date: String,
    pub author_username: String,
    pub url: String,
    pub excerpt: String,
}

impl FromRecord for NewsArticle {
    const KIND: &'static str = "news article";

    fn from_record(record: &Record) -> Self {
        Self {
            mal_id: extract::integer(record, "mal_id"),
            title: extract::string(record, "title"),
            date: extract::string(record, "date"),
            author_username: extract::string(record, "author_username"),
            url: extract::string(record, "url"),
            excerpt: extract::string(record, "excerpt"),
        }
    }
}
