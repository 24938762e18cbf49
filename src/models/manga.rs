//! Manga tool parameters and mapped records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MalError;
use crate::jikan::request::{query_enum, SortDirection, LIMIT_RANGE};
use crate::jikan::{extract, FromRecord, Query, Record};

query_enum! {
    /// Publishing status filter.
    MangaStatus {
        Publishing => "publishing",
        Complete => "complete",
        Hiatus => "hiatus",
        Discontinued => "discontinued",
        Upcoming => "upcoming",
    }
}

query_enum! {
    /// Field to order manga search results by.
    MangaOrderBy {
        MalId => "mal_id",
        Title => "title",
        StartDate => "start_date",
        EndDate => "end_date",
        Chapters => "chapters",
        Volumes => "volumes",
        Score => "score",
        Rank => "rank",
        Popularity => "popularity",
    }
}

query_enum! {
    /// Ranking list to draw top manga from.
    TopMangaFilter {
        Publishing => "publishing",
        Upcoming => "upcoming",
        ByPopularity => "bypopularity",
        Favorite => "favorite",
    }
}

/// Parameters for `search_manga`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MangaSearchParams {
    /// Title or keywords to search for
    #[serde(default)]
    pub query: Option<String>,
    /// Number of results, 1-25. Default: 5
    #[serde(default = "default_search_limit")]
    pub limit: Option<u32>,
    /// Default: complete
    #[serde(default = "default_status")]
    pub status: Option<MangaStatus>,
    /// Default: popularity
    #[serde(default = "default_order_by")]
    pub order_by: Option<MangaOrderBy>,
    /// Default: desc
    #[serde(default = "default_sort")]
    pub sort: Option<SortDirection>,
    /// Earliest start date: YYYY, YYYY-MM or YYYY-MM-DD
    #[serde(default)]
    pub start_date: Option<String>,
    /// Latest end date: YYYY, YYYY-MM or YYYY-MM-DD
    #[serde(default)]
    pub end_date: Option<String>,
}

fn default_search_limit() -> Option<u32> {
    Some(5)
}

fn default_status() -> Option<MangaStatus> {
    Some(MangaStatus::Complete)
}

fn default_order_by() -> Option<MangaOrderBy> {
    Some(MangaOrderBy::Popularity)
}

fn default_sort() -> Option<SortDirection> {
    Some(SortDirection::Desc)
}

impl Default for MangaSearchParams {
    fn default() -> Self {
        Self {
            query: None,
            limit: default_search_limit(),
            status: default_status(),
            order_by: default_order_by(),
            sort: default_sort(),
            start_date: None,
            end_date: None,
        }
    }
}

impl MangaSearchParams {
    pub fn to_query(&self) -> Result<Query, MalError> {
        Ok(Query::new()
            .text("q", self.query.as_deref())
            .bounded("limit", self.limit, LIMIT_RANGE)?
            .opt("status", self.status)
            .opt("order_by", self.order_by)
            .opt("sort", self.sort)
            .date("start_date", self.start_date.as_deref())?
            .date("end_date", self.end_date.as_deref())?)
    }
}

/// Parameters for `get_top_manga`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TopMangaParams {
    /// Default: bypopularity
    #[serde(default = "default_top_filter")]
    pub filter: Option<TopMangaFilter>,
    /// Number of results, 1-25. Default: 10
    #[serde(default = "default_top_limit")]
    pub limit: Option<u32>,
}

fn default_top_filter() -> Option<TopMangaFilter> {
    Some(TopMangaFilter::ByPopularity)
}

fn default_top_limit() -> Option<u32> {
    Some(10)
}

impl Default for TopMangaParams {
    fn default() -> Self {
        Self {
            filter: default_top_filter(),
            limit: default_top_limit(),
        }
    }
}

impl TopMangaParams {
    pub fn to_query(&self) -> Result<Query, MalError> {
        Ok(Query::new()
            .opt("filter", self.filter)
            .bounded("limit", self.limit, LIMIT_RANGE)?)
    }
}

/// Full manga record returned by search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MangaDetails {
    pub mal_id: i64,
    /// English title when MAL has one, otherwise the default title
    pub title: String,
    pub chapters: i64,
    pub volumes: i64,
    pub status: String,
    pub publishing: bool,
    pub start_date: String,
    pub end_date: String,
    pub score: f64,
    pub scored_by: i64,
    pub rank: i64,
    pub popularity: i64,
    pub favorites: i64,
    pub synopsis: String,
    pub background: String,
    pub author_mal_ids: Vec<i64>,
    pub author_names: Vec<String>,
    pub genre_ids: Vec<i64>,
    pub genre_names: Vec<String>,
}

impl FromRecord for MangaDetails {
    const KIND: &'static str = "manga";

    fn from_record(record: &Record) -> Self {
        let (start_date, end_date) = extract::date_span(record, "published");
        let (author_mal_ids, author_names) = extract::id_name_lists(record, "authors");
        let (genre_ids, genre_names) = extract::id_name_lists(record, "genres");

        Self {
            mal_id: extract::integer(record, "mal_id"),
            title: extract::first_string(record, &["title_english", "title"]),
            chapters: extract::integer(record, "chapters"),
            volumes: extract::integer(record, "volumes"),
            status: extract::string(record, "status"),
            publishing: extract::boolean(record, "publishing"),
            start_date,
            end_date,
            score: extract::float(record, "score"),
            scored_by: extract::integer(record, "scored_by"),
            rank: extract::integer(record, "rank"),
            popularity: extract::integer(record, "popularity"),
            favorites: extract::integer(record, "favorites"),
            synopsis: extract::string(record, "synopsis"),
            background: extract::string(record, "background"),
            author_mal_ids,
            author_names,
            genre_ids,
            genre_names,
        }
    }
}

/// Compact manga record returned by rankings and the random pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MangaOverview {
    pub mal_id: i64,
    pub title: String,
    /// Manga, Novel, Light Novel, One-shot, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub chapters: i64,
    pub volumes: i64,
    pub status: String,
    pub rank: i64,
    pub synopsis: String,
}

impl FromRecord for MangaOverview {
    const KIND: &'static str = "manga";

    fn from_record(record: &Record) -> Self {
        Self {
            mal_id: extract::integer(record, "mal_id"),
            title: extract::first_string(record, &["title_english", "title"]),
            kind: extract::string(record, "type"),
            chapters: extract::integer(record, "chapters"),
            volumes: extract::integer(record, "volumes"),
            status: extract::string(record, "status"),
            rank: extract::integer(record, "rank"),
            synopsis: extract::string(record, "synopsis"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_maps_published_span_and_authors() {
        let record = json!({
            "mal_id": 2,
            "title": "Berserk",
            "title_english": null,
            "volumes": null,
            "publishing": true,
            "published": { "from": "1989-08-25T00:00:00+00:00", "to": null },
            "authors": [
                { "mal_id": 1868, "name": "Miura, Kentarou" },
                { "mal_id": 49592, "name": "Studio Gaga" }
            ],
            "genres": [{ "mal_id": 1, "name": "Action" }, 7]
        });
        let manga = MangaDetails::from_record(record.as_object().unwrap());

        assert_eq!(manga.title, "Berserk");
        assert_eq!(manga.volumes, 0);
        assert!(manga.publishing);
        assert_eq!(manga.start_date, "1989-08-25T00:00:00+00:00");
        assert_eq!(manga.end_date, "");
        assert_eq!(manga.author_mal_ids, vec![1868, 49592]);
        assert_eq!(manga.author_names.len(), 2);
        assert_eq!(manga.genre_ids, vec![1]);
        assert_eq!(manga.genre_names, vec!["Action".to_string()]);
    }

    #[test]
    fn test_search_defaults_include_complete_status() {
        let query = MangaSearchParams::default().to_query().unwrap();
        assert_eq!(query.get("status"), Some("complete"));
        assert_eq!(query.get("q"), None);
    }

    #[test]
    fn test_bad_start_date_fails_before_request() {
        let params = MangaSearchParams {
            start_date: Some("last year".into()),
            ..Default::default()
        };
        let err = params.to_query().unwrap_err();
        assert!(err.to_string().contains("start_date"));
    }

    #[test]
    fn test_anime_only_filter_is_rejected_for_manga() {
        let result: Result<TopMangaParams, _> =
            serde_json::from_value(json!({ "filter": "airing" }));
        assert!(result.is_err());
    }
}
