//! Anime tool parameters and mapped records.

use chrono::{Datelike, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MalError;
use crate::jikan::request::{
    query_enum, season_year, AudienceRating, SortDirection, LIMIT_RANGE,
};
use crate::jikan::{extract, Endpoint, FromRecord, Query, Record};

query_enum! {
    /// Airing status filter.
    AnimeStatus {
        Airing => "airing",
        Complete => "complete",
        Upcoming => "upcoming",
    }
}

query_enum! {
    /// Field to order anime search results by.
    AnimeOrderBy {
        MalId => "mal_id",
        Title => "title",
        StartDate => "start_date",
        EndDate => "end_date",
        Episodes => "episodes",
        Score => "score",
        Rank => "rank",
        Popularity => "popularity",
    }
}

query_enum! {
    /// Ranking list to draw top anime from.
    TopAnimeFilter {
        Airing => "airing",
        Upcoming => "upcoming",
        ByPopularity => "bypopularity",
        Favorite => "favorite",
    }
}

query_enum! {
    Season {
        Winter => "winter",
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
    }
}

/// Parameters for `search_anime`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnimeSearchParams {
    /// Title or keywords to search for
    #[serde(default)]
    pub query: Option<String>,
    /// Number of results, 1-25. Default: 5
    #[serde(default = "default_search_limit")]
    pub limit: Option<u32>,
    #[serde(default)]
    pub status: Option<AnimeStatus>,
    #[serde(default)]
    pub rating: Option<AudienceRating>,
    /// Default: popularity
    #[serde(default = "default_order_by")]
    pub order_by: Option<AnimeOrderBy>,
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

fn default_order_by() -> Option<AnimeOrderBy> {
    Some(AnimeOrderBy::Popularity)
}

fn default_sort() -> Option<SortDirection> {
    Some(SortDirection::Desc)
}

impl Default for AnimeSearchParams {
    fn default() -> Self {
        Self {
            query: None,
            limit: default_search_limit(),
            status: None,
            rating: None,
            order_by: default_order_by(),
            sort: default_sort(),
            start_date: None,
            end_date: None,
        }
    }
}

impl AnimeSearchParams {
    pub fn to_query(&self) -> Result<Query, MalError> {
        Ok(Query::new()
            .text("q", self.query.as_deref())
            .bounded("limit", self.limit, LIMIT_RANGE)?
            .opt("status", self.status)
            .opt("rating", self.rating)
            .opt("order_by", self.order_by)
            .opt("sort", self.sort)
            .date("start_date", self.start_date.as_deref())?
            .date("end_date", self.end_date.as_deref())?)
    }
}

/// Parameters for `get_top_anime`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TopAnimeParams {
    /// Default: airing
    #[serde(default = "default_top_filter")]
    pub filter: Option<TopAnimeFilter>,
    #[serde(default)]
    pub rating: Option<AudienceRating>,
    /// Number of results, 1-25. Default: 10
    #[serde(default = "default_top_limit")]
    pub limit: Option<u32>,
}

fn default_top_filter() -> Option<TopAnimeFilter> {
    Some(TopAnimeFilter::Airing)
}

fn default_top_limit() -> Option<u32> {
    Some(10)
}

impl Default for TopAnimeParams {
    fn default() -> Self {
        Self {
            filter: default_top_filter(),
            rating: None,
            limit: default_top_limit(),
        }
    }
}

impl TopAnimeParams {
    pub fn to_query(&self) -> Result<Query, MalError> {
        Ok(Query::new()
            .opt("filter", self.filter)
            .opt("rating", self.rating)
            .bounded("limit", self.limit, LIMIT_RANGE)?)
    }
}

/// Parameters for `get_seasonal_anime`. Both values go into the URL path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeasonalAnimeParams {
    /// Default: spring
    #[serde(default = "default_season")]
    pub season: Option<Season>,
    /// Four-digit year. Default: the current year
    #[serde(default = "default_year")]
    pub year: Option<i32>,
}

fn default_season() -> Option<Season> {
    Some(Season::Spring)
}

fn default_year() -> Option<i32> {
    Some(Utc::now().year())
}

impl Default for SeasonalAnimeParams {
    fn default() -> Self {
        Self {
            season: default_season(),
            year: default_year(),
        }
    }
}

impl SeasonalAnimeParams {
    pub fn endpoint(&self) -> Result<Endpoint, MalError> {
        let season = self.season.unwrap_or(Season::Spring);
        let year = self.year.unwrap_or_else(|| Utc::now().year());
        Ok(Endpoint::Season {
            year: season_year(year)?,
            season: season.as_str(),
        })
    }
}

/// Full anime record returned by search and seasonal listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnimeDetails {
    pub mal_id: i64,
    pub title: String,
    pub episodes: i64,
    pub status: String,
    pub airing: bool,
    pub start_date: String,
    pub end_date: String,
    pub duration: String,
    pub rating: String,
    pub score: f64,
    pub scored_by: i64,
    pub rank: i64,
    pub popularity: i64,
    pub favorites: i64,
    pub synopsis: String,
    pub background: String,
    pub season: String,
    pub year: i64,
    pub producer_mal_ids: Vec<i64>,
    pub producer_names: Vec<String>,
    pub studio_ids: Vec<i64>,
    pub studio_names: Vec<String>,
    pub genre_ids: Vec<i64>,
    pub genre_names: Vec<String>,
}

impl FromRecord for AnimeDetails {
    const KIND: &'static str = "anime";

    fn from_record(record: &Record) -> Self {
        let (start_date, end_date) = extract::date_span(record, "aired");
        let (producer_mal_ids, producer_names) = extract::id_name_lists(record, "producers");
        let (studio_ids, studio_names) = extract::id_name_lists(record, "studios");
        let (genre_ids, genre_names) = extract::id_name_lists(record, "genres");

        Self {
            mal_id: extract::integer(record, "mal_id"),
            title: extract::string(record, "title"),
            episodes: extract::integer(record, "episodes"),
            status: extract::string(record, "status"),
            airing: extract::boolean(record, "airing"),
            start_date,
            end_date,
            duration: extract::string(record, "duration"),
            rating: extract::string(record, "rating"),
            score: extract::float(record, "score"),
            scored_by: extract::integer(record, "scored_by"),
            rank: extract::integer(record, "rank"),
            popularity: extract::integer(record, "popularity"),
            favorites: extract::integer(record, "favorites"),
            synopsis: extract::string(record, "synopsis"),
            background: extract::string(record, "background"),
            season: extract::string(record, "season"),
            year: extract::integer(record, "year"),
            producer_mal_ids,
            producer_names,
            studio_ids,
            studio_names,
            genre_ids,
            genre_names,
        }
    }
}

/// Compact anime record returned by rankings and the random pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnimeOverview {
    pub mal_id: i64,
    /// English title when MAL has one, otherwise the default title
    pub title: String,
    /// TV, Movie, OVA, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub episodes: i64,
    pub status: String,
    pub rating: String,
    pub rank: i64,
    pub synopsis: String,
    pub season: String,
    pub year: i64,
}

impl FromRecord for AnimeOverview {
    const KIND: &'static str = "anime";

    fn from_record(record: &Record) -> Self {
        Self {
            mal_id: extract::integer(record, "mal_id"),
            title: extract::first_string(record, &["title_english", "title"]),
            kind: extract::string(record, "type"),
            episodes: extract::integer(record, "episodes"),
            status: extract::string(record, "status"),
            rating: extract::string(record, "rating"),
            rank: extract::integer(record, "rank"),
            synopsis: extract::string(record, "synopsis"),
            season: extract::string(record, "season"),
            year: extract::integer(record, "year"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_maps_search_record_with_aired_span_and_producers() {
        let record = json!({
            "mal_id": 16498,
            "title": "Attack on Titan",
            "episodes": 25,
            "aired": { "from": "2013-04-07", "to": "2013-09-29" },
            "producers": [{ "mal_id": 1, "name": "Studio X" }]
        });
        let anime = AnimeDetails::from_record(record.as_object().unwrap());

        assert_eq!(anime.mal_id, 16498);
        assert_eq!(anime.title, "Attack on Titan");
        assert_eq!(anime.episodes, 25);
        assert_eq!(anime.start_date, "2013-04-07");
        assert_eq!(anime.end_date, "2013-09-29");
        assert_eq!(anime.producer_mal_ids, vec![1]);
        assert_eq!(anime.producer_names, vec!["Studio X".to_string()]);
        assert!(anime.studio_ids.is_empty());
        assert_eq!(anime.score, 0.0);
        assert!(!anime.airing);
    }

    #[test]
    fn test_missing_aired_defaults_dates() {
        let record = json!({ "mal_id": 1, "title": "Cowboy Bebop" });
        let anime = AnimeDetails::from_record(record.as_object().unwrap());
        assert_eq!(anime.start_date, "");
        assert_eq!(anime.end_date, "");
    }

    #[test]
    fn test_overview_prefers_english_title() {
        let record = json!({
            "mal_id": 5114,
            "title": "Hagane no Renkinjutsushi: Fullmetal Alchemist",
            "title_english": "Fullmetal Alchemist: Brotherhood",
            "type": "TV"
        });
        let anime = AnimeOverview::from_record(record.as_object().unwrap());
        assert_eq!(anime.title, "Fullmetal Alchemist: Brotherhood");
        assert_eq!(anime.kind, "TV");

        let json = serde_json::to_value(&anime).unwrap();
        assert_eq!(json["type"], "TV");
    }

    #[test]
    fn test_search_defaults_build_expected_query() {
        let params: AnimeSearchParams =
            serde_json::from_value(json!({ "query": "naruto" })).unwrap();
        let query = params.to_query().unwrap();
        assert_eq!(
            query.pairs(),
            &[
                ("q", "naruto".to_string()),
                ("limit", "5".to_string()),
                ("order_by", "popularity".to_string()),
                ("sort", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_status_is_rejected_at_decode() {
        let result: Result<AnimeSearchParams, _> =
            serde_json::from_value(json!({ "status": "finished" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_top_anime_limit_bound() {
        let params = TopAnimeParams {
            limit: Some(100),
            ..Default::default()
        };
        assert!(matches!(
            params.to_query(),
            Err(MalError::Validation { .. })
        ));
    }

    #[test]
    fn test_seasonal_endpoint_interpolates_path() {
        let params = SeasonalAnimeParams {
            season: Some(Season::Fall),
            year: Some(2019),
        };
        assert_eq!(params.endpoint().unwrap().path(), "/seasons/2019/fall");

        let params = SeasonalAnimeParams {
            season: None,
            year: Some(1800),
        };
        assert!(params.endpoint().is_err());
    }
}
