//! Request building: endpoint path templates and validated query strings.

use std::fmt;
use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::NaiveDate;

use crate::config::Config;
use crate::error::MalError;

/// Bound on `limit` for every paginated Jikan endpoint.
pub const LIMIT_RANGE: RangeInclusive<u32> = 1..=25;

/// Seasons MAL actually has data for.
pub const SEASON_YEAR_RANGE: RangeInclusive<i32> = 1917..=2100;

/// Defines a categorical query parameter: a closed enum whose wire names are
/// the lowercase variant names Jikan expects.
macro_rules! query_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize,
            schemars::JsonSchema,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use query_enum;

query_enum! {
    /// Sort direction applied to `order_by`.
    SortDirection {
        Desc => "desc",
        Asc => "asc",
    }
}

query_enum! {
    /// MAL audience rating.
    AudienceRating {
        /// All ages
        G => "g",
        /// Children
        Pg => "pg",
        /// Teens 13 or older
        Pg13 => "pg13",
        /// 17+ (violence & profanity)
        R17 => "r17",
        /// Mild nudity
        R => "r",
        /// Hentai
        Rx => "rx",
    }
}

/// How long a call to an endpoint may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutClass {
    /// Search and ranking endpoints returning many records.
    Search,
    /// ID-keyed and single-record endpoints.
    Lookup,
}

impl TimeoutClass {
    pub fn budget(self, config: &Config) -> Duration {
        match self {
            TimeoutClass::Search => config.search_timeout,
            TimeoutClass::Lookup => config.lookup_timeout,
        }
    }
}

/// Upstream endpoints, one per path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    AnimeSearch,
    TopAnime,
    RandomAnime,
    AnimeReviews(u32),
    AnimeRecommendations(u32),
    AnimeNews(u32),
    Season { year: i32, season: &'static str },
    MangaSearch,
    TopManga,
    RandomManga,
    MangaReviews(u32),
    MangaRecommendations(u32),
    MangaNews(u32),
    Producers,
}

impl Endpoint {
    /// Path relative to the base URL, with IDs and seasons interpolated.
    pub fn path(&self) -> String {
        match self {
            Endpoint::AnimeSearch => "/anime".to_string(),
            Endpoint::TopAnime => "/top/anime".to_string(),
            Endpoint::RandomAnime => "/random/anime".to_string(),
            Endpoint::AnimeReviews(id) => format!("/anime/{}/reviews", id),
            Endpoint::AnimeRecommendations(id) => format!("/anime/{}/recommendations", id),
            Endpoint::AnimeNews(id) => format!("/anime/{}/news", id),
            Endpoint::Season { year, season } => format!("/seasons/{}/{}", year, season),
            Endpoint::MangaSearch => "/manga".to_string(),
            Endpoint::TopManga => "/top/manga".to_string(),
            Endpoint::RandomManga => "/random/manga".to_string(),
            Endpoint::MangaReviews(id) => format!("/manga/{}/reviews", id),
            Endpoint::MangaRecommendations(id) => format!("/manga/{}/recommendations", id),
            Endpoint::MangaNews(id) => format!("/manga/{}/news", id),
            Endpoint::Producers => "/producers".to_string(),
        }
    }

    pub fn timeout_class(&self) -> TimeoutClass {
        match self {
            Endpoint::AnimeSearch
            | Endpoint::TopAnime
            | Endpoint::MangaSearch
            | Endpoint::TopManga
            | Endpoint::Producers => TimeoutClass::Search,
            _ => TimeoutClass::Lookup,
        }
    }

    /// Full URL for this endpoint under `config`'s base URL.
    pub fn url(&self, config: &Config) -> String {
        format!("{}{}", config.base(), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Validate a MAL ID before it is interpolated into a path.
pub fn mal_id(id: u32) -> Result<u32, MalError> {
    if id == 0 {
        return Err(MalError::validation("id", "MAL IDs start at 1"));
    }
    Ok(id)
}

/// Validate a season year before it is interpolated into a path.
pub fn season_year(year: i32) -> Result<i32, MalError> {
    if !SEASON_YEAR_RANGE.contains(&year) {
        return Err(MalError::validation(
            "year",
            format!(
                "must be between {} and {}, got {}",
                SEASON_YEAR_RANGE.start(),
                SEASON_YEAR_RANGE.end(),
                year
            ),
        ));
    }
    Ok(year)
}

/// Flat query-string mapping. Unset values never make it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` when `value` is present.
    pub fn opt<T: ToString>(mut self, key: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Add a free-text value, as given, when present and non-empty.
    pub fn text(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Add a numeric value when present, rejecting anything outside `range`.
    pub fn bounded(
        self,
        key: &'static str,
        value: Option<u32>,
        range: RangeInclusive<u32>,
    ) -> Result<Self, MalError> {
        if let Some(v) = value {
            if !range.contains(&v) {
                return Err(MalError::validation(
                    key,
                    format!(
                        "must be between {} and {}, got {}",
                        range.start(),
                        range.end(),
                        v
                    ),
                ));
            }
        }
        Ok(self.opt(key, value))
    }

    /// Add a date filter (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`) when present.
    pub fn date(self, key: &'static str, value: Option<&str>) -> Result<Self, MalError> {
        match value.filter(|v| !v.is_empty()) {
            Some(v) if is_partial_date(v) => Ok(self.opt(key, Some(v))),
            Some(v) => Err(MalError::validation(
                key,
                format!("expected YYYY, YYYY-MM or YYYY-MM-DD, got '{}'", v),
            )),
            None => Ok(self),
        }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn is_partial_date(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    match parts.as_slice() {
        [y] => digits(y, 4),
        [y, m] => digits(y, 4) && digits(m, 2) && matches!(m.parse::<u32>(), Ok(1..=12)),
        [y, m, d] => {
            digits(y, 4)
                && digits(m, 2)
                && digits(d, 2)
                && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        }
        _ => false,
    }
}
