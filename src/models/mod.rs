pub mod anime;
pub mod common;
pub mod manga;
pub mod producer;

pub use anime::{
    AnimeDetails, AnimeOrderBy, AnimeOverview, AnimeSearchParams, AnimeStatus, Season,
    SeasonalAnimeParams, TopAnimeFilter, TopAnimeParams,
};
pub use common::{Listing, MalIdInput, NewsArticle, Recommendation, Review, ReviewParams, ReviewsInput};
pub use manga::{
    MangaDetails, MangaOrderBy, MangaOverview, MangaSearchParams, MangaStatus, TopMangaFilter,
    TopMangaParams,
};
pub use producer::{ProducerDetails, ProducerParams};
