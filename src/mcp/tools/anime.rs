use tracing::{info, warn};

use crate::error::MalError;
use crate::jikan::{request, Endpoint, Query};
use crate::mcp::MalServer;
use crate::models::{
    AnimeDetails, AnimeOverview, AnimeSearchParams, Listing, MalIdInput, NewsArticle,
    Recommendation, Review, ReviewsInput, SeasonalAnimeParams, TopAnimeParams,
};

impl MalServer {
    pub async fn handle_search_anime(
        &self,
        params: AnimeSearchParams,
    ) -> Result<Listing<AnimeDetails>, MalError> {
        let query = params
            .to_query()
            .inspect_err(|e| warn!(tool = "search_anime", "Rejected parameters: {}", e))?;
        info!("Searching anime with params: {:?}", query.pairs());

        self.client
            .fetch_list::<AnimeDetails>(&Endpoint::AnimeSearch, &query)
            .await
            .map(Listing::from)
    }

    pub async fn handle_top_anime(
        &self,
        params: TopAnimeParams,
    ) -> Result<Listing<AnimeOverview>, MalError> {
        let query = params
            .to_query()
            .inspect_err(|e| warn!(tool = "get_top_anime", "Rejected parameters: {}", e))?;

        self.client
            .fetch_list::<AnimeOverview>(&Endpoint::TopAnime, &query)
            .await
            .map(Listing::from)
    }

    pub async fn handle_random_anime(&self) -> Result<AnimeOverview, MalError> {
        self.client
            .fetch_one(&Endpoint::RandomAnime, &Query::new())
            .await
    }

    pub async fn handle_anime_reviews(
        &self,
        input: ReviewsInput,
    ) -> Result<Listing<Review>, MalError> {
        let id = request::mal_id(input.id)
            .inspect_err(|e| warn!(tool = "get_anime_reviews", "Rejected parameters: {}", e))?;

        let reviews: Vec<Review> = self
            .client
            .fetch_list(&Endpoint::AnimeReviews(id), &input.params.to_query())
            .await?;
        info!("Fetched {} reviews for anime {}", reviews.len(), id);
        Ok(Listing::from(reviews))
    }

    pub async fn handle_similar_anime(
        &self,
        input: MalIdInput,
    ) -> Result<Listing<Recommendation>, MalError> {
        let id = input
            .validated_id()
            .inspect_err(|e| warn!(tool = "get_similar_anime", "Rejected parameters: {}", e))?;

        self.client
            .fetch_list::<Recommendation>(&Endpoint::AnimeRecommendations(id), &Query::new())
            .await
            .map(Listing::from)
    }

    pub async fn handle_anime_news(
        &self,
        input: MalIdInput,
    ) -> Result<Listing<NewsArticle>, MalError> {
        let id = input
            .validated_id()
            .inspect_err(|e| warn!(tool = "get_anime_news", "Rejected parameters: {}", e))?;

        self.client
            .fetch_list::<NewsArticle>(&Endpoint::AnimeNews(id), &Query::new())
            .await
            .map(Listing::from)
    }

    pub async fn handle_seasonal_anime(
        &self,
        params: SeasonalAnimeParams,
    ) -> Result<Listing<AnimeDetails>, MalError> {
        let endpoint = params
            .endpoint()
            .inspect_err(|e| warn!(tool = "get_seasonal_anime", "Rejected parameters: {}", e))?;

        self.client
            .fetch_list::<AnimeDetails>(&endpoint, &Query::new())
            .await
            .map(Listing::from)
    }
}
