use tracing::{info, warn};

use crate::error::MalError;
use crate::jikan::{request, Endpoint, Query};
use crate::mcp::MalServer;
use crate::models::{
    Listing, MalIdInput, MangaDetails, MangaOverview, MangaSearchParams, NewsArticle,
    Recommendation, Review, ReviewsInput, TopMangaParams,
};

impl MalServer {
    pub async fn handle_search_manga(
        &self,
        params: MangaSearchParams,
    ) -> Result<Listing<MangaDetails>, MalError> {
        let query = params
            .to_query()
            .inspect_err(|e| warn!(tool = "search_manga", "Rejected parameters: {}", e))?;
        info!("Searching manga with params: {:?}", query.pairs());

        self.client
            .fetch_list::<MangaDetails>(&Endpoint::MangaSearch, &query)
            .await
            .map(Listing::from)
    }

    pub async fn handle_top_manga(
        &self,
        params: TopMangaParams,
    ) -> Result<Listing<MangaOverview>, MalError> {
        let query = params
            .to_query()
            .inspect_err(|e| warn!(tool = "get_top_manga", "Rejected parameters: {}", e))?;

        self.client
            .fetch_list::<MangaOverview>(&Endpoint::TopManga, &query)
            .await
            .map(Listing::from)
    }

    pub async fn handle_random_manga(&self) -> Result<MangaOverview, MalError> {
        self.client
            .fetch_one(&Endpoint::RandomManga, &Query::new())
            .await
    }

    pub async fn handle_manga_reviews(
        &self,
        input: ReviewsInput,
    ) -> Result<Listing<Review>, MalError> {
        let id = request::mal_id(input.id)
            .inspect_err(|e| warn!(tool = "get_manga_reviews", "Rejected parameters: {}", e))?;

        let reviews: Vec<Review> = self
            .client
            .fetch_list(&Endpoint::MangaReviews(id), &input.params.to_query())
            .await?;
        info!("Fetched {} reviews for manga {}", reviews.len(), id);
        Ok(Listing::from(reviews))
    }

    pub async fn handle_similar_manga(
        &self,
        input: MalIdInput,
    ) -> Result<Listing<Recommendation>, MalError> {
        let id = input
            .validated_id()
            .inspect_err(|e| warn!(tool = "get_similar_manga", "Rejected parameters: {}", e))?;

        self.client
            .fetch_list::<Recommendation>(&Endpoint::MangaRecommendations(id), &Query::new())
            .await
            .map(Listing::from)
    }

    pub async fn handle_manga_news(
        &self,
        input: MalIdInput,
    ) -> Result<Listing<NewsArticle>, MalError> {
        let id = input
            .validated_id()
            .inspect_err(|e| warn!(tool = "get_manga_news", "Rejected parameters: {}", e))?;

        self.client
            .fetch_list::<NewsArticle>(&Endpoint::MangaNews(id), &Query::new())
            .await
            .map(Listing::from)
    }
}
