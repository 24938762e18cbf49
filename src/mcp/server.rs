use rmcp::{
    handler::server::tool::ToolRouter,
    handler::server::wrapper::{Json, Parameters},
    model::*,
    tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use std::sync::Arc;
use tracing::instrument;

use crate::config::Config;
use crate::jikan::JikanClient;
use crate::mcp::error::ToolError;
use crate::mcp::tools::TOOL_NAMES;
use crate::models::{
    AnimeDetails, AnimeOverview, AnimeSearchParams, Listing, MalIdInput, MangaDetails,
    MangaOverview, MangaSearchParams, NewsArticle, ProducerDetails, ProducerParams,
    Recommendation, Review, ReviewsInput, SeasonalAnimeParams, TopAnimeParams, TopMangaParams,
};

/// MCP server exposing the Jikan API as tools.
///
/// Stateless apart from the injected client; every tool call is one GET.
#[derive(Clone)]
pub struct MalServer {
    pub(crate) client: Arc<JikanClient>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MalServer {
    pub fn new(client: Arc<JikanClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    // ==========================================================================
    // ANIME
    // ==========================================================================

    #[tool(
        description = "Search anime on MyAnimeList by title/keywords with optional status, rating, date range and ordering. Returns full records: MAL ID, episodes, airing dates, score, rank, popularity, synopsis, producers, studios and genres."
    )]
    #[instrument(name = "mcp.search_anime", skip_all)]
    pub async fn search_anime(
        &self,
        request: Parameters<AnimeSearchParams>,
    ) -> Result<Json<Listing<AnimeDetails>>, ToolError> {
        let Parameters(params) = request;
        self.handle_search_anime(params)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    #[tool(
        description = "Top-ranked anime. filter: airing, upcoming, bypopularity or favorite. Optional audience rating and limit (1-25)."
    )]
    #[instrument(name = "mcp.get_top_anime", skip_all)]
    pub async fn get_top_anime(
        &self,
        request: Parameters<TopAnimeParams>,
    ) -> Result<Json<Listing<AnimeOverview>>, ToolError> {
        let Parameters(params) = request;
        self.handle_top_anime(params)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    #[tool(description = "A random anime from MyAnimeList.")]
    #[instrument(name = "mcp.get_random_anime", skip_all)]
    pub async fn get_random_anime(&self) -> Result<Json<AnimeOverview>, ToolError> {
        self.handle_random_anime()
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    #[tool(
        description = "User reviews for an anime by MAL ID. Set params.preliminary=true for titles still airing; params.spoilers=true to include spoiler reviews."
    )]
    #[instrument(name = "mcp.get_anime_reviews", skip_all)]
    pub async fn get_anime_reviews(
        &self,
        request: Parameters<ReviewsInput>,
    ) -> Result<Json<Listing<Review>>, ToolError> {
        let Parameters(input) = request;
        self.handle_anime_reviews(input)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    #[tool(
        description = "Anime similar to the one with the given MAL ID, from user recommendations."
    )]
    #[instrument(name = "mcp.get_similar_anime", skip_all)]
    pub async fn get_similar_anime(
        &self,
        request: Parameters<MalIdInput>,
    ) -> Result<Json<Listing<Recommendation>>, ToolError> {
        let Parameters(input) = request;
        self.handle_similar_anime(input)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    #[tool(description = "News articles about an anime by MAL ID.")]
    #[instrument(name = "mcp.get_anime_news", skip_all)]
    pub async fn get_anime_news(
        &self,
        request: Parameters<MalIdInput>,
    ) -> Result<Json<Listing<NewsArticle>>, ToolError> {
        let Parameters(input) = request;
        self.handle_anime_news(input)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    #[tool(
        description = "Anime airing in a given season (winter, spring, summer, fall) and year. Returns full records like search_anime."
    )]
    #[instrument(name = "mcp.get_seasonal_anime", skip_all)]
    pub async fn get_seasonal_anime(
        &self,
        request: Parameters<SeasonalAnimeParams>,
    ) -> Result<Json<Listing<AnimeDetails>>, ToolError> {
        let Parameters(params) = request;
        self.handle_seasonal_anime(params)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    // ==========================================================================
    // MANGA
    // ==========================================================================

    #[tool(
        description = "Search manga on MyAnimeList by title/keywords with optional status, date range and ordering. Returns MAL ID, chapters, volumes, publishing dates, score, rank, synopsis, authors and genres."
    )]
    #[instrument(name = "mcp.search_manga", skip_all)]
    pub async fn search_manga(
        &self,
        request: Parameters<MangaSearchParams>,
    ) -> Result<Json<Listing<MangaDetails>>, ToolError> {
        let Parameters(params) = request;
        self.handle_search_manga(params)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    #[tool(
        description = "Top-ranked manga. filter: publishing, upcoming, bypopularity or favorite. Optional limit (1-25)."
    )]
    #[instrument(name = "mcp.get_top_manga", skip_all)]
    pub async fn get_top_manga(
        &self,
        request: Parameters<TopMangaParams>,
    ) -> Result<Json<Listing<MangaOverview>>, ToolError> {
        let Parameters(params) = request;
        self.handle_top_manga(params)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    #[tool(description = "A random manga from MyAnimeList.")]
    #[instrument(name = "mcp.get_random_manga", skip_all)]
    pub async fn get_random_manga(&self) -> Result<Json<MangaOverview>, ToolError> {
        self.handle_random_manga()
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    #[tool(
        description = "User reviews for a manga by MAL ID. Set params.preliminary=true for titles still publishing; params.spoilers=true to include spoiler reviews."
    )]
    #[instrument(name = "mcp.get_manga_reviews", skip_all)]
    pub async fn get_manga_reviews(
        &self,
        request: Parameters<ReviewsInput>,
    ) -> Result<Json<Listing<Review>>, ToolError> {
        let Parameters(input) = request;
        self.handle_manga_reviews(input)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    #[tool(
        description = "Manga similar to the one with the given MAL ID, from user recommendations."
    )]
    #[instrument(name = "mcp.get_similar_manga", skip_all)]
    pub async fn get_similar_manga(
        &self,
        request: Parameters<MalIdInput>,
    ) -> Result<Json<Listing<Recommendation>>, ToolError> {
        let Parameters(input) = request;
        self.handle_similar_manga(input)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    #[tool(description = "News articles about a manga by MAL ID.")]
    #[instrument(name = "mcp.get_manga_news", skip_all)]
    pub async fn get_manga_news(
        &self,
        request: Parameters<MalIdInput>,
    ) -> Result<Json<Listing<NewsArticle>>, ToolError> {
        let Parameters(input) = request;
        self.handle_manga_news(input)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }

    // ==========================================================================
    // PRODUCERS
    // ==========================================================================

    #[tool(
        description = "Studios, producers and production companies by name (e.g. 'Studio Ghibli', 'Madhouse', 'MAPPA'): background and known names. Use this rather than search_anime for questions about studios."
    )]
    #[instrument(name = "mcp.get_producer_details", skip_all)]
    pub async fn get_producer_details(
        &self,
        request: Parameters<ProducerParams>,
    ) -> Result<Json<Listing<ProducerDetails>>, ToolError> {
        let Parameters(params) = request;
        self.handle_producer_details(params)
            .await
            .map(Json)
            .map_err(ToolError::from)
    }
}

#[tool_handler]
impl ServerHandler for MalServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mal-mcp".to_string(),
                title: Some("MyAnimeList MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"# MyAnimeList MCP Server

Anime and manga data from MyAnimeList via the Jikan API. One tool call = one upstream request.

## Discovery
- search_anime / search_manga: find titles and their MAL IDs
- get_top_anime / get_top_manga: rankings
- get_seasonal_anime: what aired in a season
- get_random_anime / get_random_manga: a random pick
- get_producer_details: studios and producers (use instead of search_anime for studio questions)

## By MAL ID
- get_anime_reviews / get_manga_reviews
- get_similar_anime / get_similar_manga
- get_anime_news / get_manga_news

## Notes
- Missing upstream values come back as 0, "", false or [] (a score of 0 usually means "not scored yet").
- limit is capped at 25. Jikan rate-limits aggressively: on UPSTREAM_STATUS 429 wait before retrying.
"#.to_string()),
        }
    }
}

impl MalServer {
    /// Tool definitions as advertised over MCP.
    pub fn tool_catalog() -> Vec<Tool> {
        Self::tool_router().list_all()
    }
}

/// Run MCP server on stdio transport.
pub async fn run_mcp_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Using Jikan API at {}", config.base());
    let client = Arc::new(JikanClient::new(config)?);
    let server = MalServer::new(client);

    tracing::info!("Starting MAL MCP server v{}", env!("CARGO_PKG_VERSION"));

    // Stdio transport
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;
    tracing::info!("MCP server listening on stdio ({} tools)", TOOL_NAMES.len());

    tokio::select! {
        result = service.waiting() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("MCP server shutting down");
    Ok(())
}
