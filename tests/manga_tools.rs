//! Manga and producer tools against a mock Jikan upstream.

mod common;

use common::{fixtures, MockUpstream};
use mal_mcp::models::{
    MalIdInput, MangaSearchParams, ProducerParams, ReviewParams, ReviewsInput, TopMangaParams,
};
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;

#[tokio::test]
async fn test_search_manga_flattens_published_span() {
    let upstream = MockUpstream::new().await;
    upstream.mount_json("/manga", fixtures::manga_search()).await;

    let params = MangaSearchParams {
        query: Some("berserk".into()),
        ..Default::default()
    };
    let result = upstream
        .mal
        .search_manga(Parameters(params))
        .await
        .expect("manga search should succeed")
        .0;

    let record = &result.results[0];
    assert_eq!(record.mal_id, 2);
    assert_eq!(record.start_date, "1989-08-25");
    assert_eq!(record.end_date, "");
    assert!(record.publishing);
    assert_eq!(record.author_mal_ids, vec![1868]);
    assert_eq!(record.author_names, vec!["Miura, Kentarou".to_string()]);

    let query = upstream.only_query().await;
    assert!(query.contains(&("q".to_string(), "berserk".to_string())));
    assert!(query.contains(&("status".to_string(), "complete".to_string())));
}

#[tokio::test]
async fn test_top_manga_defaults_to_popularity_filter() {
    let upstream = MockUpstream::new().await;
    upstream
        .mount_json("/top/manga", serde_json::json!({ "data": [] }))
        .await;

    let result = upstream
        .mal
        .get_top_manga(Parameters(TopMangaParams::default()))
        .await
        .expect("top manga should succeed")
        .0;

    assert_eq!(result.count, 0);
    let query = upstream.only_query().await;
    assert_eq!(
        query,
        vec![
            ("filter".to_string(), "bypopularity".to_string()),
            ("limit".to_string(), "10".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_random_manga_null_counts_default_to_zero() {
    let upstream = MockUpstream::new().await;
    upstream
        .mount_json("/random/manga", fixtures::random_manga())
        .await;

    let record = upstream
        .mal
        .get_random_manga()
        .await
        .expect("random manga should succeed")
        .0;

    assert_eq!(record.title, "Berserk");
    assert_eq!(record.kind, "Manga");
    assert_eq!(record.chapters, 0);
    assert_eq!(record.volumes, 0);
}

#[tokio::test]
async fn test_manga_reviews_with_spoilers() {
    let upstream = MockUpstream::new().await;
    upstream.mount_json("/manga/2/reviews", fixtures::reviews()).await;

    let input = ReviewsInput {
        id: 2,
        params: ReviewParams {
            preliminary: Some(false),
            spoilers: Some(true),
        },
    };
    upstream
        .mal
        .get_manga_reviews(Parameters(input))
        .await
        .expect("manga reviews should succeed");

    let query = upstream.only_query().await;
    assert!(query.contains(&("preliminary".to_string(), "false".to_string())));
    assert!(query.contains(&("spoilers".to_string(), "true".to_string())));
}

#[tokio::test]
async fn test_similar_and_news_manga() {
    let upstream = MockUpstream::new().await;
    upstream
        .mount_json("/manga/2/recommendations", fixtures::recommendations())
        .await;
    upstream.mount_json("/manga/2/news", fixtures::news()).await;

    let similar = upstream
        .mal
        .get_similar_manga(Parameters(MalIdInput { id: 2 }))
        .await
        .expect("similar manga should succeed")
        .0;
    let news = upstream
        .mal
        .get_manga_news(Parameters(MalIdInput { id: 2 }))
        .await
        .expect("manga news should succeed")
        .0;

    assert_eq!(similar.count, 2);
    assert_eq!(news.results[0].title, "Final season announced");
}

#[tokio::test]
async fn test_producer_details_default_query() {
    let upstream = MockUpstream::new().await;
    upstream.mount_json("/producers", fixtures::producers()).await;

    let result = upstream
        .mal
        .get_producer_details(Parameters(ProducerParams::default()))
        .await
        .expect("producer lookup should succeed")
        .0;

    let producer = &result.results[0];
    assert_eq!(producer.mal_id, 21);
    assert_eq!(producer.name, "Studio Ghibli");
    assert_eq!(producer.titles.len(), 2);
    assert_eq!(producer.count, 35);

    assert_eq!(
        upstream.only_query().await,
        vec![
            ("q".to_string(), "Toei Animation".to_string()),
            ("limit".to_string(), "5".to_string()),
        ]
    );
}
