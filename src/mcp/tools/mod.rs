//! Tool handlers, one file per upstream domain, plus name-based dispatch
//! for callers outside the MCP transport (the `call` CLI command).

pub mod anime;
pub mod manga;
pub mod producer;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::MalError;
use crate::mcp::MalServer;

/// Every tool the server exposes, in registration order.
pub const TOOL_NAMES: &[&str] = &[
    "search_anime",
    "get_top_anime",
    "get_random_anime",
    "get_anime_reviews",
    "get_similar_anime",
    "get_anime_news",
    "get_seasonal_anime",
    "search_manga",
    "get_top_manga",
    "get_random_manga",
    "get_manga_reviews",
    "get_similar_manga",
    "get_manga_news",
    "get_producer_details",
];

impl MalServer {
    /// Invoke a tool by name with JSON arguments and return its JSON result.
    ///
    /// Arguments that do not decode into the tool's parameter type are a
    /// validation error; no request is made.
    pub async fn invoke(&self, name: &str, arguments: Value) -> Result<Value, MalError> {
        match name {
            "search_anime" => to_json(self.handle_search_anime(decode(arguments)?).await?),
            "get_top_anime" => to_json(self.handle_top_anime(decode(arguments)?).await?),
            "get_random_anime" => to_json(self.handle_random_anime().await?),
            "get_anime_reviews" => to_json(self.handle_anime_reviews(decode(arguments)?).await?),
            "get_similar_anime" => to_json(self.handle_similar_anime(decode(arguments)?).await?),
            "get_anime_news" => to_json(self.handle_anime_news(decode(arguments)?).await?),
            "get_seasonal_anime" => {
                to_json(self.handle_seasonal_anime(decode(arguments)?).await?)
            }
            "search_manga" => to_json(self.handle_search_manga(decode(arguments)?).await?),
            "get_top_manga" => to_json(self.handle_top_manga(decode(arguments)?).await?),
            "get_random_manga" => to_json(self.handle_random_manga().await?),
            "get_manga_reviews" => to_json(self.handle_manga_reviews(decode(arguments)?).await?),
            "get_similar_manga" => to_json(self.handle_similar_manga(decode(arguments)?).await?),
            "get_manga_news" => to_json(self.handle_manga_news(decode(arguments)?).await?),
            "get_producer_details" => {
                to_json(self.handle_producer_details(decode(arguments)?).await?)
            }
            other => Err(MalError::validation(
                "tool",
                format!("unknown tool '{}'; available: {}", other, TOOL_NAMES.join(", ")),
            )),
        }
    }
}

fn decode<T: DeserializeOwned>(arguments: Value) -> Result<T, MalError> {
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| MalError::validation("arguments", e.to_string()))
}

fn to_json<T: Serialize>(value: T) -> Result<Value, MalError> {
    serde_json::to_value(value)
        .map_err(|e| MalError::Format(format!("Failed to serialize tool result: {}", e)))
}
