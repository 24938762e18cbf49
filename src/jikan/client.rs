//! HTTP transport to the Jikan API.

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::MalError;
use crate::jikan::envelope::{data_list, data_object, map_records, FromRecord};
use crate::jikan::request::{Endpoint, Query};

/// Issues exactly one GET per call. No retries, no caching.
#[derive(Debug, Clone)]
pub struct JikanClient {
    http: Client,
    config: Config,
}

impl JikanClient {
    pub fn new(config: Config) -> Result<Self, MalError> {
        let http = Client::builder()
            .user_agent(concat!("mal-mcp/", env!("CARGO_PKG_VERSION")))
            // Each call owns its connection; nothing idles between calls.
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| MalError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    /// GET `endpoint` with `query` and decode the JSON envelope.
    ///
    /// Every failure is logged with the URL and parameters before it is
    /// returned.
    pub async fn fetch(&self, endpoint: &Endpoint, query: &Query) -> Result<Value, MalError> {
        let url = self.url_for(endpoint, query)?;
        let timeout = endpoint.timeout_class().budget(&self.config);

        info!(endpoint = %endpoint, params = ?query.pairs(), "Requesting {}", url);

        let response = self
            .http
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| self.fail(endpoint, query, transport_error(&url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.fail(endpoint, query, transport_error(&url, e)))?;

        if !status.is_success() {
            return Err(self.fail(
                endpoint,
                query,
                MalError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                    body,
                },
            ));
        }

        debug!(endpoint = %endpoint, bytes = body.len(), "Upstream responded {}", status);

        serde_json::from_str(&body).map_err(|e| self.fail(endpoint, query, MalError::from(e)))
    }

    /// Fetch a list endpoint and map every well-formed record.
    pub async fn fetch_list<T: FromRecord>(
        &self,
        endpoint: &Endpoint,
        query: &Query,
    ) -> Result<Vec<T>, MalError> {
        let body = self.fetch(endpoint, query).await?;
        let items = data_list(&body).map_err(|e| self.fail(endpoint, query, e))?;
        let mapped: Vec<T> = map_records(items);

        info!(
            endpoint = %endpoint,
            "Processed {} out of {} {} entries",
            mapped.len(),
            items.len(),
            T::KIND
        );
        Ok(mapped)
    }

    /// Fetch a single-record endpoint and map it.
    pub async fn fetch_one<T: FromRecord>(
        &self,
        endpoint: &Endpoint,
        query: &Query,
    ) -> Result<T, MalError> {
        let body = self.fetch(endpoint, query).await?;
        let record = data_object(&body).map_err(|e| self.fail(endpoint, query, e))?;

        info!(endpoint = %endpoint, "Fetched one {}", T::KIND);
        Ok(T::from_record(record))
    }

    fn url_for(&self, endpoint: &Endpoint, query: &Query) -> Result<Url, MalError> {
        let base = endpoint.url(&self.config);
        let url = if query.is_empty() {
            Url::parse(&base)
        } else {
            Url::parse_with_params(&base, query.pairs().iter().map(|(k, v)| (*k, v.as_str())))
        };
        url.map_err(|e| MalError::Config(format!("Invalid request URL '{}': {}", base, e)))
    }

    fn fail(&self, endpoint: &Endpoint, query: &Query, err: MalError) -> MalError {
        error!(endpoint = %endpoint, params = ?query.pairs(), "{}", err);
        err
    }
}

fn transport_error(url: &Url, err: reqwest::Error) -> MalError {
    if err.is_timeout() {
        MalError::Timeout {
            url: url.to_string(),
        }
    } else {
        MalError::Network {
            url: url.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> JikanClient {
        JikanClient::new(Config::new("http://localhost:8080/v4").unwrap()).unwrap()
    }

    #[test]
    fn test_url_without_params_has_no_query() {
        let url = client().url_for(&Endpoint::RandomAnime, &Query::new()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v4/random/anime");
    }

    #[test]
    fn test_url_encodes_params() {
        let query = Query::new()
            .text("q", Some("attack on titan"))
            .opt("limit", Some(5));
        let url = client().url_for(&Endpoint::AnimeSearch, &query).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v4/anime?q=attack+on+titan&limit=5"
        );
    }
}
