use crate::http::{HttpClient, SearchError};
use crate::types::{SearchQuery, SearchResponse};
use async_trait::async_trait;
use std::time::Instant;

/// Seam between the UI layers and the wire.
///
/// The production implementation is [`SearchClient`]; tests substitute their
/// own doubles.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run one search invocation against the backend.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError>;
}

/// HTTP implementation of [`SearchBackend`] against the `/search` endpoint.
#[derive(Clone)]
pub struct SearchClient {
    http: HttpClient,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
        })
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError> {
        let started = Instant::now();
        tracing::info!(
            target: "search.backend",
            location = %query.location,
            term = %query.search_term,
            "search.start"
        );

        match self.http.post_json::<_, SearchResponse>("search", query).await {
            Ok(resp) => {
                let result_count = resp
                    .organic_results
                    .as_ref()
                    .map(|r| r.len())
                    .unwrap_or(0);
                tracing::info!(
                    target: "search.backend",
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    result_count,
                    backend_error = resp.error.is_some(),
                    "search.done"
                );
                Ok(resp)
            }
            Err(e) => {
                tracing::warn!(
                    target: "search.backend",
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "search.error"
                );
                Err(e)
            }
        }
    }
}
