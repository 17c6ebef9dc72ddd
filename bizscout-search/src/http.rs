//! Minimal JSON-over-HTTP plumbing.
//!
//! One POST per call, no retries, no caching. The response body is decoded
//! whatever the status code: the backend ships application errors as
//! `{"error": ...}` bodies alongside non-2xx statuses, and those must reach
//! the renderer intact. A body that does not decode is a transport-level
//! failure and keeps a truncated snippet for the diagnostic log.

use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Instant;
use thiserror::Error;
use uuid::Uuid;

const SNIPPET_MAX: usize = 500;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("client build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {message}, body_snippet: {body_snippet}")]
    Decode {
        message: String,
        body_snippet: String,
    },
}

/// HTTP client anchored to the backend base URL.
#[derive(Clone)]
pub struct HttpClient {
    base: Url,
    inner: Client,
}

impl HttpClient {
    pub fn new(base: &str) -> Result<Self, SearchError> {
        let base = Url::parse(base).map_err(|e| SearchError::Url(e.to_string()))?;
        let inner = Client::builder()
            .build()
            .map_err(|e| SearchError::Build(e.to_string()))?;
        Ok(Self { base, inner })
    }

    /// POST `body` as JSON to `path` (joined onto the base URL) and decode
    /// the response body as `T`.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, SearchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self
            .base
            .join(path)
            .map_err(|e| SearchError::Url(e.to_string()))?;

        let req_id = Uuid::new_v4();
        tracing::debug!(
            req_id = %req_id,
            host_path = %format!("{}{}", url.domain().unwrap_or("-"), url.path()),
            "http.request.start"
        );

        let started = Instant::now();
        let resp = self
            .inner
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                let message = e.to_string();
                tracing::warn!(req_id = %req_id, message = %message, "http.network_error.send");
                SearchError::Network(message)
            })?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| {
            let message = e.to_string();
            tracing::warn!(req_id = %req_id, message = %message, "http.network_error.body");
            SearchError::Network(message)
        })?;

        tracing::debug!(
            req_id = %req_id,
            %status,
            duration_ms = started.elapsed().as_millis() as u64,
            body_len = bytes.len(),
            "http.response"
        );

        // Non-2xx is not fatal by itself; the error shape in the body is.
        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            let body_snippet = snip_body(&bytes);
            tracing::warn!(
                req_id = %req_id,
                %status,
                serde_err = %e,
                body_snippet = %body_snippet,
                "http.response.decode_error"
            );
            SearchError::Decode {
                message: e.to_string(),
                body_snippet,
            }
        })
    }
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > SNIPPET_MAX {
        snip.truncate(SNIPPET_MAX);
        snip.push_str("...");
    }
    snip
}
