//! Typed client for the `/search` backend.
//!
//! The backend is an external collaborator: it takes a location and a search
//! term, queries an upstream listings provider, and answers with either
//! `{"organic_results": [...]}` or `{"error": "..."}`. This crate owns the
//! wire model, a minimal JSON-over-HTTP client, and the [`SearchBackend`]
//! trait that the UI layers program against.
//!
//! Application errors (the `error` body field) are not transport errors:
//! they come back inside a successful [`SearchResponse`] and are shown to the
//! user verbatim. [`SearchError`] covers everything else — the request not
//! completing, or the body not decoding.

pub mod client;
mod http;
pub mod types;

pub use client::{SearchBackend, SearchClient};
pub use http::SearchError;
pub use types::{Listing, SearchQuery, SearchResponse};
