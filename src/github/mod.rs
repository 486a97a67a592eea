//! GitHub discussion search.
//!
//! [`DiscussionSearch`] is the seam the fetch pipeline depends on;
//! [`GithubClient`] implements it against the GraphQL API.

mod client;
mod models;

use async_trait::async_trait;
use thiserror::Error;

pub use client::GithubClient;
pub use models::{CommentConnection, Discussion, DiscussionKind, RawComment};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("search API returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("search API returned errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("search API response contained no data")]
    MissingData,
}

/// Searches a discussion store.
#[async_trait]
pub trait DiscussionSearch: Send + Sync {
    /// Return at most `count` discussions matching `query`, in relevance order.
    async fn search_discussions(
        &self,
        query: &str,
        count: u32,
    ) -> Result<Vec<Discussion>, SearchError>;
}
