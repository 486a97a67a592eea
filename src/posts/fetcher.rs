//! Month → discussion → job posts.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::{JobPost, PipeHeaderExtractor, PostExtractor};
use crate::date::{format_display, is_valid, Month};
use crate::github::{DiscussionKind, DiscussionSearch, SearchError};

/// Search phrase for a month's discussion, e.g. `(Who's hiring? Nov 2021)`.
#[must_use]
pub fn discussion_query(kind: DiscussionKind, month: Month) -> String {
    format!("({} {})", kind.label(), format_display(month, true))
}

/// Resolves a month to its discussion and extracts the posts.
#[derive(Clone)]
pub struct DiscussionFetcher {
    search: Arc<dyn DiscussionSearch>,
    extractor: Arc<dyn PostExtractor>,
}

impl DiscussionFetcher {
    /// Create a fetcher using the pipe-header extractor.
    #[must_use]
    pub fn new(search: Arc<dyn DiscussionSearch>) -> Self {
        Self::with_extractor(search, Arc::new(PipeHeaderExtractor))
    }

    #[must_use]
    pub fn with_extractor(
        search: Arc<dyn DiscussionSearch>,
        extractor: Arc<dyn PostExtractor>,
    ) -> Self {
        Self { search, extractor }
    }

    /// Fetch the posts of the first discussion matching `kind` and `month`.
    ///
    /// Minimized comments are dropped and the result is in reverse API order.
    /// A month with no discussion, or a discussion without comments, yields
    /// an empty list.
    ///
    /// # Errors
    ///
    /// Returns the search collaborator's error unchanged.
    pub async fn fetch(
        &self,
        month: Month,
        kind: DiscussionKind,
        count: u32,
    ) -> Result<Vec<JobPost>, SearchError> {
        let query = discussion_query(kind, month);
        debug!(query = %query, count, "Fetching discussion");

        let discussions = self.search.search_discussions(&query, count).await?;
        let Some(discussion) = discussions.into_iter().next() else {
            info!(query = %query, "No discussion found");
            return Ok(Vec::new());
        };
        if !discussion.has_comments() {
            info!(query = %query, "Discussion has no comments");
            return Ok(Vec::new());
        }

        let mut minimized = 0usize;
        let mut posts: Vec<JobPost> = discussion
            .comments()
            .filter(|comment| {
                if comment.is_minimized {
                    minimized += 1;
                }
                !comment.is_minimized
            })
            .map(|comment| self.extractor.extract(comment))
            .collect();
        posts.reverse();

        info!(
            query = %query,
            title = discussion.title.as_deref().unwrap_or_default(),
            posts = posts.len(),
            minimized,
            "Fetched posts"
        );

        Ok(posts)
    }

    /// Posts from the hiring discussion for `month`, or nothing if the month
    /// is not valid at `now`.
    ///
    /// # Errors
    ///
    /// Returns the search collaborator's error unchanged.
    pub async fn hiring_posts(
        &self,
        month: Month,
        now: DateTime<Utc>,
    ) -> Result<Vec<JobPost>, SearchError> {
        if !is_valid(month, now) {
            debug!(month = %month, "Month outside the valid range");
            return Ok(Vec::new());
        }
        self.fetch(month, DiscussionKind::Hiring, 1).await
    }
}
