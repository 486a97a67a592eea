//! Job posts derived from discussion comments.

pub mod extractor;
pub mod fetcher;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use extractor::{extract_links, HeaderLink, PipeHeaderExtractor, PostExtractor};
pub use fetcher::{discussion_query, DiscussionFetcher};

/// One normalized job posting.
///
/// Serialized with the camelCase field names served by the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPost {
    pub company_name: String,
    pub keywords: Vec<String>,
    /// Markdown body without the header line.
    pub body_text: String,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub contact_url: String,
    pub source_url: String,
}

impl JobPost {
    /// No company name, no keywords and no body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.company_name.is_empty() && self.keywords.is_empty() && self.body_text.is_empty()
    }
}
