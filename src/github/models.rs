use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A discussion comment as returned by the GitHub GraphQL API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComment {
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Permalink to the comment.
    pub url: String,
    /// Markdown source.
    #[serde(default)]
    pub body: String,
    /// Plain-text rendering.
    #[serde(default)]
    pub body_text: String,
    /// HTML rendering.
    #[serde(rename = "bodyHTML", default)]
    pub body_html: String,
    /// Hidden by a moderator or the author.
    #[serde(default)]
    pub is_minimized: bool,
}

/// A search result node.
///
/// Nodes that are not discussions come back as `{}` and deserialize to the
/// default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Discussion {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub comments: Option<CommentConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommentConnection {
    #[serde(default)]
    pub nodes: Option<Vec<Option<RawComment>>>,
}

impl Discussion {
    /// Comments in API order, skipping null entries.
    pub fn comments(&self) -> impl Iterator<Item = &RawComment> {
        self.comments
            .iter()
            .filter_map(|c| c.nodes.as_ref())
            .flatten()
            .flatten()
    }

    /// Whether the discussion carries a comment list at all.
    #[must_use]
    pub fn has_comments(&self) -> bool {
        self.comments.as_ref().is_some_and(|c| c.nodes.is_some())
    }
}

/// The discussion series a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscussionKind {
    LookingForWork,
    Hiring,
}

impl DiscussionKind {
    /// The literal phrase used in the monthly discussion titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LookingForWork => "Who wants to be hired?",
            Self::Hiring => "Who's hiring?",
        }
    }
}
