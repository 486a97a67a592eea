//! Card components for displaying job posts.

use chrono::{DateTime, Utc};
use maud::{html, Markup, Render};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::components::badge::KeywordBadge;
use crate::components::markdown::{is_safe_href, render_markdown};
use crate::posts::JobPost;

static LINK_ABOVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)link above").expect("Invalid link-above regex"));

/// Rewrite "link above" to "link below".
///
/// Headers in the thread carry the contact link; on the board it is the
/// button under the body.
#[must_use]
pub fn rewrite_link_direction(text: &str) -> String {
    LINK_ABOVE.replace_all(text, "link below").into_owned()
}

/// Humanized length of a duration in the long form: "1 day", "3 hours".
#[must_use]
pub fn humanize_duration(duration: chrono::Duration) -> String {
    let ms = duration.num_milliseconds().unsigned_abs();
    let (amount, unit) = [
        (86_400_000, "day"),
        (3_600_000, "hour"),
        (60_000, "minute"),
        (1_000, "second"),
    ]
    .into_iter()
    .find(|(unit_ms, _)| ms >= *unit_ms)
    .map_or((ms, "ms"), |(unit_ms, unit)| {
        ((ms + unit_ms / 2) / unit_ms, unit)
    });

    match (amount, unit) {
        (_, "ms") => format!("{amount} ms"),
        (1, unit) => format!("1 {unit}"),
        (n, unit) => format!("{n} {unit}s"),
    }
}

/// A card showing one job post.
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a JobPost,
    pub now: DateTime<Utc>,
    /// Repository that `#123` references in the body point into.
    pub repository: &'a str,
}

impl<'a> PostCard<'a> {
    #[must_use]
    pub const fn new(post: &'a JobPost, now: DateTime<Utc>, repository: &'a str) -> Self {
        Self {
            post,
            now,
            repository,
        }
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let published = humanize_duration(self.now - post.published_at);
        let updated = humanize_duration(self.now - post.updated_at);
        let contact = if is_safe_href(&post.contact_url) {
            post.contact_url.as_str()
        } else {
            post.source_url.as_str()
        };

        html! {
            article class="post-card" {
                header {
                    h3 class="company-name" { (post.company_name) }
                    @if !post.keywords.is_empty() {
                        div class="keywords" {
                            @for keyword in &post.keywords {
                                (KeywordBadge::new(keyword))
                            }
                        }
                    }
                    div class="post-dates" {
                        span title=(post.published_at.to_rfc3339()) { "Published " (published) " ago" }
                        span title=(post.updated_at.to_rfc3339()) { "Updated " (updated) " ago" }
                    }
                }
                div class="post-body" {
                    (render_markdown(&rewrite_link_direction(&post.body_text), self.repository))
                }
                a class="read-more" href=(post.source_url) target="_blank" rel="noopener noreferrer" { "Read more" }
                footer {
                    a class="reach-out" href=(contact) target="_blank" rel="noopener noreferrer" { "Reach out" }
                }
            }
        }
    }
}

/// Empty state message for boards with no posts.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }

    #[must_use]
    pub const fn no_posts() -> Self {
        Self {
            message: "No job posts for this month yet.",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="empty-state" {
                p { (self.message) }
            }
        }
    }
}
