//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout and footer
//! - `badge`: Keyword badges with emoji icons
//! - `card`: Job post cards and the empty state
//! - `markdown`: Post body rendering
//! - `metadata`: Open Graph tags and the social card URL

pub mod badge;
pub mod card;
pub mod layout;
pub mod markdown;
pub mod metadata;

pub use badge::{keyword_icons, KeywordBadge};
pub use card::{humanize_duration, rewrite_link_direction, EmptyState, PostCard};
pub use layout::BaseLayout;
pub use markdown::{is_safe_href, render_markdown};
pub use metadata::{social_card_url, OpenGraphMetadata};
