//! Keyword badges with emoji decoration.

use maud::{html, Markup, Render};
use once_cell::sync::Lazy;
use regex::Regex;

/// Keyword patterns and the icons shown next to a matching keyword.
const ICON_TABLE: &[(&str, &[&str])] = &[
    (r"(?i)remote", &["🏠"]),
    (r"(?i)full[- ]?stack", &["🧰"]),
    (r"(?i)front[- ]?end|designer", &["🎨"]),
    (r"(?i)senior", &["🧱"]),
    (r"(?i)full[- ]?time", &["⏲️"]),
    (r"(?i)contract", &["📃"]),
    (r"\$", &["💸"]),
    (r"(?i)equity|stock", &["📈"]),
];

static KEYWORD_ICONS: Lazy<Vec<(Regex, &'static [&'static str])>> = Lazy::new(|| {
    ICON_TABLE
        .iter()
        .map(|&(pattern, icons)| (Regex::new(pattern).expect("Invalid keyword regex"), icons))
        .collect()
});

/// Icons for every pattern the keyword matches, in table order.
#[must_use]
pub fn keyword_icons(keyword: &str) -> Vec<&'static str> {
    KEYWORD_ICONS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(keyword))
        .flat_map(|(_, icons)| icons.iter().copied())
        .collect()
}

/// A keyword tag from a post header.
#[derive(Debug, Clone)]
pub struct KeywordBadge<'a> {
    pub keyword: &'a str,
}

impl<'a> KeywordBadge<'a> {
    #[must_use]
    pub const fn new(keyword: &'a str) -> Self {
        Self { keyword }
    }
}

impl Render for KeywordBadge<'_> {
    fn render(&self) -> Markup {
        let icons = keyword_icons(self.keyword);
        html! {
            span class="keyword-badge" {
                span class="keyword-label" { (self.keyword) }
                @if !icons.is_empty() {
                    span class="keyword-icons" {
                        @for icon in &icons {
                            span { (icon) }
                        }
                    }
                }
            }
        }
    }
}
