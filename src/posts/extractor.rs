//! Parsing of the comment header convention.
//!
//! A post's first line is `Company | keyword | keyword | link`. The last
//! field only exists to hold the contact link and is never a keyword.
//! Everything after the first line is free-form markdown.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use super::JobPost;
use crate::github::RawComment;

/// Markdown-style `[text](href)` link left unrendered in the HTML. The href
/// may hold balanced parentheses.
static MARKDOWN_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]*)\]\(((?:[^()\s]|\([^()\s]*\))+)\)")
        .expect("Invalid markdown link regex")
});

/// Converts a raw comment into a [`JobPost`]. Never fails.
pub trait PostExtractor: Send + Sync {
    fn extract(&self, comment: &RawComment) -> JobPost;
}

/// The pipe-delimited first-line header format.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipeHeaderExtractor;

impl PostExtractor for PipeHeaderExtractor {
    fn extract(&self, comment: &RawComment) -> JobPost {
        let (company_name, keywords) = split_header(first_line(&comment.body_text));

        let contact_url = extract_links(first_line(&comment.body_html))
            .pop()
            .and_then(|link| link.href)
            .filter(|href| !href.is_empty())
            .unwrap_or_else(|| comment.url.clone());

        JobPost {
            company_name,
            keywords,
            body_text: strip_first_line(&comment.body),
            published_at: comment.published_at,
            updated_at: comment.updated_at,
            contact_url,
            source_url: comment.url.clone(),
        }
    }
}

/// A hyperlink found in an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLink {
    /// Visible text, trimmed.
    pub text: String,
    pub href: Option<String>,
}

/// Split a header line into the company name and its keywords.
///
/// The final field after the company name is dropped.
#[must_use]
pub fn split_header(header: &str) -> (String, Vec<String>) {
    let mut fields = header.split('|').map(str::trim);
    let company_name = fields.next().unwrap_or_default().to_string();

    let mut keywords: Vec<String> = fields.map(str::to_string).collect();
    keywords.pop();

    (company_name, keywords)
}

/// All hyperlinks in an HTML fragment, in document order.
///
/// Falls back to markdown-style `[text](href)` links in the fragment's text
/// when it contains no `<a>` elements.
#[must_use]
pub fn extract_links(html: &str) -> Vec<HeaderLink> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse("a").expect("Invalid selector");

    let links: Vec<HeaderLink> = fragment
        .select(&selector)
        .map(|element| HeaderLink {
            text: element.text().collect::<String>().trim().to_string(),
            href: element.value().attr("href").map(str::to_string),
        })
        .collect();

    if !links.is_empty() {
        return links;
    }

    let text: String = fragment.root_element().text().collect();
    MARKDOWN_LINK
        .captures_iter(&text)
        .map(|caps| HeaderLink {
            text: caps[1].trim().to_string(),
            href: Some(caps[2].to_string()),
        })
        .collect()
}

fn first_line(text: &str) -> &str {
    text.split_once('\n').map_or(text, |(line, _)| line)
}

fn strip_first_line(text: &str) -> String {
    text.split_once('\n')
        .map_or("", |(_, rest)| rest)
        .trim()
        .to_string()
}
