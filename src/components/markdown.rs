//! Markdown rendering for post bodies.
//!
//! Bodies render as GitHub shows them: `:shortcode:` emoji, bare URLs,
//! `@user` mentions and `#123` references become links. Raw HTML is shown as
//! text.

use std::borrow::Cow;

use maud::{Markup, PreEscaped};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, CowStr, Event, LinkType, Options, Parser, Tag};
use regex::{Captures, Regex};

/// Schemes a link may carry. Scheme-less links are relative and allowed.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

static SHORTCODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([a-z0-9_+-]+):").expect("Invalid shortcode regex"));

static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<url>(?:https?://|www\.)[^\s<>]+)",
        r"|(?P<user>\B@[A-Za-z0-9](?:-?[A-Za-z0-9]){0,38})",
        r"|(?P<issue>\B#[0-9]+\b)",
    ))
    .expect("Invalid reference regex")
});

/// Whether an href is safe to emit in a link.
///
/// Leading control characters and spaces are ignored and tabs and newlines
/// removed before reading the scheme, the way browsers parse URLs.
#[must_use]
pub fn is_safe_href(href: &str) -> bool {
    let cleaned: String = href
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();

    match cleaned.find(|c| matches!(c, ':' | '/' | '?' | '#')) {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

/// Render markdown to HTML.
///
/// `#123` references link to issues of `repository`. Links with schemes
/// outside http, https and mailto point nowhere.
#[must_use]
pub fn render_markdown(text: &str, repository: &str) -> Markup {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;

    let mut events: Vec<Event<'_>> = Vec::new();
    let mut pending = String::new();
    // Inside a link, image or code block nothing is decorated.
    let mut plain_depth = 0usize;

    for event in Parser::new_ext(text, options) {
        if let Event::Text(t) | Event::Html(t) = &event {
            pending.push_str(t);
            continue;
        }
        flush_text(&mut pending, plain_depth == 0, repository, &mut events);

        let event = match event {
            Event::Start(Tag::Link(kind, dest, title)) => {
                plain_depth += 1;
                let dest = if is_safe_href(&dest) { dest } else { CowStr::Borrowed("#") };
                Event::Start(Tag::Link(kind, dest, title))
            }
            Event::Start(Tag::Image(kind, dest, title)) => {
                plain_depth += 1;
                let dest = if is_safe_href(&dest) { dest } else { CowStr::Borrowed("") };
                Event::Start(Tag::Image(kind, dest, title))
            }
            Event::Start(tag @ Tag::CodeBlock(_)) => {
                plain_depth += 1;
                Event::Start(tag)
            }
            Event::End(tag @ (Tag::Link(..) | Tag::Image(..) | Tag::CodeBlock(_))) => {
                plain_depth = plain_depth.saturating_sub(1);
                Event::End(tag)
            }
            other => other,
        };
        events.push(event);
    }
    flush_text(&mut pending, plain_depth == 0, repository, &mut events);

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    PreEscaped(out)
}

/// Emit accumulated text, decorated when outside links and code.
fn flush_text(
    pending: &mut String,
    decorate: bool,
    repository: &str,
    events: &mut Vec<Event<'_>>,
) {
    if pending.is_empty() {
        return;
    }
    let text = std::mem::take(pending);
    if decorate {
        push_decorated(&text, repository, events);
    } else {
        events.push(Event::Text(text.into()));
    }
}

fn push_decorated(text: &str, repository: &str, events: &mut Vec<Event<'_>>) {
    let text = replace_shortcodes(text);
    let mut last = 0;

    for caps in REFERENCE.captures_iter(&text) {
        let Some(whole) = caps.get(0) else { continue };
        let (label, href) = if let Some(url) = caps.name("url") {
            let label = trim_url(url.as_str());
            let href = if label.starts_with("www.") {
                format!("http://{label}")
            } else {
                label.to_string()
            };
            (label, href)
        } else if let Some(user) = caps.name("user") {
            let label = user.as_str();
            (label, format!("https://github.com/{}", &label[1..]))
        } else if let Some(issue) = caps.name("issue") {
            let label = issue.as_str();
            (label, format!("https://github.com/{repository}/issues/{}", &label[1..]))
        } else {
            continue;
        };

        if whole.start() > last {
            events.push(Event::Text(text[last..whole.start()].to_string().into()));
        }
        let dest: CowStr<'_> = href.into();
        let link = Tag::Link(LinkType::Autolink, dest, CowStr::Borrowed(""));
        events.push(Event::Start(link.clone()));
        events.push(Event::Text(label.to_string().into()));
        events.push(Event::End(link));
        last = whole.start() + label.len();
    }

    if last < text.len() {
        events.push(Event::Text(text[last..].to_string().into()));
    }
}

fn replace_shortcodes(text: &str) -> Cow<'_, str> {
    SHORTCODE.replace_all(text, |caps: &Captures<'_>| {
        emojis::get_by_shortcode(&caps[1])
            .map_or_else(|| caps[0].to_string(), |emoji| emoji.as_str().to_string())
    })
}

/// Drop trailing punctuation and unbalanced closing parentheses from a bare URL.
fn trim_url(url: &str) -> &str {
    let mut end = url.len();
    loop {
        let candidate = &url[..end];
        let Some(last) = candidate.chars().next_back() else { break };
        let unbalanced =
            last == ')' && candidate.matches(')').count() > candidate.matches('(').count();
        let punctuation = matches!(
            last,
            '.' | ',' | ':' | ';' | '!' | '?' | '\'' | '"' | '*' | '_' | '~'
        );
        if punctuation || unbalanced {
            end -= last.len_utf8();
        } else {
            break;
        }
    }
    &url[..end]
}
