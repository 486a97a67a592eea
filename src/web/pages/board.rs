//! Monthly board page.

use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::components::{
    humanize_duration, social_card_url, BaseLayout, EmptyState, OpenGraphMetadata, PostCard,
};
use crate::date::{enumerate_valid_months, format_display, is_valid, route_path, Month};
use crate::posts::JobPost;

/// Everything the board page needs.
#[derive(Debug, Clone)]
pub struct BoardView<'a> {
    pub month: Month,
    pub posts: &'a [JobPost],
    pub now: DateTime<Utc>,
    pub site_name: &'a str,
    pub repository: &'a str,
}

/// Previous or next month link, disabled when the target has no archive.
fn month_link(target: Month, now: DateTime<Utc>, label: &str, rel: &str) -> Markup {
    html! {
        @if is_valid(target, now) {
            a class="month-nav" href=(route_path(target)) rel=(rel) title=(format_display(target, false)) { (label) }
        } @else {
            span class="month-nav disabled" aria-disabled="true" { (label) }
        }
    }
}

fn render_age_notice(month: Month, now: DateTime<Utc>) -> Markup {
    let latest = Month::normalize(&now);
    if month >= latest {
        return html! {};
    }
    let age = humanize_duration(latest.start() - month.start());

    html! {
        div class="age-notice" {
            p { "Currently viewing postings that are " b { (age) " old" } "." }
            p {
                "Would you like to view the "
                a href=(route_path(latest)) { "latest postings" }
                "?"
            }
        }
    }
}

fn render_archive_list(current: Month, now: DateTime<Utc>) -> Markup {
    let months = enumerate_valid_months(now);
    html! {
        nav class="archive-list" aria-label="All months" {
            h2 { "All months" }
            ul {
                @for month in months.iter().rev() {
                    li {
                        @if *month == current {
                            a href=(route_path(*month)) aria-current="page" { (format_display(*month, false)) }
                        } @else {
                            a href=(route_path(*month)) { (format_display(*month, false)) }
                        }
                    }
                }
            }
        }
    }
}

/// Render the board for one month.
#[must_use]
pub fn render_board_page(view: &BoardView<'_>) -> Markup {
    let label = format_display(view.month, false);
    let description = format!("{} jobs currently listed.", view.posts.len());
    let og = OpenGraphMetadata::new(&label, &description, view.site_name)
        .with_image(social_card_url(&label, view.posts.len()));

    let content = html! {
        header class="board-header" {
            h1 { (view.site_name) }
            div class="month-switcher" {
                (month_link(view.month.pred(), view.now, "\u{25c0}", "prev"))
                h2 class="month-label" { (label) }
                (month_link(view.month.succ(), view.now, "\u{25b6}", "next"))
            }
            (render_age_notice(view.month, view.now))
        }
        @if view.posts.is_empty() {
            (EmptyState::no_posts())
        } @else {
            section class="post-grid" {
                @for post in view.posts {
                    (PostCard::new(post, view.now, view.repository))
                }
            }
        }
        (render_archive_list(view.month, view.now))
    };

    BaseLayout::new(&label, view.site_name)
        .with_repository(view.repository)
        .with_og_metadata(og)
        .render(content)
}
