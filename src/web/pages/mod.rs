//! Page templates using maud.

mod board;

pub use board::{render_board_page, BoardView};

use maud::{html, Markup};

use crate::components::{BaseLayout, EmptyState};

/// A page with a heading, a message and a link back to the latest board.
fn render_message_page(title: &str, message: &str, site_name: &str) -> Markup {
    let content = html! {
        h1 { (title) }
        (EmptyState::new(message))
        p { a href="/hiring" { "View the latest postings" } }
    };
    BaseLayout::new(title, site_name).render(content)
}

#[must_use]
pub fn render_not_found_page(site_name: &str) -> Markup {
    render_message_page("Not found", "There is no board at this address.", site_name)
}

#[must_use]
pub fn render_unavailable_page(site_name: &str) -> Markup {
    render_message_page(
        "Board unavailable",
        "The job posts could not be loaded right now. Please try again shortly.",
        site_name,
    )
}
