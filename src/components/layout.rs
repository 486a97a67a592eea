//! Base layout components for the web UI.

use maud::{html, Markup, DOCTYPE};

use super::metadata::OpenGraphMetadata;

/// Base page layout builder.
///
/// ```ignore
/// let page = BaseLayout::new("May 2022", "Next.js job board").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    site_name: &'a str,
    repository: Option<&'a str>,
    og_metadata: Option<OpenGraphMetadata>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title and site name.
    #[must_use]
    pub fn new(title: &'a str, site_name: &'a str) -> Self {
        Self {
            title,
            site_name,
            repository: None,
            og_metadata: None,
        }
    }

    /// Credit the mirrored GitHub repository in the footer.
    #[must_use]
    pub fn with_repository(mut self, repository: &'a str) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Set the Open Graph metadata for social media previews.
    #[must_use]
    pub fn with_og_metadata(mut self, metadata: OpenGraphMetadata) -> Self {
        self.og_metadata = Some(metadata);
        self
    }

    /// Render the complete HTML page with the given content.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="dark";
                    title { (self.title) " - " (self.site_name) }

                    @if let Some(ref og) = self.og_metadata {
                        (og.render())
                    }

                    link rel="stylesheet" href="/static/css/style.css";
                    link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🚀</text></svg>";
                }
                body {
                    main class="container" {
                        (content)
                    }
                    (self.render_footer())
                }
            }
        }
    }

    /// Render the page footer.
    fn render_footer(&self) -> Markup {
        html! {
            footer class="container" {
                small {
                    (self.site_name)
                    @if let Some(repo) = self.repository {
                        " mirrors the monthly hiring discussions of "
                        a href=(format!("https://github.com/{repo}/discussions")) target="_blank" rel="noopener noreferrer" { (repo) }
                        ". Not affiliated with the repository owners."
                    }
                }
            }
        }
    }
}
