//! Open Graph metadata components.

use maud::{html, Markup};
use urlencoding::encode;

/// Image service that renders the social preview card.
const SOCIAL_CARD_BASE: &str = "https://og-image.vercel.app";

/// Logo rendered on the social card (already URL-encoded).
const SOCIAL_CARD_LOGO: &str = "https%3A%2F%2Fassets.vercel.com%2Fimage%2Fupload%2Ffront%2Fassets%2Fdesign%2Fnextjs-white-logo.svg";

/// Open Graph metadata for social media previews.
#[derive(Debug, Clone)]
pub struct OpenGraphMetadata {
    /// Page title (og:title)
    pub title: String,
    /// Page description (og:description)
    pub description: String,
    /// Open Graph type (og:type)
    pub og_type: String,
    /// Locale (og:locale)
    pub locale: String,
    /// Image URL (og:image)
    pub image: Option<String>,
    /// Site name (og:site_name)
    pub site_name: String,
}

impl OpenGraphMetadata {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        site_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            og_type: "website".to_string(),
            locale: "en_US".to_string(),
            image: None,
            site_name: site_name.into(),
        }
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Render the metadata tags.
    pub fn render(&self) -> Markup {
        html! {
            meta property="og:title" content=(&self.title);
            meta property="og:description" content=(&self.description);
            meta property="og:type" content=(&self.og_type);
            meta property="og:locale" content=(&self.locale);
            meta property="og:site_name" content=(&self.site_name);
            @if let Some(ref image_url) = self.image {
                meta property="og:image" content=(image_url);
            }
            meta name="description" content=(&self.description);
        }
    }
}

/// URL of the preview card for a board month, e.g. "Job board for **May 2022** 🚀".
#[must_use]
pub fn social_card_url(month_label: &str, post_count: usize) -> String {
    let text = format!(
        "Job board for<br/>**{month_label}** 🚀<br/><p style=\"font-size:50px\">{post_count} jobs currently listed.</p>"
    );
    format!(
        "{SOCIAL_CARD_BASE}/{}.png?theme=dark&md=1&fontSize=75px&images={SOCIAL_CARD_LOGO}&widths=350&heights=200",
        encode(&text)
    )
}
