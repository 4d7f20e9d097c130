//! HTML rendering for archive pages.
//!
//! Everything here is a pure function of a [`ListingResponse`] and optional
//! metadata, so a page can be rendered from any listing source.

mod cards;
mod html;

pub use cards::{render_cards, render_empty, render_error, video_url};
pub use html::{escape_html, file_extension, mime_for_file};

use tarrytown_model::{ListingResponse, SiteInfo, VideoMetadata};

/// Body of a category page.
#[derive(Debug, Clone)]
pub enum PageContent {
    Listing {
        listing: ListingResponse,
        metadata: VideoMetadata,
    },
    Error,
}

impl PageContent {
    pub fn to_html(&self) -> String {
        match self {
            PageContent::Listing { listing, .. } if listing.is_empty() => {
                render_empty(listing)
            }
            PageContent::Listing { listing, metadata } => {
                format!(
                    r#"<div class="row">{}</div>"#,
                    render_cards(listing, metadata)
                )
            }
            PageContent::Error => render_error(),
        }
    }
}

/// Inputs for [`render_page`].
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub category: &'a str,
    pub site: &'a SiteInfo,
    /// Raw HTML inserted above the page. Trusted, not escaped.
    pub navbar: Option<&'a str>,
    pub content: PageContent,
}

/// Full HTML document for a category page.
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let title = escape_html(ctx.site.title.as_deref().unwrap_or(ctx.category));
    let intro = escape_html(ctx.site.intro.as_deref().unwrap_or(ctx.category));
    let navbar = ctx.navbar.unwrap_or_default();
    let content = ctx.content.to_html();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body>
{navbar}
<main class="container py-4">
<h1 id="site-title">{title}</h1>
<p id="site-intro" class="lead">{intro}</p>
<div id="video-list">{content}</div>
</main>
</body>
</html>
"#
    )
}
