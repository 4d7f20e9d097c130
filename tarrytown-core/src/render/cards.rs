use std::fmt::Write;

use tarrytown_model::{ListingResponse, VideoInfo, VideoMetadata};

use super::html::{escape_html, mime_for_file};

/// Playback/download URL for `file` within `listing`.
pub fn video_url(listing: &ListingResponse, file: &str) -> String {
    let mut url = String::new();
    for segment in listing.path.split('/').filter(|s| !s.is_empty()) {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url.push('/');
    url.push_str(&urlencoding::encode(file));
    url
}

/// One Bootstrap card per file. Titles and descriptions come from
/// `metadata` when present, falling back to the file name.
pub fn render_cards(
    listing: &ListingResponse,
    metadata: &VideoMetadata,
) -> String {
    let fallback = VideoInfo::default();
    let mut html = String::new();

    for file in &listing.files {
        let info = metadata.get(file).unwrap_or(&fallback);
        let title = info.title.as_deref().unwrap_or(file);
        let url = escape_html(&video_url(listing, file));
        let source_type = mime_for_file(file)
            .map(|mime| format!(r#" type="{mime}""#))
            .unwrap_or_default();

        html.push_str(r#"<div class="col-md-6 col-lg-4 mb-4">"#);
        html.push_str(r#"<div class="card h-100"><div class="card-body">"#);
        let _ = write!(
            html,
            r#"<h5 class="card-title">{}</h5>"#,
            escape_html(title)
        );
        if let Some(desc) = info.description.as_deref().filter(|d| !d.is_empty())
        {
            let _ =
                write!(html, r#"<p class="card-text">{}</p>"#, escape_html(desc));
        }
        html.push_str("</div>");
        let _ = write!(
            html,
            concat!(
                r#"<video controls preload="metadata" class="w-100" style="background:#000; max-height:240px;">"#,
                r#"<source src="{url}"{source_type}>"#,
                "Sorry, your browser cannot play this file format.",
                "</video>",
                r#"<div class="card-footer text-center"><a href="{url}" download>Download</a></div>"#,
            ),
            url = url,
            source_type = source_type,
        );
        html.push_str("</div></div>");
    }

    html
}

/// Placeholder shown when a listing has no playable files.
pub fn render_empty(listing: &ListingResponse) -> String {
    format!(
        r#"<div class="alert alert-secondary">No videos found in <code>{}/</code>.</div>"#,
        escape_html(&listing.path)
    )
}

/// Placeholder shown when the listing could not be produced.
pub fn render_error() -> String {
    r#"<div class="alert alert-danger">Could not load video list.</div>"#
        .to_string()
}
