use tarrytown_model::{VideoMediaType, extension_of};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Lowercase text after the last `.` of `name`.
pub fn file_extension(name: &str) -> Option<String> {
    extension_of(name)
}

/// `type` hint for a `<source>` element, if the format is known.
pub fn mime_for_file(name: &str) -> Option<&'static str> {
    VideoMediaType::from_file_name(name).map(VideoMediaType::mime)
}
