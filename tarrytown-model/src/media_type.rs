use std::fmt::{self, Display, Formatter};

/// Lowercase extensions the archive is willing to list.
pub const VIDEO_FILE_EXTENSIONS: &[&str] = &["mp4", "m4v", "webm", "mov", "mkv"];

/// Video container formats recognised by the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VideoMediaType {
    Mp4,
    M4v,
    Webm,
    Mov,
    Mkv,
}

impl VideoMediaType {
    pub const ALL: [VideoMediaType; 5] = [
        VideoMediaType::Mp4,
        VideoMediaType::M4v,
        VideoMediaType::Webm,
        VideoMediaType::Mov,
        VideoMediaType::Mkv,
    ];

    /// Match an extension case-insensitively, without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp4" => Some(VideoMediaType::Mp4),
            "m4v" => Some(VideoMediaType::M4v),
            "webm" => Some(VideoMediaType::Webm),
            "mov" => Some(VideoMediaType::Mov),
            "mkv" => Some(VideoMediaType::Mkv),
            _ => None,
        }
    }

    /// Convenience wrapper over [`extension_of`] + [`Self::from_extension`].
    pub fn from_file_name(name: &str) -> Option<Self> {
        extension_of(name).and_then(|ext| Self::from_extension(&ext))
    }

    pub fn extension(self) -> &'static str {
        match self {
            VideoMediaType::Mp4 => "mp4",
            VideoMediaType::M4v => "m4v",
            VideoMediaType::Webm => "webm",
            VideoMediaType::Mov => "mov",
            VideoMediaType::Mkv => "mkv",
        }
    }

    /// MIME type hint for `<source type=..>`. Browsers generally still
    /// refuse to play Matroska natively.
    pub fn mime(self) -> &'static str {
        match self {
            VideoMediaType::Mp4 | VideoMediaType::M4v => "video/mp4",
            VideoMediaType::Webm => "video/webm",
            VideoMediaType::Mov => "video/quicktime",
            VideoMediaType::Mkv => "video/x-matroska",
        }
    }
}

impl Display for VideoMediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Lowercased text after the final `.` of a file name.
///
/// Dotfiles such as `.mp4` yield `mp4`; names without a dot or ending in a
/// dot yield `None`.
pub fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
