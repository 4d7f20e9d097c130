use std::fmt;

/// Query parameters accepted by the listing endpoint.
///
/// Exactly one of `dir` (a category name such as `tapes`) or `path` (a
/// logical path under the public prefix such as `/videos/tapes`) must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListingQuery {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub dir: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub path: Option<String>,
}

impl ListingQuery {
    pub fn category(name: impl Into<String>) -> Self {
        Self {
            dir: Some(name.into()),
            path: None,
        }
    }

    pub fn path(path: impl Into<String>) -> Self {
        Self {
            dir: None,
            path: Some(path.into()),
        }
    }
}

/// Successful listing payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListingResponse {
    /// Normalised logical path, e.g. `/videos/tapes`. Never has a trailing
    /// slash.
    pub path: String,
    /// File names in natural, case-insensitive order.
    pub files: Vec<String>,
}

impl ListingResponse {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Classification carried by every error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    PathEscape,
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::NotFound => "not_found",
            ErrorKind::PathEscape => "path_escape",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error envelope: `{"error": {"kind": .., "message": .., "status": ..}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    pub message: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn new(kind: ErrorKind, status: u16, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                kind,
                message: message.into(),
                status,
            },
        }
    }
}
