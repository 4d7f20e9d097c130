//! Core data model definitions shared across Tarrytown crates.
#![allow(missing_docs)]

pub mod listing;
pub mod media_type;
pub mod metadata;
pub mod routes;

// Intentionally curated re-exports for downstream consumers.
pub use listing::{
    ErrorBody, ErrorDetail, ErrorKind, ListingQuery, ListingResponse,
};
pub use media_type::{VIDEO_FILE_EXTENSIONS, VideoMediaType, extension_of};
pub use metadata::{SiteInfo, VideoInfo, VideoMetadata};
