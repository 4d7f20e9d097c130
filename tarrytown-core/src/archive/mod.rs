//! Safe addressing and listing of the archive on disk.

mod listing;
pub mod resolver;

pub use resolver::{ArchiveRoot, ListingTarget, ResolvedDirectory};
