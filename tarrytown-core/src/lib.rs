//! # Tarrytown Core
//!
//! Filesystem-facing logic for the Tarrytown video archive.
//!
//! ## Overview
//!
//! - [`archive`]: resolves user-supplied categories and paths against the
//!   archive root and produces sorted media listings
//! - [`sort`]: digit-aware, case-insensitive ordering for file names
//! - [`render`]: HTML rendering of a listing, independent of how the listing
//!   was produced
//! - [`metadata`]: loading of optional display metadata (`site.json` and
//!   per-category files)
//!
//! Nothing here mutates the filesystem; every operation is a read-only query
//! and safe to run concurrently.

pub mod archive;
pub mod error;
pub mod metadata;
pub mod render;
pub mod sort;

pub use archive::{ArchiveRoot, ListingTarget, ResolvedDirectory};
pub use error::{ArchiveError, Result};
