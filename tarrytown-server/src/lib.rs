//! HTTP surface of the Tarrytown video archive.
//!
//! The binary in `main.rs` only loads configuration and binds a socket; the
//! router itself is built by [`create_app`] so integration tests can drive it
//! in-process.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::{
    app::create_app,
    app_state::AppState,
    errors::{AppError, AppResult},
};
