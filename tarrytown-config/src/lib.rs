//! Shared configuration library for Tarrytown.
//!
//! Centralizes config loading (`.env`, TOML file, environment), defaults and
//! validation so the server binary and its tests agree on a single source of
//! truth.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    ArchiveConfig, Config, ConfigMetadata, CorsConfig, ServerConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
