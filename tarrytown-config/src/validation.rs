use std::path::{Component, Path};

use axum::http::{Method, header::HeaderName};
use tarrytown_model::routes;
use thiserror::Error;

use super::models::{ArchiveConfig, Config, CorsConfig};

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("at least one archive category must be configured")]
    NoCategories,
    #[error("invalid archive category '{name}': {reason}")]
    InvalidCategory { name: String, reason: &'static str },
    #[error("invalid public prefix '{prefix}': {reason}")]
    InvalidPublicPrefix { prefix: String, reason: &'static str },
    #[error("invalid CORS configuration: {reason}")]
    InvalidCorsConfig { reason: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    validate_archive(&config.archive)?;
    validate_cors(&config.cors)?;

    if !config.archive.data_dir.is_dir() {
        warnings.push_with_hint(
            format!(
                "metadata directory {} does not exist; pages will show file names only",
                config.archive.data_dir.display()
            ),
            "Set ARCHIVE_DATA_DIR to the folder holding site.json and <category>.json",
        );
    }

    if let Some(navbar) = &config.archive.navbar_path
        && !navbar.is_file()
    {
        warnings.push(format!(
            "navbar file {} not found; pages will render without navigation",
            navbar.display()
        ));
    }

    if !config.dev_mode && config.cors.is_wildcard_included() {
        warnings.push_with_hint(
            "CORS wildcard origin enabled outside DEV_MODE",
            "List the page origins in CORS_ALLOWED_ORIGINS instead of '*'",
        );
    }

    if config.cors.allow_credentials && config.cors.is_wildcard_included() {
        warnings.push(
            "CORS credentials allowed alongside wildcard origin; browsers will reject such configuration",
        );
    }

    Ok(warnings)
}

fn validate_archive(archive: &ArchiveConfig) -> Result<(), ConfigGuardRailError> {
    if archive.categories.is_empty() {
        return Err(ConfigGuardRailError::NoCategories);
    }

    for (idx, name) in archive.categories.iter().enumerate() {
        validate_category(name)?;
        if archive.categories[..idx].contains(name) {
            return Err(ConfigGuardRailError::InvalidCategory {
                name: name.clone(),
                reason: "listed more than once",
            });
        }
    }

    validate_prefix(&archive.public_prefix)
}

/// A category must name exactly one directory directly below the root.
fn validate_category(name: &str) -> Result<(), ConfigGuardRailError> {
    let invalid = |reason| ConfigGuardRailError::InvalidCategory {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("must not be empty"));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(invalid("must not contain path separators"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("must be a plain folder name")),
    }
}

fn validate_prefix(prefix: &str) -> Result<(), ConfigGuardRailError> {
    let invalid = |reason| ConfigGuardRailError::InvalidPublicPrefix {
        prefix: prefix.to_string(),
        reason,
    };

    if !prefix.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if prefix.len() < 2 || prefix.ends_with('/') {
        return Err(invalid("must name a folder below '/'"));
    }
    if prefix.contains(['?', '#', '\\', '\0']) {
        return Err(invalid("must be a plain URL path"));
    }
    if prefix.split('/').any(|segment| segment == ".." || segment == ".") {
        return Err(invalid("must not contain dot segments"));
    }
    if reserved_segments().any(|reserved| first_segment(prefix) == reserved) {
        return Err(invalid("clashes with a built-in route"));
    }

    Ok(())
}

/// First path segments already claimed by the server's own routes.
fn reserved_segments() -> impl Iterator<Item = &'static str> {
    [
        routes::v1::LISTING,
        routes::legacy::LIST,
        routes::pages::BROWSE,
        routes::service::PING,
        routes::service::HEALTH,
    ]
    .into_iter()
    .map(first_segment)
}

fn first_segment(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or_default()
}

fn validate_cors(cors: &CorsConfig) -> Result<(), ConfigGuardRailError> {
    if cors.allowed_methods.is_empty() {
        return Err(ConfigGuardRailError::InvalidCorsConfig {
            reason:
                "CORS_ALLOWED_METHODS must include at least one HTTP method"
                    .into(),
        });
    }

    for method in &cors.allowed_methods {
        Method::from_bytes(method.as_bytes()).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!(
                    "invalid HTTP method `{}` in CORS_ALLOWED_METHODS",
                    method
                ),
            }
        })?;
    }

    for header in &cors.allowed_headers {
        HeaderName::from_bytes(header.as_bytes()).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!(
                    "invalid header name `{}` in CORS_ALLOWED_HEADERS",
                    header
                ),
            }
        })?;
    }

    Ok(())
}
