use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    constants::CONFIG_PATH_ENV,
    util::{parse_bool, parse_csv},
};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub archive: FileArchiveConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileArchiveConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navbar_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_aliases: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub archive_root: Option<PathBuf>,
    pub public_prefix: Option<String>,
    pub categories: Option<Vec<String>>,
    pub data_dir: Option<PathBuf>,
    pub navbar_path: Option<PathBuf>,
    pub legacy_aliases: Option<bool>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub cors_allowed_methods: Option<Vec<String>>,
    pub cors_allowed_headers: Option<Vec<String>>,
    pub cors_allow_credentials: Option<bool>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so callers (and tests) need not
    /// mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str| lookup(key).map(PathBuf::from);
        let csv = |key: &str| lookup(key).map(|raw| parse_csv(&raw));
        let flag = |key: &str| lookup(key).and_then(|raw| parse_bool(&raw));

        Self {
            config_path: path(CONFIG_PATH_ENV),
            server_host: lookup("SERVER_HOST"),
            server_port: lookup("SERVER_PORT").and_then(|s| s.parse().ok()),
            archive_root: path("ARCHIVE_ROOT"),
            public_prefix: lookup("ARCHIVE_PUBLIC_PREFIX"),
            categories: csv("ARCHIVE_CATEGORIES"),
            data_dir: path("ARCHIVE_DATA_DIR"),
            navbar_path: path("ARCHIVE_NAVBAR_PATH"),
            legacy_aliases: flag("ARCHIVE_LEGACY_ALIASES"),
            cors_allowed_origins: csv("CORS_ALLOWED_ORIGINS"),
            cors_allowed_methods: csv("CORS_ALLOWED_METHODS"),
            cors_allowed_headers: csv("CORS_ALLOWED_HEADERS"),
            cors_allow_credentials: flag("CORS_ALLOW_CREDENTIALS"),
            dev_mode: flag("DEV_MODE"),
        }
    }
}
