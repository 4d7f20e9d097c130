pub mod sources;

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_ARCHIVE_ROOT, DEFAULT_CATEGORIES, DEFAULT_CORS_HEADERS,
    DEFAULT_CORS_METHODS, DEFAULT_DATA_DIR, DEFAULT_PUBLIC_PREFIX,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub archive: ArchiveConfig,
    pub cors: CorsConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

impl Config {
    pub fn site_metadata_path(&self) -> PathBuf {
        self.archive.data_dir.join("site.json")
    }

    pub fn category_metadata_path(&self, category: &str) -> PathBuf {
        self.archive.data_dir.join(format!("{category}.json"))
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Where the videos live and how they are exposed.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Directory bounding everything the server may list or serve.
    pub root: PathBuf,
    /// Public URL prefix for the media area, without a trailing slash.
    pub public_prefix: String,
    /// Category names accepted by `?dir=`; each is a direct subfolder of
    /// `root`.
    pub categories: Vec<String>,
    /// Holds `site.json` and `<category>.json` display metadata.
    pub data_dir: PathBuf,
    /// Optional HTML fragment injected at the top of rendered pages.
    pub navbar_path: Option<PathBuf>,
    /// Also serve the listing at `/api/list.php` as a bare array.
    pub legacy_aliases: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ARCHIVE_ROOT),
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_string(),
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            navbar_path: None,
            legacy_aliases: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allowed_methods: DEFAULT_CORS_METHODS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            allowed_headers: DEFAULT_CORS_HEADERS
                .iter()
                .map(|h| h.to_string())
                .collect(),
            allow_credentials: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
