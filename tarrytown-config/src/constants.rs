pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Resolved against the working directory.
pub const DEFAULT_ARCHIVE_ROOT: &str = "videos";
pub const DEFAULT_PUBLIC_PREFIX: &str = "/videos";
pub const DEFAULT_CATEGORIES: &[&str] = &["tapes", "clips"];
pub const DEFAULT_DATA_DIR: &str = "data";

pub const DEFAULT_CORS_METHODS: &[&str] = &["GET", "HEAD", "OPTIONS"];
pub const DEFAULT_CORS_HEADERS: &[&str] = &["content-type", "range"];

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TARRYTOWN_CONFIG";
