pub mod error;

use once_cell::sync::Lazy;
use std::{fs, path::PathBuf};

use self::error::ConfigLoadError;
use super::{
    models::{
        ArchiveConfig, Config, ConfigMetadata, CorsConfig, ServerConfig,
        sources::{EnvConfig, FileConfig},
    },
    util::normalize_prefix,
    validation::{self, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("tarrytown.toml"),
        PathBuf::from("config/tarrytown.toml"),
    ]
});

/// Fully composed configuration plus non-fatal findings.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default, Clone)]
struct ConfigLoaderOptions {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env`, the process environment and the config file, in that
    /// order, then validate.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        self.load_from_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Same as [`ConfigLoader::load`] but with a caller-supplied environment
    /// snapshot. No `.env` file is read.
    pub fn load_from_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let metadata = ConfigMetadata {
            config_path,
            env_file_loaded,
        };
        Self::compose(file_config, env, metadata)
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (path, explicit) =
            match (&self.options.config_path, &env.config_path) {
                (Some(path), _) | (None, Some(path)) => (Some(path.clone()), true),
                (None, None) => (
                    DEFAULT_CONFIG_LOCATIONS
                        .iter()
                        .find(|candidate| candidate.exists())
                        .cloned(),
                    false,
                ),
            };

        let Some(path) = path else {
            return Ok((None, None));
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents =
            fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }

    /// Merge sources: environment over file over built-in defaults.
    pub fn compose(
        file_config: Option<FileConfig>,
        env: EnvConfig,
        metadata: ConfigMetadata,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if metadata.config_path.is_none() {
            warnings.push_with_hint(
                "No tarrytown.toml detected; falling back to environment variables",
                "Create tarrytown.toml or set TARRYTOWN_CONFIG to point at one",
            );
        }

        let FileConfig {
            server: file_server,
            archive: file_archive,
            cors: file_cors,
            dev_mode: file_dev_mode,
        } = file_config.unwrap_or_default();

        let server_defaults = ServerConfig::default();
        let server = ServerConfig {
            host: env
                .server_host
                .or(file_server.host)
                .unwrap_or(server_defaults.host),
            port: env
                .server_port
                .or(file_server.port)
                .unwrap_or(server_defaults.port),
        };

        let archive_defaults = ArchiveConfig::default();
        let archive = ArchiveConfig {
            root: env
                .archive_root
                .or(file_archive.root)
                .unwrap_or(archive_defaults.root),
            public_prefix: normalize_prefix(
                &env.public_prefix
                    .or(file_archive.public_prefix)
                    .unwrap_or(archive_defaults.public_prefix),
            ),
            categories: env
                .categories
                .or(file_archive.categories)
                .unwrap_or(archive_defaults.categories),
            data_dir: env
                .data_dir
                .or(file_archive.data_dir)
                .unwrap_or(archive_defaults.data_dir),
            navbar_path: env.navbar_path.or(file_archive.navbar_path),
            legacy_aliases: env
                .legacy_aliases
                .or(file_archive.legacy_aliases)
                .unwrap_or(archive_defaults.legacy_aliases),
        };

        let cors_defaults = CorsConfig::default();
        let cors = CorsConfig {
            allowed_origins: env
                .cors_allowed_origins
                .or(file_cors.allowed_origins)
                .unwrap_or(cors_defaults.allowed_origins),
            allowed_methods: env
                .cors_allowed_methods
                .or(file_cors.allowed_methods)
                .unwrap_or(cors_defaults.allowed_methods),
            allowed_headers: env
                .cors_allowed_headers
                .or(file_cors.allowed_headers)
                .unwrap_or(cors_defaults.allowed_headers),
            allow_credentials: env
                .cors_allow_credentials
                .or(file_cors.allow_credentials)
                .unwrap_or(cors_defaults.allow_credentials),
        };

        let config = Config {
            server,
            archive,
            cors,
            dev_mode: env.dev_mode.or(file_dev_mode).unwrap_or(false),
            metadata,
        };

        warnings.extend(validation::apply_guard_rails(&config)?);

        Ok(ConfigLoad { config, warnings })
    }
}
