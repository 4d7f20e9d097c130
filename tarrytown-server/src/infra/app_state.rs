use std::sync::Arc;

use tarrytown_config::Config;
use tarrytown_core::{ArchiveError, ArchiveRoot};

/// Shared, read-only request state. Nothing in here changes after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub archive: Arc<ArchiveRoot>,
}

impl AppState {
    /// Canonicalise the configured archive root and bundle it with `config`.
    pub async fn new(config: Config) -> Result<Self, ArchiveError> {
        let archive = ArchiveRoot::open(
            &config.archive.root,
            config.archive.public_prefix.clone(),
            config.archive.categories.clone(),
        )
        .await?;

        Ok(Self {
            config: Arc::new(config),
            archive: Arc::new(archive),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn archive(&self) -> &ArchiveRoot {
        &self.archive
    }
}
