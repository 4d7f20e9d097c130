use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum_test::TestServer;
use tarrytown_config::{ArchiveConfig, Config, ServerConfig};
use tarrytown_server::{AppState, create_app};
use tempfile::TempDir;

/// A throwaway archive on disk:
///
/// ```text
/// <tmp>/videos/tapes/{b.mp4, A.mp4, file10.mp4, file2.mp4, notes.txt}
/// <tmp>/videos/tapes/1987/xmas.mkv
/// <tmp>/videos/clips/
/// <tmp>/data/
/// <tmp>/outside/secret.mp4
/// ```
// Code is used by test modules, but not in this scope
#[allow(unused)]
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    _tempdir: TempDir,
}

#[allow(unused)]
impl TestApp {
    pub fn root(&self) -> &Path {
        self._tempdir.path()
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.root().join("videos")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root().join("data")
    }
}

#[allow(unused)]
pub async fn build_test_app() -> Result<TestApp> {
    build_test_app_with(|_| {}).await
}

/// Build the fixture archive, let `customize` adjust the config (and write
/// extra files into the tempdir), then start an in-process server.
#[allow(unused)]
pub async fn build_test_app_with<F>(customize: F) -> Result<TestApp>
where
    F: FnOnce(&mut Config),
{
    let tempdir =
        tempfile::tempdir().context("failed to create temporary directory")?;
    let root = tempdir.path().join("videos");
    let tapes = root.join("tapes");

    std::fs::create_dir_all(tapes.join("1987"))
        .context("failed to create tapes directory")?;
    std::fs::create_dir_all(root.join("clips"))
        .context("failed to create clips directory")?;
    std::fs::create_dir_all(tempdir.path().join("data"))
        .context("failed to create data directory")?;
    std::fs::create_dir_all(tempdir.path().join("outside"))
        .context("failed to create outside directory")?;

    for name in ["b.mp4", "A.mp4", "file10.mp4", "file2.mp4", "notes.txt"] {
        std::fs::write(tapes.join(name), name.as_bytes())
            .with_context(|| format!("failed to write {name}"))?;
    }
    std::fs::write(tapes.join("1987/xmas.mkv"), b"xmas")?;
    std::fs::write(tempdir.path().join("outside/secret.mp4"), b"secret")?;

    let mut config = Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        archive: ArchiveConfig {
            root,
            data_dir: tempdir.path().join("data"),
            ..ArchiveConfig::default()
        },
        dev_mode: true,
        ..Config::default()
    };
    customize(&mut config);

    let state = AppState::new(config)
        .await
        .context("failed to open test archive")?;
    let server = TestServer::new(create_app(state.clone()))
        .context("failed to start test server")?;

    Ok(TestApp {
        server,
        state,
        _tempdir: tempdir,
    })
}
