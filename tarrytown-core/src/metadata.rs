//! Optional display metadata stored next to the archive.

use std::path::Path;

use serde::de::DeserializeOwned;
use tarrytown_model::{SiteInfo, VideoMetadata};
use tokio::fs;

use crate::error::{ArchiveError, Result};

/// Read and parse a JSON document. A missing file is `NotFound`, anything
/// else unreadable is `Io`, and bad JSON is `Metadata`.
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ArchiveError::NotFound(path.display().to_string()));
        }
        Err(err) => return Err(ArchiveError::io(path, err)),
    };

    serde_json::from_slice(&bytes).map_err(|source| ArchiveError::Metadata {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn load_site_info(path: &Path) -> Result<SiteInfo> {
    load_json(path).await
}

pub async fn load_video_metadata(path: &Path) -> Result<VideoMetadata> {
    load_json(path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn parses_site_info_with_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.json");
        std::fs::write(&path, br#"{"title":"Tarrytown Tapes"}"#).unwrap();

        let site = load_site_info(&path).await.unwrap();
        assert_eq!(site.title.as_deref(), Some("Tarrytown Tapes"));
        assert!(site.intro.is_none());
    }

    #[tokio::test]
    async fn parses_per_file_metadata() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tapes.json");
        std::fs::write(
            &path,
            br#"{"a.mp4":{"title":"Birthday","description":"1989"},"b.mkv":{}}"#,
        )
        .unwrap();

        let meta = load_video_metadata(&path).await.unwrap();
        assert_eq!(meta["a.mp4"].title.as_deref(), Some("Birthday"));
        assert!(meta["b.mkv"].description.is_none());
    }

    #[tokio::test]
    async fn classifies_failures() {
        let tmp = TempDir::new().unwrap();
        let missing = load_site_info(&tmp.path().join("nope.json")).await;
        assert!(matches!(missing, Err(ArchiveError::NotFound(_))));

        let bad = tmp.path().join("bad.json");
        std::fs::write(&bad, b"{not json").unwrap();
        assert!(matches!(
            load_site_info(&bad).await,
            Err(ArchiveError::Metadata { .. })
        ));
    }
}
