use std::path::Path;

use tarrytown_model::{ListingResponse, VideoMediaType};
use tokio::fs;
use tracing::debug;

use super::resolver::{ArchiveRoot, ListingTarget, ResolvedDirectory};
use crate::{
    error::{ArchiveError, Result},
    sort::sort_natural,
};

impl ArchiveRoot {
    /// Resolve `target` and list the media files directly inside it.
    pub async fn list(&self, target: &ListingTarget) -> Result<ListingResponse> {
        let directory = self.resolve(target).await?;
        let files = self.media_files(&directory).await?;
        Ok(ListingResponse {
            path: directory.logical,
            files,
        })
    }

    /// Names of the playable files directly inside `directory`, naturally
    /// sorted.
    ///
    /// Any I/O failure aborts the whole listing; callers never see a partial
    /// list.
    pub async fn media_files(
        &self,
        directory: &ResolvedDirectory,
    ) -> Result<Vec<String>> {
        let dir_path = directory.absolute.as_path();
        let mut entries = fs::read_dir(dir_path)
            .await
            .map_err(|err| ArchiveError::io(dir_path, err))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|err| ArchiveError::io(dir_path, err))?
        {
            let entry_path = entry.path();
            let Ok(name) = entry.file_name().into_string() else {
                debug!(path = %entry_path.display(), "skipping non UTF-8 file name");
                continue;
            };

            if VideoMediaType::from_file_name(&name).is_none() {
                continue;
            }

            let file_type = entry
                .file_type()
                .await
                .map_err(|err| ArchiveError::io(&entry_path, err))?;

            let is_listable = if file_type.is_file() {
                true
            } else if file_type.is_symlink() {
                self.is_contained_file(&entry_path).await
            } else {
                false
            };

            if is_listable {
                files.push(name);
            }
        }

        sort_natural(&mut files);
        Ok(files)
    }

    /// Symlinks are listed only when they point at a regular file that is
    /// itself inside the root. Dangling links are skipped.
    async fn is_contained_file(&self, link: &Path) -> bool {
        let Ok(target) = fs::canonicalize(link).await else {
            debug!(path = %link.display(), "skipping dangling symlink");
            return false;
        };
        if !self.contains(&target) {
            debug!(
                path = %link.display(),
                target = %target.display(),
                "skipping symlink that leaves the archive root"
            );
            return false;
        }
        fs::metadata(&target)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }
}
