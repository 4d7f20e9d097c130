use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

use tarrytown_model::ListingQuery;
use tokio::fs;
use tracing::{debug, warn};

use crate::error::{ArchiveError, Result};

/// What the caller asked to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingTarget {
    /// Bare category name, e.g. `tapes`.
    Category(String),
    /// Logical path under the public prefix, e.g. `/videos/tapes`.
    Path(String),
}

impl ListingTarget {
    /// Pick the target out of the raw query. Exactly one of `dir` and `path`
    /// must be present.
    pub fn from_query(query: &ListingQuery) -> Result<Self> {
        match (query.dir.as_deref(), query.path.as_deref()) {
            (Some(dir), None) => Ok(ListingTarget::Category(dir.to_string())),
            (None, Some(path)) => Ok(ListingTarget::Path(path.to_string())),
            (Some(_), Some(_)) => Err(ArchiveError::InvalidInput(
                "specify either `dir` or `path`, not both".into(),
            )),
            (None, None) => Err(ArchiveError::InvalidInput(
                "missing `dir` or `path` query parameter".into(),
            )),
        }
    }
}

/// A directory proven to live inside the archive root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirectory {
    /// Canonical absolute location on disk.
    pub absolute: PathBuf,
    /// Public path echoed back to clients, e.g. `/videos/tapes`.
    pub logical: String,
}

/// The canonicalised archive root plus the rules for addressing it.
///
/// Built once at startup; immutable afterwards and cheap to share.
#[derive(Debug, Clone)]
pub struct ArchiveRoot {
    canonical: PathBuf,
    public_prefix: String,
    categories: Vec<String>,
}

impl ArchiveRoot {
    /// Canonicalise `root` and bind it to the given prefix and categories.
    ///
    /// `public_prefix` must already be normalised (leading `/`, no trailing
    /// `/`), as the config loader guarantees.
    pub async fn open(
        root: impl AsRef<Path>,
        public_prefix: impl Into<String>,
        categories: Vec<String>,
    ) -> Result<Self> {
        let root = root.as_ref();
        let canonical = fs::canonicalize(root)
            .await
            .map_err(|err| ArchiveError::io(root, err))?;

        let metadata = fs::metadata(&canonical)
            .await
            .map_err(|err| ArchiveError::io(&canonical, err))?;
        if !metadata.is_dir() {
            return Err(ArchiveError::io(
                &canonical,
                std::io::Error::new(
                    ErrorKind::NotADirectory,
                    "archive root is not a directory",
                ),
            ));
        }

        Ok(Self {
            canonical,
            public_prefix: public_prefix.into(),
            categories,
        })
    }

    pub fn path(&self) -> &Path {
        &self.canonical
    }

    pub fn public_prefix(&self) -> &str {
        &self.public_prefix
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_category(&self, name: &str) -> bool {
        self.categories.iter().any(|category| category == name)
    }

    /// True when `canonical` is the root itself or lies beneath it. Compares
    /// whole path components, so `/srv/videos-old` is not inside
    /// `/srv/videos`.
    pub fn contains(&self, canonical: &Path) -> bool {
        canonical.starts_with(&self.canonical)
    }

    /// Input checks that need no filesystem access. Returns the suffix to
    /// join onto the root.
    pub fn validate<'a>(&self, target: &'a ListingTarget) -> Result<&'a str> {
        match target {
            ListingTarget::Category(name) => {
                if name.trim().is_empty() {
                    return Err(ArchiveError::InvalidInput(
                        "folder name must not be empty".into(),
                    ));
                }
                if !self.is_category(name) {
                    return Err(ArchiveError::InvalidInput(format!(
                        "unknown folder '{name}'"
                    )));
                }
                Ok(name.as_str())
            }
            ListingTarget::Path(raw) => {
                if raw.trim().is_empty() {
                    return Err(ArchiveError::InvalidInput(
                        "path must not be empty".into(),
                    ));
                }
                if raw.contains('\0') {
                    return Err(ArchiveError::InvalidInput(
                        "path contains a NUL byte".into(),
                    ));
                }

                let rest = raw.strip_prefix(&self.public_prefix).ok_or_else(
                    || self.prefix_error(),
                )?;
                if !rest.is_empty() && !rest.starts_with('/') {
                    return Err(self.prefix_error());
                }

                // Leading slashes would make `join` discard the root.
                Ok(rest.trim_start_matches('/'))
            }
        }
    }

    /// Validate, canonicalise and bound-check a listing target.
    ///
    /// The containment check runs on the canonical path, after `..` segments
    /// and symlinks have been resolved, and before the directory check so
    /// probes outside the root are rejected uniformly.
    pub async fn resolve(
        &self,
        target: &ListingTarget,
    ) -> Result<ResolvedDirectory> {
        let suffix = self.validate(target).inspect_err(|err| {
            debug!(target = ?target, error = %err, "rejected listing input");
        })?;

        if climbs_above_root(suffix) {
            warn!(target = ?target, "blocked listing outside the archive root");
            return Err(ArchiveError::PathEscape(self.display(target)));
        }

        let candidate = self.canonical.join(suffix);
        let canonical = match fs::canonicalize(&candidate).await {
            Ok(path) => path,
            Err(err)
                if matches!(
                    err.kind(),
                    ErrorKind::NotFound | ErrorKind::NotADirectory
                ) =>
            {
                return Err(ArchiveError::NotFound(self.display(target)));
            }
            Err(err) => return Err(ArchiveError::io(candidate, err)),
        };

        if !self.contains(&canonical) {
            warn!(
                target = ?target,
                resolved = %canonical.display(),
                "blocked listing outside the archive root"
            );
            return Err(ArchiveError::PathEscape(self.display(target)));
        }

        let metadata = fs::metadata(&canonical)
            .await
            .map_err(|err| ArchiveError::io(&canonical, err))?;
        if !metadata.is_dir() {
            return Err(ArchiveError::NotFound(self.display(target)));
        }

        let logical = self.logical_path(&canonical);
        Ok(ResolvedDirectory {
            absolute: canonical,
            logical,
        })
    }

    /// Public path for a canonical location inside the root.
    fn logical_path(&self, canonical: &Path) -> String {
        let relative = canonical.strip_prefix(&self.canonical).unwrap_or(canonical);
        let segments: Vec<String> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => {
                    Some(part.to_string_lossy().into_owned())
                }
                _ => None,
            })
            .collect();

        if segments.is_empty() {
            self.public_prefix.clone()
        } else {
            format!("{}/{}", self.public_prefix, segments.join("/"))
        }
    }

    fn prefix_error(&self) -> ArchiveError {
        ArchiveError::InvalidInput(format!(
            "path must start with '{}/'",
            self.public_prefix
        ))
    }

    fn display(&self, target: &ListingTarget) -> String {
        match target {
            ListingTarget::Category(name) => {
                format!("{}/{}", self.public_prefix, name)
            }
            ListingTarget::Path(raw) => raw.clone(),
        }
    }
}

/// Lexical pre-check: does a `..` segment step above the start of `suffix`?
/// Catches escapes whose target does not exist, which canonicalisation alone
/// would report as missing.
fn climbs_above_root(suffix: &str) -> bool {
    let mut depth: usize = 0;
    for component in Path::new(suffix).components() {
        match component {
            Component::ParentDir => match depth.checked_sub(1) {
                Some(up) => depth = up,
                None => return true,
            },
            Component::Normal(_) => depth += 1,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    struct Fixture {
        _tmp: TempDir,
        outside: PathBuf,
        archive: ArchiveRoot,
    }

    async fn fixture() -> Fixture {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("videos");
        std_fs::create_dir_all(root.join("tapes/1987")).unwrap();
        std_fs::create_dir_all(root.join("clips")).unwrap();
        std_fs::write(root.join("tapes/a.mp4"), b"").unwrap();
        let outside = tmp.path().join("private");
        std_fs::create_dir_all(&outside).unwrap();

        let archive = ArchiveRoot::open(
            &root,
            "/videos",
            vec!["tapes".into(), "clips".into()],
        )
        .await
        .unwrap();

        Fixture {
            _tmp: tmp,
            outside,
            archive,
        }
    }

    fn path(raw: &str) -> ListingTarget {
        ListingTarget::Path(raw.to_string())
    }

    fn category(name: &str) -> ListingTarget {
        ListingTarget::Category(name.to_string())
    }

    #[test]
    fn query_needs_exactly_one_parameter() {
        assert!(matches!(
            ListingTarget::from_query(&ListingQuery::default()),
            Err(ArchiveError::InvalidInput(_))
        ));
        let both = ListingQuery {
            dir: Some("tapes".into()),
            path: Some("/videos/tapes".into()),
        };
        assert!(matches!(
            ListingTarget::from_query(&both),
            Err(ArchiveError::InvalidInput(_))
        ));
        assert_eq!(
            ListingTarget::from_query(&ListingQuery::category("clips")).unwrap(),
            category("clips")
        );
        assert_eq!(
            ListingTarget::from_query(&ListingQuery::path("/videos/tapes"))
                .unwrap(),
            path("/videos/tapes")
        );
    }

    #[tokio::test]
    async fn resolves_known_category() {
        let fx = fixture().await;
        let resolved = fx.archive.resolve(&category("tapes")).await.unwrap();
        assert_eq!(resolved.logical, "/videos/tapes");
        assert!(resolved.absolute.ends_with("videos/tapes"));
    }

    #[tokio::test]
    async fn rejects_unknown_or_empty_category() {
        let fx = fixture().await;
        for name in ["", "  ", "home", "TAPES", "../tapes", "tapes/1987"] {
            assert!(
                matches!(
                    fx.archive.resolve(&category(name)).await,
                    Err(ArchiveError::InvalidInput(_))
                ),
                "category {name:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn path_form_requires_prefix() {
        let fx = fixture().await;
        for raw in ["", "tapes", "/tapes", "/videosx/tapes", "videos/tapes", "/VIDEOS/tapes"] {
            assert!(
                matches!(
                    fx.archive.resolve(&path(raw)).await,
                    Err(ArchiveError::InvalidInput(_))
                ),
                "path {raw:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn path_form_normalises_logical_path() {
        let fx = fixture().await;
        let cases = [
            ("/videos", "/videos"),
            ("/videos/", "/videos"),
            ("/videos/tapes/", "/videos/tapes"),
            ("/videos//tapes/./1987", "/videos/tapes/1987"),
            ("/videos/clips/../tapes", "/videos/tapes"),
        ];
        for (raw, expected) in cases {
            let resolved = fx.archive.resolve(&path(raw)).await.unwrap();
            assert_eq!(resolved.logical, expected, "input {raw:?}");
        }
    }

    #[tokio::test]
    async fn traversal_outside_root_is_forbidden() {
        let fx = fixture().await;
        for raw in ["/videos/..", "/videos/../private", "/videos/tapes/../../private"] {
            assert!(
                matches!(
                    fx.archive.resolve(&path(raw)).await,
                    Err(ArchiveError::PathEscape(_))
                ),
                "path {raw:?} should be forbidden"
            );
        }
    }

    #[tokio::test]
    async fn etc_traversal_never_resolves() {
        let fx = fixture().await;
        for raw in ["/videos/../../etc/", "/videos/tapes/../../../etc/passwd"] {
            assert!(
                matches!(
                    fx.archive.resolve(&path(raw)).await,
                    Err(ArchiveError::PathEscape(_))
                ),
                "path {raw:?} should be forbidden even when the target is missing"
            );
        }
    }

    #[test]
    fn lexical_climb_detection() {
        assert!(climbs_above_root(".."));
        assert!(climbs_above_root("tapes/../../x"));
        assert!(!climbs_above_root("clips/../tapes"));
        assert!(!climbs_above_root(""));
        assert!(!climbs_above_root("./tapes/."));
    }

    #[tokio::test]
    async fn missing_directory_and_files_are_not_found() {
        let fx = fixture().await;
        for raw in ["/videos/nope", "/videos/tapes/a.mp4", "/videos/tapes/a.mp4/x"] {
            assert!(
                matches!(
                    fx.archive.resolve(&path(raw)).await,
                    Err(ArchiveError::NotFound(_))
                ),
                "path {raw:?} should be not found"
            );
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinked_directory_escaping_root_is_forbidden() {
        let fx = fixture().await;
        let link = fx.archive.path().join("clips/sneaky");
        std::os::unix::fs::symlink(&fx.outside, &link).unwrap();

        assert!(matches!(
            fx.archive.resolve(&path("/videos/clips/sneaky")).await,
            Err(ArchiveError::PathEscape(_))
        ));
    }

    #[tokio::test]
    async fn sibling_with_shared_name_prefix_is_not_contained() {
        let fx = fixture().await;
        let sibling = fx.archive.path().with_file_name("videos-old");
        assert!(!fx.archive.contains(&sibling));
        assert!(fx.archive.contains(fx.archive.path()));
    }

    #[tokio::test]
    async fn open_rejects_missing_or_file_root() {
        let tmp = TempDir::new().unwrap();
        let missing = ArchiveRoot::open(tmp.path().join("nope"), "/videos", vec![]).await;
        assert!(matches!(missing, Err(ArchiveError::Io { .. })));

        let file = tmp.path().join("file.mp4");
        std_fs::write(&file, b"").unwrap();
        let not_dir = ArchiveRoot::open(&file, "/videos", vec![]).await;
        assert!(matches!(not_dir, Err(ArchiveError::Io { .. })));
    }
}
