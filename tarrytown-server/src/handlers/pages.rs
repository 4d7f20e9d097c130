use std::path::Path;

use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tarrytown_core::{
    ArchiveError, ListingTarget, metadata,
    render::{PageContent, PageContext, render_page},
};
use tarrytown_model::{SiteInfo, VideoMetadata, routes::pages};
use tokio::fs;
use tracing::warn;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// `/` sends visitors to the first configured category.
pub async fn index_handler(
    State(state): State<AppState>,
) -> AppResult<Redirect> {
    let first = state
        .archive()
        .categories()
        .first()
        .ok_or_else(|| AppError::not_found("no categories are configured"))?;
    Ok(Redirect::to(&pages::browse(first)))
}

/// Server-rendered page for one category.
///
/// Metadata and the navbar are optional: when missing or unreadable the page
/// still renders with file names only. A failed listing renders the error
/// alert with the listing's status code.
pub async fn browse_handler(
    State(state): State<AppState>,
    UrlPath(category): UrlPath<String>,
) -> Response {
    let config = state.config();
    let site_path = config.site_metadata_path();
    let site: SiteInfo =
        or_default(&site_path, metadata::load_site_info(&site_path).await);
    let navbar = match &config.archive.navbar_path {
        Some(path) => load_navbar(path).await,
        None => None,
    };

    let target = ListingTarget::Category(category.clone());
    let (status, content) = match state.archive().list(&target).await {
        Ok(listing) => {
            let meta_path = config.category_metadata_path(&category);
            let metadata: VideoMetadata = or_default(
                &meta_path,
                metadata::load_video_metadata(&meta_path).await,
            );
            (StatusCode::OK, PageContent::Listing { listing, metadata })
        }
        Err(err) => (AppError::from(err).status, PageContent::Error),
    };

    let page = render_page(&PageContext {
        category: &category,
        site: &site,
        navbar: navbar.as_deref(),
        content,
    });
    (status, Html(page)).into_response()
}

fn or_default<T: Default>(path: &Path, loaded: tarrytown_core::Result<T>) -> T {
    match loaded {
        Ok(value) => value,
        Err(ArchiveError::NotFound(_)) => {
            warn!(path = %path.display(), "metadata file missing; using defaults");
            T::default()
        }
        Err(err) => {
            warn!(error = %err, "metadata unreadable; using defaults");
            T::default()
        }
    }
}

async fn load_navbar(path: &Path) -> Option<String> {
    match fs::read_to_string(path).await {
        Ok(html) => Some(html),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "navbar unreadable");
            None
        }
    }
}
