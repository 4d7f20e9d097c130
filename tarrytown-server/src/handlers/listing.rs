use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tarrytown_core::ListingTarget;
use tarrytown_model::{ListingQuery, ListingResponse};
use tracing::debug;

use crate::infra::{app_state::AppState, errors::AppResult};

/// List the playable files in one archive folder.
///
/// Accepts `?dir=<category>` or `?path=<prefix>/<folder>` and answers with
/// `{"path": .., "files": [..]}`. Every failure uses the JSON error envelope.
pub async fn list_handler(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> AppResult<Json<ListingResponse>> {
    let Query(query) = query?;
    let target = ListingTarget::from_query(&query)?;
    let listing = state.archive().list(&target).await?;

    debug!(
        path = %listing.path,
        files = listing.files.len(),
        "listed archive folder"
    );
    Ok(Json(listing))
}

/// `/api/list.php` compatibility: same rules, but a bare array of names on
/// success.
pub async fn legacy_list_handler(
    state: State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> AppResult<Json<Vec<String>>> {
    let Json(listing) = list_handler(state, query).await?;
    Ok(Json(listing.files))
}
