pub mod v1;

use axum::{Router, routing::get};
use tarrytown_model::routes::legacy;

use crate::{handlers::listing, infra::app_state::AppState};

/// JSON API: the versioned routes plus, when enabled, the legacy alias.
pub fn create_api_router(state: &AppState) -> Router<AppState> {
    let router = Router::new().merge(v1::create_v1_router());

    if state.config().archive.legacy_aliases {
        router.route(legacy::LIST, get(listing::legacy_list_handler))
    } else {
        router
    }
}
