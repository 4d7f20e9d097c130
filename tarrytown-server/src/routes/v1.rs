use axum::{Router, routing::get};
use tarrytown_model::routes::v1;

use crate::{handlers::listing, infra::app_state::AppState};

/// All v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new().route(v1::LISTING, get(listing::list_handler))
}
