use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    routing::get,
};
use tarrytown_config::CorsConfig;
use tarrytown_model::routes::{pages, service};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    handlers::{pages as page_handlers, service as service_handlers},
    infra::app_state::AppState,
    routes,
};

/// Assemble the full application: API, pages, service probes and the
/// static media mount.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = if state.config().dev_mode {
        CorsLayer::permissive()
    } else {
        cors_from_config(&state.config().cors)
    };

    let media = ServeDir::new(state.archive().path());

    Router::new()
        .route(service::PING, get(service_handlers::ping_handler))
        .route(service::HEALTH, get(service_handlers::health_handler))
        .route(pages::INDEX, get(page_handlers::index_handler))
        .route(pages::BROWSE, get(page_handlers::browse_handler))
        .merge(routes::create_api_router(&state))
        .nest_service(state.archive().public_prefix(), media)
        // Outer to inner: CORS, then tracing.
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Allow-list CORS. Entries were validated when the config was loaded, so
/// anything unparsable here is skipped.
fn cors_from_config(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter(|origin| origin.trim() != "*")
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let allow_origin = if cors.is_wildcard_included() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    let methods: Vec<Method> = cors
        .allowed_methods
        .iter()
        .filter_map(|m| Method::from_bytes(m.as_bytes()).ok())
        .collect();

    let headers: Vec<HeaderName> = cors
        .allowed_headers
        .iter()
        .filter_map(|h| HeaderName::from_bytes(h.as_bytes()).ok())
        .collect();

    let mut layer = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers));

    // tower-http rejects credentials combined with a wildcard origin.
    if cors.allow_credentials && !cors.is_wildcard_included() {
        layer = layer.allow_credentials(true);
    }

    layer
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tarrytown_config::{ArchiveConfig, Config};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn state(dev_mode: bool, cors: CorsConfig) -> (TempDir, AppState) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("videos");
        std::fs::create_dir_all(root.join("tapes")).unwrap();
        std::fs::create_dir_all(root.join("clips")).unwrap();
        let config = Config {
            archive: ArchiveConfig {
                root,
                data_dir: tmp.path().join("data"),
                ..ArchiveConfig::default()
            },
            cors,
            dev_mode,
            ..Config::default()
        };
        let state = AppState::new(config).await.unwrap();
        (tmp, state)
    }

    #[tokio::test]
    async fn allow_listed_origin_is_echoed() {
        let cors = CorsConfig {
            allowed_origins: vec!["https://tapes.example".into()],
            ..CorsConfig::default()
        };
        let (_tmp, state) = state(false, cors).await;
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ping")
                    .header("origin", "https://tapes.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "https://tapes.example"
        );
    }

    #[tokio::test]
    async fn unknown_origin_gets_no_cors_headers() {
        let cors = CorsConfig {
            allowed_origins: vec!["https://tapes.example".into()],
            ..CorsConfig::default()
        };
        let (_tmp, state) = state(false, cors).await;
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ping")
                    .header("origin", "https://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .get("access-control-allow-origin")
                .is_none()
        );
    }
}
