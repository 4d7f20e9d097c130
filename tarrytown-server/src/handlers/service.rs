use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{Map, Value, json};
use tokio::fs;
use tracing::{info, warn};

use crate::infra::app_state::AppState;

pub async fn ping_handler() -> Json<Value> {
    info!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "message": "Tarrytown archive server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Reports whether the archive root and each category folder are still
/// reachable. Only a missing root makes the server unhealthy; a missing
/// category is reported as `false`.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<Value>) {
    let archive = state.archive();
    let mut health_status = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    let root_ok = match fs::metadata(archive.path()).await {
        Ok(meta) if meta.is_dir() => {
            health_status["checks"]["archive_root"] =
                json!({ "status": "healthy" });
            true
        }
        Ok(_) => {
            health_status["checks"]["archive_root"] = json!({
                "status": "unhealthy",
                "error": "archive root is not a directory"
            });
            false
        }
        Err(e) => {
            health_status["checks"]["archive_root"] = json!({
                "status": "unhealthy",
                "error": e.kind().to_string()
            });
            false
        }
    };

    let mut categories = Map::new();
    for category in archive.categories() {
        let present = fs::metadata(archive.path().join(category))
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        categories.insert(category.clone(), Value::Bool(present));
    }
    health_status["checks"]["categories"] = Value::Object(categories);

    if root_ok {
        (StatusCode::OK, Json(health_status))
    } else {
        warn!(root = %archive.path().display(), "archive root is not accessible");
        health_status["status"] = json!("unhealthy");
        (StatusCode::SERVICE_UNAVAILABLE, Json(health_status))
    }
}
