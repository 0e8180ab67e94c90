use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Liveness probe. Reports degraded rather than failing outright when the
/// database round-trip does not come back.
async fn health(State(state): State<AppState>) -> Json<Value> {
    let db_healthy = stonegate_db::health_check(&state.pool).await.is_ok();
    Json(json!({
        "status": if db_healthy { "ok" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "dbHealthy": db_healthy,
    }))
}
