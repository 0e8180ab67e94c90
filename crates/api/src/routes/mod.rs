//! Route tables and router assembly.

pub mod auth;
pub mod blog_post;
pub mod career;
pub mod client;
pub mod health;
pub mod news_event;
pub mod prime_location;
pub mod project;

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Everything mounted under `/api`.
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::routes())
        .nest("/blog-posts", blog_post::routes())
        .nest("/clients", client::routes())
        .nest("/news-events", news_event::routes())
        .nest("/prime-locations", prime_location::routes())
        .nest("/job-positions", career::position_routes())
        .nest("/auth", auth::routes())
        // Public showcase listing; serves projects filtered by a mandatory
        // status parameter.
        .route(
            "/project-status",
            get(handlers::project::list_by_required_status),
        )
        .route("/change-password", post(handlers::auth::change_password))
        .route("/apply", post(handlers::career::apply))
        .route("/applications", get(handlers::career::list_applications))
}

/// Assemble the full application router with the shared middleware stack.
///
/// Used by both the binary entrypoint and the integration tests, so the
/// two always exercise the same surface.
pub fn app(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    // Later layers wrap earlier ones: catch-panic is outermost, CORS sits
    // closest to the routes.
    Router::new()
        .merge(health::routes())
        .nest("/api", api_routes())
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(timeout))
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
