use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/total", get(project::total))
        .route("/status-count", get(project::status_count))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .patch(project::update)
                .delete(project::delete),
        )
}
