use axum::routing::get;
use axum::Router;

use crate::handlers::client;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(client::list).post(client::create))
        .route("/total", get(client::total))
        .route(
            "/{id}",
            get(client::get_by_id)
                .put(client::update)
                .patch(client::update)
                .delete(client::delete),
        )
}
