use axum::routing::get;
use axum::Router;

use crate::handlers::prime_location;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(prime_location::list).post(prime_location::create))
        .route("/total", get(prime_location::total))
        .route(
            "/{id}",
            get(prime_location::get_by_id)
                .put(prime_location::update)
                .patch(prime_location::update)
                .delete(prime_location::delete),
        )
}
