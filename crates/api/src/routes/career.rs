use axum::routing::get;
use axum::Router;

use crate::handlers::career;
use crate::state::AppState;

/// Routes for `/api/job-positions`. The apply and applications endpoints
/// live at the API root and are wired in `routes::api_routes`.
pub fn position_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(career::list_positions).post(career::create_position))
        .route("/total", get(career::positions_total))
        .route(
            "/{id}",
            get(career::get_position)
                .put(career::update_position)
                .patch(career::update_position)
                .delete(career::delete_position),
        )
}
