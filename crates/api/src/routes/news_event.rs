use axum::routing::get;
use axum::Router;

use crate::handlers::news_event;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(news_event::list).post(news_event::create))
        .route("/total", get(news_event::total))
        .route(
            "/{id}",
            get(news_event::get_by_id)
                .put(news_event::update)
                .patch(news_event::update)
                .delete(news_event::delete),
        )
}
