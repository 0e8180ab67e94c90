use axum::routing::get;
use axum::Router;

use crate::handlers::blog_post;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(blog_post::list).post(blog_post::create))
        .route("/total", get(blog_post::total))
        .route(
            "/{id}",
            get(blog_post::get_by_id)
                .put(blog_post::update)
                .patch(blog_post::update)
                .delete(blog_post::delete),
        )
}
