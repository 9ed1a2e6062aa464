use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::count_visit)
                .post(handlers::count_visit)
                .options(handlers::preflight),
        )
        .route("/page", get(handlers::page))
        .route("/pkg/:file", get(handlers::pkg_asset))
        .with_state(state)
}
