use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, resolve_url_handler, shorten_url_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api",
                Router::new()
                    .route("/shorten", post(shorten_url_handler))
                    .route("/{short_id}", get(resolve_url_handler)),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
