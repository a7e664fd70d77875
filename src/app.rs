use crate::handlers;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::{get, post}, Router};

/// Largest image accepted by the classifier form.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/ui/sidebar", post(handlers::toggle_sidebar))
        .route("/ui/features", post(handlers::toggle_features))
        .route("/ui/section/:id", post(handlers::show_section))
        .route("/ui/guide", post(handlers::search_guide))
        .route(
            "/ui/classify",
            post(handlers::classify).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/ui/soil", post(handlers::soil))
        .route("/ui/footprint", post(handlers::footprint))
        .route("/ui/nearby", post(handlers::nearby))
        .route("/api/state", get(handlers::get_state))
        .route("/api/guide", get(handlers::guide_search))
        .with_state(state)
}
