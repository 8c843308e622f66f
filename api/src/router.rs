//! HTTP route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{get_courses, health, post_questions};
use crate::state::AppState;

/// Build the application router
///
/// State is applied at the application level using `.with_state(...)`.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/courses", get(get_courses))
        .route("/api/questions", post(post_questions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
