//! API routes configuration module

use crate::api::handlers::{create_meeting, delete_meeting, list_meetings, update_meeting};
use crate::db::Database;
use axum::{
    routing::{delete, get},
    Extension, Router,
};
use tower_http::trace::TraceLayer;

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `database` - Database connection pool to be shared across handlers
///
/// # Returns
/// * `Router` - Configured router with all API endpoints and middleware
pub fn app(database: Database) -> Router {
    Router::new()
        .route("/api/meetings", get(list_meetings).post(create_meeting))
        .route(
            "/api/meetings/:id",
            delete(delete_meeting).put(update_meeting),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(database))
}
