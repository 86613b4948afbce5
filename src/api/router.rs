use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, borrow_item, create_item, create_member, get_item, get_member_loans, get_summary,
    return_item,
};

/// Creates the API router with all lending endpoints
///
/// Command endpoints (Write operations):
/// - POST /items - Register an item
/// - POST /members - Register a member
/// - POST /loans - Borrow an item
/// - POST /loans/return - Return an item
///
/// Query endpoints (Read operations):
/// - GET /items/:id - Item details and availability
/// - GET /members/:id/loans - Items currently held by a member
/// - GET /summary - Plain-text library summary
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/items", post(create_item))
        .route("/members", post(create_member))
        .route("/loans", post(borrow_item))
        .route("/loans/return", post(return_item))
        // Query endpoints (Read operations)
        .route("/items/:id", get(get_item))
        .route("/members/:id/loans", get(get_member_loans))
        .route("/summary", get(get_summary))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
