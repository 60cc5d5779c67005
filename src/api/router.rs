use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, add_stock, borrow_book, list_available, return_book};

/// Creates the API router with all inventory endpoints
///
/// Command endpoints (Write operations):
/// - POST /books - Add stock for a title
/// - POST /books/borrow - Borrow a copy
/// - POST /books/return - Return a copy
///
/// Query endpoints (Read operations):
/// - GET /books/available - List titles with copies on the shelf
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/books", post(add_stock))
        .route("/books/borrow", post(borrow_book))
        .route("/books/return", post(return_book))
        // Query endpoints (Read operations)
        .route("/books/available", get(list_available))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
