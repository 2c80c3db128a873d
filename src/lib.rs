//! cpvault - Competitive Programming Content API
//!
//! A read-only HTTP API over a file-system corpus of competitive programming
//! problems, contests, solutions and test cases.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Compose content reads into one response per endpoint
//! - **Content**: Path resolution, file reading, statement and test case parsing
//! - **Models**: Transient projections of files on disk

pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::{Router, middleware as axum_middleware};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router with all routes and layers
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::routes())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
