//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.
//! Every route is a read-only `GET`.

pub mod contests;
pub mod health;
pub mod problems;
pub mod solutions;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(problems::routes())
        .merge(solutions::routes())
        .merge(contests::routes())
}
