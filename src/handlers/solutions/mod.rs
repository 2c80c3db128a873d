//! Solution handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Solution routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/solutions", get(handler::list_solutions))
        .route("/solutions/{id}", get(handler::get_solution))
}
