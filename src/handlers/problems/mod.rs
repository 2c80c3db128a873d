//! Problem handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Problem routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/problems", get(handler::list_problems))
        .route("/problems/{id}", get(handler::get_problem))
        .route("/problems/{id}/testcases", get(handler::list_test_cases))
        .route("/problems/{id}/contests", get(handler::list_problem_contests))
}
