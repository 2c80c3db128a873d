//! Solution handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{error::AppResult, services::SolutionService, state::AppState};

use super::response::SolutionResponse;

/// List ids of every problem that has a solution
pub async fn list_solutions(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let ids = SolutionService::list_solutions(state.content()).await?;
    Ok(Json(ids))
}

/// Get the solution of a problem
pub async fn get_solution(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SolutionResponse>> {
    let solution = SolutionService::get_solution(state.content(), &id).await?;
    Ok(Json(solution))
}
