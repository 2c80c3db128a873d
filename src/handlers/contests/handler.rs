//! Contest handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{error::AppResult, services::ContestService, state::AppState};

use super::response::{ContestResponse, ContestSummary};

/// List all contests, newest first
pub async fn list_contests(State(state): State<AppState>) -> AppResult<Json<Vec<ContestSummary>>> {
    let contests = ContestService::list_contests(state.content()).await?;
    Ok(Json(contests))
}

/// Get a specific contest
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::get_contest(state.content(), &id).await?;
    Ok(Json(contest))
}
