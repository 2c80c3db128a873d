//! Problem handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{error::AppResult, services::ProblemService, state::AppState};

use super::response::{ProblemResponse, ProblemSummary, TestCasesResponse};
use crate::handlers::contests::response::ContestSummary;

/// List all problems, newest first
pub async fn list_problems(State(state): State<AppState>) -> AppResult<Json<Vec<ProblemSummary>>> {
    let problems = ProblemService::list_problems(state.content()).await?;
    Ok(Json(problems))
}

/// Get a specific problem
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProblemResponse>> {
    let problem = ProblemService::get_problem(state.content(), &id).await?;
    Ok(Json(problem))
}

/// List sample and grading test cases of a problem
pub async fn list_test_cases(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TestCasesResponse>> {
    let test_cases = ProblemService::get_test_cases(state.content(), &id).await?;
    Ok(Json(test_cases))
}

/// List the contests a problem belongs to
pub async fn list_problem_contests(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<ContestSummary>>> {
    let contests = ProblemService::get_problem_contests(state.content(), &id).await?;
    Ok(Json(contests))
}
