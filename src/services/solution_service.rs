//! Solution service

use crate::{
    constants::files,
    content::{ContentLayout, ContentRepository, reader},
    error::{AppError, AppResult},
    handlers::solutions::response::{SolutionBody, SolutionResponse},
    models,
    utils::sort_newest_first,
};

/// Solution service for business logic
pub struct SolutionService;

impl SolutionService {
    /// Get the solution write-up of a problem
    ///
    /// Authors come from the problem's metadata and default to an empty list.
    pub async fn get_solution(repo: &ContentRepository, id: &str) -> AppResult<SolutionResponse> {
        let path = repo.resolve_solution_file(id).await?;
        let content = reader::read_text(&path)
            .await?
            .ok_or_else(|| AppError::NotFound("Solution not found".to_string()))?;

        let meta_path = repo.problem_dir(id)?.join(files::META);
        let authors = reader::read_json(&meta_path)
            .await?
            .map(|meta| models::authors(&meta))
            .unwrap_or_default();

        Ok(SolutionResponse {
            solution: SolutionBody {
                content,
                file_path: path.to_string_lossy().into_owned(),
                authors,
            },
        })
    }

    /// Ids of every problem with a solution, newest first
    pub async fn list_solutions(repo: &ContentRepository) -> AppResult<Vec<String>> {
        let mut ids = repo.solution_ids().await?.ok_or_else(|| {
            AppError::NotFound(match repo.layout() {
                ContentLayout::Flat => "solutions directory not found".to_string(),
                ContentLayout::Merged => "contests directory not found".to_string(),
            })
        })?;

        sort_newest_first(&mut ids, String::as_str);
        Ok(ids)
    }
}
