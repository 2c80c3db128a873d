//! Contest service

use std::collections::HashSet;
use std::path::Path;

use serde_json::{Value, json};

use crate::{
    constants::{dirs, files},
    content::{ContentLayout, ContentRepository, reader},
    error::{AppError, AppResult},
    handlers::contests::response::{ContestResponse, ContestSummary},
    models::{self, ContestProblem},
    utils::sort_newest_first,
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// List all contests, newest first
    pub async fn list_contests(repo: &ContentRepository) -> AppResult<Vec<ContestSummary>> {
        let mut contests = Self::contest_summaries(repo).await?.ok_or_else(|| {
            AppError::NotFound(match repo.layout() {
                ContentLayout::Flat => "contests/index.json not found".to_string(),
                ContentLayout::Merged => "contests directory not found".to_string(),
            })
        })?;

        sort_newest_first(&mut contests, models::summary_id);
        Ok(contests)
    }

    /// Contest summaries in source order, `None` when the listing source is missing
    ///
    /// Flat layout reads `contests/index.json` and keeps the entries with a
    /// contest directory. Merged layout scans every contest directory and
    /// skips those without readable metadata.
    pub async fn contest_summaries(
        repo: &ContentRepository,
    ) -> AppResult<Option<Vec<ContestSummary>>> {
        match repo.layout() {
            ContentLayout::Flat => {
                let index_path = repo.index_file(dirs::CONTESTS);
                let Some(text) = reader::read_text(&index_path).await? else {
                    return Ok(None);
                };
                let index = reader::parse_json_lenient(&index_path, &text).unwrap_or(json!([]));
                let on_disk: HashSet<String> =
                    repo.contest_ids().await?.unwrap_or_default().into_iter().collect();

                let summaries = models::summaries_from_index(index)
                    .into_iter()
                    .filter(|summary| {
                        let id = models::summary_id(summary);
                        let present = on_disk.contains(id);
                        if !present {
                            tracing::debug!(contest_id = %id, "Skipping indexed contest without directory");
                        }
                        present
                    })
                    .collect();
                Ok(Some(summaries))
            }
            ContentLayout::Merged => {
                let Some(ids) = repo.contest_ids().await? else {
                    return Ok(None);
                };

                let mut summaries = Vec::with_capacity(ids.len());
                for id in ids {
                    let meta_path = repo.contests_root().join(&id).join(files::META);
                    match reader::read_json(&meta_path).await? {
                        Some(meta) => summaries.push(models::summary_with_id(meta, &id)),
                        None => tracing::debug!(contest_id = %id, "Skipping contest without metadata"),
                    }
                }
                Ok(Some(summaries))
            }
        }
    }

    /// Get the consolidated contest
    pub async fn get_contest(repo: &ContentRepository, id: &str) -> AppResult<ContestResponse> {
        let contest_dir = repo.resolve_contest_dir(id).await?;

        let meta = reader::read_json_document(&contest_dir.join(files::META))
            .await?
            .or_default_content(json!({}));

        let problems = match repo.layout() {
            ContentLayout::Flat => None,
            ContentLayout::Merged => Some(Self::embedded_problems(repo, &contest_dir, id).await?),
        };

        Ok(ContestResponse {
            meta,
            contest: reader::read_document(&contest_dir.join(files::CONTEST)).await?,
            leaderboard: reader::read_json_document(&contest_dir.join(files::LEADERBOARD)).await?,
            participants: reader::read_json_document(&contest_dir.join(files::PARTICIPANTS))
                .await?,
            rules: reader::read_document(&contest_dir.join(files::RULES)).await?,
            theory: reader::read_document(&contest_dir.join(files::THEORY)).await?,
            problems,
            absolute_path: contest_dir.to_string_lossy().into_owned(),
        })
    }

    /// Problems stored under `contests/<id>/problems/`, skipping those without metadata
    async fn embedded_problems(
        repo: &ContentRepository,
        contest_dir: &Path,
        contest_id: &str,
    ) -> AppResult<Vec<ContestProblem>> {
        let mut problems = Vec::new();

        for problem in repo.contest_problem_refs(contest_dir, contest_id).await? {
            let meta_path = contest_dir
                .join(dirs::PROBLEMS)
                .join(&problem.letter)
                .join(files::META);

            let Some(meta) = reader::read_json(&meta_path).await? else {
                tracing::debug!(problem_id = %problem.id(), "Skipping problem without metadata");
                continue;
            };

            problems.push(ContestProblem {
                id: problem.id(),
                letter: problem.letter,
                meta,
            });
        }

        Ok(problems)
    }

    /// Metadata of a contest; missing and malformed files both yield `None`
    pub async fn contest_meta(repo: &ContentRepository, id: &str) -> AppResult<Option<Value>> {
        match repo.resolve_contest_dir(id).await {
            Ok(dir) => reader::read_json(&dir.join(files::META)).await,
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
