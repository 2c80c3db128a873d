//! Problem service

use std::collections::HashSet;
use std::path::Path;

use serde_json::json;

use crate::{
    constants::{case_labels, dirs, files},
    content::{self, ContentLayout, ContentRepository, ProblemRef, reader},
    error::{AppError, AppResult},
    handlers::{
        contests::response::ContestSummary,
        problems::response::{ProblemResponse, ProblemSummary, SampleData, TestCasesResponse},
    },
    models::{self, Document},
    services::ContestService,
    utils::sort_newest_first,
};

/// Statement sections of a problem, in response order
struct Statement {
    description: Document<String>,
    input: Document<String>,
    output: Document<String>,
    constraints: Document<String>,
    notes: Document<String>,
}

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List all problems, newest first
    ///
    /// Flat layout reads `problems/index.json` and keeps the entries with a
    /// problem directory; merged layout scans every embedded problem and
    /// skips those without readable metadata.
    pub async fn list_problems(repo: &ContentRepository) -> AppResult<Vec<ProblemSummary>> {
        let mut problems = match repo.layout() {
            ContentLayout::Flat => {
                let index_path = repo.index_file(dirs::PROBLEMS);
                let text = reader::read_text(&index_path)
                    .await?
                    .ok_or_else(|| AppError::NotFound("problems/index.json not found".to_string()))?;
                let index = reader::parse_json_lenient(&index_path, &text).unwrap_or(json!({}));
                let on_disk: HashSet<String> =
                    repo.problem_ids().await?.unwrap_or_default().into_iter().collect();

                models::summaries_from_index(index)
                    .into_iter()
                    .filter(|summary| {
                        let id = models::summary_id(summary);
                        let present = on_disk.contains(id);
                        if !present {
                            tracing::debug!(problem_id = %id, "Skipping indexed problem without directory");
                        }
                        present
                    })
                    .collect()
            }
            ContentLayout::Merged => {
                let ids = repo
                    .problem_ids()
                    .await?
                    .ok_or_else(|| AppError::NotFound("contests directory not found".to_string()))?;

                let mut summaries = Vec::with_capacity(ids.len());
                for id in ids {
                    let meta_path = repo.problem_dir(&id)?.join(files::META);
                    match reader::read_json(&meta_path).await? {
                        Some(meta) => summaries.push(models::summary_with_id(meta, &id)),
                        None => tracing::debug!(problem_id = %id, "Skipping problem without metadata"),
                    }
                }
                summaries
            }
        };

        sort_newest_first(&mut problems, models::summary_id);
        Ok(problems)
    }

    /// Get the consolidated problem
    pub async fn get_problem(repo: &ContentRepository, id: &str) -> AppResult<ProblemResponse> {
        let problem_dir = repo.resolve_problem_dir(id).await?;

        let meta_path = problem_dir.join(files::META);
        let meta = Document::located(
            reader::read_json(&meta_path).await?.unwrap_or_else(|| json!({})),
            &meta_path,
        );

        let statement = match repo.layout() {
            ContentLayout::Flat => Self::read_split_statement(&problem_dir).await?,
            ContentLayout::Merged => Self::read_single_file_statement(&problem_dir).await?,
        };

        let samples_dir = repo.layout().samples_dir(&problem_dir);
        let samples_data = content::read_cases(&samples_dir, case_labels::SAMPLES)
            .await?
            .into_iter()
            .map(SampleData::from)
            .collect();

        Ok(ProblemResponse {
            meta,
            description: statement.description,
            input: statement.input,
            output: statement.output,
            constraints: statement.constraints,
            notes: statement.notes,
            samples_data,
            absolute_path: problem_dir.to_string_lossy().into_owned(),
        })
    }

    /// One Markdown file per section under `details/`
    async fn read_split_statement(problem_dir: &Path) -> AppResult<Statement> {
        let details = problem_dir.join(dirs::DETAILS);
        Ok(Statement {
            description: reader::read_document(&details.join(files::DESCRIPTION)).await?,
            input: reader::read_document(&details.join(files::INPUT)).await?,
            output: reader::read_document(&details.join(files::OUTPUT)).await?,
            constraints: reader::read_document(&details.join(files::CONSTRAINTS)).await?,
            notes: reader::read_document(&details.join(files::NOTES)).await?,
        })
    }

    /// All sections in `problem.md`
    async fn read_single_file_statement(problem_dir: &Path) -> AppResult<Statement> {
        let path = problem_dir.join(files::PROBLEM);
        let Some(text) = reader::read_text(&path).await? else {
            return Ok(Statement {
                description: Document::absent(),
                input: Document::absent(),
                output: Document::absent(),
                constraints: Document::absent(),
                notes: Document::absent(),
            });
        };

        let sections = content::split_sections(&text);
        Ok(Statement {
            description: Document::section(sections.description, &path),
            input: Document::section(sections.input, &path),
            output: Document::section(sections.output, &path),
            constraints: Document::section(sections.constraints, &path),
            notes: Document::section(sections.notes, &path),
        })
    }

    /// Sample and grading test cases of a problem
    pub async fn get_test_cases(
        repo: &ContentRepository,
        id: &str,
    ) -> AppResult<TestCasesResponse> {
        let problem_dir = repo.resolve_problem_dir(id).await?;
        let layout = repo.layout();

        let sample_cases =
            content::read_cases(&layout.samples_dir(&problem_dir), case_labels::SAMPLES).await?;
        let normal_cases =
            content::read_cases(&layout.testcases_dir(&problem_dir), case_labels::TESTCASES)
                .await?;

        tracing::debug!(
            problem_id = %id,
            samples = sample_cases.len(),
            testcases = normal_cases.len(),
            "Loaded test cases"
        );

        Ok(TestCasesResponse {
            sample_cases: sample_cases.into_iter().map(Into::into).collect(),
            normal_cases: normal_cases.into_iter().map(Into::into).collect(),
        })
    }

    /// Contests that include a problem
    ///
    /// A contest includes a problem when its metadata lists the id under
    /// `problems`, or (merged layout) when the problem exists inside it.
    /// Never fails on missing content: no contests source means no contests.
    pub async fn get_problem_contests(
        repo: &ContentRepository,
        id: &str,
    ) -> AppResult<Vec<ContestSummary>> {
        let Some(summaries) = ContestService::contest_summaries(repo).await? else {
            return Ok(Vec::new());
        };

        let owner = match repo.layout() {
            ContentLayout::Flat => None,
            ContentLayout::Merged => match repo.resolve_problem_dir(id).await {
                Ok(_) => ProblemRef::parse(id).ok().map(|p| p.contest_id),
                Err(_) => None,
            },
        };

        let mut found = Vec::new();
        for summary in summaries {
            let contest_id = models::summary_id(&summary);
            if contest_id.is_empty() {
                continue;
            }

            let owns = owner.as_deref() == Some(contest_id);
            let lists = ContestService::contest_meta(repo, contest_id)
                .await?
                .is_some_and(|meta| models::lists_problem(&meta, id));

            if owns || lists {
                found.push(summary);
            }
        }

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn flat_fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(
            root,
            "problems/index.json",
            r#"{"P1": {"title": "One"}, "P11": {"title": "Eleven"}, "P2": {"title": "Two"}}"#,
        );
        write(root, "problems/P1/meta.json", r#"{"title": "One", "authors": ["ana"]}"#);
        write(root, "problems/P1/details/description.md", "Add two numbers.");
        write(root, "problems/P1/details/input.md", "a b");
        write(root, "problems/P1/details/samples/1/input.md", "1 2");
        write(root, "problems/P1/details/samples/1/output.md", "3");
        write(root, "problems/P1/details/samples/1/description.md", "1 + 2");
        write(root, "problems/P1/testcases/1.in", "5 5");
        write(root, "problems/P1/testcases/1.out", "10");
        fs::create_dir_all(root.join("problems/P2")).unwrap();
        write(root, "problems/P11/meta.json", r#"{"title": "Eleven"}"#);
        write(root, "contests/index.json", r#"[{"id": "C1", "name": "First"}, {"id": "C2"}]"#);
        write(root, "contests/C1/meta.json", r#"{"problems": ["P1", "P2"]}"#);
        write(root, "contests/C2/meta.json", r#"{"problems": ["P2"]}"#);
        tmp
    }

    #[tokio::test]
    async fn test_flat_list_problems() {
        let tmp = flat_fixture();
        let repo = ContentRepository::new(tmp.path(), ContentLayout::Flat);

        let problems = ProblemService::list_problems(&repo).await.unwrap();
        let ids: Vec<_> = problems.iter().map(models::summary_id).collect();
        assert_eq!(ids, ["P11", "P2", "P1"]);
        assert_eq!(problems[0]["title"], "Eleven");
    }

    #[tokio::test]
    async fn test_flat_list_skips_index_entries_without_directory() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "problems/index.json",
            r#"{"P1": {"title": "One"}, "P2": {"title": "Two"}}"#,
        );
        write(tmp.path(), "problems/P1/meta.json", "{}");
        let repo = ContentRepository::new(tmp.path(), ContentLayout::Flat);

        let problems = ProblemService::list_problems(&repo).await.unwrap();
        assert_eq!(problems, [json!({"id": "P1", "title": "One"})]);
        for problem in &problems {
            let id = models::summary_id(problem);
            assert!(ProblemService::get_problem(&repo, id).await.is_ok(), "{id}");
        }
    }

    #[tokio::test]
    async fn test_flat_get_problem() {
        let tmp = flat_fixture();
        let repo = ContentRepository::new(tmp.path(), ContentLayout::Flat);

        let problem = ProblemService::get_problem(&repo, "P1").await.unwrap();
        assert_eq!(problem.meta.content.as_ref().unwrap()["title"], "One");
        assert_eq!(problem.description.content.as_deref(), Some("Add two numbers."));
        assert_eq!(problem.input.content.as_deref(), Some("a b"));
        assert!(problem.output.content.is_none());
        assert!(problem.notes.file_path.is_none());
        assert_eq!(problem.samples_data.len(), 1);
        assert_eq!(problem.samples_data[0].input.as_deref(), Some("1 2"));
        assert_eq!(problem.samples_data[0].description.as_deref(), Some("1 + 2"));
    }

    #[tokio::test]
    async fn test_flat_get_problem_without_files() {
        let tmp = flat_fixture();
        let repo = ContentRepository::new(tmp.path(), ContentLayout::Flat);

        let problem = ProblemService::get_problem(&repo, "P2").await.unwrap();
        assert_eq!(problem.meta.content, Some(json!({})));
        assert!(problem.meta.file_path.unwrap().ends_with("problems/P2/meta.json"));
        assert!(problem.description.content.is_none());
        assert!(problem.samples_data.is_empty());

        assert!(matches!(
            ProblemService::get_problem(&repo, "P7").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_flat_test_cases() {
        let tmp = flat_fixture();
        let repo = ContentRepository::new(tmp.path(), ContentLayout::Flat);

        let cases = ProblemService::get_test_cases(&repo, "P1").await.unwrap();
        assert_eq!(cases.sample_cases.len(), 1);
        assert_eq!(cases.sample_cases[0].case.name, "samples/1");
        assert_eq!(cases.sample_cases[0].description.as_deref(), Some("1 + 2"));
        assert_eq!(cases.normal_cases.len(), 1);
        assert_eq!(cases.normal_cases[0].name, "testcases/1");
        assert_eq!(cases.normal_cases[0].output.as_deref(), Some("10"));
    }

    #[tokio::test]
    async fn test_flat_problem_contests() {
        let tmp = flat_fixture();
        let repo = ContentRepository::new(tmp.path(), ContentLayout::Flat);

        let contests = ProblemService::get_problem_contests(&repo, "P1").await.unwrap();
        assert_eq!(contests, [json!({"id": "C1", "name": "First"})]);

        let contests = ProblemService::get_problem_contests(&repo, "P2").await.unwrap();
        assert_eq!(contests.len(), 2);

        assert!(ProblemService::get_problem_contests(&repo, "P9").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_problem_contests_without_index() {
        let tmp = TempDir::new().unwrap();
        let repo = ContentRepository::new(tmp.path(), ContentLayout::Flat);
        assert!(ProblemService::get_problem_contests(&repo, "P1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_merged_problem() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, "contests/C3/meta.json", r#"{"name": "Third"}"#);
        write(root, "contests/C3/problems/A/meta.json", r#"{"title": "Ant"}"#);
        write(
            root,
            "contests/C3/problems/A/problem.md",
            "# Ant\n## Description\nWalk.\n## Input\nN\n## Scoring\nhidden\n",
        );
        write(root, "contests/C3/problems/A/samples/1.in", "1");
        write(root, "contests/C3/problems/A/samples/1.out", "2");
        write(root, "contests/C12/meta.json", r#"{"name": "Twelfth", "problems": ["C3A"]}"#);
        write(root, "contests/C12/problems/B/meta.json", r#"{"title": "Bee"}"#);
        let repo = ContentRepository::new(root, ContentLayout::Merged);

        let problem = ProblemService::get_problem(&repo, "C3A").await.unwrap();
        assert_eq!(problem.description.content.as_deref(), Some("Walk."));
        assert_eq!(problem.input.content.as_deref(), Some("N"));
        assert!(problem.output.content.is_none());
        assert!(problem.description.file_path.unwrap().ends_with("problem.md"));
        assert_eq!(problem.samples_data.len(), 1);
        assert_eq!(problem.samples_data[0].output.as_deref(), Some("2"));

        assert!(matches!(
            ProblemService::get_problem(&repo, "P3").await,
            Err(AppError::InvalidIdentifier(_))
        ));

        // Lexicographic, newest first
        let problems = ProblemService::list_problems(&repo).await.unwrap();
        let ids: Vec<_> = problems.iter().map(models::summary_id).collect();
        assert_eq!(ids, ["C3A", "C12B"]);

        let contests = ProblemService::get_problem_contests(&repo, "C3A").await.unwrap();
        let ids: Vec<_> = contests.iter().map(models::summary_id).collect();
        assert_eq!(ids, ["C12", "C3"]);
    }

    #[tokio::test]
    async fn test_merged_problem_contests_require_existing_problem() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, "contests/C7/meta.json", r#"{"name": "Seventh"}"#);
        write(root, "contests/C7/problems/A/meta.json", r#"{"title": "Alpha"}"#);
        let repo = ContentRepository::new(root, ContentLayout::Merged);

        let contests = ProblemService::get_problem_contests(&repo, "C7A").await.unwrap();
        assert_eq!(contests, [json!({"id": "C7", "name": "Seventh"})]);

        assert!(ProblemService::get_problem_contests(&repo, "C7Z").await.unwrap().is_empty());
        assert!(ProblemService::get_problem_contests(&repo, "C8A").await.unwrap().is_empty());
    }
}
