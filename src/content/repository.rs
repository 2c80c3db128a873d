//! Content repository
//!
//! Resolves logical ids to locations in the content tree. Listing helpers
//! enumerate with the same rules the resolvers apply, so any id they return
//! resolves.

use std::path::{Path, PathBuf};

use crate::constants::{dirs, files};
use crate::content::layout::{ContentLayout, ProblemRef, is_plain_segment};
use crate::content::reader;
use crate::error::{AppError, AppResult};

/// Read-only accessor for the content tree
#[derive(Debug, Clone)]
pub struct ContentRepository {
    root: PathBuf,
    layout: ContentLayout,
}

impl ContentRepository {
    /// Create a repository over `root` using `layout`
    pub fn new(root: impl Into<PathBuf>, layout: ContentLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// Content root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory layout
    pub fn layout(&self) -> ContentLayout {
        self.layout
    }

    /// `index.json` of the flat layout for `dir` (`problems` or `contests`)
    pub fn index_file(&self, dir: &str) -> PathBuf {
        self.root.join(dir).join(files::INDEX)
    }

    /// Directory holding every contest
    pub fn contests_root(&self) -> PathBuf {
        self.root.join(dirs::CONTESTS)
    }

    /// Problem directory, without checking that it exists
    ///
    /// Merged-layout ids that are not `C<digits><letters>` are rejected.
    pub fn problem_dir(&self, id: &str) -> AppResult<PathBuf> {
        match self.layout {
            ContentLayout::Flat if !is_plain_segment(id) => {
                Err(AppError::NotFound("Problem not found".to_string()))
            }
            _ => self.layout.problem_dir(&self.root, id),
        }
    }

    /// Existing problem directory
    pub async fn resolve_problem_dir(&self, id: &str) -> AppResult<PathBuf> {
        let dir = self.problem_dir(id)?;
        if !reader::is_dir(&dir).await {
            tracing::debug!(problem_id = %id, path = %dir.display(), "Problem directory not found");
            return Err(AppError::NotFound("Problem not found".to_string()));
        }
        Ok(dir)
    }

    /// Existing contest directory
    pub async fn resolve_contest_dir(&self, id: &str) -> AppResult<PathBuf> {
        if !is_plain_segment(id) {
            return Err(AppError::NotFound("Contest not found".to_string()));
        }

        let dir = self.layout.contest_dir(&self.root, id);
        if !reader::is_dir(&dir).await {
            tracing::debug!(contest_id = %id, path = %dir.display(), "Contest directory not found");
            return Err(AppError::NotFound("Contest not found".to_string()));
        }
        Ok(dir)
    }

    /// Existing solution file
    pub async fn resolve_solution_file(&self, id: &str) -> AppResult<PathBuf> {
        if self.layout == ContentLayout::Flat && !is_plain_segment(id) {
            return Err(AppError::NotFound("Solution not found".to_string()));
        }

        let path = self.layout.solution_file(&self.root, id)?;
        if !reader::is_file(&path).await {
            tracing::debug!(problem_id = %id, path = %path.display(), "Solution file not found");
            return Err(AppError::NotFound("Solution not found".to_string()));
        }
        Ok(path)
    }

    /// Ids of every contest directory, `None` when there is no contests directory
    pub async fn contest_ids(&self) -> AppResult<Option<Vec<String>>> {
        let root = self.contests_root();
        if !reader::is_dir(&root).await {
            return Ok(None);
        }
        Ok(Some(reader::list_subdirs(&root).await?))
    }

    /// Problem ids embedded in a contest directory (merged layout)
    pub async fn contest_problem_refs(
        &self,
        contest_dir: &Path,
        contest_id: &str,
    ) -> AppResult<Vec<ProblemRef>> {
        let mut refs = Vec::new();
        for letter in reader::list_subdirs(&contest_dir.join(dirs::PROBLEMS)).await? {
            // Only entries that round-trip through the id parser are addressable
            match ProblemRef::parse(&format!("{contest_id}{letter}")) {
                Ok(problem) if problem.letter == letter => refs.push(problem),
                _ => tracing::debug!(
                    contest_id = %contest_id,
                    letter = %letter,
                    "Skipping unaddressable problem directory"
                ),
            }
        }
        Ok(refs)
    }

    /// Ids of every problem directory, `None` when the directory holding them is missing
    pub async fn problem_ids(&self) -> AppResult<Option<Vec<String>>> {
        match self.layout {
            ContentLayout::Flat => {
                let root = self.root.join(dirs::PROBLEMS);
                if !reader::is_dir(&root).await {
                    return Ok(None);
                }
                Ok(Some(reader::list_subdirs(&root).await?))
            }
            ContentLayout::Merged => {
                let Some(contest_ids) = self.contest_ids().await? else {
                    return Ok(None);
                };

                let mut ids = Vec::new();
                for contest_id in contest_ids {
                    let contest_dir = self.layout.contest_dir(&self.root, &contest_id);
                    let refs = self.contest_problem_refs(&contest_dir, &contest_id).await?;
                    ids.extend(refs.iter().map(ProblemRef::id));
                }
                Ok(Some(ids))
            }
        }
    }

    /// Ids that have a solution file, `None` when the solutions root is missing
    pub async fn solution_ids(&self) -> AppResult<Option<Vec<String>>> {
        let root = self.layout.solutions_root(&self.root);
        if !reader::is_dir(&root).await {
            return Ok(None);
        }

        let candidates = match self.layout {
            ContentLayout::Flat => reader::list_subdirs(&root).await?,
            ContentLayout::Merged => self.problem_ids().await?.unwrap_or_default(),
        };

        let mut ids = Vec::new();
        for id in candidates {
            if self.resolve_solution_file(&id).await.is_ok() {
                ids.push(id);
            }
        }
        Ok(Some(ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[tokio::test]
    async fn test_flat_resolution() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "problems/P1/meta.json");
        touch(tmp.path(), "contests/C1/meta.json");
        touch(tmp.path(), "solutions/P1/solution.md");
        fs::create_dir_all(tmp.path().join("solutions/P2")).unwrap();
        let repo = ContentRepository::new(tmp.path(), ContentLayout::Flat);

        assert_eq!(
            repo.resolve_problem_dir("P1").await.unwrap(),
            tmp.path().join("problems/P1")
        );
        assert!(matches!(repo.resolve_problem_dir("P2").await, Err(AppError::NotFound(_))));
        assert!(repo.resolve_contest_dir("C1").await.is_ok());
        assert!(matches!(repo.resolve_contest_dir("C2").await, Err(AppError::NotFound(_))));
        assert!(repo.resolve_solution_file("P1").await.is_ok());
        // Directory without solution.md
        assert!(matches!(repo.resolve_solution_file("P2").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_traversal_ids_are_not_found() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "problems/P1/meta.json");
        let repo = ContentRepository::new(tmp.path().join("problems/P1"), ContentLayout::Flat);

        for id in ["..", ".", "../P1"] {
            assert!(matches!(repo.resolve_problem_dir(id).await, Err(AppError::NotFound(_))));
            assert!(matches!(repo.resolve_contest_dir(id).await, Err(AppError::NotFound(_))));
            assert!(matches!(repo.resolve_solution_file(id).await, Err(AppError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn test_merged_resolution() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "contests/C12/meta.json");
        touch(tmp.path(), "contests/C12/problems/A/meta.json");
        touch(tmp.path(), "contests/C12/problems/B/solution.md");
        let repo = ContentRepository::new(tmp.path(), ContentLayout::Merged);

        assert_eq!(
            repo.resolve_problem_dir("C12A").await.unwrap(),
            tmp.path().join("contests/C12/problems/A")
        );
        assert!(matches!(repo.resolve_problem_dir("C12C").await, Err(AppError::NotFound(_))));
        assert!(matches!(
            repo.resolve_problem_dir("P3").await,
            Err(AppError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            repo.resolve_solution_file("12A").await,
            Err(AppError::InvalidIdentifier(_))
        ));
        assert!(repo.resolve_solution_file("C12B").await.is_ok());
        assert!(matches!(repo.resolve_solution_file("C12A").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_listing_ids() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "contests/C1/problems/A/meta.json");
        touch(tmp.path(), "contests/C1/problems/B/solution.md");
        touch(tmp.path(), "contests/C1/problems/1x/meta.json");
        touch(tmp.path(), "contests/C2/problems/A/solution.md");
        touch(tmp.path(), "contests/notes.txt");
        let repo = ContentRepository::new(tmp.path(), ContentLayout::Merged);

        assert_eq!(repo.contest_ids().await.unwrap().unwrap(), ["C1", "C2"]);
        assert_eq!(repo.problem_ids().await.unwrap().unwrap(), ["C1A", "C1B", "C2A"]);
        assert_eq!(repo.solution_ids().await.unwrap().unwrap(), ["C1B", "C2A"]);

        let empty = TempDir::new().unwrap();
        let repo = ContentRepository::new(empty.path(), ContentLayout::Flat);
        assert!(repo.contest_ids().await.unwrap().is_none());
        assert!(repo.problem_ids().await.unwrap().is_none());
        assert!(repo.solution_ids().await.unwrap().is_none());
    }
}
