//! Content tree layouts
//!
//! The corpus exists on disk in two historical shapes. The layout is chosen
//! once at start-up and every path the service builds goes through it.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{dirs, files};
use crate::error::{AppError, AppResult};

/// `C<digits><letters>`, e.g. `C102A`
static MERGED_PROBLEM_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(C[0-9]+)([A-Za-z]+)$").expect("Failed to compile problem id pattern")
});

/// Directory layout of the content tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLayout {
    /// `problems/<id>/`, `contests/<id>/` and `solutions/<id>/` side by side
    Flat,
    /// Problems nested inside their owning contest: `contests/<cid>/problems/<letter>/`
    Merged,
}

/// A merged-layout problem id split into its contest and letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRef {
    pub contest_id: String,
    pub letter: String,
}

impl ProblemRef {
    /// Split a merged-layout problem id (`C102A` -> `C102` + `A`)
    pub fn parse(id: &str) -> AppResult<Self> {
        let captures = MERGED_PROBLEM_ID
            .captures(id)
            .ok_or_else(|| AppError::InvalidIdentifier(id.to_string()))?;

        Ok(Self {
            contest_id: captures[1].to_string(),
            letter: captures[2].to_string(),
        })
    }

    /// Re-join into the public problem id
    pub fn id(&self) -> String {
        format!("{}{}", self.contest_id, self.letter)
    }
}

impl ContentLayout {
    /// Directory of a problem, without checking that it exists
    pub fn problem_dir(&self, root: &Path, id: &str) -> AppResult<PathBuf> {
        match self {
            Self::Flat => Ok(root.join(dirs::PROBLEMS).join(id)),
            Self::Merged => {
                let problem = ProblemRef::parse(id)?;
                Ok(root
                    .join(dirs::CONTESTS)
                    .join(&problem.contest_id)
                    .join(dirs::PROBLEMS)
                    .join(&problem.letter))
            }
        }
    }

    /// Directory of a contest, without checking that it exists
    pub fn contest_dir(&self, root: &Path, id: &str) -> PathBuf {
        root.join(dirs::CONTESTS).join(id)
    }

    /// Solution write-up of a problem, without checking that it exists
    pub fn solution_file(&self, root: &Path, id: &str) -> AppResult<PathBuf> {
        match self {
            Self::Flat => Ok(root.join(dirs::SOLUTIONS).join(id).join(files::SOLUTION)),
            Self::Merged => Ok(self.problem_dir(root, id)?.join(files::SOLUTION)),
        }
    }

    /// Directory whose presence gates the solutions listing
    pub fn solutions_root(&self, root: &Path) -> PathBuf {
        match self {
            Self::Flat => root.join(dirs::SOLUTIONS),
            Self::Merged => root.join(dirs::CONTESTS),
        }
    }

    /// Directory holding the sample cases of a problem
    pub fn samples_dir(&self, problem_dir: &Path) -> PathBuf {
        match self {
            Self::Flat => problem_dir.join(dirs::DETAILS).join(dirs::SAMPLES),
            Self::Merged => problem_dir.join(dirs::SAMPLES),
        }
    }

    /// Directory holding the grading cases of a problem
    pub fn testcases_dir(&self, problem_dir: &Path) -> PathBuf {
        problem_dir.join(dirs::TESTCASES)
    }
}

impl fmt::Display for ContentLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Merged => write!(f, "merged"),
        }
    }
}

impl FromStr for ContentLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "merged" => Ok(Self::Merged),
            other => Err(format!("Unknown content layout: {other}")),
        }
    }
}

/// True when `id` is a single ordinary path component
///
/// Anything else (`..`, `a/b`, empty) could step outside the entity directory.
pub fn is_plain_segment(id: &str) -> bool {
    let mut components = Path::new(id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !id.contains(['/', '\\'])
}
