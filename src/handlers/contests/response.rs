//! Contest response DTOs

use serde::Serialize;
use serde_json::Value;

use crate::models::{ContestProblem, Document};

/// Contest summary for list views: the contest index entry or metadata plus its `id`
pub type ContestSummary = Value;

/// Consolidated contest response
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    /// Parsed `meta.json`, `{}` when missing or malformed
    pub meta: Document<Value>,
    pub contest: Document<String>,
    pub leaderboard: Document<Value>,
    pub participants: Document<Value>,
    pub rules: Document<String>,
    pub theory: Document<String>,
    /// Problems stored inside the contest directory (merged layout only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problems: Option<Vec<ContestProblem>>,
    pub absolute_path: String,
}
