//! Contest model helpers

use serde::Serialize;
use serde_json::Value;

use crate::constants::meta_keys;

/// A problem embedded in a contest directory (merged layout)
#[derive(Debug, Clone, Serialize)]
pub struct ContestProblem {
    pub id: String,
    pub letter: String,
    pub meta: Value,
}

/// Whether a contest's metadata lists `problem_id` under `problems`
pub fn lists_problem(meta: &Value, problem_id: &str) -> bool {
    meta.get(meta_keys::PROBLEMS)
        .and_then(Value::as_array)
        .is_some_and(|problems| problems.iter().any(|p| p.as_str() == Some(problem_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lists_problem() {
        let meta = json!({"problems": ["P1", "P3"]});
        assert!(lists_problem(&meta, "P3"));
        assert!(!lists_problem(&meta, "P2"));
        assert!(!lists_problem(&json!({}), "P1"));
        assert!(!lists_problem(&json!({"problems": "P1"}), "P1"));
    }
}
