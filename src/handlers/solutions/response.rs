//! Solution response DTOs

use serde::Serialize;
use serde_json::Value;

/// Solution response envelope
#[derive(Debug, Serialize)]
pub struct SolutionResponse {
    pub solution: SolutionBody,
}

/// Solution write-up of a problem
#[derive(Debug, Serialize)]
pub struct SolutionBody {
    pub content: String,
    pub file_path: String,
    /// Copied from the problem's metadata
    pub authors: Vec<Value>,
}
