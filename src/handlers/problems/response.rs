//! Problem response DTOs

use serde::Serialize;
use serde_json::Value;

use crate::models::{Document, TestCase};

/// Problem summary for list views: the problem metadata plus its `id`
pub type ProblemSummary = Value;

/// Consolidated problem response
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    /// Parsed `meta.json`, `{}` when missing or malformed
    pub meta: Document<Value>,
    pub description: Document<String>,
    pub input: Document<String>,
    pub output: Document<String>,
    pub constraints: Document<String>,
    pub notes: Document<String>,
    pub samples_data: Vec<SampleData>,
    pub absolute_path: String,
}

/// Sample shown alongside the statement
#[derive(Debug, Serialize)]
pub struct SampleData {
    pub input: Option<String>,
    pub output: Option<String>,
    pub description: Option<String>,
}

impl From<TestCase> for SampleData {
    fn from(case: TestCase) -> Self {
        Self {
            input: case.input,
            output: case.output,
            description: case.description,
        }
    }
}

/// Test cases of a problem
#[derive(Debug, Serialize)]
pub struct TestCasesResponse {
    pub sample_cases: Vec<SampleCaseResponse>,
    pub normal_cases: Vec<TestCaseResponse>,
}

/// Grading test case
#[derive(Debug, Serialize)]
pub struct TestCaseResponse {
    pub name: String,
    pub input: Option<String>,
    pub output: Option<String>,
    pub input_file: String,
    pub output_file: String,
    pub absolute_path: String,
}

/// Sample test case, which may carry an explanation
#[derive(Debug, Serialize)]
pub struct SampleCaseResponse {
    #[serde(flatten)]
    pub case: TestCaseResponse,
    pub description: Option<String>,
}

impl From<TestCase> for TestCaseResponse {
    fn from(case: TestCase) -> Self {
        Self {
            name: case.name,
            input: case.input,
            output: case.output,
            input_file: case.input_file,
            output_file: case.output_file,
            absolute_path: case.absolute_path,
        }
    }
}

impl From<TestCase> for SampleCaseResponse {
    fn from(mut case: TestCase) -> Self {
        let description = case.description.take();
        Self {
            case: case.into(),
            description,
        }
    }
}
