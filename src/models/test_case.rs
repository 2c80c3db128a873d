//! Test case model

/// One input/output pair read from a problem's case directory
#[derive(Debug, Clone)]
pub struct TestCase {
    /// `<label>/<case>`, e.g. `samples/1`
    pub name: String,
    pub input: Option<String>,
    pub output: Option<String>,
    /// Only nested cases can carry one (`description.md`)
    pub description: Option<String>,
    pub input_file: String,
    pub output_file: String,
    /// Case directory (nested) or the containing directory (flat)
    pub absolute_path: String,
}
