//! Test case directory reader
//!
//! Two on-disk shapes are in use and both stay supported:
//!
//! - nested: one sub-directory per case holding `input.md` / `output.md`
//!   (and, for samples, an optional `description.md`)
//! - flat: `<n>.in` / `<n>.out` pairs side by side
//!
//! A directory with at least one sub-directory is read as nested and its loose
//! files are ignored.

use std::path::Path;

use crate::constants::{extensions, files};
use crate::content::reader::{self, Entry};
use crate::error::AppResult;
use crate::models::TestCase;

/// Read every case under `directory`, naming each `<label>/<case>`
///
/// A missing directory yields no cases.
pub async fn read_cases(directory: &Path, label: &str) -> AppResult<Vec<TestCase>> {
    let Some(entries) = reader::list_dir(directory).await? else {
        return Ok(Vec::new());
    };

    if entries.iter().any(|e| e.is_dir) {
        read_nested(directory, label, &entries).await
    } else {
        read_flat(directory, label, &entries).await
    }
}

async fn read_nested(directory: &Path, label: &str, entries: &[Entry]) -> AppResult<Vec<TestCase>> {
    let mut cases = Vec::new();

    for entry in entries.iter().filter(|e| e.is_dir) {
        let case_dir = directory.join(&entry.name);
        cases.push(TestCase {
            name: format!("{}/{}", label, entry.name),
            input: reader::read_text(&case_dir.join(files::INPUT)).await?,
            output: reader::read_text(&case_dir.join(files::OUTPUT)).await?,
            description: reader::read_text(&case_dir.join(files::DESCRIPTION)).await?,
            input_file: files::INPUT.to_string(),
            output_file: files::OUTPUT.to_string(),
            absolute_path: case_dir.to_string_lossy().into_owned(),
        });
    }

    Ok(cases)
}

async fn read_flat(directory: &Path, label: &str, entries: &[Entry]) -> AppResult<Vec<TestCase>> {
    let input_suffix = format!(".{}", extensions::CASE_INPUT);
    let mut cases = Vec::new();

    for entry in entries {
        let Some(stem) = entry.name.strip_suffix(&input_suffix) else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }

        let output_file = format!("{}.{}", stem, extensions::CASE_OUTPUT);
        let output_path = directory.join(&output_file);
        if !reader::is_file(&output_path).await {
            tracing::debug!(
                dir = %directory.display(),
                input = %entry.name,
                "Skipping test case without output file"
            );
            continue;
        }

        cases.push(TestCase {
            name: format!("{}/{}", label, stem),
            input: reader::read_text(&directory.join(&entry.name)).await?,
            output: reader::read_text(&output_path).await?,
            description: None,
            input_file: entry.name.clone(),
            output_file,
            absolute_path: directory.to_string_lossy().into_owned(),
        });
    }

    Ok(cases)
}
