//! File-system reads
//!
//! A missing file is never an error here. Callers decide whether absence
//! means 404 (a required directory) or a null field (an optional document).

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tokio::fs;

use crate::error::{AppError, AppResult};
use crate::models::Document;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

/// Read a UTF-8 text file, `None` when there is no such file
pub async fn read_text(path: &Path) -> AppResult<Option<String>> {
    if !is_file(path).await {
        return Ok(None);
    }

    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) if e.kind() == ErrorKind::InvalidData => Err(AppError::MalformedContent(format!(
            "{} is not valid UTF-8",
            path.display()
        ))),
        Err(e) => Err(e.into()),
    }
}

/// Parse JSON text read from `path`
pub fn parse_json(path: &Path, text: &str) -> AppResult<Value> {
    serde_json::from_str(text)
        .map_err(|e| AppError::MalformedContent(format!("{}: {}", path.display(), e)))
}

/// Parse JSON text, logging and discarding it when malformed
pub fn parse_json_lenient(path: &Path, text: &str) -> Option<Value> {
    match parse_json(path, text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed JSON file");
            None
        }
    }
}

/// Read and parse a JSON file
///
/// Malformed JSON is reported as absent, the same as a missing file.
pub async fn read_json(path: &Path) -> AppResult<Option<Value>> {
    Ok(read_text(path)
        .await?
        .and_then(|text| parse_json_lenient(path, &text)))
}

/// Read an optional Markdown document
pub async fn read_document(path: &Path) -> AppResult<Document<String>> {
    Ok(Document::new(read_text(path).await?, path))
}

/// Read an optional JSON document
pub async fn read_json_document(path: &Path) -> AppResult<Document<Value>> {
    Ok(Document::new(read_json(path).await?, path))
}

/// Whether `path` is an existing directory
pub async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false)
}

/// Whether `path` is an existing regular file
pub async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false)
}

/// List a directory sorted by name, `None` when it does not exist
pub async fn list_dir(path: &Path) -> AppResult<Option<Vec<Entry>>> {
    if !is_dir(path).await {
        return Ok(None);
    }

    let mut reader = fs::read_dir(path).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            tracing::debug!(dir = %path.display(), "Skipping non UTF-8 file name");
            continue;
        };
        // Follow symlinks the way a plain stat would
        let dir = is_dir(&entry.path()).await;
        entries.push(Entry { name, is_dir: dir });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Some(entries))
}

/// Names of the sub-directories of `path`, sorted; empty when it does not exist
pub async fn list_subdirs(path: &Path) -> AppResult<Vec<String>> {
    Ok(list_dir(path)
        .await?
        .unwrap_or_default()
        .into_iter()
        .filter(|e| e.is_dir)
        .map(|e| e.name)
        .collect())
}
