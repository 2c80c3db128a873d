//! Document model

use std::path::Path;

use serde::Serialize;

/// An optional file together with where it was read from
///
/// Both fields are null when the file is absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document<T> {
    pub content: Option<T>,
    pub file_path: Option<String>,
}

impl<T> Document<T> {
    /// Wrap the result of reading `path`
    pub fn new(content: Option<T>, path: &Path) -> Self {
        let file_path = content
            .as_ref()
            .map(|_| path.to_string_lossy().into_owned());
        Self { content, file_path }
    }

    /// A document that always reports `path`, present or not
    pub fn located(content: T, path: &Path) -> Self {
        Self {
            content: Some(content),
            file_path: Some(path.to_string_lossy().into_owned()),
        }
    }

    /// A document with no backing file
    pub fn absent() -> Self {
        Self {
            content: None,
            file_path: None,
        }
    }

    /// Substitute `default` for missing content, leaving `file_path` untouched
    pub fn or_default_content(mut self, default: T) -> Self {
        if self.content.is_none() {
            self.content = Some(default);
        }
        self
    }
}

impl Document<String> {
    /// One section cut out of the file at `path`; empty sections count as absent
    pub fn section(text: String, path: &Path) -> Self {
        if text.is_empty() {
            Self::absent()
        } else {
            Self::new(Some(text), path)
        }
    }
}
