use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::{AuditError, Result};

static SEGMENT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^audit_([1-9][0-9]*)\.txt$").expect("static pattern compiles"));

/// One rotation segment as read from storage.
///
/// `entries` holds one serialized record per line, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub name: String,
    pub entries: Vec<String>,
}

impl LogFile {
    pub fn new(name: impl Into<String>, entries: Vec<String>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Build a segment from raw file content.
    ///
    /// Line terminators are dropped and a trailing newline does not
    /// produce an empty entry.
    pub fn from_content(name: impl Into<String>, content: &str) -> Self {
        Self::new(name, content.lines().map(str::to_string).collect())
    }
}

/// Extract N from a segment name of the form `audit_<N>.txt`.
pub fn segment_index(name: &str) -> Result<u64> {
    SEGMENT_NAME
        .captures(name)
        .and_then(|caps| caps[1].parse::<u64>().ok())
        .ok_or_else(|| AuditError::MalformedFileName {
            name: name.to_string(),
        })
}

/// File name of the segment with the given index.
pub fn segment_file_name(index: u64) -> String {
    format!("audit_{index}.txt")
}
