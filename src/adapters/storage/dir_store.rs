use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::core::errors::{AuditError, Result};
use crate::core::models::log_file::{LogFile, segment_index};
use crate::core::models::mutation::Mutation;
use crate::core::traits::segment_store::SegmentStore;

/// Segment store backed by a local directory.
///
/// Every regular file in the directory is treated as a segment, except
/// hidden entries (leading `.`), which is where in-flight writes live.
/// Writes go to a temp file next to the target and are renamed over it.
#[derive(Debug, Clone)]
pub struct DirSegmentStore {
    dir: PathBuf,
}

impl DirSegmentStore {
    /// Create a store over `dir`. Nothing is touched until the first call.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Return the directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(AuditError::DirectoryUnavailable {
                path: self.dir.clone(),
            });
        }
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }
}

impl SegmentStore for DirSegmentStore {
    fn list_files(&self) -> Result<Vec<LogFile>> {
        self.ensure_dir()?;

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let name = entry
                .file_name()
                .into_string()
                .map_err(|raw| AuditError::MalformedFileName {
                    name: raw.to_string_lossy().into_owned(),
                })?;
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let content =
                fs::read_to_string(&path).map_err(|e| AuditError::SegmentUnreadable {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
            files.push(LogFile::from_content(name, &content));
        }

        Ok(files)
    }

    fn apply(&self, mutation: &Mutation) -> Result<()> {
        // Only segment names may be written, which also keeps the write
        // inside the directory.
        segment_index(&mutation.target_file_name)?;
        self.ensure_dir()?;

        let mut tmp = tempfile::Builder::new()
            .prefix(".audit_")
            .suffix(".tmp")
            .tempfile_in(&self.dir)?;
        tmp.write_all(mutation.new_full_content.as_bytes())?;
        tmp.as_file().sync_all()?;
        persist(tmp, &self.dir.join(&mutation.target_file_name))
    }
}

fn persist(tmp: NamedTempFile, target: &Path) -> Result<()> {
    tmp.persist(target).map_err(|e| AuditError::Io(e.error))?;
    Ok(())
}
