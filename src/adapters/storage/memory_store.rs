use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::core::errors::Result;
use crate::core::models::log_file::LogFile;
use crate::core::models::mutation::Mutation;
use crate::core::traits::segment_store::SegmentStore;

/// In-memory segment store for tests.
#[derive(Debug, Default)]
pub struct MemorySegmentStore {
    files: RwLock<BTreeMap<String, String>>,
}

impl MemorySegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file directly, bypassing the engine.
    pub fn insert(&self, name: &str, content: &str) {
        self.files
            .write()
            .unwrap()
            .insert(name.to_string(), content.to_string());
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.files.read().unwrap().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.files.read().unwrap().keys().cloned().collect()
    }
}

impl SegmentStore for MemorySegmentStore {
    fn list_files(&self) -> Result<Vec<LogFile>> {
        Ok(self
            .files
            .read()
            .unwrap()
            .iter()
            .map(|(name, content)| LogFile::from_content(name.as_str(), content))
            .collect())
    }

    fn apply(&self, mutation: &Mutation) -> Result<()> {
        self.insert(&mutation.target_file_name, &mutation.new_full_content);
        Ok(())
    }
}
