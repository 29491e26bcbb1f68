use crate::core::errors::{AuditError, Result};
use crate::core::models::log_file::{LogFile, segment_file_name, segment_index};
use crate::core::models::mutation::Mutation;
use crate::core::models::record::Record;

/// Decides which segment receives a new record.
///
/// Performs no I/O: the caller supplies the current inventory and applies
/// the returned `Mutation` itself.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    max_entries_per_file: usize,
}

impl PlacementEngine {
    /// Create an engine that rotates after `max_entries_per_file` records.
    pub fn new(max_entries_per_file: usize) -> Result<Self> {
        if max_entries_per_file == 0 {
            return Err(AuditError::InvalidConfig {
                detail: "max_entries_per_file must be a positive integer".into(),
            });
        }
        Ok(Self {
            max_entries_per_file,
        })
    }

    pub fn max_entries_per_file(&self) -> usize {
        self.max_entries_per_file
    }

    /// Compute the single write that records `visitor_name` at `time_of_visit`.
    ///
    /// The segment with the highest numeric index is the current one. It is
    /// appended to while it holds fewer than `max_entries_per_file` entries;
    /// otherwise a new segment numbered one past it is started. Gaps in the
    /// numbering are not repaired.
    pub fn place_record(
        &self,
        files: &[LogFile],
        visitor_name: &str,
        time_of_visit: &str,
    ) -> Result<Mutation> {
        let record = Record::new(visitor_name, time_of_visit).to_string();

        // Every name is validated, not only the current one.
        let mut indexed = files
            .iter()
            .map(|file| segment_index(&file.name).map(|index| (index, file)))
            .collect::<Result<Vec<_>>>()?;
        indexed.sort_by_key(|(index, _)| *index);

        let Some(&(index, current)) = indexed.last() else {
            return Ok(Mutation::new(segment_file_name(1), record));
        };

        if current.entries.len() < self.max_entries_per_file {
            let mut lines: Vec<&str> = current.entries.iter().map(String::as_str).collect();
            lines.push(&record);
            return Ok(Mutation::new(current.name.clone(), lines.join("\n")));
        }

        let next = index
            .checked_add(1)
            .ok_or(AuditError::SegmentOverflow { index })?;
        Ok(Mutation::new(segment_file_name(next), record))
    }
}
