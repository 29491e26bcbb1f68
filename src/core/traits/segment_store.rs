use crate::core::errors::Result;
use crate::core::models::log_file::LogFile;
use crate::core::models::mutation::Mutation;

/// Port for the storage holding audit segments.
///
/// Implementations live in `adapters::storage`. Each store is bound to one
/// directory (or namespace) when it is constructed.
pub trait SegmentStore: Send + Sync {
    /// Enumerate every segment with its lines. Order is not significant.
    /// A missing directory is created and yields an empty list.
    fn list_files(&self) -> Result<Vec<LogFile>>;

    /// Write the mutation's content as the whole file, creating or
    /// overwriting it. The file is left either fully old or fully new.
    fn apply(&self, mutation: &Mutation) -> Result<()>;
}
