use std::path::PathBuf;

/// All domain errors for visit-audit.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error(
        "Malformed audit file name: '{name}'\n\n  \
         Every file in the audit directory must be named audit_<N>.txt,\n  \
         with N a positive integer without leading zeros.\n  \
         Move the offending file out of the directory and try again."
    )]
    MalformedFileName { name: String },

    #[error("Segment index {index} cannot be incremented any further")]
    SegmentOverflow { index: u64 },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "Audit directory unavailable: {path}\n\n  \
         The path exists but is not a directory.\n  \
         Pass another location with --dir or set it in the config file."
    )]
    DirectoryUnavailable { path: PathBuf },

    #[error("Cannot read audit file {path}: {reason}")]
    SegmentUnreadable { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuditError>;
