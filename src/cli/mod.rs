pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

/// Record a visitor check-in into rotating audit files.
#[derive(Parser, Debug)]
#[command(name = "visit-audit", version, about, long_about = None)]
pub struct Cli {
    /// Name of the visitor
    pub visitor: String,

    /// Time of visit (default: now, UTC, RFC 3339)
    pub time: Option<String>,

    /// Directory holding the audit_<N>.txt files
    #[arg(long, env = "VISIT_AUDIT_DIR")]
    pub dir: Option<PathBuf>,

    /// Maximum number of records per file before rotating
    #[arg(long, env = "VISIT_AUDIT_MAX_ENTRIES")]
    pub max_entries: Option<usize>,

    /// Path to alternative config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long)]
    pub quiet: bool,
}
