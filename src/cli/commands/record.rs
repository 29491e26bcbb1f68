use chrono::{SecondsFormat, Utc};

use crate::adapters::storage::dir_store::DirSegmentStore;
use crate::cli::{Cli, output};
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::audit_manager::AuditManager;
use crate::core::services::placement_engine::PlacementEngine;

/// Execute `visit-audit <visitor> [time]`.
///
/// Resolves the directory and capacity, then records one visit.
pub fn execute(args: &Cli) -> Result<()> {
    let config = AppConfig::resolve(args.config.as_deref())?
        .with_overrides(args.dir.clone(), args.max_entries)?;

    let time_of_visit = args.time.clone().unwrap_or_else(now_rfc3339);

    let engine = PlacementEngine::new(config.audit.max_entries_per_file)?;
    let store = DirSegmentStore::new(config.audit.directory);
    let manager = AuditManager::new(engine, store);

    let mutation = manager.add_record(&args.visitor, &time_of_visit)?;

    if args.quiet {
        return Ok(());
    }

    if args.verbose {
        output::header("visit-audit");
        output::detail("directory", &manager.store.dir().display().to_string());
        output::detail(
            "max entries per file",
            &manager.engine.max_entries_per_file().to_string(),
        );
        output::detail("time of visit", &time_of_visit);
        output::detail(
            "entries in file",
            &mutation.new_full_content.lines().count().to_string(),
        );
    }

    output::success(&format!(
        "Recorded {} in {}",
        args.visitor, mutation.target_file_name
    ));

    Ok(())
}

/// Current UTC time with second precision, e.g. `2024-12-28T22:00:00Z`.
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
