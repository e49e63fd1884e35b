//! The two build phases: reconcile, then load.

use std::path::PathBuf;

use iconmoji_core::MatchedRecord;
use iconmoji_db::{LoadProgress, load_all, open_database, reset_destination};
use iconmoji_reconcile::{InventorySource, Reconciliation, load_inventory, reconcile};
use iconmoji_registry::parse_registry;

use crate::config::Config;
use crate::error::CliError;
use crate::report;

/// Options that only affect output, never the result.
#[derive(Default)]
pub struct BuildOptions<'a> {
    /// Print every unmatched entry and icon, not just counts
    pub list_unmatched: bool,
    pub progress: Option<&'a dyn LoadProgress>,
}

/// What a completed build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub reconciliation: Reconciliation,
    pub db_path: PathBuf,
    pub rows: usize,
}

/// Reconciler phase: list icons, read and parse the registry, match them up.
///
/// The inventory is read first so a missing icon set fails before any
/// network access.
pub fn reconcile_definitions(
    config: &Config,
    icons: &dyn InventorySource,
) -> Result<Reconciliation, CliError> {
    let inventory = load_inventory(icons, &config.icon_extension)?;

    let source = config.registry_source();
    log::debug!("Loading emoji definitions from {}", source.describe());
    let text = source.load_text()?;

    let entries = parse_registry(&text);
    if entries.is_empty() {
        log::warn!("No emoji definitions found in {}", source.describe());
    }

    let reconciliation = reconcile(&entries, &inventory);
    log::debug!("{}", reconciliation.summary());
    Ok(reconciliation)
}

/// Builder phase: recreate the output directory and load every record.
///
/// On any failure the output directory is left empty.
pub fn build_database(
    config: &Config,
    records: &[MatchedRecord],
    progress: Option<&dyn LoadProgress>,
) -> Result<(PathBuf, usize), CliError> {
    let guard = reset_destination(&config.output)?;

    let rows = {
        let conn = open_database(guard.db_path())?;
        load_all(&conn, records, progress)?
    };

    Ok((guard.commit(), rows))
}

/// Run both phases, logging the reconciliation summary in between.
pub fn run_build(
    config: &Config,
    icons: &dyn InventorySource,
    options: &BuildOptions<'_>,
) -> Result<BuildReport, CliError> {
    let reconciliation = reconcile_definitions(config, icons)?;
    report::log_summary(&reconciliation, options.list_unmatched);

    let (db_path, rows) = build_database(config, &reconciliation.matched, options.progress)?;

    Ok(BuildReport {
        reconciliation,
        db_path,
        rows,
    })
}
