use std::path::Path;

use iconmoji_cli::{CliError, Config, Overrides, reconcile_definitions, report};
use iconmoji_reconcile::DirectorySource;

/// Reconcile without touching the output directory.
pub(crate) fn run_check(
    config_path: Option<&Path>,
    overrides: Overrides,
    list_unmatched: bool,
) -> Result<(), CliError> {
    let config = Config::load(config_path, overrides)?;
    let icons = DirectorySource::new(&config.icon_directory);

    let reconciliation = reconcile_definitions(&config, &icons)?;
    report::log_summary(&reconciliation, list_unmatched);

    Ok(())
}
