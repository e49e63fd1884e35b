use std::io::IsTerminal;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use iconmoji_cli::{BuildOptions, CliError, Config, Overrides, report};
use iconmoji_db::{LoadProgress, LogProgress};
use iconmoji_reconcile::DirectorySource;

use crate::progress::BarProgress;

/// Reconcile, then rebuild the database.
pub(crate) fn run_build(
    config_path: Option<&Path>,
    overrides: Overrides,
    list_unmatched: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let config = Config::load(config_path, overrides)?;
    let icons = DirectorySource::new(&config.icon_directory);

    log::info!(
        "{}",
        format!(
            "Building {} from {}",
            config.output.display(),
            config.registry_source().describe()
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );

    // Redirected output gets periodic log lines instead of a bar.
    let bar = BarProgress::new(quiet);
    let progress: &dyn LoadProgress = if !quiet && !std::io::stderr().is_terminal() {
        &LogProgress
    } else {
        &bar
    };
    let options = BuildOptions {
        list_unmatched,
        progress: Some(progress),
    };
    let built = iconmoji_cli::run_build(&config, &icons, &options)?;

    report::log_blank();
    log::info!(
        "{} Loaded {} emoji into {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        built.rows,
        built.db_path.display(),
    );

    Ok(())
}
