//! iconmoji CLI
//!
//! Builds a searchable SQLite database mapping emoji to icon filenames.

mod cli_types;
mod commands;
mod logging;
mod progress;

use clap::Parser;

use iconmoji_cli::{CliError, EXIT_MISSING_ICONS};

use cli_types::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Build {
            sources,
            output,
            list_unmatched,
        } => commands::build::run_build(
            cli.config.as_deref(),
            sources.into_overrides(output),
            list_unmatched,
            cli.quiet,
        ),
        Commands::Check {
            sources,
            list_unmatched,
        } => commands::check::run_check(
            cli.config.as_deref(),
            sources.into_overrides(None),
            list_unmatched,
        ),
        Commands::Config { sources, output } => {
            commands::config::run_config_show(cli.config.as_deref(), sources.into_overrides(output))
        }
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(e.exit_code());
    }
}

fn report_error(e: &CliError) {
    if e.exit_code() == EXIT_MISSING_ICONS {
        log::error!("{}", e);
        log::error!(
            "The icon asset set is not initialized. Populate the icon directory \
             (for a vendored set: `git submodule update --init`) and run again."
        );
        return;
    }
    log::error!("{}", e);
}
