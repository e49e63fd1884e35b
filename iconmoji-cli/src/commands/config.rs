use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use iconmoji_cli::{CONFIG_FILE_NAME, CliError, Config, Overrides};
use iconmoji_db::output_directory;

/// Show the resolved configuration and where the registry will come from.
pub(crate) fn run_config_show(
    config_path: Option<&Path>,
    overrides: Overrides,
) -> Result<(), CliError> {
    let config = Config::load(config_path, overrides)?;

    let file = config_path.unwrap_or(Path::new(CONFIG_FILE_NAME));
    log::info!(
        "{}",
        "iconmoji configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    if file.exists() {
        log::info!(
            "  Config file:     {} {}",
            file.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Config file:     {} {}",
            file.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    match &config.local_emoji_definition {
        Some(path) => log::info!("  Registry:        {} (local)", path.display()),
        None => log::info!("  Registry:        {} (download)", config.emoji_definition_url),
    }
    log::info!("  Icon directory:  {}", config.icon_directory.display());
    log::info!("  Icon extension:  .{}", config.icon_extension);
    log::info!("  Output:          {}", config.output.display());
    let dir = output_directory(&config.output)?;
    log::info!(
        "  {} {} is wiped on every build",
        "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        dir.display(),
    );

    Ok(())
}
