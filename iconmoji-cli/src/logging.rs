//! Logger setup for the CLI.

use std::io::Write;

use log::{Level, LevelFilter};

/// Install the global logger.
///
/// Normal output is message-only so summaries read like plain text.
/// `RUST_LOG`, when set, takes precedence over the flags.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis().format_target(false);
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }

    builder.parse_default_env();
    builder.init();
}
