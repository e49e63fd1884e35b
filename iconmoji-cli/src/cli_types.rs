//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use iconmoji_cli::Overrides;

#[derive(Parser)]
#[command(name = "iconmoji")]
#[command(about = "Build a searchable emoji-to-icon database", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to ./iconmoji.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments that override config file values.
#[derive(Args, Clone, Default)]
pub(crate) struct SourceArgs {
    /// Read the emoji registry from this file instead of downloading it
    #[arg(long)]
    pub local_definition: Option<PathBuf>,

    /// URL of the emoji registry (emoji-test.txt)
    #[arg(long)]
    pub definition_url: Option<String>,

    /// Directory of icon files named by code point sequence
    #[arg(long)]
    pub icons: Option<PathBuf>,

    /// Icon file extension
    #[arg(long)]
    pub extension: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Rebuild the emoji database from scratch
    Build {
        #[command(flatten)]
        sources: SourceArgs,

        /// Database file to create (its directory is wiped first)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List every unmatched definition and icon
        #[arg(long)]
        list_unmatched: bool,
    },

    /// Reconcile the registry against the icons without writing anything
    Check {
        #[command(flatten)]
        sources: SourceArgs,

        /// List every unmatched definition and icon
        #[arg(long)]
        list_unmatched: bool,
    },

    /// Show the resolved configuration
    Config {
        #[command(flatten)]
        sources: SourceArgs,

        /// Database file to create
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl SourceArgs {
    pub(crate) fn into_overrides(self, output: Option<PathBuf>) -> Overrides {
        Overrides {
            local_emoji_definition: self.local_definition,
            emoji_definition_url: self.definition_url,
            output,
            icon_directory: self.icons,
            icon_extension: self.extension,
        }
    }
}
