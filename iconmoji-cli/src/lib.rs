//! Build pipeline behind the `iconmoji` binary.
//!
//! Reconciles the emoji registry against the icon set, then rebuilds the
//! output database from the matched records.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;

pub use config::{CONFIG_FILE_NAME, Config, ConfigFile, Overrides};
pub use error::{CliError, EXIT_FAILURE, EXIT_MISSING_ICONS};
pub use pipeline::{BuildOptions, BuildReport, build_database, reconcile_definitions, run_build};
