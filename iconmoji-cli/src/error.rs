use iconmoji_db::{DestinationError, LoadError, SchemaError};
use iconmoji_reconcile::InventoryError;
use iconmoji_registry::RegistryError;
use thiserror::Error;

/// Exit status for any failed run.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status when the icon asset directory is missing or empty.
pub const EXIT_MISSING_ICONS: i32 = 2;

/// Errors that can end a run, named by the phase that failed.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or option problem
    #[error("Config error: {0}")]
    Config(String),

    /// Listing the icon asset directory failed
    #[error("Icon inventory: {0}")]
    Inventory(#[from] InventoryError),

    /// Reading or downloading the registry failed
    #[error("Registry: {0}")]
    Registry(#[from] RegistryError),

    /// Output directory could not be reset
    #[error("Destination reset: {0}")]
    Destination(#[from] DestinationError),

    /// Database file or table could not be created
    #[error("Database schema: {0}")]
    Schema(#[from] SchemaError),

    /// A record insert failed
    #[error("Database load: {0}")]
    Load(#[from] LoadError),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Inventory(e) if e.is_uninitialized() => EXIT_MISSING_ICONS,
            _ => EXIT_FAILURE,
        }
    }
}
