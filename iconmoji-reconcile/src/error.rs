use thiserror::Error;

/// Errors that can occur while listing the icon asset set.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Icon directory not found: {0}")]
    Missing(String),

    #[error("Icon directory is empty: {0}")]
    Empty(String),

    #[error("Failed to list icons in {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

impl InventoryError {
    pub fn io(location: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            location: location.into(),
            source,
        }
    }

    /// True when the icon set has not been set up at all, as opposed to an
    /// I/O failure while reading it.
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Missing(_) | Self::Empty(_))
    }
}
