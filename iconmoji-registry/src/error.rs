use std::path::PathBuf;

/// Errors that can occur while obtaining the registry text.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read registry file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to download registry from {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for registry at {url}")]
    HttpStatus { url: String, status: u16 },
}

impl RegistryError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn download(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Download {
            url: url.into(),
            source,
        }
    }
}
