use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RegistryError;

/// Latest published emoji test data from the Unicode Consortium.
pub const DEFAULT_REGISTRY_URL: &str = "https://unicode.org/Public/emoji/latest/emoji-test.txt";

/// Where the registry text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    /// A registry file already on disk
    Local(PathBuf),
    /// A URL fetched over HTTP(S)
    Remote(String),
}

impl RegistrySource {
    /// Choose the source: a configured local file wins over the URL.
    pub fn from_options(local: Option<&Path>, url: &str) -> Self {
        match local {
            Some(path) => Self::Local(path.to_path_buf()),
            None => Self::Remote(url.to_string()),
        }
    }

    /// Human-readable location for log output.
    pub fn describe(&self) -> String {
        match self {
            Self::Local(path) => path.display().to_string(),
            Self::Remote(url) => url.clone(),
        }
    }

    /// Read or download the full registry text.
    pub fn load_text(&self) -> Result<String, RegistryError> {
        match self {
            Self::Local(path) => {
                log::debug!("Reading registry from {}", path.display());
                fs::read_to_string(path).map_err(|e| RegistryError::read(path, e))
            }
            Self::Remote(url) => fetch(url),
        }
    }
}

/// Download the registry text over HTTP.
fn fetch(url: &str) -> Result<String, RegistryError> {
    log::debug!("Downloading registry from {url}");

    let response = reqwest::blocking::get(url).map_err(|e| RegistryError::download(url, e))?;

    if !response.status().is_success() {
        return Err(RegistryError::HttpStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    response.text().map_err(|e| RegistryError::download(url, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_file_wins_over_url() {
        let source = RegistrySource::from_options(Some(Path::new("emoji-test.txt")), DEFAULT_REGISTRY_URL);
        assert_eq!(source, RegistrySource::Local(PathBuf::from("emoji-test.txt")));
    }

    #[test]
    fn url_used_without_local_file() {
        let source = RegistrySource::from_options(None, "https://example.com/emoji-test.txt");
        assert_eq!(
            source,
            RegistrySource::Remote("https://example.com/emoji-test.txt".to_string())
        );
    }

    #[test]
    fn load_local_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emoji-test.txt");
        fs::write(&path, "1F600 ; fully-qualified # \u{1F600} E1.0 grinning face\n").unwrap();

        let text = RegistrySource::Local(path).load_text().unwrap();
        assert!(text.contains("grinning face"));
    }

    #[test]
    fn missing_local_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = RegistrySource::Local(path.clone()).load_text().unwrap_err();
        match err {
            RegistryError::Read { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
