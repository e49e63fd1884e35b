//! Build configuration.
//!
//! Values come from an optional TOML file (`iconmoji.toml` by default),
//! then command-line overrides, then built-in defaults. The result is an
//! immutable [`Config`] passed explicitly through the build.

use std::fs;
use std::path::{Path, PathBuf};

use iconmoji_core::DEFAULT_ICON_EXTENSION;
use iconmoji_db::output_directory;
use iconmoji_registry::{DEFAULT_REGISTRY_URL, RegistrySource};
use serde::Deserialize;

use crate::error::CliError;

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILE_NAME: &str = "iconmoji.toml";

const DEFAULT_OUTPUT: &str = "dist/emoji.db";
const DEFAULT_ICON_DIRECTORY: &str = "assets/svg";

/// TOML config file format.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub local_emoji_definition: Option<PathBuf>,
    #[serde(rename = "emojiDefinitionURL")]
    pub emoji_definition_url: Option<String>,
    pub output: Option<PathBuf>,
    pub icon_directory: Option<PathBuf>,
    pub icon_extension: Option<String>,
}

/// Values given on the command line; these win over the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub local_emoji_definition: Option<PathBuf>,
    pub emoji_definition_url: Option<String>,
    pub output: Option<PathBuf>,
    pub icon_directory: Option<PathBuf>,
    pub icon_extension: Option<String>,
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Local registry file; when set, no download happens
    pub local_emoji_definition: Option<PathBuf>,
    pub emoji_definition_url: String,
    /// Database file path. Its parent directory is wiped on every build and
    /// always has a name of its own.
    pub output: PathBuf,
    pub icon_directory: PathBuf,
    /// Icon file extension without the leading dot
    pub icon_extension: String,
}

impl Config {
    /// Load the config file (if any) and apply `overrides`.
    ///
    /// With `path == None`, [`CONFIG_FILE_NAME`] is used when it exists.
    /// An explicitly named file that does not exist is an error.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, CliError> {
        let file = match path {
            Some(p) => read_config_file(p)?,
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if default.exists() {
                    read_config_file(default)?
                } else {
                    ConfigFile::default()
                }
            }
        };
        Self::resolve(file, overrides)
    }

    /// Merge file values with overrides and defaults.
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Result<Self, CliError> {
        let icon_extension = overrides
            .icon_extension
            .or(file.icon_extension)
            .unwrap_or_else(|| DEFAULT_ICON_EXTENSION.to_string())
            .trim_start_matches('.')
            .to_string();
        if icon_extension.is_empty() {
            return Err(CliError::config("iconExtension must not be empty"));
        }

        let emoji_definition_url = overrides
            .emoji_definition_url
            .or(file.emoji_definition_url)
            .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());

        let output = overrides
            .output
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        output_directory(&output).map_err(|e| CliError::config(e.to_string()))?;

        Ok(Self {
            local_emoji_definition: overrides
                .local_emoji_definition
                .or(file.local_emoji_definition),
            emoji_definition_url,
            output,
            icon_directory: overrides
                .icon_directory
                .or(file.icon_directory)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ICON_DIRECTORY)),
            icon_extension,
        })
    }

    /// Where to read the registry from: the local file if configured, else the URL.
    pub fn registry_source(&self) -> RegistrySource {
        RegistrySource::from_options(
            self.local_emoji_definition.as_deref(),
            &self.emoji_definition_url,
        )
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, CliError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CliError::config(format!("Failed to read {}: {}", path.display(), e)))?;
    toml::from_str(&contents)
        .map_err(|e| CliError::config(format!("Invalid config {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = Config::resolve(ConfigFile::default(), Overrides::default()).unwrap();
        assert_eq!(config.local_emoji_definition, None);
        assert_eq!(config.emoji_definition_url, DEFAULT_REGISTRY_URL);
        assert_eq!(config.output, PathBuf::from("dist/emoji.db"));
        assert_eq!(config.icon_directory, PathBuf::from("assets/svg"));
        assert_eq!(config.icon_extension, "svg");
        assert_eq!(
            config.registry_source(),
            RegistrySource::Remote(DEFAULT_REGISTRY_URL.to_string())
        );
    }

    #[test]
    fn parses_external_key_names() {
        let file: ConfigFile = toml::from_str(
            r#"
            localEmojiDefinition = "data/emoji-test.txt"
            emojiDefinitionURL = "https://example.com/emoji-test.txt"
            output = "build/db/emoji.db"
            iconDirectory = "vendor/icons/svg"
            iconExtension = ".svg"
            "#,
        )
        .unwrap();

        let config = Config::resolve(file, Overrides::default()).unwrap();
        assert_eq!(
            config.registry_source(),
            RegistrySource::Local(PathBuf::from("data/emoji-test.txt"))
        );
        assert_eq!(config.emoji_definition_url, "https://example.com/emoji-test.txt");
        assert_eq!(config.output, PathBuf::from("build/db/emoji.db"));
        assert_eq!(config.icon_directory, PathBuf::from("vendor/icons/svg"));
        assert_eq!(config.icon_extension, "svg");
    }

    #[test]
    fn overrides_win_over_file() {
        let file = ConfigFile {
            output: Some(PathBuf::from("from-file/emoji.db")),
            icon_extension: Some("png".to_string()),
            ..Default::default()
        };
        let overrides = Overrides {
            output: Some(PathBuf::from("from-cli/emoji.db")),
            ..Default::default()
        };

        let config = Config::resolve(file, overrides).unwrap();
        assert_eq!(config.output, PathBuf::from("from-cli/emoji.db"));
        assert_eq!(config.icon_extension, "png");
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str("outptu = \"dist/emoji.db\"");
        assert!(result.is_err());
    }

    #[test]
    fn empty_extension_rejected() {
        let overrides = Overrides {
            icon_extension: Some(".".to_string()),
            ..Default::default()
        };
        assert!(Config::resolve(ConfigFile::default(), overrides).is_err());
    }

    #[test]
    fn output_without_named_directory_rejected() {
        for output in ["emoji.db", "./emoji.db", "/emoji.db"] {
            let file = ConfigFile {
                output: Some(PathBuf::from(output)),
                ..Default::default()
            };
            let result = Config::resolve(file, Overrides::default());
            assert!(matches!(result, Err(CliError::Config(_))), "{output}");
        }
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("missing.toml")), Overrides::default());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iconmoji.toml");
        fs::write(&path, "output = \"out/emoji.db\"\n").unwrap();

        let config = Config::load(Some(&path), Overrides::default()).unwrap();
        assert_eq!(config.output, PathBuf::from("out/emoji.db"));
    }
}
