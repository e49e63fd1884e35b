//! The icon inventory: filenames available in the icon asset directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use crate::error::InventoryError;

/// Something that can list icon filenames.
///
/// The directory listing is the production source; tests substitute
/// [`MemorySource`].
pub trait InventorySource {
    /// Location shown in diagnostics.
    fn location(&self) -> String;

    /// List every icon filename (not path) available.
    fn list_files(&self) -> Result<Vec<String>, InventoryError>;
}

/// Lists regular files directly inside a directory.
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl InventorySource for DirectorySource {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    fn list_files(&self) -> Result<Vec<String>, InventoryError> {
        if !self.dir.is_dir() {
            return Err(InventoryError::Missing(self.location()));
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| InventoryError::io(self.location(), e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| InventoryError::io(self.location(), e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => files.push(name),
                Err(name) => log::warn!("Skipping non-UTF-8 icon filename {:?}", name),
            }
        }
        Ok(files)
    }
}

/// A fixed list of filenames.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl InventorySource for MemorySource {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn list_files(&self) -> Result<Vec<String>, InventoryError> {
        Ok(self.files.clone())
    }
}

/// The set of icon filenames available for this run.
#[derive(Debug, Clone)]
pub struct Inventory {
    files: BTreeSet<String>,
    extension: String,
}

impl Inventory {
    pub fn new<I, S>(files: I, extension: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Icon file extension, without the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.files.contains(file_name)
    }

    /// All filenames, sorted.
    pub fn files(&self) -> impl Iterator<Item = &String> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Read the inventory from `source`.
///
/// An empty listing means the icon set was never installed and is reported
/// as [`InventoryError::Empty`].
pub fn load_inventory(
    source: &dyn InventorySource,
    extension: &str,
) -> Result<Inventory, InventoryError> {
    let inventory = Inventory::new(source.list_files()?, extension);
    if inventory.is_empty() {
        return Err(InventoryError::Empty(source.location()));
    }
    log::debug!("Loaded {} icons from {}", inventory.len(), source.location());
    Ok(inventory)
}
