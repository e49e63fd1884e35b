//! Output directory lifecycle.
//!
//! The database is always built from scratch: the directory containing it is
//! wiped and recreated before the build. The returned [`DestinationGuard`]
//! wipes it again if the build does not reach [`DestinationGuard::commit`],
//! so a failed run leaves an empty directory instead of a partial database.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("Output {0} must be inside a dedicated named directory")]
    NoOwnedDirectory(PathBuf),
    #[error("Failed to remove {dir}: {source}")]
    Remove {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to create {dir}: {source}")]
    Create {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Owns the output directory for the duration of a build.
#[derive(Debug)]
pub struct DestinationGuard {
    dir: PathBuf,
    db_path: PathBuf,
    committed: bool,
}

impl DestinationGuard {
    /// The (now empty) directory that will hold the database.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the database file to create.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Keep the directory contents. Returns the database path.
    pub fn commit(mut self) -> PathBuf {
        self.committed = true;
        std::mem::take(&mut self.db_path)
    }
}

impl Drop for DestinationGuard {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        log::warn!(
            "Build did not complete; clearing {}",
            self.dir.display()
        );
        if let Err(e) = clear_dir(&self.dir) {
            log::error!("Failed to clear {}: {}", self.dir.display(), e);
        }
    }
}

/// Destroy whatever is in the directory containing `db_path` and recreate it empty.
///
/// The directory must have a real name: an output like `emoji.db` or
/// `./emoji.db` is refused rather than wiping the working directory.
pub fn reset_destination(db_path: &Path) -> Result<DestinationGuard, DestinationError> {
    let dir = output_directory(db_path)?;

    match fs::remove_dir_all(&dir) {
        Ok(()) => log::debug!("Removed {}", dir.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(DestinationError::Remove { dir, source }),
    }

    if let Err(source) = fs::create_dir_all(&dir) {
        return Err(DestinationError::Create { dir, source });
    }

    Ok(DestinationGuard {
        dir,
        db_path: db_path.to_path_buf(),
        committed: false,
    })
}

/// The directory a build of `db_path` owns and wipes.
///
/// Fails with [`DestinationError::NoOwnedDirectory`] when that directory has
/// no name of its own (`emoji.db`, `./emoji.db`, `/emoji.db`).
pub fn output_directory(db_path: &Path) -> Result<PathBuf, DestinationError> {
    match db_path.parent() {
        Some(parent) if parent.file_name().is_some() && db_path.file_name().is_some() => {
            Ok(parent.to_path_buf())
        }
        _ => Err(DestinationError::NoOwnedDirectory(db_path.to_path_buf())),
    }
}

fn clear_dir(dir: &Path) -> io::Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    fs::create_dir_all(dir)
}
