//! Shared data model for the emoji icon database.
//!
//! Both halves of a build (reconciling the registry against the icon set,
//! then loading the database) speak in terms of these types.

pub mod filename;
pub mod types;

pub use filename::{
    DEFAULT_ICON_EXTENSION, VARIATION_SELECTOR, derive_filename, fallback_filename,
    normalize_code_point,
};
pub use types::{MatchedRecord, RegistryEntry};
