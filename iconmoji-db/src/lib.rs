//! SQLite output for the emoji icon database.
//!
//! Provides destination reset, schema creation and bulk loading of matched
//! records into a full-text-indexed table (via rusqlite with bundled feature).

pub mod destination;
pub mod operations;
pub mod progress;
pub mod schema;

pub use destination::{DestinationError, DestinationGuard, output_directory, reset_destination};
pub use operations::{LoadError, count_rows, load_all};
pub use progress::{LoadProgress, LogProgress, SilentProgress};
pub use schema::{SchemaError, TABLE_NAME, create_schema, open_database, open_memory};
