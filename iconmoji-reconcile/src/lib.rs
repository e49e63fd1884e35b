//! Reconcile the Unicode emoji registry against an icon asset set.
//!
//! The registry and the icons are maintained independently, so a partial
//! match is the normal outcome: entries without icons and icons without
//! entries are reported, never treated as errors.

pub mod error;
pub mod inventory;
pub mod reconcile;

pub use error::InventoryError;
pub use inventory::{DirectorySource, Inventory, InventorySource, MemorySource, load_inventory};
pub use reconcile::{ReconcileSummary, Reconciliation, UnmatchedEntry, reconcile};
