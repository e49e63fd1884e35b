//! Pair registry entries with icon files.
//!
//! Each entry's code points produce a primary candidate filename. If the
//! icon set lacks it, the candidate with variation selectors removed is
//! tried instead. The first entry to claim a filename keeps it; later
//! entries resolving to the same icon are counted as duplicates.

use std::collections::HashSet;
use std::fmt;

use iconmoji_core::{MatchedRecord, RegistryEntry, derive_filename, fallback_filename};

use crate::inventory::Inventory;

/// A registry entry with no icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedEntry {
    /// The primary candidate filename that was looked for
    pub candidate: String,
    pub entry: RegistryEntry,
}

/// Outcome of reconciling a registry against an inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Matched records in registry order
    pub matched: Vec<MatchedRecord>,
    /// Registry entries with no icon, in registry order
    pub unmatched_entries: Vec<UnmatchedEntry>,
    /// Icon filenames no matched record claimed, sorted
    pub unmatched_icons: Vec<String>,
    /// Registry entries examined
    pub definitions: usize,
    /// Icons available
    pub icons: usize,
    /// Matches that needed the variation-selector fallback
    pub fallback_matches: usize,
    /// Entries whose icon was already claimed by an earlier entry
    pub duplicates: usize,
}

/// Counts for the diagnostic summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub definitions: usize,
    pub matched: usize,
    pub icons: usize,
    pub unmatched_entries: usize,
    pub unmatched_icons: usize,
    pub fallback_matches: usize,
    pub duplicates: usize,
}

impl Reconciliation {
    pub fn summary(&self) -> ReconcileSummary {
        ReconcileSummary {
            definitions: self.definitions,
            matched: self.matched.len(),
            icons: self.icons,
            unmatched_entries: self.unmatched_entries.len(),
            unmatched_icons: self.unmatched_icons.len(),
            fallback_matches: self.fallback_matches,
            duplicates: self.duplicates,
        }
    }
}

impl fmt::Display for ReconcileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} definitions, {} matched, {} duplicates, {} icons, {} definitions without icon, {} icons without definition",
            self.definitions,
            self.matched,
            self.duplicates,
            self.icons,
            self.unmatched_entries,
            self.unmatched_icons,
        )
    }
}

/// Reconcile `entries` against `inventory`.
///
/// Pure function of its inputs: the same entries and inventory always give
/// the same result, in the same order.
pub fn reconcile(entries: &[RegistryEntry], inventory: &Inventory) -> Reconciliation {
    let extension = inventory.extension();
    let mut claimed: HashSet<String> = HashSet::new();
    let mut matched = Vec::new();
    let mut unmatched_entries = Vec::new();
    let mut fallback_matches = 0;
    let mut duplicates = 0;

    for entry in entries {
        let primary = derive_filename(&entry.code_points, extension);

        let chosen = if inventory.contains(&primary) {
            Some(primary.clone())
        } else {
            fallback_filename(&primary).filter(|fallback| inventory.contains(fallback))
        };

        let Some(icon) = chosen else {
            unmatched_entries.push(UnmatchedEntry {
                candidate: primary,
                entry: entry.clone(),
            });
            continue;
        };

        if icon != primary {
            log::debug!("{} matched {} via fallback", entry.code_point_label(), icon);
        }

        if !claimed.insert(icon.clone()) {
            log::debug!(
                "{} resolves to {}, already claimed",
                entry.code_point_label(),
                icon
            );
            duplicates += 1;
            continue;
        }

        if icon != primary {
            fallback_matches += 1;
        }
        matched.push(MatchedRecord::from_entry(entry, &icon, extension));
    }

    let unmatched_icons = inventory
        .files()
        .filter(|file| !claimed.contains(*file))
        .cloned()
        .collect();

    Reconciliation {
        matched,
        unmatched_entries,
        unmatched_icons,
        definitions: entries.len(),
        icons: inventory.len(),
        fallback_matches,
        duplicates,
    }
}
