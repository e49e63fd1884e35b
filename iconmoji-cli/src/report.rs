//! Human-readable reconciliation summary.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use iconmoji_reconcile::Reconciliation;

/// Print an empty log line.
pub fn log_blank() {
    log::info!("");
}

/// Log the reconciliation counts, and the itemized lists if asked.
///
/// Purely informational; nothing here affects what gets loaded.
pub fn log_summary(result: &Reconciliation, list_unmatched: bool) {
    let summary = result.summary();

    log::info!(
        "{}",
        "Reconciliation".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Definitions found:     {:>6}", summary.definitions);
    log::info!(
        "  {} Matched:             {:>6}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.matched,
    );
    if summary.fallback_matches > 0 {
        log::info!("    via fallback:        {:>6}", summary.fallback_matches);
    }
    log::info!("  Icons available:       {:>6}", summary.icons);
    log::info!(
        "  {} Definitions w/o icon: {:>6}",
        "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        summary.unmatched_entries,
    );
    log::info!(
        "  {} Icons w/o definition: {:>6}",
        "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        summary.unmatched_icons,
    );
    log::info!(
        "  Duplicate definitions: {:>6} (icon already claimed)",
        summary.duplicates
    );

    if !list_unmatched {
        return;
    }

    if !result.unmatched_entries.is_empty() {
        log_blank();
        log::info!(
            "{}",
            "Definitions without icon".if_supports_color(Stdout, |t| t.bold()),
        );
        for unmatched in &result.unmatched_entries {
            log::info!(
                "  {} {} {}",
                unmatched.candidate.if_supports_color(Stdout, |t| t.dimmed()),
                unmatched.entry.emoji,
                unmatched.entry.description,
            );
        }
    }

    if !result.unmatched_icons.is_empty() {
        log_blank();
        log::info!(
            "{}",
            "Icons without definition".if_supports_color(Stdout, |t| t.bold()),
        );
        for icon in &result.unmatched_icons {
            log::info!("  {}", icon);
        }
    }
}
