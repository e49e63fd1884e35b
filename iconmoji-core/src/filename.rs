//! Icon filename derivation from registry code points.
//!
//! Icon files are named after their code point sequence: lowercase hex,
//! leading zeros stripped from each code point, joined with hyphens
//! (e.g. `1F469 200D 1F4BB` → `1f469-200d-1f4bb.svg`).

/// Extension used by the icon asset set unless configured otherwise.
pub const DEFAULT_ICON_EXTENSION: &str = "svg";

/// Variation selector-16 (emoji presentation), often omitted from icon names.
pub const VARIATION_SELECTOR: &str = "fe0f";

/// Lowercase a code point and strip its leading zeros, keeping at least one digit.
pub fn normalize_code_point(code_point: &str) -> String {
    let lower = code_point.trim().to_ascii_lowercase();
    let stripped = lower.trim_start_matches('0');
    if stripped.is_empty() && !lower.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// Primary candidate filename for a code point sequence.
pub fn derive_filename<S: AsRef<str>>(code_points: &[S], extension: &str) -> String {
    let stem = code_points
        .iter()
        .map(|cp| normalize_code_point(cp.as_ref()))
        .collect::<Vec<_>>()
        .join("-");
    format!("{stem}.{extension}")
}

/// Fallback candidate: the primary with every hyphen-prefixed variation
/// selector removed.
///
/// Returns `None` when the primary contains no such marker, since the
/// fallback would be identical.
pub fn fallback_filename(primary: &str) -> Option<String> {
    let (stem, extension) = match primary.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (primary, None),
    };

    let mut segments = stem.split('-');
    let mut kept: Vec<&str> = segments.next().into_iter().collect();
    let mut removed = false;
    for segment in segments {
        if segment == VARIATION_SELECTOR {
            removed = true;
        } else {
            kept.push(segment);
        }
    }

    if !removed {
        return None;
    }

    let stem = kept.join("-");
    Some(match extension {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    })
}
