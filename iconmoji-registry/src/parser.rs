//! Parser for the Unicode emoji test data format.
//!
//! Definition lines look like:
//!
//! ```text
//! 1F469 200D 1F4BB  ; fully-qualified  # 👩‍💻 E4.0 woman technologist
//! ```
//!
//! That is: a code point group, `;`, a status field, `#`, then the glyph,
//! a version tag and a free-text description. Anything else (headers,
//! `# group:` comments, blank lines) is skipped.

use iconmoji_core::RegistryEntry;

/// Parse every definition line in `text`, preserving source order.
pub fn parse_registry(text: &str) -> Vec<RegistryEntry> {
    text.lines().filter_map(parse_line).collect()
}

/// Parse a single line, or `None` if it is not a definition.
pub fn parse_line(line: &str) -> Option<RegistryEntry> {
    let line = line.trim_end_matches('\r');

    let (group, rest) = line.split_once(';')?;
    let code_points = parse_code_points(group)?;

    let (status, comment) = rest.split_once('#')?;
    let status = single_token(status)?;

    let (emoji, comment) = next_token(comment)?;
    let (version, description) = next_token(comment)?;
    let description = description.trim();
    if description.is_empty() {
        return None;
    }

    Some(RegistryEntry {
        code_points,
        status: status.to_string(),
        emoji: emoji.to_string(),
        version: version.to_string(),
        description: description.to_string(),
    })
}

/// Whitespace-separated hex code points; at least one is required.
fn parse_code_points(group: &str) -> Option<Vec<String>> {
    let code_points: Vec<String> = group.split_whitespace().map(str::to_string).collect();
    if code_points.is_empty() {
        return None;
    }
    if !code_points
        .iter()
        .all(|cp| cp.chars().all(|c| c.is_ascii_hexdigit()))
    {
        return None;
    }
    Some(code_points)
}

/// The field must be exactly one non-empty token.
fn single_token(field: &str) -> Option<&str> {
    let trimmed = field.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return None;
    }
    Some(trimmed)
}

/// Split off the next whitespace-delimited token, returning it and the remainder.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.split_once(char::is_whitespace) {
        Some((token, rest)) => Some((token, rest)),
        None => Some((s, "")),
    }
}
