/// A single definition line from the Unicode emoji registry.
///
/// Code points are stored exactly as they appear in the source text
/// (usually uppercase, zero-padded to four digits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub code_points: Vec<String>,
    /// Qualification status (e.g. "fully-qualified", "component")
    pub status: String,
    /// The literal emoji glyph
    pub emoji: String,
    /// Version tag as written in the registry (e.g. "E13.0")
    pub version: String,
    pub description: String,
}

impl RegistryEntry {
    /// Code points joined with spaces, the way the registry writes them.
    pub fn code_point_label(&self) -> String {
        self.code_points.join(" ")
    }
}

/// A registry entry paired with an icon file. One row in the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRecord {
    /// Icon filename with the extension removed
    pub file_name: String,
    pub emoji: String,
    pub emoji_version: String,
    pub description: String,
}

impl MatchedRecord {
    /// Build a record from a registry entry and the icon filename it matched.
    ///
    /// `extension` is stripped from `icon_file` when present.
    pub fn from_entry(entry: &RegistryEntry, icon_file: &str, extension: &str) -> Self {
        let suffix = format!(".{extension}");
        let file_name = icon_file
            .strip_suffix(suffix.as_str())
            .unwrap_or(icon_file)
            .to_string();
        Self {
            file_name,
            emoji: entry.emoji.clone(),
            emoji_version: entry.version.clone(),
            description: entry.description.clone(),
        }
    }
}
