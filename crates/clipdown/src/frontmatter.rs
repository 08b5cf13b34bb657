//! Metadata header placed in front of a saved clip.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Header delimiter line
pub const DELIMITER: &str = "---";

/// What the caller knows about a clip at save time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Page URL, empty when unknown
    pub source: String,
    /// ISO-8601 save timestamp, empty when unknown
    pub saved_at: String,
    /// Distinct tag labels in first-seen order
    pub tags: Vec<String>,
}

impl Metadata {
    /// Build metadata, dropping repeated tags
    pub fn new<I, T>(source: impl Into<String>, saved_at: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tags: IndexSet<String> = tags.into_iter().map(Into::into).collect();
        Self {
            source: source.into(),
            saved_at: saved_at.into(),
            tags: tags.into_iter().collect(),
        }
    }
}

/// Render the metadata header.
///
/// `source` and `saved_at` lines are left out when empty, and so is the
/// `tags` line when there are no tags.
pub fn generate_frontmatter(metadata: &Metadata) -> String {
    let mut lines = vec![DELIMITER.to_string()];

    if !metadata.source.is_empty() {
        lines.push(format!("source: {}", metadata.source));
    }
    if !metadata.saved_at.is_empty() {
        lines.push(format!("saved_at: {}", metadata.saved_at));
    }
    if !metadata.tags.is_empty() {
        lines.push(format!("tags: [{}]", metadata.tags.join(", ")));
    }

    lines.push(DELIMITER.to_string());
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_full_header() {
        let metadata = Metadata::new(
            "https://example.com/post",
            "2024-05-01T10:00:00.000Z",
            ["rust", "notes"],
        );
        assert_eq!(
            generate_frontmatter(&metadata),
            "---\nsource: https://example.com/post\nsaved_at: 2024-05-01T10:00:00.000Z\ntags: [rust, notes]\n---\n"
        );
    }

    #[test]
    fn test_empty_fields_omitted() {
        assert_eq!(generate_frontmatter(&Metadata::default()), "---\n---\n");

        let only_tags = Metadata::new("", "", ["a"]);
        assert_eq!(generate_frontmatter(&only_tags), "---\ntags: [a]\n---\n");
    }

    #[test]
    fn test_tags_are_distinct() {
        let metadata = Metadata::new("", "", ["x", "y", "x", "z", "y"]);
        assert_eq!(metadata.tags, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_header_prepends_to_markdown() {
        let metadata = Metadata::new("https://a.b", "", Vec::<String>::new());
        let clip = format!("{}{}", generate_frontmatter(&metadata), "# Title");
        assert_eq!(clip, "---\nsource: https://a.b\n---\n# Title");
    }
}
