//! Bulk export of saved clips as one Markdown document.

use serde::{Deserialize, Serialize};

use crate::frontmatter::DELIMITER;
use crate::{ClipdownError, Result};

/// Separator placed between exported clips
pub const CLIP_SEPARATOR: &str = "\n\n---\n\n";

/// A clip as kept by the storage layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SavedClip {
    pub id: String,
    /// Converted Markdown body
    pub content: String,
    pub source: String,
    #[serde(alias = "createdAt", alias = "saved_at")]
    pub saved_at: String,
    pub tags: Vec<String>,
}

impl SavedClip {
    /// Header plus content for one clip. Every key is written, even when
    /// its value is empty.
    pub fn to_markdown(&self) -> String {
        format!(
            "{DELIMITER}\nsource: {}\nsaved_at: {}\ntags: [{}]\n{DELIMITER}\n{}",
            self.source,
            self.saved_at,
            self.tags.join(", "),
            self.content
        )
    }
}

/// Export every clip, in the given order
pub fn export_clips(clips: &[SavedClip]) -> String {
    clips
        .iter()
        .map(SavedClip::to_markdown)
        .collect::<Vec<_>>()
        .join(CLIP_SEPARATOR)
}

/// Export the clips whose id is listed; an empty list exports everything
pub fn export_selected(clips: &[SavedClip], ids: &[&str]) -> String {
    if ids.is_empty() {
        return export_clips(clips);
    }

    let selected: Vec<SavedClip> = clips
        .iter()
        .filter(|clip| ids.contains(&clip.id.as_str()))
        .cloned()
        .collect();
    export_clips(&selected)
}

/// Parse a JSON array of saved clips
pub fn clips_from_json(json: &str) -> Result<Vec<SavedClip>> {
    serde_json::from_str(json).map_err(|err| ClipdownError::InvalidInput(err.to_string()))
}
