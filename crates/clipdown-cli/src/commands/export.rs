//! `clipdown export` command implementation.

use std::path::PathBuf;

use clap::Args;
use clipdown::{clips_from_json, export_selected};

use super::read_input;
use crate::error::CliError;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// JSON array of saved clips (`-` for stdin).
    clips: PathBuf,

    /// Only export the clip with this id (repeatable).
    #[arg(long = "id")]
    ids: Vec<String>,
}

impl ExportArgs {
    /// Execute the export command, returning the Markdown to print.
    pub(crate) fn execute(self) -> Result<String, CliError> {
        let json = read_input(Some(self.clips.as_path()))?;
        self.render(&json)
    }

    fn render(&self, json: &str) -> Result<String, CliError> {
        let clips = clips_from_json(json)?;
        let ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        tracing::debug!(clips = clips.len(), selected = ids.len(), "exporting clips");
        Ok(export_selected(&clips, &ids))
    }
}
