//! `clipdown convert` command implementation.

use std::path::PathBuf;

use clap::Args;
use clipdown::{generate_frontmatter, ClipdownService, ConvertOptions, Metadata};

use super::read_input;
use crate::error::CliError;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// HTML fragment to convert (default: stdin).
    input: Option<PathBuf>,

    /// Plain text of the selection, used when the HTML carries no markup.
    #[arg(short, long, default_value = "")]
    text: String,

    /// Prepend a metadata header.
    #[arg(short, long)]
    frontmatter: bool,

    /// Source URL for the metadata header.
    #[arg(long, requires = "frontmatter")]
    source: Option<String>,

    /// Save timestamp (ISO-8601) for the metadata header.
    #[arg(long, requires = "frontmatter")]
    saved_at: Option<String>,

    /// Tag for the metadata header (repeatable).
    #[arg(long = "tag", requires = "frontmatter")]
    tags: Vec<String>,

    /// Maximum tree depth before falling back to the plain text.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Additional tag to drop with its content (repeatable).
    #[arg(long = "remove")]
    removed_tags: Vec<String>,
}

impl ConvertArgs {
    /// Execute the convert command, returning the Markdown to print.
    pub(crate) fn execute(self) -> Result<String, CliError> {
        let html = read_input(self.input.as_deref())?;
        Ok(self.render(&html))
    }

    fn render(&self, html: &str) -> String {
        let mut options = ConvertOptions::default();
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }

        let mut service = ClipdownService::with_options(options);
        for tag in &self.removed_tags {
            service.remove(tag);
        }

        let markdown = service.convert_html(html, &self.text);
        tracing::debug!(bytes = markdown.len(), "converted selection");

        if !self.frontmatter {
            return markdown;
        }

        let metadata = Metadata::new(
            self.source.clone().unwrap_or_default(),
            self.saved_at.clone().unwrap_or_default(),
            self.tags.iter().cloned(),
        );
        format!("{}{markdown}", generate_frontmatter(&metadata))
    }
}
