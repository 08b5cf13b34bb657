//! # clipdown
//!
//! Convert a clipped rich-content selection into plain Markdown.
//!
//! The converter takes the content tree of a user selection together with the
//! selection's plain text, and renders a small, lossy Markdown dialect:
//! ATX headings, `**bold**`, `*italic*`, `` `code` ``, `~~strike~~`,
//! `==highlight==`, `<u>underline</u>`, links, images, flat lists, quotes,
//! fenced code blocks and pipe tables.
//!
//! ## Design
//!
//! - **Tag dispatch table**: every tag maps to one [`Rule`]; tags without a
//!   rule pass their children through unchanged.
//! - **Pure**: converting the same tree twice yields the same Markdown.
//! - **Never fails**: malformed input degrades to the plain-text fallback.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use clipdown::{convert, Node};
//!
//! let p = Node::element("p")
//!     .with_child(Node::text("Hello "))
//!     .with_child(Node::element("strong").with_child(Node::text("world")));
//!
//! assert_eq!(convert(Some(&p), ""), "Hello **world**");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use clipdown::ClipdownService;
//!
//! let service = ClipdownService::new();
//! let markdown = service.convert_html("<ul><li>a</li><li>b</li></ul>", "a b");
//! assert_eq!(markdown, "- a\n- b");
//! ```

pub mod export;
pub mod frontmatter;
#[cfg(feature = "html")]
pub mod html;
pub mod language;
pub mod node;
mod rules;
mod service;
mod utilities;

use once_cell::sync::Lazy;

pub use export::{clips_from_json, export_clips, export_selected, SavedClip};
pub use frontmatter::{generate_frontmatter, Metadata};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use language::{detect_language, is_known_language};
pub use node::{Node, NodeKind};
pub use rules::{ReplacementFn, Rule, Rules};
pub use service::{ClipdownService, ConvertOptions, Scope, DEFAULT_MAX_DEPTH};
pub use utilities::*;

/// Error type for clipdown operations
#[derive(Debug, thiserror::Error)]
pub enum ClipdownError {
    #[error("Content tree deeper than {limit} levels")]
    DepthExceeded { limit: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ClipdownError>;

static DEFAULT_SERVICE: Lazy<ClipdownService> = Lazy::new(ClipdownService::new);

/// Convert a content tree to Markdown with the default options.
///
/// See [`ClipdownService::convert`].
pub fn convert(root: Option<&Node>, plain_text: &str) -> String {
    DEFAULT_SERVICE.convert(root, plain_text)
}

/// Render a single node with the default rule table.
///
/// See [`ClipdownService::render_node`].
pub fn render_node(node: &Node) -> String {
    DEFAULT_SERVICE.render_node(node)
}

/// Convert an HTML fragment to Markdown with the default options.
#[cfg(feature = "html")]
pub fn convert_html(html: &str, plain_text: &str) -> String {
    DEFAULT_SERVICE.convert_html(html, plain_text)
}
