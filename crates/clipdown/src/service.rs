//! ClipdownService - the main entry point for content tree to Markdown conversion.

use serde::{Deserialize, Serialize};

use crate::node::Node;
use crate::rules::{self, Rule, Rules};
use crate::utilities::{escape_markdown, NON_CONTENT_ELEMENTS};
use crate::{ClipdownError, Result};

/// Default recursion cap for the tree walker
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Elements whose own rule adds nothing but line breaks
const CONTAINER_ELEMENTS: &[&str] = &["div", "span"];

/// Options for ClipdownService
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Deepest tree level the walker descends to before giving up and
    /// returning the plain-text fallback
    pub max_depth: usize,

    /// Tags removed, with their whole subtree, before conversion
    pub removed_tags: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            removed_tags: NON_CONTENT_ELEMENTS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// The main service for converting content trees to Markdown
#[derive(Debug)]
pub struct ClipdownService {
    options: ConvertOptions,
    rules: Rules,
}

impl ClipdownService {
    /// Create a new ClipdownService with default options
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    /// Create a ClipdownService with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Convert a selection to Markdown.
    ///
    /// `plain_text` is the selection's plain text. It is used, escaped, when
    /// `root` is absent, when the tree is nothing but that same text, or when
    /// the tree is too deep to walk. Otherwise non-content elements are
    /// removed and the tree is rendered and trimmed.
    pub fn convert(&self, root: Option<&Node>, plain_text: &str) -> String {
        let Some(root) = root else {
            tracing::debug!("no content tree, using plain text");
            return escape_markdown(plain_text);
        };

        if !self.carries_structure(root) && root.text_content().trim() == plain_text.trim() {
            tracing::debug!("content tree is plain text, using plain text");
            return escape_markdown(plain_text);
        }

        self.render_document(root, plain_text)
    }

    /// Convert an HTML fragment to Markdown.
    ///
    /// An empty fragment, or one identical to the plain text, takes the
    /// plain-text path without parsing.
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str, plain_text: &str) -> String {
        let html = html.trim();
        if html.is_empty() || html == plain_text.trim() {
            tracing::debug!(empty = html.is_empty(), "fragment has no markup, using plain text");
            return escape_markdown(plain_text);
        }

        let root = crate::html::parse_html(html);
        self.render_document(&root, plain_text)
    }

    /// Render one node to its Markdown fragment.
    ///
    /// Unlike [`ClipdownService::convert`], nothing is removed or trimmed. A
    /// subtree deeper than the configured limit renders as its escaped text.
    pub fn render_node(&self, node: &Node) -> String {
        self.try_render(node).unwrap_or_else(|err| {
            tracing::warn!(%err, "rendering node as plain text");
            escape_markdown(&node.text_content())
        })
    }

    /// Render one node, failing if the tree exceeds the configured depth
    pub fn try_render(&self, node: &Node) -> Result<String> {
        self.render_at(node, 0)
    }

    /// Render the `li` children of a list; see [`rules::format_list`]
    pub fn format_list(&self, list: &Node, bullet: Option<&str>) -> String {
        rules::format_list(list, bullet, &self.scope(0)).unwrap_or_else(|err| {
            tracing::warn!(%err, "rendering list as plain text");
            escape_markdown(&list.text_content())
        })
    }

    /// Render a table as pipe rows; see [`rules::format_table`]
    pub fn format_table(&self, table: &Node) -> String {
        rules::format_table(table, &self.scope(0)).unwrap_or_else(|err| {
            tracing::warn!(%err, "rendering table as plain text");
            escape_markdown(&table.text_content())
        })
    }

    /// Register a custom rule, replacing the built-in rule for its tags
    pub fn add_rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.add(rule);
        self
    }

    /// Remove elements with this tag (and their content) before conversion
    pub fn remove(&mut self, tag: &str) -> &mut Self {
        let tag = tag.to_ascii_lowercase();
        if !self.options.removed_tags.contains(&tag) {
            self.options.removed_tags.push(tag);
        }
        self
    }

    /// Escape markdown special characters in a string
    pub fn escape(&self, text: &str) -> String {
        escape_markdown(text)
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }

    fn render_document(&self, root: &Node, plain_text: &str) -> String {
        if root.is_element() && self.options.removed_tags.contains(&root.tag_name) {
            return String::new();
        }

        let root = root.without_tags(&self.options.removed_tags);
        match self.try_render(&root) {
            Ok(markdown) => markdown.trim().to_string(),
            Err(err) => {
                tracing::warn!(%err, "falling back to plain text");
                escape_markdown(plain_text)
            }
        }
    }

    /// Whether rendering `root` would add any markup to its text
    fn carries_structure(&self, root: &Node) -> bool {
        if root.has_element_descendants() {
            return true;
        }
        root.is_element()
            && !CONTAINER_ELEMENTS.contains(&root.tag_name.as_str())
            && self.rules.for_tag(&root.tag_name).is_some()
    }

    fn scope(&self, depth: usize) -> Scope<'_> {
        Scope {
            service: self,
            depth,
        }
    }

    fn render_at(&self, node: &Node, depth: usize) -> Result<String> {
        if depth > self.options.max_depth {
            return Err(ClipdownError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }

        if node.is_text() {
            return Ok(escape_markdown(node.value.as_deref().unwrap_or("")));
        }
        if !node.is_element() {
            return Ok(String::new());
        }

        let scope = self.scope(depth);
        let rule = self.rules.for_tag(&node.tag_name);

        let mut content = String::new();
        if rule.map_or(true, Rule::uses_content) {
            for child in node.children() {
                content.push_str(&scope.render(child)?);
            }
        }

        match rule {
            Some(rule) => rule.replace(node, &content, &scope),
            None => {
                tracing::trace!(tag = %node.tag_name, "no rule, passing children through");
                Ok(content)
            }
        }
    }
}

impl Default for ClipdownService {
    fn default() -> Self {
        Self::new()
    }
}

/// The position of an element in a running conversion.
///
/// Rules that render other nodes (list items, table cells) go through
/// [`Scope::render`] so the depth limit keeps applying.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    service: &'a ClipdownService,
    depth: usize,
}

impl Scope<'_> {
    /// Render a node one level below the current element
    pub fn render(&self, node: &Node) -> Result<String> {
        self.service.render_at(node, self.depth + 1)
    }
}
