//! Rule type for tag-based conversion.

use crate::node::Node;
use crate::service::Scope;
use crate::Result;

/// Type alias for replacement functions.
///
/// Arguments are the element, its rendered children (empty for rules that do
/// not consume them) and the walker scope the element is rendered in.
pub type ReplacementFn = Box<dyn Fn(&Node, &str, &Scope<'_>) -> Result<String> + Send + Sync>;

/// A rule defines how to convert the elements of one or more tags to Markdown
pub struct Rule {
    /// Tags this rule applies to (lower-case)
    tags: Vec<String>,
    /// Whether the walker renders the children before calling the replacement
    uses_content: bool,
    /// Replacement function that generates Markdown
    replacement: ReplacementFn,
}

impl Rule {
    /// Create a rule for the given tags that receives the rendered children
    pub fn new<F>(tags: &[&str], replacement: F) -> Self
    where
        F: Fn(&Node, &str, &Scope<'_>) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            tags: tags.iter().map(|t| t.to_ascii_lowercase()).collect(),
            uses_content: true,
            replacement: Box::new(replacement),
        }
    }

    /// Create a rule that matches a single tag
    pub fn for_tag<F>(tag: &str, replacement: F) -> Self
    where
        F: Fn(&Node, &str, &Scope<'_>) -> Result<String> + Send + Sync + 'static,
    {
        Self::new(&[tag], replacement)
    }

    /// Create a rule that matches multiple tags
    pub fn for_tags<F>(tags: &[&str], replacement: F) -> Self
    where
        F: Fn(&Node, &str, &Scope<'_>) -> Result<String> + Send + Sync + 'static,
    {
        Self::new(tags, replacement)
    }

    /// Mark this rule as reading the element itself rather than its rendered
    /// children, so the walker skips rendering them.
    pub fn ignoring_content(mut self) -> Self {
        self.uses_content = false;
        self
    }

    /// Tags this rule is registered under
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn uses_content(&self) -> bool {
        self.uses_content
    }

    /// Apply this rule's replacement
    pub fn replace(&self, node: &Node, content: &str, scope: &Scope<'_>) -> Result<String> {
        (self.replacement)(node, content, scope)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("tags", &self.tags)
            .field("uses_content", &self.uses_content)
            .finish_non_exhaustive()
    }
}
