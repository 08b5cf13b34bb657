//! Content tree captured from a user selection.
//!
//! The host capture layer (a browser selection, an HTML parser, a CDP dump)
//! converts whatever it holds into this structure. The converter only reads it;
//! the one mutation it performs is on its own filtered copy (see
//! [`Node::without_tags`]).
//!
//! Selections can nest arbitrarily deep, so every whole-tree operation here
//! (copying, text extraction, traversal, drop) works with an explicit stack.

use indexmap::IndexMap;

/// Node kinds the converter distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Element node (DOM nodeType = 1)
    Element,
    /// Text node (DOM nodeType = 3)
    Text,
    /// Comments, processing instructions, doctypes: never rendered
    Other,
}

impl From<u32> for NodeKind {
    fn from(value: u32) -> Self {
        match value {
            1 => NodeKind::Element,
            3 => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }
}

/// A node of the captured content tree.
#[derive(Debug, PartialEq)]
pub struct Node {
    /// What kind of node this is
    pub kind: NodeKind,

    /// Lower-cased tag name; empty for non-element nodes
    pub tag_name: String,

    /// Character data for text (and other) nodes
    pub value: Option<String>,

    /// Attributes in source order
    pub attributes: IndexMap<String, String>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            kind: NodeKind::Element,
            tag_name: tag_name.to_ascii_lowercase(),
            value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            kind: NodeKind::Text,
            tag_name: String::new(),
            value: Some(content.to_string()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a comment-like node that carries data but is never rendered
    pub fn other(content: &str) -> Self {
        Self {
            kind: NodeKind::Other,
            tag_name: String::new(),
            value: Some(content.to_string()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Whether this node is an element with the given (lower-case) tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.is_element() && self.tag_name == tag
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.attributes.get(name) {
            return Some(value.as_str());
        }
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Get an attribute value, treating an empty value as absent
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    /// Set an attribute, replacing an existing one of the same name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let key = self
            .attributes
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| name.to_ascii_lowercase());
        self.attributes.insert(key, value.to_string());
    }

    /// Whitespace-separated entries of the `class` attribute
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder-style variant of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Concatenated character data of all descendant text nodes
    pub fn text_content(&self) -> String {
        match self.kind {
            NodeKind::Text => self.value.clone().unwrap_or_default(),
            NodeKind::Other => String::new(),
            NodeKind::Element => {
                let mut out = String::new();
                let mut stack: Vec<&Node> = self.children.iter().rev().collect();
                while let Some(node) = stack.pop() {
                    match node.kind {
                        NodeKind::Text => out.push_str(node.value.as_deref().unwrap_or("")),
                        NodeKind::Element => stack.extend(node.children.iter().rev()),
                        NodeKind::Other => {}
                    }
                }
                out
            }
        }
    }

    /// Descendant elements in document order (the node itself excluded)
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First descendant element with the given tag, in document order
    pub fn find_descendant(&self, tag: &str) -> Option<&Node> {
        self.descendants().find(|n| n.is_tag(tag))
    }

    /// Whether any descendant is an element
    pub fn has_element_descendants(&self) -> bool {
        self.descendants().next().is_some()
    }

    /// Copy of this subtree with every element whose tag is in `tags` removed,
    /// together with everything below it.
    ///
    /// Works with an explicit stack so that the filter itself does not
    /// recurse, whatever the tree depth.
    pub fn without_tags(&self, tags: &[String]) -> Node {
        let kept = |child: &&Node| !(child.is_element() && tags.contains(&child.tag_name));

        let mut root = self.shallow_copy();
        let mut stack: Vec<(&Node, &mut Node)> = vec![(self, &mut root)];
        while let Some((source, target)) = stack.pop() {
            target.children = source.children().filter(kept).map(Node::shallow_copy).collect();
            stack.extend(source.children().filter(kept).zip(target.children.iter_mut()));
        }
        root
    }

    /// This node without its children
    fn shallow_copy(&self) -> Node {
        Node {
            kind: self.kind,
            tag_name: self.tag_name.clone(),
            value: self.value.clone(),
            attributes: self.attributes.clone(),
            children: Vec::new(),
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        self.without_tags(&[])
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Pre-order iterator over the element descendants of a node.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.iter().rev());
            if node.is_element() {
                return Some(node);
            }
        }
        None
    }
}
