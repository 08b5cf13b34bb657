//! Rule table for content tree to Markdown conversion.

mod list;
mod markdown;
mod rule;
mod table;

pub use list::format_list;
pub use markdown::markdown_rules;
pub use rule::{ReplacementFn, Rule};
pub use table::format_table;

use std::sync::Arc;

use indexmap::IndexMap;

/// Lookup table from tag name to the rule that renders it.
///
/// Tags without an entry are pass-through containers: the walker keeps their
/// rendered children and drops only the element itself.
#[derive(Debug)]
pub struct Rules {
    by_tag: IndexMap<String, Arc<Rule>>,
}

impl Rules {
    /// Create a new Rules instance with the built-in Markdown rules
    pub fn new() -> Self {
        let mut rules = Self::empty();
        for rule in markdown_rules() {
            rules.add(rule);
        }
        rules
    }

    /// A table without any rule: every element passes its children through
    pub fn empty() -> Self {
        Self {
            by_tag: IndexMap::new(),
        }
    }

    /// Register a rule under each of its tags, replacing earlier entries
    pub fn add(&mut self, rule: Rule) {
        let rule = Arc::new(rule);
        for tag in rule.tags() {
            self.by_tag.insert(tag.clone(), Arc::clone(&rule));
        }
    }

    /// Find the rule for a tag
    pub fn for_tag(&self, tag: &str) -> Option<&Rule> {
        self.by_tag.get(tag).map(Arc::as_ref)
    }

    /// Registered tags, in registration order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.by_tag.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tags_registered() {
        let rules = Rules::new();
        for tag in [
            "h1", "h6", "strong", "b", "em", "i", "u", "s", "del", "strike", "code", "mark", "a",
            "img", "ul", "ol", "li", "p", "br", "hr", "blockquote", "pre", "table", "div", "span",
        ] {
            assert!(rules.for_tag(tag).is_some(), "missing rule for {tag}");
        }
        assert!(rules.for_tag("section").is_none());
        assert!(rules.for_tag("td").is_none());
    }

    #[test]
    fn test_add_overrides_existing_tag() {
        let mut rules = Rules::new();
        let before = rules.len();
        rules.add(Rule::for_tag("mark", |_, content, _| Ok(format!("<mark>{content}</mark>"))));
        assert_eq!(rules.len(), before);
        assert_eq!(rules.tags().filter(|t| *t == "mark").count(), 1);
    }

    #[test]
    fn test_shared_rule_for_many_tags() {
        let mut rules = Rules::empty();
        rules.add(Rule::for_tags(&["S", "del"], |_, c, _| Ok(c.to_string())));
        assert_eq!(rules.tags().collect::<Vec<_>>(), vec!["s", "del"]);
        assert!(!rules.is_empty());
    }
}
