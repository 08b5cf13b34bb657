//! HTML parsing support.
//!
//! Turns a captured HTML fragment (for example the `innerHTML` of a cloned
//! selection range) into the [`Node`] tree used by the converter.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a Node tree.
///
/// The returned root is the parser's `html` wrapper element, which has no
/// rule and therefore only passes its children through.
///
/// # Example
///
/// ```rust
/// use clipdown::{parse_html, ClipdownService};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let service = ClipdownService::new();
/// let markdown = service.convert(Some(&node), "Hello World");
/// assert_eq!(markdown, "# Hello *World*");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our Node structure.
///
/// Fragments can nest arbitrarily deep, so the tree is built with an explicit
/// stack of (source element, target node) pairs.
fn scraper_to_node(element: ElementRef) -> Node {
    let mut root = element_node(element);
    let mut stack: Vec<(ElementRef, &mut Node)> = vec![(element, &mut root)];

    while let Some((source, target)) = stack.pop() {
        let mut elements = Vec::new();
        for child in source.children() {
            match child.value() {
                ScraperNode::Text(text) => target.add_child(Node::text(&text.text)),
                ScraperNode::Comment(comment) => target.add_child(Node::other(&comment.comment)),
                ScraperNode::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        target.add_child(element_node(child_element));
                        elements.push(child_element);
                    }
                }
                _ => {}
            }
        }

        let targets = target.children.iter_mut().filter(|c| c.is_element());
        stack.extend(elements.into_iter().zip(targets));
    }

    root
}

/// Element node with the source's name and attributes, without children
fn element_node(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    Node::element_with_attrs(element.value().name(), attrs)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{convert_html, NodeKind};

    #[test]
    fn test_parse_simple_html() {
        let node = parse_html("<p>Hello World</p>");
        assert!(node.is_element());
        assert_eq!(node.tag_name, "html");
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_parse_keeps_attributes_and_comments() {
        let node = parse_html(r#"<a href="/x" class="btn">go</a><!-- note -->"#);
        let a = node.find_descendant("a").unwrap();
        assert_eq!(a.attr("href"), Some("/x"));
        assert_eq!(a.attr("class"), Some("btn"));
        assert!(node.children().any(|c| c.kind == NodeKind::Other));
    }

    #[test]
    fn test_convert_html_paragraph() {
        let result = convert_html("<p>Hello <strong>world</strong></p>", "Hello world");
        assert_eq!(result, "Hello **world**");
    }

    #[test]
    fn test_convert_html_same_as_text() {
        assert_eq!(convert_html(" plain [text] ", "plain [text]"), "plain \\[text\\]");
        assert_eq!(convert_html("", "only text"), "only text");
    }

    #[test]
    fn test_convert_html_drops_scripts() {
        let html = "<div><p>keep</p><script>var a = [1];</script><style>.x{}</style></div>";
        assert_eq!(convert_html(html, "keep"), "keep");
    }

    #[test]
    fn test_convert_html_table_with_sections() {
        let html = "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
                    <tbody><tr><td>1</td><td>2</td></tr></tbody></table>";
        assert_eq!(convert_html(html, "A B 1 2"), "| A | B |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn test_convert_html_code_block() {
        let html = r#"<pre class="highlight"><code class="hljs language-rust">fn main() { let v = [1]; }
</code></pre>"#;
        assert_eq!(
            convert_html(html, ""),
            "```rust\nfn main() { let v = [1]; }\n```"
        );
    }

    #[test]
    fn test_parse_deeply_nested_fragment() {
        let depth = 5_000;
        let html = format!("{}deep{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let node = parse_html(&html);
        assert_eq!(node.text_content(), "deep");
        assert_eq!(node.descendants().count(), depth);
        assert_eq!(convert_html(&html, "fallback"), "fallback");
    }
}
