//! Built-in rules for the clipped Markdown dialect.

use super::{format_list, format_table, Rule};
use crate::language::detect_language;
use crate::node::Node;
use crate::utilities::{heading_level, HEADING_ELEMENTS};

/// Bullet used for unordered list items
pub const BULLET: &str = "- ";

/// Image alt text used when the element has none
const DEFAULT_ALT: &str = "image";

/// Create all built-in rules
pub fn markdown_rules() -> Vec<Rule> {
    vec![
        heading_rule(),
        strong_rule(),
        emphasis_rule(),
        underline_rule(),
        strikethrough_rule(),
        code_rule(),
        highlight_rule(),
        link_rule(),
        image_rule(),
        unordered_list_rule(),
        ordered_list_rule(),
        list_item_rule(),
        paragraph_rule(),
        line_break_rule(),
        horizontal_rule(),
        blockquote_rule(),
        code_block_rule(),
        table_rule(),
        div_rule(),
        span_rule(),
    ]
}

fn heading_rule() -> Rule {
    Rule::for_tags(HEADING_ELEMENTS, |node, content, _| {
        let level = heading_level(&node.tag_name).unwrap_or(1);
        Ok(format!("\n{} {}\n\n", "#".repeat(level), content.trim()))
    })
}

fn strong_rule() -> Rule {
    Rule::for_tags(&["strong", "b"], |_, content, _| {
        Ok(format!("**{}**", content.trim()))
    })
}

fn emphasis_rule() -> Rule {
    Rule::for_tags(&["em", "i"], |_, content, _| Ok(format!("*{}*", content.trim())))
}

// No Markdown underline; kept as inline HTML with its content untouched.
fn underline_rule() -> Rule {
    Rule::for_tag("u", |_, content, _| Ok(format!("<u>{content}</u>")))
}

fn strikethrough_rule() -> Rule {
    Rule::for_tags(&["s", "del", "strike"], |_, content, _| {
        Ok(format!("~~{}~~", content.trim()))
    })
}

fn code_rule() -> Rule {
    Rule::for_tag("code", |node, _, _| Ok(format!("`{}`", node.text_content())))
        .ignoring_content()
}

fn highlight_rule() -> Rule {
    Rule::for_tag("mark", |_, content, _| Ok(format!("=={}==", content.trim())))
}

fn link_rule() -> Rule {
    Rule::for_tag("a", |node, content, _| {
        let href = node.attr("href").unwrap_or("");
        let text = match content.trim() {
            "" => href,
            trimmed => trimmed,
        };

        if href.is_empty() || href.starts_with("javascript:") {
            return Ok(text.to_string());
        }

        Ok(format!("[{text}]({href})"))
    })
}

fn image_rule() -> Rule {
    Rule::for_tag("img", |node, _, _| {
        let Some(src) = node.non_empty_attr("src") else {
            return Ok(String::new());
        };
        let alt = node.non_empty_attr("alt").unwrap_or(DEFAULT_ALT);
        Ok(format!("![{alt}]({src})"))
    })
    .ignoring_content()
}

fn unordered_list_rule() -> Rule {
    Rule::for_tag("ul", |node, _, scope| {
        Ok(format!("\n{}\n", format_list(node, Some(BULLET), scope)?))
    })
    .ignoring_content()
}

fn ordered_list_rule() -> Rule {
    Rule::for_tag("ol", |node, _, scope| {
        Ok(format!("\n{}\n", format_list(node, None, scope)?))
    })
    .ignoring_content()
}

// The list formatter supplies the prefix.
fn list_item_rule() -> Rule {
    Rule::for_tag("li", |_, content, _| Ok(content.to_string()))
}

fn paragraph_rule() -> Rule {
    Rule::for_tag("p", |_, content, _| Ok(format!("\n{}\n\n", content.trim())))
}

fn line_break_rule() -> Rule {
    Rule::for_tag("br", |_, _, _| Ok("\n".to_string())).ignoring_content()
}

fn horizontal_rule() -> Rule {
    Rule::for_tag("hr", |_, _, _| Ok("\n---\n\n".to_string())).ignoring_content()
}

fn blockquote_rule() -> Rule {
    Rule::for_tag("blockquote", |_, content, _| {
        let quoted: Vec<String> = content
            .trim()
            .split('\n')
            .map(|line| format!("> {line}"))
            .collect();
        Ok(format!("\n{}\n\n", quoted.join("\n")))
    })
}

fn code_block_rule() -> Rule {
    Rule::for_tag("pre", |node, _, _| {
        let code = node
            .find_descendant("code")
            .map(Node::text_content)
            .unwrap_or_else(|| node.text_content());
        let language = detect_language(node);

        Ok(format!("\n```{language}\n{}\n```\n\n", code.trim()))
    })
    .ignoring_content()
}

fn table_rule() -> Rule {
    Rule::for_tag("table", |node, _, scope| {
        Ok(format!("\n{}\n", format_table(node, scope)?))
    })
    .ignoring_content()
}

fn div_rule() -> Rule {
    Rule::for_tag("div", |_, content, _| Ok(format!("{content}\n")))
}

fn span_rule() -> Rule {
    Rule::for_tag("span", |_, content, _| Ok(content.to_string()))
}
