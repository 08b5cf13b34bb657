//! Code block language detection.
//!
//! Class names such as `language-rust`, `lang-py` or `hljs-js` are only
//! accepted when the extracted token is a known language identifier. An
//! explicit `data-language` attribute is taken as is.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::Node;

/// Language identifiers accepted from class names
pub const KNOWN_LANGUAGES: &[&str] = &[
    "javascript", "js", "typescript", "ts", "python", "py", "java", "cpp", "c",
    "csharp", "cs", "go", "rust", "ruby", "php", "swift", "kotlin", "scala",
    "html", "css", "scss", "sass", "less", "json", "yaml", "yml", "xml",
    "sql", "bash", "shell", "sh", "zsh", "powershell", "dockerfile",
    "markdown", "md", "plaintext", "text", "diff", "git",
];

static CLASS_LANGUAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:language-|lang-|hljs-)?([A-Za-z0-9_-]+)$").expect("valid class pattern")
});

/// Check whether a token is a known language identifier (case-insensitive)
pub fn is_known_language(token: &str) -> bool {
    KNOWN_LANGUAGES
        .iter()
        .any(|lang| lang.eq_ignore_ascii_case(token))
}

/// Guess the fence language of a `pre` element.
///
/// Returns an empty string when there is no hint, or when the `pre` has no
/// nested `code` element.
pub fn detect_language(pre: &Node) -> String {
    let Some(code) = pre.find_descendant("code") else {
        return String::new();
    };

    for class in pre.classes().chain(code.classes()) {
        if let Some(token) = language_from_class(class) {
            return token.to_string();
        }
    }

    pre.non_empty_attr("data-language")
        .or_else(|| code.non_empty_attr("data-language"))
        .unwrap_or_default()
        .to_string()
}

fn language_from_class(class: &str) -> Option<&str> {
    let token = CLASS_LANGUAGE.captures(class)?.get(1)?.as_str();
    is_known_language(token).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pre_with_code(pre_attrs: Vec<(&str, &str)>, code_attrs: Vec<(&str, &str)>) -> Node {
        Node::element_with_attrs("pre", pre_attrs).with_child(
            Node::element_with_attrs("code", code_attrs).with_child(Node::text("x = 1")),
        )
    }

    #[test]
    fn test_language_prefix() {
        let pre = pre_with_code(vec![], vec![("class", "language-python")]);
        assert_eq!(detect_language(&pre), "python");
    }

    #[test]
    fn test_lang_and_hljs_prefixes() {
        assert_eq!(detect_language(&pre_with_code(vec![], vec![("class", "lang-rust")])), "rust");
        assert_eq!(detect_language(&pre_with_code(vec![], vec![("class", "hljs-go")])), "go");
    }

    #[test]
    fn test_bare_class() {
        let pre = pre_with_code(vec![], vec![("class", "hljs sql")]);
        assert_eq!(detect_language(&pre), "sql");
    }

    #[test]
    fn test_case_preserved() {
        let pre = pre_with_code(vec![], vec![("class", "language-TypeScript")]);
        assert_eq!(detect_language(&pre), "TypeScript");
    }

    #[test]
    fn test_pre_classes_checked_first() {
        let pre = pre_with_code(vec![("class", "lang-bash")], vec![("class", "language-json")]);
        assert_eq!(detect_language(&pre), "bash");
    }

    #[test]
    fn test_unknown_class_rejected() {
        let pre = pre_with_code(vec![("class", "highlight")], vec![("class", "language-brainfuck")]);
        assert_eq!(detect_language(&pre), "");
    }

    #[test]
    fn test_data_language_trusted() {
        let pre = pre_with_code(vec![], vec![("class", "wrapper"), ("data-language", "brainfuck")]);
        assert_eq!(detect_language(&pre), "brainfuck");

        let pre = pre_with_code(vec![("data-language", "Elixir")], vec![]);
        assert_eq!(detect_language(&pre), "Elixir");
    }

    #[test]
    fn test_class_beats_data_language() {
        let pre = pre_with_code(vec![("data-language", "ruby")], vec![("class", "language-js")]);
        assert_eq!(detect_language(&pre), "js");
    }

    #[test]
    fn test_no_code_element() {
        let pre = Node::element_with_attrs("pre", vec![("class", "language-python"), ("data-language", "python")]);
        assert_eq!(detect_language(&pre), "");
    }

    #[test]
    fn test_empty_prefix_is_not_a_language() {
        let pre = pre_with_code(vec![], vec![("class", "language-")]);
        assert_eq!(detect_language(&pre), "");
    }
}
