//! Utility functions and constants for text processing.

/// Tags dropped before conversion; they never contribute content
pub const NON_CONTENT_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// Heading tags, in level order
pub const HEADING_ELEMENTS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Escape markdown link syntax in a raw text run.
///
/// Only the backslash and square brackets are escaped. Emphasis, heading,
/// table and code markers are left alone.
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' | '[' | ']' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Inverse of [`escape_markdown`]
pub fn unescape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next @ ('\\' | '[' | ']')) => result.push(next),
                Some(next) => {
                    result.push(c);
                    result.push(next);
                }
                None => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Heading level for an `h1`..`h6` tag
pub fn heading_level(tag: &str) -> Option<usize> {
    HEADING_ELEMENTS.iter().position(|t| *t == tag).map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("[link]"), "\\[link\\]");
        assert_eq!(escape_markdown("a\\b"), "a\\\\b");
        assert_eq!(escape_markdown("normal"), "normal");
        assert_eq!(escape_markdown(""), "");
    }

    #[test]
    fn test_escape_leaves_other_markers() {
        let text = "*bold* _it_ `code` # > | ~";
        assert_eq!(escape_markdown(text), text);
    }

    #[test]
    fn test_escape_backslash_before_bracket() {
        // an existing backslash must not swallow the bracket escape
        assert_eq!(escape_markdown("\\["), "\\\\\\[");
    }

    #[test]
    fn test_unescape_inverts_escape() {
        for text in ["plain", "[a](b)", "\\", "\\[x\\]", "]]][[", "\\n and \\t", "ünï[cödé]"] {
            assert_eq!(unescape_markdown(&escape_markdown(text)), text);
        }
    }

    #[test]
    fn test_no_unescaped_brackets_after_escape() {
        let escaped = escape_markdown("x [y] \\[z]");
        let mut backslashes = 0;
        for c in escaped.chars() {
            if c == '[' || c == ']' {
                assert_eq!(backslashes % 2, 1, "unescaped bracket in {escaped:?}");
            }
            backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        }
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("h1"), Some(1));
        assert_eq!(heading_level("h6"), Some(6));
        assert_eq!(heading_level("h7"), None);
        assert_eq!(heading_level("p"), None);
    }
}
