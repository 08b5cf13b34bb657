//! List formatting.

use crate::node::Node;
use crate::service::Scope;
use crate::Result;

/// Render the `li` children of a list, one item per line.
///
/// With a `bullet`, every item is prefixed by it; without one, items are
/// numbered from 1 (any `start` attribute is ignored). Nested lists are not
/// indented.
pub fn format_list(list: &Node, bullet: Option<&str>, scope: &Scope<'_>) -> Result<String> {
    let mut lines = Vec::new();

    for (index, item) in list.element_children().filter(|c| c.is_tag("li")).enumerate() {
        let content = scope.render(item)?;
        let line = match bullet {
            Some(bullet) => format!("{bullet}{}", content.trim()),
            None => format!("{}. {}", index + 1, content.trim()),
        };
        lines.push(line);
    }

    Ok(lines.join("\n"))
}
