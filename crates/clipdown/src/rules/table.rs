//! Table formatting.

use crate::node::Node;
use crate::service::Scope;
use crate::Result;

const SEPARATOR_CELL: &str = "---";

/// Render a table as pipe-delimited rows.
///
/// Rows are all `tr` descendants in document order, so `thead`/`tbody`
/// wrappers are transparent. The first row is always treated as the header
/// and followed by a separator row with one `---` per header cell.
pub fn format_table(table: &Node, scope: &Scope<'_>) -> Result<String> {
    let rows: Vec<&Node> = table.descendants().filter(|n| n.is_tag("tr")).collect();
    if rows.is_empty() {
        return Ok(String::new());
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (index, row) in rows.into_iter().enumerate() {
        let cells = row
            .descendants()
            .filter(|n| n.is_tag("th") || n.is_tag("td"))
            .map(|cell| scope.render(cell).map(|s| s.trim().to_string()))
            .collect::<Result<Vec<_>>>()?;

        lines.push(format!("| {} |", cells.join(" | ")));

        if index == 0 {
            let separator = vec![SEPARATOR_CELL; cells.len()];
            lines.push(format!("| {} |", separator.join(" | ")));
        }
    }

    Ok(lines.join("\n"))
}
