//! HTML markup fragments for tree tables.
//!
//! Class names are stable hooks for external stylesheets.

pub(crate) const CONTAINER_START: &str =
    r#"<div class="tree-container"><table class="tree-table"><tbody>"#;
pub(crate) const CONTAINER_END: &str = "</tbody></table></div>";

pub(crate) const STRUCTURE_CELL_START: &str = r#"<tr><td class="tree-structure">"#;
pub(crate) const NAME_START: &str = r#"<span class="tree-name">"#;
pub(crate) const COMMENT_CELL_START: &str = r#"</span></td><td class="tree-comment-cell">"#;
pub(crate) const ROW_END: &str = "</td></tr>";

pub(crate) const INDENT: &str = r#"<span class="tree-indent"></span>"#;
pub(crate) const INDENT_VLINE: &str = r#"<span class="tree-indent tree-vline"></span>"#;
pub(crate) const INDENT_CORNER: &str = r#"<span class="tree-indent tree-corner"></span>"#;
pub(crate) const INDENT_BRANCH: &str = r#"<span class="tree-indent tree-branch"></span>"#;

/// Escape `&`, `<`, `>` and `"` for use in HTML text.
///
/// # Examples
///
/// ```
/// use rw_tree::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("plain.txt"), "plain.txt");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
