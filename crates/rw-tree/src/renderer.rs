//! HTML table rendering for parsed trees.
//!
//! The forest is flattened into display rows in pre-order. Each row records
//! which ancestor columns still need a vertical line, and the emitter turns
//! those flags into indentation spans.

use std::fmt::Write;

use crate::html::{
    COMMENT_CELL_START, CONTAINER_END, CONTAINER_START, INDENT, INDENT_BRANCH, INDENT_CORNER,
    INDENT_VLINE, NAME_START, ROW_END, STRUCTURE_CELL_START, escape_html,
};
use crate::node::TreeNode;

/// One display line of the tree table.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FlattenedRow<'a> {
    depth: usize,
    name: &'a str,
    is_folder: bool,
    comment: Option<&'a str>,
    /// One flag per ancestor level: `true` draws a continuation line.
    vertical_lines: Vec<bool>,
    /// Last entry among its siblings.
    is_last: bool,
}

/// Render a forest as an HTML table.
///
/// Produces one `<tr>` per node in pre-order. Names and comments are escaped;
/// folders are wrapped in `<strong>`.
///
/// # Examples
///
/// ```
/// use rw_tree::{TreeNode, render_tree_html};
///
/// let forest = vec![TreeNode::new("docs/").with_children(vec![
///     TreeNode::new("index.md").with_depth(1),
/// ])];
/// let html = render_tree_html(&forest);
/// assert_eq!(html.matches("<tr>").count(), 2);
/// assert!(html.contains("<strong>docs/</strong>"));
/// assert!(html.contains(r#"<span class="tree-indent tree-corner"></span>"#));
/// ```
pub fn render_tree_html(nodes: &[TreeNode]) -> String {
    let rows = flatten_tree(nodes);

    let mut out = String::from(CONTAINER_START);
    for row in &rows {
        render_row(row, &mut out);
    }
    out.push_str(CONTAINER_END);

    tracing::debug!(rows = rows.len(), bytes = out.len(), "Rendered tree table");

    out
}

/// Flatten a forest into pre-order rows.
fn flatten_tree(nodes: &[TreeNode]) -> Vec<FlattenedRow<'_>> {
    let mut rows = Vec::new();
    let mut vertical_lines = Vec::new();
    flatten_into(nodes, 0, &mut vertical_lines, &mut rows);
    rows
}

fn flatten_into<'a>(
    nodes: &'a [TreeNode],
    depth: usize,
    vertical_lines: &mut Vec<bool>,
    rows: &mut Vec<FlattenedRow<'a>>,
) {
    for (index, node) in nodes.iter().enumerate() {
        let is_last = index + 1 == nodes.len();

        rows.push(FlattenedRow {
            depth,
            name: &node.name,
            is_folder: node.is_folder,
            comment: node.comment.as_deref(),
            vertical_lines: vertical_lines.clone(),
            is_last,
        });

        if !node.children.is_empty() {
            // Descendants of a non-last sibling need a line down to the next sibling
            vertical_lines.push(!is_last);
            flatten_into(&node.children, depth + 1, vertical_lines, rows);
            vertical_lines.pop();
        }
    }
}

fn render_row(row: &FlattenedRow<'_>, out: &mut String) {
    out.push_str(STRUCTURE_CELL_START);

    for &has_line in &row.vertical_lines {
        out.push_str(if has_line { INDENT_VLINE } else { INDENT });
    }
    if row.depth > 0 {
        out.push_str(if row.is_last {
            INDENT_CORNER
        } else {
            INDENT_BRANCH
        });
    }

    out.push_str(NAME_START);
    if row.is_folder {
        write!(out, "<strong>{}</strong>", escape_html(row.name)).unwrap();
    } else {
        out.push_str(&escape_html(row.name));
    }

    out.push_str(COMMENT_CELL_START);
    if let Some(comment) = row.comment.filter(|comment| !comment.is_empty()) {
        write!(
            out,
            r#"<span class="tree-comment">{}</span>"#,
            escape_html(comment)
        )
        .unwrap();
    }
    out.push_str(ROW_END);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tree;
    use pretty_assertions::assert_eq;

    fn leaf(name: &str, depth: usize) -> TreeNode {
        TreeNode::new(name).with_depth(depth)
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten_tree(&[]).is_empty());
    }

    #[test]
    fn test_flatten_pre_order() {
        let forest = parse_tree("a/\n├── b/\n│   └── c\n└── d\ne");
        let names: Vec<&str> = flatten_tree(&forest).iter().map(|row| row.name).collect();
        assert_eq!(names, ["a/", "b/", "c", "d", "e"]);
    }

    #[test]
    fn test_flatten_rows() {
        let forest = parse_tree("a/\n├── b/\n│   └── c # note\n└── d");
        let rows = flatten_tree(&forest);

        assert_eq!(
            rows,
            vec![
                FlattenedRow {
                    depth: 0,
                    name: "a/",
                    is_folder: true,
                    comment: None,
                    vertical_lines: vec![],
                    is_last: true,
                },
                FlattenedRow {
                    depth: 1,
                    name: "b/",
                    is_folder: true,
                    comment: None,
                    vertical_lines: vec![false],
                    is_last: false,
                },
                FlattenedRow {
                    depth: 2,
                    name: "c",
                    is_folder: false,
                    comment: Some("note"),
                    vertical_lines: vec![false, true],
                    is_last: true,
                },
                FlattenedRow {
                    depth: 1,
                    name: "d",
                    is_folder: false,
                    comment: None,
                    vertical_lines: vec![false],
                    is_last: true,
                },
            ]
        );
    }

    #[test]
    fn test_flatten_vertical_line_for_non_last_parent() {
        let forest = vec![
            TreeNode::new("first/").with_children(vec![leaf("x", 1)]),
            TreeNode::new("second/").with_children(vec![leaf("y", 1)]),
        ];
        let rows = flatten_tree(&forest);

        assert_eq!(rows[1].name, "x");
        assert_eq!(rows[1].vertical_lines, vec![true]);
        assert_eq!(rows[3].name, "y");
        assert_eq!(rows[3].vertical_lines, vec![false]);
    }

    #[test]
    fn test_flatten_uses_traversal_depth() {
        let forest = parse_tree("a\n        └── deep");
        let rows = flatten_tree(&forest);
        assert_eq!(rows[1].depth, 1);
        assert_eq!(rows[1].vertical_lines.len(), 1);
    }

    #[test]
    fn test_render_empty() {
        let html = render_tree_html(&[]);
        assert_eq!(
            html,
            r#"<div class="tree-container"><table class="tree-table"><tbody></tbody></table></div>"#
        );
        assert_eq!(html.matches("<tr>").count(), 0);
    }

    #[test]
    fn test_render_markup() {
        let forest = parse_tree("a/\n└── b # note");
        let html = render_tree_html(&forest);

        let expected = concat!(
            r#"<div class="tree-container"><table class="tree-table"><tbody>"#,
            r#"<tr><td class="tree-structure"><span class="tree-name"><strong>a/</strong></span></td>"#,
            r#"<td class="tree-comment-cell"></td></tr>"#,
            r#"<tr><td class="tree-structure"><span class="tree-indent"></span>"#,
            r#"<span class="tree-indent tree-corner"></span><span class="tree-name">b</span></td>"#,
            r#"<td class="tree-comment-cell"><span class="tree-comment">note</span></td></tr>"#,
            "</tbody></table></div>",
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_render_branch_and_vline() {
        let forest = parse_tree("r/\n├── a/\n│   └── b\n└── c");
        let html = render_tree_html(&forest);

        assert!(html.contains(concat!(
            r#"<span class="tree-indent"></span><span class="tree-indent tree-branch"></span>"#,
            r#"<span class="tree-name"><strong>a/</strong></span>"#
        )));
        assert!(html.contains(concat!(
            r#"<span class="tree-indent"></span><span class="tree-indent tree-vline"></span>"#,
            r#"<span class="tree-indent tree-corner"></span><span class="tree-name">b</span>"#
        )));
    }

    #[test]
    fn test_render_row_count_matches_node_count() {
        let forest = parse_tree("x/\n├── a/\n│   ├── b\n│   └── c\n│\n└── d/\n    └── e\ny");
        let total: usize = forest.iter().map(TreeNode::node_count).sum();
        let html = render_tree_html(&forest);
        assert_eq!(html.matches("<tr>").count(), total);
        assert_eq!(total, 8);
    }

    #[test]
    fn test_render_escapes_text() {
        let forest = vec![TreeNode::new("<a & b>").with_comment(r#"say "hi""#)];
        let html = render_tree_html(&forest);
        assert!(html.contains(r#"<span class="tree-name">&lt;a &amp; b&gt;</span>"#));
        assert!(html.contains(r#"<span class="tree-comment">say &quot;hi&quot;</span>"#));
    }

    #[test]
    fn test_render_empty_comment_omitted() {
        let forest = vec![TreeNode::new("file").with_comment("")];
        let html = render_tree_html(&forest);
        assert!(html.contains(r#"<td class="tree-comment-cell"></td>"#));
        assert!(!html.contains("tree-comment\""));
    }

    #[test]
    fn test_render_gap_row() {
        let forest = parse_tree("a/\n├── b\n│   # more later\n└── c");
        let html = render_tree_html(&forest);
        assert!(html.contains(concat!(
            r#"<span class="tree-indent tree-branch"></span><span class="tree-name"></span></td>"#,
            r#"<td class="tree-comment-cell"><span class="tree-comment">more later</span></td>"#
        )));
    }
}
