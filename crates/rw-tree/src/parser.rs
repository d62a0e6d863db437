//! Tree diagram parsing.
//!
//! Turns `├──`/`└──` directory listings into a forest of [`TreeNode`]s.
//! Each line is classified on its own, then folded into the forest with an
//! ancestry stack in a single pass.

use std::sync::LazyLock;

use regex::Regex;

use crate::node::TreeNode;

/// Columns per nesting level.
///
/// Diagrams indented with any other width are misclassified.
pub const INDENT_WIDTH: usize = 4;

/// Branch glyph followed by its dash run: `├──`, `└─`, ...
static BRANCH_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[├└]─+\s*").unwrap());

/// `name  # comment` or `name // comment`. The lazy name makes the first marker win.
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+(?:#|//)(.*)$").unwrap());

/// Comment on a gap line, which needs no whitespace before the marker.
static GAP_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:#|//)(.*)$").unwrap());

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedLine {
    depth: usize,
    name: String,
    comment: Option<String>,
    is_folder: bool,
}

impl From<ParsedLine> for TreeNode {
    fn from(line: ParsedLine) -> Self {
        Self {
            name: line.name,
            comment: line.comment,
            is_folder: line.is_folder,
            depth: line.depth,
            children: Vec::new(),
        }
    }
}

/// Parse a tree diagram into a forest of root nodes.
///
/// Never fails: blank lines and lines without a name are skipped, and lines
/// without a branch glyph become roots.
///
/// # Examples
///
/// ```
/// use rw_tree::parse_tree;
///
/// let forest = parse_tree("src/\n├── lib.rs\n└── main.rs  # entry point");
/// assert_eq!(forest.len(), 1);
/// assert_eq!(forest[0].children.len(), 2);
/// assert_eq!(forest[0].children[1].comment.as_deref(), Some("entry point"));
/// ```
pub fn parse_tree(source: &str) -> Vec<TreeNode> {
    let lines: Vec<ParsedLine> = source.lines().filter_map(parse_line).collect();
    let line_count = lines.len();
    let roots = build_forest(lines);

    tracing::debug!(
        lines = line_count,
        roots = roots.len(),
        "Parsed tree diagram"
    );

    roots
}

/// Fold classified lines into a forest.
///
/// The stack holds the open ancestry chain. A node is attached to the node
/// below it once it is closed, which keeps siblings in input order.
fn build_forest(lines: Vec<ParsedLine>) -> Vec<TreeNode> {
    let mut roots = Vec::new();
    let mut stack: Vec<TreeNode> = Vec::new();

    for line in lines {
        while stack.last().is_some_and(|open| open.depth >= line.depth) {
            close_top(&mut stack, &mut roots);
        }
        stack.push(TreeNode::from(line));
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

fn close_top(stack: &mut Vec<TreeNode>, roots: &mut Vec<TreeNode>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}

/// Classify a single line.
///
/// Returns `None` for blank lines and lines with no name.
fn parse_line(line: &str) -> Option<ParsedLine> {
    if line.trim().is_empty() {
        return None;
    }

    if let Some(gap) = parse_gap_line(line) {
        return Some(gap);
    }

    let (depth, rest) = match rightmost_branch(line) {
        Some((column, byte_pos, glyph)) => {
            let after = &line[byte_pos..];
            let rest = match BRANCH_PREFIX_RE.find(after) {
                Some(prefix) => &after[prefix.end()..],
                None => after[glyph.len_utf8()..].trim(),
            };
            (column / INDENT_WIDTH + 1, rest)
        }
        None => (0, line.trim()),
    };

    let (name, comment) = split_comment(rest);
    if name.is_empty() {
        return None;
    }

    let name = normalize_arrows(name);
    Some(ParsedLine {
        depth,
        is_folder: name.ends_with('/'),
        name,
        comment: comment.map(normalize_arrows),
    })
}

/// Classify a connector-only line such as `│   # note`.
///
/// Gap lines have no name; their depth comes from the right-most vertical bar.
fn parse_gap_line(line: &str) -> Option<ParsedLine> {
    if line.contains(['├', '└', '─']) || !line.contains(['│', '|']) {
        return None;
    }

    let stripped: String = line
        .chars()
        .filter(|&c| !is_vertical(c) && !c.is_whitespace())
        .collect();
    if !(stripped.is_empty() || stripped.starts_with('#') || stripped.starts_with("//")) {
        return None;
    }

    let column = line
        .chars()
        .enumerate()
        .filter(|&(_, c)| is_vertical(c))
        .map(|(column, _)| column)
        .last()
        .unwrap_or(0);

    let comment = GAP_COMMENT_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|comment| !comment.is_empty())
        .map(normalize_arrows);

    Some(ParsedLine {
        depth: column / INDENT_WIDTH + 1,
        name: String::new(),
        comment,
        is_folder: false,
    })
}

/// Find the right-most `├` or `└`.
///
/// Returns its character column, byte offset and the glyph itself.
fn rightmost_branch(line: &str) -> Option<(usize, usize, char)> {
    line.char_indices()
        .enumerate()
        .filter(|&(_, (_, c))| c == '├' || c == '└')
        .last()
        .map(|(column, (byte_pos, glyph))| (column, byte_pos, glyph))
}

/// Split entry text into name and trailing comment.
fn split_comment(rest: &str) -> (&str, Option<&str>) {
    let Some(caps) = COMMENT_RE.captures(rest) else {
        return (rest.trim(), None);
    };

    let name = caps.get(1).map_or("", |m| m.as_str().trim());
    let comment = caps
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|comment| !comment.is_empty());
    (name, comment)
}

fn is_vertical(c: char) -> bool {
    c == '│' || c == '|'
}

/// Replace `->` and `<-` with `→` and `←`.
fn normalize_arrows(text: &str) -> String {
    text.replace("->", "→").replace("<-", "←")
}
