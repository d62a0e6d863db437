//! ASCII directory tree diagrams rendered as HTML tables.
//!
//! Parses the familiar `├──`/`└──` listing notation into [`TreeNode`]s and
//! renders them as a two-column table (structure and comment). Connector
//! lines are not drawn as text: each row carries `tree-indent` spans with
//! `tree-vline`, `tree-branch` and `tree-corner` classes for a stylesheet to
//! draw.
//!
//! Both stages are pure functions and never fail. Malformed input degrades
//! to a best-effort forest.
//!
//! # Example
//!
//! ```
//! use rw_tree::render_tree;
//!
//! let html = render_tree(
//!     "docs/
//! ├── index.md        # landing page
//! └── guide/
//!     └── setup.md",
//! );
//! assert!(html.starts_with(r#"<div class="tree-container">"#));
//! assert_eq!(html.matches("<tr>").count(), 4);
//! assert!(html.contains(r#"<span class="tree-comment">landing page</span>"#));
//! ```

mod html;
mod node;
mod parser;
mod renderer;

pub use html::escape_html;
pub use node::TreeNode;
pub use parser::{INDENT_WIDTH, parse_tree};
pub use renderer::render_tree_html;

/// Parse a tree diagram and render it as an HTML table.
pub fn render_tree(source: &str) -> String {
    let nodes = parse_tree(source);
    render_tree_html(&nodes)
}
