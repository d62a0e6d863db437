//! Tree node produced by the parser.

/// Entry in a parsed tree diagram.
///
/// A node owns its children in input order. Gap lines (connector-only rows)
/// are kept as nodes with an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TreeNode {
    /// Display name, with ASCII arrows already normalized.
    pub name: String,
    /// Trailing comment after a `#` or `//` marker.
    pub comment: Option<String>,
    /// Whether the name ends with `/`.
    pub is_folder: bool,
    /// Depth the entry was parsed at (0 for roots).
    pub depth: usize,
    /// Child nodes.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a root-level node. `is_folder` follows the trailing `/`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            is_folder: name.ends_with('/'),
            name,
            ..Default::default()
        }
    }

    /// Set comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set depth.
    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Set children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}
