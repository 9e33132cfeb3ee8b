//! Parsed document container.

use crate::tree::TreeNode;

/// Tag of the synthetic root node holding a document's top-level nodes.
pub const ROOT_TAG: &str = "#document";

/// A parsed document or fragment.
///
/// The tree hangs off a synthetic root node whose children are the top-level
/// nodes of the input; the root itself is never serialized. Full pages
/// additionally capture their doctype for re-emission.
#[derive(Debug, Clone)]
pub struct Document {
    /// Synthetic root; `children` are the document's top-level nodes.
    pub root: TreeNode,
    /// Doctype body (e.g. `html`), captured from full pages.
    pub doctype: Option<String>,
    /// Whether the input was parsed as a complete page rather than a fragment.
    pub full_page: bool,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new(full_page: bool) -> Self {
        Self {
            root: TreeNode::new(ROOT_TAG),
            doctype: None,
            full_page,
        }
    }
}
