//! Code element selection.

use tinct_markup::{Document, TreeNode};

/// Tag of highlightable elements.
pub(crate) const CODE_TAG: &str = "code";

/// Tag of the preformatted container gating the default scope.
pub(crate) const PRE_TAG: &str = "pre";

/// Structural predicate selecting which `code` elements are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Only `code` elements that are a direct child of a `pre`.
    #[default]
    OnlyPreCode,
    /// Every `code` element, wherever it appears.
    AllCode,
}

impl Scope {
    /// Whether a `code` element with this parent is in scope.
    #[must_use]
    pub fn matches_parent(self, parent: &TreeNode) -> bool {
        match self {
            Self::AllCode => true,
            Self::OnlyPreCode => parent.is_element() && parent.tag == PRE_TAG,
        }
    }
}

/// Collect the code elements of a document selected by `scope`, in document
/// order.
#[must_use]
pub fn code_elements(document: &Document, scope: Scope) -> Vec<&TreeNode> {
    fn collect<'doc>(parent: &'doc TreeNode, scope: Scope, out: &mut Vec<&'doc TreeNode>) {
        for child in &parent.children {
            if child.is_element() && child.tag == CODE_TAG && scope.matches_parent(parent) {
                out.push(child);
            }
            collect(child, scope, out);
        }
    }

    let mut out = Vec::new();
    collect(&document.root, scope, &mut out);
    out
}
