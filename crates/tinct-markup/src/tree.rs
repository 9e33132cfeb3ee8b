//! Tree node representation for parsed markup.

/// Kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// A regular element with tag, attributes, and children.
    #[default]
    Element,
    /// A comment; `text` holds the comment body, tag/attrs/children unused.
    Comment,
}

/// Node in a parsed markup tree.
///
/// Follows the ElementTree shape: an element owns its leading text content
/// (`text`) and each child owns the text that follows it (`tail`). Attributes
/// are kept in document order so that untouched elements serialize back
/// exactly as they were parsed.
#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    /// Node kind (element or comment).
    pub kind: NodeKind,
    /// Element tag name.
    pub tag: String,
    /// Direct text content (comment body for comment nodes).
    pub text: String,
    /// Text after this node (XML tail).
    pub tail: String,
    /// Element attributes, in document order.
    pub attrs: Vec<(String, String)>,
    /// Child nodes.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a new element node with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Create a comment node with the given body.
    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Comment,
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set tail content.
    #[must_use]
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = tail.into();
        self
    }

    /// Append an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Set children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Whether this node is an element.
    #[must_use]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing an existing value in place or appending.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(entry) = self.attrs.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value;
        } else {
            self.attrs.push((name.to_owned(), value));
        }
    }

    /// Concatenated text content of this node and all descendants.
    ///
    /// Comment bodies are excluded; the node's own tail is not part of its
    /// inner text.
    #[must_use]
    pub fn inner_text(&self) -> String {
        fn collect(node: &TreeNode, out: &mut String) {
            if node.is_element() {
                out.push_str(&node.text);
                for child in &node.children {
                    collect(child, out);
                    out.push_str(&child.tail);
                }
            }
        }

        let mut out = String::new();
        collect(self, &mut out);
        out
    }

    /// Replace all content with a single run of text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children.clear();
        self.text = text.into();
    }
}
