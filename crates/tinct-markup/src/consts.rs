//! Internal constants for markup handling.

/// HTML void elements: no content, no end tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Default output encoding declared by the serializer.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Whether a tag is an HTML void element.
#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}
