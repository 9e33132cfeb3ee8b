//! Event-driven markup parser.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::consts::is_void;
use crate::dialect::Dialect;
use crate::document::Document;
use crate::entities::decode_entity;
use crate::error::MarkupError;
use crate::tree::TreeNode;

/// Parse markup into a [`Document`].
///
/// `full_page` captures the doctype for re-emission; fragments parse their
/// top-level nodes directly under the synthetic root. HTML dialect treats
/// void elements (`<br>`, `<img>`, ...) as immediately closed; mismatched
/// end tags are tolerated rather than fatal.
pub fn parse(content: &str, dialect: Dialect, full_page: bool) -> Result<Document, MarkupError> {
    let mut reader = Reader::from_str(content);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut document = Document::new(full_page);

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let child = parse_element(&mut reader, dialect, &e)?;
                document.root.children.push(child);
            }
            Event::Empty(e) => {
                document.root.children.push(leaf_element(&reader, &e));
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?.into_owned();
                append_text(&mut document.root, &text);
            }
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?.into_owned();
                append_text(&mut document.root, &decode_entity(&entity));
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                append_text(&mut document.root, &text);
            }
            Event::Comment(e) => {
                let text = reader.decoder().decode(&e)?.into_owned();
                document.root.children.push(TreeNode::comment(text));
            }
            Event::DocType(e) => {
                let text = reader.decoder().decode(&e)?.into_owned();
                document.doctype = Some(text.trim().to_owned());
            }
            // Stray end tag at top level - ignore
            Event::End(_) | Event::Decl(_) | Event::PI(_) => {}
            Event::Eof => break,
        }
    }

    Ok(document)
}

/// Parse a started element: attributes now, children until the matching end.
fn parse_element(
    reader: &mut Reader<&[u8]>,
    dialect: Dialect,
    start: &BytesStart,
) -> Result<TreeNode, MarkupError> {
    let tag = decode_tag(reader, start.name().as_ref());
    let attrs = decode_attrs(reader, start);

    // HTML void elements have no content even without a self-closing slash
    if dialect == Dialect::Html && is_void(&tag) {
        let mut node = TreeNode::new(tag);
        node.attrs = attrs;
        return Ok(node);
    }

    let mut node = parse_children(reader, dialect, &tag)?;
    node.tag = tag;
    node.attrs = attrs;
    Ok(node)
}

fn parse_children(
    reader: &mut Reader<&[u8]>,
    dialect: Dialect,
    parent_tag: &str,
) -> Result<TreeNode, MarkupError> {
    let mut node = TreeNode::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let child = parse_element(reader, dialect, &e)?;
                node.children.push(child);
            }
            Event::Empty(e) => {
                node.children.push(leaf_element(reader, &e));
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?.into_owned();
                append_text(&mut node, &text);
            }
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?.into_owned();
                append_text(&mut node, &decode_entity(&entity));
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                append_text(&mut node, &text);
            }
            Event::Comment(e) => {
                let text = reader.decoder().decode(&e)?.into_owned();
                node.children.push(TreeNode::comment(text));
            }
            Event::End(e) => {
                let end_tag = decode_tag(reader, e.name().as_ref());
                if end_tag == parent_tag {
                    return Ok(node);
                }
                // Mismatched end tag - continue
            }
            Event::Eof => {
                return Ok(node);
            }
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }
}

/// Self-closing or void element with no content.
fn leaf_element(reader: &Reader<&[u8]>, start: &BytesStart) -> TreeNode {
    let mut node = TreeNode::new(decode_tag(reader, start.name().as_ref()));
    node.attrs = decode_attrs(reader, start);
    node
}

fn decode_tag(reader: &Reader<&[u8]>, name: &[u8]) -> String {
    reader.decoder().decode(name).map_or_else(
        |_| String::from_utf8_lossy(name).into_owned(),
        std::borrow::Cow::into_owned,
    )
}

fn decode_attrs(reader: &Reader<&[u8]>, e: &BytesStart) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    for attr in e.attributes().flatten() {
        let key = reader.decoder().decode(attr.key.as_ref()).map_or_else(
            |_| String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            std::borrow::Cow::into_owned,
        );
        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            std::borrow::Cow::into_owned,
        );
        attrs.push((key, value));
    }
    attrs
}

/// Append text to node's text or last child's tail.
fn append_text(node: &mut TreeNode, text: &str) {
    if let Some(last_child) = node.children.last_mut() {
        last_child.tail.push_str(text);
    } else {
        node.text.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_element() {
        let doc = parse("<p>Hello</p>", Dialect::Html, false).unwrap();

        assert_eq!(doc.root.children.len(), 1);
        let p = &doc.root.children[0];
        assert_eq!(p.tag, "p");
        assert_eq!(p.text, "Hello");
    }

    #[test]
    fn test_parse_nested_elements() {
        let doc = parse("<p><strong>Bold</strong> text</p>", Dialect::Html, false).unwrap();

        let p = &doc.root.children[0];
        assert!(p.text.is_empty());
        assert_eq!(p.children.len(), 1);

        let strong = &p.children[0];
        assert_eq!(strong.tag, "strong");
        assert_eq!(strong.text, "Bold");
        assert_eq!(strong.tail, " text");
    }

    #[test]
    fn test_parse_attributes_in_order() {
        let doc = parse(
            r#"<pre title="intro" id="x"><code class="language-ruby">y</code></pre>"#,
            Dialect::Html,
            false,
        )
        .unwrap();

        let pre = &doc.root.children[0];
        assert_eq!(pre.attrs[0], ("title".to_owned(), "intro".to_owned()));
        assert_eq!(pre.attrs[1], ("id".to_owned(), "x".to_owned()));
        let code = &pre.children[0];
        assert_eq!(code.attr("class"), Some("language-ruby"));
    }

    #[test]
    fn test_parse_html_void_element() {
        let doc = parse("<p>foo<br>bar</p>", Dialect::Html, false).unwrap();

        let p = &doc.root.children[0];
        assert_eq!(p.text, "foo");
        assert_eq!(p.children.len(), 1);
        assert_eq!(p.children[0].tag, "br");
        assert_eq!(p.children[0].tail, "bar");
    }

    #[test]
    fn test_parse_self_closing_element() {
        let doc = parse("<p>Before<br />After</p>", Dialect::Xml, false).unwrap();

        let p = &doc.root.children[0];
        assert_eq!(p.text, "Before");
        assert_eq!(p.children[0].tag, "br");
        assert_eq!(p.children[0].tail, "After");
    }

    #[test]
    fn test_parse_entities_in_text() {
        let doc = parse("<code>a &lt; b &amp; c</code>", Dialect::Html, false).unwrap();

        let code = &doc.root.children[0];
        assert_eq!(code.inner_text(), "a < b & c");
    }

    #[test]
    fn test_parse_named_entities() {
        let doc = parse("<p>Hello&nbsp;World&mdash;Test</p>", Dialect::Html, false).unwrap();

        let p = &doc.root.children[0];
        assert!(p.text.contains('\u{00a0}'));
        assert!(p.text.contains('\u{2014}'));
    }

    #[test]
    fn test_parse_comment_preserved() {
        let doc = parse("<p>a<!-- note -->b</p>", Dialect::Html, false).unwrap();

        let p = &doc.root.children[0];
        assert_eq!(p.text, "a");
        assert!(!p.children[0].is_element());
        assert_eq!(p.children[0].text, " note ");
        assert_eq!(p.children[0].tail, "b");
        assert_eq!(p.inner_text(), "ab");
    }

    #[test]
    fn test_parse_full_page_doctype() {
        let doc = parse(
            "<!DOCTYPE html>\n<html><body></body></html>",
            Dialect::Html,
            true,
        )
        .unwrap();

        assert_eq!(doc.doctype.as_deref(), Some("html"));
        assert_eq!(doc.root.text, "\n");
        assert_eq!(doc.root.children[0].tag, "html");
    }

    #[test]
    fn test_parse_multiple_top_level_nodes() {
        let doc = parse("before\n<pre><code>x</code></pre>\nafter\n", Dialect::Html, false)
            .unwrap();

        assert_eq!(doc.root.text, "before\n");
        assert_eq!(doc.root.children[0].tag, "pre");
        assert_eq!(doc.root.children[0].tail, "\nafter\n");
    }

    #[test]
    fn test_parse_mismatched_end_tag_tolerated() {
        let doc = parse("<p><b>x</i>y</b></p>", Dialect::Html, false).unwrap();

        let p = &doc.root.children[0];
        assert_eq!(p.children[0].tag, "b");
        assert_eq!(p.children[0].inner_text(), "xy");
    }

    #[test]
    fn test_parse_cdata() {
        let doc = parse("<code><![CDATA[a < b]]></code>", Dialect::Xml, false).unwrap();

        assert_eq!(doc.root.children[0].inner_text(), "a < b");
    }
}
