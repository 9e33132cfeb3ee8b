//! Tree-to-text serialization.

use std::fmt::Write;

use crate::consts::is_void;
use crate::dialect::Dialect;
use crate::document::Document;
use crate::tree::{NodeKind, TreeNode};

/// Serialize a document back to markup text.
///
/// HTML emits void elements bare (`<br>`) and never self-closes; XML emits
/// childless, textless elements as `<br/>` and XHTML as `<br />`. Full XML
/// pages are preceded by a declaration carrying `encoding`; full HTML pages
/// re-emit their captured doctype.
#[must_use]
pub fn render(document: &Document, dialect: Dialect, encoding: &str) -> String {
    let mut out = String::with_capacity(4096);

    if document.full_page {
        if dialect.is_xml() {
            let _ = writeln!(out, r#"<?xml version="1.0" encoding="{encoding}"?>"#);
        }
        if let Some(doctype) = &document.doctype {
            let _ = write!(out, "<!DOCTYPE {doctype}>");
        }
    }

    out.push_str(&escape_text(&document.root.text));
    for child in &document.root.children {
        serialize_node(child, dialect, &mut out);
    }

    out
}

/// Serialize a single node recursively.
fn serialize_node(node: &TreeNode, dialect: Dialect, out: &mut String) {
    match node.kind {
        NodeKind::Comment => {
            let _ = write!(out, "<!--{}-->", node.text);
        }
        NodeKind::Element => serialize_element(node, dialect, out),
    }

    if !node.tail.is_empty() {
        out.push_str(&escape_text(&node.tail));
    }
}

fn serialize_element(node: &TreeNode, dialect: Dialect, out: &mut String) {
    out.push('<');
    out.push_str(&node.tag);
    for (key, value) in &node.attrs {
        let _ = write!(out, r#" {}="{}""#, key, escape_attr(value));
    }

    let empty = node.children.is_empty() && node.text.is_empty();

    if dialect == Dialect::Html {
        out.push('>');
        if empty && is_void(&node.tag) {
            return;
        }
    } else if empty {
        out.push_str(match dialect {
            Dialect::Xhtml => " />",
            _ => "/>",
        });
        return;
    } else {
        out.push('>');
    }

    if !node.text.is_empty() {
        out.push_str(&escape_text(&node.text));
    }
    for child in &node.children {
        serialize_node(child, dialect, out);
    }
    let _ = write!(out, "</{}>", node.tag);
}

/// Escape text for markup content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    escape(text, false)
}

/// Escape text for attribute values.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    escape(text, true)
}

fn escape(text: &str, escape_quotes: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if escape_quotes => result.push_str("&quot;"),
            '\'' if escape_quotes => result.push_str("&apos;"),
            _ => result.push(ch),
        }
    }
    result
}
