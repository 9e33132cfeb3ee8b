//! Markup tree parsing and serialization for tinct.
//!
//! This crate provides the parse-tree layer the colorizing filter mutates:
//! - [`parse`]: event-driven parsing (via `quick-xml`) into an
//!   ElementTree-style [`TreeNode`] tree, under HTML or XML rules
//! - [`TreeNode`]: mutable nodes with document-order attributes, text/tail
//!   content, and preserved comments
//! - [`render`]: serialization back to text, honoring per-dialect
//!   self-closing conventions and the declared output encoding
//!
//! # Example
//!
//! ```
//! use tinct_markup::{parse, render, Dialect};
//!
//! let doc = parse("<pre><code>x</code></pre>", Dialect::Html, false)?;
//! assert_eq!(render(&doc, Dialect::Html, "UTF-8"), "<pre><code>x</code></pre>");
//! # Ok::<(), tinct_markup::MarkupError>(())
//! ```

mod consts;
mod dialect;
mod document;
mod entities;
mod error;
mod parser;
mod serializer;
mod tree;

pub use consts::DEFAULT_ENCODING;
pub use dialect::Dialect;
pub use document::{Document, ROOT_TAG};
pub use error::MarkupError;
pub use parser::parse;
pub use serializer::{escape_attr, escape_text, render};
pub use tree::{NodeKind, TreeNode};
