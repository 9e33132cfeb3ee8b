//! Code block colorizing filter with pluggable highlighting backends.
//!
//! This crate scans an HTML or XML document for code blocks, detects the
//! language of each block, and rewrites the block's content with
//! syntax-highlighted markup from an interchangeable colorizer.
//!
//! # Architecture
//!
//! - [`ColorizeSyntax`]: the filter; parses once, walks the matched
//!   elements, and serializes the mutated tree
//! - [`FilterOptions`]: caller-supplied configuration (dialect, scope,
//!   colorizer assignments, per-colorizer options)
//! - [`ColorizerRegistry`]: language-to-colorizer resolution with a
//!   process-wide default and per-language overrides
//! - [`Colorizer`]: the backend capability, implemented by the closed set of
//!   [`SyntectColorizer`] (in-process), [`PassthroughColorizer`], and the
//!   external [`PygmentizeColorizer`] / [`HighlightColorizer`]
//!
//! Language detection uses an explicit `language-<id>` class when present,
//! else a leading `#!lang` marker line (conventional `#!/...` interpreter
//! paths are code, not markers). Elements without a detectable language are
//! skipped untouched.
//!
//! # Example
//!
//! ```
//! use tinct::{ColorizeSyntax, FilterOptions};
//!
//! let filter = ColorizeSyntax::new(FilterOptions {
//!     default_colorizer: "passthrough".to_owned(),
//!     ..FilterOptions::default()
//! })?;
//!
//! let html = filter.run(r#"<pre><code class="language-ruby">puts "foo"</code></pre>"#)?;
//! assert_eq!(html, r#"<pre><code class="language-ruby">puts "foo"</code></pre>"#);
//! # Ok::<(), tinct::ColorizeError>(())
//! ```

mod colorizer;
mod config;
mod error;
mod filter;
mod language;
mod registry;
mod scan;

pub use colorizer::{
    Colorizer, HighlightColorizer, PassthroughColorizer, PygmentizeColorizer, SyntectColorizer,
};
pub use config::{FilterOptions, OptionsBag};
pub use error::ColorizeError;
pub use filter::ColorizeSyntax;
pub use language::{Detection, detect, remove_marker_line};
pub use registry::{ColorizerName, ColorizerRegistry, DEFAULT_COLORIZER, colorizer};
pub use scan::{Scope, code_elements};

pub use tinct_markup::{Dialect, Document, MarkupError, TreeNode};
