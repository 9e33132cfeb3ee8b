//! Colorizer backends.
//!
//! Each backend turns code text plus a language identifier into a markup
//! fragment. The set is closed: [`SyntectColorizer`] (in-process),
//! [`PassthroughColorizer`] (no-op), and two external executables,
//! [`PygmentizeColorizer`] and [`HighlightColorizer`]. Selection happens by
//! name through the registry's table, never by runtime probing.

mod highlight;
mod passthrough;
mod pygmentize;
pub(crate) mod subprocess;
mod syntect;

pub use self::highlight::HighlightColorizer;
pub use self::passthrough::PassthroughColorizer;
pub use self::pygmentize::PygmentizeColorizer;
pub use self::syntect::SyntectColorizer;

use tinct_markup::TreeNode;

use crate::config::OptionsBag;
use crate::error::ColorizeError;

/// A highlighting backend.
pub trait Colorizer {
    /// Produce a markup-safe fragment for `code` in `language`.
    ///
    /// Must not fail for valid input, but may fail when the engine is
    /// unavailable or misconfigured.
    fn highlight(
        &self,
        code: &str,
        language: &str,
        options: &OptionsBag,
    ) -> Result<String, ColorizeError>;

    /// Optional structural wrapping applied to a processed element's parent.
    ///
    /// Receives the parent node and returns its replacement. The default is
    /// a no-op, returning the parent unchanged. Invoked unconditionally
    /// through this interface after the element's content and class have
    /// been rewritten.
    fn postprocess(&self, _language: &str, parent: TreeNode) -> TreeNode {
        parent
    }
}
