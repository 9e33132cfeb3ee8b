//! In-process colorizer backed by syntect.

use std::sync::LazyLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tinct_markup::TreeNode;

use crate::colorizer::Colorizer;
use crate::config::OptionsBag;
use crate::error::ColorizeError;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Class prefix used with `class_style = prefixed`.
const CLASS_PREFIX: &str = "syn-";

/// In-process highlighting via syntect's classed HTML generator.
///
/// Output carries CSS classes rather than inline styles; unknown languages
/// fall back to plain text. Recognized option: `class_style`, either
/// `spaced` (default) or `prefixed`.
pub struct SyntectColorizer;

impl Colorizer for SyntectColorizer {
    fn highlight(
        &self,
        code: &str,
        language: &str,
        options: &OptionsBag,
    ) -> Result<String, ColorizeError> {
        let syntax = SYNTAX_SET
            .find_syntax_by_token(language)
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

        let class_style = match options.get("class_style").map(String::as_str) {
            Some("prefixed") => ClassStyle::SpacedPrefixed {
                prefix: CLASS_PREFIX,
            },
            _ => ClassStyle::Spaced,
        };

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, class_style);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }

    /// Wraps the element's parent in `<div class="highlight"><div class="code">`.
    fn postprocess(&self, _language: &str, parent: TreeNode) -> TreeNode {
        let inner = TreeNode::new("div")
            .with_attr("class", "code")
            .with_children(vec![parent]);
        TreeNode::new("div")
            .with_attr("class", "highlight")
            .with_children(vec![inner])
    }
}
