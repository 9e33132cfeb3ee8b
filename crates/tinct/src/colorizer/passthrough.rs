//! Passthrough colorizer: disables highlighting.

use crate::colorizer::Colorizer;
use crate::config::OptionsBag;
use crate::error::ColorizeError;

/// Returns the code as-is, performing no highlighting.
///
/// The rest of the pipeline (stripping, class tagging, structural wrapping)
/// still applies. Markup-significant characters are escaped so the returned
/// fragment is safe to re-parse; the text content itself is unchanged.
pub struct PassthroughColorizer;

impl Colorizer for PassthroughColorizer {
    fn highlight(
        &self,
        code: &str,
        _language: &str,
        _options: &OptionsBag,
    ) -> Result<String, ColorizeError> {
        Ok(tinct_markup::escape_text(code))
    }
}
