//! Error types for markup parsing.

/// Error while parsing markup into a tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MarkupError {
    /// Markup parsing error.
    #[error("markup parse error")]
    Parse(#[from] quick_xml::Error),

    /// Encoding error while decoding event bytes.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),
}
