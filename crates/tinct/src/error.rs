//! Error types for the colorizing filter.

use tinct_markup::MarkupError;

/// Error during a colorizing pass.
///
/// Every variant aborts the pass; there is no partial output. An element
/// whose language cannot be detected is not an error, it is silently
/// skipped.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ColorizeError {
    /// Unrecognized `syntax` configuration value.
    #[error("unknown syntax: {0:?} (expected html, xml, or xhtml)")]
    UnknownSyntax(String),

    /// A configured colorizer name is not among the known set.
    #[error("unknown colorizer: {0:?}")]
    UnknownColorizer(String),

    /// Markup parsing error (input document or returned fragment).
    #[error("markup error")]
    Markup(#[from] MarkupError),

    /// An external colorizer executable could not be located or probed.
    #[error("colorizer executable `{program}` is unavailable: {reason}")]
    Unavailable {
        /// Executable name.
        program: String,
        /// Why the probe failed.
        reason: String,
    },

    /// I/O error while feeding an external colorizer.
    #[error("I/O error running `{program}`")]
    Io {
        /// Executable name.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An external colorizer exited with a non-success status.
    #[error("`{program}` exited with {status}: {stderr}")]
    Subprocess {
        /// Executable name.
        program: String,
        /// Exit status of the process.
        status: std::process::ExitStatus,
        /// Captured standard error.
        stderr: String,
    },

    /// An external colorizer produced output that is not valid UTF-8.
    #[error("`{program}` produced invalid UTF-8 output")]
    OutputNotUtf8 {
        /// Executable name.
        program: String,
    },

    /// In-process highlighting error.
    #[error("syntax highlighting failed")]
    Highlight(#[from] syntect::Error),
}
