//! External colorizer: André Simon's `highlight`.

use crate::colorizer::{Colorizer, subprocess};
use crate::config::OptionsBag;
use crate::error::ColorizeError;

const PROGRAM: &str = "highlight";
const PROBE_FLAG: &str = "--version";

/// Option keys translated to their dedicated command-line flags.
const OPTION_FLAGS: &[(&str, &str)] = &[
    ("wrap", "-W"),
    ("include_style", "-I"),
    ("line_numbers", "-l"),
];

/// Pipes code through `highlight`, reading the HTML fragment from stdout.
///
/// Well-known option keys map to their own flags via [`OPTION_FLAGS`];
/// `style` carries its value as `--style <value>`. Other keys are ignored
/// with a warning.
pub struct HighlightColorizer;

impl Colorizer for HighlightColorizer {
    fn highlight(
        &self,
        code: &str,
        language: &str,
        options: &OptionsBag,
    ) -> Result<String, ColorizeError> {
        subprocess::check_availability(PROGRAM, PROBE_FLAG)?;
        subprocess::run_piped(PROGRAM, &build_args(language, options), code)
    }
}

fn build_args(language: &str, options: &OptionsBag) -> Vec<String> {
    let mut args = vec![
        "--syntax".to_owned(),
        language.to_owned(),
        "--fragment".to_owned(),
    ];

    for (key, value) in options {
        if let Some((_, flag)) = OPTION_FLAGS.iter().find(|(name, _)| *name == key.as_str()) {
            args.push((*flag).to_owned());
        } else if key == "style" {
            args.push("--style".to_owned());
            args.push(value.clone());
        } else {
            tracing::warn!(key = %key, "ignoring unsupported highlight option");
        }
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args_bare() {
        let args = build_args("ruby", &OptionsBag::new());
        assert_eq!(args, vec!["--syntax", "ruby", "--fragment"]);
    }

    #[test]
    fn test_build_args_mapped_flags() {
        let mut options = OptionsBag::new();
        options.insert("wrap".to_owned(), "1".to_owned());
        options.insert("line_numbers".to_owned(), "1".to_owned());
        let args = build_args("ruby", &options);
        assert_eq!(args, vec!["--syntax", "ruby", "--fragment", "-l", "-W"]);
    }

    #[test]
    fn test_build_args_style_carries_value() {
        let mut options = OptionsBag::new();
        options.insert("style".to_owned(), "github".to_owned());
        let args = build_args("c", &options);
        assert_eq!(args, vec!["--syntax", "c", "--fragment", "--style", "github"]);
    }

    #[test]
    fn test_build_args_unknown_key_ignored() {
        let mut options = OptionsBag::new();
        options.insert("mystery".to_owned(), "on".to_owned());
        let args = build_args("c", &options);
        assert_eq!(args, vec!["--syntax", "c", "--fragment"]);
    }
}
