//! External colorizer: the `pygmentize` command-line frontend for Pygments.

use crate::colorizer::{Colorizer, subprocess};
use crate::config::OptionsBag;
use crate::error::ColorizeError;

const PROGRAM: &str = "pygmentize";
const PROBE_FLAG: &str = "-V";

/// Pipes code through `pygmentize`, reading highlighted HTML from stdout.
///
/// The language is passed via `-l`; every option (with `encoding=utf-8` and
/// `nowrap=True` defaults filled in) is serialized into one composite `-O`
/// argument.
pub struct PygmentizeColorizer;

impl Colorizer for PygmentizeColorizer {
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
    let mut merged = options.clone();
    merged
        .entry("encoding".to_owned())
        .or_insert_with(|| "utf-8".to_owned());
    merged
        .entry("nowrap".to_owned())
        .or_insert_with(|| "True".to_owned());

    let composite = merged
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(",");

    vec![
        "-l".to_owned(),
        language.to_owned(),
        "-f".to_owned(),
        "html".to_owned(),
        "-O".to_owned(),
        composite,
    ]
}
