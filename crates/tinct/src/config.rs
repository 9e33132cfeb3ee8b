//! Filter configuration.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::registry::DEFAULT_COLORIZER;

/// Options for one colorizer, passed through to `highlight`.
///
/// Ordered so composite option arguments are deterministic.
pub type OptionsBag = BTreeMap<String, String>;

/// Caller-supplied filter configuration.
///
/// Built fresh per filter; validated (syntax and colorizer names) when the
/// filter is constructed, before any input is parsed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Markup dialect: `html` (default), `xml`, or `xhtml`.
    pub syntax: String,
    /// Parse a complete page rather than a fragment.
    pub is_full_page: bool,
    /// When true, all `code` elements are eligible; when false (default),
    /// only `code` elements directly under a `pre`.
    pub outside_pre: bool,
    /// Colorizer used for languages without an explicit override.
    pub default_colorizer: String,
    /// Per-language colorizer overrides (language → colorizer name).
    pub colorizers: HashMap<String, String>,
    /// Per-colorizer option bags (colorizer name → options).
    pub colorizer_options: HashMap<String, OptionsBag>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            syntax: "html".to_owned(),
            is_full_page: false,
            outside_pre: false,
            default_colorizer: DEFAULT_COLORIZER.as_str().to_owned(),
            colorizers: HashMap::new(),
            colorizer_options: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FilterOptions::default();
        assert_eq!(options.syntax, "html");
        assert!(!options.is_full_page);
        assert!(!options.outside_pre);
        assert_eq!(options.default_colorizer, "syntect");
        assert!(options.colorizers.is_empty());
        assert!(options.colorizer_options.is_empty());
    }
}
