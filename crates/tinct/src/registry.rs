//! Colorizer registry: name resolution and per-colorizer options.

use std::collections::HashMap;

use crate::colorizer::{
    Colorizer, HighlightColorizer, PassthroughColorizer, PygmentizeColorizer, SyntectColorizer,
};
use crate::config::{FilterOptions, OptionsBag};
use crate::error::ColorizeError;

/// Colorizer used when neither the caller's default nor an override applies.
pub const DEFAULT_COLORIZER: ColorizerName = ColorizerName::Syntect;

/// The closed set of known colorizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorizerName {
    /// In-process highlighting via syntect.
    Syntect,
    /// No highlighting; code text is preserved as-is.
    Passthrough,
    /// External `pygmentize` executable.
    Pygmentize,
    /// External `highlight` executable.
    Highlight,
}

impl ColorizerName {
    /// Parse a colorizer name from its configuration string.
    ///
    /// Returns None for unknown names.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "syntect" => Some(Self::Syntect),
            "passthrough" => Some(Self::Passthrough),
            "pygmentize" => Some(Self::Pygmentize),
            "highlight" => Some(Self::Highlight),
            _ => None,
        }
    }

    /// Return the name as its configuration string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Syntect => "syntect",
            Self::Passthrough => "passthrough",
            Self::Pygmentize => "pygmentize",
            Self::Highlight => "highlight",
        }
    }
}

/// Name-to-implementation table for the known colorizers.
#[must_use]
pub fn colorizer(name: ColorizerName) -> &'static dyn Colorizer {
    match name {
        ColorizerName::Syntect => &SyntectColorizer,
        ColorizerName::Passthrough => &PassthroughColorizer,
        ColorizerName::Pygmentize => &PygmentizeColorizer,
        ColorizerName::Highlight => &HighlightColorizer,
    }
}

/// Language-to-colorizer mapping with per-colorizer options.
///
/// Built once from [`FilterOptions`] and immutable afterwards. Unknown
/// colorizer names are rejected here, at configuration-build time, so
/// resolution never fails during a pass.
#[derive(Debug, Clone)]
pub struct ColorizerRegistry {
    default: ColorizerName,
    overrides: HashMap<String, ColorizerName>,
    options: HashMap<ColorizerName, OptionsBag>,
}

impl ColorizerRegistry {
    /// Build and validate the registry from filter options.
    pub fn from_options(options: &FilterOptions) -> Result<Self, ColorizeError> {
        let default = parse_name(&options.default_colorizer)?;

        let mut overrides = HashMap::with_capacity(options.colorizers.len());
        for (language, name) in &options.colorizers {
            overrides.insert(language.clone(), parse_name(name)?);
        }

        let mut bags = HashMap::with_capacity(options.colorizer_options.len());
        for (name, bag) in &options.colorizer_options {
            bags.insert(parse_name(name)?, bag.clone());
        }

        Ok(Self {
            default,
            overrides,
            options: bags,
        })
    }

    /// Resolve the colorizer for a language: the per-language override if
    /// configured, else the default. Never fails.
    #[must_use]
    pub fn resolve(&self, language: &str) -> ColorizerName {
        self.overrides.get(language).copied().unwrap_or(self.default)
    }

    /// Caller-supplied options for a colorizer (empty bag if none given).
    #[must_use]
    pub fn options_for(&self, name: ColorizerName) -> &OptionsBag {
        static EMPTY: OptionsBag = OptionsBag::new();
        self.options.get(&name).unwrap_or(&EMPTY)
    }
}

fn parse_name(name: &str) -> Result<ColorizerName, ColorizeError> {
    ColorizerName::parse(name).ok_or_else(|| ColorizeError::UnknownColorizer(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(ColorizerName::parse("syntect"), Some(ColorizerName::Syntect));
        assert_eq!(
            ColorizerName::parse("passthrough"),
            Some(ColorizerName::Passthrough)
        );
        assert_eq!(
            ColorizerName::parse("pygmentize"),
            Some(ColorizerName::Pygmentize)
        );
        assert_eq!(
            ColorizerName::parse("highlight"),
            Some(ColorizerName::Highlight)
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(ColorizerName::parse("rainbow"), None);
        assert_eq!(ColorizerName::parse(""), None);
    }

    #[test]
    fn test_round_trip_names() {
        for name in [
            ColorizerName::Syntect,
            ColorizerName::Passthrough,
            ColorizerName::Pygmentize,
            ColorizerName::Highlight,
        ] {
            assert_eq!(ColorizerName::parse(name.as_str()), Some(name));
        }
    }

    #[test]
    fn test_resolve_default_and_override() {
        let mut options = FilterOptions::default();
        options
            .colorizers
            .insert("ruby".to_owned(), "passthrough".to_owned());
        let registry = ColorizerRegistry::from_options(&options).unwrap();

        assert_eq!(registry.resolve("ruby"), ColorizerName::Passthrough);
        assert_eq!(registry.resolve("python"), ColorizerName::Syntect);
        assert_eq!(registry.resolve("not-a-language"), ColorizerName::Syntect);
    }

    #[test]
    fn test_unknown_default_rejected() {
        let options = FilterOptions {
            default_colorizer: "prism".to_owned(),
            ..FilterOptions::default()
        };
        let err = ColorizerRegistry::from_options(&options).unwrap_err();
        assert!(matches!(err, ColorizeError::UnknownColorizer(name) if name == "prism"));
    }

    #[test]
    fn test_unknown_override_rejected() {
        let mut options = FilterOptions::default();
        options
            .colorizers
            .insert("ruby".to_owned(), "rainbow".to_owned());
        assert!(ColorizerRegistry::from_options(&options).is_err());
    }

    #[test]
    fn test_options_for() {
        let mut options = FilterOptions::default();
        let mut bag = OptionsBag::new();
        bag.insert("style".to_owned(), "github".to_owned());
        options
            .colorizer_options
            .insert("highlight".to_owned(), bag);
        let registry = ColorizerRegistry::from_options(&options).unwrap();

        assert_eq!(
            registry
                .options_for(ColorizerName::Highlight)
                .get("style")
                .map(String::as_str),
            Some("github")
        );
        assert!(registry.options_for(ColorizerName::Syntect).is_empty());
    }

    #[test]
    fn test_options_for_unknown_colorizer_key_rejected() {
        let mut options = FilterOptions::default();
        options
            .colorizer_options
            .insert("rainbow".to_owned(), OptionsBag::new());
        assert!(ColorizerRegistry::from_options(&options).is_err());
    }
}
