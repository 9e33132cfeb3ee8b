//! Language detection for code elements.

use std::sync::LazyLock;

use regex::Regex;
use tinct_markup::TreeNode;

/// Pattern for an explicit `language-<id>` class token.
static LANGUAGE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^| )language-([^ ]+)").expect("invalid language class regex")
});

/// Pattern for a `#!lang` marker token (not a `#!/...` interpreter path).
static MARKER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#!([^/\n][^\n]*)$").expect("invalid marker token regex"));

/// Pattern for the marker line to remove, including its trailing newline.
static MARKER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#![^/\n][^\n]*\n?").expect("invalid marker line regex"));

/// How an element's language was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// From an existing `language-<id>` class token; the element's text must
    /// not be altered and no class is added later.
    Class(String),
    /// From a leading `#!lang` marker line, which must be stripped.
    Marker(String),
    /// No language found; the element is skipped untouched.
    Undetected,
}

/// Detect the language of a code element.
///
/// A class attribute, when present, is the only source consulted: a hit on
/// `language-<id>` wins, and a class attribute without the token means
/// undetected. Only classless elements fall through to the marker line,
/// read from the first whitespace token of the trimmed text. A conventional
/// interpreter path (`#!/usr/bin/env ruby`) is code content, never a marker.
#[must_use]
pub fn detect(element: &TreeNode) -> Detection {
    if let Some(class) = element.attr("class") {
        if let Some(caps) = LANGUAGE_CLASS.captures(class) {
            return Detection::Class(caps[1].to_owned());
        }
        return Detection::Undetected;
    }

    let text = element.inner_text();
    let Some(first) = text.trim().split_whitespace().next() else {
        return Detection::Undetected;
    };
    MARKER_TOKEN.captures(first).map_or(Detection::Undetected, |caps| {
        Detection::Marker(caps[1].to_owned())
    })
}

/// Remove the first marker line (and its trailing newline) from code text.
///
/// Only a line starting at column 0 is removed; an indented marker yields a
/// language in [`detect`] but stays in the text.
#[must_use]
pub fn remove_marker_line(text: &str) -> String {
    MARKER_LINE.replace(text, "").into_owned()
}
