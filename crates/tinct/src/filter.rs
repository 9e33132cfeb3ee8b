//! Dispatch and rewrite engine.

use tinct_markup::{Dialect, TreeNode};

use crate::colorizer::Colorizer;
use crate::config::FilterOptions;
use crate::error::ColorizeError;
use crate::language::{self, Detection};
use crate::registry::{self, ColorizerRegistry};
use crate::scan::{CODE_TAG, Scope};

/// The colorizing filter: one configured instance runs one or more passes.
///
/// Per pass: the input is parsed once, each in-scope `code` element is
/// detected, stripped, highlighted by its resolved colorizer, and rewritten
/// in place, then the tree is serialized back. Elements without a detectable
/// language are skipped untouched; any failure aborts the whole pass.
///
/// # Example
///
/// ```
/// use tinct::{ColorizeSyntax, FilterOptions};
///
/// let options = FilterOptions {
///     default_colorizer: "passthrough".to_owned(),
///     ..FilterOptions::default()
/// };
/// let filter = ColorizeSyntax::new(options)?;
/// let html = filter.run("<pre><code>#!ruby\n# comment</code></pre>")?;
/// assert_eq!(html, "<pre><code class=\"language-ruby\"># comment</code></pre>");
/// # Ok::<(), tinct::ColorizeError>(())
/// ```
#[derive(Debug)]
pub struct ColorizeSyntax {
    dialect: Dialect,
    is_full_page: bool,
    scope: Scope,
    registry: ColorizerRegistry,
}

impl ColorizeSyntax {
    /// Build a filter, validating the configuration.
    ///
    /// An unrecognized `syntax` or colorizer name is rejected here, before
    /// any input is touched.
    pub fn new(options: FilterOptions) -> Result<Self, ColorizeError> {
        let dialect = Dialect::parse(&options.syntax)
            .ok_or_else(|| ColorizeError::UnknownSyntax(options.syntax.clone()))?;
        let registry = ColorizerRegistry::from_options(&options)?;
        let scope = if options.outside_pre {
            Scope::AllCode
        } else {
            Scope::OnlyPreCode
        };

        Ok(Self {
            dialect,
            is_full_page: options.is_full_page,
            scope,
            registry,
        })
    }

    /// Run one colorizing pass over `content`.
    pub fn run(&self, content: &str) -> Result<String, ColorizeError> {
        let mut document = tinct_markup::parse(content, self.dialect, self.is_full_page)?;

        // Hooks pending on the root's direct children would wrap
        // free-standing elements; those stay unwrapped.
        self.walk(&mut document.root)?;

        Ok(tinct_markup::render(
            &document,
            self.dialect,
            tinct_markup::DEFAULT_ENCODING,
        ))
    }

    /// Process all code descendants of `node`.
    ///
    /// Returns the languages of processed elements that are direct children
    /// of `node`; their post-processing hooks target `node` itself, so the
    /// caller, who owns `node`'s slot, applies them.
    fn walk(&self, node: &mut TreeNode) -> Result<Vec<String>, ColorizeError> {
        let mut processed = Vec::new();

        let mut index = 0;
        while index < node.children.len() {
            for language in self.walk(&mut node.children[index])? {
                let name = self.registry.resolve(&language);
                let mut taken = std::mem::take(&mut node.children[index]);
                let tail = std::mem::take(&mut taken.tail);
                let mut replacement = registry::colorizer(name).postprocess(&language, taken);
                replacement.tail = tail;
                node.children[index] = replacement;
            }

            let in_scope = self.scope.matches_parent(node);
            let child = &mut node.children[index];
            if child.is_element() && child.tag == CODE_TAG && in_scope {
                if let Some(language) = self.process_element(child)? {
                    processed.push(language);
                }
            }

            index += 1;
        }

        Ok(processed)
    }

    /// Detect, strip, highlight, and rewrite a single code element.
    ///
    /// Returns the detected language, or None when the element was skipped.
    fn process_element(&self, element: &mut TreeNode) -> Result<Option<String>, ColorizeError> {
        let (language, from_class) = match language::detect(element) {
            Detection::Class(language) => (language, true),
            Detection::Marker(language) => (language, false),
            Detection::Undetected => return Ok(None),
        };

        if !from_class {
            let text = language::remove_marker_line(&element.inner_text());
            element.set_text(text);
        }

        let raw = strip(&element.inner_text());
        let name = self.registry.resolve(&language);
        tracing::debug!(language = %language, colorizer = name.as_str(), "highlighting code block");

        let highlighted =
            registry::colorizer(name).highlight(&raw, &language, self.registry.options_for(name))?;

        let fragment = tinct_markup::parse(&strip(&highlighted), self.dialect, false)?;
        element.text = fragment.root.text;
        element.children = fragment.root.children;

        if !from_class {
            append_language_class(element, &language);
        }

        Ok(Some(language))
    }
}

/// Remove leading blank lines and any whitespace at the end.
fn strip(s: &str) -> String {
    let body: String = s
        .split_inclusive('\n')
        .skip_while(|line| line.trim().is_empty())
        .collect();
    body.trim_end().to_owned()
}

/// Append a `language-<id>` token to the element's class attribute,
/// creating the attribute if absent and never duplicating the token.
fn append_language_class(element: &mut TreeNode, language: &str) {
    let token = format!("language-{language}");
    let class = element.attr("class").unwrap_or_default().to_owned();
    if class.split(' ').any(|existing| existing == token) {
        return;
    }

    let class = if class.is_empty() || class.ends_with(' ') {
        format!("{class}{token}")
    } else {
        format!("{class} {token}")
    };
    element.set_attr("class", class);
}
