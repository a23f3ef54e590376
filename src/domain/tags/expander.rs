//! Rendering of a single tag occurrence into HTML markup

use super::parser::LinkSpec;

/// Base URI used when no configuration overrides it
pub const DEFAULT_BASE_URI: &str = "http://en.wikipedia.org/";

/// Tag name used when no configuration overrides it
pub const DEFAULT_TAG_NAME: &str = "wikipedia";

/// Expands the raw text of one tag occurrence into a hyperlink.
///
/// Rendering is total: every input, including empty text, produces a defined
/// string. Missing input renders an inline error marker instead of failing,
/// so a documentation build never aborts on a malformed tag.
#[derive(Debug, Clone)]
pub struct TagExpander {
    name: String,
    base_uri: String,
    escape: bool,
}

impl TagExpander {
    /// Create an expander for the given tag name and base URI
    pub fn new(name: &str, base_uri: &str) -> Self {
        TagExpander {
            name: name.to_string(),
            base_uri: base_uri.to_string(),
            escape: false,
        }
    }

    /// Enable or disable HTML escaping of target and title.
    ///
    /// Off by default: target and title are inserted verbatim.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// The tag name this expander renders
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base URI links point at
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Render one occurrence's raw text as HTML.
    ///
    /// Non-empty text becomes `<a href="{base_uri}{target}">{title}</a>`;
    /// empty text becomes a red error marker naming the tag.
    pub fn render(&self, raw_text: &str) -> String {
        match LinkSpec::parse(raw_text) {
            Some(link) if self.escape => format!(
                "<a href=\"{}{}\">{}</a>",
                self.base_uri,
                html_escape::encode_double_quoted_attribute(&link.target),
                html_escape::encode_text(&link.title)
            ),
            Some(link) => format!(
                "<a href=\"{}{}\">{}</a>",
                self.base_uri, link.target, link.title
            ),
            None => format!(
                "<font color=\"#FF0000\">#ERROR! {{{}}} tag</font>",
                self.name
            ),
        }
    }
}

impl Default for TagExpander {
    fn default() -> Self {
        TagExpander::new(DEFAULT_TAG_NAME, DEFAULT_BASE_URI)
    }
}
