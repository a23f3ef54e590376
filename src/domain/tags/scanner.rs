//! Inline tag occurrence scanning and substitution

use super::expander::TagExpander;
use pulldown_cmark::{Event, Parser as MdParser, Tag as MdTag};
use regex::Regex;
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::OnceLock;

/// Regex for matching inline tag occurrences: `{name}` or `{name raw text}`.
///
/// Capture groups:
/// 1. tag name (letter, then letters/digits/dashes/underscores)
/// 2. optional raw text following the name (no braces)
fn occurrence_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_-]*)(?:\s+([^{}]*))?\}").unwrap())
}

/// Check whether a string is usable as a tag name
pub fn is_valid_tag_name(name: &str) -> bool {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = REGEX.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap());
    regex.is_match(name)
}

/// Result of expanding tags in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The document text with registered occurrences replaced
    pub text: String,

    /// How many occurrences were expanded
    pub count: usize,
}

/// Registered tag expanders, looked up by tag name during scanning.
///
/// Registering a name twice replaces the earlier expander.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    expanders: BTreeMap<String, TagExpander>,
}

impl TagRegistry {
    pub fn new() -> Self {
        TagRegistry {
            expanders: BTreeMap::new(),
        }
    }

    /// Register an expander under its tag name, replacing any earlier one
    pub fn register(&mut self, expander: TagExpander) {
        self.expanders.insert(expander.name().to_string(), expander);
    }

    /// Look up the expander for a tag name
    pub fn get(&self, name: &str) -> Option<&TagExpander> {
        self.expanders.get(name)
    }

    /// Expand every registered occurrence in plain text.
    ///
    /// Occurrences with unregistered names are left verbatim; they belong to
    /// the document, not to this registry.
    pub fn expand_text(&self, text: &str) -> Expansion {
        self.expand_masked(text, &[])
    }

    /// Expand registered occurrences in markdown text.
    ///
    /// Occurrences inside fenced/indented code blocks and inline code spans
    /// are left untouched; tags in code samples are content, not directives.
    pub fn expand_markdown(&self, text: &str) -> Expansion {
        let masked = code_ranges(text);
        self.expand_masked(text, &masked)
    }

    fn expand_masked(&self, text: &str, masked: &[Range<usize>]) -> Expansion {
        let mut out = String::with_capacity(text.len());
        let mut count = 0;
        let mut last = 0;

        for captures in occurrence_regex().captures_iter(text) {
            let occurrence = captures.get(0).unwrap();
            if masked
                .iter()
                .any(|range| range.start <= occurrence.start() && occurrence.start() < range.end)
            {
                continue;
            }

            let Some(expander) = self.get(&captures[1]) else {
                continue;
            };

            // The delimiters and tag name are stripped here; the expander only
            // ever sees the trimmed raw text.
            let raw_text = captures.get(2).map(|m| m.as_str().trim()).unwrap_or("");

            out.push_str(&text[last..occurrence.start()]);
            out.push_str(&expander.render(raw_text));
            last = occurrence.end();
            count += 1;
        }

        out.push_str(&text[last..]);
        Expansion { text: out, count }
    }
}

/// Byte ranges of code blocks and inline code spans in markdown text
fn code_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();

    for (event, range) in MdParser::new(text).into_offset_iter() {
        match event {
            // A Start event's range spans the whole element
            Event::Start(MdTag::CodeBlock(_)) | Event::Code(_) => ranges.push(range),
            _ => {}
        }
    }

    ranges
}
