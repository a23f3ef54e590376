//! Link specification parsing from raw tag text

/// Target and title extracted from the raw text of one tag occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    /// Slug appended to the base URI to form the destination address
    pub target: String,

    /// Text displayed for the link (defaults to the target)
    pub title: String,
}

impl LinkSpec {
    /// Parse the raw text between the tag delimiters.
    ///
    /// The text is split on every `:`. The first part is the target; the
    /// remaining parts, rejoined with single spaces, form the title (a title
    /// may itself have contained colons). When there is no colon, or the part
    /// right after the first colon is empty, the target doubles as the title.
    ///
    /// Returns `None` for empty raw text, the missing-input case.
    pub fn parse(raw_text: &str) -> Option<LinkSpec> {
        if raw_text.is_empty() {
            return None;
        }

        let mut parts: Vec<&str> = raw_text.split(':').collect();

        // Trailing colons produce empty parts; discard them so "test:" and
        // "a:b:" behave like "test" and "a:b".
        while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }

        let target = parts[0];
        let title = if parts.len() > 1 && !parts[1].is_empty() {
            parts[1..].join(" ")
        } else {
            target.to_string()
        };

        Some(LinkSpec {
            target: target.to_string(),
            title,
        })
    }
}
