//! Normalized markup text.

use std::fmt;

/// Source document with every whitespace run collapsed to a single space.
///
/// Normalization happens exactly once, in [`MarkupText::normalize`]. All
/// offsets produced by the scanner and the range builder are byte offsets into
/// this normalized text, so the raw document must never be scanned directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MarkupText(String);

impl MarkupText {
    /// Collapses each run of whitespace characters in `raw` into one ASCII space.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let mut text = String::with_capacity(raw.len());
        let mut in_whitespace = false;
        for ch in raw.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    text.push(' ');
                }
                in_whitespace = true;
            } else {
                text.push(ch);
                in_whitespace = false;
            }
        }
        Self(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `[start, end)` of the text, or `None` when the bounds do not
    /// fall on character boundaries inside the text.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Option<&str> {
        self.0.get(start..end)
    }
}

impl fmt::Display for MarkupText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MarkupText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
