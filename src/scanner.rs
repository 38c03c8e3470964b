//! Marker scanner.
//!
//! Walks the normalized markup once, left to right, and reports every
//! `m__<name>` marker together with the offset right after the `>` that closes
//! the tag holding it. Scanning is a three-state machine driven one character
//! at a time by [`ScanState::step`].

use std::str::CharIndices;

use crate::markup::MarkupText;

/// Token that opens a marker name.
pub const MARKER_PREFIX: &str = "m__";

/// A marker found in the markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerOccurrence {
    /// Byte offset just past the closing `>` of the tag holding the marker.
    pub position: usize,
    /// Marker name without the prefix.
    pub name: String,
}

impl MarkerOccurrence {
    #[must_use]
    pub fn new(position: usize, name: impl Into<String>) -> Self {
        Self { position, name: name.into() }
    }
}

/// Scanner state between two characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for [`MARKER_PREFIX`]. `matched` counts the prefix characters
    /// already seen.
    Seeking { matched: usize },
    /// Inside a marker name.
    NameCollecting { name: String },
    /// Name recorded, waiting for the `>` that closes the enclosing tag.
    PositionSeeking { name: String },
}

impl Default for ScanState {
    fn default() -> Self {
        Self::Seeking { matched: 0 }
    }
}

impl ScanState {
    /// Consumes the character `ch` found at byte `offset`.
    ///
    /// Returns the following state and, when `ch` completes a marker, the
    /// occurrence it completes.
    #[must_use]
    pub fn step(self, offset: usize, ch: char) -> (Self, Option<MarkerOccurrence>) {
        match self {
            Self::Seeking { matched } => (Self::advance_prefix(matched, ch), None),
            Self::NameCollecting { mut name } => {
                if ch == '>' {
                    (Self::default(), Some(MarkerOccurrence::new(offset + 1, name)))
                } else if is_name_delimiter(ch) {
                    (Self::PositionSeeking { name }, None)
                } else {
                    name.push(ch);
                    (Self::NameCollecting { name }, None)
                }
            }
            Self::PositionSeeking { name } => {
                if ch == '>' {
                    (Self::default(), Some(MarkerOccurrence::new(offset + 1, name)))
                } else {
                    (Self::PositionSeeking { name }, None)
                }
            }
        }
    }

    /// `true` while a marker has been opened but not yet emitted.
    #[must_use]
    pub const fn is_inside_marker(&self) -> bool {
        !matches!(self, Self::Seeking { .. })
    }

    /// Matches `ch` against the next expected prefix character.
    fn advance_prefix(matched: usize, ch: char) -> Self {
        let prefix = MARKER_PREFIX.as_bytes();
        match prefix.get(matched) {
            Some(&expected) if ch == char::from(expected) => {
                if matched + 1 == prefix.len() {
                    Self::NameCollecting { name: String::new() }
                } else {
                    Self::Seeking { matched: matched + 1 }
                }
            }
            // Only the first prefix character can restart a match.
            _ => Self::Seeking {
                matched: usize::from(prefix.first().is_some_and(|&first| ch == char::from(first))),
            },
        }
    }
}

/// Characters that end a marker name.
///
/// Quotes and whitespace end a name inside an attribute value. `<` and `>`
/// end names written without quotes or as plain text.
fn is_name_delimiter(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '<' | '>') || ch.is_whitespace()
}

/// Iterator over the markers of a markup text, in document order.
#[derive(Debug)]
pub struct Markers<'a> {
    /// Remaining characters.
    chars: CharIndices<'a>,
    /// Current machine state.
    state: ScanState,
}

impl<'a> Markers<'a> {
    #[must_use]
    pub fn new(markup: &'a MarkupText) -> Self {
        Self { chars: markup.as_str().char_indices(), state: ScanState::default() }
    }
}

impl Iterator for Markers<'_> {
    type Item = MarkerOccurrence;

    fn next(&mut self) -> Option<Self::Item> {
        for (offset, ch) in self.chars.by_ref() {
            let (state, occurrence) = std::mem::take(&mut self.state).step(offset, ch);
            self.state = state;
            if occurrence.is_some() {
                return occurrence;
            }
        }

        if self.state.is_inside_marker() {
            tracing::debug!(state = ?self.state, "Markup ended inside an unterminated marker");
            self.state = ScanState::default();
        }
        None
    }
}

/// Collects every marker occurrence of `markup` in document order.
///
/// A document without markers yields an empty vector.
#[must_use]
pub fn scan(markup: &MarkupText) -> Vec<MarkerOccurrence> {
    let occurrences: Vec<_> = Markers::new(markup).collect();
    tracing::debug!(count = occurrences.len(), "Scanned markup for markers");
    occurrences
}
