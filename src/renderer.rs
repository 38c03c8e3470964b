//! Assembles one document per language from the ranges of a markup text.

use std::collections::HashSet;

use crate::dictionary::ContentDictionary;
use crate::error::MulangError;
use crate::markup::MarkupText;
use crate::range::Range;

/// Rendered HTML of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub language: String,
    pub html: String,
}

/// Language code to rendered HTML, in `meta.languages` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderResult {
    /// One entry per distinct language.
    documents: Vec<RenderedDocument>,
}

impl RenderResult {
    /// HTML rendered for `language`.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&str> {
        self.documents.iter().find(|doc| doc.language == language).map(|doc| doc.html.as_str())
    }

    /// Languages in output order.
    #[must_use]
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|doc| doc.language.as_str())
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, RenderedDocument> {
        self.documents.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<'a> IntoIterator for &'a RenderResult {
    type Item = &'a RenderedDocument;
    type IntoIter = std::slice::Iter<'a, RenderedDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Renders `markup` once per language declared in `dictionary`.
///
/// Every range contributes its slice followed by the language's value for the
/// range's marker. Markers missing from `contents`, or lacking a value for a
/// language, contribute nothing. Values are inserted verbatim.
///
/// # Errors
/// - [`MulangError::UnsupportedLinebreak`] when `meta.linebreak` is not `<br>`
pub fn render(
    ranges: &[Range],
    markup: &MarkupText,
    dictionary: &ContentDictionary,
) -> Result<RenderResult, MulangError> {
    dictionary.check_linebreak()?;

    let mut seen = HashSet::new();
    let mut documents = Vec::with_capacity(dictionary.meta.languages.len());

    for (language_index, language) in dictionary.meta.languages.iter().enumerate() {
        if !seen.insert(language.as_str()) {
            tracing::warn!(language = %language, "Duplicate language in meta.languages, skipping");
            continue;
        }

        let html = render_language(ranges, markup, dictionary, language_index, language);
        documents.push(RenderedDocument { language: language.clone(), html });
    }

    tracing::debug!(languages = documents.len(), ranges = ranges.len(), "Rendered markup");
    Ok(RenderResult { documents })
}

/// Concatenates all ranges for the language at `language_index`.
fn render_language(
    ranges: &[Range],
    markup: &MarkupText,
    dictionary: &ContentDictionary,
    language_index: usize,
    language: &str,
) -> String {
    let mut html = String::with_capacity(markup.len());

    for range in ranges {
        if let Some(slice) = markup.slice(range.slice_start, range.slice_end) {
            html.push_str(slice);
        } else {
            tracing::warn!(?range, "Range does not fit the markup, slice skipped");
        }

        if !range.has_marker() {
            continue;
        }
        match dictionary.contents.get(&range.name) {
            Some(value) => match value.for_language(language_index) {
                Some(text) => html.push_str(text),
                None => tracing::warn!(
                    marker = %range.name,
                    language = %language,
                    "No content for language, marker left empty"
                ),
            },
            None => tracing::debug!(marker = %range.name, "Marker not in contents, passing through"),
        }
    }

    html
}
