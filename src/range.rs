//! Cascading slices of the markup, one per insertion point.

use crate::scanner::MarkerOccurrence;

/// Half-open slice `[slice_start, slice_end)` of the markup, followed by the
/// content of the marker `name`.
///
/// The trailing range of a document carries an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    pub slice_start: usize,
    pub slice_end: usize,
    pub name: String,
}

impl Range {
    #[must_use]
    pub fn new(slice_start: usize, slice_end: usize, name: impl Into<String>) -> Self {
        Self { slice_start, slice_end, name: name.into() }
    }

    /// Whether content is injected after this slice.
    #[must_use]
    pub fn has_marker(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Splits `[0, text_len)` at every occurrence position.
///
/// The result holds `occurrences.len() + 1` contiguous ranges: range `i` ends
/// where occurrence `i` inserts and is named after it; the last range runs to
/// `text_len` with an empty name. Without occurrences the whole text is a
/// single unnamed range.
#[must_use]
pub fn build_ranges(occurrences: &[MarkerOccurrence], text_len: usize) -> Vec<Range> {
    let mut ranges = Vec::with_capacity(occurrences.len() + 1);
    let mut slice_start = 0;

    for occurrence in occurrences {
        ranges.push(Range::new(slice_start, occurrence.position, occurrence.name.as_str()));
        slice_start = occurrence.position;
    }
    ranges.push(Range::new(slice_start, text_len, ""));

    if occurrences.is_empty() {
        tracing::debug!("No markers found, rendering the document as a single range");
    }
    ranges
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::markup::MarkupText;
    use crate::scanner::scan;

    fn occ(position: usize, name: &str) -> MarkerOccurrence {
        MarkerOccurrence::new(position, name)
    }

    /// Asserts the partition invariant: contiguous, starting at 0, ending at `len`.
    fn assert_partitions(ranges: &[Range], len: usize) {
        assert_that!(ranges.first().map(|r| r.slice_start), some(eq(0)));
        assert_that!(ranges.last().map(|r| r.slice_end), some(eq(len)));
        for pair in ranges.windows(2) {
            assert_that!(pair[1].slice_start, eq(pair[0].slice_end));
        }
    }

    #[rstest]
    fn empty_occurrences_yield_whole_document() {
        let ranges = build_ranges(&[], 42);

        assert_eq!(ranges, vec![Range::new(0, 42, "")]);
    }

    #[rstest]
    fn empty_text_without_markers() {
        let ranges = build_ranges(&[], 0);

        assert_eq!(ranges, vec![Range::new(0, 0, "")]);
        assert!(!ranges[0].has_marker());
    }

    #[rstest]
    fn single_occurrence() {
        let ranges = build_ranges(&[occ(21, "title")], 26);

        assert_eq!(ranges, vec![Range::new(0, 21, "title"), Range::new(21, 26, "")]);
    }

    #[rstest]
    fn occurrences_keep_scan_order() {
        let ranges = build_ranges(&[occ(5, "zeta"), occ(9, "alpha"), occ(14, "mid")], 20);

        assert_eq!(
            ranges,
            vec![
                Range::new(0, 5, "zeta"),
                Range::new(5, 9, "alpha"),
                Range::new(9, 14, "mid"),
                Range::new(14, 20, ""),
            ]
        );
    }

    #[rstest]
    fn marker_at_end_of_text_leaves_empty_trailing_range() {
        let ranges = build_ranges(&[occ(10, "tail")], 10);

        assert_eq!(ranges.last(), Some(&Range::new(10, 10, "")));
    }

    #[rstest]
    #[case::none("<main><p>static</p></main>", 0)]
    #[case::one(r#"<h1 class="m__title"></h1>"#, 1)]
    #[case::two("<p>m__a</p><p>m__b</p>", 2)]
    #[case::three(
        r#"<header class="m__h"></header> <p class="m__p1"></p> <p class="m__p2"></p>"#,
        3
    )]
    fn ranges_partition_scanned_markup(#[case] raw: &str, #[case] markers: usize) {
        let markup = MarkupText::normalize(raw);
        let occurrences = scan(&markup);

        let ranges = build_ranges(&occurrences, markup.len());

        assert_that!(ranges, len(eq(markers + 1)));
        assert_partitions(&ranges, markup.len());
        let rebuilt: String =
            ranges.iter().map(|r| markup.slice(r.slice_start, r.slice_end).unwrap()).collect();
        assert_that!(rebuilt, eq(markup.as_str()));
    }
}
