//! The `Mulang` renderer: loads the inputs once and renders on demand.

use std::path::{
    Path,
    PathBuf,
};

use crate::config::{
    DocumentMode,
    InsertMode,
    MulangOptions,
    ParseMode,
};
use crate::dictionary::ContentDictionary;
use crate::error::MulangError;
use crate::markup::MarkupText;
use crate::output::{
    self,
    DEFAULT_STEM,
    OutputNaming,
    WriteReport,
};
use crate::range::build_ranges;
use crate::renderer::{
    self,
    RenderResult,
};
use crate::scanner::scan;

/// Project documentation.
pub const DOCUMENTATION_URL: &str = "https://github.com/lifund/mulang";

/// Multi-language HTML renderer.
///
/// Holds one normalized markup text and one content dictionary. Both are
/// fixed at construction; [`Mulang::render`] only reads them, so a shared
/// reference can be rendered from several threads.
#[derive(Debug, Clone)]
pub struct Mulang {
    /// Normalized source document.
    markup: MarkupText,
    /// Content injected at each marker.
    dictionary: ContentDictionary,
    /// Stem of the source HTML file, if it was loaded from disk.
    source_stem: Option<String>,

    /// Reserved, no effect.
    document_mode: DocumentMode,
    /// Reserved, no effect.
    parse_mode: ParseMode,
    /// Reserved, no effect.
    insert_mode: InsertMode,
}

impl Mulang {
    /// Loads the markup and the dictionary described by `options`.
    ///
    /// File paths take precedence over the inline `source_html` and
    /// `target_json` values.
    ///
    /// # Errors
    /// - [`MulangError::InputNotFound`] when a given file cannot be read
    /// - [`MulangError::MalformedJson`] when the dictionary file cannot be parsed
    pub fn new(options: MulangOptions) -> Result<Self, MulangError> {
        let MulangOptions {
            source_html,
            target_json,
            source_html_path,
            target_json_path,
            document_mode,
            parse_mode,
            insert_mode,
        } = options;

        let (raw_markup, source_stem) = match source_html_path {
            Some(path) => {
                let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned());
                (read_source(&path)?, stem)
            }
            None => (source_html, None),
        };
        let dictionary = match target_json_path {
            Some(path) => ContentDictionary::load(&path)?,
            None => target_json,
        };

        let markup = MarkupText::normalize(&raw_markup);
        tracing::debug!(
            bytes = markup.len(),
            languages = dictionary.meta.languages.len(),
            "Initialized renderer"
        );

        Ok(Self { markup, dictionary, source_stem, document_mode, parse_mode, insert_mode })
    }

    /// Renders one HTML document per language in `meta.languages`.
    ///
    /// The result is rebuilt on every call.
    ///
    /// # Errors
    /// - [`MulangError::UnsupportedLinebreak`] when `meta.linebreak` is not `<br>`
    pub fn render(&self) -> Result<RenderResult, MulangError> {
        let occurrences = scan(&self.markup);
        let ranges = build_ranges(&occurrences, self.markup.len());
        renderer::render(&ranges, &self.markup, &self.dictionary)
    }

    /// Writes each document of `result` to its own file.
    ///
    /// Failures are reported per file; files already written are kept.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn write_files(&self, result: &RenderResult, naming: &OutputNaming) -> WriteReport {
        output::write_all(result, naming)
    }

    /// Default naming for files under `out_dir`, using the source file stem.
    #[must_use]
    pub fn output_naming(&self, out_dir: impl Into<PathBuf>) -> OutputNaming {
        OutputNaming::new(out_dir).with_stem(self.source_stem.as_deref().unwrap_or(DEFAULT_STEM))
    }

    pub fn set_document_mode(&mut self, document_mode: DocumentMode) {
        self.document_mode = document_mode;
    }

    pub fn set_parse_mode(&mut self, parse_mode: ParseMode) {
        self.parse_mode = parse_mode;
    }

    pub fn set_insert_mode(&mut self, insert_mode: InsertMode) {
        self.insert_mode = insert_mode;
    }

    #[must_use]
    pub const fn document_mode(&self) -> DocumentMode {
        self.document_mode
    }

    #[must_use]
    pub const fn parse_mode(&self) -> ParseMode {
        self.parse_mode
    }

    #[must_use]
    pub const fn insert_mode(&self) -> InsertMode {
        self.insert_mode
    }

    /// The normalized markup every language is rendered from.
    #[must_use]
    pub const fn markup(&self) -> &MarkupText {
        &self.markup
    }

    #[must_use]
    pub const fn dictionary(&self) -> &ContentDictionary {
        &self.dictionary
    }

    /// Where to find the project documentation.
    #[must_use]
    pub const fn help() -> &'static str {
        DOCUMENTATION_URL
    }
}

/// Reads a UTF-8 source file.
fn read_source(path: &Path) -> Result<String, MulangError> {
    tracing::debug!("Loading source HTML from: {:?}", path);
    std::fs::read_to_string(path)
        .map_err(|source| MulangError::InputNotFound { path: path.to_path_buf(), source })
}
