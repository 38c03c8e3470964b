//! Writes rendered documents to disk, one file per language.

use std::io;
use std::path::{
    Path,
    PathBuf,
};

use crate::renderer::RenderResult;

/// Replaced by the language code.
pub const LANG_PLACEHOLDER: &str = "{lang}";
/// Replaced by the stem of the source HTML file.
pub const STEM_PLACEHOLDER: &str = "{stem}";
pub const DEFAULT_PATTERN: &str = "{stem}.{lang}.html";
/// Stem used when the markup did not come from a file.
pub const DEFAULT_STEM: &str = "index";

/// Naming convention for output files.
///
/// `pattern` is relative to `out_dir` and may contain directories, e.g.
/// `{lang}/index.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNaming {
    pub out_dir: PathBuf,
    pub pattern: String,
    pub stem: String,
}

impl OutputNaming {
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            pattern: DEFAULT_PATTERN.to_string(),
            stem: DEFAULT_STEM.to_string(),
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.stem = stem.into();
        self
    }

    /// Output path of `language`.
    #[must_use]
    pub fn path_for(&self, language: &str) -> PathBuf {
        let file_name =
            self.pattern.replace(STEM_PLACEHOLDER, &self.stem).replace(LANG_PLACEHOLDER, language);
        self.out_dir.join(file_name)
    }
}

/// A language whose file could not be written.
#[derive(Debug)]
pub struct WriteFailure {
    pub language: String,
    pub path: PathBuf,
    pub error: io::Error,
}

/// Outcome of writing a [`RenderResult`].
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Files written successfully, in language order.
    pub written: Vec<PathBuf>,
    pub failed: Vec<WriteFailure>,
}

impl WriteReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes every document of `result` to the path chosen by `naming`.
///
/// A failing file is recorded in the report and does not stop the others.
#[must_use]
pub fn write_all(result: &RenderResult, naming: &OutputNaming) -> WriteReport {
    let mut report = WriteReport::default();

    for document in result {
        let path = naming.path_for(&document.language);
        match write_document(&path, &document.language, &document.html) {
            Ok(()) => {
                tracing::debug!(language = %document.language, path = %path.display(), "Wrote document");
                report.written.push(path);
            }
            Err(error) => {
                tracing::warn!(
                    language = %document.language,
                    path = %path.display(),
                    %error,
                    "Failed to write document"
                );
                report.failed.push(WriteFailure { language: document.language.clone(), path, error });
            }
        }
    }

    report
}

/// Writes one document, creating missing parent directories.
fn write_document(path: &Path, language: &str, html: &str) -> io::Result<()> {
    if language.is_empty() || language.contains(['/', '\\']) || language == ".." {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("language code '{language}' cannot be used in a file name"),
        ));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
}
