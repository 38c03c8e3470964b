use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::dictionary::ContentDictionary;
use crate::output::{
    DEFAULT_PATTERN,
    LANG_PLACEHOLDER,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "pattern")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbers the errors one per line
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Kind of document being rendered. Only `html` is recognized; it has no
/// effect on rendering yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentMode {
    #[default]
    Html,
}

/// How markers are located. Only `class` is recognized; it has no effect yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    #[default]
    Class,
}

/// Where content goes relative to the marked tag. Only `prepend` is
/// recognized; it has no effect yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertMode {
    #[default]
    Prepend,
}

impl fmt::Display for DocumentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("html"),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => f.write_str("class"),
        }
    }
}

impl fmt::Display for InsertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prepend => f.write_str("prepend"),
        }
    }
}

/// Options accepted by [`crate::Mulang::new`].
///
/// A path, when set, takes precedence over the matching inline value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MulangOptions {
    /// Raw markup.
    pub source_html: String,
    /// Inline content dictionary.
    pub target_json: ContentDictionary,
    pub source_html_path: Option<PathBuf>,
    pub target_json_path: Option<PathBuf>,

    pub document_mode: DocumentMode,
    pub parse_mode: ParseMode,
    pub insert_mode: InsertMode,
}

impl MulangOptions {
    /// Options rendering `source_html` with `target_json`.
    #[must_use]
    pub fn inline(source_html: impl Into<String>, target_json: ContentDictionary) -> Self {
        Self { source_html: source_html.into(), target_json, ..Self::default() }
    }

    /// Options loading both inputs from disk.
    #[must_use]
    pub fn from_paths(source_html_path: impl Into<PathBuf>, target_json_path: impl Into<PathBuf>) -> Self {
        Self {
            source_html_path: Some(source_html_path.into()),
            target_json_path: Some(target_json_path.into()),
            ..Self::default()
        }
    }
}

/// Contents of a `.mulang.json` project file.
///
/// Holds [`MulangOptions`] fields at the top level plus output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    #[serde(flatten)]
    pub options: MulangOptions,

    /// Directory the rendered files are written to.
    pub out_dir: PathBuf,
    /// Output file name pattern. See [`crate::output::OutputNaming`].
    pub pattern: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            options: MulangOptions::default(),
            out_dir: PathBuf::from("."),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl ProjectConfig {
    /// Makes relative paths relative to `base` (the directory of the project file).
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };

        if let Some(path) = self.options.source_html_path.as_mut() {
            resolve(path);
        }
        if let Some(path) = self.options.target_json_path.as_mut() {
            resolve(path);
        }
        resolve(&mut self.out_dir);
    }

    /// # Errors
    /// - No HTML source given
    /// - Empty pattern or pattern without a language placeholder
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.options.source_html.is_empty() && self.options.source_html_path.is_none() {
            errors.push(ValidationError::new(
                "sourceHtmlPath",
                "No HTML source given. Set \"sourceHtmlPath\" (e.g., \"index.html\") or \"sourceHtml\"",
            ));
        }

        if self.pattern.is_empty() {
            errors.push(ValidationError::new(
                "pattern",
                format!("The pattern cannot be empty. Example: \"{DEFAULT_PATTERN}\""),
            ));
        } else if !self.pattern.contains(LANG_PLACEHOLDER) {
            errors.push(ValidationError::new(
                "pattern",
                format!(
                    "The pattern must contain {LANG_PLACEHOLDER}, otherwise every language writes the same file"
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
