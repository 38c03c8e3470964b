//! Content dictionary: the per-language strings injected at each marker.
//!
//! ```json
//! {
//!     "meta": { "languages": ["eng", "kor"], "linebreak": "<br>" },
//!     "contents": {
//!         "section_1_title": ["title", "제목"],
//!         "section_1_description": ["line1<br>line2", "줄1<br>줄2"]
//!     }
//! }
//! ```
//!
//! Dictionaries are read as JSONC, so comments and trailing commas are accepted.

use std::collections::HashMap;
use std::path::Path;

use jsonc_parser::ParseOptions;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use crate::error::MulangError;

/// The only linebreak token the renderer currently supports.
pub const DEFAULT_LINEBREAK: &str = "<br>";

/// Parsed content dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDictionary {
    pub meta: Meta,
    /// Marker name (without the `m__` prefix) to its localized values.
    pub contents: HashMap<String, ContentValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    /// Language codes in output order. Content arrays are aligned with it.
    pub languages: Vec<String>,
    /// Linebreak token used inside content strings.
    pub linebreak: String,
    /// Edit log kept by external editing tools. Never read while rendering.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub update_history: Vec<UpdateRecord>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            linebreak: DEFAULT_LINEBREAK.to_string(),
            update_history: Vec::new(),
        }
    }
}

/// One entry of `meta.updateHistory`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdateRecord {
    pub user: String,
    pub time: String,
    pub comment: String,
    pub contents: Value,
}

/// Localized values of one marker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ContentValue {
    /// Same text for every language.
    Shared(String),
    /// One text per language, positionally aligned with `meta.languages`.
    PerLanguage(Vec<String>),
}

impl ContentValue {
    /// Text for the language at `language_index` in `meta.languages`.
    #[must_use]
    pub fn for_language(&self, language_index: usize) -> Option<&str> {
        match self {
            Self::Shared(text) => Some(text),
            Self::PerLanguage(texts) => texts.get(language_index).map(String::as_str),
        }
    }
}

impl ContentDictionary {
    /// Parses a dictionary from JSON(C) text.
    ///
    /// `origin` names the source in error messages (a file path or `<inline>`).
    ///
    /// # Errors
    /// - [`MulangError::MalformedJson`] when the text is not JSONC or has the wrong shape
    pub fn from_json_str(text: &str, origin: &str) -> Result<Self, MulangError> {
        let value = jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())
            .map_err(|e| MulangError::malformed_json(origin, e))?
            .ok_or_else(|| MulangError::malformed_json(origin, "document is empty"))?;

        Self::from_value(value, origin)
    }

    /// Builds a dictionary from an already decoded JSON value.
    ///
    /// # Errors
    /// - [`MulangError::MalformedJson`] when the value has the wrong shape
    pub fn from_value(value: Value, origin: &str) -> Result<Self, MulangError> {
        serde_json::from_value(value).map_err(|e| MulangError::malformed_json(origin, e))
    }

    /// Reads and parses the dictionary stored at `path`.
    ///
    /// # Errors
    /// - [`MulangError::InputNotFound`] when the file cannot be read
    /// - [`MulangError::MalformedJson`] when it cannot be parsed
    pub fn load(path: &Path) -> Result<Self, MulangError> {
        tracing::debug!("Loading content dictionary from: {:?}", path);

        let text = std::fs::read_to_string(path)
            .map_err(|source| MulangError::InputNotFound { path: path.to_path_buf(), source })?;
        let dictionary = Self::from_json_str(&text, &format!("'{}'", path.display()))?;

        tracing::debug!(
            languages = ?dictionary.meta.languages,
            entries = dictionary.contents.len(),
            "Loaded content dictionary"
        );
        Ok(dictionary)
    }

    /// Position of `language` in `meta.languages`.
    #[must_use]
    pub fn language_index(&self, language: &str) -> Option<usize> {
        self.meta.languages.iter().position(|l| l == language)
    }

    /// Text of marker `name` for the language at `language_index`.
    #[must_use]
    pub fn content(&self, name: &str, language_index: usize) -> Option<&str> {
        self.contents.get(name)?.for_language(language_index)
    }

    /// Rejects linebreak tokens other than [`DEFAULT_LINEBREAK`].
    ///
    /// # Errors
    /// - [`MulangError::UnsupportedLinebreak`] with the configured value
    pub fn check_linebreak(&self) -> Result<(), MulangError> {
        if self.meta.linebreak == DEFAULT_LINEBREAK {
            Ok(())
        } else {
            Err(MulangError::UnsupportedLinebreak(self.meta.linebreak.clone()))
        }
    }
}
