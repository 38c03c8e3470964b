//! Errors raised while loading and rendering a document.

use std::path::PathBuf;

use thiserror::Error;

/// Defines errors that may occur while building or rendering a [`crate::Mulang`]
#[derive(Error, Debug)]
pub enum MulangError {
    /// A source file does not exist or cannot be read as UTF-8 text
    #[error("Failed to read input file '{}': {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content dictionary is not valid JSON(C) or does not have the expected shape
    #[error("Failed to parse content dictionary {origin}: {message}")]
    MalformedJson { origin: String, message: String },

    /// `meta.linebreak` is set to something other than `<br>`
    #[error("Unsupported linebreak '{0}': only \"<br>\" is supported")]
    UnsupportedLinebreak(String),
}

impl MulangError {
    /// Builds a [`MulangError::MalformedJson`] for a dictionary loaded from `origin`.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn malformed_json(origin: impl Into<String>, message: impl ToString) -> Self {
        Self::MalformedJson { origin: origin.into(), message: message.to_string() }
    }
}
