//! mulang
//!
//! A simple multi-language HTML renderer: one HTML document annotated with
//! `m__<name>` markers plus one JSON content dictionary produce one rendered
//! document per language.
//!
//! ```
//! use mulang::{ContentDictionary, Mulang, MulangOptions};
//!
//! let dictionary = ContentDictionary::from_json_str(
//!     r#"{"meta": {"languages": ["en", "fr"]}, "contents": {"title": ["Hello", "Bonjour"]}}"#,
//!     "<inline>",
//! )?;
//! let mulang = Mulang::new(MulangOptions::inline(r#"<h1 class="m__title"></h1>"#, dictionary))?;
//!
//! let result = mulang.render()?;
//! assert_eq!(result.get("fr"), Some(r#"<h1 class="m__title">Bonjour</h1>"#));
//! # Ok::<(), mulang::MulangError>(())
//! ```

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod markup;
pub mod output;
pub mod range;
pub mod renderer;
pub mod scanner;

pub use config::MulangOptions;
pub use dictionary::ContentDictionary;
pub use engine::Mulang;
pub use error::MulangError;
pub use renderer::RenderResult;
