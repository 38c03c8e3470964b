//! Construction options and the optional `.mulang.json` project file.
/// Project file loader
mod loader;
/// Settings manager used by the command line
mod manager;
/// Option types and validation
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_dir,
    load_from_file,
};
pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    DocumentMode,
    InsertMode,
    MulangOptions,
    ParseMode,
    ProjectConfig,
    ValidationError,
};
