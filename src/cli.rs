//! CLI command structure using clap

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "mulang")]
#[command(version, about = "Render one HTML file per language from a single JSON content file")]
pub(crate) struct Cli {
    /// Project file (defaults to `.mulang.json` in the working directory)
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Source HTML file
    #[arg(long)]
    pub(crate) html: Option<PathBuf>,

    /// Content dictionary (JSON, comments allowed)
    #[arg(long)]
    pub(crate) json: Option<PathBuf>,

    /// Directory the rendered files are written to
    #[arg(short, long)]
    pub(crate) out_dir: Option<PathBuf>,

    /// Output file name pattern, e.g. "{lang}/index.html"
    #[arg(short, long)]
    pub(crate) pattern: Option<String>,

    /// Print the document of this language to stdout instead of writing files
    #[arg(long, value_name = "LANG")]
    pub(crate) print: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "MULANG_LOG_FILE")]
    pub(crate) log_file: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    pub(crate) verbose: bool,
}
