//! Entry point for the `mulang` command line.

mod cli;

use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use mulang::Mulang;
use mulang::MulangError;
use mulang::config::{
    ConfigError,
    ConfigManager,
};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Errors that end the command with a failure status
#[derive(Error, Debug)]
enum CliError {
    /// Invalid or unreadable project configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Loading or rendering failed
    #[error(transparent)]
    Render(#[from] MulangError),
    /// `--print` named a language the dictionary does not declare
    #[error("Language '{0}' is not declared in meta.languages")]
    UnknownLanguage(String),
    /// Working directory or stdout I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Some documents could not be written
    #[error("{failed} of {total} documents could not be written")]
    PartialWrite { failed: usize, total: usize },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the fmt subscriber, writing to `--log-file` when given.
///
/// The returned guard must live until exit so buffered file logs are flushed.
fn init_tracing(cli: &Cli) -> Option<WorkerGuard> {
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

    if let Some(path) = &cli.log_file {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
        let file_name = path.file_name().unwrap_or_else(|| OsStr::new("mulang.log"));
        let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
        Some(guard)
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        None
    }
}

/// Loads settings, renders, and writes (or prints) the result.
fn run(cli: &Cli) -> Result<(), CliError> {
    let cwd = std::env::current_dir()?;

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(cli.config.as_deref(), &cwd)?;

    // コマンドライン引数で設定を上書き
    let mut settings = config_manager.get_settings().clone();
    if let Some(html) = &cli.html {
        settings.options.source_html_path = Some(html.clone());
    }
    if let Some(json) = &cli.json {
        settings.options.target_json_path = Some(json.clone());
    }
    if let Some(out_dir) = &cli.out_dir {
        settings.out_dir.clone_from(out_dir);
    }
    if let Some(pattern) = &cli.pattern {
        settings.pattern.clone_from(pattern);
    }
    config_manager.update_settings(settings)?;
    let settings = config_manager.get_settings();

    let mulang = Mulang::new(settings.options.clone())?;
    let result = mulang.render()?;

    if let Some(language) = &cli.print {
        let html = result.get(language).ok_or_else(|| CliError::UnknownLanguage(language.clone()))?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{html}")?;
        return Ok(());
    }

    let naming = mulang.output_naming(&settings.out_dir).with_pattern(settings.pattern.as_str());
    let report = mulang.write_files(&result, &naming);
    for path in &report.written {
        tracing::info!("Wrote {}", path.display());
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::PartialWrite { failed: report.failed.len(), total: result.len() })
    }
}
