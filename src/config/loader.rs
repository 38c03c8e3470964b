//! プロジェクト設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    ProjectConfig,
};

/// プロジェクト設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".mulang.json";

/// ディレクトリから設定を読み込む
///
/// `.mulang.json` ファイルを探して読み込む
///
/// # Arguments
/// * `dir` - 設定ファイルを探すディレクトリ
///
/// # Returns
/// - `Ok(Some(config))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub fn load_from_dir(dir: &Path) -> Result<Option<ProjectConfig>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_from_file(&config_path).map(Some)
}

/// 指定されたファイルから設定を読み込む
///
/// 相対パスは設定ファイルのディレクトリを基準に解決する
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub fn load_from_file(config_path: &Path) -> Result<ProjectConfig, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let mut config: ProjectConfig = serde_json::from_str(&content)?;

    if let Some(base) = config_path.parent() {
        config.resolve_paths(base);
    }

    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `load_from_dir`: 設定ファイルが存在する場合
    #[rstest]
    fn test_load_from_dir_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"sourceHtmlPath": "index.html", "pattern": "{lang}.html"}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.pattern, "{lang}.html");
        assert_eq!(config.options.source_html_path, Some(temp_dir.path().join("index.html")));
        assert_eq!(config.out_dir, temp_dir.path().join("."));
    }

    /// `load_from_dir`: 設定ファイルが存在しない場合
    #[rstest]
    fn test_load_from_dir_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    /// `load_from_dir`: JSON パースエラー
    #[rstest]
    fn test_load_from_dir_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// `load_from_file`: ファイルが存在しない場合
    #[rstest]
    fn test_load_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_file(&temp_dir.path().join("missing.json"));

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
