//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    ProjectConfig,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: ProjectConfig,

    /// 読み込んだ設定ファイルのパス
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: ProjectConfig::default(), config_path: None }
    }

    /// 設定を読み込む
    ///
    /// `explicit_path` が指定されていればそのファイルを、なければ `dir` 内の
    /// `.mulang.json` を読み込む。どちらもなければデフォルト値を使う。
    /// バリデーションは [`Self::update_settings`] で行う
    /// (コマンドライン引数で不足分が補われるため)。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    pub fn load_settings(
        &mut self,
        explicit_path: Option<&Path>,
        dir: &Path,
    ) -> Result<(), ConfigError> {
        tracing::debug!(?explicit_path, dir = %dir.display(), "Loading settings");

        let (settings, config_path) = if let Some(path) = explicit_path {
            (loader::load_from_file(path)?, Some(path.to_path_buf()))
        } else {
            loader::load_from_dir(dir)?.map_or_else(
                || (ProjectConfig::default(), None),
                |config| {
                    tracing::debug!("Loaded project settings: {:?}", config);
                    (config, Some(dir.join(super::CONFIG_FILE_NAME)))
                },
            )
        };

        // 設定を保存
        self.current_settings = settings;
        self.config_path = config_path;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 設定を更新する
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn update_settings(&mut self, new_settings: ProjectConfig) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        // バリデーション
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        // 設定を更新
        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &ProjectConfig {
        &self.current_settings
    }

    /// 読み込んだ設定ファイルのパスを取得
    #[must_use]
    pub const fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }
}
