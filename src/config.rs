use crate::error::{MdSyncError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 同期対象の4つのディレクトリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 中国語マークダウンの取得元
    pub zh_dir: PathBuf,
    /// 英語マークダウンの取得元
    pub en_dir: PathBuf,
    /// 中国語版hexoの_posts
    pub dest_zh: PathBuf,
    /// 英語版hexoの_posts
    pub dest_en: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zh_dir: PathBuf::from("./md/zh"),
            en_dir: PathBuf::from("./md/en"),
            dest_zh: PathBuf::from("./hexo/source/_posts"),
            dest_en: PathBuf::from("./hexo-en/source/_posts"),
        }
    }
}

impl Config {
    /// 設定を読み込む（指定がなければデフォルトのパス）
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// JSONファイルから読み込む。省略したフィールドはデフォルト値
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(MdSyncError::Config(format!(
                "設定ファイルが見つかりません: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
