use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdSyncError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("フォルダ読み込みエラー: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("コピーに失敗: {} -> {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}件のコピーに失敗しました")]
    SyncFailed(usize),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MdSyncError>;
