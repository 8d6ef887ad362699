use crate::error::MdSyncError;
use std::path::PathBuf;

/// 中英両方に存在するファイルのコピー元・コピー先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    pub file_name: String,
    pub zh_source: PathBuf,
    pub en_source: PathBuf,
    pub zh_target: PathBuf,
    pub en_target: PathBuf,
}

/// 1回分の同期計画
#[derive(Debug, Clone, Default)]
pub struct SyncPlan {
    pub matched: Vec<MatchedPair>,
    /// 英語版が無いためスキップしたファイル名
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// コピーせずに計画だけ出す
    pub dry_run: bool,
    /// コピー失敗時も残りのファイルを続行
    pub keep_going: bool,
    pub verbose: bool,
}

/// 失敗したコピー（keep_going時のみ記録）
#[derive(Debug)]
pub struct FailedCopy {
    pub file_name: String,
    pub error: MdSyncError,
}

/// 同期結果
#[derive(Debug, Default)]
pub struct SyncReport {
    /// 中英両方のコピーが完了したファイル名（dry_run時はコピー予定）
    pub copied: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<FailedCopy>,
}

impl SyncReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
