//! 中英マークダウン同期モジュール
//!
//! 中国語フォルダ直下のファイルのうち、同名の英語版があるものだけを
//! それぞれのhexo `_posts` にコピーする。英語版が無いファイルは
//! エラーにせず黙ってスキップする。

mod types;

pub use types::{FailedCopy, MatchedPair, SyncOptions, SyncPlan, SyncReport};

use crate::config::Config;
use crate::error::{MdSyncError, Result};
use crate::scanner;
use std::path::Path;

/// 中英で対になるファイルを洗い出す（ファイルには書き込まない）
pub fn plan(config: &Config) -> Result<SyncPlan> {
    // コピー開始前に両方の取得元を確認
    if !config.en_dir.is_dir() {
        return Err(MdSyncError::FolderNotFound(config.en_dir.display().to_string()));
    }

    let zh_files = scanner::list_plain_files(&config.zh_dir)?;
    let mut plan = SyncPlan::default();

    for zh in zh_files {
        let Some(name) = zh.path.file_name() else {
            continue;
        };

        let en_source = config.en_dir.join(name);
        if !en_source.is_file() {
            plan.skipped.push(zh.file_name);
            continue;
        }

        plan.matched.push(MatchedPair {
            zh_target: config.dest_zh.join(name),
            en_target: config.dest_en.join(name),
            zh_source: zh.path,
            en_source,
            file_name: zh.file_name,
        });
    }

    Ok(plan)
}

/// 同期を1回実行する
///
/// デフォルトでは最初のコピー失敗で中断する。それまでにコピー済みの
/// ファイルはそのまま残る。`keep_going` の場合は失敗を記録して続行する。
pub fn sync(config: &Config, options: SyncOptions) -> Result<SyncReport> {
    let plan = plan(config)?;
    let mut report = SyncReport {
        skipped: plan.skipped,
        ..Default::default()
    };

    if options.verbose {
        for name in &report.skipped {
            println!("  - スキップ（英語版なし）: {}", name);
        }
    }

    for pair in plan.matched {
        if options.dry_run {
            if options.verbose {
                println!("  コピー予定: {}", pair.file_name);
            }
            report.copied.push(pair.file_name);
            continue;
        }

        let mut pair_ok = true;
        for (from, to) in [
            (&pair.zh_source, &pair.zh_target),
            (&pair.en_source, &pair.en_target),
        ] {
            if let Err(e) = copy_file(from, to) {
                if !options.keep_going {
                    return Err(e);
                }
                eprintln!("⚠ {}", e);
                report.failed.push(FailedCopy {
                    file_name: pair.file_name.clone(),
                    error: e,
                });
                pair_ok = false;
            }
        }

        if pair_ok {
            if options.verbose {
                println!("  ✔ {}", pair.file_name);
            }
            report.copied.push(pair.file_name);
        }
    }

    Ok(report)
}

/// 既存ファイルは上書きする
fn copy_file(from: &Path, to: &Path) -> Result<()> {
    std::fs::copy(from, to).map_err(|source| MdSyncError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    Ok(())
}
