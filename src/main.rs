use anyhow::Context;
use clap::Parser;
use hexo_md_sync::{cli, config, error, sync};
use cli::Cli;
use config::Config;
use sync::SyncOptions;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("設定の読み込みに失敗")?;

    if cli.verbose {
        println!("📝 md-sync - マークダウン同期\n");
        println!("  zh: {} -> {}", config.zh_dir.display(), config.dest_zh.display());
        println!("  en: {} -> {}", config.en_dir.display(), config.dest_en.display());
    }

    let options = SyncOptions {
        dry_run: cli.dry_run,
        keep_going: cli.keep_going,
        verbose: cli.verbose,
    };
    let report = sync::sync(&config, options)?;

    if cli.verbose || cli.dry_run {
        let label = if cli.dry_run { "コピー予定" } else { "同期完了" };
        println!("✔ {}: {}件", label, report.copied.len());
    }

    if !report.is_success() {
        return Err(error::MdSyncError::SyncFailed(report.failed.len()).into());
    }

    Ok(())
}
