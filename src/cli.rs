use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "md-sync")]
#[command(about = "中英マークダウンをhexoの_postsへ同期", long_about = None)]
pub struct Cli {
    /// パス設定JSON（省略時は ./md/zh, ./md/en, ./hexo/source/_posts, ./hexo-en/source/_posts）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// コピーせずに対象ファイルだけ表示
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// コピーに失敗しても残りを続行
    #[arg(short, long)]
    pub keep_going: bool,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}
