use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "jsloc",
    version = crate::VERSION,
    about = "JavaScript のソース行メトリクス集計ツール (SLOC / 論理行 / コメント率)"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 解析する .js ファイルまたはディレクトリ
    #[arg(value_hint = ValueHint::AnyPath)]
    pub path: PathBuf,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// カテゴリ別の論理行数を表示
    #[arg(long, help_heading = "出力")]
    pub breakdown: bool,

    /// ディレクトリ集計のみ表示（ファイル別の行は出さない）
    #[arg(long, help_heading = "出力")]
    pub summary_only: bool,

    /// ルールファイル (YAML / JSON)。指定したキーだけ既定値を上書き
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "ルール")]
    pub rules: Option<PathBuf>,

    /// 対象拡張子（カンマ区切り/複数指定可）
    #[arg(long, value_delimiter = ',', default_value = "js", help_heading = "フィルタ")]
    pub ext: Vec<String>,

    /// 降りないディレクトリ名（カンマ区切り/複数指定可）
    #[arg(long, value_delimiter = ',', default_value = "node_modules", help_heading = "フィルタ")]
    pub exclude_dir: Vec<String>,

    /// 除外するファイル名のサフィックス（カンマ区切り/複数指定可）
    #[arg(long, value_delimiter = ',', default_value = ".min.js", help_heading = "フィルタ")]
    pub exclude_suffix: Vec<String>,

    /// `.` で始まるディレクトリも走査
    #[arg(long, help_heading = "走査")]
    pub hidden: bool,

    /// .gitignore を尊重
    #[arg(long, help_heading = "走査")]
    pub gitignore: bool,

    /// シンボリックリンクを辿らない
    #[arg(long, help_heading = "走査")]
    pub no_follow: bool,

    /// 最大探索深さ
    #[arg(long, help_heading = "走査")]
    pub max_depth: Option<usize>,

    /// 並列数（既定: CPU 数）
    #[arg(short = 'j', long, help_heading = "走査")]
    pub jobs: Option<usize>,

    /// 1 つでも失敗したら中断
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// ログを詳しくする (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
