use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Jsonl,
    Yaml,
    Csv,
    Md,
}

/// 出力の組み立て方
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// カテゴリ別の論理行数も出す
    pub breakdown: bool,
    /// ディレクトリ集計だけを出す
    pub summary_only: bool,
}
