//! # jsloc core
//!
//! JavaScript ソースの行分類とメトリクス算出。
//!
//! - [`comment`]: コメント検出 (5 種類の形状、複数行ブロックを含む)
//! - [`strip`]: コメント行・空行の除去
//! - [`logical`]: 引数の正規化と構文カテゴリごとの論理行カウント
//! - [`metrics`]: ファイル単位のメトリクスとディレクトリ集計
//! - [`config`]: 論理行カウントのルールセット
//!
//! AST は構築しません。文字列リテラル内の `//` や `/*` もコメントとして扱われ、
//! ネストしたブロックコメントは最初の `*/` で閉じます。

#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod comment;
pub mod config;
pub mod logical;
pub mod metrics;
pub mod parser;
pub mod source;
pub mod strip;

pub use comment::{CommentShape, CommentSpan, scan_comments};
pub use config::{CompiledRules, RuleSet};
pub use logical::{Category, LogicalCounts, count_logical_lines};
pub use metrics::{DirectorySummary, LineMetrics};
pub use parser::{SourceAnalysis, analyze_lines, analyze_source};
pub use source::split_lines;
pub use strip::strip_comments;
