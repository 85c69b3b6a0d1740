use serde::Serialize;

use crate::comment::{CommentSpan, scan_comments, unique_comment_lines};
use crate::config::CompiledRules;
use crate::logical::{LogicalCounts, count_logical_lines};
use crate::metrics::{LineMetrics, count_blank_lines};
use crate::source::split_lines;
use crate::strip::strip_comments;

/// 1 つのソースの解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceAnalysis {
    pub metrics: LineMetrics,
    pub logical: LogicalCounts,
    pub comments: Vec<CommentSpan>,
}

/// 行の並びを解析する
///
/// これがライブラリの中心となる入口です。どんな入力 (空を含む) に対しても
/// 失敗せず、閉じていないブロックコメントは単に無視されます。
#[must_use]
pub fn analyze_lines<S: AsRef<str>>(lines: &[S], rules: &CompiledRules) -> SourceAnalysis {
    let total = lines.len();
    let blank = count_blank_lines(lines);

    let comments = scan_comments(lines);
    let unique = unique_comment_lines(&comments);

    let code_lines = strip_comments(lines, &comments);
    let logical = count_logical_lines(&code_lines, rules);

    SourceAnalysis {
        metrics: LineMetrics::from_counts(total, blank, unique, logical.total()),
        logical,
        comments,
    }
}

/// テキスト全体を行に分割してから解析する
#[must_use]
pub fn analyze_source(text: &str, rules: &CompiledRules) -> SourceAnalysis {
    analyze_lines(&split_lines(text), rules)
}
