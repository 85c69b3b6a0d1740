use std::path::{Path, PathBuf};

use jsloc_core::{CommentSpan, DirectorySummary, LineMetrics, LogicalCounts, SourceAnalysis};
use serde::Serialize;

use crate::error::EngineError;

/// 1 ファイルの解析結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileAnalysis {
    pub metrics: LineMetrics,
    pub logical: LogicalCounts,
    pub comments: Vec<CommentSpan>,
}

impl FileAnalysis {
    pub fn from_source(path: impl Into<PathBuf>, analysis: SourceAnalysis) -> Self {
        let SourceAnalysis { metrics, logical, comments } = analysis;
        Self { metrics: metrics.with_path(path), logical, comments }
    }

    pub fn path(&self) -> Option<&Path> {
        self.metrics.path()
    }
}

/// 実行全体の結果
///
/// 失敗したファイルは `errors` にだけ現れ、`summary` には含まれません。
#[derive(Debug, Default)]
pub struct RunResult {
    pub files: Vec<FileAnalysis>,
    pub errors: Vec<(PathBuf, EngineError)>,
    pub summary: DirectorySummary,
}

impl RunResult {
    pub fn new(files: Vec<FileAnalysis>, errors: Vec<(PathBuf, EngineError)>) -> Self {
        let summary = files.iter().map(|f| &f.metrics).collect();
        Self { files, errors, summary }
    }

    /// カテゴリ別カウントの合計
    pub fn logical_totals(&self) -> LogicalCounts {
        self.files.iter().map(|f| f.logical).fold(LogicalCounts::default(), |acc, c| acc + c)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
