//! ファイル単位のメトリクスとディレクトリ集計

use std::path::{Path, PathBuf};

use jsloc_shared_kernel::LineCount;
use serde::{Deserialize, Serialize};

/// 小数第 2 位で四捨五入
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 空白のみの行数
pub fn count_blank_lines<S: AsRef<str>>(lines: &[S]) -> usize {
    lines.iter().filter(|l| l.as_ref().trim().is_empty()).count()
}

/// 許容される空行数: `round(total * 0.25)` (0.5 は切り上げ)
#[inline]
pub const fn allowed_blank_lines(total: usize) -> usize {
    (total + 2) / 4
}

/// 物理行数
///
/// 空行のうち全体の 25% を超えた分だけを総行数から差し引きます。
pub const fn physical_lines(total: usize, blank: usize) -> usize {
    total.saturating_sub(blank.saturating_sub(allowed_blank_lines(total)))
}

/// コメント率 (%)。物理行が 0 なら 0
pub fn comment_coverage_percent(unique_comment_lines: usize, physical: usize) -> f64 {
    round2(LineCount::from(unique_comment_lines).ratio_of(LineCount::from(physical)) * 100.0)
}

/// 1 ファイルのメトリクス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineMetrics {
    #[serde(rename = "SLOC")]
    pub total_lines: LineCount,
    #[serde(rename = "Blank LOCs")]
    pub blank_lines: LineCount,
    #[serde(rename = "Physical SLOC")]
    pub physical_lines: LineCount,
    #[serde(rename = "Logical SLOC")]
    pub logical_lines: LineCount,
    #[serde(rename = "CLOC, C & SLOC")]
    pub unique_comment_lines: LineCount,
    #[serde(rename = "Comment Coverage %")]
    pub comment_coverage_percent: f64,
    #[serde(rename = "file", default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
}

impl LineMetrics {
    /// 生の件数から派生値 (物理行・コメント率) を計算して組み立てる
    pub fn from_counts(total: usize, blank: usize, unique_comment_lines: usize, logical: usize) -> Self {
        let physical = physical_lines(total, blank);
        Self {
            total_lines: total.into(),
            blank_lines: blank.into(),
            physical_lines: physical.into(),
            logical_lines: logical.into(),
            unique_comment_lines: unique_comment_lines.into(),
            comment_coverage_percent: comment_coverage_percent(unique_comment_lines, physical),
            file_path: None,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// 25% を超えた分として差し引かれた空行数
    pub fn excess_blank_lines(&self) -> usize {
        self.total_lines.value() - self.physical_lines.value()
    }
}

/// ディレクトリ集計
///
/// 加算できる 5 項目を合計し、KLOC とコメント率は合計値から求めます
/// (ファイルごとの率の平均ではありません)。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorySummary {
    #[serde(rename = "Files")]
    pub files: usize,
    #[serde(rename = "SLOC")]
    pub total_lines: LineCount,
    #[serde(rename = "Blank LOCs")]
    pub blank_lines: LineCount,
    #[serde(rename = "Physical SLOC")]
    pub physical_lines: LineCount,
    #[serde(rename = "Logical SLOC")]
    pub logical_lines: LineCount,
    #[serde(rename = "CLOC, C & SLOC")]
    pub unique_comment_lines: LineCount,
    #[serde(rename = "KLOC")]
    pub kilo_lines: f64,
    #[serde(rename = "Average Comment Coverage")]
    pub average_comment_coverage: f64,
}

impl DirectorySummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_metrics<'a, I>(metrics: I) -> Self
    where
        I: IntoIterator<Item = &'a LineMetrics>,
    {
        let mut summary = Self::new();
        for m in metrics {
            summary.push(m);
        }
        summary
    }

    pub fn push(&mut self, metrics: &LineMetrics) {
        self.files += 1;
        self.total_lines += metrics.total_lines;
        self.blank_lines += metrics.blank_lines;
        self.physical_lines += metrics.physical_lines;
        self.logical_lines += metrics.logical_lines;
        self.unique_comment_lines += metrics.unique_comment_lines;
        self.refresh_derived();
    }

    /// 2 つの集計を合わせる (結合的・可換)
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        self.files += other.files;
        self.total_lines += other.total_lines;
        self.blank_lines += other.blank_lines;
        self.physical_lines += other.physical_lines;
        self.logical_lines += other.logical_lines;
        self.unique_comment_lines += other.unique_comment_lines;
        self.refresh_derived();
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn refresh_derived(&mut self) {
        self.kilo_lines = self.total_lines.value() as f64 / 1000.0;
        self.average_comment_coverage = self.unique_comment_lines.ratio_of(self.physical_lines) * 100.0;
    }
}

impl<'a> FromIterator<&'a LineMetrics> for DirectorySummary {
    fn from_iter<I: IntoIterator<Item = &'a LineMetrics>>(iter: I) -> Self {
        Self::from_metrics(iter)
    }
}
