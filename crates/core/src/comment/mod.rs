//! コメント検出
//!
//! 行の並びを先頭から一度だけ走査し、[`CommentSpan`] の列を検出順に返します。
//! 行をまたぐ状態は「閉じていないブロックコメントの内側か」だけです。

mod scanner;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use scanner::{CommentScanner, scan_comments};

/// コメントの形状
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentShape {
    /// 行全体が `//` コメント (インデント可)
    SingleLineFull,
    /// コードの後ろに続く `//` コメント
    SingleLineInline,
    /// 行頭 (空白のみ先行) から始まる `/* ... */`
    BlockSingleLine,
    /// コードの後ろにある `/* ... */`
    BlockInline,
    /// 複数行にまたがる `/* ... */`
    BlockMultiLine,
}

impl CommentShape {
    /// 行内の一部だけを占める形状か (除去時にコード部分が残る)
    #[inline]
    pub const fn is_inline(self) -> bool {
        matches!(self, Self::SingleLineInline | Self::BlockInline)
    }
}

/// 1 つのコメントが占める行範囲 (0 始まり、両端を含む)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentSpan {
    pub shape: CommentShape,
    pub line_start: usize,
    pub line_end: usize,
}

impl CommentSpan {
    /// 1 行だけのスパン
    #[inline]
    pub const fn single(shape: CommentShape, line: usize) -> Self {
        Self { shape, line_start: line, line_end: line }
    }

    /// 複数行ブロックのスパン
    #[inline]
    pub const fn multi_line(line_start: usize, line_end: usize) -> Self {
        Self { shape: CommentShape::BlockMultiLine, line_start, line_end }
    }

    /// 覆っている行インデックス
    pub fn lines(&self) -> std::ops::RangeInclusive<usize> {
        self.line_start..=self.line_end
    }
}

/// いずれかのスパンに覆われている行の数 (重複は 1 回だけ数える)
pub fn unique_comment_lines(spans: &[CommentSpan]) -> usize {
    spans.iter().flat_map(CommentSpan::lines).collect::<BTreeSet<_>>().len()
}
