// crates/core/src/comment/scanner.rs
use std::sync::OnceLock;

use regex::Regex;

use super::{CommentShape, CommentSpan};

/// 同一行で完結する `/* ... */` (最短一致)
pub(crate) fn same_line_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").unwrap())
}

/// コメント検出器
///
/// 行を 1 本ずつ [`process_line`](Self::process_line) に渡し、最後に
/// [`finish`](Self::finish) でスパン列を受け取ります。
/// 閉じないまま入力が終わったブロックはスパンを生成しません。
#[derive(Debug, Default)]
pub struct CommentScanner {
    in_block_comment: bool,
    block_start_line: usize,
    spans: Vec<CommentSpan>,
}

impl CommentScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 行を処理する。`index` は 0 始まりの行番号
    pub fn process_line(&mut self, index: usize, line: &str) {
        if self.in_block_comment {
            // 閉じ記号の後ろは走査しない
            if line.contains("*/") {
                self.spans.push(CommentSpan::multi_line(self.block_start_line, index));
                self.in_block_comment = false;
            }
            return;
        }

        let block_re = same_line_block();
        for m in block_re.find_iter(line) {
            let shape = if line[..m.start()].trim().is_empty() {
                CommentShape::BlockSingleLine
            } else {
                CommentShape::BlockInline
            };
            self.spans.push(CommentSpan::single(shape, index));
        }
        let without_blocks = block_re.replace_all(line, "");

        if without_blocks.trim_start().starts_with("//") {
            self.spans.push(CommentSpan::single(CommentShape::SingleLineFull, index));
        } else if without_blocks.contains("//") {
            self.spans.push(CommentSpan::single(CommentShape::SingleLineInline, index));
        }

        // 開始判定は元の行に対して行う
        if line.trim().starts_with("/*") && !line.contains("*/") {
            self.in_block_comment = true;
            self.block_start_line = index;
        }
    }

    /// ブロックコメント内かどうか
    pub fn is_in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    pub fn finish(self) -> Vec<CommentSpan> {
        self.spans
    }
}

/// 行の並びからコメントスパンを検出順に返す
pub fn scan_comments<S: AsRef<str>>(lines: &[S]) -> Vec<CommentSpan> {
    let mut scanner = CommentScanner::new();
    for (index, line) in lines.iter().enumerate() {
        scanner.process_line(index, line.as_ref());
    }
    scanner.finish()
}
