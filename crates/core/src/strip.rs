//! コメント行・空行の除去
//!
//! インラインのコメントは該当部分だけを削り、それ以外の形状はスパンが覆う行を
//! 丸ごと空にします。すべてのスパンを適用してから空行を落とします。

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::comment::{CommentShape, CommentSpan};

fn inline_line_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"//.*").unwrap())
}

/// 行内ブロックは最初の `/*` から最後の `*/` までを削る (最長一致)
fn inline_block_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/\*.*\*/").unwrap())
}

/// コメントを取り除いたコード行を元の順序で返す
pub fn strip_comments<'a, S: AsRef<str>>(lines: &'a [S], spans: &[CommentSpan]) -> Vec<Cow<'a, str>> {
    let mut cleaned: Vec<Cow<'a, str>> = lines.iter().map(|l| Cow::Borrowed(l.as_ref())).collect();

    for span in spans {
        match span.shape {
            CommentShape::SingleLineInline | CommentShape::BlockInline => {
                let Some(line) = cleaned.get_mut(span.line_start) else {
                    continue;
                };
                let pattern = if span.shape == CommentShape::BlockInline {
                    inline_block_comment()
                } else {
                    inline_line_comment()
                };
                let trimmed = pattern.replace(&**line, "").trim_end().to_string();
                *line = Cow::Owned(trimmed);
            }
            CommentShape::SingleLineFull | CommentShape::BlockSingleLine | CommentShape::BlockMultiLine => {
                let end = span.line_end.min(cleaned.len().saturating_sub(1));
                for line in cleaned.iter_mut().take(end + 1).skip(span.line_start) {
                    *line = Cow::Borrowed("");
                }
            }
        }
    }

    cleaned.retain(|line| !line.trim().is_empty());
    cleaned
}
