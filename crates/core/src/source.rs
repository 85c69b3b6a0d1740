//! 行分割

/// テキストを行に分割する
///
/// `\n` で区切り、各行末の `\r` を 1 つ取り除きます (`\r\n` と `\n` を同一視)。
/// 末尾の改行の後ろにも空行が 1 つ残り、空のテキストは空行 1 つになります。
/// 先頭の BOM (U+FEFF) は 1 つだけ取り除きます。
pub fn split_lines(text: &str) -> Vec<&str> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_both_line_endings() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn trailing_newline_yields_empty_last_line() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines("a\r\n"), vec!["a", ""]);
    }

    #[test]
    fn leading_bom_is_removed_once() {
        assert_eq!(split_lines("\u{FEFF}// a\nb"), vec!["// a", "b"]);
        assert_eq!(split_lines("\u{FEFF}\u{FEFF}x"), vec!["\u{FEFF}x"]);
        assert_eq!(split_lines("\u{FEFF}"), vec![""]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn lone_carriage_return_is_kept_inside_line() {
        assert_eq!(split_lines("a\rb"), vec!["a\rb"]);
    }
}
