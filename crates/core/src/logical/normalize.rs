// crates/core/src/logical/normalize.rs
use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::config::CompiledRules;

fn else_if_call() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?-u:\b)(else\s+if)\s*\([^)]*\)").unwrap())
}

fn identifier_call() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\([^)]*\)").unwrap())
}

/// 引数リストをプレースホルダに置き換える
///
/// 1. `else if (...)` → `else if()`
/// 2. `name(...)` → 制御キーワードなら `name()`、それ以外は `func()`
///
/// 括弧の対応は取らず、最初の `)` までを引数とみなします。
pub fn normalize_line<'a>(line: &'a str, rules: &CompiledRules) -> Cow<'a, str> {
    let collapsed = else_if_call().replace_all(line, "else if()");
    let call_re = identifier_call();
    if !call_re.is_match(&collapsed) {
        return collapsed;
    }

    let normalized = call_re.replace_all(&collapsed, |caps: &Captures<'_>| {
        let name = &caps[1];
        if rules.is_call_keyword(name) {
            format!("{name}()")
        } else {
            rules.placeholder().to_string()
        }
    });
    Cow::Owned(normalized.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(line: &str) -> String {
        normalize_line(line, &CompiledRules::default()).into_owned()
    }

    #[test]
    fn control_keyword_keeps_its_name() {
        assert_eq!(norm("if (x > 0) { return x; }"), "if() { return x; }");
        assert_eq!(norm("while(i < n) {"), "while() {");
    }

    #[test]
    fn generic_call_becomes_placeholder() {
        assert_eq!(norm("doWork(a, b);"), "func();");
        assert_eq!(norm("console.log(x);"), "console.func();");
    }

    #[test]
    fn else_if_is_collapsed() {
        assert_eq!(norm("} else if (x > 1) {"), "} else if() {");
        // 最初の `)` で引数が終わる
        assert_eq!(norm("} else if (ready(x)) {"), "} else if()) {");
    }

    #[test]
    fn identifier_with_keyword_prefix_is_a_call() {
        assert_eq!(norm("ifOk(value);"), "func();");
    }

    #[test]
    fn require_is_kept() {
        assert_eq!(norm("const fs = require('fs');"), "const fs = require();");
    }

    #[test]
    fn line_without_calls_is_borrowed() {
        let rules = CompiledRules::default();
        assert!(matches!(normalize_line("let a = b + c;", &rules), Cow::Borrowed(_)));
    }
}
