use jsloc_core::metrics::allowed_blank_lines;
use jsloc_core::{
    CommentShape, CompiledRules, DirectorySummary, analyze_lines, count_logical_lines, scan_comments, strip_comments,
};
use proptest::prelude::*;

/// JavaScript らしい断片を組み合わせた行
fn js_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("// note".to_string()),
        Just("  /* block */".to_string()),
        Just("/* open".to_string()),
        Just("close */".to_string()),
        Just("let x = f(a, b); // trailing".to_string()),
        Just("if (x) { return y; }".to_string()),
        Just("} else if (z) {".to_string()),
        Just("call(); /* why */ more();".to_string()),
        Just("const o = { a: 1 };".to_string()),
        "[a-z{}();/* ]{0,24}",
    ]
}

proptest! {
    #[test]
    fn physical_plus_excess_equals_total(lines in prop::collection::vec(js_line(), 0..60)) {
        let result = analyze_lines(&lines, &CompiledRules::default());
        let m = result.metrics;
        let excess = m.blank_lines.value().saturating_sub(allowed_blank_lines(m.total_lines.value()));
        prop_assert_eq!(m.physical_lines.value() + excess, m.total_lines.value());
        prop_assert!(m.physical_lines <= m.total_lines);
    }

    #[test]
    fn logical_total_is_sum_of_categories(lines in prop::collection::vec(js_line(), 0..60)) {
        let counts = count_logical_lines(&lines, &CompiledRules::default());
        prop_assert_eq!(counts.total(), counts.iter().map(|(_, n)| n).sum::<usize>());
    }

    #[test]
    fn spans_are_well_formed(lines in prop::collection::vec(js_line(), 0..60)) {
        for span in scan_comments(&lines) {
            prop_assert!(span.line_start <= span.line_end);
            prop_assert!(span.line_end < lines.len());
            if span.shape != CommentShape::BlockMultiLine {
                prop_assert_eq!(span.line_start, span.line_end);
            }
        }
    }

    #[test]
    fn coverage_is_zero_without_physical_lines(lines in prop::collection::vec(js_line(), 0..60)) {
        let m = analyze_lines(&lines, &CompiledRules::default()).metrics;
        if m.physical_lines.is_zero() {
            prop_assert_eq!(m.comment_coverage_percent, 0.0);
        }
    }

    #[test]
    fn directory_sloc_is_sum_of_files(files in prop::collection::vec(prop::collection::vec(js_line(), 0..30), 0..8)) {
        let rules = CompiledRules::default();
        let metrics: Vec<_> = files.iter().map(|f| analyze_lines(f, &rules).metrics).collect();
        let summary: DirectorySummary = metrics.iter().collect();
        let expected: usize = metrics.iter().map(|m| m.total_lines.value()).sum();
        prop_assert_eq!(summary.total_lines.value(), expected);
        prop_assert_eq!(summary.kilo_lines, expected as f64 / 1000.0);
        prop_assert_eq!(summary.files, files.len());
    }
}

#[test]
fn rescanning_stripped_lines_finds_no_whole_line_comments() {
    let lines = [
        "// header",
        "/* a */",
        "/*",
        " * doc",
        " */",
        "let x = 1; // set x",
        "call(); /* inline */",
        "",
    ];
    let spans = scan_comments(&lines);
    let cleaned = strip_comments(&lines, &spans);
    assert_eq!(cleaned, vec!["let x = 1;", "call();"]);

    let rescanned = scan_comments(&cleaned);
    assert!(rescanned.iter().all(|s| !matches!(
        s.shape,
        CommentShape::SingleLineFull | CommentShape::BlockSingleLine | CommentShape::BlockMultiLine
    )));
}
