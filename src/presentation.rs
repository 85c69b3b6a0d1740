// src/presentation.rs
use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use jsloc_core::{Category, DirectorySummary, LineMetrics, LogicalCounts};
use jsloc_engine::{FileAnalysis, RunResult};
use serde::Serialize;

use crate::options::{OutputFormat, RenderOptions};

const METRIC_HEADERS: [&str; 6] =
    ["SLOC", "Blank LOCs", "Physical SLOC", "Logical SLOC", "CLOC, C & SLOC", "Comment Coverage %"];

#[derive(Serialize)]
struct FileRow<'a> {
    #[serde(flatten)]
    metrics: &'a LineMetrics,
    #[serde(rename = "Logical Breakdown", skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a LogicalCounts>,
}

impl<'a> FileRow<'a> {
    fn new(analysis: &'a FileAnalysis, options: &RenderOptions) -> Self {
        Self { metrics: &analysis.metrics, breakdown: options.breakdown.then_some(&analysis.logical) }
    }
}

#[derive(Serialize)]
struct DirectoryReport<'a> {
    #[serde(rename = "Directory Summary")]
    summary: &'a DirectorySummary,
    #[serde(rename = "Logical Breakdown", skip_serializing_if = "Option::is_none")]
    breakdown: Option<LogicalCounts>,
    #[serde(rename = "Detailed Results", skip_serializing_if = "Option::is_none")]
    files: Option<Vec<FileRow<'a>>>,
}

/// 単一ファイルの結果を出力する
///
/// # Errors
///
/// 書き込みまたはシリアライズに失敗した場合。
pub fn render_file(out: &mut dyn Write, analysis: &FileAnalysis, options: &RenderOptions) -> io::Result<()> {
    let row = FileRow::new(analysis, options);
    match options.format {
        OutputFormat::Table => {
            let mut table = new_table();
            table.set_header(row_header(options));
            table.add_row(row_cells(analysis, options));
            writeln!(out, "{table}")
        }
        OutputFormat::Json => write_json_pretty(out, &row),
        OutputFormat::Jsonl => write_json_line(out, &row, "file"),
        OutputFormat::Yaml => write_yaml(out, &row),
        OutputFormat::Csv => {
            writeln!(out, "{}", csv_line(row_header(options)))?;
            writeln!(out, "{}", csv_line(row_values(analysis, options)))
        }
        OutputFormat::Md => {
            writeln!(out, "### File Metrics")?;
            writeln!(out)?;
            write_markdown_rows(out, &row_header(options), std::slice::from_ref(analysis), options)
        }
    }
}

/// ディレクトリの結果を出力する (集計 → ファイル別)
///
/// # Errors
///
/// 書き込みまたはシリアライズに失敗した場合。
pub fn render_directory(out: &mut dyn Write, result: &RunResult, options: &RenderOptions) -> io::Result<()> {
    let breakdown = options.breakdown.then(|| result.logical_totals());
    match options.format {
        OutputFormat::Table => print_table(out, result, breakdown.as_ref(), options),
        OutputFormat::Json | OutputFormat::Yaml => {
            let report = DirectoryReport {
                summary: &result.summary,
                breakdown,
                files: (!options.summary_only)
                    .then(|| result.files.iter().map(|f| FileRow::new(f, options)).collect()),
            };
            if options.format == OutputFormat::Json {
                write_json_pretty(out, &report)
            } else {
                write_yaml(out, &report)
            }
        }
        OutputFormat::Jsonl => {
            if !options.summary_only {
                for analysis in &result.files {
                    write_json_line(out, &FileRow::new(analysis, options), "file")?;
                }
            }
            let mut summary = serde_json::to_value(&result.summary)?;
            if let (Some(obj), Some(counts)) = (summary.as_object_mut(), breakdown) {
                obj.insert("Logical Breakdown".to_string(), serde_json::to_value(counts)?);
            }
            write_json_line(out, &summary, "summary")
        }
        OutputFormat::Csv => print_csv(out, result, breakdown.as_ref(), options),
        OutputFormat::Md => print_markdown(out, result, breakdown.as_ref(), options),
    }
}

/// 実行中のエラーを 1 行ずつ出力する
///
/// # Errors
///
/// 書き込みに失敗した場合。
pub fn report_errors(err: &mut dyn Write, result: &RunResult) -> io::Result<()> {
    for (path, error) in &result.errors {
        writeln!(err, "Error in file: {}: {error}", path.display())?;
    }
    Ok(())
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table
}

fn file_label(analysis: &FileAnalysis) -> String {
    analysis.path().map(|p| p.display().to_string()).unwrap_or_default()
}

fn row_header(options: &RenderOptions) -> Vec<String> {
    let mut header = vec!["file".to_string()];
    header.extend(METRIC_HEADERS.iter().map(|h| (*h).to_string()));
    if options.breakdown {
        header.extend(Category::ALL.iter().map(|c| c.name().to_string()));
    }
    header
}

fn row_values(analysis: &FileAnalysis, options: &RenderOptions) -> Vec<String> {
    let m = &analysis.metrics;
    let mut values = vec![
        file_label(analysis),
        m.total_lines.to_string(),
        m.blank_lines.to_string(),
        m.physical_lines.to_string(),
        m.logical_lines.to_string(),
        m.unique_comment_lines.to_string(),
        m.comment_coverage_percent.to_string(),
    ];
    if options.breakdown {
        values.extend(analysis.logical.iter().map(|(_, n)| n.to_string()));
    }
    values
}

fn row_cells(analysis: &FileAnalysis, options: &RenderOptions) -> Vec<Cell> {
    row_values(analysis, options)
        .into_iter()
        .enumerate()
        .map(|(i, v)| if i == 0 { Cell::new(v) } else { Cell::new(v).set_alignment(CellAlignment::Right) })
        .collect()
}

/// 集計の (キー, 値) 一覧
fn summary_pairs(summary: &DirectorySummary) -> Vec<(&'static str, String)> {
    vec![
        ("Files", summary.files.to_string()),
        ("SLOC", summary.total_lines.to_string()),
        ("Blank LOCs", summary.blank_lines.to_string()),
        ("Physical SLOC", summary.physical_lines.to_string()),
        ("Logical SLOC", summary.logical_lines.to_string()),
        ("CLOC, C & SLOC", summary.unique_comment_lines.to_string()),
        ("KLOC", summary.kilo_lines.to_string()),
        ("Average Comment Coverage", format!("{:.2}", summary.average_comment_coverage)),
    ]
}

fn print_table(
    out: &mut dyn Write,
    result: &RunResult,
    breakdown: Option<&LogicalCounts>,
    options: &RenderOptions,
) -> io::Result<()> {
    let mut summary = new_table();
    summary.set_header(vec!["(index)", "Values"]);
    for (key, value) in summary_pairs(&result.summary) {
        summary.add_row(vec![Cell::new(key), Cell::new(value).set_alignment(CellAlignment::Right)]);
    }
    writeln!(out, "Directory Summary:")?;
    writeln!(out, "{summary}")?;

    if let Some(counts) = breakdown {
        let mut table = new_table();
        table.set_header(vec!["category", "count"]);
        for (category, n) in counts.iter() {
            table.add_row(vec![Cell::new(category.name()), Cell::new(n).set_alignment(CellAlignment::Right)]);
        }
        writeln!(out, "Logical Breakdown:")?;
        writeln!(out, "{table}")?;
    }

    if options.summary_only {
        return Ok(());
    }

    let mut details = new_table();
    details.set_header(row_header(options));
    for analysis in &result.files {
        details.add_row(row_cells(analysis, options));
    }
    writeln!(out, "Detailed Results:")?;
    writeln!(out, "{details}")
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> String {
    values.into_iter().map(|v| csv_field(v.as_ref())).collect::<Vec<_>>().join(",")
}

/// CSV: ファイル別の行と、最後に集計の TOTAL 行
fn print_csv(
    out: &mut dyn Write,
    result: &RunResult,
    breakdown: Option<&LogicalCounts>,
    options: &RenderOptions,
) -> io::Result<()> {
    writeln!(out, "{}", csv_line(row_header(options)))?;
    if !options.summary_only {
        for analysis in &result.files {
            writeln!(out, "{}", csv_line(row_values(analysis, options)))?;
        }
    }

    let s = &result.summary;
    let mut total = vec![
        "TOTAL".to_string(),
        s.total_lines.to_string(),
        s.blank_lines.to_string(),
        s.physical_lines.to_string(),
        s.logical_lines.to_string(),
        s.unique_comment_lines.to_string(),
        format!("{:.2}", s.average_comment_coverage),
    ];
    if let Some(counts) = breakdown {
        total.extend(counts.iter().map(|(_, n)| n.to_string()));
    }
    writeln!(out, "{}", csv_line(total))
}

fn md_escape(value: &str) -> String {
    value.replace('|', "\\|")
}

fn write_markdown_rows(
    out: &mut dyn Write,
    header: &[String],
    files: &[FileAnalysis],
    options: &RenderOptions,
) -> io::Result<()> {
    let cells: Vec<String> = header.iter().map(|h| md_escape(h)).collect();
    writeln!(out, "| {} |", cells.join(" | "))?;
    let separator: Vec<&str> = (0..header.len()).map(|i| if i == 0 { ":---" } else { "---:" }).collect();
    writeln!(out, "|{}|", separator.join("|"))?;
    for analysis in files {
        let values: Vec<String> = row_values(analysis, options).iter().map(|v| md_escape(v)).collect();
        writeln!(out, "| {} |", values.join(" | "))?;
    }
    writeln!(out)
}

fn print_markdown(
    out: &mut dyn Write,
    result: &RunResult,
    breakdown: Option<&LogicalCounts>,
    options: &RenderOptions,
) -> io::Result<()> {
    writeln!(out, "### Directory Summary")?;
    writeln!(out)?;
    writeln!(out, "| Key | Value |")?;
    writeln!(out, "|:---|---:|")?;
    for (key, value) in summary_pairs(&result.summary) {
        writeln!(out, "| {key} | {value} |")?;
    }
    if let Some(counts) = breakdown {
        for (category, n) in counts.iter() {
            writeln!(out, "| {} | {n} |", category.name())?;
        }
    }
    writeln!(out)?;

    if options.summary_only {
        return Ok(());
    }
    writeln!(out, "### Detailed Results")?;
    writeln!(out)?;
    write_markdown_rows(out, &row_header(options), &result.files, options)
}

fn write_json_pretty<T: Serialize>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn write_json_line<T: Serialize>(out: &mut dyn Write, value: &T, kind: &str) -> io::Result<()> {
    let mut value = serde_json::to_value(value)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("type".to_string(), kind.into());
    }
    serde_json::to_writer(&mut *out, &value)?;
    writeln!(out)
}

fn write_yaml<T: Serialize>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_yaml::to_writer(&mut *out, value).map_err(io::Error::other)
}
